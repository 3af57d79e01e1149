//! Request context tags carried across the plugin/host boundary.
//!
//! Zellij attaches an opaque `BTreeMap<String, String>` context to each web
//! request and echoes it back verbatim with the result event. This module defines
//! the typed view of that map: the monotonic sequence number that identifies
//! which search a completion belongs to, the topic it was issued for, and the
//! trace identifiers that keep the request's spans linked to the submitting span.
//!
//! The sequence tag is what makes the request race resolvable: a completion
//! whose tag does not match the in-flight request is discarded without touching
//! visible state.

use std::collections::BTreeMap;

/// Map key for the sequence number.
const KEY_SEQ: &str = "seq";
/// Map key for the submitted topic.
const KEY_TOPIC: &str = "topic";
/// Map key for the trace ID.
const KEY_TRACE_ID: &str = "trace_id";
/// Map key for the parent span ID.
const KEY_PARENT_SPAN_ID: &str = "parent_span_id";

/// Distributed tracing context propagated with the request.
///
/// Captures the current trace and span IDs from OpenTelemetry so spans recorded
/// when the completion arrives can be linked back to the span that issued the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across the host boundary.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Typed view of the context map attached to one analysis request.
///
/// Built when a search is submitted and parsed back when the host delivers the
/// `WebRequestResult` event for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Monotonic tag identifying the search this request belongs to.
    pub seq: u64,

    /// Topic the request was issued for (used in logs only).
    pub topic: String,

    /// Trace identifiers, when the submitting span was sampled.
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    /// Creates a context for a new request, capturing the current trace span.
    #[must_use]
    pub fn new(seq: u64, topic: impl Into<String>) -> Self {
        Self {
            seq,
            topic: topic.into(),
            trace: TraceContext::from_current(),
        }
    }

    /// Serializes the context into the map handed to the host request API.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(KEY_SEQ.to_string(), self.seq.to_string());
        map.insert(KEY_TOPIC.to_string(), self.topic.clone());
        if let Some(trace) = &self.trace {
            map.insert(KEY_TRACE_ID.to_string(), trace.trace_id.clone());
            map.insert(KEY_PARENT_SPAN_ID.to_string(), trace.parent_span_id.clone());
        }
        map
    }

    /// Parses a context back out of the map echoed with a result event.
    ///
    /// Returns `None` when the sequence tag is missing or unparseable, which
    /// means the event was not produced by this plugin's request path and must
    /// be ignored.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let seq = map.get(KEY_SEQ)?.parse::<u64>().ok()?;
        let topic = map.get(KEY_TOPIC).cloned().unwrap_or_default();

        let trace = match (map.get(KEY_TRACE_ID), map.get(KEY_PARENT_SPAN_ID)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Some(Self { seq, topic, trace })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survives_the_map_round_trip() {
        let context = RequestContext {
            seq: 42,
            topic: "rust language".to_string(),
            trace: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };

        let parsed = RequestContext::from_map(&context.to_map()).unwrap();
        assert_eq!(parsed, context);
    }

    #[test]
    fn map_without_a_sequence_tag_is_rejected() {
        let mut map = BTreeMap::new();
        map.insert("topic".to_string(), "rust".to_string());
        assert!(RequestContext::from_map(&map).is_none());

        map.insert("seq".to_string(), "not-a-number".to_string());
        assert!(RequestContext::from_map(&map).is_none());
    }

    #[test]
    fn trace_fields_are_optional() {
        let mut map = BTreeMap::new();
        map.insert("seq".to_string(), "3".to_string());

        let parsed = RequestContext::from_map(&map).unwrap();
        assert_eq!(parsed.seq, 3);
        assert!(parsed.trace.is_none());
    }
}
