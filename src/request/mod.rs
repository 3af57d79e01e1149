//! Outbound request plumbing for the analysis service.
//!
//! This module owns everything that crosses the plugin/host boundary for the one
//! web request the plugin makes: building the scrape URL with a properly escaped
//! topic parameter, and the context map that tags each request with a sequence
//! number and trace identifiers so its completion can be matched (or discarded
//! as stale) when the host delivers it back.
//!
//! # Organization
//!
//! - [`context`]: Sequence/trace tags serialized into the host request context
//! - [`endpoint`]: Scrape URL construction and escaping

pub mod context;
pub mod endpoint;

pub use context::{RequestContext, TraceContext};
pub use endpoint::scrape_url;
