//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zentiment
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! All effectful host interaction happens here; the library layer stays pure:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │   Zellij Main Thread                 │
//! │  ┌──────────────────┐                │
//! │  │  State (plugin)  │ ← UI state,    │
//! │  └──────────────────┘   key mapping  │
//! │          │                           │
//! │          │ web_request / set_timeout │
//! │          ▼                           │
//! │  ┌──────────────────┐                │
//! │  │  Zellij host     │ ← HTTP fetch,  │
//! │  │  runtime         │   timers       │
//! │  └──────────────────┘                │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Timer`, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Update**: Translate host events to library events, execute actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Enter)` → `Event::Submit` (while editing the topic)
//! - `Key(char)` → `Event::Char` (topic or filter input) or a browse command
//! - `Timer` → `Event::PhaseTick` (cosmetic loading phase advance)
//! - `WebRequestResult` → `Event::Response` (tagged with the request context)
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! While editing the topic:
//! - `Enter`: Submit the search
//! - `Esc`: Back to the loaded results
//!
//! While browsing results:
//! - `j`/`k`/arrows: Scroll
//! - `Tab`/`o`/`a`/`m`: Switch views
//! - `/`: Edit the topic
//! - `f`: Filter the current list
//! - `q`: Close the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zentiment::{handle_event, Action, Config, Event, FilterFocus, InputMode, RequestContext};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific concerns: key
/// mapping, permission handling, and action execution against the host API.
struct State {
    /// Core application state from the library layer.
    app: zentiment::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zentiment::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing, creates application state, requests permissions, and
    /// subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` only; the single web request per search is the
    /// plugin's only effect outside its own pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zentiment::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
        self.app = zentiment::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::PhaseTick,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(&permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zentiment::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Routing depends on the input mode: while the topic or filter input has
    /// focus, printable characters become `Char` events; while browsing they
    /// are commands.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = matches!(
            self.app.input_mode,
            InputMode::Query | InputMode::Filter(FilterFocus::Typing)
        );

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => match self.app.input_mode {
                InputMode::Query => Event::Submit,
                InputMode::Filter(FilterFocus::Typing) => Event::FocusResults,
                _ => return None,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Filter(_) => Event::ExitFilter,
                _ => Event::Escape,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Tab if !typing => Event::NextView,
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::EditQuery,
            BareKey::Char('f') => match self.app.input_mode {
                InputMode::Filter(FilterFocus::Navigating) => Event::FocusFilterBar,
                _ => Event::FilterMode,
            },
            BareKey::Char('o') => Event::ShowOverview,
            BareKey::Char('a') => Event::ShowArticles,
            BareKey::Char('m') => Event::ShowMentions,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a web request completion to an application event.
    ///
    /// The context map is parsed back into the typed [`RequestContext`]; events
    /// without a valid sequence tag did not originate from this plugin's
    /// request path and are dropped.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        match RequestContext::from_map(context) {
            Some(request_context) => {
                tracing::debug!(
                    status,
                    seq = request_context.seq,
                    body_len = body.len(),
                    "web request completed"
                );
                Some(Event::Response {
                    status,
                    body,
                    context: request_context,
                })
            }
            None => {
                tracing::debug!(status, "ignoring web result without a request context");
                None
            }
        }
    }

    /// Handles permission request results.
    fn handle_permission_result(permissions: &PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - web requests available");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - searches will fail");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close the plugin pane
    /// - `FetchAnalysis`: Issue the scrape request with its context tags
    /// - `ScheduleTick`: Arm the next cosmetic phase timer
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchAnalysis { ref url, ref context } => {
                tracing::debug!(url = %url, seq = context.seq, "issuing web request");
                web_request(
                    url.clone(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    context.to_map(),
                );
            }
            Action::ScheduleTick { delay } => {
                tracing::debug!(delay = delay, "scheduling phase timer");
                set_timeout(*delay);
            }
        }
    }
}
