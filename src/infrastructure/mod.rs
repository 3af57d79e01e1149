//! Infrastructure layer for the Zellij plugin sandbox environment.
//!
//! The plugin runs inside Zellij's WASM sandbox, where the host filesystem is
//! mounted under `/host`. This module owns the plugin's filesystem locations.

pub mod paths;

pub use paths::data_dir;
