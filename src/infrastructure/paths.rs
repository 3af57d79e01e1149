//! Filesystem locations inside the Zellij sandbox.
//!
//! In the plugin sandbox, `/host` points to the cwd of the last focused
//! terminal, or the folder where Zellij was started when that is unavailable.
//! Started from a home-directory terminal, the data directory below resolves
//! to `~/.local/share/zellij/zentiment` on the host.

use std::path::PathBuf;

/// Returns the data directory used for trace output.
///
/// The directory is `/host/.local/share/zellij/zentiment` inside the sandbox.
/// Only observability writes here; no plugin entity is persisted.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zentiment")
}
