//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_FILE: AtomicU32 = AtomicU32::new(0);

/// Write `content` to a fresh routes file under the system temp dir.
pub fn write_routes_file(content: &str) -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "controller-routes-{}-{}.toml",
        std::process::id(),
        n
    ));
    std::fs::write(&path, content).unwrap();
    path
}
