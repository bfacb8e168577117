// Cookie-consent flag persistence
//
// One boolean, stored as a string flag in a file under the user's config
// directory. Lifecycle: read once at startup, written once on acceptance,
// never cleared by this application. The TUI shows the consent banner
// until the flag exists.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the persisted flag, relative to the config directory
const CONSENT_FILE: &str = "consent";

/// String flag recorded on acceptance
const ACCEPTED_VALUE: &str = "true";

/// Handle to the persisted consent flag
#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
}

impl ConsentStore {
    /// Store rooted at the default config directory (~/.config/kiosk)
    pub fn from_default_dir() -> Option<Self> {
        dirs::home_dir().map(|home| Self::in_dir(home.join(".config").join("kiosk")))
    }

    /// Store rooted at an explicit directory (used by tests)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CONSENT_FILE),
        }
    }

    /// Whether consent was previously recorded
    ///
    /// Any unreadable or unexpected file content counts as not accepted;
    /// the banner shows again rather than assuming consent.
    pub fn is_accepted(&self) -> bool {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim() == ACCEPTED_VALUE,
            Err(_) => false,
        }
    }

    /// Record acceptance
    pub fn accept(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create consent directory")?;
        }
        std::fs::write(&self.path, ACCEPTED_VALUE).context("Failed to write consent flag")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> ConsentStore {
        let dir = std::env::temp_dir().join(format!("kiosk-consent-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        ConsentStore::in_dir(dir)
    }

    #[test]
    fn test_unaccepted_on_first_run() {
        let store = temp_store("first-run");
        assert!(!store.is_accepted());
    }

    #[test]
    fn test_accept_persists_across_instances() {
        let store = temp_store("persist");
        store.accept().unwrap();
        assert!(store.is_accepted());

        // A fresh instance pointed at the same path sees the flag
        let reopened = ConsentStore { path: store.path.clone() };
        assert!(reopened.is_accepted());
    }

    #[test]
    fn test_unexpected_content_counts_as_unaccepted() {
        let store = temp_store("garbage");
        std::fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        std::fs::write(&store.path, "maybe").unwrap();
        assert!(!store.is_accepted());
    }
}
