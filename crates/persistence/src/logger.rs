//! Append-only interaction log
//!
//! Records each request/response pair for analytics. Best-effort:
//! write failures are logged and swallowed so they can never fail a
//! chat request.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use farmwise_core::InteractionLog;

/// File-backed interaction log
pub struct FileInteractionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileInteractionLog {
    /// Open a log at `path`, creating parent directories
    pub fn new(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

impl InteractionLog for FileInteractionLog {
    fn log_interaction(&self, user_text: &str, response: &str, language: &str, intent: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!(
            "[{timestamp}] LANG: {language} | INTENT: {intent}\nUser: {user_text}\nAI: {response}\n\n"
        );

        if let Err(e) = self.append(&entry) {
            tracing::warn!(error = %e, "failed to write interaction log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_format() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileInteractionLog::new(dir.path().join("logs/interactions.log")).unwrap();

        log.log_interaction("how do I save?", "start with 10%", "english", "general");

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("LANG: english | INTENT: general"));
        assert!(contents.contains("User: how do I save?"));
        assert!(contents.contains("AI: start with 10%"));
        assert!(contents.ends_with("\n\n"));
    }

    #[test]
    fn test_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileInteractionLog::new(dir.path().join("interactions.log")).unwrap();

        log.log_interaction("first", "one", "english", "general");
        log.log_interaction("second", "two", "yoruba", "loan_inquiry");

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("User: first"));
        assert!(contents.contains("User: second"));
        assert!(contents.contains("LANG: yoruba | INTENT: loan_inquiry"));
    }
}
