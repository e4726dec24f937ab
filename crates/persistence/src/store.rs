//! Conversation stores

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use farmwise_core::{ConversationStore, Result, Turn, TurnRole};

type Memory = HashMap<String, Vec<Turn>>;

/// JSON-file-backed conversation store
///
/// The whole document is read and rewritten on each mutation, which
/// matches the small per-user histories this assistant keeps. A
/// process-wide mutex serializes file access; cross-process writers
/// are last-write-wins by contract.
pub struct FileConversationStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileConversationStore {
    /// Open a store at `path`, creating parent directories
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
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

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Memory> {
        if !self.path.exists() {
            return Ok(Memory::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Memory::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, memory: &Memory) -> Result<()> {
        let json = serde_json::to_string_pretty(memory)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ConversationStore for FileConversationStore {
    fn remember(&self, user_id: &str, role: TurnRole, content: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut memory = self.load()?;
        memory
            .entry(user_id.to_string())
            .or_default()
            .push(Turn::new(role, content));
        self.save(&memory)
    }

    fn context(&self, user_id: &str) -> Result<Vec<Turn>> {
        let _guard = self.lock.lock();
        let memory = self.load()?;
        Ok(memory.get(user_id).cloned().unwrap_or_default())
    }

    fn clear(&self, user_id: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut memory = self.load()?;
        if memory.remove(user_id).is_some() {
            self.save(&memory)?;
        }
        Ok(())
    }
}

/// In-memory conversation store for tests and ephemeral deployments
#[derive(Default)]
pub struct InMemoryConversationStore {
    memory: RwLock<Memory>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn remember(&self, user_id: &str, role: TurnRole, content: &str) -> Result<()> {
        self.memory
            .write()
            .entry(user_id.to_string())
            .or_default()
            .push(Turn::new(role, content));
        Ok(())
    }

    fn context(&self, user_id: &str) -> Result<Vec<Turn>> {
        Ok(self
            .memory
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn clear(&self, user_id: &str) -> Result<()> {
        self.memory.write().remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_read_your_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConversationStore::new(dir.path().join("memory.json")).unwrap();

        store.remember("amina", TurnRole::User, "I need a loan").unwrap();
        store
            .remember("amina", TurnRole::Assistant, "Here is how loans work")
            .unwrap();

        let context = store.context("amina").unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context[0].role, TurnRole::User);
        assert_eq!(context[0].content, "I need a loan");
        assert_eq!(context[1].role, TurnRole::Assistant);
    }

    #[test]
    fn test_file_store_users_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConversationStore::new(dir.path().join("memory.json")).unwrap();

        store.remember("amina", TurnRole::User, "hello").unwrap();
        store.remember("kwame", TurnRole::User, "hi").unwrap();

        assert_eq!(store.context("amina").unwrap().len(), 1);
        assert_eq!(store.context("kwame").unwrap().len(), 1);
        assert!(store.context("guest").unwrap().is_empty());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");

        {
            let store = FileConversationStore::new(&path).unwrap();
            store.remember("amina", TurnRole::User, "remember me").unwrap();
        }

        let reopened = FileConversationStore::new(&path).unwrap();
        let context = reopened.context("amina").unwrap();
        assert_eq!(context.len(), 1);
        assert_eq!(context[0].content, "remember me");
    }

    #[test]
    fn test_file_store_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConversationStore::new(dir.path().join("memory.json")).unwrap();

        store.remember("amina", TurnRole::User, "hello").unwrap();
        store.clear("amina").unwrap();
        assert!(store.context("amina").unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryConversationStore::new();
        store.remember("guest", TurnRole::User, "hello").unwrap();
        assert_eq!(store.context("guest").unwrap().len(), 1);
        store.clear("guest").unwrap();
        assert!(store.context("guest").unwrap().is_empty());
    }
}
