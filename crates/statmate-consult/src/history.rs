//! Conversation history storage.
//!
//! Storage is an injected seam: the engine never assumes a backend. Only an
//! in-memory store is provided; its contents live as long as the process.

use std::collections::HashMap;

use crate::message::ChatMessage;

/// Key under which the assistant's single conversation is stored.
pub const DEFAULT_HISTORY_KEY: &str = "statmate_chat_history";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("history store failure for '{key}': {message}")]
pub struct HistoryStoreError {
    pub key: String,
    pub message: String,
}

/// Key-value storage for chat histories.
pub trait HistoryStore {
    /// Loads the history stored under `key`; a missing key is an empty history.
    fn load(&self, key: &str) -> Result<Vec<ChatMessage>, HistoryStoreError>;

    /// Replaces the history stored under `key`.
    fn save(&mut self, key: &str, messages: &[ChatMessage]) -> Result<(), HistoryStoreError>;

    /// Removes the history stored under `key`.
    fn clear(&mut self, key: &str) -> Result<(), HistoryStoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    histories: HashMap<String, Vec<ChatMessage>>,
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self, key: &str) -> Result<Vec<ChatMessage>, HistoryStoreError> {
        Ok(self.histories.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, messages: &[ChatMessage]) -> Result<(), HistoryStoreError> {
        self.histories.insert(key.to_owned(), messages.to_vec());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), HistoryStoreError> {
        self.histories.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryHistoryStore::new();
        assert!(store.load(DEFAULT_HISTORY_KEY).unwrap().is_empty());
    }

    #[test]
    fn test_save_load_clear() {
        let mut store = MemoryHistoryStore::new();
        let messages = vec![ChatMessage::user("hi", vec![]), ChatMessage::model("hello")];
        store.save("a", &messages).unwrap();
        assert_eq!(store.load("a").unwrap(), messages);
        assert!(store.load("b").unwrap().is_empty());

        store.clear("a").unwrap();
        assert!(store.load("a").unwrap().is_empty());
    }
}
