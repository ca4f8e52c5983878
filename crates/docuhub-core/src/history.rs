//! Undo/redo history for the editor buffer.

const DEFAULT_LIMIT: usize = 200;

/// Snapshot-based undo history.
///
/// Each edit records the text as it was before the edit. Loading a new
/// document clears both stacks so undo never crosses file boundaries.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo: Vec<String>,
    redo: Vec<String>,
    limit: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo steps.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record the text as it was before an edit.
    pub fn record(&mut self, previous: impl Into<String>) {
        let previous = previous.into();
        if self.undo.last() == Some(&previous) {
            return;
        }
        if self.undo.len() == self.limit {
            self.undo.remove(0);
        }
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back; returns the text to show.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo.pop()?;
        self.redo.push(current.to_string());
        Some(previous)
    }

    /// Step forward again; returns the text to show.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(current.to_string());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo() {
        let mut history = UndoHistory::new();
        history.record("a");
        history.record("ab");

        assert_eq!(history.undo("abc").as_deref(), Some("ab"));
        assert_eq!(history.undo("ab").as_deref(), Some("a"));
        assert_eq!(history.undo("a"), None);
        assert_eq!(history.redo("a").as_deref(), Some("ab"));
        assert!(history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = UndoHistory::new();
        history.record("a");
        history.undo("ab");
        assert!(history.can_redo());

        history.record("a");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear() {
        let mut history = UndoHistory::new();
        history.record("a");
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = UndoHistory::with_limit(2);
        history.record("1");
        history.record("2");
        history.record("3");

        assert_eq!(history.undo("4").as_deref(), Some("3"));
        assert_eq!(history.undo("3").as_deref(), Some("2"));
        assert_eq!(history.undo("2"), None);
    }

    #[test]
    fn test_consecutive_duplicates_are_collapsed() {
        let mut history = UndoHistory::new();
        history.record("same");
        history.record("same");

        assert!(history.undo("next").is_some());
        assert!(!history.can_undo());
    }
}
