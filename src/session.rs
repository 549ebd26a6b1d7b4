use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::GenerationResult;

/// Issued by [`GenerationSlot::begin`]; only the newest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds the latest generation for a draft and fences off late responses.
///
/// Every invocation takes a ticket before it awaits anything. When it finishes,
/// the result is installed only if no newer invocation started in the meantime,
/// so a slow provider can never overwrite what a later request produced. Failed
/// invocations simply don't commit and the previous result stays visible.
#[derive(Debug, Default)]
pub struct GenerationSlot {
    epoch: AtomicU64,
    current: RwLock<Option<GenerationResult>>,
}

impl GenerationSlot {
    pub fn begin(&self) -> Ticket {
        Ticket(self.epoch.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns false when the ticket is stale and the result was discarded.
    pub fn commit(&self, ticket: Ticket, result: GenerationResult) -> bool {
        let mut guard = self.current.write();
        // checked under the write lock so begin/commit pairs can't interleave a swap
        if self.epoch.load(Ordering::SeqCst) != ticket.0 {
            return false;
        }
        *guard = Some(result);
        true
    }

    pub fn current(&self) -> Option<GenerationResult> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(tag: &str) -> GenerationResult {
        GenerationResult { markup: format!("<p>{tag}</p>"), stylesheet: String::new() }
    }

    #[test]
    fn empty_until_first_commit() {
        let slot = GenerationSlot::default();
        assert_eq!(slot.current(), None);
        let t = slot.begin();
        assert!(slot.commit(t, result("a")));
        assert_eq!(slot.current(), Some(result("a")));
    }

    #[test]
    fn late_response_from_older_invocation_is_dropped() {
        let slot = GenerationSlot::default();
        let older = slot.begin();
        let newer = slot.begin();
        assert!(slot.commit(newer, result("new")));
        assert!(!slot.commit(older, result("old")));
        assert_eq!(slot.current(), Some(result("new")));
    }

    #[test]
    fn stale_ticket_cannot_commit_even_if_newer_failed() {
        let slot = GenerationSlot::default();
        let first = slot.begin();
        assert!(slot.commit(first, result("kept")));
        let abandoned = slot.begin();
        let _failed = slot.begin();
        assert!(!slot.commit(abandoned, result("late")));
        assert_eq!(slot.current(), Some(result("kept")));
    }
}
