//! # Id Generation
//!
//! New friends get their identity from an [`IdGenerator`] handed to whoever
//! creates them. Production code uses [`RandomIds`]; tests use
//! [`SequentialIds`] so the ids they assert on are predictable.

use super::FriendId;
use uuid::Uuid;

/// Largest integer a JSON client can hold without losing precision (2^53 - 1).
const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Source of fresh friend ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> FriendId;
}

/// Random ids drawn from a v4 UUID, folded into the JSON-safe integer range.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> FriendId {
        let (high, low) = Uuid::new_v4().as_u64_pair();
        FriendId((high ^ low) & MAX_SAFE_ID)
    }
}

/// Monotonic ids starting at a fixed value.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = FriendId(self.next);
        self.next += 1;
        id
    }
}
