use super::FriendId;

/// The friend currently targeted by the split-bill form, if any.
///
/// Refers to a friend by id only. Since friends are never removed the id
/// can't go stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<FriendId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<FriendId> {
        self.current
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.current == Some(id)
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    /// Returns whether a friend is selected afterwards.
    pub fn toggle(&mut self, id: FriendId) -> bool {
        if self.is_selected(id) {
            self.current = None;
        } else {
            self.current = Some(id);
        }
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear only when `id` is the selected friend.
    pub fn clear_if(&mut self, id: FriendId) {
        if self.is_selected(id) {
            self.current = None;
        }
    }
}
