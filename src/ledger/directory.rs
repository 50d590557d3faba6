//! # Friend Directory
//!
//! Holds friend records in insertion order. Records are only ever appended
//! and have their balance adjusted; nothing is removed.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::avatar;

/// Opaque, unsigned identifier of a friend.
///
/// Serialized as a bare number so the assistant can pass it back as a
/// numeric `friendId` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(pub u64);

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A friend and the running balance between you.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar image URL
    pub image: String,
    /// Positive: they owe you. Negative: you owe them.
    pub balance: i64,
}

impl Friend {
    /// Create a friend with a zero balance.
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human-readable balance line, e.g. "Sarah owes you $20".
    pub fn status_line(&self) -> String {
        match self.status() {
            BalanceStatus::Owed(amount) => format!("{} owes you ${}", self.name, amount),
            BalanceStatus::Owing(amount) => format!("You owe {} ${}", self.name, amount),
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Direction of a balance, carrying its absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// The friend owes you this much
    Owed(u64),
    /// You owe the friend this much
    Owing(u64),
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: i64) -> Self {
        match balance {
            b if b > 0 => Self::Owed(b.unsigned_abs()),
            b if b < 0 => Self::Owing(b.unsigned_abs()),
            _ => Self::Even,
        }
    }
}

/// Ordered collection of friends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    friends: Vec<Friend>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_friends(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// The three friends the application starts with.
    pub fn sample() -> Self {
        let seed = [
            (118_836, "Clark", -7),
            (933_372, "Sarah", 20),
            (499_476, "Anthony", 0),
        ];

        let friends = seed
            .into_iter()
            .map(|(id, name, balance)| {
                let id = FriendId(id);
                Friend {
                    id,
                    name: name.to_string(),
                    image: avatar::with_id_param(avatar::DEFAULT_AVATAR_BASE, id),
                    balance,
                }
            })
            .collect();

        Self { friends }
    }

    /// Insert a friend at the end. Ids are not checked for uniqueness; that
    /// is up to the id generator.
    pub fn append(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the friend's balance.
    ///
    /// Unknown ids are ignored, and so is a delta that would push the
    /// balance outside `i64`; the balance is left as it was. Returns whether
    /// the balance changed.
    pub fn adjust_balance(&mut self, id: FriendId, delta: i64) -> bool {
        let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        match friend.balance.checked_add(delta) {
            Some(balance) => {
                friend.balance = balance;
                true
            }
            None => {
                warn!(%id, balance = friend.balance, delta, "Balance overflow, change ignored");
                false
            }
        }
    }

    /// Same arithmetic as [`Directory::adjust_balance`]. The assistant path
    /// settles through here with an already-negated amount.
    pub fn settle(&mut self, id: FriendId, delta: i64) -> bool {
        self.adjust_balance(id, delta)
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn as_slice(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Every record with every field, as a JSON array.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(&self.friends).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }
}
