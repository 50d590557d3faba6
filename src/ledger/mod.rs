//! # Ledger Module
//!
//! The in-memory state of the application: who your friends are, what each
//! of them owes you (or you owe them), and which friend is currently picked
//! for splitting a bill.
//!
//! ## Components
//!
//! - [`Directory`] - ordered list of [`Friend`] records with balance mutation
//! - [`Selection`] - the single friend targeted by the split-bill form
//! - [`IdGenerator`] - injected source of fresh [`FriendId`]s
//! - [`avatar`] - avatar URL construction
//!
//! ## Balance Convention
//!
//! | Balance | Meaning |
//! |---------|---------|
//! | `> 0` | the friend owes you |
//! | `< 0` | you owe the friend |
//! | `0` | you are even |

pub mod avatar;
pub mod directory;
pub mod ids;
pub mod selection;

pub use directory::{BalanceStatus, Directory, Friend, FriendId};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use selection::Selection;
