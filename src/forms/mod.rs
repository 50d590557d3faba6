//! # Forms
//!
//! Input state for the two transient forms. Each form owns its field
//! buffers and turns a submission into a value for the ledger; neither
//! touches the [`Directory`](crate::ledger::Directory) itself.
//!
//! Invalid submissions return `None` and leave everything untouched.

pub mod add_friend;
pub mod split_bill;

pub use add_friend::{AddFriendField, AddFriendForm};
pub use split_bill::{Payer, SplitBillField, SplitBillForm};
