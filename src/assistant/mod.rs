//! # Assistant Bridge
//!
//! The seam between the ledger and a conversational assistant. The
//! assistant gets two things:
//!
//! - a read-only [`Readable`] context holding every friend record,
//!   republished before each frame
//! - a set of callable [`Action`]s with typed parameter lists
//!
//! ## Actions
//!
//! | Name | Parameters | Effect |
//! |------|------------|--------|
//! | `addFriend` | `name: string` | append a friend with a zero balance |
//! | `splitBill` | `friendId: number`, `amount: number` | `balance -= amount` |
//!
//! `splitBill` treats `amount` as what *you* owe, so it subtracts. The
//! split-bill form in the UI adds its delta instead. Both conventions are
//! kept as they are.
//!
//! Inside the TUI the actions can be invoked from the `:` prompt, parsed by
//! [`command::parse`].

pub mod action;
pub mod actions;
pub mod bridge;
pub mod command;

pub use action::{Action, ActionContext, ActionError, ParamKind, Parameter};
pub use actions::{register_default_actions, AddFriendAction, SplitBillAction};
pub use bridge::{AssistantBridge, LocalBridge, Readable, FRIENDS_CONTEXT_DESCRIPTION};
