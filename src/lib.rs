//! Split Bill TUI - track who owes whom among a group of friends
//!
//! This library provides the friend ledger, the add-friend and split-bill
//! forms, an assistant bridge exposing the ledger to a conversational
//! assistant, and the terminal UI tying them together.

pub mod assistant;
pub mod forms;
pub mod ledger;
pub mod logging;
pub mod ui;
