//! # UI Module
//!
//! Terminal user interface for the split-bill tracker.
//!
//! ## Components
//!
//! - [`App`] - root state: ledger, forms, focus, assistant bridge
//! - [`mod@keys`] - key press handling per focused pane
//! - [`mod@render`] - drawing functions
//! - [`config`] / [`theme`] - persisted settings and color themes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │                           │
//! │   Friends           │   Split Bill              │
//! │   (balances)        │   (when a friend is       │
//! │                     │    selected)              │
//! ├─────────────────────┤            or             │
//! │   Add Friend        │   Assistant               │
//! │   (when open)       │   (actions & context)     │
//! ├─────────────────────┴───────────────────────────┤
//! │        Footer (hints, status, : prompt)          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod keys;
pub mod render;
pub mod theme;

pub use app::App;
pub use keys::KeyOutcome;
pub use render::render;
