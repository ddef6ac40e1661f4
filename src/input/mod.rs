//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> ActionRegistry::dispatch() -> Action -> App::perform() -> page mutation
//! ```
//!
//! - [`action`] - The [`Action`] enum with every user intent
//! - [`context`] - [`InputContext`] describing the mounted screen
//! - [`keybindings`] - Default key binding configuration
//! - [`registry`] - [`ActionRegistry`] for mapping keys to actions

pub mod action;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use action::Action;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::ActionRegistry;
