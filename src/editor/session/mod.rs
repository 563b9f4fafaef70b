//! Session controller for polygon authoring.
//!
//! The [`Session`] resource owns every completed polygon and the single draft
//! being drawn. All changes go through [`Session::dispatch`], a synchronous
//! command table fed by [`SessionCommand`] messages from the input systems and
//! the toolbar. Renderers only ever read the session through
//! [`Session::frame`].
//!
//! ## Module Structure
//!
//! - [`commands`] - Command, outcome and visibility types
//! - [`state`] - The `Session` resource and its operations
//! - [`systems`] - System that drains the command queue each frame
//!
//! ## Visibility
//!
//! The toolbar's `Complete` button is shown while a draft is in progress, and
//! `Copy` once at least one polygon exists. Both are derived from the session
//! on demand via [`Session::visibility`] rather than stored.

mod commands;
mod state;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports - Types
pub use commands::{CommandOutcome, SessionCommand};
pub use state::Session;

// Re-exports - Systems
pub use systems::apply_session_commands;
