//! Minimal actor framework.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait for state owned by a single task
//! - [`Actor`] - The event loop
//! - [`Mailbox`] - Cloneable client half
//! - [`FrameworkError`] - Transport errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
