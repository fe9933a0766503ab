//! Generic actor framework for an append-only catalog of named entries.
//!
//! This module provides the building blocks for a type-safe actor that owns
//! an insertion-ordered store and answers lookups, listings and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that catalog entries implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the ordered store
//! - [`ResourceClient`] - Type-safe handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
