//! # Recipe Book
//!
//! > **An interactive console for recording recipes and their calories.**
//!
//! Recipes are entered through a numbered menu, kept in an in-memory catalog
//! for the lifetime of the process, listed alphabetically and viewed by name.
//! Each recipe derives its total calories from its ingredients, and adding a
//! recipe above 300 calories prints a warning.
//!
//! ## 🏗️ Design
//!
//! The catalog is an actor: a [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task owns every stored [`Recipe`](model::Recipe)
//! and serves requests one at a time. The session only ever talks to it
//! through a [`CatalogClient`](clients::CatalogClient) and awaits each reply
//! before reading the next line, so the program behaves strictly sequentially.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic append-only catalog actor, its messages and its client.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor), [`mock`](framework::mock).
//!
//! ### 2. The Data ([`model`])
//! [`Ingredient`](model::Ingredient), [`Recipe`](model::Recipe) (calorie total and recipe card rendering)
//! and [`RecipeListing`](model::RecipeListing).
//!
//! ### 3. The Catalog ([`recipe_actor`], [`clients`])
//! `Recipe` as an actor entity, the calorie actions and the domain client.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Starts and stops the catalog actor; sets up `tracing`.
//!
//! ### 5. The Front End ([`session`])
//! The menu loop: add, list, view, exit.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs on stderr
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod recipe_actor;
pub mod session;
