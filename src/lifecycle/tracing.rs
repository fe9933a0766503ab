//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that hides the crate/module prefix (`with_target(false)`)
//! - **stderr output**, so log lines never mix with the menu dialogue on stdout
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final catalog size
//! - **Catalog Operations**: Create, Get, FindByName, ListNames and Actions
//! - **Session Flow**: Menu choices, recipes added, calorie warnings, parse failures
//!
//! ## Usage Examples
//!
//! ```bash
//! # Quiet (default): only errors
//! cargo run
//!
//! # Recipes added and calorie warnings
//! RUST_LOG=info cargo run
//!
//! # Full payloads, including every recipe sent to the catalog
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=recipe_book::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, adding a heavy recipe shows:
//!
//! ```text
//! INFO Actor started entity_type="Recipe"
//! INFO add_recipe: Created entity_type="Recipe" id=recipe_1 size=1
//! INFO add_recipe: Recipe added recipe=Lasagne id=recipe_1
//! INFO warn_if_over_calorie_threshold: Action ok entity_type="Recipe" id=recipe_1
//! WARN warn_if_over_calorie_threshold: Calorie threshold exceeded recipe=Lasagne total=820
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "add_recipe:")
        .init();
}
