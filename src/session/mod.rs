//! # Interactive Session
//!
//! The menu loop that drives the catalog from line-oriented console input.
//!
//! ```text
//! MenuPrompt ──1──▶ AddRecipeFlow ──┐
//!     │ ──2──▶ ListFlow ────────────┤
//!     │ ──3──▶ ViewFlow ────────────┴──▶ MenuPrompt
//!     └──4──▶ Exit
//! ```
//!
//! A malformed number during the add-recipe flow ends the session with
//! [`SessionError::InvalidNumber`]; the partially entered recipe is discarded.

mod console;
pub mod error;
pub mod menu;

pub use console::*;
pub use error::*;
pub use menu::*;

use crate::clients::{ActorClient, CatalogClient};
use crate::model::Recipe;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

/// One interactive session against the catalog.
pub struct Session<R, W> {
    console: Console<R, W>,
    catalog: CatalogClient,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, catalog: CatalogClient) -> Self {
        Self {
            console: Console::new(reader, writer),
            catalog,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Consumes the session so its catalog client is released on return.
    pub async fn run(mut self) -> Result<(), SessionError> {
        info!("Session started");
        loop {
            self.console.write(MENU).await?;
            let Some(line) = self.console.read_line().await? else {
                info!("Input closed, ending session");
                return Ok(());
            };

            let choice = MenuChoice::from_input(&line);
            debug!(?choice, "Menu choice");
            match choice {
                MenuChoice::AddRecipe => self.add_recipe().await?,
                MenuChoice::Display => self.display_recipes().await?,
                MenuChoice::View => self.view_recipe().await?,
                MenuChoice::Exit => {
                    self.console.write_line("\nExiting the program...").await?;
                    info!("Session ended");
                    return Ok(());
                }
                MenuChoice::Invalid(input) => {
                    debug!(%input, "Invalid menu choice");
                    self.console
                        .write_line("Invalid choice. Please try again.")
                        .await?;
                }
            }
        }
    }

    async fn add_recipe(&mut self) -> Result<(), SessionError> {
        let name = self.console.ask("\nEnter recipe name: ").await?;
        let mut recipe = Recipe::new(name);

        let ingredient_count: i32 = self
            .console
            .ask_number("\nEnter the number of ingredients: ", "ingredient count")
            .await?;
        for n in 1..=ingredient_count {
            self.console.write_line(&format!("\nIngredient {n}:")).await?;
            let name = self.console.ask("Name: ").await?;
            let quantity: f64 = self.console.ask_number("Quantity: ", "quantity").await?;
            let unit = self.console.ask("Unit: ").await?;
            let calories: i32 = self.console.ask_number("Calories: ", "calories").await?;
            let food_group = self.console.ask("Food Group: ").await?;
            recipe.add_ingredient(name, quantity, unit, calories, food_group);
        }

        let step_count: i32 = self
            .console
            .ask_number("\nEnter the number of steps: ", "step count")
            .await?;
        for n in 1..=step_count {
            self.console.write_line(&format!("\nStep {n}:")).await?;
            let description = self.console.ask("Description: ").await?;
            recipe.add_step(description);
        }

        let id = self.catalog.add_recipe(recipe).await?;
        if let Some(warning) = self.catalog.warn_if_over_calorie_threshold(id).await? {
            self.console.write_line(&warning.to_string()).await?;
        }
        Ok(())
    }

    async fn display_recipes(&mut self) -> Result<(), SessionError> {
        let listing = self.catalog.list_names().await?;
        self.console.write(&listing.to_string()).await
    }

    async fn view_recipe(&mut self) -> Result<(), SessionError> {
        let name = self
            .console
            .ask("\nEnter recipe name to view details: ")
            .await?;
        match self.catalog.find_by_name(&name).await? {
            Some(recipe) => self.console.write(&recipe.to_string()).await,
            None => {
                debug!(%name, "Recipe not found");
                self.console.write_line("Recipe not found.").await
            }
        }
    }
}
