use crate::clients::CatalogClient;
use crate::session::Session;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info};

/// The runtime orchestrator for the recipe book.
///
/// `RecipeSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the catalog actor
/// - **Access**: Handing out the [`CatalogClient`] the session talks to
///
/// # Example
///
/// ```ignore
/// let system = RecipeSystem::new();
///
/// let id = system.catalog.add_recipe(recipe).await?;
/// let listing = system.catalog.list_names().await?;
///
/// system.shutdown().await?;
/// ```
pub struct RecipeSystem {
    /// Client for interacting with the catalog actor
    pub catalog: CatalogClient,

    /// Task handle of the catalog actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RecipeSystem {
    /// Creates the catalog actor and spawns it in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (catalog_actor, catalog) = crate::recipe_actor::new();
        let handle = tokio::spawn(catalog_actor.run());

        Self { catalog, handle }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor then drains its
    /// queue, leaves its loop and the task completes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.catalog);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }

    /// Runs one interactive session over `reader`/`writer`, then shuts down.
    ///
    /// The system is always shut down, even when the session fails. A session
    /// error is logged before shutdown and takes precedence over a shutdown
    /// error in the returned result.
    pub async fn run_session<R, W>(
        self,
        reader: R,
        writer: W,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let outcome = Session::new(reader, writer, self.catalog.clone())
            .run()
            .await;
        if let Err(e) = &outcome {
            error!(error = %e, "Session aborted");
        }

        let shutdown = self.shutdown().await;
        outcome?;
        shutdown?;
        Ok(())
    }
}

impl Default for RecipeSystem {
    fn default() -> Self {
        Self::new()
    }
}
