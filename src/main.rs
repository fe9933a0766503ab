use recipe_book::lifecycle::tracing::setup_tracing;
use recipe_book::lifecycle::RecipeSystem;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();
    info!("Starting recipe book");

    RecipeSystem::new()
        .run_session(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Application completed successfully");
    Ok(())
}
