use recipe_book::framework::mock::MockClient;
use recipe_book::clients::{ActorClient, CatalogClient};
use recipe_book::lifecycle::RecipeSystem;
use recipe_book::model::{Recipe, RecipeId};
use recipe_book::recipe_actor::{CalorieWarning, RecipeActionResult};
use recipe_book::session::{Session, SessionError, MENU};
use tokio::io::BufReader;

/// Runs a session over `input` and returns what it printed.
async fn run_session(input: &str, catalog: CatalogClient) -> (Result<(), SessionError>, String) {
    let mut output = Vec::new();
    let session = Session::new(BufReader::new(input.as_bytes()), &mut output, catalog);
    let result = session.run().await;
    (result, String::from_utf8(output).expect("Output is UTF-8"))
}

const TOAST_INPUT: &str = "1\nToast\n1\nBread\n2\nslices\n80\nGrain\n2\nToast bread\nButter it\n";

/// Pattern 1: the whole program against the real catalog actor.
#[tokio::test]
async fn test_add_then_view_recipe() {
    let system = RecipeSystem::new();

    let input = format!("{TOAST_INPUT}3\nToast\n4\n");
    let (result, output) = run_session(&input, system.catalog.clone()).await;
    result.expect("Session failed");

    let card = "Recipe: Toast\n\
                Ingredients:\n\
                2 slices of Bread\n\
                \n\
                Steps:\n\
                1. Toast bread\n\
                2. Butter it\n\
                Total Calories: 160\n";
    assert!(output.contains(card), "Missing recipe card in:\n{output}");
    assert!(output.contains("\nIngredient 1:\nName: Quantity: Unit: Calories: Food Group: "));
    assert!(output.contains("\nStep 2:\nDescription: "));
    assert!(!output.contains("Warning"));
    assert!(output.ends_with("\nExiting the program...\n"));

    let stored = system.catalog.find_by_name("Toast").await.unwrap().unwrap();
    assert_eq!(stored.steps(), ["Toast bread", "Butter it"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_heavy_recipe_prints_warning() {
    let system = RecipeSystem::new();

    let input = "1\nLasagne\n1\nPasta\n4\nsheets\n100\nGrain\n0\n4\n";
    let (result, output) = run_session(input, system.catalog.clone()).await;
    result.unwrap();

    assert!(output.contains("Warning: The total calories of recipe 'Lasagne' exceed 300.\n"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_display_lists_alphabetically() {
    let system = RecipeSystem::new();

    let input = "2\n1\nBanana Bread\n0\n0\n1\napple pie\n0\n0\n1\nCarrot Soup\n0\n0\n2\n4\n";
    let (result, output) = run_session(input, system.catalog.clone()).await;
    result.unwrap();

    assert!(output.contains("No recipes available.\n"));
    assert!(output.contains("Recipes:\nBanana Bread\nCarrot Soup\napple pie\n"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_missing_recipe_and_invalid_choice_keep_looping() {
    let system = RecipeSystem::new();

    let (result, output) = run_session("3\nGhost\n9\n4\n", system.catalog.clone()).await;
    result.unwrap();

    assert!(output.contains("Recipe not found.\n"));
    assert!(output.contains("Invalid choice. Please try again.\n"));
    // Menu shown for each of the three choices read
    assert_eq!(output.matches(MENU).count(), 3);
    assert!(system.catalog.list_names().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_number_is_fatal() {
    let system = RecipeSystem::new();

    let (result, _) = run_session("1\nSoup\nmany\n", system.catalog.clone()).await;
    match result {
        Err(SessionError::InvalidNumber { field, input, .. }) => {
            assert_eq!(field, "ingredient count");
            assert_eq!(input, "many");
        }
        other => panic!("Expected InvalidNumber, got {other:?}"),
    }

    // The partial recipe never reached the catalog
    assert!(system.catalog.list_names().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_end_of_input() {
    let system = RecipeSystem::new();

    // At the menu: clean end
    let (result, output) = run_session("", system.catalog.clone()).await;
    assert!(result.is_ok());
    assert_eq!(output, MENU);

    // In the middle of a recipe: fatal
    let (result, _) = run_session("1\nHalf\n1\nEgg\n", system.catalog.clone()).await;
    assert!(matches!(result, Err(SessionError::InputClosed)));

    system.shutdown().await.unwrap();
}

/// Pattern 2: session logic against a scripted catalog.
#[tokio::test]
async fn test_add_recipe_with_mocked_catalog() {
    let mut mock = MockClient::<Recipe>::new();
    mock.expect_create().return_ok(RecipeId(7));
    mock.expect_action(RecipeId(7))
        .return_ok(RecipeActionResult::CheckCalorieThreshold(CalorieWarning::check(
            "Stew", 450.0,
        )));

    let input = "1\nStew\n0\n1\nSimmer\n4\n";
    let (result, output) = run_session(input, CatalogClient::new(mock.client())).await;
    result.unwrap();

    assert!(output.contains("Warning: The total calories of recipe 'Stew' exceed 300.\n"));
    mock.verify();
}

#[tokio::test]
async fn test_view_recipe_with_mocked_catalog() {
    let mut mock = MockClient::<Recipe>::new();
    let mut tea = Recipe::new("Tea");
    tea.add_step("Steep");
    mock.expect_find_by_name("Tea").return_ok(Some(tea));

    let (result, output) = run_session("3\nTea\n4\n", CatalogClient::new(mock.client())).await;
    result.unwrap();

    assert!(output.contains("Recipe: Tea\nIngredients:\n\nSteps:\n1. Steep\nTotal Calories: 0\n"));
    mock.verify();
}

/// The whole program: session then shutdown, as `main` drives it.
#[tokio::test]
async fn test_run_session_reports_session_error_after_shutdown() {
    let mut output = Vec::new();
    let result = RecipeSystem::new()
        .run_session(BufReader::new("1\nSoup\nmany\n".as_bytes()), &mut output)
        .await;

    let err = result.expect_err("Malformed count must fail the run");
    match err.downcast_ref::<SessionError>() {
        Some(SessionError::InvalidNumber { input, .. }) => assert_eq!(input, "many"),
        other => panic!("Expected InvalidNumber, got {other:?}"),
    }
}

#[tokio::test]
async fn test_run_session_clean_exit() {
    let mut output = Vec::new();
    RecipeSystem::new()
        .run_session(BufReader::new("4\n".as_bytes()), &mut output)
        .await
        .expect("Clean run");

    let output = String::from_utf8(output).unwrap();
    assert!(output.ends_with("\nExiting the program...\n"));
}
