//! Async bridge between the orchestrator and the remote store.
//!
//! The orchestrator pushes [`StoreCommand`]s onto a channel; the worker
//! runs each one as its own task, so requests may overlap just like the
//! UI allows, and reports completions back through the UI event channel
//! as [`StoreEvent`]s. Correlation tokens travel out and back untouched;
//! deciding whether a completion is stale is the orchestrator's call.

use std::sync::mpsc;

use uuid::Uuid;

use crate::store::{Ingredient, NewIngredient, StoreClient};
use crate::ui::events::AppEvent;

/// Commands the orchestrator issues against the store.
#[derive(Debug)]
pub enum StoreCommand {
    /// Create a record; the store assigns the id.
    Create { token: Uuid, draft: NewIngredient },

    /// Delete the record with this id.
    Delete { token: Uuid, id: String },

    /// Fetch records, optionally filtered on exact title.
    Query { filter: Option<String> },
}

/// Completions reported back to the UI loop.
#[derive(Debug)]
pub enum StoreEvent {
    Created { token: Uuid, ingredient: Ingredient },
    CreateFailed { token: Uuid, message: String },
    Deleted { token: Uuid, id: String },
    DeleteFailed { token: Uuid, message: String },
    Loaded { ingredients: Vec<Ingredient> },
}

/// Drain the command channel until every sender is gone.
pub async fn run(
    client: StoreClient,
    mut commands: tokio::sync::mpsc::Receiver<StoreCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            if let Some(event) = execute(&client, command).await {
                // The UI loop may already be gone during shutdown.
                let _ = events.send(AppEvent::Store(event));
            }
        });
    }
}

async fn execute(client: &StoreClient, command: StoreCommand) -> Option<StoreEvent> {
    match command {
        StoreCommand::Create { token, draft } => {
            match client.create_ingredient(draft).await {
                Ok(ingredient) => Some(StoreEvent::Created { token, ingredient }),
                Err(err) => {
                    tracing::warn!(token = %token, error = %err, "create request failed");
                    Some(StoreEvent::CreateFailed {
                        token,
                        message: err.user_message().to_string(),
                    })
                }
            }
        }

        StoreCommand::Delete { token, id } => match client.delete_ingredient(&id).await {
            Ok(()) => Some(StoreEvent::Deleted { token, id }),
            Err(err) => {
                tracing::warn!(token = %token, error = %err, "delete request failed");
                Some(StoreEvent::DeleteFailed {
                    token,
                    message: err.user_message().to_string(),
                })
            }
        },

        StoreCommand::Query { filter } => {
            match client.fetch_ingredients(filter.as_deref()).await {
                Ok(ingredients) => Some(StoreEvent::Loaded { ingredients }),
                Err(err) => {
                    // The search path never surfaces errors; the list
                    // simply keeps its previous contents.
                    tracing::warn!(error = %err, "ingredient query failed");
                    None
                }
            }
        }
    }
}
