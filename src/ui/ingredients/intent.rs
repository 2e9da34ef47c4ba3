//! Intents for the ingredient list.

use crate::store::Ingredient;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the ingredient list reducer.
///
/// A closed set: transitions that are not listed here are
/// unrepresentable, so the reducer needs no defensive default branch.
#[derive(Debug, Clone)]
pub enum IngredientsIntent {
    /// Replace the entire list (a search result arrived).
    Set { ingredients: Vec<Ingredient> },

    /// Append one record. The caller guarantees the id is fresh; it
    /// comes straight from the store's create response.
    Add { ingredient: Ingredient },

    /// Remove the entry with this id. No-op if absent.
    Delete { id: String },
}

impl Intent for IngredientsIntent {}
