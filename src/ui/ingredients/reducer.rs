//! Reducer for the ingredient list.

use crate::ui::mvi::Reducer;

use super::intent::IngredientsIntent;
use super::state::IngredientListState;

/// Reducer for ingredient list transitions.
///
/// Pure function; the store calls that precede `Add`/`Delete` are the
/// orchestrator's business and happen around the dispatch.
pub struct IngredientsReducer;

impl Reducer for IngredientsReducer {
    type State = IngredientListState;
    type Intent = IngredientsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            IngredientsIntent::Set { ingredients } => {
                IngredientListState::from_entries(ingredients)
            }

            IngredientsIntent::Add { ingredient } => {
                let mut entries = state.into_entries();
                entries.push(ingredient);
                IngredientListState::from_entries(entries)
            }

            IngredientsIntent::Delete { id } => {
                let mut entries = state.into_entries();
                entries.retain(|ingredient| ingredient.id != id);
                IngredientListState::from_entries(entries)
            }
        }
    }
}
