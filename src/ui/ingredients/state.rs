//! State for the ingredient list.

use crate::store::Ingredient;
use crate::ui::mvi::UiState;

/// Insertion-ordered collection of ingredients, unique by id.
///
/// Order is creation order: appends go to the back, and a full reset
/// takes whatever order the search result carries. Entries can only be
/// changed through the reducer, which is what keeps the id-uniqueness
/// invariant intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientListState {
    entries: Vec<Ingredient>,
}

impl UiState for IngredientListState {}

impl IngredientListState {
    pub fn entries(&self) -> &[Ingredient] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ingredient> {
        self.entries.get(index)
    }

    pub(super) fn from_entries(entries: Vec<Ingredient>) -> Self {
        Self { entries }
    }

    pub(super) fn into_entries(self) -> Vec<Ingredient> {
        self.entries
    }
}
