//! Ingredient records as the remote store sees them.

use serde::{Deserialize, Serialize};

/// A stored ingredient.
///
/// The id is assigned by the remote store on create and is opaque here;
/// it only ever flows back into delete calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub amount: f64,
}

/// A draft ingredient as entered in the form, before the store has
/// assigned an id. Doubles as the wire shape: create request body and
/// query response values are both `{title, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub title: String,
    pub amount: f64,
}

impl NewIngredient {
    /// Attach the store-assigned id, producing the list-ready record.
    pub fn with_id(self, id: String) -> Ingredient {
        Ingredient {
            id,
            title: self.title,
            amount: self.amount,
        }
    }
}
