//! Ingredient list feature module.
//!
//! Holds the user's ingredient collection as it is known locally:
//! replaced wholesale by search results, appended on successful create,
//! filtered on successful delete.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Ordered, id-unique ingredient collection
//! - `intent.rs` - Set / Add / Delete transitions
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::IngredientsIntent;
pub use reducer::IngredientsReducer;
pub use state::IngredientListState;
