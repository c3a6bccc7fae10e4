//! Query filters: validated criteria that conjoin independent predicates.
//!
//! Each filter is parsed from query parameters before anything is executed,
//! and can be evaluated in memory with `matches` or translated into SQL by a
//! database-backed store.

mod favorite;
mod params;
mod recipe;
mod report;
mod shopping_list;
pub mod text;

pub use favorite::FavoriteFilter;
pub use params::QueryParams;
pub use recipe::RecipeFilter;
pub use report::ReportFilter;
pub use shopping_list::ShoppingListFilter;
