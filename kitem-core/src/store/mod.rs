//! Repository traits over persisted records.
//!
//! Implemented by the Postgres store in the server and by [`MemoryStore`] for
//! tests. Uniqueness and foreign keys are enforced by the implementation and
//! surface as [`StoreError`](crate::error::StoreError) variants.

mod memory;

pub use memory::MemoryStore;

use crate::error::StoreResult;
use crate::filter::{FavoriteFilter, RecipeFilter, ReportFilter, ShoppingListFilter};
use crate::model::{
    Favorite, FavoriteId, IngredientId, ItemCounts, NewFavorite, NewRecipeIngredient, NewReport,
    NewShoppingListItem, Recipe, RecipeId, RecipeIngredient, Report, ReportDetails, ShoppingList,
    ShoppingListId, ShoppingListItem, ShoppingListItemId, UserId,
};
use uuid::Uuid;

pub trait RecipeRepository {
    fn find_recipe(&self, id: RecipeId) -> StoreResult<Option<Recipe>>;

    /// Recipes matching the filter, each once, ordered by id.
    fn filter_recipes(&self, filter: &RecipeFilter) -> StoreResult<Vec<Recipe>>;

    /// Deletes the recipe along with its ingredients, favorites and reports.
    /// Returns false when there was nothing to delete.
    fn delete_recipe(&self, id: RecipeId) -> StoreResult<bool>;
}

pub trait RecipeIngredientRepository {
    fn find_recipe_ingredient(
        &self,
        recipe_id: RecipeId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<RecipeIngredient>>;

    fn insert_recipe_ingredient(&self, new: &NewRecipeIngredient)
        -> StoreResult<RecipeIngredient>;
}

pub trait FavoriteRepository {
    fn find_favorite(&self, user_id: UserId, recipe_id: RecipeId)
        -> StoreResult<Option<Favorite>>;

    fn insert_favorite(&self, new: NewFavorite) -> StoreResult<Favorite>;

    fn delete_favorite(&self, id: FavoriteId) -> StoreResult<bool>;

    /// Matching favorites with their recipes, newest first.
    fn filter_favorites(&self, filter: &FavoriteFilter) -> StoreResult<Vec<(Favorite, Recipe)>>;
}

pub trait ReportRepository {
    fn find_report(&self, unique_id: Uuid) -> StoreResult<Option<ReportDetails>>;

    fn find_report_by_pair(
        &self,
        recipe_id: RecipeId,
        reporter_id: UserId,
    ) -> StoreResult<Option<Report>>;

    fn insert_report(&self, new: &NewReport) -> StoreResult<Report>;

    /// Matching reports, newest first.
    fn filter_reports(&self, filter: &ReportFilter) -> StoreResult<Vec<ReportDetails>>;
}

pub trait ShoppingListRepository {
    /// Every list owned by the user with its item totals, ordered by id.
    fn lists_with_counts(&self, user_id: UserId)
        -> StoreResult<Vec<(ShoppingList, ItemCounts)>>;

    fn find_list_item(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>>;

    fn find_list_item_by_pair(
        &self,
        list_id: ShoppingListId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<ShoppingListItem>>;

    fn insert_list_item(&self, new: &NewShoppingListItem) -> StoreResult<ShoppingListItem>;

    /// Negates the purchased flag in one write and returns the updated item,
    /// or None if it does not exist.
    fn flip_purchased(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>>;

    fn filter_lists(
        &self,
        filter: &ShoppingListFilter,
    ) -> StoreResult<Vec<(ShoppingList, ItemCounts)>> {
        Ok(self
            .lists_with_counts(filter.user_id)?
            .into_iter()
            .filter(|(list, counts)| filter.matches(list, *counts))
            .collect())
    }
}
