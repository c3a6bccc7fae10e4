//! Creates pair-unique relations.
//!
//! Each create first looks for a row with the same pair and refuses with
//! [`CoreError::DuplicateRelation`]. The store's unique constraint still
//! decides: an insert that loses a race to a concurrent create reports the
//! same error.

use crate::error::{CoreError, StoreError};
use crate::model::{
    Favorite, NewFavorite, NewRecipeIngredient, NewReport, NewShoppingListItem, RecipeIngredient,
    Report, ShoppingListItem,
};
use crate::store::{
    FavoriteRepository, RecipeIngredientRepository, ReportRepository, ShoppingListRepository,
};

pub const DUPLICATE_FAVORITE: &str = "Esta receita já está nos favoritos do usuário.";
pub const DUPLICATE_REPORT: &str = "Você já denunciou esta receita anteriormente.";
pub const DUPLICATE_RECIPE_INGREDIENT: &str = "Este ingrediente já foi adicionado à receita.";
pub const DUPLICATE_LIST_ITEM: &str = "Este ingrediente já está na lista.";

fn duplicate(message: &str) -> CoreError {
    CoreError::DuplicateRelation(message.to_string())
}

/// Maps a lost insert race onto the duplicate error.
fn guarded<T>(result: Result<T, StoreError>, message: &str) -> Result<T, CoreError> {
    result.map_err(|err| match err {
        StoreError::UniqueViolation => duplicate(message),
        other => CoreError::Store(other),
    })
}

pub fn create_favorite<R: FavoriteRepository + ?Sized>(
    repo: &R,
    new: NewFavorite,
) -> Result<Favorite, CoreError> {
    if repo.find_favorite(new.user_id, new.recipe_id)?.is_some() {
        return Err(duplicate(DUPLICATE_FAVORITE));
    }
    let favorite = guarded(repo.insert_favorite(new), DUPLICATE_FAVORITE)?;
    tracing::debug!(
        user_id = favorite.user_id,
        recipe_id = favorite.recipe_id,
        "favorite created"
    );
    Ok(favorite)
}

pub fn create_report<R: ReportRepository + ?Sized>(
    repo: &R,
    new: &NewReport,
) -> Result<Report, CoreError> {
    if repo
        .find_report_by_pair(new.recipe_id, new.reporter_id)?
        .is_some()
    {
        return Err(duplicate(DUPLICATE_REPORT));
    }
    let report = guarded(repo.insert_report(new), DUPLICATE_REPORT)?;
    tracing::info!(
        unique_id = %report.unique_id,
        recipe_id = report.recipe_id,
        reason = report.reason.number(),
        "report filed"
    );
    Ok(report)
}

pub fn add_recipe_ingredient<R: RecipeIngredientRepository + ?Sized>(
    repo: &R,
    new: &NewRecipeIngredient,
) -> Result<RecipeIngredient, CoreError> {
    if repo
        .find_recipe_ingredient(new.recipe_id, new.ingredient_id)?
        .is_some()
    {
        return Err(duplicate(DUPLICATE_RECIPE_INGREDIENT));
    }
    guarded(
        repo.insert_recipe_ingredient(new),
        DUPLICATE_RECIPE_INGREDIENT,
    )
}

pub fn add_list_item<R: ShoppingListRepository + ?Sized>(
    repo: &R,
    new: &NewShoppingListItem,
) -> Result<ShoppingListItem, CoreError> {
    if repo
        .find_list_item_by_pair(new.list_id, new.ingredient_id)?
        .is_some()
    {
        return Err(duplicate(DUPLICATE_LIST_ITEM));
    }
    guarded(repo.insert_list_item(new), DUPLICATE_LIST_ITEM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_becomes_duplicate() {
        let result: Result<(), _> = guarded(Err(StoreError::UniqueViolation), DUPLICATE_FAVORITE);
        assert_eq!(
            result,
            Err(CoreError::DuplicateRelation(DUPLICATE_FAVORITE.to_string()))
        );
    }

    #[test]
    fn test_other_store_errors_pass_through() {
        let result: Result<(), _> = guarded(Err(StoreError::ForeignKeyViolation), DUPLICATE_REPORT);
        assert_eq!(result, Err(CoreError::Store(StoreError::ForeignKeyViolation)));
    }
}
