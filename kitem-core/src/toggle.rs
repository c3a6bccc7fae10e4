//! Flip operations: favorite membership and the purchased flag.

use crate::error::{CoreError, StoreError};
use crate::model::{Favorite, NewFavorite, RecipeId, ShoppingListItem, ShoppingListItemId, UserId};
use crate::store::{FavoriteRepository, ShoppingListRepository};

pub const FAVORITE_ADDED: &str = "Receita adicionada aos favoritos.";
pub const FAVORITE_REMOVED: &str = "Receita removida dos favoritos.";
pub const ITEM_NOT_FOUND: &str = "Ingrediente não encontrado.";

#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteToggle {
    Added(Favorite),
    Removed,
}

impl FavoriteToggle {
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteToggle::Added(_) => FAVORITE_ADDED,
            FavoriteToggle::Removed => FAVORITE_REMOVED,
        }
    }
}

/// Removes the favorite if present, creates it otherwise.
///
/// When the create loses a race to a concurrent one, the winner's row is
/// reported as added. If that row is already gone again, the pair is absent
/// and the result is `Removed`.
pub fn toggle_favorite<R: FavoriteRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    recipe_id: RecipeId,
) -> Result<FavoriteToggle, CoreError> {
    if let Some(existing) = repo.find_favorite(user_id, recipe_id)? {
        repo.delete_favorite(existing.id)?;
        tracing::debug!(user_id, recipe_id, "favorite removed");
        return Ok(FavoriteToggle::Removed);
    }

    match repo.insert_favorite(NewFavorite { user_id, recipe_id }) {
        Ok(favorite) => {
            tracing::debug!(user_id, recipe_id, "favorite added");
            Ok(FavoriteToggle::Added(favorite))
        }
        Err(StoreError::UniqueViolation) => {
            tracing::debug!(user_id, recipe_id, "favorite toggle lost insert race");
            Ok(match repo.find_favorite(user_id, recipe_id)? {
                Some(favorite) => FavoriteToggle::Added(favorite),
                None => FavoriteToggle::Removed,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Flips the purchased flag and returns the updated item.
///
/// The store negates the stored value itself, so concurrent toggles never
/// lose a flip.
pub fn toggle_purchased<R: ShoppingListRepository + ?Sized>(
    repo: &R,
    item_id: ShoppingListItemId,
) -> Result<ShoppingListItem, CoreError> {
    let item = repo
        .flip_purchased(item_id)?
        .ok_or_else(|| CoreError::NotFound(ITEM_NOT_FOUND.to_string()))?;
    tracing::debug!(item_id, purchased = item.purchased, "purchased flag flipped");
    Ok(item)
}

/// Message returned alongside a toggled item.
pub fn purchased_message(item: &ShoppingListItem) -> &'static str {
    if item.purchased {
        "Ingrediente marcado como comprado."
    } else {
        "Ingrediente desmarcado."
    }
}
