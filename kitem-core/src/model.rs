//! Persisted records, independent of how they are stored.

use crate::choices::{Category, Difficulty, RecipeKind, ReportReason};
use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

pub type UserId = i32;
pub type IngredientId = i32;
pub type RecipeId = i32;
pub type RecipeIngredientId = i32;
pub type FavoriteId = i32;
pub type ShoppingListId = i32;
pub type ShoppingListItemId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub prep_time: NaiveTime,
    pub difficulty: Difficulty,
    pub kind: Option<RecipeKind>,
    pub dietary_restriction: Option<String>,
    pub category: Category,
    pub image_url: Option<String>,
    pub view_count: i32,
}

/// Validated recipe fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub prep_time: NaiveTime,
    pub difficulty: Difficulty,
    pub kind: Option<RecipeKind>,
    pub dietary_restriction: Option<String>,
    pub category: Category,
    pub image_url: Option<String>,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            user_id: recipe.user_id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            difficulty: recipe.difficulty,
            kind: recipe.kind,
            dietary_restriction: recipe.dietary_restriction.clone(),
            category: recipe.category,
            image_url: recipe.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub id: RecipeIngredientId,
    pub recipe_id: RecipeId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipeIngredient {
    pub recipe_id: RecipeId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
}

/// A report against a recipe. Exposed by `unique_id`, never by its row key.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub unique_id: Uuid,
    pub recipe_id: RecipeId,
    pub reporter_id: UserId,
    pub reason: ReportReason,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A report joined with the names shown alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDetails {
    pub report: Report,
    pub reporter_username: String,
    pub recipe_title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub recipe_id: RecipeId,
    pub reporter_id: UserId,
    pub reason: ReportReason,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: ShoppingListId,
    pub user_id: UserId,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: ShoppingListItemId,
    pub list_id: ShoppingListId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
    pub purchased: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingListItem {
    pub list_id: ShoppingListId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
    pub purchased: bool,
}

/// Item totals for one shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemCounts {
    pub total: i64,
    pub purchased: i64,
}
