use chrono::{DateTime, NaiveTime, Utc};
use diesel::prelude::*;
use kitem_core::choices::{Category, Choice, Difficulty, RecipeKind, ReportReason};
use kitem_core::error::StoreError;
use kitem_core::model;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password_hash: &'a str,
}

/// Partial user update; `None` fields are left untouched.
#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = crate::schema::users)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    /// Diesel refuses an UPDATE with nothing to set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password_hash.is_none()
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub prep_time: NaiveTime,
    pub difficulty: String,
    pub kind: Option<String>,
    pub dietary_restriction: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub view_count: i32,
}

/// Stored codes are guarded by CHECK constraints, so a parse failure means
/// the schema and the code disagree.
pub fn stored<C: Choice>(value: &str) -> Result<C, StoreError> {
    C::parse(value).map_err(|err| StoreError::Backend(format!("corrupt stored value: {err}")))
}

impl TryFrom<RecipeRow> for model::Recipe {
    type Error = StoreError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            difficulty: stored::<Difficulty>(&row.difficulty)?,
            kind: row.kind.as_deref().map(stored::<RecipeKind>).transpose()?,
            category: stored::<Category>(&row.category)?,
            title: row.title,
            description: row.description,
            prep_time: row.prep_time,
            dietary_restriction: row.dietary_restriction,
            image_url: row.image_url,
            view_count: row.view_count,
        })
    }
}

/// Insert and full-replace shape of a recipe.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct RecipeValues<'a> {
    pub user_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub prep_time: NaiveTime,
    pub difficulty: &'static str,
    pub kind: Option<&'static str>,
    pub dietary_restriction: Option<&'a str>,
    pub category: &'static str,
    pub image_url: Option<&'a str>,
}

impl<'a> From<&'a model::RecipeDraft> for RecipeValues<'a> {
    fn from(draft: &'a model::RecipeDraft) -> Self {
        Self {
            user_id: draft.user_id,
            title: &draft.title,
            description: &draft.description,
            prep_time: draft.prep_time,
            difficulty: draft.difficulty.code(),
            kind: draft.kind.map(RecipeKind::code),
            dietary_restriction: draft.dietary_restriction.as_deref(),
            category: draft.category.code(),
            image_url: draft.image_url.as_deref(),
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredientRow {
    pub id: i32,
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub unit: String,
}

impl From<RecipeIngredientRow> for model::RecipeIngredient {
    fn from(row: RecipeIngredientRow) -> Self {
        Self {
            id: row.id,
            recipe_id: row.recipe_id,
            ingredient_id: row.ingredient_id,
            quantity: row.quantity,
            unit: row.unit,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct RecipeIngredientValues<'a> {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub unit: &'a str,
}

impl<'a> From<&'a model::NewRecipeIngredient> for RecipeIngredientValues<'a> {
    fn from(new: &'a model::NewRecipeIngredient) -> Self {
        Self {
            recipe_id: new.recipe_id,
            ingredient_id: new.ingredient_id,
            quantity: new.quantity,
            unit: &new.unit,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FavoriteRow {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<FavoriteRow> for model::Favorite {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            recipe_id: row.recipe_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::favorites)]
pub struct FavoriteValues {
    pub user_id: i32,
    pub recipe_id: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReportRow {
    pub unique_id: Uuid,
    pub recipe_id: i32,
    pub reporter_id: i32,
    pub reason: i16,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReportRow> for model::Report {
    type Error = StoreError;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        let reason = ReportReason::from_number(row.reason).ok_or_else(|| {
            StoreError::Backend(format!("corrupt stored report reason: {}", row.reason))
        })?;
        Ok(Self {
            unique_id: row.unique_id,
            recipe_id: row.recipe_id,
            reporter_id: row.reporter_id,
            reason,
            detail: row.detail,
            created_at: row.created_at,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reports)]
pub struct NewReportRow<'a> {
    pub unique_id: Uuid,
    pub recipe_id: i32,
    pub reporter_id: i32,
    pub reason: i16,
    pub detail: Option<&'a str>,
}

/// Mutable report fields; recipe, reporter and date are fixed at creation.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reports)]
#[diesel(treat_none_as_null = true)]
pub struct ReportChanges<'a> {
    pub reason: i16,
    pub detail: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShoppingListRow {
    pub id: i32,
    pub user_id: i32,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingListRow> for model::ShoppingList {
    fn from(row: ShoppingListRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(treat_none_as_null = true)]
pub struct ShoppingListValues<'a> {
    pub user_id: i32,
    pub name: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::shopping_list_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShoppingListItemRow {
    pub id: i32,
    pub list_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
    pub purchased: bool,
}

impl From<ShoppingListItemRow> for model::ShoppingListItem {
    fn from(row: ShoppingListItemRow) -> Self {
        Self {
            id: row.id,
            list_id: row.list_id,
            ingredient_id: row.ingredient_id,
            quantity: row.quantity,
            unit: row.unit,
            price: row.price,
            purchased: row.purchased,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::shopping_list_items)]
#[diesel(treat_none_as_null = true)]
pub struct ShoppingListItemValues<'a> {
    pub list_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub unit: &'a str,
    pub price: Option<f64>,
    pub purchased: bool,
}

impl<'a> From<&'a model::NewShoppingListItem> for ShoppingListItemValues<'a> {
    fn from(new: &'a model::NewShoppingListItem) -> Self {
        Self {
            list_id: new.list_id,
            ingredient_id: new.ingredient_id,
            quantity: new.quantity,
            unit: &new.unit,
            price: new.price,
            purchased: new.purchased,
        }
    }
}
