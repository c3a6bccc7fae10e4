use super::{store_error, PgStore};
use crate::models::{RecipeIngredientRow, RecipeIngredientValues, RecipeRow};
use crate::schema::{recipe_ingredients, recipes};
use crate::{recipe_uses_ingredient, restriction_ilike_any};
use diesel::prelude::*;
use kitem_core::choices::Choice;
use kitem_core::error::StoreResult;
use kitem_core::filter::text::{contains_pattern, exact_pattern};
use kitem_core::model::{IngredientId, NewRecipeIngredient, Recipe, RecipeId, RecipeIngredient};
use kitem_core::{RecipeFilter, RecipeIngredientRepository, RecipeRepository};

/// Converts loaded rows, failing on the first corrupt one.
pub fn into_recipes(rows: Vec<RecipeRow>) -> StoreResult<Vec<Recipe>> {
    rows.into_iter().map(Recipe::try_from).collect()
}

impl RecipeRepository for PgStore<'_> {
    fn find_recipe(&self, id: RecipeId) -> StoreResult<Option<Recipe>> {
        let mut conn = self.conn()?;
        recipes::table
            .find(id)
            .select(RecipeRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?
            .map(Recipe::try_from)
            .transpose()
    }

    fn filter_recipes(&self, filter: &RecipeFilter) -> StoreResult<Vec<Recipe>> {
        let mut conn = self.conn()?;
        let mut query = recipes::table.select(RecipeRow::as_select()).into_boxed();

        if let Some(kind) = filter.kind {
            query = query.filter(recipes::kind.ilike(exact_pattern(kind.code())));
        }
        if let Some(category) = filter.category {
            query = query.filter(recipes::category.ilike(exact_pattern(category.code())));
        }
        if !filter.dietary_restrictions.is_empty() {
            let patterns: Vec<String> = filter
                .dietary_restrictions
                .iter()
                .map(|value| contains_pattern(value))
                .collect();
            query = query.filter(restriction_ilike_any!(patterns));
        }
        if let Some(difficulty) = filter.difficulty {
            query = query.filter(recipes::difficulty.ilike(exact_pattern(difficulty.code())));
        }
        if let Some(bucket) = filter.prep_time {
            let (lower, upper) = bucket.bounds();
            if let Some(lower) = lower {
                query = query.filter(recipes::prep_time.gt(lower));
            }
            if let Some(upper) = upper {
                query = query.filter(recipes::prep_time.le(upper));
            }
        }
        if !filter.ingredients.is_empty() {
            let patterns: Vec<String> = filter
                .ingredients
                .iter()
                .map(|value| contains_pattern(value))
                .collect();
            query = query.filter(recipe_uses_ingredient!(patterns));
        }
        if let Some(search) = filter.search.as_deref() {
            query = query.filter(recipes::title.ilike(contains_pattern(search)));
        }

        let rows = query
            .order(recipes::id.asc())
            .load(&mut conn)
            .map_err(store_error)?;
        into_recipes(rows)
    }

    fn delete_recipe(&self, id: RecipeId) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        // ingredients, favorites and reports go with it via ON DELETE CASCADE
        let deleted = diesel::delete(recipes::table.find(id))
            .execute(&mut conn)
            .map_err(store_error)?;
        Ok(deleted > 0)
    }
}

impl RecipeIngredientRepository for PgStore<'_> {
    fn find_recipe_ingredient(
        &self,
        recipe_id: RecipeId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<RecipeIngredient>> {
        let mut conn = self.conn()?;
        let row = recipe_ingredients::table
            .filter(recipe_ingredients::recipe_id.eq(recipe_id))
            .filter(recipe_ingredients::ingredient_id.eq(ingredient_id))
            .select(RecipeIngredientRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?;
        Ok(row.map(RecipeIngredient::from))
    }

    fn insert_recipe_ingredient(
        &self,
        new: &NewRecipeIngredient,
    ) -> StoreResult<RecipeIngredient> {
        let mut conn = self.conn()?;
        diesel::insert_into(recipe_ingredients::table)
            .values(RecipeIngredientValues::from(new))
            .returning(RecipeIngredientRow::as_returning())
            .get_result(&mut conn)
            .map(RecipeIngredient::from)
            .map_err(store_error)
    }
}
