use super::{store_error, PgStore};
use crate::models::{FavoriteRow, FavoriteValues, RecipeRow};
use crate::schema::{favorites, recipes};
use diesel::prelude::*;
use kitem_core::choices::Choice;
use kitem_core::error::StoreResult;
use kitem_core::filter::text::{contains_pattern, exact_pattern};
use kitem_core::model::{Favorite, FavoriteId, NewFavorite, Recipe, RecipeId, UserId};
use kitem_core::{FavoriteFilter, FavoriteRepository};

impl FavoriteRepository for PgStore<'_> {
    fn find_favorite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> StoreResult<Option<Favorite>> {
        let mut conn = self.conn()?;
        let row = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .filter(favorites::recipe_id.eq(recipe_id))
            .select(FavoriteRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?;
        Ok(row.map(Favorite::from))
    }

    fn insert_favorite(&self, new: NewFavorite) -> StoreResult<Favorite> {
        let mut conn = self.conn()?;
        diesel::insert_into(favorites::table)
            .values(FavoriteValues {
                user_id: new.user_id,
                recipe_id: new.recipe_id,
            })
            .returning(FavoriteRow::as_returning())
            .get_result(&mut conn)
            .map(Favorite::from)
            .map_err(store_error)
    }

    fn delete_favorite(&self, id: FavoriteId) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(favorites::table.find(id))
            .execute(&mut conn)
            .map_err(store_error)?;
        Ok(deleted > 0)
    }

    fn filter_favorites(&self, filter: &FavoriteFilter) -> StoreResult<Vec<(Favorite, Recipe)>> {
        let mut conn = self.conn()?;
        let mut query = favorites::table
            .inner_join(recipes::table)
            .filter(favorites::user_id.eq(filter.user_id))
            .select((FavoriteRow::as_select(), RecipeRow::as_select()))
            .into_boxed();

        if let Some(kind) = filter.kind {
            query = query.filter(recipes::kind.ilike(exact_pattern(kind.code())));
        }
        if let Some(difficulty) = filter.difficulty {
            query = query.filter(recipes::difficulty.ilike(exact_pattern(difficulty.code())));
        }
        if let Some(search) = filter.search.as_deref() {
            query = query.filter(recipes::title.ilike(contains_pattern(search)));
        }

        let rows: Vec<(FavoriteRow, RecipeRow)> = query
            .order((favorites::created_at.desc(), favorites::id.desc()))
            .load(&mut conn)
            .map_err(store_error)?;
        rows.into_iter()
            .map(|(favorite, recipe)| Ok((Favorite::from(favorite), Recipe::try_from(recipe)?)))
            .collect()
    }
}
