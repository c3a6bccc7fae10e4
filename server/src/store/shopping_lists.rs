use super::{store_error, PgStore};
use crate::models::{ShoppingListItemRow, ShoppingListItemValues, ShoppingListRow};
use crate::schema::{shopping_list_items, shopping_lists};
use diesel::dsl::not;
use diesel::prelude::*;
use kitem_core::error::StoreResult;
use kitem_core::model::{
    IngredientId, ItemCounts, NewShoppingListItem, ShoppingList, ShoppingListId,
    ShoppingListItem, ShoppingListItemId, UserId,
};
use kitem_core::ShoppingListRepository;
use std::collections::HashMap;

impl ShoppingListRepository for PgStore<'_> {
    fn lists_with_counts(
        &self,
        user_id: UserId,
    ) -> StoreResult<Vec<(ShoppingList, ItemCounts)>> {
        let mut conn = self.conn()?;
        let lists: Vec<ShoppingListRow> = shopping_lists::table
            .filter(shopping_lists::user_id.eq(user_id))
            .select(ShoppingListRow::as_select())
            .order(shopping_lists::id.asc())
            .load(&mut conn)
            .map_err(store_error)?;

        let list_ids: Vec<i32> = lists.iter().map(|list| list.id).collect();
        let items: Vec<(i32, bool)> = shopping_list_items::table
            .filter(shopping_list_items::list_id.eq_any(list_ids))
            .select((shopping_list_items::list_id, shopping_list_items::purchased))
            .load(&mut conn)
            .map_err(store_error)?;

        let mut counts: HashMap<i32, ItemCounts> = HashMap::new();
        for (list_id, purchased) in items {
            let entry = counts.entry(list_id).or_default();
            entry.total += 1;
            if purchased {
                entry.purchased += 1;
            }
        }

        Ok(lists
            .into_iter()
            .map(|row| {
                let counts = counts.get(&row.id).copied().unwrap_or_default();
                (ShoppingList::from(row), counts)
            })
            .collect())
    }

    fn find_list_item(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>> {
        let mut conn = self.conn()?;
        let row = shopping_list_items::table
            .find(id)
            .select(ShoppingListItemRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?;
        Ok(row.map(ShoppingListItem::from))
    }

    fn find_list_item_by_pair(
        &self,
        list_id: ShoppingListId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<ShoppingListItem>> {
        let mut conn = self.conn()?;
        let row = shopping_list_items::table
            .filter(shopping_list_items::list_id.eq(list_id))
            .filter(shopping_list_items::ingredient_id.eq(ingredient_id))
            .select(ShoppingListItemRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?;
        Ok(row.map(ShoppingListItem::from))
    }

    fn insert_list_item(&self, new: &NewShoppingListItem) -> StoreResult<ShoppingListItem> {
        let mut conn = self.conn()?;
        diesel::insert_into(shopping_list_items::table)
            .values(ShoppingListItemValues::from(new))
            .returning(ShoppingListItemRow::as_returning())
            .get_result(&mut conn)
            .map(ShoppingListItem::from)
            .map_err(store_error)
    }

    fn flip_purchased(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>> {
        let mut conn = self.conn()?;
        let row = diesel::update(shopping_list_items::table.find(id))
            .set(shopping_list_items::purchased.eq(not(shopping_list_items::purchased)))
            .returning(ShoppingListItemRow::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(store_error)?;
        Ok(row.map(ShoppingListItem::from))
    }
}
