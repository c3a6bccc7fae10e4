//! In-memory repository used by tests and examples.

use super::{
    FavoriteRepository, RecipeIngredientRepository, RecipeRepository, ReportRepository,
    ShoppingListRepository,
};
use crate::error::{StoreError, StoreResult};
use crate::filter::{FavoriteFilter, RecipeFilter, ReportFilter};
use crate::model::{
    Favorite, FavoriteId, IngredientId, ItemCounts, NewFavorite, NewRecipeIngredient, NewReport,
    NewShoppingListItem, Recipe, RecipeDraft, RecipeId, RecipeIngredient, Report, ReportDetails,
    ShoppingList, ShoppingListId, ShoppingListItem, ShoppingListItemId, UserId,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    next_id: i32,
    users: BTreeMap<UserId, String>,
    ingredients: BTreeMap<IngredientId, String>,
    recipes: BTreeMap<RecipeId, Recipe>,
    recipe_ingredients: BTreeMap<i32, RecipeIngredient>,
    favorites: BTreeMap<FavoriteId, Favorite>,
    reports: BTreeMap<i32, Report>,
    lists: BTreeMap<ShoppingListId, ShoppingList>,
    list_items: BTreeMap<ShoppingListItemId, ShoppingListItem>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn require_user(&self, id: UserId) -> StoreResult<()> {
        exists(self.users.contains_key(&id))
    }

    fn require_recipe(&self, id: RecipeId) -> StoreResult<()> {
        exists(self.recipes.contains_key(&id))
    }

    fn require_ingredient(&self, id: IngredientId) -> StoreResult<()> {
        exists(self.ingredients.contains_key(&id))
    }

    fn report_details(&self, report: &Report) -> ReportDetails {
        ReportDetails {
            report: report.clone(),
            reporter_username: self
                .users
                .get(&report.reporter_id)
                .cloned()
                .unwrap_or_default(),
            recipe_title: self
                .recipes
                .get(&report.recipe_id)
                .map(|recipe| recipe.title.clone())
                .unwrap_or_default(),
        }
    }

    fn ingredient_names(&self, recipe_id: RecipeId) -> Vec<&str> {
        self.recipe_ingredients
            .values()
            .filter(|row| row.recipe_id == recipe_id)
            .filter_map(|row| self.ingredients.get(&row.ingredient_id))
            .map(String::as_str)
            .collect()
    }
}

fn exists(found: bool) -> StoreResult<()> {
    if found {
        Ok(())
    } else {
        Err(StoreError::ForeignKeyViolation)
    }
}

/// Every table behind one lock, so each call sees and leaves a consistent state.
///
/// Enforces the same unique and foreign-key constraints as the database
/// schema, including cascading deletes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    pub fn add_user(&self, username: &str) -> StoreResult<UserId> {
        let mut tables = self.write()?;
        if tables.users.values().any(|name| name == username) {
            return Err(StoreError::UniqueViolation);
        }
        let id = tables.next_id();
        tables.users.insert(id, username.to_string());
        Ok(id)
    }

    /// Deletes the user and everything they own.
    pub fn delete_user(&self, id: UserId) -> StoreResult<bool> {
        let mut tables = self.write()?;
        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }
        let owned: Vec<RecipeId> = tables
            .recipes
            .values()
            .filter(|recipe| recipe.user_id == id)
            .map(|recipe| recipe.id)
            .collect();
        for recipe_id in owned {
            remove_recipe(&mut tables, recipe_id);
        }
        tables.favorites.retain(|_, row| row.user_id != id);
        tables.reports.retain(|_, row| row.reporter_id != id);
        let lists: Vec<ShoppingListId> = tables
            .lists
            .values()
            .filter(|list| list.user_id == id)
            .map(|list| list.id)
            .collect();
        for list_id in lists {
            remove_list(&mut tables, list_id);
        }
        Ok(true)
    }

    pub fn add_ingredient(&self, name: &str) -> StoreResult<IngredientId> {
        let mut tables = self.write()?;
        let id = tables.next_id();
        tables.ingredients.insert(id, name.to_string());
        Ok(id)
    }

    pub fn add_recipe(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let mut tables = self.write()?;
        tables.require_user(draft.user_id)?;
        let recipe = Recipe {
            id: tables.next_id(),
            user_id: draft.user_id,
            title: draft.title,
            description: draft.description,
            prep_time: draft.prep_time,
            difficulty: draft.difficulty,
            kind: draft.kind,
            dietary_restriction: draft.dietary_restriction,
            category: draft.category,
            image_url: draft.image_url,
            view_count: 0,
        };
        tables.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    pub fn add_list(&self, user_id: UserId, name: Option<&str>) -> StoreResult<ShoppingList> {
        let mut tables = self.write()?;
        tables.require_user(user_id)?;
        let list = ShoppingList {
            id: tables.next_id(),
            user_id,
            name: name.map(str::to_string),
            created_at: Utc::now(),
        };
        tables.lists.insert(list.id, list.clone());
        Ok(list)
    }

    pub fn delete_list(&self, id: ShoppingListId) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(remove_list(&mut tables, id))
    }

    pub fn recipe_ingredient_count(&self, recipe_id: RecipeId) -> StoreResult<usize> {
        let tables = self.read()?;
        Ok(tables
            .recipe_ingredients
            .values()
            .filter(|row| row.recipe_id == recipe_id)
            .count())
    }

    pub fn favorite_count(&self, recipe_id: RecipeId) -> StoreResult<usize> {
        let tables = self.read()?;
        Ok(tables
            .favorites
            .values()
            .filter(|row| row.recipe_id == recipe_id)
            .count())
    }

    pub fn report_count(&self, recipe_id: RecipeId) -> StoreResult<usize> {
        let tables = self.read()?;
        Ok(tables
            .reports
            .values()
            .filter(|row| row.recipe_id == recipe_id)
            .count())
    }

    pub fn list_item_count(&self, list_id: ShoppingListId) -> StoreResult<usize> {
        let tables = self.read()?;
        Ok(tables
            .list_items
            .values()
            .filter(|row| row.list_id == list_id)
            .count())
    }
}

fn remove_recipe(tables: &mut Tables, id: RecipeId) -> bool {
    if tables.recipes.remove(&id).is_none() {
        return false;
    }
    tables.recipe_ingredients.retain(|_, row| row.recipe_id != id);
    tables.favorites.retain(|_, row| row.recipe_id != id);
    tables.reports.retain(|_, row| row.recipe_id != id);
    true
}

fn remove_list(tables: &mut Tables, id: ShoppingListId) -> bool {
    if tables.lists.remove(&id).is_none() {
        return false;
    }
    tables.list_items.retain(|_, row| row.list_id != id);
    true
}

impl RecipeRepository for MemoryStore {
    fn find_recipe(&self, id: RecipeId) -> StoreResult<Option<Recipe>> {
        Ok(self.read()?.recipes.get(&id).cloned())
    }

    fn filter_recipes(&self, filter: &RecipeFilter) -> StoreResult<Vec<Recipe>> {
        let tables = self.read()?;
        Ok(tables
            .recipes
            .values()
            .filter(|recipe| filter.matches(recipe, &tables.ingredient_names(recipe.id)))
            .cloned()
            .collect())
    }

    fn delete_recipe(&self, id: RecipeId) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(remove_recipe(&mut tables, id))
    }
}

impl RecipeIngredientRepository for MemoryStore {
    fn find_recipe_ingredient(
        &self,
        recipe_id: RecipeId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<RecipeIngredient>> {
        Ok(self
            .read()?
            .recipe_ingredients
            .values()
            .find(|row| row.recipe_id == recipe_id && row.ingredient_id == ingredient_id)
            .cloned())
    }

    fn insert_recipe_ingredient(
        &self,
        new: &NewRecipeIngredient,
    ) -> StoreResult<RecipeIngredient> {
        let mut tables = self.write()?;
        tables.require_recipe(new.recipe_id)?;
        tables.require_ingredient(new.ingredient_id)?;
        if tables
            .recipe_ingredients
            .values()
            .any(|row| row.recipe_id == new.recipe_id && row.ingredient_id == new.ingredient_id)
        {
            return Err(StoreError::UniqueViolation);
        }
        let row = RecipeIngredient {
            id: tables.next_id(),
            recipe_id: new.recipe_id,
            ingredient_id: new.ingredient_id,
            quantity: new.quantity,
            unit: new.unit.clone(),
        };
        tables.recipe_ingredients.insert(row.id, row.clone());
        Ok(row)
    }
}

impl FavoriteRepository for MemoryStore {
    fn find_favorite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> StoreResult<Option<Favorite>> {
        Ok(self
            .read()?
            .favorites
            .values()
            .find(|row| row.user_id == user_id && row.recipe_id == recipe_id)
            .cloned())
    }

    fn insert_favorite(&self, new: NewFavorite) -> StoreResult<Favorite> {
        let mut tables = self.write()?;
        tables.require_user(new.user_id)?;
        tables.require_recipe(new.recipe_id)?;
        if tables
            .favorites
            .values()
            .any(|row| row.user_id == new.user_id && row.recipe_id == new.recipe_id)
        {
            return Err(StoreError::UniqueViolation);
        }
        let row = Favorite {
            id: tables.next_id(),
            user_id: new.user_id,
            recipe_id: new.recipe_id,
            created_at: Utc::now(),
        };
        tables.favorites.insert(row.id, row.clone());
        Ok(row)
    }

    fn delete_favorite(&self, id: FavoriteId) -> StoreResult<bool> {
        Ok(self.write()?.favorites.remove(&id).is_some())
    }

    fn filter_favorites(&self, filter: &FavoriteFilter) -> StoreResult<Vec<(Favorite, Recipe)>> {
        let tables = self.read()?;
        let mut rows: Vec<(Favorite, Recipe)> = tables
            .favorites
            .values()
            .filter_map(|favorite| {
                let recipe = tables.recipes.get(&favorite.recipe_id)?;
                filter
                    .matches(favorite.user_id, recipe)
                    .then(|| (favorite.clone(), recipe.clone()))
            })
            .collect();
        rows.sort_by(|(a, _), (b, _)| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

impl ReportRepository for MemoryStore {
    fn find_report(&self, unique_id: Uuid) -> StoreResult<Option<ReportDetails>> {
        let tables = self.read()?;
        Ok(tables
            .reports
            .values()
            .find(|row| row.unique_id == unique_id)
            .map(|row| tables.report_details(row)))
    }

    fn find_report_by_pair(
        &self,
        recipe_id: RecipeId,
        reporter_id: UserId,
    ) -> StoreResult<Option<Report>> {
        Ok(self
            .read()?
            .reports
            .values()
            .find(|row| row.recipe_id == recipe_id && row.reporter_id == reporter_id)
            .cloned())
    }

    fn insert_report(&self, new: &NewReport) -> StoreResult<Report> {
        let mut tables = self.write()?;
        tables.require_recipe(new.recipe_id)?;
        tables.require_user(new.reporter_id)?;
        if tables
            .reports
            .values()
            .any(|row| row.recipe_id == new.recipe_id && row.reporter_id == new.reporter_id)
        {
            return Err(StoreError::UniqueViolation);
        }
        let id = tables.next_id();
        let row = Report {
            unique_id: Uuid::new_v4(),
            recipe_id: new.recipe_id,
            reporter_id: new.reporter_id,
            reason: new.reason,
            detail: new.detail.clone(),
            created_at: Utc::now(),
        };
        tables.reports.insert(id, row.clone());
        Ok(row)
    }

    fn filter_reports(&self, filter: &ReportFilter) -> StoreResult<Vec<ReportDetails>> {
        let tables = self.read()?;
        let mut rows: Vec<(i32, ReportDetails)> = tables
            .reports
            .iter()
            .filter(|(_, row)| filter.matches(row))
            .map(|(id, row)| (*id, tables.report_details(row)))
            .collect();
        rows.sort_by(|(a_id, a), (b_id, b)| {
            b.report
                .created_at
                .cmp(&a.report.created_at)
                .then(b_id.cmp(a_id))
        });
        Ok(rows.into_iter().map(|(_, details)| details).collect())
    }
}

impl ShoppingListRepository for MemoryStore {
    fn lists_with_counts(
        &self,
        user_id: UserId,
    ) -> StoreResult<Vec<(ShoppingList, ItemCounts)>> {
        let tables = self.read()?;
        Ok(tables
            .lists
            .values()
            .filter(|list| list.user_id == user_id)
            .map(|list| {
                let counts = tables
                    .list_items
                    .values()
                    .filter(|item| item.list_id == list.id)
                    .fold(ItemCounts::default(), |mut counts, item| {
                        counts.total += 1;
                        if item.purchased {
                            counts.purchased += 1;
                        }
                        counts
                    });
                (list.clone(), counts)
            })
            .collect())
    }

    fn find_list_item(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>> {
        Ok(self.read()?.list_items.get(&id).cloned())
    }

    fn find_list_item_by_pair(
        &self,
        list_id: ShoppingListId,
        ingredient_id: IngredientId,
    ) -> StoreResult<Option<ShoppingListItem>> {
        Ok(self
            .read()?
            .list_items
            .values()
            .find(|row| row.list_id == list_id && row.ingredient_id == ingredient_id)
            .cloned())
    }

    fn insert_list_item(&self, new: &NewShoppingListItem) -> StoreResult<ShoppingListItem> {
        let mut tables = self.write()?;
        exists(tables.lists.contains_key(&new.list_id))?;
        tables.require_ingredient(new.ingredient_id)?;
        if tables
            .list_items
            .values()
            .any(|row| row.list_id == new.list_id && row.ingredient_id == new.ingredient_id)
        {
            return Err(StoreError::UniqueViolation);
        }
        let row = ShoppingListItem {
            id: tables.next_id(),
            list_id: new.list_id,
            ingredient_id: new.ingredient_id,
            quantity: new.quantity,
            unit: new.unit.clone(),
            price: new.price,
            purchased: new.purchased,
        };
        tables.list_items.insert(row.id, row.clone());
        Ok(row)
    }

    fn flip_purchased(&self, id: ShoppingListItemId) -> StoreResult<Option<ShoppingListItem>> {
        let mut tables = self.write()?;
        Ok(tables.list_items.get_mut(&id).map(|item| {
            item.purchased = !item.purchased;
            item.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{Category, Difficulty};
    use chrono::NaiveTime;

    fn draft(user_id: UserId) -> RecipeDraft {
        RecipeDraft {
            user_id,
            title: "Feijoada".to_string(),
            description: "Completa".to_string(),
            prep_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
            difficulty: Difficulty::Hard,
            kind: None,
            dietary_restriction: None,
            category: Category::RiceAndBeans,
            image_url: None,
        }
    }

    #[test]
    fn test_foreign_keys_are_enforced() {
        let store = MemoryStore::new();
        assert_eq!(
            store.add_recipe(draft(99)).unwrap_err(),
            StoreError::ForeignKeyViolation
        );
        let user = store.add_user("ana").unwrap();
        let recipe = store.add_recipe(draft(user)).unwrap();
        let err = store
            .insert_favorite(NewFavorite {
                user_id: user + 100,
                recipe_id: recipe.id,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::ForeignKeyViolation);
    }

    #[test]
    fn test_usernames_are_unique() {
        let store = MemoryStore::new();
        store.add_user("ana").unwrap();
        assert_eq!(store.add_user("ana").unwrap_err(), StoreError::UniqueViolation);
    }

    #[test]
    fn test_deleting_user_cascades() {
        let store = MemoryStore::new();
        let ana = store.add_user("ana").unwrap();
        let bia = store.add_user("bia").unwrap();
        let recipe = store.add_recipe(draft(ana)).unwrap();
        store
            .insert_favorite(NewFavorite {
                user_id: bia,
                recipe_id: recipe.id,
            })
            .unwrap();
        let list = store.add_list(bia, None).unwrap();

        assert!(store.delete_user(bia).unwrap());
        assert_eq!(store.favorite_count(recipe.id).unwrap(), 0);
        assert!(store.lists_with_counts(bia).unwrap().is_empty());
        assert_eq!(store.list_item_count(list.id).unwrap(), 0);

        assert!(store.delete_user(ana).unwrap());
        assert_eq!(store.find_recipe(recipe.id).unwrap(), None);
        assert!(!store.delete_user(ana).unwrap());
    }
}
