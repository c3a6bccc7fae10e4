//! Uniqueness guard, toggles and cascading deletes.

mod common;

use common::catalogue;
use kitem_core::error::StoreResult;
use kitem_core::guard::{
    add_list_item, add_recipe_ingredient, create_favorite, create_report, DUPLICATE_FAVORITE,
    DUPLICATE_LIST_ITEM, DUPLICATE_REPORT,
};
use kitem_core::model::{
    Favorite, FavoriteId, NewFavorite, NewRecipeIngredient, NewReport, NewShoppingListItem,
    Recipe, RecipeId, UserId,
};
use kitem_core::toggle::{toggle_favorite, toggle_purchased, FAVORITE_ADDED, FAVORITE_REMOVED};
use kitem_core::{
    CoreError, FavoriteFilter, FavoriteRepository, FavoriteToggle, MemoryStore,
    RecipeRepository, ReportReason, ShoppingListRepository, StoreError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_second_favorite_is_a_duplicate() {
    let c = catalogue();
    let new = NewFavorite {
        user_id: c.bia,
        recipe_id: c.pudim.id,
    };
    create_favorite(&c.store, new).unwrap();
    assert_eq!(
        create_favorite(&c.store, new),
        Err(CoreError::DuplicateRelation(DUPLICATE_FAVORITE.to_string()))
    );
    assert_eq!(c.store.favorite_count(c.pudim.id).unwrap(), 1);
}

#[test]
fn test_second_report_is_a_duplicate() {
    let c = catalogue();
    let new = NewReport {
        recipe_id: c.coxinha.id,
        reporter_id: c.bia,
        reason: ReportReason::Offensive,
        detail: None,
    };
    create_report(&c.store, &new).unwrap();
    let again = NewReport {
        reason: ReportReason::Spam,
        ..new
    };
    assert_eq!(
        create_report(&c.store, &again),
        Err(CoreError::DuplicateRelation(DUPLICATE_REPORT.to_string()))
    );
    assert_eq!(c.store.report_count(c.coxinha.id).unwrap(), 1);
}

#[test]
fn test_missing_reference_is_a_store_error() {
    let c = catalogue();
    let err = create_favorite(
        &c.store,
        NewFavorite {
            user_id: c.bia,
            recipe_id: 9999,
        },
    )
    .unwrap_err();
    assert_eq!(err, CoreError::Store(StoreError::ForeignKeyViolation));
}

#[test]
fn test_list_items_are_unique_per_ingredient() {
    let c = catalogue();
    let list = c.store.add_list(c.ana, Some("Feira")).unwrap();
    let egg = c.store.add_ingredient("Ovo").unwrap();
    let item = NewShoppingListItem {
        list_id: list.id,
        ingredient_id: egg,
        quantity: 12.0,
        unit: "unidades".to_string(),
        price: Some(9.9),
        purchased: false,
    };
    add_list_item(&c.store, &item).unwrap();
    assert_eq!(
        add_list_item(&c.store, &item),
        Err(CoreError::DuplicateRelation(DUPLICATE_LIST_ITEM.to_string()))
    );
}

#[test]
fn test_toggle_twice_restores_state() {
    let c = catalogue();
    let added = toggle_favorite(&c.store, c.ana, c.salada.id).unwrap();
    assert!(matches!(added, FavoriteToggle::Added(_)));
    assert_eq!(added.message(), FAVORITE_ADDED);
    assert!(c.store.find_favorite(c.ana, c.salada.id).unwrap().is_some());

    let removed = toggle_favorite(&c.store, c.ana, c.salada.id).unwrap();
    assert_eq!(removed, FavoriteToggle::Removed);
    assert_eq!(removed.message(), FAVORITE_REMOVED);
    assert!(c.store.find_favorite(c.ana, c.salada.id).unwrap().is_none());
}

/// Hides existing favorites from the first lookup, as if another request
/// inserted the row between lookup and insert.
struct RacingStore {
    inner: MemoryStore,
    hide_next_lookup: AtomicBool,
}

impl FavoriteRepository for RacingStore {
    fn find_favorite(&self, user_id: UserId, recipe_id: RecipeId) -> StoreResult<Option<Favorite>> {
        if self.hide_next_lookup.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.find_favorite(user_id, recipe_id)
    }

    fn insert_favorite(&self, new: NewFavorite) -> StoreResult<Favorite> {
        self.inner.insert_favorite(new)
    }

    fn delete_favorite(&self, id: FavoriteId) -> StoreResult<bool> {
        self.inner.delete_favorite(id)
    }

    fn filter_favorites(&self, filter: &FavoriteFilter) -> StoreResult<Vec<(Favorite, Recipe)>> {
        self.inner.filter_favorites(filter)
    }
}

#[test]
fn test_toggle_that_loses_insert_race_reports_winner() {
    let c = catalogue();
    let winner = c
        .store
        .insert_favorite(NewFavorite {
            user_id: c.bia,
            recipe_id: c.pudim.id,
        })
        .unwrap();
    let store = RacingStore {
        inner: c.store,
        hide_next_lookup: AtomicBool::new(true),
    };

    let result = toggle_favorite(&store, c.bia, c.pudim.id).unwrap();
    assert_eq!(result, FavoriteToggle::Added(winner));
    assert_eq!(store.inner.favorite_count(c.pudim.id).unwrap(), 1);
}

#[test]
fn test_create_that_loses_insert_race_is_a_duplicate() {
    let c = catalogue();
    let new = NewFavorite {
        user_id: c.bia,
        recipe_id: c.pudim.id,
    };
    c.store.insert_favorite(new).unwrap();
    let store = RacingStore {
        inner: c.store,
        hide_next_lookup: AtomicBool::new(true),
    };
    assert_eq!(
        create_favorite(&store, new),
        Err(CoreError::DuplicateRelation(DUPLICATE_FAVORITE.to_string()))
    );
}

#[test]
fn test_concurrent_toggles_never_duplicate() {
    let c = catalogue();
    let store = Arc::new(c.store);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let (user_id, recipe_id) = (c.ana, c.feijoada.id);
            thread::spawn(move || {
                for _ in 0..25 {
                    toggle_favorite(store.as_ref(), user_id, recipe_id).unwrap();
                    assert!(store.favorite_count(recipe_id).unwrap() <= 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(store.favorite_count(c.feijoada.id).unwrap() <= 1);
}

#[test]
fn test_toggle_purchased() {
    let c = catalogue();
    let list = c.store.add_list(c.bia, None).unwrap();
    let rice = c.store.add_ingredient("Arroz").unwrap();
    let item = add_list_item(
        &c.store,
        &NewShoppingListItem {
            list_id: list.id,
            ingredient_id: rice,
            quantity: 5.0,
            unit: "kg".to_string(),
            price: None,
            purchased: false,
        },
    )
    .unwrap();

    assert!(toggle_purchased(&c.store, item.id).unwrap().purchased);
    assert!(!toggle_purchased(&c.store, item.id).unwrap().purchased);
    assert!(matches!(
        toggle_purchased(&c.store, 424242),
        Err(CoreError::NotFound(_))
    ));
}

#[test]
fn test_concurrent_purchased_toggles_keep_every_flip() {
    let c = catalogue();
    let list = c.store.add_list(c.bia, None).unwrap();
    let rice = c.store.add_ingredient("Arroz").unwrap();
    let item = add_list_item(
        &c.store,
        &NewShoppingListItem {
            list_id: list.id,
            ingredient_id: rice,
            quantity: 1.0,
            unit: "kg".to_string(),
            price: None,
            purchased: false,
        },
    )
    .unwrap();

    let store = Arc::new(c.store);
    // 8 threads x 25 flips: an even total must end where it started
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..25 {
                    toggle_purchased(store.as_ref(), item.id).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(!store.find_list_item(item.id).unwrap().unwrap().purchased);
    assert!(toggle_purchased(store.as_ref(), item.id).unwrap().purchased);
}

#[test]
fn test_deleting_recipe_cascades() {
    let c = catalogue();
    let sugar = c.store.add_ingredient("Açúcar").unwrap();
    add_recipe_ingredient(
        &c.store,
        &NewRecipeIngredient {
            recipe_id: c.pudim.id,
            ingredient_id: sugar,
            quantity: 200.0,
            unit: "g".to_string(),
        },
    )
    .unwrap();
    create_favorite(
        &c.store,
        NewFavorite {
            user_id: c.bia,
            recipe_id: c.pudim.id,
        },
    )
    .unwrap();
    create_report(
        &c.store,
        &NewReport {
            recipe_id: c.pudim.id,
            reporter_id: c.bia,
            reason: ReportReason::FalseInformation,
            detail: Some("Rende metade".to_string()),
        },
    )
    .unwrap();

    assert!(c.store.delete_recipe(c.pudim.id).unwrap());
    assert_eq!(c.store.find_recipe(c.pudim.id).unwrap(), None);
    assert_eq!(c.store.recipe_ingredient_count(c.pudim.id).unwrap(), 0);
    assert_eq!(c.store.favorite_count(c.pudim.id).unwrap(), 0);
    assert_eq!(c.store.report_count(c.pudim.id).unwrap(), 0);
    assert!(!c.store.delete_recipe(c.pudim.id).unwrap());
}

#[test]
fn test_deleting_list_cascades_items() {
    let c = catalogue();
    let list = c.store.add_list(c.ana, None).unwrap();
    let salt = c.store.add_ingredient("Sal").unwrap();
    add_list_item(
        &c.store,
        &NewShoppingListItem {
            list_id: list.id,
            ingredient_id: salt,
            quantity: 1.0,
            unit: "pacote".to_string(),
            price: Some(3.5),
            purchased: true,
        },
    )
    .unwrap();

    assert!(c.store.delete_list(list.id).unwrap());
    assert_eq!(c.store.list_item_count(list.id).unwrap(), 0);
    assert!(c.store.lists_with_counts(c.ana).unwrap().is_empty());
}
