//! Report statistics and shopping-list status over seeded data.

mod common;

use common::catalogue;
use kitem_core::guard::{add_list_item, create_report};
use kitem_core::model::{NewReport, NewShoppingListItem, ShoppingListId};
use kitem_core::toggle::toggle_purchased;
use kitem_core::{
    CategoryStatistics, ListStatus, ListStatusSummary, RecipeFilter, RecipeRepository,
    ReportFilter, ReportReason, ReportRepository, ReportStatistics, ShoppingListFilter,
    ShoppingListRepository,
};

#[test]
fn test_report_statistics() {
    let c = catalogue();
    let carla = c.store.add_user("carla").unwrap();
    for (recipe_id, reporter_id, reason) in [
        (c.pudim.id, c.bia, ReportReason::Spam),
        (c.pudim.id, carla, ReportReason::Spam),
        (c.coxinha.id, c.bia, ReportReason::Offensive),
        (c.feijoada.id, c.ana, ReportReason::Spam),
        (c.salada.id, carla, ReportReason::Other),
    ] {
        create_report(
            &c.store,
            &NewReport {
                recipe_id,
                reporter_id,
                reason,
                detail: None,
            },
        )
        .unwrap();
    }

    let reports = c.store.filter_reports(&ReportFilter::new()).unwrap();
    let stats = ReportStatistics::from_reports(&reports);

    assert_eq!(stats.total, 5);
    assert_eq!(
        stats.by_reason.iter().map(|(_, count)| count).sum::<usize>(),
        stats.total
    );
    assert_eq!(stats.by_reason[0], (ReportReason::Spam, 3));
    assert_eq!(
        stats.most_reported_recipes[0],
        ((c.pudim.id, "Pudim de Leite".to_string()), 2)
    );
    let top_reporters: Vec<usize> = stats
        .most_active_reporters
        .iter()
        .map(|(_, count)| *count)
        .collect();
    assert_eq!(top_reporters, vec![2, 2, 1]);
}

#[test]
fn test_category_statistics_from_store() {
    let c = catalogue();
    let recipes = c.store.filter_recipes(&RecipeFilter::new()).unwrap();
    let stats = CategoryStatistics::from_categories(recipes.iter().map(|recipe| recipe.category));
    let nonzero: usize = stats.counts.iter().filter(|(_, count)| *count > 0).count();
    assert_eq!(nonzero, 4);
    assert_eq!(stats.counts.iter().map(|(_, count)| count).sum::<usize>(), 4);
}

#[test]
fn test_list_status_classification() {
    let c = catalogue();
    let ingredient = c.store.add_ingredient("Café").unwrap();
    let other = c.store.add_ingredient("Pão").unwrap();
    let add = |list_id: ShoppingListId, ingredient_id, purchased| {
        add_list_item(
            &c.store,
            &NewShoppingListItem {
                list_id,
                ingredient_id,
                quantity: 1.0,
                unit: "un".to_string(),
                price: None,
                purchased,
            },
        )
        .unwrap()
    };

    let empty = c.store.add_list(c.ana, Some("Vazia")).unwrap();
    let complete = c.store.add_list(c.ana, Some("Padaria")).unwrap();
    add(complete.id, ingredient, true);
    let incomplete = c.store.add_list(c.ana, Some("Mercado")).unwrap();
    add(incomplete.id, ingredient, true);
    let pending = add(incomplete.id, other, false);

    let lists = c.store.lists_with_counts(c.ana).unwrap();
    let summary = ListStatusSummary::from_counts(lists.iter().map(|(_, counts)| *counts));
    assert_eq!(
        summary,
        ListStatusSummary {
            total: 3,
            complete: 1,
            incomplete: 1,
            empty: 1,
        }
    );

    let found = c
        .store
        .filter_lists(&ShoppingListFilter::for_user(c.ana).with_status(ListStatus::Empty))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.id, empty.id);

    toggle_purchased(&c.store, pending.id).unwrap();
    let complete_lists = c
        .store
        .filter_lists(&ShoppingListFilter::for_user(c.ana).with_status(ListStatus::Complete))
        .unwrap();
    assert_eq!(complete_lists.len(), 2);

    let by_name = c
        .store
        .filter_lists(&ShoppingListFilter::for_user(c.ana).with_name("MERC"))
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert!(c
        .store
        .filter_lists(&ShoppingListFilter::for_user(c.bia))
        .unwrap()
        .is_empty());
}
