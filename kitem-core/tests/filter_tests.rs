//! Filters evaluated against the in-memory store.

mod common;

use chrono::Utc;
use common::catalogue;
use kitem_core::guard::{add_recipe_ingredient, create_favorite, create_report};
use kitem_core::model::{NewFavorite, NewRecipeIngredient, NewReport, Recipe};
use kitem_core::{
    Difficulty, FavoriteFilter, FavoriteRepository, QueryParams, RecipeFilter, RecipeKind,
    RecipeRepository, ReportFilter, ReportReason, ReportRepository,
};

fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.title.as_str()).collect()
}

fn filter_recipes(store: &impl RecipeRepository, params: QueryParams) -> Vec<Recipe> {
    let filter = RecipeFilter::from_params(&params).unwrap();
    store.filter_recipes(&filter).unwrap()
}

#[test]
fn test_no_criteria_returns_every_recipe() {
    let c = catalogue();
    assert_eq!(filter_recipes(&c.store, QueryParams::default()).len(), 4);
}

#[test]
fn test_recipe_criteria_conjoin() {
    let c = catalogue();
    let params = QueryParams::default()
        .with("tipo", "SALGADO")
        .with("dificuldade", "difícil");
    assert_eq!(
        titles(&filter_recipes(&c.store, params)),
        vec!["Coxinha de Frango"]
    );

    let params = QueryParams::default()
        .with("tipo", "salgado")
        .with("categoria", "sobremesas");
    assert!(filter_recipes(&c.store, params).is_empty());
}

#[test]
fn test_prep_time_buckets() {
    let c = catalogue();
    let bucket = |value: &str| {
        titles(&filter_recipes(
            &c.store,
            QueryParams::default().with("tempo_preparo", value),
        ))
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>()
    };
    assert_eq!(bucket("30"), vec!["Pudim de Leite"]);
    assert_eq!(bucket("20"), vec!["Salada de Grão-de-bico"]);
    assert_eq!(bucket("61"), vec!["Coxinha de Frango", "Feijoada Completa"]);
}

#[test]
fn test_dietary_restrictions_or_together() {
    let c = catalogue();
    let params = QueryParams::default()
        .with("restricao_alimentar", "glúten")
        .with("restricao_alimentar", "VEGANO");
    assert_eq!(
        titles(&filter_recipes(&c.store, params)),
        vec!["Pudim de Leite", "Salada de Grão-de-bico"]
    );
}

#[test]
fn test_ingredient_names_match_distinct_recipes() {
    let c = catalogue();
    let milk = c.store.add_ingredient("Leite integral").unwrap();
    let condensed = c.store.add_ingredient("Leite condensado").unwrap();
    let chicken = c.store.add_ingredient("Peito de frango").unwrap();
    for (recipe_id, ingredient_id) in [
        (c.pudim.id, milk),
        (c.pudim.id, condensed),
        (c.coxinha.id, chicken),
        (c.coxinha.id, milk),
    ] {
        add_recipe_ingredient(
            &c.store,
            &NewRecipeIngredient {
                recipe_id,
                ingredient_id,
                quantity: 1.0,
                unit: "xícara".to_string(),
            },
        )
        .unwrap();
    }

    let params = QueryParams::default().with("ingredientes", "leite");
    assert_eq!(
        titles(&filter_recipes(&c.store, params)),
        vec!["Pudim de Leite", "Coxinha de Frango"]
    );

    let params = QueryParams::default()
        .with("ingredientes", "frango")
        .with("search", "pudim");
    assert!(filter_recipes(&c.store, params).is_empty());
}

#[test]
fn test_invalid_choice_is_a_validation_error() {
    let err = RecipeFilter::from_params(&QueryParams::default().with("dificuldade", "Lendário"))
        .unwrap_err();
    assert_eq!(err.field, "dificuldade");
    assert!(err.message.contains("Fácil, Média, Difícil, Master Chef"));

    let err = RecipeFilter::from_params(&QueryParams::default().with("tempo_preparo", "meia hora"))
        .unwrap_err();
    assert_eq!(err.field, "tempo_preparo");
}

#[test]
fn test_favorite_filter_is_scoped_to_user() {
    let c = catalogue();
    for recipe_id in [c.pudim.id, c.coxinha.id, c.feijoada.id] {
        create_favorite(
            &c.store,
            NewFavorite {
                user_id: c.bia,
                recipe_id,
            },
        )
        .unwrap();
    }
    create_favorite(
        &c.store,
        NewFavorite {
            user_id: c.ana,
            recipe_id: c.salada.id,
        },
    )
    .unwrap();

    let all = c
        .store
        .filter_favorites(&FavoriteFilter::for_user(c.bia))
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|(favorite, _)| favorite.user_id == c.bia));

    let savory = c
        .store
        .filter_favorites(&FavoriteFilter::for_user(c.bia).with_kind(RecipeKind::Savory))
        .unwrap();
    assert_eq!(savory.len(), 1);
    assert_eq!(savory[0].1.id, c.coxinha.id);

    let hard = c
        .store
        .filter_favorites(
            &FavoriteFilter::for_user(c.bia)
                .with_difficulty(Difficulty::MasterChef)
                .with_search("feijoada"),
        )
        .unwrap();
    assert_eq!(hard.len(), 1);
}

#[test]
fn test_report_filter() {
    let c = catalogue();
    let report = |recipe_id, reporter_id, reason, detail: &str| {
        create_report(
            &c.store,
            &NewReport {
                recipe_id,
                reporter_id,
                reason,
                detail: Some(detail.to_string()),
            },
        )
        .unwrap()
    };
    report(c.pudim.id, c.bia, ReportReason::Spam, "Propaganda no modo de preparo");
    report(c.salada.id, c.ana, ReportReason::Dangerous, "Ingrediente tóxico");
    report(c.coxinha.id, c.bia, ReportReason::Spam, "Link suspeito");

    let spam = c
        .store
        .filter_reports(&ReportFilter::new().with_reason(ReportReason::Spam))
        .unwrap();
    assert_eq!(spam.len(), 2);
    assert!(spam.iter().all(|row| row.reporter_username == "bia"));

    let params = QueryParams::default()
        .with("usuario_id", &c.ana.to_string())
        .with("search", "TÓXICO");
    let found = c
        .store
        .filter_reports(&ReportFilter::from_params(&params).unwrap())
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].recipe_title, "Salada de Grão-de-bico");

    let today = Utc::now().date_naive();
    let dated = c
        .store
        .filter_reports(&ReportFilter::new().with_dates(Some(today), Some(today)))
        .unwrap();
    assert_eq!(dated.len(), 3);
}

#[test]
fn test_report_lookup_by_unique_id_is_stable() {
    let c = catalogue();
    let report = create_report(
        &c.store,
        &NewReport {
            recipe_id: c.feijoada.id,
            reporter_id: c.ana,
            reason: ReportReason::Copyright,
            detail: None,
        },
    )
    .unwrap();

    let first = c.store.find_report(report.unique_id).unwrap().unwrap();
    let second = c.store.find_report(report.unique_id).unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.report, report);
    assert_eq!(c.store.find_report(uuid::Uuid::new_v4()).unwrap(), None);
}
