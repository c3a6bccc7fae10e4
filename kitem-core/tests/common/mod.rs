//! Seed data shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveTime;
use kitem_core::model::{Recipe, RecipeDraft, UserId};
use kitem_core::{Category, Difficulty, MemoryStore, RecipeKind};

pub fn minutes(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

pub fn draft(user_id: UserId, title: &str) -> RecipeDraft {
    RecipeDraft {
        user_id,
        title: title.to_string(),
        description: format!("Modo de preparo de {title}"),
        prep_time: minutes(30),
        difficulty: Difficulty::Easy,
        kind: None,
        dietary_restriction: None,
        category: Category::Other,
        image_url: None,
    }
}

pub fn recipe(store: &MemoryStore, user_id: UserId, title: &str) -> Recipe {
    store.add_recipe(draft(user_id, title)).unwrap()
}

/// A small catalogue: two users and four recipes with varied attributes.
pub struct Catalogue {
    pub store: MemoryStore,
    pub ana: UserId,
    pub bia: UserId,
    pub pudim: Recipe,
    pub coxinha: Recipe,
    pub salada: Recipe,
    pub feijoada: Recipe,
}

pub fn catalogue() -> Catalogue {
    let store = MemoryStore::new();
    let ana = store.add_user("ana").unwrap();
    let bia = store.add_user("bia").unwrap();

    let pudim = store
        .add_recipe(RecipeDraft {
            prep_time: minutes(25),
            difficulty: Difficulty::Medium,
            kind: Some(RecipeKind::Sweet),
            dietary_restriction: Some("sem glúten".to_string()),
            category: Category::Desserts,
            ..draft(ana, "Pudim de Leite")
        })
        .unwrap();
    let coxinha = store
        .add_recipe(RecipeDraft {
            prep_time: minutes(90),
            difficulty: Difficulty::Hard,
            kind: Some(RecipeKind::Savory),
            category: Category::Appetizers,
            ..draft(ana, "Coxinha de Frango")
        })
        .unwrap();
    let salada = store
        .add_recipe(RecipeDraft {
            prep_time: minutes(15),
            kind: Some(RecipeKind::Savory),
            dietary_restriction: Some("vegano".to_string()),
            category: Category::Salads,
            ..draft(bia, "Salada de Grão-de-bico")
        })
        .unwrap();
    let feijoada = store
        .add_recipe(RecipeDraft {
            prep_time: minutes(180),
            difficulty: Difficulty::MasterChef,
            category: Category::RiceAndBeans,
            ..draft(bia, "Feijoada Completa")
        })
        .unwrap();

    Catalogue {
        store,
        ana,
        bia,
        pudim,
        coxinha,
        salada,
        feijoada,
    }
}
