pub mod by_user;
pub mod categories;
pub mod create;
pub mod delete;
pub mod detailed;
pub mod filter;
pub mod get;
pub mod list;
pub mod most_viewed;
pub mod random;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use chrono::NaiveTime;
use kitem_core::model::Recipe;
use kitem_core::validate::RecipeInput;
use kitem_core::Choice;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const RECIPE_NOT_FOUND: &str = "Receita não encontrada.";

pub fn format_prep_time(prep_time: NaiveTime) -> String {
    prep_time.format("%H:%M:%S").to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub id_usuario: i32,
    pub titulo: String,
    pub descricao: String,
    /// HH:MM:SS
    pub tempo_preparo: String,
    pub dificuldade: String,
    pub tipo: Option<String>,
    pub restricao_alimentar: Option<String>,
    pub categoria: String,
    /// Display name of the category
    pub categoria_display: String,
    pub imagem: Option<String>,
    pub quantidade_visualizacao: i32,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            id_usuario: recipe.user_id,
            titulo: recipe.title,
            descricao: recipe.description,
            tempo_preparo: format_prep_time(recipe.prep_time),
            dificuldade: recipe.difficulty.code().to_string(),
            tipo: recipe.kind.map(|kind| kind.code().to_string()),
            restricao_alimentar: recipe.dietary_restriction,
            categoria: recipe.category.code().to_string(),
            categoria_display: recipe.category.label().to_string(),
            imagem: recipe.image_url,
            quantidade_visualizacao: recipe.view_count,
        }
    }
}

pub fn into_responses(recipes: Vec<Recipe>) -> Vec<RecipeResponse> {
    recipes.into_iter().map(RecipeResponse::from).collect()
}

/// Body of create and update. The view count is not writable.
#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct RecipeRequest {
    pub id_usuario: Option<i32>,
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    /// HH:MM:SS or HH:MM
    pub tempo_preparo: Option<String>,
    pub dificuldade: Option<String>,
    pub tipo: Option<String>,
    pub restricao_alimentar: Option<String>,
    pub categoria: Option<String>,
    pub imagem: Option<String>,
}

impl From<RecipeRequest> for RecipeInput {
    fn from(request: RecipeRequest) -> Self {
        Self {
            user_id: request.id_usuario,
            title: request.titulo,
            description: request.descricao,
            prep_time: request.tempo_preparo,
            difficulty: request.dificuldade,
            kind: request.tipo,
            dietary_restriction: request.restricao_alimentar,
            category: request.categoria,
            image_url: request.imagem,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/receitas/",
            get(list::list_recipes).post(create::create_recipe),
        )
        .route(
            "/api/receitas/{id}/",
            get(get::get_recipe)
                .put(update::update_recipe)
                .patch(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/api/receitas/{id}/detalhada/", get(detailed::detailed_recipe))
        .route("/api/receitas/usuario/{user_id}/", get(by_user::recipes_by_user))
        .route("/api/receitas/filtrar/", get(filter::filter_recipes))
        .route("/api/receitas/mais-acessadas/", get(most_viewed::most_viewed_recipes))
        .route("/api/receitas/aleatorias/", get(random::random_recipes))
        .route("/api/receitas/categorias/", get(categories::list_categories))
        .route(
            "/api/receitas/categoria/{categoria}/",
            get(categories::recipes_by_category),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        detailed::detailed_recipe,
        by_user::recipes_by_user,
        filter::filter_recipes,
        most_viewed::most_viewed_recipes,
        random::random_recipes,
        categories::list_categories,
        categories::recipes_by_category,
    ),
    components(schemas(
        RecipeResponse,
        RecipeRequest,
        detailed::RecipeDetailResponse,
        detailed::RecipeDetailIngredient,
        categories::CategoryResponse,
        categories::CategoryCount,
        categories::CategoriesResponse,
        categories::CategoryRecipesResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use kitem_core::{Category, Difficulty, RecipeKind};

    #[test]
    fn test_response_uses_codes_and_labels() {
        let recipe = Recipe {
            id: 3,
            user_id: 1,
            title: "Feijoada".to_string(),
            description: "Completa".to_string(),
            prep_time: NaiveTime::from_hms_opt(3, 0, 0).unwrap(),
            difficulty: Difficulty::MasterChef,
            kind: Some(RecipeKind::Savory),
            dietary_restriction: None,
            category: Category::RiceAndBeans,
            image_url: None,
            view_count: 4,
        };
        let response = RecipeResponse::from(recipe);
        assert_eq!(response.tempo_preparo, "03:00:00");
        assert_eq!(response.dificuldade, "Master Chef");
        assert_eq!(response.tipo.as_deref(), Some("salgado"));
        assert_eq!(response.categoria, "arroz_feijao");
        assert_eq!(response.categoria_display, "Arroz e Feijão");
    }

    #[test]
    fn test_request_field_names() {
        let request: RecipeRequest = serde_json::from_str(
            r#"{"id_usuario": 1, "titulo": "Bolo", "tempo_preparo": "00:40", "categoria": "bolos"}"#,
        )
        .unwrap();
        let input = RecipeInput::from(request);
        assert_eq!(input.user_id, Some(1));
        assert_eq!(input.title.as_deref(), Some("Bolo"));
        assert_eq!(input.prep_time.as_deref(), Some("00:40"));
        assert_eq!(input.category.as_deref(), Some("bolos"));
    }
}
