pub mod error;
pub mod favorites;
pub mod index;
pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipes;
pub mod reports;
pub mod shopping_list_items;
pub mod shopping_lists;
pub mod users;

pub use error::ApiError;

use crate::AppState;
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use kitem_core::ValidationError;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Offending field, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
        }
    }
}

/// Plain informational response, also used for empty filter results
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Presence check for a required body field.
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, "Este campo é obrigatório."))
}

/// 404 with a `message` body: the query ran and matched nothing.
pub fn no_results(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Every resource router merged; paths are absolute.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(users::router())
        .merge(ingredients::router())
        .merge(recipes::router())
        .merge(recipe_ingredients::router())
        .merge(favorites::router())
        .merge(shopping_lists::router())
        .merge(shopping_list_items::router())
        .merge(reports::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "kitem", description = "API de receitas, favoritos, listas de itens e denúncias"),
        components(schemas(ErrorResponse, MessageResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        index::ApiDoc::openapi(),
        users::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        recipe_ingredients::ApiDoc::openapi(),
        favorites::ApiDoc::openapi(),
        shopping_lists::ApiDoc::openapi(),
        shopping_list_items::ApiDoc::openapi(),
        reports::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_resource() {
        let spec = openapi();
        for path in [
            "/api/",
            "/api/usuarios/",
            "/api/ingredientes/",
            "/api/receitas/filtrar/",
            "/api/receita_ingredientes/",
            "/api/favoritos/toggle/{user_id}/{receita_id}/",
            "/api/listas_itens/usuario/{user_id}/status/",
            "/api/listas_itens_ingredientes/{id}/toggle-comprado/",
            "/api/denuncias/estatisticas/",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
        let schemas = &spec.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("ErrorResponse"));
    }

    #[test]
    fn test_router_builds() {
        let _ = router();
    }
}
