pub mod by_user;
pub mod create;
pub mod delete;
pub mod detailed;
pub mod filter;
pub mod get;
pub mod list;
pub mod status;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use kitem_core::model::ShoppingList;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const LIST_NOT_FOUND: &str = "Lista de itens não encontrada.";

/// Current root and the older name kept for existing clients.
const PREFIXES: [&str; 2] = ["/api/listas_itens", "/api/listas_compras"];

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListResponse {
    pub id: i32,
    pub id_usuario: i32,
    pub nome: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id,
            id_usuario: list.user_id,
            nome: list.name,
            data_criacao: list.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct ShoppingListRequest {
    pub id_usuario: Option<i32>,
    pub nome: Option<String>,
}

pub fn router() -> Router<AppState> {
    PREFIXES
        .iter()
        .fold(Router::new(), |router, prefix| {
            router
                .route(
                    &format!("{prefix}/"),
                    get(list::list_shopping_lists).post(create::create_shopping_list),
                )
                .route(
                    &format!("{prefix}/{{id}}/"),
                    get(get::get_shopping_list)
                        .put(update::update_shopping_list)
                        .patch(update::update_shopping_list)
                        .delete(delete::delete_shopping_list),
                )
                .route(
                    &format!("{prefix}/{{id}}/detalhada/"),
                    get(detailed::detailed_shopping_list),
                )
                .route(
                    &format!("{prefix}/usuario/{{user_id}}/"),
                    get(by_user::user_shopping_lists),
                )
                .route(
                    &format!("{prefix}/usuario/{{user_id}}/filtrar/"),
                    get(filter::filter_shopping_lists),
                )
                .route(
                    &format!("{prefix}/usuario/{{user_id}}/status/"),
                    get(status::shopping_list_status),
                )
        })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_shopping_lists,
        create::create_shopping_list,
        get::get_shopping_list,
        update::update_shopping_list,
        delete::delete_shopping_list,
        detailed::detailed_shopping_list,
        by_user::user_shopping_lists,
        filter::filter_shopping_lists,
        status::shopping_list_status,
    ),
    components(schemas(
        ShoppingListResponse,
        ShoppingListRequest,
        detailed::ShoppingListDetailResponse,
        detailed::ShoppingListDetailItem,
        status::ShoppingListStatusResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_prefixes_are_routed() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/api/listas_itens/{id}/detalhada/"));
        // the legacy prefix is served but not documented twice
        assert!(!spec.paths.paths.contains_key("/api/listas_compras/"));
        let _ = router();
    }
}
