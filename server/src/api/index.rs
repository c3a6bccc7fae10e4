use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("usuarios", "/api/usuarios/"),
    ("usuario", "/api/usuarios/{id}/"),
    ("usuarios_favoritos", "/api/usuarios/{id}/favoritos/"),
    ("usuarios_favorito_delete", "/api/usuarios/{id}/favoritos/{receita_id}/"),
    ("ingredientes", "/api/ingredientes/"),
    ("receitas", "/api/receitas/"),
    ("receitas_usuario", "/api/receitas/usuario/{user_id}/"),
    ("receita_detalhada", "/api/receitas/{id}/detalhada/"),
    ("receitas_filtrar", "/api/receitas/filtrar/"),
    ("receitas_mais_acessadas", "/api/receitas/mais-acessadas/"),
    ("receitas_aleatorias", "/api/receitas/aleatorias/"),
    ("receitas_categorias", "/api/receitas/categorias/"),
    ("receita_ingredientes", "/api/receita_ingredientes/"),
    ("favoritos", "/api/favoritos/"),
    ("favoritos_toggle", "/api/favoritos/toggle/{user_id}/{receita_id}/"),
    ("listas_itens", "/api/listas_itens/"),
    ("listas_itens_ingredientes", "/api/listas_itens_ingredientes/"),
    ("denuncias", "/api/denuncias/"),
    ("denuncias_filtrar", "/api/denuncias/filtrar/"),
    ("denuncias_estatisticas", "/api/denuncias/estatisticas/"),
    ("listas_compras", "/api/listas_compras/ [DEPRECADO]"),
    ("listas_compras_ingredientes", "/api/listas_compras_ingredientes/ [DEPRECADO]"),
    ("swagger_ui", "/swagger-ui"),
];

pub fn router() -> Router<AppState> {
    Router::new().route("/api/", get(index))
}

#[utoipa::path(
    get,
    path = "/api/",
    tag = "index",
    responses(
        (status = 200, description = "Resource roots", body = IndexResponse)
    )
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Seja bem-vindo à API do kitem".to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(index), components(schemas(IndexResponse)))]
pub struct ApiDoc;
