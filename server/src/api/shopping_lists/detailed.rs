use super::LIST_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::models::ShoppingListRow;
use crate::schema::{ingredients, shopping_list_items, shopping_lists};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListDetailItem {
    pub id_lista_ingrediente: i32,
    pub quantidade: f64,
    pub unidade_medida: String,
    pub nome_ingrediente: String,
    pub comprado: bool,
    pub preco: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListDetailResponse {
    pub id_lista: i32,
    pub nome: Option<String>,
    pub data_criacao: DateTime<Utc>,
    pub id_usuario: i32,
    pub ingredientes: Vec<ShoppingListDetailItem>,
    pub total_ingredientes: usize,
    pub ingredientes_comprados: usize,
}

#[utoipa::path(
    get,
    path = "/api/listas_itens/{id}/detalhada/",
    tag = "listas_itens",
    params(("id" = i32, Path, description = "Shopping list ID")),
    responses(
        (status = 200, description = "List with its items and purchase totals", body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn detailed_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ShoppingListDetailResponse>, ApiError> {
    let mut conn = pool.get()?;
    let list = shopping_lists::table
        .find(id)
        .select(ShoppingListRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))?;

    let rows: Vec<(i32, f64, String, String, bool, Option<f64>)> = shopping_list_items::table
        .inner_join(ingredients::table)
        .filter(shopping_list_items::list_id.eq(id))
        .select((
            shopping_list_items::id,
            shopping_list_items::quantity,
            shopping_list_items::unit,
            ingredients::name,
            shopping_list_items::purchased,
            shopping_list_items::price,
        ))
        .order(shopping_list_items::id.asc())
        .load(&mut conn)?;

    let items: Vec<ShoppingListDetailItem> = rows
        .into_iter()
        .map(
            |(id, quantity, unit, name, purchased, price)| ShoppingListDetailItem {
                id_lista_ingrediente: id,
                quantidade: quantity,
                unidade_medida: unit,
                nome_ingrediente: name,
                comprado: purchased,
                preco: price,
            },
        )
        .collect();
    let purchased = items.iter().filter(|item| item.comprado).count();

    Ok(Json(ShoppingListDetailResponse {
        id_lista: list.id,
        nome: list.name,
        data_criacao: list.created_at,
        id_usuario: list.user_id,
        total_ingredientes: items.len(),
        ingredientes_comprados: purchased,
        ingredientes: items,
    }))
}
