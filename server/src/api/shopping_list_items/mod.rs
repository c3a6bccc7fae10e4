pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod toggle;
pub mod update;

use crate::AppState;
use axum::routing::{get, patch};
use axum::Router;
use kitem_core::model::ShoppingListItem;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const ITEM_NOT_FOUND: &str = "Lista Itens Ingrediente não encontrado.";

const PREFIXES: [&str; 2] = [
    "/api/listas_itens_ingredientes",
    "/api/listas_compras_ingredientes",
];

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListItemResponse {
    pub id: i32,
    pub id_lista: i32,
    pub id_ingrediente: i32,
    pub quantidade: f64,
    pub unidade_medida: String,
    pub preco: Option<f64>,
    pub comprado: bool,
}

impl From<ShoppingListItem> for ShoppingListItemResponse {
    fn from(item: ShoppingListItem) -> Self {
        Self {
            id: item.id,
            id_lista: item.list_id,
            id_ingrediente: item.ingredient_id,
            quantidade: item.quantity,
            unidade_medida: item.unit,
            preco: item.price,
            comprado: item.purchased,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct ShoppingListItemRequest {
    pub id_lista: Option<i32>,
    pub id_ingrediente: Option<i32>,
    pub quantidade: Option<f64>,
    pub unidade_medida: Option<String>,
    /// Absent keeps the stored price; `null` clears it.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub preco: Option<Option<f64>>,
    pub comprado: Option<bool>,
}

/// Marks a field as present, so an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn router() -> Router<AppState> {
    PREFIXES.iter().fold(Router::new(), |router, prefix| {
        router
            .route(
                &format!("{prefix}/"),
                get(list::list_items).post(create::create_item),
            )
            .route(
                &format!("{prefix}/{{id}}/"),
                get(get::get_item)
                    .put(update::update_item)
                    .patch(update::update_item)
                    .delete(delete::delete_item),
            )
            .route(
                &format!("{prefix}/{{id}}/toggle-comprado/"),
                patch(toggle::toggle_purchased),
            )
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_item,
        get::get_item,
        update::update_item,
        delete::delete_item,
        toggle::toggle_purchased,
    ),
    components(schemas(
        ShoppingListItemResponse,
        ShoppingListItemRequest,
        toggle::TogglePurchasedResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_price_differs_from_missing_price() {
        let cleared: ShoppingListItemRequest = serde_json::from_str(r#"{"preco": null}"#).unwrap();
        assert_eq!(cleared.preco, Some(None));

        let untouched: ShoppingListItemRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(untouched.preco, None);

        let set: ShoppingListItemRequest =
            serde_json::from_str(r#"{"preco": 4.5, "comprado": true}"#).unwrap();
        assert_eq!(set.preco, Some(Some(4.5)));
        assert_eq!(set.comprado, Some(true));
    }
}
