use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::{ListStatusSummary, ShoppingListRepository};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListStatusResponse {
    pub user_id: i32,
    pub total_listas: usize,
    pub listas_completas: usize,
    pub listas_incompletas: usize,
    pub listas_vazias: usize,
}

impl ShoppingListStatusResponse {
    fn new(user_id: i32, summary: ListStatusSummary) -> Self {
        Self {
            user_id,
            total_listas: summary.total,
            listas_completas: summary.complete,
            listas_incompletas: summary.incomplete,
            listas_vazias: summary.empty,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/listas_itens/usuario/{user_id}/status/",
    tag = "listas_itens",
    params(("user_id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Lists counted by completion state", body = ShoppingListStatusResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn shopping_list_status(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<ShoppingListStatusResponse>, ApiError> {
    let lists = PgStore::new(&pool).lists_with_counts(user_id)?;
    let summary = ListStatusSummary::from_counts(lists.into_iter().map(|(_, counts)| counts));
    Ok(Json(ShoppingListStatusResponse::new(user_id, summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitem_core::model::ItemCounts;

    #[test]
    fn test_status_response_fields() {
        let summary = ListStatusSummary::from_counts([
            ItemCounts { total: 0, purchased: 0 },
            ItemCounts { total: 3, purchased: 3 },
            ItemCounts { total: 3, purchased: 1 },
        ]);
        let json = serde_json::to_value(ShoppingListStatusResponse::new(4, summary)).unwrap();
        assert_eq!(json["user_id"], 4);
        assert_eq!(json["total_listas"], 3);
        assert_eq!(json["listas_completas"], 1);
        assert_eq!(json["listas_incompletas"], 1);
        assert_eq!(json["listas_vazias"], 1);
    }
}
