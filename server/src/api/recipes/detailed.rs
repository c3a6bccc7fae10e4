use super::RECIPE_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::{favorites, ingredients, recipe_ingredients};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::{Choice, RecipeRepository};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeDetailIngredient {
    pub id_receita_ingrediente: i32,
    pub quantidade: f64,
    pub unidade_medida: String,
    pub nome_ingrediente: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeDetailResponse {
    pub id_receita: i32,
    pub titulo: String,
    pub dificuldade: String,
    pub ingredientes: Vec<RecipeDetailIngredient>,
    /// Number of users who favorited the recipe
    pub favorito: i64,
}

#[utoipa::path(
    get,
    path = "/api/receitas/{id}/detalhada/",
    tag = "receitas",
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe with its ingredients and favorite count", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn detailed_recipe(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeDetailResponse>, ApiError> {
    let recipe = PgStore::new(&pool)
        .find_recipe(id)?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;

    let mut conn = pool.get()?;
    let rows: Vec<(i32, f64, String, String)> = recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq(id))
        .select((
            recipe_ingredients::id,
            recipe_ingredients::quantity,
            recipe_ingredients::unit,
            ingredients::name,
        ))
        .order(recipe_ingredients::id.asc())
        .load(&mut conn)?;
    let favorite_count: i64 = favorites::table
        .filter(favorites::recipe_id.eq(id))
        .count()
        .get_result(&mut conn)?;

    Ok(Json(RecipeDetailResponse {
        id_receita: recipe.id,
        titulo: recipe.title,
        dificuldade: recipe.difficulty.code().to_string(),
        ingredientes: rows
            .into_iter()
            .map(|(id, quantity, unit, name)| RecipeDetailIngredient {
                id_receita_ingrediente: id,
                quantidade: quantity,
                unidade_medida: unit,
                nome_ingrediente: name,
            })
            .collect(),
        favorito: favorite_count,
    }))
}
