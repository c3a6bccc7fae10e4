use super::{into_responses, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{stored, RecipeRow};
use crate::schema::recipes;
use crate::store::into_recipes;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::{Category, CategoryStatistics, Choice};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub codigo: String,
    pub nome: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            codigo: category.code().to_string(),
            nome: category.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCount {
    pub codigo: String,
    pub nome: String,
    pub quantidade_receitas: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categorias: Vec<CategoryResponse>,
    pub total_categorias: usize,
    pub estatisticas_por_categoria: Vec<CategoryCount>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRecipesResponse {
    /// Only set when the category has no recipes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub categoria: CategoryResponse,
    pub total_receitas: usize,
    pub receitas: Vec<RecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/api/receitas/categorias/",
    tag = "receitas",
    responses(
        (status = 200, description = "Every category with its recipe count", body = CategoriesResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_categories(
    State(pool): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let mut conn = pool.get()?;
    let codes: Vec<String> = recipes::table.select(recipes::category).load(&mut conn)?;
    let categories = codes
        .iter()
        .map(|code| stored::<Category>(code))
        .collect::<Result<Vec<_>, _>>()?;
    let statistics = CategoryStatistics::from_categories(categories);

    Ok(Json(CategoriesResponse {
        categorias: Category::all()
            .iter()
            .copied()
            .map(CategoryResponse::from)
            .collect(),
        total_categorias: statistics.total_categories(),
        estatisticas_por_categoria: statistics
            .counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                codigo: category.code().to_string(),
                nome: category.label().to_string(),
                quantidade_receitas: count,
            })
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/receitas/categoria/{categoria}/",
    tag = "receitas",
    params(("categoria" = String, Path, description = "Category code")),
    responses(
        (status = 200, description = "Recipes in the category, possibly none", body = CategoryRecipesResponse),
        (status = 404, description = "Unknown category code", body = ErrorResponse)
    )
)]
pub async fn recipes_by_category(
    State(pool): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CategoryRecipesResponse>, ApiError> {
    let category = Category::parse(&code).map_err(|_| {
        ApiError::NotFound(format!(
            "Categoria '{}' não encontrada. Categorias válidas: {}",
            code,
            Category::allowed_values()
        ))
    })?;

    let mut conn = pool.get()?;
    let rows: Vec<RecipeRow> = recipes::table
        .filter(recipes::category.eq(category.code()))
        .select(RecipeRow::as_select())
        .order(recipes::id.asc())
        .load(&mut conn)?;
    let recipes = into_recipes(rows)?;

    let message = recipes.is_empty().then(|| {
        format!(
            "Nenhuma receita encontrada na categoria '{}'.",
            category.label()
        )
    });
    Ok(Json(CategoryRecipesResponse {
        message,
        categoria: category.into(),
        total_receitas: recipes.len(),
        receitas: into_responses(recipes),
    }))
}
