//! Raw SQL fragments that can't be expressed in Diesel's type-safe DSL.
//!
//! # Safety
//!
//! User input is ALWAYS passed via `.bind()` parameters. No string
//! concatenation or interpolation with user data.

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::sql_types::Text;

/// `RANDOM()` for ordering; Diesel has no random function.
///
/// # Safety
/// Static SQL string with no user input.
pub fn random_order() -> SqlLiteral<Text> {
    sql::<Text>("RANDOM()")
}

/// True when `recipes.dietary_restriction` matches any of the ILIKE patterns.
///
/// # Safety
/// The pattern array is passed via `.bind()`.
///
/// # Why raw SQL?
/// Diesel can't express `ILIKE ANY(array)`.
#[macro_export]
macro_rules! restriction_ilike_any {
    ($patterns:expr) => {
        diesel::dsl::sql::<diesel::sql_types::Bool>("recipes.dietary_restriction ILIKE ANY(")
            .bind::<diesel::sql_types::Array<diesel::sql_types::Text>, _>($patterns)
            .sql(")")
    };
}

/// True when the recipe uses an ingredient whose name matches any pattern.
///
/// # Safety
/// The pattern array is passed via `.bind()`.
///
/// # Why raw SQL?
/// A correlated `EXISTS` keeps one row per recipe without `DISTINCT`.
#[macro_export]
macro_rules! recipe_uses_ingredient {
    ($patterns:expr) => {
        diesel::dsl::sql::<diesel::sql_types::Bool>(
            "EXISTS (SELECT 1 FROM recipe_ingredients ri \
             JOIN ingredients i ON i.id = ri.ingredient_id \
             WHERE ri.recipe_id = recipes.id AND i.name ILIKE ANY(",
        )
        .bind::<diesel::sql_types::Array<diesel::sql_types::Text>, _>($patterns)
        .sql("))")
    };
}
