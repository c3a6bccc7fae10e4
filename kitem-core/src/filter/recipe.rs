use super::params::QueryParams;
use super::text::{contains_ignore_case, eq_ignore_case};
use crate::choices::{Category, Choice, Difficulty, PrepTimeOperator, RecipeKind};
use crate::error::ValidationError;
use crate::model::Recipe;
use crate::prep_time::PrepTimeBucket;

/// Validated recipe search criteria.
///
/// Every populated field is one conjunct. The two list fields match when any
/// of their entries matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub kind: Option<RecipeKind>,
    pub category: Option<Category>,
    /// Substrings of the dietary restriction text.
    pub dietary_restrictions: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub prep_time: Option<PrepTimeBucket>,
    pub prep_time_operator: PrepTimeOperator,
    /// Substrings of ingredient names used by the recipe.
    pub ingredients: Vec<String>,
    /// Substring of the title.
    pub search: Option<String>,
}

impl RecipeFilter {
    /// A filter that matches every recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `tipo`, `categoria`, `restricao_alimentar`, `dificuldade`,
    /// `tempo_preparo`, `tempo_preparo_operador`, `ingredientes` and `search`.
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        let kind = params.get("tipo").map(RecipeKind::parse).transpose()?;
        let category = params.get("categoria").map(Category::parse).transpose()?;
        let difficulty = params
            .get("dificuldade")
            .map(Difficulty::parse)
            .transpose()?;
        let prep_time_operator = params
            .get("tempo_preparo_operador")
            .map(PrepTimeOperator::parse)
            .transpose()?
            .unwrap_or_default();
        let prep_time = params
            .get(PrepTimeBucket::FIELD)
            .map(PrepTimeBucket::parse)
            .transpose()?;

        Ok(Self {
            kind,
            category,
            dietary_restrictions: params.get_all("restricao_alimentar"),
            difficulty,
            prep_time,
            prep_time_operator,
            ingredients: params.get_all("ingredientes"),
            search: params.get_string("search"),
        })
    }

    pub fn with_kind(mut self, kind: RecipeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_prep_time(mut self, bucket: PrepTimeBucket) -> Self {
        self.prep_time = Some(bucket);
        self
    }

    pub fn with_dietary_restriction(mut self, restriction: &str) -> Self {
        self.dietary_restrictions.push(restriction.to_string());
        self
    }

    pub fn with_ingredient(mut self, name: &str) -> Self {
        self.ingredients.push(name.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Evaluates the filter against one recipe and the names of its ingredients.
    pub fn matches(&self, recipe: &Recipe, ingredient_names: &[&str]) -> bool {
        let kind = self.kind.is_none_or(|kind| {
            recipe
                .kind
                .is_some_and(|value| eq_ignore_case(value.code(), kind.code()))
        });
        let category = self
            .category
            .is_none_or(|category| eq_ignore_case(recipe.category.code(), category.code()));
        let restrictions = self.dietary_restrictions.is_empty()
            || recipe
                .dietary_restriction
                .as_deref()
                .is_some_and(|value| {
                    self.dietary_restrictions
                        .iter()
                        .any(|wanted| contains_ignore_case(value, wanted))
                });
        let difficulty = self.difficulty.is_none_or(|difficulty| {
            eq_ignore_case(recipe.difficulty.code(), difficulty.code())
        });
        let prep_time = self
            .prep_time
            .is_none_or(|bucket| bucket.contains(recipe.prep_time));
        let ingredients = self.ingredients.is_empty()
            || ingredient_names.iter().any(|name| {
                self.ingredients
                    .iter()
                    .any(|wanted| contains_ignore_case(name, wanted))
            });
        let search = self
            .search
            .as_deref()
            .is_none_or(|search| contains_ignore_case(&recipe.title, search));

        kind && category && restrictions && difficulty && prep_time && ingredients && search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn recipe() -> Recipe {
        Recipe {
            id: 1,
            user_id: 1,
            title: "Pudim de Leite".to_string(),
            description: "Clássico".to_string(),
            prep_time: NaiveTime::from_hms_opt(0, 25, 0).unwrap(),
            difficulty: Difficulty::Medium,
            kind: Some(RecipeKind::Sweet),
            dietary_restriction: Some("sem glúten".to_string()),
            category: Category::Desserts,
            image_url: None,
            view_count: 0,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(RecipeFilter::new().matches(&recipe(), &[]));
        assert_eq!(
            RecipeFilter::from_params(&QueryParams::default()).unwrap(),
            RecipeFilter::new()
        );
    }

    #[test]
    fn test_conjunction() {
        let filter = RecipeFilter::new()
            .with_kind(RecipeKind::Sweet)
            .with_difficulty(Difficulty::Medium)
            .with_search("PUDIM");
        assert!(filter.matches(&recipe(), &[]));
        assert!(!filter.with_category(Category::Cakes).matches(&recipe(), &[]));
    }

    #[test]
    fn test_list_criteria_are_disjunctions() {
        let filter = RecipeFilter::new()
            .with_dietary_restriction("vegano")
            .with_dietary_restriction("GLÚTEN");
        assert!(filter.matches(&recipe(), &[]));

        let filter = RecipeFilter::new()
            .with_ingredient("chocolate")
            .with_ingredient("leite");
        assert!(filter.matches(&recipe(), &["Leite condensado", "Ovos"]));
        assert!(!filter.matches(&recipe(), &["Ovos"]));
    }

    #[test]
    fn test_missing_restriction_fails_restriction_filter() {
        let mut plain = recipe();
        plain.dietary_restriction = None;
        assert!(!RecipeFilter::new()
            .with_dietary_restriction("glúten")
            .matches(&plain, &[]));
    }

    #[test]
    fn test_prep_time_param() {
        let params = QueryParams::default().with("tempo_preparo", "30");
        assert!(RecipeFilter::from_params(&params)
            .unwrap()
            .matches(&recipe(), &[]));
        let params = QueryParams::default().with("tempo_preparo", "20");
        assert!(!RecipeFilter::from_params(&params)
            .unwrap()
            .matches(&recipe(), &[]));
    }

    #[test]
    fn test_invalid_values_are_reported_not_ignored() {
        let err = RecipeFilter::from_params(&QueryParams::default().with("dificuldade", "Lendário"))
            .unwrap_err();
        assert_eq!(err.field, "dificuldade");
        for value in ["Fácil", "Média", "Difícil", "Master Chef"] {
            assert!(err.message.contains(value));
        }

        let err = RecipeFilter::from_params(
            &QueryParams::default().with("tempo_preparo_operador", "igual"),
        )
        .unwrap_err();
        assert_eq!(err.field, "tempo_preparo_operador");

        let err = RecipeFilter::from_params(&QueryParams::default().with("tipo", "amargo"))
            .unwrap_err();
        assert_eq!(err.message, "Tipo inválido. Valores permitidos: doce, salgado");
    }
}
