use super::params::QueryParams;
use super::text::{contains_ignore_case, eq_ignore_case};
use crate::choices::{Choice, Difficulty, RecipeKind};
use crate::error::ValidationError;
use crate::model::{Recipe, UserId};

/// Criteria over one user's favorites, evaluated on the favorited recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteFilter {
    pub user_id: UserId,
    pub kind: Option<RecipeKind>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
}

impl FavoriteFilter {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            kind: None,
            difficulty: None,
            search: None,
        }
    }

    pub fn from_params(user_id: UserId, params: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            kind: params.get("tipo").map(RecipeKind::parse).transpose()?,
            difficulty: params
                .get("dificuldade")
                .map(Difficulty::parse)
                .transpose()?,
            search: params.get_string("search"),
        })
    }

    pub fn with_kind(mut self, kind: RecipeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn matches(&self, user_id: UserId, recipe: &Recipe) -> bool {
        user_id == self.user_id
            && self.kind.is_none_or(|kind| {
                recipe
                    .kind
                    .is_some_and(|value| eq_ignore_case(value.code(), kind.code()))
            })
            && self
                .difficulty
                .is_none_or(|difficulty| recipe.difficulty == difficulty)
            && self
                .search
                .as_deref()
                .is_none_or(|search| contains_ignore_case(&recipe.title, search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Category;
    use chrono::NaiveTime;

    fn recipe(title: &str, kind: Option<RecipeKind>) -> Recipe {
        Recipe {
            id: 7,
            user_id: 1,
            title: title.to_string(),
            description: "-".to_string(),
            prep_time: NaiveTime::from_hms_opt(0, 40, 0).unwrap(),
            difficulty: Difficulty::Easy,
            kind,
            dietary_restriction: None,
            category: Category::Other,
            image_url: None,
            view_count: 3,
        }
    }

    #[test]
    fn test_always_constrained_to_user() {
        let filter = FavoriteFilter::for_user(2);
        let brownie = recipe("Brownie", Some(RecipeKind::Sweet));
        assert!(filter.matches(2, &brownie));
        assert!(!filter.matches(3, &brownie));
    }

    #[test]
    fn test_kind_requires_recipe_kind() {
        let filter = FavoriteFilter::for_user(2).with_kind(RecipeKind::Savory);
        assert!(filter.matches(2, &recipe("Coxinha", Some(RecipeKind::Savory))));
        assert!(!filter.matches(2, &recipe("Coxinha", None)));
    }

    #[test]
    fn test_from_params() {
        let params = QueryParams::default()
            .with("dificuldade", "fácil")
            .with("search", "brow");
        let filter = FavoriteFilter::from_params(2, &params).unwrap();
        assert_eq!(filter.difficulty, Some(Difficulty::Easy));
        assert!(filter.matches(2, &recipe("Brownie", None)));

        let params = QueryParams::default().with("tipo", "azedo");
        assert_eq!(
            FavoriteFilter::from_params(2, &params).unwrap_err().field,
            "tipo"
        );
    }
}
