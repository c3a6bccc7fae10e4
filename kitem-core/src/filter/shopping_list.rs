use super::params::QueryParams;
use super::text::contains_ignore_case;
use crate::choices::{Choice, ListStatus};
use crate::error::ValidationError;
use crate::model::{ItemCounts, ShoppingList, UserId};

/// Criteria over one user's shopping lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListFilter {
    pub user_id: UserId,
    /// Substrings of the list name; every one must match.
    pub names: Vec<String>,
    pub status: Option<ListStatus>,
}

impl ShoppingListFilter {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            names: Vec::new(),
            status: None,
        }
    }

    /// `nome` and `search` both constrain the name; when both are given
    /// the list must contain each.
    pub fn from_params(user_id: UserId, params: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            names: params
                .get_string("nome")
                .into_iter()
                .chain(params.get_string("search"))
                .collect(),
            status: params.get("status").map(ListStatus::parse).transpose()?,
        })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn with_status(mut self, status: ListStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, list: &ShoppingList, counts: ItemCounts) -> bool {
        list.user_id == self.user_id
            && self.names.iter().all(|wanted| {
                list.name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, wanted))
            })
            && self
                .status
                .is_none_or(|status| ListStatus::from_counts(counts.total, counts.purchased) == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn list(name: Option<&str>) -> ShoppingList {
        ShoppingList {
            id: 1,
            user_id: 5,
            name: name.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status() {
        let complete = ItemCounts {
            total: 2,
            purchased: 2,
        };
        let filter = ShoppingListFilter::for_user(5).with_status(ListStatus::Complete);
        assert!(filter.matches(&list(None), complete));
        assert!(!filter.matches(&list(None), ItemCounts::default()));
        assert!(ShoppingListFilter::for_user(5)
            .with_status(ListStatus::Empty)
            .matches(&list(None), ItemCounts::default()));
    }

    #[test]
    fn test_name_and_owner() {
        let filter = ShoppingListFilter::for_user(5).with_name("feira");
        assert!(filter.matches(&list(Some("Feira de sábado")), ItemCounts::default()));
        assert!(!filter.matches(&list(None), ItemCounts::default()));
        assert!(!ShoppingListFilter::for_user(6).matches(&list(None), ItemCounts::default()));
    }

    #[test]
    fn test_from_params() {
        let params = QueryParams::default()
            .with("search", "mercado")
            .with("status", "INCOMPLETA");
        let filter = ShoppingListFilter::from_params(5, &params).unwrap();
        assert_eq!(filter.names, vec!["mercado"]);
        assert_eq!(filter.status, Some(ListStatus::Incomplete));
    }

    #[test]
    fn test_nome_and_search_both_apply() {
        let feira = list(Some("Feira de sábado"));
        let params = QueryParams::default()
            .with("nome", "feira")
            .with("search", "mercado");
        let filter = ShoppingListFilter::from_params(5, &params).unwrap();
        assert_eq!(filter.names, vec!["feira", "mercado"]);
        assert!(!filter.matches(&feira, ItemCounts::default()));

        let params = QueryParams::default()
            .with("nome", "feira")
            .with("search", "SÁBADO");
        let filter = ShoppingListFilter::from_params(5, &params).unwrap();
        assert!(filter.matches(&feira, ItemCounts::default()));
    }

    #[test]
    fn test_unknown_status_fails() {
        let params = QueryParams::default().with("status", "pronta");
        let err = ShoppingListFilter::from_params(5, &params).unwrap_err();
        assert_eq!(err.field, "status");
    }
}
