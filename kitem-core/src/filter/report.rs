use super::params::QueryParams;
use super::text::contains_ignore_case;
use crate::choices::{Choice, ReportReason};
use crate::error::ValidationError;
use crate::model::{RecipeId, Report, UserId};
use chrono::NaiveDate;

/// Criteria over reports. Date bounds are whole days, both inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub reason: Option<ReportReason>,
    pub recipe_id: Option<RecipeId>,
    pub reporter_id: Option<UserId>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    /// Substring of the detail text.
    pub search: Option<String>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `motivo`, `receita_id`, `usuario_id`, `data_inicio`, `data_fim`
    /// and `search`.
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        Ok(Self {
            reason: params.get("motivo").map(ReportReason::parse).transpose()?,
            recipe_id: params.get_id("receita_id")?,
            reporter_id: params.get_id("usuario_id")?,
            created_from: params.get_date("data_inicio")?,
            created_to: params.get_date("data_fim")?,
            search: params.get_string("search"),
        })
    }

    pub fn with_reason(mut self, reason: ReportReason) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn with_recipe(mut self, recipe_id: RecipeId) -> Self {
        self.recipe_id = Some(recipe_id);
        self
    }

    pub fn with_reporter(mut self, reporter_id: UserId) -> Self {
        self.reporter_id = Some(reporter_id);
        self
    }

    pub fn with_dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.created_from = from;
        self.created_to = to;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn matches(&self, report: &Report) -> bool {
        let day = report.created_at.date_naive();
        self.reason.is_none_or(|reason| report.reason == reason)
            && self.recipe_id.is_none_or(|id| report.recipe_id == id)
            && self.reporter_id.is_none_or(|id| report.reporter_id == id)
            && self.created_from.is_none_or(|from| day >= from)
            && self.created_to.is_none_or(|to| day <= to)
            && self.search.as_deref().is_none_or(|search| {
                report
                    .detail
                    .as_deref()
                    .is_some_and(|detail| contains_ignore_case(detail, search))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn report() -> Report {
        Report {
            unique_id: Uuid::nil(),
            recipe_id: 4,
            reporter_id: 9,
            reason: ReportReason::Spam,
            detail: Some("Link para site de apostas".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 23, 59, 0).unwrap(),
        }
    }

    #[test]
    fn test_date_bounds_include_whole_days() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 10);
        assert!(ReportFilter::new().with_dates(day, day).matches(&report()));
        let next = NaiveDate::from_ymd_opt(2024, 5, 11);
        assert!(!ReportFilter::new().with_dates(next, None).matches(&report()));
    }

    #[test]
    fn test_search_covers_detail_only() {
        assert!(ReportFilter::new().with_search("APOSTAS").matches(&report()));
        let mut bare = report();
        bare.detail = None;
        assert!(!ReportFilter::new().with_search("apostas").matches(&bare));
    }

    #[test]
    fn test_from_params() {
        let params = QueryParams::default()
            .with("motivo", "2")
            .with("receita_id", "4")
            .with("data_fim", "2024-05-10");
        let filter = ReportFilter::from_params(&params).unwrap();
        assert_eq!(filter.reason, Some(ReportReason::Spam));
        assert!(filter.matches(&report()));
        assert!(!filter.with_reporter(1).matches(&report()));
    }

    #[test]
    fn test_invalid_reason() {
        for value in ["8", "spam"] {
            let params = QueryParams::default().with("motivo", value);
            let err = ReportFilter::from_params(&params).unwrap_err();
            assert_eq!(err.field, "motivo");
        }
    }
}
