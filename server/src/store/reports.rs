use super::{store_error, PgStore};
use crate::models::{NewReportRow, ReportRow};
use crate::schema::{recipes, reports, users};
use chrono::{Days, NaiveDate, NaiveTime};
use diesel::prelude::*;
use kitem_core::error::StoreResult;
use kitem_core::filter::text::contains_pattern;
use kitem_core::model::{NewReport, RecipeId, Report, ReportDetails, UserId};
use kitem_core::{ReportFilter, ReportRepository};
use uuid::Uuid;

type DetailsRow = (ReportRow, String, String);

fn into_details((row, reporter_username, recipe_title): DetailsRow) -> StoreResult<ReportDetails> {
    Ok(ReportDetails {
        report: Report::try_from(row)?,
        reporter_username,
        recipe_title,
    })
}

fn start_of(day: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Reports joined with the reporter's username and the recipe title.
macro_rules! details_query {
    () => {
        reports::table
            .inner_join(recipes::table)
            .inner_join(users::table.on(users::id.eq(reports::reporter_id)))
            .select((ReportRow::as_select(), users::username, recipes::title))
    };
}

impl ReportRepository for PgStore<'_> {
    fn find_report(&self, unique_id: Uuid) -> StoreResult<Option<ReportDetails>> {
        let mut conn = self.conn()?;
        details_query!()
            .filter(reports::unique_id.eq(unique_id))
            .first::<DetailsRow>(&mut conn)
            .optional()
            .map_err(store_error)?
            .map(into_details)
            .transpose()
    }

    fn find_report_by_pair(
        &self,
        recipe_id: RecipeId,
        reporter_id: UserId,
    ) -> StoreResult<Option<Report>> {
        let mut conn = self.conn()?;
        reports::table
            .filter(reports::recipe_id.eq(recipe_id))
            .filter(reports::reporter_id.eq(reporter_id))
            .select(ReportRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(store_error)?
            .map(Report::try_from)
            .transpose()
    }

    fn insert_report(&self, new: &NewReport) -> StoreResult<Report> {
        let mut conn = self.conn()?;
        let row = diesel::insert_into(reports::table)
            .values(NewReportRow {
                unique_id: Uuid::new_v4(),
                recipe_id: new.recipe_id,
                reporter_id: new.reporter_id,
                reason: new.reason.number(),
                detail: new.detail.as_deref(),
            })
            .returning(ReportRow::as_returning())
            .get_result(&mut conn)
            .map_err(store_error)?;
        Report::try_from(row)
    }

    fn filter_reports(&self, filter: &ReportFilter) -> StoreResult<Vec<ReportDetails>> {
        let mut conn = self.conn()?;
        let mut query = details_query!().into_boxed();

        if let Some(reason) = filter.reason {
            query = query.filter(reports::reason.eq(reason.number()));
        }
        if let Some(recipe_id) = filter.recipe_id {
            query = query.filter(reports::recipe_id.eq(recipe_id));
        }
        if let Some(reporter_id) = filter.reporter_id {
            query = query.filter(reports::reporter_id.eq(reporter_id));
        }
        if let Some(from) = filter.created_from {
            query = query.filter(reports::created_at.ge(start_of(from)));
        }
        if let Some(to) = filter.created_to {
            // whole day: everything before the next midnight
            if let Some(next) = to.checked_add_days(Days::new(1)) {
                query = query.filter(reports::created_at.lt(start_of(next)));
            }
        }
        if let Some(search) = filter.search.as_deref() {
            query = query.filter(reports::detail.ilike(contains_pattern(search)));
        }

        let rows: Vec<DetailsRow> = query
            .order((reports::created_at.desc(), reports::id.desc()))
            .load(&mut conn)
            .map_err(store_error)?;
        rows.into_iter().map(into_details).collect()
    }
}
