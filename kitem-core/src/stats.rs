//! Counting over categorical values.

use crate::choices::{Category, Choice, ListStatus, ReportReason};
use crate::model::{ItemCounts, RecipeId, ReportDetails, UserId};
use std::collections::HashMap;
use std::hash::Hash;

/// Length of the "most reported" rankings.
pub const TOP_N: usize = 10;

/// Counts each distinct value, most frequent first.
///
/// Equal counts keep the order in which their values were first seen.
pub fn count_by<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// [`count_by`] truncated to the first `n` entries.
pub fn top_n<K, I>(values: I, n: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts = count_by(values);
    counts.truncate(n);
    counts
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportStatistics {
    pub total: usize,
    pub by_reason: Vec<(ReportReason, usize)>,
    /// (recipe id, title) with report count.
    pub most_reported_recipes: Vec<((RecipeId, String), usize)>,
    /// (user id, username) with report count.
    pub most_active_reporters: Vec<((UserId, String), usize)>,
}

impl ReportStatistics {
    pub fn from_reports(reports: &[ReportDetails]) -> Self {
        Self {
            total: reports.len(),
            by_reason: count_by(reports.iter().map(|row| row.report.reason)),
            most_reported_recipes: top_n(
                reports
                    .iter()
                    .map(|row| (row.report.recipe_id, row.recipe_title.clone())),
                TOP_N,
            ),
            most_active_reporters: top_n(
                reports
                    .iter()
                    .map(|row| (row.report.reporter_id, row.reporter_username.clone())),
                TOP_N,
            ),
        }
    }
}

/// Recipe count for every category, in declaration order, zeros included.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatistics {
    pub counts: Vec<(Category, usize)>,
}

impl CategoryStatistics {
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        let counted: HashMap<Category, usize> = count_by(categories).into_iter().collect();
        Self {
            counts: Category::all()
                .iter()
                .map(|category| (*category, counted.get(category).copied().unwrap_or(0)))
                .collect(),
        }
    }

    pub fn total_categories(&self) -> usize {
        self.counts.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListStatusSummary {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub empty: usize,
}

impl ListStatusSummary {
    pub fn from_counts<I: IntoIterator<Item = ItemCounts>>(lists: I) -> Self {
        lists
            .into_iter()
            .fold(Self::default(), |mut summary, counts| {
                summary.total += 1;
                match ListStatus::from_counts(counts.total, counts.purchased) {
                    ListStatus::Complete => summary.complete += 1,
                    ListStatus::Incomplete => summary.incomplete += 1,
                    ListStatus::Empty => summary.empty += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_orders_descending_with_stable_ties() {
        let counts = count_by(["b", "a", "c", "a", "c", "d"]);
        assert_eq!(counts, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn test_top_n_truncates() {
        let values: Vec<i32> = (0..15).collect();
        assert_eq!(top_n(values, TOP_N).len(), TOP_N);
        assert!(top_n(Vec::<i32>::new(), TOP_N).is_empty());
    }

    #[test]
    fn test_category_statistics_include_zeros() {
        let stats = CategoryStatistics::from_categories([Category::Cakes, Category::Cakes]);
        assert_eq!(stats.total_categories(), 40);
        assert_eq!(stats.counts[0], (Category::Pasta, 0));
        assert!(stats.counts.contains(&(Category::Cakes, 2)));
    }

    #[test]
    fn test_list_status_summary() {
        let summary = ListStatusSummary::from_counts([
            ItemCounts {
                total: 0,
                purchased: 0,
            },
            ItemCounts {
                total: 2,
                purchased: 2,
            },
            ItemCounts {
                total: 2,
                purchased: 1,
            },
        ]);
        assert_eq!(
            summary,
            ListStatusSummary {
                total: 3,
                complete: 1,
                incomplete: 1,
                empty: 1,
            }
        );
    }
}
