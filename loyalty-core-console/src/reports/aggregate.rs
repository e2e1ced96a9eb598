//! The three shapes every admin report is built from.

use chrono::NaiveDate;
use loyalty_core_api::domain::{DateRange, EmptyBoundPolicy};

/// What `group_and_count` does with categories nothing falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroCountPolicy {
    Omit,
    Include,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount<C> {
    pub category: C,
    pub count: usize,
}

/// Keeps items whose date lies in `range`, both ends inclusive.
pub fn filter_by_date_range<T, F>(
    items: &[T],
    date_of: F,
    range: &DateRange,
    policy: EmptyBoundPolicy,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> NaiveDate,
{
    items
        .iter()
        .filter(|item| range.contains(date_of(item), policy))
        .cloned()
        .collect()
}

/// Counts items per category, listed in `universe` order.
///
/// Items whose category is not in `universe` are not counted.
pub fn group_and_count<T, C, F>(
    items: &[T],
    category_of: F,
    universe: &[C],
    policy: ZeroCountPolicy,
) -> Vec<CategoryCount<C>>
where
    C: PartialEq + Clone,
    F: Fn(&T) -> C,
{
    let mut counts = vec![0usize; universe.len()];
    for item in items {
        let category = category_of(item);
        if let Some(slot) = universe.iter().position(|c| *c == category) {
            counts[slot] += 1;
        }
    }

    universe
        .iter()
        .zip(counts)
        .filter(|(_, count)| policy == ZeroCountPolicy::Include || *count > 0)
        .map(|(category, count)| CategoryCount {
            category: category.clone(),
            count,
        })
        .collect()
}

/// At most `n` items by `metric`, highest first. Ties keep input order.
pub fn top_n_by<T, K, F>(items: &[T], metric: F, n: usize) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| metric(b).cmp(&metric(a)));
    sorted.truncate(n);
    sorted
}
