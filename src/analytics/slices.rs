//! Pie-chart slice reduction.

use std::cmp::Ordering;

use crate::domain::entities::{ChartOptions, LabeledValue, OTHER_LABEL, Slice};

/// Reduces raw values to a bounded, sorted slice list for a pie chart.
///
/// # Rules
///
/// 1. Entries with a non-finite value are dropped.
/// 2. Percentages are taken against the sum of the remaining values
///    (all zero when that sum is not positive).
/// 3. Entries are sorted by value, largest first; ties keep input order.
/// 4. Entries below `min_percent` are merged into one "Other" slice,
///    unless their combined value is zero, in which case they vanish.
/// 5. If more than `max_slices` remain, the first `max_slices - 1` are kept
///    and the tail (any earlier "Other" included) becomes a new "Other".
///
/// A single finite entry is returned as-is, whatever its share.
/// `max_slices` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use shop_admin_analytics::analytics::reduce_slices;
/// use shop_admin_analytics::domain::entities::{ChartOptions, LabeledValue};
///
/// let values = vec![
///     LabeledValue::new("A", 70.0),
///     LabeledValue::new("B", 20.0),
///     LabeledValue::new("C", 10.0),
/// ];
/// let slices = reduce_slices(&values, &ChartOptions::new(10, 15.0));
///
/// let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["A", "B", "Other"]);
/// assert_eq!(slices[2].percentage, 10.0);
/// ```
pub fn reduce_slices(values: &[LabeledValue], options: &ChartOptions) -> Vec<Slice> {
    let max_slices = options.max_slices.max(1);

    let finite: Vec<&LabeledValue> = values.iter().filter(|v| v.value.is_finite()).collect();
    let total: f64 = finite.iter().map(|v| v.value).sum();
    let share = |value: f64| {
        if total > 0.0 {
            value / total * 100.0
        } else {
            0.0
        }
    };

    let mut slices: Vec<Slice> = finite
        .iter()
        .map(|v| Slice::new(v.name.clone(), v.value, share(v.value)))
        .collect();

    if slices.len() <= 1 {
        return slices;
    }

    slices.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    let (mut prepared, minor): (Vec<Slice>, Vec<Slice>) = slices
        .into_iter()
        .partition(|s| s.percentage >= options.min_percent);

    let minor_sum: f64 = minor.iter().map(|s| s.value).sum();
    if minor_sum > 0.0 {
        prepared.push(Slice::new(OTHER_LABEL, minor_sum, share(minor_sum)));
    }

    if prepared.len() > max_slices {
        let rest = prepared.split_off(max_slices - 1);
        let rest_sum: f64 = rest.iter().map(|s| s.value).sum();
        prepared.push(Slice::new(OTHER_LABEL, rest_sum, share(rest_sum)));
    }

    prepared
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(pairs: &[(&str, f64)]) -> Vec<LabeledValue> {
        pairs
            .iter()
            .map(|(name, value)| LabeledValue::new(*name, *value))
            .collect()
    }

    fn names(slices: &[Slice]) -> Vec<&str> {
        slices.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_small_share_grouped_into_other() {
        let input = values(&[("A", 70.0), ("B", 20.0), ("C", 10.0)]);
        let slices = reduce_slices(&input, &ChartOptions::new(10, 15.0));

        assert_eq!(
            slices,
            vec![
                Slice::new("A", 70.0, 70.0),
                Slice::new("B", 20.0, 20.0),
                Slice::new("Other", 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(reduce_slices(&[], &ChartOptions::default()).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let input = values(&[("low", 10.0), ("tie-1", 30.0), ("high", 50.0), ("tie-2", 30.0)]);
        let slices = reduce_slices(&input, &ChartOptions::default());

        assert_eq!(names(&slices), vec!["high", "tie-1", "tie-2", "low"]);
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let input = values(&[
            ("A", 30.0),
            ("nan", f64::NAN),
            ("inf", f64::INFINITY),
            ("B", 10.0),
        ]);
        let slices = reduce_slices(&input, &ChartOptions::default());

        assert_eq!(names(&slices), vec!["A", "B"]);
        assert_eq!(slices[0].percentage, 75.0);
        assert_eq!(slices[1].percentage, 25.0);
    }

    #[test]
    fn test_all_zero_values_have_zero_share_and_no_other() {
        let input = values(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]);
        let slices = reduce_slices(&input, &ChartOptions::default());

        // Every entry falls below the threshold and sums to zero, so nothing survives.
        assert!(slices.is_empty());
    }

    #[test]
    fn test_all_zero_values_with_zero_threshold_collapse_by_count() {
        let input = values(&[("A", 0.0), ("B", 0.0), ("C", 0.0), ("D", 0.0)]);
        let slices = reduce_slices(&input, &ChartOptions::new(2, 0.0));

        assert_eq!(slices, vec![Slice::new("A", 0.0, 0.0), Slice::new("Other", 0.0, 0.0)]);
    }

    #[test]
    fn test_single_entry_returned_unchanged() {
        let input = values(&[("Only", 5.0)]);
        let slices = reduce_slices(&input, &ChartOptions::new(10, 150.0));
        assert_eq!(slices, vec![Slice::new("Only", 5.0, 100.0)]);

        let zero = values(&[("Zero", 0.0)]);
        let slices = reduce_slices(&zero, &ChartOptions::default());
        assert_eq!(slices, vec![Slice::new("Zero", 0.0, 0.0)]);
    }

    #[test]
    fn test_count_cap_collapses_tail_including_other() {
        // 12 equal entries of 8 (~7.8% each) plus 4 tiny ones grouped first into Other.
        let mut input: Vec<LabeledValue> = (0..12)
            .map(|i| LabeledValue::new(format!("S{i}"), 8.0))
            .collect();
        input.extend(values(&[("t1", 0.5), ("t2", 0.5), ("t3", 0.5), ("t4", 0.5)]));

        let slices = reduce_slices(&input, &ChartOptions::default());

        assert_eq!(slices.len(), 10);
        assert_eq!(slices[8].name, "S8");
        let other = &slices[9];
        assert!(other.is_other());
        assert_eq!(other.value, 3.0 * 8.0 + 2.0);
        assert_eq!(slices.iter().filter(|s| s.is_other()).count(), 1);
    }

    #[test]
    fn test_max_slices_zero_is_treated_as_one() {
        let input = values(&[("A", 1.0), ("B", 1.0)]);
        let slices = reduce_slices(&input, &ChartOptions::new(0, 0.0));

        assert_eq!(slices, vec![Slice::new("Other", 2.0, 100.0)]);
    }

    #[test]
    fn test_reduction_is_idempotent_for_same_input() {
        let input = values(&[("A", 3.0), ("B", 1.0), ("C", 0.01), ("D", 7.0)]);
        let options = ChartOptions::default();

        assert_eq!(reduce_slices(&input, &options), reduce_slices(&input, &options));
    }

    fn value_strategy() -> impl Strategy<Value = Vec<LabeledValue>> {
        prop::collection::vec((0u32..1_000, "[a-z]{1,6}"), 0..40).prop_map(|items| {
            items
                .into_iter()
                .map(|(value, name)| LabeledValue::new(name, f64::from(value)))
                .collect()
        })
    }

    proptest! {
        /// Collapsing into "Other" never creates or loses magnitude.
        #[test]
        fn prop_total_value_preserved(
            input in value_strategy(),
            max_slices in 1usize..15,
            min_percent in 0.0f64..20.0,
        ) {
            let slices = reduce_slices(&input, &ChartOptions::new(max_slices, min_percent));
            let before: f64 = input.iter().map(|v| v.value).sum();
            let after: f64 = slices.iter().map(|s| s.value).sum();
            prop_assert!((before - after).abs() < 1e-6);
        }

        /// The slice count never exceeds the configured cap.
        #[test]
        fn prop_bounded_by_max_slices(
            input in value_strategy(),
            max_slices in 1usize..15,
            min_percent in 0.0f64..20.0,
        ) {
            let slices = reduce_slices(&input, &ChartOptions::new(max_slices, min_percent));
            prop_assert!(slices.len() <= max_slices);
        }
    }
}
