//! Row planning: distributing the ordered tabs across the display rows.
//!
//! The planner is generic over the item type and knows nothing about
//! filtering. The tab bar calls it twice per layout pass: once over the
//! full order (drop-target math) and once over the search-filtered order
//! (what is drawn).

/// Partition of an ordered sequence into display rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan<'a, T> {
    /// Items of each row; empty rows are kept
    pub rows: Vec<&'a [T]>,
    /// Offset of each row's first item in the input sequence
    pub row_starts: Vec<usize>,
    pub row_lengths: Vec<usize>,
}

impl<'a, T> RowPlan<'a, T> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        self.rows.get(row).copied()
    }

    /// Number of items across all rows
    pub fn total(&self) -> usize {
        self.row_lengths.iter().sum()
    }

    /// Row that holds the item at `position`, if any
    pub fn row_of(&self, position: usize) -> Option<usize> {
        self.row_starts
            .iter()
            .zip(&self.row_lengths)
            .position(|(&start, &len)| position >= start && position < start + len)
    }
}

/// Row lengths for `total` items across `row_count` rows of `capacity`.
///
/// When everything fits, rows are balanced: each takes
/// `min(capacity, ceil(remaining / rows_left))`. When it does not, every
/// row but the last is filled to `capacity` and the last row takes the
/// rest, uncapped. Both counts are floored to 1.
pub fn compute_row_lengths(total: usize, row_count: usize, capacity: usize) -> Vec<usize> {
    let row_count = row_count.max(1);
    let capacity = capacity.max(1);
    let mut lengths = vec![0; row_count];
    let mut remaining = total;

    if total <= row_count.saturating_mul(capacity) {
        for (i, len) in lengths.iter_mut().enumerate() {
            if remaining == 0 {
                break;
            }
            let rows_left = row_count - i;
            let take = capacity.min(remaining.div_ceil(rows_left));
            *len = take;
            remaining -= take;
        }
    } else {
        let last = row_count - 1;
        for (i, len) in lengths.iter_mut().enumerate() {
            let take = if i == last {
                remaining
            } else {
                capacity.min(remaining)
            };
            *len = take;
            remaining -= take;
        }
    }

    lengths
}

/// Distribute `ordered` across `row_count` rows holding `capacity` items
/// each (see [`compute_row_lengths`]).
pub fn plan_rows<T>(ordered: &[T], row_count: usize, capacity: usize) -> RowPlan<'_, T> {
    let row_lengths = compute_row_lengths(ordered.len(), row_count, capacity);
    let mut rows = Vec::with_capacity(row_lengths.len());
    let mut row_starts = Vec::with_capacity(row_lengths.len());

    let mut start = 0;
    for &len in &row_lengths {
        row_starts.push(start);
        rows.push(&ordered[start..start + len]);
        start += len;
    }

    RowPlan {
        rows,
        row_starts,
        row_lengths,
    }
}

/// Insertion point in the full order for a drop onto a row's background.
///
/// Always the end of that row's current contents. `plan` must be the plan
/// over the full order. `None` when `row` does not exist.
pub fn row_drop_to_full_position<T>(row: usize, plan: &RowPlan<'_, T>) -> Option<usize> {
    let start = *plan.row_starts.get(row)?;
    let len = *plan.row_lengths.get(row)?;
    Some(start + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_fill_takes_ceiling_first() {
        assert_eq!(compute_row_lengths(5, 2, 3), vec![3, 2]);
        assert_eq!(compute_row_lengths(7, 3, 5), vec![3, 2, 2]);
        assert_eq!(compute_row_lengths(6, 2, 3), vec![3, 3]);
    }

    #[test]
    fn overflow_lands_in_last_row() {
        assert_eq!(compute_row_lengths(10, 2, 3), vec![3, 7]);
        assert_eq!(compute_row_lengths(20, 3, 4), vec![4, 4, 12]);
    }

    #[test]
    fn fewer_tabs_than_rows_leaves_trailing_rows_empty() {
        assert_eq!(compute_row_lengths(2, 4, 10), vec![1, 1, 0, 0]);
        assert_eq!(compute_row_lengths(0, 3, 10), vec![0, 0, 0]);
    }

    #[test]
    fn degenerate_counts_floor_to_one() {
        assert_eq!(compute_row_lengths(3, 0, 0), vec![3]);
        assert_eq!(compute_row_lengths(3, 2, 0), vec![1, 2]);
    }

    #[test]
    fn single_row_takes_everything() {
        assert_eq!(compute_row_lengths(40, 1, 12), vec![40]);
    }

    #[test]
    fn plan_slices_and_offsets() {
        let items = [10, 11, 12, 13, 14];
        let plan = plan_rows(&items, 2, 3);
        assert_eq!(plan.rows, vec![&items[0..3], &items[3..5]]);
        assert_eq!(plan.row_starts, vec![0, 3]);
        assert_eq!(plan.row_lengths, vec![3, 2]);
        assert_eq!(plan.total(), 5);
        assert_eq!(plan.row_of(3), Some(1));
        assert_eq!(plan.row_of(5), None);
    }

    #[test]
    fn plan_keeps_empty_rows() {
        let items = [1];
        let plan = plan_rows(&items, 3, 4);
        assert_eq!(plan.row_count(), 3);
        assert_eq!(plan.row(2), Some(&[][..]));
        assert_eq!(plan.row_starts, vec![0, 1, 1]);
    }

    #[test]
    fn row_drop_appends_to_row_end() {
        let items = [0, 1, 2, 3, 4];
        let plan = plan_rows(&items, 2, 3);
        assert_eq!(row_drop_to_full_position(0, &plan), Some(3));
        assert_eq!(row_drop_to_full_position(1, &plan), Some(5));
        assert_eq!(row_drop_to_full_position(2, &plan), None);
    }

    #[test]
    fn row_drop_onto_empty_row_targets_end_of_previous_content() {
        let items = [0];
        let plan = plan_rows(&items, 3, 4);
        assert_eq!(row_drop_to_full_position(2, &plan), Some(1));
    }
}
