use crate::model::Order;

/// Durable snapshot of a playthrough: the play order and the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub idx: usize,
    pub order: Order,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(idx: usize, order: Order) -> Self {
        Self { idx, order }
    }

    /// Start of a playthrough over the given order.
    #[must_use]
    pub fn fresh(order: Order) -> Self {
        Self { idx: 0, order }
    }

    /// Whether this record can resume a playthrough over `case_count` cases.
    ///
    /// Requires the order to be a permutation of `[0, case_count)` and the
    /// position to be at most `case_count` (equal means finished).
    #[must_use]
    pub fn fits(&self, case_count: usize) -> bool {
        self.order.is_permutation_of(case_count) && self.idx <= case_count
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.idx >= self.order.len()
    }
}
