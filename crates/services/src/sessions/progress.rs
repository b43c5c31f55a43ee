/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn new(solved: usize, total: usize) -> Self {
        Self {
            total,
            solved,
            remaining: total.saturating_sub(solved),
            is_complete: solved >= total,
        }
    }

    /// One-based position of the case on screen, capped at `total`.
    #[must_use]
    pub fn display_position(&self) -> usize {
        (self.solved + 1).min(self.total)
    }
}
