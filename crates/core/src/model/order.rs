use rand::Rng;
use rand::seq::SliceRandom;

/// Play order for a playthrough: positions mapped to case indices.
///
/// An `Order` read back from storage is not trusted until
/// [`Order::is_permutation_of`] has been checked against the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order(Vec<usize>);

impl Order {
    /// Wrap raw indices without validating them.
    #[must_use]
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Uniformly random permutation of `[0, len)`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(rng);
        Self(indices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case index at the given play position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// True iff every index in `[0, len)` appears exactly once.
    #[must_use]
    pub fn is_permutation_of(&self, len: usize) -> bool {
        if self.0.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for &index in &self.0 {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
