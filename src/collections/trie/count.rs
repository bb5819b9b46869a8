//! Occurrence weights stored at trie nodes.

use core::fmt::Debug;

use num_traits::{SaturatingAdd, Unsigned, Zero};

/// A fixed-width unsigned occurrence count.
///
/// Counts only ever grow. Addition saturates at the type's maximum instead of
/// wrapping, so a node that has been hit more often than the width can record
/// simply stays pinned at `MAX`.
pub trait Count: Copy + Ord + Debug + Default + Zero + Unsigned + SaturatingAdd {
    /// Adds `other` to `self`, saturating at the numeric bound.
    #[inline]
    fn accumulate(self, other: Self) -> Self {
        SaturatingAdd::saturating_add(&self, &other)
    }
}

impl<C> Count for C where C: Copy + Ord + Debug + Default + Zero + Unsigned + SaturatingAdd {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_adds() {
        assert_eq!(3u32.accumulate(4), 7);
        assert_eq!(0u64.accumulate(0), 0);
    }

    #[test]
    fn test_accumulate_saturates() {
        assert_eq!(250u8.accumulate(10), u8::MAX);
        assert_eq!(u32::MAX.accumulate(1), u32::MAX);
    }
}
