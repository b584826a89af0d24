use std::hash::Hash;

use num_traits::{AsPrimitive, NumCast, PrimInt, Unsigned};

pub mod macros;

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Any unsigned primitive integer qualifies; narrower types trade addressable length for memory.
pub trait ArrayIndex:
    PrimInt + Unsigned + AsPrimitive<usize> + Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Convert `n` into `Self`, or `None` if `n` doesn't fit.
    fn try_from_usize(n: usize) -> Option<Self>;

    /// Convert `n` into `Self`, discarding any high bits that don't fit.
    ///
    /// Only meaningful after checking `n` against [max_len](ArrayIndex::max_len).
    fn truncate_from(n: usize) -> Self;

    /// This index as a `usize`.
    #[inline]
    fn index(self) -> usize {
        self.as_()
    }

    /// The largest number of elements addressable by this index type.
    #[inline]
    fn max_len() -> usize {
        Self::max_value().as_().saturating_add(1)
    }
}

impl<P> ArrayIndex for P
where
    P: PrimInt + Unsigned + AsPrimitive<usize> + Hash + std::fmt::Debug + Send + Sync + 'static,
    usize: AsPrimitive<P>,
{
    #[inline]
    fn try_from_usize(n: usize) -> Option<Self> {
        <P as NumCast>::from(n)
    }

    #[inline]
    fn truncate_from(n: usize) -> Self {
        n.as_()
    }
}
