use tessera_common::item_with;

/// Trait for floating-point types, so that meshes can be generic over {f32, f64} without
/// having to use [weird macros](tessera_common::item_with).
///
/// This is only intended to be implemented on floating-point types.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + nalgebra::SimdPartialOrd
    + nalgebra::SimdComplexField<SimdRealField = Self>
    + nalgebra::ClosedAddAssign
    + nalgebra::ClosedSubAssign
    + nalgebra::ClosedMulAssign
    + nalgebra::ClosedDivAssign
    + Copy
    + Send
    + Sync
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;

    const PI: Self;
    const TAU: Self;

    /// Relative tolerance used when comparing generated geometry against its analytic shape.
    const TOLERANCE: Self;

    /// Convert a literal into `Self`, rounding to the nearest representable value.
    fn cast(v: f64) -> Self;

    /// Convert a subdivision count or step into `Self`.
    fn from_count(n: usize) -> Self;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32 { EPSILON = 1e-5 }, f64 { EPSILON = 1e-9 } => impl Float for Real {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;

    const PI: Self = std::f64::consts::PI as Self;
    const TAU: Self = std::f64::consts::TAU as Self;

    const TOLERANCE: Self = EPSILON;

    #[inline]
    fn cast(v: f64) -> Self {
        v as Self
    }

    #[inline]
    fn from_count(n: usize) -> Self {
        n as Self
    }
}}
