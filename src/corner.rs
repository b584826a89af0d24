use nalgebra::{Point3, Vector3};

use crate::Float;

/// A way to refer to the corners of an axis-aligned cube.
///
/// # Diagram
/// `XYZ>A`, where `XYZ` are the corner's signs (`1` = positive side), and `A` is the
/// corresponding vertex index.
/// <pre>
/// Lower (z-)      Upper (z+)
/// -------------   -------------     2 - 6     Y
/// |000>0|100>4|   |001>1|101>5|   3 - 7 |     |
/// |-----|-----|   |-----|-----|   |   | 4     ___ X
/// |010>2|110>6|   |011>3|111>7|   1 - 5      /
/// -------------   -------------             Z
/// </pre>
///
/// So, you can think of it as being a right-handed coordinate system.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Corner(pub u8);

impl Corner {
    /// Iterator through all possible corners, in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }

    /// Construct a Corner from the sides it lies on.
    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self((x as u8 * 0b100) | (y as u8 * 0b010) | (z as u8))
    }

    /// Whether self lies on the positive `x` side.
    #[inline]
    pub fn x(self) -> bool {
        self.0 & 0b100 != 0
    }
    /// Whether self lies on the positive `y` side.
    #[inline]
    pub fn y(self) -> bool {
        self.0 & 0b010 != 0
    }
    /// Whether self lies on the positive `z` side.
    #[inline]
    pub fn z(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// The corner diagonally across the cube from self.
    #[inline]
    pub fn opposite(self) -> Self {
        Self(!self.0 & 0b111)
    }

    /// Get a [Vector3] of unit signs from the cube's center to self.
    pub fn signs<Real: Float>(self) -> Vector3<Real> {
        let sign = |positive: bool| if positive { Real::ONE } else { -Real::ONE };
        Vector3::new(sign(self.x()), sign(self.y()), sign(self.z()))
    }

    /// The position of self on a cube centered at `center` with half-edge `half`.
    pub fn position<Real: Float>(self, center: &Point3<Real>, half: Real) -> Point3<Real> {
        center + self.signs::<Real>() * half
    }
}

impl From<Corner> for usize {
    fn from(c: Corner) -> Self {
        c.0 as usize
    }
}

impl From<Corner> for u8 {
    fn from(c: Corner) -> Self {
        c.0
    }
}
