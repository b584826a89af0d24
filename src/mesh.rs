//! Indexed triangle meshes, and the means to inspect them.
//!
//! # See Also
//!
//! * [primitive](crate::primitive), which generates them

mod error;
mod material;
mod topology;

pub use error::*;
pub use material::*;
pub use topology::*;

use nalgebra::{Point3, Vector3};
use tessera_common::ArrayIndex;

use crate::Float;

/// Three indices into a [Mesh]'s vertex list, wound counter-clockwise when seen from outside.
pub type Triangle<Idx> = [Idx; 3];

/// A set of vertices, the triangles connecting them, and the material they're drawn with.
///
/// Meshes are immutable once constructed; generators are the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<Real: Float = f64, Idx: ArrayIndex = u32> {
    vertices: Vec<Point3<Real>>,
    triangles: Vec<Triangle<Idx>>,
    material: Material<Real>,
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    pub(crate) fn from_parts(
        vertices: Vec<Point3<Real>>,
        triangles: Vec<Triangle<Idx>>,
        material: Material<Real>,
    ) -> Self {
        Self {
            vertices,
            triangles,
            material,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle<Idx>] {
        &self.triangles
    }

    #[inline]
    pub fn material(&self) -> &Material<Real> {
        &self.material
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The same geometry drawn with a different material.
    pub fn with_material(self, material: Material<Real>) -> Self {
        Self { material, ..self }
    }

    /// The `x` coordinate of each vertex, in vertex order.
    pub fn x(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        self.vertices.iter().map(|p| p.x)
    }

    /// The `y` coordinate of each vertex, in vertex order.
    pub fn y(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        self.vertices.iter().map(|p| p.y)
    }

    /// The `z` coordinate of each vertex, in vertex order.
    pub fn z(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        self.vertices.iter().map(|p| p.z)
    }

    /// The first index of each triangle, in triangle order.
    pub fn i(&self) -> impl ExactSizeIterator<Item = Idx> + '_ {
        self.triangles.iter().map(|t| t[0])
    }

    /// The second index of each triangle, in triangle order.
    pub fn j(&self) -> impl ExactSizeIterator<Item = Idx> + '_ {
        self.triangles.iter().map(|t| t[1])
    }

    /// The third index of each triangle, in triangle order.
    pub fn k(&self) -> impl ExactSizeIterator<Item = Idx> + '_ {
        self.triangles.iter().map(|t| t[2])
    }

    /// The corner positions of the `t`th triangle, or `None` if either the triangle or one of
    /// its vertices doesn't exist.
    pub fn corners(&self, t: usize) -> Option<[Point3<Real>; 3]> {
        let [a, b, c] = self.triangles.get(t)?;
        Some([
            *self.vertices.get(a.index())?,
            *self.vertices.get(b.index())?,
            *self.vertices.get(c.index())?,
        ])
    }

    /// The area-weighted normal of the `t`th triangle: it points out of the front face, and its
    /// length is twice the triangle's area.
    pub fn face_normal(&self, t: usize) -> Option<Vector3<Real>> {
        let [a, b, c] = self.corners(t)?;
        Some((b - a).cross(&(c - a)))
    }

    /// The area of the `t`th triangle.
    pub fn area(&self, t: usize) -> Option<Real> {
        self.face_normal(t).map(|n| n.norm() * Real::HALF)
    }

    /// The centroid of the `t`th triangle.
    pub fn centroid(&self, t: usize) -> Option<Point3<Real>> {
        let [a, b, c] = self.corners(t)?;
        Some(Point3::from((a.coords + b.coords + c.coords) / Real::cast(3.0)))
    }

    /// Whether the `t`th triangle has (near-)zero area.
    ///
    /// Area is compared against the square of the triangle's longest edge scaled by `tolerance`,
    /// so the result doesn't depend on the mesh's overall size. A triangle whose corners all
    /// coincide is always degenerate; a triangle that doesn't exist never is.
    pub fn is_degenerate(&self, t: usize, tolerance: Real) -> bool {
        let Some([a, b, c]) = self.corners(t) else {
            return false;
        };
        let longest = [b - a, c - b, a - c]
            .iter()
            .map(|e| e.norm_squared())
            .fold(Real::ZERO, Real::max);
        let doubled = (b - a).cross(&(c - a)).norm();
        longest == Real::ZERO || doubled * Real::HALF <= tolerance * longest
    }

    /// Indices of every [degenerate](Mesh::is_degenerate) triangle.
    pub fn degenerate_triangles(&self, tolerance: Real) -> impl Iterator<Item = usize> + '_ {
        (0..self.triangles.len()).filter(move |&t| self.is_degenerate(t, tolerance))
    }

    /// The corners `(mins, maxs)` of the axis-aligned box enclosing every vertex, or `None` for a
    /// mesh without vertices.
    pub fn bounds(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .skip(1)
                .fold((*first, *first), |(mins, maxs), p| (mins.inf(p), maxs.sup(p))),
        )
    }

    /// Check that every triangle references three distinct, existing vertices.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](MeshError::IndexOutOfRange) if an index is `>= self.vertex_count()`
    /// * [`RepeatedIndex`](MeshError::RepeatedIndex) if a triangle names one vertex twice
    pub fn validate(&self) -> Result<(), MeshError> {
        let len = self.vertices.len();
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(index) = tri.iter().map(|i| i.index()).find(|&i| i >= len) {
                return Err(MeshError::IndexOutOfRange {
                    triangle: t,
                    index,
                    len,
                });
            }
            let [a, b, c] = *tri;
            if a == b || b == c || a == c {
                return Err(MeshError::RepeatedIndex {
                    triangle: t,
                    indices: [a.index(), b.index(), c.index()],
                });
            }
        }
        Ok(())
    }

    /// [Validate](Mesh::validate) self, then check that no triangle is
    /// [degenerate](Mesh::is_degenerate).
    ///
    /// # Errors
    ///
    /// * Anything returned by [validate](Mesh::validate)
    /// * [`DegenerateGeometry`](MeshError::DegenerateGeometry) for the first degenerate triangle
    pub fn validate_geometry(&self, tolerance: Real) -> Result<(), MeshError> {
        self.validate()?;
        match self.degenerate_triangles(tolerance).next() {
            Some(triangle) => Err(MeshError::DegenerateGeometry { triangle }),
            None => Ok(()),
        }
    }
}
