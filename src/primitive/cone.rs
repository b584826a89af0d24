use nalgebra::Point3;
use tessera_common::ArrayIndex;

use super::{
    audit, check_capacity, check_center, check_material, check_positive, check_resolution,
    ring_point, tri, ShapeKind,
};
use crate::{
    error::{Error, Parameter},
    mesh::{Material, Mesh},
    Float,
};

/// Resolution used by [Shape::cone](super::Shape::cone).
pub const CONE_RESOLUTION: usize = 50;

/// How the base disk of a [cone] is treated.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConeBase {
    /// The base is covered by a fan of triangles over the ring vertices, anchored at ring vertex
    /// `0`, making the cone watertight without an extra vertex.
    #[default]
    Closed,
    /// Only the lateral surface is generated; the base is a hole bounded by the ring.
    Open,
}

impl ConeBase {
    /// Number of triangles covering the base of a cone with `resolution` ring vertices.
    pub fn triangle_count(self, resolution: usize) -> usize {
        match self {
            ConeBase::Closed => resolution.saturating_sub(2),
            ConeBase::Open => 0,
        }
    }
}

/// Generate a cone whose base circle is centered on `center`, with its apex `height` above
/// along `+z`.
///
/// # Layout
///
/// With `r = resolution`:
///
/// * `0..r`: base ring, at angles `2π·i/r`
/// * `r`: apex
///
/// The first `r` triangles form the lateral surface, one per angular step; a
/// [closed](ConeBase::Closed) base appends `r - 2` more.
///
/// # Errors
///
/// * [`NonFiniteCenter`](Error::NonFiniteCenter) if any coordinate of `center` isn't finite
/// * [`NonPositive`](Error::NonPositive) if `radius` or `height` isn't positive and finite
/// * [`Resolution`](Error::Resolution) if `resolution` < [MIN_RESOLUTION](super::MIN_RESOLUTION)
/// * [`Opacity`](Error::Opacity) if `material.opacity` ∉ `[0, 1]`
/// * [`IndexOverflow`](Error::IndexOverflow) if `Idx` can't address `r + 1` vertices, or
///   either buffer is too large to allocate
pub fn cone<Real: Float, Idx: ArrayIndex>(
    center: Point3<Real>,
    radius: Real,
    height: Real,
    material: Material<Real>,
    resolution: usize,
    base: ConeBase,
) -> Result<Mesh<Real, Idx>, Error<Real>> {
    check_center(&center)?;
    check_positive(Parameter::Radius, radius)?;
    check_positive(Parameter::Height, height)?;
    check_resolution(resolution)?;
    check_material(&material)?;
    let res = resolution;
    let (vertex_count, triangle_count) = check_capacity::<Real, Idx>(
        res.checked_add(1),
        res.checked_add(base.triangle_count(res)),
    )?;

    let apex = res;
    let mut vertices = vec![center; vertex_count];
    for (i, p) in vertices[..res].iter_mut().enumerate() {
        *p = ring_point(&center, radius, i, res, center.z);
    }
    vertices[apex] = Point3::new(center.x, center.y, center.z + height);

    let mut triangles = vec![tri(0, 0, 0); triangle_count];
    let (side, cap) = triangles.split_at_mut(res);
    for (i, t) in side.iter_mut().enumerate() {
        *t = tri(i, (i + 1) % res, apex);
    }
    for (n, t) in cap.iter_mut().enumerate() {
        // fan around ring vertex 0, facing -z
        let i = n + 1;
        *t = tri(0, i + 1, i);
    }

    let mesh = Mesh::from_parts(vertices, triangles, material);
    audit(ShapeKind::Cone, &mesh, 0);
    Ok(mesh)
}
