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

/// Resolution used by [Shape::cylinder](super::Shape::cylinder).
pub const CYLINDER_RESOLUTION: usize = 50;

/// Generate a capped cylinder standing on `center`, extending `height` along `+z`.
///
/// # Layout
///
/// With `r = resolution`:
///
/// * `0..r`: bottom ring, at angles `2π·i/r`
/// * `r..2r`: top ring, in the same order
/// * `2r`: bottom cap center
/// * `2r + 1`: top cap center
///
/// Each angular step `i` contributes four triangles, in this order: two covering the side quad
/// between `i` and `i + 1` (wrapping around to `0`), then one for each cap.
///
/// # Errors
///
/// * [`NonFiniteCenter`](Error::NonFiniteCenter) if any coordinate of `center` isn't finite
/// * [`NonPositive`](Error::NonPositive) if `radius` or `height` isn't positive and finite
/// * [`Resolution`](Error::Resolution) if `resolution` < [MIN_RESOLUTION](super::MIN_RESOLUTION)
/// * [`Opacity`](Error::Opacity) if `material.opacity` ∉ `[0, 1]`
/// * [`IndexOverflow`](Error::IndexOverflow) if `Idx` can't address `2r + 2` vertices, or
///   either buffer is too large to allocate
pub fn cylinder<Real: Float, Idx: ArrayIndex>(
    center: Point3<Real>,
    radius: Real,
    height: Real,
    material: Material<Real>,
    resolution: usize,
) -> Result<Mesh<Real, Idx>, Error<Real>> {
    check_center(&center)?;
    check_positive(Parameter::Radius, radius)?;
    check_positive(Parameter::Height, height)?;
    check_resolution(resolution)?;
    check_material(&material)?;
    let res = resolution;
    let (vertex_count, triangle_count) = check_capacity::<Real, Idx>(
        res.checked_mul(2).and_then(|n| n.checked_add(2)),
        res.checked_mul(4),
    )?;

    let top = center.z + height;
    let bottom_center = 2 * res;
    let top_center = bottom_center + 1;

    let mut vertices = vec![center; vertex_count];
    for i in 0..res {
        vertices[i] = ring_point(&center, radius, i, res, center.z);
        vertices[i + res] = ring_point(&center, radius, i, res, top);
    }
    vertices[top_center] = Point3::new(center.x, center.y, top);

    let mut triangles = vec![tri(0, 0, 0); triangle_count];
    for (i, step) in triangles.chunks_exact_mut(4).enumerate() {
        let next = (i + 1) % res;
        step[0] = tri(i, next, next + res);
        step[1] = tri(i, next + res, i + res);
        step[2] = tri(bottom_center, next, i);
        step[3] = tri(top_center, i + res, next + res);
    }

    let mesh = Mesh::from_parts(vertices, triangles, material);
    audit(ShapeKind::Cylinder, &mesh, 0);
    Ok(mesh)
}
