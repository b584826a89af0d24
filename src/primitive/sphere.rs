use nalgebra::Point3;
use tessera_common::ArrayIndex;

use super::{
    audit, check_capacity, check_center, check_material, check_positive, check_resolution, tri,
    ShapeKind,
};
use crate::{
    error::{Error, Parameter},
    mesh::{Material, Mesh},
    Float,
};

/// Resolution used by [Shape::sphere](super::Shape::sphere).
pub const SPHERE_RESOLUTION: usize = 40;

/// Generate a UV sphere of `radius` around `center`.
///
/// Longitude `u` spans `[0, 2π]` and latitude `v` spans `[0, π]`, each sampled at `resolution`
/// evenly spaced steps including both ends. Vertex `i·r + j` lies at
/// `center + radius·(cos uᵢ sin vⱼ, sin uᵢ sin vⱼ, cos vⱼ)`.
///
/// The seam (`u = 0` and `u = 2π`) and the poles (`v = 0` and `v = π`) are pinched rather than
/// shared: coincident vertices keep their own indices. Each cell of the `(r-1)²` grid is covered
/// by two triangles meeting on its `(i, j+1)–(i+1, j)` diagonal, so the cells touching a pole
/// each contain one zero-area triangle; there are `2(r-1)` of those in total.
///
/// # Errors
///
/// * [`NonFiniteCenter`](Error::NonFiniteCenter) if any coordinate of `center` isn't finite
/// * [`NonPositive`](Error::NonPositive) if `radius` isn't positive and finite
/// * [`Resolution`](Error::Resolution) if `resolution` < [MIN_RESOLUTION](super::MIN_RESOLUTION)
/// * [`Opacity`](Error::Opacity) if `material.opacity` ∉ `[0, 1]`
/// * [`IndexOverflow`](Error::IndexOverflow) if `Idx` can't address `r²` vertices, or
///   either buffer is too large to allocate
pub fn sphere<Real: Float, Idx: ArrayIndex>(
    center: Point3<Real>,
    radius: Real,
    material: Material<Real>,
    resolution: usize,
) -> Result<Mesh<Real, Idx>, Error<Real>> {
    check_center(&center)?;
    check_positive(Parameter::Radius, radius)?;
    check_resolution(resolution)?;
    check_material(&material)?;
    let res = resolution;
    let cells = res - 1;
    let (vertex_count, triangle_count) = check_capacity::<Real, Idx>(
        res.checked_mul(res),
        cells.checked_mul(cells).and_then(|n| n.checked_mul(2)),
    )?;

    let last = Real::from_count(res - 1);
    let mut vertices = vec![center; vertex_count];
    for (n, p) in vertices.iter_mut().enumerate() {
        let (i, j) = (n / res, n % res);
        let u = Real::TAU * Real::from_count(i) / last;
        let v = Real::PI * Real::from_count(j) / last;
        let (sin_v, cos_v) = v.sin_cos();
        *p = Point3::new(
            center.x + radius * u.cos() * sin_v,
            center.y + radius * u.sin() * sin_v,
            center.z + radius * cos_v,
        );
    }

    let mut triangles = vec![tri(0, 0, 0); triangle_count];
    for (cell, pair) in triangles.chunks_exact_mut(2).enumerate() {
        let (i, j) = (cell / cells, cell % cells);
        let p1 = i * res + j;
        let p2 = p1 + 1;
        let p3 = p1 + res;
        let p4 = p3 + 1;
        pair[0] = tri(p1, p2, p3);
        pair[1] = tri(p2, p4, p3);
    }

    let mesh = Mesh::from_parts(vertices, triangles, material);
    audit(ShapeKind::Sphere, &mesh, 2 * cells);
    Ok(mesh)
}
