use nalgebra::Point3;
use tessera_common::ArrayIndex;

use super::{audit, check_capacity, check_center, check_material, check_positive, tri, ShapeKind};
use crate::{
    error::{Error, Parameter},
    mesh::{Material, Mesh},
    Corner, Float,
};

/// The faces of a cube, as [Corner] indices wound counter-clockwise when seen from outside.
///
/// Each face is split along the diagonal between its first and third corners.
#[rustfmt::skip]
const FACES: [[u8; 4]; 6] = [
    [0, 1, 3, 2], // x-
    [4, 6, 7, 5], // x+
    [0, 4, 5, 1], // y-
    [2, 3, 7, 6], // y+
    [0, 2, 6, 4], // z-
    [1, 5, 7, 3], // z+
];

/// Generate an axis-aligned cube with edge length `size` centered on `center`.
///
/// The `n`th vertex lies at [Corner]`(n)`, so the vertex list is exactly the eight sign
/// combinations of `center ± size / 2`.
///
/// # Errors
///
/// * [`NonFiniteCenter`](Error::NonFiniteCenter) if any coordinate of `center` isn't finite
/// * [`NonPositive`](Error::NonPositive) if `size` isn't positive and finite
/// * [`Opacity`](Error::Opacity) if `material.opacity` ∉ `[0, 1]`
/// * [`IndexOverflow`](Error::IndexOverflow) if `Idx` can't address 8 vertices (never, for
///   primitive integers)
pub fn cube<Real: Float, Idx: ArrayIndex>(
    center: Point3<Real>,
    size: Real,
    material: Material<Real>,
) -> Result<Mesh<Real, Idx>, Error<Real>> {
    check_center(&center)?;
    check_positive(Parameter::Size, size)?;
    check_material(&material)?;
    let (_, triangle_count) = check_capacity::<Real, Idx>(Some(8), Some(FACES.len() * 2))?;

    let half = size * Real::HALF;
    let vertices = Corner::all()
        .map(|c| c.position(&center, half))
        .collect::<Vec<_>>();

    let mut triangles = vec![tri(0, 0, 0); triangle_count];
    for (pair, [a, b, c, d]) in triangles.chunks_exact_mut(2).zip(FACES) {
        let [a, b, c, d] = [a, b, c, d].map(usize::from);
        pair[0] = tri(a, b, c);
        pair[1] = tri(a, c, d);
    }

    let mesh = Mesh::from_parts(vertices, triangles, material);
    audit(ShapeKind::Cube, &mesh, 0);
    Ok(mesh)
}
