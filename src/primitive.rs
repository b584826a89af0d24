//! Generators for the supported parametric solids.
//!
//! Each generator is a pure function of its arguments: it validates them, sizes its vertex and
//! triangle buffers exactly, then fills them by direct index computation. Triangles are wound
//! counter-clockwise when seen from outside the solid.
//!
//! | shape                | vertices  | triangles                         |
//! |----------------------|-----------|-----------------------------------|
//! | [cube]               | `8`       | `12`                              |
//! | [cylinder]           | `2r + 2`  | `4r`                              |
//! | [sphere]             | `r²`      | `2(r-1)²`                         |
//! | [cone] (closed base) | `r + 1`   | `2r - 2`                          |
//! | [cone] (open base)   | `r + 1`   | `r`                               |
//!
//! where `r` is the resolution.

mod cone;
mod cube;
mod cylinder;
mod sphere;

pub use cone::*;
pub use cube::*;
pub use cylinder::*;
pub use sphere::*;

use std::fmt;

use nalgebra::Point3;
use tessera_common::ArrayIndex;

use crate::{
    error::{Error, Parameter},
    mesh::{Material, Mesh, Triangle},
    Float,
};

/// The smallest number of angular subdivisions which still encloses a volume.
pub const MIN_RESOLUTION: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Cylinder,
    Sphere,
    Cone,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cone => "cone",
        })
    }
}

/// A generator paired with its parameters, so that shapes can be described as data and
/// generated later.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<Real: Float> {
    Cube {
        center: Point3<Real>,
        size: Real,
    },
    Cylinder {
        /// Center of the bottom cap.
        center: Point3<Real>,
        radius: Real,
        height: Real,
        resolution: usize,
    },
    Sphere {
        center: Point3<Real>,
        radius: Real,
        resolution: usize,
    },
    Cone {
        /// Center of the base.
        center: Point3<Real>,
        radius: Real,
        height: Real,
        resolution: usize,
        base: ConeBase,
    },
}

impl<Real: Float> Shape<Real> {
    pub fn cube(center: Point3<Real>, size: Real) -> Self {
        Self::Cube { center, size }
    }

    pub fn cylinder(center: Point3<Real>, radius: Real, height: Real) -> Self {
        Self::Cylinder {
            center,
            radius,
            height,
            resolution: CYLINDER_RESOLUTION,
        }
    }

    pub fn sphere(center: Point3<Real>, radius: Real) -> Self {
        Self::Sphere {
            center,
            radius,
            resolution: SPHERE_RESOLUTION,
        }
    }

    pub fn cone(center: Point3<Real>, radius: Real, height: Real) -> Self {
        Self::Cone {
            center,
            radius,
            height,
            resolution: CONE_RESOLUTION,
            base: ConeBase::default(),
        }
    }

    /// Replace the resolution of a curved shape; cubes are returned unchanged.
    pub fn with_resolution(mut self, res: usize) -> Self {
        match &mut self {
            Shape::Cube { .. } => (),
            Shape::Cylinder { resolution, .. }
            | Shape::Sphere { resolution, .. }
            | Shape::Cone { resolution, .. } => *resolution = res,
        }
        self
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cube { .. } => ShapeKind::Cube,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cone { .. } => ShapeKind::Cone,
        }
    }

    pub fn center(&self) -> Point3<Real> {
        match self {
            Shape::Cube { center, .. }
            | Shape::Cylinder { center, .. }
            | Shape::Sphere { center, .. }
            | Shape::Cone { center, .. } => *center,
        }
    }

    /// Run the generator for this shape.
    ///
    /// # Errors
    ///
    /// * Anything the underlying generator returns.
    pub fn generate<Idx: ArrayIndex>(
        &self,
        material: Material<Real>,
    ) -> Result<Mesh<Real, Idx>, Error<Real>> {
        match *self {
            Shape::Cube { center, size } => cube(center, size, material),
            Shape::Cylinder {
                center,
                radius,
                height,
                resolution,
            } => cylinder(center, radius, height, material, resolution),
            Shape::Sphere {
                center,
                radius,
                resolution,
            } => sphere(center, radius, material, resolution),
            Shape::Cone {
                center,
                radius,
                height,
                resolution,
                base,
            } => cone(center, radius, height, material, resolution, base),
        }
    }
}

pub(crate) fn check_center<Real: Float>(center: &Point3<Real>) -> Result<(), Error<Real>> {
    if center.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFiniteCenter(*center))
    }
}

/// Rejects zero, negatives, NaN and infinities.
pub(crate) fn check_positive<Real: Float>(
    param: Parameter,
    value: Real,
) -> Result<(), Error<Real>> {
    if value.is_finite() && value > Real::ZERO {
        Ok(())
    } else {
        Err(Error::NonPositive(param, value))
    }
}

pub(crate) fn check_resolution<Real: Float>(resolution: usize) -> Result<(), Error<Real>> {
    if resolution < MIN_RESOLUTION {
        return Err(Error::Resolution {
            found: resolution,
            min: MIN_RESOLUTION,
        });
    }
    Ok(())
}

pub(crate) fn check_material<Real: Float>(material: &Material<Real>) -> Result<(), Error<Real>> {
    // NaN fails both comparisons
    if material.opacity >= Real::ZERO && material.opacity <= Real::ONE {
        Ok(())
    } else {
        Err(Error::Opacity(material.opacity))
    }
}

/// Check the vertex and triangle counts of a mesh about to be generated, returning them once
/// every vertex is addressable by `Idx` and both buffers can be allocated.
///
/// `None` stands for a count which doesn't fit in a `usize`.
pub(crate) fn check_capacity<Real: Float, Idx: ArrayIndex>(
    vertices: Option<usize>,
    triangles: Option<usize>,
) -> Result<(usize, usize), Error<Real>> {
    let allocatable = |count: usize, size: usize| {
        count
            .checked_mul(size)
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    };
    match (vertices, triangles) {
        (Some(v), Some(t))
            if v <= Idx::max_len()
                && allocatable(v, std::mem::size_of::<Point3<Real>>())
                && allocatable(t, std::mem::size_of::<Triangle<Idx>>()) =>
        {
            Ok((v, t))
        }
        (v, _) => Err(Error::IndexOverflow {
            vertices: v.unwrap_or(usize::MAX),
            max_len: Idx::max_len(),
            index_type: std::any::type_name::<Idx>(),
        }),
    }
}

/// Build a triangle from vertex indices already checked with [check_capacity].
#[inline]
pub(crate) fn tri<Idx: ArrayIndex>(a: usize, b: usize, c: usize) -> Triangle<Idx> {
    [
        Idx::truncate_from(a),
        Idx::truncate_from(b),
        Idx::truncate_from(c),
    ]
}

/// The point at angle `2π·step/resolution` on the horizontal circle of `radius` around
/// `center`.
#[inline]
pub(crate) fn ring_point<Real: Float>(
    center: &Point3<Real>,
    radius: Real,
    step: usize,
    resolution: usize,
    z: Real,
) -> Point3<Real> {
    let theta = Real::TAU * Real::from_count(step) / Real::from_count(resolution);
    Point3::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
        z,
    )
}

/// Log what a generator produced, flagging degenerate triangles beyond the `expected` number.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn audit<Real: Float, Idx: ArrayIndex>(
    kind: ShapeKind,
    mesh: &Mesh<Real, Idx>,
    expected: usize,
) {
    #[cfg(feature = "tracing")]
    {
        let degenerate = mesh.degenerate_triangles(Real::TOLERANCE).count();
        if degenerate > expected {
            tracing::warn!(
                shape = %kind,
                degenerate,
                expected,
                "generated mesh contains unexpected degenerate triangles"
            );
        } else if degenerate > 0 {
            tracing::debug!(shape = %kind, degenerate, "tolerating degenerate triangles");
        }
        tracing::trace!(
            shape = %kind,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated mesh"
        );
    }
}
