//! Shared generators and geometric checks for the integration tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use quickcheck::{Arbitrary, Gen};
use tessera::{ArrayIndex, Float, Mesh};

/// A uniformly distributed value within `[lo, hi]`.
fn uniform(g: &mut Gen, lo: f64, hi: f64) -> f64 {
    let t = u32::arbitrary(g) as f64 / u32::MAX as f64;
    lo + t * (hi - lo)
}

/// Arbitrary, valid parameters for any of the generators.
#[derive(Debug, Clone)]
pub struct Solid {
    pub center: Point3<f64>,
    /// Edge size or radius.
    pub extent: f64,
    pub height: f64,
    pub resolution: usize,
}

impl Arbitrary for Solid {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            center: Point3::new(
                uniform(g, -100.0, 100.0),
                uniform(g, -100.0, 100.0),
                uniform(g, -100.0, 100.0),
            ),
            extent: uniform(g, 0.05, 20.0),
            height: uniform(g, 0.05, 20.0),
            resolution: 3 + usize::arbitrary(g) % 62,
        }
    }
}

/// Every triangle references three distinct vertices within the mesh.
pub fn indices_valid<Idx: ArrayIndex>(mesh: &Mesh<f64, Idx>) -> bool {
    let len = mesh.vertex_count();
    mesh.triangles().iter().all(|t| {
        let [a, b, c] = t.map(ArrayIndex::index);
        a < len && b < len && c < len && a != b && b != c && a != c
    })
}

/// Every non-degenerate triangle's normal points away from `interior`.
pub fn faces_outward<Idx: ArrayIndex>(mesh: &Mesh<f64, Idx>, interior: &Point3<f64>) -> bool {
    (0..mesh.triangle_count())
        .filter(|&t| !mesh.is_degenerate(t, f64::TOLERANCE))
        .all(|t| {
            let normal = mesh.face_normal(t).unwrap();
            let outward: Vector3<f64> = mesh.centroid(t).unwrap() - interior;
            normal.dot(&outward) > 0.0
        })
}

/// `|a - b| <= TOLERANCE·scale`
pub fn approx(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= f64::TOLERANCE * scale.max(1.0)
}

pub fn approx_point(a: &Point3<f64>, b: &Point3<f64>, scale: f64) -> bool {
    approx(a.x, b.x, scale) && approx(a.y, b.y, scale) && approx(a.z, b.z, scale)
}

/// Horizontal distance between `p` and the vertical line through `axis`.
pub fn axial_distance(p: &Point3<f64>, axis: &Point3<f64>) -> f64 {
    ((p.x - axis.x).powi(2) + (p.y - axis.y).powi(2)).sqrt()
}
