use nalgebra::Point3;

use super::Part;
use crate::{mesh::Color, primitive::Shape, Float};

#[inline]
fn at<Real: Float>(x: f64, y: f64, z: f64) -> Point3<Real> {
    Point3::new(Real::cast(x), Real::cast(y), Real::cast(z))
}

/// The parts of a simple robot figure: a cube body with cube arms, a cylinder neck, a cube head
/// with two sphere eyes, and a cone antenna.
///
/// Pair with [SceneConfig::robot](super::SceneConfig::robot).
#[rustfmt::skip]
pub fn robot<Real: Float>() -> Vec<Part<Real>> {
    let r = Real::cast;
    vec![
        Part::new("body", Shape::cube(at(0.0, 0.0, 0.0), r(3.0)), Color::named("lightblue")),
        Part::new("neck", Shape::cylinder(at(0.0, 0.0, 1.5), r(0.35), r(1.5)), Color::named("red")),
        Part::new("head", Shape::cube(at(0.0, 0.0, 3.0), r(1.5)), Color::named("deepskyblue")),
        Part::new("left eye", Shape::sphere(at(-0.4, 0.75, 3.0), r(0.3)), Color::WHITE),
        Part::new("right eye", Shape::sphere(at(0.4, 0.75, 3.0), r(0.3)), Color::WHITE),
        Part::new("left arm", Shape::cube(at(-1.65, 0.0, 0.0), r(1.2)), Color::named("dodgerblue")),
        Part::new("right arm", Shape::cube(at(1.65, 0.0, 0.0), r(1.2)), Color::named("dodgerblue")),
        Part::new("antenna", Shape::cone(at(0.0, 0.0, 3.75), r(0.2), r(0.6)), Color::named("royalblue")),
    ]
}
