use nalgebra::Point3;

use crate::{mesh::Color, Float};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Which coordinate axes a renderer should draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Axes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Axes {
    pub const VISIBLE: Self = Self::all(true);
    pub const HIDDEN: Self = Self::all(false);

    const fn all(visible: bool) -> Self {
        Self {
            x: visible,
            y: visible,
            z: visible,
        }
    }

    pub fn is_visible(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// How a renderer should scale the axes relative to one another.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AspectMode {
    /// Let the renderer decide.
    #[default]
    Auto,
    /// Preserve true proportions: one unit is the same length along every axis.
    Data,
    /// Stretch each axis to fill the same length, regardless of extent.
    Cube,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera<Real: Float> {
    /// Position of the eye relative to the center of the scene, in units of the scene's extent.
    pub eye: Point3<Real>,
}

impl<Real: Float> Default for Camera<Real> {
    fn default() -> Self {
        let e = Real::cast(1.25);
        Self {
            eye: Point3::new(e, e, e),
        }
    }
}

/// Space around the plot, in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(m: u32) -> Self {
        Self {
            left: m,
            right: m,
            top: m,
            bottom: m,
        }
    }
}

/// Presentation settings handed to a [Renderer](crate::Renderer) along with the meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig<Real: Float> {
    pub axes: Axes,
    pub aspect: AspectMode,
    pub camera: Camera<Real>,
    pub background: Color,
    pub margins: Margins,
    pub show_legend: bool,
}

impl<Real: Float> Default for SceneConfig<Real> {
    fn default() -> Self {
        Self {
            axes: Axes::VISIBLE,
            aspect: AspectMode::Auto,
            camera: Camera::default(),
            background: Color::WHITE,
            margins: Margins {
                left: 80,
                right: 80,
                top: 100,
                bottom: 80,
            },
            show_legend: true,
        }
    }
}

impl<Real: Float> SceneConfig<Real> {
    /// The presentation used for the [robot](super::robot): a bare figure on white, in true
    /// proportions, seen from slightly above.
    pub fn robot() -> Self {
        Self {
            axes: Axes::HIDDEN,
            aspect: AspectMode::Data,
            camera: Camera {
                eye: Point3::new(Real::cast(1.5), Real::cast(1.5), Real::cast(1.2)),
            },
            background: Color::WHITE,
            margins: Margins::ZERO,
            show_legend: false,
        }
    }
}
