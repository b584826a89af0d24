use std::{borrow::Cow, fmt, str::FromStr};

use nalgebra::Point3;

use crate::{primitive::ShapeKind, Float};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color names can't be empty")]
    Empty,
    #[error("expected a color in the form #rrggbb, found {0:?}")]
    MalformedHex(String),
}

/// The color a renderer fills a mesh with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// A named color understood by the renderer, e.g. `lightblue`.
    Named(Cow<'static, str>),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const WHITE: Self = Self::named("white");

    #[inline]
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse either `#rrggbb` or a bare color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let channel = |range: std::ops::Range<usize>| {
                hex.get(range)
                    .and_then(|c| u8::from_str_radix(c, 16).ok())
                    .ok_or_else(|| ColorError::MalformedHex(s.to_owned()))
            };
            if hex.len() != 6 {
                return Err(ColorError::MalformedHex(s.to_owned()));
            }
            return Ok(Self::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        Ok(Self::Named(Cow::Owned(s.to_ascii_lowercase())))
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Normals are interpolated across faces.
    #[default]
    Smooth,
    /// Each face is lit with its own normal.
    Flat,
}

/// Surface response to light; each factor is typically within `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting<Real: Float> {
    pub ambient: Real,
    pub diffuse: Real,
    pub roughness: Real,
    pub specular: Real,
}

impl<Real: Float> Lighting<Real> {
    pub fn new(ambient: Real, diffuse: Real, roughness: Real, specular: Real) -> Self {
        Self {
            ambient,
            diffuse,
            roughness,
            specular,
        }
    }

    /// The lighting each kind of shape is drawn with unless told otherwise.
    pub fn for_shape(kind: ShapeKind) -> Self {
        let [ambient, diffuse, roughness, specular] = match kind {
            ShapeKind::Cube => [0.5, 0.9, 0.4, 0.4],
            ShapeKind::Cylinder => [0.5, 0.9, 0.4, 0.3],
            ShapeKind::Sphere => [0.4, 0.9, 0.4, 0.5],
            ShapeKind::Cone => [0.5, 0.9, 0.3, 0.7],
        }
        .map(Real::cast);
        Self::new(ambient, diffuse, roughness, specular)
    }
}

impl<Real: Float> Default for Lighting<Real> {
    fn default() -> Self {
        Self::for_shape(ShapeKind::Cube)
    }
}

/// Rendering attributes attached to a [Mesh](crate::Mesh).
#[derive(Debug, Clone, PartialEq)]
pub struct Material<Real: Float> {
    pub color: Color,
    /// Within `[0, 1]`; generators reject anything else.
    pub opacity: Real,
    pub shading: Shading,
    pub lighting: Lighting<Real>,
    pub light_position: Point3<Real>,
}

impl<Real: Float> Material<Real> {
    /// An opaque, smooth-shaded material with [default lighting](Lighting::default).
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: Real::ONE,
            shading: Shading::Smooth,
            lighting: Lighting::default(),
            light_position: Point3::new(Real::cast(100.0), Real::cast(200.0), Real::ZERO),
        }
    }

    /// An opaque, smooth-shaded material lit the way `kind` is by default.
    pub fn for_shape(kind: ShapeKind, color: Color) -> Self {
        Self {
            lighting: Lighting::for_shape(kind),
            ..Self::new(color)
        }
    }

    pub fn with_opacity(self, opacity: Real) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_shading(self, shading: Shading) -> Self {
        Self { shading, ..self }
    }

    pub fn with_lighting(self, lighting: Lighting<Real>) -> Self {
        Self { lighting, ..self }
    }

    pub fn with_light_position(self, light_position: Point3<Real>) -> Self {
        Self {
            light_position,
            ..self
        }
    }
}
