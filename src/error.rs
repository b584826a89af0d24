use std::{borrow::Cow, fmt};

use nalgebra::Point3;

use crate::Float;

/// A shape parameter which a generator validates on entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Parameter {
    Center,
    Size,
    Radius,
    Height,
    Resolution,
    Opacity,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::Center => "center",
            Parameter::Size => "size",
            Parameter::Radius => "radius",
            Parameter::Height => "height",
            Parameter::Resolution => "resolution",
            Parameter::Opacity => "opacity",
        })
    }
}

/// Errors produced by the [primitive generators](crate::primitive).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<Real: Float> {
    #[error("invalid {0}: expected a positive, finite value, found {1:?}")]
    NonPositive(Parameter, Real),
    #[error("invalid resolution: expected at least {min} subdivisions, found {found}")]
    Resolution { found: usize, min: usize },
    #[error("invalid opacity: expected a value within [0, 1], found {0:?}")]
    Opacity(Real),
    #[error("invalid center: coordinates must be finite, found {0:?}")]
    NonFiniteCenter(Point3<Real>),
    /// The mesh is too large for `index_type`, or for a single allocation.
    #[error("a mesh of {vertices} vertices can't be indexed by {index_type} (max {max_len})")]
    IndexOverflow {
        /// Saturates at `usize::MAX` when the count itself overflows.
        vertices: usize,
        max_len: usize,
        index_type: &'static str,
    },
}

impl<Real: Float> Error<Real> {
    /// The parameter which violated its constraint, if the error concerns a single parameter.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            Error::NonPositive(p, _) => Some(*p),
            Error::Resolution { .. } => Some(Parameter::Resolution),
            Error::Opacity(_) => Some(Parameter::Opacity),
            Error::NonFiniteCenter(_) => Some(Parameter::Center),
            Error::IndexOverflow { .. } => None,
        }
    }

    /// Whether this is an invalid-parameter condition, as opposed to a limitation of the
    /// requested index type.
    pub fn is_invalid_parameter(&self) -> bool {
        self.parameter().is_some()
    }
}

/// Errors produced while [assembling](crate::scene::Scene::assemble) a scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError<Real: Float> {
    #[error("couldn't generate part `{part}`: {source}")]
    Part {
        part: Cow<'static, str>,
        #[source]
        source: Error<Real>,
    },
}

impl<Real: Float> SceneError<Real> {
    /// Name of the part which failed.
    pub fn part(&self) -> &str {
        match self {
            SceneError::Part { part, .. } => part,
        }
    }

    /// The parameter of the failed part which violated its constraint.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            SceneError::Part { source, .. } => source.parameter(),
        }
    }
}
