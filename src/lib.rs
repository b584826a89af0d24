//! Procedurally generated triangle meshes for a handful of parametric solids, and a small
//! assembler composing them into a renderable scene.
//!
//! ```
//! use nalgebra::point;
//! use tessera::{primitive, Color, Material, Mesh};
//!
//! let paint = Material::new(Color::named("lightblue"));
//! let body: Mesh = primitive::cube(point![0.0, 0.0, 0.0], 3.0, paint)?;
//! assert_eq!(body.vertex_count(), 8);
//! assert_eq!(body.triangle_count(), 12);
//! # Ok::<(), tessera::Error<f64>>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod corner;
pub mod error;
mod float;
pub mod mesh;
pub mod primitive;
pub mod render;
pub mod scene;

pub use corner::*;
pub use error::{Error, Parameter, SceneError};
pub use float::*;
pub use mesh::{Color, Material, Mesh};
pub use primitive::{ConeBase, Shape, ShapeKind};
pub use render::Renderer;
pub use scene::{Part, Scene, SceneConfig};

pub use tessera_common::ArrayIndex;
