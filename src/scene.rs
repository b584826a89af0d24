//! Composite scenes built from named [parts](Part).

mod config;
mod robot;

pub use config::*;
pub use robot::*;

use std::borrow::Cow;

use nalgebra::Point3;
use tessera_common::ArrayIndex;

use crate::{
    error::SceneError,
    mesh::{Color, Material, Mesh},
    primitive::Shape,
    render::Renderer,
    Float,
};

/// A named shape and the material it's drawn with; the unit of scene description.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<Real: Float> {
    pub name: Cow<'static, str>,
    pub shape: Shape<Real>,
    pub material: Material<Real>,
}

impl<Real: Float> Part<Real> {
    /// A part drawn in `color`, lit the way its shape is [by default](Material::for_shape).
    pub fn new(name: impl Into<Cow<'static, str>>, shape: Shape<Real>, color: Color) -> Self {
        let material = Material::for_shape(shape.kind(), color);
        Self {
            name: name.into(),
            shape,
            material,
        }
    }

    pub fn with_material(self, material: Material<Real>) -> Self {
        Self { material, ..self }
    }
}

/// A generated [Part].
#[derive(Debug, Clone, PartialEq)]
pub struct Node<Real: Float, Idx: ArrayIndex> {
    pub name: Cow<'static, str>,
    pub mesh: Mesh<Real, Idx>,
}

/// An ordered list of named meshes, plus the configuration they should be presented with.
///
/// Scenes are built once by [assemble](Scene::assemble) and not modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<Real: Float = f64, Idx: ArrayIndex = u32> {
    nodes: Vec<Node<Real, Idx>>,
    config: SceneConfig<Real>,
}

impl<Real: Float, Idx: ArrayIndex> Scene<Real, Idx> {
    /// Generate every part, in order.
    ///
    /// # Errors
    ///
    /// * [`Part`](SceneError::Part) for the first part whose generator fails; nothing is
    ///   returned for the parts before it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn assemble<'part>(
        parts: impl IntoIterator<Item = &'part Part<Real>>,
        config: SceneConfig<Real>,
    ) -> Result<Self, SceneError<Real>> {
        let nodes = parts
            .into_iter()
            .map(|part| {
                let mesh = part
                    .shape
                    .generate(part.material.clone())
                    .map_err(|source| SceneError::Part {
                        part: part.name.clone(),
                        source,
                    })?;
                Ok(Node {
                    name: part.name.clone(),
                    mesh,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(parts = nodes.len(), "assembled scene");
        Ok(Self { nodes, config })
    }

    #[inline]
    pub fn nodes(&self) -> &[Node<Real, Idx>] {
        &self.nodes
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig<Real> {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate through every mesh, in part order.
    pub fn meshes(&self) -> impl ExactSizeIterator<Item = &Mesh<Real, Idx>> {
        self.nodes.iter().map(|n| &n.mesh)
    }

    /// The mesh generated for the first part named `name`.
    pub fn get(&self, name: &str) -> Option<&Mesh<Real, Idx>> {
        self.nodes.iter().find(|n| n.name == name).map(|n| &n.mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes().map(Mesh::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes().map(Mesh::triangle_count).sum()
    }

    /// The corners `(mins, maxs)` of the axis-aligned box enclosing every mesh.
    pub fn bounds(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        self.meshes()
            .filter_map(Mesh::bounds)
            .reduce(|(mins, maxs), (lo, hi)| (mins.inf(&lo), maxs.sup(&hi)))
    }

    /// Hand self to `renderer`.
    ///
    /// # Errors
    ///
    /// * Whatever `renderer` returns.
    pub fn show<R: Renderer<Real, Idx>>(&self, mut renderer: R) -> Result<(), R::Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            parts = self.len(),
            vertices = self.vertex_count(),
            triangles = self.triangle_count(),
            "handing scene to renderer"
        );
        renderer.render(self)
    }
}
