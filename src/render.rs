//! The boundary between scene assembly and whatever draws the result.

use tessera_common::ArrayIndex;

use crate::{scene::Scene, Float};

/// Something which consumes a finished [Scene]: a rasterizer, a plotting backend, an exporter.
///
/// Rendering is a synchronous hand-off; the scene is borrowed for the duration of the call and
/// never modified.
pub trait Renderer<Real: Float, Idx: ArrayIndex> {
    type Error: std::error::Error;

    fn render(&mut self, scene: &Scene<Real, Idx>) -> Result<(), Self::Error>;
}

impl<Real: Float, Idx: ArrayIndex, R: Renderer<Real, Idx> + ?Sized> Renderer<Real, Idx> for &mut R {
    type Error = R::Error;

    #[inline]
    fn render(&mut self, scene: &Scene<Real, Idx>) -> Result<(), Self::Error> {
        (**self).render(scene)
    }
}
