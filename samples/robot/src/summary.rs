use std::convert::Infallible;

use tessera::{Float, Renderer, Scene};

/// Logs each part of a scene instead of drawing it.
#[derive(Debug, Default)]
pub struct SummaryRenderer;

impl Renderer<f64, u32> for SummaryRenderer {
    type Error = Infallible;

    fn render(&mut self, scene: &Scene<f64, u32>) -> Result<(), Self::Error> {
        for node in scene.nodes() {
            let mesh = &node.mesh;
            tracing::info!(
                part = %node.name,
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                color = %mesh.material().color,
                watertight = mesh.is_watertight(),
                "part"
            );
            let degenerate = mesh.degenerate_triangles(f64::TOLERANCE).count();
            if degenerate > 0 {
                tracing::debug!(part = %node.name, degenerate, "part has zero-area triangles");
            }
        }
        if let Some((mins, maxs)) = scene.bounds() {
            tracing::info!(
                mins = ?[mins.x, mins.y, mins.z],
                maxs = ?[maxs.x, maxs.y, maxs.z],
                "bounds"
            );
        }
        Ok(())
    }
}
