use clap::Parser;
use tessera::{primitive::Shape, scene::robot, ConeBase, Scene, SceneConfig, SceneError};

mod cli;
mod json;
mod summary;

use cli::{Cli, Output};
use json::JsonRenderer;
use summary::SummaryRenderer;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Scene(#[from] SceneError<f64>),
    #[error("couldn't write figure: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let cone_base = ConeBase::from(cli.cone_base);
    let mut parts = robot::<f64>();
    for part in &mut parts {
        if let Shape::Cone { base, .. } = &mut part.shape {
            *base = cone_base;
        }
    }

    let scene: Scene = Scene::assemble(&parts, SceneConfig::robot()).inspect_err(|e| {
        tracing::error!(part = e.part(), "{e}");
    })?;
    tracing::info!(
        parts = scene.len(),
        vertices = scene.vertex_count(),
        triangles = scene.triangle_count(),
        "assembled robot"
    );

    match cli.output {
        Output::Summary => scene
            .show(SummaryRenderer)
            .unwrap_or_else(|never| match never {}),
        Output::Json => scene.show(JsonRenderer::new(std::io::stdout().lock()))?,
    }
    Ok(())
}
