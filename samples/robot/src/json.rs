//! A plotly-style figure: one `mesh3d` trace per part, plus the layout.

use std::io::Write;

use nalgebra::Point3;
use serde::Serialize;
use tessera::{
    mesh::Shading,
    scene::{AspectMode, Axis},
    Renderer, Scene,
};

#[derive(Debug, Serialize)]
struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Point3<f64>> for Xyz {
    fn from(p: Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[derive(Debug, Serialize)]
struct Lighting {
    ambient: f64,
    diffuse: f64,
    roughness: f64,
    specular: f64,
}

#[derive(Debug, Serialize)]
struct Trace<'s> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'s str,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    i: Vec<u32>,
    j: Vec<u32>,
    k: Vec<u32>,
    color: String,
    opacity: f64,
    flatshading: bool,
    lighting: Lighting,
    lightposition: Xyz,
}

#[derive(Debug, Serialize)]
struct AxisLayout {
    visible: bool,
}

#[derive(Debug, Serialize)]
struct Camera {
    eye: Xyz,
}

#[derive(Debug, Serialize)]
struct SceneLayout {
    xaxis: AxisLayout,
    yaxis: AxisLayout,
    zaxis: AxisLayout,
    aspectmode: &'static str,
    camera: Camera,
    bgcolor: String,
}

#[derive(Debug, Serialize)]
struct Margin {
    l: u32,
    r: u32,
    t: u32,
    b: u32,
}

#[derive(Debug, Serialize)]
struct Layout {
    scene: SceneLayout,
    margin: Margin,
    showlegend: bool,
}

#[derive(Debug, Serialize)]
struct Figure<'s> {
    data: Vec<Trace<'s>>,
    layout: Layout,
}

impl<'s> Figure<'s> {
    fn new(scene: &'s Scene<f64, u32>) -> Self {
        let data = scene
            .nodes()
            .iter()
            .map(|node| {
                let mesh = &node.mesh;
                let material = mesh.material();
                let l = material.lighting;
                Trace {
                    kind: "mesh3d",
                    name: &node.name,
                    x: mesh.x().collect(),
                    y: mesh.y().collect(),
                    z: mesh.z().collect(),
                    i: mesh.i().collect(),
                    j: mesh.j().collect(),
                    k: mesh.k().collect(),
                    color: material.color.to_string(),
                    opacity: material.opacity,
                    flatshading: material.shading == Shading::Flat,
                    lighting: Lighting {
                        ambient: l.ambient,
                        diffuse: l.diffuse,
                        roughness: l.roughness,
                        specular: l.specular,
                    },
                    lightposition: material.light_position.into(),
                }
            })
            .collect();

        let config = scene.config();
        let axis = |a| AxisLayout {
            visible: config.axes.is_visible(a),
        };
        let layout = Layout {
            scene: SceneLayout {
                xaxis: axis(Axis::X),
                yaxis: axis(Axis::Y),
                zaxis: axis(Axis::Z),
                aspectmode: match config.aspect {
                    AspectMode::Auto => "auto",
                    AspectMode::Data => "data",
                    AspectMode::Cube => "cube",
                },
                camera: Camera {
                    eye: config.camera.eye.into(),
                },
                bgcolor: config.background.to_string(),
            },
            margin: Margin {
                l: config.margins.left,
                r: config.margins.right,
                t: config.margins.top,
                b: config.margins.bottom,
            },
            showlegend: config.show_legend,
        };
        Self { data, layout }
    }
}

/// Writes each scene it's shown as a single JSON document.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Renderer<f64, u32> for JsonRenderer<W> {
    type Error = serde_json::Error;

    fn render(&mut self, scene: &Scene<f64, u32>) -> Result<(), Self::Error> {
        let figure = Figure::new(scene);
        tracing::debug!(traces = figure.data.len(), "writing figure");
        serde_json::to_writer_pretty(&mut self.writer, &figure)?;
        self.writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}

#[cfg(test)]
mod tests {
    use tessera::{scene::robot, Scene, SceneConfig};

    use super::JsonRenderer;

    #[test]
    fn figure_layout() {
        let scene: Scene = Scene::assemble(&robot(), SceneConfig::robot()).unwrap();
        let mut out = Vec::new();
        scene.show(JsonRenderer::new(&mut out)).unwrap();
        let figure: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let layout = &figure["layout"];
        assert_eq!(layout["scene"]["bgcolor"], "white");
        assert_eq!(layout["scene"]["aspectmode"], "data");
        assert_eq!(layout["scene"]["xaxis"]["visible"], false);
        assert!(layout.get("paper_bgcolor").is_none());
        assert_eq!(layout["showlegend"], false);

        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 8);
        assert_eq!(traces[0]["type"], "mesh3d");
        assert_eq!(traces[0]["name"], "body");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 8);
        assert_eq!(traces[0]["i"].as_array().unwrap().len(), 12);
        assert_eq!(traces[7]["lighting"]["specular"], 0.7);
    }
}
