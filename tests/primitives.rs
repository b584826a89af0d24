//! Geometry and topology of the generated primitives.

mod common;

use common::{approx, approx_point, axial_distance, faces_outward, indices_valid, Solid};
use nalgebra::{point, Point3};
use quickcheck_macros::quickcheck;
use tessera::{
    primitive::{cone, cube, cylinder, sphere},
    Color, ConeBase, Error, Float, Material, Mesh, Parameter,
};

fn paint() -> Material<f64> {
    Material::new(Color::named("lightblue"))
}

#[test]
fn cube_scenario() {
    let mesh: Mesh = cube(point![0.0, 0.0, 0.0], 3.0, paint()).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.vertices().contains(&point![1.5, 1.5, 1.5]));
    assert!(mesh.vertices().contains(&point![-1.5, -1.5, -1.5]));
    mesh.validate_geometry(f64::TOLERANCE).unwrap();
}

#[test]
fn cube_corners_are_sign_combinations() {
    let center = point![1.0, -2.0, 0.5];
    let mesh: Mesh = cube(center, 1.2, paint()).unwrap();
    for sx in [-0.6, 0.6] {
        for sy in [-0.6, 0.6] {
            for sz in [-0.6, 0.6] {
                let corner = point![center.x + sx, center.y + sy, center.z + sz];
                let hits = mesh
                    .vertices()
                    .iter()
                    .filter(|v| approx_point(v, &corner, 1.0))
                    .count();
                assert_eq!(hits, 1, "corner {corner:?}");
            }
        }
    }
}

#[test]
fn cylinder_scenario() {
    let mesh: Mesh = cylinder(point![0.0, 0.0, 1.5], 0.35, 1.5, paint(), 50).unwrap();
    assert_eq!(mesh.vertex_count(), 102);
    // 50 steps × (2 side + 1 bottom cap + 1 top cap)
    assert_eq!(mesh.triangle_count(), 200);
    assert_eq!(mesh.vertices()[100], point![0.0, 0.0, 1.5]);
    assert_eq!(mesh.vertices()[101], point![0.0, 0.0, 3.0]);
    mesh.validate_geometry(f64::TOLERANCE).unwrap();
}

#[test]
fn sphere_scenario() {
    let mesh: Mesh = sphere(point![0.0, 0.0, 0.0], 1.0, paint(), 4).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.triangle_count(), 2 * 3 * 3);
    mesh.validate().unwrap();
}

/// Pole triangles are kept: one per cell touching a pole, in the first triangle of each
/// north-pole cell and the second of each south-pole cell.
#[test]
fn sphere_pole_triangles_are_degenerate() {
    let res = 5;
    let cells = res - 1;
    let mesh: Mesh = sphere(point![0.0, 0.0, 0.0], 2.0, paint(), res).unwrap();

    let mut expected = (0..cells)
        .flat_map(|i| [2 * (i * cells), 2 * (i * cells + cells - 1) + 1])
        .collect::<Vec<_>>();
    expected.sort_unstable();
    let found = mesh.degenerate_triangles(f64::TOLERANCE).collect::<Vec<_>>();
    assert_eq!(found, expected);

    assert!(matches!(
        mesh.validate_geometry(f64::TOLERANCE),
        Err(tessera::mesh::MeshError::DegenerateGeometry { triangle: 0 })
    ));
}

#[test]
fn sphere_poles_collapse() {
    let res = 12;
    let center = point![0.5, 0.25, -3.0];
    let mesh: Mesh = sphere(center, 0.3, paint(), res).unwrap();
    let north = point![center.x, center.y, center.z + 0.3];
    let south = point![center.x, center.y, center.z - 0.3];
    for i in 0..res {
        assert!(approx_point(&mesh.vertices()[i * res], &north, 1.0));
        assert!(approx_point(&mesh.vertices()[i * res + res - 1], &south, 1.0));
    }
}

#[test]
fn open_cone_reproduces_lateral_surface_only() {
    let res = 50;
    let mesh: Mesh = cone(point![0.0, 0.0, 3.75], 0.2, 0.6, paint(), res, ConeBase::Open).unwrap();
    assert_eq!(mesh.vertex_count(), res + 1);
    assert_eq!(mesh.triangle_count(), res);

    let edges = mesh.edge_map();
    assert!(!edges.is_closed());
    assert!(edges.is_consistently_oriented());
    let mut hole = edges.boundary().collect::<Vec<_>>();
    hole.sort_unstable();
    let mut ring = (0..res)
        .map(|i| {
            let next = (i + 1) % res;
            (i.min(next), i.max(next))
        })
        .collect::<Vec<_>>();
    ring.sort_unstable();
    assert_eq!(hole, ring);
}

#[test]
fn closed_cone_caps_base_without_extra_vertex() {
    let res = 50;
    let mesh: Mesh =
        cone(point![0.0, 0.0, 3.75], 0.2, 0.6, paint(), res, ConeBase::Closed).unwrap();
    assert_eq!(mesh.vertex_count(), res + 1);
    assert_eq!(mesh.triangle_count(), 2 * res - 2);
    assert!(approx_point(&mesh.vertices()[res], &point![0.0, 0.0, 4.35], 1.0));
    assert!(mesh.is_watertight());
    mesh.validate_geometry(f64::TOLERANCE).unwrap();
}

#[test]
fn default_cone_base_is_closed() {
    assert_eq!(ConeBase::default(), ConeBase::Closed);
}

#[test]
fn invalid_parameters() {
    let o = point![0.0, 0.0, 0.0];

    for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = cube::<f64, u32>(o, size, paint()).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::Size));
        assert!(err.is_invalid_parameter());
    }
    assert_eq!(
        cylinder::<f64, u32>(o, -0.35, 1.5, paint(), 50).unwrap_err(),
        Error::NonPositive(Parameter::Radius, -0.35)
    );
    assert_eq!(
        cylinder::<f64, u32>(o, 0.35, 0.0, paint(), 50).unwrap_err(),
        Error::NonPositive(Parameter::Height, 0.0)
    );
    assert_eq!(
        sphere::<f64, u32>(o, 1.0, paint(), 2).unwrap_err(),
        Error::Resolution { found: 2, min: 3 }
    );
    assert_eq!(
        cone::<f64, u32>(o, 1.0, 1.0, paint(), 0, ConeBase::Closed).unwrap_err(),
        Error::Resolution { found: 0, min: 3 }
    );
    assert_eq!(
        cone::<f64, u32>(o, 1.0, -2.0, paint(), 8, ConeBase::Open).unwrap_err(),
        Error::NonPositive(Parameter::Height, -2.0)
    );
    assert_eq!(
        cube::<f64, u32>(o, 1.0, paint().with_opacity(1.5)).unwrap_err(),
        Error::Opacity(1.5)
    );
    let nowhere = point![0.0, f64::NAN, 0.0];
    assert_eq!(
        sphere::<f64, u32>(nowhere, 1.0, paint(), 8)
            .unwrap_err()
            .parameter(),
        Some(Parameter::Center)
    );
}

#[test]
fn minimum_resolution() {
    let o = point![0.0, 0.0, 0.0];
    let c: Mesh = cylinder(o, 1.0, 1.0, paint(), 3).unwrap();
    assert!(c.is_watertight());
    let s: Mesh = sphere(o, 1.0, paint(), 3).unwrap();
    assert_eq!(s.triangle_count(), 8);
    let k: Mesh = cone(o, 1.0, 1.0, paint(), 3, ConeBase::Closed).unwrap();
    assert_eq!(k.triangle_count(), 4);
    assert!(k.is_watertight());
}

#[test]
fn parallel_arrays() {
    let mesh: Mesh = cylinder(point![1.0, 2.0, 3.0], 0.5, 1.0, paint(), 6).unwrap();
    assert_eq!(mesh.x().len(), mesh.vertex_count());
    assert_eq!(mesh.k().len(), mesh.triangle_count());
    for (n, ((x, y), z)) in mesh.x().zip(mesh.y()).zip(mesh.z()).enumerate() {
        assert_eq!(Point3::new(x, y, z), mesh.vertices()[n]);
    }
    for (t, ((i, j), k)) in mesh.i().zip(mesh.j()).zip(mesh.k()).enumerate() {
        assert_eq!([i, j, k], mesh.triangles()[t]);
    }
}

#[quickcheck]
fn cube_is_closed_and_outward(s: Solid) -> bool {
    let mesh: Mesh = cube(s.center, s.extent, paint()).unwrap();
    let edges = mesh.edge_map();
    mesh.vertex_count() == 8
        && mesh.triangle_count() == 12
        && indices_valid(&mesh)
        && edges.is_watertight()
        && edges.euler_characteristic() == 2
        && faces_outward(&mesh, &s.center)
        && mesh.degenerate_triangles(f64::TOLERANCE).next().is_none()
}

#[quickcheck]
fn cylinder_is_closed_and_outward(s: Solid) -> bool {
    let res = s.resolution;
    let mesh: Mesh = cylinder(s.center, s.extent, s.height, paint(), res).unwrap();
    let edges = mesh.edge_map();
    let interior = point![s.center.x, s.center.y, s.center.z + s.height / 2.0];
    mesh.vertex_count() == 2 * res + 2
        && mesh.triangle_count() == 4 * res
        && indices_valid(&mesh)
        && edges.is_watertight()
        && edges.euler_characteristic() == 2
        && faces_outward(&mesh, &interior)
        && mesh.degenerate_triangles(f64::TOLERANCE).next().is_none()
}

#[quickcheck]
fn cylinder_rings_lie_on_radius(s: Solid) -> bool {
    let res = s.resolution;
    let mesh: Mesh = cylinder(s.center, s.extent, s.height, paint(), res).unwrap();
    mesh.vertices()[..2 * res].iter().enumerate().all(|(n, p)| {
        let z = if n < res { s.center.z } else { s.center.z + s.height };
        approx(axial_distance(p, &s.center), s.extent, s.extent) && p.z == z
    })
}

#[quickcheck]
fn sphere_vertices_lie_on_radius(s: Solid) -> bool {
    let mesh: Mesh = sphere(s.center, s.extent, paint(), s.resolution).unwrap();
    mesh.vertices()
        .iter()
        .all(|p| approx((p - s.center).norm(), s.extent, s.extent))
}

#[quickcheck]
fn sphere_is_outward(s: Solid) -> bool {
    // at resolution 3 some cells are split by a plane through the center
    let res = s.resolution.max(4);
    let mesh: Mesh = sphere(s.center, s.extent, paint(), res).unwrap();
    mesh.vertex_count() == res * res
        && mesh.triangle_count() == 2 * (res - 1) * (res - 1)
        && indices_valid(&mesh)
        && faces_outward(&mesh, &s.center)
        && mesh.degenerate_triangles(f64::TOLERANCE).count() == 2 * (res - 1)
}

#[quickcheck]
fn cone_is_closed_and_outward(s: Solid) -> bool {
    let res = s.resolution;
    let mesh: Mesh = cone(s.center, s.extent, s.height, paint(), res, ConeBase::Closed).unwrap();
    let edges = mesh.edge_map();
    let interior = point![s.center.x, s.center.y, s.center.z + s.height / 4.0];
    let apex = point![s.center.x, s.center.y, s.center.z + s.height];
    mesh.vertex_count() == res + 1
        && mesh.triangle_count() == 2 * res - 2
        && indices_valid(&mesh)
        && edges.is_watertight()
        && edges.euler_characteristic() == 2
        && faces_outward(&mesh, &interior)
        && mesh.vertices()[res] == apex
        && mesh.vertices()[..res].iter().all(|p| {
            approx(axial_distance(p, &s.center), s.extent, s.extent) && p.z == s.center.z
        })
}

fn same_twice(generate: impl Fn() -> Mesh) -> bool {
    generate() == generate()
}

#[quickcheck]
fn generators_are_pure(s: Solid) -> bool {
    let (c, r, h, res) = (s.center, s.extent, s.height, s.resolution);
    same_twice(|| cube(c, r, paint()).unwrap())
        && same_twice(|| cylinder(c, r, h, paint(), res).unwrap())
        && same_twice(|| sphere(c, r, paint(), res).unwrap())
        && same_twice(|| cone(c, r, h, paint(), res, ConeBase::Open).unwrap())
}
