use nalgebra::point;
use tessera::{
    mesh::{ColorError, Lighting, Shading},
    primitive::{cone, cube, sphere},
    Color, ConeBase, Corner, Material, Mesh, ShapeKind,
};

#[test]
fn color_parsing() {
    assert_eq!("#1E90FF".parse::<Color>(), Ok(Color::Rgb(0x1e, 0x90, 0xff)));
    assert_eq!(" DodgerBlue ".parse::<Color>(), Ok(Color::named("dodgerblue")));
    assert_eq!("".parse::<Color>(), Err(ColorError::Empty));
    assert!(matches!(
        "#12345".parse::<Color>(),
        Err(ColorError::MalformedHex(_))
    ));
    assert!(matches!(
        "#12345g".parse::<Color>(),
        Err(ColorError::MalformedHex(_))
    ));
    assert_eq!(Color::Rgb(0x1e, 0x90, 0xff).to_string(), "#1e90ff");
    assert_eq!(Color::named("royalblue").to_string(), "royalblue");
}

#[test]
fn material_builders() {
    let m: Material<f64> = Material::for_shape(ShapeKind::Cylinder, Color::named("red"))
        .with_opacity(0.5)
        .with_shading(Shading::Flat)
        .with_light_position(point![0.0, 0.0, 10.0]);
    assert_eq!(m.lighting, Lighting::new(0.5, 0.9, 0.4, 0.3));
    assert_eq!(m.opacity, 0.5);
    assert_eq!(m.shading, Shading::Flat);
    assert_eq!(Material::<f64>::new(Color::WHITE).shading, Shading::Smooth);

    let mesh: Mesh = cube(point![0.0, 0.0, 0.0], 1.0, m.clone()).unwrap();
    let recolored = mesh.clone().with_material(Material::new(Color::WHITE));
    assert_eq!(mesh.vertices(), recolored.vertices());
    assert_eq!(mesh.triangles(), recolored.triangles());
    assert_eq!(mesh.material(), &m);
    assert_eq!(recolored.material().color, Color::WHITE);
}

#[test]
fn corners() {
    assert_eq!(Corner::all().count(), 8);
    for c in Corner::all() {
        assert_eq!(Corner::new(c.x(), c.y(), c.z()), c);
        assert_eq!(c.opposite().opposite(), c);
        assert_eq!(c.signs::<f64>(), -c.opposite().signs::<f64>());
    }
    assert_eq!(Corner::new(true, false, true), Corner(0b101));
    assert_eq!(
        Corner(0b110).position(&point![1.0, 1.0, 1.0], 0.5),
        point![1.5, 1.5, 0.5]
    );
}

#[test]
fn cube_vertices_follow_corner_order() {
    let center = point![0.0, 0.0, 0.0];
    let mesh: Mesh = cube(center, 2.0, Material::new(Color::WHITE)).unwrap();
    for c in Corner::all() {
        assert_eq!(mesh.vertices()[usize::from(c)], c.position(&center, 1.0));
    }
}

#[test]
fn face_measurements() {
    let mesh: Mesh = cube(point![0.0, 0.0, 0.0], 2.0, Material::new(Color::WHITE)).unwrap();
    let total = (0..mesh.triangle_count())
        .map(|t| mesh.area(t).unwrap())
        .sum::<f64>();
    assert!((total - 24.0).abs() < 1e-12);
    let c = mesh.centroid(0).unwrap();
    assert!((c - point![-1.0, -1.0 / 3.0, 1.0 / 3.0]).norm() < 1e-12);
    assert!(mesh.area(12).is_none());
    assert!(mesh.face_normal(12).is_none());
    assert!(!mesh.is_degenerate(12, 1e-9));
    assert_eq!(
        mesh.bounds(),
        Some((point![-1.0, -1.0, -1.0], point![1.0, 1.0, 1.0]))
    );
}

#[test]
fn edge_map() {
    let open: Mesh = cone(
        point![0.0, 0.0, 0.0],
        1.0,
        1.0,
        Material::new(Color::WHITE),
        8,
        ConeBase::Open,
    )
    .unwrap();
    let edges = open.edge_map();
    // a disk: V - E + F = 9 - 16 + 8
    assert_eq!(edges.euler_characteristic(), 1);
    assert_eq!(edges.boundary().count(), 8);
    assert_eq!(edges.undirected(0, 8), 2);
    assert_eq!(edges.directed(0, 1), 1);
    assert_eq!(edges.directed(1, 0), 0);

    // the seam and poles are pinched, so the sphere isn't closed by index
    let ball: Mesh = sphere(point![0.0, 0.0, 0.0], 1.0, Material::new(Color::WHITE), 6).unwrap();
    assert!(!ball.is_watertight());
    assert!(ball.edge_map().is_consistently_oriented());
}
