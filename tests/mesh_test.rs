use cgmath::{InnerSpace, Vector3};
use jumping_lamp::data_structures::mesh::{MeshData, MeshKind};

fn check_mesh(kind: MeshKind, mesh: &MeshData) {
    assert!(!mesh.indices.is_empty(), "{kind:?} has no triangles");
    assert_eq!(mesh.indices.len() % 3, 0);
    let count = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < count), "{kind:?} index out of range");

    for v in &mesh.vertices {
        let length = Vector3::from(v.normal).magnitude();
        assert!((length - 1.0).abs() < 1e-4, "{kind:?} normal of length {length}");
    }

    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
        let pa = Vector3::from(a.position);
        let face = (Vector3::from(b.position) - pa).cross(Vector3::from(c.position) - pa);
        // pole triangles of the sphere collapse to a line
        if face.magnitude() < 1e-6 {
            continue;
        }
        let smooth = Vector3::from(a.normal) + Vector3::from(b.normal) + Vector3::from(c.normal);
        assert!(
            face.dot(smooth) > 0.0,
            "{kind:?} triangle {tri:?} is wound clockwise"
        );
    }
}

#[test]
fn every_primitive_is_well_formed() {
    for kind in MeshKind::ALL {
        check_mesh(kind, &kind.build());
    }
}

#[test]
fn plane_tiles_its_grid() {
    let plane = MeshData::plane(5.0, 5.0, 10, 10);
    assert_eq!(plane.vertices.len(), 11 * 11);
    assert_eq!(plane.triangle_count(), 200);
    let (min, max) = plane.vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
        (lo.min(v.position[0]), hi.max(v.position[0]))
    });
    assert_eq!((min, max), (-2.5, 2.5));
}

#[test]
fn cube_has_hard_edges() {
    let cube = MeshData::hard_cube();
    assert_eq!(cube.vertices.len(), 24);
    assert_eq!(cube.triangle_count(), 12);
    assert!(
        cube.vertices
            .iter()
            .all(|v| v.position.iter().all(|p| p.abs() == 0.5))
    );
}

#[test]
fn cylinder_spans_unit_height() {
    let cylinder = MeshData::cylinder(16);
    for v in &cylinder.vertices {
        assert!(v.position[2] == 0.0 || v.position[2] == 1.0);
        let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
        assert!(r <= 0.5 + 1e-5);
    }
}

#[test]
fn cone_apex_on_the_axis() {
    let cone = MeshData::cone(12);
    let apexes = cone
        .vertices
        .iter()
        .filter(|v| v.position[2] == 1.0)
        .count();
    assert_eq!(apexes, 12);
    assert!(
        cone.vertices
            .iter()
            .filter(|v| v.position[2] == 1.0)
            .all(|v| v.position[0] == 0.0 && v.position[1] == 0.0)
    );
}
