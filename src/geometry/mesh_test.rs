#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::primitive::{cuboid, dome};

#[test]
fn merge_offsets_indices_per_primitive() {
    let a = cuboid(Vec3::ZERO, Vec3::ONE);
    let b = cuboid(Vec3::splat(2.0), Vec3::splat(3.0));
    let mesh = Mesh::merge(vec![a, b], Material::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.triangle_count(), 24);
    assert!(mesh.indices()[36..].iter().all(|i| *i >= 8));
    assert!(mesh.indices().iter().all(|i| (*i as usize) < mesh.vertex_count()));
}

#[test]
fn merge_of_nothing_is_empty() {
    let mesh = Mesh::merge(Vec::new(), Material::default()).unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.bounds().is_none());
}

#[test]
fn merged_mesh_keeps_material() {
    let material = Material { base_color: [1.0, 0.0, 0.0, 1.0] };
    let mesh = Mesh::merge(vec![dome(Vec3::ZERO, 1.0, 1.0, 4, 2)], material).unwrap();
    assert_eq!(mesh.material(), material);
}

#[test]
fn bounds_cover_all_positions() {
    let mesh = Mesh::merge(vec![cuboid(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(4.0, 5.0, 6.0))], Material::default()).unwrap();
    let b = mesh.bounds().unwrap();
    assert_eq!(b.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(b.max, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(b.center(), Vec3::new(1.5, 1.5, 1.5));
    assert_eq!(b.size(), Vec3::new(5.0, 7.0, 9.0));
}

#[test]
fn translate_moves_bounds() {
    let mut mesh = Mesh::merge(vec![cuboid(Vec3::ZERO, Vec3::ONE)], Material::default()).unwrap();
    mesh.translate(Vec3::new(-0.5, -0.5, -0.5));
    assert_eq!(mesh.bounds().unwrap().center(), Vec3::ZERO);
}

#[test]
fn quarter_turn_about_x_maps_y_to_z() {
    let mut mesh = Mesh::merge(vec![cuboid(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0))], Material::default()).unwrap();
    mesh.rotate(glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2));
    let size = mesh.bounds().unwrap().size();
    assert!((size - Vec3::new(1.0, 3.0, 2.0)).length() < 1e-5);
}

#[test]
fn triangles_yield_corner_positions() {
    let mesh = Mesh::merge(vec![cuboid(Vec3::ZERO, Vec3::ONE)], Material::default()).unwrap();
    let tris: Vec<[Vec3; 3]> = mesh.triangles().collect();
    assert_eq!(tris.len(), 12);
    assert!(tris.iter().flatten().all(|p| p.cmpge(Vec3::ZERO).all() && p.cmple(Vec3::ONE).all()));
}

#[test]
fn aabb_contains_with_tolerance() {
    let b = Aabb { min: Vec3::ZERO, max: Vec3::ONE };
    assert!(b.contains(Vec3::splat(0.5), 0.0));
    assert!(!b.contains(Vec3::new(1.1, 0.5, 0.5), 0.0));
    assert!(b.contains(Vec3::new(1.1, 0.5, 0.5), 0.2));
}

#[test]
fn aabb_from_no_points_is_none() {
    assert!(Aabb::from_points(&Vec::<Vec3>::new()).is_none());
}
