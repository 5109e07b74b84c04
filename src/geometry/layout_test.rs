#![allow(clippy::float_cmp)]

use super::*;
use crate::config::Config;

fn layout() -> Layout {
    Layout::new(Config::default().scaled())
}

#[test]
fn cell_origin_follows_column_and_line_spacing() {
    let l = layout();
    assert_eq!(l.cell_origin(0, 0), Vec3::ZERO);
    assert_eq!(l.cell_origin(2, 0), Vec3::new(14.0, 0.0, 0.0));
    assert_eq!(l.cell_origin(1, 3), Vec3::new(7.0, 0.0, 30.0));
}

#[test]
fn increasing_line_always_moves_towards_positive_z() {
    let l = layout();
    for line in 0..5 {
        assert!(l.cell_origin(0, line + 1).z > l.cell_origin(0, line).z);
    }
}

#[test]
fn slot_offsets_form_two_by_three_grid() {
    let l = layout();
    let offsets: Vec<Vec3> = (0..6).filter_map(|s| l.slot_offset(s)).collect();
    let plane: Vec<(f32, f32)> = offsets.iter().map(|o| (o.x, o.z)).collect();
    assert_eq!(plane, vec![(0.0, 0.0), (0.0, 2.5), (0.0, 5.0), (2.5, 0.0), (2.5, 2.5), (2.5, 5.0)]);
    assert!(offsets.iter().all(|o| o.y == 0.0));
}

#[test]
fn slot_past_the_sixth_dot_has_no_offset() {
    let l = layout();
    assert!(l.slot_offset(6).is_none());
    assert!(l.slot_offset(usize::MAX).is_none());
}

#[test]
fn footprint_spans_grid_of_slot_origins() {
    let fp = layout().footprint(3, 2).unwrap();
    assert_eq!(fp.min_x, 0.0);
    assert_eq!(fp.max_x, 2.0 * 7.0 + 2.5);
    assert_eq!(fp.min_z, 0.0);
    assert_eq!(fp.max_z, 10.0 + 5.0);
}

#[test]
fn footprint_of_empty_grid_is_none() {
    assert!(layout().footprint(0, 3).is_none());
    assert!(layout().footprint(3, 0).is_none());
}

#[test]
fn footprint_including_grows_only_when_needed() {
    let fp = layout().footprint(1, 1).unwrap();
    assert_eq!(fp.including(Vec3::new(1.0, 0.0, 1.0)), fp);
    let grown = fp.including(Vec3::new(-1.0, 0.0, 9.0));
    assert_eq!(grown.min_x, -1.0);
    assert_eq!(grown.max_z, 9.0);
}

#[test]
fn plate_adds_radius_and_padding_on_every_side() {
    let dims = Config::default().scaled();
    let fp = Footprint { min_x: 0.0, max_x: 10.0, min_z: 0.0, max_z: 4.0 };
    let plate = Plate::around(&fp, &dims);
    assert!((plate.width - (10.0 + 2.0 * (0.85 + 3.0))).abs() < 1e-5);
    assert!((plate.depth - (4.0 + 2.0 * (0.85 + 3.0))).abs() < 1e-5);
    assert_eq!(plate.height, 3.0);
    assert_eq!((plate.center_x, plate.center_z), (5.0, 2.0));
}

#[test]
fn plate_top_face_is_zero_plane() {
    let dims = Config::default().scaled();
    let fp = Footprint { min_x: 0.0, max_x: 1.0, min_z: 0.0, max_z: 1.0 };
    let plate = Plate::around(&fp, &dims);
    assert_eq!(plate.max().y, 0.0);
    assert_eq!(plate.min().y, -3.0);
    assert!(plate.min().x < fp.min_x - dims.dot_radius);
    assert!(plate.max().z > fp.max_z + dims.dot_radius);
}

#[test]
fn unit_scale_scales_layout() {
    let l = Layout::new(Config { unit_scale: 0.1, ..Config::default() }.scaled());
    assert!((l.cell_origin(1, 1) - Vec3::new(0.7, 0.0, 1.0)).length() < 1e-6);
}
