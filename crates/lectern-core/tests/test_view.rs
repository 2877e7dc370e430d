use approx::assert_relative_eq;
use lectern_core::config::ViewConfig;
use lectern_core::view::{Rotate, Rotation, ViewState};

fn view_with_pages(n: u32) -> ViewState {
    let mut v = ViewState::default();
    v.set_num_pages(n);
    v
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn test_defaults() {
    let v = ViewState::default();
    assert_eq!(v.current_page(), 1);
    assert_eq!(v.total_pages(), 0);
    assert_relative_eq!(v.scale(), 1.0);
    assert_eq!(v.rotation(), Rotation::Deg0);
    assert_eq!(v.page_index(), None);
}

#[test]
fn test_next_clamps_at_last_page() {
    let mut v = view_with_pages(3);
    for _ in 0..10 {
        v.next_page();
    }
    assert_eq!(v.current_page(), 3);
    assert!(!v.can_go_next());
}

#[test]
fn test_prev_clamps_at_first_page() {
    let mut v = view_with_pages(3);
    v.prev_page();
    v.prev_page();
    assert_eq!(v.current_page(), 1);
    assert!(!v.can_go_prev());
}

#[test]
fn test_set_current_page_clamps() {
    let mut v = view_with_pages(5);
    v.set_current_page(0);
    assert_eq!(v.current_page(), 1);
    v.set_current_page(99);
    assert_eq!(v.current_page(), 5);
    assert_eq!(v.page_index(), Some(4));
}

#[test]
fn test_update_current_page_clamps() {
    let mut v = view_with_pages(4);
    v.update_current_page(|prev| prev + 2);
    assert_eq!(v.current_page(), 3);
    v.update_current_page(|prev| prev + 2);
    assert_eq!(v.current_page(), 4);
}

#[test]
fn test_no_pages_pins_to_first() {
    let mut v = ViewState::default();
    v.next_page();
    v.set_current_page(7);
    assert_eq!(v.current_page(), 1);
}

#[test]
fn test_jump_ignores_out_of_range() {
    let mut v = view_with_pages(10);
    assert!(v.jump_to_page(7));
    assert_eq!(v.current_page(), 7);
    assert!(!v.jump_to_page(0));
    assert!(!v.jump_to_page(11));
    assert_eq!(v.current_page(), 7);
}

#[test]
fn test_shrinking_page_count_reclamps() {
    let mut v = view_with_pages(10);
    v.set_current_page(9);
    v.set_num_pages(4);
    assert_eq!(v.current_page(), 4);
}

#[test]
fn test_reset_keeps_zoom_and_rotation() {
    let mut v = view_with_pages(10);
    v.set_current_page(6);
    v.zoom_in();
    v.rotate(Rotate::Right);
    v.reset();
    assert_eq!(v.current_page(), 1);
    assert_eq!(v.total_pages(), 0);
    assert_relative_eq!(v.scale(), 1.7, epsilon = 1e-6);
    assert_eq!(v.rotation(), Rotation::Deg90);
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_steps() {
    let mut v = ViewState::default();
    v.zoom_in();
    assert_relative_eq!(v.scale(), 1.7, epsilon = 1e-6);
    v.zoom_out();
    assert_relative_eq!(v.scale(), 1.45, epsilon = 1e-6);
}

#[test]
fn test_zoom_out_floors_at_min_scale() {
    let mut v = ViewState::default();
    for _ in 0..20 {
        v.zoom_out();
    }
    assert_relative_eq!(v.scale(), 0.25);
}

#[test]
fn test_zoom_in_has_no_upper_bound() {
    let mut v = ViewState::default();
    for _ in 0..100 {
        v.zoom_in();
    }
    assert!(v.scale() > 70.0);
}

#[test]
fn test_set_scale_rejects_non_finite() {
    let mut v = ViewState::default();
    v.set_scale(f32::NAN);
    v.set_scale(f32::INFINITY);
    assert_relative_eq!(v.scale(), 1.0);
    v.set_scale(0.01);
    assert_relative_eq!(v.scale(), 0.25);
}

#[test]
fn test_custom_zoom_config() {
    let config = ViewConfig {
        initial_scale: 2.0,
        min_scale: 0.5,
        zoom_in_step: 0.5,
        zoom_out_step: 1.0,
    };
    let mut v = ViewState::new(&config);
    assert_relative_eq!(v.scale(), 2.0);
    v.zoom_out();
    v.zoom_out();
    assert_relative_eq!(v.min_scale(), 0.5);
    assert_relative_eq!(v.scale(), 0.5);
}

#[test]
fn test_invalid_min_scale_falls_back() {
    let config = ViewConfig {
        min_scale: -1.0,
        ..ViewConfig::default()
    };
    assert_relative_eq!(ViewState::new(&config).min_scale(), 0.25);
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

#[test]
fn test_rotate_right_wraps() {
    let mut v = ViewState::default();
    for expected in [90, 180, 270, 0] {
        v.rotate(Rotate::Right);
        assert_eq!(v.rotation().degrees(), expected);
    }
}

#[test]
fn test_rotate_left_wraps() {
    let mut v = ViewState::default();
    v.rotate(Rotate::Left);
    assert_eq!(v.rotation(), Rotation::Deg270);
    assert!(v.rotation().is_sideways());
}

#[test]
fn test_rotation_from_degrees() {
    assert_eq!(Rotation::from_degrees(-90), Rotation::Deg270);
    assert_eq!(Rotation::from_degrees(450), Rotation::Deg90);
    assert_eq!(format!("{}", Rotation::Deg180), "180°");
}
