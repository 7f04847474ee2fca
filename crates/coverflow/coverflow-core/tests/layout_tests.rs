use coverflow_core::{
    compute_layout, compute_layout_with, CarouselConfig, ItemGeometry, LinearStyleInterpolator,
    VisibleMode,
};
use serde_json::json;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn geo(count: usize, item_width: f32, viewport_width: f32) -> ItemGeometry {
    ItemGeometry {
        item_count: count,
        item_width,
        viewport_width,
        viewport_left: 0.0,
    }
}

/// it should keep the focal item flat, full-size, visible and frontmost
#[test]
fn middle_item_is_flat_and_selected() {
    let cfg = CarouselConfig::default();
    let transforms = compute_layout(&geo(5, 100.0, 240.0), 2.0, &cfg);
    let middle = &transforms[2];
    assert_eq!(middle.scale, 1.0);
    assert_eq!(middle.angle_deg, 0.0);
    assert!(middle.visible);
    assert!(middle.selected);
    assert!(transforms.iter().all(|t| t.z_index <= middle.z_index));
    // No other item is selected.
    assert_eq!(transforms.iter().filter(|t| t.selected).count(), 1);
}

/// it should match the worked example: 5 items, page size 2, target 2
#[test]
fn worked_example_five_items_page_two() {
    let cfg = CarouselConfig::default();
    // 240 / 100 = 2.4 -> page size 2 under density 1.
    let g = geo(5, 100.0, 240.0);
    let transforms = compute_layout(&g, 2.0, &cfg);

    // Item 3: position 1, offset ratio 0.5, visible, between inner and outer.
    let t3 = &transforms[3];
    assert!(t3.visible);
    assert!(t3.scale < cfg.inner_scale && t3.scale > cfg.outer_scale);
    let a3 = t3.angle_deg;
    let (lo, hi) = (
        cfg.inner_angle.min(cfg.outer_angle),
        cfg.inner_angle.max(cfg.outer_angle),
    );
    assert!(a3 >= lo && a3 <= hi, "angle {a3} outside [{lo}, {hi}]");

    // Item 0: position -2, offset ratio -1 exactly: the boundary case.
    let t0 = &transforms[0];
    assert!(t0.visible);
    approx(t0.scale, cfg.outer_scale, 1e-6);
    approx(t0.angle_deg, -cfg.outer_angle, 1e-4);

    // Symmetry: item 1 mirrors item 3 in angle and matches in scale.
    approx(transforms[1].scale, transforms[3].scale, 1e-6);
    approx(transforms[1].angle_deg, -transforms[3].angle_deg, 1e-4);
}

/// it should hide items past the page boundary with saturated phases
#[test]
fn items_beyond_range_are_hidden() {
    let cfg = CarouselConfig {
        visible: VisibleMode::Fixed(2),
        ..Default::default()
    };
    let transforms = compute_layout(&geo(9, 100.0, 500.0), 0.0, &cfg);
    // Items 3.. have |offset| > 1.
    for t in &transforms[3..] {
        assert!(!t.visible, "item {} should be hidden", t.item);
        assert_eq!(t.scale, 0.0);
        // Saturated sin keeps the angle pinned at the outer value.
        approx(t.angle_deg, cfg.outer_angle, 1e-4);
    }
}

/// it should scale non-increasing and tilt non-decreasing toward the edge
#[test]
fn monotonic_scale_and_angle() {
    // Tilt grows toward the edge when |inner_angle| < |outer_angle|.
    let cfg = CarouselConfig {
        visible: VisibleMode::Fixed(4),
        inner_angle: -30.0,
        outer_angle: -75.0,
        ..Default::default()
    };
    let transforms = compute_layout(&geo(9, 100.0, 500.0), 0.0, &cfg);
    for pair in transforms[..5].windows(2) {
        assert!(
            pair[1].scale <= pair[0].scale,
            "scale must not increase away from center"
        );
        assert!(
            pair[1].angle_deg.abs() >= pair[0].angle_deg.abs(),
            "angle magnitude must not decrease away from center"
        );
    }
}

/// it should treat a single item as always focal, whatever the target
#[test]
fn single_item_always_middle() {
    let cfg = CarouselConfig::default();
    for target in [0.0, 0.5, 3.0, -2.0] {
        let transforms = compute_layout(&geo(1, 100.0, 500.0), target, &cfg);
        assert_eq!(transforms.len(), 1);
        let t = &transforms[0];
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.angle_deg, 0.0);
        assert!(t.visible && t.selected);
        assert_eq!(t.z_index, 1);
    }
}

/// it should stack by closeness to center with round-to-nearest positions
#[test]
fn z_index_stacks_by_closeness() {
    let cfg = CarouselConfig {
        visible: VisibleMode::All,
        ..Default::default()
    };
    let transforms = compute_layout(&geo(7, 100.0, 500.0), 3.0, &cfg);
    assert_eq!(transforms[3].z_index, 7);
    assert_eq!(transforms[2].z_index, 6);
    assert_eq!(transforms[4].z_index, 6);
    assert_eq!(transforms[0].z_index, 4);
    assert_eq!(transforms[6].z_index, 4);
}

/// it should select no item at a fractional target unless exactly aligned
#[test]
fn fractional_target_has_no_middle() {
    let cfg = CarouselConfig {
        visible: VisibleMode::All,
        ..Default::default()
    };
    let transforms = compute_layout(&geo(5, 100.0, 500.0), 2.5, &cfg);
    assert!(transforms.iter().all(|t| !t.selected));
    assert!(transforms.iter().all(|t| t.scale < 1.0));
}

/// it should be pure: identical inputs produce identical outputs
#[test]
fn layout_is_deterministic() {
    let cfg = CarouselConfig::default();
    let g = geo(8, 120.0, 640.0);
    let a = compute_layout(&g, 3.25, &cfg);
    let b = compute_layout(&g, 3.25, &cfg);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

/// it should place the focal item at the centering offset
#[test]
fn focal_left_position() {
    let cfg = CarouselConfig::default();
    let g = ItemGeometry {
        item_count: 5,
        item_width: 100.0,
        viewport_width: 240.0,
        viewport_left: 10.0,
    };
    let transforms = compute_layout(&g, 2.0, &cfg);
    let parent_left = 10.0 - (1.0 - cfg.outer_scale) * 100.0 * 0.5;
    let half_space = (240.0 - cfg.outer_scale * 100.0) * 0.5;
    approx(transforms[2].left_px, parent_left + half_space, 1e-4);
    // Neighbors sit symmetrically around the focal item.
    let d_left = transforms[2].left_px - transforms[1].left_px;
    let d_right = transforms[3].left_px - transforms[2].left_px;
    approx(d_left, d_right, 1e-3);
}

/// it should blend css maps along the curve when an interpolator is injected
#[test]
fn css_blend_with_interpolator() {
    let cfg = CarouselConfig {
        visible: VisibleMode::Fixed(2),
        selected_css: json!({ "opacity": 1.0 }).as_object().cloned(),
        inner_css: json!({ "opacity": 0.9 }).as_object().cloned(),
        outer_css: json!({ "opacity": 0.1 }).as_object().cloned(),
        ..Default::default()
    };
    let styler = LinearStyleInterpolator;
    let transforms = compute_layout_with(&geo(9, 100.0, 500.0), 0.0, &cfg, Some(&styler));

    // Focal item carries selected_css untouched.
    let focal = transforms[0].css.as_ref().unwrap();
    assert_eq!(focal["opacity"], json!(1.0));

    // Boundary item (offset ratio 1) is fully outer.
    let edge = transforms[2].css.as_ref().unwrap();
    approx(edge["opacity"].as_f64().unwrap() as f32, 0.1, 1e-5);

    // Off-range item carries outer_css unchanged.
    let hidden = transforms[5].css.as_ref().unwrap();
    assert_eq!(hidden["opacity"], json!(0.1));

    // In-between item is strictly between the endpoints.
    let mid = transforms[1].css.as_ref().unwrap()["opacity"]
        .as_f64()
        .unwrap() as f32;
    assert!(mid < 0.9 && mid > 0.1, "got {mid}");

    // Without an interpolator only the focal item carries css.
    let plain = compute_layout(&geo(9, 100.0, 500.0), 0.0, &cfg);
    assert!(plain[0].css.is_some());
    assert!(plain[1].css.is_none());
}
