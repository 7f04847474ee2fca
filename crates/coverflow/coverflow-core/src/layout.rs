//! Pure layout engine.
//!
//! Maps (geometry, fractional target index, config) to one transform per
//! item. Deterministic, no side effects; callable concurrently for
//! different inputs. The trig curve saturates at the visible edge
//! (sin -> +/-1, cos -> 0) rather than discontinuing, so scale fades to 0
//! and the angle settles at the outer value exactly at the boundary.

use serde_json::Map;
use std::f32::consts::FRAC_PI_2;

use crate::config::CarouselConfig;
use crate::geometry::ItemGeometry;
use crate::interp::{remap, sign};
use crate::outputs::ItemTransform;
use crate::style::StyleInterpolator;

/// Compute per-item transforms for the focal `target_index`, which may be
/// fractional mid-animation. See [`compute_layout_with`] for css blending.
pub fn compute_layout(
    geometry: &ItemGeometry,
    target_index: f32,
    config: &CarouselConfig,
) -> Vec<ItemTransform> {
    compute_layout_with(geometry, target_index, config, None)
}

/// [`compute_layout`] with an optional style interpolator. When one is
/// supplied and `outer_css` is configured, non-focal visible items carry the
/// inner/outer blend at |sin_phase| and off-range items carry `outer_css`
/// unchanged; the focal item always carries `selected_css`.
pub fn compute_layout_with(
    geometry: &ItemGeometry,
    target_index: f32,
    config: &CarouselConfig,
    styler: Option<&dyn StyleInterpolator>,
) -> Vec<ItemTransform> {
    let count = geometry.item_count;
    let page_size = geometry.page_size(config.visible, config.density) as f32;
    // Shift left so positions measure the scaled item's visual center.
    let parent_left =
        geometry.viewport_left - (1.0 - config.outer_scale) * geometry.item_width * 0.5;
    let half_space = (geometry.viewport_width - config.outer_scale * geometry.item_width) * 0.5;

    (0..count)
        .map(|i| {
            if count == 1 {
                // A lone item is always the focal item, whatever the target.
                return ItemTransform {
                    item: 0,
                    left_px: parent_left + half_space,
                    scale: 1.0,
                    angle_deg: 0.0,
                    z_index: 1,
                    visible: true,
                    selected: true,
                    css: config.selected_css.clone(),
                };
            }

            let position = i as f32 - target_index;
            let offset_ratio = position / page_size;
            let visible = offset_ratio.abs() <= 1.0;
            let (sin_phase, cos_phase) = if visible {
                ((offset_ratio * FRAC_PI_2).sin(), (offset_ratio * FRAC_PI_2).cos())
            } else {
                (sign(offset_ratio), 0.0)
            };
            // Exact equality is intended: only an integral focal position has
            // a flat middle item.
            let middle = position == 0.0;

            let scale = if !visible {
                0.0
            } else if middle {
                1.0
            } else {
                remap(cos_phase.abs(), 1.0, 0.0, config.inner_scale, config.outer_scale)
            };
            let angle_deg = if middle {
                0.0
            } else {
                sign(sin_phase)
                    * remap(sin_phase.abs(), 0.0, 1.0, config.inner_angle, config.outer_angle)
            };
            let left_px = parent_left
                + half_space
                + if middle {
                    0.0
                } else {
                    sign(sin_phase)
                        * remap(sin_phase.abs(), 0.0, 1.0, config.inner_offset, half_space)
                };
            let z_index = count as i32 - position.round().abs() as i32;

            let css = if middle {
                config.selected_css.clone()
            } else {
                match (styler, config.outer_css.as_ref()) {
                    (Some(styler), Some(outer)) => {
                        if visible {
                            let empty = Map::new();
                            let inner = config.inner_css.as_ref().unwrap_or(&empty);
                            Some(styler.blend(inner, outer, sin_phase.abs()))
                        } else {
                            Some(outer.clone())
                        }
                    }
                    _ => None,
                }
            };

            ItemTransform {
                item: i,
                left_px,
                scale,
                angle_deg,
                z_index,
                visible,
                selected: middle,
                css,
            }
        })
        .collect()
}
