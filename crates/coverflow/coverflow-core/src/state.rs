//! Mutable carousel state, owned exclusively by the transition controller.

use serde::{Deserialize, Serialize};

/// Controller-owned state. `display_index` is the animation's current
/// position and only differs from `selected_index` mid-transition; steps
/// advance it by whole indices, so it holds integral values even though the
/// layout engine accepts fractional targets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub selected_index: usize,
    pub display_index: f32,
    pub page_size: usize,
    pub animating: bool,
}

impl CarouselState {
    pub fn new(initial_index: usize, page_size: usize) -> Self {
        Self {
            selected_index: initial_index,
            display_index: initial_index as f32,
            page_size,
            animating: false,
        }
    }
}
