//! Per-render geometry inputs and the page-size derivation.

use serde::{Deserialize, Serialize};

use crate::config::VisibleMode;

/// Geometry of the track and its items, supplied by the host and updated on
/// resize. Widths are pixels; `viewport_left` is the track's horizontal
/// offset within the host coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub item_count: usize,
    pub item_width: f32,
    pub viewport_width: f32,
    pub viewport_left: f32,
}

impl ItemGeometry {
    /// Number of items considered visible per page, floored to 1 so the
    /// offset-ratio division is always defined.
    pub fn page_size(&self, visible: VisibleMode, density: f32) -> usize {
        let n = match visible {
            VisibleMode::Density => {
                (self.viewport_width * density / self.item_width).floor() as usize
            }
            VisibleMode::All => self.item_count,
            VisibleMode::Fixed(n) => n,
        };
        n.max(1)
    }
}
