//! Output contracts from the core.
//!
//! Outputs carry transform batches (one per layout pass, with the duration
//! and easing the host should use to tween toward them) and a separate list
//! of semantic events. The core never touches rendering primitives; hosts
//! drain outputs and apply them to their visual representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::config::Easing;

/// One item's visual transform, fully recomputed each layout pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTransform {
    /// Item index within the track.
    pub item: usize,
    pub left_px: f32,
    /// 0 when the item is outside the visible range.
    pub scale: f32,
    pub angle_deg: f32,
    /// Higher stacks frontmost; ties broken by closeness to center only.
    pub z_index: i32,
    pub visible: bool,
    pub selected: bool,
    /// Optional host css map (selected/inner/outer blend), present only when
    /// the configuration carries css maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<Map<String, JsonValue>>,
}

/// Ordered per-item transforms for one layout pass, plus the tween envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformBatch {
    pub transforms: Vec<ItemTransform>,
    pub duration_ms: f32,
    pub easing: Easing,
}

/// Discrete semantic signals emitted while navigating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CarouselEvent {
    /// The selection changed to a different index.
    Changed { index: usize, item: String },
    /// The selection was (re)confirmed, including on initialization.
    Selected { index: usize, item: String },
    /// The already-selected item was selected again.
    Confirmed { index: usize, item: String },
}

/// Outputs accumulated by the controller and drained by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub batches: Vec<TransformBatch>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.batches.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_batch(&mut self, batch: TransformBatch) {
        self.batches.push(batch);
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty() && self.events.is_empty()
    }
}
