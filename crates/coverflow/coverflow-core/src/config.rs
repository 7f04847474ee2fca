//! Carousel configuration: transform ranges, visibility policy, animation
//! duration/easing, and optional per-state css maps for hosts that style
//! items beyond the geometric transform.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::CoverflowError;
use crate::interp::bezier_ease_t;

/// How many items count as "visible" per page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibleMode {
    /// floor(viewport_width * density / item_width)
    Density,
    /// Every item is always within the visible range.
    All,
    /// Exact item count per page.
    Fixed(usize),
}

/// Animation duration, either a named speed or explicit milliseconds.
/// Named speeds use the conventional fast/normal/slow table (200/400/600 ms).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Fast,
    Normal,
    Slow,
    Ms(f32),
}

impl Duration {
    #[inline]
    pub fn as_ms(&self) -> f32 {
        match self {
            Duration::Fast => 200.0,
            Duration::Normal => 400.0,
            Duration::Slow => 600.0,
            Duration::Ms(ms) => *ms,
        }
    }
}

/// Easing curve echoed in every transform batch. The core emits discrete
/// transform snapshots; hosts interpolate between them with this curve.
/// `evaluate` is provided for pull-based hosts without an animation library.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Linear,
    /// Half-cosine ease-in-out.
    Swing,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Eased progress for t in [0,1].
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Swing => 0.5 - (t * std::f32::consts::PI).cos() * 0.5,
            Easing::CubicBezier(c) => bezier_ease_t(t, c[0], c[1], c[2], c[3]),
        }
    }
}

/// Immutable carousel configuration.
///
/// Angles are signed degrees applied at the inner (adjacent to the focal
/// item) and outer (edge of the visible range) ends of the curve. Scales are
/// fractions of full size; the invariant `0 < outer_scale <= inner_scale <= 1`
/// is enforced by [`CarouselConfig::validate`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub inner_angle: f32,
    pub outer_angle: f32,
    pub inner_scale: f32,
    pub outer_scale: f32,
    /// Horizontal offset (px) of the first off-center item from the focal item.
    pub inner_offset: f32,
    pub visible: VisibleMode,
    /// Page density multiplier used by [`VisibleMode::Density`].
    pub density: f32,
    pub duration: Duration,
    pub easing: Easing,

    /// Optional css map applied to the focal item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_css: Option<Map<String, JsonValue>>,
    /// Optional css map at the inner end of the curve (blend source).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_css: Option<Map<String, JsonValue>>,
    /// Optional css map at the outer end of the curve (blend target).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_css: Option<Map<String, JsonValue>>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            inner_angle: -75.0,
            outer_angle: -30.0,
            inner_scale: 0.75,
            outer_scale: 0.25,
            inner_offset: 100.0 / 3.0,
            visible: VisibleMode::Density,
            density: 1.0,
            duration: Duration::Normal,
            easing: Easing::Swing,
            selected_css: None,
            inner_css: None,
            outer_css: None,
        }
    }
}

impl CarouselConfig {
    /// Validate the configuration. Fatal at construction; never re-checked
    /// per frame.
    pub fn validate(&self) -> Result<(), CoverflowError> {
        if !(self.outer_scale > 0.0 && self.outer_scale <= self.inner_scale && self.inner_scale <= 1.0)
        {
            return Err(CoverflowError::Configuration(format!(
                "scales must satisfy 0 < outer_scale <= inner_scale <= 1 (outer {}, inner {})",
                self.outer_scale, self.inner_scale
            )));
        }
        if !self.inner_angle.is_finite() || !self.outer_angle.is_finite() {
            return Err(CoverflowError::Configuration(
                "angles must be finite".into(),
            ));
        }
        if !self.inner_offset.is_finite() {
            return Err(CoverflowError::Configuration(
                "inner_offset must be finite".into(),
            ));
        }
        if self.density <= 0.0 || !self.density.is_finite() {
            return Err(CoverflowError::Configuration(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if let VisibleMode::Fixed(n) = self.visible {
            if n == 0 {
                return Err(CoverflowError::Configuration(
                    "fixed visible count must be at least 1".into(),
                ));
            }
        }
        if self.duration.as_ms() < 0.0 {
            return Err(CoverflowError::Configuration(
                "duration must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
