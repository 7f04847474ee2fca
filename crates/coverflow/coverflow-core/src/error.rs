//! Error taxonomy for the coverflow core.
//!
//! Construction and geometry updates are fallible; navigation never is.
//! Out-of-range indices are clamped, not rejected (hosts routinely overshoot
//! at the ends with wheel/keyboard input).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverflowError {
    /// Invalid configuration detected at construction.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The carousel needs at least one item; layout math divides by count-derived quantities.
    #[error("carousel requires at least one item")]
    NoItems,

    /// Zero or negative widths would make the page-size derivation meaningless.
    #[error("viewport and item widths must be positive (viewport {viewport_width}, item {item_width})")]
    NonPositiveWidth {
        viewport_width: f32,
        item_width: f32,
    },
}
