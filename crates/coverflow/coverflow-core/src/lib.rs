//! Coverflow carousel core (host-agnostic).
//!
//! Two components: a pure layout engine mapping (geometry, fractional focal
//! index, config) to per-item transforms, and a transition controller that
//! owns the selection state and drives the stepped index animation. Hosts
//! feed normalized events in (`navigate`, `jump_to`, `resize`, `tick`) and
//! drain transform batches plus semantic events out; the core never touches
//! rendering primitives, timers, or input devices.

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod interp;
pub mod layout;
pub mod outputs;
pub mod state;
pub mod style;

// Re-exports for consumers (adapters)
pub use config::{CarouselConfig, Duration, Easing, VisibleMode};
pub use controller::Carousel;
pub use error::CoverflowError;
pub use geometry::ItemGeometry;
pub use layout::{compute_layout, compute_layout_with};
pub use outputs::{CarouselEvent, ItemTransform, Outputs, TransformBatch};
pub use state::CarouselState;
pub use style::{LinearStyleInterpolator, StyleInterpolator};
