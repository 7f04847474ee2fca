//! Transition controller: owns the carousel state and drives the stepped
//! index animation.
//!
//! The controller is pull-based: navigation calls arm a single pending step
//! deadline, and the host advances it with `tick(elapsed_ms)`. Only one
//! deadline is ever pending per instance; any retargeting call drops it
//! before arming a new one, so overlapping step sequences cannot both
//! mutate `display_index`. Every mutating call appends transform batches
//! and events to an internal [`Outputs`] the host drains via
//! [`Carousel::take_outputs`].

use log::{debug, warn};

use crate::config::CarouselConfig;
use crate::error::CoverflowError;
use crate::geometry::ItemGeometry;
use crate::interp::sign;
use crate::layout::compute_layout_with;
use crate::outputs::{CarouselEvent, Outputs, TransformBatch};
use crate::state::CarouselState;
use crate::style::StyleInterpolator;

/// Bookkeeping for the single in-flight step deadline.
#[derive(Clone, Copy, Debug)]
struct StepTimer {
    deadline_ms: f32,
    elapsed_ms: f32,
}

/// A coverflow carousel over opaque item handles (fixed to `String`; hosts
/// map handles back to their visual elements).
pub struct Carousel {
    items: Vec<String>,
    cfg: CarouselConfig,
    geometry: ItemGeometry,
    state: CarouselState,
    pending: Option<StepTimer>,
    styler: Option<Box<dyn StyleInterpolator>>,
    outputs: Outputs,
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Carousel {
    /// Create a carousel over `items`. `geometry.item_count` is derived from
    /// `items`; the supplied value is ignored. The initial index is clamped,
    /// an initial layout batch (duration 0) is emitted, and `Selected` fires
    /// for the initial item.
    pub fn new(
        items: Vec<String>,
        config: CarouselConfig,
        mut geometry: ItemGeometry,
        initial_index: isize,
    ) -> Result<Self, CoverflowError> {
        config.validate()?;
        if items.is_empty() {
            return Err(CoverflowError::NoItems);
        }
        if geometry.viewport_width <= 0.0 || geometry.item_width <= 0.0 {
            return Err(CoverflowError::NonPositiveWidth {
                viewport_width: geometry.viewport_width,
                item_width: geometry.item_width,
            });
        }
        geometry.item_count = items.len();

        let page_size = geometry.page_size(config.visible, config.density);
        let initial = initial_index.clamp(0, items.len() as isize - 1) as usize;
        if initial as isize != initial_index {
            warn!("initial index {initial_index} clamped to {initial}");
        }

        let mut carousel = Self {
            items,
            cfg: config,
            geometry,
            state: CarouselState::new(initial, page_size),
            pending: None,
            styler: None,
            outputs: Outputs::default(),
        };
        carousel.emit_batch(initial as f32, 0.0);
        let item = carousel.items[initial].clone();
        carousel.outputs.push_event(CarouselEvent::Selected {
            index: initial,
            item,
        });
        Ok(carousel)
    }

    /// Inject the optional style-interpolation capability. Takes effect on
    /// the next layout pass; call [`Carousel::refresh`] to re-apply now.
    pub fn set_style_interpolator(&mut self, styler: Box<dyn StyleInterpolator>) {
        self.styler = Some(styler);
    }

    /// Select `index`, clamped to the valid range.
    ///
    /// Selecting the current index fires `Confirmed` and nothing else. A new
    /// index first re-applies the current layout (duration 0) to correct for
    /// externally modified visuals, then either settles immediately
    /// (`animate == false`) or starts a step sequence, retargeting any
    /// in-flight animation from its current display position.
    pub fn jump_to(&mut self, index: isize, animate: bool) {
        let target = self.clamp_index(index);
        if target == self.state.selected_index {
            let item = self.items[target].clone();
            self.outputs
                .push_event(CarouselEvent::Confirmed { index: target, item });
            return;
        }

        // Pre-correct at the current display position before animating.
        self.emit_batch(self.state.display_index, 0.0);
        self.state.selected_index = target;

        if animate {
            if self.state.animating {
                debug!(
                    "retargeting in-flight animation from display {} to {target}",
                    self.state.display_index
                );
            }
            // Invalidate the old deadline before arming a new one.
            self.pending = None;
            self.state.animating = true;
            self.do_step();
        } else {
            self.pending = None;
            self.state.animating = false;
            self.state.display_index = target as f32;
            // Unanimated jumps settle in a single duration-0 pass.
            self.emit_batch(target as f32, 0.0);
        }

        let item = self.items[target].clone();
        self.outputs.push_event(CarouselEvent::Changed {
            index: target,
            item: item.clone(),
        });
        self.outputs
            .push_event(CarouselEvent::Selected { index: target, item });
    }

    /// Animated relative navigation: `jump_to(selected + delta)`.
    pub fn navigate(&mut self, delta: isize) {
        self.jump_to(self.state.selected_index as isize + delta, true);
    }

    /// Relative navigation in whole pages (PageUp/PageDown semantics).
    pub fn navigate_pages(&mut self, pages: isize) {
        self.navigate(pages * self.state.page_size as isize);
    }

    /// Click semantics: the current item confirms, any other item is an
    /// animated jump.
    pub fn select_item(&mut self, index: usize) {
        self.jump_to(index as isize, true);
    }

    /// Explicit confirm of the current selection.
    pub fn confirm_selection(&mut self) {
        let index = self.state.selected_index;
        let item = self.items[index].clone();
        self.outputs
            .push_event(CarouselEvent::Confirmed { index, item });
    }

    /// Update viewport/item widths and re-apply the layout at the selected
    /// index. Page size is re-derived; the selection is untouched.
    pub fn resize(
        &mut self,
        new_viewport_width: f32,
        new_item_width: f32,
    ) -> Result<(), CoverflowError> {
        if new_viewport_width <= 0.0 || new_item_width <= 0.0 {
            return Err(CoverflowError::NonPositiveWidth {
                viewport_width: new_viewport_width,
                item_width: new_item_width,
            });
        }
        self.geometry.viewport_width = new_viewport_width;
        self.geometry.item_width = new_item_width;
        self.refresh(None, None);
        Ok(())
    }

    /// Recompute and re-emit the layout without changing controller state.
    /// Defaults: duration 0, index = the selected index.
    pub fn refresh(&mut self, duration_ms: Option<f32>, index_override: Option<f32>) {
        let target = index_override.unwrap_or(self.state.selected_index as f32);
        self.emit_batch(target, duration_ms.unwrap_or(0.0));
    }

    /// Advance the pending step deadline by `elapsed_ms`, performing every
    /// step that falls due (leftover time carries into the next deadline).
    pub fn tick(&mut self, elapsed_ms: f32) {
        let mut remaining = elapsed_ms.max(0.0);
        loop {
            let due = match self.pending.as_mut() {
                Some(timer) => {
                    let due = timer.deadline_ms - timer.elapsed_ms;
                    if remaining < due {
                        timer.elapsed_ms += remaining;
                        return;
                    }
                    due
                }
                None => return,
            };
            remaining -= due;
            self.pending = None;
            self.do_step();
        }
    }

    /// Drain accumulated transform batches and events.
    pub fn take_outputs(&mut self) -> Outputs {
        std::mem::take(&mut self.outputs)
    }

    pub fn current_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn current_item(&self) -> &str {
        &self.items[self.state.selected_index]
    }

    pub fn display_index(&self) -> f32 {
        self.state.display_index
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn geometry(&self) -> &ItemGeometry {
        &self.geometry
    }

    /// One animation step: advance `display_index` one index toward the
    /// selection, emit the layout there, and arm the next deadline.
    /// Step duration halves the proportional share of the total so the
    /// sequence decelerates into the target (tuning constant, not a law).
    fn do_step(&mut self) {
        let target = self.state.selected_index as f32;
        let steps = (target - self.state.display_index).abs();
        if steps == 0.0 {
            self.settle();
            return;
        }
        let step_duration = self.cfg.duration.as_ms() / steps.max(1.0) * 0.5;
        self.state.display_index += sign(target - self.state.display_index);
        self.emit_batch(self.state.display_index, step_duration);
        if self.state.display_index == target {
            self.settle();
        } else {
            self.pending = Some(StepTimer {
                deadline_ms: step_duration,
                elapsed_ms: 0.0,
            });
        }
    }

    fn settle(&mut self) {
        self.pending = None;
        self.state.animating = false;
    }

    fn emit_batch(&mut self, target_index: f32, duration_ms: f32) {
        self.state.page_size = self.geometry.page_size(self.cfg.visible, self.cfg.density);
        let transforms =
            compute_layout_with(&self.geometry, target_index, &self.cfg, self.styler.as_deref());
        self.outputs.push_batch(TransformBatch {
            transforms,
            duration_ms,
            easing: self.cfg.easing,
        });
    }

    fn clamp_index(&self, index: isize) -> usize {
        let clamped = index.clamp(0, self.items.len() as isize - 1) as usize;
        if clamped as isize != index {
            warn!("index {index} clamped to {clamped}");
        }
        clamped
    }
}
