//! One-shot statistics counter animation.
//!
//! DESIGN
//! ======
//! When the statistics block first becomes visible, every `.counter` element
//! counts from 0 up to its `data-target`, one step per tick. The tick
//! interval is `max(duration / target, min_tick)` with integer division, so
//! small targets finish in about `duration` and large targets take longer.
//! Each run stops exactly on its target. [`CounterBoard`] owns the one-shot
//! flag, so a second visibility event never restarts or resets the counters.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::viewport::{Bounds, within_upper_band};

/// Timer schedule for one counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterPlan {
    pub target: u32,
    pub interval_ms: u32,
}

impl CounterPlan {
    /// Plan a counter from its raw `data-target` attribute.
    ///
    /// Returns `None` for a missing, non-numeric or non-positive target; such
    /// counters are left as rendered.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>, duration_ms: u32, min_tick_ms: u32) -> Option<Self> {
        let Ok(target) = raw?.trim().parse::<u32>() else {
            return None;
        };
        if target == 0 {
            return None;
        }
        Some(Self::new(target, duration_ms, min_tick_ms))
    }

    /// Plan a counter for a positive `target`.
    #[must_use]
    pub fn new(target: u32, duration_ms: u32, min_tick_ms: u32) -> Self {
        let interval_ms = (duration_ms / target.max(1)).max(min_tick_ms);
        Self { target, interval_ms }
    }

    /// Wall-clock time the animation takes at this interval.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        u64::from(self.target) * u64::from(self.interval_ms)
    }
}

/// Progress of one running counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterRun {
    target: u32,
    count: u32,
}

impl CounterRun {
    #[must_use]
    pub fn new(plan: CounterPlan) -> Self {
        Self { target: plan.target, count: 0 }
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.count >= self.target
    }

    /// Advance one step. Returns the value to display, or `None` once the
    /// target has already been reached.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.count += 1;
        Some(self.count)
    }
}

/// One-shot trigger for the statistics block.
#[derive(Clone, Debug)]
pub struct CounterBoard {
    counters: usize,
    visible_fraction: f64,
    started: bool,
}

impl CounterBoard {
    #[must_use]
    pub fn new(counters: usize, visible_fraction: f64) -> Self {
        Self { counters, visible_fraction, started: false }
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Decide whether to start the counters for this scroll event.
    ///
    /// Returns `true` exactly once: the first time the section is within the
    /// visible band while there are counters to animate.
    pub fn should_start(&mut self, section: Option<Bounds>, viewport_height: f64) -> bool {
        if self.started || self.counters == 0 {
            return false;
        }
        let Some(bounds) = section else {
            return false;
        };
        if !within_upper_band(bounds, viewport_height, self.visible_fraction) {
            return false;
        }
        self.started = true;
        true
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &crate::config::SiteConfig) -> Result<(), crate::error::ScriptError> {
    use std::cell::RefCell;

    use web_sys::Element;

    use crate::dom;
    use crate::error::ScriptError;

    let window = dom::window()?;
    let document = dom::document()?;
    let counters = dom::query_all(&document, &config.selectors.counter)?;
    if counters.is_empty() {
        return Err(ScriptError::MissingElement(config.selectors.counter.clone()));
    }

    let board = RefCell::new(CounterBoard::new(counters.len(), config.visible_fraction));
    let section_selector = config.selectors.stats_section.clone();
    let target_attribute = config.selectors.counter_target_attribute.clone();
    let (duration_ms, min_tick_ms) = (config.counter_duration_ms, config.counter_min_tick_ms);

    let start_all = move |counters: &[Element]| {
        for el in counters {
            let raw = el.get_attribute(&target_attribute);
            match CounterPlan::from_attribute(raw.as_deref(), duration_ms, min_tick_ms) {
                Some(plan) => run_counter(el.clone(), plan),
                None => log::debug!("counter: skipping element with {target_attribute}={raw:?}"),
            }
        }
    };

    let listener_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        if board.borrow().has_started() {
            return;
        }
        let section = match document.query_selector(&section_selector) {
            Ok(found) => found.map(|el| dom::bounds_of(&el)),
            Err(err) => {
                log::warn!("counter: {}", ScriptError::from(err));
                return;
            }
        };
        let vh = match dom::viewport_height(&listener_window) {
            Ok(vh) => vh,
            Err(err) => {
                log::warn!("counter: {err}");
                return;
            }
        };
        if board.borrow_mut().should_start(section, vh) {
            log::debug!("counter: statistics visible, starting {} counters", counters.len());
            start_all(&counters);
        }
    })
}

#[cfg(feature = "hydrate")]
fn run_counter(el: web_sys::Element, plan: CounterPlan) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::{Interval, Timeout};

    let mut run = CounterRun::new(plan);
    let handle = Rc::new(RefCell::new(None::<Interval>));
    let handle_for_tick = Rc::clone(&handle);
    let interval = Interval::new(plan.interval_ms, move || {
        if let Some(value) = run.tick() {
            el.set_text_content(Some(&value.to_string()));
        }
        if run.is_finished() {
            // The interval owns this closure; drop it from outside the callback.
            if let Some(done) = handle_for_tick.borrow_mut().take() {
                Timeout::new(0, move || drop(done)).forget();
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}
