//! Reveal `.animate-on-scroll` elements as they scroll into view.
//!
//! Each element gains the `animate-visible` class once its top edge is within
//! the reveal margin of the viewport's bottom. Checked at load and on every
//! scroll; the class is never removed.

#[cfg(test)]
#[path = "scroll_animator_test.rs"]
mod scroll_animator_test;

use crate::viewport::{RevealSet, entered_from_below};

/// Reveal state for a fixed list of animatable elements.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    margin_px: f64,
    reveal: RevealSet,
}

impl ScrollAnimator {
    #[must_use]
    pub fn new(len: usize, margin_px: f64) -> Self {
        Self { margin_px, reveal: RevealSet::new(len) }
    }

    /// Indices to reveal now, given each element's current top edge.
    pub fn sweep(&mut self, viewport_height: f64, top_of: impl Fn(usize) -> f64) -> Vec<usize> {
        let margin = self.margin_px;
        self.reveal.sweep(|i| entered_from_below(top_of(i), viewport_height, margin))
    }

    /// `true` once every element has been revealed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.reveal.pending() == 0
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &crate::config::SiteConfig) -> Result<(), crate::error::ScriptError> {
    use std::cell::RefCell;

    use crate::{consts, dom};

    let window = dom::window()?;
    let document = dom::document()?;
    let elements = dom::query_all(&document, &config.selectors.animate)?;
    if elements.is_empty() {
        return Err(crate::error::ScriptError::MissingElement(config.selectors.animate.clone()));
    }

    let animator = RefCell::new(ScrollAnimator::new(elements.len(), config.reveal_margin_px));

    let check = {
        let window = window.clone();
        move || {
            if animator.borrow().is_done() {
                return;
            }
            let vh = match dom::viewport_height(&window) {
                Ok(vh) => vh,
                Err(err) => {
                    log::warn!("scroll animator: {err}");
                    return;
                }
            };
            let fresh = animator.borrow_mut().sweep(vh, |i| dom::bounds_of(&elements[i]).top);
            for index in fresh {
                dom::add_class(&elements[index], consts::ANIMATE_VISIBLE_CLASS);
            }
        }
    };

    check();
    dom::listen(&window, "scroll", move |_| check())
}
