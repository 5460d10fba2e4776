//! Page interactions: smooth in-page anchors, card fade-in and the
//! statistics counter.
//!
//! The three behaviours mount independently; a page without cards still gets
//! smooth anchors and vice versa.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::viewport::{Bounds, RevealSet, within_upper_band};

/// Selector to scroll to for an anchor `href`, or `None` for a bare `#`,
/// an empty value or an off-page link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}

/// Scroll position that puts an element at `offset_top` just below the fixed
/// header.
#[must_use]
pub fn scroll_top_for(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// Fade-in state for the page's cards.
#[derive(Clone, Debug)]
pub struct CardFade {
    visible_fraction: f64,
    reveal: RevealSet,
}

impl CardFade {
    #[must_use]
    pub fn new(len: usize, visible_fraction: f64) -> Self {
        Self { visible_fraction, reveal: RevealSet::new(len) }
    }

    /// Indices of cards to fade in now.
    pub fn sweep(&mut self, viewport_height: f64, bounds_of: impl Fn(usize) -> Bounds) -> Vec<usize> {
        let fraction = self.visible_fraction;
        self.reveal.sweep(|i| within_upper_band(bounds_of(i), viewport_height, fraction))
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.reveal.pending() == 0
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &crate::config::SiteConfig) {
    use crate::dom;

    dom::report("smooth scroll", mount_smooth_scroll(config));
    dom::report("card fade", mount_card_fade(config));
    dom::report("counter", crate::counter::mount(config));
}

#[cfg(feature = "hydrate")]
fn mount_smooth_scroll(config: &crate::config::SiteConfig) -> Result<(), crate::error::ScriptError> {
    use std::rc::Rc;

    use crate::dom;

    let window = Rc::new(dom::window()?);
    let document = Rc::new(dom::document()?);
    let anchors = dom::query_all(&document, &config.selectors.anchor)?;
    let header_offset = config.header_offset_px;

    for anchor in anchors {
        let window = Rc::clone(&window);
        let document = Rc::clone(&document);
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Err(err) = scroll_to_selector(&window, &document, selector, header_offset) {
                log::warn!("smooth scroll to {selector:?}: {err}");
            }
        })?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn scroll_to_selector(
    window: &web_sys::Window,
    document: &web_sys::Document,
    selector: &str,
    header_offset: f64,
) -> Result<(), crate::error::ScriptError> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    let Some(target) = document.query_selector(selector)? else {
        return Ok(());
    };
    let offset_top = match target.dyn_ref::<HtmlElement>() {
        Some(el) => f64::from(el.offset_top()),
        None => target.get_bounding_client_rect().top() + window.scroll_y()?,
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(offset_top, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[cfg(feature = "hydrate")]
fn mount_card_fade(config: &crate::config::SiteConfig) -> Result<(), crate::error::ScriptError> {
    use std::cell::RefCell;

    use crate::error::ScriptError;
    use crate::{consts, dom};

    let window = dom::window()?;
    let document = dom::document()?;
    let cards = dom::query_all(&document, &config.selectors.card)?;
    if cards.is_empty() {
        return Err(ScriptError::MissingElement(config.selectors.card.clone()));
    }

    let fade = RefCell::new(CardFade::new(cards.len(), config.visible_fraction));
    let check = {
        let window = window.clone();
        move || {
            if fade.borrow().is_done() {
                return;
            }
            let vh = match dom::viewport_height(&window) {
                Ok(vh) => vh,
                Err(err) => {
                    log::warn!("card fade: {err}");
                    return;
                }
            };
            let fresh = fade.borrow_mut().sweep(vh, |i| dom::bounds_of(&cards[i]));
            for index in fresh {
                dom::add_class(&cards[index], consts::FADE_IN_CLASS);
            }
        }
    };

    check();
    dom::listen(&window, "scroll", move |_| check())
}
