//! Client-side page behaviours for the clinic website.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages. It owns four independent units, each wired to the DOM once the
//! document has been parsed: reveal-on-scroll animations, the appointment
//! form's opening-hours guard, page interactions (smooth anchors, card fade-in
//! and the statistics counter) and the light/dark theme toggle.
//!
//! Every unit is split into a pure core, which is plain Rust and tested
//! natively, and a DOM host compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`schedule`] | Weekday opening hours and `HH:MM` time values |
//! | [`appointment`] | Date/time constraint and submission guard for the booking form |
//! | [`viewport`] | Visibility predicates and the one-way [`viewport::RevealSet`] |
//! | [`scroll_animator`] | Reveal `.animate-on-scroll` elements as they enter the viewport |
//! | [`page`] | Smooth-scroll anchors and card fade-in |
//! | [`counter`] | One-shot statistics counter animation |
//! | [`theme`] | Persisted light/dark theme preference |
//! | [`config`] | Tunables and DOM selectors, optionally overridden by the page |
//! | [`consts`] | Shared defaults (margins, durations, selectors) |
//! | [`error`] | Crate error type |

pub mod appointment;
pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod page;
pub mod schedule;
pub mod scroll_animator;
pub mod theme;
pub mod viewport;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;
