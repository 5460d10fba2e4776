//! Opening-hours guard for the appointment booking form.
//!
//! DESIGN
//! ======
//! The date input picks a weekday, the weekday picks opening hours from
//! [`crate::schedule`], and the time input is constrained to them: `min` and
//! `max` are set, an out-of-range value is clamped, and a helper line under
//! the field names the hours. Submitting a time outside the hours is blocked
//! with an alert.
//!
//! This is a convenience check only. Nothing here is enforced on the server,
//! and a visitor with scripts disabled bypasses it entirely.

#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use time::{Date, Weekday};

use crate::schedule::{self, OpeningHours, TimeOfDay};

/// What the time input should look like for the selected date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub weekday: Weekday,
    pub hours: OpeningHours,
    /// Replacement for the current time value when it falls outside the
    /// hours; `None` leaves the field untouched.
    pub clamped_time: Option<TimeOfDay>,
    pub help_text: String,
}

impl Constraint {
    #[must_use]
    pub fn min(&self) -> String {
        self.hours.open.to_string()
    }

    #[must_use]
    pub fn max(&self) -> String {
        self.hours.close.to_string()
    }
}

/// Outcome of the submit check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitVerdict {
    Allow,
    Block { hours: OpeningHours, message: String },
}

/// Weekday and opening hours for a date value. `None` when the value is
/// empty or not a calendar date, in which case nothing is constrained.
#[must_use]
pub fn hours_for_date(date_value: &str) -> Option<(Weekday, OpeningHours)> {
    if date_value.trim().is_empty() {
        return None;
    }
    match schedule::parse_date(date_value) {
        Ok(date) => {
            let weekday = date.weekday();
            Some((weekday, schedule::hours_for(weekday)))
        }
        Err(err) => {
            log::debug!("appointment: {err}");
            None
        }
    }
}

/// Helper line shown under the time input.
#[must_use]
pub fn help_text(weekday: Weekday, hours: OpeningHours) -> String {
    format!("Рабочие часы в {}: {hours}", schedule::day_name(weekday))
}

/// Alert shown when a submission is blocked.
#[must_use]
pub fn block_message(hours: OpeningHours) -> String {
    format!("Пожалуйста, выберите время в рабочие часы: {hours}")
}

/// Constraint to apply when the date changes or the time field gains focus.
#[must_use]
pub fn constrain(date_value: &str, time_value: &str) -> Option<Constraint> {
    let (weekday, hours) = hours_for_date(date_value)?;
    let clamped_time = match TimeOfDay::parse(time_value) {
        Ok(time) if !hours.contains(time) => Some(hours.clamp(time)),
        _ => None,
    };
    Some(Constraint { weekday, hours, clamped_time, help_text: help_text(weekday, hours) })
}

/// Decide whether the form may be submitted.
///
/// Only blocks when both fields are filled, the date is valid and the time
/// is outside the hours or not a time at all.
#[must_use]
pub fn check_submission(date_value: &str, time_value: &str) -> SubmitVerdict {
    if date_value.trim().is_empty() || time_value.trim().is_empty() {
        return SubmitVerdict::Allow;
    }
    let Some((_, hours)) = hours_for_date(date_value) else {
        return SubmitVerdict::Allow;
    };
    match TimeOfDay::parse(time_value) {
        Ok(time) if hours.contains(time) => SubmitVerdict::Allow,
        _ => SubmitVerdict::Block { hours, message: block_message(hours) },
    }
}

/// Earliest bookable date for the date input's `min` attribute.
///
/// # Errors
///
/// Propagates a date formatting failure.
pub fn min_date(today: Date) -> Result<String, crate::error::ScriptError> {
    schedule::format_date(today)
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &crate::config::SiteConfig) -> Result<(), crate::error::ScriptError> {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{HtmlFormElement, HtmlInputElement};

    use crate::dom;

    let window = dom::window()?;
    let document = dom::document()?;
    let date_input: HtmlInputElement = dom::element_by_id(&document, &config.selectors.date_input_id)?;
    let time_input: HtmlInputElement = dom::element_by_id(&document, &config.selectors.time_input_id)?;

    date_input.set_min(&min_date(browser::today()?)?);

    let fields = Rc::new(browser::Fields {
        document: document.clone(),
        date_input,
        time_input,
        help_id: config.selectors.time_help_id.clone(),
    });

    let on_date = Rc::clone(&fields);
    dom::listen(&fields.date_input, "change", move |_| on_date.refresh())?;
    let on_time = Rc::clone(&fields);
    dom::listen(&fields.time_input, "focus", move |_| on_time.refresh())?;
    if !fields.date_input.value().is_empty() {
        fields.refresh();
    }

    let form = match fields.date_input.form() {
        Some(form) => Some(form),
        None => document
            .query_selector(&config.selectors.form)?
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()),
    };
    let Some(form) = form else {
        log::debug!("appointment: no form to guard");
        return Ok(());
    };
    dom::listen(&form, "submit", move |event| {
        let verdict = check_submission(&fields.date_input.value(), &fields.time_input.value());
        if let SubmitVerdict::Block { message, .. } = verdict {
            event.prevent_default();
            dom::alert(&window, &message);
        }
    })
}

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, HtmlInputElement};

    use super::constrain;
    use crate::consts;
    use crate::error::ScriptError;

    pub(super) struct Fields {
        pub document: Document,
        pub date_input: HtmlInputElement,
        pub time_input: HtmlInputElement,
        pub help_id: String,
    }

    impl Fields {
        pub fn refresh(&self) {
            let Some(constraint) = constrain(&self.date_input.value(), &self.time_input.value()) else {
                return;
            };
            self.time_input.set_min(&constraint.min());
            self.time_input.set_max(&constraint.max());
            if let Some(time) = constraint.clamped_time {
                self.time_input.set_value(&time.to_string());
            }
            match self.help_element() {
                Ok(help) => help.set_text_content(Some(&constraint.help_text)),
                Err(err) => log::warn!("appointment: {err}"),
            }
        }

        /// The helper line under the time input, created on first use.
        fn help_element(&self) -> Result<Element, ScriptError> {
            if let Some(existing) = self.document.get_element_by_id(&self.help_id) {
                return Ok(existing);
            }
            let help = self.document.create_element("small")?;
            help.set_id(&self.help_id);
            help.set_class_name(consts::TIME_HELP_CLASS);
            let parent = self
                .time_input
                .parent_node()
                .ok_or_else(|| ScriptError::MissingElement(format!("parent of #{}", self.time_input.id())))?;
            parent.append_child(&help)?;
            Ok(help)
        }
    }

    /// The visitor's local calendar date.
    pub fn today() -> Result<time::Date, ScriptError> {
        let now = js_sys::Date::new_0();
        let invalid = || ScriptError::InvalidDate("today".to_owned());
        let month = u8::try_from(now.get_month() + 1).map_err(|_| invalid())?;
        let month = time::Month::try_from(month).map_err(|_| invalid())?;
        let day = u8::try_from(now.get_date()).map_err(|_| invalid())?;
        let year = i32::try_from(now.get_full_year()).map_err(|_| invalid())?;
        time::Date::from_calendar_date(year, month, day).map_err(|_| invalid())
    }
}
