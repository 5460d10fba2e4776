//! WASM entry point: wait for the document, load config, install logging at
//! the configured level and mount every unit.

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::SiteConfig;
use crate::{appointment, dom, page, scroll_animator, theme};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            install_logger(SiteConfig::default().log_level());
            log::warn!("start: {err}");
            return;
        }
    };
    // The #site-config block may sit after the module script, so config is
    // only read once the document has been parsed.
    if document.ready_state() != "loading" {
        mount_all();
        return;
    }
    if let Err(err) = dom::listen(&document, "DOMContentLoaded", |_| mount_all()) {
        install_logger(SiteConfig::default().log_level());
        log::warn!("start: {err}");
    }
}

fn install_logger(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger: {err}");
    }
}

fn mount_all() {
    let config = match dom::document().and_then(|document| SiteConfig::from_page(&document)) {
        Ok(config) => {
            install_logger(config.log_level());
            config
        }
        Err(err) => {
            let config = SiteConfig::default();
            install_logger(config.log_level());
            log::warn!("site config ignored: {err}");
            config
        }
    };

    dom::report("scroll animator", scroll_animator::mount(&config));
    dom::report("appointment form", appointment::mount(&config));
    page::mount(&config);
    dom::report("theme", theme::mount(&config));
}
