//! Browser entry point of the neonfolio portfolio page.
//!
//! The module's start function reads the query string, installs logging and
//! mounts the page into `#app`. Everything visual lives in [`components`];
//! the platform-agnostic state machines come from `neonfolio_core`.

mod browser;
mod components;
mod debug;
mod dom;
mod error;
mod page;
mod probe;

pub(crate) mod js;

pub mod config;
pub mod logging;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use crate::{
    config::{Features, PageConfig},
    debug::NeonfolioDebug,
    error::Error,
    logging::{LoggingConfig, init_logging},
};
use crate::page::Page;

/// Element the page mounts into.
pub const MOUNT_SELECTOR: &str = "#app";

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Mounts the page when the module loads.
///
/// # Errors
/// Fails when the mount point is missing or the page chrome cannot be built.
/// A single failing section does not fail the mount.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = PageConfig::from_location();
    init_logging(&LoggingConfig::from_page(&config));
    tracing::debug!(?config, "page config");

    mount(config).map_err(|e| {
        tracing::error!(error = %e, "page failed to mount");
        e.into()
    })
}

/// Tears the page down and releases every browser resource it holds.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        drop(page);
        tracing::info!("page unmounted");
    }
}

fn mount(config: PageConfig) -> Result<(), Error> {
    unmount();

    let container = js::query_html(MOUNT_SELECTOR)?;
    let page = Page::mount(&container, config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    Ok(())
}
