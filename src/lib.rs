//! # leaderboard-ui
//!
//! Leptos + WASM controller for the generated leaderboard page. The page
//! itself (cards, theme button, stylesheet) is static HTML; this crate adds
//! the interactive parts:
//!
//! | Module | Role |
//! |--------|------|
//! | [`state::modal`] | Action detail modal state and close triggers |
//! | [`state::theme`] | Light/dark state machine over storage and display seams |
//! | [`util::card_delegate`] | Nearest-card lookup and document click delegation |
//! | [`util::dark_mode`] | `<html>` theme attribute, toggle icon, toggle wiring |
//! | [`util::storage`] | `localStorage` behind the [`util::storage::PreferenceStore`] trait |
//! | [`components`] | The `ActionModal` component |
//! | [`app`] | Root component mounted into `<body>` |
//! | [`config`] | Host-page names, overridable from an embedded JSON block |
//! | [`consts`] | Default ids, keys, and icon classes |
//! | [`error`] | [`error::UiError`] and its codes |
//!
//! Browser glue compiles only with the `csr` feature; everything else runs in
//! native unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: apply the theme, then mount the modal app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let config = config::load();
    if let Err(err) = util::dark_mode::install(&config) {
        leptos::logging::warn!("{}: {err}; theme toggle inactive", err.error_code());
    }
    let host_modal = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(consts::MODAL_ID));
    components::action_modal::clear_host_modal(host_modal, |el| el.remove());
    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
