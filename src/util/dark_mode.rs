//! Browser side of the theme toggle.
//!
//! Applies the theme as a `data-theme` attribute on the `<html>` element,
//! swaps the icon class inside the `#themeToggle` button, and wires the
//! button's click to [`ThemeController::toggle`]. Requires a browser
//! environment; without the `csr` feature only the system query exists and it
//! answers "light".
//!
//! TRADE-OFFS
//! ==========
//! A page without a toggle button gets no theme handling at all, not even the
//! initial attribute. Its own stylesheet default applies.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
use crate::config::UiConfig;
#[cfg(feature = "csr")]
use crate::error::UiError;
#[cfg(feature = "csr")]
use crate::state::theme::{Theme, ThemeController, ThemeSurface};

/// Whether the host environment prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::consts::DARK_SCHEME_QUERY;

        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            Ok(None) => false,
            Err(err) => {
                leptos::logging::warn!("{}", UiError::dom("matchMedia", &err));
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Wire the theme toggle if the page has one.
///
/// With `toggle` absent, `wire` is never called and `Ok(false)` is returned:
/// no storage read, no attribute, no listener. Otherwise returns `Ok(true)`
/// once `wire` succeeds.
///
/// # Errors
///
/// Propagates whatever `wire` returns.
pub fn wire_toggle<T, E>(
    toggle: Option<T>,
    toggle_id: &str,
    wire: impl FnOnce(T) -> Result<(), E>,
) -> Result<bool, E> {
    let Some(toggle) = toggle else {
        leptos::logging::log!("no #{toggle_id} on page; theme toggle inactive");
        return Ok(false);
    };
    wire(toggle)?;
    Ok(true)
}

/// The `<html>` theme attribute plus the toggle's icon element.
#[cfg(feature = "csr")]
pub struct DocumentTheme {
    root: web_sys::Element,
    attribute: String,
    icon: Option<web_sys::Element>,
}

#[cfg(feature = "csr")]
impl ThemeSurface for DocumentTheme {
    fn current(&self) -> Option<Theme> {
        self.root
            .get_attribute(&self.attribute)
            .and_then(|raw| Theme::from_attribute(&raw))
    }

    fn show(&mut self, theme: Theme) -> Result<(), UiError> {
        self.root
            .set_attribute(&self.attribute, theme.as_str())
            .map_err(|err| UiError::dom("set theme attribute", &err))?;
        if let Some(icon) = &self.icon {
            icon.set_class_name(theme.icon_class());
        }
        Ok(())
    }
}

/// Resolve and apply the initial theme, then wire the toggle button.
///
/// Returns `Ok(false)` and registers nothing when the page has no toggle.
///
/// # Errors
///
/// Returns [`UiError::Dom`] if the document is missing or the click listener
/// cannot be registered.
#[cfg(feature = "csr")]
pub fn install(config: &UiConfig) -> Result<bool, UiError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::util::storage::LocalStore;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("no document".into()))?;
    let toggle = document.get_element_by_id(&config.theme_toggle_id);
    wire_toggle(toggle, &config.theme_toggle_id, |toggle| {
        let root = document
            .document_element()
            .ok_or_else(|| UiError::Dom("no document element".into()))?;
        let icon = toggle
            .query_selector("i")
            .map_err(|err| UiError::dom("toggle icon lookup", &err))?;

        let surface = DocumentTheme {
            root,
            attribute: config.theme_attribute.clone(),
            icon,
        };
        let controller = ThemeController::init(
            LocalStore::open(),
            surface,
            &config.theme_storage_key,
            system_prefers_dark,
        );
        leptos::logging::log!("theme: {}", controller.theme());
        let controller = Rc::new(RefCell::new(controller));

        let on_click = Closure::<dyn FnMut()>::new(move || {
            let shown = controller.borrow_mut().toggle();
            leptos::logging::log!("theme now {shown}");
        });
        toggle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| UiError::dom("theme toggle listener", &err))?;
        on_click.forget();
        Ok(())
    })
}
