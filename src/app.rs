//! Root component: modal context, card delegation, and Escape handling.

use leptos::prelude::*;

use crate::components::action_modal::ActionModal;
use crate::config::UiConfig;
use crate::state::modal::{CloseTrigger, ModalState, is_close_key};

/// Root application component.
///
/// Provides the modal state, attaches the document click delegate for action
/// cards, and closes the modal on Escape wherever focus is.
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());
    provide_context(modal);

    #[cfg(feature = "csr")]
    {
        use crate::util::card_delegate::{self, CardDelegate};

        if let Err(err) = card_delegate::install(CardDelegate::from_config(&config), modal) {
            leptos::logging::warn!("{}: {err}; action cards inactive", err.error_code());
        }
    }

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_close_key(&ev.key()) && modal.with_untracked(|m| m.visible) {
            modal.update(|m| m.close(CloseTrigger::EscapeKey));
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <style>{config.card_style()}</style>
        <ActionModal/>
    }
}
