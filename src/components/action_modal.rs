//! Modal showing the full detail of one action card.

#[cfg(test)]
#[path = "action_modal_test.rs"]
mod action_modal_test;

use leptos::prelude::*;

use crate::consts::{CLOSE_CLASS, MODAL_DETAILS_ID, MODAL_ID, MODAL_SCORE_ID, MODAL_TIME_ID, MODAL_TITLE_ID, MODAL_USER_ID};
use crate::state::modal::{CloseTrigger, ModalState};

/// Hidden overlay that the card delegate fills and shows.
///
/// Reads `RwSignal<ModalState>` from context. The close control and a click
/// on the dimmed backdrop both hide it; Escape is handled at window level by
/// [`crate::app::App`].
#[component]
pub fn ActionModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let close = move |trigger: CloseTrigger| modal.update(|m| m.close(trigger));
    let on_backdrop = move |_| close(CloseTrigger::Backdrop);
    let on_close_click = move |_| close(CloseTrigger::CloseButton);

    let display = move || if modal.with(|m| m.visible) { "block" } else { "none" };
    let title = move || modal.with(|m| m.title.clone());
    let details = move || modal.with(|m| m.details.clone());
    let user = move || modal.with(|m| m.user.clone());
    let score = move || modal.with(ModalState::score_label);
    let time = move || modal.with(ModalState::time_label);

    view! {
        <div id=MODAL_ID class="modal" style:display=display on:click=on_backdrop>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <span class=CLOSE_CLASS on:click=on_close_click title="Close">"×"</span>
                <h2 id=MODAL_TITLE_ID>{title}</h2>
                <p id=MODAL_DETAILS_ID>{details}</p>
                <div class="modal-meta">
                    <span id=MODAL_USER_ID>{user}</span>
                    <span id=MODAL_SCORE_ID>{score}</span>
                    <span id=MODAL_TIME_ID>{time}</span>
                </div>
            </div>
        </div>
    }
}

/// Drop a host-page modal left over from older page markup so the rendered
/// modal's ids stay unique. Returns whether one was removed.
pub fn clear_host_modal<T>(existing: Option<T>, remove: impl FnOnce(T)) -> bool {
    let Some(stale) = existing else {
        return false;
    };
    leptos::logging::warn!("page already has #{MODAL_ID}; replacing it");
    remove(stale);
    true
}
