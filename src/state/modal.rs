//! Action detail modal state.
//!
//! DESIGN
//! ======
//! There is exactly one modal per page. It is never destroyed: `open`
//! overwrites every display field and shows it, `close` only hides it, so the
//! fields always reflect the most recent open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The four fields carried by an action card, as raw attribute text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionDetails {
    pub summary: String,
    pub user: String,
    pub score: String,
    pub time: String,
}

impl ActionDetails {
    pub fn new(
        summary: impl Into<String>,
        user: impl Into<String>,
        score: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            user: user.into(),
            score: score.into(),
            time: time.into(),
        }
    }
}

/// What dismissed the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The `.close` control inside the modal.
    CloseButton,
    /// A click on the dimmed overlay outside the modal body.
    Backdrop,
    /// Escape pressed anywhere on the page.
    EscapeKey,
}

/// Whether a `KeyboardEvent.key` value dismisses the modal.
#[must_use]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Display state of the modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub title: String,
    pub details: String,
    pub user: String,
    /// Raw score text as it came off the card.
    pub score: String,
    pub time: String,
    pub visible: bool,
}

impl ModalState {
    /// Populate from `action` and show.
    pub fn open(&mut self, action: ActionDetails) {
        self.title = format!("Action by {}", action.user);
        self.details = action.summary;
        self.user = action.user;
        self.score = action.score;
        self.time = action.time;
        self.visible = true;
    }

    /// Hide. Content is left in place for the next open to overwrite.
    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.visible {
            leptos::logging::log!("modal closed via {trigger:?}");
        }
        self.visible = false;
    }

    /// Score line, e.g. `+5 pts`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("+{} pts", self.score)
    }

    /// Time line, e.g. `Time: 2024-01-01`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("Time: {}", self.time)
    }
}
