//! Click delegation from action cards to the modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! One listener on the document handles every card, including cards inserted
//! after load. The lookup itself is a pure walk over the click target's
//! ancestor chain so it runs natively in tests against fake nodes.

#[cfg(test)]
#[path = "card_delegate_test.rs"]
mod card_delegate_test;

use leptos::prelude::{RwSignal, Update};

use crate::config::UiConfig;
use crate::consts::{ATTR_SCORE, ATTR_SUMMARY, ATTR_TIME, ATTR_USER};
use crate::error::UiError;
use crate::state::modal::{ActionDetails, ModalState};

/// The slice of an element the delegate needs.
pub trait CardNode {
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Receiver of card clicks.
pub trait ActionSink {
    fn open(&mut self, action: ActionDetails);
}

impl ActionSink for ModalState {
    fn open(&mut self, action: ActionDetails) {
        ModalState::open(self, action);
    }
}

impl ActionSink for RwSignal<ModalState> {
    fn open(&mut self, action: ActionDetails) {
        self.update(|modal| modal.open(action));
    }
}

/// Result of routing one click.
#[derive(Debug)]
pub enum ClickOutcome {
    /// No action card encloses the target.
    Ignored,
    /// The sink was opened with the card's fields.
    Opened,
    /// A card was found but its data was unusable; the sink was not called.
    Rejected(UiError),
}

/// First node in `chain` (target first, then ancestors) satisfying `is_card`.
pub fn nearest_card<N>(chain: impl IntoIterator<Item = N>, is_card: impl Fn(&N) -> bool) -> Option<N> {
    chain.into_iter().find(|node| is_card(node))
}

/// Read the four action fields off a card.
///
/// # Errors
///
/// Returns [`UiError::MissingCardField`] for the first absent attribute.
/// Empty attributes are accepted.
pub fn read_card(card: &impl CardNode) -> Result<ActionDetails, UiError> {
    let field = |name: &'static str| card.attribute(name).ok_or(UiError::MissingCardField { field: name });
    Ok(ActionDetails {
        summary: field(ATTR_SUMMARY)?,
        user: field(ATTR_USER)?,
        score: field(ATTR_SCORE)?,
        time: field(ATTR_TIME)?,
    })
}

/// Routes clicks on marked cards to an [`ActionSink`].
#[derive(Clone, Debug)]
pub struct CardDelegate {
    marker_class: String,
}

impl CardDelegate {
    pub fn new(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.action_card_class.clone())
    }

    #[must_use]
    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    /// Nearest enclosing action card in `chain`, if any.
    pub fn nearest<N: CardNode>(&self, chain: impl IntoIterator<Item = N>) -> Option<N> {
        nearest_card(chain, |node| node.has_class(&self.marker_class))
    }

    /// Handle one click whose target's ancestor chain is `chain`.
    pub fn dispatch<N: CardNode>(&self, chain: impl IntoIterator<Item = N>, sink: &mut impl ActionSink) -> ClickOutcome {
        let Some(card) = self.nearest(chain) else {
            return ClickOutcome::Ignored;
        };
        match read_card(&card) {
            Ok(action) => {
                sink.open(action);
                ClickOutcome::Opened
            }
            Err(err) => ClickOutcome::Rejected(err),
        }
    }
}

#[cfg(feature = "csr")]
impl CardNode for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// `el` followed by each of its ancestors up to `<html>`.
#[cfg(feature = "csr")]
fn ancestors(el: web_sys::Element) -> impl Iterator<Item = web_sys::Element> {
    std::iter::successors(Some(el), |el| el.parent_element())
}

/// Attach the document-level click listener feeding `modal`.
///
/// # Errors
///
/// Returns [`UiError::Dom`] if there is no document or the listener cannot
/// be registered.
#[cfg(feature = "csr")]
pub fn install(delegate: CardDelegate, modal: RwSignal<ModalState>) -> Result<(), UiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("no document".into()))?;

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_ref::<web_sys::Element>().cloned()) else {
            return;
        };
        let mut sink = modal;
        if let ClickOutcome::Rejected(err) = delegate.dispatch(ancestors(target), &mut sink) {
            leptos::logging::warn!("{}: {err}; card click ignored", err.error_code());
        }
    });
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| UiError::dom("document click listener", &err))?;
    // Listener lives for the page.
    on_click.forget();
    Ok(())
}
