//! Components rendered by this crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Action cards and the theme toggle belong to the host page. The modal is the
//! only markup this crate renders; it reads its state from Leptos context.
//!
//! Host pages must not ship their own `#modal`: two elements would share the
//! modal ids. [`action_modal::clear_host_modal`] removes such a leftover copy,
//! with a warning, before the app mounts.

pub mod action_modal;
