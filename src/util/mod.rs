//! Browser glue and the seams that let it be tested natively.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys calls behind small traits
//! (`CardNode`, `PreferenceStore`, `ThemeSurface`) so controller logic stays
//! plain Rust.

pub mod card_delegate;
pub mod dark_mode;
pub mod storage;
