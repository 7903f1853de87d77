//! Page state.
//!
//! DESIGN
//! ======
//! Each controller owns one small state object (`modal`, `theme`) so its
//! transitions can be exercised without a browser.

pub mod modal;
pub mod theme;
