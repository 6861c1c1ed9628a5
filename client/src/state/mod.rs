//! Client-side presentation state.
//!
//! DESIGN
//! ======
//! Each concern (color scheme, section navigation, scroll position, contact
//! draft) is a small plain-Rust model so it can be tested without a browser.
//! `theme` adds the reactive wrapper that components consume via context.

pub mod contact;
pub mod navigator;
pub mod preference;
pub mod scroll;
pub mod theme;
