//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio chrome and sections while reading shared
//! presentation state (theme, navigator, scroll) from Leptos context.

pub mod backgrounds;
pub mod contact_form;
pub mod scroll_progress;
pub mod sections;
pub mod site_footer;
pub mod site_header;
