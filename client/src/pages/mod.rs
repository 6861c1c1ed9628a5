//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages render nothing theme-dependent until the color
//! scheme is resolved.

pub mod home;
pub mod projects;
