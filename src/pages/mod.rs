//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` and `logout` are reachable through the page descriptor table;
//! `login` replaces the whole shell while the session is invalid.

pub mod home;
pub mod login;
pub mod logout;
