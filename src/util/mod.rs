//! Utility helpers shared across console modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, HTTP-backed
//! session checks) from page and component logic.

pub mod browser_session;
pub mod credential;
