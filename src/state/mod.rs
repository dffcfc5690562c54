//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The console holds a single piece of shared state, session validity, owned
//! by the session gate and mirrored into a signal for rendering.

pub mod session;
