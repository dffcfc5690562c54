//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell chrome from the page
//! descriptor table.

pub mod menu;
pub mod page_outlet;
