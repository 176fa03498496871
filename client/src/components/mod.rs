//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render table rows and the edit dialog. They receive signals
//! and callbacks from the page instead of reaching into context themselves.

pub mod edit_dialog;
pub mod element_row;
