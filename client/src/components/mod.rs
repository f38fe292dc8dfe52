//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render composer widgets and dashboard chrome; pages own the
//! state and pass values or callbacks down.

pub mod alert;
pub mod dash_panels;
pub mod dash_sidebar;
pub mod progress_ring;
pub mod rich_text_editor;
