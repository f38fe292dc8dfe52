//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by workflow (`draft`, `upload`, `publish`, `tab`) so each
//! screen can depend on small focused models that are testable without a
//! browser.

pub mod draft;
pub mod publish;
pub mod tab;
pub mod upload;
