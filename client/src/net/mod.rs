//! Networking modules for the REST endpoint and the image content store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the blog backend over JSON, `storage` streams image files
//! to the content store and reports progress.

pub mod api;
pub mod storage;
