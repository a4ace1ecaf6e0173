//! `embedpage` - embed a static HTML frontend into a host page
//!
//! Loads `frontend/index.html` from next to the running executable and
//! renders it inside a fixed-height, optionally scrollable frame, either
//! once to a file or per request over HTTP.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod observability;
pub mod page;
pub mod server;
