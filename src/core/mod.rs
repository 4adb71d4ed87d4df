// LogReport - core/mod.rs
//
// Core business logic layer.
// Dependencies: regex, chrono, serde only.
// Must NOT depend on: platform, app, or the filesystem directly.

pub mod aggregate;
pub mod model;
pub mod parser;
pub mod report;
