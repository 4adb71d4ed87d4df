// LogReport - app/mod.rs
//
// Application layer: ties the core pipeline to the filesystem.

pub mod analysis;
