//! Configuration model for metagen.
//!
//! An optional YAML file passed with `--config`. Unknown fields are ignored
//! and every field has a default, so an empty file is a valid config.

mod model;
mod operations;


pub use model::Config;
