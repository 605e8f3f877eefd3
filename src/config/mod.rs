//! JSON configuration for the command-line tool.

pub mod tool;

pub use tool::{load_config, EdgeInputConfig, HoughToolConfig, OutputConfig};
