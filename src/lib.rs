pub mod config_gen;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod node_mgmt;

pub use config_gen::{ConfigGenerator, GenerateError, Generated};
