mod generate;
mod show;

pub use generate::{generate, Artifact};
pub use show::{gateway_id, paths};
