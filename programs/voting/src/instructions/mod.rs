pub mod poll;
pub mod program_config;
pub mod vote;

pub use poll::*;
pub use program_config::*;
pub use vote::*;
