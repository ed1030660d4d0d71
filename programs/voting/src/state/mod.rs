pub mod poll;
pub mod program_config;
pub mod voter_record;

pub use poll::*;
pub use program_config::*;
pub use voter_record::*;
