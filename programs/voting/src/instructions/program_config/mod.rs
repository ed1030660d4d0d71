pub mod init_program_config;
pub mod update_program_config;

pub use init_program_config::*;
pub use update_program_config::*;
