pub mod close_poll;
pub mod create_poll;

pub use close_poll::*;
pub use create_poll::*;
