//! CLI command implementations.

mod ask;
mod config;
mod doctor;
mod init;
mod tool;

pub use ask::run_ask;
pub use config::run_config;
pub use doctor::run_doctor;
pub use init::run_init;
pub use tool::run_tool;
