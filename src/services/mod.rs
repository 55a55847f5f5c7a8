pub mod password_generators;
pub mod process_command_runner;
pub mod recording_command_runner;
pub mod roster_loader;

pub use password_generators::*;
pub use process_command_runner::*;
pub use recording_command_runner::*;
pub use roster_loader::*;
