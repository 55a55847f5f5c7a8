mod command_runner;
mod display_name;
mod email;
mod env_var_name;
mod error;
mod import_stage;
mod member;
mod member_name;
mod password;
mod username;

pub use command_runner::*;
pub use display_name::*;
pub use email::*;
pub use env_var_name::*;
pub use error::*;
pub use import_stage::*;
pub use member::*;
pub use member_name::*;
pub use password::*;
pub use username::*;
