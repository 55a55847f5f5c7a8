use dotenvy::dotenv;

/// Loads a `.env` file from the working directory, if there is one.
pub fn load_env() {
    dotenv().ok();
}

pub mod env {
    pub const INTERPRETER_ENV_VAR: &str = "ROSTER_IMPORTER_INTERPRETER";
    pub const GROUP_ENV_VAR: &str = "ROSTER_IMPORTER_GROUP";
    pub const PASSWORD_ENV_ENV_VAR: &str = "ROSTER_IMPORTER_PASSWORD_ENV";
    pub const PASSWORD_SUFFIX_ENV_VAR: &str = "ROSTER_IMPORTER_PASSWORD_SUFFIX";
}

pub const DEFAULT_INTERPRETER: &str = "php";
pub const DEFAULT_GROUP: &str = "Member";
pub const DEFAULT_PASSWORD_ENV: &str = "OC_PASS";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub mod tool {
    pub const ADD_USER_SUBCOMMAND: &str = "user:add";
    pub const USER_SETTING_SUBCOMMAND: &str = "user:setting";
    pub const PASSWORD_FROM_ENV_FLAG: &str = "--password-from-env";
    pub const SETTINGS_APP: &str = "settings";
    pub const EMAIL_KEY: &str = "email";
}
