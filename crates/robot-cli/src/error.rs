use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Robot(#[from] robot_api::Error),

    #[error("failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Usage errors never reach here; clap exits with 2 on its own.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 78,
            CliError::Robot(_) | CliError::Output(_) => 1,
        }
    }
}
