use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriPaneError>;

#[derive(Error, Debug)]
pub enum TriPaneError {
    #[error("Rendering error: {0}")]
    Rendering(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Replay error: {0}")]
    Replay(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Convenience constructors
impl TriPaneError {
    pub fn rendering(msg: impl Into<String>) -> Self {
        Self::Rendering(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay(msg.into())
    }
}
