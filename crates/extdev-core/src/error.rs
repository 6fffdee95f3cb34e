use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevError {
    #[error("current directory needs to be in the plugin or template directory")]
    OutsideExtensionRoots,

    #[error("current directory has to be the main extension directory")]
    NotExtensionRoot,

    #[error("current directory needs to be empty")]
    DirectoryNotEmpty,

    #[error("components can only be added to plugins")]
    ComponentsRequirePlugin,

    #[error("invalid component type '{0}'")]
    InvalidComponentType(String),

    #[error("this extension seems not to be managed by git")]
    NotAGitRepository,

    #[error("fetching skeleton '{skeleton}' failed: {reason}")]
    FetchFailed { skeleton: String, reason: String },

    #[error("git not found: install git and make sure it is in PATH")]
    GitNotFound,

    #[error("running git failed: {0}")]
    GitFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevError>;
