use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TabsError {
    #[error("tab index {index} is out of range for a group of {len} panels")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("tab group {group} does not exist, {len} group(s) initialized")]
    GroupOutOfRange { group: usize, len: usize },

    #[error("invalid tabs config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for TabsError {
    fn from(err: serde_json::Error) -> Self {
        TabsError::InvalidConfig(err.to_string())
    }
}
