use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrefixlyError {
    /// A declaration without a property name. Raised before the block is touched.
    #[error("declaration #{index} in `{block}` has an empty property name")]
    EmptyPropertyName { block: String, index: usize },

    #[error("failed to parse stylesheet: {0}")]
    Parse(String),

    #[error("invalid plugin options")]
    Options(#[from] serde_json::Error),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PrefixlyError>;
