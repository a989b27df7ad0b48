use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("index {index} out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("a carousel needs at least one item")]
    Empty,

    #[error("carousel driver has shut down")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("content has no {0}")]
    Missing(&'static str),
}
