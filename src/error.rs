use std::io;
use std::path::PathBuf;

/// Failures that can surface while loading or navigating a deck.
///
/// Highlighting and rendering never fail; only data loading does.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid presentation data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene {index} is out of range (deck has {len} scenes)")]
    SceneOutOfRange { index: usize, len: usize },
}
