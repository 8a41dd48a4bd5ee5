// One error type for the whole viewer.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// The silhouette bitmap is missing or could not be decoded.
    #[error("Could not load silhouette {path:?}: {source}")]
    SilhouetteLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The bitmap decoded fine but has no pixels to animate.
    #[error("Silhouette {path:?} is empty")]
    EmptySilhouette { path: PathBuf },
}
