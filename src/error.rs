use thiserror::Error;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error("Invalid lens: {0}")]
    InvalidLens(String),
    #[error("View-projection matrix is not invertible")]
    NonInvertible,
    #[error("Degenerate orbit: {0}")]
    DegenerateOrbit(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CameraError>;
