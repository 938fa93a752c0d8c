use std::path::PathBuf;

pub type FodResult<T> = Result<T, FodError>;

#[derive(thiserror::Error, Debug)]
pub enum FodError {
    #[error("font error: {0}")]
    Font(String),

    #[error("no .png images found in '{}'", .0.display())]
    NoImages(PathBuf),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("render error: {0}")]
    Render(String),

    #[error("fact error: {0}")]
    Fact(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FodError {
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn fact(msg: impl Into<String>) -> Self {
        Self::Fact(msg.into())
    }
}
