use thiserror::Error;

#[derive(Error, Debug)]
pub enum WastedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid catalog or config file: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Duplicate product id {0} in catalog")]
    DuplicateProductId(u32),

    #[error("Unknown product id {0}")]
    UnknownProduct(u32),

    #[error("Invalid link: {0}")]
    InvalidLink(#[from] url::ParseError),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 payload error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Asset reference escapes the asset root: {0}")]
    AssetOutsideRoot(String),

    #[error("Another input already writes {}", .0.display())]
    DuplicateOutput(std::path::PathBuf),

    #[error("Texture is too narrow to split: {width}px wide")]
    TextureTooNarrow { width: u32 },
}

pub type Result<T> = std::result::Result<T, WastedError>;
