//! Resolving image references to pixels, and turning uploaded files into
//! embeddable `data:` references.

use std::path::{Component, Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;
use tracing::{debug, info};

use crate::error::{Result, WastedError};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Where the bytes behind an image reference live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// A site path such as `/Tees/wastedsample.png`, mapped under the asset root.
    File(PathBuf),
    /// An inline `data:` reference produced by an upload.
    Inline { mime: String, bytes: Vec<u8> },
}

pub fn is_data_url(image_ref: &str) -> bool {
    image_ref.starts_with(DATA_URL_PREFIX)
}

/// Map an image reference to its source. Site paths may not climb out of
/// `asset_root`.
pub fn resolve(asset_root: &Path, image_ref: &str) -> Result<ImageSource> {
    if is_data_url(image_ref) {
        let (mime, bytes) = decode_data_url(image_ref)?;
        return Ok(ImageSource::Inline { mime, bytes });
    }

    let relative = Path::new(image_ref.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(WastedError::AssetOutsideRoot(image_ref.to_string()));
    }
    Ok(ImageSource::File(asset_root.join(relative)))
}

/// Decode the image behind `image_ref`.
pub fn load_image(asset_root: &Path, image_ref: &str) -> Result<DynamicImage> {
    let image = match resolve(asset_root, image_ref)? {
        ImageSource::File(path) => {
            debug!(path = %path.display(), "Loading image asset");
            image::open(&path)?
        }
        ImageSource::Inline { bytes, .. } => image::load_from_memory(&bytes)?,
    };
    Ok(image)
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 `data:` URL into its MIME type and payload.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| WastedError::InvalidDataUrl("missing data: scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| WastedError::InvalidDataUrl("missing ',' separator".into()))?;
    let mime = meta.strip_suffix(BASE64_MARKER).ok_or_else(|| {
        WastedError::InvalidDataUrl(format!("only base64 payloads are supported, got '{meta}'"))
    })?;
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    Ok((mime.to_string(), STANDARD.decode(payload)?))
}

/// Turn uploaded file contents into a texture reference. The MIME type is
/// sniffed from the bytes, so the file name does not matter.
pub fn upload_to_data_url(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|f| f.to_mime_type())
        .unwrap_or(FALLBACK_MIME);
    encode_data_url(mime, bytes)
}

/// Read an uploaded file to completion and return its `data:` reference.
pub fn read_upload(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "Texture uploaded");
    Ok(upload_to_data_url(&bytes))
}
