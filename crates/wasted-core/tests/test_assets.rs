use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;
use wasted_core::assets::{
    decode_data_url, encode_data_url, is_data_url, load_image, read_upload, resolve,
    upload_to_data_url, ImageSource,
};
use wasted_core::error::WastedError;

fn write_png(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(width, height, Rgba([200, 20, 120, 255]))
        .save(path)
        .unwrap();
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn test_site_path_resolves_under_root() {
    let source = resolve(Path::new("public"), "/Tees/FireTees/wastedfire.png").unwrap();
    assert_eq!(
        source,
        ImageSource::File(PathBuf::from("public/Tees/FireTees/wastedfire.png"))
    );
}

#[test]
fn test_parent_components_are_rejected() {
    let err = resolve(Path::new("public"), "/../secrets.png").unwrap_err();
    assert!(matches!(err, WastedError::AssetOutsideRoot(_)));
}

#[test]
fn test_data_url_resolves_inline() {
    let url = encode_data_url("image/png", b"\x89PNG");
    assert!(is_data_url(&url));
    match resolve(Path::new("public"), &url).unwrap() {
        ImageSource::Inline { mime, bytes } => {
            assert_eq!(mime, "image/png");
            assert_eq!(bytes, b"\x89PNG");
        }
        other => panic!("expected inline source, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Data URLs
// ---------------------------------------------------------------------------

#[test]
fn test_decode_data_url_errors() {
    assert!(matches!(
        decode_data_url("image/png;base64,AAAA").unwrap_err(),
        WastedError::InvalidDataUrl(_)
    ));
    assert!(matches!(
        decode_data_url("data:image/png;base64").unwrap_err(),
        WastedError::InvalidDataUrl(_)
    ));
    assert!(matches!(
        decode_data_url("data:text/plain,hello").unwrap_err(),
        WastedError::InvalidDataUrl(_)
    ));
    assert!(matches!(
        decode_data_url("data:image/png;base64,@@@").unwrap_err(),
        WastedError::Base64(_)
    ));
}

#[test]
fn test_decode_data_url_without_mime() {
    let (mime, bytes) = decode_data_url("data:;base64,aGk=").unwrap();
    assert_eq!(mime, "application/octet-stream");
    assert_eq!(bytes, b"hi");
}

// ---------------------------------------------------------------------------
// Uploads and loading
// ---------------------------------------------------------------------------

#[test]
fn test_upload_sniffs_png_mime() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("upload.bin");
    write_png(&path.with_extension("png"), 4, 2);
    std::fs::rename(path.with_extension("png"), &path).unwrap();

    let data_url = read_upload(&path).unwrap();
    assert!(data_url.starts_with("data:image/png;base64,"), "got {data_url}");

    let image = load_image(dir.path(), &data_url).unwrap();
    assert_eq!((image.width(), image.height()), (4, 2));
}

#[test]
fn test_upload_of_unknown_bytes_uses_fallback_mime() {
    let url = upload_to_data_url(b"not an image");
    assert!(url.starts_with("data:application/octet-stream;base64,"));
}

#[test]
fn test_load_image_from_asset_root() {
    let dir = TempDir::new().unwrap();
    write_png(&dir.path().join("Tees/sample.png"), 6, 3);
    let image = load_image(dir.path(), "/Tees/sample.png").unwrap();
    assert_eq!((image.width(), image.height()), (6, 3));
}

#[test]
fn test_load_missing_asset_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_image(dir.path(), "/Tees/missing.png").is_err());
}
