use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Textures by asset path. Assets that failed to load are absent.
pub type TextureCache = HashMap<&'static str, Texture2D>;

// --- Map a site-absolute asset path onto the asset root ---
pub fn resolve_asset(root: &Path, asset: &str) -> PathBuf {
    root.join(asset.trim_start_matches('/'))
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

// --- EXIF orientation, 1 (no rotation) when absent or unreadable ---
pub fn exif_orientation(path: &Path, file_bytes: &[u8]) -> u16 {
    let extension = extension_of(path);
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation ---
pub fn load_image_with_exif_rotation(image_path: &Path) -> Result<Image> {
    let extension = extension_of(image_path);
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        bail!("unsupported image format {:?}", image_path);
    }

    let file_bytes = fs::read(image_path).with_context(|| format!("failed to read {:?}", image_path))?;
    let orientation = exif_orientation(image_path, &file_bytes);

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {:?}: {}", image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        tracing::debug!(path = %image_path.display(), orientation, "applied EXIF rotation");
    }

    Ok(image)
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image = load_image_with_exif_rotation(image_path)?;
    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {:?}: {}", image_path, e))?;
    Ok(texture)
}

// --- Load every asset once; failures are drawn as placeholders later ---
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    root: &Path,
    assets: &[&'static str],
) -> TextureCache {
    let mut cache = TextureCache::new();
    for asset in assets {
        let path = resolve_asset(root, asset);
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                cache.insert(*asset, texture);
            }
            Err(e) => tracing::warn!(asset, error = %e, "asset unavailable, using placeholder"),
        }
    }
    tracing::info!(loaded = cache.len(), total = assets.len(), root = %root.display(), "textures loaded");
    cache
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_resolve_under_the_root() {
        let root = Path::new("public");
        assert_eq!(
            resolve_asset(root, "/images/gallery/cysec.jpeg"),
            PathBuf::from("public/images/gallery/cysec.jpeg")
        );
        assert_eq!(resolve_asset(root, "flag.png"), PathBuf::from("public/flag.png"));
    }

    #[test]
    fn vector_assets_are_rejected_before_reading() {
        let err = load_image_with_exif_rotation(Path::new("does/not/exist/plane.svg")).unwrap_err();
        assert!(err.to_string().contains("unsupported image format"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_image_with_exif_rotation(&dir.path().join("missing.png")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn non_jpeg_has_no_orientation() {
        assert_eq!(exif_orientation(Path::new("a.png"), b"not an image"), 1);
    }

    #[test]
    fn garbage_jpeg_falls_back_to_upright() {
        assert_eq!(exif_orientation(Path::new("a.JPG"), b"garbage"), 1);
    }
}
