//! Image decoding for destination artwork.

use std::path::Path;

use image::GenericImageView;

const MAX_PREVIEW_WIDTH: u32 = 1600;
const MAX_PREVIEW_HEIGHT: u32 = 1600;

#[derive(Clone)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    // `thumbnail` also scales up, so only shrink oversized artwork.
    let resized = if dynamic.width() > MAX_PREVIEW_WIDTH || dynamic.height() > MAX_PREVIEW_HEIGHT {
        dynamic.thumbnail(MAX_PREVIEW_WIDTH, MAX_PREVIEW_HEIGHT)
    } else {
        dynamic
    }
    .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

pub fn is_remote_location(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Local image references are resolved against the assets directory; a
/// leading slash means "asset root", not filesystem root.
pub fn local_asset_path(assets_dir: &Path, location: &str) -> std::path::PathBuf {
    assets_dir.join(location.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(3, 2, image::Rgba([245, 158, 11, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_png_into_rgba() {
        let preview = decode_preview_image(&tiny_png()).expect("decode");
        assert_eq!((preview.width, preview.height), (3, 2));
        assert_eq!(preview.rgba.len(), 3 * 2 * 4);
        assert_eq!(&preview.rgba[..4], &[245, 158, 11, 255]);
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(decode_preview_image(b"<html>not found</html>").is_err());
    }

    #[test]
    fn distinguishes_remote_and_local_references() {
        assert!(is_remote_location("https://images.unsplash.com/photo"));
        assert!(is_remote_location("HTTP://example.test/a.png"));
        assert!(!is_remote_location("paris1889_hero_16_9.png"));

        assert_eq!(
            local_asset_path(Path::new("assets"), "/cretace_hero_16_9.png"),
            Path::new("assets").join("cretace_hero_16_9.png")
        );
    }
}
