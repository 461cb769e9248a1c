// utils/image_utils.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported image content: {0}")]
    Unsupported(String),
}

/// Encode raw image bytes as a `data:<mime>;base64,<payload>` URL.
///
/// The mime type comes from `content_type` when it names an image,
/// otherwise it is sniffed from the file's magic bytes.
pub fn encode_data_url(
    bytes: &[u8],
    content_type: Option<&str>,
) -> Result<String, ImageError> {
    let mime = resolve_mime(bytes, content_type)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

pub fn validate_image_size(
    size_in_bytes: usize,
    max_size_mb: Option<usize>,
) -> Result<(), ImageError> {
    match max_size_mb {
        Some(max_mb) => {
            let limit = max_mb.saturating_mul(1024 * 1024);
            if size_in_bytes > limit {
                Err(ImageError::TooLarge {
                    size: size_in_bytes,
                    limit,
                })
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    }
}

/// Size of the binary payload behind a data URL, without decoding it.
pub fn data_url_payload_size(data_url: &str) -> usize {
    let clean_data = if data_url.starts_with("data:") {
        data_url.split(',').nth(1).unwrap_or(data_url)
    } else {
        data_url
    };

    let padding = clean_data.chars().rev().take_while(|c| *c == '=').count();
    ((clean_data.len() * 3) / 4).saturating_sub(padding.min(2))
}

fn resolve_mime(bytes: &[u8], content_type: Option<&str>) -> Result<String, ImageError> {
    let declared = content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());

    if let Some(mime) = declared.as_deref() {
        if mime.starts_with("image/") && mime.len() > "image/".len() {
            return Ok(mime.to_string());
        }
    }

    match image::guess_format(bytes) {
        Ok(format) => format_mime(format)
            .map(str::to_string)
            .ok_or_else(|| ImageError::Unsupported(format!("{:?}", format))),
        Err(_) => Err(ImageError::Unsupported(
            declared.unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

fn format_mime(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Ico => Some("image/x-icon"),
        ImageFormat::Tiff => Some("image/tiff"),
        ImageFormat::Avif => Some("image/avif"),
        _ => None,
    }
}
