use std::time::Duration;

use reqwest::Client;
use tracing::debug;

/// Upper bound on a single avatar download, body included.
pub const AVATAR_TIMEOUT: Duration = Duration::from_secs(10);

/// Decoded avatar, ready to hand to the UI as an RGBA buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPixels {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Asks GitHub's avatar CDN for a specific size.
pub fn sized_avatar_url(url: &str, size: u32) -> String {
    if url.contains('?') {
        format!("{url}&s={size}")
    } else {
        format!("{url}?s={size}")
    }
}

/// Decodes image bytes into RGBA pixels of exactly `size`x`size`.
pub fn decode_avatar(bytes: &[u8], size: u32) -> Option<AvatarPixels> {
    let dynamic_image = image::load_from_memory(bytes).ok()?;

    // The CDN sometimes ignores `s=` for cached avatars, so always thumbnail.
    let rgba = dynamic_image.thumbnail_exact(size, size).to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(AvatarPixels {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Downloads and decodes an avatar. Any failure, including running past
/// `timeout`, just leaves the avatar blank.
pub async fn download_avatar(
    client: &Client,
    url: &str,
    size: u32,
    timeout: Duration,
) -> Option<AvatarPixels> {
    let sized_url = sized_avatar_url(url, size);

    let bytes = match client.get(&sized_url).timeout(timeout).send().await {
        Ok(response) if response.status().is_success() => match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(url = %sized_url, error = %e, "Avatar body could not be read");
                return None;
            }
        },
        Ok(response) => {
            debug!(url = %sized_url, status = %response.status(), "Avatar request rejected");
            return None;
        }
        Err(e) => {
            debug!(url = %sized_url, error = %e, "Avatar request failed");
            return None;
        }
    };

    decode_avatar(&bytes, size)
}
