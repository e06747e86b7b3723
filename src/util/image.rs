//! Image upload helpers: type/size validation and data-URL encoding.
//!
//! Uploaded listing and profile images are embedded as data URIs in the
//! JSON payload, so the size cap matters twice: storage and request size.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Default upload cap in megabytes.
pub const MAX_IMAGE_MB: u64 = 5;

/// Check an upload's MIME type and byte size before reading it.
///
/// # Errors
///
/// Returns a user-facing message for non-image files or files over
/// `max_mb` megabytes.
pub fn validate_image_file(mime: &str, size_bytes: u64, max_mb: u64) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("Please select a valid image file".to_owned());
    }
    if size_bytes > max_mb * 1024 * 1024 {
        return Err(format!("Image size must be less than {max_mb}MB"));
    }
    Ok(())
}

/// Read a browser file into a `data:` URL for embedding in JSON.
///
/// # Errors
///
/// Returns a message when the file read fails.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: web_sys::File) -> Result<String, String> {
    let file = gloo_file::File::from(file);
    gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| e.to_string())
}
