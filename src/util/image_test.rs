use super::*;

#[test]
fn image_mime_types_pass() {
    assert!(validate_image_file("image/png", 1024, MAX_IMAGE_MB).is_ok());
    assert!(validate_image_file("image/jpeg", 1024, MAX_IMAGE_MB).is_ok());
    assert!(validate_image_file("image/webp", 1024, MAX_IMAGE_MB).is_ok());
}

#[test]
fn non_image_files_are_rejected() {
    let err = validate_image_file("application/pdf", 1024, MAX_IMAGE_MB).unwrap_err();
    assert_eq!(err, "Please select a valid image file");
    assert!(validate_image_file("text/plain", 0, MAX_IMAGE_MB).is_err());
}

#[test]
fn size_cap_is_inclusive() {
    let cap = MAX_IMAGE_MB * 1024 * 1024;
    assert!(validate_image_file("image/png", cap, MAX_IMAGE_MB).is_ok());
    let err = validate_image_file("image/png", cap + 1, MAX_IMAGE_MB).unwrap_err();
    assert_eq!(err, "Image size must be less than 5MB");
}

#[test]
fn custom_cap_appears_in_message() {
    let err = validate_image_file("image/png", 3 * 1024 * 1024, 2).unwrap_err();
    assert_eq!(err, "Image size must be less than 2MB");
}
