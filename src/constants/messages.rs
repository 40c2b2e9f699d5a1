// ABOUTME: User-facing messages returned in handled assessment error bodies
// ABOUTME: Clients match on these strings, so they must stay byte-for-byte stable

/// Gender did not normalize to "male" or "female"
pub const INVALID_GENDER: &str = "Invalid gender. Please provide 'male' or 'female'.";

/// Uploaded image is neither jpeg nor png
pub const UNSUPPORTED_IMAGE_TYPE: &str = "Only jpeg and png images are supported.";

/// Uploaded image has no bytes
pub const EMPTY_IMAGE: &str = "The image is empty.";

/// Prefix for decode or blood report analysis failures
pub const IMAGE_PROCESSING_PREFIX: &str = "Error processing image or analyzing blood report: ";
