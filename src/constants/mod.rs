// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, env defaults, routes, user-facing messages and meal plan defaults

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// User-facing assessment messages
pub mod messages;

/// Service identification for structured logging
pub mod service_names {
    /// Health assessment server
    pub const HEALTH_ASSESSMENT_SERVER: &str = "health-assessment-server";
}

/// Defaults applied when the environment does not override them
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Upper bound on a multipart request body (10 MiB)
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Multipart body limit in bytes
    pub const MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
    /// Comma-separated CORS origins, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Enables the blood-sugar signal from uploaded report images
    pub const BLOOD_REPORT_ANALYSIS_ENABLED: &str = "BLOOD_REPORT_ANALYSIS_ENABLED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Route paths
pub mod routes {
    /// Assessment form submission
    pub const ASSESSMENT: &str = "/api/";
    /// Health check
    pub const HEALTH: &str = "/health";
    /// Readiness check
    pub const READY: &str = "/ready";
}

/// Multipart form field names of the assessment endpoint
pub mod form_fields {
    /// Height in centimetres
    pub const HEIGHT: &str = "height";
    /// Weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Age in years
    pub const AGE: &str = "age";
    /// "male" or "female", any casing
    pub const GENDER: &str = "gender";
    /// Blood report image
    pub const IMAGE: &str = "image";
    /// Free-text note about known diseases
    pub const DISEASES_INFO: &str = "diseases_info";
}

/// Decoder bounds for uploaded report images
pub mod image_limits {
    /// Largest accepted width or height in pixels
    pub const MAX_IMAGE_SIDE: u32 = 4096;
    /// Decoder allocation ceiling (96 MiB)
    pub const MAX_DECODE_ALLOC_BYTES: u64 = 96 * 1024 * 1024;
}

/// Image MIME types the assessment accepts
pub mod mime_types {
    /// JPEG
    pub const IMAGE_JPEG: &str = "image/jpeg";
    /// PNG
    pub const IMAGE_PNG: &str = "image/png";
    /// Accepted upload types
    pub const SUPPORTED_IMAGE_TYPES: [&str; 2] = [IMAGE_JPEG, IMAGE_PNG];
}

/// Meal plan inputs that are not yet sourced from the request
pub mod meal_plan_defaults {
    /// Dietary tags
    pub const DIETARY_TAGS: [&str; 2] = ["low_sodium_diet", "low_fat_diet"];
    /// Nutrients to favour
    pub const NUTRIENT_TAGS: [&str; 2] = ["calcium", "vitamin_c"];
    /// Food preference tags
    pub const PREFERENCE_TAGS: [&str; 1] = ["non-veg"];
    /// Free-text preference
    pub const PREFERENCE_TEXT: &str = "i love indian";
}
