// ABOUTME: Request and image fixtures shared by the integration tests
// ABOUTME: Synthesizes PNG and JPEG blood report images with the image crate

use health_assessment_server::config::environment::ServerConfig;
use health_assessment_server::config::AssessmentConfig;
use health_assessment_server::server::build_router;
use health_assessment_server::services::AssessmentService;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Arc;

use super::axum_test::MultipartForm;

/// Solid-colour image encoded in `format`
pub fn encoded_image(width: u32, height: u32, rgb: [u8; 3], format: ImageOutputFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, format)
        .expect("Failed to encode test image");
    cursor.into_inner()
}

/// 32x32 PNG in the colour of a normal-glucose test strip
pub fn png_report() -> Vec<u8> {
    encoded_image(32, 32, [160, 206, 200], ImageOutputFormat::Png)
}

/// 32x32 PNG in the colour of a 240 mg/dL test strip
pub fn diabetic_strip_png() -> Vec<u8> {
    encoded_image(32, 32, [100, 90, 50], ImageOutputFormat::Png)
}

/// 32x32 JPEG
pub fn jpeg_report() -> Vec<u8> {
    encoded_image(32, 32, [120, 184, 150], ImageOutputFormat::Jpeg(90))
}

/// The worked example: 170 cm, 70 kg, 30 years, "Male"
pub fn worked_example_form() -> MultipartForm {
    MultipartForm::new()
        .text("height", "170")
        .text("weight", "70")
        .text("age", "30")
        .text("gender", "Male")
}

/// Full application router with default configuration
pub fn app() -> axum::Router {
    app_with(ServerConfig::default())
}

/// Full application router with `config`
pub fn app_with(config: ServerConfig) -> axum::Router {
    let service = Arc::new(AssessmentService::standard(config.assessment.clone()));
    build_router(&config, service)
}

/// Router with blood report analysis switched on
pub fn app_with_analysis() -> axum::Router {
    app_with(ServerConfig {
        assessment: AssessmentConfig {
            blood_report_analysis: true,
            ..AssessmentConfig::default()
        },
        ..ServerConfig::default()
    })
}
