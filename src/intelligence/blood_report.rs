// ABOUTME: Blood sugar extraction from an uploaded blood report image
// ABOUTME: Colorimetric glucose test-strip reading against a calibrated colour chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Blood report analysis
//!
//! The default analyzer reads a photographed glucose test strip: the reagent
//! pad sits in the centre of the frame and its colour shifts from pale blue to
//! dark brown as glucose rises. The mean colour of the centre window is
//! projected onto the calibration chart and glucose is interpolated between
//! the two bracketing swatches.

use crate::errors::{AppError, AppResult};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fasting plasma glucose in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloodSugarLevel(pub f64);

impl BloodSugarLevel {
    /// Value in mg/dL
    #[must_use]
    pub const fn mg_per_dl(self) -> f64 {
        self.0
    }
}

impl fmt::Display for BloodSugarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} mg/dL", self.0)
    }
}

/// Extracts a blood sugar reading from a decoded report image
pub trait BloodSugarAnalyzer: Send + Sync {
    /// Analyze one image
    ///
    /// # Errors
    ///
    /// Returns an error if no reading can be extracted from the image
    fn analyze(&self, image: &RgbImage) -> AppResult<BloodSugarLevel>;
}

/// One calibration swatch: pad colour at a known glucose concentration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    /// Glucose (mg/dL)
    pub glucose_mg_dl: f64,
    /// Pad colour
    pub rgb: [f64; 3],
}

const fn swatch(glucose_mg_dl: f64, r: f64, g: f64, b: f64) -> Swatch {
    Swatch {
        glucose_mg_dl,
        rgb: [r, g, b],
    }
}

/// Factory calibration chart, ordered by glucose
pub const DEFAULT_CHART: [Swatch; 7] = [
    swatch(40.0, 198.0, 224.0, 234.0),
    swatch(70.0, 160.0, 206.0, 200.0),
    swatch(100.0, 120.0, 184.0, 150.0),
    swatch(130.0, 96.0, 150.0, 102.0),
    swatch(180.0, 94.0, 118.0, 70.0),
    swatch(240.0, 100.0, 90.0, 50.0),
    swatch(400.0, 80.0, 60.0, 40.0),
];

/// Smallest image side the analyzer accepts (pixels)
const MIN_IMAGE_SIDE: u32 = 8;

/// Glucose test-strip reader
#[derive(Debug, Clone)]
pub struct ColorimetricStripAnalyzer {
    chart: Vec<Swatch>,
    /// Fraction of each image side covered by the sampled centre window
    window_fraction: f64,
}

impl Default for ColorimetricStripAnalyzer {
    fn default() -> Self {
        Self {
            chart: DEFAULT_CHART.to_vec(),
            window_fraction: 0.2,
        }
    }
}

impl ColorimetricStripAnalyzer {
    /// Analyzer with a custom chart
    ///
    /// # Errors
    ///
    /// Returns an error if the chart has fewer than two swatches or is not
    /// sorted by increasing glucose
    pub fn with_chart(chart: Vec<Swatch>) -> AppResult<Self> {
        if chart.len() < 2 {
            return Err(AppError::config(
                "Calibration chart needs at least two swatches",
            ));
        }
        if chart
            .windows(2)
            .any(|pair| pair[0].glucose_mg_dl >= pair[1].glucose_mg_dl)
        {
            return Err(AppError::config(
                "Calibration chart must be sorted by increasing glucose",
            ));
        }
        Ok(Self {
            chart,
            ..Self::default()
        })
    }

    /// Mean colour of the centre window
    fn sample_centre(&self, image: &RgbImage) -> AppResult<[f64; 3]> {
        let (width, height) = image.dimensions();
        if width < MIN_IMAGE_SIDE || height < MIN_IMAGE_SIDE {
            return Err(AppError::invalid_input(format!(
                "Image is {width}x{height} px, at least {MIN_IMAGE_SIDE}x{MIN_IMAGE_SIDE} px is required"
            )));
        }

        let window_w = ((f64::from(width) * self.window_fraction) as u32).max(1);
        let window_h = ((f64::from(height) * self.window_fraction) as u32).max(1);
        let x0 = (width - window_w) / 2;
        let y0 = (height - window_h) / 2;

        let mut sum = [0.0_f64; 3];
        for y in y0..y0 + window_h {
            for x in x0..x0 + window_w {
                let pixel = image.get_pixel(x, y);
                for (channel, value) in sum.iter_mut().zip(pixel.0) {
                    *channel += f64::from(value);
                }
            }
        }

        let count = f64::from(window_w) * f64::from(window_h);
        Ok(sum.map(|channel| channel / count))
    }

    /// Interpolate glucose for a pad colour
    fn interpolate(&self, colour: [f64; 3]) -> f64 {
        let nearest = self
            .chart
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                distance_sq(colour, a.rgb).total_cmp(&distance_sq(colour, b.rgb))
            })
            .map_or(0, |(index, _)| index);

        let anchor = self.chart[nearest];
        let neighbours = [nearest.checked_sub(1), Some(nearest + 1)];

        neighbours
            .into_iter()
            .flatten()
            .filter_map(|index| self.chart.get(index))
            .map(|neighbour| {
                let (t, residual) = project(colour, anchor.rgb, neighbour.rgb);
                let glucose = (neighbour.glucose_mg_dl - anchor.glucose_mg_dl)
                    .mul_add(t, anchor.glucose_mg_dl);
                (glucose, residual)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(anchor.glucose_mg_dl, |(glucose, _)| glucose)
    }
}

impl BloodSugarAnalyzer for ColorimetricStripAnalyzer {
    fn analyze(&self, image: &RgbImage) -> AppResult<BloodSugarLevel> {
        let colour = self.sample_centre(image)?;
        let glucose = self.interpolate(colour);
        tracing::debug!(?colour, glucose, "Read glucose test strip");
        Ok(BloodSugarLevel((glucose * 10.0).round() / 10.0))
    }
}

fn distance_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Project `p` onto segment `a -> b`: (clamped position 0..=1, squared residual)
fn project(p: [f64; 3], a: [f64; 3], b: [f64; 3]) -> (f64, f64) {
    let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let ap = [p[0] - a[0], p[1] - a[1], p[2] - a[2]];
    let length_sq: f64 = ab.iter().map(|v| v * v).sum();
    if length_sq <= f64::EPSILON {
        return (0.0, distance_sq(p, a));
    }

    let t = (ap.iter().zip(ab).map(|(x, y)| x * y).sum::<f64>() / length_sq).clamp(0.0, 1.0);
    let closest = [t.mul_add(ab[0], a[0]), t.mul_add(ab[1], a[1]), t.mul_add(ab[2], a[2])];
    (t, distance_sq(p, closest))
}
