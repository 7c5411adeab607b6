// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant colors of an image and how much of the image each one covers.
//!
//! Every exact color of the visible (not fully transparent) pixels is counted, similar colors are greedily merged
//! into clusters, and the clusters are ranked by how many pixels they cover. The result is a short list of colors,
//! each with its share of the image in percent.
//!
//! ```no_run
//! let image = prevalence::image::open("photo.png")?.to_rgba8();
//! let colors = prevalence::DominantColors::from_image(image)
//!     .max_colors(5)
//!     .generate()?;
//!
//! for color in colors.colors() {
//!     println!("{} - {}%", color.hex(), color.percent());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cluster;
mod error;
pub mod hex;
pub mod histogram;
mod options;
mod ranked_color;

pub const DEFAULT_RESIZE_IMAGE_AREA: u32 = 0;

pub use crate::{
    cluster::{cluster, Cluster},
    error::Error,
    histogram::{ColorKey, Histogram},
    options::{Options, DEFAULT_CLUSTER_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_MIN_PERCENT},
    ranked_color::{rank, RankedColor},
};
pub use image;

use image::{math::Rect, RgbaImage};

/// The dominant colors of an image, most dominant first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DominantColors {
    colors: Vec<RankedColor>,
    visible_pixels: u64,
}

pub struct DominantColorsBuilder {
    image: RgbaImage,
    options: Options,
    resize_area: u32,
    region: Option<Rect>,
}

/// Find the dominant colors in a flat buffer of RGBA samples.
///
/// This runs the whole analysis without any of the image preprocessing [`DominantColorsBuilder`] offers.
pub fn dominant_colors(samples: &[u8], options: &Options) -> Result<Vec<RankedColor>, Error> {
    options.validate()?;

    let hist = Histogram::from_samples(samples)?;
    Ok(analyze(&hist, options))
}

fn analyze(hist: &Histogram, options: &Options) -> Vec<RankedColor> {
    let clusters = cluster(hist, options.cluster_threshold);
    rank(
        &clusters,
        hist.visible_pixels(),
        options.max_colors,
        options.min_percent,
    )
}

impl DominantColors {
    pub fn from_image(image: RgbaImage) -> DominantColorsBuilder {
        DominantColorsBuilder::from_image(image)
    }

    pub fn colors(&self) -> &[RankedColor] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<RankedColor> {
        self.colors
    }

    /// The number of pixels that weren't fully transparent in the analyzed, possibly cropped and resized, image.
    pub fn visible_pixels(&self) -> u64 {
        self.visible_pixels
    }

    pub fn most_dominant_color(&self) -> Option<RankedColor> {
        self.colors.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl DominantColorsBuilder {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            options: Options::default(),
            resize_area: DEFAULT_RESIZE_IMAGE_AREA,
            region: None,
        }
    }

    /// Use a flat buffer of RGBA samples, four per pixel in row-major order, as the image.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, Error> {
        let len = samples.len();
        if len % 4 != 0 {
            return Err(Error::MalformedSamples { len });
        }

        if len as u64 != width as u64 * height as u64 * 4 {
            return Err(Error::DimensionMismatch { width, height, len });
        }

        let image = RgbaImage::from_raw(width, height, samples).ok_or(Error::DimensionMismatch {
            width,
            height,
            len,
        })?;

        Ok(Self::from_image(image))
    }

    pub fn options(self, options: Options) -> Self {
        Self { options, ..self }
    }

    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.options.max_colors = max_colors;
        self
    }

    pub fn min_percent(mut self, min_percent: f64) -> Self {
        self.options.min_percent = min_percent;
        self
    }

    pub fn cluster_threshold(mut self, cluster_threshold: f64) -> Self {
        self.options.cluster_threshold = cluster_threshold;
        self
    }

    /// Scale the image down with nearest-neighbour sampling so it covers at most `resize_area` pixels before
    /// analyzing it. Zero disables scaling.
    pub fn resize_image_area(self, resize_area: u32) -> Self {
        Self { resize_area, ..self }
    }

    /// Only analyze the given rectangle of the image.
    pub fn region(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            region: Some(Rect { x, y, width, height }),
            ..self
        }
    }

    pub fn clear_region(self) -> Self {
        Self { region: None, ..self }
    }

    pub fn generate(mut self) -> Result<DominantColors, Error> {
        self.options.validate()?;

        if let Some(region) = self.region {
            self.crop_to_region(region)?;
        }

        self.scale_image_down();

        let hist = Histogram::from_pixels(self.image.pixels().copied());
        let colors = analyze(&hist, &self.options);

        Ok(DominantColors {
            colors,
            visible_pixels: hist.visible_pixels(),
        })
    }

    fn crop_to_region(&mut self, region: Rect) -> Result<(), Error> {
        let (image_width, image_height) = self.image.dimensions();
        let fits = |start: u32, len: u32, max: u32| start.checked_add(len).map_or(false, |end| end <= max);

        if !fits(region.x, region.width, image_width) || !fits(region.y, region.height, image_height) {
            return Err(Error::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                image_width,
                image_height,
            });
        }

        self.image = image::imageops::crop_imm(&self.image, region.x, region.y, region.width, region.height).to_image();
        Ok(())
    }

    fn scale_image_down(&mut self) {
        let (width, height) = self.image.dimensions();
        let area = width as u64 * height as u64;

        if self.resize_area == 0 || area <= self.resize_area as u64 {
            return;
        }

        let scale_ratio = (self.resize_area as f64 / area as f64).sqrt();
        let scaled_width = (width as f64 * scale_ratio).ceil() as u32;
        let scaled_height = (height as f64 * scale_ratio).ceil() as u32;

        log::debug!(
            "scaling {}x{} image down to {}x{}",
            width,
            height,
            scaled_width,
            scaled_height
        );

        self.image = image::imageops::resize(
            &self.image,
            scaled_width,
            scaled_height,
            image::imageops::FilterType::Nearest,
        );
    }
}
