use crate::error::Error;
use image::Rgba;
use std::collections::HashMap;

/// An exact sRGB triple used as the histogram key.
pub type ColorKey = (u8, u8, u8);

/// Occurrence counts of every exact color in an image, ignoring fully transparent pixels.
///
/// Entries are kept in the order their color was first seen in the image. Clustering is order-sensitive, so this
/// order is part of the algorithm's contract: the same samples always produce the same clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(ColorKey, u64)>,
    index: HashMap<ColorKey, usize>,
    visible_pixels: u64,
}

impl Histogram {
    /// Build a histogram from a flat buffer of RGBA samples, four bytes per pixel.
    pub fn from_samples(samples: &[u8]) -> Result<Histogram, Error> {
        if samples.len() % 4 != 0 {
            return Err(Error::MalformedSamples { len: samples.len() });
        }

        let mut hist = Histogram::default();
        for sample in samples.chunks_exact(4) {
            hist.add(sample[0], sample[1], sample[2], sample[3]);
        }

        log::debug!(
            "built histogram of {} colors from {} visible pixels",
            hist.len(),
            hist.visible_pixels
        );

        Ok(hist)
    }

    /// Build a histogram from already decoded pixels.
    pub fn from_pixels<I>(pixels: I) -> Histogram
    where
        I: IntoIterator<Item = Rgba<u8>>,
    {
        let mut hist = Histogram::default();
        for Rgba([r, g, b, a]) in pixels {
            hist.add(r, g, b, a);
        }

        log::debug!(
            "built histogram of {} colors from {} visible pixels",
            hist.len(),
            hist.visible_pixels
        );

        hist
    }

    fn add(&mut self, r: u8, g: u8, b: u8, a: u8) {
        // only fully transparent pixels are skipped, any other alpha counts as opaque
        if a == 0 {
            return;
        }

        let key = (r, g, b);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }

        self.visible_pixels += 1;
    }

    /// Iterate the `(color, count)` entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn count(&self, key: ColorKey) -> u64 {
        self.index.get(&key).map_or(0, |&i| self.entries[i].1)
    }

    /// The number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of pixels that weren't fully transparent. Always equal to the sum of all counts.
    pub fn visible_pixels(&self) -> u64 {
        self.visible_pixels
    }
}
