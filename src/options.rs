use crate::error::Error;

pub const DEFAULT_MAX_COLORS: usize = 10;
pub const DEFAULT_MIN_PERCENT: f64 = 0.5;
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 32.0;

/// Tuning for a dominant color analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// The most colors to return.
    pub max_colors: usize,
    /// Colors covering less than this percentage of the visible pixels are dropped.
    pub min_percent: f64,
    /// Colors closer than this Euclidean RGB distance to a cluster's founding color join that cluster.
    pub cluster_threshold: f64,
}

impl Options {
    /// Check the options, rejecting values the analysis can't make sense of instead of clamping them.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_colors == 0 {
            return Err(Error::InvalidOption("max_colors must be at least 1".to_string()));
        }

        if !(0.0..=100.0).contains(&self.min_percent) {
            return Err(Error::InvalidOption(format!(
                "min_percent must be between 0 and 100, got {}",
                self.min_percent
            )));
        }

        if self.cluster_threshold.is_nan() || self.cluster_threshold < 0.0 {
            return Err(Error::InvalidOption(format!(
                "cluster_threshold must not be negative, got {}",
                self.cluster_threshold
            )));
        }

        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            min_percent: DEFAULT_MIN_PERCENT,
            cluster_threshold: DEFAULT_CLUSTER_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = Options::default();

        assert_eq!(options.max_colors, 10);
        assert_eq!(options.min_percent, 0.5);
        assert_eq!(options.cluster_threshold, 32.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn accepts_boundaries() {
        let options = Options {
            max_colors: 1,
            min_percent: 100.0,
            cluster_threshold: 0.0,
        };
        assert!(options.validate().is_ok());

        let options = Options {
            min_percent: 0.0,
            ..Options::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_invalid_values() {
        let invalid = [
            Options {
                max_colors: 0,
                ..Options::default()
            },
            Options {
                min_percent: -0.1,
                ..Options::default()
            },
            Options {
                min_percent: 100.5,
                ..Options::default()
            },
            Options {
                min_percent: f64::NAN,
                ..Options::default()
            },
            Options {
                cluster_threshold: -1.0,
                ..Options::default()
            },
            Options {
                cluster_threshold: f64::NAN,
                ..Options::default()
            },
        ];

        for options in invalid {
            assert!(
                matches!(options.validate(), Err(Error::InvalidOption(_))),
                "{:?} should be rejected",
                options
            );
        }
    }
}
