use crate::cluster::Cluster;

/// One of the dominant colors of an image, together with how much of the image it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedColor {
    red: u8,
    green: u8,
    blue: u8,
    population: u64,
    raw_percent: f64,
}

impl RankedColor {
    pub fn new((red, green, blue): (u8, u8, u8), population: u64, raw_percent: f64) -> RankedColor {
        Self {
            red,
            green,
            blue,
            population,
            raw_percent,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// The color as a lowercase `#rrggbb` string.
    pub fn hex(self) -> String {
        crate::hex::encode(self.rgb())
    }

    /// The number of visible pixels in this color's cluster.
    pub fn population(self) -> u64 {
        self.population
    }

    /// The unrounded share of visible pixels, in percent.
    pub fn raw_percent(self) -> f64 {
        self.raw_percent
    }

    /// The share of visible pixels rounded to one decimal place, halves rounding away from zero, e.g. `"12.5"`.
    pub fn percent(self) -> String {
        format!("{:.1}", (self.raw_percent * 10.0).round() / 10.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RankedColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RankedColor", 3)?;
        state.serialize_field("color", &self.hex())?;
        state.serialize_field("percent", &self.percent())?;
        state.serialize_field("rawPercent", &self.raw_percent)?;
        state.end()
    }
}

/// Turn clusters into the ranked list of dominant colors.
///
/// Clusters are sorted by pixel count, largest first, with equal counts keeping their creation order. Clusters
/// covering less than `min_percent` of `visible_pixels` are dropped and at most `max_colors` are returned. An image
/// without visible pixels has no dominant colors.
pub fn rank(clusters: &[Cluster], visible_pixels: u64, max_colors: usize, min_percent: f64) -> Vec<RankedColor> {
    let total = clusters.iter().map(|cluster| cluster.total_count()).sum::<u64>();
    debug_assert_eq!(total, visible_pixels, "clusters must account for every visible pixel");

    if total == 0 {
        return Vec::new();
    }

    let mut colors = clusters
        .iter()
        .map(|cluster| {
            let raw_percent = 100.0 * cluster.total_count() as f64 / total as f64;
            RankedColor::new(cluster.centroid(), cluster.total_count(), raw_percent)
        })
        .collect::<Vec<_>>();

    // sort_by_key is stable, so ties stay in creation order
    colors.sort_by_key(|color| std::cmp::Reverse(color.population));

    colors
        .into_iter()
        .filter(|color| color.raw_percent >= min_percent)
        .take(max_colors)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cluster::cluster, histogram::Histogram};

    fn clusters(pixels: &[((u8, u8, u8), usize)]) -> (Vec<Cluster>, u64) {
        let samples = pixels
            .iter()
            .flat_map(|&((r, g, b), n)| std::iter::repeat([r, g, b, 255]).take(n))
            .flatten()
            .collect::<Vec<_>>();
        let hist = Histogram::from_samples(&samples).unwrap();

        (cluster(&hist, 32.0), hist.visible_pixels())
    }

    #[test]
    fn sorts_by_population() {
        let (clusters, total) = clusters(&[((0, 0, 0), 1), ((255, 0, 0), 3), ((0, 0, 255), 2)]);
        let ranked = rank(&clusters, total, 10, 0.0);

        let hexes = ranked.iter().map(|c| c.hex()).collect::<Vec<_>>();
        assert_eq!(hexes, vec!["#ff0000", "#0000ff", "#000000"]);
        assert_eq!(ranked.iter().map(|c| c.population()).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_creation_order() {
        let (clusters, total) = clusters(&[((0, 255, 0), 2), ((255, 0, 0), 2), ((0, 0, 255), 2)]);
        let ranked = rank(&clusters, total, 10, 0.0);

        let hexes = ranked.iter().map(|c| c.hex()).collect::<Vec<_>>();
        assert_eq!(hexes, vec!["#00ff00", "#ff0000", "#0000ff"]);
    }

    #[test]
    fn min_percent_is_inclusive_on_the_raw_value() {
        let (clusters, total) = clusters(&[((255, 0, 0), 1), ((0, 255, 0), 1)]);

        assert_eq!(rank(&clusters, total, 10, 50.0).len(), 2);
        assert!(rank(&clusters, total, 10, 50.000001).is_empty());
    }

    #[test]
    fn filters_on_unrounded_percent() {
        // 1 of 201 is 0.4975..%, which displays as 0.5 but is below the threshold
        let (clusters, total) = clusters(&[((255, 255, 255), 200), ((0, 0, 0), 1)]);
        let ranked = rank(&clusters, total, 10, 0.5);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].hex(), "#ffffff");

        let all = rank(&clusters, total, 10, 0.0);
        assert_eq!(all[1].percent(), "0.5");
    }

    #[test]
    fn truncates_after_filtering() {
        let (clusters, total) = clusters(&[
            ((0, 0, 0), 1),
            ((255, 0, 0), 50),
            ((0, 255, 0), 40),
            ((0, 0, 255), 30),
            ((255, 255, 255), 20),
        ]);
        let ranked = rank(&clusters, total, 2, 1.0);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].hex(), "#ff0000");
        assert_eq!(ranked[1].hex(), "#00ff00");
    }

    #[test]
    fn no_visible_pixels_ranks_nothing() {
        assert!(rank(&[], 0, 10, 0.0).is_empty());
    }

    #[test]
    fn display_percent_rounds_half_away_from_zero() {
        assert_eq!(RankedColor::new((0, 0, 0), 1, 0.25).percent(), "0.3");
        assert_eq!(RankedColor::new((0, 0, 0), 1, 12.25).percent(), "12.3");
        assert_eq!(RankedColor::new((0, 0, 0), 1, 100.0 / 3.0).percent(), "33.3");
        assert_eq!(RankedColor::new((0, 0, 0), 2, 200.0 / 3.0).percent(), "66.7");
        assert_eq!(RankedColor::new((0, 0, 0), 1, 50.0).percent(), "50.0");
        assert_eq!(RankedColor::new((0, 0, 0), 1, 100.0).percent(), "100.0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_display_record() {
        let color = RankedColor::new((255, 0, 0), 1, 50.0);
        let json = serde_json::to_value(color).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "color": "#ff0000", "percent": "50.0", "rawPercent": 50.0 })
        );
    }
}
