use crate::histogram::{ColorKey, Histogram};

/// A group of similar colors built up while walking a histogram.
///
/// New colors are compared against the color that founded the cluster, which never moves. Only the average color
/// returned by [`Cluster::centroid`] follows the colors merged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    representative: ColorKey,
    total_count: u64,
    // red, green, blue
    weighted_sum: (u64, u64, u64),
}

impl Cluster {
    fn new(key: ColorKey, count: u64) -> Self {
        Self {
            representative: key,
            total_count: count,
            weighted_sum: (key.0 as u64 * count, key.1 as u64 * count, key.2 as u64 * count),
        }
    }

    fn merge(&mut self, key: ColorKey, count: u64) {
        self.total_count += count;
        self.weighted_sum.0 += key.0 as u64 * count;
        self.weighted_sum.1 += key.1 as u64 * count;
        self.weighted_sum.2 += key.2 as u64 * count;
    }

    /// The color that founded this cluster.
    pub fn representative(&self) -> ColorKey {
        self.representative
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn weighted_sum(&self) -> (u64, u64, u64) {
        self.weighted_sum
    }

    /// The count-weighted average color of everything merged into this cluster, each channel rounded to the nearest
    /// integer with halves rounding up.
    pub fn centroid(&self) -> (u8, u8, u8) {
        (
            rounded_mean(self.weighted_sum.0, self.total_count),
            rounded_mean(self.weighted_sum.1, self.total_count),
            rounded_mean(self.weighted_sum.2, self.total_count),
        )
    }
}

/// Greedily group the histogram's colors into clusters.
///
/// Colors are visited in histogram order. Each one joins the first cluster, in creation order, whose representative
/// lies strictly closer than `threshold` in RGB space, otherwise it founds a new cluster at the end of the list. A
/// `threshold` of zero or less puts every color in a cluster of its own.
pub fn cluster(hist: &Histogram, threshold: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for (key, count) in hist.iter() {
        match clusters
            .iter_mut()
            .find(|cluster| distance(cluster.representative, key) < threshold)
        {
            Some(cluster) => cluster.merge(key, count),
            None => {
                log::trace!("new cluster #{} founded by {:?}", clusters.len(), key);
                clusters.push(Cluster::new(key, count));
            }
        }
    }

    log::debug!(
        "merged {} colors into {} clusters with threshold {}",
        hist.len(),
        clusters.len(),
        threshold
    );

    clusters
}

/// Euclidean distance between two colors in RGB space.
pub fn distance(lhs: ColorKey, rhs: ColorKey) -> f64 {
    let dr = lhs.0 as i32 - rhs.0 as i32;
    let dg = lhs.1 as i32 - rhs.1 as i32;
    let db = lhs.2 as i32 - rhs.2 as i32;

    ((dr * dr + dg * dg + db * db) as f64).sqrt()
}

fn rounded_mean(sum: u64, count: u64) -> u8 {
    // floor(sum / count + 1/2) without going through floats. the mean of u8 values never exceeds 255
    ((2 * sum + count) / (2 * count)) as u8
}
