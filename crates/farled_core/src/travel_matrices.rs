pub type Distance = f64;
pub type Duration = f64;

/// Pairwise travel distances (meters) and durations (seconds) between a set
/// of locations, stored as flat row-major vectors. To find the entry for a
/// pair of locations, use the formula `index = from * len + to`.
///
/// A pair with no valid route holds `f64::INFINITY` in both matrices.
#[derive(Debug, Clone)]
pub struct TravelMatrices {
    distances: Vec<Distance>,
    durations: Vec<Duration>,
    len: usize,
}

impl TravelMatrices {
    /// Build from nested rows, `distances[from][to]`.
    pub fn from_rows(distances: Vec<Vec<Distance>>, durations: Vec<Vec<Duration>>) -> Self {
        let len = distances.len();

        TravelMatrices {
            distances: distances.into_iter().flatten().collect(),
            durations: durations.into_iter().flatten().collect(),
            len,
        }
    }

    /// Build from flat row-major vectors of `len * len` entries, as returned
    /// by the matrix providers.
    pub fn from_flat(distances: Vec<Distance>, durations: Vec<Duration>) -> Self {
        let len = distances.len().isqrt();

        TravelMatrices {
            distances,
            durations,
            len,
        }
    }

    /// Number of locations (one side of the square matrix).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.len + to
    }

    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distances[self.index(from, to)]
    }

    pub fn duration(&self, from: usize, to: usize) -> Duration {
        self.durations[self.index(from, to)]
    }
}
