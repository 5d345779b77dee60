//! Tunable constants for control point placement and the comparison benchmark.
//!
//! None of these values affect correctness, they only decide where new control points
//! show up and how long [`compare`](crate::report::compare) runs.

use crate::Point;

/// Where [`increase_degree`] and [`add_segment`] place the points they create.
///
/// [`increase_degree`]: crate::ControlPolygon::increase_degree
/// [`add_segment`]: crate::PiecewisePolygon::add_segment
#[derive(Clone, Debug, PartialEq)]
pub struct TopologyConfig {
    /// Added to the y coordinate of a point inserted by degree elevation,
    /// so it doesn't sit exactly on the line between its neighbours.
    pub elevation_offset: f64,

    /// Offsets of a new segment's three points relative to the chain's current last point.
    pub segment_offsets: [Point; 3],
}

impl Default for TopologyConfig {
    fn default() -> Self {
        TopologyConfig {
            elevation_offset: 0.5,
            segment_offsets: [
                Point::new(1.0, 0.5),
                Point::new(2.0, 0.5),
                Point::new(3.0, 0.0),
            ],
        }
    }
}

/// Parameters of a single curve vs. piecewise comparison run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// How often each path samples the whole curve
    pub iterations: usize,

    /// Samples per curve (for the piecewise path: per segment)
    pub samples_per_curve: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            iterations: 1000,
            samples_per_curve: 100,
        }
    }
}
