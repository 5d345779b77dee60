//! Comparing one high degree curve against a chain of cubics through the same control points.
//!
//! A single curve through `n` points needs `n(n-1)/2` interpolations per sample,
//! a chain of `m` cubic segments only a fixed amount per segment.
//! [`compare`] measures both paths, [`OperationCounts`] states the theoretical numbers.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::info;
use num::integer::binomial;

use crate::config::BenchmarkConfig;
use crate::error::{BezierError, Result};
use crate::polygon::{ControlPolygon, PiecewisePolygon};
use crate::sample::{sample_curve, sample_piecewise};
use crate::Point;

/// Operations per point counted for each cubic segment
pub const OPERATIONS_PER_SEGMENT: usize = 6;

/// Points along `y = 2 + sin(x / 2)` at `x = 0, 1, ..., count - 1`
pub fn sine_control_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 2.0 + (x * 0.5).sin())
        })
        .collect()
}

/// Theoretical cost per sample of both representations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperationCounts {
    /// Number of control points
    pub control_points: usize,

    /// Number of cubic segments in the piecewise representation
    pub segments: usize,

    /// `n(n-1)/2` for `n` control points
    pub single_curve: usize,

    /// `6m` for `m` segments
    pub piecewise: usize,
}

impl OperationCounts {
    /// Counts for `control_points` points, which have to form a valid chain (`3m + 1`).
    pub fn for_control_points(control_points: usize) -> Result<OperationCounts> {
        if control_points < 4 || (control_points - 1) % 3 != 0 {
            return Err(BezierError::InvalidInput(format!(
                "{} control points can't be split into cubic segments",
                control_points
            )));
        }
        let segments = (control_points - 1) / 3;
        Ok(OperationCounts {
            control_points,
            segments,
            single_curve: binomial(control_points, 2),
            piecewise: OPERATIONS_PER_SEGMENT * segments,
        })
    }

    /// How many times more operations the single curve needs
    pub fn ratio(&self) -> f64 {
        self.single_curve as f64 / self.piecewise as f64
    }
}

/// Measured timings of both paths
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    /// Theoretical operation counts for the compared control points
    pub counts: OperationCounts,

    /// How often each path sampled its curve
    pub iterations: usize,

    /// Samples per curve or per segment
    pub samples_per_curve: usize,

    /// Total time spent sampling the single curve
    pub single_curve: Duration,

    /// Total time spent sampling the chain
    pub piecewise: Duration,
}

impl ComparisonReport {
    /// Average time of one single curve iteration in milliseconds
    pub fn single_curve_ms(&self) -> f64 {
        self.single_curve.as_secs_f64() / self.iterations as f64 * 1000.0
    }

    /// Average time of one piecewise iteration in milliseconds
    pub fn piecewise_ms(&self) -> f64 {
        self.piecewise.as_secs_f64() / self.iterations as f64 * 1000.0
    }

    /// How many times longer the single curve took
    pub fn speed_ratio(&self) -> f64 {
        self.single_curve.as_secs_f64() / self.piecewise.as_secs_f64()
    }

    /// Time saved by the chain relative to the single curve, in percent
    pub fn percent_faster(&self) -> f64 {
        let single = self.single_curve.as_secs_f64();
        (single - self.piecewise.as_secs_f64()) / single * 100.0
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        let degree = self.counts.control_points - 1;
        let segments = self.counts.segments;

        writeln!(f, "{}", rule)?;
        writeln!(f, "Computational Cost Comparison: Higher Order vs Piecewise Bézier")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(f, "Number of control points: {}", self.counts.control_points)?;
        writeln!(f, "Higher order: Degree {} Bézier (1 curve)", degree)?;
        writeln!(f, "Piecewise: {} cubic Bézier segments", segments)?;
        writeln!(
            f,
            "Iterations: {} with {} points per curve",
            self.iterations, self.samples_per_curve
        )?;
        writeln!(f)?;

        writeln!(f, "{}", rule)?;
        writeln!(f, "RESULTS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Higher Order Bézier (Degree {}):", degree)?;
        writeln!(f, "  Total time: {:.4} seconds", self.single_curve.as_secs_f64())?;
        writeln!(f, "  Average per iteration: {:.4} ms", self.single_curve_ms())?;
        writeln!(f)?;
        writeln!(f, "Piecewise Bézier ({} cubic segments):", segments)?;
        writeln!(f, "  Total time: {:.4} seconds", self.piecewise.as_secs_f64())?;
        writeln!(f, "  Average per iteration: {:.4} ms", self.piecewise_ms())?;
        writeln!(f)?;
        writeln!(f, "Speed ratio: {:.2}x", self.speed_ratio())?;
        writeln!(f, "Piecewise is {:.1}% faster", self.percent_faster())?;
        writeln!(f)?;

        writeln!(f, "{}", rule)?;
        writeln!(f, "THEORETICAL COMPLEXITY")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Higher Order: O(n²) = ½n(n-1) = {} operations per point",
            self.counts.single_curve
        )?;
        writeln!(
            f,
            "Piecewise: O(n) = 6m (where m = segments) = {} operations per point",
            self.counts.piecewise
        )?;
        writeln!(f, "Theoretical ratio: {:.2}x", self.counts.ratio())?;
        writeln!(f, "{}", rule)
    }
}

/// Time sampling `points` as one curve and as a chain of cubic segments.
///
/// The number of points has to be `3m + 1`, so both representations use exactly the same
/// control points.
pub fn compare(points: &[Point], config: &BenchmarkConfig) -> Result<ComparisonReport> {
    if config.iterations == 0 {
        return Err(BezierError::InvalidInput(
            "a comparison needs at least one iteration".to_string(),
        ));
    }
    let counts = OperationCounts::for_control_points(points.len())?;
    let polygon = ControlPolygon::new(points.iter().copied())?;
    let chain = PiecewisePolygon::new(points.iter().copied())?;
    let samples = config.samples_per_curve;

    info!(
        "Comparing degree {} curve with {} cubic segments, {} iterations",
        polygon.degree(),
        chain.segment_count(),
        config.iterations
    );

    let start = Instant::now();
    for _ in 0..config.iterations {
        let curve: Vec<Point> = sample_curve(&polygon, samples)?.collect();
        black_box(curve);
    }
    let single_curve = start.elapsed();

    let start = Instant::now();
    for _ in 0..config.iterations {
        let curve: Vec<Point> = sample_piecewise(&chain, samples)?.collect();
        black_box(curve);
    }
    let piecewise = start.elapsed();

    info!(
        "Single curve took {:?}, piecewise took {:?}",
        single_curve, piecewise
    );

    Ok(ComparisonReport {
        counts,
        iterations: config.iterations,
        samples_per_curve: samples,
        single_curve,
        piecewise,
    })
}
