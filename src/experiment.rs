//! How local is the control a single point has over a curve?
//!
//! Every control point of a bezier curve influences the whole curve, but the higher the
//! degree, the weaker the influence of any single point. This experiment shifts the start
//! point of a flat curve and measures how much of that shift reaches the average curve point.

use log::debug;

use crate::error::{BezierError, Result};
use crate::polygon::ControlPolygon;
use crate::sample::sample_curve;
use crate::Point;

/// y coordinate of the flat curves the experiment starts from
const BASELINE: f64 = 2.0;

/// Result of shifting the start point of a curve of a given degree
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Influence {
    /// The curve's degree
    pub degree: usize,

    /// Share of the start point's shift which reached the average curve point, in percent
    pub percentage: f64,
}

/// Shift `P0` of a flat curve of `degree` by `shift` and measure the average displacement.
///
/// The curve's points lie at `x = 0, 1, ..., degree` on `y = 2`.
/// Both curves are sampled with `samples` points and the mean absolute vertical distance
/// between them is returned as a percentage of `|shift|`.
pub fn local_control_influence(degree: usize, shift: f64, samples: usize) -> Result<f64> {
    if degree == 0 {
        return Err(BezierError::InvalidInput(
            "the experiment needs curves of degree 1 or higher".to_string(),
        ));
    }
    if shift == 0.0 || !shift.is_finite() {
        return Err(BezierError::InvalidInput(format!(
            "the start point must be shifted by a finite, non zero amount, got {}",
            shift
        )));
    }

    let original = ControlPolygon::new((0..=degree).map(|i| Point::new(i as f64, BASELINE)))?;
    let mut shifted = original.clone();
    shifted.move_point(0, original.first() + Point::new(0.0, shift))?;

    let displacement: f64 = sample_curve(&original, samples)?
        .zip(sample_curve(&shifted, samples)?)
        .map(|(before, after)| (after.y - before.y).abs())
        .sum();
    let average = displacement / samples as f64;

    Ok(average / shift.abs() * 100.0)
}

/// Run [`local_control_influence`] for every degree from 1 to `max_degree`
pub fn local_control_experiment(
    max_degree: usize,
    shift: f64,
    samples: usize,
) -> Result<Vec<Influence>> {
    if max_degree == 0 {
        return Err(BezierError::InvalidInput(
            "the experiment needs curves of degree 1 or higher".to_string(),
        ));
    }

    (1..=max_degree)
        .map(|degree| -> Result<Influence> {
            let percentage = local_control_influence(degree, shift, samples)?;
            debug!("Degree {}: {:.2}% of P0 shift", degree, percentage);
            Ok(Influence { degree, percentage })
        })
        .collect()
}
