//! Discretising curves into points on a uniform parameter grid.
//!
//! The `i`th of `n` samples is taken at `t = i / (n - 1)`, so the first sample is the curve's
//! start point and the last one its end point. Sampling with less than 2 points is rejected,
//! since the grid above isn't defined for `n = 1`.
//!
//! Samples are computed lazily while iterating.
//! An iterator owns its own copy of the control points,
//! so the polygon it was created from can be edited while the samples are consumed.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Dim, Dynamic, U2, U4};
use nalgebra::{DefaultAllocator, Storage};

use crate::error::{BezierError, Result};
use crate::nbezier::{check_control_points, BezierCurve, OBezierCurve};
use crate::polygon::{ControlPolygon, PiecewisePolygon};
use crate::Point;

/// Iterator over evenly spaced points of a single curve.
///
/// Created by [`BezierCurve::samples`], [`sample_curve`] and [`sample_piecewise`].
pub struct Samples<C: Dim>
where
    DefaultAllocator: Allocator<f64, U2, C>,
{
    curve: OBezierCurve<f64, U2, C>,
    next: usize,
    count: usize,
}

impl<C: Dim> Iterator for Samples<C>
where
    DefaultAllocator: Allocator<f64, U2, C>,
{
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.count {
            return None;
        }
        let t = self.next as f64 / (self.count - 1) as f64;
        self.next += 1;
        Some(self.curve.castlejau(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<C: Dim> ExactSizeIterator for Samples<C> where DefaultAllocator: Allocator<f64, U2, C> {}

impl<C: Dim, S: Storage<f64, U2, C>> BezierCurve<f64, U2, C, S>
where
    DefaultAllocator: Allocator<f64, U2, C>,
{
    /// Evaluate the curve at `num_points` evenly spaced values of `t` between 0 and 1.
    ///
    /// Each sample costs one [`castlejau_eval`], i.e. `degree * (degree + 1) / 2`
    /// interpolations.
    ///
    /// [`castlejau_eval`]: BezierCurve::castlejau_eval
    pub fn samples(&self, num_points: usize) -> Result<Samples<C>> {
        check_control_points(self.0.ncols())?;
        check_resolution(num_points)?;
        Ok(Samples {
            curve: BezierCurve(self.0.clone_owned()),
            next: 0,
            count: num_points,
        })
    }
}

/// Sample a control polygon as a single curve whose degree is its number of points minus one.
pub fn sample_curve(polygon: &ControlPolygon, num_points: usize) -> Result<Samples<Dynamic>> {
    check_resolution(num_points)?;
    Ok(Samples {
        curve: polygon.curve(),
        next: 0,
        count: num_points,
    })
}

/// Sample a chain of cubic segments, one after another.
///
/// Every segment contributes `num_points_per_segment` points.
/// A point shared by two segments shows up twice, as the last sample of one segment and as
/// the first sample of the next.
pub fn sample_piecewise(
    chain: &PiecewisePolygon,
    num_points_per_segment: usize,
) -> Result<impl Iterator<Item = Point> + '_> {
    check_resolution(num_points_per_segment)?;
    Ok(chain.segments().flat_map(move |segment| Samples::<U4> {
        curve: segment,
        next: 0,
        count: num_points_per_segment,
    }))
}

fn check_resolution(num_points: usize) -> Result<()> {
    if num_points < 2 {
        return Err(BezierError::InvalidInput(format!(
            "at least 2 samples are required to span t = 0 to t = 1, got {}",
            num_points
        )));
    }
    Ok(())
}
