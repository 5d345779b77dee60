//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Dim, Dynamic, U1, U2, U4};
use nalgebra::{DefaultAllocator, Matrix, OVector, Owned, RealField, Storage};

use crate::error::{BezierError, Result};

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
#[derive(Clone)]
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Wrapper around [`nalgebra::OMatrix`] interpreting it as a bezier curve.
pub type OBezierCurve<T, R, C> = BezierCurve<T, R, C, Owned<T, R, C>>;

/// Stack allocated planar cubic curve
///
/// This is what every segment of a [`PiecewisePolygon`](crate::PiecewisePolygon) is evaluated as.
pub type CubicCurve = OBezierCurve<f64, U2, U4>;

/// Heap allocated planar curve of arbitrary degree
pub type DynamicCurve = OBezierCurve<f64, U2, Dynamic>;

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S> {
    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.0.ncols().saturating_sub(1)
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    // Column arithemtic required in each step
    DefaultAllocator: Allocator<T, R, U1>,

    // Buffer to store intermediate steps in
    DefaultAllocator: Allocator<T, R, C>,
{
    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm: `degree` rounds of linear interpolation
    /// between neighbouring points, each round leaving one point less, until a single
    /// point is left.
    ///
    /// `t` is not required to be between 0 and 1, values outside extrapolate the curve.
    /// Fails if the curve has less than 2 control points.
    pub fn castlejau_eval(&self, t: T) -> Result<OVector<T, R>> {
        check_control_points(self.0.ncols())?;
        Ok(self.castlejau(t))
    }

    /// [`castlejau_eval`](BezierCurve::castlejau_eval) without the check.
    ///
    /// Callers must ensure there are at least 2 columns.
    pub(crate) fn castlejau(&self, t: T) -> OVector<T, R> {
        let t_inv = T::one() - t.clone();
        let ncols = self.0.ncols();

        // Each round overwrites column i with the interpolation of i and i+1.
        // Column i+1 is only overwritten afterwards, so one buffer is enough.
        let mut points = self.0.clone_owned();
        for level in 1..ncols {
            for i in 0..(ncols - level) {
                let column =
                    &points.column(i) * t_inv.clone() + &points.column(i + 1) * t.clone();
                points.set_column(i, &column);
            }
        }

        points.column(0).clone_owned()
    }
}

/// Rejects control point counts no curve can be built from
pub(crate) fn check_control_points(count: usize) -> Result<()> {
    if count < 2 {
        return Err(BezierError::InvalidInput(format!(
            "a bezier curve needs at least 2 control points, got {}",
            count
        )));
    }
    Ok(())
}
