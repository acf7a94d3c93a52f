use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Curve;

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The arc sweeps counter-clockwise about `normal`
/// from `start_angle` to `end_angle` (in radians).
///
/// `P(t) = center + radius * cos(t) * ref_dir + radius * sin(t) * binormal`
/// where `binormal = normal x ref_dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians (must be greater than `start_angle`)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// the reference direction is not perpendicular to the normal, or the sweep
    /// is empty.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        if end_angle - start_angle < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be positive".into()).into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Creates the arc that starts at `start`, passes through `mid` and ends at `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the three points are collinear or coincident.
    pub fn through_points(start: Point3, mid: Point3, end: Point3) -> Result<Self> {
        let a = start - end;
        let b = mid - end;
        let axb = a.cross(&b);
        let axb_sq = axb.norm_squared();
        if axb_sq < TOLERANCE * TOLERANCE {
            return Err(GeometryError::Degenerate("arc points are collinear".into()).into());
        }

        let center =
            end + (b * a.norm_squared() - a * b.norm_squared()).cross(&axb) / (2.0 * axb_sq);
        let radius = (start - center).norm();
        let normal = (mid - start).cross(&(end - mid));
        let ref_dir = start - center;

        let binormal = normal.normalize().cross(&(ref_dir / radius));
        let to_end = end - center;
        let mut end_angle = to_end.dot(&binormal).atan2(to_end.dot(&ref_dir) / radius);
        if end_angle <= 0.0 {
            end_angle += std::f64::consts::TAU;
        }

        Self::new(center, radius, normal, ref_dir, 0.0, end_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the swept angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Evaluates the arc at angle `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let binormal = self.binormal();
        self.center + self.ref_dir * (self.radius * t.cos()) + binormal * (self.radius * t.sin())
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl Curve for Arc {
    fn start_point(&self) -> Point3 {
        self.point_at(self.start_angle)
    }

    fn end_point(&self) -> Point3 {
        self.point_at(self.end_angle)
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Flipping the normal mirrors the angular parameter, so angle `t` on the
    /// original lands on `-t` on the reversed arc.
    fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            normal: -self.normal,
            ref_dir: self.ref_dir,
            start_angle: -self.end_angle,
            end_angle: -self.start_angle,
        }
    }
}
