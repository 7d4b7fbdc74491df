//! Forward kinematics of the bottom position of a squat.
//!
//! The body is modelled as a chain of four joints in the sagittal plane, built up from a fixed
//! ankle:
//!
//! ```text
//!            shoulder
//!           /
//!   bar ---o  (on the vertical through the ankle)
//!         /
//!  knee o-------o hip
//!        \
//!         o ankle
//! ```
//!
//! The femur is assumed horizontal at the bottom of the squat, and hip abduction is modelled by
//! projecting the femur (and the sideways lean of the shank) onto the viewing plane with
//! `cos(hip_angle)`. The shoulder then follows from requiring the bar to sit exactly above the
//! ankle.
//!
//! Coordinates are screen coordinates: x grows to the right, y grows down.
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use strum::{Display, EnumIter};

use crate::{error::GeometryError, params::Parameters};

/// Drawing units per centimeter.
pub const SCALE: f64 = 2.0;

/// Names one of the points of a [`Pose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Joint {
    Ankle,
    Knee,
    Hip,
    Shoulder,
    Bar,
}

/// Positions of the joints and the bar, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub ankle: Point2<f64>,
    pub knee: Point2<f64>,
    pub hip: Point2<f64>,
    pub shoulder: Point2<f64>,
    pub bar: Point2<f64>,
}

impl Pose {
    #[must_use]
    pub fn joint(&self, joint: Joint) -> Point2<f64> {
        match joint {
            Joint::Ankle => self.ankle,
            Joint::Knee => self.knee,
            Joint::Hip => self.hip,
            Joint::Shoulder => self.shoulder,
            Joint::Bar => self.bar,
        }
    }

    /// All points of the pose, from the ankle up to the bar.
    #[must_use]
    pub fn joints(&self) -> [(Joint, Point2<f64>); 5] {
        [
            (Joint::Ankle, self.ankle),
            (Joint::Knee, self.knee),
            (Joint::Hip, self.hip),
            (Joint::Shoulder, self.shoulder),
            (Joint::Bar, self.bar),
        ]
    }

    #[must_use]
    pub fn angles(&self) -> DerivedAngles {
        DerivedAngles {
            shin: angle_from_vertical(self.knee - self.ankle),
            torso: angle_from_vertical(self.shoulder - self.hip),
        }
    }
}

/// Segment angles, in degrees, measured from the downward vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedAngles {
    pub shin: f64,
    pub torso: f64,
}

// atan2 with x as the first argument, so 0 is straight down (y grows down)
fn angle_from_vertical(segment: Vector2<f64>) -> f64 {
    segment.x.atan2(segment.y).to_degrees()
}

/// Length of the femur as seen in the viewing plane, in drawing units.
#[must_use]
pub fn effective_femur(parameters: &Parameters) -> f64 {
    parameters.femur_length * SCALE * parameters.hip_angle.to_radians().cos()
}

/// Compute the pose for `parameters`, with the ankle at `anchor`.
///
/// Fails when no shoulder position keeps the bar above the ankle with the given torso length.
pub fn solve(parameters: &Parameters, anchor: Point2<f64>) -> Result<Pose, GeometryError> {
    let tibia = parameters.tibia_length * SCALE;
    let torso = parameters.torso_length * SCALE;
    let hip_angle = parameters.hip_angle.to_radians();
    let femur = effective_femur(parameters);

    let ankle_angle = parameters.ankle_angle.to_radians();
    let knee = anchor
        + tibia * Vector2::new(ankle_angle.sin() * hip_angle.cos(), -ankle_angle.cos());

    // femur is horizontal at the bottom position
    let hip = knee + Vector2::new(femur, 0.0);

    // the point `bar_position` of the way up the torso has to be above the ankle
    if parameters.bar_position == 0.0 {
        return Err(GeometryError::zero_bar_position());
    }
    let shoulder_dx = (anchor.x - hip.x) / parameters.bar_position;

    let torso_sq = torso.powi(2) - shoulder_dx.powi(2);
    if torso_sq < 0.0 {
        tracing::debug!(torso, shoulder_dx, "torso can't reach the bar line");
        return Err(GeometryError::torso_too_short(shoulder_dx.abs(), torso));
    }
    let shoulder_dy = torso_sq.sqrt();

    let pose = Pose {
        ankle: anchor,
        knee,
        hip,
        shoulder: Point2::new(hip.x + shoulder_dx, hip.y - shoulder_dy),
        bar: Point2::new(anchor.x, hip.y - shoulder_dy * parameters.bar_position),
    };

    // NaN inputs slip through the comparisons above
    if pose.joints().iter().any(|(_, p)| !p.coords.iter().all(|c| c.is_finite())) {
        return Err(GeometryError::not_finite());
    }

    tracing::debug!(?pose, "solved pose");
    Ok(pose)
}
