use miette::Diagnostic;
use thiserror::Error;

use crate::params::{Parameter, ParameterRange};

/// Type alias for [`std::result::Result`] containing a squat [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a simulation.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] odal::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parameter(#[from] ParameterError),
}

/// A parameter value that can't be stored.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{parameter} must be a finite number, got {value}")]
    #[diagnostic(code(squat::parameter::not_finite))]
    NotFinite { parameter: Parameter, value: f64 },

    #[error("{parameter} default of {value} is outside of the slider range {range}")]
    #[diagnostic(
        code(squat::parameter::out_of_range),
        help("pick a default inside the range, the slider can't show it otherwise")
    )]
    OutOfRange {
        parameter: Parameter,
        value: f64,
        range: ParameterRange,
    },
}

/// The reason a pose could not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryErrorKind {
    /// The torso can't reach from the hip to a shoulder that keeps the bar over the ankle.
    InfeasibleTorso,
}

/// A parameter combination without a real pose.
///
/// This is not fatal, the caller is expected to show [`GeometryError::message`] as status.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("{message}")]
#[diagnostic(
    code(squat::geometry::infeasible_torso),
    help("try a longer torso, a higher bar position or a smaller horizontal hip offset")
)]
pub struct GeometryError {
    kind: GeometryErrorKind,
    message: String,
}

impl GeometryError {
    pub(crate) fn torso_too_short(reach: f64, torso: f64) -> Self {
        Self {
            kind: GeometryErrorKind::InfeasibleTorso,
            message: format!(
                "torso ({torso:.1}) is too short to reach {reach:.1} horizontally and keep the bar over the ankle"
            ),
        }
    }

    pub(crate) fn zero_bar_position() -> Self {
        Self {
            kind: GeometryErrorKind::InfeasibleTorso,
            message: "bar position can't be at the hip (fraction of 0)".to_string(),
        }
    }

    pub(crate) fn not_finite() -> Self {
        Self {
            kind: GeometryErrorKind::InfeasibleTorso,
            message: "torso position is not a real number for these parameters".to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GeometryErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
