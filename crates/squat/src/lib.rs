//! Geometry of the bottom position of a squat.
//!
//! A simplified body (ankle, knee, hip, shoulder) is built up from a fixed ankle using six
//! slider parameters, see [`Parameters`]. The [`solver`] turns those into a [`Pose`], which is
//! wrapped together with a toolkit independent [`DrawList`] in a [`Frame`]. A [`Session`] keeps
//! the current parameters and produces a new frame on every change.
//!
//! ```
//! use squat::prelude::*;
//!
//! let mut session = Session::default();
//! let frame = session.set(Parameter::HipAngle, 30.0).unwrap();
//!
//! let pose = frame.solution().unwrap().pose;
//! assert_eq!(pose.bar.x, session.config().anchor.x);
//! ```

pub mod annotation;
pub mod config;
pub mod draw;
pub mod error;
pub mod frame;
pub mod params;
pub mod session;
pub mod solver;

pub use config::{SceneConfig, SimulatorConfig};
pub use draw::{Color, DrawList, Shape};
pub use error::{Error, GeometryError, GeometryErrorKind, ParameterError, Result};
pub use frame::{Frame, Solution, Status};
pub use params::{Parameter, ParameterRange, ParameterStore, Parameters, Snapshot};
pub use session::Session;
pub use solver::{DerivedAngles, Joint, Pose, SCALE, solve};

pub mod prelude {
    pub use super::{
        Frame, GeometryError, Parameter, Parameters, Pose, Session, SimulatorConfig, Status,
        solve,
    };
}
