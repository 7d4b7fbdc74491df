//! Everything a renderer needs to show one set of parameters.
use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::{
    annotation::AngleArc,
    config::SimulatorConfig,
    draw::{Color, DrawList},
    error::GeometryError,
    params::{Parameters, Snapshot},
    solver::{self, DerivedAngles, Pose},
};

/// Angle indicators start at the segment pointing left from the joint.
const ARC_START: f64 = 180.0;

/// A successfully solved pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub pose: Pose,
    pub angles: DerivedAngles,
}

/// Status line shown next to the sliders.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Valid,
    Error(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Valid => write!(f, "Valid position"),
            Status::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// The solved pose for one generation of the parameters, with its drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    pub parameters: Parameters,
    pub outcome: Result<Solution, GeometryError>,
    pub draw_list: DrawList,
}

impl Frame {
    #[must_use]
    pub fn compute(snapshot: &Snapshot, config: &SimulatorConfig) -> Self {
        let Snapshot {
            generation,
            parameters,
        } = *snapshot;

        let outcome = solver::solve(&parameters, config.anchor).map(|pose| Solution {
            pose,
            angles: pose.angles(),
        });

        if let Err(error) = &outcome {
            tracing::debug!(generation, "no valid pose: {error}");
        }

        let draw_list = draw(&parameters, outcome.as_ref().ok(), config);

        Self {
            generation,
            parameters,
            outcome,
            draw_list,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.outcome.as_ref().ok()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match &self.outcome {
            Ok(_) => Status::Valid,
            Err(error) => Status::Error(error.message().to_string()),
        }
    }
}

/// Builds the drawing of a frame.
///
/// The ground line is always drawn. Everything else only when there is a solution, so a stale
/// pose is never left on screen.
fn draw(
    parameters: &Parameters,
    solution: Option<&Solution>,
    config: &SimulatorConfig,
) -> DrawList {
    let scene = &config.scene;
    let anchor = config.anchor;
    let mut list = DrawList::new();

    let ground = Vector2::new(scene.ground_half_width, 0.0);
    list.line(anchor - ground, anchor + ground, scene.ground_width, Color::Gray);

    let Some(Solution { pose, angles }) = solution else {
        return list;
    };

    list.dashed_line(
        Point2::new(anchor.x, anchor.y - scene.plumb_above),
        Point2::new(anchor.x, anchor.y + scene.plumb_below),
        scene.plumb_dash,
        Color::Gray,
    );

    for (from, to) in [
        (pose.ankle, pose.knee),
        (pose.knee, pose.hip),
        (pose.hip, pose.shoulder),
    ] {
        list.line(from, to, scene.segment_width, Color::Black);
    }

    let label = Vector2::new(scene.label_offset, 0.0);
    for (vertex, angle) in [(pose.knee, angles.shin), (pose.hip, angles.torso)] {
        list.arc(
            AngleArc::new(vertex, ARC_START, ARC_START + angle, scene.arc_radius),
            Color::Gray,
        );
        list.text(vertex - label, format!("{:.0}°", angle.abs()), Color::Gray);
    }

    if parameters.hip_angle > 0.0 {
        list.text(
            pose.hip + scene.hip_label_offset,
            format!("Hip {:.0}°", parameters.hip_angle),
            Color::Blue,
        );
    }

    list.dot(pose.bar, scene.bar_radius, Color::Blue);
    for (_, point) in pose.joints() {
        list.dot(point, scene.joint_radius, Color::Red);
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::params::ParameterStore;

    fn frame_for(parameters: Parameters) -> Frame {
        let mut store = ParameterStore::default();
        let snapshot = store.replace(parameters).unwrap();
        Frame::compute(&snapshot, &SimulatorConfig::default())
    }

    #[test]
    fn valid_frame() {
        let frame = frame_for(Parameters::default());

        assert!(frame.is_valid());
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.status(), Status::Valid);
        assert_eq!(frame.status().to_string(), "Valid position");

        // ground, plumb, 3 segments, 2 arcs, 2 angle labels, hip label, bar, 5 joints
        assert_eq!(frame.draw_list.len(), 16);
    }

    #[test]
    fn ground_line_comes_first() {
        let frame = frame_for(Parameters::default());

        assert_eq!(
            frame.draw_list.shapes()[0],
            Shape::Line {
                from: Point2::new(100.0, 250.0),
                to: Point2::new(300.0, 250.0),
                width: 2.0,
                color: Color::Gray,
                dash: None,
            }
        );
    }

    #[test]
    fn failed_frame_only_keeps_the_ground_line() {
        let frame = frame_for(Parameters {
            torso_length: 40.0,
            bar_position: 0.3,
            ..Parameters::default()
        });

        assert!(!frame.is_valid());
        assert!(frame.solution().is_none());
        assert_eq!(frame.draw_list.len(), 1);
        assert!(matches!(frame.draw_list.shapes()[0], Shape::Line { dash: None, .. }));

        let status = frame.status().to_string();
        assert!(status.starts_with("Error: "), "{status}");
    }

    #[test]
    fn no_hip_label_without_abduction() {
        let frame = frame_for(Parameters {
            hip_angle: 0.0,
            ..Parameters::default()
        });

        let texts: Vec<_> = frame
            .draw_list
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(texts.len(), 2);
        assert!(texts.iter().all(|text| !text.starts_with("Hip")));
    }

    #[test]
    fn angle_labels_show_magnitudes() {
        let frame = frame_for(Parameters::default());
        let angles = frame.solution().unwrap().angles;

        let texts: Vec<_> = frame
            .draw_list
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { text, color, .. } => Some((text.clone(), *color)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                (format!("{:.0}°", angles.shin.abs()), Color::Gray),
                (format!("{:.0}°", angles.torso.abs()), Color::Gray),
                ("Hip 10°".to_string(), Color::Blue),
            ]
        );
    }

    #[test]
    fn arcs_start_left_of_the_joint() {
        let frame = frame_for(Parameters::default());
        let Solution { pose, angles } = *frame.solution().unwrap();

        let arcs: Vec<_> = frame
            .draw_list
            .iter()
            .filter_map(|shape| match shape {
                Shape::Arc { arc, .. } => Some(*arc),
                _ => None,
            })
            .collect();

        assert_eq!(
            arcs,
            vec![
                AngleArc::new(pose.knee, 180.0, 180.0 + angles.shin, 20.0),
                AngleArc::new(pose.hip, 180.0, 180.0 + angles.torso, 20.0),
            ]
        );
    }

    #[test]
    fn every_joint_gets_a_dot() {
        let frame = frame_for(Parameters::default());
        let pose = frame.solution().unwrap().pose;

        let red: Vec<_> = frame
            .draw_list
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle {
                    center,
                    fill: Color::Red,
                    ..
                } => Some(*center),
                _ => None,
            })
            .collect();

        assert_eq!(red, pose.joints().map(|(_, point)| point).to_vec());
    }
}
