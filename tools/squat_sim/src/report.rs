//! Textual output of a [`Frame`].
use std::fmt::Write;

use nalgebra::Point2;
use serde::Serialize;
use squat::{DerivedAngles, DrawList, Frame, Parameters, Pose};

/// Everything a renderer consumes for one frame, in a serializable form.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generation: u64,
    pub parameters: Parameters,
    pub pose: Option<Pose>,
    pub angles: Option<DerivedAngles>,
    pub status: String,
    pub draw_list: &'a DrawList,
}

impl<'a> From<&'a Frame> for Report<'a> {
    fn from(frame: &'a Frame) -> Self {
        Self {
            generation: frame.generation,
            parameters: frame.parameters,
            pose: frame.solution().map(|solution| solution.pose),
            angles: frame.solution().map(|solution| solution.angles),
            status: frame.status().to_string(),
            draw_list: &frame.draw_list,
        }
    }
}

/// Human readable overview of a frame: sliders, joints, angles and status.
#[must_use]
pub fn format_frame(frame: &Frame) -> String {
    let mut out = String::new();

    for (parameter, value) in frame.parameters.iter() {
        let _ = writeln!(
            out,
            "{:<26} {:>7}",
            parameter.label(),
            parameter.format_value(value)
        );
    }
    out.push('\n');

    if let Some(solution) = frame.solution() {
        for (joint, point) in solution.pose.joints() {
            let _ = writeln!(out, "{:<26} {}", joint.to_string(), format_point(point));
        }
        let _ = writeln!(out, "{:<26} {:>7.1}°", "shin angle", solution.angles.shin);
        let _ = writeln!(out, "{:<26} {:>7.1}°", "torso angle", solution.angles.torso);
        out.push('\n');
    }

    let _ = writeln!(out, "{}", frame.status());
    out
}

fn format_point(point: Point2<f64>) -> String {
    format!("({:>6.1}, {:>6.1})", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use squat::{Parameter, Session};

    use super::*;

    #[test]
    fn text_lists_sliders_joints_and_status() {
        let session = Session::default();
        let text = format_frame(session.frame());

        assert!(text.contains("Femur Length (cm)"));
        assert!(text.contains("0.85"));
        assert!(text.contains("shoulder"));
        assert!(text.contains("torso angle"));
        assert!(text.trim_end().ends_with("Valid position"));
    }

    #[test]
    fn text_for_failed_frame_has_no_joints() {
        let mut session = Session::default();
        let frame = session.set(Parameter::BarPosition, 0.0).unwrap();
        let text = format_frame(frame);

        assert!(!text.contains("shoulder"));
        assert!(text.trim_end().lines().last().unwrap().starts_with("Error: "));
    }

    #[test]
    fn json_report() {
        let session = Session::default();
        let value = serde_json::to_value(Report::from(session.frame())).unwrap();

        assert_eq!(value["status"], "Valid position");
        assert_eq!(value["pose"]["bar"][0], 200.0);
        assert_eq!(value["draw_list"][0]["shape"], "line");
        assert_eq!(value["draw_list"][0]["color"], "gray");
    }
}
