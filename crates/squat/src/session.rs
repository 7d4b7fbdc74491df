use crate::{
    config::SimulatorConfig,
    error::ParameterError,
    frame::Frame,
    params::{Parameter, ParameterStore, Parameters},
};

type Observer = Box<dyn FnMut(&Frame)>;

/// An interactive simulation.
///
/// Holds the current parameters and recomputes the [`Frame`] on every change, after which all
/// registered observers are notified with the new frame.
pub struct Session {
    config: SimulatorConfig,
    store: ParameterStore,
    frame: Frame,
    observers: Vec<Observer>,
}

impl Session {
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let store = ParameterStore::new(config.defaults);
        let frame = Frame::compute(&store.snapshot(), &config);

        Self {
            config,
            store,
            frame,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.store.snapshot().parameters
    }

    /// The frame for the current parameters.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Register a callback that receives every new frame.
    pub fn on_frame(&mut self, observer: impl FnMut(&Frame) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Move a single slider.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<&Frame, ParameterError> {
        self.store.set(parameter, value)?;
        Ok(self.recompute())
    }

    /// Move all sliders at once.
    pub fn replace(&mut self, parameters: Parameters) -> Result<&Frame, ParameterError> {
        self.store.replace(parameters)?;
        Ok(self.recompute())
    }

    /// Move all sliders back to their configured defaults.
    pub fn reset(&mut self) -> &Frame {
        self.store.reset();
        self.recompute()
    }

    fn recompute(&mut self) -> &Frame {
        self.frame = Frame::compute(&self.store.snapshot(), &self.config);

        for observer in &mut self.observers {
            observer(&self.frame);
        }

        &self.frame
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::frame::Status;

    #[test]
    fn starts_with_the_default_pose() {
        let session = Session::default();

        assert_eq!(session.frame().generation, 0);
        assert!(session.frame().is_valid());
        assert_eq!(session.parameters(), Parameters::default());
    }

    #[test]
    fn observers_see_every_change() {
        let mut session = Session::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        session.on_frame(move |frame| log.borrow_mut().push((frame.generation, frame.status())));

        session.set(Parameter::TorsoLength, 60.0).unwrap();
        session.set(Parameter::BarPosition, 0.3).unwrap();
        session.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (1, Status::Valid));
        assert_eq!(seen[1].0, 2);
        assert!(matches!(seen[1].1, Status::Error(_)));
        assert_eq!(seen[2], (3, Status::Valid));
    }

    #[test]
    fn rejected_values_do_not_notify() {
        let mut session = Session::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        session.on_frame(move |_| *counter.borrow_mut() += 1);

        assert!(session.set(Parameter::HipAngle, f64::NAN).is_err());
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(session.frame().generation, 0);
    }

    #[test]
    fn failed_frame_replaces_the_last_valid_one() {
        let mut session = Session::default();

        let frame = session.set(Parameter::BarPosition, 0.0).unwrap();
        assert!(!frame.is_valid());
        assert_eq!(frame.draw_list.len(), 1);

        let frame = session.set(Parameter::BarPosition, 0.85).unwrap();
        assert!(frame.is_valid());
    }

    #[test]
    fn replace_is_a_single_generation() {
        let mut session = Session::default();
        let parameters = Parameters {
            femur_length: 45.0,
            tibia_length: 45.0,
            ..Parameters::default()
        };

        let frame = session.replace(parameters).unwrap();

        assert_eq!(frame.generation, 1);
        assert_eq!(frame.parameters, parameters);
    }
}
