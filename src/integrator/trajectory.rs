use super::super::particles::{Axes, Body};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyState {
    pub position: Axes,
    pub velocity: Axes,
}

impl<'a> From<&'a Body> for BodyState {
    fn from(body: &'a Body) -> BodyState {
        BodyState { position: body.position, velocity: body.velocity }
    }
}

/// State of every body (in collection order) after the step tagged with `tick`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub states: Vec<BodyState>,
}

/// Axis aligned rectangle enclosing a set of positions.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: Axes,
    pub max: Axes,
}

impl Bounds {
    pub fn around(position: Axes) -> Bounds {
        Bounds { min: position, max: position }
    }

    pub fn include(&mut self, position: Axes) {
        self.min.x = self.min.x.min(position.x);
        self.min.y = self.min.y.min(position.y);
        self.max.x = self.max.x.max(position.x);
        self.max.y = self.max.y.max(position.y);
    }

    pub fn contains(&self, position: Axes) -> bool {
        self.min.x <= position.x && position.x <= self.max.x
            && self.min.y <= position.y && position.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grows every side by `fraction` of the extent along that axis, used as view limits.
    pub fn with_margin(&self, fraction: f64) -> Bounds {
        let delta = Axes::new(self.width() * fraction, self.height() * fraction);
        Bounds { min: self.min - delta, max: self.max + delta }
    }
}

/// Append-only history of the simulation.
///
/// The extent of every position ever recorded is tracked as frames are
/// appended, so it can only grow until the log is cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryLog {
    frames: Vec<Frame>,
    bounds: Option<Bounds>,
}

impl TrajectoryLog {
    pub fn new() -> TrajectoryLog {
        TrajectoryLog::default()
    }

    pub fn push(&mut self, frame: Frame) {
        for state in frame.states.iter() {
            match self.bounds {
                Some(ref mut bounds) => bounds.include(state.position),
                None => self.bounds = Some(Bounds::around(state.position)),
            }
        }
        self.frames.push(frame);
    }

    pub fn record(&mut self, tick: u64, bodies: &[Body]) {
        let states = bodies.iter().map(BodyState::from).collect();
        self.push(Frame { tick: tick, states: states });
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.bounds = None;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frames appended after the first `already_seen` ones.
    pub fn frames_since(&self, already_seen: usize) -> &[Frame] {
        if already_seen >= self.frames.len() {
            &[]
        } else {
            &self.frames[already_seen..]
        }
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tick: u64, positions: &[(f64, f64)]) -> Frame {
        Frame {
            tick: tick,
            states: positions.iter()
                .map(|&position| BodyState { position: Axes::from(position), velocity: Axes::zero() })
                .collect(),
        }
    }

    #[test]
    fn bounds_cover_the_whole_history() {
        let mut log = TrajectoryLog::new();
        assert!(log.bounds().is_none());
        log.push(frame(0, &[(0., 0.), (1., 2.)]));
        log.push(frame(1, &[(-1., 0.5), (0.5, 0.5)]));
        let bounds = log.bounds().unwrap();
        assert_eq!(bounds.min, Axes::new(-1., 0.));
        assert_eq!(bounds.max, Axes::new(1., 2.));
        // Bodies getting closer never shrink the extent
        log.push(frame(2, &[(0., 1.), (0.1, 1.)]));
        assert_eq!(log.bounds().unwrap(), bounds);
    }

    #[test]
    fn margin_is_a_fraction_of_the_extent() {
        let bounds = Bounds { min: Axes::new(0., -2.), max: Axes::new(10., 2.) };
        let view = bounds.with_margin(0.1);
        assert_eq!(view.min, Axes::new(-1., -2.4));
        assert_eq!(view.max, Axes::new(11., 2.4));
        assert!(view.contains(Axes::new(10.5, 0.)));
    }

    #[test]
    fn frames_since_returns_the_unseen_suffix() {
        let mut log = TrajectoryLog::new();
        for tick in 0..3 {
            log.push(frame(tick, &[(tick as f64, 0.)]));
        }
        assert_eq!(log.frames_since(1).len(), 2);
        assert_eq!(log.frames_since(1)[0].tick, 1);
        assert!(log.frames_since(3).is_empty());
        assert!(log.frames_since(10).is_empty());
    }

    #[test]
    fn clear_forgets_frames_and_bounds() {
        let mut log = TrajectoryLog::new();
        log.push(frame(0, &[(3., 3.)]));
        log.clear();
        assert!(log.is_empty());
        assert!(log.bounds().is_none());
    }
}
