use predprey_core::{DdeProblem, Interpolate};

/// Read-only view of the trajectory accepted so far.
///
/// Resolves the delayed state for a stage evaluation from, in order of
/// preference, the problem's history, the stored grid points, or the stage
/// being evaluated.
pub(crate) struct Past<'a, S> {
    times: &'a [f64],
    states: &'a [S],
}

impl<'a, S> Past<'a, S>
where
    S: Interpolate + Clone,
{
    /// Creates a view over the accepted points.
    ///
    /// `times` may be the full grid; only the first `states.len()` entries are
    /// considered accepted. `states` must hold at least the initial state.
    pub(crate) fn new(times: &'a [f64], states: &'a [S]) -> Self {
        debug_assert!(!states.is_empty() && states.len() <= times.len());
        Self {
            times: &times[..states.len()],
            states,
        }
    }

    /// Returns the state at time `at` as seen by a stage at `(stage_time, stage_state)`.
    ///
    /// - At or before the first grid point, the problem's history is used.
    /// - Between accepted points, the two neighbours are linearly interpolated.
    /// - Past the last accepted point the lookup falls inside the current step,
    ///   so it interpolates between the last accepted point and the stage
    ///   estimate itself. A lookup at the stage time returns the stage state,
    ///   which is what makes a zero delay identical to an undelayed solve.
    pub(crate) fn lookup<P>(
        &self,
        problem: &P,
        at: f64,
        stage_time: f64,
        stage_state: &S,
    ) -> Result<S, P::Error>
    where
        P: DdeProblem<State = S>,
    {
        if at >= stage_time {
            return Ok(stage_state.clone());
        }

        let start = self.times[0];
        if at <= start {
            return problem.history(at);
        }

        let last = self.times.len() - 1;
        let last_time = self.times[last];
        if at >= last_time {
            let span = stage_time - last_time;
            if span <= 0.0 {
                return Ok(self.states[last].clone());
            }
            return Ok(self.states[last].lerp(stage_state, (at - last_time) / span));
        }

        // First index with a time strictly after `at`; guaranteed in 1..=last.
        let hi = self.times.partition_point(|&t| t <= at);
        let lo = hi - 1;
        let fraction = (at - self.times[lo]) / (self.times[hi] - self.times[lo]);
        Ok(self.states[lo].lerp(&self.states[hi], fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// History of `t * 10`, used to tell history lookups apart from stored ones.
    struct Linear;

    impl DdeProblem for Linear {
        type Input = ();
        type Output = ();
        type State = f64;
        type Error = Infallible;

        fn delay(&self) -> f64 {
            0.0
        }

        fn history(&self, t: f64) -> Result<f64, Infallible> {
            Ok(t * 10.0)
        }

        fn build_input(&self, _t: f64, _current: &f64, _delayed: &f64) -> Result<(), Infallible> {
            Ok(())
        }

        fn derivative(&self, _input: &(), _output: &()) -> Result<f64, Infallible> {
            Ok(0.0)
        }
    }

    const TIMES: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

    #[test]
    fn before_start_uses_history() {
        let states = [100.0, 200.0];
        let past = Past::new(&TIMES, &states);

        assert_relative_eq!(past.lookup(&Linear, -0.5, 1.5, &0.0).unwrap(), -5.0);
        assert_relative_eq!(past.lookup(&Linear, 0.0, 1.5, &0.0).unwrap(), 0.0);
    }

    #[test]
    fn between_accepted_points_interpolates() {
        let states = [100.0, 200.0, 400.0];
        let past = Past::new(&TIMES, &states);

        assert_relative_eq!(past.lookup(&Linear, 0.25, 2.5, &0.0).unwrap(), 125.0);
        assert_relative_eq!(past.lookup(&Linear, 1.0, 2.5, &0.0).unwrap(), 200.0);
        assert_relative_eq!(past.lookup(&Linear, 1.5, 2.5, &0.0).unwrap(), 300.0);
    }

    #[test]
    fn inside_current_step_interpolates_towards_stage() {
        let states = [100.0, 200.0];
        let past = Past::new(&TIMES, &states);

        // Last accepted point is (1.0, 200.0); stage is (2.0, 300.0).
        assert_relative_eq!(past.lookup(&Linear, 1.5, 2.0, &300.0).unwrap(), 250.0);
        assert_relative_eq!(past.lookup(&Linear, 1.0, 1.0, &999.0).unwrap(), 999.0);
    }

    #[test]
    fn at_stage_time_returns_stage_state() {
        let states = [100.0];
        let past = Past::new(&TIMES, &states);

        assert_eq!(past.lookup(&Linear, 0.5, 0.5, &7.0).unwrap(), 7.0);
    }
}
