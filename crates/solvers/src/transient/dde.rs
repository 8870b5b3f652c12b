//! Fixed-step solver for delay differential equations.
//!
//! Integrates a [`DdeProblem`] over a caller-supplied time grid using the
//! method of steps: the state at every grid point is stored as it is
//! accepted, and each stage of a step looks up the delayed state at
//! `t - delay` by linear interpolation between stored points. Lookups that
//! precede the first grid point fall back to the problem's history.
//!
//! The grid itself sets the step size, so a non-uniform grid gives a
//! non-uniform step. Every grid point appears in the output.
//!
//! # Example
//!
//! ```ignore
//! use predprey_core::linspace;
//! use predprey_solvers::transient::dde;
//!
//! let times = linspace(0.0, 30.0, 20_000);
//! let solution = dde::solve_unobserved(&model, &problem, &times, dde::Method::Rk4)?;
//!
//! for (t, state) in solution.times.iter().zip(&solution.states) {
//!     println!("t={t}: {state:?}");
//! }
//! ```

mod action;
mod error;
mod event;
mod history;
mod method;
mod solution;

pub use action::Action;
pub use error::{Error, GridError};
pub use event::Event;
pub use method::Method;
pub use solution::{Solution, Status};

use predprey_core::{DdeProblem, DerivativeOf, Model, Observer};

use history::Past;
use method::Stepper;

/// Integrates a delay differential equation problem over `times`.
///
/// # Algorithm
///
/// 1. Validate the delay (finite, non-negative) and the grid (non-empty,
///    finite, strictly increasing).
/// 2. Take the initial state from `problem.history(times[0])`.
/// 3. For each grid interval `[t_n, t_{n+1}]`:
///    - Advance the state with `method`, resolving every stage's delayed
///      state against the points accepted so far.
///    - Store the new state and emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with every accepted grid point.
///
/// Non-finite states are not treated as failures; they propagate into the
/// trajectory unchanged.
///
/// # Errors
///
/// Returns an error if the delay or grid is invalid, or if the model or
/// problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    times: &[f64],
    method: Method,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    M: Model,
    P: DdeProblem<Input = M::Input, Output = M::Output>,
    DerivativeOf<P::State, f64>: Clone,
    Obs: Observer<Event<P::State>, Action>,
{
    let delay = problem.delay();
    if !delay.is_finite() || delay < 0.0 {
        return Err(Error::InvalidDelay(delay));
    }
    error::validate_grid(times)?;

    let initial = problem.history(times[0]).map_err(Error::problem)?;

    let mut states = Vec::with_capacity(times.len());
    states.push(initial.clone());

    let event = Event {
        step: 0,
        time: times[0],
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            times: times[..1].to_vec(),
            states,
            steps: 0,
        });
    }

    let stepper = Stepper {
        model,
        problem,
        delay,
    };

    for step in 1..times.len() {
        let t = times[step - 1];
        let dt = times[step] - t;

        let next = {
            let past = Past::new(times, &states);
            stepper.advance(method, &past, t, &states[step - 1], dt)?
        };
        states.push(next.clone());

        let event = Event {
            step,
            time: times[step],
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                times: times[..=step].to_vec(),
                states,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        times: times.to_vec(),
        states,
        steps: times.len() - 1,
    })
}

/// Integrates a delay differential equation problem without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the delay or grid is invalid, or if the model or
/// problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    times: &[f64],
    method: Method,
) -> Result<Solution<P::State>, Error>
where
    M: Model,
    P: DdeProblem<Input = M::Input, Output = M::Output>,
    DerivativeOf<P::State, f64>: Clone,
{
    solve(model, problem, times, method, ())
}
