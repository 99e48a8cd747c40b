//! Recycle stream convergence.
//!
//! Unreacted ethylbenzene leaving the reactor is separated and fed back.
//! Successive substitution sets the recycle to the current unreacted flow
//! and re-solves the equilibrium until the two agree.

use tracing::trace;

use crate::support::constraint::NonNegative;

use super::{ConvergenceConfig, ConvergenceError, Equilibrium, ReactorState};

/// Iterates the recycle stream to self-consistency.
///
/// Converged when `|recycle / unreacted EB - 1| <= recycle_tol`, which is
/// checked before the first substitution, so an already converged state is
/// left untouched.
///
/// Returns the number of substitutions performed.
///
/// # Errors
///
/// Returns a [`ConvergenceError`] if the unreacted flow goes negative, the
/// ratio cannot be evaluated, the equilibrium model fails, or the loop
/// reaches `max_recycle_iters`.
pub fn converge_recycle(
    state: &mut ReactorState,
    equilibrium: &Equilibrium,
    config: &ConvergenceConfig,
) -> Result<usize, ConvergenceError> {
    let mut iters = 0;

    loop {
        let unreacted = state.product().ethylbenzene();
        let unreacted = NonNegative::new(unreacted)
            .map_err(|_| ConvergenceError::NegativeUnreacted { value: unreacted })?;

        let recycle = state.feed.recycled_ethylbenzene();
        let ratio_error = (recycle / unreacted.get() - 1.0).abs();
        if !ratio_error.is_finite() {
            return Err(ConvergenceError::RecycleNotFinite {
                recycle,
                unreacted: unreacted.get(),
            });
        }

        if ratio_error <= config.recycle_tol() {
            trace!(iters, recycle, "recycle converged");
            return Ok(iters);
        }

        if iters >= config.max_recycle_iters() {
            return Err(ConvergenceError::RecycleMaxIters { ratio_error, iters });
        }

        state.feed.set_recycled_ethylbenzene(unreacted);
        state.extents = equilibrium.extents(&state.feed)?;
        iters += 1;
    }
}
