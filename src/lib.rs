//! # Styrene Models
//!
//! Styrene reactor models built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! The reactor dehydrogenates ethylbenzene to styrene with a toluene side
//! reaction. For each operating condition the unreacted ethylbenzene recycle
//! and the raw feed rate are converged so that styrene production meets a
//! fixed target, and the converged state is scored by its economic potential.
//! A grid search then picks the most profitable condition.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! Convergence and search progress is reported through [`tracing`]. The crate
//! never installs a subscriber; applications choose their own.

pub mod models;
pub mod support;
