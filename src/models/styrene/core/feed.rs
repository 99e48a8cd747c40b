use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Mole fraction of ethylbenzene in the raw process feed.
pub const EB_FEED_FRACTION: f64 = 0.95;

/// Mole fraction of toluene in the raw process feed.
pub const TOLUENE_FEED_FRACTION: f64 = 0.03;

/// Mole fraction of benzene in the raw process feed.
pub const BENZENE_FEED_FRACTION: f64 = 0.02;

/// Component flows entering the styrene reactor.
///
/// The reactor is fed by the raw process feed (a fixed EB/toluene/benzene
/// mixture), recycled ethylbenzene, and steam proportional to the total
/// ethylbenzene. All flows are in mol/hr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorFeed {
    basis: f64,
    recycled_eb: f64,
    steam_ratio: f64,
}

impl ReactorFeed {
    /// Constructs a validated reactor feed.
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is negative or `NaN`.
    pub fn new(basis: f64, recycled_eb: f64, steam_ratio: f64) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            NonNegative::new(basis)?,
            NonNegative::new(recycled_eb)?,
            NonNegative::new(steam_ratio)?,
        ))
    }

    /// Constructs a reactor feed from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        basis: Constrained<f64, NonNegative>,
        recycled_eb: Constrained<f64, NonNegative>,
        steam_ratio: Constrained<f64, NonNegative>,
    ) -> Self {
        Self {
            basis: basis.into_inner(),
            recycled_eb: recycled_eb.into_inner(),
            steam_ratio: steam_ratio.into_inner(),
        }
    }

    /// Total raw process feed, excluding recycle.
    #[must_use]
    pub fn basis(&self) -> f64 {
        self.basis
    }

    #[must_use]
    pub fn recycled_ethylbenzene(&self) -> f64 {
        self.recycled_eb
    }

    /// Molar ratio of steam to total ethylbenzene entering the reactor.
    #[must_use]
    pub fn steam_ratio(&self) -> f64 {
        self.steam_ratio
    }

    /// Ethylbenzene supplied by the raw process feed.
    #[must_use]
    pub fn process_ethylbenzene(&self) -> f64 {
        EB_FEED_FRACTION * self.basis
    }

    /// Total ethylbenzene entering the reactor (process feed plus recycle).
    #[must_use]
    pub fn ethylbenzene(&self) -> f64 {
        self.process_ethylbenzene() + self.recycled_eb
    }

    #[must_use]
    pub fn toluene(&self) -> f64 {
        TOLUENE_FEED_FRACTION * self.basis
    }

    #[must_use]
    pub fn benzene(&self) -> f64 {
        BENZENE_FEED_FRACTION * self.basis
    }

    #[must_use]
    pub fn steam(&self) -> f64 {
        self.ethylbenzene() * self.steam_ratio
    }

    /// Total molar flow entering the reactor.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ethylbenzene() + self.toluene() + self.benzene() + self.steam()
    }

    pub(super) fn set_recycled_ethylbenzene(
        &mut self,
        recycled_eb: Constrained<f64, NonNegative>,
    ) {
        self.recycled_eb = recycled_eb.into_inner();
    }

    /// Shifts the raw feed basis by `delta`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the feed unchanged, if the new basis would be negative.
    pub(super) fn change_basis(&mut self, delta: f64) -> ConstraintResult<()> {
        self.basis = NonNegative::new(self.basis + delta)?.into_inner();
        Ok(())
    }
}
