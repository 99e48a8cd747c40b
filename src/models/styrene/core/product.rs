use super::ReactorFeed;

/// Extents of reaction, in mol/hr.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extents {
    /// Main reaction extent `x1`: `EB -> S + H2`.
    pub main: f64,

    /// Side reaction extent `x2`: `EB + H2 -> T + CH4`.
    pub side: f64,
}

/// Component flows leaving the styrene reactor.
///
/// A view over a [`ReactorFeed`] and the [`Extents`] reached from it.
/// All flows are in mol/hr.
#[derive(Debug, Clone, Copy)]
pub struct ReactorProduct<'a> {
    feed: &'a ReactorFeed,
    extents: Extents,
}

impl<'a> ReactorProduct<'a> {
    #[must_use]
    pub fn new(feed: &'a ReactorFeed, extents: Extents) -> Self {
        Self { feed, extents }
    }

    #[must_use]
    pub fn feed(&self) -> &'a ReactorFeed {
        self.feed
    }

    #[must_use]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Unreacted ethylbenzene.
    ///
    /// Negative values are non-physical and are rejected by the convergence loops.
    #[must_use]
    pub fn ethylbenzene(&self) -> f64 {
        self.feed.ethylbenzene() - self.extents.main - self.extents.side
    }

    #[must_use]
    pub fn styrene(&self) -> f64 {
        self.extents.main
    }

    #[must_use]
    pub fn hydrogen(&self) -> f64 {
        self.extents.main - self.extents.side
    }

    #[must_use]
    pub fn toluene(&self) -> f64 {
        self.feed.toluene() + self.extents.side
    }

    #[must_use]
    pub fn benzene(&self) -> f64 {
        self.feed.benzene()
    }

    #[must_use]
    pub fn methane(&self) -> f64 {
        self.extents.side
    }

    #[must_use]
    pub fn steam(&self) -> f64 {
        self.feed.steam()
    }

    /// Total molar flow leaving the reactor.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ethylbenzene()
            + self.styrene()
            + self.hydrogen()
            + self.toluene()
            + self.benzene()
            + self.methane()
            + self.steam()
    }
}

/// The reactor feed and extents for one trial.
///
/// Each trial owns its state; the convergence loops mutate it in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorState {
    pub(super) feed: ReactorFeed,
    pub(super) extents: Extents,
}

impl ReactorState {
    #[must_use]
    pub fn new(feed: ReactorFeed, extents: Extents) -> Self {
        Self { feed, extents }
    }

    #[must_use]
    pub fn feed(&self) -> &ReactorFeed {
        &self.feed
    }

    #[must_use]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    #[must_use]
    pub fn product(&self) -> ReactorProduct<'_> {
        ReactorProduct::new(&self.feed, self.extents)
    }

    /// Extents as fractions of the total ethylbenzene fed to the reactor.
    #[must_use]
    pub fn conversion(&self) -> Extents {
        let ethylbenzene = self.feed.ethylbenzene();
        Extents {
            main: self.extents.main / ethylbenzene,
            side: self.extents.side / ethylbenzene,
        }
    }
}
