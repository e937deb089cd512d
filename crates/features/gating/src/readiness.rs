use crate::error::{GatingError, GatingErrorExt};
use pcx_signals::{Receiver, SignalHub};

/// Progress of the identity provider bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum IdentityStatus {
    #[default]
    Bootstrapping,
    Ready,
    /// Bootstrap failed; the gate stays suspended.
    Failed(String),
}

impl IdentityStatus {
    /// A failed bootstrap counts as loading: the placeholder stays up.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !matches!(self, Self::Ready)
    }
}

/// Platform-wide maintenance flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaintenanceStatus {
    pub active: bool,
}

/// The pair the gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Readiness {
    pub identity_loading: bool,
    pub maintenance_active: bool,
}

impl Default for Readiness {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Readiness {
    /// Before any collaborator reported.
    pub const INITIAL: Self = Self { identity_loading: true, maintenance_active: false };

    #[must_use]
    pub const fn new(identity: &IdentityStatus, maintenance: MaintenanceStatus) -> Self {
        Self { identity_loading: identity.is_loading(), maintenance_active: maintenance.active }
    }
}

/// Read side of both gating signals.
///
/// Holds one receiver per signal, so it can observe but never write.
#[derive(Debug, Clone)]
pub struct ReadinessWatch {
    identity: Receiver<IdentityStatus>,
    maintenance: Receiver<MaintenanceStatus>,
    identity_open: bool,
    maintenance_open: bool,
}

impl ReadinessWatch {
    /// Subscribes to both signals.
    ///
    /// # Errors
    /// Returns [`GatingError::Signal`] when either publisher has not been registered.
    pub fn new(hub: &SignalHub) -> Result<Self, GatingError> {
        let identity = hub.subscribe::<IdentityStatus>().context("Subscribing to identity status")?;
        let maintenance =
            hub.subscribe::<MaintenanceStatus>().context("Subscribing to maintenance status")?;

        Ok(Self { identity, maintenance, identity_open: true, maintenance_open: true })
    }

    /// Current pair, without marking anything as seen.
    #[must_use]
    pub fn snapshot(&self) -> Readiness {
        Readiness::new(&self.identity.borrow(), *self.maintenance.borrow())
    }

    /// Current identity status. Carries the failure reason the pair drops.
    #[must_use]
    pub fn identity(&self) -> IdentityStatus {
        self.identity.borrow().clone()
    }

    /// Waits until either signal changes and returns the new pair.
    ///
    /// Keeps following the remaining signal if one publisher goes away;
    /// returns `None` once both are gone.
    pub async fn changed(&mut self) -> Option<Readiness> {
        loop {
            let (identity_gone, maintenance_gone) = match (self.identity_open, self.maintenance_open) {
                (false, false) => return None,
                (true, true) => tokio::select! {
                    res = self.identity.changed() => (res.is_err(), false),
                    res = self.maintenance.changed() => (false, res.is_err()),
                },
                (true, false) => (self.identity.changed().await.is_err(), false),
                (false, true) => (false, self.maintenance.changed().await.is_err()),
            };

            self.identity_open &= !identity_gone;
            self.maintenance_open &= !maintenance_gone;

            if !identity_gone && !maintenance_gone {
                return Some(self.mark_seen());
            }
        }
    }

    fn mark_seen(&mut self) -> Readiness {
        let identity = self.identity.borrow_and_update().clone();
        let maintenance = *self.maintenance.borrow_and_update();
        Readiness::new(&identity, maintenance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_bootstrap_counts_as_loading() {
        assert!(IdentityStatus::Bootstrapping.is_loading());
        assert!(IdentityStatus::Failed("network down".into()).is_loading());
        assert!(!IdentityStatus::Ready.is_loading());
    }

    #[test]
    fn initial_readiness_is_suspended() {
        assert_eq!(Readiness::default(), Readiness { identity_loading: true, maintenance_active: false });
        assert_eq!(
            Readiness::new(&IdentityStatus::default(), MaintenanceStatus::default()),
            Readiness::INITIAL
        );
    }

    #[test]
    fn watch_requires_both_publishers() {
        let hub = SignalHub::new();
        let _identity = hub.register("identity", IdentityStatus::Bootstrapping).expect("register");
        let err = ReadinessWatch::new(&hub).expect_err("maintenance missing");
        assert!(matches!(err, GatingError::Signal { .. }));
    }
}
