use crate::readiness::Readiness;
use pcx_domain::Tenant;
use tracing::info;

/// Where the gate stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum GateState {
    /// Identity is still bootstrapping (or failed to); only the placeholder renders.
    #[default]
    Suspended,
    /// Identity settled but the platform is down for maintenance.
    MaintenanceBlocked,
    /// Everything settled; the tenant's route tree is mounted.
    Active,
}

impl GateState {
    /// Pure transition function. Identity wins over maintenance.
    #[must_use]
    pub const fn decide(readiness: Readiness) -> Self {
        if readiness.identity_loading {
            Self::Suspended
        } else if readiness.maintenance_active {
            Self::MaintenanceBlocked
        } else {
            Self::Active
        }
    }

    /// Whether a route tree (and its effects) may be mounted in this state.
    #[must_use]
    pub const fn mounts_tree(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GateState,
    pub to: GateState,
}

/// Read-only consumer of the readiness pair.
///
/// Starts [`GateState::Suspended`] and follows every snapshot it is shown.
#[derive(Debug, Clone, Default)]
pub struct GatingController {
    state: GateState,
}

impl GatingController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Applies a readiness snapshot; returns the transition if the state moved.
    pub fn observe(&mut self, readiness: Readiness) -> Option<Transition> {
        let next = GateState::decide(readiness);
        if next == self.state {
            return None;
        }

        let transition = Transition { from: self.state, to: next };
        self.state = next;
        info!(
            from = %transition.from,
            to = %transition.to,
            identity_loading = readiness.identity_loading,
            maintenance_active = readiness.maintenance_active,
            "Gate transition"
        );
        Some(transition)
    }
}

/// What the shell renders for a gate state and tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderDecision {
    /// Fallback placeholder: no routes, no chrome.
    Placeholder,
    /// Maintenance surface only, for both tenants.
    Maintenance,
    /// The tenant's route tree with its chrome.
    Tree(Tenant),
}

impl RenderDecision {
    #[must_use]
    pub const fn new(state: GateState, tenant: Tenant) -> Self {
        match state {
            GateState::Suspended => Self::Placeholder,
            GateState::MaintenanceBlocked => Self::Maintenance,
            GateState::Active => Self::Tree(tenant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn readiness(identity_loading: bool, maintenance_active: bool) -> Readiness {
        Readiness { identity_loading, maintenance_active }
    }

    #[test]
    fn decision_is_total_and_exclusive() {
        let cases = [
            (readiness(true, false), GateState::Suspended),
            (readiness(true, true), GateState::Suspended),
            (readiness(false, true), GateState::MaintenanceBlocked),
            (readiness(false, false), GateState::Active),
        ];
        for (input, expected) in cases {
            assert_eq!(GateState::decide(input), expected, "{input:?}");
        }
    }

    #[test]
    fn render_decision_covers_every_combination() {
        for tenant in Tenant::ALL {
            for identity_loading in [true, false] {
                for maintenance_active in [true, false] {
                    let state = GateState::decide(readiness(identity_loading, maintenance_active));
                    let decision = RenderDecision::new(state, tenant);
                    let expected = if identity_loading {
                        RenderDecision::Placeholder
                    } else if maintenance_active {
                        RenderDecision::Maintenance
                    } else {
                        RenderDecision::Tree(tenant)
                    };
                    assert_eq!(decision, expected);
                }
            }
        }
    }

    #[test]
    fn controller_starts_suspended() {
        let controller = GatingController::new();
        assert_eq!(controller.state(), GateState::Suspended);
        assert!(!controller.state().mounts_tree());
    }

    #[test]
    fn observe_reports_only_changes() {
        let mut controller = GatingController::new();
        assert_eq!(controller.observe(readiness(true, true)), None);

        let t = controller.observe(readiness(false, false)).expect("suspended -> active");
        assert_eq!((t.from, t.to), (GateState::Suspended, GateState::Active));
        assert_eq!(controller.observe(readiness(false, false)), None);
    }

    #[test]
    fn maintenance_toggle_moves_straight_between_blocked_and_active() {
        let mut controller = GatingController::new();
        controller.observe(readiness(false, false));

        let down = controller.observe(readiness(false, true)).expect("active -> blocked");
        assert_eq!((down.from, down.to), (GateState::Active, GateState::MaintenanceBlocked));

        let up = controller.observe(readiness(false, false)).expect("blocked -> active");
        assert_eq!((up.from, up.to), (GateState::MaintenanceBlocked, GateState::Active));
    }

    #[test]
    fn states_render_as_kebab_case() {
        assert_eq!(GateState::MaintenanceBlocked.to_string(), "maintenance-blocked");
        let name: &'static str = GateState::Active.into();
        assert_eq!(name, "active");
    }
}
