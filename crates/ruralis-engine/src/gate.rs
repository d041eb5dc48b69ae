//! Entitlement gating of the interactive view.
//!
//! Calculator results gate on authentication presence alone; plan tier is
//! enforced elsewhere (report quotas). A locked result carries no computed
//! values at all: the numbers are withheld from the view model, not styled
//! as hidden, so nothing recoverable reaches a client surface.

use crate::projector::ViewModel;
use serde::{Deserialize, Serialize};

/// Paid-plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Corp,
}

impl PlanTier {
    /// Maximum number of saved reports; `None` means unlimited.
    pub const fn report_limit(self) -> Option<usize> {
        match self {
            Self::Free => Some(5),
            Self::Pro | Self::Corp => None,
        }
    }

    /// Map the plan string stored on an account document. The payment
    /// provider provisions "premium"; anything unrecognised is free.
    pub fn from_account_plan(plan: &str) -> Self {
        match plan {
            "premium" | "pro" => Self::Pro,
            "corp" => Self::Corp,
            _ => Self::Free,
        }
    }
}

/// Session entitlement as seen by a calculator page. Read-only here; the
/// auth collaborator owns it.
///
/// The default is unauthenticated/free: when entitlement cannot be
/// resolved, the gate fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitlementState {
    pub is_authenticated: bool,
    pub plan: PlanTier,
}

impl EntitlementState {
    pub fn authenticated(plan: PlanTier) -> Self {
        Self { is_authenticated: true, plan }
    }
}

/// The gated interactive view. When locked, `visible` is `None` and the
/// caller renders a call-to-action in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatedView {
    pub visible: Option<ViewModel>,
    pub locked: bool,
}

/// Apply the entitlement policy to an interactive view model.
pub fn gate(view: ViewModel, entitlement: &EntitlementState) -> GatedView {
    if entitlement.is_authenticated {
        GatedView { visible: Some(view), locked: false }
    } else {
        GatedView { visible: None, locked: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ViewModel {
        ViewModel {
            slug: "x".to_string(),
            title: "X".to_string(),
            entries: vec![],
        }
    }

    #[test]
    fn unauthenticated_is_locked_regardless_of_plan() {
        for plan in [PlanTier::Free, PlanTier::Pro, PlanTier::Corp] {
            let gated = gate(
                sample_view(),
                &EntitlementState { is_authenticated: false, plan },
            );
            assert!(gated.locked);
            assert!(gated.visible.is_none());
        }
    }

    #[test]
    fn authenticated_free_plan_sees_results() {
        let gated = gate(sample_view(), &EntitlementState::authenticated(PlanTier::Free));
        assert!(!gated.locked);
        assert!(gated.visible.is_some());
    }

    #[test]
    fn plan_tier_limits_and_mapping() {
        assert_eq!(PlanTier::Free.report_limit(), Some(5));
        assert_eq!(PlanTier::Pro.report_limit(), None);
        assert_eq!(PlanTier::from_account_plan("premium"), PlanTier::Pro);
        assert_eq!(PlanTier::from_account_plan("anything"), PlanTier::Free);
    }
}
