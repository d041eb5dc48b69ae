//! Entitlement/session collaborator.
//!
//! Resolved asynchronously once per session, then treated as a read-only
//! value by every calculator page. A collaborator failure resolves to
//! unauthenticated: the gate fails closed rather than leaking paid content.

use crate::error::SessionError;
use async_trait::async_trait;
use ruralis_engine::{EntitlementState, PlanTier};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The signed-in user as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
}

#[async_trait]
pub trait Session: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserProfile>, SessionError>;

    async fn current_plan(&self) -> Result<PlanTier, SessionError>;
}

/// Resolve the session into the entitlement value injected into pages.
/// Any collaborator error is treated as "not signed in".
pub async fn resolve_entitlement(
    session: &dyn Session,
) -> (Option<UserProfile>, EntitlementState) {
    let user = match session.current_user().await {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "entitlement resolution failed, treating as unauthenticated");
            return (None, EntitlementState::default());
        }
    };
    let plan = match session.current_plan().await {
        Ok(plan) => plan,
        Err(e) => {
            warn!(error = %e, "plan resolution failed, assuming free tier");
            PlanTier::Free
        }
    };
    let entitlement = EntitlementState { is_authenticated: user.is_some(), plan };
    (user, entitlement)
}

/// Fixed session used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub user: Option<UserProfile>,
    pub plan: PlanTier,
}

impl StaticSession {
    pub fn signed_in(id: &str, display_name: &str, plan: PlanTier) -> Self {
        Self {
            user: Some(UserProfile {
                id: id.to_string(),
                display_name: display_name.to_string(),
            }),
            plan,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Session for StaticSession {
    async fn current_user(&self) -> Result<Option<UserProfile>, SessionError> {
        Ok(self.user.clone())
    }

    async fn current_plan(&self) -> Result<PlanTier, SessionError> {
        Ok(self.plan)
    }
}
