//! The calculator page composition root.
//!
//! One page instance owns its field state exclusively; every edit triggers
//! an immediate synchronous recompute of the formula and the three
//! projected views. Entitlement is injected as a value at construction,
//! never read from ambient context. Saving is the only asynchronous path
//! and a failed save leaves the page untouched.

use crate::error::PageError;
use crate::record::{ReportData, ReportPatch};
use crate::session::UserProfile;
use crate::store::ReportStore;
use ruralis_engine::{
    CalculatorEngine, EntitlementState, Evaluation, GatedView, PlanTier, PrintRow, gate,
    share_url,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct CalculatorPage {
    engine: Arc<CalculatorEngine>,
    slug: String,
    fields: ruralis_engine::FieldSet,
    user: Option<UserProfile>,
    plan: PlanTier,
    evaluation: Evaluation,
    report_id: Option<Uuid>,
}

impl CalculatorPage {
    /// Mount a page for one calculator. Fields start empty, so the first
    /// evaluation runs on fallbacks.
    #[instrument(skip(engine, user))]
    pub fn new(
        engine: Arc<CalculatorEngine>,
        slug: &str,
        user: Option<UserProfile>,
        plan: PlanTier,
    ) -> Result<Self, PageError> {
        let fields = ruralis_engine::FieldSet::new();
        let evaluation = engine.evaluate(slug, &fields)?;
        info!(slug, authenticated = user.is_some(), "calculator page mounted");
        Ok(Self {
            engine,
            slug: slug.to_string(),
            fields,
            user,
            plan,
            evaluation,
            report_id: None,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn entitlement(&self) -> EntitlementState {
        EntitlementState {
            is_authenticated: self.user.is_some(),
            plan: self.plan,
        }
    }

    pub fn report_id(&self) -> Option<Uuid> {
        self.report_id
    }

    /// Edit one field and recompute synchronously. Infallible: the slug
    /// was validated at mount and field resolution is total.
    pub fn set_field(&mut self, name: &str, raw: &str) -> &Evaluation {
        self.fields.set(name, raw);
        if let Ok(evaluation) = self.engine.evaluate(&self.slug, &self.fields) {
            self.evaluation = evaluation;
        }
        &self.evaluation
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// The interactive view, gated by entitlement. Locked pages get no
    /// values, only the lock flag.
    pub fn view(&self) -> GatedView {
        gate(self.evaluation.projection.interactive.clone(), &self.entitlement())
    }

    /// Print rows, gated like the interactive view: a locked page hands
    /// the host print surface nothing to render.
    pub fn print_rows(&self) -> Option<&[PrintRow]> {
        self.entitlement()
            .is_authenticated
            .then(|| self.evaluation.projection.print_rows.as_slice())
    }

    pub fn share_link(&self) -> Option<String> {
        self.entitlement()
            .is_authenticated
            .then(|| share_url(&self.evaluation.projection.share_text))
    }

    /// Persist the current input/output pair. First save creates the
    /// report (subject to the plan's quota); later saves update it in
    /// place. Page state is untouched on failure, so retry is just
    /// re-clicking save.
    #[instrument(skip(self, store))]
    pub async fn save(
        &mut self,
        store: &dyn ReportStore,
        title: &str,
        client_name: Option<String>,
    ) -> Result<Uuid, PageError> {
        let owner = self.user.as_ref().ok_or(PageError::NotAuthenticated)?;
        let data = ReportData::from_evaluation(&self.evaluation);

        if let Some(id) = self.report_id {
            store
                .update(
                    id,
                    &owner.id,
                    ReportPatch {
                        title: Some(title.to_string()),
                        client_name,
                        data: Some(data),
                    },
                )
                .await?;
            info!(%id, "report updated");
            return Ok(id);
        }

        if let Some(limit) = self.plan.report_limit() {
            let existing = store.list_recent(&owner.id, limit).await?;
            if existing.len() >= limit {
                return Err(PageError::ReportLimitReached { limit });
            }
        }

        let id = store
            .save(&owner.id, &self.slug, title, data, client_name)
            .await?;
        self.report_id = Some(id);
        info!(%id, "report created");
        Ok(id)
    }
}
