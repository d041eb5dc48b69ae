//! Payment-webhook account provisioning.
//!
//! The payment provider posts an order notification; on a paid or approved
//! order the matching account document is upserted with the premium plan.
//! Processing is idempotent per `order_id`: the provider retries webhooks,
//! so a replay must not re-provision.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Statuses that grant the premium plan.
const PAID_STATUSES: &[&str] = &["paid", "approved"];

/// Customer block of the provider payload. Field casing follows the
/// provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCustomer {
    pub email: String,
    pub full_name: String,
}

/// The webhook payload as posted by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentNotification {
    pub order_status: String,
    #[serde(rename = "Customer")]
    pub customer: PaymentCustomer,
    pub order_id: String,
    #[serde(default)]
    pub subscription_id: Option<String>,
}

/// Account document, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub email: String,
    pub full_name: String,
    /// Plan string as stored ("premium" after provisioning).
    pub plan: String,
    pub subscription_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// What provisioning did with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// Account created or upgraded.
    Provisioned,
    /// This order id was already handled; nothing changed.
    AlreadyProcessed,
    /// Status was not paid/approved; nothing changed.
    Ignored,
}

/// Accounts plus the set of processed order ids.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, AccountRecord>,
    processed_orders: DashMap<String, ()>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, email: &str) -> Option<AccountRecord> {
        self.accounts.get(email).map(|a| a.value().clone())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Apply one webhook notification to the account store.
#[instrument(skip(store, notification), fields(order_id = %notification.order_id))]
pub fn provision_account(
    store: &AccountStore,
    notification: &PaymentNotification,
) -> ProvisionOutcome {
    if !PAID_STATUSES.contains(&notification.order_status.as_str()) {
        info!(status = %notification.order_status, "ignoring non-paid order status");
        return ProvisionOutcome::Ignored;
    }
    if store
        .processed_orders
        .insert(notification.order_id.clone(), ())
        .is_some()
    {
        info!("order already processed, skipping");
        return ProvisionOutcome::AlreadyProcessed;
    }

    let email = notification.customer.email.clone();
    let record = AccountRecord {
        email: email.clone(),
        full_name: notification.customer.full_name.clone(),
        plan: "premium".to_string(),
        subscription_id: notification.subscription_id.clone(),
        updated_at: Utc::now(),
    };
    store.accounts.insert(email.clone(), record);
    info!(email, "account provisioned with premium plan");
    ProvisionOutcome::Provisioned
}
