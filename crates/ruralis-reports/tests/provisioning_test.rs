//! Payment-webhook provisioning: wire format, idempotency, status filter.

use ruralis_engine::PlanTier;
use ruralis_reports::{
    AccountStore, PaymentCustomer, PaymentNotification, ProvisionOutcome, provision_account,
};

fn paid_order(order_id: &str, email: &str) -> PaymentNotification {
    PaymentNotification {
        order_status: "paid".to_string(),
        customer: PaymentCustomer {
            email: email.to_string(),
            full_name: "João da Silva".to_string(),
        },
        order_id: order_id.to_string(),
        subscription_id: Some("sub-1".to_string()),
    }
}

#[test]
fn wire_payload_uses_provider_casing() {
    let raw = r#"{
        "order_status": "approved",
        "Customer": {"email": "joao@example.com", "full_name": "João da Silva"},
        "order_id": "ord-123",
        "subscription_id": "sub-9"
    }"#;
    let notification: PaymentNotification = serde_json::from_str(raw).unwrap();
    assert_eq!(notification.customer.email, "joao@example.com");
    assert_eq!(notification.order_status, "approved");

    // subscription_id is optional on the wire.
    let raw = r#"{
        "order_status": "paid",
        "Customer": {"email": "a@b.c", "full_name": "A"},
        "order_id": "ord-1"
    }"#;
    let notification: PaymentNotification = serde_json::from_str(raw).unwrap();
    assert_eq!(notification.subscription_id, None);
}

#[test]
fn paid_order_provisions_premium() {
    let store = AccountStore::new();
    let outcome = provision_account(&store, &paid_order("ord-1", "joao@example.com"));
    assert_eq!(outcome, ProvisionOutcome::Provisioned);

    let account = store.account("joao@example.com").unwrap();
    assert_eq!(account.plan, "premium");
    assert_eq!(account.subscription_id.as_deref(), Some("sub-1"));
    assert_eq!(PlanTier::from_account_plan(&account.plan), PlanTier::Pro);
}

#[test]
fn replayed_order_is_skipped() {
    let store = AccountStore::new();
    let notification = paid_order("ord-1", "joao@example.com");
    assert_eq!(provision_account(&store, &notification), ProvisionOutcome::Provisioned);
    assert_eq!(provision_account(&store, &notification), ProvisionOutcome::AlreadyProcessed);
    assert_eq!(store.len(), 1);
}

#[test]
fn distinct_orders_for_the_same_customer_both_apply() {
    let store = AccountStore::new();
    assert_eq!(
        provision_account(&store, &paid_order("ord-1", "joao@example.com")),
        ProvisionOutcome::Provisioned
    );
    let mut renewal = paid_order("ord-2", "joao@example.com");
    renewal.subscription_id = Some("sub-2".to_string());
    assert_eq!(provision_account(&store, &renewal), ProvisionOutcome::Provisioned);
    let account = store.account("joao@example.com").unwrap();
    assert_eq!(account.subscription_id.as_deref(), Some("sub-2"));
}

#[test]
fn non_paid_statuses_are_ignored() {
    let store = AccountStore::new();
    for status in ["refused", "refunded", "chargeback", "waiting_payment"] {
        let mut notification = paid_order("ord-x", "maria@example.com");
        notification.order_status = status.to_string();
        assert_eq!(provision_account(&store, &notification), ProvisionOutcome::Ignored);
    }
    assert!(store.is_empty());
    // An ignored status must not burn the order id.
    assert_eq!(
        provision_account(&store, &paid_order("ord-x", "maria@example.com")),
        ProvisionOutcome::Provisioned
    );
}
