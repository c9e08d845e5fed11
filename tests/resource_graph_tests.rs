//! Integration tests for navigating the resource graph and invoking
//! operations through it.
//!
//! A recording fake transport stands in for the service, so every test can
//! assert exactly what was (or was not) sent.

mod common;

use std::collections::HashSet;
use std::sync::{Arc, Barrier};

use chrono::{TimeZone, Utc};
use common::{partner_with, FakeTransport};
use partner_center::clients::{TransportResponse, Verb};
use partner_center::models::{
    AzureUtilizationGranularity, Conversion, Customer, Device, DeviceBatchCreationRequest, Order,
    Subscription, SubscriptionStatus, SupportContact, Upgrade,
};
use partner_center::operations::{CustomerOperations, SubscriptionOperations};
use partner_center::registry::OperationRegistry;
use partner_center::{
    InvalidArgumentError, PartnerClient, PartnerConfig, PartnerError, TransportError,
    TransportErrorKind,
};

const BASE: &str = "https://api.partnercenter.microsoft.com/v1";

// ============================================================================
// Scenario A: resolving and fetching a subscription
// ============================================================================

#[tokio::test]
async fn test_get_subscription_resolves_path_and_deserializes() {
    let transport = FakeTransport::replying(
        200,
        r#"{"id":"sub-9","friendlyName":"Office","quantity":3,"status":"active"}"#,
    );
    let partner = partner_with(Arc::clone(&transport));

    let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"])
        .unwrap()
        .get()
        .await
        .unwrap();

    assert_eq!(subscription.id.as_deref(), Some("sub-9"));
    assert_eq!(subscription.quantity, Some(3));
    assert_eq!(subscription.status, Some(SubscriptionStatus::Active));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].verb, Verb::Get);
    assert_eq!(
        requests[0].url,
        format!("{BASE}/customers/cust-1/subscriptions/sub-9")
    );
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_leading_slash_templates_resolve_to_the_same_url() {
    let transport = FakeTransport::replying(200, r#"{"id":"sub-9"}"#);
    let registry = OperationRegistry::new()
        .with_operation("GetSubscription", Verb::Get, "/customers/{0}/subscriptions/{1}")
        .unwrap();
    let partner = PartnerClient::builder(PartnerConfig::default())
        .transport(transport.clone())
        .registry(registry)
        .build()
        .unwrap();

    SubscriptionOperations::new(&partner, &["cust-1", "sub-9"])
        .unwrap()
        .get()
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].url,
        format!("{BASE}/customers/cust-1/subscriptions/sub-9")
    );
}

#[tokio::test]
async fn test_navigation_builds_the_same_context_as_direct_construction() {
    let transport = FakeTransport::replying(200, r#"{"id":"sub-9"}"#);
    let partner = partner_with(Arc::clone(&transport));

    let navigated = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-9")
        .unwrap();
    let direct = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();

    assert_eq!(navigated.context(), direct.context());
    assert_eq!(transport.calls(), 0);
}

// ============================================================================
// Scenario B: remote failures
// ============================================================================

#[tokio::test]
async fn test_not_found_surfaces_as_remote_error() {
    let transport = FakeTransport::replying(
        404,
        r#"{"code":"NotFound","message":"no such subscription"}"#,
    );
    let partner = partner_with(transport);

    let error = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"])
        .unwrap()
        .get()
        .await
        .unwrap_err();

    let PartnerError::Remote(remote) = error else {
        panic!("expected a remote error, got {error:?}");
    };
    assert_eq!(remote.status, 404);
    assert_eq!(remote.code.as_deref(), Some("NotFound"));
    assert_eq!(remote.message, "no such subscription");
    assert_eq!(remote.operation, "GetSubscription");
    assert_eq!(remote.path, "customers/cust-1/subscriptions/sub-9");
    assert!(remote.is_not_found());
}

#[tokio::test]
async fn test_transport_failure_is_distinct_and_retryable() {
    let transport = FakeTransport::new(|_| {
        Err(TransportError::new(
            TransportErrorKind::Connect,
            "connection refused",
        ))
    });
    let partner = partner_with(transport);

    let error = partner.customers().get().await.unwrap_err();
    assert!(error.is_retryable());
    assert!(error.as_remote().is_none());
    assert!(matches!(error, PartnerError::Transport(_)));
}

// ============================================================================
// Scenario C: invalid identifiers never reach the transport
// ============================================================================

#[tokio::test]
async fn test_blank_customer_id_fails_before_any_call() {
    let transport = FakeTransport::replying(200, "{}");
    let partner = partner_with(Arc::clone(&transport));

    let direct = CustomerOperations::new(&partner, &[""]);
    assert_eq!(
        direct.unwrap_err(),
        InvalidArgumentError::BlankIdentifier {
            position: 0,
            name: Some("customerId")
        }
    );

    let navigated = partner.customers().by_id("   ");
    assert!(matches!(
        navigated,
        Err(InvalidArgumentError::BlankIdentifier { position: 0, .. })
    ));

    let subscription = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("");
    assert!(matches!(
        subscription,
        Err(InvalidArgumentError::BlankIdentifier {
            position: 1,
            name: Some("subscriptionId")
        })
    ));

    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_wrong_identifier_count_is_rejected() {
    let partner = partner_with(FakeTransport::replying(200, "{}"));

    let result = SubscriptionOperations::new(&partner, &["cust-1"]);
    assert!(matches!(
        result,
        Err(InvalidArgumentError::ContextShape {
            resource: "Subscription",
            expected: 2,
            actual: 1
        })
    ));
}

// ============================================================================
// Scenario D: mutating calls require a payload
// ============================================================================

#[tokio::test]
async fn test_patch_without_payload_never_calls_transport() {
    let transport = FakeTransport::replying(200, "{}");
    let partner = partner_with(Arc::clone(&transport));
    let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();

    let result: Result<Subscription, _> = subscription
        .invoke::<Subscription, _>("UpdateSubscription", &[], None)
        .await;

    assert!(matches!(
        result,
        Err(PartnerError::InvalidArgument(
            InvalidArgumentError::MissingPayload { .. }
        ))
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_patch_sends_payload_and_returns_update() {
    let transport = FakeTransport::echo();
    let partner = partner_with(Arc::clone(&transport));
    let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();

    let update = Subscription {
        id: Some("sub-9".to_string()),
        quantity: Some(10),
        ..Subscription::default()
    };
    let updated = subscription.patch(&update).await.unwrap();

    assert_eq!(updated, update);
    let request = &transport.requests()[0];
    assert_eq!(request.verb, Verb::Patch);
    assert_eq!(request.headers["Content-Type"], "application/json");
}

#[tokio::test]
async fn test_activation_posts_without_body() {
    let transport =
        FakeTransport::replying(200, r#"{"subscriptionId":"sub-9","status":"success"}"#);
    let partner = partner_with(Arc::clone(&transport));
    let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();

    let result = subscription.activate().await.unwrap();
    assert_eq!(result.status.as_deref(), Some("success"));

    let request = &transport.requests()[0];
    assert_eq!(request.verb, Verb::Post);
    assert!(request.url.ends_with("/customers/cust-1/subscriptions/sub-9/activate"));
    assert!(request.body.is_none());
}

// ============================================================================
// Lazy children
// ============================================================================

#[test]
fn test_same_accessor_returns_identical_handle() {
    let partner = partner_with(FakeTransport::replying(200, "{}"));
    let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();

    assert!(Arc::ptr_eq(&subscription.add_ons(), &subscription.add_ons()));
    assert!(Arc::ptr_eq(&subscription.upgrades(), &subscription.upgrades()));
    assert!(Arc::ptr_eq(
        &subscription.usage_summary(),
        &subscription.usage_summary()
    ));
    assert!(Arc::ptr_eq(
        &subscription.activation_links(),
        &subscription.activation_links()
    ));
    assert!(Arc::ptr_eq(
        &subscription.utilization(),
        &subscription.utilization()
    ));
    assert!(Arc::ptr_eq(
        &subscription.registration(),
        &subscription.registration()
    ));
    assert!(Arc::ptr_eq(
        &subscription.registration_status(),
        &subscription.registration_status()
    ));
    assert!(Arc::ptr_eq(
        &subscription.conversions(),
        &subscription.conversions()
    ));
    assert_eq!(subscription.add_ons().context(), subscription.context());
    assert_eq!(subscription.conversions().context(), subscription.context());
}

#[test]
fn test_by_id_is_not_cached() {
    let partner = partner_with(FakeTransport::replying(200, "{}"));
    let customers = partner.customers();

    let first = customers.by_id("cust-1").unwrap();
    let second = customers.by_id("cust-1").unwrap();
    assert_eq!(first.context(), second.context());
    assert!(!Arc::ptr_eq(&first.subscriptions(), &second.subscriptions()));
}

#[test]
fn test_concurrent_first_access_observes_one_instance() {
    const THREADS: usize = 32;

    let partner = partner_with(FakeTransport::replying(200, "{}"));
    let customer = Arc::new(CustomerOperations::new(&partner, &["cust-1"]).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let customer = Arc::clone(&customer);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                Arc::as_ptr(&customer.orders()) as usize
            })
        })
        .collect();

    let addresses: HashSet<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addresses.len(), 1);
    assert_eq!(
        addresses.into_iter().next(),
        Some(Arc::as_ptr(&customer.orders()) as usize)
    );
}

#[test]
fn test_children_are_usable_from_plain_threads() {
    let transport = FakeTransport::replying(200, r#"{"items":[{"id":"order-7"}]}"#);
    let partner = partner_with(Arc::clone(&transport));
    let customer = Arc::new(CustomerOperations::new(&partner, &["cust-1"]).unwrap());

    let worker = {
        let customer = Arc::clone(&customer);
        std::thread::spawn(move || tokio_test::block_on(customer.orders().get()))
    };

    let orders = worker.join().unwrap().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id.as_deref(), Some("order-7"));
    assert!(transport.requests()[0]
        .url
        .ends_with("/customers/cust-1/orders"));
}

// ============================================================================
// Substitution and round-trips
// ============================================================================

#[tokio::test]
async fn test_distinct_identifiers_resolve_to_distinct_urls() {
    let transport = FakeTransport::replying(200, r#"{"id":"x"}"#);
    let partner = partner_with(Arc::clone(&transport));

    let pairs = [
        ("a/b", "c"),
        ("a", "b/c"),
        ("a?b", "c"),
        ("a#b", "c"),
        ("a%2Fb", "c"),
        ("a b", "c"),
    ];
    for (customer_id, subscription_id) in pairs {
        SubscriptionOperations::new(&partner, &[customer_id, subscription_id])
            .unwrap()
            .get()
            .await
            .unwrap();
    }

    let urls: HashSet<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls.len(), pairs.len());
    for url in &urls {
        let path = url.strip_prefix(BASE).unwrap();
        assert_eq!(path.split('/').count(), 5, "segment leaked in {url}");
        assert!(!path.contains('?') && !path.contains('#'), "reserved char leaked in {url}");
    }
}

#[tokio::test]
async fn test_payload_round_trips_through_echo() {
    let transport = FakeTransport::echo();
    let partner = partner_with(transport);
    let customers = partner.customers();

    let customer: Customer = serde_json::from_value(serde_json::json!({
        "companyProfile": {"domain": "contoso.onmicrosoft.com", "companyName": "Contoso"},
        "billingProfile": {"email": "billing@contoso.com", "culture": "en-US"},
        "customField": [1, 2, 3]
    }))
    .unwrap();

    let created = customers.create(&customer).await.unwrap();
    assert_eq!(created, customer);
}

#[tokio::test]
async fn test_line_item_and_device_paths() {
    let transport = FakeTransport::replying(200, r#"{"items":[]}"#);
    let partner = partner_with(Arc::clone(&transport));
    let customer = CustomerOperations::new(&partner, &["cust-1"]).unwrap();

    let links = customer
        .orders()
        .by_id("order-7")
        .unwrap()
        .line_items()
        .by_id(0)
        .unwrap()
        .activation_links()
        .await
        .unwrap();
    assert!(links.is_empty());

    let device = customer
        .device_batches()
        .by_id("batch-1")
        .unwrap()
        .devices()
        .by_id("dev-3")
        .unwrap();
    device
        .patch(&Device {
            policies: vec!["OOBE_DEFAULT".to_string()],
            ..Device::default()
        })
        .await
        .unwrap();
    device.delete().await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        format!("{BASE}/customers/cust-1/orders/order-7/lineitems/0/activationlinks")
    );
    assert_eq!(requests[1].verb, Verb::Patch);
    assert_eq!(
        requests[1].url,
        format!("{BASE}/customers/cust-1/deviceBatches/batch-1/devices/dev-3")
    );
    assert_eq!(requests[2].verb, Verb::Delete);
}

#[tokio::test]
async fn test_empty_success_body_yields_default_collection() {
    let transport = FakeTransport::new(|_| Ok(TransportResponse::new(204, "")));
    let partner = partner_with(transport);

    let orders = CustomerOperations::new(&partner, &["cust-1"])
        .unwrap()
        .orders()
        .get()
        .await
        .unwrap();
    assert!(orders.is_empty());
    assert!(!orders.has_more());
}

#[tokio::test]
async fn test_empty_body_for_single_entity_is_an_error() {
    let transport = FakeTransport::new(|_| Ok(TransportResponse::new(200, "")));
    let partner = partner_with(transport);

    let result: Result<Order, _> = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .orders()
        .by_id("order-7")
        .unwrap()
        .get()
        .await;
    assert!(matches!(result, Err(PartnerError::EmptyResponse { .. })));
}

#[tokio::test]
async fn test_device_uploads_require_a_response_body() {
    let transport = FakeTransport::new(|_| Ok(TransportResponse::new(200, "")));
    let partner = partner_with(Arc::clone(&transport));
    let batches = CustomerOperations::new(&partner, &["cust-1"])
        .unwrap()
        .device_batches();

    let batch = batches
        .create(&DeviceBatchCreationRequest {
            batch_id: "batch-1".to_string(),
            devices: vec![Device::default()],
        })
        .await;
    assert!(matches!(
        batch,
        Err(PartnerError::EmptyResponse { ref operation }) if operation == "CreateDeviceBatch"
    ));

    let devices = batches
        .by_id("batch-1")
        .unwrap()
        .devices()
        .create(&[Device::default()])
        .await;
    assert!(matches!(
        devices,
        Err(PartnerError::EmptyResponse { ref operation }) if operation == "CreateDevices"
    ));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_unknown_operation_is_reported_not_truncated() {
    let partner = partner_with(FakeTransport::replying(200, "{}"));
    let customer = CustomerOperations::new(&partner, &["cust-1"]).unwrap();

    let unknown: Result<serde_json::Value, _> =
        customer.invoke::<(), _>("GetNothing", &[], None).await;
    assert!(matches!(unknown, Err(PartnerError::Registry(_))));

    let extra: Result<serde_json::Value, _> =
        customer.invoke::<(), _>("GetCustomer", &["surplus"], None).await;
    assert!(matches!(
        extra,
        Err(PartnerError::Registry(
            partner_center::RegistryError::TemplateArityMismatch {
                expected: 1,
                actual: 2,
                ..
            }
        ))
    ));
}

#[tokio::test]
async fn test_each_request_gets_its_own_request_id() {
    let transport = FakeTransport::replying(200, r#"{"items":[]}"#);
    let partner = partner_with(Arc::clone(&transport));

    partner.customers().get().await.unwrap();
    partner.customers().get().await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].headers["MS-CorrelationId"],
        requests[1].headers["MS-CorrelationId"]
    );
    assert_ne!(
        requests[0].headers["MS-RequestId"],
        requests[1].headers["MS-RequestId"]
    );
}

#[tokio::test]
async fn test_null_success_body_yields_default_collection() {
    let partner = partner_with(FakeTransport::replying(200, "null"));
    let customer = CustomerOperations::new(&partner, &["cust-1"]).unwrap();

    let orders = customer.orders().get().await.unwrap();
    assert!(orders.is_empty());

    let single: Result<Order, _> = customer.orders().by_id("order-7").unwrap().get().await;
    assert!(matches!(single, Err(PartnerError::EmptyResponse { .. })));
}

// ============================================================================
// Registry coverage
// ============================================================================

#[tokio::test]
async fn test_every_registered_operation_is_reachable_with_its_verb_and_url() {
    let transport = FakeTransport::replying(200, "{}");
    let partner = partner_with(Arc::clone(&transport));
    let customers = partner.customers();
    let customer = customers.by_id("cust-1").unwrap();
    let subscription = customer.subscriptions().by_id("sub-9").unwrap();
    let order = customer.orders().by_id("order-7").unwrap();
    let batch = customer.device_batches().by_id("batch-1").unwrap();
    let device = batch.devices().by_id("dev-3").unwrap();
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 1, 31, 12, 30, 0).unwrap();

    customers.get().await.unwrap();
    customers.get_with_size(5).await.unwrap();
    customers.create(&Customer::default()).await.unwrap();
    customer.get().await.unwrap();
    customer.delete().await.unwrap();

    customer.subscriptions().get().await.unwrap();
    subscription.get().await.unwrap();
    subscription.patch(&Subscription::default()).await.unwrap();
    subscription.activate().await.unwrap();
    subscription.azure_entitlements().await.unwrap();
    subscription.add_ons().get().await.unwrap();
    subscription.upgrades().get().await.unwrap();
    subscription.upgrades().create(&Upgrade::default()).await.unwrap();
    subscription.usage_records().get().await.unwrap();
    subscription.usage_summary().get().await.unwrap();
    subscription.provisioning_status().get().await.unwrap();
    subscription.support_contact().get().await.unwrap();
    subscription
        .support_contact()
        .update(&SupportContact::default())
        .await
        .unwrap();
    subscription.activation_links().get().await.unwrap();
    subscription
        .utilization()
        .azure(start, end, AzureUtilizationGranularity::Hourly, true)
        .await
        .unwrap();
    subscription.registration().register().await.unwrap();
    subscription.registration_status().get().await.unwrap();
    subscription.conversions().get().await.unwrap();
    subscription
        .conversions()
        .create(&Conversion::default())
        .await
        .unwrap();

    customer.orders().get().await.unwrap();
    customer.orders().create(&Order::default()).await.unwrap();
    order.get().await.unwrap();
    order.patch(&Order::default()).await.unwrap();
    order
        .line_items()
        .by_id(2)
        .unwrap()
        .activation_links()
        .await
        .unwrap();

    customer.device_batches().get().await.unwrap();
    customer
        .device_batches()
        .create(&DeviceBatchCreationRequest::default())
        .await
        .unwrap();
    batch.devices().get().await.unwrap();
    batch.devices().create(&[Device::default()]).await.unwrap();
    device.patch(&Device::default()).await.unwrap();
    device.delete().await.unwrap();

    let sub = "customers/cust-1/subscriptions/sub-9";
    let expected: Vec<(&str, Verb, String)> = vec![
        ("GetCustomers", Verb::Get, "customers".to_string()),
        ("GetCustomersWithSize", Verb::Get, "customers?size=5".to_string()),
        ("CreateCustomer", Verb::Post, "customers".to_string()),
        ("GetCustomer", Verb::Get, "customers/cust-1".to_string()),
        ("DeleteCustomer", Verb::Delete, "customers/cust-1".to_string()),
        ("GetCustomerSubscriptions", Verb::Get, "customers/cust-1/subscriptions".to_string()),
        ("GetSubscription", Verb::Get, sub.to_string()),
        ("UpdateSubscription", Verb::Patch, sub.to_string()),
        ("Activate3ppSubscription", Verb::Post, format!("{sub}/activate")),
        ("GetAzureEntitlements", Verb::Get, format!("{sub}/azureEntitlements")),
        ("GetSubscriptionAddOns", Verb::Get, format!("{sub}/addons")),
        ("GetSubscriptionUpgrades", Verb::Get, format!("{sub}/upgrades")),
        ("CreateSubscriptionUpgrade", Verb::Post, format!("{sub}/upgrades")),
        ("GetSubscriptionUsageRecords", Verb::Get, format!("{sub}/usagerecords/resources")),
        ("GetSubscriptionUsageSummary", Verb::Get, format!("{sub}/usagesummary")),
        ("GetSubscriptionProvisioningStatus", Verb::Get, format!("{sub}/provisioningstatus")),
        ("GetSubscriptionSupportContact", Verb::Get, format!("{sub}/supportcontact")),
        ("UpdateSubscriptionSupportContact", Verb::Put, format!("{sub}/supportcontact")),
        ("GetSubscriptionActivationLinks", Verb::Get, format!("{sub}/activationlinks")),
        (
            "GetSubscriptionAzureUtilization",
            Verb::Get,
            format!(
                "{sub}/utilizations/azure?start_time=2026-01-01T00%3A00%3A00Z\
                 &end_time=2026-01-31T12%3A30%3A00Z&granularity=hourly&show_details=true"
            ),
        ),
        ("RegisterSubscription", Verb::Post, format!("{sub}/registrations")),
        ("GetSubscriptionRegistrationStatus", Verb::Get, format!("{sub}/registrationstatus")),
        ("GetSubscriptionConversions", Verb::Get, format!("{sub}/conversions")),
        ("CreateSubscriptionConversion", Verb::Post, format!("{sub}/conversions")),
        ("GetOrders", Verb::Get, "customers/cust-1/orders".to_string()),
        ("CreateOrder", Verb::Post, "customers/cust-1/orders".to_string()),
        ("GetOrder", Verb::Get, "customers/cust-1/orders/order-7".to_string()),
        ("UpdateOrder", Verb::Patch, "customers/cust-1/orders/order-7".to_string()),
        (
            "GetActivationLinksByLineItemNumber",
            Verb::Get,
            "customers/cust-1/orders/order-7/lineitems/2/activationlinks".to_string(),
        ),
        ("GetDeviceBatches", Verb::Get, "customers/cust-1/deviceBatches".to_string()),
        ("CreateDeviceBatch", Verb::Post, "customers/cust-1/deviceBatches".to_string()),
        (
            "GetDevices",
            Verb::Get,
            "customers/cust-1/deviceBatches/batch-1/devices".to_string(),
        ),
        (
            "CreateDevices",
            Verb::Post,
            "customers/cust-1/deviceBatches/batch-1/devices".to_string(),
        ),
        (
            "UpdateDevice",
            Verb::Patch,
            "customers/cust-1/deviceBatches/batch-1/devices/dev-3".to_string(),
        ),
        (
            "DeleteDevice",
            Verb::Delete,
            "customers/cust-1/deviceBatches/batch-1/devices/dev-3".to_string(),
        ),
    ];

    let requests = transport.requests();
    assert_eq!(requests.len(), expected.len());
    for (request, (name, verb, path)) in requests.iter().zip(&expected) {
        assert_eq!(request.verb, *verb, "{name}");
        assert_eq!(request.url, format!("{BASE}/{path}"), "{name}");
    }

    let registry = OperationRegistry::embedded().unwrap();
    let covered: HashSet<&str> = expected.iter().map(|(name, ..)| *name).collect();
    let registered: HashSet<&str> = registry.names().collect();
    assert_eq!(covered.len(), expected.len());
    assert_eq!(covered, registered);
}
