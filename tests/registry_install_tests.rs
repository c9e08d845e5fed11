//! Process-wide registry installation.
//!
//! Lives in its own test binary: installing replaces the embedded registry
//! for every client built afterwards in the same process.

use partner_center::{OperationRegistry, RegistryError, Verb};

// ============================================================================
// Install lifecycle
// ============================================================================

#[test]
fn test_install_then_global_then_reinstall() {
    let registry = OperationRegistry::new()
        .with_operation("GetCustomer", Verb::Get, "tenants/{0}")
        .unwrap();

    OperationRegistry::install(registry.clone()).unwrap();

    let global = OperationRegistry::global().unwrap();
    assert_eq!(*global, registry);
    assert_eq!(global.len(), 1);
    assert_eq!(
        global
            .descriptor_for("GetCustomer")
            .unwrap()
            .template
            .resolve(&["t-1"])
            .unwrap(),
        "tenants/t-1"
    );

    let again = OperationRegistry::install(OperationRegistry::embedded().unwrap());
    assert!(matches!(again, Err(RegistryError::AlreadyInitialized)));
}
