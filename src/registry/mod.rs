//! The operation registry.
//!
//! Maps logical operation names (`GetSubscription`, `UpdateOrder`, ...) to an
//! [`OperationDescriptor`]: the HTTP verb plus a positional [`PathTemplate`].
//!
//! # Lifecycle
//!
//! The process-wide registry is initialized exactly once and never mutated
//! afterwards, so lookups are plain reads with no locking:
//!
//! - [`OperationRegistry::global`] returns it, loading the embedded default
//!   (`resources/operations.json`) on first access.
//! - [`OperationRegistry::install`] replaces the default with an
//!   application-supplied registry, and must run before first access.
//!
//! # Format
//!
//! ```json
//! {
//!   "apis": {
//!     "GetSubscription": { "verb": "GET", "path": "customers/{0}/subscriptions/{1}" }
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use partner_center::registry::OperationRegistry;
//! use partner_center::Verb;
//!
//! let registry = OperationRegistry::from_json(r#"{
//!     "apis": {
//!         "GetCustomer": { "verb": "GET", "path": "customers/{0}" }
//!     }
//! }"#).unwrap();
//!
//! let descriptor = registry.descriptor_for("GetCustomer").unwrap();
//! assert_eq!(descriptor.verb, Verb::Get);
//! assert_eq!(descriptor.template.resolve(&["c-1"]).unwrap(), "customers/c-1");
//! ```

mod errors;
mod template;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::clients::Verb;

pub use errors::RegistryError;
pub use template::PathTemplate;

/// The registry compiled into the crate.
const DEFAULT_REGISTRY: &str = include_str!("../../resources/operations.json");

static GLOBAL: OnceLock<Arc<OperationRegistry>> = OnceLock::new();

/// How to invoke one named remote operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// The unique operation name.
    pub name: String,
    /// The HTTP verb.
    pub verb: Verb,
    /// The positional path template.
    pub template: PathTemplate,
}

impl OperationDescriptor {
    /// Creates a descriptor, parsing its template.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTemplate`] if the template is malformed.
    pub fn new(name: impl Into<String>, verb: Verb, template: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            name: name.into(),
            verb,
            template: PathTemplate::parse(template)?,
        })
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(alias = "Apis")]
    apis: HashMap<String, ApiEntry>,
}

#[derive(Deserialize)]
struct ApiEntry {
    #[serde(alias = "Verb", alias = "method")]
    verb: Verb,
    #[serde(alias = "Path")]
    path: String,
}

/// A read-only map from operation name to [`OperationDescriptor`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationRegistry {
    operations: HashMap<String, OperationDescriptor>,
}

// Verify OperationRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OperationRegistry>();
};

impl OperationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a registry document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON or unknown verbs,
    /// and [`RegistryError::InvalidTemplate`] for malformed templates.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(json).map_err(|e| RegistryError::Parse {
            message: e.to_string(),
        })?;

        let mut registry = Self::new();
        for (name, entry) in file.apis {
            let descriptor = OperationDescriptor::new(name, entry.verb, &entry.path)?;
            registry.operations.insert(descriptor.name.clone(), descriptor);
        }

        tracing::debug!(operations = registry.len(), "loaded operation registry");
        Ok(registry)
    }

    /// Adds an operation, replacing any previous one with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTemplate`] if the template is malformed.
    pub fn with_operation(
        mut self,
        name: impl Into<String>,
        verb: Verb,
        template: &str,
    ) -> Result<Self, RegistryError> {
        let descriptor = OperationDescriptor::new(name, verb, template)?;
        self.operations.insert(descriptor.name.clone(), descriptor);
        Ok(self)
    }

    /// Parses the registry embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the embedded document is invalid.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::from_json(DEFAULT_REGISTRY)
    }

    /// Looks up an operation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownOperation`] if `name` is not registered.
    pub fn descriptor_for(&self, name: &str) -> Result<&OperationDescriptor, RegistryError> {
        self.operations
            .get(name)
            .ok_or_else(|| RegistryError::UnknownOperation {
                name: name.to_string(),
            })
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Returns the number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterates over registered operation names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Returns the process-wide registry, loading the embedded default on
    /// first access.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the embedded document is invalid.
    pub fn global() -> Result<Arc<Self>, RegistryError> {
        if let Some(registry) = GLOBAL.get() {
            return Ok(Arc::clone(registry));
        }
        let loaded = Arc::new(Self::embedded()?);
        // Another thread may have won the race; its value is returned.
        Ok(Arc::clone(GLOBAL.get_or_init(|| loaded)))
    }

    /// Installs the process-wide registry.
    ///
    /// Must run at startup, before any client is built.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyInitialized`] if the global registry
    /// was already installed or loaded.
    pub fn install(registry: Self) -> Result<Arc<Self>, RegistryError> {
        let registry = Arc::new(registry);
        GLOBAL
            .set(Arc::clone(&registry))
            .map_err(|_| RegistryError::AlreadyInitialized)?;
        Ok(registry)
    }
}
