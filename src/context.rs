//! Resource addressing.
//!
//! A [`ResourceContext`] is the composite key of one resource instance: the
//! ordered identifiers that fill a path template's placeholders. A
//! subscription is addressed by `(customerId, subscriptionId)`, an order line
//! item by `(customerId, orderId, lineItemNumber)`.
//!
//! Contexts are validated once, at construction, and are immutable after
//! that. Cloning is cheap (the components are shared).

use std::fmt;
use std::sync::Arc;

use crate::error::InvalidArgumentError;

/// An immutable, validated tuple of resource identifiers.
///
/// # Example
///
/// ```rust
/// use partner_center::ResourceContext;
///
/// let context = ResourceContext::new(["cust-1", "sub-9"]).unwrap();
/// assert_eq!(context.len(), 2);
/// assert_eq!(context.components()[1], "sub-9");
///
/// let child = context.extend("addon-3").unwrap();
/// assert_eq!(child.to_string(), "(cust-1, sub-9, addon-3)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResourceContext {
    components: Arc<[String]>,
}

// Verify ResourceContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceContext>();
};

impl ResourceContext {
    /// Creates a context from one or more identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::EmptyContext`] if no identifier is
    /// given, [`InvalidArgumentError::BlankIdentifier`] naming the first
    /// empty or whitespace-only component, and
    /// [`InvalidArgumentError::DotSegment`] for a component of `.` or `..`.
    pub fn new<I, S>(components: I) -> Result<Self, InvalidArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.is_empty() {
            return Err(InvalidArgumentError::EmptyContext);
        }
        validate(&components, &[])?;
        Ok(Self {
            components: components.into(),
        })
    }

    /// Creates a context whose components have known field names.
    ///
    /// Names are used only in error messages (`customerId must be set`).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn named<S: AsRef<str>>(
        names: &'static [&'static str],
        components: &[S],
    ) -> Result<Self, InvalidArgumentError> {
        let components: Vec<String> = components
            .iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        if components.is_empty() {
            return Err(InvalidArgumentError::EmptyContext);
        }
        validate(&components, names)?;
        Ok(Self {
            components: components.into(),
        })
    }

    /// The context of the partner root, which has no identifiers.
    ///
    /// Root-level collections (customers) are addressed by it.
    #[must_use]
    pub fn root() -> Self {
        Self {
            components: Arc::from(Vec::new()),
        }
    }

    /// Derives a child context with one more identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::BlankIdentifier`] if `component` is
    /// blank, and [`InvalidArgumentError::DotSegment`] if it is `.` or `..`.
    pub fn extend(&self, component: impl Into<String>) -> Result<Self, InvalidArgumentError> {
        self.extend_named(component, None)
    }

    pub(crate) fn extend_named(
        &self,
        component: impl Into<String>,
        name: Option<&'static str>,
    ) -> Result<Self, InvalidArgumentError> {
        let component = component.into();
        check_component(self.components.len(), name, &component)?;
        let mut components = self.components.to_vec();
        components.push(component);
        Ok(Self {
            components: components.into(),
        })
    }

    /// Returns the identifiers in order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns the identifier at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.components.get(position).map(String::as_str)
    }

    /// Returns the number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the root context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn validate(components: &[String], names: &[&'static str]) -> Result<(), InvalidArgumentError> {
    components
        .iter()
        .enumerate()
        .try_for_each(|(position, c)| {
            check_component(position, names.get(position).copied(), c)
        })
}

/// Rejects identifiers that cannot stand alone in a path segment.
///
/// Blank identifiers are rejected, and so are `.` and `..`: URL
/// normalization removes dot segments (escaped or not), which would send the
/// request to a different resource.
pub(crate) fn check_component(
    position: usize,
    name: Option<&'static str>,
    component: &str,
) -> Result<(), InvalidArgumentError> {
    if component.trim().is_empty() {
        return Err(InvalidArgumentError::BlankIdentifier { position, name });
    }
    if matches!(component, "." | "..") {
        return Err(InvalidArgumentError::DotSegment {
            position,
            name,
            value: component.to_string(),
        });
    }
    Ok(())
}

impl fmt::Debug for ResourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceContext")
            .field(&&*self.components)
            .finish()
    }
}

impl fmt::Display for ResourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.components.join(", "))
    }
}
