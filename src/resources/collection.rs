//! Paged collection responses.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One page of a collection returned by the service.
///
/// A present `continuation_token` means the page is not the last one; the
/// caller requests the next page explicitly.
///
/// # Example
///
/// ```rust
/// use partner_center::ResourceCollection;
///
/// let page: ResourceCollection<String> = serde_json::from_str(
///     r#"{"items": ["a", "b"], "continuationToken": "t-1", "totalCount": 5}"#,
/// ).unwrap();
///
/// assert_eq!(page.len(), 2);
/// assert!(page.has_more());
/// assert_eq!(page.total_count, Some(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollection<T> {
    /// The items of this page, in service order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Token for the next page, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// The total number of items across all pages, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> ResourceCollection<T> {
    /// Creates a complete, single-page collection.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            continuation_token: None,
            total_count: None,
        }
    }

    /// Returns `true` if the service has more pages.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for ResourceCollection<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
