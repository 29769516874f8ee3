//! Product Models

use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::products::values::{Description, Image, Price, Tag};

/// Opaque product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Product Model
///
/// Immutable: an update produces a new `Product` with the same id and
/// creation time. Built only by [`new_product`](super::new_product) and
/// [`merge_product`](super::merge_product).
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(super) id: ProductId,
    pub(super) name: String,
    pub(super) price: Price,
    pub(super) created_at: Timestamp,
    pub(super) image: Option<Image>,
    pub(super) description: Option<Description>,
    pub(super) tags: BTreeSet<Tag>,
}

impl Product {
    /// Product identifier.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product name, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Creation time, kept across updates.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Product image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Product description, if any.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Tag set, ordered by name.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether the tag set contains `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
