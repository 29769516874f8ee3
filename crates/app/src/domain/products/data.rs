//! Products Data

use smallvec::SmallVec;

/// Product create/update payload.
///
/// Every field is independently optional; which ones must be present is
/// decided by the create and update policies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPayload {
    /// Product name.
    pub name: Option<String>,
    /// Price object.
    pub price: Option<PricePayload>,
    /// Image object.
    pub image: Option<ImagePayload>,
    /// Description object.
    pub description: Option<DescriptionPayload>,
    /// Tag objects, duplicates allowed.
    pub tags: Option<SmallVec<[TagPayload; 3]>>,
}

/// Price payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricePayload {
    /// Decimal amount as text.
    pub amount: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
}

/// Image payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePayload {
    /// Image URL.
    pub url: Option<String>,
}

/// Description payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionPayload {
    /// Description text.
    pub text: Option<String>,
}

/// Tag payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPayload {
    /// Tag name.
    pub name: Option<String>,
}

impl PricePayload {
    /// Price payload with both parts present.
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: Some(currency.into()),
        }
    }
}

impl ImagePayload {
    /// Image payload with a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

impl DescriptionPayload {
    /// Description payload with text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl TagPayload {
    /// Tag payload with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
