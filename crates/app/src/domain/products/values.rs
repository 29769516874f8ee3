//! Product Value Types
//!
//! Each value type is built through a validating constructor and carries no
//! behaviour beyond its accessors.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use rusty_money::{Findable, iso::Currency};
use url::Url;

use crate::domain::products::errors::ValidationError;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 400;

/// Product price: an arbitrary-precision decimal amount in an ISO 4217
/// currency.
///
/// Two prices are equal only when they are written the same way: `100` and
/// `100.00` differ, as they render differently.
#[derive(Debug, Clone)]
pub struct Price {
    amount: BigDecimal,
    currency: &'static Currency,
}

impl Price {
    /// Build a price from its textual amount and currency code.
    ///
    /// The amount keeps the scale it was written with, so `"100.50"` formats
    /// back as `"100.50"`. Any number of digits and an exponent are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BadPrice`] when the amount is not a decimal
    /// number or the currency is not an ISO 4217 code.
    pub fn build(amount: &str, currency: &str) -> Result<Self, ValidationError> {
        let amount = BigDecimal::from_str(amount).map_err(|_ignored| ValidationError::BadPrice)?;

        let Some(currency) = Currency::find(currency) else {
            return Err(ValidationError::BadPrice);
        };

        Ok(Self { amount, currency })
    }

    /// Decimal amount.
    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    /// Amount in plain decimal notation, never in exponent form.
    pub fn amount_text(&self) -> String {
        self.amount.to_plain_string()
    }

    /// ISO 4217 alphabetic code, e.g. `PLN`.
    pub fn currency_code(&self) -> &'static str {
        self.currency.iso_alpha_code
    }

    /// ISO 4217 currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.currency_code() == other.currency_code()
            && self.amount.as_bigint_and_exponent() == other.amount.as_bigint_and_exponent()
    }
}

/// Free text describing a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    /// Build a description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLongDescription`] when the text is longer
    /// than [`MAX_DESCRIPTION_LENGTH`] characters.
    pub fn build(text: &str) -> Result<Self, ValidationError> {
        if text.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::TooLongDescription);
        }

        Ok(Self {
            text: text.to_owned(),
        })
    }

    /// Description text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Product image, referenced by absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    url: Url,
}

impl Image {
    /// Build an image from a URL string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BadImageUrl`] when the string does not parse
    /// as an absolute URL.
    pub fn build(url: &str) -> Result<Self, ValidationError> {
        Url::parse(url)
            .map(|url| Self { url })
            .map_err(|_ignored| ValidationError::BadImageUrl)
    }

    /// Parsed URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Product tag. Compared case-sensitively, exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Build a tag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTag`] for an empty name.
    pub fn build(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyTag);
        }

        Ok(Self {
            name: name.to_owned(),
        })
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
