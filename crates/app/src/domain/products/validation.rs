//! Product payload validation and update merging.

use std::collections::BTreeSet;

use jiff::Timestamp;
use tracing::debug;

use crate::domain::products::{
    data::ProductPayload,
    errors::ValidationError,
    models::{Product, ProductId},
    values::{Description, Image, Price, Tag},
};

/// Outcome of reading one payload field.
#[derive(Debug)]
enum Field<T> {
    Absent,
    Valid(T),
    Invalid(ValidationError),
}

impl<T> Field<T> {
    fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Create policy: absent is fine, invalid fails the whole payload.
    fn into_optional(self) -> Result<Option<T>, ValidationError> {
        match self {
            Self::Absent => Ok(None),
            Self::Valid(value) => Ok(Some(value)),
            Self::Invalid(error) => Err(error),
        }
    }

    /// Update policy: only a valid value is taken, anything else is dropped.
    fn accepted(self, field: &'static str) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent => None,
            Self::Invalid(error) => {
                debug!(field, %error, "keeping existing value for invalid field");

                None
            }
        }
    }
}

impl<T> From<Result<T, ValidationError>> for Field<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

fn name_field(payload: &ProductPayload) -> Field<String> {
    match payload.name.as_deref() {
        None => Field::Absent,
        Some("") => Field::Invalid(ValidationError::EmptyProductName),
        Some(name) => Field::Valid(name.to_owned()),
    }
}

fn price_field(payload: &ProductPayload) -> Field<Price> {
    let Some(price) = &payload.price else {
        return Field::Absent;
    };

    match (price.amount.as_deref(), price.currency.as_deref()) {
        (Some(amount), Some(currency)) => Price::build(amount, currency).into(),
        _ => Field::Invalid(ValidationError::BadPrice),
    }
}

fn image_field(payload: &ProductPayload) -> Field<Image> {
    let Some(image) = &payload.image else {
        return Field::Absent;
    };

    image
        .url
        .as_deref()
        .map_or(Field::Invalid(ValidationError::BadImageUrl), |url| {
            Image::build(url).into()
        })
}

fn description_field(payload: &ProductPayload) -> Field<Description> {
    // A blank description carries nothing, so it reads as absent.
    match payload
        .description
        .as_ref()
        .and_then(|description| description.text.as_deref())
    {
        None | Some("") => Field::Absent,
        Some(text) => Description::build(text).into(),
    }
}

fn tags_field(payload: &ProductPayload) -> Field<BTreeSet<Tag>> {
    let Some(tags) = &payload.tags else {
        return Field::Absent;
    };

    tags.iter()
        .map(|tag| {
            tag.name
                .as_deref()
                .map_or(Err(ValidationError::EmptyTag), Tag::build)
        })
        .collect::<Result<BTreeSet<Tag>, ValidationError>>()
        .into()
}

/// Build a new product from a create payload.
///
/// Name and price are required. Optional fields that are present must be
/// valid; absent ones are left out. Duplicate tags collapse into one.
///
/// # Errors
///
/// Returns the first failing field's error, checked in the order name, price,
/// image, description, tags. A missing price object is
/// [`ValidationError::MissingPrice`]; a malformed one is
/// [`ValidationError::BadPrice`].
pub fn new_product(
    id: ProductId,
    created_at: Timestamp,
    payload: &ProductPayload,
) -> Result<Product, ValidationError> {
    let Field::Valid(name) = name_field(payload) else {
        return Err(ValidationError::EmptyProductName);
    };

    let price = match price_field(payload) {
        Field::Valid(price) => price,
        Field::Absent => return Err(ValidationError::MissingPrice),
        Field::Invalid(error) => return Err(error),
    };

    let image = image_field(payload).into_optional()?;
    let description = description_field(payload).into_optional()?;
    let tags = tags_field(payload).into_optional()?.unwrap_or_default();

    Ok(Product {
        id,
        name,
        price,
        created_at,
        image,
        description,
        tags,
    })
}

/// Merge an update payload onto an existing product.
///
/// Every valid field in the payload replaces the existing value; absent and
/// invalid fields keep it. Valid tags replace the whole tag set. The id and
/// creation time never change.
///
/// # Errors
///
/// Returns [`ValidationError::NothingToUpdate`] when none of name, price,
/// image or description is valid.
pub fn merge_product(
    existing: &Product,
    payload: &ProductPayload,
) -> Result<Product, ValidationError> {
    let name = name_field(payload);
    let price = price_field(payload);
    let image = image_field(payload);
    let description = description_field(payload);

    if !(name.is_valid() || price.is_valid() || image.is_valid() || description.is_valid()) {
        return Err(ValidationError::NothingToUpdate);
    }

    Ok(Product {
        id: existing.id.clone(),
        name: name
            .accepted("name")
            .unwrap_or_else(|| existing.name.clone()),
        price: price
            .accepted("price")
            .unwrap_or_else(|| existing.price.clone()),
        created_at: existing.created_at,
        image: image.accepted("image").or_else(|| existing.image.clone()),
        description: description
            .accepted("description")
            .or_else(|| existing.description.clone()),
        tags: tags_field(payload)
            .accepted("tags")
            .unwrap_or_else(|| existing.tags.clone()),
    })
}
