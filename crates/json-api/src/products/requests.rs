//! Product request bodies, shared by create and update.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

use catalog_app::domain::products::data::{
    DescriptionPayload, ImagePayload, PricePayload, ProductPayload, TagPayload,
};

/// Product Request
///
/// Every field is optional at the wire level; which ones are required is
/// decided when the product is created or updated.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name
    pub name: Option<String>,

    /// Price as a decimal string and ISO 4217 currency code
    pub price: Option<PriceRequest>,

    /// Product image
    pub image: Option<ImageRequest>,

    /// Product description, up to 400 characters
    pub description: Option<DescriptionRequest>,

    /// Product tags
    pub tags: Option<Vec<TagRequest>>,
}

/// Price Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceRequest {
    /// Decimal amount, e.g. `"100.50"`. A JSON number is taken digit for digit.
    #[serde(default, deserialize_with = "amount_text")]
    pub amount: Option<String>,

    /// ISO 4217 currency code, e.g. `"PLN"`
    pub currency: Option<String>,
}

/// Amount as written, whether sent as a JSON string or a JSON number.
fn amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("amount must be a string or a number")),
    }
}

/// Image Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageRequest {
    /// Absolute image URL
    pub url: Option<String>,
}

/// Description Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct DescriptionRequest {
    pub text: Option<String>,
}

/// Tag Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagRequest {
    pub name: Option<String>,
}

impl From<ProductRequest> for ProductPayload {
    fn from(request: ProductRequest) -> Self {
        ProductPayload {
            name: request.name,
            price: request.price.map(|price| PricePayload {
                amount: price.amount,
                currency: price.currency,
            }),
            image: request.image.map(|image| ImagePayload { url: image.url }),
            description: request
                .description
                .map(|description| DescriptionPayload {
                    text: description.text,
                }),
            tags: request.tags.map(|tags| {
                tags.into_iter()
                    .map(|tag| TagPayload { name: tag.name })
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_inner_keys_stay_distinguishable() -> TestResult {
        let request: ProductRequest = serde_json::from_value(json!({
            "name": "product",
            "price": { "amount": "150" },
            "tags": [{ "name": "tag" }, {}],
        }))?;

        let payload = ProductPayload::from(request);

        assert_eq!(payload.name.as_deref(), Some("product"));
        assert_eq!(
            payload.price,
            Some(PricePayload {
                amount: Some("150".to_owned()),
                currency: None,
            })
        );
        assert_eq!(payload.image, None);
        assert_eq!(
            payload.tags.as_deref(),
            Some([TagPayload::new("tag"), TagPayload::default()].as_slice())
        );

        Ok(())
    }

    #[test]
    fn numeric_amount_keeps_every_digit() -> TestResult {
        let request: PriceRequest = serde_json::from_str(
            r#"{ "amount": 12345678901234567890123456789.50, "currency": "PLN" }"#,
        )?;

        assert_eq!(
            request.amount.as_deref(),
            Some("12345678901234567890123456789.50")
        );

        let request: PriceRequest = serde_json::from_str(r#"{ "amount": 100 }"#)?;

        assert_eq!(request.amount.as_deref(), Some("100"));

        Ok(())
    }

    #[test]
    fn amount_of_another_type_is_rejected() {
        let result = serde_json::from_str::<PriceRequest>(r#"{ "amount": true }"#);

        assert!(result.is_err(), "expected boolean amount to be rejected");
    }

    #[test]
    fn null_amount_is_absent() -> TestResult {
        let request: PriceRequest = serde_json::from_str(r#"{ "amount": null }"#)?;

        assert_eq!(request.amount, None);

        Ok(())
    }

    #[test]
    fn empty_body_is_an_empty_payload() -> TestResult {
        let request: ProductRequest = serde_json::from_value(json!({}))?;

        assert_eq!(ProductPayload::from(request), ProductPayload::default());

        Ok(())
    }
}
