use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Beverages")]
    pub name: String,
}

/// A product with its category embedded.
///
/// The embedded category is the flat `{id, name}` form; it never carries its
/// own product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Cola")]
    pub name: String,
    #[schema(example = 4.5)]
    pub price: f64,
    pub category: Category,
}

/// Request body for creating or replacing a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryInput {
    #[schema(example = "Beverages")]
    pub name: String,
}

/// Request body for creating or replacing a product.
///
/// All fields are optional at the wire level so that missing fields can be
/// reported as incomplete data. Presence is what matters: a price of `0` or
/// an empty name is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Cola")]
    pub name: Option<String>,
    #[schema(example = 4.5)]
    pub price: Option<f64>,
    /// Id of the category the product belongs to
    #[schema(example = 1)]
    pub category: Option<i32>,
}

impl ProductInput {
    /// Collapses the optional fields into validated product data.
    /// Returns `None` when any required field is absent.
    pub fn into_data(self) -> Option<ProductData> {
        Some(ProductData {
            name: self.name?,
            price: self.price?,
            category_id: self.category?,
        })
    }
}

/// A product payload with all required fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
}

/// The success response envelope: a human-readable `message` plus an
/// optional `data` payload. The field is omitted entirely when there is
/// no payload, such as after a delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage<T> {
    #[schema(example = "Category created")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiMessage<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_requires_all_fields() {
        let input = ProductInput {
            name: Some("Cola".to_string()),
            price: None,
            category: Some(1),
        };
        assert!(input.into_data().is_none());
    }

    #[test]
    fn test_into_data_accepts_zero_price() {
        let input = ProductInput {
            name: Some("Sample".to_string()),
            price: Some(0.0),
            category: Some(1),
        };
        let data = input.into_data().unwrap();
        assert_eq!(data.price, 0.0);
    }

    #[test]
    fn test_message_only_omits_data_field() {
        let envelope = ApiMessage::<Category>::message_only("Category deleted");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["message"], "Category deleted");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_with_data_serializes_payload() {
        let envelope = ApiMessage::with_data(
            "Category created",
            Category {
                id: 1,
                name: "Beverages".to_string(),
            },
        );
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["data"]["name"], "Beverages");
    }
}
