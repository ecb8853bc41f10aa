use axum_helpers::NamedResource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Display list returned by `GET /product/type`. Storage does not enforce it.
pub const PRODUCT_TYPES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Beauty",
    "Books",
    "Jewelry",
    "Furniture",
    "Grocery",
];

/// Catalog product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier
    pub id: i32,
    pub name: String,
    /// Free-text category, conventionally one of [`PRODUCT_TYPES`]
    #[serde(rename = "type")]
    pub product_type: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Path returned by the image upload endpoint
    #[serde(default)]
    pub image_path: String,
}

impl NamedResource for Product {
    const NAME: &'static str = "product";
}

/// Request body for create and update.
///
/// Any `id` in the body is ignored. Only create runs the validation rules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type", default)]
    #[validate(length(min = 1))]
    pub product_type: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: String,
}

impl ProductInput {
    /// Full-record replacement for the product with `id`.
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            price: self.price,
            description: self.description,
            image_path: self.image_path,
        }
    }
}

/// One page of list results
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Number of rows matching the filters, ignoring pagination
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductTypes {
    pub types: Vec<String>,
}

impl Default for ProductTypes {
    fn default() -> Self {
        Self {
            types: PRODUCT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageUpload {
    /// Server path the image was written to
    pub url: String,
}
