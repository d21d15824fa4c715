use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, StoreError, StoreResult};

use crate::product::Product;

/// Unvalidated product input from the presentation layer (the add-product
/// form).
///
/// The store itself performs no field validation; this is the boundary where
/// raw form input becomes a well-formed [`Product`]. Callers validate a draft
/// *before* handing the result to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Explicit id, or `None` to mint one.
    pub id: Option<ProductId>,
    pub name: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub rating: f32,
    /// Price in smallest currency unit.
    pub price: u64,
    pub quantity: u64,
}

impl ProductDraft {
    /// Validate the draft and produce a well-formed [`Product`].
    ///
    /// Name, category and image must be non-blank; the rating must be finite
    /// and is clamped into [0, 5]. Free-text fields are trimmed. A missing id
    /// is minted.
    pub fn validate(self) -> StoreResult<Product> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("product name is required"));
        }
        if self.image.trim().is_empty() {
            return Err(StoreError::validation("image URL is required"));
        }
        if self.category.trim().is_empty() {
            return Err(StoreError::validation("category is required"));
        }
        if !self.rating.is_finite() {
            return Err(StoreError::validation("rating must be a finite number"));
        }

        Ok(Product {
            id: self.id.unwrap_or_else(ProductId::generate),
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            specs: self.specs.trim().to_string(),
            rating: self.rating.clamp(0.0, 5.0),
            price: self.price,
            quantity: self.quantity,
        })
    }
}
