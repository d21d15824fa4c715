use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Stock level below which a product is flagged as "low stock" (and above
/// zero). Presentational threshold only; store logic never branches on it.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// A catalog product.
///
/// Plain record consumed by the presentation layer. Field validation happens
/// at the boundary ([`crate::ProductDraft`]); the store accepts products
/// as-is. The one enforced invariant is that `quantity` can never go
/// negative, which the unsigned type makes unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Image URL or locally-generated reference. Best-effort decoration;
    /// never fetched or validated here.
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: String,
    /// Informational rating in [0, 5].
    #[serde(default)]
    pub rating: f32,
    /// Price in smallest currency unit (e.g. centavos).
    pub price: u64,
    /// Available stock.
    pub quantity: u64,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Value of the units on hand, `price * quantity`, in smallest currency
    /// unit. Saturates instead of overflowing.
    pub fn inventory_value(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }
}
