use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// One purchased line on a [`CheckoutReceipt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u64,
    /// Price per unit in smallest currency unit.
    pub unit_price: u64,
    pub subtotal: u64,
}

/// Result of a successful checkout, ready for an order-confirmation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub lines: Vec<ReceiptLine>,
    /// Sum of line subtotals in smallest currency unit.
    pub total: u64,
    pub completed_at: DateTime<Utc>,
}
