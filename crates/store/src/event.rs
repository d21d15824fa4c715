use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_events::Event;

use crate::checkout::CheckoutReceipt;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockAdjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAdjusted {
    pub product_id: ProductId,
    /// Requested delta, before clamping.
    pub delta: i64,
    /// Stock level after the adjustment.
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemAdded {
    pub product_id: ProductId,
    /// Units added by this call.
    pub added: u64,
    /// Cart quantity after the add.
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartItemRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CheckoutCompleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutCompleted {
    pub receipt: CheckoutReceipt,
    pub occurred_at: DateTime<Utc>,
}

/// Change feed published by the store after every successful mutation.
///
/// Failed operations (rejected checkout, duplicate product id) publish
/// nothing: the feed announces state changes, and a failure changes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    ProductAdded(ProductAdded),
    ProductRemoved(ProductRemoved),
    StockAdjusted(StockAdjusted),
    CartItemAdded(CartItemAdded),
    CartItemRemoved(CartItemRemoved),
    CheckoutCompleted(CheckoutCompleted),
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ProductAdded(_) => "catalog.product.added",
            StoreEvent::ProductRemoved(_) => "catalog.product.removed",
            StoreEvent::StockAdjusted(_) => "catalog.stock.adjusted",
            StoreEvent::CartItemAdded(_) => "cart.item.added",
            StoreEvent::CartItemRemoved(_) => "cart.item.removed",
            StoreEvent::CheckoutCompleted(_) => "cart.checkout.completed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::ProductAdded(e) => e.occurred_at,
            StoreEvent::ProductRemoved(e) => e.occurred_at,
            StoreEvent::StockAdjusted(e) => e.occurred_at,
            StoreEvent::CartItemAdded(e) => e.occurred_at,
            StoreEvent::CartItemRemoved(e) => e.occurred_at,
            StoreEvent::CheckoutCompleted(e) => e.occurred_at,
        }
    }
}
