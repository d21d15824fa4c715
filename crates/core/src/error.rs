//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is a recoverable, user-facing condition. The store never
/// panics and never surfaces an internal/fatal class: malformed numeric input
/// is absorbed by clamping instead of rejected, so the store stays total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Checkout was requested with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A cart entry referenced a product that no longer exists.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// A cart line asked for more units than the catalog has.
    #[error("not enough stock for {id}: {available} available")]
    InsufficientStock { id: ProductId, available: u64 },

    /// A value failed validation (e.g. malformed input at the boundary).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. duplicate product id).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_stock(id: ProductId, available: u64) -> Self {
        Self::InsufficientStock { id, available }
    }
}
