//! Catalog/Cart store.
//!
//! Holds the product list and the current cart, exposes the operations the
//! presentation layer forwards user actions to, and enforces the one real
//! invariant in the system: stock never goes negative, and checkout is
//! all-or-nothing (every cart line validates before any stock moves).
//!
//! The store is single-threaded and synchronous; every operation runs to
//! completion within one UI event. Change notifications go out through a
//! subscription ([`Store::subscribe`]) so the presentation layer can
//! re-render.

pub mod checkout;
pub mod event;
pub mod store;

pub use checkout::{CheckoutReceipt, ReceiptLine};
pub use event::{
    CartItemAdded, CartItemRemoved, CheckoutCompleted, ProductAdded, ProductRemoved, StockAdjusted,
    StoreEvent,
};
pub use store::{CartLine, Store};
