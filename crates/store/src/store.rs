use std::collections::BTreeMap;

use chrono::Utc;

use stockroom_catalog::{Product, category};
use stockroom_core::{ProductId, StoreError, StoreResult};
use stockroom_events::{EventBus, InMemoryEventBus, Subscription};

use crate::checkout::{CheckoutReceipt, ReceiptLine};
use crate::event::{
    CartItemAdded, CartItemRemoved, CheckoutCompleted, ProductAdded, ProductRemoved, StockAdjusted,
    StoreEvent,
};

/// A cart entry joined with its catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u64,
    /// `quantity * product.price` in smallest currency unit.
    pub subtotal: u64,
}

/// The catalog/cart store.
///
/// Owns the product list (insertion order, relevant for display) and the cart
/// (product id -> positive quantity). All state lives for one session; there
/// is no persistence.
///
/// Mutating operations publish a [`StoreEvent`] on success; the presentation
/// layer subscribes via [`Store::subscribe`] and re-renders on receipt.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    cart: BTreeMap<ProductId, u64>,
    bus: InMemoryEventBus<StoreEvent>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with a catalog. Fails on duplicate product ids.
    pub fn with_products(products: Vec<Product>) -> StoreResult<Self> {
        let mut store = Self::new();
        for product in products {
            store.add_product(product)?;
        }
        Ok(store)
    }

    /// Subscribe to the change feed. Each subscriber receives every event
    /// published after this call.
    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.bus.subscribe()
    }

    // ---- queries ----------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Cart quantity for `id`, 0 when absent.
    pub fn cart_quantity(&self, id: &ProductId) -> u64 {
        self.cart.get(id).copied().unwrap_or(0)
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum over the catalog of `price * quantity`, in smallest currency unit.
    pub fn total_catalog_value(&self) -> u64 {
        self.products
            .iter()
            .fold(0u64, |sum, p| sum.saturating_add(p.inventory_value()))
    }

    /// Distinct non-empty categories with the "All" sentinel prepended.
    pub fn distinct_categories(&self) -> Vec<String> {
        category::distinct_categories(&self.products)
    }

    /// Cart entries joined with their products, in catalog (insertion)
    /// order. Entries whose product has been removed from the catalog are
    /// orphaned and drop out of the join.
    pub fn cart_lines(&self) -> Vec<CartLine<'_>> {
        self.products
            .iter()
            .filter_map(|product| {
                self.cart
                    .get(&product.id)
                    .copied()
                    .filter(|qty| *qty > 0)
                    .map(|quantity| CartLine {
                        product,
                        quantity,
                        subtotal: product.price.saturating_mul(quantity),
                    })
            })
            .collect()
    }

    /// Sum of cart line subtotals, in smallest currency unit.
    pub fn cart_total(&self) -> u64 {
        self.cart_lines()
            .iter()
            .fold(0u64, |sum, line| sum.saturating_add(line.subtotal))
    }

    // ---- catalog mutations ------------------------------------------------

    /// Append a fully-formed product to the catalog.
    ///
    /// Field validation is the caller's responsibility (see
    /// `stockroom_catalog::ProductDraft`); the only structural check here is
    /// id uniqueness.
    pub fn add_product(&mut self, product: Product) -> StoreResult<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::conflict("product id already exists"));
        }

        tracing::debug!(id = %product.id, name = %product.name, "product added");
        let event = ProductAdded {
            product_id: product.id.clone(),
            name: product.name.clone(),
            occurred_at: Utc::now(),
        };
        self.products.push(product);
        self.notify(StoreEvent::ProductAdded(event));
        Ok(())
    }

    /// Remove a product and cascade-delete its cart entry, preserving the
    /// cart's referential invariant. Returns whether anything was removed.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() == before {
            return false;
        }

        self.cart.remove(id);
        tracing::debug!(%id, "product removed");
        self.notify(StoreEvent::ProductRemoved(ProductRemoved {
            product_id: id.clone(),
            occurred_at: Utc::now(),
        }));
        true
    }

    /// Adjust a product's stock by `delta`, flooring silently at zero.
    ///
    /// The clamp is deliberate best-effort semantics: repeated decrements from
    /// the manual +/- controls must not error out, only bottom out. Unknown
    /// ids are a no-op.
    pub fn adjust_stock(&mut self, id: &ProductId, delta: i64) {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(%id, "stock adjustment ignored: unknown product");
            return;
        };

        product.quantity = if delta.is_negative() {
            product.quantity.saturating_sub(delta.unsigned_abs())
        } else {
            product.quantity.saturating_add(delta as u64)
        };
        let quantity = product.quantity;

        tracing::debug!(%id, delta, quantity, "stock adjusted");
        self.notify(StoreEvent::StockAdjusted(StockAdjusted {
            product_id: id.clone(),
            delta,
            quantity,
            occurred_at: Utc::now(),
        }));
    }

    /// The "+" stepper on a product card.
    pub fn increment_stock(&mut self, id: &ProductId) {
        self.adjust_stock(id, 1);
    }

    /// The "-" stepper on a product card.
    pub fn decrement_stock(&mut self, id: &ProductId) {
        self.adjust_stock(id, -1);
    }

    // ---- cart mutations ---------------------------------------------------

    /// Add `qty` units of a product to the cart.
    ///
    /// Optimistic add: no stock check and no stock mutation here; stock is
    /// reconciled only at checkout. Zero quantities and unknown ids are
    /// no-ops, so the cart never references a product the catalog lacks.
    pub fn add_to_cart(&mut self, id: &ProductId, qty: u64) {
        if qty == 0 {
            return;
        }
        if self.product(id).is_none() {
            tracing::debug!(%id, "add to cart ignored: unknown product");
            return;
        }

        let entry = self.cart.entry(id.clone()).or_insert(0);
        *entry = entry.saturating_add(qty);
        let quantity = *entry;

        tracing::debug!(%id, added = qty, quantity, "cart item added");
        self.notify(StoreEvent::CartItemAdded(CartItemAdded {
            product_id: id.clone(),
            added: qty,
            quantity,
            occurred_at: Utc::now(),
        }));
    }

    /// Delete a cart entry outright. Stock is untouched (add never reserved
    /// any). Idempotent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if self.cart.remove(id).is_none() {
            return;
        }

        tracing::debug!(%id, "cart item removed");
        self.notify(StoreEvent::CartItemRemoved(CartItemRemoved {
            product_id: id.clone(),
            occurred_at: Utc::now(),
        }));
    }

    // ---- checkout ---------------------------------------------------------

    /// Validate the whole cart, then decrement stock and clear it.
    ///
    /// All-or-nothing: the validation pass runs over every cart line before
    /// any mutation, so a failure on the last line leaves products and cart
    /// exactly as they were.
    pub fn checkout(&mut self) -> StoreResult<CheckoutReceipt> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        // Validation pass. No state changes until every line has passed.
        let mut lines = Vec::with_capacity(self.cart.len());
        for (id, requested) in &self.cart {
            let product = self
                .product(id)
                .ok_or_else(|| StoreError::ProductNotFound(id.clone()))?;
            if product.quantity < *requested {
                return Err(StoreError::insufficient_stock(
                    id.clone(),
                    product.quantity,
                ));
            }
            lines.push(ReceiptLine {
                product_id: id.clone(),
                name: product.name.clone(),
                quantity: *requested,
                unit_price: product.price,
                subtotal: product.price.saturating_mul(*requested),
            });
        }

        // Mutation pass: every line validated, nothing can fail from here on.
        for line in &lines {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                product.quantity = product.quantity.saturating_sub(line.quantity);
            }
        }
        self.cart.clear();

        let total = lines
            .iter()
            .fold(0u64, |sum, l| sum.saturating_add(l.subtotal));
        let receipt = CheckoutReceipt {
            lines,
            total,
            completed_at: Utc::now(),
        };

        tracing::info!(
            total = receipt.total,
            lines = receipt.lines.len(),
            "checkout completed"
        );
        self.notify(StoreEvent::CheckoutCompleted(CheckoutCompleted {
            receipt: receipt.clone(),
            occurred_at: receipt.completed_at,
        }));
        Ok(receipt)
    }

    fn notify(&self, event: StoreEvent) {
        if self.bus.publish(event).is_err() {
            tracing::warn!("change notification dropped: bus lock poisoned");
        }
    }
}
