use std::collections::HashMap;

use rust_decimal::Decimal;

use orderdesk_core::{DomainError, DomainResult};

use crate::result::OrderResult;

/// Order processing service: applies orders against an owned inventory.
///
/// The inventory maps product name (case-sensitive, non-empty) to available
/// quantity. Keys are fixed at construction; [`OrderProcessor::place_order`]
/// is the only mutating path. Stored quantities never go below zero.
///
/// Mutation goes through `&mut self`, so exclusive access is enforced by the
/// borrow checker. Callers that share a processor across threads wrap it in
/// their own `Mutex`.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    inventory: HashMap<String, i64>,
}

impl OrderProcessor {
    /// Create a processor from caller-supplied initial stock levels.
    pub fn new(inventory: HashMap<String, i64>) -> Self {
        Self { inventory }
    }

    /// Place an order for `quantity` units of `product`.
    ///
    /// Argument contract, enforced as hard failures:
    /// - `product` must be non-empty,
    /// - `quantity` must be greater than zero.
    ///
    /// Business validation then yields an [`OrderResult`], never an error:
    /// an unknown product or insufficient stock is a rejection, and only an
    /// accepted order mutates inventory (by exactly `quantity`).
    ///
    /// Lookup is exact-match and case-sensitive; no trimming or
    /// normalization of the product name is performed.
    pub fn place_order(&mut self, product: &str, quantity: i64) -> DomainResult<OrderResult> {
        if product.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }

        let Some(available) = self.inventory.get_mut(product) else {
            tracing::debug!(product, quantity, "order rejected: unknown product");
            return Ok(OrderResult::rejected(format!(
                "Product '{product}' not found in inventory."
            )));
        };

        if *available < quantity {
            tracing::debug!(
                product,
                available = *available,
                requested = quantity,
                "order rejected: insufficient stock"
            );
            return Ok(OrderResult::rejected(format!(
                "Insufficient stock for '{product}'. Available: {available}, Requested: {quantity}"
            )));
        }

        *available -= quantity;
        tracing::debug!(product, quantity, remaining = *available, "order accepted");
        Ok(OrderResult::accepted(format!(
            "Order for {quantity} {product}(s) processed successfully."
        )))
    }

    /// Total price of an order line: `quantity × unit_price`.
    ///
    /// `unit_price` must be greater than zero; violating that is a hard
    /// failure. `product` and `quantity` are deliberately not validated and
    /// not checked against inventory — this is a pure arithmetic helper,
    /// decoupled from stock state.
    pub fn total_price(
        &self,
        _product: &str,
        quantity: i64,
        unit_price: Decimal,
    ) -> DomainResult<Decimal> {
        if unit_price <= Decimal::ZERO {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        Ok(Decimal::from(quantity) * unit_price)
    }

    /// Snapshot of current stock levels.
    ///
    /// Returns a detached copy: mutating it never affects the processor's
    /// internal state.
    pub fn inventory(&self) -> HashMap<String, i64> {
        self.inventory.clone()
    }
}
