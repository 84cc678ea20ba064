//! Per-retailer sales aggregation.
//!
//! Derived display figures computed from a [`Retailer`]'s order history.
//! Nothing here is persisted; stats are recomputed on every dashboard fetch.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::types::Retailer;

/// Fixed commission rate: 10% of total sales amount.
#[must_use]
pub fn commission_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// Aggregate sales statistics for a single retailer.
///
/// `ticket_category_count` is keyed by the numeric ticket *count*, not the
/// ticket label: the value is how many ticket entries share that exact
/// count. Intentional; reported figures depend on this grouping, so do not
/// rekey it by label without a product decision (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetailerStats {
    /// Sum of the precomputed `totalAmount` of every history item.
    pub total_amount: Decimal,
    /// `total_amount` x 10%, exact decimal arithmetic, no tiering.
    pub commission: Decimal,
    /// Sum of every ticket count across every order in every history item.
    pub total_tickets_sold: u64,
    /// Ordered mapping from ticket count value to number of ticket entries
    /// sharing that count.
    pub ticket_category_count: BTreeMap<u32, u64>,
}

impl RetailerStats {
    /// Compute aggregate statistics for a retailer.
    ///
    /// Pure with respect to its input: the retailer record is never
    /// mutated, and identical input always yields identical stats.
    #[must_use]
    pub fn compute(retailer: &Retailer) -> Self {
        let mut total_amount = Decimal::ZERO;
        let mut total_tickets_sold = 0u64;
        let mut ticket_category_count = BTreeMap::new();

        for history in &retailer.order_history {
            // Trust the backend's precomputed batch total.
            total_amount += history.total_amount;

            for order in &history.orders {
                for ticket in &order.tickets {
                    total_tickets_sold += u64::from(ticket.count);
                    *ticket_category_count.entry(ticket.count).or_insert(0) += 1;
                }
            }
        }

        let commission = total_amount * commission_rate();

        Self {
            total_amount,
            commission,
            total_tickets_sold,
            ticket_category_count,
        }
    }
}

impl Retailer {
    /// Convenience accessor for [`RetailerStats::compute`].
    #[must_use]
    pub fn stats(&self) -> RetailerStats {
        RetailerStats::compute(self)
    }
}
