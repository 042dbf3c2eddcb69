//! Orders queued for submission.

use shipstation_core::Order;

/// An append-only list of orders to submit together.
///
/// Submission sends one create-order request per order, in insertion order;
/// a failure on one order does not stop the rest.
///
/// ```
/// use shipstation_client::OrderBatch;
/// use shipstation_core::Order;
///
/// let mut batch = OrderBatch::new();
/// batch.add_order(Order::new(Some("key-1"), Some("1001")));
/// batch.add_order(Order::new(Some("key-2"), Some("1002")));
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBatch {
    orders: Vec<Order>,
}

impl OrderBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Queued orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<Order> for OrderBatch {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}
