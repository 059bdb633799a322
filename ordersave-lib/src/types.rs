use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Requested counts above the limit are clamped, not rejected.
pub const DEFAULT_ORDER_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub amount: Decimal,
}

impl Order {
    pub fn new(id: i64, customer_name: impl Into<String>, amount: Decimal) -> Self {
        Order {
            id,
            customer_name: customer_name.into(),
            amount,
        }
    }
}

// Demo orders for producing an output file without interactive input.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(1, "John Doe", Decimal::new(15050, 2)),
        Order::new(2, "Jane Smith", Decimal::new(29999, 2)),
        Order::new(3, "Bob Johnson", Decimal::new(7525, 2)),
        Order::new(4, "Alice Brown", Decimal::new(45000, 2)),
        Order::new(5, "Charlie Wilson", Decimal::new(19999, 2)),
    ]
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
