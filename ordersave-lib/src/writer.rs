use crate::types::{Order, OrderError};
use rust_decimal::RoundingStrategy;
use std::io::Write;

// One line per order: `id,customerName,amount`, amount always with two
// fractional digits. No quoting or escaping; names are validated to contain
// no comma before they get here.
pub fn format_order(order: &Order) -> String {
    let amount = order
        .amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{},{},{:.2}", order.id, order.customer_name, amount)
}

pub fn write_orders<W: Write>(out: &mut W, orders: &[Order]) -> Result<usize, OrderError> {
    for order in orders {
        writeln!(out, "{}", format_order(order))?;
    }
    Ok(orders.len())
}
