use crate::types::OrderError;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn parse_order_count(raw: &str) -> Result<usize, OrderError> {
    let trimmed = raw.trim();
    trimmed.parse::<usize>().map_err(|_| {
        OrderError::InvalidInput(format!(
            "order count must be a non-negative integer, got '{}'",
            trimmed
        ))
    })
}

pub fn clamp_order_count(count: usize, limit: usize) -> usize {
    count.min(limit)
}

pub fn parse_order_id(raw: &str) -> Result<i64, OrderError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| {
        OrderError::InvalidInput(format!("order ID must be an integer, got '{}'", trimmed))
    })
}

// The whole trimmed line is the name, so multi-word names are fine. Commas
// would collide with the field separator (the format has no escaping).
pub fn parse_customer_name(raw: &str) -> Result<String, OrderError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(OrderError::InvalidInput(
            "customer name must not be empty".to_string(),
        ));
    }
    if name.contains(',') {
        return Err(OrderError::InvalidInput(format!(
            "customer name must not contain a comma, got '{}'",
            name
        )));
    }
    Ok(name.to_string())
}

pub fn parse_amount(raw: &str) -> Result<Decimal, OrderError> {
    let trimmed = raw.trim();
    let amount = Decimal::from_str(trimmed).map_err(|_| {
        OrderError::InvalidInput(format!("amount must be a decimal number, got '{}'", trimmed))
    })?;
    if amount <= Decimal::ZERO {
        return Err(OrderError::InvalidInput(format!(
            "amount must be positive, got '{}'",
            trimmed
        )));
    }
    Ok(amount)
}
