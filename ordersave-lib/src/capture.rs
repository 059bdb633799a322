use crate::parser::{
    clamp_order_count, parse_amount, parse_customer_name, parse_order_count, parse_order_id,
};
use crate::types::{Order, OrderError};
use std::io::{BufRead, Write};

pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    console: &mut W,
    label: &str,
) -> Result<String, OrderError> {
    write!(console, "{}", label)?;
    console.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// Ask how many orders to record, clamp the answer to `limit`, then read id,
// customer name, and amount for each. Malformed input fails the capture
// instead of recording a garbage value.
pub fn capture_orders<R: BufRead, W: Write>(
    input: &mut R,
    console: &mut W,
    limit: usize,
) -> Result<Vec<Order>, OrderError> {
    let raw = prompt_line(input, console, "Enter number of orders to save: ")?;
    let requested = parse_order_count(&raw)?;
    let count = clamp_order_count(requested, limit);

    let mut orders = Vec::with_capacity(count);
    for i in 0..count {
        writeln!(console, "\nOrder #{}", i + 1)?;
        let id = parse_order_id(&prompt_line(input, console, "Enter Order ID: ")?)?;
        let customer_name =
            parse_customer_name(&prompt_line(input, console, "Enter Customer Name: ")?)?;
        let amount = parse_amount(&prompt_line(input, console, "Enter Amount: ")?)?;
        orders.push(Order {
            id,
            customer_name,
            amount,
        });
    }

    Ok(orders)
}
