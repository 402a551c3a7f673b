//! Boundary validation for raw operator input.
//!
//! These functions are pure string-to-value parsers with no I/O, so the
//! rules (price must be positive, quantities must be whole numbers, a sale
//! must move at least one unit) can be unit tested without simulating an
//! input stream. The core model performs no validation of its own.

use crate::error::{CrumbError, Result};

/// A product name: free text, trimmed, non-empty.
pub fn parse_product_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(CrumbError::InvalidInput(
            "Product name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// A unit price: a finite decimal strictly greater than zero.
pub fn parse_price(input: &str) -> Result<f64> {
    let raw = input.trim();
    let price: f64 = raw
        .parse()
        .map_err(|_| CrumbError::InvalidInput(format!("'{}' is not a valid price", raw)))?;
    if !price.is_finite() {
        return Err(CrumbError::InvalidInput(format!(
            "'{}' is not a valid price",
            raw
        )));
    }
    if price <= 0.0 {
        return Err(CrumbError::InvalidInput(
            "Price must be greater than zero".to_string(),
        ));
    }
    Ok(price)
}

/// An initial stock quantity: a whole number, zero or more.
pub fn parse_initial_quantity(input: &str) -> Result<u32> {
    let qty = parse_whole_number(input)?;
    if qty < 0 {
        return Err(CrumbError::InvalidInput(
            "Quantity cannot be negative".to_string(),
        ));
    }
    to_u32(qty)
}

/// A quantity to sell: a whole number, one or more.
pub fn parse_sale_quantity(input: &str) -> Result<u32> {
    let qty = parse_whole_number(input)?;
    if qty <= 0 {
        return Err(CrumbError::InvalidInput(
            "Quantity to sell must be at least one".to_string(),
        ));
    }
    to_u32(qty)
}

fn parse_whole_number(input: &str) -> Result<i64> {
    let raw = input.trim();
    raw.parse()
        .map_err(|_| CrumbError::InvalidInput(format!("'{}' is not a whole number", raw)))
}

fn to_u32(qty: i64) -> Result<u32> {
    u32::try_from(qty).map_err(|_| CrumbError::InvalidInput("Quantity is too large".to_string()))
}
