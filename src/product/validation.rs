//! Field constraints the presentation layer checks before calling the store.
//!
//! The store never calls these; they are the caller's half of the update contract.

use super::Product;

pub const TITLE_MIN_CHARS: usize = 1;
pub const TITLE_MAX_CHARS: usize = 33;
pub const PRICE_MIN: i32 = -1;
pub const PRICE_MAX: i32 = 100;

/// Title length in characters, bounds inclusive.
pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.chars().count();
    if len < TITLE_MIN_CHARS || len > TITLE_MAX_CHARS {
        return Err(format!(
            "The Title should have a length of more than {} and less than {}",
            TITLE_MIN_CHARS, TITLE_MAX_CHARS
        ));
    }
    Ok(())
}

pub fn validate_price(price: i32) -> Result<(), String> {
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(format!(
            "Value for Price must be between {} and {}.",
            PRICE_MIN, PRICE_MAX
        ));
    }
    Ok(())
}

/// Validate every advisory constraint, collecting all failures.
///
/// A missing title is treated as empty.
pub fn validate_product(product: &Product) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_title(product.title.as_deref().unwrap_or_default()) {
        errors.push(e);
    }
    if let Err(e) = validate_price(product.price) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
