//! Business-rule validation for order forms
//!
//! Rules are applied in a fixed order and the first failure wins:
//!
//! 1. required fields are non-empty
//! 2. `Existing Brand` orders carry a brand name and a quantity of at least 1000
//! 3. the email passes the basic format check
//! 4. the quantity is an integer, whatever the order type
//! 5. delivery date and time compose into one instant

pub mod validators;

use chrono::NaiveDateTime;

use crate::core::error::ValidationError;
use crate::core::order::OrderForm;
use validators::{is_valid_email, parse_delivery_datetime, parse_quantity};

/// Order type that triggers the brand rules
pub const EXISTING_BRAND: &str = "Existing Brand";

/// Minimum quantity for `Existing Brand` orders
pub const MIN_EXISTING_BRAND_QUANTITY: i64 = 1000;

/// A form that passed every rule, with its derived delivery instant
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    form: OrderForm,
    delivery_date_time: NaiveDateTime,
}

impl ValidatedOrder {
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn delivery_date_time(&self) -> NaiveDateTime {
        self.delivery_date_time
    }

    pub fn into_parts(self) -> (OrderForm, NaiveDateTime) {
        (self.form, self.delivery_date_time)
    }
}

/// Validate a decoded form and compute its delivery instant
pub fn validate_order(form: OrderForm) -> Result<ValidatedOrder, ValidationError> {
    check_rules(&form)?;

    // An integer check on quantity applies to every order type
    parse_quantity(&form.quantity).ok_or(ValidationError::InvalidQuantity)?;

    let delivery_date_time = parse_delivery_datetime(&form.delivery_date, &form.delivery_time)
        .ok_or(ValidationError::InvalidDeliveryDateTime)?;

    Ok(ValidatedOrder {
        form,
        delivery_date_time,
    })
}

/// Required fields, brand rules and email format
fn check_rules(form: &OrderForm) -> Result<(), ValidationError> {
    let required = [
        &form.product_type,
        &form.sub_option,
        &form.quantity,
        &form.size,
        &form.delivery_date,
        &form.delivery_time,
        &form.company_name,
        &form.email,
        &form.phone_number,
        &form.address,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingRequiredFields);
    }

    if form.order_type == EXISTING_BRAND {
        if form.brand_name.is_empty() {
            return Err(ValidationError::BrandNameRequired);
        }
        let quantity = parse_quantity(&form.quantity).ok_or(ValidationError::InvalidQuantity)?;
        if quantity < MIN_EXISTING_BRAND_QUANTITY {
            return Err(ValidationError::QuantityBelowMinimum);
        }
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
