//! Booking field validation owned by the booking domain.

use super::domain::BookingFields;

/// Validate booking fields before they are persisted.
pub fn validate_booking_fields(fields: &BookingFields) -> Result<(), String> {
    if fields.name.trim().is_empty() {
        return Err("Booking name cannot be empty".to_string());
    }

    let email = fields.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(format!("Invalid email address: '{}'", fields.email));
    }

    if fields.phone.trim().is_empty() {
        return Err("Phone number cannot be empty".to_string());
    }

    if fields.guests == 0 {
        return Err("A booking needs at least one guest".to_string());
    }

    if !fields.amount.is_finite() || fields.amount < 0.0 {
        return Err(format!(
            "Amount must be a non-negative number, got {}",
            fields.amount
        ));
    }

    Ok(())
}
