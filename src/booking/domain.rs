//! Booking fields, patch and status.

use crate::booking::validation::validate_booking_fields;
use crate::store::{Domain, Lifecycle, StatusPhase};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
    ];
}

impl Lifecycle for BookingStatus {
    fn initial() -> Self {
        BookingStatus::Pending
    }

    fn phase(&self) -> StatusPhase {
        match self {
            BookingStatus::Pending => StatusPhase::Pending,
            BookingStatus::Confirmed => StatusPhase::Confirmed,
            BookingStatus::Cancelled => StatusPhase::Cancelled,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            other => Err(format!(
                "Invalid booking status: {}. Must be pending, confirmed, or cancelled",
                other
            )),
        }
    }
}

/// Caller-supplied booking fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Number of people in the party
    pub guests: u32,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,
}

/// Partial booking change; `None` leaves the field as it is.
///
/// Optional fields take `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<Option<String>>,
    pub guests: Option<u32>,
    pub amount: Option<f64>,
    pub note: Option<Option<String>>,
    pub visit_date: Option<Option<NaiveDate>>,
}

impl BookingPatch {
    pub fn is_empty(&self) -> bool {
        *self == BookingPatch::default()
    }
}

/// Marker type binding the booking fields to the list store
#[derive(Debug, Clone, Copy)]
pub struct Booking;

impl Domain for Booking {
    type Fields = BookingFields;
    type Patch = BookingPatch;
    type Status = BookingStatus;

    const COLLECTION: &'static str = "bookings";
    const SEQUENCE_PREFIX: &'static str = "DLB";

    fn merge(fields: &mut BookingFields, patch: BookingPatch) {
        if let Some(name) = patch.name {
            fields.name = name;
        }
        if let Some(email) = patch.email {
            fields.email = email;
        }
        if let Some(phone) = patch.phone {
            fields.phone = phone;
        }
        if let Some(country) = patch.country {
            fields.country = country;
        }
        if let Some(guests) = patch.guests {
            fields.guests = guests;
        }
        if let Some(amount) = patch.amount {
            fields.amount = amount;
        }
        if let Some(note) = patch.note {
            fields.note = note;
        }
        if let Some(visit_date) = patch.visit_date {
            fields.visit_date = visit_date;
        }
    }

    fn search_fields(fields: &BookingFields) -> Vec<&str> {
        vec![
            fields.name.as_str(),
            fields.email.as_str(),
            fields.phone.as_str(),
        ]
    }

    fn amount(fields: &BookingFields) -> f64 {
        fields.amount
    }

    fn validate(fields: &BookingFields) -> Result<(), String> {
        validate_booking_fields(fields)
    }
}
