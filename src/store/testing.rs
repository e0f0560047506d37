//! Minimal domain used by the store's unit tests.

use crate::store::contract::{Domain, Lifecycle, StatusPhase};
use crate::store::ids::format_sequence;
use crate::store::record::Record;
use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Sold,
    Void,
}

impl Lifecycle for TicketStatus {
    fn initial() -> Self {
        TicketStatus::Open
    }

    fn phase(&self) -> StatusPhase {
        match self {
            TicketStatus::Open => StatusPhase::Pending,
            TicketStatus::Sold => StatusPhase::Confirmed,
            TicketStatus::Void => StatusPhase::Cancelled,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Sold => "Sold",
            TicketStatus::Void => "Void",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFields {
    pub holder: String,
    pub email: String,
    pub price: f64,
    pub seats: u32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Default)]
pub struct TicketPatch {
    pub holder: Option<String>,
    pub email: Option<String>,
    pub price: Option<f64>,
    pub seats: Option<u32>,
    pub note: Option<String>,
}

pub struct Ticket;

impl Domain for Ticket {
    type Fields = TicketFields;
    type Patch = TicketPatch;
    type Status = TicketStatus;

    const COLLECTION: &'static str = "tickets";
    const SEQUENCE_PREFIX: &'static str = "TK";

    fn merge(fields: &mut TicketFields, patch: TicketPatch) {
        if let Some(holder) = patch.holder {
            fields.holder = holder;
        }
        if let Some(email) = patch.email {
            fields.email = email;
        }
        if let Some(price) = patch.price {
            fields.price = price;
        }
        if let Some(seats) = patch.seats {
            fields.seats = seats;
        }
        if let Some(note) = patch.note {
            fields.note = Some(note);
        }
    }

    fn search_fields(fields: &TicketFields) -> Vec<&str> {
        vec![fields.holder.as_str(), fields.email.as_str()]
    }

    fn amount(fields: &TicketFields) -> f64 {
        fields.price
    }

    fn validate(fields: &TicketFields) -> Result<(), String> {
        if fields.seats == 0 {
            return Err("seats must be at least 1".to_string());
        }
        Ok(())
    }
}

pub fn ticket(holder: &str, price: f64) -> TicketFields {
    TicketFields {
        holder: holder.to_string(),
        email: format!("{}@example.com", holder),
        price,
        seats: 1,
        note: None,
    }
}

/// Prebuilt record `i` (0-based): holder `holder-i`, code `TK{i+1}`, created
/// `i` seconds after a fixed base instant.
pub fn ticket_record(i: usize, status: TicketStatus) -> Record<Ticket> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let at = base + Duration::seconds(i as i64);
    Record {
        id: format!("id-{}", i),
        sequence_code: format_sequence(Ticket::SEQUENCE_PREFIX, i as u64 + 1),
        status,
        fields: TicketFields {
            holder: format!("holder-{}", i),
            email: format!("guest{}@example.com", i),
            price: 10.0 * (i as f64 + 1.0),
            seats: 1,
            note: None,
        },
        created_at: at,
        updated_at: at,
    }
}
