//! Core types shared across the store and the booking domain.

use chrono::{DateTime, Utc};

/// RecordId: opaque identifier assigned by the store at creation
pub type RecordId = String;

/// Timestamp: UTC instant, serialized as RFC 3339
pub type Timestamp = DateTime<Utc>;
