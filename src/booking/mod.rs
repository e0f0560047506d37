//! Audience booking domain: the records kept by the booking list store.

pub mod commands;
pub mod domain;
pub mod format;
pub mod validation;

pub use commands::BookingCommandService;
pub use domain::{Booking, BookingFields, BookingPatch, BookingStatus};

use crate::store::{ListStore, Page, Record};

pub type BookingStore = ListStore<Booking>;
pub type BookingRecord = Record<Booking>;
pub type BookingPage = Page<Booking>;
