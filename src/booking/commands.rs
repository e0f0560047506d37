use crate::booking::domain::{BookingFields, BookingStatus};
use crate::error::ApiError;
use crate::store::StatusFilter;
use chrono::NaiveDate;

pub struct BookingCommandService;

impl BookingCommandService {
    pub fn parse_status(status_str: &str) -> Result<BookingStatus, ApiError> {
        status_str.parse().map_err(ApiError::InvalidArgument)
    }

    /// `all` (or nothing) means no status filter.
    pub fn parse_status_filter(
        status_str: Option<&str>,
    ) -> Result<StatusFilter<BookingStatus>, ApiError> {
        match status_str.map(str::trim) {
            None => Ok(StatusFilter::All),
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => Ok(StatusFilter::All),
            Some(s) => Ok(StatusFilter::Only(Self::parse_status(s)?)),
        }
    }

    pub fn parse_visit_date(date_str: &str) -> Result<NaiveDate, ApiError> {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
            ApiError::InvalidArgument(format!(
                "Invalid visit date '{}': {} (expected YYYY-MM-DD)",
                date_str, e
            ))
        })
    }

    /// Resolve the page size for a listing: default when absent, rejected when
    /// zero or above the configured maximum.
    pub fn resolve_limit(
        requested: Option<usize>,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<usize, ApiError> {
        let limit = requested.unwrap_or(default_limit);
        if limit == 0 {
            return Err(ApiError::InvalidArgument(
                "Page limit must be at least 1".to_string(),
            ));
        }
        if limit > max_limit {
            return Err(ApiError::InvalidArgument(format!(
                "Page limit {} exceeds the maximum of {}",
                limit, max_limit
            )));
        }
        Ok(limit)
    }

    pub fn resolve_page(requested: Option<usize>) -> Result<usize, ApiError> {
        match requested {
            None => Ok(1),
            Some(0) => Err(ApiError::InvalidArgument(
                "Page numbers start at 1".to_string(),
            )),
            Some(p) => Ok(p),
        }
    }

    /// Patch value for a clearable text field: an empty string clears it.
    pub fn clearable(value: Option<&str>) -> Option<Option<String>> {
        value.map(|v| {
            if v.trim().is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        })
    }

    /// Patch value for the visit date: an empty string clears it.
    pub fn clearable_visit_date(
        value: Option<&str>,
    ) -> Result<Option<Option<NaiveDate>>, ApiError> {
        match value {
            None => Ok(None),
            Some(v) if v.trim().is_empty() => Ok(Some(None)),
            Some(v) => Ok(Some(Some(Self::parse_visit_date(v)?))),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn build_booking_fields(
        name: String,
        email: String,
        phone: String,
        country: Option<String>,
        guests: u32,
        amount: f64,
        note: Option<String>,
        visit_date: Option<&str>,
    ) -> Result<BookingFields, ApiError> {
        let visit_date = visit_date.map(Self::parse_visit_date).transpose()?;
        Ok(BookingFields {
            name,
            email,
            phone,
            country,
            guests,
            amount,
            note,
            visit_date,
        })
    }
}
