//! Spreadsheet date-serial conversion
//!
//! Registration exports store dates as serial day numbers in the 1900 date
//! system: serial 1 is 1900-01-01 and serial 60 is the non-existent
//! 1900-02-29, so every later serial is one day ahead of a plain day count.

use chrono::{Duration, NaiveDate};

use crate::app::models::SheetDate;
use crate::constants::LEAP_BUG_SERIAL;

/// Convert a date serial to a calendar date
///
/// The fractional (time of day) part is ignored. Serials below 1 have no
/// calendar date and yield `None`.
pub fn date_from_serial(serial: f64) -> Option<SheetDate> {
    if !serial.is_finite() {
        return None;
    }

    let days = serial.floor() as i64;
    if days < 1 {
        return None;
    }

    if days == LEAP_BUG_SERIAL {
        return Some(SheetDate::new(1900, 2, 29));
    }

    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let adjusted = if days > LEAP_BUG_SERIAL { days - 1 } else { days };
    let date = base.checked_add_signed(Duration::try_days(adjusted)?)?;

    Some(SheetDate::from(date))
}
