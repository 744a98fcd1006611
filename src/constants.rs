//! Application constants for the course schedule importer
//!
//! This module contains the registration-export layout, the header vocabulary
//! and the calendar defaults used throughout the crate.

use crate::app::models::Field;

// =============================================================================
// Registration Export Layout
// =============================================================================

/// Row holding the column headers (1-indexed)
pub const DEFAULT_HEADER_ROW: u32 = 3;

/// First row holding course data (1-indexed)
pub const DEFAULT_FIRST_DATA_ROW: u32 = 4;

/// Last row scanned for course data (1-indexed)
pub const DEFAULT_LAST_DATA_ROW: u32 = 999;

/// Registration status of rows that become courses
pub const REGISTERED_STATUS: &str = "Registered";

/// Header label to field vocabulary of the registration export
pub const HEADER_FIELDS: &[(&str, Field)] = &[
    ("", Field::FullDesc),
    ("Course Listing", Field::CourseName),
    ("Credits", Field::Credits),
    ("Grading Basis", Field::GradingBasis),
    ("Section", Field::Section),
    ("Instructional Format", Field::Format),
    ("Delivery Mode", Field::DeliveryMode),
    ("Meeting Patterns", Field::MeetingPatterns),
    ("Registration Status", Field::RegistrationStatus),
    ("Instructor", Field::Instructor),
    ("Start Date", Field::StartDate),
    ("End Date", Field::EndDate),
];

// =============================================================================
// Spreadsheet Date Serials
// =============================================================================

/// Serial number of the fictional 1900-02-29 kept by the 1900 date system
pub const LEAP_BUG_SERIAL: i64 = 60;

// =============================================================================
// Calendar Export
// =============================================================================

/// Time zone the registration times are expressed in
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Default file name of the exported calendar
pub const DEFAULT_CALENDAR_FILE: &str = "schedule.ics";

/// PRODID written into exported calendars
pub const DEFAULT_PRODUCT_ID: &str = "-//course-schedule//EN";

/// Domain suffix of generated event UIDs
pub const UID_DOMAIN: &str = "course-schedule";

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "course-schedule";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the calendar time zone
pub const ENV_TIMEZONE: &str = "COURSE_SCHEDULE_TIMEZONE";
