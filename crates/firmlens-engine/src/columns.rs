//! Header names of the firm's timekeeping export.
//!
//! The export uses a fixed naming scheme; only a subset of columns is
//! required (see loader). "Attorney level" is derived, never read.

pub const ACTIVITY_DATE: &str = "Activity date";
pub const ACTIVITY_YEAR: &str = "Activity Year";
pub const ACTIVITY_MONTH: &str = "Activity month";
pub const ACTIVITY_QUARTER: &str = "Activity quarter";

pub const USER_FULL_NAME: &str = "User full name (first, last)";
pub const PRACTICE_AREA: &str = "Practice area";
pub const MATTER_LOCATION: &str = "Matter location";
pub const MATTER_STATUS: &str = "Matter status";
pub const MATTER_BILLING_METHOD: &str = "Matter billing method";
pub const COMPANY_NAME: &str = "Company name";
pub const MATTER_NUMBER: &str = "Matter number";

pub const BILLED_HOURS: &str = "Billed hours";
pub const UNBILLED_HOURS: &str = "Unbilled hours";
pub const NON_BILLABLE_HOURS: &str = "Non-billable hours";
pub const BILLED_AND_UNBILLED_HOURS: &str = "Billed & Unbilled hours";
pub const BILLED_HOURS_VALUE: &str = "Billed hours value";
pub const UNBILLED_HOURS_VALUE: &str = "Unbilled hours value";
pub const NON_BILLABLE_HOURS_VALUE: &str = "Non-billable hours value";
pub const BILLED_AND_UNBILLED_HOURS_VALUE: &str = "Billed & Unbilled hours value";
pub const TRACKED_HOURS: &str = "Tracked hours";
pub const UTILIZATION_RATE: &str = "Utilization rate";
pub const USER_RATE: &str = "User rate";

/// Derived at load time from the injected level table.
pub const ATTORNEY_LEVEL: &str = "Attorney level";

/// Column order used when exporting a filtered table back to CSV.
pub const EXPORT_ORDER: &[&str] = &[
    ACTIVITY_DATE,
    ACTIVITY_YEAR,
    ACTIVITY_MONTH,
    ACTIVITY_QUARTER,
    USER_FULL_NAME,
    ATTORNEY_LEVEL,
    PRACTICE_AREA,
    MATTER_LOCATION,
    MATTER_STATUS,
    MATTER_BILLING_METHOD,
    COMPANY_NAME,
    MATTER_NUMBER,
    BILLED_HOURS,
    UNBILLED_HOURS,
    NON_BILLABLE_HOURS,
    BILLED_AND_UNBILLED_HOURS,
    BILLED_HOURS_VALUE,
    UNBILLED_HOURS_VALUE,
    NON_BILLABLE_HOURS_VALUE,
    BILLED_AND_UNBILLED_HOURS_VALUE,
    TRACKED_HOURS,
    UTILIZATION_RATE,
    USER_RATE,
];
