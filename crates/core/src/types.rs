/// Election primary keys are PostgreSQL SERIAL.
pub type DbId = i32;

/// Election windows are stored as `TIMESTAMP` without time zone and are
/// compared against server-local wall-clock time.
pub type Timestamp = chrono::NaiveDateTime;
