use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A single result cell as produced by a driver backend.
///
/// Backends map their native column values into this enum; see the
/// per-backend `value_codec` modules.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// Date without time zone
    Date(NaiveDate),
    /// Time without date
    Time(NaiveTime),
    /// Date and time without time zone
    DateTime(NaiveDateTime),
}
