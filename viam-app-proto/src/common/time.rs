use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::google::protobuf::Timestamp;

/// 0001-01-01T00:00:00Z
pub const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z
pub const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("seconds {0} are outside of 0001-01-01 to 9999-12-31")]
    SecondsOutOfRange(i64),
    #[error("nanos {0} are outside of 0 to 999999999")]
    NanosOutOfRange(i32),
}

pub fn validate(timestamp: &Timestamp) -> Result<(), TimestampError> {
    if !(MIN_TIMESTAMP_SECONDS..=MAX_TIMESTAMP_SECONDS).contains(&timestamp.seconds) {
        return Err(TimestampError::SecondsOutOfRange(timestamp.seconds));
    }
    if !(0..NANOS_PER_SECOND).contains(&timestamp.nanos) {
        return Err(TimestampError::NanosOutOfRange(timestamp.nanos));
    }
    Ok(())
}

pub fn to_datetime(timestamp: &Timestamp) -> Result<DateTime<Utc>, TimestampError> {
    validate(timestamp)?;
    DateTime::from_timestamp(timestamp.seconds, timestamp.nanos as u32)
        .ok_or(TimestampError::SecondsOutOfRange(timestamp.seconds))
}

pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Timestamp {
    // chrono folds leap seconds into nanos past one second
    let nanos = datetime
        .timestamp_subsec_nanos()
        .min(NANOS_PER_SECOND as u32 - 1);
    Timestamp {
        seconds: datetime.timestamp(),
        nanos: nanos as i32,
    }
}

pub fn now() -> Timestamp {
    from_datetime(&Utc::now())
}
