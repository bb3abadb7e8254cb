use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::common::time::{self, TimestampError};
use crate::google::protobuf::{value::Kind, Struct, Value};
use crate::proto::app::v1::LogEntry;

impl LogEntry {
    /// Builds an entry stamped with the current time. The caller struct mirrors the one the
    /// robot server reports: `Defined`, `File` and `Line`.
    pub fn from_record(record: &::log::Record<'_>, host: &str) -> Self {
        LogEntry {
            host: host.to_string(),
            level: record.level().as_str().to_lowercase(),
            time: Some(time::now()),
            logger_name: record.target().to_string(),
            message: format!("{}", record.args()),
            caller: Some(Struct {
                fields: BTreeMap::from([
                    (
                        "Defined".to_string(),
                        Value {
                            kind: Some(Kind::BoolValue(record.file().is_some())),
                        },
                    ),
                    (
                        "File".to_string(),
                        Value {
                            kind: record.file().map(|f| Kind::StringValue(f.to_string())),
                        },
                    ),
                    (
                        "Line".to_string(),
                        Value {
                            kind: record.line().map(|l| Kind::NumberValue(l as f64)),
                        },
                    ),
                ]),
            }),
            stack: "".to_string(),
            fields: vec![],
        }
    }

    pub fn datetime(&self) -> Option<Result<DateTime<Utc>, TimestampError>> {
        self.time.as_ref().map(time::to_datetime)
    }
}

impl From<&::log::Record<'_>> for LogEntry {
    fn from(value: &::log::Record) -> Self {
        LogEntry::from_record(value, "")
    }
}

#[cfg(test)]
mod tests {
    use crate::common::config::Attributes;
    use crate::proto::app::v1::LogEntry;

    #[test_log::test]
    fn test_entry_from_record() {
        let entry = LogEntry::from_record(
            &::log::Record::builder()
                .args(format_args!("motor {} stalled", "m1"))
                .level(::log::Level::Warn)
                .target("robot::motor")
                .file(Some("src/motor.rs"))
                .line(Some(42))
                .build(),
            "esp32",
        );
        assert_eq!(entry.host, "esp32");
        assert_eq!(entry.level, "warn");
        assert_eq!(entry.logger_name, "robot::motor");
        assert_eq!(entry.message, "motor m1 stalled");
        assert_eq!(entry.get_attribute::<String>("File"), Ok("src/motor.rs".to_owned()));
        assert_eq!(entry.get_attribute::<u32>("Line"), Ok(42));
        assert_eq!(entry.get_attribute::<bool>("Defined"), Ok(true));
        assert!(matches!(entry.datetime(), Some(Ok(_))));

        let entry: LogEntry = (&::log::Record::builder()
            .args(format_args!("boot"))
            .level(::log::Level::Info)
            .build())
            .into();
        assert_eq!(entry.host, "");
        assert_eq!(entry.level, "info");
        assert!(entry.get_attribute::<u32>("Line").is_err());
        assert_eq!(LogEntry::default().datetime(), None);
    }
}
