//! Plain JSON snapshots of messages, the `toObject` view of the bindings.
//!
//! Keys are the lowerCamelCase field names, repeated fields get a `List` suffix, members of a
//! oneof appear directly on their parent and bytes are base64 encoded. Unset optional fields and
//! sub-messages are `null`. `google.protobuf.Struct` and `Value` are rendered as the JSON they
//! describe.

use base64::{engine::general_purpose, Engine};

pub use serde_json::{Map, Value};

use crate::common::config::Kind;
use crate::google;

pub trait ToObject {
    fn to_object(&self) -> Value;
}

pub fn bytes_to_object(value: &[u8]) -> Value {
    Value::String(general_purpose::STANDARD.encode(value))
}

macro_rules! json_scalars
{
    ( $($t:ty),* ) =>
    {
        $(
          impl ToObject for $t {
              fn to_object(&self) -> Value {
                  Value::from(*self)
              }
          }
        )*
    }
}

json_scalars!(bool, i32, i64, u32, u64);

macro_rules! json_floats
{
    ( $($t:ty),* ) =>
    {
        $(
          impl ToObject for $t {
              fn to_object(&self) -> Value {
                  serde_json::Number::from_f64(f64::from(*self)).map_or(Value::Null, Value::Number)
              }
          }
        )*
    }
}

json_floats!(f32, f64);

impl ToObject for String {
    fn to_object(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToObject> ToObject for Option<T> {
    fn to_object(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToObject::to_object)
    }
}

impl<T: ToObject> ToObject for Vec<T> {
    fn to_object(&self) -> Value {
        Value::Array(self.iter().map(ToObject::to_object).collect())
    }
}

impl ToObject for google::protobuf::Timestamp {
    fn to_object(&self) -> Value {
        let mut map = Map::new();
        map.insert("seconds".to_string(), Value::from(self.seconds));
        map.insert("nanos".to_string(), Value::from(self.nanos));
        Value::Object(map)
    }
}

impl ToObject for google::protobuf::Value {
    fn to_object(&self) -> Value {
        match self.kind.as_ref().map(Kind::try_from) {
            Some(Ok(kind)) => (&kind).into(),
            _ => Value::Null,
        }
    }
}

impl ToObject for google::protobuf::Struct {
    fn to_object(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_object()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::common::object::ToObject;
    use crate::google::protobuf::{value::Kind, Struct, Timestamp, Value};
    use crate::proto::app::v1::{
        shared_secret, upload_module_file_request::ModuleFile, GetRobotPartLogsRequest,
        ListModulesRequest, Location, LocationAuth, ModuleFileInfo, Organization, RobotPart,
        SharedSecret, UploadModuleFileRequest,
    };
    use crate::proto::component::servo::v1::MoveRequest;

    #[test_log::test]
    fn test_default_object() {
        assert_eq!(
            Organization::default().to_object(),
            json!({
                "id": "",
                "name": "",
                "createdOn": null,
                "publicNamespace": "",
                "defaultRegion": "",
                "cid": null
            })
        );
        assert_eq!(
            GetRobotPartLogsRequest::default().to_object(),
            json!({"id": "", "errorsOnly": false, "filter": null, "pageToken": null})
        );
        assert_eq!(
            ListModulesRequest {
                organization_id: Some("o1".to_owned())
            }
            .to_object(),
            json!({"organizationId": "o1"})
        );
    }

    #[test_log::test]
    fn test_nested_object() {
        let location = Location {
            id: "l1".to_owned(),
            auth: Some(LocationAuth {
                secret: "legacy".to_owned(),
                location_id: "l1".to_owned(),
                secrets: vec![SharedSecret {
                    id: "s1".to_owned(),
                    secret: "abc".to_owned(),
                    created_on: Some(Timestamp {
                        seconds: 12,
                        nanos: 3,
                    }),
                    state: shared_secret::State::Enabled as i32,
                }],
            }),
            robot_count: 2,
            ..Default::default()
        };
        let object = location.to_object();
        assert_eq!(object["id"], json!("l1"));
        assert_eq!(object["robotCount"], json!(2));
        assert_eq!(object["organizationsList"], json!([]));
        assert_eq!(object["config"], json!(null));
        assert_eq!(
            object["auth"],
            json!({
                "secret": "legacy",
                "locationId": "l1",
                "secretsList": [{
                    "id": "s1",
                    "secret": "abc",
                    "createdOn": {"seconds": 12, "nanos": 3},
                    "state": 1
                }]
            })
        );
    }

    #[test_log::test]
    fn test_struct_object() {
        let part = RobotPart {
            robot_config: Some(Struct {
                fields: BTreeMap::from([
                    (
                        "name".to_owned(),
                        Value {
                            kind: Some(Kind::StringValue("arm".to_owned())),
                        },
                    ),
                    (
                        "speed".to_owned(),
                        Value {
                            kind: Some(Kind::NumberValue(0.5)),
                        },
                    ),
                    ("unset".to_owned(), Value { kind: None }),
                ]),
            }),
            ..Default::default()
        };
        assert_eq!(
            part.to_object()["robotConfig"],
            json!({"name": "arm", "speed": 0.5, "unset": null})
        );
        assert_eq!(part.to_object()["secretsList"], json!([]));

        let request = MoveRequest {
            name: "servo".to_owned(),
            angle_deg: 90,
            extra: None,
        };
        assert_eq!(
            request.to_object(),
            json!({"name": "servo", "angleDeg": 90, "extra": null})
        );
    }

    #[test_log::test]
    fn test_oneof_object() {
        assert_eq!(
            UploadModuleFileRequest::default().to_object(),
            json!({})
        );
        let chunk = UploadModuleFileRequest {
            module_file: Some(ModuleFile::File(vec![0xde, 0xad, 0xbe, 0xef])),
        };
        assert_eq!(chunk.to_object(), json!({"file": "3q2+7w=="}));

        let info = UploadModuleFileRequest {
            module_file: Some(ModuleFile::ModuleFileInfo(ModuleFileInfo {
                module_id: "acme:thermo".to_owned(),
                organization_id: None,
                version: "1.0.0".to_owned(),
                platform: "linux/arm64".to_owned(),
            })),
        };
        assert_eq!(
            info.to_object(),
            json!({
                "moduleFileInfo": {
                    "moduleId": "acme:thermo",
                    "organizationId": null,
                    "version": "1.0.0",
                    "platform": "linux/arm64"
                }
            })
        );
    }
}
