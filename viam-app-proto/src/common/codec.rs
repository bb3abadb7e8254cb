use bytes::{BufMut, Bytes, BytesMut};
use prost::{EncodeError, Message};
use serde::Deserialize;
use thiserror::Error;

use super::wire::{read_varint, EnumValueError, FieldScanner, ScanError, WireSchema, WireType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("message is truncated")]
    Truncated,
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid tag: {0}")]
    InvalidTag(String),
    #[error("invalid wire type: {0}")]
    InvalidWireType(String),
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,
    #[error(transparent)]
    InvalidEnumValue(#[from] EnumValueError),
    #[error("recursion limit reached")]
    RecursionLimitReached,
    #[error("message of {size} bytes exceeds the limit of {limit} bytes")]
    MessageTooLarge { size: usize, limit: usize },
    #[error("{0}")]
    Malformed(String),
}

impl From<ScanError> for DecodeError {
    fn from(value: ScanError) -> Self {
        match value {
            ScanError::Truncated(_) => Self::Truncated,
            ScanError::InvalidVarint(_) => Self::InvalidVarint,
            ScanError::InvalidTag { .. } => Self::InvalidTag(value.to_string()),
            ScanError::InvalidWireType { .. } => Self::InvalidWireType(value.to_string()),
            ScanError::RecursionLimitReached(_) => Self::RecursionLimitReached,
        }
    }
}

// prost only exposes a description, so the kind is recovered from it
impl From<prost::DecodeError> for DecodeError {
    fn from(value: prost::DecodeError) -> Self {
        let description = value.to_string();
        if description.contains("buffer underflow")
            || description.contains("delimited length exceeded")
        {
            Self::Truncated
        } else if description.contains("invalid varint") {
            Self::InvalidVarint
        } else if description.contains("invalid tag value") || description.contains("invalid key value")
        {
            Self::InvalidTag(description)
        } else if description.contains("invalid wire type") {
            Self::InvalidWireType(description)
        } else if description.contains("not UTF-8") || description.contains("invalid string value")
        {
            Self::InvalidUtf8
        } else if description.contains("recursion limit reached") {
            Self::RecursionLimitReached
        } else {
            Self::Malformed(description)
        }
    }
}

/// Knobs for decoding. Deserializable so it can be embedded into an application's own config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Reject enum fields holding values the schema does not declare.
    pub strict_enums: bool,
    /// Reject inputs larger than this many bytes.
    pub max_message_size: Option<usize>,
    /// Emit a debug log line for every skipped unknown field.
    pub log_unknown_fields: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_enums: true,
            max_message_size: None,
            log_unknown_fields: true,
        }
    }
}

pub fn decode<M>(buf: &[u8]) -> Result<M, DecodeError>
where
    M: Message + Default + WireSchema,
{
    decode_with(buf, &CodecConfig::default())
}

/// Decodes a whole message or fails; a partially populated message is never returned.
/// Unknown fields are skipped.
pub fn decode_with<M>(buf: &[u8], config: &CodecConfig) -> Result<M, DecodeError>
where
    M: Message + Default + WireSchema,
{
    if let Some(limit) = config.max_message_size {
        if buf.len() > limit {
            return Err(DecodeError::MessageTooLarge {
                size: buf.len(),
                limit,
            });
        }
    }
    for field in FieldScanner::new(buf) {
        let field = field?;
        let declared = M::declares_field(field.number);
        if declared && field.wire_type == WireType::StartGroup {
            return Err(DecodeError::InvalidWireType(format!(
                "field {} of {} is encoded as a group",
                field.number,
                M::NAME
            )));
        }
        if config.log_unknown_fields && !declared {
            log::debug!(
                "skipping unknown field {} ({:?}, {} bytes) in {}",
                field.number,
                field.wire_type,
                field.len,
                M::NAME
            );
        }
    }
    let message = M::decode(buf)?;
    if config.strict_enums {
        message.check_enums()?;
    }
    log::trace!("decoded {} from {} bytes", M::NAME, buf.len());
    Ok(message)
}

pub fn encode<M>(message: &M) -> Vec<u8>
where
    M: Message + WireSchema,
{
    let buf = message.encode_to_vec();
    log::trace!("encoded {} into {} bytes", M::NAME, buf.len());
    buf
}

/// Encodes into a caller provided buffer, which fails only when the buffer lacks capacity.
pub fn encode_to<M, B>(message: &M, buf: &mut B) -> Result<(), EncodeError>
where
    M: Message,
    B: BufMut,
{
    message.encode(buf)
}

/// Encodes a sequence of messages, each prefixed by its length as a varint.
pub fn encode_length_delimited<'a, M, I>(messages: I) -> Result<Bytes, EncodeError>
where
    M: Message + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut buf = BytesMut::new();
    for message in messages {
        let len = message.encoded_len();
        buf.reserve(len + prost::length_delimiter_len(len));
        message.encode_length_delimited(&mut buf)?;
    }
    Ok(buf.freeze())
}

pub fn decode_length_delimited<M>(buf: &[u8], config: &CodecConfig) -> Result<Vec<M>, DecodeError>
where
    M: Message + Default + WireSchema,
{
    let mut messages = vec![];
    let mut offset = 0;
    while offset < buf.len() {
        let (len, start) = read_varint(buf, offset)?;
        let end = usize::try_from(len)
            .ok()
            .and_then(|len| start.checked_add(len))
            .filter(|end| *end <= buf.len())
            .ok_or(DecodeError::Truncated)?;
        messages.push(decode_with(&buf[start..end], config)?);
        offset = end;
    }
    Ok(messages)
}

/// `serializeBinary`/`deserializeBinary` for every generated binding.
pub trait BinaryMessage: Message + Default + WireSchema + Sized {
    fn serialize_binary(&self) -> Vec<u8> {
        encode(self)
    }

    fn deserialize_binary(buf: &[u8]) -> Result<Self, DecodeError> {
        decode(buf)
    }

    fn deserialize_binary_with(buf: &[u8], config: &CodecConfig) -> Result<Self, DecodeError> {
        decode_with(buf, config)
    }
}

impl<M> BinaryMessage for M where M: Message + Default + WireSchema {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use prost::encoding::encode_varint;
    use prost::Message;

    use crate::common::codec::{
        decode, decode_length_delimited, decode_with, encode, encode_length_delimited, encode_to,
        BinaryMessage, CodecConfig, DecodeError,
    };
    use crate::common::object::ToObject;
    use crate::common::wire::{EnumValueError, WireSchema};
    use crate::google::protobuf::{value::Kind, Struct, Timestamp, Value};
    use crate::proto::app::v1 as app;
    use crate::proto::app::v1::{
        shared_secret, upload_module_file_request::ModuleFile, GetRobotPartLogsRequest,
        ListOrganizationMembersResponse, Location, LocationAuth, LocationOrganization, LogEntry,
        Model, Module, ModuleFileInfo, Organization, OrganizationInvite, OrganizationMember,
        RobotPart, RobotPartHistoryEntry, SharedSecret, StorageConfig, UpdateFragmentRequest,
        UploadModuleFileRequest, Uploads, VersionHistory, Visibility,
    };
    use crate::proto::component::servo::v1 as servo;

    fn secret(id: &str, state: shared_secret::State) -> SharedSecret {
        let mut secret = SharedSecret {
            id: id.to_owned(),
            secret: format!("{}-payload", id),
            created_on: Some(Timestamp {
                seconds: 1_690_000_000,
                nanos: 42,
            }),
            ..Default::default()
        };
        secret.set_state(state);
        secret
    }

    fn full_robot_part() -> RobotPart {
        RobotPart {
            id: "p1".to_owned(),
            name: "main".to_owned(),
            dns_name: "main".to_owned(),
            secret: "legacy".to_owned(),
            robot: "r1".to_owned(),
            location_id: "l1".to_owned(),
            robot_config: Some(Struct {
                fields: BTreeMap::from([(
                    "components".to_owned(),
                    Value {
                        kind: Some(Kind::NumberValue(2.0)),
                    },
                )]),
            }),
            last_access: Some(Timestamp {
                seconds: 10,
                nanos: 0,
            }),
            user_supplied_info: Some(Struct::default()),
            main_part: true,
            fqdn: "main.l1.viam.cloud".to_owned(),
            local_fqdn: "main.l1.local.viam.cloud".to_owned(),
            created_on: Some(Timestamp {
                seconds: 5,
                nanos: 1,
            }),
            secrets: vec![
                secret("s1", shared_secret::State::Enabled),
                secret("s2", shared_secret::State::Disabled),
            ],
        }
    }

    #[test_log::test]
    fn test_robot_part_secrets_keep_order() {
        let part = RobotPart {
            id: "p1".to_owned(),
            secrets: vec![
                SharedSecret {
                    id: "s1".to_owned(),
                    state: shared_secret::State::Enabled as i32,
                    ..Default::default()
                },
                SharedSecret {
                    id: "s2".to_owned(),
                    state: shared_secret::State::Disabled as i32,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let decoded = RobotPart::deserialize_binary(&part.serialize_binary()).unwrap();
        assert_eq!(decoded.id, "p1");
        assert_eq!(decoded.secrets.len(), 2);
        assert_eq!(decoded.secrets[0].id, "s1");
        assert_eq!(decoded.secrets[0].state(), shared_secret::State::Enabled);
        assert_eq!(decoded.secrets[1].id, "s2");
        assert_eq!(decoded.secrets[1].state(), shared_secret::State::Disabled);
        assert_eq!(decoded, part);
    }

    #[test_log::test]
    fn test_round_trip_fully_set() {
        let part = full_robot_part();
        assert_eq!(decode::<RobotPart>(&encode(&part)), Ok(part.clone()));

        let entry = RobotPartHistoryEntry {
            part: "p1".to_owned(),
            robot: "r1".to_owned(),
            when: Some(Timestamp {
                seconds: 20,
                nanos: 0,
            }),
            old: Some(part),
        };
        assert_eq!(decode::<RobotPartHistoryEntry>(&encode(&entry)), Ok(entry));

        let location = Location {
            id: "l1".to_owned(),
            name: "lab".to_owned(),
            parent_location_id: "l0".to_owned(),
            auth: Some(LocationAuth {
                secret: "legacy".to_owned(),
                location_id: "l1".to_owned(),
                secrets: vec![secret("s1", shared_secret::State::Enabled)],
            }),
            organizations: vec![
                LocationOrganization {
                    organization_id: "o1".to_owned(),
                    primary: true,
                },
                LocationOrganization {
                    organization_id: "o2".to_owned(),
                    primary: false,
                },
            ],
            created_on: Some(Timestamp {
                seconds: 1,
                nanos: 2,
            }),
            robot_count: 3,
            config: Some(StorageConfig {
                region: "us-central".to_owned(),
            }),
        };
        assert_eq!(decode::<Location>(&encode(&location)), Ok(location));

        let model = Model {
            api: "rdk:component:sensor".to_owned(),
            model: "acme:sensors:thermo".to_owned(),
        };
        let module = Module {
            module_id: "acme:thermo".to_owned(),
            name: "thermo".to_owned(),
            visibility: Visibility::Public as i32,
            versions: vec![VersionHistory {
                version: "1.0.0".to_owned(),
                files: vec![Uploads {
                    platform: "linux/arm64".to_owned(),
                    uploaded_at: Some(Timestamp {
                        seconds: 3,
                        nanos: 0,
                    }),
                }],
                models: vec![model.clone()],
                entrypoint: "bin/thermo".to_owned(),
            }],
            url: "https://app.viam.com/module/acme/thermo".to_owned(),
            description: "thermometers".to_owned(),
            models: vec![model],
            total_robot_usage: 1 << 40,
            total_organization_usage: 7,
            organization_id: "o1".to_owned(),
            entrypoint: "bin/thermo".to_owned(),
            public_namespace: "acme".to_owned(),
        };
        assert_eq!(decode::<Module>(&encode(&module)), Ok(module));

        let members = ListOrganizationMembersResponse {
            organization_id: "o1".to_owned(),
            members: vec![OrganizationMember {
                user_id: "u1".to_owned(),
                emails: vec!["a@acme.com".to_owned(), "b@acme.com".to_owned()],
                date_added: Some(Timestamp::default()),
                last_login: None,
            }],
            invites: vec![OrganizationInvite {
                organization_id: "o1".to_owned(),
                email: "c@acme.com".to_owned(),
                created_on: None,
                robot_count: 2,
            }],
        };
        assert_eq!(
            decode::<ListOrganizationMembersResponse>(&encode(&members)),
            Ok(members)
        );

        let log = LogEntry {
            host: "esp32".to_owned(),
            level: "info".to_owned(),
            time: Some(Timestamp {
                seconds: 9,
                nanos: 9,
            }),
            logger_name: "robot".to_owned(),
            message: "hello".to_owned(),
            caller: Some(Struct::default()),
            stack: "".to_owned(),
            fields: vec![Struct::default(), Struct::default()],
        };
        assert_eq!(decode::<LogEntry>(&encode(&log)), Ok(log));
    }

    #[test_log::test]
    fn test_default_omission() {
        assert!(encode(&RobotPart::default()).is_empty());
        assert!(encode(&Organization::default()).is_empty());
        assert!(encode(&Location::default()).is_empty());

        let org = Organization {
            id: "".to_owned(),
            name: "".to_owned(),
            created_on: None,
            public_namespace: "".to_owned(),
            default_region: "".to_owned(),
            cid: None,
        };
        assert!(encode(&org).is_empty());
    }

    #[test_log::test]
    fn test_explicit_presence() {
        // an optional field set to its default value is still written
        let org = Organization {
            cid: Some("".to_owned()),
            ..Default::default()
        };
        let buf = encode(&org);
        assert_eq!(buf, vec![0x32, 0x00]);
        let decoded = decode::<Organization>(&buf).unwrap();
        assert_eq!(decoded.cid, Some("".to_owned()));
        assert_eq!(decoded.cid(), "");
        assert_eq!(decode::<Organization>(&[]).unwrap().cid, None);

        let update = UpdateFragmentRequest {
            id: "f1".to_owned(),
            public: Some(false),
            ..Default::default()
        };
        let decoded = decode::<UpdateFragmentRequest>(&encode(&update)).unwrap();
        assert_eq!(decoded.public, Some(false));
        assert!(!decoded.public());

        let logs = GetRobotPartLogsRequest {
            id: "p1".to_owned(),
            ..Default::default()
        };
        let decoded = decode::<GetRobotPartLogsRequest>(&encode(&logs)).unwrap();
        assert_eq!(decoded.filter, None);
        assert_eq!(decoded.page_token, None);

        // a set but empty message is distinct from an unset one
        let part = RobotPart {
            robot_config: Some(Struct::default()),
            ..Default::default()
        };
        let decoded = decode::<RobotPart>(&encode(&part)).unwrap();
        assert_eq!(decoded.robot_config, Some(Struct::default()));
        assert_eq!(decoded.user_supplied_info, None);
        assert!(decoded.secrets.is_empty());
    }

    #[test_log::test]
    fn test_unknown_fields_are_skipped() {
        let part = full_robot_part();
        let mut buf = encode(&part);
        // field 99, varint 1
        buf.extend_from_slice(&[0x98, 0x06, 0x01]);
        // field 100, length delimited "xyz"
        buf.extend_from_slice(&[0xa2, 0x06, 0x03, b'x', b'y', b'z']);
        assert_eq!(decode::<RobotPart>(&buf), Ok(part));

        let quiet = CodecConfig {
            log_unknown_fields: false,
            ..Default::default()
        };
        assert!(decode_with::<RobotPart>(&buf, &quiet).is_ok());
    }

    #[test_log::test]
    fn test_unknown_groups_are_skipped() {
        let part = RobotPart {
            id: "p1".to_owned(),
            ..Default::default()
        };
        let mut buf = encode(&part);
        // group 50 holding field 1 = 1
        buf.extend_from_slice(&[0x93, 0x03, 0x08, 0x01, 0x94, 0x03]);
        assert_eq!(decode::<RobotPart>(&buf), Ok(part.clone()));

        // group 50 nesting group 51, followed by a declared field
        let mut buf = encode(&part);
        buf.extend_from_slice(&[0x93, 0x03, 0x9b, 0x03, 0x10, 0x02, 0x9c, 0x03, 0x94, 0x03]);
        buf.extend_from_slice(&[0x40, 0x01]);
        let decoded = decode::<RobotPart>(&buf).unwrap();
        assert_eq!(decoded.id, "p1");
        assert!(decoded.main_part);

        // a declared field may not arrive as a group
        assert!(matches!(
            decode::<RobotPart>(&[0x0b, 0x0c]),
            Err(DecodeError::InvalidWireType(_))
        ));
        // unterminated group
        assert_eq!(
            decode::<RobotPart>(&[0x93, 0x03, 0x08, 0x01]),
            Err(DecodeError::Truncated)
        );
        let mut nested = vec![0x93, 0x03].repeat(101);
        nested.extend(vec![0x94, 0x03].repeat(101));
        assert_eq!(
            decode::<RobotPart>(&nested),
            Err(DecodeError::RecursionLimitReached)
        );
    }

    #[test_log::test]
    fn test_decode_errors() {
        let buf = encode(&RobotPart {
            id: "p1".to_owned(),
            ..Default::default()
        });
        assert_eq!(buf, vec![0x0a, 0x02, b'p', b'1']);
        assert_eq!(
            decode::<RobotPart>(&buf[..buf.len() - 1]),
            Err(DecodeError::Truncated)
        );

        assert!(matches!(
            decode::<RobotPart>(&[0x00, 0x01]),
            Err(DecodeError::InvalidTag(_))
        ));
        assert!(matches!(
            decode::<RobotPart>(&[0x0f]),
            Err(DecodeError::InvalidWireType(_))
        ));
        // id is a string but arrives as a varint
        assert!(matches!(
            decode::<RobotPart>(&[0x08, 0x01]),
            Err(DecodeError::InvalidWireType(_))
        ));
        assert_eq!(
            decode::<RobotPart>(&[0x0a, 0x02, 0xff, 0xfe]),
            Err(DecodeError::InvalidUtf8)
        );
        assert_eq!(
            decode::<RobotPart>(&[
                0x40, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01
            ]),
            Err(DecodeError::InvalidVarint)
        );
    }

    #[test_log::test]
    fn test_invalid_enum_values() {
        // state = 7
        let buf = [0x0a, 0x02, b's', b'1', 0x20, 0x07];
        assert_eq!(
            decode::<SharedSecret>(&buf),
            Err(DecodeError::InvalidEnumValue(EnumValueError {
                message: "SharedSecret",
                field: "state",
                value: 7
            }))
        );

        let lenient = CodecConfig {
            strict_enums: false,
            ..Default::default()
        };
        let decoded = decode_with::<SharedSecret>(&buf, &lenient).unwrap();
        assert_eq!(decoded.state, 7);
        assert_eq!(decoded.state(), shared_secret::State::Unspecified);

        // the bad value is nested two levels down
        let part = RobotPart {
            secrets: vec![SharedSecret {
                state: 9,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(matches!(
            decode::<RobotPart>(&encode(&part)),
            Err(DecodeError::InvalidEnumValue(EnumValueError { value: 9, .. }))
        ));

        let module = Module {
            visibility: 5,
            ..Default::default()
        };
        assert!(matches!(
            decode::<Module>(&encode(&module)),
            Err(DecodeError::InvalidEnumValue(EnumValueError {
                field: "visibility",
                ..
            }))
        ));
    }

    #[test_log::test]
    fn test_message_size_limit() {
        let buf = encode(&full_robot_part());
        let config = CodecConfig {
            max_message_size: Some(8),
            ..Default::default()
        };
        assert_eq!(
            decode_with::<RobotPart>(&buf, &config),
            Err(DecodeError::MessageTooLarge {
                size: buf.len(),
                limit: 8
            })
        );
    }

    #[test_log::test]
    fn test_oneof_round_trip() {
        let info = UploadModuleFileRequest {
            module_file: Some(ModuleFile::ModuleFileInfo(ModuleFileInfo {
                module_id: "acme:thermo".to_owned(),
                organization_id: None,
                version: "1.0.0".to_owned(),
                platform: "linux/amd64".to_owned(),
            })),
        };
        assert_eq!(decode::<UploadModuleFileRequest>(&encode(&info)), Ok(info));

        // an empty chunk is still a set oneof member
        let chunk = UploadModuleFileRequest {
            module_file: Some(ModuleFile::File(vec![])),
        };
        let buf = encode(&chunk);
        assert_eq!(buf, vec![0x12, 0x00]);
        assert_eq!(decode::<UploadModuleFileRequest>(&buf), Ok(chunk));

        // last member on the wire wins
        let mut buf = encode(&UploadModuleFileRequest {
            module_file: Some(ModuleFile::ModuleFileInfo(ModuleFileInfo::default())),
        });
        buf.extend_from_slice(&[0x12, 0x01, 0xaa]);
        let decoded = decode::<UploadModuleFileRequest>(&buf).unwrap();
        assert_eq!(decoded.module_file, Some(ModuleFile::File(vec![0xaa])));
    }

    #[test_log::test]
    fn test_length_delimited_stream() {
        let logs = vec![
            LogEntry {
                message: "first".to_owned(),
                ..Default::default()
            },
            LogEntry::default(),
            LogEntry {
                message: "third".to_owned(),
                ..Default::default()
            },
        ];
        let buf = encode_length_delimited(&logs).unwrap();
        let decoded: Vec<LogEntry> = decode_length_delimited(&buf, &CodecConfig::default()).unwrap();
        assert_eq!(decoded, logs);

        assert_eq!(
            decode_length_delimited::<LogEntry>(&buf[..buf.len() - 1], &CodecConfig::default()),
            Err(DecodeError::Truncated)
        );
    }

    #[test_log::test]
    fn test_encode_to_fixed_buffer() {
        let part = full_robot_part();
        let mut buf = Vec::with_capacity(part.encoded_len());
        assert!(encode_to(&part, &mut buf).is_ok());
        assert_eq!(buf, encode(&part));

        let mut small = [0u8; 4];
        assert!(encode_to(&part, &mut &mut small[..]).is_err());
    }

    /// Builds a message with every declared field set by trying a varint, a short string and an
    /// empty length-delimited payload for each field number.
    fn populated<M>() -> M
    where
        M: Message + Default + WireSchema,
    {
        let candidates: [(u32, &[u8]); 3] = [
            (0, &[0x01][..]),
            (2, &[0x01, b'a'][..]),
            (2, &[0x00][..]),
        ];
        let mut buf = Vec::new();
        for &tag in M::FIELD_TAGS {
            let field = candidates.iter().find_map(|(wire_type, payload)| {
                let mut field = Vec::new();
                encode_varint(u64::from(tag << 3 | wire_type), &mut field);
                field.extend_from_slice(payload);
                decode::<M>(&field).is_ok().then_some(field)
            });
            match field {
                Some(field) => buf.extend(field),
                None => panic!("no encoding accepted for field {} of {}", tag, M::NAME),
            }
        }
        decode(&buf).unwrap()
    }

    fn check_generated_type<M>()
    where
        M: Message + Default + Clone + PartialEq + WireSchema + ToObject,
    {
        assert!(
            encode(&M::default()).is_empty(),
            "default {} encodes to bytes",
            M::NAME
        );
        let message = populated::<M>();
        let buf = encode(&message);
        assert_eq!(buf.is_empty(), M::FIELD_TAGS.is_empty(), "{}", M::NAME);
        assert_eq!(decode::<M>(&buf), Ok(message.clone()), "{}", M::NAME);
        assert!(message.to_object().is_object(), "{}", M::NAME);
    }

    macro_rules! check_generated_types {
        ($($t:ty),* $(,)?) => {
            $( check_generated_type::<$t>(); )*
        };
    }

    #[test_log::test]
    fn test_every_generated_type() {
        check_generated_types!(
            app::Robot,
            app::RobotPart,
            app::RobotPartHistoryEntry,
            app::ListOrganizationsRequest,
            app::Organization,
            app::OrganizationMember,
            app::ListOrganizationsResponse,
            app::OrganizationInvite,
            app::CreateOrganizationRequest,
            app::CreateOrganizationResponse,
            app::GetOrganizationRequest,
            app::GetOrganizationResponse,
            app::GetOrganizationNamespaceAvailabilityRequest,
            app::GetOrganizationNamespaceAvailabilityResponse,
            app::UpdateOrganizationRequest,
            app::UpdateOrganizationResponse,
            app::DeleteOrganizationRequest,
            app::DeleteOrganizationResponse,
            app::ListOrganizationMembersRequest,
            app::ListOrganizationMembersResponse,
            app::CreateOrganizationInviteRequest,
            app::CreateOrganizationInviteResponse,
            app::UpdateOrganizationInviteAuthorizationsRequest,
            app::UpdateOrganizationInviteAuthorizationsResponse,
            app::DeleteOrganizationInviteRequest,
            app::DeleteOrganizationInviteResponse,
            app::ResendOrganizationInviteRequest,
            app::ResendOrganizationInviteResponse,
            app::DeleteOrganizationMemberRequest,
            app::DeleteOrganizationMemberResponse,
            app::LocationOrganization,
            app::LocationAuth,
            app::StorageConfig,
            app::Location,
            app::SharedSecret,
            app::CreateLocationRequest,
            app::CreateLocationResponse,
            app::GetLocationRequest,
            app::GetLocationResponse,
            app::UpdateLocationRequest,
            app::UpdateLocationResponse,
            app::DeleteLocationRequest,
            app::DeleteLocationResponse,
            app::ListLocationsRequest,
            app::ShareLocationRequest,
            app::ShareLocationResponse,
            app::UnshareLocationRequest,
            app::UnshareLocationResponse,
            app::ListLocationsResponse,
            app::CreateLocationSecretRequest,
            app::CreateLocationSecretResponse,
            app::DeleteLocationSecretRequest,
            app::DeleteLocationSecretResponse,
            app::LocationAuthRequest,
            app::LocationAuthResponse,
            app::GetRobotRequest,
            app::GetRoverRentalRobotsRequest,
            app::RoverRentalRobot,
            app::GetRoverRentalRobotsResponse,
            app::GetRobotResponse,
            app::GetRobotPartsRequest,
            app::GetRobotPartsResponse,
            app::GetRobotPartRequest,
            app::GetRobotPartResponse,
            app::GetRobotPartLogsRequest,
            app::LogEntry,
            app::GetRobotPartLogsResponse,
            app::TailRobotPartLogsRequest,
            app::TailRobotPartLogsResponse,
            app::GetRobotPartHistoryRequest,
            app::GetRobotPartHistoryResponse,
            app::UpdateRobotPartRequest,
            app::UpdateRobotPartResponse,
            app::NewRobotPartRequest,
            app::NewRobotPartResponse,
            app::DeleteRobotPartRequest,
            app::DeleteRobotPartResponse,
            app::Fragment,
            app::ListFragmentsRequest,
            app::ListFragmentsResponse,
            app::GetFragmentRequest,
            app::GetFragmentResponse,
            app::CreateFragmentRequest,
            app::CreateFragmentResponse,
            app::UpdateFragmentRequest,
            app::UpdateFragmentResponse,
            app::DeleteFragmentRequest,
            app::DeleteFragmentResponse,
            app::ListRobotsRequest,
            app::ListRobotsResponse,
            app::NewRobotRequest,
            app::NewRobotResponse,
            app::UpdateRobotRequest,
            app::UpdateRobotResponse,
            app::DeleteRobotRequest,
            app::DeleteRobotResponse,
            app::MarkPartAsMainRequest,
            app::MarkPartAsMainResponse,
            app::MarkPartForRestartRequest,
            app::MarkPartForRestartResponse,
            app::CreateRobotPartSecretRequest,
            app::CreateRobotPartSecretResponse,
            app::DeleteRobotPartSecretRequest,
            app::DeleteRobotPartSecretResponse,
            app::Authorization,
            app::AddRoleRequest,
            app::AddRoleResponse,
            app::RemoveRoleRequest,
            app::RemoveRoleResponse,
            app::ChangeRoleRequest,
            app::ChangeRoleResponse,
            app::ListAuthorizationsRequest,
            app::ListAuthorizationsResponse,
            app::CheckPermissionsRequest,
            app::AuthorizedPermissions,
            app::CheckPermissionsResponse,
            app::CreateModuleRequest,
            app::CreateModuleResponse,
            app::UpdateModuleRequest,
            app::UpdateModuleResponse,
            app::Model,
            app::ModuleFileInfo,
            app::UploadModuleFileRequest,
            app::UploadModuleFileResponse,
            app::GetModuleRequest,
            app::GetModuleResponse,
            app::Module,
            app::VersionHistory,
            app::Uploads,
            app::ListModulesRequest,
            app::ListModulesResponse,
            app::GetUserIdByEmailRequest,
            app::GetUserIdByEmailResponse,
            app::ListOrganizationsByUserRequest,
            app::OrgDetails,
            app::ListOrganizationsByUserResponse,
            app::CreateKeyRequest,
            app::CreateKeyResponse,
            servo::MoveRequest,
            servo::MoveResponse,
            servo::GetPositionRequest,
            servo::GetPositionResponse,
            servo::StopRequest,
            servo::StopResponse,
            servo::Status,
            servo::IsMovingRequest,
            servo::IsMovingResponse,
        );
    }

    #[test_log::test]
    fn test_codec_config_deserialize() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"strict_enums": false, "max_message_size": 1024}"#).unwrap();
        assert!(!config.strict_enums);
        assert_eq!(config.max_message_size, Some(1024));
        assert!(config.log_unknown_fields);

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }
}
