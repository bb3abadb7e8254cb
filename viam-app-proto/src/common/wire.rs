//! Schema-less view of the protobuf wire format.
//!
//! [FieldScanner] walks the top level of an encoded message and validates its framing (tags,
//! varints, lengths and group nesting) without knowing the message type. Groups are not part of
//! proto3 but may still arrive as unknown fields, so a group is scanned as one field running up
//! to its end tag. [WireSchema] is derived on every generated binding and tells the codec which
//! field numbers a message declares and whether its enum-typed fields hold declared values.

use thiserror::Error;

/// Largest field number allowed by the protobuf language guide.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

const MAX_VARINT_LEN: usize = 10;

/// Same nesting limit prost applies while decoding.
const MAX_GROUP_DEPTH: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid value {value} for enum field `{field}` of {message}")]
pub struct EnumValueError {
    pub message: &'static str,
    pub field: &'static str,
    pub value: i32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected end of input at offset {0}")]
    Truncated(usize),
    #[error("varint at offset {0} is longer than 10 bytes or overflows")]
    InvalidVarint(usize),
    #[error("invalid field number {field} at offset {offset}")]
    InvalidTag { field: u64, offset: usize },
    #[error("invalid wire type {wire_type} for field {field}")]
    InvalidWireType { field: u32, wire_type: u8 },
    #[error("groups nested too deeply at offset {0}")]
    RecursionLimitReached(usize),
}

pub trait WireSchema {
    const NAME: &'static str;
    /// Field numbers declared by the message, ascending. Oneof members are included.
    const FIELD_TAGS: &'static [u32];

    fn check_enums(&self) -> Result<(), EnumValueError>;

    fn declares_field(number: u32) -> bool {
        Self::FIELD_TAGS.binary_search(&number).is_ok()
    }
}

pub fn check_enum_value<E>(
    message: &'static str,
    field: &'static str,
    value: i32,
) -> Result<(), EnumValueError>
where
    E: TryFrom<i32>,
{
    E::try_from(value).map(|_| ()).map_err(|_| EnumValueError {
        message,
        field,
        value,
    })
}

impl WireSchema for prost_types::Timestamp {
    const NAME: &'static str = "Timestamp";
    const FIELD_TAGS: &'static [u32] = &[1, 2];

    fn check_enums(&self) -> Result<(), EnumValueError> {
        Ok(())
    }
}

impl WireSchema for prost_types::Struct {
    const NAME: &'static str = "Struct";
    const FIELD_TAGS: &'static [u32] = &[1];

    fn check_enums(&self) -> Result<(), EnumValueError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl TryFrom<u8> for WireType {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Varint),
            1 => Ok(Self::Fixed64),
            2 => Ok(Self::LengthDelimited),
            3 => Ok(Self::StartGroup),
            4 => Ok(Self::EndGroup),
            5 => Ok(Self::Fixed32),
            other => Err(other),
        }
    }
}

/// Reads a varint starting at `offset`, returning the value and the offset just past it.
pub fn read_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), ScanError> {
    let mut value: u64 = 0;
    for i in 0..MAX_VARINT_LEN {
        let byte = *buf.get(offset + i).ok_or(ScanError::Truncated(offset + i))?;
        // the tenth byte may only carry the single remaining bit of a u64
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(ScanError::InvalidVarint(offset));
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, offset + i + 1));
        }
    }
    Err(ScanError::InvalidVarint(offset))
}

/// A field found on the wire. `offset` points at the tag, `len` covers tag and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireField {
    pub number: u32,
    pub wire_type: WireType,
    pub offset: usize,
    pub len: usize,
}

/// Iterates over the top-level fields of an encoded message. Iteration stops after the first
/// error.
pub struct FieldScanner<'a> {
    buf: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> FieldScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            failed: false,
        }
    }

    fn advance(&self, end: usize) -> Result<usize, ScanError> {
        if end > self.buf.len() {
            return Err(ScanError::Truncated(self.buf.len()));
        }
        Ok(end)
    }

    /// Reads a tag, returning the field number, the raw wire type and the payload offset.
    fn read_key(&self, offset: usize) -> Result<(u32, u8, usize), ScanError> {
        let (key, payload) = read_varint(self.buf, offset)?;
        let number = key >> 3;
        if number == 0 || number > u64::from(MAX_FIELD_NUMBER) {
            return Err(ScanError::InvalidTag {
                field: number,
                offset,
            });
        }
        Ok((number as u32, (key & 0x7) as u8, payload))
    }

    /// Returns the offset just past the payload starting at `payload`. A group payload runs up
    /// to and including the end group tag with the same field number.
    fn skip_payload(
        &self,
        number: u32,
        raw_wire_type: u8,
        payload: usize,
        depth: u32,
    ) -> Result<(WireType, usize), ScanError> {
        match WireType::try_from(raw_wire_type) {
            Ok(WireType::Varint) => Ok((WireType::Varint, read_varint(self.buf, payload)?.1)),
            Ok(WireType::Fixed64) => Ok((WireType::Fixed64, self.advance(payload + 8)?)),
            Ok(WireType::Fixed32) => Ok((WireType::Fixed32, self.advance(payload + 4)?)),
            Ok(WireType::LengthDelimited) => {
                let (len, data) = read_varint(self.buf, payload)?;
                let len = usize::try_from(len).map_err(|_| ScanError::Truncated(data))?;
                let end = self.advance(data.checked_add(len).ok_or(ScanError::Truncated(data))?)?;
                Ok((WireType::LengthDelimited, end))
            }
            Ok(WireType::StartGroup) => {
                if depth >= MAX_GROUP_DEPTH {
                    return Err(ScanError::RecursionLimitReached(payload));
                }
                let mut offset = payload;
                loop {
                    if offset >= self.buf.len() {
                        return Err(ScanError::Truncated(offset));
                    }
                    let (inner, inner_wire_type, inner_payload) = self.read_key(offset)?;
                    if inner_wire_type == WireType::EndGroup as u8 {
                        if inner != number {
                            return Err(ScanError::InvalidWireType {
                                field: inner,
                                wire_type: inner_wire_type,
                            });
                        }
                        return Ok((WireType::StartGroup, inner_payload));
                    }
                    offset = self
                        .skip_payload(inner, inner_wire_type, inner_payload, depth + 1)?
                        .1;
                }
            }
            // an end group tag is only valid as the terminator of a group
            Ok(WireType::EndGroup) | Err(_) => Err(ScanError::InvalidWireType {
                field: number,
                wire_type: raw_wire_type,
            }),
        }
    }

    fn scan_field(&mut self) -> Result<WireField, ScanError> {
        let start = self.offset;
        let (number, raw_wire_type, payload) = self.read_key(start)?;
        let (wire_type, end) = self.skip_payload(number, raw_wire_type, payload, 0)?;
        self.offset = end;
        Ok(WireField {
            number,
            wire_type,
            offset: start,
            len: end - start,
        })
    }
}

impl Iterator for FieldScanner<'_> {
    type Item = Result<WireField, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.buf.len() {
            return None;
        }
        let field = self.scan_field();
        self.failed = field.is_err();
        Some(field)
    }
}

/// Field numbers present in `buf` that `M` does not declare, in wire order.
pub fn unknown_fields<M: WireSchema>(buf: &[u8]) -> Result<Vec<u32>, ScanError> {
    FieldScanner::new(buf)
        .filter_map(|field| match field {
            Ok(field) if M::declares_field(field.number) => None,
            Ok(field) => Some(Ok(field.number)),
            Err(err) => Some(Err(err)),
        })
        .collect()
}
