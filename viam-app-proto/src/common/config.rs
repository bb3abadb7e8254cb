use crate::google;
use crate::proto::app::v1::{
    CreateFragmentRequest, Fragment, LogEntry, RobotPart, UpdateFragmentRequest,
    UpdateRobotPartRequest,
};

use std::collections::HashMap;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum AttributeError {
    #[error("failed to parse number")]
    ParseNumError,
    #[error("value not possible")]
    ConversionImpossibleError,
    #[error("{0} does not fit in {1}")]
    NumberOutOfRange(String, &'static str),
    #[error("attribute `{0}` was not found")]
    KeyNotFound(String),
    #[error("{0}")]
    ValidationError(String),
}

impl From<ParseIntError> for AttributeError {
    fn from(_: ParseIntError) -> AttributeError {
        AttributeError::ParseNumError
    }
}

impl From<ParseFloatError> for AttributeError {
    fn from(_: ParseFloatError) -> AttributeError {
        AttributeError::ParseNumError
    }
}

/// Narrowing from the `f64` every JSON number is carried as.
trait FromNumber: Sized {
    fn from_number(value: f64) -> Result<Self, AttributeError>;
}

macro_rules! integer_from_number
{
    ( $($t:ty),* ) =>
    {
        $(
          impl FromNumber for $t {
              fn from_number(value: f64) -> Result<Self, AttributeError> {
                  // NaN and infinities have a NaN fraction
                  if value.fract() != 0.0 || value < <$t>::MIN as f64 || value > <$t>::MAX as f64 {
                      return Err(AttributeError::NumberOutOfRange(value.to_string(), stringify!($t)));
                  }
                  Ok(value as $t)
              }
          }
        )*
    }
}

integer_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl FromNumber for f64 {
    fn from_number(value: f64) -> Result<Self, AttributeError> {
        Ok(value)
    }
}

impl FromNumber for f32 {
    fn from_number(value: f64) -> Result<Self, AttributeError> {
        let narrowed = value as f32;
        if value.is_finite() && narrowed.is_infinite() {
            return Err(AttributeError::NumberOutOfRange(value.to_string(), "f32"));
        }
        Ok(narrowed)
    }
}

/// Numbers are read from number values, from numeric strings and from bools (as 0 or 1).
macro_rules! number_attributes
{
    ( $($t:ty),* ) =>
    {
        $(
          impl TryFrom<&Kind> for $t {
              type Error = AttributeError;
              fn try_from(value: &Kind) -> Result<Self, Self::Error> {
                  match value {
                      Kind::NumberValue(v) => <$t>::from_number(*v),
                      Kind::BoolValue(v) => <$t>::from_number(f64::from(u8::from(*v))),
                      Kind::StringValue(v) => Ok(v.trim().parse::<$t>()?),
                      Kind::NullValue(_) | Kind::VecValue(_) | Kind::StructValue(_) => {
                          Err(AttributeError::ConversionImpossibleError)
                      }
                  }
              }
          }
        )*
    }
}

number_attributes!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

impl<'b, V> TryFrom<&'b Kind> for HashMap<&'b str, V>
where
    V: std::convert::TryFrom<&'b Kind, Error = AttributeError>,
{
    type Error = AttributeError;
    fn try_from(value: &'b Kind) -> Result<Self, Self::Error> {
        match value {
            Kind::StructValue(v) => v
                .iter()
                .map(|(k, v)| Ok((k.as_str(), v.try_into()?)))
                .collect(),
            _ => Err(AttributeError::ConversionImpossibleError),
        }
    }
}

impl<'a, T> TryFrom<&'a Kind> for Vec<T>
where
    T: std::convert::TryFrom<&'a Kind, Error = AttributeError>,
{
    type Error = AttributeError;
    fn try_from(value: &'a Kind) -> Result<Self, Self::Error> {
        match value {
            Kind::VecValue(v) => v.iter().map(|v| v.try_into()).collect(),
            _ => Err(AttributeError::ConversionImpossibleError),
        }
    }
}

impl<'b> TryFrom<&'b Kind> for &'b str {
    type Error = AttributeError;
    fn try_from(value: &'b Kind) -> Result<Self, Self::Error> {
        match value {
            Kind::StringValue(v) => Ok(v.as_str()),
            _ => Err(AttributeError::ConversionImpossibleError),
        }
    }
}

impl TryFrom<&Kind> for String {
    type Error = AttributeError;
    fn try_from(value: &Kind) -> Result<Self, Self::Error> {
        match value {
            Kind::StringValue(v) => Ok(v.to_string()),
            _ => Err(AttributeError::ConversionImpossibleError),
        }
    }
}

impl TryFrom<&Kind> for bool {
    type Error = AttributeError;
    fn try_from(value: &Kind) -> Result<Self, Self::Error> {
        match value {
            Kind::BoolValue(v) => Ok(*v),
            _ => Err(AttributeError::ConversionImpossibleError),
        }
    }
}

impl TryFrom<&Kind> for Kind {
    type Error = AttributeError;
    fn try_from(value: &Kind) -> Result<Self, Self::Error> {
        Ok(value.clone())
    }
}

/// Owned, typed view of a `google.protobuf.Value`. `NullValue` keeps the raw enum number.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    NullValue(i32),
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    VecValue(Vec<Kind>),
    StructValue(HashMap<String, Kind>),
}

impl Kind {
    pub fn get(&self, key: &str) -> Result<Option<&Kind>, AttributeError> {
        match self {
            Self::StructValue(v) => Ok(v.get(key)),
            _ => Err(AttributeError::KeyNotFound(key.to_string())),
        }
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, AttributeError> {
        match self {
            Self::StructValue(v) => Ok(v.contains_key(key)),
            _ => Err(AttributeError::KeyNotFound(key.to_string())),
        }
    }
}

impl TryFrom<&google::protobuf::value::Kind> for Kind {
    type Error = AttributeError;
    fn try_from(value: &google::protobuf::value::Kind) -> Result<Self, Self::Error> {
        match value {
            google::protobuf::value::Kind::BoolValue(v) => Ok(Kind::BoolValue(*v)),
            google::protobuf::value::Kind::NullValue(v) => Ok(Kind::NullValue(*v)),
            google::protobuf::value::Kind::StringValue(v) => Ok(Kind::StringValue(v.to_string())),
            google::protobuf::value::Kind::NumberValue(v) => Ok(Kind::NumberValue(*v)),
            google::protobuf::value::Kind::StructValue(v) => {
                Ok(Kind::StructValue(struct_to_attributes(v)?))
            }
            google::protobuf::value::Kind::ListValue(v) => {
                let mapped = v
                    .values
                    .iter()
                    .map(|val| match &val.kind {
                        None => Ok::<Kind, AttributeError>(Kind::NullValue(0)),
                        Some(unwrapped) => Kind::try_from(unwrapped),
                    })
                    .collect::<Result<Vec<Kind>, AttributeError>>()?;
                Ok(Kind::VecValue(mapped))
            }
        }
    }
}

impl TryFrom<google::protobuf::value::Kind> for Kind {
    type Error = AttributeError;
    fn try_from(value: google::protobuf::value::Kind) -> Result<Self, Self::Error> {
        Kind::try_from(&value)
    }
}

impl From<&Kind> for google::protobuf::Value {
    fn from(value: &Kind) -> Self {
        use google::protobuf::value::Kind as PKind;
        let kind = match value {
            Kind::NullValue(v) => PKind::NullValue(*v),
            Kind::NumberValue(v) => PKind::NumberValue(*v),
            Kind::StringValue(v) => PKind::StringValue(v.clone()),
            Kind::BoolValue(v) => PKind::BoolValue(*v),
            Kind::VecValue(v) => PKind::ListValue(google::protobuf::ListValue {
                values: v.iter().map(Into::into).collect(),
            }),
            Kind::StructValue(v) => PKind::StructValue(attributes_to_struct(v)),
        };
        google::protobuf::Value { kind: Some(kind) }
    }
}

impl From<&Kind> for serde_json::Value {
    fn from(value: &Kind) -> Self {
        match value {
            Kind::NullValue(_) => serde_json::Value::Null,
            // NaN and infinities have no JSON form
            Kind::NumberValue(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Kind::StringValue(v) => serde_json::Value::String(v.clone()),
            Kind::BoolValue(v) => serde_json::Value::Bool(*v),
            Kind::VecValue(v) => serde_json::Value::Array(v.iter().map(Into::into).collect()),
            Kind::StructValue(v) => serde_json::Value::Object(
                v.iter().map(|(k, v)| (k.clone(), v.into())).collect(),
            ),
        }
    }
}

impl TryFrom<&serde_json::Value> for Kind {
    type Error = AttributeError;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Kind::NullValue(0)),
            serde_json::Value::Bool(v) => Ok(Kind::BoolValue(*v)),
            serde_json::Value::Number(v) => v
                .as_f64()
                .map(Kind::NumberValue)
                .ok_or(AttributeError::ParseNumError),
            serde_json::Value::String(v) => Ok(Kind::StringValue(v.clone())),
            serde_json::Value::Array(v) => Ok(Kind::VecValue(
                v.iter().map(Kind::try_from).collect::<Result<_, _>>()?,
            )),
            serde_json::Value::Object(v) => Ok(Kind::StructValue(
                v.iter()
                    .map(|(k, v)| Ok((k.clone(), Kind::try_from(v)?)))
                    .collect::<Result<_, AttributeError>>()?,
            )),
        }
    }
}

/// Values without a kind are dropped.
pub fn struct_to_attributes(
    value: &google::protobuf::Struct,
) -> Result<HashMap<String, Kind>, AttributeError> {
    let mut attr_map = HashMap::new();
    for (k, val) in value.fields.iter() {
        match &val.kind {
            Some(unwrapped) => {
                attr_map.insert(k.to_string(), unwrapped.try_into()?);
            }
            None => continue,
        };
    }
    Ok(attr_map)
}

pub fn attributes_to_struct(attributes: &HashMap<String, Kind>) -> google::protobuf::Struct {
    google::protobuf::Struct {
        fields: attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.into()))
            .collect(),
    }
}

pub fn struct_to_json(value: &google::protobuf::Struct) -> Result<serde_json::Value, AttributeError> {
    Ok((&Kind::StructValue(struct_to_attributes(value)?)).into())
}

pub fn json_to_struct(value: &serde_json::Value) -> Result<google::protobuf::Struct, AttributeError> {
    match Kind::try_from(value)? {
        Kind::StructValue(v) => Ok(attributes_to_struct(&v)),
        _ => Err(AttributeError::ConversionImpossibleError),
    }
}

/// Messages carrying a free-form configuration `Struct`.
pub trait Attributes {
    fn attributes(&self) -> Option<&google::protobuf::Struct>;

    fn get_attribute<T>(&self, key: &str) -> Result<T, AttributeError>
    where
        T: for<'a> std::convert::TryFrom<&'a Kind, Error = AttributeError>,
    {
        let value = self
            .attributes()
            .and_then(|attributes| attributes.fields.get(key))
            .and_then(|value| value.kind.as_ref())
            .ok_or_else(|| AttributeError::KeyNotFound(key.to_string()))?;
        let kind: Kind = value.try_into()?;
        T::try_from(&kind)
    }

    fn attribute_map(&self) -> Result<HashMap<String, Kind>, AttributeError> {
        self.attributes()
            .map_or_else(|| Ok(HashMap::new()), struct_to_attributes)
    }
}

macro_rules! attributes
{
    ( $($t:ty => $field:ident),* ) =>
    {
        $(
          impl Attributes for $t {
              fn attributes(&self) -> Option<&google::protobuf::Struct> {
                  self.$field.as_ref()
              }
          }
        )*
    }
}

attributes!(
    RobotPart => robot_config,
    Fragment => fragment,
    CreateFragmentRequest => config,
    UpdateFragmentRequest => config,
    UpdateRobotPartRequest => robot_config,
    LogEntry => caller
);
