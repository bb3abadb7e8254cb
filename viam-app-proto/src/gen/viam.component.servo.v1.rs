// Hand-maintained bindings for `viam.component.servo.v1` in the shape prost-build emits.
// Field numbers follow the published Viam API; this file is not regenerated from `.proto`
// sources, so edit it directly and keep tags in sync with the API.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MoveRequest {
    /// Name of a servo
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    /// The degrees by which to rotate the servo. Accepted values are between 0 and 180
    #[prost(uint32, tag="2")]
    pub angle_deg: u32,
    /// Additional arguments to the method
    #[prost(message, optional, tag="99")]
    pub extra: ::core::option::Option<::prost_types::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MoveResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetPositionRequest {
    /// Name of a servo
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    /// Additional arguments to the method
    #[prost(message, optional, tag="99")]
    pub extra: ::core::option::Option<::prost_types::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetPositionResponse {
    /// The degrees from neutral by which the servo is currently rotated. Values are between 0 and 180
    #[prost(uint32, tag="1")]
    pub position_deg: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct StopRequest {
    /// Name of a servo
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    /// Additional arguments to the method
    #[prost(message, optional, tag="99")]
    pub extra: ::core::option::Option<::prost_types::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct StopResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Status {
    #[prost(uint32, tag="1")]
    pub position_deg: u32,
    #[prost(bool, tag="2")]
    pub is_moving: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct IsMovingRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct IsMovingResponse {
    #[prost(bool, tag="1")]
    pub is_moving: bool,
}
// @@protoc_insertion_point(module)
