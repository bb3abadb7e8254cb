// Hand-maintained bindings for `viam.app.v1` in the shape prost-build emits. Field numbers
// follow the published Viam API; this file is not regenerated from `.proto` sources, so
// edit it directly and keep tags in sync with the API.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Robot {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub location: ::prost::alloc::string::String,
    #[prost(message, optional, tag="4")]
    pub last_access: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="5")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct RobotPart {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    /// dns_name part name used for fqdn and local fqdn. Anytime the Name is updated this should be sanitized and updated as well.
    #[prost(string, tag="10")]
    pub dns_name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub secret: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub robot: ::prost::alloc::string::String,
    /// Store the location_id to allow for unique indexes across parts and locations. This filed MUST be updated each time the robots location
    /// changes.
    #[prost(string, tag="12")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag="5")]
    pub robot_config: ::core::option::Option<::prost_types::Struct>,
    #[prost(message, optional, tag="6")]
    pub last_access: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="7")]
    pub user_supplied_info: ::core::option::Option<::prost_types::Struct>,
    #[prost(bool, tag="8")]
    pub main_part: bool,
    #[prost(string, tag="9")]
    pub fqdn: ::prost::alloc::string::String,
    #[prost(string, tag="11")]
    pub local_fqdn: ::prost::alloc::string::String,
    #[prost(message, optional, tag="13")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    /// List of secrets allowed for authentication.
    #[prost(message, repeated, tag="14")]
    pub secrets: ::prost::alloc::vec::Vec<SharedSecret>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct RobotPartHistoryEntry {
    #[prost(string, tag="1")]
    pub part: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub robot: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub when: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="4")]
    pub old: ::core::option::Option<RobotPart>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationsRequest {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Organization {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag="4")]
    pub public_namespace: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub default_region: ::prost::alloc::string::String,
    #[prost(string, optional, tag="6")]
    pub cid: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct OrganizationMember {
    #[prost(string, tag="1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, repeated, tag="2")]
    pub emails: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag="3")]
    pub date_added: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag="4")]
    pub last_login: ::core::option::Option<::prost_types::Timestamp>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationsResponse {
    #[prost(message, repeated, tag="1")]
    pub organizations: ::prost::alloc::vec::Vec<Organization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct OrganizationInvite {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub email: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(int32, tag="4")]
    pub robot_count: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateOrganizationRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateOrganizationResponse {
    #[prost(message, optional, tag="1")]
    pub organization: ::core::option::Option<Organization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetOrganizationRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetOrganizationResponse {
    #[prost(message, optional, tag="1")]
    pub organization: ::core::option::Option<Organization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetOrganizationNamespaceAvailabilityRequest {
    #[prost(string, tag="1")]
    pub public_namespace: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetOrganizationNamespaceAvailabilityResponse {
    #[prost(bool, tag="1")]
    pub available: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateOrganizationRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="3")]
    pub public_namespace: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="4")]
    pub region: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="5")]
    pub cid: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateOrganizationResponse {
    #[prost(message, optional, tag="1")]
    pub organization: ::core::option::Option<Organization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationMembersRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationMembersResponse {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="2")]
    pub members: ::prost::alloc::vec::Vec<OrganizationMember>,
    #[prost(message, repeated, tag="3")]
    pub invites: ::prost::alloc::vec::Vec<OrganizationInvite>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateOrganizationInviteRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub email: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="3")]
    pub authorizations: ::prost::alloc::vec::Vec<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateOrganizationInviteResponse {
    #[prost(message, optional, tag="1")]
    pub invite: ::core::option::Option<OrganizationInvite>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateOrganizationInviteAuthorizationsRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub email: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="3")]
    pub add_authorizations: ::prost::alloc::vec::Vec<Authorization>,
    #[prost(message, repeated, tag="4")]
    pub remove_authorizations: ::prost::alloc::vec::Vec<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateOrganizationInviteAuthorizationsResponse {
    #[prost(message, optional, tag="1")]
    pub invite: ::core::option::Option<OrganizationInvite>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationInviteRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub email: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationInviteResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ResendOrganizationInviteRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub email: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ResendOrganizationInviteResponse {
    #[prost(message, optional, tag="1")]
    pub invite: ::core::option::Option<OrganizationInvite>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationMemberRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub user_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteOrganizationMemberResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct LocationOrganization {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(bool, tag="2")]
    pub primary: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct LocationAuth {
    /// Deprecated: use secrets field.
    #[prost(string, tag="1")]
    pub secret: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub location_id: ::prost::alloc::string::String,
    /// List of secrets used to authenticate to the Location.
    #[prost(message, repeated, tag="3")]
    pub secrets: ::prost::alloc::vec::Vec<SharedSecret>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct StorageConfig {
    #[prost(string, tag="1")]
    pub region: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Location {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    /// Location ID of the parent location
    #[prost(string, tag="4")]
    pub parent_location_id: ::prost::alloc::string::String,
    /// Location authentication secrets
    #[prost(message, optional, tag="5")]
    pub auth: ::core::option::Option<LocationAuth>,
    /// Organizations that the location is shared with
    #[prost(message, repeated, tag="6")]
    pub organizations: ::prost::alloc::vec::Vec<LocationOrganization>,
    /// Location creation timestamp
    #[prost(message, optional, tag="3")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(int32, tag="7")]
    pub robot_count: i32,
    /// Config for how data in this location is stored
    #[prost(message, optional, tag="8")]
    pub config: ::core::option::Option<StorageConfig>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct SharedSecret {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    /// The payload of the secret. Used during authentication to the rpc framework.
    #[prost(string, tag="2")]
    pub secret: ::prost::alloc::string::String,
    /// Date/time the secret was first created.
    #[prost(message, optional, tag="3")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    /// State of the shared secret. In most cases it should be enabled. We may support
    /// disabling a specific secret while keeping it in the database.
    #[prost(enumeration="shared_secret::State", tag="4")]
    pub state: i32,
}
/// Nested message and enum types in `SharedSecret`.
pub mod shared_secret {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Unspecified = 0,
        /// Secret is enabled and can be used in authentication.
        Enabled = 1,
        /// Secret is disabled and must not be used to authenticate to rpc.
        Disabled = 2,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Unspecified => "STATE_UNSPECIFIED",
                State::Enabled => "STATE_ENABLED",
                State::Disabled => "STATE_DISABLED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "STATE_UNSPECIFIED" => Some(Self::Unspecified),
                "STATE_ENABLED" => Some(Self::Enabled),
                "STATE_DISABLED" => Some(Self::Disabled),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateLocationRequest {
    /// Organization ID to create the location under
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    /// Name of the location
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    /// The new parent location to move the location under
    #[prost(string, optional, tag="3")]
    pub parent_location_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateLocationResponse {
    /// Location object is returned
    #[prost(message, optional, tag="1")]
    pub location: ::core::option::Option<Location>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetLocationRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetLocationResponse {
    #[prost(message, optional, tag="1")]
    pub location: ::core::option::Option<Location>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateLocationRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="3")]
    pub parent_location_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="4")]
    pub region: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateLocationResponse {
    #[prost(message, optional, tag="1")]
    pub location: ::core::option::Option<Location>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteLocationRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteLocationResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListLocationsRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ShareLocationRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ShareLocationResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UnshareLocationRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UnshareLocationResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListLocationsResponse {
    #[prost(message, repeated, tag="1")]
    pub locations: ::prost::alloc::vec::Vec<Location>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateLocationSecretRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateLocationSecretResponse {
    #[prost(message, optional, tag="1")]
    pub auth: ::core::option::Option<LocationAuth>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteLocationSecretRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub secret_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteLocationSecretResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct LocationAuthRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct LocationAuthResponse {
    #[prost(message, optional, tag="1")]
    pub auth: ::core::option::Option<LocationAuth>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRoverRentalRobotsRequest {
    #[prost(string, tag="1")]
    pub org_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct RoverRentalRobot {
    #[prost(string, tag="1")]
    pub robot_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub location_id: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub robot_name: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub robot_main_part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRoverRentalRobotsResponse {
    #[prost(message, repeated, tag="1")]
    pub robots: ::prost::alloc::vec::Vec<RoverRentalRobot>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotResponse {
    #[prost(message, optional, tag="1")]
    pub robot: ::core::option::Option<Robot>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartsRequest {
    #[prost(string, tag="1")]
    pub robot_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartsResponse {
    #[prost(message, repeated, tag="1")]
    pub parts: ::prost::alloc::vec::Vec<RobotPart>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartResponse {
    #[prost(message, optional, tag="1")]
    pub part: ::core::option::Option<RobotPart>,
    #[prost(string, tag="2")]
    pub config_json: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartLogsRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(bool, tag="2")]
    pub errors_only: bool,
    #[prost(string, optional, tag="3")]
    pub filter: ::core::option::Option<::prost::alloc::string::String>,
    /// if not provided, will return the first page of logs
    #[prost(string, optional, tag="4")]
    pub page_token: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct LogEntry {
    #[prost(string, tag="1")]
    pub host: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub level: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag="4")]
    pub logger_name: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub message: ::prost::alloc::string::String,
    #[prost(message, optional, tag="6")]
    pub caller: ::core::option::Option<::prost_types::Struct>,
    #[prost(string, tag="7")]
    pub stack: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="8")]
    pub fields: ::prost::alloc::vec::Vec<::prost_types::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartLogsResponse {
    #[prost(message, repeated, tag="1")]
    pub logs: ::prost::alloc::vec::Vec<LogEntry>,
    #[prost(string, tag="2")]
    pub next_page_token: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct TailRobotPartLogsRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(bool, tag="2")]
    pub errors_only: bool,
    #[prost(string, optional, tag="3")]
    pub filter: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct TailRobotPartLogsResponse {
    #[prost(message, repeated, tag="1")]
    pub logs: ::prost::alloc::vec::Vec<LogEntry>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartHistoryRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetRobotPartHistoryResponse {
    #[prost(message, repeated, tag="1")]
    pub history: ::prost::alloc::vec::Vec<RobotPartHistoryEntry>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateRobotPartRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub robot_config: ::core::option::Option<::prost_types::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateRobotPartResponse {
    #[prost(message, optional, tag="1")]
    pub part: ::core::option::Option<RobotPart>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct NewRobotPartRequest {
    #[prost(string, tag="1")]
    pub robot_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub part_name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct NewRobotPartResponse {
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotPartRequest {
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotPartResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Fragment {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub fragment: ::core::option::Option<::prost_types::Struct>,
    #[prost(string, tag="4")]
    pub organization_owner: ::prost::alloc::string::String,
    #[prost(bool, tag="5")]
    pub public: bool,
    #[prost(message, optional, tag="6")]
    pub created_on: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag="7")]
    pub organization_name: ::prost::alloc::string::String,
    /// number of robot parts using this fragment
    #[prost(int32, tag="8")]
    pub robot_part_count: i32,
    /// number of organizations using this fragment
    #[prost(int32, tag="9")]
    pub organization_count: i32,
    /// whether the organization(s) using this fragment is the same as the fragment org
    #[prost(bool, tag="10")]
    pub only_used_by_owner: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListFragmentsRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(bool, tag="2")]
    pub show_public: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListFragmentsResponse {
    #[prost(message, repeated, tag="1")]
    pub fragments: ::prost::alloc::vec::Vec<Fragment>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetFragmentRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetFragmentResponse {
    #[prost(message, optional, tag="1")]
    pub fragment: ::core::option::Option<Fragment>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateFragmentRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="2")]
    pub config: ::core::option::Option<::prost_types::Struct>,
    #[prost(string, tag="3")]
    pub organization_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateFragmentResponse {
    #[prost(message, optional, tag="1")]
    pub fragment: ::core::option::Option<Fragment>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateFragmentRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub config: ::core::option::Option<::prost_types::Struct>,
    #[prost(bool, optional, tag="4")]
    pub public: ::core::option::Option<bool>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateFragmentResponse {
    #[prost(message, optional, tag="1")]
    pub fragment: ::core::option::Option<Fragment>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteFragmentRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteFragmentResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListRobotsRequest {
    #[prost(string, tag="1")]
    pub location_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListRobotsResponse {
    #[prost(message, repeated, tag="1")]
    pub robots: ::prost::alloc::vec::Vec<Robot>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct NewRobotRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub location: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct NewRobotResponse {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateRobotRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub location: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateRobotResponse {
    #[prost(message, optional, tag="1")]
    pub robot: ::core::option::Option<Robot>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MarkPartAsMainRequest {
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MarkPartAsMainResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MarkPartForRestartRequest {
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct MarkPartForRestartResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateRobotPartSecretRequest {
    /// Robot Part ID to create the secret in.
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateRobotPartSecretResponse {
    /// Location object is returned
    #[prost(message, optional, tag="1")]
    pub part: ::core::option::Option<RobotPart>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotPartSecretRequest {
    #[prost(string, tag="1")]
    pub part_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub secret_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct DeleteRobotPartSecretResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Authorization {
    #[prost(string, tag="1")]
    pub authorization_type: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub authorization_id: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub resource_type: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub resource_id: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub identity_id: ::prost::alloc::string::String,
    #[prost(string, tag="6")]
    pub organization_id: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub identity_type: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct AddRoleRequest {
    #[prost(message, optional, tag="1")]
    pub authorization: ::core::option::Option<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct AddRoleResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct RemoveRoleRequest {
    #[prost(message, optional, tag="1")]
    pub authorization: ::core::option::Option<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct RemoveRoleResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ChangeRoleRequest {
    #[prost(message, optional, tag="1")]
    pub old_authorization: ::core::option::Option<Authorization>,
    #[prost(message, optional, tag="2")]
    pub new_authorization: ::core::option::Option<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ChangeRoleResponse {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListAuthorizationsRequest {
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    /// optional filter
    #[prost(string, repeated, tag="2")]
    pub resource_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListAuthorizationsResponse {
    #[prost(message, repeated, tag="1")]
    pub authorizations: ::prost::alloc::vec::Vec<Authorization>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CheckPermissionsRequest {
    #[prost(message, repeated, tag="1")]
    pub permissions: ::prost::alloc::vec::Vec<AuthorizedPermissions>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct AuthorizedPermissions {
    #[prost(string, tag="1")]
    pub resource_type: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub resource_id: ::prost::alloc::string::String,
    #[prost(string, repeated, tag="3")]
    pub permissions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CheckPermissionsResponse {
    #[prost(message, repeated, tag="1")]
    pub authorized_permissions: ::prost::alloc::vec::Vec<AuthorizedPermissions>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateModuleRequest {
    /// The organization to create the module under
    #[prost(string, tag="1")]
    pub organization_id: ::prost::alloc::string::String,
    /// The name of the module, which must be unique within your org
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateModuleResponse {
    /// The id of the module (formatted as prefix:name where prefix is the module owner's orgid or namespace)
    #[prost(string, tag="1")]
    pub module_id: ::prost::alloc::string::String,
    /// The detail page of the module
    #[prost(string, tag="2")]
    pub url: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateModuleRequest {
    /// The id of the module being updated
    #[prost(string, tag="1")]
    pub module_id: ::prost::alloc::string::String,
    /// The organization of the module
    #[prost(string, optional, tag="2")]
    pub organization_id: ::core::option::Option<::prost::alloc::string::String>,
    /// The visibility that should be set for the module
    #[prost(enumeration="Visibility", tag="3")]
    pub visibility: i32,
    /// The url to reference for documentation, code, etc.
    #[prost(string, tag="4")]
    pub url: ::prost::alloc::string::String,
    /// A short description of the module that explains its purpose
    #[prost(string, tag="5")]
    pub description: ::prost::alloc::string::String,
    /// A list of models that are available in the module
    #[prost(message, repeated, tag="6")]
    pub models: ::prost::alloc::vec::Vec<Model>,
    /// The executable to run to start the module program
    #[prost(string, tag="7")]
    pub entrypoint: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UpdateModuleResponse {
    /// The detail page of the module
    #[prost(string, tag="1")]
    pub url: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Model {
    /// The colon-delimited-triplet of the api implemented by the model
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// The colon-delimited-triplet of the model
    #[prost(string, tag="2")]
    pub model: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ModuleFileInfo {
    /// The id of the module being uploaded
    #[prost(string, tag="1")]
    pub module_id: ::prost::alloc::string::String,
    /// The organization of the module
    #[prost(string, optional, tag="2")]
    pub organization_id: ::core::option::Option<::prost::alloc::string::String>,
    /// The semver string that represents the new major/minor/patch version of the module
    #[prost(string, tag="3")]
    pub version: ::prost::alloc::string::String,
    /// The platform that the file is built to run on
    #[prost(string, tag="4")]
    pub platform: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UploadModuleFileRequest {
    #[prost(oneof="upload_module_file_request::ModuleFile", tags="1, 2")]
    pub module_file: ::core::option::Option<upload_module_file_request::ModuleFile>,
}
/// Nested message and enum types in `UploadModuleFileRequest`.
pub mod upload_module_file_request {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof, crate::ToObject, crate::WireSchema)]
    pub enum ModuleFile {
        /// The information about the module file being uploaded
        #[prost(message, tag="1")]
        ModuleFileInfo(super::ModuleFileInfo),
        /// The file contents to be uploaded
        #[prost(bytes="vec", tag="2")]
        File(::prost::alloc::vec::Vec<u8>),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct UploadModuleFileResponse {
    /// The detail page of the module
    #[prost(string, tag="1")]
    pub url: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetModuleRequest {
    /// The id of the module being retrieved
    #[prost(string, tag="1")]
    pub module_id: ::prost::alloc::string::String,
    /// The organization of the module
    #[prost(string, optional, tag="2")]
    pub organization_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetModuleResponse {
    /// The module object
    #[prost(message, optional, tag="1")]
    pub module: ::core::option::Option<Module>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Module {
    /// The id of the module
    #[prost(string, tag="1")]
    pub module_id: ::prost::alloc::string::String,
    /// The human readable name of the module
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    /// The visibility of the module
    #[prost(enumeration="Visibility", tag="3")]
    pub visibility: i32,
    /// The versions of the module that are available
    #[prost(message, repeated, tag="4")]
    pub versions: ::prost::alloc::vec::Vec<VersionHistory>,
    /// The url to reference for documentation, code, etc.
    #[prost(string, tag="5")]
    pub url: ::prost::alloc::string::String,
    /// A short description of the module that explains its purpose
    #[prost(string, tag="6")]
    pub description: ::prost::alloc::string::String,
    /// A list of models that are available in the module
    #[prost(message, repeated, tag="7")]
    pub models: ::prost::alloc::vec::Vec<Model>,
    /// The total number of robots using this module
    #[prost(int64, tag="8")]
    pub total_robot_usage: i64,
    /// The total number of organizations using this module
    #[prost(int64, tag="9")]
    pub total_organization_usage: i64,
    /// The id of the organization that owns the module
    #[prost(string, tag="10")]
    pub organization_id: ::prost::alloc::string::String,
    /// The executable to run to start the module program
    #[prost(string, tag="11")]
    pub entrypoint: ::prost::alloc::string::String,
    /// The public namespace of the organization that owns the module
    /// This is empty if no public namespace is set
    #[prost(string, tag="12")]
    pub public_namespace: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct VersionHistory {
    /// The semver string that represents the major/minor/patch version of the module
    #[prost(string, tag="1")]
    pub version: ::prost::alloc::string::String,
    /// The uploads that are available for this module version
    #[prost(message, repeated, tag="2")]
    pub files: ::prost::alloc::vec::Vec<Uploads>,
    /// The models that this verion of the module provides
    #[prost(message, repeated, tag="3")]
    pub models: ::prost::alloc::vec::Vec<Model>,
    /// The entrypoint for this version of the module
    #[prost(string, tag="4")]
    pub entrypoint: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct Uploads {
    /// The OS and platform the file was built for
    #[prost(string, tag="1")]
    pub platform: ::prost::alloc::string::String,
    /// The time when the file was uploaded
    #[prost(message, optional, tag="2")]
    pub uploaded_at: ::core::option::Option<::prost_types::Timestamp>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListModulesRequest {
    /// The organization to return private modules for
    #[prost(string, optional, tag="1")]
    pub organization_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListModulesResponse {
    /// A listed of modules. When authenticated, this API will return modules that are private for this org. Public modules are always returned.
    #[prost(message, repeated, tag="1")]
    pub modules: ::prost::alloc::vec::Vec<Module>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetUserIdByEmailRequest {
    #[prost(string, tag="1")]
    pub email: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct GetUserIdByEmailResponse {
    #[prost(string, tag="1")]
    pub user_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationsByUserRequest {
    #[prost(string, tag="1")]
    pub user_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct OrgDetails {
    #[prost(string, tag="1")]
    pub org_id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub org_name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct ListOrganizationsByUserResponse {
    #[prost(message, repeated, tag="1")]
    pub orgs: ::prost::alloc::vec::Vec<OrgDetails>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateKeyRequest {
    #[prost(message, repeated, tag="1")]
    pub authorizations: ::prost::alloc::vec::Vec<Authorization>,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, crate::ToObject, crate::WireSchema)]
pub struct CreateKeyResponse {
    #[prost(string, tag="1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Visibility {
    /// Default visibility
    Unspecified = 0,
    /// Private modules are visible only within your organization
    Private = 1,
    /// Public modules are visible to everyone
    Public = 2,
}
impl Visibility {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Visibility::Unspecified => "VISIBILITY_UNSPECIFIED",
            Visibility::Private => "VISIBILITY_PRIVATE",
            Visibility::Public => "VISIBILITY_PUBLIC",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "VISIBILITY_UNSPECIFIED" => Some(Self::Unspecified),
            "VISIBILITY_PRIVATE" => Some(Self::Private),
            "VISIBILITY_PUBLIC" => Some(Self::Public),
            _ => None,
        }
    }
}
// @@protoc_insertion_point(module)
