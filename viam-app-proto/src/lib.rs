pub mod common;

#[macro_use]
pub extern crate viam_app_proto_macros;

pub use viam_app_proto_macros::ToObject;
pub use viam_app_proto_macros::WireSchema;

/// Well known protobuf types, re-exported from prost-types
pub mod google {
    pub mod protobuf {
        pub use prost_types::*;
    }
}

/// Message bindings for the Viam app API, from definitions in [api repository](https://github.com/viamrobotics/api/tree/main/proto/viam), auto-generated
pub mod proto {

    // Don't bother to clippy generated proto code
    #![allow(clippy::all)]

    pub mod app {
        pub mod v1 {
            include!("gen/viam.app.v1.rs");
        }
    }

    pub mod component {
        pub mod servo {
            pub mod v1 {
                include!("gen/viam.component.servo.v1.rs");
            }
        }
    }
}
