//! Protobuf message types for the Cosmos SDK and Sei modules this crate talks to.
//!
//! Every message derives `prost::Message` for the binary wire format and
//! serde for the REST gateway JSON form (see [`json`]). Field numbers follow
//! the upstream `.proto` definitions. Partial construction uses struct update
//! syntax over `Default`:
//!
//! ```
//! use sei_client::chain::proto::sei::oracle::QueryTwapsRequest;
//! let req = QueryTwapsRequest { lookback_seconds: 3600, ..Default::default() };
//! assert_eq!(req.lookback_seconds, 3600);
//! ```

/// Implements `prost::Name` so messages can be packed into [`google::Any`].
macro_rules! impl_name {
    ($package:literal => $($ty:ident),+ $(,)?) => {
        $(
            impl ::prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = $package;

                fn full_name() -> String {
                    format!("{}.{}", $package, stringify!($ty))
                }

                fn type_url() -> String {
                    format!("/{}.{}", $package, stringify!($ty))
                }
            }
        )+
    };
}

/// Declares a protobuf enum's proto names and a serde `with` module mapping
/// the `i32` field to and from those names.
macro_rules! proto_enum {
    ($ty:ident, $module:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::chain::proto::json::ProtoEnum for $ty {
            fn as_str_name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }

            fn from_str_name(value: &str) -> Option<Self> {
                match value {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        pub(crate) mod $module {
            pub fn serialize<S: ::serde::Serializer>(value: &i32, s: S) -> Result<S::Ok, S::Error> {
                $crate::chain::proto::json::serialize_enum::<super::$ty, S>(*value, s)
            }

            pub fn deserialize<'de, D: ::serde::Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
                $crate::chain::proto::json::deserialize_enum::<super::$ty, D>(d)
            }
        }
    };
}

pub mod json;
pub mod google;
pub mod cosmos;
pub mod sei;

pub use cosmos::base::{Coin, DecCoin, PageRequest, PageResponse};
pub use google::Any;
