//! Encode/decode entry points shared by every protobuf message.
//!
//! `WireCodec` is implemented for any prost message that also derives serde,
//! so `Coin::from_bytes(..)`, `msg.to_json()` and friends work uniformly.

use anyhow::Result;
use prost::{Message, Name};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::chain::error::ChainError;
use crate::chain::proto::json;
use crate::chain::proto::Any;

pub trait WireCodec: Message + Default + Serialize + DeserializeOwned {
    /// Protobuf binary encoding.
    fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Decodes a complete buffer. Unknown fields are skipped.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes).map_err(|source| {
            ChainError::Decode {
                type_name: std::any::type_name::<Self>(),
                source,
            }
            .into()
        })
    }

    fn from_bytes_length_delimited(bytes: &[u8]) -> Result<Self> {
        Self::decode_length_delimited(bytes).map_err(|source| {
            ChainError::Decode {
                type_name: std::any::type_name::<Self>(),
                source,
            }
            .into()
        })
    }

    /// REST gateway JSON form.
    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|source| {
            ChainError::Json {
                type_name: std::any::type_name::<Self>(),
                source,
            }
            .into()
        })
    }

    /// Lenient JSON decode: camelCase or snake_case keys, `null` as absent.
    fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(json::normalize(value)).map_err(|source| {
            ChainError::Json {
                type_name: std::any::type_name::<Self>(),
                source,
            }
            .into()
        })
    }

    fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| ChainError::Json {
            type_name: std::any::type_name::<Self>(),
            source,
        })?;
        Self::from_json(value)
    }
}

impl<T> WireCodec for T where T: Message + Default + Serialize + DeserializeOwned {}

/// Packs a message into `Any` under its `/package.Name` type URL.
pub fn to_any<M: Message + Name>(msg: &M) -> Any {
    Any::new(M::type_url(), msg.encode_to_vec())
}

/// Unpacks an `Any`, failing with `TypeMismatch` when the URL is for another type.
pub fn from_any<M: WireCodec + Name>(any: &Any) -> Result<M> {
    let expected = M::type_url();
    if any.type_url != expected {
        return Err(ChainError::TypeMismatch {
            expected,
            actual: any.type_url.clone(),
        }
        .into());
    }
    M::from_bytes(&any.value)
}

/// Type-URL lookup for `Any` payloads the crate knows how to render.
pub mod any_registry {
    use anyhow::Result;
    use prost::Name;
    use serde_json::Value;

    use super::WireCodec;
    use crate::chain::proto::{cosmos, sei};

    macro_rules! registry {
        ($($ty:ty),+ $(,)?) => {
            /// Decodes `value` as the message registered under `type_url`
            /// and renders it as JSON. `None` when the type is unknown.
            pub fn to_json(type_url: &str, value: &[u8]) -> Option<Result<Value>> {
                $(
                    if type_url == <$ty as Name>::type_url() {
                        return Some(<$ty>::from_bytes(value).and_then(|msg| msg.to_json()));
                    }
                )+
                None
            }

            /// Parses the inline JSON fields of an `Any` and re-encodes them.
            pub fn from_json(type_url: &str, value: Value) -> Option<Result<Vec<u8>>> {
                $(
                    if type_url == <$ty as Name>::type_url() {
                        return Some(<$ty>::from_json(value).map(|msg| msg.to_bytes()));
                    }
                )+
                None
            }

            /// Every registered type URL.
            pub fn type_urls() -> Vec<String> {
                vec![$(<$ty as Name>::type_url()),+]
            }
        };
    }

    registry!(
        cosmos::auth::BaseAccount,
        cosmos::auth::ModuleAccount,
        cosmos::vesting::BaseVestingAccount,
        cosmos::vesting::ContinuousVestingAccount,
        cosmos::vesting::DelayedVestingAccount,
        cosmos::vesting::PeriodicVestingAccount,
        cosmos::vesting::PermanentLockedAccount,
        cosmos::crypto::PubKey,
        cosmos::bank::MsgSend,
        cosmos::tx::Tx,
        cosmos::tx::TxRaw,
        sei::evm::MsgSend,
        sei::evm::MsgAssociate,
        sei::evm::MsgRegisterPointer,
        sei::evm::MsgAssociateContractAddress,
        sei::oracle::MsgAggregateExchangeRateVote,
        sei::oracle::MsgDelegateFeedConsent,
        sei::tokenfactory::MsgCreateDenom,
        sei::tokenfactory::MsgMint,
        sei::tokenfactory::MsgBurn,
        sei::tokenfactory::MsgChangeAdmin,
        sei::tokenfactory::MsgSetDenomMetadata,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::proto::cosmos::auth::BaseAccount;
    use crate::chain::proto::cosmos::bank::MsgSend;
    use crate::chain::proto::cosmos::crypto::PubKey;
    use crate::chain::proto::cosmos::tx::Tx;
    use crate::chain::proto::Coin;
    use serde_json::json;

    #[test]
    fn test_decode_error_is_typed() {
        // Length prefix runs past the end of the buffer.
        let err = Coin::from_bytes(&[0x0a, 0x10, b'u']).unwrap_err();
        match err.downcast_ref::<ChainError>() {
            Some(ChainError::Decode { type_name, .. }) => assert!(type_name.ends_with("Coin")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_is_typed() {
        let err = Coin::from_json(json!({"denom": 5})).unwrap_err();
        assert!(matches!(err.downcast_ref::<ChainError>(), Some(ChainError::Json { .. })));
        assert!(Coin::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_length_delimited() {
        let coin = Coin::new(10, "usei");
        let framed = coin.encode_length_delimited_to_vec();
        assert_eq!(Coin::from_bytes_length_delimited(&framed).unwrap(), coin);
    }

    #[test]
    fn test_any_pack_and_unpack() {
        let msg = MsgSend {
            from_address: "sei1from".into(),
            to_address: "sei1to".into(),
            amount: vec![Coin::new(1, "usei")],
        };
        let any = to_any(&msg);
        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(from_any::<MsgSend>(&any).unwrap(), msg);

        let err = from_any::<PubKey>(&any).unwrap_err();
        assert!(matches!(err.downcast_ref::<ChainError>(), Some(ChainError::TypeMismatch { .. })));
    }

    #[test]
    fn test_any_json_expands_registered_payload() {
        let account = BaseAccount {
            address: "sei1abc".into(),
            pub_key: Some(to_any(&PubKey { key: vec![2; 33] })),
            account_number: 7,
            sequence: 3,
        };
        let v = account.to_json().unwrap();
        assert_eq!(v["pub_key"]["@type"], "/cosmos.crypto.secp256k1.PubKey");
        assert_eq!(v["pub_key"]["key"], "AgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgIC");
        assert_eq!(v["account_number"], "7");

        assert_eq!(BaseAccount::from_json(v).unwrap(), account);
    }

    #[test]
    fn test_any_json_unknown_type_stays_opaque() {
        let any = Any::new("/example.v1.Unknown", vec![1, 2, 3]);
        let v = serde_json::to_value(&any).unwrap();
        assert_eq!(v, json!({"@type": "/example.v1.Unknown", "value": "AQID"}));

        let back: Any = serde_json::from_value(v).unwrap();
        assert_eq!(back, any);
    }

    #[test]
    fn test_any_json_unregistered_inline_payload_is_rejected() {
        let tx = json!({
            "body": {
                "messages": [{
                    "@type": "/cosmos.staking.v1beta1.MsgDelegate",
                    "delegator_address": "sei1delegator",
                    "validator_address": "seivaloper1validator",
                    "amount": {"denom": "usei", "amount": "100"}
                }],
                "memo": ""
            },
            "signatures": []
        });
        let err = Tx::from_json(tx).unwrap_err();
        assert!(format!("{err:#}").contains("/cosmos.staking.v1beta1.MsgDelegate"));

        let empty: Any = serde_json::from_value(json!({"@type": "/example.v1.Empty"})).unwrap();
        assert_eq!(empty, Any::new("/example.v1.Empty", Vec::new()));
    }

    #[test]
    fn test_registry_lists_accounts() {
        let urls = any_registry::type_urls();
        assert!(urls.contains(&"/cosmos.auth.v1beta1.BaseAccount".to_string()));
        assert!(urls.contains(&"/sei.evm.v1.MsgAssociate".to_string()));
        assert!(any_registry::to_json("/nope", &[]).is_none());
    }
}
