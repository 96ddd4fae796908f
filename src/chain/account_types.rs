//! Polymorphic account decoding for `cosmos.auth.v1beta1.Query/Account`.
//!
//! The query returns the account wrapped in `google.protobuf.Any`; the
//! concrete type is picked from its type URL.

use anyhow::{Context, Result};
use prost::Name;

use crate::chain::codec::WireCodec;
use crate::chain::proto::cosmos::auth::{BaseAccount, ModuleAccount};
use crate::chain::proto::cosmos::vesting::{
    BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount, PeriodicVestingAccount,
    PermanentLockedAccount,
};
use crate::chain::proto::Any;

#[derive(Debug, Clone)]
pub enum Account {
    Base(BaseAccount),
    Module(ModuleAccount),

    BaseVesting(BaseVestingAccount),
    ContinuousVesting(ContinuousVestingAccount),
    DelayedVesting(DelayedVestingAccount),
    PeriodicVesting(PeriodicVestingAccount),
    PermanentLocked(PermanentLockedAccount),

    Unsupported { type_url: String, raw_value: Vec<u8> },
}

/// Fields needed to sign a transaction for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: String,
    pub sequence: u64,
    pub account_number: u64,
}

impl From<&BaseAccount> for AccountInfo {
    fn from(base: &BaseAccount) -> Self {
        Self {
            address: base.address.clone(),
            sequence: base.sequence,
            account_number: base.account_number,
        }
    }
}

fn decode<M: WireCodec + Name>(value: &[u8]) -> Result<M> {
    M::from_bytes(value).with_context(|| format!("Failed to decode {}", M::NAME))
}

impl Account {
    pub fn decode_any(type_url: &str, value: &[u8]) -> Result<Self> {
        let account = if type_url == BaseAccount::type_url() {
            Account::Base(decode(value)?)
        } else if type_url == ModuleAccount::type_url() {
            Account::Module(decode(value)?)
        } else if type_url == BaseVestingAccount::type_url() {
            Account::BaseVesting(decode(value)?)
        } else if type_url == ContinuousVestingAccount::type_url() {
            Account::ContinuousVesting(decode(value)?)
        } else if type_url == DelayedVestingAccount::type_url() {
            Account::DelayedVesting(decode(value)?)
        } else if type_url == PeriodicVestingAccount::type_url() {
            Account::PeriodicVesting(decode(value)?)
        } else if type_url == PermanentLockedAccount::type_url() {
            Account::PermanentLocked(decode(value)?)
        } else {
            log::warn!("Encountered unsupported account type: {}", type_url);
            Account::Unsupported {
                type_url: type_url.to_string(),
                raw_value: value.to_vec(),
            }
        };
        Ok(account)
    }

    pub fn from_any(any: &Any) -> Result<Self> {
        Self::decode_any(&any.type_url, &any.value)
    }

    /// The embedded `BaseAccount`, if the variant carries one.
    pub fn base_account(&self) -> Option<&BaseAccount> {
        fn vesting_base(bva: &Option<BaseVestingAccount>) -> Option<&BaseAccount> {
            bva.as_ref().and_then(|b| b.base_account.as_ref())
        }

        match self {
            Account::Base(acc) => Some(acc),
            Account::Module(acc) => acc.base_account.as_ref(),
            Account::BaseVesting(acc) => acc.base_account.as_ref(),
            Account::ContinuousVesting(acc) => vesting_base(&acc.base_vesting_account),
            Account::DelayedVesting(acc) => vesting_base(&acc.base_vesting_account),
            Account::PeriodicVesting(acc) => vesting_base(&acc.base_vesting_account),
            Account::PermanentLocked(acc) => vesting_base(&acc.base_vesting_account),
            Account::Unsupported { .. } => None,
        }
    }

    /// `None` when the account type carries no base account.
    pub fn get_account_info(&self) -> Option<AccountInfo> {
        self.base_account().map(AccountInfo::from)
    }

    pub fn account_type(&self) -> &'static str {
        match self {
            Account::Base(_) => "BaseAccount",
            Account::Module(_) => "ModuleAccount",
            Account::BaseVesting(_) => "BaseVestingAccount",
            Account::ContinuousVesting(_) => "ContinuousVestingAccount",
            Account::DelayedVesting(_) => "DelayedVestingAccount",
            Account::PeriodicVesting(_) => "PeriodicVestingAccount",
            Account::PermanentLocked(_) => "PermanentLockedAccount",
            Account::Unsupported { .. } => "UnsupportedAccount",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Account::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::to_any;

    fn base() -> BaseAccount {
        BaseAccount {
            address: "sei1test123".to_string(),
            sequence: 5,
            account_number: 12345,
            pub_key: None,
        }
    }

    #[test]
    fn test_account_info_extraction() {
        let account = Account::from_any(&to_any(&base())).unwrap();
        assert_eq!(account.account_type(), "BaseAccount");
        let info = account.get_account_info().unwrap();
        assert_eq!(info.address, "sei1test123");
        assert_eq!(info.sequence, 5);
        assert_eq!(info.account_number, 12345);
    }

    #[test]
    fn test_nested_vesting_account() {
        let continuous = ContinuousVestingAccount {
            base_vesting_account: Some(BaseVestingAccount {
                base_account: Some(base()),
                ..Default::default()
            }),
            start_time: 1_700_000_000,
        };
        let account = Account::from_any(&to_any(&continuous)).unwrap();
        assert_eq!(account.account_type(), "ContinuousVestingAccount");
        assert_eq!(account.get_account_info().unwrap().account_number, 12345);
    }

    #[test]
    fn test_module_account() {
        let module = ModuleAccount {
            base_account: Some(base()),
            name: "fee_collector".into(),
            permissions: vec![],
        };
        let account = Account::from_any(&to_any(&module)).unwrap();
        assert!(account.is_supported());
        assert_eq!(account.get_account_info().unwrap().sequence, 5);
    }

    #[test]
    fn test_unsupported_account() {
        let unsupported = Account::decode_any("/unknown.type", &[1, 2, 3]).unwrap();
        assert!(unsupported.get_account_info().is_none());
        assert!(!unsupported.is_supported());
        assert_eq!(unsupported.account_type(), "UnsupportedAccount");
    }

    #[test]
    fn test_corrupt_known_account_fails() {
        assert!(Account::decode_any("/cosmos.auth.v1beta1.BaseAccount", &[0x0a, 0x10]).is_err());
    }
}
