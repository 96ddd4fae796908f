//! `cosmos.vesting.v1beta1` account types.

use serde::{Deserialize, Serialize};

use crate::chain::proto::cosmos::auth::BaseAccount;
use crate::chain::proto::json::num_str;
use crate::chain::proto::Coin;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseVestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_account: Option<BaseAccount>,
    #[prost(message, repeated, tag = "2")]
    pub original_vesting: Vec<Coin>,
    #[prost(message, repeated, tag = "3")]
    pub delegated_free: Vec<Coin>,
    #[prost(message, repeated, tag = "4")]
    pub delegated_vesting: Vec<Coin>,
    #[prost(int64, tag = "5")]
    #[serde(with = "num_str")]
    pub end_time: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousVestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_vesting_account: Option<BaseVestingAccount>,
    #[prost(int64, tag = "2")]
    #[serde(with = "num_str")]
    pub start_time: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayedVestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_vesting_account: Option<BaseVestingAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    #[prost(int64, tag = "1")]
    #[serde(with = "num_str")]
    pub length: i64,
    #[prost(message, repeated, tag = "2")]
    pub amount: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicVestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_vesting_account: Option<BaseVestingAccount>,
    #[prost(int64, tag = "2")]
    #[serde(with = "num_str")]
    pub start_time: i64,
    #[prost(message, repeated, tag = "3")]
    pub vesting_periods: Vec<Period>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PermanentLockedAccount {
    #[prost(message, optional, tag = "1")]
    pub base_vesting_account: Option<BaseVestingAccount>,
}

impl_name!("cosmos.vesting.v1beta1" =>
    BaseVestingAccount,
    ContinuousVestingAccount,
    DelayedVestingAccount,
    Period,
    PeriodicVestingAccount,
    PermanentLockedAccount,
);
