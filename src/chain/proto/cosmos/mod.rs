pub mod auth;
pub mod bank;
pub mod base;
pub mod crypto;
pub mod slashing;
pub mod tx;
pub mod vesting;
