pub mod dex;
pub mod evm;
pub mod oracle;
pub mod tokenfactory;
