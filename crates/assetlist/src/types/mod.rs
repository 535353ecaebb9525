pub mod asset;
pub mod chain;
pub mod ibc;
pub mod zone;
