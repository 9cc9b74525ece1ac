pub mod clusters;
pub mod constants;
pub mod enums;
pub mod error;
pub mod http_rpc;
pub mod keypair;
pub mod rpc;
pub mod transaction;
