pub mod faucet_service;
pub mod lifecycle;
pub mod program_service;

pub use faucet_service::{FaucetService, FaucetStats};
pub use lifecycle::{SwapRequest, SwapStyle, TokenLifecycle};
pub use program_service::ProgramService;
