//! Authentication adapters implementing the `SessionValidator` port.

mod mock;
mod trusted;

pub use mock::MockSessionValidator;
pub use trusted::TrustedGatewayValidator;
