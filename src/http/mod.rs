pub mod routing;
pub mod rpc;
pub mod types;
