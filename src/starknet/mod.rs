pub mod erc20;
pub mod rpc_client;

pub use erc20::{Erc20Contract, Erc20Error};
pub use rpc_client::{RpcError, StarknetRpcClient};
