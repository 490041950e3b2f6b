use alloy::primitives::U256;
use thiserror::Error;

use super::rpc_client::{RpcError, StarknetRpcClient};

// starknet_keccak of the camelCase ERC20 entry points the analyzer reads.
const SELECTOR_NAME: &str =
    "0x361458367e696363fbcc70777d07ebbd2394e89fd0adcaf147faccd1d294d60";
const SELECTOR_SYMBOL: &str =
    "0x216b05c387bab9ac31918a3e61672f4618601f3c598a2f3f2710f37053e1ea4";
const SELECTOR_TOTAL_SUPPLY: &str =
    "0x80aa9fdbfaf9615e4afc7f5f722e265daca5ccc655360fa5ccacf9c267936d";
const SELECTOR_CIRCULATING_SUPPLY: &str =
    "0x6527dcc032aaff7f48cff796db6fee237d0a917849d3f70ccb711adcc34ec4";
const SELECTOR_OWNER: &str =
    "0x2016836a56b71f0d02689e69e326f4f4c1b9057164ef592671cf0d37c8040c0";
const SELECTOR_BALANCE_OF: &str =
    "0x2e4263afad30923c891518314c3c95dbe830a16874e8abc5777a9a20b54c76e";

#[derive(Debug, Error)]
pub enum Erc20Error {
    #[error("call to '{entry_point}' on {contract} failed: {source}")]
    Call {
        contract: String,
        entry_point: &'static str,
        source: RpcError,
    },

    #[error("'{entry_point}' on {contract} returned malformed data: {detail}")]
    Decode {
        contract: String,
        entry_point: &'static str,
        detail: String,
    },
}

/// Typed read-only view over an ERC20-style token contract.
#[derive(Debug, Clone)]
pub struct Erc20Contract {
    rpc: StarknetRpcClient,
    address: String,
}

impl Erc20Contract {
    pub fn new(rpc: StarknetRpcClient, address: impl Into<String>) -> Self {
        Self {
            rpc,
            address: address.into(),
        }
    }

    pub async fn name(&self) -> Result<String, Erc20Error> {
        let felts = self.invoke(SELECTOR_NAME, "name").await?;
        self.decode_short_string(&felts, "name")
    }

    pub async fn symbol(&self) -> Result<String, Erc20Error> {
        let felts = self.invoke(SELECTOR_SYMBOL, "symbol").await?;
        self.decode_short_string(&felts, "symbol")
    }

    pub async fn total_supply(&self) -> Result<U256, Erc20Error> {
        let felts = self.invoke(SELECTOR_TOTAL_SUPPLY, "totalSupply").await?;
        self.decode_u256(&felts, "totalSupply")
    }

    pub async fn circulating_supply(&self) -> Result<U256, Erc20Error> {
        let felts = self
            .invoke(SELECTOR_CIRCULATING_SUPPLY, "circulatingSupply")
            .await?;
        self.decode_u256(&felts, "circulatingSupply")
    }

    /// Current owner address as a normalized hex felt. The zero felt means
    /// ownership has been renounced.
    pub async fn owner(&self) -> Result<String, Erc20Error> {
        let felts = self.invoke(SELECTOR_OWNER, "owner").await?;
        let felt = felts.first().ok_or_else(|| Erc20Error::Decode {
            contract: self.address.clone(),
            entry_point: "owner",
            detail: "empty return data".into(),
        })?;
        let value = self.parse_felt(felt, "owner")?;
        Ok(format!("{value:#x}"))
    }

    pub async fn balance_of(&self, account: &str) -> Result<U256, Erc20Error> {
        let felts = self
            .rpc
            .call(&self.address, SELECTOR_BALANCE_OF, &[account.to_string()])
            .await
            .map_err(|source| Erc20Error::Call {
                contract: self.address.clone(),
                entry_point: "balanceOf",
                source,
            })?;
        self.decode_u256(&felts, "balanceOf")
    }

    async fn invoke(
        &self,
        selector: &str,
        entry_point: &'static str,
    ) -> Result<Vec<String>, Erc20Error> {
        self.rpc
            .call(&self.address, selector, &[])
            .await
            .map_err(|source| Erc20Error::Call {
                contract: self.address.clone(),
                entry_point,
                source,
            })
    }

    fn parse_felt(&self, felt: &str, entry_point: &'static str) -> Result<U256, Erc20Error> {
        parse_felt(felt).ok_or_else(|| Erc20Error::Decode {
            contract: self.address.clone(),
            entry_point,
            detail: format!("invalid felt '{felt}'"),
        })
    }

    /// Decode a u256 return value. Cairo serializes u256 as a (low, high)
    /// felt pair; a single felt is accepted as a plain low word.
    fn decode_u256(&self, felts: &[String], entry_point: &'static str) -> Result<U256, Erc20Error> {
        match felts {
            [low] => self.parse_felt(low, entry_point),
            [low, high, ..] => {
                let low = self.parse_felt(low, entry_point)?;
                let high = self.parse_felt(high, entry_point)?;
                Ok((high << 128) | low)
            }
            [] => Err(Erc20Error::Decode {
                contract: self.address.clone(),
                entry_point,
                detail: "empty return data".into(),
            }),
        }
    }

    fn decode_short_string(
        &self,
        felts: &[String],
        entry_point: &'static str,
    ) -> Result<String, Erc20Error> {
        let felt = felts.first().ok_or_else(|| Erc20Error::Decode {
            contract: self.address.clone(),
            entry_point,
            detail: "empty return data".into(),
        })?;
        let value = self.parse_felt(felt, entry_point)?;
        Ok(decode_short_string(value))
    }
}

/// Parse a hex or decimal felt string into a U256.
pub fn parse_felt(felt: &str) -> Option<U256> {
    let felt = felt.trim();
    if let Some(hex) = felt.strip_prefix("0x").or_else(|| felt.strip_prefix("0X")) {
        U256::from_str_radix(hex, 16).ok()
    } else {
        U256::from_str_radix(felt, 10).ok()
    }
}

/// True when the felt is the zero address (renounced ownership).
pub fn is_zero_felt(felt: &str) -> bool {
    parse_felt(felt).is_some_and(|v| v.is_zero())
}

/// Decode a Cairo short string: big-endian ASCII bytes packed into a felt.
/// Non-printable bytes are dropped rather than failing the read.
pub fn decode_short_string(value: U256) -> String {
    let bytes = value.to_be_bytes::<32>();
    bytes
        .iter()
        .skip_while(|b| **b == 0)
        .filter(|b| b.is_ascii_graphic() || **b == b' ')
        .map(|b| *b as char)
        .collect()
}
