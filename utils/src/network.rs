use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Description of a chain the dashboard knows about. The fields are what
/// a wallet provider needs to add the chain when it does not know it yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Network {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: Option<String>,
    pub native_currency: NativeCurrency,
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (chain_id: {})", self.name, self.chain_id)
    }
}

impl Network {
    pub fn mainnet() -> Self {
        Network {
            name: "Ethereum Mainnet".to_string(),
            chain_id: 1,
            rpc_url: "https://eth.llamarpc.com".to_string(),
            explorer_url: Some("https://etherscan.io".to_string()),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    pub fn arbitrum_one() -> Self {
        Network {
            name: "Arbitrum One".to_string(),
            chain_id: 42161,
            rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
            explorer_url: Some("https://arbiscan.io".to_string()),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    pub fn from_chain_id(chain_id: u64) -> crate::Result<Network> {
        [Self::mainnet(), Self::arbitrum_one()]
            .into_iter()
            .find(|n| n.chain_id == chain_id)
            .ok_or(crate::Error::NetworkNotFound(chain_id))
    }

    /// The single network the dashboard wants the wallet to be on.
    pub fn expected(config: &Config) -> Network {
        let chain_id = config.get_expected_chain_id();
        Self::from_chain_id(chain_id).unwrap_or_else(|_| {
            let mut network = Self::arbitrum_one();
            network.name = format!("Chain {chain_id}");
            network.chain_id = chain_id;
            network
        })
    }

    /// Mismatch predicate: true iff the resolved chain is this network.
    pub fn matches(&self, chain_id: u64) -> bool {
        self.chain_id == chain_id
    }
}
