use serde::{Deserialize, Serialize};

use crate::disk_storage::DiskStorageInterface;

pub const DEFAULT_PRICE_API_URL: &str = "https://arbitrum-api.gmxinfra.io";
pub const DEFAULT_CANDLE_PERIOD: &str = "1m";
pub const DEFAULT_EXPECTED_CHAIN_ID: u64 = 42161;

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    pub price_api_url: Option<String>,
    /// JSON-RPC endpoint of the external wallet provider. When this is not
    /// set, the dashboard behaves as if no wallet is installed.
    pub wallet_rpc_url: Option<String>,
    pub expected_chain_id: Option<u64>,
    pub candle_period: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_api_url: None,
            wallet_rpc_url: None,
            expected_chain_id: None,
            candle_period: None,
            theme_name: default_theme_name(),
        }
    }
}

fn default_theme_name() -> String {
    "Monochrome".to_string()
}

impl DiskStorageInterface for Config {
    const FILE_NAME: &'static str = "config";
}

impl Config {
    pub fn get_price_api_url(&self) -> String {
        self.price_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string())
    }

    pub fn get_wallet_rpc_url(&self) -> Option<String> {
        self.wallet_rpc_url.clone()
    }

    pub fn get_expected_chain_id(&self) -> u64 {
        self.expected_chain_id.unwrap_or(DEFAULT_EXPECTED_CHAIN_ID)
    }

    pub fn get_candle_period(&self) -> String {
        self.candle_period
            .clone()
            .unwrap_or_else(|| DEFAULT_CANDLE_PERIOD.to_string())
    }

    pub fn get_theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn set_theme_name(theme_name: String) -> crate::Result<()> {
        let mut config = Config::load()?;
        config.theme_name = theme_name;
        config.save()?;
        Ok(())
    }
}
