use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
    time::Duration,
};

use alloy::{primitives::Address, providers::Provider};
use serde_json::json;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;

use crate::{alloy::StringExt, config::Config, network::Network};

pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const NOTIFICATION_CAPACITY: usize = 16;
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Notifications pushed by a wallet provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderNotification {
    AccountsChanged(Vec<Address>),
    ChainChanged(u64),
}

/// Wallet connection state. Ephemeral: re-derived from the provider on
/// every explicit connect and updated by provider notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionState {
    pub address: Option<Address>,
    pub chain_id: Option<u64>,
    pub wrong_network: bool,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The external wallet surface the dashboard consumes. Implementations
/// are opaque: a JSON-RPC node in production, a mock in tests.
pub trait WalletProvider: Send + Sync {
    fn request_accounts(&self) -> BoxFut<'_, crate::Result<Vec<Address>>>;

    fn signer_address(&self) -> BoxFut<'_, crate::Result<Address>>;

    fn chain_id(&self) -> BoxFut<'_, crate::Result<u64>>;

    fn switch_chain(&self, chain_id: u64) -> BoxFut<'_, crate::Result<()>>;

    fn add_chain<'a>(&'a self, network: &'a Network) -> BoxFut<'a, crate::Result<()>>;

    fn subscribe(&self) -> broadcast::Receiver<ProviderNotification>;
}

/// Wallet provider backed by an external Ethereum JSON-RPC endpoint. The
/// node's unlocked accounts play the role of the authorized account list:
/// an empty list means the user has not granted access. Account and chain
/// changes are observed by polling and pushed as notifications.
pub struct NodeProvider {
    rpc_url: String,
    notifications: broadcast::Sender<ProviderNotification>,
}

impl NodeProvider {
    /// Detects the external provider from the config. `Ok(None)` means no
    /// provider is installed. The returned join handle belongs to the
    /// polling task, which runs until the shutdown token fires.
    pub fn detect(
        config: &Config,
        shutdown: CancellationToken,
    ) -> crate::Result<Option<(Arc<NodeProvider>, JoinHandle<()>)>> {
        let Some(rpc_url) = config.get_wallet_rpc_url() else {
            return Ok(None);
        };

        // Validate the URL here so a typo surfaces at startup rather than
        // inside the polling task.
        let _ = rpc_url.to_alloy_provider()?;

        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        let provider = Arc::new(NodeProvider {
            rpc_url: rpc_url.clone(),
            notifications: notifications.clone(),
        });

        let thread = tokio::spawn(async move {
            poll_provider_changes(rpc_url, notifications, shutdown).await;
        });

        Ok(Some((provider, thread)))
    }

    fn provider(&self) -> crate::Result<impl Provider + use<'_>> {
        self.rpc_url.to_alloy_provider()
    }
}

impl WalletProvider for NodeProvider {
    fn request_accounts(&self) -> BoxFut<'_, crate::Result<Vec<Address>>> {
        Box::pin(async move { Ok(self.provider()?.get_accounts().await?) })
    }

    fn signer_address(&self) -> BoxFut<'_, crate::Result<Address>> {
        Box::pin(async move {
            self.provider()?
                .get_accounts()
                .await?
                .first()
                .copied()
                .ok_or(crate::Error::ConnectionRejected)
        })
    }

    fn chain_id(&self) -> BoxFut<'_, crate::Result<u64>> {
        Box::pin(async move { Ok(self.provider()?.get_chain_id().await?) })
    }

    fn switch_chain(&self, chain_id: u64) -> BoxFut<'_, crate::Result<()>> {
        Box::pin(async move {
            let result = self
                .provider()?
                .raw_request::<_, serde_json::Value>(
                    "wallet_switchEthereumChain".into(),
                    [json!({ "chainId": format!("0x{chain_id:x}") })],
                )
                .await;

            match result {
                Ok(_) => Ok(()),
                // 4902: the provider does not know this chain yet.
                Err(alloy::transports::RpcError::ErrorResp(payload)) if payload.code == 4902 => {
                    Err(crate::Error::UnknownChain(chain_id))
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    fn add_chain<'a>(&'a self, network: &'a Network) -> BoxFut<'a, crate::Result<()>> {
        Box::pin(async move {
            let explorer_urls = network
                .explorer_url
                .iter()
                .cloned()
                .collect::<Vec<String>>();

            self.provider()?
                .raw_request::<_, serde_json::Value>(
                    "wallet_addEthereumChain".into(),
                    [json!({
                        "chainId": format!("0x{:x}", network.chain_id),
                        "chainName": network.name,
                        "nativeCurrency": {
                            "name": network.native_currency.name,
                            "symbol": network.native_currency.symbol,
                            "decimals": network.native_currency.decimals,
                        },
                        "rpcUrls": [network.rpc_url],
                        "blockExplorerUrls": explorer_urls,
                    })],
                )
                .await?;

            Ok(())
        })
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderNotification> {
        self.notifications.subscribe()
    }
}

async fn poll_provider_changes(
    rpc_url: String,
    notifications: broadcast::Sender<ProviderNotification>,
    shutdown: CancellationToken,
) {
    let Ok(provider) = rpc_url.to_alloy_provider() else {
        return;
    };

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_accounts: Option<Vec<Address>> = None;
    let mut last_chain_id: Option<u64> = None;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = interval.tick() => {},
        }

        // The first successful observation seeds the baseline silently,
        // only subsequent changes are pushed as notifications.
        if let Ok(accounts) = provider.get_accounts().await {
            if last_accounts.as_ref() != Some(&accounts) {
                if last_accounts.is_some() {
                    let _ = notifications.send(ProviderNotification::AccountsChanged(
                        accounts.clone(),
                    ));
                }
                last_accounts = Some(accounts);
            }
        }

        if let Ok(chain_id) = provider.get_chain_id().await {
            if last_chain_id != Some(chain_id) {
                if last_chain_id.is_some() {
                    let _ = notifications.send(ProviderNotification::ChainChanged(chain_id));
                }
                last_chain_id = Some(chain_id);
            }
        }
    }
}

/// Connects to the external wallet and keeps the derived connection
/// state. Concurrent connect attempts are serialized through the
/// single-slot mutex: at most one attempt is in flight process-wide,
/// later callers queue behind it.
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    expected: Network,
    connect_slot: Mutex<()>,
    state: RwLock<ConnectionState>,
}

impl WalletConnector {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, expected: Network) -> Self {
        Self {
            provider,
            expected,
            connect_slot: Mutex::new(()),
            state: RwLock::new(ConnectionState::default()),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.provider.is_some()
    }

    pub fn expected_network(&self) -> &Network {
        &self.expected
    }

    pub fn state(&self) -> crate::Result<ConnectionState> {
        Ok(self
            .state
            .read()
            .map_err(|_| crate::Error::Poisoned("wallet state"))?
            .clone())
    }

    fn set_state(&self, new_state: ConnectionState) -> crate::Result<()> {
        *self
            .state
            .write()
            .map_err(|_| crate::Error::Poisoned("wallet state"))? = new_state;
        Ok(())
    }

    fn provider(&self) -> crate::Result<&Arc<dyn WalletProvider>> {
        self.provider
            .as_ref()
            .ok_or(crate::Error::WalletNotInstalled)
    }

    /// Runs one connection attempt: request accounts, resolve the signer
    /// address, resolve the chain, then derive the mismatch flag. The
    /// state is rebuilt from scratch on every call.
    pub async fn connect(&self) -> crate::Result<ConnectionState> {
        let provider = Arc::clone(self.provider()?);

        let _slot = self.connect_slot.lock().await;

        let accounts = provider.request_accounts().await?;
        if accounts.is_empty() {
            return Err(crate::Error::ConnectionRejected);
        }

        let address = provider.signer_address().await?;
        let chain_id = provider.chain_id().await?;

        let state = ConnectionState {
            address: Some(address),
            chain_id: Some(chain_id),
            wrong_network: !self.expected.matches(chain_id),
        };
        self.set_state(state.clone())?;

        Ok(state)
    }

    /// Asks the provider to move to the expected chain. If the provider
    /// does not know the chain, it is added from the catalog entry and
    /// the switch is retried once.
    pub async fn ensure_expected_chain(&self) -> crate::Result<ConnectionState> {
        let provider = Arc::clone(self.provider()?);

        match provider.switch_chain(self.expected.chain_id).await {
            Err(crate::Error::UnknownChain(_)) => {
                provider.add_chain(&self.expected).await?;
                provider.switch_chain(self.expected.chain_id).await?;
            }
            other => other?,
        }

        let chain_id = provider.chain_id().await?;
        self.apply_notification(ProviderNotification::ChainChanged(chain_id))
    }

    fn apply_notification(
        &self,
        notification: ProviderNotification,
    ) -> crate::Result<ConnectionState> {
        let mut state = self
            .state
            .write()
            .map_err(|_| crate::Error::Poisoned("wallet state"))?;

        match notification {
            ProviderNotification::AccountsChanged(accounts) => {
                if let Some(address) = accounts.first() {
                    state.address = Some(*address);
                } else {
                    state.clear();
                }
            }
            ProviderNotification::ChainChanged(chain_id) => {
                state.chain_id = Some(chain_id);
                state.wrong_network = !self.expected.matches(chain_id);
            }
        }

        Ok(state.clone())
    }

    /// Subscribes to provider notifications and applies them to the
    /// connection state until the returned watcher is dropped. Every
    /// applied change is also reported through `on_update`.
    pub fn watch<F>(self: &Arc<Self>, on_update: F) -> crate::Result<WalletWatcher>
    where
        F: Fn(ConnectionState) + Send + Sync + 'static,
    {
        let mut receiver = self.provider()?.subscribe();
        let cancel_token = CancellationToken::new();
        let cancel_token_clone = cancel_token.clone();
        let connector = Arc::clone(self);

        let thread = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel_token_clone.cancelled() => break,
                    notification = receiver.recv() => match notification {
                        Ok(notification) => match connector.apply_notification(notification) {
                            Ok(state) => on_update(state),
                            Err(_) => break,
                        },
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
        });

        Ok(WalletWatcher {
            thread: Some(thread),
            cancel_token,
        })
    }
}

/// Scoped guard for the notification listener. Dropping it cancels the
/// listener task; `shutdown` additionally waits for the task to finish.
pub struct WalletWatcher {
    thread: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl WalletWatcher {
    pub async fn shutdown(mut self) {
        self.cancel_token.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.await;
        }
    }
}

impl Drop for WalletWatcher {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
