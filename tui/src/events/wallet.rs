use std::sync::{mpsc::Sender, Arc};

use swarm_utils::wallet::{WalletConnector, WalletWatcher};
use tokio::task::JoinHandle;

use super::Event;

/// Runs one connection attempt on the runtime. Concurrent attempts are
/// serialized inside the connector.
pub fn spawn_connect(
    transmitter: &Sender<Event>,
    connector: &Arc<WalletConnector>,
) -> JoinHandle<()> {
    let transmitter = transmitter.clone();
    let connector = Arc::clone(connector);

    tokio::spawn(async move {
        let _ = match connector.connect().await {
            Ok(state) => transmitter.send(Event::WalletUpdate(state)),
            Err(error) => transmitter.send(Event::WalletUpdateError(error.to_string())),
        };
    })
}

/// Asks the provider to move to the expected chain.
pub fn spawn_switch_network(
    transmitter: &Sender<Event>,
    connector: &Arc<WalletConnector>,
) -> JoinHandle<()> {
    let transmitter = transmitter.clone();
    let connector = Arc::clone(connector);

    tokio::spawn(async move {
        let _ = match connector.ensure_expected_chain().await {
            Ok(state) => transmitter.send(Event::WalletUpdate(state)),
            Err(error) => transmitter.send(Event::WalletUpdateError(error.to_string())),
        };
    })
}

/// Forwards provider notifications into the app event loop. The watcher
/// guard owns the listener; dropping it unsubscribes.
pub fn start_watcher(
    transmitter: &Sender<Event>,
    connector: &Arc<WalletConnector>,
) -> swarm_utils::Result<WalletWatcher> {
    let transmitter = transmitter.clone();
    connector.watch(move |state| {
        let _ = transmitter.send(Event::WalletUpdate(state));
    })
}
