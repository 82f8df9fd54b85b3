use std::sync::mpsc;

use ratatui::{
    buffer::Buffer,
    crossterm::event::KeyCode,
    layout::Rect,
    text::Line,
    widgets::Widget,
};
use swarm_ratatui_extra::{extensions::RectExt, thematize::Thematize};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    events::wallet::{spawn_connect, spawn_switch_network},
    traits::{Actions, Component},
    Event,
};

/// Wallet connection page. Shows a connect button while disconnected,
/// the address once connected, and a wrong-network banner with a switch
/// action when the provider sits on an unexpected chain. The connection
/// state itself lives in the shared state and is updated through wallet
/// events.
#[derive(Debug, Default)]
pub struct WalletPage {
    request_thread: Option<JoinHandle<()>>,
}

impl Component for WalletPage {
    async fn exit_threads(&mut self) {
        if let Some(thread) = self.request_thread.take() {
            thread.abort();
            let _ = thread.await;
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _area: Rect,
        transmitter: &mpsc::Sender<Event>,
        _shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        if event.is_key_pressed(KeyCode::Enter) && shared_state.connector.is_installed() {
            let wallet = &shared_state.wallet;
            if wallet.wrong_network {
                self.request_thread =
                    Some(spawn_switch_network(transmitter, &shared_state.connector));
            } else if !wallet.is_connected() {
                self.request_thread = Some(spawn_connect(transmitter, &shared_state.connector));
            }
        }

        Ok(Actions::default())
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        let theme = &shared_state.theme;
        let wallet = &shared_state.wallet;
        let mut area = area;

        if !shared_state.connector.is_installed() {
            Line::raw(
                "No wallet provider detected. Set wallet_rpc_url in ~/.swarm/config.toml \
                 to connect a wallet.",
            )
            .style(theme.style_dim())
            .render(area, buf);
            return area;
        }

        if wallet.wrong_network {
            Line::raw("You are on the wrong network. Please switch to the correct network.")
                .style(theme.error_style())
                .render(area.change_height(1), buf);
            area = area.margin_top(1);

            Line::raw(format!(
                "expected: {}",
                shared_state.connector.expected_network()
            ))
            .style(theme.style_dim())
            .render(area.change_height(1), buf);
            area = area.margin_top(2);

            Line::raw("[ Switch Network ]")
                .style(theme.button_focused())
                .render(area.change_height(1), buf);
            return area;
        }

        match wallet.address {
            Some(address) => {
                Line::raw(format!("Connected: {address}"))
                    .style(theme.style())
                    .render(area.change_height(1), buf);
                area = area.margin_top(1);

                if let Some(chain_id) = wallet.chain_id {
                    Line::raw(format!("Chain: {chain_id}"))
                        .style(theme.style_dim())
                        .render(area.change_height(1), buf);
                }
            }
            None => {
                Line::raw("[ Connect Wallet ]")
                    .style(theme.button_focused())
                    .render(area.change_height(1), buf);
            }
        }

        area
    }
}
