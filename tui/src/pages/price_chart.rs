use std::sync::mpsc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
};
use swarm_ratatui_extra::{
    extensions::ThemedWidget, price_chart::PriceChart, select::Select, thematize::Thematize,
};
use swarm_utils::{gmx::Ticker, swarm_log};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    events::{
        candles::{spawn_candles_fetch, CandlesFetch},
        tickers::spawn_tickers_fetch,
    },
    traits::{Actions, Component},
    Event,
};

/// The live price chart: token list below, close-price chart above.
/// Tracks which symbol is selected; changing the selection is the sole
/// trigger for a candle fetch.
#[derive(Debug)]
pub struct PriceChartPage {
    tickers: Select<Ticker>,
    chart: PriceChart,
    selected: Option<String>,
    tickers_thread: Option<JoinHandle<()>>,
    candles_fetch: Option<CandlesFetch>,
}

impl PriceChartPage {
    pub fn new(
        transmitter: &mpsc::Sender<Event>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> Self {
        let mut tickers = Select::default()
            .with_loading_text("Loading tokens...")
            .with_empty_text("No tokens available.");
        tickers.set_focus(true);

        Self {
            tickers,
            chart: PriceChart::default(),
            selected: None,
            tickers_thread: Some(spawn_tickers_fetch(
                transmitter,
                shutdown_signal,
                shared_state.price_api_url.clone(),
            )),
            candles_fetch: None,
        }
    }

    /// Updates the selection and kicks off a fresh candle fetch. The
    /// previous fetch is cancelled; even if its response still arrives,
    /// the symbol tag check in `handle_event` discards it.
    fn select_symbol(
        &mut self,
        symbol: String,
        transmitter: &mpsc::Sender<Event>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) {
        self.selected = Some(symbol.clone());
        self.chart.set_loading();

        if let Some(fetch) = self.candles_fetch.take() {
            fetch.cancel();
        }
        self.candles_fetch = Some(spawn_candles_fetch(
            transmitter,
            shutdown_signal,
            shared_state.price_api_url.clone(),
            symbol,
            shared_state.candle_period.clone(),
        ));
    }

    fn is_selected(&self, symbol: &str) -> bool {
        self.selected.as_deref() == Some(symbol)
    }
}

impl Component for PriceChartPage {
    fn set_focus(&mut self, focus: bool) {
        self.tickers.set_focus(focus);
    }

    async fn exit_threads(&mut self) {
        if let Some(thread) = self.tickers_thread.take() {
            thread.abort();
            let _ = thread.await;
        }

        if let Some(fetch) = self.candles_fetch.take() {
            fetch.shutdown().await;
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _area: Rect,
        transmitter: &mpsc::Sender<Event>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        match event {
            Event::Input(key_event) => {
                let selected = self
                    .tickers
                    .handle_event(Some(key_event))?
                    .map(|ticker| ticker.token_symbol.clone());
                if let Some(symbol) = selected {
                    self.select_symbol(symbol, transmitter, shutdown_signal, shared_state);
                }

                self.chart.handle_event(key_event);
            }

            Event::TickersUpdate(tickers) => {
                let first = tickers.first().map(|t| t.token_symbol.clone());
                self.tickers.update_list(Some(tickers.clone()));

                // Deterministic default: first-in-list wins.
                if self.selected.is_none() {
                    if let Some(symbol) = first {
                        self.select_symbol(symbol, transmitter, shutdown_signal, shared_state);
                    }
                }
            }

            Event::TickersUpdateError(_) => {
                // Proceed with no selection, the app level decides whether
                // this was a connectivity problem.
                self.tickers.update_list(Some(vec![]));
            }

            Event::CandlesUpdate { symbol, points } => {
                if self.is_selected(symbol) {
                    self.chart.update(symbol.clone(), points.clone());
                } else {
                    swarm_log!("dropping stale candles for {symbol}");
                }
            }

            Event::CandlesUpdateError { symbol, .. } => {
                if self.is_selected(symbol) {
                    self.chart.update(symbol.clone(), vec![]);
                }
            }

            _ => {}
        }

        Ok(Actions::default())
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        let [chart_area, tokens_header_area, tokens_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(6),
        ])
        .areas(area);

        self.chart.render(chart_area, buf, &shared_state.theme);

        Line::raw("Tokens")
            .style(shared_state.theme.style_dim())
            .render(tokens_header_area, buf);
        self.tickers.render(tokens_area, buf, &shared_state.theme);

        area
    }
}
