use std::{
    str::FromStr,
    sync::{mpsc, Arc},
};

use ratatui::crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Widget},
    DefaultTerminal,
};
use swarm_ratatui_extra::{
    extensions::{RectExt, ThemedWidget},
    text_popup::TextPopup,
    thematize::Thematize,
};
use swarm_utils::{
    config::Config,
    disk_storage::DiskStorageInterface,
    network::Network,
    swarm_log,
    wallet::{ConnectionState, NodeProvider, WalletConnector, WalletProvider, WalletWatcher},
};
use tokio_util::sync::CancellationToken;

use crate::{
    events::{self, Event},
    pages::{footer::Footer, main_menu::MainMenuPage, title::Title, Page},
    theme::{Theme, ThemeName},
    traits::{Actions, Component},
};

pub struct SharedState {
    pub online: Option<bool>,
    pub wallet: ConnectionState,
    pub connector: Arc<WalletConnector>,
    pub price_api_url: String,
    pub candle_period: String,
    pub theme: Theme,
}

pub struct App {
    exit: bool,
    context: Vec<Page>,
    shared_state: SharedState,

    fatal_error_popup: TextPopup,

    input_thread: Option<std::thread::JoinHandle<()>>,
    provider_thread: Option<tokio::task::JoinHandle<()>>,
    wallet_watcher: Option<WalletWatcher>,

    shutdown: CancellationToken,
}

impl App {
    pub fn new() -> crate::Result<Self> {
        let config = Config::load()?;
        let theme_name = ThemeName::from_str(config.get_theme_name())?;
        let theme = Theme::new(theme_name);
        let shutdown = CancellationToken::new();

        let expected = Network::expected(&config);
        let (provider, provider_thread) = match NodeProvider::detect(&config, shutdown.clone())? {
            Some((provider, thread)) => {
                let provider: Arc<dyn WalletProvider> = provider;
                (Some(provider), Some(thread))
            }
            None => (None, None),
        };
        let connector = Arc::new(WalletConnector::new(provider, expected));

        Ok(Self {
            exit: false,
            context: vec![Page::MainMenu(MainMenuPage::default())],
            shared_state: SharedState {
                online: None,
                wallet: ConnectionState::default(),
                connector,
                price_api_url: config.get_price_api_url(),
                candle_period: config.get_candle_period(),
                theme,
            },

            fatal_error_popup: TextPopup::new("Error"),

            input_thread: None,
            provider_thread,
            wallet_watcher: None,

            shutdown,
        })
    }

    pub async fn run(&mut self) -> crate::Result<()> {
        let (event_tr, event_rc) = mpsc::channel::<Event>();
        let mut terminal = ratatui::init();

        self.init_threads(&event_tr);

        while !self.exit {
            let area = self.draw(&mut terminal)?;

            self.handle_event(event_rc.recv()?, area, &event_tr)
                .await
                .unwrap_or_else(|e| self.fatal_error_popup.set_text(e.to_string()));
        }

        // final render before exiting
        self.draw(&mut terminal)?;

        // signal all the threads to exit
        self.shutdown.cancel();
        self.exit_threads().await;

        ratatui::restore();

        Ok(())
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> crate::Result<Rect> {
        let completed_frame = terminal
            .draw(|frame| {
                frame.render_widget(self, frame.area());
            })
            .map_err(crate::Error::Draw)?;
        Ok(completed_frame.area)
    }

    fn init_threads(&mut self, tr: &mpsc::Sender<Event>) {
        let tr_input = tr.clone();
        let shutdown_signal = self.shutdown.clone();
        self.input_thread = Some(std::thread::spawn(move || {
            events::input::watch_input_events(tr_input, shutdown_signal);
        }));
    }

    pub async fn exit_threads(&mut self) {
        if let Some(thread) = self.input_thread.take() {
            let _ = thread.join();
        }

        if let Some(watcher) = self.wallet_watcher.take() {
            watcher.shutdown().await;
        }

        if let Some(thread) = self.provider_thread.take() {
            let _ = thread.await;
        }

        for page in &mut self.context {
            page.exit_threads().await;
        }
    }

    async fn process_result(&mut self, result: Actions) -> crate::Result<bool> {
        for _ in 0..result.page_pops {
            if let Some(mut page) = self.context.pop() {
                page.exit_threads().await;
            }
        }
        if result.reload {
            if let Some(page) = self.context.last_mut() {
                page.reload(&self.shared_state)?;
            }
        }
        self.context.extend(result.page_inserts);
        Ok(result.ignore_esc)
    }

    async fn handle_event(
        &mut self,
        event: Event,
        area: Rect,
        tr: &mpsc::Sender<Event>,
    ) -> crate::Result<()> {
        let [_, body_area, _] = self.get_areas(area);

        let result = if self.fatal_error_popup.is_shown() {
            self.fatal_error_popup
                .handle_event::<Actions>(event.key_event())
        } else if let Some(page) = self.context.last_mut() {
            page.handle_event(
                &event,
                body_area.block_inner(),
                tr,
                &self.shutdown,
                &self.shared_state,
            )?
        } else {
            Actions::default()
        };

        let esc_ignored = self.process_result(result).await?;

        if self.context.is_empty() {
            self.exit = true;
        }

        match event {
            Event::Input(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    match key_event.code {
                        KeyCode::Char('c') if key_event.modifiers == KeyModifiers::CONTROL => {
                            self.exit = true;
                        }
                        KeyCode::Esc => {
                            if !esc_ignored {
                                if let Some(mut page) = self.context.pop() {
                                    page.exit_threads().await;
                                }
                                if self.context.is_empty() {
                                    self.exit = true;
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Price API reachability doubles as the online indicator.
            Event::TickersUpdate(_) | Event::CandlesUpdate { .. } => {
                self.shared_state.online = Some(true);
            }
            Event::TickersUpdateError(error) => self.handle_price_error(error),
            Event::CandlesUpdateError { error, .. } => self.handle_price_error(error),

            Event::WalletUpdate(state) => {
                self.shared_state.wallet = state;
                self.start_wallet_watcher(tr)?;
            }
            Event::WalletUpdateError(error) => {
                self.fatal_error_popup.set_text(error);
            }
        };

        Ok(())
    }

    fn handle_price_error(&mut self, error: swarm_utils::Error) {
        if error.is_connect() {
            self.shared_state.online = Some(false);
        } else {
            swarm_log!("price api error: {error}");
        }
    }

    /// The notification listener starts once, after the first successful
    /// connect, and lives until app shutdown.
    fn start_wallet_watcher(&mut self, tr: &mpsc::Sender<Event>) -> crate::Result<()> {
        if self.wallet_watcher.is_none()
            && self.shared_state.connector.is_installed()
            && self.shared_state.wallet.is_connected()
        {
            self.wallet_watcher = Some(events::wallet::start_watcher(
                tr,
                &self.shared_state.connector,
            )?);
        }
        Ok(())
    }

    fn get_areas(&self, area: Rect) -> [Rect; 3] {
        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);
        [title_area, body_area, footer_area]
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.context.last()
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [title_area, body_area, footer_area] = self.get_areas(area);

        Title.render(title_area, buf, &self.shared_state);

        if let Some(page) = self.current_page() {
            page.render_component_with_block(
                body_area,
                buf,
                Block::bordered().border_type(self.shared_state.theme.border_type()),
                &self.shared_state,
            );

            Footer {
                exit: &self.exit,
                is_main_menu: &page.is_main_menu(),
            }
            .render(footer_area, buf, &self.shared_state.theme);
        }

        self.fatal_error_popup
            .render(area, buf, &self.shared_state.theme.error_popup());
    }
}
