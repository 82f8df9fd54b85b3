use std::sync::mpsc;

use main_menu::MainMenuPage;
use price_chart::PriceChartPage;
use ratatui::{buffer::Buffer, layout::Rect};
use text::TextPage;
use tokio_util::sync::CancellationToken;
use wallet::WalletPage;

use crate::{
    app::SharedState,
    traits::{Actions, Component},
    Event,
};

pub mod footer;
pub mod main_menu;
pub mod price_chart;
pub mod text;
pub mod title;
pub mod wallet;

#[derive(Debug)]
pub enum Page {
    MainMenu(MainMenuPage),
    PriceChart(PriceChartPage),
    Wallet(WalletPage),
    Text(TextPage),
}

impl Page {
    pub fn is_main_menu(&self) -> bool {
        matches!(self, Page::MainMenu(_))
    }
}

impl Component for Page {
    fn set_focus(&mut self, focus: bool) {
        match self {
            Page::MainMenu(page) => page.set_focus(focus),
            Page::PriceChart(page) => page.set_focus(focus),
            Page::Wallet(page) => page.set_focus(focus),
            Page::Text(page) => page.set_focus(focus),
        }
    }

    async fn exit_threads(&mut self) {
        match self {
            Page::MainMenu(page) => page.exit_threads().await,
            Page::PriceChart(page) => page.exit_threads().await,
            Page::Wallet(page) => page.exit_threads().await,
            Page::Text(page) => page.exit_threads().await,
        }
    }

    fn reload(&mut self, ss: &SharedState) -> crate::Result<()> {
        match self {
            Page::MainMenu(page) => page.reload(ss),
            Page::PriceChart(page) => page.reload(ss),
            Page::Wallet(page) => page.reload(ss),
            Page::Text(page) => page.reload(ss),
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        tr: &mpsc::Sender<Event>,
        sd: &CancellationToken,
        ss: &SharedState,
    ) -> crate::Result<Actions> {
        match self {
            Page::MainMenu(page) => page.handle_event(event, area, tr, sd, ss),
            Page::PriceChart(page) => page.handle_event(event, area, tr, sd, ss),
            Page::Wallet(page) => page.handle_event(event, area, tr, sd, ss),
            Page::Text(page) => page.handle_event(event, area, tr, sd, ss),
        }
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        match self {
            Page::MainMenu(page) => page.render_component(area, buf, shared_state),
            Page::PriceChart(page) => page.render_component(area, buf, shared_state),
            Page::Wallet(page) => page.render_component(area, buf, shared_state),
            Page::Text(page) => page.render_component(area, buf, shared_state),
        }
    }
}
