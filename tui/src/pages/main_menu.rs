use std::fmt::Display;
use std::sync::mpsc;

use ratatui::{buffer::Buffer, layout::Rect};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use swarm_ratatui_extra::{extensions::ThemedWidget, select::Select};
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    pages::{price_chart::PriceChartPage, text::TextPage, wallet::WalletPage, Page},
    traits::{Actions, Component},
    Event,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MainMenuItem {
    PriceChart,
    Wallet,
    Instructions,
    WhitePaper,
}

impl Display for MainMenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MainMenuItem::PriceChart => "Token Price Chart",
            MainMenuItem::Wallet => "Connect Wallet",
            MainMenuItem::Instructions => "Instructions",
            MainMenuItem::WhitePaper => "White Paper",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug)]
pub struct MainMenuPage {
    select: Select<MainMenuItem>,
}

impl Default for MainMenuPage {
    fn default() -> Self {
        let mut select = Select::default();
        select.update_list(Some(MainMenuItem::iter().collect()));
        select.set_focus(true);
        Self { select }
    }
}

impl Component for MainMenuPage {
    fn set_focus(&mut self, focus: bool) {
        self.select.set_focus(focus);
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _area: Rect,
        transmitter: &mpsc::Sender<Event>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        let mut result = Actions::default();

        let selected = self.select.handle_event(event.key_event())?.copied();
        if let Some(item) = selected {
            let page = match item {
                MainMenuItem::PriceChart => Page::PriceChart(PriceChartPage::new(
                    transmitter,
                    shutdown_signal,
                    shared_state,
                )),
                MainMenuItem::Wallet => Page::Wallet(WalletPage::default()),
                MainMenuItem::Instructions => Page::Text(TextPage::instructions()),
                MainMenuItem::WhitePaper => Page::Text(TextPage::white_paper()),
            };
            result.page_inserts.push(page);
        }

        Ok(result)
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        self.select.render(area, buf, &shared_state.theme);
        area
    }
}
