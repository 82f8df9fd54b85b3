use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use swarm_ratatui_extra::{extensions::RectExt, thematize::Thematize};

use crate::app::SharedState;

pub struct Title;

impl Title {
    pub fn render(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) {
        buf.set_style(area, shared_state.theme.style_dim());
        let area = area.margin_h(1);

        let welcome_string = format!(
            "swarm {account}",
            account = shared_state
                .wallet
                .address
                .map(|a| a.to_string())
                .unwrap_or("dashboard".to_string())
        );

        Line::from(welcome_string)
            .style(shared_state.theme.style())
            .render(area, buf);

        let display = if shared_state.online == Some(false) {
            "offline"
        } else if shared_state.wallet.wrong_network {
            "wrong network"
        } else {
            ""
        };

        Line::from(display)
            .style(shared_state.theme.style())
            .right_aligned()
            .render(area, buf);
    }
}
