use std::sync::mpsc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};
use swarm_ratatui_extra::{act::Act, thematize::Thematize};
use tokio_util::sync::CancellationToken;

use crate::{app::SharedState, pages::Page, Event};

#[derive(Default, Debug)]
pub struct Actions {
    // Number of pages to remove from the context stack.
    pub page_pops: usize,
    // Pages to insert into the context stack.
    pub page_inserts: Vec<Page>,
    // Enable if current page wants to handle the [ESC] key.
    pub ignore_esc: bool,
    // Regenerate the data for the current page from the shared state.
    pub reload: bool,
}

impl Act for Actions {
    fn ignore_esc(&mut self) {
        self.ignore_esc = true;
    }

    fn is_esc_ignored(&self) -> bool {
        self.ignore_esc
    }

    fn merge(&mut self, other: Actions) {
        self.page_pops += other.page_pops;
        self.page_inserts.extend(other.page_inserts);
        self.ignore_esc |= other.ignore_esc;
        self.reload |= other.reload;
    }
}

pub trait Component {
    fn reload(&mut self, _shared_state: &SharedState) -> crate::Result<()> {
        Ok(())
    }

    async fn exit_threads(&mut self) {}

    fn set_focus(&mut self, _focus: bool) {}

    /// Handles an event and returns any actions to be performed.
    /// This cannot be async to prevent TUI render from blocking.
    fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        transmitter: &mpsc::Sender<Event>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions>;

    /// Renders the component into the given area and returns the area
    /// that was actually used.
    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized;

    fn render_component_with_block(
        &self,
        area: Rect,
        buf: &mut Buffer,
        block: Block<'_>,
        shared_state: &SharedState,
    ) -> Rect
    where
        Self: Sized,
    {
        let inner_area = block.inner(area);
        block
            .style(shared_state.theme.style())
            .border_type(shared_state.theme.border_type())
            .render(area, buf);
        self.render_component(inner_area, buf, shared_state);
        area
    }
}
