mod error;
pub use error::{Error, Result};

mod app;
mod events;
mod pages;
mod theme;
mod traits;

pub use app::App;
pub use events::Event;

pub async fn run() -> crate::Result<()> {
    let mut app = App::new()?;
    app.run().await
}
