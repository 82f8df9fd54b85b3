/// Restores the terminal before printing panic info, so a crash inside
/// the TUI does not leave the shell in raw mode.
pub fn set() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();

        default_hook(info);

        eprintln!(
            "This is a bug! Please report it at https://github.com/iconoclast-swarm/swarm/issues/new"
        );
    }));
}
