use crossterm::event::EventStream;
use street::core::constants::QUIT_EXIT_CODE;
use street::{play, ui, GameConfig, LoopExit, StreetError};

fn main() -> Result<(), StreetError> {
    // Diagnostics go to stderr; redirect it (2>street.log) to keep the screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp_millis()
        .init();

    let config = GameConfig::default();
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StreetError::Runtime)?;

    let screen = match ui::enter_terminal() {
        Ok(screen) => screen,
        Err(e) => {
            let _ = ui::restore_terminal();
            log::error!("terminal init failed: {}", e);
            return Err(StreetError::Terminal(e));
        }
    };

    let outcome = runtime.block_on(async { play(config, screen, EventStream::new()).await });
    ui::restore_terminal()?;

    match outcome? {
        // `play` has joined its ticker, input and render tasks and the
        // terminal is restored; only wall-flash tasks, which never draw, remain.
        LoopExit::Quit => std::process::exit(QUIT_EXIT_CODE),
        LoopExit::InputClosed => Ok(()),
    }
}
