//! Concurrent game activities.
//!
//! Four long-running tasks share one [`Game`] behind a mutex:
//! - the ticker advances the street at the current interval,
//! - the input reader turns terminal events into [`Command`]s,
//! - the command consumer applies them in arrival order,
//! - the render loop draws a snapshot each frame and checks for collisions.
//!
//! Win and loss transitions spawn a short wall-flash task.

use crate::config::GameConfig;
use crate::core::constants::{COMMAND_QUEUE_DEPTH, FLASH_PLAIN_MS, FLASH_TINT_MS};
use crate::core::game_state::{Game, Transition, WallTint};
use crate::error::StreetError;
use crate::input::Command;
use crate::ui::Screen;
use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::Backend;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub type SharedGame = Arc<Mutex<Game>>;

/// Why the command consumer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    InputClosed,
}

/// Advance the street every time the current interval elapses.
///
/// A new interval published by the speed controller cancels the wait in
/// progress and starts a fresh one with the new period.
pub async fn run_ticker<R: Rng>(
    game: SharedGame,
    mut interval: watch::Receiver<Duration>,
    mut rng: R,
) {
    loop {
        let period = *interval.borrow_and_update();
        tokio::select! {
            _ = time::sleep(period) => {
                game.lock().await.tick(&mut rng);
            }
            changed = interval.changed() => {
                if changed.is_err() {
                    return;
                }
                log::debug!("ticker restarted, previous period {:?}", period);
            }
        }
    }
}

/// Forward decoded terminal events into the command queue.
pub async fn run_input<S>(mut events: S, commands: mpsc::Sender<Command>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = events.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                log::warn!("input stream failed: {}", e);
                return;
            }
        };
        if let Some(command) = Command::from_event(&event) {
            if commands.send(command).await.is_err() {
                return;
            }
        }
    }
}

/// Apply commands one at a time until quit or the queue closes.
pub async fn run_commands(game: SharedGame, mut commands: mpsc::Receiver<Command>) -> LoopExit {
    while let Some(command) = commands.recv().await {
        match command {
            Command::Quit => {
                log::info!("quit requested");
                return LoopExit::Quit;
            }
            Command::Move(direction) => {
                let flash = {
                    let mut game = game.lock().await;
                    game.apply_move(direction)
                        .map(|transition| (transition.tint(), game.begin_flash()))
                };
                if let Some((tint, generation)) = flash {
                    tokio::spawn(flash_walls(Arc::clone(&game), tint, generation));
                }
            }
        }
    }
    LoopExit::InputClosed
}

/// Alternate the walls between `tint` and plain twice.
///
/// Stops early once a newer flash has started.
pub async fn flash_walls(game: SharedGame, tint: WallTint, generation: u64) {
    let frames = [
        (tint, FLASH_TINT_MS),
        (WallTint::Plain, FLASH_PLAIN_MS),
        (tint, FLASH_TINT_MS),
        (WallTint::Plain, 0),
    ];
    for (frame, hold_ms) in frames {
        if !game.lock().await.tint_walls(generation, frame) {
            return;
        }
        if hold_ms > 0 {
            time::sleep(Duration::from_millis(hold_ms)).await;
        }
    }
}

/// Draw one frame, then apply the loss transition if the player was hit.
///
/// The collision frame stays on screen for `loss_grace` before the reset.
pub async fn render_pass<B: Backend>(
    game: &SharedGame,
    screen: &mut Screen<B>,
    loss_grace: Duration,
) -> io::Result<Option<Transition>> {
    let (scene, collided) = {
        let game = game.lock().await;
        (game.scene(), game.collides())
    };
    screen.present(&scene)?;
    if !collided {
        return Ok(None);
    }

    time::sleep(loss_grace).await;
    let (transition, generation) = {
        let mut game = game.lock().await;
        (game.apply_loss(), game.begin_flash())
    };
    tokio::spawn(flash_walls(Arc::clone(game), transition.tint(), generation));
    Ok(Some(transition))
}

/// Render at most once per `frame_interval` until drawing fails.
pub async fn run_render<B: Backend>(
    game: SharedGame,
    mut screen: Screen<B>,
    frame_interval: Duration,
    loss_grace: Duration,
) -> io::Result<()> {
    let mut frames = time::interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        frames.tick().await;
        render_pass(&game, &mut screen, loss_grace).await?;
    }
}

/// Build the game, warm the street up and start every activity.
///
/// Returns when the player quits or input ends; draw failures are fatal.
/// The ticker, input and render tasks have all finished by the time it
/// returns.
pub async fn play<B, S>(
    config: GameConfig,
    screen: Screen<B>,
    events: S,
) -> Result<LoopExit, StreetError>
where
    B: Backend + Send + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin + Send + 'static,
{
    let mut game = Game::new(&config)?;
    game.warm_up(config.warmup_passes(), &mut StdRng::from_entropy());
    let interval = game.speed.subscribe();
    let game: SharedGame = Arc::new(Mutex::new(game));
    log::info!(
        "street {}x{} ready, tick every {:?}",
        config.width,
        config.height,
        config.initial_interval
    );

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let ticker = tokio::spawn(run_ticker(
        Arc::clone(&game),
        interval,
        StdRng::from_entropy(),
    ));
    let input = tokio::spawn(run_input(events, command_tx));
    let mut render: JoinHandle<io::Result<()>> = tokio::spawn(run_render(
        Arc::clone(&game),
        screen,
        config.frame_interval,
        config.loss_grace,
    ));

    let outcome = tokio::select! {
        exit = run_commands(Arc::clone(&game), command_rx) => Ok(exit),
        rendered = &mut render => Err(match rendered {
            Ok(Ok(())) => io::Error::other("render loop stopped"),
            Ok(Err(e)) => e,
            Err(join) => io::Error::other(join),
        }),
    };

    // Nothing may touch the terminal or the event stream once we return.
    ticker.abort();
    input.abort();
    render.abort();
    let _ = tokio::join!(ticker, input, render);

    outcome.map_err(|error| {
        log::error!("render failed: {}", error);
        StreetError::Terminal(error)
    })
}
