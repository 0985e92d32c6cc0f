#![cfg(feature = "std")]

use std::future;
use std::pin::Pin;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, sleep, Duration, MissedTickBehavior, Sleep};

use crate::engine::{
    config::{DEFAULT_PLACEMENT_DELAY_MS, DEFAULT_TICK_INTERVAL_MS},
    ClickOutcome, CommitOutcome, GameEngine, GameSnapshot, PendingPlacement, ShapeSource,
    TickOutcome,
};

/// Capacity of the command channel between the host and the session.
const COMMAND_BUFFER: usize = 32;

/// Timing knobs for a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Period of the placement tick.
    pub tick_interval: Duration,
    /// Delay between choosing a placement and committing it.
    pub placement_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            placement_delay: Duration::from_millis(DEFAULT_PLACEMENT_DELAY_MS),
        }
    }
}

/// Player and host commands accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click { row: usize, col: usize },
    Reset,
    Quit,
}

/// Host side of a session: send commands, watch snapshots.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    updates: watch::Receiver<GameSnapshot>,
}

impl SessionHandle {
    pub async fn send(&self, command: Command) -> anyhow::Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| anyhow::anyhow!("session has stopped"))
    }

    /// Blocking variant for threads outside the runtime (e.g. a stdin reader).
    pub fn blocking_send(&self, command: Command) -> anyhow::Result<()> {
        self.commands
            .blocking_send(command)
            .map_err(|_| anyhow::anyhow!("session has stopped"))
    }

    /// Receiver that is notified after every state change.
    pub fn updates(&self) -> watch::Receiver<GameSnapshot> {
        self.updates.clone()
    }

    /// Most recently published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        *self.updates.borrow()
    }
}

/// Placement waiting for its delay to elapse.
struct InFlight {
    placement: PendingPlacement,
    timer: Pin<Box<Sleep>>,
}

/// Single actor owning the engine. Ticks, deferred commits and commands are
/// processed one at a time, so there is never more than one mutation or one
/// placement in flight.
pub struct Session<S: ShapeSource> {
    engine: GameEngine<S>,
    config: SessionConfig,
    commands: mpsc::Receiver<Command>,
    updates: watch::Sender<GameSnapshot>,
}

impl<S: ShapeSource> Session<S> {
    pub fn new(engine: GameEngine<S>, config: SessionConfig) -> (Self, SessionHandle) {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let (update_tx, update_rx) = watch::channel(engine.snapshot());
        (
            Self {
                engine,
                config,
                commands: cmd_rx,
                updates: update_tx,
            },
            SessionHandle {
                commands: cmd_tx,
                updates: update_rx,
            },
        )
    }

    /// Drive the game until `Quit` or until every handle is dropped.
    ///
    /// Returns the final snapshot. Fails only if a chosen placement could not
    /// be committed, which leaves the engine in a state it cannot recover from.
    pub async fn run(mut self) -> anyhow::Result<GameSnapshot> {
        let mut ticker = interval(self.config.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // First tick completes immediately, skip it

        let mut in_flight: Option<InFlight> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.engine.tick() {
                        TickOutcome::Scheduled(placement) => {
                            in_flight = Some(InFlight {
                                placement,
                                timer: Box::pin(sleep(self.config.placement_delay)),
                            });
                        }
                        TickOutcome::GameOver => {
                            log::info!("game over, final score {}", self.engine.score());
                            self.publish();
                        }
                        TickOutcome::Ignored => {}
                    }
                }

                placement = wait_in_flight(&mut in_flight) => {
                    in_flight = None;
                    match self.engine.commit(placement) {
                        Ok(CommitOutcome::Committed { completed, .. }) => {
                            if !completed.is_empty() {
                                log::info!("rows completed: {:?}", completed);
                            }
                            self.publish();
                        }
                        Ok(CommitOutcome::Stale) => {}
                        Err(e) => {
                            return Err(anyhow::anyhow!(e).context("placement commit failed"));
                        }
                    }
                }

                command = self.commands.recv() => {
                    match command {
                        Some(Command::Click { row, col }) => self.click(row, col),
                        Some(Command::Reset) => {
                            in_flight = None;
                            self.engine.reset();
                            ticker.reset();
                            log::info!("game reset");
                            self.publish();
                        }
                        Some(Command::Quit) | None => break,
                    }
                }
            }
        }

        Ok(self.engine.snapshot())
    }

    fn click(&mut self, row: usize, col: usize) {
        match self.engine.click_cell(row, col) {
            Ok(ClickOutcome::Ignored) | Ok(ClickOutcome::NoOp) => {}
            Ok(ClickOutcome::IllegalMove) => {
                log::info!("game over, final score {}", self.engine.score());
                self.publish();
            }
            Ok(_) => self.publish(),
            Err(e) => log::warn!("rejected click at ({}, {}): {}", row, col, e),
        }
    }

    fn publish(&self) {
        self.updates.send_replace(self.engine.snapshot());
    }
}

/// Resolves with the pending placement once its delay elapses; never resolves
/// when nothing is in flight.
async fn wait_in_flight(in_flight: &mut Option<InFlight>) -> PendingPlacement {
    match in_flight {
        Some(flight) => {
            flight.timer.as_mut().await;
            flight.placement
        }
        None => future::pending().await,
    }
}
