//! Game loop thread: ticks the session and streams snapshots.
//!
//! The session is moved into the thread. Commands arrive via `mpsc` and are
//! queued before each tick; snapshots leave through a second channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use vanguard_core::state::GameStateSnapshot;
use vanguard_sim::GameSession;

use crate::state::{GameLoopCommand, LoopOptions, RunSummary};

/// Spawn the loop thread. Returns the command sender and the join handle
/// yielding the final summary.
pub fn spawn_game_loop(
    session: GameSession,
    options: LoopOptions,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let handle = std::thread::Builder::new()
        .name("vanguard-game-loop".into())
        .spawn(move || run_game_loop(session, options, cmd_rx, snapshot_tx))?;
    Ok((cmd_tx, handle))
}

/// Runs until Shutdown, channel disconnect, the tick limit, or the end of
/// the run.
pub fn run_game_loop(
    mut session: GameSession,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> RunSummary {
    let tick_duration = Duration::from_secs_f64(session.config().dt());
    let every = options.snapshot_every.max(1);
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    'run: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => session.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'run,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'run,
            }
        }

        // 2. Advance one tick
        let snapshot = session.tick();
        ticks += 1;
        let finished = snapshot.phase.is_finished();

        // 3. Emit
        if ticks % every == 0 || !snapshot.events.is_empty() || finished {
            if snapshot_tx.send(snapshot).is_err() {
                debug!("snapshot receiver gone");
                break;
            }
        }

        if finished && options.stop_when_finished {
            break;
        }
        if options.max_ticks > 0 && ticks >= options.max_ticks {
            break;
        }

        // 4. Hold the tick rate
        if options.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind: resync instead of bursting
                next_tick_time = now;
            }
        }
    }

    let summary = summarize(&session, ticks);
    info!(ticks, phase = ?summary.phase, score = summary.score, "game loop stopped");
    summary
}

pub fn summarize(session: &GameSession, ticks: u64) -> RunSummary {
    let board = session.scoreboard();
    RunSummary {
        ticks,
        phase: session.phase(),
        wave_index: session.director().wave_index(),
        wave_count: session.director().wave_count(),
        score: board.score(),
        play_time_secs: board.play_time_secs(),
        groups_cleared: board.groups_cleared(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_core::commands::PlayerCommand;
    use vanguard_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun)).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartRun)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (snap_tx, snap_rx) = mpsc::channel();
        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        let options = LoopOptions {
            max_ticks: 120,
            snapshot_every: 30,
            ..Default::default()
        };

        let summary = run_game_loop(GameSession::with_default_campaign(), options, cmd_rx, snap_tx);
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.phase, GamePhase::Active);
        assert_eq!(summary.wave_index, 1);

        let snapshots: Vec<_> = snap_rx.try_iter().collect();
        // Every 30th tick plus the first tick, which carries WaveStarted.
        assert!(snapshots.len() >= 4 && snapshots.len() < 120);
        assert!(snapshots.iter().all(|s| s.time.tick % 30 == 0 || !s.events.is_empty()));
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (snap_tx, _snap_rx) = mpsc::channel();
        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = run_game_loop(
            GameSession::with_default_campaign(),
            LoopOptions::default(),
            cmd_rx,
            snap_tx,
        );
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.phase, GamePhase::Ready);
    }

    #[test]
    fn test_spawned_loop_reports_summary() {
        let (snap_tx, snap_rx) = mpsc::channel();
        let options = LoopOptions {
            max_ticks: 10,
            ..Default::default()
        };
        let (cmd_tx, handle) =
            spawn_game_loop(GameSession::with_default_campaign(), options, snap_tx).unwrap();
        drop(cmd_tx);
        let summary = handle.join().unwrap();
        // The dropped sender disconnects the loop before or after its first tick.
        assert!(summary.ticks <= 10);
        assert!(snap_rx.try_iter().count() as u64 <= summary.ticks);
    }
}
