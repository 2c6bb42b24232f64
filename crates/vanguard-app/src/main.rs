use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vanguard_app::cli::Cli;
use vanguard_app::game_loop::spawn_game_loop;
use vanguard_app::input::forward_commands;
use vanguard_app::state::{AppError, GameLoopCommand, RunSummary};
use vanguard_core::commands::PlayerCommand;
use vanguard_core::config::SessionConfig;
use vanguard_core::formation::WaveSet;
use vanguard_sim::GameSession;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(summary) => {
            info!(phase = ?summary.phase, score = summary.score, "run finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "vanguard failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary, AppError> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let waves = match &cli.waves {
        Some(path) => WaveSet::load(path)?,
        None => WaveSet::default_campaign(),
    };
    info!(
        seed = config.seed,
        tick_rate = config.tick_rate,
        waves = waves.waves.len(),
        "starting session"
    );

    let session = GameSession::new(config, waves);
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let (cmd_tx, handle) = spawn_game_loop(session, cli.loop_options(), snapshot_tx)?;

    // Without a command source the run would sit in Ready forever.
    if cli.autostart || !cli.stdin {
        let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun));
        let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SetFiring {
            held: true,
        }));
    }

    if cli.stdin {
        let input_tx = cmd_tx.clone();
        std::thread::Builder::new()
            .name("vanguard-input".into())
            .spawn(move || forward_commands(io::stdin().lock(), &input_tx))?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for snapshot in snapshot_rx {
        if !cli.quiet {
            serde_json::to_writer(&mut out, &snapshot)?;
            writeln!(out)?;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    let summary = handle.join().map_err(|_| AppError::LoopPanicked)?;
    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;
    Ok(summary)
}
