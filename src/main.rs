//! Calc Pong entry point
//!
//! Runs the game in the terminal. Logging goes to stderr and defaults to
//! warnings only; set `RUST_LOG=info` and redirect stderr to a file to see
//! more without painting over the display.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use calc_pong::platform::terminal::{TerminalGuard, TerminalKeys, TerminalScreen};
use calc_pong::renderer::score_text;
use calc_pong::sim::Side;
use calc_pong::{Game, Scheduler, Settings, WaitMode};

#[derive(Parser)]
#[command(about = "Two-player Pong on a 128x64 calculator display")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Render period in milliseconds
    #[arg(long)]
    render_ms: Option<u64>,
    /// Physics period in milliseconds
    #[arg(long)]
    physics_ms: Option<u64>,
    /// AI period before the human scores, in milliseconds
    #[arg(long)]
    ai_ms: Option<u64>,
    /// Key wait mode: `keep` redraws continuously, `halt` redraws only after keys
    #[arg(long, value_parser = parse_wait_mode)]
    wait: Option<WaitMode>,
}

fn parse_wait_mode(s: &str) -> Result<WaitMode, String> {
    WaitMode::from_str(s).ok_or_else(|| format!("unknown wait mode `{s}` (expected keep or halt)"))
}

impl Cli {
    fn settings(&self) -> calc_pong::Result<Settings> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;
        if let Some(ms) = self.render_ms {
            settings.render_period_ms = ms;
        }
        if let Some(ms) = self.physics_ms {
            settings.physics_period_ms = ms;
        }
        if let Some(ms) = self.ai_ms {
            settings.ai_base_period_ms = ms;
        }
        if let Some(mode) = self.wait {
            settings.wait_mode = mode;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn play(settings: &Settings) -> calc_pong::Result<Game<TerminalScreen<std::io::Stdout>>> {
    let mut game = Game::new(TerminalScreen::stdout());
    let mut scheduler = Scheduler::new(settings.tick_rates());
    let mut keys = TerminalKeys;

    let guard = TerminalGuard::enter()?;
    let result = calc_pong::run(&mut game, &mut scheduler, &mut keys, settings.wait_mode);
    drop(guard);

    result.map(|()| game)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Calc Pong starting...");

    let cli = Cli::parse();
    let outcome = cli.settings().and_then(|settings| {
        log::info!("Wait mode: {}", settings.wait_mode.as_str());
        play(&settings)
    });

    match outcome {
        Ok(game) => {
            match serde_json::to_string(&game.state) {
                Ok(json) => log::info!("Final state: {json}"),
                Err(err) => log::warn!("Could not serialize final state: {err}"),
            }
            println!(
                "You {} - {} CPU",
                score_text(game.state.score(Side::HUMAN)),
                score_text(game.state.score(Side::COMPUTER))
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("calc-pong: {err}");
            ExitCode::FAILURE
        }
    }
}
