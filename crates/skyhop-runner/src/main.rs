use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use skyhop_platformer::Platformer;
use skyhop_platformer::config::PlatformerConfig;
use skyhop_platformer::level_data::{LevelData, default_level};
use skyhop_runner::run::run;
use skyhop_runner::script::InputScript;

/// Usage: `skyhop-runner [LEVEL_PATH] [SCRIPT_PATH]`
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = PlatformerConfig::load();

    let level = match args.first() {
        Some(path) => match LevelData::load(path, &config.physics) {
            Ok(level) => level,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load level");
                return ExitCode::FAILURE;
            },
        },
        None => default_level(),
    };

    let script = match args.get(1) {
        Some(path) => match InputScript::load(path) {
            Ok(script) => script,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load input script");
                return ExitCode::FAILURE;
            },
        },
        None => InputScript::idle(level.time_limit + 1.0, config.tick_rate_hz),
    };

    tracing::info!(
        level = %level.name,
        frames = script.total_frames(),
        "Skyhop runner starting"
    );

    let mut game = Platformer::new(&level, config);
    let summary = run(&mut game, &script);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode run summary");
            ExitCode::FAILURE
        },
    }
}
