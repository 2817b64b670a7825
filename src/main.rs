//! Brick Breaker entry point
//!
//! Native builds have no window yet: the binary plays a session headless with
//! the autopilot and prints the result as JSON.
//!
//! Usage: `brick-breaker [--seed N] [--max-ticks N] [--realtime] [--auto-relaunch]`

use std::sync::mpsc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, anyhow};

use brick_breaker::GameConfig;
use brick_breaker::platform::{HeadlessSurface, NoPause, RunOptions, ThreadSleep, run_session};
use brick_breaker::sim::{GameState, InputEvent, seeded};

/// Tick budget for a headless run
const DEFAULT_MAX_TICKS: u64 = 500_000;

#[derive(Debug, Clone, PartialEq)]
struct DemoArgs {
    seed: u64,
    max_ticks: u64,
    realtime: bool,
    auto_relaunch: bool,
}

fn parse_args(args: &[String]) -> Result<DemoArgs> {
    let mut parsed = DemoArgs {
        seed: clock_seed(),
        max_ticks: DEFAULT_MAX_TICKS,
        realtime: false,
        auto_relaunch: false,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                parsed.seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--max-ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-ticks"))?;
                parsed.max_ticks = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --max-ticks value: {}", v))?;
            }
            "--realtime" => parsed.realtime = true,
            "--auto-relaunch" => parsed.auto_relaunch = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(parsed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    log::info!("Brick Breaker (native) starting with seed {}", args.seed);

    let config = GameConfig {
        auto_relaunch: args.auto_relaunch,
        ..GameConfig::default()
    };
    config.validate()?;

    let mut state = GameState::new(config);
    let mut surface = HeadlessSurface::new();
    let mut rng = seeded(args.seed);
    // Keep the sender alive: a window backend would feed pointer events through it
    let (_input_tx, mut input_rx) = mpsc::channel::<InputEvent>();
    let options = RunOptions {
        max_ticks: Some(args.max_ticks),
        autopilot: true,
    };

    let outcome = if args.realtime {
        run_session(&mut state, &mut surface, &mut input_rx, &mut ThreadSleep, &mut rng, &options)?
    } else {
        run_session(&mut state, &mut surface, &mut input_rx, &mut NoPause, &mut rng, &options)?
    };

    println!("{}", serde_json::to_string_pretty(outcome.summary())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&strings(&["--seed", "42", "--max-ticks", "100", "--realtime"])).unwrap();
        assert_eq!(args.seed, 42);
        assert_eq!(args.max_ticks, 100);
        assert!(args.realtime);
        assert!(!args.auto_relaunch);
    }

    #[test]
    fn test_parse_args_rejects_garbage() {
        assert!(parse_args(&strings(&["--seed"])).is_err());
        assert!(parse_args(&strings(&["--seed", "abc"])).is_err());
        assert!(parse_args(&strings(&["--fullscreen"])).is_err());
    }
}
