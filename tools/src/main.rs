//! kitchen-runner: headless driver for the paella kitchen.
//!
//! Usage:
//!   kitchen-runner --strategy book
//!   kitchen-runner --strategy random --seed 12345 --config kitchen.json
//!   kitchen-runner --strategy book --realtime
//!   kitchen-runner --ipc-mode

use anyhow::Result;
use paella_core::{
    autochef::{play_session, AutoChef, ChefStrategy},
    command::PlayerCommand,
    config::KitchenConfig,
    engine::KitchenEngine,
    snapshot::SessionSnapshot,
    ticker::ManualTicker,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// One request per line on stdin; one JSON line back per request.
#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Tick { count: u32 },
    Command { command: PlayerCommand },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let realtime = args.iter().any(|a| a == "--realtime");
    let strategy: ChefStrategy = string_arg(&args, "--strategy")
        .unwrap_or("book")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let config = match string_arg(&args, "--config") {
        Some(path) => KitchenConfig::load(path)?,
        None => KitchenConfig::default(),
    };

    let mut engine = KitchenEngine::new(config, Box::new(ManualTicker::new()))?;

    if ipc_mode {
        return run_ipc_loop(&mut engine);
    }

    println!("Paella kitchen: kitchen-runner");
    println!("  strategy:  {strategy:?}");
    println!("  seed:      {seed}");
    println!("  realtime:  {realtime}");
    println!(
        "  clock:     {}s real = {} min simulated",
        engine.config().real_duration_seconds,
        engine.config().simulated_duration_minutes
    );
    println!();

    let mut chef = AutoChef::new(strategy, seed);
    if realtime {
        run_realtime(&mut engine, &mut chef);
    } else {
        play_session(&mut engine, &mut chef);
    }

    print_summary(&engine);
    Ok(())
}

/// Same loop as play_session, paced at one tick per real second and
/// redrawing the clocks as it goes.
fn run_realtime(engine: &mut KitchenEngine, chef: &mut AutoChef) {
    engine.start();
    while engine.state().is_playing() {
        let commands = chef.plan(engine.state(), engine.catalog());
        for command in &commands {
            for event in engine.apply(command) {
                log::info!("{}: {event:?}", event.kind());
            }
        }
        std::thread::sleep(Duration::from_secs(1));
        engine.tick();

        let snap = engine.snapshot();
        println!(
            "  real {} | cooking {} | fire {} | {}",
            snap.real_clock,
            snap.sim_clock,
            snap.fire_level,
            if snap.covered { "covered" } else { "open" }
        );
    }
}

fn run_ipc_loop(engine: &mut KitchenEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => {}
            IpcRequest::Tick { count } => {
                engine.run_ticks(count);
            }
            IpcRequest::Command { command } => {
                log::debug!("ipc command: {}", command.name());
                engine.apply(&command);
            }
        }
        let state: SessionSnapshot = engine.snapshot();
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(engine: &KitchenEngine) {
    let snap = engine.snapshot();
    println!("=== PAN ===");
    for ing in &snap.ingredients {
        println!(
            "  {} {:<12} {:<5} {}",
            ing.icon,
            ing.name,
            if ing.added_to_pan { "in" } else { "-" },
            ing.cook_state.label()
        );
    }
    println!();
    println!("  cooking clock: {}", snap.sim_clock);
    println!("  fire:          {}", snap.fire_level);
    println!("  covered:       {}", snap.covered);
    println!();

    match engine.outcome() {
        Some(outcome) => {
            println!("=== VERDICT: {}/100 ===", outcome.score);
            println!("{}", outcome.title);
            println!();
            println!("{}", outcome.message);
        }
        None => println!("(session did not finish)"),
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
