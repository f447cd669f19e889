use crate::airport::Airport;
use crate::config::{Settings, WeatherMode};
use crate::plane::{Bay, PlaneId};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tabled::settings::Style;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod airport;
mod config;
mod error;
mod plane;
mod weather;

#[derive(Parser)]
struct Args {
    /// Path to a JSON settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of planes on the ground
    #[arg(long, value_name = "N")]
    capacity: Option<NonZeroUsize>,

    /// Where the weather comes from
    #[arg(long, value_enum, default_value_t = WeatherMode::Random)]
    weather: WeatherMode,

    /// Probability of a storm on each query of the random weather
    #[arg(long, value_name = "P")]
    stormy_threshold: Option<f64>,

    /// Seed for the random weather
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Tracing filter, e.g. `debug` or `airfield=trace`
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Args {
    fn settings(&self) -> Result<Settings, Box<dyn std::error::Error>> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };
        if let Some(capacity) = self.capacity {
            settings.max_capacity = capacity;
        }
        if let Some(threshold) = self.stormy_threshold {
            settings.stormy_threshold = threshold;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn paginate(content: &str) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // quitting the pager early closes the pipe
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    pager.wait()?;
    Ok(())
}

fn list(airport: &Airport) {
    if airport.is_full() {
        println!("{} {}", airport, "(full)".yellow());
    } else {
        println!("{}", airport);
    }
    if airport.planes().is_empty() {
        println!("No planes on the ground.");
        return;
    }

    let bays = Bay::list(airport.planes());
    let mut table = tabled::Table::new(&bays);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    let rendered = table.to_string();
    if bays.len() > 20 {
        if let Err(e) = paginate(&rendered) {
            warn!(error = %e, "pager unavailable");
            println!("{}", rendered);
        }
    } else {
        println!("{}", rendered);
    }
}

fn report(result: Result<(), error::AirportError>, done: String) {
    match result {
        Ok(()) => println!("{}", done.green()),
        Err(e) => {
            warn!(error = ?e, "request refused");
            println!("{}", e.to_string().red());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let settings = args.settings()?;
    let mut airport = settings.build(args.weather)?;
    info!(
        capacity = airport.maximum_capacity(),
        weather = ?args.weather,
        on_ground = airport.planes().len(),
        "tower online"
    );
    println!("Tower online. {}.", airport);

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["land", "takeoff", "ls", "weather", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "land" => {
                        if let Some(plane) = parts.get(1) {
                            let plane: PlaneId = Arc::from(*plane);
                            report(airport.land(plane.clone()), format!("{} landed.", plane));
                        } else {
                            println!("Usage: land <plane>");
                        }
                    },
                    "takeoff" | "take-off" => {
                        if let Some(plane) = parts.get(1) {
                            let plane: PlaneId = Arc::from(*plane);
                            report(airport.take_off(&plane), format!("{} took off.", plane));
                        } else {
                            println!("Usage: takeoff <plane>");
                        }
                    },
                    "ls" => list(&airport),
                    "weather" => {
                        if airport.weather().is_stormy() {
                            println!("{}", "stormy".yellow().bold());
                        } else {
                            println!("{}", "calm".cyan());
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  land <plane>    - Clear <plane> to land");
                        println!("  takeoff <plane> - Clear <plane> to take off");
                        println!("  ls              - List the planes on the ground");
                        println!("  weather         - Look out of the window");
                        println!("  help / ?        - Show this help menu");
                        println!("  exit / quit     - Close the tower\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
