use clap::Parser;
use river_escape::OutputFormat;
use river_escape::core::config::{self, CliOverrides, GameConfig};
use river_escape::core::rules::Difficulty;
use river_escape::core::solution::{SOLUTION_LEN, shortest_solution, solution_report, verify_script};
use river_escape::core::state::Theme;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{Error, ErrorKind};

#[derive(Parser)]
#[command(name = "river-escape", about = "Missionaries and Cannibals river-crossing puzzle")]
struct Args {
    /// Starting difficulty (overrides config and environment)
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Color theme (overrides config and environment)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Start with hints shown
    #[arg(long)]
    hints: bool,

    /// Print the optimal solution and exit instead of starting the game
    #[arg(long)]
    solution: bool,

    /// Output format for --solution
    #[arg(long, default_value_t, value_enum, requires = "solution")]
    format: OutputFormat,

    /// With --solution, also check the script against a breadth-first search
    #[arg(long, requires = "solution")]
    verify: bool,
}

fn print_solution(format: OutputFormat, verify: bool) -> std::io::Result<()> {
    let report = solution_report(format).map_err(Error::other)?;
    print!("{}", report);

    if verify {
        verify_script().map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let optimum = shortest_solution()
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "puzzle has no solution"))?;
        if optimum.len() != SOLUTION_LEN {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "script has {} moves but the optimum is {}",
                    SOLUTION_LEN,
                    optimum.len()
                ),
            ));
        }
        eprintln!("verified: {} moves, optimal", SOLUTION_LEN);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to river-escape.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("river-escape.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if args.solution {
        log::info!("Printing solution as {:?}", args.format);
        return print_solution(args.format, args.verify);
    }

    let file_config = match config::load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            GameConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            difficulty: args.difficulty,
            theme: args.theme,
            show_hints: args.hints,
        },
    );

    log::info!(
        "River Escape starting up: difficulty={:?} theme={:?} hints={}",
        resolved.difficulty,
        resolved.theme,
        resolved.show_hints
    );

    river_escape::tui::run(resolved)
}
