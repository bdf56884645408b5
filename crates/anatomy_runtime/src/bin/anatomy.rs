//! Anatomy editor CLI entry point.

use anatomy_runtime::{Repl, SessionConfig};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    verbose: bool,
    root_name: Option<String>,
    history: Option<usize>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--root-name" => {
                let name = args.next().ok_or("--root-name requires a value")?;
                config.root_name = Some(name);
            }
            "--history" => {
                let value = args.next().ok_or("--history requires a value")?;
                config.history = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --history value: {value}"))?,
                );
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "anatomy=debug" } else { "anatomy=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("anatomy {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(cli.verbose)?;

    let mut config = SessionConfig::default();
    if let Some(name) = cli.root_name {
        config = config.with_root_name(name);
    }
    if let Some(capacity) = cli.history {
        config = config.with_history_capacity(capacity);
    }

    let mut repl = Repl::new(config)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mAnatomy\x1b[0m - Interactive creature anatomy editor

\x1b[1mUSAGE:\x1b[0m
    anatomy [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -v, --verbose         Log every tree edit to stderr
    --root-name NAME      Name of the root part (default: Body)
    --history N           Number of edits kept for undo (default: 32)

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG              Log filter, e.g. anatomy_tree=trace

\x1b[1mEDITOR COMMANDS:\x1b[0m
    show                  List the parts with row numbers
    select <row>          Select a part
    add <archetype> [name]
    insert <pos> <archetype> [name]
    remove                Remove the selected part and its limbs
    undo                  Revert the last edit
    Ctrl+D                Exit"
    );
}
