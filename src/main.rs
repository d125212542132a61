use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use nesmap::error::MapError;
use nesmap::map;
use nesmap::snapshot::RamSnapshot;

#[derive(Parser)]
#[command(version, about = "NES memory map for the bubbles game", long_about = None)]
struct Args {
    #[arg(short, long, action = clap::ArgAction::Count, help = "Repeat for more log output")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print every named constant")]
    Map {
        #[arg(short, long, help = "Also list the hardware registers")]
        registers: bool,
    },
    #[command(about = "Decode shadow OAM and bubble positions from a CPU RAM dump")]
    Inspect { dump: PathBuf },
}

fn setup_logger(verbose: u8) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message)))
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn print_map(registers: bool) {
    let mut entries = map::entries();
    if registers {
        entries.extend(map::registers());
    }

    let mut group = "";
    for entry in entries {
        if entry.group != group {
            group = entry.group;
            println!("; {}", group);
        }
        let symbol = entry.symbol.as_deref().unwrap_or("");
        println!("{:<16} {:<12} = {}", entry.name, symbol, entry.value);
    }
}

fn inspect(dump: PathBuf) -> Result<(), MapError> {
    let ram = RamSnapshot::load(dump)?;

    println!("slot  y    tile attr     pal x    visible");
    for (i, sprite) in ram.sprites()?.iter().enumerate() {
        println!(
            "{:<5} ${:02x}  ${:02x}  {:08b} {:<3} ${:02x}  {}",
            i,
            sprite.y,
            sprite.tile_index,
            sprite.attributes.bits(),
            sprite.palette(),
            sprite.x,
            sprite.is_visible()
        );
    }

    println!();
    for (i, bubble) in ram.bubbles()?.iter().enumerate() {
        println!("bubble {}: x = {:3}, y = {:3}", i + 1, bubble.x, bubble.y);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let logging = match setup_logger(args.verbose) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to set up logger: {}", e);
            false
        }
    };

    match args.command {
        Command::Map { registers } => print_map(registers),
        Command::Inspect { dump } => {
            if let Err(e) = inspect(dump) {
                if logging {
                    error!("{}", e);
                } else {
                    eprintln!("{}", e);
                }
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
