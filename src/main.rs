//! Kinetic Pictograph CLI
//!
//! Usage:
//!   kinetic-pictograph [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --overrides <FILE>  Special placement override document (TOML format)
//!   --strict-grid           Reject beats whose motions straddle grid subsets
//!   -e, --examples          Show annotated beat examples
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use kinetic_pictograph::motion::{Color, Letter, MotionData, Pictograph};
use kinetic_pictograph::placement::{resolve_pictograph, SpecialPlacementStore, TomlOverrideSource};
use kinetic_pictograph::{ArrowPlacement, PlacementConfig, PropPlacement};

#[derive(Parser)]
#[command(name = "kinetic-pictograph")]
#[command(about = "Resolve kinetic notation beats into drawable placements")]
struct Cli {
    /// Input beat file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Special placement override document (TOML format)
    #[arg(short, long)]
    overrides: Option<PathBuf>,

    /// Reject beats whose motions straddle grid subsets instead of
    /// defaulting to diamond mode
    #[arg(long)]
    strict_grid: bool,

    /// Show annotated beat examples
    #[arg(short, long)]
    examples: bool,
}

/// On-disk shape of a beat file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BeatFile {
    letter: Option<String>,
    blue: MotionData,
    red: MotionData,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.examples {
        print_examples();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load override document
    let source = match &cli.overrides {
        Some(path) => match TomlOverrideSource::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading overrides '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TomlOverrideSource::default(),
    };
    let store = SpecialPlacementStore::new(source);

    // Read input
    let raw = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let beat: BeatFile = match toml::from_str(&raw) {
        Ok(beat) => beat,
        Err(e) => {
            eprintln!("Error parsing beat: {}", e);
            std::process::exit(1);
        }
    };

    let pictograph = Pictograph::new(beat.letter.map(Letter::new), beat.blue, beat.red);
    if let Err(e) = pictograph.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = PlacementConfig::default().with_strict_grid_mode(cli.strict_grid);
    let placements = resolve_pictograph(&store, &config, &pictograph);

    println!("grid mode: {}", placements.grid_mode);
    match placements.position {
        Some(position) => println!("position:  {}", position.name()),
        None => println!("position:  (none)"),
    }
    print_arrow(Color::Blue, &placements.blue_arrow);
    print_arrow(Color::Red, &placements.red_arrow);
    print_prop(Color::Blue, &placements.blue_prop);
    print_prop(Color::Red, &placements.red_prop);
}

fn print_arrow(color: Color, arrow: &ArrowPlacement) {
    println!(
        "{} arrow: x={:.1} y={:.1} angle={:.1} mirrored={}",
        color.as_str(),
        arrow.x,
        arrow.y,
        arrow.rotation_angle,
        arrow.mirrored
    );
}

fn print_prop(color: Color, prop: &PropPlacement) {
    println!(
        "{} prop:  x={:.1} y={:.1} angle={:.1}",
        color.as_str(),
        prop.x,
        prop.y,
        prop.rotation_angle
    );
}

fn print_intro() {
    println!(
        r#"Kinetic Pictograph - resolve notation beats into drawable placements

USAGE:
    kinetic-pictograph [OPTIONS] [FILE]
    cat beat.toml | kinetic-pictograph

OPTIONS:
    -o, --overrides    Special placement override document (TOML file)
    --strict-grid      Reject beats whose motions straddle grid subsets
    -e, --examples     Show annotated beat examples
    -h, --help         Print help

QUICK START:
    kinetic-pictograph --examples > beat.toml
    kinetic-pictograph beat.toml

A beat names two motions, one per color, each with a motion type, start
and end grid locations, orientations, a rotation direction, and a turn
count. The resolver prints canvas coordinates, rotation angles, and the
mirror flag for both arrows and both props."#
    );
}

fn print_examples() {
    println!(
        r#"# A diamond-mode beat: both hands spin pro, one full turn each.
# Pipe this file back in to resolve it:
#
#     kinetic-pictograph --examples | kinetic-pictograph

letter = "G"

[blue]
id = "blue-1"
color = "blue"
motion-type = "pro"
start-loc = "n"
end-loc = "e"
start-ori = "in"
end-ori = "in"
rotation-direction = "cw"
turns = 1.0

[red]
id = "red-1"
color = "red"
motion-type = "pro"
start-loc = "s"
end-loc = "w"
start-ori = "in"
end-ori = "in"
rotation-direction = "cw"
turns = 1.0

# Other motion types:
#   "anti"   - rotation opposes the handpath; mirrors on cw
#   "dash"   - straight travel between antipodal locations, turns allowed
#   "static" - hand stays put (start-loc must equal end-loc)
# A float is written as a pro or anti motion with turns = "fl".
# Box-mode beats use the intercardinal locations ne/se/sw/nw."#
    );
}
