use std::process::exit;
use std::str::FromStr;

use clap::{Arg, ArgMatches, Command as ClapCommand};
use env_logger::Builder;
use log::{LevelFilter, error, info};

use mandelbrot_viewer::{MandelbrotColourMapKind, RenderMode, ViewState, ViewerConfig};

fn main() {
    let matches = parse_cli_args();

    // init logging
    let default = String::from("error");
    let verbosity = matches.get_one::<String>("verbosity").unwrap_or(&default);
    let level = LevelFilter::from_str(verbosity).unwrap_or(LevelFilter::Error);
    let mut builder = Builder::from_default_env();
    builder.filter_level(level).init();

    info!("'{}' version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = match viewer_config(&matches) {
        Ok(config) => config,
        Err(message) => {
            error!("{}", message);
            eprintln!("{}", message);
            exit(2);
        }
    };

    if let Err(err) = mandelbrot_viewer::run_gui(config) {
        error!("{}", err);
        eprintln!("{}", err);
        exit(1);
    }
}

/// Build the startup configuration from the parsed command line
fn viewer_config(matches: &ArgMatches) -> Result<ViewerConfig, String> {
    let defaults = ViewerConfig::default();

    let colour_map = match matches.get_one::<String>("palette") {
        Some(name) => MandelbrotColourMapKind::from_str(name).map_err(|e| e.to_string())?,
        None => defaults.colour_map,
    };

    let render_mode = if matches.get_flag("serial") {
        RenderMode::Serial
    } else {
        defaults.render_mode
    };

    let max_iterations = matches
        .get_one::<u32>("max-iterations")
        .copied()
        .unwrap_or(defaults.initial_view.max_iterations);

    let initial_view = ViewState {
        max_iterations,
        ..defaults.initial_view
    };

    let config = ViewerConfig {
        width: matches.get_one::<i32>("width").copied().unwrap_or(defaults.width),
        height: matches.get_one::<i32>("height").copied().unwrap_or(defaults.height),
        initial_view,
        colour_map,
        render_mode,
    };

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Parse the command line arguments using clap
fn parse_cli_args() -> ArgMatches {
    let palettes = MandelbrotColourMapKind::ALL
        .iter()
        .map(|kind| kind.cli_name())
        .collect::<Vec<_>>()
        .join(", ");

    ClapCommand::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("width")
            .long("width")
            .number_of_values(1)
            .value_parser(clap::value_parser!(i32).range(1..))
            .value_name("PIXELS")
            .help("Initial window width"))
        .arg(Arg::new("height")
            .long("height")
            .number_of_values(1)
            .value_parser(clap::value_parser!(i32).range(1..))
            .value_name("PIXELS")
            .help("Initial window height"))
        .arg(Arg::new("max-iterations")
            .short('i')
            .long("max-iterations")
            .number_of_values(1)
            .value_parser(clap::value_parser!(u32).range(1..))
            .value_name("ITERATIONS")
            .help("Iteration limit before a point counts as inside the set (default: 1000)"))
        .arg(Arg::new("palette")
            .short('p')
            .long("palette")
            .number_of_values(1)
            .value_name("PALETTE")
            .help(format!("Colour palette ({palettes}, default: fire)")))
        .arg(Arg::new("serial")
            .short('s')
            .long("serial")
            .action(clap::ArgAction::SetTrue)
            .help("Render on a single thread instead of one task per row"))
        .arg(Arg::new("verbosity")
            .short('v')
            .long("verbosity")
            .number_of_values(1)
            .value_name("VERBOSITY_LEVEL")
            .help("Set verbosity level for output (trace, debug, info, warn, default: error)"))
        .get_matches()
}
