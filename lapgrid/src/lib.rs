//! lapgrid: shortest closed lap on a grid racetrack.

pub mod cli;
pub mod report;
pub mod track_data;

use std::process::ExitCode;

use lapgrid_search::find_lap;

pub use cli::{Args, CliError, FileConfig};

/// Load the track and settings named by `args`, search, and print the result.
pub fn run(args: &Args) -> Result<ExitCode, CliError> {
    let file = match &args.config_path {
        Some(path) => cli::load_config(path)?,
        None => FileConfig::default(),
    };
    let track = cli::build_track(&file)?;
    let config = args.search_config(&file);

    log::info!(
        "track {}x{} with {} drivable cells, start at {}",
        track.width(),
        track.height(),
        track.drivable_count(),
        track.start()
    );
    log::info!(
        "  min moves {}, min visited {}, max speed {}, heuristic {:?}, collision {:?}",
        config.min_loop_moves(),
        config.min_visited(),
        config.max_speed(),
        config.heuristic(),
        config.collision()
    );

    let outcome = find_lap(&track, &config);
    if args.json {
        println!("{}", report::render_json(&outcome)?);
    } else {
        print!("{}", report::render_text(&outcome));
    }
    Ok(report::exit_code(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_config_path_fails_before_searching() {
        let args = Args {
            config_path: Some("/nonexistent/lapgrid.json".into()),
            ..Args::default()
        };
        assert!(matches!(run(&args), Err(CliError::Io { .. })));
    }
}
