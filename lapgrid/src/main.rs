//! lapgrid: find the shortest closed lap on a grid racetrack.
//!
//! ```bash
//! # Built-in course, default thresholds
//! cargo run --release
//!
//! # Custom track and settings
//! cargo run --release -- --config lap.json --min-visited 40 --json
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use lapgrid_lib::Args;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version arrive here too, on stdout.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match lapgrid_lib::run(&args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(1)
        }
    }
}
