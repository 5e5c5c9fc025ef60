//! Track geometry and snapping for model railroad layouts.
//!
//! The member crates are re-exported, [`run`] drives the command line program.

// Too many/large dependencies to really avoid this.
#![allow(clippy::multiple_crate_versions)]

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use log::LevelFilter;
use thiserror::Error;

#[allow(clippy::pub_use)]
pub use trackplan_layout as layout;
#[allow(clippy::pub_use)]
pub use trackplan_track as track;
#[allow(clippy::pub_use)]
pub use trackplan_types as types;

use crate::{arguments::Arguments, demo::render_svg};

pub mod arguments;
pub mod demo;

/// Errors that may occur while [`running`](run) the program.
#[derive(Debug, Error)]
pub enum RunError {
    /// Starting the logger failed.
    #[error("Starting the logger failed: {0}")]
    FlexiLogger(#[from] FlexiLoggerError),
    /// Building the demo layout failed.
    #[error("Building the demo layout failed: {0}")]
    Layout(#[from] layout::error::LayoutError),
}

/// Start the logger, messages of this crate are shown from [`LevelFilter::Debug`] if `verbose`.
///
/// With `log_file` messages are written to the `log` directory and duplicated to stderr.
fn start_logger(verbose: bool, log_file: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut log_spec_builder = LogSpecBuilder::new();
    let _ = log_spec_builder.default(LevelFilter::Error).module("trackplan", log_level);
    let log_spec = log_spec_builder.finalize();
    let logger_base = Logger::with(log_spec);
    let logger = if log_file {
        logger_base
            .log_to_file(FileSpec::default().directory("log"))
            .duplicate_to_stderr(Duplicate::All)
    } else {
        logger_base.log_to_stderr()
    };
    logger.start()
}

/// Parse the command line arguments and run the program.
///
/// ## Errors
///
/// See [`run`].
pub fn run_from_env() -> Result<(), RunError> {
    run(Arguments::parse_from_env())
}

/// Build the demo layout for the selected scale and print it as SVG.
///
/// ## Errors
///
/// Starting the logger failed, or the demo layout could not be built.
// The SVG document is the output of the program.
#[allow(clippy::print_stdout)]
pub fn run(arguments: Arguments) -> Result<(), RunError> {
    let Arguments { scale, verbose, log_file } = arguments;
    let _logger_handle = start_logger(verbose, log_file)?;
    let layout = demo::demo_layout(&scale.into())?;
    println!("{}", render_svg(&layout));
    Ok(())
}
