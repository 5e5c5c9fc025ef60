//! Utility functions for tests.

use std::fmt::Debug;

use flexi_logger::{LogSpecBuilder, Logger, LoggerHandle};
use log::LevelFilter;
use parking_lot::{const_mutex, Mutex};
use thiserror::Error;

/// Helper variable for [`init_test_logging`].
/// Makes sure only the first call registers a logger.
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = const_mutex(None);

/// Initialise `FlexiLogger` once, store the handle in a global variable.
///
/// Necessary, since `cargo test` runs several tests in parallel, but only one logger can be active.
///
/// ## Panics
///
/// If the logger can't be initialised, e.g. because one already exists.
pub fn init_test_logging() {
    let handle = &mut *LOGGER_HANDLE.lock();
    if handle.is_none() {
        let mut log_spec_builder = LogSpecBuilder::new();
        let _ = log_spec_builder.default(LevelFilter::Error).module("trackplan", LevelFilter::Warn);
        let log_spec = log_spec_builder.finalize();
        *handle = Some(
            Logger::with(log_spec)
                .log_to_stderr()
                .start()
                .expect("Initialising the logger failed!"),
        );
    }
}

/// A failed expectation in a test.
#[derive(Debug, Error)]
pub enum Expectation {
    /// `true` was expected.
    #[error(transparent)]
    True(#[from] ExpectTrue),
    /// Two values were expected to be equal.
    #[error(transparent)]
    Eq(#[from] ExpectEq),
    /// Two values were expected to be different.
    #[error(transparent)]
    Ne(#[from] ExpectNe),
    /// The first value was expected to be greater.
    #[error(transparent)]
    Gt(#[from] ExpectGt),
    /// Two floating point values were expected to be close to each other.
    #[error(transparent)]
    Close(#[from] ExpectClose),
    /// A successful result was expected.
    #[error(transparent)]
    Ok(#[from] ExpectOk),
}

#[derive(Debug, Clone, Copy, Error)]
/// `true` was expected.
#[error("Expected true!")]
pub struct ExpectTrue;

#[allow(clippy::missing_errors_doc)]
/// Return [Ok] if the value is [true], otherwise [`Err`].
pub fn expect_true(value: bool) -> Result<(), ExpectTrue> {
    if value {
        Ok(())
    } else {
        Err(ExpectTrue)
    }
}

#[derive(Debug, Error)]
/// Two values were expected to be equal.
#[error("Expected {0:?} and {1:?} to be equal!")]
pub struct ExpectEq(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Return [Ok] if both values are equal, otherwise [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_eq<T: 'static + Debug + PartialEq>(a: T, b: T) -> Result<(), ExpectEq> {
    expect_true(a == b).map_err(|_expect_true| ExpectEq(Box::new(a), Box::new(b)))
}

#[derive(Debug, Error)]
/// Two values were expected to be different.
#[error("Expected {0:?} and {1:?} to be different!")]
pub struct ExpectNe(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Return [Ok] if both values are different, otherwise [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_ne<T: 'static + Debug + PartialEq>(a: T, b: T) -> Result<(), ExpectNe> {
    expect_true(a != b).map_err(|_expect_true| ExpectNe(Box::new(a), Box::new(b)))
}

#[derive(Debug, Error)]
/// The first value was expected to be greater.
#[error("Expected {0:?} to be greater than {1:?}!")]
pub struct ExpectGt(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Return [Ok] if the first value is greater than the second, otherwise [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_gt<T: 'static + Debug + PartialOrd>(a: T, b: T) -> Result<(), ExpectGt> {
    expect_true(a > b).map_err(|_expect_true| ExpectGt(Box::new(a), Box::new(b)))
}

/// Tolerance used by [`expect_close`].
pub const TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, Error)]
/// Two floating point values were expected to differ by less than [`TOLERANCE`].
#[error("Expected {0} and {1} to differ by less than {TOLERANCE}!")]
pub struct ExpectClose(f64, f64);

#[allow(clippy::missing_errors_doc)]
/// Return [Ok] if both values differ by less than [`TOLERANCE`], otherwise [`Err`].
///
/// `NaN` is never close to anything.
#[allow(clippy::min_ident_chars)]
pub fn expect_close(a: f64, b: f64) -> Result<(), ExpectClose> {
    expect_true((a - b).abs() < TOLERANCE).map_err(|_expect_true| ExpectClose(a, b))
}

#[derive(Debug, Error)]
/// A successful result was expected.
#[error("Expected a successful result, got the error {0:?}!")]
pub struct ExpectOk(Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Return the value of an [`Ok`] result, otherwise [`Err`] with the error.
pub fn expect_ok<T, E: 'static + Debug>(result: Result<T, E>) -> Result<T, ExpectOk> {
    result.map_err(|error| ExpectOk(Box::new(error)))
}
