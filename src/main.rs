//! Print a demo layout of snapped standard pieces as SVG.

use trackplan::{run_from_env, RunError};

fn main() -> Result<(), RunError> {
    run_from_env()
}
