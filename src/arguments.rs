//! Command line arguments.

use std::{
    env,
    fmt::{self, Debug, Display, Formatter},
    num::NonZeroI32,
};

use kommandozeilen_argumente::{EnumArgument, Parse};

use trackplan_track::scale::Scale;

#[derive(Debug, Clone, Parse)]
/// Build a demo layout from the standard pieces and print it as SVG.
#[kommandozeilen_argumente(sprache: english, version, hilfe(lang: [help, hilfe], kurz: h))]
pub struct Arguments {
    /// Model scale of the standard pieces.
    #[kommandozeilen_argumente(standard: ScaleArgument::N, kurz, meta_var: SCALE)]
    pub scale: ScaleArgument,

    /// Show additional information in the console.
    pub verbose: bool,

    /// Additionally write log messages to a file.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_file: bool,
}

impl Arguments {
    /// Parse the command line arguments of the current process.
    ///
    /// ## Panics
    ///
    /// Programming error, if [`NonZeroI32::new`] returns [`None`] for the exit code.
    #[must_use]
    pub fn parse_from_env() -> Self {
        Arguments::parse_mit_fehlermeldung(env::args_os().skip(1), NonZeroI32::new(1).expect("1 != 0"))
    }
}

/// Known model scales, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
// Scale names are conventionally single letters.
#[allow(clippy::min_ident_chars)]
pub enum ScaleArgument {
    /// O scale, 1:45.
    O,
    /// HO scale, 1:87.
    Ho,
    /// N scale, 1:160.
    N,
}

impl Display for ScaleArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

impl From<ScaleArgument> for Scale {
    fn from(argument: ScaleArgument) -> Self {
        match argument {
            ScaleArgument::O => Scale::O,
            ScaleArgument::Ho => Scale::HO,
            ScaleArgument::N => Scale::N,
        }
    }
}
