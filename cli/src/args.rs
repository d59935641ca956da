//! Parsing command-line arguments.

use clap::{command, value_parser, Arg, Error};
use seedlife_lib::Pattern;
use std::{env, ffi::OsString};

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    /// The seed pattern to start from.
    pub(crate) pattern: Pattern,

    /// The number of generations to run.
    pub(crate) generations: u32,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(env::args_os())
    }

    /// Parses the given arguments.
    fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command!()
            .long_about(
                "Runs Conway's Game of Life from a named seed pattern\n\
                 \n\
                 The seed and every generation after it are printed as a grid of \
                 glyphs,\nclipped to the bounding rectangle of the living cells:\n\
                 * Living cells are represented by `▣`;\n\
                 * Dead cells are represented by `▢`.\n\
                 \n\
                 The available seed patterns are:\n\
                 * `rpentomino`: the R-pentomino, a methuselah;\n\
                 * `glider`: a glider heading southeast, plus a block;\n\
                 * `square`: a 2x2 block, which never changes.\n",
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Name of the seed pattern")
                    .required(true)
                    .index(1)
                    .value_parser(Pattern::ALL.map(Pattern::name)),
            )
            .arg(
                Arg::new("GENS")
                    .help("Number of generations to run")
                    .required(true)
                    .index(2)
                    .value_parser(value_parser!(u32)),
            )
            .try_get_matches_from(args)?;

        let pattern: Pattern = matches
            .get_one::<String>("PATTERN")
            .unwrap()
            .parse()
            .unwrap();
        let generations = *matches.get_one::<u32>("GENS").unwrap();

        Ok(Self {
            pattern,
            generations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn valid() {
        let args = Args::parse_from(["seedlife", "glider", "4"]).unwrap();
        assert_eq!(args.pattern, Pattern::Glider);
        assert_eq!(args.generations, 4);

        let args = Args::parse_from(["seedlife", "rpentomino", "0"]).unwrap();
        assert_eq!(args.pattern, Pattern::RPentomino);
        assert_eq!(args.generations, 0);

        let args = Args::parse_from(["seedlife", "square", "100"]).unwrap();
        assert_eq!(args.pattern, Pattern::Square);
        assert_eq!(args.generations, 100);
    }

    #[test]
    fn unknown_pattern() {
        let err = Args::parse_from(["seedlife", "toad", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn bad_generations() {
        let err = Args::parse_from(["seedlife", "glider", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(Args::parse_from(["seedlife", "glider", "-1"]).is_err());
        assert!(Args::parse_from(["seedlife", "glider", "4.5"]).is_err());
    }

    #[test]
    fn missing_args() {
        let err = Args::parse_from(["seedlife"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::parse_from(["seedlife", "square"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
