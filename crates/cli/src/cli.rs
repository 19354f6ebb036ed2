use std::path::PathBuf;

use crate::helpers::parse_polynomial;
use crate::{arithmetic, demo, eval, root, save, show};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use polycalc_config::load_config;
use polycalc_polynomial::Polynomial;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polycalc")]
#[command(about = "Build, combine, evaluate and store sparse polynomials", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polycalc -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.clone())?;
        info!("Config loaded from: {:?}", config.config_file);

        match self.command {
            Commands::Demo => demo::execute()?,
            Commands::Eval { polynomial, points } => eval::execute(&config, &polynomial, &points),
            Commands::Root { polynomial, x } => root::execute(&polynomial, x),
            Commands::Add { left, right } => arithmetic::execute_add(&left, &right),
            Commands::Mul { left, right } => arithmetic::execute_mul(&left, &right)?,
            Commands::Save { polynomial, file } => save::execute(&config, &polynomial, &file)?,
            Commands::Show { file } => show::execute(&config, &file)?,
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in demonstration
    Demo,

    /// Evaluate a polynomial at one or more points
    Eval {
        /// Polynomial in canonical form, e.g. `2-5x2+3x4`
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        polynomial: Polynomial,

        /// Points to evaluate at
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<f64>,
    },

    /// Check whether a value is an exact root of a polynomial
    Root {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        polynomial: Polynomial,

        #[arg(allow_hyphen_values = true)]
        x: f64,
    },

    /// Add two polynomials
    Add {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        left: Polynomial,

        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        right: Polynomial,
    },

    /// Multiply two polynomials
    Mul {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        left: Polynomial,

        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        right: Polynomial,
    },

    /// Save a polynomial to a file
    Save {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        polynomial: Polynomial,

        /// Target file, relative paths resolve against the configured data dir
        file: PathBuf,
    },

    /// Load a polynomial from a file and print it
    Show {
        /// Source file, relative paths resolve against the configured data dir
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["polycalc", "demo"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);

        let cli = Cli::try_parse_from(["polycalc", "-vv", "demo"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);

        let cli = Cli::try_parse_from(["polycalc", "--quiet", "demo"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);

        assert!(Cli::try_parse_from(["polycalc", "-q", "-v", "demo"]).is_err());
    }

    #[test]
    fn test_parse_negative_arguments() {
        let cli = Cli::try_parse_from(["polycalc", "eval", "-5x2+3", "-1", "0.5"]).unwrap();
        match cli.command {
            Commands::Eval { polynomial, points } => {
                assert_eq!(polynomial.to_string(), "3-5x2");
                assert_eq!(points, vec![-1.0, 0.5]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_polynomial() {
        assert!(Cli::try_parse_from(["polycalc", "add", "x5", "2"]).is_err());
    }
}
