use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::codec::{MAX_BASE, MIN_BASE};

/// Validates that a base lies in the supported range
fn validate_base(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(MIN_BASE..=MAX_BASE).contains(&value) {
        return Err(format!("base must be between {MIN_BASE} and {MAX_BASE}"));
    }
    Ok(value)
}

#[derive(Parser)]
#[command(name = "shareback")]
#[command(about = "Recover the secret constant of a threshold sharing polynomial from encoded shares")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from one or more JSON problem files
    Recover {
        /// Problem files; read from stdin when piped, otherwise testcase1.json and testcase2.json
        files: Vec<PathBuf>,

        /// Check shares beyond the threshold against the recovered polynomial
        #[arg(long)]
        verify: bool,
    },
    /// Decode a digit string in the given base and print it in decimal
    Decode {
        #[arg(value_parser = validate_base)]
        base: u32,

        value: String,
    },
    /// Encode a decimal integer as a digit string in the given base
    Encode {
        #[arg(value_parser = validate_base)]
        base: u32,

        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base() {
        assert_eq!(validate_base("16"), Ok(16));
        assert!(validate_base("1").is_err());
        assert!(validate_base("37").is_err());
        assert!(validate_base("ten").is_err());
    }

    #[test]
    fn test_parse_recover() {
        let cli = Cli::parse_from(["shareback", "-vv", "recover", "a.json", "b.json", "--verify"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Recover { files, verify } => {
                assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
                assert!(verify);
            }
            _ => panic!("expected recover"),
        }
    }

    #[test]
    fn test_parse_decode_rejects_bad_base() {
        assert!(Cli::try_parse_from(["shareback", "decode", "40", "zz"]).is_err());
    }
}
