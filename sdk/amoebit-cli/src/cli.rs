//! CLI argument parsing and command definitions

use amoebit_interface::{parse_u64_arg, sol_to_lamports};
use amoebit_state::DEFAULT_SEED_GENERATION;
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use std::str::FromStr;

fn parse_pubkey(s: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(s).map_err(|e| format!("'{}' is not a valid public key: {}", s, e))
}

/// Decimal SOL amount to lamports
fn parse_sol(s: &str) -> Result<u64, String> {
    sol_to_lamports(s).map_err(|e| e.to_string())
}

fn parse_u64(s: &str) -> Result<u64, String> {
    parse_u64_arg(s).map_err(|e| e.to_string())
}

/// Amoebit CLI - client for the Amoebit minter program
#[derive(Parser)]
#[command(name = "amoebit")]
#[command(about = "Client for the Amoebit minter program")]
pub struct Cli {
    /// RPC URL; defaults to the Solana CLI config
    #[arg(long = "url", env = "RPC_URL", global = true)]
    pub url: Option<String>,

    /// Payer keypair file; defaults to the Solana CLI config
    #[arg(long, env = "KEYPAIR", global = true)]
    pub keypair: Option<PathBuf>,

    /// Minter program id
    #[arg(long, env = "PROGRAM_ID", global = true, value_parser = parse_pubkey)]
    pub program_id: Option<Pubkey>,

    /// Program keypair file the program id is read from
    #[arg(long, global = true, conflicts_with = "program_id")]
    pub program_keypair: Option<PathBuf>,

    /// Suffix of the account seeds; bump it after a layout change
    #[arg(long, global = true, default_value_t = DEFAULT_SEED_GENERATION)]
    pub seed_generation: u32,

    /// Wallet receiving SOL from purchases
    #[arg(long, global = true, value_parser = parse_pubkey)]
    pub treasury: Option<Pubkey>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the derived account addresses
    Addresses,

    /// Create the total supply account and set the supply
    InitTotal {
        /// Total supply in token lamports
        #[arg(long, value_parser = parse_u64)]
        amount: u64,
    },

    /// Set the release time
    SetReleaseTime {
        /// Unix time in milliseconds
        #[arg(long, value_parser = parse_u64)]
        millis: u64,
    },

    /// Buy tokens with SOL
    Buy {
        /// SOL to pay, e.g. 0.3
        #[arg(long, value_parser = parse_sol)]
        sol: u64,

        /// Tokens to receive, e.g. 2.5
        #[arg(long, value_parser = parse_sol)]
        tokens: u64,
    },

    /// Claim purchased tokens
    Claim {
        /// Amount in token lamports
        #[arg(long, value_parser = parse_u64, default_value = "0")]
        amount: u64,

        /// Send the opcode alone, without an amount
        #[arg(long, conflicts_with = "amount")]
        bare: bool,

        #[arg(long, value_parser = parse_pubkey)]
        source: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        destination: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        mint_authority: Pubkey,
    },

    /// Send an arbitrary opcode with u64 arguments
    Test {
        #[arg(long)]
        opcode: u8,

        /// Argument value, repeatable
        #[arg(long = "arg", value_parser = parse_u64)]
        args: Vec<u64>,
    },

    /// Decode and print the seeded accounts
    Show,

    /// Initialize, set the release time, buy, then read everything back
    Demo {
        #[arg(long, value_parser = parse_u64, default_value = "10000000000")]
        total: u64,

        #[arg(long, value_parser = parse_u64, default_value = "1651909241168")]
        release_millis: u64,

        #[arg(long, value_parser = parse_sol, default_value = "0.3")]
        sol: u64,

        #[arg(long, value_parser = parse_sol, default_value = "2.5")]
        tokens: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_buy_parses_decimal_sol() {
        let cli = Cli::try_parse_from(["amoebit", "buy", "--sol", "0.3", "--tokens", "2.5"]).unwrap();
        match cli.command {
            Commands::Buy { sol, tokens } => {
                assert_eq!(sol, 300_000_000);
                assert_eq!(tokens, 2_500_000_000);
            },
            _ => panic!("expected buy"),
        }
    }

    #[test]
    fn test_repeated_test_args() {
        let cli = Cli::try_parse_from([
            "amoebit", "test", "--opcode", "9", "--arg", "4000", "--arg", "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Test { opcode, args } => {
                assert_eq!(opcode, 9);
                assert_eq!(args, vec![4000, 1]);
            },
            _ => panic!("expected test"),
        }
        assert_eq!(cli.seed_generation, DEFAULT_SEED_GENERATION);
    }

    #[test]
    fn test_claim_amount_defaults_to_zero() {
        let source = Pubkey::new_unique().to_string();
        let destination = Pubkey::new_unique().to_string();
        let mint_authority = Pubkey::new_unique().to_string();
        let cli = Cli::try_parse_from([
            "amoebit",
            "claim",
            "--source",
            source.as_str(),
            "--destination",
            destination.as_str(),
            "--mint-authority",
            mint_authority.as_str(),
        ])
        .unwrap();
        match cli.command {
            Commands::Claim { amount, bare, .. } => {
                assert_eq!(amount, 0);
                assert!(!bare);
            },
            _ => panic!("expected claim"),
        }

        let conflicting = Cli::try_parse_from([
            "amoebit",
            "claim",
            "--amount",
            "5",
            "--bare",
            "--source",
            source.as_str(),
            "--destination",
            destination.as_str(),
            "--mint-authority",
            mint_authority.as_str(),
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_program_id_and_keypair_conflict() {
        let program_id = Pubkey::new_unique().to_string();
        let result = Cli::try_parse_from([
            "amoebit",
            "--program-id",
            program_id.as_str(),
            "--program-keypair",
            "program.json",
            "show",
        ]);
        assert!(result.is_err());
    }
}
