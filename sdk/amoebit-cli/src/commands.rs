use crate::cli::{Cli, Commands};
use amoebit_sdk::config::load_keypair;
use amoebit_sdk::{
    AmoebitSdkError, AmoebitSession, ClaimAccounts, CliConfig, RpcConnection, SeededCall,
    SolConnection,
};
use amoebit_state::{SeedPurpose, SeedSet};
use anyhow::{anyhow, bail, Context, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load_or_default().await;

    let keypair_path = match &cli.keypair {
        Some(path) => path.clone(),
        None => config.keypair_path()?,
    };
    let payer = load_keypair(&keypair_path)
        .with_context(|| format!("Failed to load payer keypair {}", keypair_path.display()))?;

    let program_id = resolve_program_id(&cli)?;
    let seeds = SeedSet::generation(cli.seed_generation);
    let mut session = AmoebitSession::new(program_id, payer.pubkey(), &seeds)?;
    if let Some(treasury) = cli.treasury {
        session = session.with_treasury(treasury);
    }

    if let Commands::Addresses = cli.command {
        print_addresses(&session);
        return Ok(());
    }

    let url = cli.url.clone().unwrap_or_else(|| config.rpc_url());
    let connection = RpcConnection::with_commitment(url.clone(), config.commitment());
    let version = connection
        .get_version()
        .await
        .map_err(|e| anyhow!("Failed to reach {}: {}", url, e))?;
    info!(%url, %version, "Connection to cluster established");

    if submits_transactions(&cli.command) {
        session.establish_payer(&connection).await?;
    }
    session.check_program(&connection).await?;

    match cli.command {
        Commands::Addresses => {},
        Commands::InitTotal { amount } => {
            submit(&connection, session.initialize_total(amount), &payer).await?;
        },
        Commands::SetReleaseTime { millis } => {
            submit(&connection, session.set_release_time(millis), &payer).await?;
        },
        Commands::Buy { sol, tokens } => {
            submit(&connection, session.buy_token(sol, tokens), &payer).await?;
        },
        Commands::Claim {
            amount,
            bare,
            source,
            destination,
            mint_authority,
        } => {
            let token_accounts = ClaimAccounts {
                source_token_account: source,
                destination_token_account: destination,
                mint_authority,
            };
            let call = claim_call(&session, &token_accounts, amount, bare);
            submit(&connection, call, &payer).await?;
        },
        Commands::Test { opcode, args } => {
            submit(&connection, session.test_contract(opcode, args), &payer).await?;
        },
        Commands::Show => {},
        Commands::Demo {
            total,
            release_millis,
            sol,
            tokens,
        } => {
            submit(&connection, session.initialize_total(total), &payer).await?;
            submit(&connection, session.set_release_time(release_millis), &payer).await?;
            submit(&connection, session.buy_token(sol, tokens), &payer).await?;
        },
    }

    report(&connection, &session).await
}

/// Read-only commands never pay fees, so they skip payer funding.
fn submits_transactions(command: &Commands) -> bool {
    !matches!(command, Commands::Addresses | Commands::Show)
}

/// The deployed program expects an amount after the claim opcode, so the
/// bare form is only sent on request.
fn claim_call<'a>(
    session: &'a AmoebitSession,
    token_accounts: &ClaimAccounts,
    amount: u64,
    bare: bool,
) -> SeededCall<'a> {
    if bare {
        session.claim(token_accounts)
    } else {
        session.claim_amount(token_accounts, amount)
    }
}

fn resolve_program_id(cli: &Cli) -> Result<Pubkey> {
    if let Some(program_id) = cli.program_id {
        return Ok(program_id);
    }
    match &cli.program_keypair {
        Some(path) => {
            let keypair = load_keypair(path).with_context(|| {
                format!("Failed to read program keypair {}", path.display())
            })?;
            Ok(keypair.pubkey())
        },
        None => bail!("Program id required: pass --program-id or --program-keypair"),
    }
}

async fn submit(connection: &RpcConnection, call: SeededCall<'_>, payer: &Keypair) -> Result<()> {
    let signature = call
        .send(connection, payer)
        .await
        .context("Transaction failed")?;
    info!(%signature, "Submitted");
    Ok(())
}

fn print_addresses(session: &AmoebitSession) {
    println!("program:          {}", session.program_id());
    println!("payer:            {}", session.payer());
    println!("treasury:         {}", session.treasury());
    println!("minter authority: {}", session.minter_authority());
    for account in session.seeded_accounts() {
        println!(
            "{:<17} {} (seed {:?}, {} bytes)",
            format!("{}:", label(account.purpose)),
            account.address,
            account.seed,
            account.space()
        );
    }
}

fn label(purpose: SeedPurpose) -> &'static str {
    match purpose {
        SeedPurpose::UserIndex => "user index",
        SeedPurpose::TotalSupply => "total supply",
        SeedPurpose::TimeRelease => "time release",
    }
}

/// Log the decoded contents of every seeded account that exists.
async fn report(connection: &RpcConnection, session: &AmoebitSession) -> Result<()> {
    for account in session.seeded_accounts() {
        match session.read_account(connection, &account.address).await {
            Ok(record) => {
                for (field, value) in record.fields() {
                    info!(
                        account = label(account.purpose),
                        address = %account.address,
                        field,
                        value = %value,
                        "{}",
                        record.kind()
                    );
                }
            },
            Err(AmoebitSdkError::AccountNotFound(address)) => {
                info!(account = label(account.purpose), %address, "Not created yet");
            },
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn session() -> AmoebitSession {
        AmoebitSession::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            &SeedSet::default(),
        )
        .unwrap()
    }

    fn token_accounts() -> ClaimAccounts {
        ClaimAccounts {
            source_token_account: Pubkey::new_unique(),
            destination_token_account: Pubkey::new_unique(),
            mint_authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_default_claim_sends_zero_amount() {
        let accounts = token_accounts();
        let source = accounts.source_token_account.to_string();
        let destination = accounts.destination_token_account.to_string();
        let mint_authority = accounts.mint_authority.to_string();
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
        let Commands::Claim { amount, bare, .. } = cli.command else {
            panic!("expected claim");
        };

        let session = session();
        let call = claim_call(&session, &accounts, amount, bare);
        assert_eq!(call.instruction().data, vec![3, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bare_claim_is_opcode_only() {
        let session = session();
        let call = claim_call(&session, &token_accounts(), 0, true);
        assert_eq!(call.instruction().data, vec![3]);

        let call = claim_call(&session, &token_accounts(), 42, false);
        assert_eq!(call.instruction().data[1..], 42u64.to_le_bytes());
    }

    #[test]
    fn test_read_only_commands_skip_funding() {
        assert!(!submits_transactions(&Commands::Show));
        assert!(!submits_transactions(&Commands::Addresses));
        assert!(submits_transactions(&Commands::SetReleaseTime { millis: 1 }));
        assert!(submits_transactions(&Commands::Test {
            opcode: 9,
            args: vec![],
        }));
    }
}
