use admin_session::{utils::init_tracing, AuthConfig, SessionService};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "admin-session", about = "Issue and inspect admin session tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a fresh random secret for ADMIN_AUTH_SECRET
    Secret {
        /// Number of random bytes before encoding
        #[arg(long, default_value_t = 32)]
        bytes: usize,
    },
    /// Issue a token with the configured secret
    Issue {
        /// Lifetime in seconds; defaults to ADMIN_SESSION_TTL_SECS
        #[arg(long)]
        ttl: Option<u64>,
    },
    /// Verify a token with the configured secret
    Verify {
        /// The token to check
        token: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Secret { bytes } => {
            if bytes < 16 {
                bail!("refusing to generate a secret shorter than 16 bytes");
            }
            let random: Vec<u8> = (0..bytes).map(|_| rand::random::<u8>()).collect();
            let secret = Base64UrlSafeNoPadding::encode_to_string(&random)
                .map_err(|e| anyhow::anyhow!("failed to encode secret: {e:?}"))?;
            println!("{secret}");
        }
        Command::Issue { ttl } => {
            let config = AuthConfig::from_env()?;
            let ttl = ttl.unwrap_or(config.session_ttl_secs);
            if ttl == 0 {
                bail!("--ttl must be greater than zero");
            }
            let token = SessionService::from_config(&config).issue(ttl)?;
            info!(ttl, "issued admin session token");
            println!("{token}");
        }
        Command::Verify { token } => {
            let config = AuthConfig::from_env()?;
            match SessionService::from_config(&config).verify(Some(&token)) {
                Ok(claims) => {
                    println!(
                        "accepted: sub={} iat={} exp={}",
                        claims.subject, claims.issued_at, claims.expires_at
                    );
                }
                Err(rejection) => {
                    error!(reason = rejection.code(), "{rejection}");
                    println!("rejected: {}", rejection.code());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
