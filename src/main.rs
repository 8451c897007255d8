use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use shortlink::config::Config;
use shortlink::domain::ShortLinkProvider;
use shortlink::infrastructure::{HttpTransport, SyntacticUrlChecker};
use shortlink::{BitlyClient, GoogleClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shortlink", about = "Shorten and expand URLs via Bitly or Google")]
struct Cli {
    /// Provider to talk to.
    #[arg(long, value_enum, default_value = "google")]
    provider: Provider,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Provider {
    Bitly,
    Google,
}

#[derive(Subcommand)]
enum Command {
    /// Shorten a long URL.
    Shorten {
        url: String,
        /// Short domain to use (Bitly only, e.g. bit.ly or j.mp).
        #[arg(long)]
        domain: Option<String>,
    },
    /// Expand a shortened URL.
    Expand { url: String },
    /// Fetch full analytics for a shortened URL (Google only).
    Stats { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();

    let transport = Arc::new(HttpTransport::with_timeout(Duration::from_secs(
        config.request_timeout_secs,
    ))?);
    let url_checker = Arc::new(SyntacticUrlChecker);

    match cli.provider {
        Provider::Bitly => {
            let (username, password) = config.bitly_credentials()?;
            let client = BitlyClient::connect(transport, url_checker, username, password).await?;

            match cli.command {
                Command::Shorten { url, domain } => {
                    let short = match domain {
                        Some(domain) => client.shorten_with_domain(&url, &domain).await?,
                        None => client.shorten(&url).await?,
                    };
                    println!("{short}");
                }
                Command::Expand { url } => println!("{}", client.expand(&url).await?),
                Command::Stats { .. } => {
                    anyhow::bail!("stats is only available with --provider google")
                }
            }
        }
        Provider::Google => {
            let client = GoogleClient::new(transport, url_checker, config.google_api_key.clone());

            match cli.command {
                Command::Shorten { url, domain } => {
                    if domain.is_some() {
                        anyhow::bail!("--domain is only available with --provider bitly");
                    }
                    println!("{}", client.shorten(&url).await?);
                }
                Command::Expand { url } => println!("{}", client.expand(&url).await?),
                Command::Stats { url } => {
                    let stats = client.stats(&url).await?;
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
            }
        }
    }

    Ok(())
}
