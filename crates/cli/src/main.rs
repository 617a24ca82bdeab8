use clap::Parser;
use std::net::Ipv4Addr;
use std::process::ExitCode;
use tracing::{debug, error};
use wirelookup_domain::CliOverrides;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "wirelookup")]
#[command(version)]
#[command(about = "Resolve a host name's A record by speaking DNS over UDP directly")]
struct Cli {
    /// Host name to look up, e.g. www.example.com
    host_name: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server IPv4 address
    #[arg(short = 's', long)]
    server: Option<Ipv4Addr>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Seconds to wait for the reply
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server_address: cli.server,
        port: cli.port,
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting wirelookup v{}", env!("CARGO_PKG_VERSION"));

    let services = di::LookupServices::new(&config);

    let result = match services.lookup_host.execute(&cli.host_name).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, domain = %cli.host_name, "Lookup aborted");
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match output::render(&result) {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
