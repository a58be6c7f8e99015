//! WebHDFS Relay - HTTP front for WebHDFS file operations

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webhdfs_relay::{run_server_with_shutdown, RelayConfig};

#[derive(Parser, Debug)]
#[command(name = "webhdfs-relay")]
#[command(about = "Relays upload/delete/list requests to a WebHDFS gateway")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "RELAY_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "RELAY_PORT")]
    port: u16,

    /// WebHDFS base URL
    #[arg(long, default_value = "http://localhost:9870/webhdfs/v1", env = "WEBHDFS_URL")]
    webhdfs_url: String,

    /// HDFS user name sent with every request
    #[arg(long, default_value = "hadoop", env = "HDFS_USER")]
    hdfs_user: String,

    /// HDFS directory all relayed paths live under
    #[arg(long, default_value = "/01", env = "HDFS_UPLOAD_ROOT")]
    upload_root: String,

    /// Timeout for each WebHDFS call, in seconds
    #[arg(long, default_value = "30", env = "WEBHDFS_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Disable CORS headers
    #[arg(long, env = "RELAY_NO_CORS")]
    no_cors: bool,

    /// Enable debug logging
    #[arg(short, long, env = "RELAY_DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "webhdfs_relay={0},webhdfs_client={0},tower_http=debug",
                log_level
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WebHDFS relay on {}:{}", args.host, args.port);

    if args.no_cors {
        tracing::warn!("CORS is disabled");
    }

    let config = RelayConfig {
        host: args.host,
        port: args.port,
        webhdfs_url: args.webhdfs_url,
        hdfs_user: args.hdfs_user,
        upload_root: args.upload_root,
        request_timeout_secs: args.timeout_secs,
        cors_enabled: !args.no_cors,
        ..Default::default()
    };

    run_server_with_shutdown(config, async {
        tokio::signal::ctrl_c().await.ok();
    })
    .await
}
