//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// Terminal console for provisioning a hosted site's subdomain and custom domain
#[derive(Parser, Debug)]
#[command(name = "site-console")]
#[command(version)]
#[command(long_about = r#"
Site Console lets you pick a subdomain on the hosting platform, validate it,
publish or unpublish the site, point a custom domain at it, and reset the
whole configuration.

EXAMPLES:
  # Talk to the provisioning gateway
  site-console --backend-url https://console.example.com/api

  # Try the console without a backend
  site-console --offline

  # Save the effective configuration and exit
  site-console --backend-url https://console.example.com/api --write-config

ENVIRONMENT VARIABLES:
  SITE_CONSOLE_BACKEND_URL   Provisioning gateway base URL
  RUST_LOG                   Log filter (default: info)
"#)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Provisioning gateway base URL, overrides the config file
    #[arg(long, env = "SITE_CONSOLE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Use an in-memory backend instead of the gateway (wins over --backend-url)
    #[arg(long)]
    pub offline: bool,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}
