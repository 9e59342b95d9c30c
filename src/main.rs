use anyhow::{Context, Result};
use clap::Parser;
use jobbank::{
    DEFAULT_OUTPUT_DIR, DEFAULT_USER_AGENT, ExportOptions, JobBank, JobBankConfig, Language,
    ProfileOperations,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "jobbank", version)]
#[command(about = "Export a 104 job bank company profile as JSON, CSV, Markdown and DOCX")]
struct Args {
    /// Company id, the last path segment of https://www.104.com.tw/company/{id}.
    #[arg(default_value = "e6o7g3l")]
    company_id: String,

    /// Directory the export files are written to (created if missing).
    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Report language: zh-TW or en.
    #[arg(long, short, default_value_t = Language::TraditionalChinese)]
    language: Language,

    /// User-Agent header sent to the site.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("jobbank=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = JobBankConfig {
        user_agent: args.user_agent,
        timeout: Duration::from_secs(args.timeout),
        ..JobBankConfig::default()
    };
    let client = JobBank::with_config(config).context("failed to build HTTP client")?;

    let options = ExportOptions::new()
        .with_output_dir(args.output_dir)
        .with_language(args.language);

    let report = client
        .export_profile(&args.company_id, &options)
        .await
        .with_context(|| format!("failed to export company {}", args.company_id))?;

    let written = report
        .into_result()
        .with_context(|| format!("export of company {} is incomplete", args.company_id))?;

    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
