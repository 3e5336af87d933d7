use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use userop_message::config::{BatchConfig, ShapeConfig};
use userop_message::{encoding, host, ENTRY_POINTS, MAIN_FUNCTION};

#[derive(Parser, Debug)]
#[command(
    name = "userop-message",
    version,
    about = "Shape snake_case UserOperation params into a camelCase bundler message"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shape a single params object and print the message.
    Shape(ShapeArgs),

    /// Shape a JSON array or NDJSON stream of params objects; prints NDJSON.
    Batch(BatchArgs),

    /// List the registered entry point names.
    Entries,
}

#[derive(Args, Debug)]
struct EntryArgs {
    /// Entry point to invoke.
    #[arg(long, env = "USEROP_MESSAGE_ENTRY", default_value = MAIN_FUNCTION)]
    entry: String,
}

#[derive(Args, Debug)]
struct ShapeArgs {
    #[command(flatten)]
    entry: EntryArgs,

    /// Inline params JSON (takes precedence over --input).
    #[arg(long, env = "USEROP_MESSAGE_PARAMS")]
    params: Option<String>,

    /// Params JSON file. Use `-` (or omit) to read stdin.
    #[arg(long, env = "USEROP_MESSAGE_INPUT")]
    input: Option<PathBuf>,

    /// Pretty-print the output object.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[command(flatten)]
    entry: EntryArgs,

    /// Batch file (JSON array or NDJSON). Use `-` (or omit) to read stdin.
    #[arg(long, env = "USEROP_MESSAGE_INPUT")]
    input: Option<PathBuf>,

    /// Max concurrent invocations.
    #[arg(long, default_value_t = 10)]
    max_concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        // stdout carries only the shaped JSON
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Shape(args) => cmd_shape(args).await,
        Command::Batch(args) => cmd_batch(args).await,
        Command::Entries => {
            for name in ENTRY_POINTS {
                println!("{name}");
            }
            Ok(())
        }
    }
}

async fn cmd_shape(args: ShapeArgs) -> Result<()> {
    let cfg = ShapeConfig::from_cli(args.params, args.input, args.entry.entry, args.pretty)?;
    tracing::debug!(entry = %cfg.entry_name, source = %cfg.source, "shaping params");

    let params = cfg.source.load_params()?;
    let msg = (cfg.entry)(params)
        .await
        .with_context(|| format!("{} failed", cfg.entry_name))?;

    println!("{}", encoding::render(&msg, cfg.pretty)?);
    Ok(())
}

async fn cmd_batch(args: BatchArgs) -> Result<()> {
    let cfg = BatchConfig::from_cli(args.input, args.entry.entry, args.max_concurrency)?;

    let raw = cfg.source.read_to_string()?;
    let items = encoding::parse_batch(&raw)
        .with_context(|| format!("failed to parse batch from {}", cfg.source))?;
    tracing::info!(
        entry = %cfg.entry_name,
        source = %cfg.source,
        items = items.len(),
        max_concurrency = cfg.max_concurrency,
        "shaping batch"
    );

    let msgs = host::shape_batch(items, cfg.entry, cfg.max_concurrency).await?;

    print!("{}", encoding::render_ndjson(&msgs)?);
    tracing::debug!(shaped = msgs.len(), "batch done");
    Ok(())
}
