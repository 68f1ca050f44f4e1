//! `govschemes` binary: answer questions about Indian government welfare schemes.
//!
//! Subcommands: `serve` (HTTP API), `ask` (one question, remote by default), `check`
//! (smoke test of a running server).

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use cli::{AskBackend, LocalBackend, RemoteBackend};
use govschemes::{ChatResponse, ResponderSettings};

#[derive(Parser, Debug)]
#[command(name = "govschemes")]
#[command(about = "GovSchemes: Gemini-backed answers about Indian government welfare schemes")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (GET /, GET /test, POST /chat, GET /chat-interface)
    Serve(ServeArgs),
    /// Ask one question and print the answer
    Ask(AskArgs),
    /// Smoke-test a running server: GET /test, then POST /chat
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Listen address (default: SERVE_ADDR or 127.0.0.1:8000)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(Args, Debug)]
struct AskArgs {
    /// Answer in-process instead of calling a server (needs GOOGLE_API_KEY)
    #[arg(long)]
    local: bool,

    /// Server URL (default: GOVSCHEMES_URL or http://127.0.0.1:8000)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Print {"response": ...} instead of plain text
    #[arg(long)]
    json: bool,

    /// The question
    #[arg(required = true, trailing_var_arg = true)]
    message: Vec<String>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Server URL (default: GOVSCHEMES_URL or http://127.0.0.1:8000)
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

fn server_url(flag: Option<&str>) -> String {
    cli::resolve(flag, std::env::var(cli::URL_ENV).ok(), cli::DEFAULT_URL)
}

async fn serve(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = cli::resolve(
        args.addr.as_deref(),
        std::env::var(cli::ADDR_ENV).ok(),
        serve::DEFAULT_ADDR,
    );
    let responder = ResponderSettings::from_env()?.build_responder()?;
    serve::run_serve(Some(&addr), Arc::new(responder)).await
}

async fn ask(args: &AskArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let message = args.message.join(" ");
    let backend: Box<dyn AskBackend> = if args.local {
        Box::new(LocalBackend::from_env()?)
    } else {
        Box::new(RemoteBackend::new(server_url(args.url.as_deref()))?)
    };
    let response = backend.ask(&message).await?;
    if args.json {
        println!("{}", serde_json::to_string(&ChatResponse { response })?);
    } else {
        println!("{}", response);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("govschemes", None) {
        eprintln!("govschemes: config not loaded: {}", e);
    }
    let _log_guard = config::logging::init_tracing("govschemes")?;
    let cli = Cli::parse();

    let result = match &cli.cmd {
        Command::Serve(sa) => serve(sa).await,
        Command::Ask(aa) => ask(aa).await,
        Command::Check(ca) => {
            let remote = RemoteBackend::new(server_url(ca.url.as_deref()))?;
            cli::check(&remote, &mut std::io::stdout())
                .await
                .map_err(Into::into)
        }
    };
    if let Err(e) = result {
        eprintln!("govschemes: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
