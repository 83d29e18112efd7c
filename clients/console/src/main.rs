use std::{
    io::{self, BufRead},
    process, thread,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use roster::gateway::{http::HttpGateway, options::GatewayOptions};

use crate::session::Session;

mod commands;
mod session;
mod tracers;

/// 📇 Roster console, a terminal admin for the person REST service
///
/// Lists, searches, adds, edits and deletes people. Type `help` once running.
/// The service address is fixed when the binary is built (`ROSTER_API_BASE_URL`).
#[derive(Parser, Debug)]
struct Cli {
    /// Initial search text, matched against full name and email
    #[clap(short, long)]
    search: Option<String>,

    /// Seconds before a request is given up on. Requests never time out by default
    #[clap(short, long)]
    timeout: Option<u64>,

    /// Print tracing spans (HTTP calls, filtering) to stderr
    #[clap(long)]
    trace: bool,
}

/// Reads stdin on its own thread, blocking reads do not belong on the runtime
fn spawn_input_reader() -> io::Result<flume::Receiver<String>> {
    let (sender, receiver) = flume::unbounded::<String>();

    thread::Builder::new()
        .name("console input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        })?;

    Ok(receiver)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Cli::parse();

    if args.trace {
        tracers::init_tracing_subscriber();
    }

    ctrlc::set_handler(move || {
        log::info!("Shutting down console");
        process::exit(0);
    })
    .context("Error setting Ctrl-C handler")?;

    let options = GatewayOptions::default().set_timeout(args.timeout.map(Duration::from_secs));

    let gateway = HttpGateway::new(options).context("Unable to build HTTP client")?;

    log::info!("Person service: {}", gateway.options().base_url);

    let input = spawn_input_reader().context("Unable to start input reader")?;

    let mut session = Session::new(gateway, tokio::io::stdout());

    session.start(args.search.as_deref()).await?;
    session.run(input).await?;

    Ok(())
}
