//! Headless viewer and controller for a Crew round hosted by the game server.
//!
//! `watch` renders every pushed snapshot; `send` issues one mutation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use crew_viewer::config::{parse_seat, ViewerConfig};
use crew_viewer::domain::{Card, Seat, TaskId, TaskKindTag, Viewpoint};
use crew_viewer::protocol::{decode_app_state, MutationRequest};
use crew_viewer::telemetry::init_tracing;
use crew_viewer::{AppError, HttpMutationSink, MutationSink, ViewerSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "crew-viewer")]
#[command(about = "Headless viewer and controller for a Crew round")]
struct Cli {
    /// Game server base URL (overrides CREW_SERVER_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Seat to view as (overrides CREW_VIEW_AS)
    #[arg(long, global = true, value_parser = seat_arg)]
    view_as: Option<Seat>,

    /// Emit logs as JSON lines (overrides CREW_LOG_JSON)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render each `appstate` message read as one JSON object per line
    Watch {
        /// Read messages from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pretty-print the rendered view
        #[arg(long)]
        pretty: bool,
    },
    /// Send one mutation to the game server
    Send {
        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,

        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand)]
enum Action {
    /// Replace a seat's hand, e.g. `hand 0 B3 G7 R4`
    Hand { seat: Seat, cards: Vec<Card> },
    /// Set or clear (no card) the card of one turn
    TrickCard {
        trick: usize,
        turn: usize,
        card: Option<Card>,
    },
    /// Add an objective with the next free order
    AddObjective {
        kind: KindArg,
        /// Snapshot (bare app-state JSON) to number against; empty round if omitted
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    RemoveObjective { id: String },
    ObjectiveCard { id: String, card: Option<Card> },
    ObjectivePlayer { id: String, seat: Option<Seat> },
    Name { seat: Seat, name: String },
    Reset,
    Solve,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Anytime,
    Absolute,
    Relative,
    Last,
}

impl From<KindArg> for TaskKindTag {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Anytime => TaskKindTag::Anytime,
            KindArg::Absolute => TaskKindTag::Absolute,
            KindArg::Relative => TaskKindTag::Relative,
            KindArg::Last => TaskKindTag::Last,
        }
    }
}

fn seat_arg(raw: &str) -> Result<Seat, String> {
    parse_seat("--view-as", raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ViewerConfig::from_env() {
        Ok(config) => apply_overrides(config, &cli),
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_json);

    let result = match cli.command {
        Command::Watch { input, pretty } => watch(&config, input, pretty).await,
        Command::Send { dry_run, action } => send(&config, action, dry_run).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn apply_overrides(mut config: ViewerConfig, cli: &Cli) -> ViewerConfig {
    if let Some(server) = &cli.server {
        config.server_url = server.trim_end_matches('/').to_string();
    }
    if cli.view_as.is_some() {
        config.view_as = cli.view_as;
    }
    config.log_json |= cli.log_json;
    config
}

async fn watch(config: &ViewerConfig, input: Option<PathBuf>, pretty: bool) -> Result<(), AppError> {
    let session = ViewerSession::new(config.viewpoint());
    info!(viewing_as = ?config.view_as, "watching snapshots");

    match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path).await?;
            pump(&session, BufReader::new(file), pretty).await
        }
        None => pump(&session, BufReader::new(tokio::io::stdin()), pretty).await,
    }
}

async fn pump<R>(session: &ViewerSession, reader: R, pretty: bool) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        // Malformed lines are already logged by the session; keep going.
        if let Ok(Some(_)) = session.apply_message(&line) {
            if let Some(view) = session.render() {
                let out = if pretty {
                    serde_json::to_string_pretty(&view)?
                } else {
                    serde_json::to_string(&view)?
                };
                println!("{out}");
            }
        }
    }
    info!(snapshots = session.applied(), "input closed");
    Ok(())
}

async fn send(config: &ViewerConfig, action: Action, dry_run: bool) -> Result<(), AppError> {
    let Some(request) = build_request(action, config.viewpoint()).await? else {
        warn!("objective not added: a `last` objective already exists");
        return Ok(());
    };

    if dry_run {
        println!(
            "{} {} {}",
            request.method().as_str(),
            request.path(),
            request.body()
        );
        return Ok(());
    }

    let sink = HttpMutationSink::new(config.server_url.clone());
    sink.send(&request).await?;
    info!(path = %request.path(), "mutation sent");
    Ok(())
}

async fn build_request(
    action: Action,
    viewpoint: Viewpoint,
) -> Result<Option<MutationRequest>, AppError> {
    let request = match action {
        Action::Hand { seat, cards } => MutationRequest::SetHand { seat, cards },
        Action::TrickCard { trick, turn, card } => {
            MutationRequest::SetTrickCard { trick, turn, card }
        }
        Action::AddObjective { kind, snapshot } => {
            let session = ViewerSession::new(viewpoint);
            if let Some(path) = snapshot {
                let json = tokio::fs::read_to_string(&path).await?;
                session.apply_snapshot(decode_app_state(&json)?);
            }
            return Ok(session.add_objective(kind.into()));
        }
        Action::RemoveObjective { id } => MutationRequest::RemoveObjective {
            id: TaskId::new(id),
        },
        Action::ObjectiveCard { id, card } => MutationRequest::SetObjectiveCard {
            id: TaskId::new(id),
            card,
        },
        Action::ObjectivePlayer { id, seat } => MutationRequest::SetObjectivePlayer {
            id: TaskId::new(id),
            seat,
        },
        Action::Name { seat, name } => MutationRequest::SetPlayerName { seat, name },
        Action::Reset => MutationRequest::ResetRound,
        Action::Solve => MutationRequest::RequestSolve,
    };
    Ok(Some(request))
}
