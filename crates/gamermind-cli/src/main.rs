use std::borrow::Cow::{self, Borrowed, Owned};
use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::{Color, Colorize};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamermind_application::{AuthUseCase, ChatRoomUseCase, ReportService};
use gamermind_core::chat::{ChatColor, ChatMessage, MessageRole, RoomState};
use gamermind_core::report::ReportReason;
use gamermind_infrastructure::{
    ConfigService, FileSessionStore, GamerMindPaths, MemoryCredentialDirectory,
};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: [
                "/login", "/register", "/logout", "/join", "/leave", "/send", "/messages",
                "/report", "/who", "/help", "/quit",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[derive(Parser)]
#[command(name = "gamermind")]
#[command(about = "GamerMind - anonymous peer support chat for gamers", long_about = None)]
struct Cli {
    /// Profile directory override (defaults to ~/.gamermind)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Wired application services shared by the shell commands.
struct App {
    auth: Arc<AuthUseCase>,
    room: Arc<ChatRoomUseCase>,
    reports: Arc<ReportService>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gamermind=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn bootstrap(data_dir: Option<PathBuf>) -> Result<App> {
    let paths = GamerMindPaths::resolve(data_dir)?;
    paths.ensure_directories()?;
    tracing::info!(
        "[Bootstrap] Using profile directory: {}",
        paths.root().display()
    );

    let config = ConfigService::new(&paths).load_or_create()?;
    let directory = Arc::new(MemoryCredentialDirectory::seeded());
    let store = Arc::new(FileSessionStore::new(&paths));

    let auth = Arc::new(AuthUseCase::new(directory, store, &config));
    let room = Arc::new(ChatRoomUseCase::new(auth.clone(), &config));
    let reports = Arc::new(ReportService::new(&config));
    tracing::info!("[Bootstrap] Services wired");

    Ok(App {
        auth,
        room,
        reports,
    })
}

/// Maps a feed palette color onto a terminal color.
fn term_color(color: ChatColor) -> Color {
    match color {
        ChatColor::Cyan => Color::Cyan,
        ChatColor::Purple => Color::Magenta,
        ChatColor::Pink => Color::BrightMagenta,
        ChatColor::Green => Color::Green,
        ChatColor::Yellow => Color::Yellow,
        ChatColor::Orange => Color::BrightRed,
        ChatColor::Blue => Color::Blue,
        ChatColor::Red => Color::Red,
        ChatColor::Gray => Color::BrightBlack,
    }
}

fn render_message(message: &ChatMessage) {
    let when = message.timestamp.with_timezone(&Local).format("%H:%M");
    let prefix = format!("[{}]", when).bright_black();
    let author = message.author.color(term_color(message.color)).bold();

    match message.role {
        MessageRole::System => {
            let body = message.body.color(term_color(message.color)).italic();
            println!("{} {} {}", prefix, author, body);
        }
        MessageRole::Bot => {
            println!(
                "{} {} {} {}",
                prefix,
                author,
                "[bot]".bright_black(),
                message.body
            );
        }
        MessageRole::Human => {
            println!("{} {}: {}", prefix, author, message.body);
        }
    }
}

/// Prints feed entries that arrived since the last render.
async fn drain_new_messages(app: &App, last_seen: &mut usize) {
    if !app.room.state().await.is_joined() {
        return;
    }
    let messages = app.room.messages().await;
    for message in &messages[*last_seen..] {
        render_message(message);
    }
    *last_seen = messages.len();
}

/// Awaits a pending auth or report operation, turning Ctrl-C into a
/// cancellation of that operation.
async fn await_cancellable<T>(
    cancel: &CancellationToken,
    operation: impl Future<Output = gamermind_core::Result<T>>,
) -> gamermind_core::Result<T> {
    tokio::pin!(operation);
    tokio::select! {
        result = &mut operation => result,
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
            operation.await
        }
    }
}

fn show_help() {
    println!("{}", "Commands:".bold());
    println!("  /login <email> <password>       Sign in (demo: demo@gamermind.com / password123)");
    println!("  /register <name> <email> <pw>   Create an account and sign in");
    println!("  /logout                         Sign out");
    println!("  /join <nickname>                Enter the anonymous chat");
    println!("  /leave                          Leave the chat");
    println!("  /send <text>                    Send a message (bare text works too)");
    println!("  /messages                       Show the numbered message history");
    println!("  /report <n> <reason> [detail]   Report message n from /messages");
    println!("  /who                            Show session and room status");
    println!("  /quit                           Exit");
    println!();
    println!("{}", "Report reasons:".bold());
    for reason in ReportReason::iter() {
        println!("  {:<15} {}", reason.to_string(), reason.label());
    }
}

async fn handle_login(app: &App, args: &[&str]) {
    let [email, password] = args else {
        println!("{}", "Usage: /login <email> <password>".yellow());
        return;
    };

    let cancel = CancellationToken::new();
    let result = await_cancellable(&cancel, app.auth.login(email, password, &cancel)).await;
    match result {
        Ok(user) => {
            println!(
                "{}",
                format!("Signed in as {}. Use /join <nickname> to enter the chat.", user.username)
                    .bright_green()
            );
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_register(app: &App, args: &[&str]) {
    let [username, email, password] = args else {
        println!("{}", "Usage: /register <name> <email> <password>".yellow());
        return;
    };

    let cancel = CancellationToken::new();
    let result = await_cancellable(
        &cancel,
        app.auth.register(username, email, password, &cancel),
    )
    .await;
    match result {
        Ok(user) => {
            println!(
                "{}",
                format!("Welcome, {}! Use /join <nickname> to enter the chat.", user.username)
                    .bright_green()
            );
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_logout(app: &App) {
    app.room.leave().await;
    match app.auth.logout().await {
        Ok(()) => println!("{}", "Signed out.".bright_green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_join(app: &App, args: &[&str], last_seen: &mut usize) {
    let [nickname] = args else {
        println!("{}", "Usage: /join <nickname>".yellow());
        return;
    };

    match app.room.join(nickname).await {
        Ok(state) => {
            if let RoomState::Joined { nickname, .. } = &state {
                println!(
                    "{}",
                    format!(
                        "You joined as {} ({} gamers online).",
                        nickname,
                        app.room.online_count()
                    )
                    .bright_green()
                );
            }
            println!();
            let messages = app.room.messages().await;
            for message in &messages {
                render_message(message);
            }
            *last_seen = messages.len();
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_send(app: &App, body: &str) {
    match app.room.send_message(body).await {
        Ok(Some(message)) => render_message(&message),
        Ok(None) => {}
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_messages(app: &App, last_seen: &mut usize) {
    let messages = app.room.messages().await;
    if messages.is_empty() {
        println!("{}", "No messages yet.".bright_black());
        return;
    }
    for (i, message) in messages.iter().enumerate() {
        print!("{} ", format!("{:>3}.", i + 1).bright_black());
        render_message(message);
    }
    *last_seen = messages.len();
}

async fn handle_report(app: &App, args: &[&str]) {
    let [index, reason, detail @ ..] = args else {
        println!(
            "{}",
            "Usage: /report <n> <reason> [detail] (see /help for reasons)".yellow()
        );
        return;
    };

    let Ok(index) = index.parse::<usize>() else {
        println!("{}", "The message number must come from /messages.".yellow());
        return;
    };
    let Ok(reason) = ReportReason::from_str(reason) else {
        println!(
            "{}",
            "Unknown reason. See /help for the list of report reasons.".yellow()
        );
        return;
    };

    let messages = app.room.messages().await;
    let Some(message) = index.checked_sub(1).and_then(|i| messages.get(i)) else {
        println!("{}", "No message with that number.".yellow());
        return;
    };

    let detail = if detail.is_empty() {
        None
    } else {
        Some(detail.join(" "))
    };

    let cancel = CancellationToken::new();
    let result = await_cancellable(
        &cancel,
        app.reports
            .submit(&message.id, &message.author, reason, detail, &cancel),
    )
    .await;
    match result {
        Ok(_) => {
            println!("{}", "Report Submitted".bright_green().bold());
            println!(
                "{}",
                "Thank you for helping keep our community safe. Our moderation team will review this report promptly."
                    .green()
            );
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

async fn handle_who(app: &App) {
    match app.room.state().await {
        RoomState::Unauthenticated => {
            println!(
                "{}",
                "Signed out. Use /login or /register to get started.".bright_black()
            );
        }
        RoomState::Unjoined => {
            if let Some(user) = app.auth.current_user().await {
                println!(
                    "Signed in as {} <{}>. Not in the chat yet - use /join <nickname>.",
                    user.username.bold(),
                    user.email
                );
            }
        }
        RoomState::Joined { nickname, color } => {
            println!(
                "In the chat as {} ({} gamers online).",
                nickname.color(term_color(color)).bold(),
                app.room.online_count()
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = bootstrap(cli.data_dir)?;

    println!("{}", "=== GamerMind ===".bright_magenta().bold());
    println!(
        "{}",
        "Anonymous peer support chat for gamers. Type '/help' for commands.".bright_black()
    );
    println!();

    match app.auth.restore_session().await {
        Ok(Some(user)) => {
            println!(
                "{}",
                format!("Welcome back, {}!", user.username).bright_green()
            );
        }
        Ok(None) => {
            println!(
                "{}",
                "Not signed in. Use /login or /register to get started.".bright_black()
            );
        }
        Err(e) => eprintln!("{}", format!("Session restore failed: {}", e).red()),
    }
    println!();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    // Feed entries rendered so far; the simulator keeps appending while
    // the prompt is idle, so new entries are drained after each command.
    let mut last_seen = 0usize;

    loop {
        drain_new_messages(&app, &mut last_seen).await;

        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if !trimmed.starts_with('/') {
                    handle_send(&app, trimmed).await;
                    continue;
                }

                let (command, rest) = match trimmed.split_once(char::is_whitespace) {
                    Some((command, rest)) => (command, rest.trim()),
                    None => (trimmed, ""),
                };
                let args: Vec<&str> = rest.split_whitespace().collect();

                match command {
                    "/help" => show_help(),
                    "/login" => handle_login(&app, &args).await,
                    "/register" => handle_register(&app, &args).await,
                    "/logout" => handle_logout(&app).await,
                    "/join" => handle_join(&app, &args, &mut last_seen).await,
                    "/leave" => {
                        app.room.leave().await;
                        println!("{}", "You left the chat.".bright_green());
                    }
                    "/send" => handle_send(&app, rest).await,
                    "/messages" => handle_messages(&app, &mut last_seen).await,
                    "/report" => handle_report(&app, &args).await,
                    "/who" => handle_who(&app).await,
                    "/quit" | "/exit" => {
                        app.room.leave().await;
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    _ => println!("{}", "Unknown command. Type /help.".bright_black()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                app.room.leave().await;
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
