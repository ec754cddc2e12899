//! Portal CLI
//!
//! Drives the signup and login form controllers from the command line,
//! persisting the session to a JSON file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::ArgMatches;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portal::{
    ClientConfig, FileStorage, History, HttpAuthApi, LoginForm, Notice, Notifier, Session,
    SessionStorage, SignupForm, SubmitOutcome,
};

/// Prints notices for the user; errors go to stderr
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(text) => println!("{text}"),
            Notice::Error(text) => eprintln!("{text}"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "portal=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = portal::cli::new().get_matches();

    let config = ClientConfig::new(
        matches
            .get_one::<String>("server-url")
            .cloned()
            .context("missing --server-url")?,
    )
    .with_success_notice_delay(Duration::from_millis(
        matches.get_one::<u64>("notice-delay-ms").copied().unwrap_or(2000),
    ));

    let storage = Arc::new(FileStorage::new(
        matches
            .get_one::<String>("storage")
            .map(PathBuf::from)
            .context("missing --storage")?,
    ));

    let outcome = match matches.subcommand() {
        Some(("signup", sub)) => signup(&config, sub).await?,
        Some(("login", sub)) => login(&config, storage, sub).await?,
        Some(("session", sub)) => return session(storage.as_ref(), sub).await,
        _ => bail!("unknown command"),
    };

    if outcome.is_success() {
        Ok(())
    } else {
        std::process::exit(1)
    }
}

fn arg(matches: &ArgMatches, name: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing --{name}"))
}

async fn signup(config: &ClientConfig, matches: &ArgMatches) -> anyhow::Result<SubmitOutcome> {
    let api = Arc::new(HttpAuthApi::new(config)?);
    let history = Arc::new(History::new());
    let form = SignupForm::new(api, Arc::new(ConsoleNotifier), history.clone());

    let password = arg(matches, "password")?;
    form.set_username(arg(matches, "username")?);
    form.set_email(arg(matches, "email")?);
    form.set_confirm_password(
        matches
            .get_one::<String>("confirm-password")
            .cloned()
            .unwrap_or_else(|| password.clone()),
    );
    form.set_password(password);

    let outcome = form.submit().await;
    if let Some(path) = history.current() {
        println!("Next: {path}");
    }
    Ok(outcome)
}

async fn login(
    config: &ClientConfig,
    storage: Arc<FileStorage>,
    matches: &ArgMatches,
) -> anyhow::Result<SubmitOutcome> {
    let api = Arc::new(HttpAuthApi::new(config)?);
    let history = Arc::new(History::new());
    let form = LoginForm::new(api, storage, Arc::new(ConsoleNotifier), history.clone())
        .with_success_notice_delay(config.success_notice_delay);

    form.set_email(arg(matches, "email")?);
    form.set_password(arg(matches, "password")?);

    let outcome = form.submit().await;
    form.settle().await;

    if let Some(path) = history.current() {
        println!("Next: {path}");
    }
    Ok(outcome)
}

async fn session(storage: &FileStorage, matches: &ArgMatches) -> anyhow::Result<()> {
    if matches.get_flag("clear") {
        storage.clear().await?;
        println!("Session cleared");
        return Ok(());
    }

    match Session::load(storage).await? {
        Some(session) => println!("Logged in as {} ({})", session.role, storage.path().display()),
        None => println!("No session stored"),
    }
    Ok(())
}
