//! `portal` command definition

use clap::{Arg, ArgAction, Command};

use crate::config::DEFAULT_SERVER_URL;

pub const DEFAULT_STORAGE: &str = ".portal/session.json";

pub fn new() -> Command {
    Command::new("portal")
        .about("Healthcare portal sign up and login")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("server-url")
                .long("server-url")
                .help("Auth API base URL")
                .env("SERVER_URL")
                .default_value(DEFAULT_SERVER_URL)
                .global(true),
        )
        .arg(
            Arg::new("storage")
                .long("storage")
                .help("Session file")
                .env("PORTAL_STORAGE")
                .default_value(DEFAULT_STORAGE)
                .global(true),
        )
        .arg(
            Arg::new("notice-delay-ms")
                .long("notice-delay-ms")
                .help("Delay before the login success notice, in milliseconds")
                .env("PORTAL_NOTICE_DELAY_MS")
                .default_value("2000")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .subcommand(
            Command::new("signup")
                .about("Create an account")
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .help("Defaults to --password"),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and store the session")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("session")
                .about("Show or clear the stored session")
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Remove the stored session")
                        .action(ArgAction::SetTrue),
                ),
        )
}
