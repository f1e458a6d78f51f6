// SPDX-License-Identifier: GPL-2.0-or-later

//! errlook: look up error codes and their descriptions.

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use errlook::locale;
use errlook::lookup;
use errlook::search::{self, Match};
use errlook::types::Domain;

/// Exit status for command-line misuse, mirroring EINVAL.
const EXIT_USAGE: u8 = libc::EINVAL as u8;

#[derive(Parser)]
#[command(name = "errlook")]
#[command(version, propagate_version = true, disable_version_flag = true)]
#[command(about = "Look up error codes and their descriptions")]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version, global = true)]
    _version: Option<bool>,

    #[command(subcommand)]
    domain: DomainCommand,
}

#[derive(Subcommand)]
enum DomainCommand {
    /// Configuration-library (libeconf) error codes
    Econf(QueryArgs),
    /// System call error numbers (errno)
    Errno(QueryArgs),
    /// Authentication-module (PAM) error codes
    Pam(QueryArgs),
}

impl DomainCommand {
    fn split(self) -> (Domain, QueryArgs) {
        match self {
            DomainCommand::Econf(args) => (Domain::Econf, args),
            DomainCommand::Errno(args) => (Domain::Errno, args),
            DomainCommand::Pam(args) => (Domain::Pam, args),
        }
    }
}

#[derive(Args)]
struct QueryArgs {
    /// List every error name, code and description
    #[arg(
        short = 'l',
        long,
        conflicts_with_all = ["search", "search_locales", "tokens"]
    )]
    list: bool,

    /// Print entries whose description contains every KEYWORD
    #[arg(
        short = 's',
        long,
        value_name = "KEYWORD",
        num_args = 1..,
        conflicts_with_all = ["search_locales", "tokens"]
    )]
    search: Vec<String>,

    /// Like --search, but try every installed locale
    #[arg(
        short = 'S',
        long,
        value_name = "KEYWORD",
        num_args = 1..,
        conflicts_with = "tokens"
    )]
    search_locales: Vec<String>,

    /// Render results as JSON instead of text lines
    #[arg(short = 'j', long)]
    json: bool,

    /// Error names or codes to look up
    #[arg(value_name = "NAME-OR-CODE")]
    tokens: Vec<String>,
}

/// One lookup token's outcome, for the JSON output mode.
#[derive(Serialize)]
struct TokenOutcome<'a> {
    token: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

fn main() -> ExitCode {
    locale::init_from_environment();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return finish_parse(err),
    };

    let (domain, args) = cli.domain.split();
    match run(domain, &args) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{} {err:#}", "ERROR:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn finish_parse(err: clap::Error) -> ExitCode {
    // clap routes help/version to stdout and diagnostics to stderr.
    if err.print().is_err() {
        return ExitCode::FAILURE;
    }
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_USAGE),
    }
}

fn run(domain: Domain, args: &QueryArgs) -> Result<ExitCode> {
    if args.list {
        let all: Vec<Match> = domain
            .entries()
            .iter()
            .map(|entry| Match {
                entry: *entry,
                description: domain.describe(entry.code),
                locale: None,
            })
            .collect();
        print_matches(&all, args.json)?;
    } else if !args.search.is_empty() {
        let found: Vec<Match> = search::search(domain, &args.search)?.collect();
        print_matches(&found, args.json)?;
    } else if !args.search_locales.is_empty() {
        let found = search::search_all_locales(domain, &args.search_locales)?;
        print_matches(&found, args.json)?;
    } else if !args.tokens.is_empty() {
        lookup_tokens(domain, &args.tokens, args.json)?;
    } else {
        eprintln!(
            "errlook {domain}: expected a name, a code, or one of --list/--search/--search-locales"
        );
        eprintln!("Try 'errlook {domain} --help' for more information.");
        return Ok(ExitCode::from(EXIT_USAGE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve each token independently; misses are per-token output, never a
/// failure.
fn lookup_tokens(domain: Domain, tokens: &[String], json: bool) -> Result<()> {
    if json {
        let outcomes: Vec<TokenOutcome> = tokens
            .iter()
            .map(|token| match lookup::find(domain, token) {
                Some(entry) => TokenOutcome {
                    token,
                    found: true,
                    name: Some(entry.name),
                    code: Some(entry.code),
                    description: Some(domain.describe(entry.code)),
                },
                None => TokenOutcome {
                    token,
                    found: false,
                    name: None,
                    code: None,
                    description: None,
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for token in tokens {
        match lookup::find(domain, token) {
            Some(entry) => {
                println!(
                    "{} - {} - {}",
                    entry.name,
                    entry.code,
                    domain.describe(entry.code)
                );
            }
            None => println!("Not found: {token}"),
        }
    }
    Ok(())
}

fn print_matches(found: &[Match], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(found)?);
        return Ok(());
    }
    for m in found {
        println!("{} - {} - {}", m.entry.name, m.entry.code, m.description);
    }
    Ok(())
}
