// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsString, path::PathBuf};

use crate::{
    core::config::{self, EditorConfig},
    infra::{logger, t},
    select_locale,
};

pub mod commands;

use commands::edit::EditArgs;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let args: Vec<String> = args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

pub fn build_cli() -> Command {
    Command::new("editor-launch")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config").to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.verbose").to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("get-editor").about(t!("cmd.get_editor_about").to_string()),
        )
        .subcommand(
            Command::new("edit")
                .about(t!("cmd.edit_about").to_string())
                .arg(
                    Arg::new("path")
                        .help(t!("arg.path").to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("contents")
                        .long("contents")
                        .help(t!("arg.contents").to_string())
                        .value_name("CONTENTS")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help(t!("arg.suffix").to_string())
                        .value_name("SUFFIX")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("tty")
                        .long("tty")
                        .help(t!("arg.tty").to_string())
                        .action(ArgAction::SetTrue)
                        .conflicts_with("no-tty"),
                )
                .arg(
                    Arg::new("no-tty")
                        .long("no-tty")
                        .help(t!("arg.no_tty").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd.init_about").to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg.output").to_string())
                        .value_name("OUTPUT")
                        .default_value(config::DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg.force").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Extracts the `edit` subcommand arguments.
pub fn edit_args(matches: &ArgMatches) -> EditArgs {
    let use_tty = if matches.get_flag("tty") {
        Some(true)
    } else if matches.get_flag("no-tty") {
        Some(false)
    } else {
        None
    };
    EditArgs {
        path: matches.get_one::<PathBuf>("path").cloned(),
        contents: matches.get_one::<String>("contents").cloned(),
        suffix: matches.get_one::<String>("suffix").cloned(),
        use_tty,
    }
}

/// Loads the configuration and applies its language unless `--lang` was given.
fn load_config(matches: &ArgMatches, explicit_lang: bool) -> Result<EditorConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let config = config::load_config_or_default(path.map(PathBuf::as_path))?;
    if let Some(path) = path {
        tracing::debug!("{}", t!("config.loaded", path = path.display()));
    }
    if !explicit_lang {
        if let Some(lang) = &config.language {
            rust_i18n::set_locale(&select_locale(lang));
        }
    }
    Ok(config)
}

/// Runs the CLI with the process arguments.
pub async fn run() -> Result<()> {
    run_from(env::args_os().collect()).await
}

pub async fn run_from(args: Vec<OsString>) -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_lang = pre_parse_language(&args);
    match &explicit_lang {
        Some(lang) => rust_i18n::set_locale(&select_locale(lang)),
        None => crate::init(),
    }

    let matches = build_cli().get_matches_from(args);
    logger::init_cli_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("get-editor", _)) => {
            let config = load_config(&matches, explicit_lang.is_some())?;
            commands::get_editor::execute(&config)?;
        }
        Some(("edit", edit_matches)) => {
            let config = load_config(&matches, explicit_lang.is_some())?;
            commands::edit::execute(edit_args(edit_matches), &config).await?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
            commands::init::execute(&output, init_matches.get_flag("force"))?;
        }
        _ => {
            // subcommand_required: clap has already printed help and exited.
        }
    }
    Ok(())
}
