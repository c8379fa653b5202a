use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use legilimens_core::catalog::{Catalog, FilterSelection};
use legilimens_core::core_api::Engine;
use legilimens_core::query::QueryOptions;
use legilimens_core::saves::{self, CharacterSaves};
use legilimens_render::{
    JsonStyle, TextRenderOptions, render_json, render_save_list, render_text_with_options,
    warning_lines,
};
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Finds the collectibles still missing from a Hogwarts Legacy save.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to a .sav file, or a number printed by --list-saves.
    #[arg(value_name = "SAVE")]
    save: Option<String>,
    /// Collectible filters (e.g. `revelio moths chests`), or `type` to group
    /// by collectible type. Option numbers are accepted too.
    #[arg(value_name = "FILTER")]
    filters: Vec<String>,
    #[arg(long)]
    json: bool,
    /// List discovered saves and exit.
    #[arg(long = "list-saves")]
    list_saves: bool,
    /// Save folder to search instead of the game's default location.
    #[arg(long = "saves-dir", value_name = "DIR")]
    saves_dir: Option<PathBuf>,
    /// Directory for the temporary database file.
    #[arg(long = "temp-dir", value_name = "DIR")]
    temp_dir: Option<PathBuf>,
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_saves {
        let characters = discover(cli.saves_dir.as_deref());
        print!("{}", render_save_list(&characters));
        return;
    }

    let Some(save_arg) = cli.save.as_deref() else {
        eprintln!("a save file is required (use --list-saves to find one)");
        process::exit(2);
    };

    let selection = FilterSelection::from_tokens(split_filter_tokens(&cli.filters))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(2);
        });

    let path = resolve_save_path(save_arg, cli.saves_dir.as_deref());
    log::info!("reading {}", path.display());

    let session = Engine::new().open_path(&path).unwrap_or_else(|e| {
        eprintln!("Error reading save file: {}", path.display());
        eprintln!("  {}", e.message);
        process::exit(1);
    });

    let options = QueryOptions {
        temp_dir: cli.temp_dir.clone(),
    };
    let report = session.run(&selection, &options).unwrap_or_else(|e| {
        eprintln!("Error reading the save database: {}", path.display());
        eprintln!("  {}", e.message);
        process::exit(1);
    });
    log::info!("{} collectibles missing", report.missing_count);

    let catalog = Catalog::builtin();
    if cli.json {
        let json = render_json(&report, catalog, JsonStyle::CanonicalV1);
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    let text = render_text_with_options(
        &report,
        catalog,
        TextRenderOptions {
            show_character: true,
        },
    );
    print!("{text}");

    let warnings = warning_lines(&report);
    if !warnings.is_empty() {
        println!();
    }
    for warning in warnings {
        println!(
            "{} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            warning.if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Filters may be passed as separate arguments or comma separated.
fn split_filter_tokens(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split([',', ' ']))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drag-and-drop on Windows wraps paths in double quotes.
fn strip_quotes(arg: &str) -> &str {
    let trimmed = arg.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}

fn resolve_save_path(arg: &str, saves_dir: Option<&Path>) -> PathBuf {
    let arg = strip_quotes(arg);
    let path = PathBuf::from(arg);
    if path.exists() {
        return path;
    }

    match arg.parse::<usize>() {
        Ok(choice) => pick_listed_save(choice, saves_dir),
        Err(_) => path,
    }
}

/// Numbering matches `render_save_list`.
fn pick_listed_save(choice: usize, saves_dir: Option<&Path>) -> PathBuf {
    let characters = discover(saves_dir);
    let total: usize = characters.iter().map(|c| c.saves.len()).sum();
    choice
        .checked_sub(1)
        .and_then(|index| {
            characters
                .iter()
                .flat_map(|c| &c.saves)
                .nth(index)
                .map(|save| save.path.clone())
        })
        .unwrap_or_else(|| {
            eprintln!("Invalid choice, must be between 1 and {total}, inclusive.");
            process::exit(2);
        })
}

fn discover(saves_dir: Option<&Path>) -> Vec<CharacterSaves> {
    let root = match saves_dir {
        Some(dir) => dir.to_path_buf(),
        None => saves::default_save_root().unwrap_or_else(|| {
            eprintln!("Unable to locate the Hogwarts Legacy save folder; pass --saves-dir");
            process::exit(1);
        }),
    };
    log::debug!("searching for saves under {}", root.display());

    saves::discover_saves(&root).unwrap_or_else(|e| {
        eprintln!("Error reading save folder {}: {e}", root.display());
        process::exit(1);
    })
}
