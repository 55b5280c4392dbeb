use anyhow::anyhow;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use stackmig_cli::{no_data_message, App, Config, GuideView};
use stackmig_core::{filter_guide, GuideSummary, MigrationGuide};

#[derive(Parser)]
#[command(name = "stackmig", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config to .stackmig/stackmig.toml
    Init,

    /// List known technologies and their current version
    Technologies,

    /// List versions of a technology, or the valid targets after --from
    Versions {
        #[arg(long)]
        tech: String,
        #[arg(long)]
        from: Option<String>,
    },

    /// Show the migration guide for a version pair ("latest" allowed as --to)
    Guide {
        #[arg(long)]
        tech: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Only keep items containing this text (case-insensitive)
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Load all data and report malformed entries
    Check,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuideOutput<'a> {
    technology: &'a str,
    from_version: &'a str,
    to_version: &'a str,
    summary: GuideSummary,
    guide: &'a MigrationGuide,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let root = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => {
            let path = Config::config_path(&root);
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Wrote {}", path.display());
            }
        }
        Command::Technologies => {
            let app = App::open(&root, &Config::load_or_default(&root)?)?;
            for e in app.query.catalog().technologies() {
                let current = app.query.catalog().latest(e.id.as_str()).unwrap_or("-");
                println!("{:<12} {:<12} current {}", e.id, e.name, current);
            }
        }
        Command::Versions { tech, from } => {
            let app = App::open(&root, &Config::load_or_default(&root)?)?;
            let versions = match from {
                Some(from) => app.query.available(&tech, &from),
                None => app
                    .query
                    .catalog()
                    .versions(&tech)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            };
            if versions.is_empty() {
                println!("No versions known for {}", tech.trim());
            }
            for v in versions {
                println!("{v}");
            }
        }
        Command::Guide {
            tech,
            from,
            to,
            query,
            json,
        } => {
            let app = App::open(&root, &Config::load_or_default(&root)?)?;
            let name = app.display_name(&tech);
            let resolved = app.query.resolve_target(&tech, &to).unwrap_or_else(|| to.clone());

            let Some(guide) = app.query.get_migration_guide(&tech, &from, &to) else {
                println!("{}", no_data_message(&name, &from, &resolved));
                return Ok(());
            };
            let shown = filter_guide(&guide, &query);

            if json {
                let out = GuideOutput {
                    technology: &name,
                    from_version: &from,
                    to_version: &resolved,
                    summary: GuideSummary::of(&shown),
                    guide: &shown,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!(
                    "{}",
                    GuideView {
                        technology: &name,
                        from_version: &from,
                        to_version: &resolved,
                        guide: &shown,
                    }
                );
            }
        }
        Command::Check => {
            let app = App::open(&root, &Config::load_or_default(&root)?)?;

            println!("Technologies: {}", app.repo.technologies().len());
            for t in app.repo.technologies() {
                for (from, to) in app.repo.pairs(t) {
                    println!("- {t} {from} -> {to}");
                }
            }
            println!("Guides: {}", app.repo.index().guide_count());
            println!("Digest: {}", app.digest);

            let malformed = app.repo.malformed();
            for r in malformed {
                println!(
                    "! {} {} -> {}: {}{}",
                    r.technology,
                    r.from_version.as_deref().unwrap_or("?"),
                    r.to_version.as_deref().unwrap_or("?"),
                    r.error,
                    r.source
                        .as_ref()
                        .map(|p| format!(" ({})", p.display()))
                        .unwrap_or_default()
                );
            }
            if !malformed.is_empty() {
                return Err(anyhow!("{} malformed migration entries", malformed.len()));
            }
            println!("OK");
        }
    }

    Ok(())
}
