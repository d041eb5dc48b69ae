//! `ruralis` — command-line front end for the calculator engine.
//!
//! Wires a static session, a JSON-file report store, and the engine into
//! the same page composition the web product uses, which makes the CLI a
//! convenient end-to-end harness: list the catalogue, run a calculator
//! from key=value inputs, inspect saved reports.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use ruralis_engine::{CalculatorEngine, Locale, PlanTier};
use ruralis_reports::{CalculatorPage, JsonFileReportStore, ReportStore, StaticSession};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "ruralis", version, about = "Ruralis PRO agronomic calculators")]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Display locale
    #[arg(long, global = true, value_enum, default_value_t = LocaleArg::PtBr)]
    locale: LocaleArg,

    /// Report store file
    #[arg(long, global = true, default_value = "ruralis-reports.json")]
    store: PathBuf,

    /// Run without a signed-in session (locked results)
    #[arg(long, global = true)]
    anonymous: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the calculator catalogue
    List,
    /// Run a calculator and print its projected views
    Compute {
        /// Calculator slug (see `list`)
        slug: String,
        /// Field values as name=value, repeatable
        #[arg(short = 'i', long = "input", value_name = "NAME=VALUE")]
        inputs: Vec<String>,
        /// Persist the report after computing
        #[arg(long)]
        save: bool,
        #[arg(long, requires = "save")]
        title: Option<String>,
        #[arg(long, requires = "save")]
        client: Option<String>,
    },
    /// List recent saved reports
    Reports {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Show one saved report
    ShowReport { id: Uuid },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleArg {
    PtBr,
    EnUs,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::PtBr => Self::PtBr,
            LocaleArg::EnUs => Self::EnUs,
        }
    }
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let engine = Arc::new(
        CalculatorEngine::with_locale(cli.locale.into())
            .context("failed to initialise the calculator engine")?,
    );
    let store = JsonFileReportStore::new(&cli.store);
    let session = if cli.anonymous {
        StaticSession::anonymous()
    } else {
        StaticSession::signed_in("local-user", "Produtor Local", PlanTier::Pro)
    };
    let (user, entitlement) = ruralis_reports::resolve_entitlement(&session).await;

    match cli.command {
        Commands::List => {
            let catalog = engine.catalog();
            if cli.json {
                print_json(&catalog)?;
            } else {
                for entry in catalog {
                    println!("{}\t{}", entry.slug, entry.title);
                }
            }
        }
        Commands::Compute { slug, inputs, save, title, client } => {
            let mut page = CalculatorPage::new(
                Arc::clone(&engine),
                &slug,
                user.clone(),
                entitlement.plan,
            )
            .with_context(|| format!("cannot open calculator '{slug}'"))?;
            for pair in &inputs {
                let (name, raw) = parse_input(pair)?;
                page.set_field(name, raw);
            }

            let view = page.view();
            if cli.json {
                print_json(&view)?;
            } else if let Some(card) = &view.visible {
                println!("{}", card.title);
                println!("{}", "-".repeat(card.title.chars().count()));
                for entry in &card.entries {
                    let marker = if entry.emphasis { "*" } else { " " };
                    println!("{marker} {}: {} {}", entry.label, entry.value, entry.unit);
                }
                println!();
                if let Some(link) = page.share_link() {
                    println!("{}", page.evaluation().projection.share_text);
                    println!("{link}");
                }
            } else {
                println!("Resultados bloqueados: faça login para visualizar.");
            }

            if save {
                let module_title = engine.module(&slug)?.title().to_string();
                let title = title.unwrap_or(module_title);
                let id = page
                    .save(&store, &title, client)
                    .await
                    .context("failed to save the report")?;
                if cli.json {
                    print_json(&id)?;
                } else {
                    println!("relatório salvo: {id}");
                }
            }
        }
        Commands::Reports { limit } => {
            let Some(user) = user else {
                bail!("sign in to list reports (drop --anonymous)");
            };
            let reports = store.list_recent(&user.id, limit).await?;
            if cli.json {
                print_json(&reports)?;
            } else {
                for report in reports {
                    println!(
                        "{}\t{}\t{}\t{}",
                        report.id,
                        report.tool_type,
                        report.title,
                        report.updated_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        Commands::ShowReport { id } => {
            let report = store
                .get_by_id(id)
                .await?
                .with_context(|| format!("report {id} not found"))?;
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{} ({})", report.title, report.tool_type);
                if let Some(client) = &report.client_name {
                    println!("cliente: {client}");
                }
                println!("atualizado: {}", report.updated_at.to_rfc3339());
                for (name, value) in &report.data.inputs {
                    println!("entrada  {name} = {value}");
                }
                for (name, value) in &report.data.results {
                    println!("resultado {name} = {value}");
                }
            }
        }
    }

    Ok(())
}

fn parse_input(pair: &str) -> anyhow::Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, raw)) if !name.is_empty() => Ok((name, raw)),
        _ => bail!("invalid input '{pair}', expected NAME=VALUE"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_pairs_parse() {
        assert_eq!(parse_input("seeds=100").unwrap(), ("seeds", "100"));
        assert_eq!(parse_input("cec=12,5").unwrap(), ("cec", "12,5"));
        assert!(parse_input("no-equals").is_err());
        assert!(parse_input("=5").is_err());
    }
}
