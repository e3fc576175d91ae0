//! folio - portfolio page front end.
//!
//! Renders the built-in portfolio content, runs filtered project listings,
//! builds mailto links, and exports the static HTML page.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::render::{html, text};
use folio_core::{
    default_log_level, init_logging, mailto_url, Catalog, ContactMessage, FilterCriteria,
    ProjectFilterEngine,
};
use log::info;

/// folio - personal portfolio page front end
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files (logging stays off without it)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the whole portfolio as text
    Show,

    /// List projects under a tag/query filter
    Projects {
        /// Tag label; labels outside the enumerated set yield an empty
        /// listing
        #[arg(long)]
        tag: Option<String>,

        /// Free-text query, matched as a literal substring
        #[arg(long)]
        query: Option<String>,

        /// Emit the visible records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the enumerated filter labels
    Tags,

    /// Validate contact input and print the mailto URL
    Contact {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender reply address
        #[arg(long)]
        email: String,

        /// Optional subject line
        #[arg(long)]
        subject: Option<String>,

        /// Message body
        #[arg(long)]
        message: String,

        /// Emit the URL as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the static HTML page
    Export {
        /// Output file path
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        let dir = log_dir
            .to_str()
            .ok_or_else(|| anyhow!("log dir must be valid UTF-8"))?;
        init_logging(level, dir).map_err(|err| anyhow!(err))?;
    }

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Show => {
            print!("{}", text::render_page(&catalog, &FilterCriteria::default()));
        }
        Commands::Projects { tag, query, json } => {
            run_projects(&catalog, tag, query, json)?;
        }
        Commands::Tags => {
            for label in &catalog.tag_labels {
                println!("{label}");
            }
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
            json,
        } => {
            run_contact(&catalog, name, email, subject, message, json)?;
        }
        Commands::Export { out } => {
            html::write_page(&out, &catalog, &FilterCriteria::default())
                .with_context(|| format!("failed to write page to {}", out.display()))?;
            info!(
                "event=page_export module=cli status=ok path={}",
                out.display()
            );
            println!("wrote {}", out.display());
        }
    }

    Ok(())
}

fn run_projects(
    catalog: &Catalog,
    tag: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let mut engine = ProjectFilterEngine::new(catalog.projects.clone());
    if let Some(tag) = tag {
        engine.set_tag(tag);
    }
    if let Some(query) = query {
        engine.set_query(query);
    }

    if json {
        let records: Vec<_> = engine.visible_projects().into_iter().cloned().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    print!("{}", text::render_projects(catalog, engine.criteria()));
    Ok(())
}

fn run_contact(
    catalog: &Catalog,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    json: bool,
) -> Result<()> {
    let form = ContactMessage {
        name,
        email,
        subject,
        message,
    };
    let url = mailto_url(&catalog.profile.email, &form)?;

    if json {
        println!("{}", serde_json::json!({ "mailto": url }));
    } else {
        println!("{url}");
    }
    Ok(())
}
