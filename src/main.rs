//! `sedc-signature` command-line front end.
//!
//! Collects form fields from flags, fetches the profile, and prints the
//! rendered signature HTML (or writes it with `--output`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use sedc_signature::config::{self, Config};
use sedc_signature::credentials::resolve_graph_token;
use sedc_signature::logging;
use sedc_signature::offices::{OfficeAddress, OfficeDirectory, OfficeSelection};
use sedc_signature::profile::file::FileProfileProvider;
use sedc_signature::profile::graph::GraphProfileProvider;
use sedc_signature::profile::{ProfileProvider, UserProfile};
use sedc_signature::render::Template;
use sedc_signature::signature::{compose, FieldUpdate, FormState, SignatureKind, SocialNetwork};

#[derive(Parser, Debug)]
#[command(name = "sedc-signature", version, about = "Generate an HTML email signature")]
struct Cli {
    #[arg(long, global = true, help = "Config file (default: ~/.sedc-signature/config.toml)")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a signature.
    Render(RenderArgs),
    /// List office types and locations.
    Offices,
    /// Print the address for an office type and optional location.
    Resolve {
        office_type: String,
        location: Option<String>,
    },
    /// Fetch and print the directory profile as JSON.
    Profile(ProfileSource),
}

#[derive(Args, Debug)]
struct ProfileSource {
    #[arg(long, help = "Read the profile from a JSON file instead of Microsoft Graph")]
    profile: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: ProfileSource,
    #[arg(long, help = "professional, modern, minimal, sedc-clean (or 1-4)")]
    template: Option<Template>,
    #[arg(long, help = "Render for a shared mailbox")]
    shared: bool,
    #[arg(long)]
    functional_name: Option<String>,
    #[arg(long)]
    shared_email: Option<String>,
    #[arg(long)]
    shared_phone: Option<String>,
    #[arg(long, help = "Override the directory department")]
    department: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    #[arg(long, help = "Personal mobile number")]
    mobile: Option<String>,
    #[arg(long)]
    office_type: Option<String>,
    #[arg(long)]
    office_location: Option<String>,
    #[arg(long, help = "Address text; overrides the looked-up office address")]
    office_address: Option<String>,
    #[arg(long)]
    linkedin: Option<String>,
    #[arg(long)]
    facebook: Option<String>,
    #[arg(long)]
    instagram: Option<String>,
    #[arg(long)]
    twitter: Option<String>,
    #[arg(long)]
    tiktok: Option<String>,
    #[arg(long)]
    no_photo: bool,
    #[arg(long)]
    no_office: bool,
    #[arg(long, short, help = "Write HTML to a file instead of stdout")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let _log_guard = match &config.logging.dir {
        Some(dir) => Some(logging::init_file(dir, config.logging.level.as_deref())?),
        None => {
            logging::init_cli(config.logging.level.as_deref());
            None
        }
    };

    match cli.command {
        Commands::Render(args) => run_render(&config, args).await,
        Commands::Offices => run_offices(&config),
        Commands::Resolve {
            office_type,
            location,
        } => {
            let offices = load_offices(&config)?;
            println!(
                "{}",
                offices.resolve_address(&office_type, location.as_deref())
            );
            Ok(())
        }
        Commands::Profile(source) => {
            let mut profile = load_profile(&config, &source).await?;
            if profile.photo.take().is_some() {
                info!("photo omitted from output");
            }
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
    }
}

async fn run_render(config: &Config, args: RenderArgs) -> Result<()> {
    let offices = load_offices(config)?;
    let profile = load_profile(config, &args.source).await?;
    let form = build_form(config, &offices, &args);

    let html = match compose(&form, &profile) {
        Ok(html) => html,
        Err(errors) => {
            for error in &errors.errors {
                eprintln!("error: {error}");
            }
            anyhow::bail!(
                "signature not generated: {} field(s) need attention",
                errors.errors.len()
            );
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write signature to {}", path.display()))?;
            info!(path = %path.display(), template = %form.template, "signature written");
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn build_form(config: &Config, offices: &OfficeDirectory, args: &RenderArgs) -> FormState {
    let kind = if args.shared {
        SignatureKind::Shared
    } else {
        SignatureKind::Personal
    };

    let mut updates = vec![
        FieldUpdate::Kind(kind),
        FieldUpdate::Template(args.template.unwrap_or(config.defaults.template)),
        FieldUpdate::IncludePhoto(config.defaults.include_photo && !args.no_photo),
        FieldUpdate::IncludeOffice(config.defaults.include_office && !args.no_office),
        FieldUpdate::Office(office_selection(offices, args)),
    ];

    updates.extend(args.functional_name.clone().map(FieldUpdate::FunctionalName));
    updates.extend(args.shared_email.clone().map(FieldUpdate::SharedEmail));
    updates.extend(args.shared_phone.clone().map(FieldUpdate::SharedPhone));
    updates.extend(args.department.clone().map(FieldUpdate::Department));
    updates.extend(args.unit.clone().map(FieldUpdate::Unit));
    updates.extend(args.mobile.clone().map(FieldUpdate::PersonalMobile));

    let socials = [
        (SocialNetwork::LinkedIn, &args.linkedin),
        (SocialNetwork::Facebook, &args.facebook),
        (SocialNetwork::Instagram, &args.instagram),
        (SocialNetwork::Twitter, &args.twitter),
        (SocialNetwork::TikTok, &args.tiktok),
    ];
    for (network, value) in socials {
        updates.extend(value.clone().map(|v| FieldUpdate::Social(network, v)));
    }

    FormState::default().apply_all(updates)
}

fn office_selection(offices: &OfficeDirectory, args: &RenderArgs) -> Option<OfficeSelection> {
    let selection = match (&args.office_type, &args.office_address) {
        (Some(office_type), address) => {
            let selection =
                OfficeSelection::select(offices, office_type, args.office_location.as_deref());
            if selection.resolved().is_none() {
                warn!(
                    office_type = %office_type,
                    location = ?args.office_location,
                    "no address found for office selection"
                );
            }
            match address {
                Some(text) => selection.edit(text),
                None => selection,
            }
        }
        (None, Some(text)) => OfficeSelection::custom(text),
        (None, None) => return None,
    };
    if selection.is_customized() {
        info!("office address customized");
    }
    Some(selection)
}

fn load_offices(config: &Config) -> Result<OfficeDirectory> {
    match &config.offices.data_file {
        Some(path) => OfficeDirectory::from_path(path)
            .with_context(|| format!("failed to load office data from {}", path.display())),
        None => OfficeDirectory::builtin().context("built-in office data is invalid"),
    }
}

async fn load_profile(config: &Config, source: &ProfileSource) -> Result<UserProfile> {
    let provider: Box<dyn ProfileProvider> = match &source.profile {
        Some(path) => Box::new(FileProfileProvider::new(path)),
        None => {
            let token = resolve_graph_token(&config.graph.token_env)?;
            Box::new(GraphProfileProvider::new(
                &config.graph.base_url,
                token,
                Duration::from_secs(config.graph.timeout_secs),
            )?)
        }
    };

    match provider.fetch_profile().await {
        Ok(profile) => Ok(profile),
        Err(e) if e.is_permission_denied() => Err(anyhow::anyhow!(
            "failed to load user profile: {e}. Please ensure API permissions are granted, then retry"
        )),
        Err(e) => Err(anyhow::Error::new(e).context(format!(
            "failed to load user profile from {}; retry when the directory is reachable",
            provider.name()
        ))),
    }
}

fn run_offices(config: &Config) -> Result<()> {
    let offices = load_offices(config)?;
    for entry in offices.office_types() {
        println!("{} [{}]", entry.key, entry.label);
        match &entry.address {
            OfficeAddress::Simple { address } => println!("    {address}"),
            OfficeAddress::Nested { locations } => {
                for (name, address) in locations {
                    println!("    {name}: {address}");
                }
            }
        }
    }
    Ok(())
}
