//! Command-line interface.
//!
//! Without a subcommand the TUI is launched; every subcommand runs
//! non-interactively against the same catalog, config and auth client.

mod common;
pub mod completions;

pub use common::*;

use crate::auth::{AuthClient, AuthForm, AuthMode, Settled, Submission};
use crate::catalog::{GalleryItem, ItemSource, ServiceListing, StaticCatalog};
use crate::config::{self, Config};
use crate::router::Route;
use crate::state::{CollectionView, Filter};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::{info, warn};

/// Assimox appliance repair: services, gallery and admin in your terminal
#[derive(Parser, Debug)]
#[command(name = "assimox", version, about = "Assimox appliance repair: services, gallery and admin in your terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Page to open at launch (/, /services, /gallery, /admin)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Use an alternate config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List gallery artworks
    Gallery {
        /// Only show one category (e.g. Abstract)
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List service providers
    Listings {
        /// Case-insensitive match on name, address or service
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign in as admin and print the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an admin account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file in effect: `--config`, else the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::config_path)
    }

    /// Route to open, when `--route` was given.
    pub fn start_route(&self) -> Option<Route> {
        self.route.as_deref().map(Route::from_path)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        let Some(command) = &self.command else {
            // No command provided, the caller launches the TUI
            return Ok(());
        };
        match command {
            Commands::Gallery { category, json } => Self::cmd_gallery(category.as_deref(), *json)?,
            Commands::Listings { search, json } => Self::cmd_listings(search.as_deref(), *json)?,
            Commands::Login { username, password } => {
                self.cmd_auth(AuthMode::Login, username, "", password)?
            }
            Commands::Register {
                username,
                email,
                password,
            } => self.cmd_auth(AuthMode::Register, username, email, password)?,
            Commands::Completions { shell } => completions::generate(*shell)?,
        }
        Ok(())
    }

    fn cmd_gallery(category: Option<&str>, json: bool) -> Result<()> {
        info!(category = ?category, "CLI: gallery command executed");
        let items = gallery_items(category)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }
        for item in &items {
            println!("{}", format_gallery_item(item));
        }
        print_info(&format!("{} artwork(s)", items.len()));
        Ok(())
    }

    fn cmd_listings(search: Option<&str>, json: bool) -> Result<()> {
        info!(search = ?search, "CLI: listings command executed");
        let listings = listings(search);
        if json {
            println!("{}", serde_json::to_string_pretty(&listings)?);
            return Ok(());
        }
        if listings.is_empty() {
            print_warning("No providers match your search");
            return Ok(());
        }
        for listing in &listings {
            println!("{}\n", format_listing(listing));
        }
        print_info(&format!("{} provider(s)", listings.len()));
        Ok(())
    }

    fn cmd_auth(&self, mode: AuthMode, username: &str, email: &str, password: &str) -> Result<()> {
        info!(?mode, username = %username, "CLI: auth command executed");
        let mut form = AuthForm::new(mode);
        form.username.set_text(username);
        form.email.set_text(email);
        form.password.set_text(password);
        form.confirm_password.set_text(password);
        let request = match form.submit() {
            Submission::Ready(_, request) => request,
            Submission::Invalid(err) => {
                print_error(&err.to_string());
                return Err(err.into());
            }
            Submission::InFlight => bail!("A request is already in flight"),
        };

        let config = Config::load_or_create(&self.config_path())
            .context("Failed to load configuration")?;
        let client = AuthClient::new(&config.api_base_url, config.request_timeout())
            .context("Failed to build HTTP client")?;
        let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        let result = runtime.block_on(client.submit(mode, &request));

        match form.settle(result) {
            Settled::LoggedIn { username, token } => {
                print_success(mode.success_message());
                println!("User:  {}", username);
                println!("Token: {}", token);
                Ok(())
            }
            Settled::Registered => {
                print_success(mode.success_message());
                println!("You can now run: assimox login --username {} --password ...", username);
                Ok(())
            }
            Settled::Failed(message) => {
                print_error(&message);
                bail!("{} failed: {}", mode.submit_label(), message)
            }
        }
    }
}

/// Gallery items for a category, or all of them. Unknown categories are an error.
pub fn gallery_items(category: Option<&str>) -> Result<Vec<GalleryItem>> {
    let items = ItemSource::<GalleryItem>::list_items(&StaticCatalog::new());
    let mut view = CollectionView::new(items);
    if let Some(category) = category {
        let categories = view.categories();
        let Some(matched) = categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(category))
        else {
            warn!(category = %category, "Unknown gallery category");
            bail!(
                "Unknown category '{}'. Available: {}",
                category,
                categories.join(", ")
            );
        };
        view.set_filter(Filter::category(matched));
    }
    Ok(view.visible().into_iter().cloned().collect())
}

/// Listings matching `search`, or all of them.
pub fn listings(search: Option<&str>) -> Vec<ServiceListing> {
    let catalog = StaticCatalog::new();
    match search {
        Some(needle) => ItemSource::<ServiceListing>::search_items(&catalog, needle),
        None => ItemSource::<ServiceListing>::list_items(&catalog),
    }
}
