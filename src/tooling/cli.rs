//! CLI Tooling
//!
//! Command-line interface over the booking list store. Each command maps to
//! one store operation; output is text tables or pretty JSON.

use crate::booking::format::{format_booking_page_text, format_booking_text, format_stats_text};
use crate::booking::{
    Booking, BookingCommandService, BookingPatch, BookingRecord, BookingStatus, BookingStore,
};
use crate::config::{ConfigLoader, WayfareConfig};
use crate::error::ApiError;
use crate::logging::LoggingOverrides;
use crate::store::{ListQuery, Update};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// Wayfare CLI - booking back office over a durable list store
#[derive(Parser, Debug)]
#[command(name = "wayfare")]
#[command(about = "Manage the travel agency booking list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Booking list file (overrides storage configuration)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Booking list operations
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum BookingCommands {
    /// Create a booking (status starts as Pending)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        country: Option<String>,
        /// Number of guests
        #[arg(long, default_value = "1")]
        guests: u32,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        note: Option<String>,
        /// Visit date (YYYY-MM-DD)
        #[arg(long)]
        visit_date: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List bookings, newest first
    List {
        /// Status filter (pending, confirmed, cancelled, all)
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive search over name, email, phone and code
        #[arg(long)]
        search: Option<String>,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
        /// Page size
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one booking
    Show {
        id: String,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Update status and/or fields of a booking
    Update {
        id: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Country; an empty value clears it
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        guests: Option<u32>,
        #[arg(long)]
        amount: Option<f64>,
        /// Note; an empty value clears it
        #[arg(long)]
        note: Option<String>,
        /// Visit date (YYYY-MM-DD); an empty value clears it
        #[arg(long)]
        visit_date: Option<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete a booking
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Count bookings
    Count {
        #[arg(long)]
        status: Option<String>,
    },
    /// Aggregate statistics
    Stats {
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InvalidArgument(format!("Failed to render JSON: {}", e)))
}

fn render_booking(record: &BookingRecord, format: &str) -> Result<String, ApiError> {
    match parse_format(format)? {
        OutputFormat::Text => Ok(format_booking_text(record)),
        OutputFormat::Json => to_json(record),
    }
}

/// CLI context: resolved configuration, the booking store and a runtime to
/// drive its async operations.
pub struct CliContext {
    workspace_root: PathBuf,
    config: WayfareConfig,
    store: BookingStore,
    runtime: tokio::runtime::Runtime,
}

impl CliContext {
    /// Load configuration for `workspace_root` (or from `config_path`) and
    /// open the booking store it points at.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(workspace_root, config)
    }

    pub fn with_config(workspace_root: PathBuf, config: WayfareConfig) -> Result<Self, ApiError> {
        let store_path = config.storage.resolve_bookings_path(&workspace_root)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to start runtime: {}", e)))?;
        Ok(Self {
            workspace_root,
            config,
            store: BookingStore::open(store_path),
            runtime,
        })
    }

    /// Point the context at a different booking list file.
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            let path = if path.is_absolute() {
                path
            } else {
                self.workspace_root.join(path)
            };
            self.store = BookingStore::open(path);
        }
        self
    }

    pub fn config(&self) -> &WayfareConfig {
        &self.config
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Booking { command } => self.execute_booking(command),
            Commands::Config { command } => match command {
                ConfigCommands::Show => {
                    let mut out = format!(
                        "# booking store: {}\n",
                        self.store.path().display()
                    );
                    out.push_str(&self.config.to_toml()?);
                    Ok(out)
                }
            },
        }
    }

    fn execute_booking(&self, command: &BookingCommands) -> Result<String, ApiError> {
        match command {
            BookingCommands::Create {
                name,
                email,
                phone,
                country,
                guests,
                amount,
                note,
                visit_date,
                format,
            } => {
                parse_format(format)?;
                let fields = BookingCommandService::build_booking_fields(
                    name.clone(),
                    email.clone(),
                    phone.clone(),
                    country.clone(),
                    *guests,
                    *amount,
                    note.clone(),
                    visit_date.as_deref(),
                )?;
                let record = self.runtime.block_on(self.store.create(fields))?;
                info!(id = %record.id, sequence_code = %record.sequence_code, "booking created via cli");
                render_booking(&record, format)
            }
            BookingCommands::List {
                status,
                search,
                page,
                limit,
                format,
            } => {
                let output = parse_format(format)?;
                let query = ListQuery {
                    status: BookingCommandService::parse_status_filter(status.as_deref())?,
                    search: search.clone(),
                    page: BookingCommandService::resolve_page(*page)?,
                    limit: BookingCommandService::resolve_limit(
                        *limit,
                        self.config.listing.default_limit,
                        self.config.listing.max_limit,
                    )?,
                };
                let page = self.runtime.block_on(self.store.find_all(&query))?;
                match output {
                    OutputFormat::Text => Ok(format_booking_page_text(&page)),
                    OutputFormat::Json => to_json(&page),
                }
            }
            BookingCommands::Show { id, format } => {
                parse_format(format)?;
                let record = self
                    .runtime
                    .block_on(self.store.find_by_id(id))?
                    .ok_or_else(|| ApiError::NotFound(id.clone()))?;
                render_booking(&record, format)
            }
            BookingCommands::Update {
                id,
                status,
                name,
                email,
                phone,
                country,
                guests,
                amount,
                note,
                visit_date,
                format,
            } => {
                parse_format(format)?;
                let status: Option<BookingStatus> = status
                    .as_deref()
                    .map(BookingCommandService::parse_status)
                    .transpose()?;
                let patch = BookingPatch {
                    name: name.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    country: BookingCommandService::clearable(country.as_deref()),
                    guests: *guests,
                    amount: *amount,
                    note: BookingCommandService::clearable(note.as_deref()),
                    visit_date: BookingCommandService::clearable_visit_date(
                        visit_date.as_deref(),
                    )?,
                };
                if status.is_none() && patch.is_empty() {
                    return Err(ApiError::InvalidArgument(
                        "Nothing to update: pass --status or at least one field".to_string(),
                    ));
                }

                let update = Update::<Booking> {
                    status,
                    changes: patch,
                };
                let record = self
                    .runtime
                    .block_on(self.store.update(id, update))?
                    .ok_or_else(|| ApiError::NotFound(id.clone()))?;
                render_booking(&record, format)
            }
            BookingCommands::Delete { id, yes } => {
                if !*yes && std::io::stdin().is_terminal() {
                    let confirmed = dialoguer::Confirm::new()
                        .with_prompt(format!("Delete booking {}?", id))
                        .default(false)
                        .interact()
                        .map_err(|e| {
                            ApiError::InvalidArgument(format!("Confirmation failed: {}", e))
                        })?;
                    if !confirmed {
                        return Ok("Aborted.".to_string());
                    }
                }
                if self.runtime.block_on(self.store.delete(id))? {
                    Ok(format!("Deleted booking {}", id))
                } else {
                    Err(ApiError::NotFound(id.clone()))
                }
            }
            BookingCommands::Count { status } => {
                let filter = BookingCommandService::parse_status_filter(status.as_deref())?;
                let count = self.runtime.block_on(self.store.count(filter))?;
                Ok(count.to_string())
            }
            BookingCommands::Stats { format } => {
                let output = parse_format(format)?;
                let stats = self.runtime.block_on(self.store.stats())?;
                match output {
                    OutputFormat::Text => Ok(format_stats_text(&stats)),
                    OutputFormat::Json => to_json(&stats),
                }
            }
        }
    }
}
