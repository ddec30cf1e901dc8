//! CLI definition using clap

use circlepv_domain::constants::rooftop::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use circlepv_types::{OutputFormat, PanelType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "circle-pv")]
#[command(version)]
#[command(about = "Solar panel recycling value and carbon footprint estimates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Junction box value per panel in USD. Uses config value if not specified.
    #[arg(long, global = true)]
    pub junction_box_value: Option<f64>,

    /// TOML file replacing the built-in material table
    #[arg(long, global = true)]
    pub materials: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate carbon footprint and recycled value
    Calculate {
        /// Number of panels
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        panels: u32,

        /// Panel type
        #[arg(long = "type", short = 't', value_enum, default_value_t = PanelType::Silicon)]
        panel_type: PanelType,

        /// Include the junction box
        #[arg(long, short = 'j')]
        junction_box: bool,

        /// Show per-material contributions
        #[arg(long, short = 'b')]
        breakdown: bool,
    },

    /// List the material reference table
    Materials,

    /// Save a rooftop panel layout and optionally estimate it
    Rooftop {
        /// Roof latitude
        #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
        lat: f64,

        /// Roof longitude
        #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
        lng: f64,

        /// Number of rows
        #[arg(long)]
        rows: Option<u32>,

        /// Panels per row
        #[arg(long)]
        panels_per_row: Option<u32>,

        /// Number of columns
        #[arg(long)]
        columns: Option<u32>,

        /// Total panels on the roof (required)
        #[arg(long)]
        total_panels: Option<u32>,

        /// Estimate the roof with this panel type
        #[arg(long, value_enum)]
        estimate: Option<PanelType>,

        /// Include junction boxes in the estimate
        #[arg(long, short = 'j')]
        junction_box: bool,
    },

    /// Show ESG dashboard data
    Esg,

    /// Estimate every row of a CSV file (label,panel_type,panel_count,junction_box)
    Batch {
        /// Path to CSV file
        csv: PathBuf,

        /// Export results to an Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set junction box value per panel (USD)
        #[arg(long)]
        set_junction_box_value: Option<f64>,

        /// Set delay before showing a result (milliseconds)
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// Use a TOML material table instead of the built-in one
        #[arg(long)]
        set_materials: Option<PathBuf>,

        /// Go back to the built-in material table
        #[arg(long)]
        clear_materials: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
