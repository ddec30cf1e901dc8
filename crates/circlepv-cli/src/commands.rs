//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_batch, output_calculation, output_dashboard, output_materials, output_rooftop,
};
use circlepv_app::app::CalculationService;
use circlepv_app::config::{validate_junction_box_value, Config};
use circlepv_app::export::export_batch_to_excel;
use circlepv_domain::model::{EsgDashboard, RooftopLayout};
use circlepv_infra::load_requests_from_csv;
use circlepv_types::{CalculationRequest, OutputFormat, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Config, output format and calculation service for one invocation
struct RunContext {
    config: Config,
    output_format: OutputFormat,
    service: CalculationService,
}

fn run_context(cli: &Cli) -> Result<RunContext> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(value) = cli.junction_box_value {
        config.junction_box_value_usd = value;
    }
    if cli.materials.is_some() {
        config.material_table = cli.materials.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    let service = CalculationService::from_config(&config)?;
    tracing::debug!(
        output = %output_format,
        junction_box_value = service.junction_box_value(),
        custom_table = !service.uses_reference_table(),
        "resolved run context"
    );

    Ok(RunContext {
        config,
        output_format,
        service,
    })
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Calculate {
            panels,
            panel_type,
            junction_box,
            breakdown,
        } => {
            let ctx = run_context(&cli)?;
            let request =
                CalculationRequest::new(*panel_type, *panels).with_junction_box(*junction_box);
            cmd_calculate(&ctx, request, *breakdown)
        }

        Commands::Materials => {
            let ctx = run_context(&cli)?;
            output_materials(
                ctx.output_format,
                ctx.service.table(),
                ctx.service.uses_reference_table(),
            )
        }

        Commands::Rooftop {
            lat,
            lng,
            rows,
            panels_per_row,
            columns,
            total_panels,
            estimate,
            junction_box,
        } => {
            let ctx = run_context(&cli)?;
            let layout = RooftopLayout {
                latitude: *lat,
                longitude: *lng,
                rows: *rows,
                panels_per_row: *panels_per_row,
                columns: *columns,
                total_panels: *total_panels,
            };
            let (saved, breakdown) = ctx
                .service
                .rooftop(layout, estimate.map(|t| (t, *junction_box)))?;
            output_rooftop(ctx.output_format, &saved, breakdown.as_ref())
        }

        Commands::Esg => {
            let output_format = match cli.format {
                Some(format) => format,
                None => Config::load()?.output_format,
            };
            output_dashboard(output_format, &EsgDashboard::sample())
        }

        Commands::Batch { csv, output } => {
            let ctx = run_context(&cli)?;
            cmd_batch(&ctx, csv.clone(), output.clone())
        }

        // Edits the stored file; per-run overrides do not apply
        Commands::Config {
            show,
            set_output,
            set_junction_box_value,
            set_delay_ms,
            set_materials,
            clear_materials,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            *set_junction_box_value,
            *set_delay_ms,
            set_materials.clone(),
            *clear_materials,
            *reset,
        ),
    }
}

fn cmd_calculate(ctx: &RunContext, request: CalculationRequest, show_materials: bool) -> Result<()> {
    let breakdown = ctx.service.calculate(&request);

    if ctx.config.result_delay_ms > 0 {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Calculating...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        std::thread::sleep(Duration::from_millis(ctx.config.result_delay_ms));
        spinner.finish_and_clear();
    }

    output_calculation(ctx.output_format, &breakdown, show_materials)
}

fn cmd_batch(ctx: &RunContext, csv: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let requests = load_requests_from_csv(&csv)?;
    if requests.is_empty() {
        eprintln!("No rows found in {}", csv.display());
        return Ok(());
    }

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let report = ctx.service.run_batch(&requests, |done, _| pb.set_position(done as u64));
    pb.finish_and_clear();

    output_batch(ctx.output_format, &report)?;

    if let Some(path) = output {
        export_batch_to_excel(&report, &path)?;
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_junction_box_value: Option<f64>,
    set_delay_ms: Option<u64>,
    set_materials: Option<PathBuf>,
    clear_materials: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(value) = set_junction_box_value {
        config.junction_box_value_usd = validate_junction_box_value(value)?;
        modified = true;
    }

    if let Some(delay) = set_delay_ms {
        config.result_delay_ms = delay;
        modified = true;
    }

    if let Some(path) = set_materials {
        // Fail early rather than on the next calculation
        circlepv_infra::load_material_table(&path)?;
        config.material_table = Some(path);
        modified = true;
    }

    if clear_materials {
        config.material_table = None;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
