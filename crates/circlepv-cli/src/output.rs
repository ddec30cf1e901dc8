//! Output formatting module

use circlepv_app::app::BatchReport;
use circlepv_domain::model::{EsgDashboard, MaterialTable, SavedRooftopLayout};
use circlepv_domain::service::CalculationBreakdown;
use circlepv_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn print_material_rows(breakdown: &CalculationBreakdown) {
    println!("\n--- Per Material ---");
    println!(
        "{:<10} {:>9} {:>11} {:>14} {:>14}",
        "Material", "Fraction", "Mean price", "Carbon (kg)", "Value (USD)"
    );
    for m in &breakdown.materials {
        println!(
            "{:<10} {:>9.4} {:>11.2} {:>14.4} {:>14.4}",
            m.material.label(),
            m.fraction,
            m.mean_price_usd,
            m.carbon_kg,
            m.recycled_value_usd
        );
    }
    if breakdown.request.include_junction_box {
        println!(
            "{:<10} {:>9} {:>11} {:>14} {:>14.4}",
            "Junct. box", "-", "-", "-", breakdown.junction_box_value_usd
        );
    }
    println!("--------------------");
}

pub fn output_calculation(
    output_format: OutputFormat,
    breakdown: &CalculationBreakdown,
    show_materials: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return if show_materials {
            print_json(breakdown)
        } else {
            print_json(&breakdown.result)
        };
    }

    let request = &breakdown.request;
    println!("\nRecycling Estimate");
    println!("==================");
    println!("Panel type:      {}", request.panel_type.label());
    println!("Panels:          {}", request.panel_count);
    println!(
        "Junction box:    {}",
        if request.include_junction_box { "Included" } else { "Not included" }
    );

    if show_materials {
        print_material_rows(breakdown);
    }

    println!("\nEstimated Total Carbon Footprint:");
    println!("{} kg CO₂e", breakdown.result.carbon_display());
    println!("\nEstimated Recycled Material Value:");
    println!("${} USD", breakdown.result.value_display());

    Ok(())
}

pub fn output_materials(
    output_format: OutputFormat,
    table: &MaterialTable,
    is_reference: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(table);
    }

    println!(
        "\nMaterial Table ({})",
        if is_reference { "built-in" } else { "custom" }
    );
    println!("==============");
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>11}  {}",
        "Material", "S", "T", "ci", "Mean price", "Price tiers"
    );
    for profile in table.profiles() {
        let tiers = profile
            .recycled_unit_prices
            .iter()
            .map(|(tier, price)| format!("{}={}", tier, price))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<10} {:>8} {:>8} {:>8} {:>11.2}  {}",
            profile.material.label(),
            profile.silicon_fraction,
            profile.thin_film_fraction,
            profile.carbon_intensity,
            profile.mean_recycled_price(),
            tiers
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct RooftopOutput<'a> {
    saved: &'a SavedRooftopLayout,
    estimate: Option<&'a CalculationBreakdown>,
}

pub fn output_rooftop(
    output_format: OutputFormat,
    saved: &SavedRooftopLayout,
    estimate: Option<&CalculationBreakdown>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&RooftopOutput { saved, estimate });
    }

    println!("\n{}", saved.summary());
    let b = &saved.bounds;
    println!(
        "Roof bounds: N {:.7} S {:.7} E {:.7} W {:.7}",
        b.north, b.south, b.east, b.west
    );

    if let Some(breakdown) = estimate {
        output_calculation(output_format, breakdown, false)?;
    }

    Ok(())
}

pub fn output_dashboard(output_format: OutputFormat, dashboard: &EsgDashboard) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(dashboard);
    }

    println!("\nESG Dashboard");
    println!("=============");

    println!("\nEnvironmental Metrics");
    for card in &dashboard.metric_cards {
        println!("  {:<26} {}", card.title, card.subtitle);
    }

    println!("\nWaste Volume");
    for point in &dashboard.waste_volume {
        println!("  {:>3}  {:>6.1}", point.x, point.y);
    }
    if let Some(peak) = dashboard.peak_waste_volume() {
        println!("  peak at x={} ({:.1})", peak.x, peak.y);
    }

    println!("\nRepair/Reuse vs Disposal");
    for (slice, pct) in dashboard
        .disposal_split
        .iter()
        .zip(dashboard.split_percentages())
    {
        println!("  {:<14} {:>6.1}  ({:.1}%)", slice.name, slice.value, pct);
    }

    println!("\nESG Score Over Time");
    for bar in &dashboard.esg_scores {
        println!("  {:<4} {:>6.1}", bar.label, bar.score);
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, report: &BatchReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nBatch Estimate");
    println!("==============");
    println!(
        "{:<20} {:<14} {:>7} {:>6} {:>14} {:>14}",
        "Label", "Panel type", "Panels", "Box", "Carbon (kg)", "Value (USD)"
    );
    println!("{}", "-".repeat(80));
    for entry in &report.entries {
        let request = &entry.breakdown.request;
        let result = &entry.breakdown.result;
        println!(
            "{:<20} {:<14} {:>7} {:>6} {:>14} {:>14}",
            truncate_str(&entry.label, 19),
            request.panel_type.label(),
            request.panel_count,
            if request.include_junction_box { "yes" } else { "no" },
            result.carbon_display(),
            result.value_display()
        );
    }
    println!("{}", "-".repeat(80));
    println!(
        "{:<20} {:<14} {:>7} {:>6} {:>14} {:>14}",
        "Total",
        "",
        report.total_panels,
        "",
        report.totals.carbon_display(),
        report.totals.value_display()
    );

    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
