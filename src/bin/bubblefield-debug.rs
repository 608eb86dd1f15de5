// src/bin/bubblefield-debug.rs
use anyhow::{Context, Result};
use bubblefield::{BubbleField, LayoutConfig};
use clap::Parser;
use glam::Vec2;
use std::fs;

#[derive(Parser)]
#[command(name = "bubblefield-debug")]
#[command(about = "Computes a bubble field layout and dumps the per-item states")]
struct Args {
    /// Number of synthetic items to lay out
    #[arg(long, default_value_t = 12)]
    count: usize,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "390x844")]
    viewport: String,

    /// Pan offset as X,Y
    #[arg(long, default_value = "0,0")]
    offset: String,

    /// Layout preset (auto, portrait-phone, default)
    #[arg(long, default_value = "auto")]
    preset: String,

    /// Force compact mode on or off
    #[arg(long)]
    compact: Option<bool>,

    /// Override the gravitation pull (0-1)
    #[arg(long)]
    gravitation: Option<f32>,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let viewport = parse_pair(&args.viewport, 'x')
        .with_context(|| format!("Invalid viewport: {}", args.viewport))?;
    let offset = parse_pair(&args.offset, ',')
        .with_context(|| format!("Invalid offset: {}", args.offset))?;

    let mut config = match args.preset.as_str() {
        "auto" => LayoutConfig::for_viewport(viewport),
        "portrait-phone" => LayoutConfig::portrait_phone(),
        "default" => LayoutConfig::default(),
        other => anyhow::bail!("Unknown preset: {}. Use 'auto', 'portrait-phone', or 'default'", other),
    };
    if let Some(compact) = args.compact {
        config.compact = compact;
    }
    if let Some(gravitation) = args.gravitation {
        config.gravitation = gravitation;
    }

    let mut field = BubbleField::new((0..args.count).collect::<Vec<usize>>(), config, viewport);
    field.set_offset(offset);
    tracing::debug!(count = args.count, offset = ?field.offset(), "field computed");

    let output_text = match args.format.as_str() {
        "table" => generate_table_output(&field),
        "json" => generate_json_output(&field)?,
        other => anyhow::bail!("Unknown format: {}. Use 'table' or 'json'", other),
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        println!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn parse_pair(value: &str, separator: char) -> Result<Vec2> {
    let (x, y) = value
        .split_once(separator)
        .with_context(|| format!("expected two values separated by '{}'", separator))?;
    Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
}

fn generate_table_output(field: &BubbleField<usize>) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "offset: ({:.1}, {:.1})  items: {}\n",
        field.offset().x,
        field.offset().y,
        field.states().len()
    ));
    output.push_str(&format!(
        "{:>4}  {:<7} {:>7} {:>6}  {:>18}  {:>18}  {:>8}\n",
        "id", "region", "size", "scale", "position", "grid position", "dist"
    ));

    let mut ids: Vec<&usize> = field.states().keys().collect();
    ids.sort();
    for id in ids {
        let state = &field.states()[id];
        output.push_str(&format!(
            "{:>4}  {:<7} {:>7.1} {:>6.2}  ({:>7.1}, {:>7.1})  ({:>7.1}, {:>7.1})  {:>8.1}\n",
            id,
            format!("{:?}", state.region).to_lowercase(),
            state.size,
            state.scale,
            state.position.x,
            state.position.y,
            state.original_position.x,
            state.original_position.y,
            state.distance_to_center,
        ));
    }

    if let Some(guides) = field.guides() {
        output.push_str(&format!(
            "guides: center {:?} r={:.1}, fringe {:?} r={:.1}\n",
            guides.center, guides.center_corner_radius, guides.fringe, guides.fringe_corner_radius
        ));
    }
    output
}

fn generate_json_output(field: &BubbleField<usize>) -> Result<String> {
    let mut states: Vec<_> = field.states().iter().collect();
    states.sort_by_key(|(id, _)| **id);

    let items: Vec<serde_json::Value> = states
        .into_iter()
        .map(|(id, state)| {
            Ok(serde_json::json!({
                "id": id,
                "state": serde_json::to_value(state)?,
            }))
        })
        .collect::<Result<_>>()?;

    let doc = serde_json::json!({
        "offset": [field.offset().x, field.offset().y],
        "config": serde_json::to_value(field.config())?,
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&doc)? + "\n")
}
