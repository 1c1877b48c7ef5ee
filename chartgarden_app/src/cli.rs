// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line front end.
//!
//! Each invocation drives one [`AppState`] through the same messages a user would send,
//! then delivers the exports into a directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chartgarden_charts::{CanvasSize, ChartKind};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::{AppState, DirectorySink, ExportKind, Message, Settings, deliver};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "chartgarden")]
#[command(version, about = "Turn CSV files into standalone SVG charts")]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart (and optionally the data) into a directory
    Render(RenderArgs),
    /// List the columns of a CSV file and whether they can be charted
    Columns(ColumnsArgs),
}

/// Arguments of `chartgarden render`.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools, reason = "each flag is an independent toggle")]
pub struct RenderArgs {
    /// CSV file to chart
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Chart type: bar, horizontalBar, stackedBar, stackedHorizontalBar, pie, doughnut, line
    #[arg(long = "type", value_name = "KIND")]
    pub kind: Option<ChartKind>,

    /// Category label column (defaults to the first column)
    #[arg(long, value_name = "COL")]
    pub name: Option<String>,

    /// Value column (defaults to the second column)
    #[arg(long, value_name = "COL")]
    pub value: Option<String>,

    /// Extra columns to stack, comma-separated
    #[arg(long, value_name = "COL", value_delimiter = ',')]
    pub stack: Vec<String>,

    /// Split stacks into left and right sides
    #[arg(long)]
    pub diverging: bool,

    /// Left-side columns of a diverging chart, comma-separated
    #[arg(long, value_name = "COL", value_delimiter = ',')]
    pub left: Vec<String>,

    /// Right-side columns of a diverging chart, comma-separated
    #[arg(long, value_name = "COL", value_delimiter = ',')]
    pub right: Vec<String>,

    /// Draw value labels
    #[arg(long)]
    pub show_values: bool,

    /// Drop a data row (0-based, can be given multiple times)
    #[arg(long = "remove-row", value_name = "N")]
    pub remove_rows: Vec<usize>,

    /// Canvas width (overrides settings)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height (overrides settings)
    #[arg(long)]
    pub height: Option<f64>,

    /// Output directory (overrides settings)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Also export the (edited) data as CSV
    #[arg(long = "csv")]
    pub export_csv: bool,
}

/// Arguments of `chartgarden columns`.
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// CSV file to inspect
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            for path in render(&args)? {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Columns(args) => {
            print!("{}", columns(&args)?);
            Ok(())
        }
    }
}

/// Renders the requested exports and returns the written paths.
pub fn render(args: &RenderArgs) -> Result<Vec<PathBuf>> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut state = AppState::new();
    state.update(Message::LoadCsv(text));
    if let Some(notice) = state.take_notices().into_iter().find(|n| n.is_error()) {
        bail!("{}: {notice}", args.input.display());
    }
    for message in messages(args, &settings)? {
        state.update(message);
    }
    // Intermediate selections may not chart on their own; only the final one counts.
    state.take_notices();
    state
        .rebuild()
        .with_context(|| format!("cannot chart {}", args.input.display()))?;

    let out_dir = args.out_dir.as_ref().unwrap_or(&settings.output_dir);
    let mut sink = DirectorySink::new(out_dir);
    debug!(dir = %sink.dir().display(), "writing exports");
    let mut kinds = vec![ExportKind::Svg];
    if args.export_csv {
        kinds.push(ExportKind::Csv);
    }
    let mut written = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if let Some(path) = deliver(&mut state, &mut sink, kind) {
            written.push(path);
        } else {
            let reason = state
                .take_notices()
                .pop()
                .map_or_else(|| String::from("export failed"), |n| n.message);
            bail!(reason);
        }
    }
    Ok(written)
}

/// Translates flags and settings into the messages a user would send after loading a file.
///
/// Flags win over settings. Row removals are applied from the highest index down so every
/// index refers to the file as loaded.
fn messages(args: &RenderArgs, settings: &Settings) -> Result<Vec<Message>> {
    let mut canvas = settings.canvas();
    if let Some(width) = args.width {
        canvas = canvas.with_width(width);
    }
    if let Some(height) = args.height {
        canvas = canvas.with_height(height);
    }
    let (width, height) = (canvas.width, canvas.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        bail!("canvas must be positive, got {width}x{height}");
    }
    let kind = match args.kind {
        Some(kind) => kind,
        None => settings.chart_kind()?,
    };

    let mut out = vec![Message::Resize(canvas), Message::SetChartKind(kind)];
    if let Some(name) = &args.name {
        out.push(Message::SetNameKey(name.clone()));
    }
    if let Some(value) = &args.value {
        out.push(Message::SetValueKey(value.clone()));
    }
    if !args.stack.is_empty() {
        out.push(Message::SetStackColumns(args.stack.clone()));
    }
    out.push(Message::SetDiverging(args.diverging));
    if !args.left.is_empty() {
        out.push(Message::SetLeftColumns(args.left.clone()));
    }
    if !args.right.is_empty() {
        out.push(Message::SetRightColumns(args.right.clone()));
    }
    out.push(Message::SetShowDataValues(
        args.show_values || settings.show_data_values,
    ));

    let mut rows = args.remove_rows.clone();
    rows.sort_unstable_by(|a, b| b.cmp(a));
    rows.dedup();
    out.extend(rows.into_iter().map(Message::RemoveRow));

    debug!(messages = out.len(), "translated command line");
    Ok(out)
}

/// Describes the columns of a CSV file, one per line.
pub fn columns(args: &ColumnsArgs) -> Result<String> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let dataset = chartgarden_csv::parse_str(&text)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let mut out = String::new();
    for column in dataset.columns() {
        let typing = if dataset.is_numeric_column(column) {
            "numeric"
        } else {
            "text"
        };
        out.push_str(column);
        out.push('\t');
        out.push_str(typing);
        out.push('\n');
    }
    Ok(out)
}
