use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use vizkit::{Plot, PlotConfig, schema};

#[derive(Parser)]
#[command(name = "vizkit")]
#[command(
    about = "Render declarative charts to SVG",
    long_about = "Renders a JSON chart description (scales, axes and geoms) into an SVG file."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chart description to SVG
    Render {
        /// Chart description in JSON (see `vizkit schema`).
        #[arg(long, required = true)]
        config: PathBuf,
        /// Output SVG file. Parent directories are created as needed.
        #[arg(long, required = true)]
        output: PathBuf,
        /// Force overwrite of an existing output file.
        #[arg(short, long)]
        force: bool,
        /// Omit the XML declaration.
        #[arg(long)]
        no_declaration: bool,
    },
    /// Print the JSON Schema of the chart description
    Schema,
}

fn check_output_path(path: &Path, force: bool) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        info!("Creating output directory: {:?}", parent);
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {:?}", parent))?;
    }
    if !force && path.exists() {
        bail!(
            "Output file {:?} already exists. Use --force to overwrite.",
            path
        );
    }
    Ok(())
}

fn render(config: &Path, output: &Path, force: bool, include_declaration: bool) -> Result<()> {
    let file = File::open(config).with_context(|| format!("Could not open {:?}", config))?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse {:?} as JSON", config))?;
    schema::validate(&value)?;

    let chart = PlotConfig::from_value(value)?;
    let plot = Plot::from_config(&chart)
        .with_context(|| format!("Invalid chart description {:?}", config))?;

    check_output_path(output, force)?;
    plot.save(output, include_declaration)
        .with_context(|| format!("Could not write {:?}", output))?;

    info!(
        "Wrote {} ({} geoms, {} axes)",
        output.display(),
        plot.geoms().len(),
        plot.axes().len()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        match File::create(path) {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    let result = match &cli.command {
        Commands::Render {
            config,
            output,
            force,
            no_declaration,
        } => render(config, output, *force, !*no_declaration),
        Commands::Schema => schema::schema_json_pretty()
            .map(|schema| println!("{}", schema))
            .map_err(Into::into),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vizkit-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_invalid_chart_creates_no_directories() {
        let dir = scratch_dir("invalid");
        let config = dir.join("chart.json");
        std::fs::write(&config, r#"{"geoms": [{"type": "hexbin"}]}"#).unwrap();
        let output = dir.join("nested").join("chart.svg");

        assert!(render(&config, &output, false, true).is_err());
        assert!(!dir.join("nested").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_creates_output_directories() {
        let dir = scratch_dir("valid");
        let config = dir.join("chart.json");
        std::fs::write(&config, r#"{"width": 40, "height": 40, "geoms": [{"type": "point"}]}"#)
            .unwrap();
        let output = dir.join("nested").join("chart.svg");

        render(&config, &output, false, false).unwrap();
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(render(&config, &output, false, false).is_err());
        assert!(render(&config, &output, true, false).is_ok());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
