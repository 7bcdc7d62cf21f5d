//! solid-cli: Command-line interface for parametric container generation.
//!
//! This tool exposes every container parameter as a flag (or a JSON config
//! file), resolves the constraints, and exports the composed solid as an
//! OpenSCAD program or a JSON operation graph.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=solid_container=debug` - Per-axis resolution decisions
//! - `RUST_LOG=info` - Resolution summaries
//!
//! # Example
//!
//! ```bash
//! # A 40x60mm tray with 1.2mm walls, exported to OpenSCAD
//! solid generate --inner-width 40 --inner-depth 60 --wall-thickness 1.2 \
//!     --inner-height 25 --base-thickness 1.6 -o tray.scad
//!
//! # Check a config file without writing anything
//! solid check --config tray.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use miette::Diagnostic;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use solid_container::{ConfigError, Container, ContainerConfig, ExpandStrategy};
use solid_csg::to_scad;

/// solid - generate parametric container solids from dimensional constraints.
#[derive(Parser)]
#[command(name = "solid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a container and export its operation graph.
    Generate {
        #[command(flatten)]
        params: ContainerArgs,

        /// Output file; format is chosen by extension (.scad or .json)
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Resolve a container and print the spec without writing a model.
    Check {
        #[command(flatten)]
        params: ContainerArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExpandArg {
    None,
    Inside,
    Wall,
}

impl From<ExpandArg> for ExpandStrategy {
    fn from(arg: ExpandArg) -> Self {
        match arg {
            ExpandArg::None => ExpandStrategy::None,
            ExpandArg::Inside => ExpandStrategy::Inside,
            ExpandArg::Wall => ExpandStrategy::Wall,
        }
    }
}

/// Container parameters; all sizes in millimeters.
///
/// Flags override values loaded from `--config`.
#[derive(Args, Default)]
struct ContainerArgs {
    /// JSON file with a container configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inner size for both horizontal axes
    #[arg(long)]
    inner_length: Option<f64>,
    #[arg(long)]
    inner_width: Option<f64>,
    #[arg(long)]
    inner_depth: Option<f64>,

    /// Outer size for both horizontal axes
    #[arg(long)]
    outer_length: Option<f64>,
    #[arg(long)]
    outer_width: Option<f64>,
    #[arg(long)]
    outer_depth: Option<f64>,

    /// Round the outer size up to a multiple of this, both axes
    #[arg(long)]
    side_multiple: Option<f64>,
    #[arg(long)]
    width_multiple: Option<f64>,
    #[arg(long)]
    depth_multiple: Option<f64>,

    /// Wall thickness for both axes [default: 0.8]
    #[arg(long)]
    wall_thickness: Option<f64>,
    #[arg(long)]
    wall_thickness_x: Option<f64>,
    #[arg(long)]
    wall_thickness_y: Option<f64>,

    /// Expansion strategy for both axes [default: none]
    #[arg(long, value_enum)]
    expand: Option<ExpandArg>,
    #[arg(long, value_enum)]
    expand_x: Option<ExpandArg>,
    #[arg(long, value_enum)]
    expand_y: Option<ExpandArg>,

    /// Explicit base-hole footprint, both axes
    #[arg(long)]
    base_hole_length: Option<f64>,
    #[arg(long)]
    base_hole_width: Option<f64>,
    #[arg(long)]
    base_hole_depth: Option<f64>,

    /// Support-leg length kept at the base perimeter, both axes
    #[arg(long)]
    base_support_length: Option<f64>,
    #[arg(long)]
    base_support_length_x: Option<f64>,
    #[arg(long)]
    base_support_length_y: Option<f64>,

    /// Brace length preserved beside wall cutouts, both axes
    #[arg(long)]
    brace_length: Option<f64>,
    #[arg(long)]
    brace_length_x: Option<f64>,
    #[arg(long)]
    brace_length_y: Option<f64>,

    /// Brace height preserved below wall cutouts
    #[arg(long)]
    brace_height: Option<f64>,

    /// Heights: provide exactly two of the three
    #[arg(long)]
    base_thickness: Option<f64>,
    #[arg(long)]
    inner_height: Option<f64>,
    #[arg(long)]
    outer_height: Option<f64>,
}

impl ContainerArgs {
    /// Merge the config file (if any) with flag overrides.
    fn into_config(self) -> Result<ContainerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => ContainerConfig::default(),
        };

        macro_rules! override_option {
            ($($field:ident),+ $(,)?) => {
                $(if self.$field.is_some() {
                    config.$field = self.$field;
                })+
            };
        }
        override_option!(
            inner_length,
            inner_width,
            inner_depth,
            outer_length,
            outer_width,
            outer_depth,
            side_multiple,
            width_multiple,
            depth_multiple,
            wall_thickness_x,
            wall_thickness_y,
            base_hole_length,
            base_hole_width,
            base_hole_depth,
            base_support_length,
            base_support_length_x,
            base_support_length_y,
            brace_length,
            brace_length_x,
            brace_length_y,
            brace_height,
            base_thickness,
            inner_height,
            outer_height,
        );
        if let Some(thickness) = self.wall_thickness {
            config.wall_thickness = thickness;
        }
        if let Some(expand) = self.expand {
            config.expand = expand.into();
        }
        if let Some(expand) = self.expand_x {
            config.expand_x = Some(expand.into());
        }
        if let Some(expand) = self.expand_y {
            config.expand_y = Some(expand.into());
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Generate { params, output } => generate(params, &output, cli.quiet),
        Commands::Check { params } => check(params, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// Configuration rejections carry a code and remediation help; render those
/// instead of the bare message.
fn report_error(error: &anyhow::Error) {
    if let Some(config_err) = error.downcast_ref::<ConfigError>() {
        eprintln!("{}: {}", "Error".red().bold(), config_err);
        eprintln!("  {}: {}", "Code".cyan(), config_err.code());
        if let Some(help) = config_err.help() {
            eprintln!("  {}: {}", "Suggestion".green(), help);
        }
    } else {
        eprintln!("{}: {}", "Error".red().bold(), error);
        for cause in error.chain().skip(1) {
            eprintln!("  {}: {}", "Caused by".yellow(), cause);
        }
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve(params: ContainerArgs) -> Result<Container> {
    let config = params.into_config()?;
    // Plain ? so the ConfigError survives for report_error to downcast.
    let container = Container::from_config(&config)?;
    Ok(container)
}

fn generate(params: ContainerArgs, output: &Path, quiet: bool) -> Result<()> {
    let container = resolve(params)?;
    let graph = container.solid();

    let rendered = match output.extension().and_then(|e| e.to_str()) {
        Some("scad") => to_scad(&graph),
        Some("json") => serde_json::to_string_pretty(&graph)? + "\n",
        other => bail!(
            "unsupported output format {:?}; use a .scad or .json path",
            other.unwrap_or("")
        ),
    };
    fs::write(output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if !quiet {
        print_spec(&container);
        println!("{} {}", "wrote".green().bold(), output.display());
    }
    Ok(())
}

fn check(params: ContainerArgs, quiet: bool) -> Result<()> {
    let container = resolve(params)?;
    if !quiet {
        print_spec(&container);
        println!("{}", "configuration ok".green().bold());
    }
    Ok(())
}

fn print_spec(container: &Container) {
    let spec = container.spec();
    println!(
        "{}  {} x {} x {} mm (outer)",
        "container".cyan().bold(),
        spec.width.outer,
        spec.depth.outer,
        spec.height.outer_height,
    );
    println!(
        "  cavity  {} x {} x {} mm, walls {}/{} mm, base {} mm",
        spec.width.inner,
        spec.depth.inner,
        spec.height.inner_height,
        spec.width.wall_thickness,
        spec.depth.wall_thickness,
        spec.height.base_thickness,
    );
    let holes = container.holes();
    for (name, cutout) in [
        ("base hole", holes.base_hole),
        ("left/right wall holes", holes.left_right),
        ("front/back wall holes", holes.front_back),
    ] {
        if let Some(cutout) = cutout {
            println!(
                "  cutout  {} ({} x {} x {} mm)",
                name, cutout.size.x, cutout.size.y, cutout.size.z
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_container::ConfigErrorCode;

    #[test]
    fn config_errors_keep_their_diagnostics_through_anyhow() {
        // 10 + 2*1 != 14, so resolution rejects this; the error must still
        // downcast to ConfigError with its code and help intact, or
        // report_error would lose the remediation text.
        let error = resolve(ContainerArgs {
            inner_width: Some(10.0),
            outer_width: Some(14.0),
            inner_depth: Some(10.0),
            wall_thickness: Some(1.0),
            inner_height: Some(5.0),
            base_thickness: Some(1.0),
            ..Default::default()
        })
        .unwrap_err();

        let config_err = error.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_err.code(), ConfigErrorCode::InconsistentAxis);
        let help = config_err.help().unwrap().to_string();
        assert!(help.contains("expand_x"));
    }

    #[test]
    fn file_errors_stay_plain_anyhow() {
        let error = resolve(ContainerArgs {
            config: Some(PathBuf::from("/nonexistent/container.json")),
            ..Default::default()
        })
        .unwrap_err();

        assert!(error.downcast_ref::<ConfigError>().is_none());
        assert!(error.to_string().contains("failed to read config"));
    }
}
