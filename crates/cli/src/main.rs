#![deny(unsafe_code)]
//! CLI binary for the HCL color picker.
//!
//! Subcommands:
//! - `hex`, `rgb`, `hsv`, `hcl`: convert one color and print every representation
//! - `render <swatch>`: write a widget PNG
//! - `list`: print available swatches

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use hcl_picker_core::{Hcl, Hsv, PickerState, Rgb};
use hcl_picker_render::SwatchKind;
use serde_json::Value;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hcl-picker", about = "HCL color picker CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a hex color (e.g. "#FF8000", "a1f").
    Hex {
        #[arg(allow_hyphen_values = true)]
        hex: String,
    },
    /// Convert an RGB color; channels in [0, 255].
    Rgb {
        #[arg(allow_hyphen_values = true, num_args = 3, value_names = ["R", "G", "B"])]
        components: Vec<String>,
    },
    /// Convert an HSV color; hue in degrees, saturation and value in [0, 1].
    Hsv {
        #[arg(allow_hyphen_values = true, num_args = 3, value_names = ["H", "S", "V"])]
        components: Vec<String>,
    },
    /// Convert an HCL color; hue in degrees, chroma and luminance in [0, 1].
    Hcl {
        #[arg(allow_hyphen_values = true, num_args = 3, value_names = ["H", "C", "L"])]
        components: Vec<String>,
    },
    /// Render a picker widget and write a PNG snapshot.
    Render {
        /// Swatch name (square, slider, fill).
        swatch: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 360)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "swatch.png")]
        output: PathBuf,

        /// Swatch parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available swatches.
    List,
}

/// Raw component strings as loose values, so clamping and defaulting apply.
fn loose(components: &[String]) -> Result<[Value; 3], CliError> {
    match components {
        [a, b, c] => Ok([a, b, c].map(|s| Value::String(s.clone()))),
        _ => Err(CliError::Input(format!(
            "expected 3 components, got {}",
            components.len()
        ))),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut state = PickerState::new();
    match cli.command {
        Command::List => {
            let swatches = SwatchKind::list_swatches();
            if cli.json {
                let info = serde_json::json!({ "swatches": swatches });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Swatches:");
                for name in swatches {
                    println!("  {name}");
                }
            }
            return Ok(());
        }
        Command::Render {
            swatch,
            width,
            height,
            output,
            params,
        } => {
            let params: Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let kind = SwatchKind::from_name(&swatch, &params)?;
            let buf = kind.render(width, height)?;
            hcl_picker_render::snapshot::write_png(buf, width, height, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "swatch": swatch,
                    "width": width,
                    "height": height,
                    "params": kind.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("rendered {swatch} ({width}x{height}) -> {}", output.display());
            }
            return Ok(());
        }
        Command::Hex { hex } => {
            state.update_from_hex(&hex)?;
        }
        Command::Rgb { components } => {
            state.update_from_rgb(Rgb::from(loose(&components)?));
        }
        Command::Hsv { components } => {
            state.update_from_hsv(Hsv::from(loose(&components)?));
        }
        Command::Hcl { components } => {
            state.update_from_hcl(Hcl::from(loose(&components)?));
        }
    }

    tracing::debug!(hex = state.color().hex(), "converted");
    println!("{}", conversion_output(&state, cli.json)?);
    Ok(())
}

/// The serialized `Color` with `--json`, otherwise the readout text.
fn conversion_output(state: &PickerState, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(state.color())?)
    } else {
        Ok(state.readout().to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!("{}", serde_json::to_string_pretty(&e.report()).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
