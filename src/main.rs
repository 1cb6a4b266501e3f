use clap::{Parser, Subcommand};
use letterbox::config::{self, LetterboxConfig};
use letterbox::imaging::{
    self, BackendError, LetterboxRequest, OperationError, RustBackend, parse_color, parse_ratio,
};
use letterbox::naming::{self, NamingStyle};
use letterbox::output;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Flags shared by commands that build a letterbox request.
#[derive(clap::Args, Clone)]
struct RequestArgs {
    /// Target ratio: "16:9", "4:5 (Portrait)", "1.5" (unreadable → 1:1)
    #[arg(long)]
    ratio: Option<String>,

    /// Where the photo sits: center, top, bottom, left, right, top-left, ...
    #[arg(long)]
    anchor: Option<String>,
}

#[derive(Parser)]
#[command(name = "letterbox")]
#[command(about = "Pad photos to a target aspect ratio without cropping")]
#[command(long_about = "\
Pad photos to a target aspect ratio without cropping

The photo is never scaled or cropped. A canvas of the target ratio is filled
with the background color and the photo is placed on it at the anchor.

Examples:

  letterbox apply beach.jpg --ratio 4:5
  letterbox apply beach.jpg --ratio \"9:16 (Story)\" --color \"#000000\" --anchor top
  letterbox apply logo.png --ratio 1:1 --color \"#FFFFFF00\"
  letterbox plan --width 4032 --height 3024 --ratio 16:9

Defaults come from letterbox.toml (see 'letterbox gen-config'); flags override
them. Output is always PNG.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Letterbox an image file and write the result as PNG
    Apply {
        /// Image to pad (jpg, jpeg, png, webp, tiff)
        input: PathBuf,

        #[command(flatten)]
        request: RequestArgs,

        /// Background color: #RRGGBB or #RRGGBBAA
        #[arg(long)]
        color: Option<String>,

        /// Output path (default: next to the input, named per config)
        #[arg(long = "output", short = 'o')]
        dest: Option<PathBuf>,

        /// Output naming style when --output is not given
        #[arg(long, value_enum)]
        naming: Option<NamingStyle>,
    },
    /// Print the padded canvas for given dimensions without reading an image
    Plan {
        /// Source width in pixels
        #[arg(long)]
        width: u32,

        /// Source height in pixels
        #[arg(long)]
        height: u32,

        #[command(flatten)]
        request: RequestArgs,

        /// Print the geometry as JSON
        #[arg(long)]
        json: bool,
    },
    /// List ratio presets and anchors
    Presets,
    /// Print a stock letterbox.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Apply {
            input,
            request,
            color,
            dest,
            naming,
        } => {
            let site = config::load_config(&cli.config)?;
            let mut req = build_request(&site, &request)?;
            if let Some(color) = color {
                req.background = parse_color(&color)?;
            }
            let naming = naming.unwrap_or(site.output.naming);
            let output_path = dest.unwrap_or_else(|| default_output_path(&input, naming));

            let bytes = std::fs::read(&input)
                .map_err(|e| format!("could not read {}: {e}", input.display()))?;
            let result = imaging::letterbox_bytes(&RustBackend::new(), &bytes, &req)
                .map_err(|e| explain_failure(&input, e))?;
            std::fs::write(&output_path, &result.png)?;
            output::print_apply_output(
                &input,
                &output_path,
                &req,
                &result.geometry,
                result.has_alpha(),
            );
        }
        Command::Plan {
            width,
            height,
            request,
            json,
        } => {
            let site = config::load_config(&cli.config)?;
            let req = build_request(&site, &request)?;
            let geometry = imaging::plan_letterbox((width, height), &req)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&geometry)?);
            } else {
                output::print_plan_output(&req, &geometry);
            }
        }
        Command::Presets => {
            output::print_presets();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Config values with command-line overrides applied.
fn build_request(
    site: &LetterboxConfig,
    args: &RequestArgs,
) -> Result<LetterboxRequest, Box<dyn std::error::Error>> {
    let mut req = site.to_request()?;
    if let Some(ratio) = &args.ratio {
        req.ratio = parse_ratio(ratio);
    }
    if let Some(anchor) = &args.anchor {
        req.anchor = anchor.parse()?;
    }
    Ok(req)
}

/// Output path next to the input, e.g. `photos/edited_beach.png`.
fn default_output_path(input: &Path, style: NamingStyle) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(naming::output_file_name(&file_name, style))
}

/// Turn codec failures into a message a user can act on.
fn explain_failure(input: &Path, err: OperationError) -> Box<dyn std::error::Error> {
    match err {
        OperationError::Backend(BackendError::Decode(detail)) => format!(
            "could not read {}: {detail}\nThe file may be damaged or in an unsupported format \
             (supported: {}).",
            input.display(),
            imaging::supported_input_extensions().join(", ")
        )
        .into(),
        other => other.into(),
    }
}
