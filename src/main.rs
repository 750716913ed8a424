use clap::{Parser, Subcommand};
use gtd_print::{CoordinateRegistry, PipelineError, RenderRequest, renderer_from_files};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Print customs declarations onto the multi-sheet paper form")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a JSON declaration to PDF
    Render {
        /// Render request (header, items and options) as JSON
        request: PathBuf,
        /// Where to write the PDF
        output: PathBuf,
        /// Renderer settings as JSON
        #[arg(long)]
        config: Option<PathBuf>,
        /// Calibrated coordinate registry as JSON
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Directory holding the blank-form templates named in the config
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Print over the blank-form templates
        #[arg(long)]
        background: bool,
        /// Overlay the calibration grid
        #[arg(long)]
        grid: bool,
        /// Outline every field with its coordinate key
        #[arg(long)]
        borders: bool,
    },
    /// Dump the built-in coordinate registry as a starting point for calibration
    Registry {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Render {
            request,
            output,
            config,
            registry,
            templates,
            background,
            grid,
            borders,
        } => {
            let renderer =
                renderer_from_files(config.as_deref(), registry.as_deref(), templates.as_deref())?;

            println!("Reading declaration from {}", request.display());
            let json = fs::read_to_string(&request)?;
            let mut request: RenderRequest = serde_json::from_str(&json)?;
            // Flags only switch options on; the request file may already set them.
            request.options.use_background_image |= background;
            request.options.show_debug_grid |= grid;
            request.options.show_field_borders |= borders;

            let start = Instant::now();
            let pdf = renderer.assemble(&request)?;
            fs::write(&output, &pdf)?;
            println!(
                "Wrote {} ({} items, {} bytes) in {:.2?}",
                output.display(),
                request.items.len(),
                pdf.len(),
                start.elapsed()
            );
        }
        Command::Registry { output } => {
            let json = CoordinateRegistry::builtin()?.to_json()?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    println!("Wrote built-in registry to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}
