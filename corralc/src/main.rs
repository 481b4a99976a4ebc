use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use corral_layouts::LayoutOutcome;
use corral_layouts::Snapshot;
use corral_layouts::StrutPolicy;
use corral_layouts::apply_layout_by_name;
use corral_layouts::layouts;

#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[command(subcommand)]
    subcommand: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print a list of the known layouts
    Layouts,
    /// Apply a layout to a window snapshot and print the computed result
    Apply(Apply),
}

#[derive(Parser)]
struct Apply {
    /// The layout identifier to apply
    layout: String,

    /// Path to a JSON window snapshot; omit to read the snapshot from stdin
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// How struts (panels, docks) are recognized in the snapshot
    #[arg(long, value_enum)]
    strut_policy: Option<StrutPolicy>,
}

fn read_snapshot(path: Option<&PathBuf>) -> Result<Snapshot> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read snapshot from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("could not read snapshot from stdin")?;
            buffer
        }
    };

    raw.parse::<Snapshot>()
        .wrap_err("could not parse window snapshot")
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.subcommand {
        SubCommand::Layouts => {
            println!("Known layouts:");
            for descriptor in layouts() {
                println!("\t{}\t- {}", descriptor.id, descriptor.description);
            }
        }
        SubCommand::Apply(args) => {
            let snapshot = read_snapshot(args.snapshot.as_ref())?;
            let policy = args.strut_policy.unwrap_or_default();
            let outcome = apply_layout_by_name(&args.layout, &snapshot, policy)?;

            if matches!(outcome, LayoutOutcome::NoOp) {
                tracing::debug!("layout '{}' declined to act", args.layout);
            }

            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
