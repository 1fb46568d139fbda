use anyhow::Result;
use clap::{Parser, Subcommand};
use icon_helper::{Config, ExportContext, Exporter, IconExporter, StoreExporter, logger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw the application icon and store assets", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project root, overrides the configuration file
    #[arg(short, long)]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Multi-resolution .ico plus standalone PNGs
    Icon,
    /// Store logos, wide tile, splash screen and badge
    Store,
    /// Both of the above
    All,
}

fn main() -> Result<()> {
    logger::init_logger();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(root) = args.project_root {
        config.project_root = root;
    }

    let fonts = config.font_chain();
    let ctx = ExportContext::new(&config, &fonts);

    let exporters: &[&dyn Exporter] = match args.command.unwrap_or(Command::All) {
        Command::Icon => &[&IconExporter],
        Command::Store => &[&StoreExporter],
        Command::All => &[&IconExporter, &StoreExporter],
    };

    for exporter in exporters {
        let saved = exporter.export(&ctx)?;
        log::info!("{} export wrote {} files", exporter.name(), saved.len());
    }

    Ok(())
}
