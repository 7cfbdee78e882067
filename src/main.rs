use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use supermux_picker::picker::{self, Mode, Picker, ResultWriter};
use supermux_picker::{VERSION, config, logging, tui};

#[derive(Parser)]
#[command(
    name = "supermux-picker",
    version = VERSION,
    about = "Pick, create, detach or kill a supermux session"
)]
struct Cli {
    /// What confirming an entry does: pick (attach), kill or detach
    #[arg(long, default_value = "pick")]
    mode: Mode,
    /// Tab-separated list of sessions and windows to choose from
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Where the chosen `action\tsession\twin` line is written
    #[arg(long)]
    result_file: Option<PathBuf>,
    /// Only show entries whose label contains this text (case-insensitive)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    query: String,
    /// Config file (default: ~/.supermux/picker.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Both files are required; checked before the terminal is touched.
fn paths(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    let data_file = cli.data_file.clone().context("missing --data-file")?;
    let result_file = cli.result_file.clone().context("missing --result-file")?;
    Ok((data_file, result_file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (data_file, result_file) = paths(&cli)?;

    let cfg = config::load(cli.config.as_deref())?;
    if let Some(path) = cli
        .log_file
        .or_else(|| cfg.log_file.as_ref().map(PathBuf::from))
    {
        logging::init(&path)?;
    }

    let entries = picker::entry::load(&data_file, &cli.query)?;
    let theme = cfg.theme.build(config::color_mode_from_env(&cfg));

    tracing::info!("starting picker in {} mode", cli.mode);
    let mut picker = Picker::new(entries, cli.mode);
    let mut writer = ResultWriter::new(result_file);
    tui::run(&mut picker, &mut writer, theme)?;
    Ok(())
}
