// File: crates/boostlog-viewer/src/main.rs
// Summary: Viewer loads boost-controller CSV logs through the load session and writes the chart as JSON and PNG.
// Notes:
// - FILES behave like one burst of drops: every file is offered to the session
//   before any read completes, so `--policy` decides which one ends up displayed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boostlog_core::{find_preset, ChartConfig, InFlightPolicy, LoadTicket, ThemePreference, Viewer};
use boostlog_render_skia::{render_view, RenderOptions};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart boost-controller CSV logs", long_about = None)]
struct Cli {
    /// CSV logs, in drop order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON chart configuration (overrides --preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in configuration
    #[arg(long, default_value = "boost")]
    preset: String,

    /// light, dark or system
    #[arg(long, default_value = "system")]
    theme: ThemePreference,

    /// Resolve `--theme system` to dark
    #[arg(long)]
    system_dark: bool,

    /// What a drop does while another read is outstanding
    #[arg(long, value_enum, default_value_t = Policy::Reject)]
    policy: Policy,

    /// Output directory for <name>.json and <name>.png
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Reject,
    Restart,
}

impl From<Policy> for InFlightPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Reject => InFlightPolicy::Reject,
            Policy::Restart => InFlightPolicy::Restart,
        }
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let theme = cli.theme.resolve(cli.system_dark);
    let mut viewer = Viewer::new(config)
        .context("invalid chart configuration")?
        .with_policy(cli.policy.into())
        .with_theme(theme);
    info!(
        chart = %viewer.config().title,
        theme = theme.name(),
        policy = ?viewer.policy(),
        files = cli.files.len(),
        "viewer ready"
    );

    let mut pending: Vec<(LoadTicket, &Path)> = Vec::new();
    for path in &cli.files {
        match viewer.begin_load(&path.to_string_lossy()) {
            Ok(ticket) => {
                debug!(ticket = ticket.id(), file = ticket.file_name(), "read started");
                pending.push((ticket, path.as_path()));
            }
            Err(e) => warn!(error = %e, "drop not accepted"),
        }
    }

    for (ticket, path) in pending {
        match std::fs::read(path) {
            Ok(bytes) => match viewer.complete_load(ticket, &bytes) {
                Ok(model) => {
                    let rows = model.row_count;
                    let failures = viewer.table().map_or(0, |t| t.total_coercion_failures());
                    println!("Loaded {} rows from {} ({} non-numeric cells)", rows, path.display(), failures);
                }
                Err(e) => warn!(error = %e, "load did not change the chart"),
            },
            Err(e) => {
                let err = viewer.fail_load(ticket, e.to_string());
                warn!(error = %err, "load did not change the chart");
            }
        }
    }

    let Some(view) = viewer.view() else {
        anyhow::bail!("no chart displayed; check file names and headers.");
    };

    let stem = Path::new(view.file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chart".to_string());
    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;

    let json_path = cli.out.join(format!("{stem}.json"));
    let json = serde_json::to_string_pretty(&view).context("serializing chart view")?;
    std::fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
    println!("Wrote {}", json_path.display());

    let png_path = cli.out.join(format!("{stem}.png"));
    let png = render_view(&view, &RenderOptions::default())?;
    std::fs::write(&png_path, png).with_context(|| format!("writing {}", png_path.display()))?;
    println!("Wrote {}", png_path.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ChartConfig> {
    match &cli.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display())),
        None => Ok(find_preset(&cli.preset)?),
    }
}
