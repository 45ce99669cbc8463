use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ExportService, SurveyController};
use storage::repository::Storage;
use survey_core::{ItemSelection, SurveyConfig, SurveyConfigDraft};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Comparison items 1-20, preservation items 21-30.
    Fixed,
    /// Disjoint random draws from items 1-132.
    Sampled,
}

impl Policy {
    fn selection(self) -> ItemSelection {
        match self {
            Policy::Fixed => ItemSelection::fixed_default(),
            Policy::Sampled => ItemSelection::sampled_default(),
        }
    }
}

/// Visual Turing test for enhanced OCT images.
#[derive(Parser, Debug)]
#[command(name = "visual-turing-test")]
#[command(about = "Two-phase visual Turing test for generated OCT images", long_about = None)]
struct Args {
    /// Root directory holding targets/, inputs/ and outputs/
    #[arg(long, env = "SURVEY_ASSET_ROOT", default_value = "images")]
    asset_root: PathBuf,

    /// Directory where test_results.csv is written
    #[arg(long, env = "SURVEY_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// How items are assigned to the two phases
    #[arg(long, env = "SURVEY_POLICY", value_enum, default_value_t = Policy::Fixed)]
    policy: Policy,
}

struct DesktopApp {
    controller: Arc<SurveyController>,
    exports: Arc<ExportService>,
}

impl UiApp for DesktopApp {
    fn controller(&self) -> Arc<SurveyController> {
        Arc::clone(&self.controller)
    }

    fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }
}

fn build_config(args: &Args) -> anyhow::Result<SurveyConfig> {
    let draft = SurveyConfigDraft {
        asset_root: Some(args.asset_root.clone()),
        selection: Some(args.policy.selection()),
    };
    draft.validate().context("invalid survey configuration")
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    if !config.assets().root().is_dir() {
        warn!(
            asset_root = %config.assets().root().display(),
            "asset root not found; images will not load"
        );
    }
    info!(
        policy = ?args.policy,
        comparison = config.selection().comparison_len(),
        preservation = config.selection().preservation_len(),
        export_dir = %args.export_dir.display(),
        "starting survey"
    );

    let storage = Storage::filesystem(&args.export_dir);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        controller: Arc::new(SurveyController::new(config)),
        exports: Arc::new(ExportService::new(Arc::clone(&storage.exports))),
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Visual Turing Test")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "app=info,services=info,storage=info,ui=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
