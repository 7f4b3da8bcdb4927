use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trip_config::catalog::{CatalogError, StaticCatalog, StationCatalog};
use trip_config::domain::Mode;
use trip_config::options::line_label;
use trip_config::presets::{self, PresetError};
use trip_config::session::Selector;
use trip_config::settings::Settings;

#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Presets(#[from] PresetError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid settings");
            return ExitCode::FAILURE;
        }
    };

    match check(&settings) {
        Ok(0) => {
            info!("all presets match the catalog");
            ExitCode::SUCCESS
        }
        Ok(failed) => {
            warn!(failed, "some presets do not match the catalog");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "check failed");
            ExitCode::FAILURE
        }
    }
}

/// Load the catalog and presets and report presets that drift.
///
/// Returns the number of presets with problems.
fn check(settings: &Settings) -> Result<usize, CheckError> {
    info!(path = %settings.catalog_path.display(), "loading station catalog");
    let catalog = StaticCatalog::load(&settings.catalog_path)?;

    let today = Local::now().date_naive();
    for mode in [Mode::Subway, Mode::Bus] {
        let lines = catalog.lines_for_mode(mode);
        let dates = settings.date_windows.available_dates(mode, today);
        info!(
            %mode,
            lines = lines.len(),
            first_date = %dates.first,
            last_date = %dates.last,
            "catalog namespace"
        );
    }

    let specs = match &settings.presets_path {
        Some(path) => presets::load_specs(path)?,
        None => presets::builtin_specs(),
    };

    let mut failed = 0;
    for spec in &specs {
        let preset = match spec.resolve(&catalog) {
            Ok(preset) => preset,
            Err(e) => {
                warn!(error = %e, "preset does not resolve");
                failed += 1;
                continue;
            }
        };

        let mut selector = Selector::new(&catalog);
        selector.apply_preset(&preset);
        let config = selector.configuration();

        let mut problems: Vec<String> = selector.drift().iter().map(ToString::to_string).collect();
        if config.from.is_none() || config.to.is_none() {
            problems.push("missing endpoint".to_string());
        }

        let dates = selector.available_dates(&settings.date_windows, today);
        for date in [&config.date_start, &config.date_end].into_iter().flatten() {
            if !dates.contains_str(date) {
                problems.push(format!("date {date} is outside {}..{}", dates.first, dates.last));
            }
        }

        if problems.is_empty() {
            let line = config
                .line
                .as_ref()
                .map(|l| line_label(config.mode(), l))
                .unwrap_or_default();
            info!(
                preset = %preset.label,
                %line,
                range = selector.show_date_end_picker(),
                "preset ok"
            );
        } else {
            for problem in &problems {
                warn!(preset = %preset.label, %problem, "preset problem");
            }
            failed += 1;
        }
    }

    Ok(failed)
}
