//! Product Catalog Viewer - Entry Point

use clap::Parser;
use prodcat::model::SortKey;
use prodcat::state::{reduce, Action, AppState, ViewState};
use prodcat::view::{CatalogStyles, ColorConfig};
use std::path::PathBuf;
use tracing::{error, info};

/// Product Catalog Viewer - browse products by owner, name and category
#[derive(Parser, Debug)]
#[command(name = "prodcat")]
#[command(version)]
#[command(about = "TUI application for browsing a product catalog")]
pub struct Args {
    /// Path to a JSON catalog (uses the built-in catalog if not provided)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start sorted ascending on a column (id, name, category, user)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::parse(raw).ok_or_else(|| format!("unknown column '{raw}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = prodcat::config::resolve(
        args.config.clone(),
        args.data.clone(),
        args.search.clone(),
        args.no_color,
    )?;

    prodcat::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = prodcat::source::CatalogSource::detect(config.data_path.clone());
    let raw = source.load().inspect_err(|e| error!(error = %e, "failed to load catalog"))?;
    let catalog = prodcat::catalog::join(raw)
        .inspect_err(|e| error!(error = %e, "catalog failed integrity check"))?;

    info!(
        users = catalog.users().len(),
        categories = catalog.categories().len(),
        products = catalog.products().len(),
        "catalog ready"
    );

    let view = initial_view(config.initial_search, args.sort);
    let styles = CatalogStyles::with_color_config(ColorConfig::new(config.color));

    prodcat::view::run_with_state(AppState::with_view(catalog, view), styles)
        .inspect_err(|e| error!(error = %e, "terminal error"))?;

    Ok(())
}

/// View state at startup: the configured search term and optional sort.
fn initial_view(search: Option<String>, sort: Option<SortKey>) -> ViewState {
    let mut view = ViewState::default();
    if let Some(text) = search {
        view = reduce(view, Action::SetSearch(text));
    }
    if let Some(key) = sort {
        view = reduce(view, Action::ToggleSort(key));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use prodcat::state::SortIndicator;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["prodcat", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["prodcat", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["prodcat"]);
        assert_eq!(args.data, None);
        assert_eq!(args.search, None);
        assert_eq!(args.sort, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_data_path() {
        let args = Args::parse_from(["prodcat", "--data", "catalog.json"]);
        assert_eq!(args.data, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_search_short_flag() {
        let args = Args::parse_from(["prodcat", "-s", "milk"]);
        assert_eq!(args.search, Some("milk".to_string()));
    }

    #[test]
    fn test_search_long_flag() {
        let args = Args::parse_from(["prodcat", "--search", "bread"]);
        assert_eq!(args.search, Some("bread".to_string()));
    }

    #[test]
    fn test_sort_accepts_column_names() {
        let args = Args::parse_from(["prodcat", "--sort", "Product"]);
        assert_eq!(args.sort, Some(SortKey::Name));
    }

    #[test]
    fn test_sort_invalid_rejects() {
        let result = Args::try_parse_from(["prodcat", "--sort", "price"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["prodcat", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["prodcat", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_initial_view_applies_search_and_sort() {
        let view = initial_view(Some("an".to_string()), Some(SortKey::User));
        assert_eq!(view.filter.search(), "an");
        assert_eq!(view.sort.indicator(SortKey::User), SortIndicator::Ascending);
    }

    #[test]
    fn test_initial_view_defaults_to_reset_state() {
        assert_eq!(initial_view(None, None), ViewState::default());
    }

    #[test]
    fn test_search_flows_through_config_precedence_chain() {
        use prodcat::config::loader::{apply_cli_overrides, merge_config};
        use prodcat::config::ConfigFile;

        let file = ConfigFile {
            initial_search: Some("milk".to_string()),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(file));
        assert_eq!(merged.initial_search.as_deref(), Some("milk"));

        let with_cli = apply_cli_overrides(merged, None, Some("beer".to_string()), false);
        assert_eq!(
            with_cli.initial_search.as_deref(),
            Some("beer"),
            "CLI search should override the config file"
        );
    }
}
