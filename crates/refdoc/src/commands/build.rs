//! `refdoc build` command implementation.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use refdoc_catalog::{Catalog, CatalogBuilder, SymbolGraph};
use refdoc_config::{CliSettings, Config};
use refdoc_sections::Document;
use refdoc_site::{Generator, GeneratorConfig, OutputSet, PageFailure};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Symbol graph JSON file (overrides config).
    #[arg(short, long)]
    symbols: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Static asset directory copied into the output (overrides config).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Emit page content only, without the HTML template.
    #[arg(long)]
    bare: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Markdown files or glob patterns (overrides config).
    documents: Vec<String>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or inputs cannot be loaded, the
    /// output cannot be written, or any page failed to generate.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            symbols: self.symbols,
            documents: (!self.documents.is_empty()).then_some(self.documents),
            output_dir: self.output,
            bare_html: self.bare.then_some(true),
            assets_dir: self.assets,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }
        output.info(&format!(
            "Output directory: {}",
            config.output_resolved.dir.display()
        ));

        let summary = build_site(&config)?;

        if !summary.assets_copied {
            output.warning(&format!(
                "Asset directory not found, skipped: {}",
                config.assets_resolved.dir.display()
            ));
        }
        for failure in &summary.failures {
            output.warning(&format!(
                "Skipped page '{}' ({}): {}",
                failure.title, failure.path, failure.error
            ));
        }
        if !summary.failures.is_empty() {
            return Err(CliError::PagesFailed(summary.failures.len()));
        }

        output.success(&format!(
            "Generated {} pages ({} types, {} documents)",
            summary.pages, summary.types, summary.documents
        ));
        Ok(())
    }
}

/// Result of a site build.
#[derive(Debug)]
pub(crate) struct BuildSummary {
    pub pages: usize,
    pub types: usize,
    pub documents: usize,
    pub failures: Vec<PageFailure>,
    pub assets_copied: bool,
}

/// Load inputs, generate every page, write the output and copy assets.
pub(crate) fn build_site(config: &Config) -> Result<BuildSummary, CliError> {
    let catalog = load_catalog(config.input_resolved.symbols.as_deref())?;
    let documents = load_documents(&config.input_resolved.documents)?;

    let generator = Generator::new(
        &catalog,
        &documents,
        GeneratorConfig {
            bare_html: config.output_resolved.bare_html,
        },
    );
    let mut output = OutputSet::new();
    let report = generator.generate(&mut output);

    output.write_to(&config.output_resolved.dir)?;
    let assets_copied = copy_assets(&config.assets_resolved.dir, &config.output_resolved.dir)?;

    Ok(BuildSummary {
        pages: report.pages,
        types: catalog.type_count(),
        documents: documents.len(),
        failures: report.failures,
        assets_copied,
    })
}

/// Read and merge the symbol graph; an unset path yields an empty catalog.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        tracing::info!("No symbol graph configured, generating documents only");
        return Ok(CatalogBuilder::new().build());
    };

    let json = fs::read_to_string(path)?;
    let graph = SymbolGraph::from_json(&json)?;
    Ok(CatalogBuilder::from_graph(graph).build())
}

/// Read every markdown file matched by `patterns`, titled by file stem.
fn load_documents(patterns: &[String]) -> Result<Vec<Document>, CliError> {
    let mut paths = BTreeSet::new();
    for pattern in patterns {
        let mut matched = 0usize;
        for entry in glob::glob(pattern)? {
            let path = entry.map_err(std::io::Error::from)?;
            if path.is_file() {
                matched += 1;
                paths.insert(path);
            }
        }
        if matched == 0 {
            tracing::warn!(pattern = %pattern, "Document pattern matched no files");
        }
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)?;
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), title = %title, "Loaded document");
        documents.push(Document::from_markdown(title, &text));
    }
    Ok(documents)
}

/// Copy the asset directory into `dest`, returning `false` if it is missing.
fn copy_assets(src: &Path, dest: &Path) -> std::io::Result<bool> {
    if !src.is_dir() {
        tracing::warn!(path = %src.display(), "Asset directory not found, skipping copy");
        return Ok(false);
    }

    let mut pending = vec![(src.to_path_buf(), dest.to_path_buf())];
    while let Some((from, to)) = pending.pop() {
        fs::create_dir_all(&to)?;
        for entry in fs::read_dir(&from)? {
            let entry = entry?;
            let target = to.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                pending.push((entry.path(), target));
            } else {
                fs::copy(entry.path(), &target)?;
            }
        }
    }
    tracing::info!(from = %src.display(), to = %dest.display(), "Copied assets");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SYMBOLS: &str = r#"{
        "root": {
            "namespaces": [{
                "name": "Acme",
                "types": [
                    { "name": "Widget", "kind": "class", "documentation": "A widget." }
                ]
            }]
        }
    }"#;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("symbols.json"), SYMBOLS).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/Guide.md"), "# Intro\n\nHello.\n").unwrap();
        fs::write(root.join("docs/notes.txt"), "ignored").unwrap();
        fs::create_dir_all(root.join("bootstrap/css")).unwrap();
        fs::write(root.join("bootstrap/css/bootstrap.css"), "body {}").unwrap();
        fs::write(
            root.join("refdoc.toml"),
            "[input]\nsymbols = \"symbols.json\"\ndocuments = [\"docs/*.md\"]\n",
        )
        .unwrap();
        dir
    }

    fn load_config(dir: &tempfile::TempDir) -> Config {
        let path = dir.path().join("refdoc.toml");
        Config::load(Some(&path), None).unwrap()
    }

    #[test]
    fn test_build_site_writes_pages_and_assets() {
        let dir = project();
        let config = load_config(&dir);

        let summary = build_site(&config).unwrap();

        assert!(summary.failures.is_empty());
        assert!(summary.assets_copied);
        assert_eq!(summary.types, 1);
        assert_eq!(summary.documents, 1);
        // index, listing, root and Acme namespaces, type, document
        assert_eq!(summary.pages, 6);

        let site = dir.path().join("site");
        for page in [
            "index.html",
            "Namespaces.html",
            "namespaces/Acme.html",
            "namespaces/root.html",
            "classes/Acme/Widget.html",
            "Guide.html",
            "css/bootstrap.css",
        ] {
            assert!(site.join(page).is_file(), "missing {page}");
        }
        let index = fs::read_to_string(site.join("index.html")).unwrap();
        assert!(index.contains("<a href='Guide.html'>Guide</a>"));
    }

    #[test]
    fn test_missing_assets_are_skipped() {
        let dir = project();
        fs::remove_dir_all(dir.path().join("bootstrap")).unwrap();
        let config = load_config(&dir);

        let summary = build_site(&config).unwrap();

        assert!(!summary.assets_copied);
        assert!(dir.path().join("site/index.html").is_file());
    }

    #[test]
    fn test_invalid_symbol_graph() {
        let dir = project();
        fs::write(dir.path().join("symbols.json"), "{ not json").unwrap();
        let config = load_config(&dir);

        let err = build_site(&config).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_load_documents_deduplicates_and_sorts() {
        let dir = project();
        fs::write(dir.path().join("docs/Api.md"), "# Api\n").unwrap();
        let patterns = vec![
            format!("{}/docs/*.md", dir.path().display()),
            format!("{}/docs/Guide.md", dir.path().display()),
        ];

        let documents = load_documents(&patterns).unwrap();
        let titles: Vec<&str> = documents.iter().map(|d| d.title.as_str()).collect();

        assert_eq!(titles, vec!["Api", "Guide"]);
    }

    #[test]
    fn test_load_catalog_without_symbols() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.type_count(), 0);
    }
}
