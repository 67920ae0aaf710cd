use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::SiftArgs,
    config::{Config, load_config, read_config_file},
    core::{
        Alias, DiscoveredString, UntranslatedSet,
        collect::collect_strings,
        diff::filter_untranslated,
        file_scanner::scan_files,
        parsers::{
            go::{SourceTree, parse_go_file},
            json::{load_catalog, untranslated_path, write_untranslated},
        },
        resolve::{FactoryPattern, resolve_alias},
        templates::scan_templates,
    },
};

/// Outcome of the two discovery passes.
///
/// A corpus without any factory-call assignment is not an error: it simply
/// has nothing to translate yet, which is reported as `AliasNotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Found {
        alias: Alias,
        strings: Vec<DiscoveredString>,
    },
    AliasNotFound,
}

impl Discovery {
    /// Discovered strings: source strings first, then template strings.
    pub fn strings(&self) -> &[DiscoveredString] {
        match self {
            Discovery::Found { strings, .. } => strings,
            Discovery::AliasNotFound => &[],
        }
    }

    pub fn alias(&self) -> Option<&Alias> {
        match self {
            Discovery::Found { alias, .. } => Some(alias),
            Discovery::AliasNotFound => None,
        }
    }
}

/// Run both discovery passes over already parsed sources.
///
/// Pass 1 resolves the alias; pass 2 only starts once it is known. Templates
/// are scanned only when an alias exists, so a corpus without localization
/// calls yields an empty discovery.
pub fn discover(
    trees: &[SourceTree],
    template_files: &[String],
    factory: &FactoryPattern,
) -> Result<Discovery> {
    let Some(alias) = resolve_alias(trees, factory) else {
        return Ok(Discovery::AliasNotFound);
    };

    let mut strings = collect_strings(trees, &alias)?;
    strings.extend(scan_templates(template_files)?);

    Ok(Discovery::Found { alias, strings })
}

/// Parse every source file.
///
/// Files are parsed in parallel; results keep input order and the first
/// failure in that order is the one returned.
pub fn parse_sources(files: &[String]) -> Result<Vec<SourceTree>> {
    let results: Vec<Result<SourceTree>> =
        files.par_iter().map(|file| parse_go_file(file)).collect();
    results.into_iter().collect()
}

/// Everything a sift run produced, for reporting.
#[derive(Debug)]
pub struct SiftResult {
    pub source_files_checked: usize,
    pub template_files_checked: usize,
    pub discovery: Discovery,
    /// Number of entries in the existing catalog.
    pub catalog_size: usize,
    pub untranslated: UntranslatedSet,
    pub output_path: PathBuf,
}

/// Run-level controller.
///
/// Owns the merged configuration and the enumerated input files; `run`
/// drives parsing, discovery, the catalog diff and the output write.
pub struct SiftContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Source files in enumeration order.
    pub source_files: Vec<String>,
    /// Template files in enumeration order.
    pub template_files: Vec<String>,
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
    pub verbose: bool,
}

impl SiftContext {
    /// Create a context from command line arguments.
    ///
    /// The config file is `--config` if given, otherwise the nearest
    /// `.siftrc.json` above the current directory, otherwise defaults.
    pub fn new(args: &SiftArgs) -> Result<Self> {
        let verbose = args.verbose;
        let (Some(source), Some(templates), Some(catalog)) =
            (&args.source, &args.templates, &args.catalog)
        else {
            bail!("Missing arguments: <SOURCE> <TEMPLATES> <CATALOG> are required");
        };

        let config = match &args.config {
            Some(path) => read_config_file(path)?,
            None => {
                let cwd = std::env::current_dir().context("Cannot determine current directory")?;
                let loaded = load_config(&cwd)?;
                if verbose {
                    match &loaded.path {
                        Some(path) => eprintln!("Note: Using config {}", path.display()),
                        None => eprintln!("Note: No .siftrc.json found, using default configuration"),
                    }
                }
                loaded.config
            }
        };

        Self::with_config(
            config,
            source,
            templates,
            catalog,
            args.output.clone(),
            verbose,
        )
    }

    /// Create a context from an explicit configuration.
    pub fn with_config(
        config: Config,
        source: &str,
        templates: &str,
        catalog_path: &Path,
        output_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        config.validate()?;
        let ignores = config.ignore_patterns()?;

        let source_files = scan_files(source, &config.source_extension, &ignores)
            .with_context(|| format!("Failed to enumerate source files: {}", source))?;
        let template_files = scan_files(templates, &config.template_extension, &ignores)
            .with_context(|| format!("Failed to enumerate template files: {}", templates))?;

        if verbose {
            eprintln!(
                "Note: {} source file(s), {} template file(s)",
                source_files.len(),
                template_files.len()
            );
        }

        let output_path = output_path.unwrap_or_else(|| untranslated_path(catalog_path));

        Ok(Self {
            config,
            source_files,
            template_files,
            catalog_path: catalog_path.to_path_buf(),
            output_path,
            verbose,
        })
    }

    /// Parse, discover, diff against the catalog and write the untranslated set.
    pub fn run(&self) -> Result<SiftResult> {
        let trees = parse_sources(&self.source_files)?;
        let discovery = discover(&trees, &self.template_files, &self.config.factory_pattern())?;

        let catalog = load_catalog(&self.catalog_path)?;
        let untranslated = filter_untranslated(&catalog, discovery.strings());
        write_untranslated(&self.output_path, &untranslated)?;

        Ok(SiftResult {
            source_files_checked: self.source_files.len(),
            template_files_checked: self.template_files.len(),
            discovery,
            catalog_size: catalog.len(),
            untranslated,
            output_path: self.output_path.clone(),
        })
    }
}
