use std::path::PathBuf;

use tracing::info;

use crate::error::TfvarsError;
use crate::file;
use crate::ops::{self, MergeReport, Output};
use crate::parser::Parsers;
use crate::resolve;
use crate::settings::{self, Overrides, Settings};
use crate::types::SkippedFile;

/// Entry point for building a merge run.
pub struct Merger {
    dir: PathBuf,
    settings: Settings,
    parsers: Parsers,
    dry_run: bool,
}

/// Builder for a [`Merger`].
///
/// Everything is optional: with no calls at all the run happens in the
/// current working directory with default settings, which is what the
/// binary does when invoked without arguments.
pub struct MergerBuilder {
    dir: Option<PathBuf>,
    overrides: Overrides,
    settings: Option<Settings>,
    parsers: Parsers,
    dry_run: bool,
}

impl Merger {
    pub fn builder() -> MergerBuilder {
        MergerBuilder::new()
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(&self.settings.output)
    }

    /// Discover, load, merge, write. `on_skip` sees each skipped file as soon
    /// as it is skipped.
    pub fn run_with<F>(&self, on_skip: F) -> Result<MergeReport, TfvarsError>
    where
        F: FnMut(&SkippedFile),
    {
        let paths = file::discover(&self.dir)?;
        let discovered: Vec<String> = paths.iter().map(|p| file::display_name(p)).collect();
        info!(dir = %self.dir.display(), count = paths.len(), "discovered variable files");

        let documents = paths
            .iter()
            .map(|path| (file::display_name(path), file::load_document(path, &self.parsers)));
        let (merged, skipped) = resolve::merge_documents(documents, on_skip)?;

        let output = if self.dry_run {
            Output::Rendered(ops::render(&merged, self.settings.pretty)?)
        } else {
            let path = self.output_path();
            ops::write_output(&path, &merged, self.settings.pretty)?;
            info!(path = %path.display(), keys = merged.len(), "wrote merged variables");
            Output::Written { path }
        };

        Ok(MergeReport {
            discovered,
            skipped,
            keys: merged.keys().cloned().collect(),
            output,
        })
    }

    /// Run without observing skips as they happen; they are still in the report.
    pub fn run(&self) -> Result<MergeReport, TfvarsError> {
        self.run_with(|_| {})
    }

    /// Run and print skip diagnostics and the summary to stdout.
    pub fn run_and_print(&self) -> Result<MergeReport, TfvarsError> {
        let report = self.run_with(|skip| println!("{skip}"))?;
        println!("{report}");
        Ok(report)
    }
}

impl MergerBuilder {
    fn new() -> Self {
        Self {
            dir: None,
            overrides: Overrides::new(),
            settings: None,
            parsers: Parsers::default(),
            dry_run: false,
        }
    }

    /// Directory to discover files in and write the output to (default: CWD).
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Settings overrides, applied on top of the settings file.
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use these settings as-is, skipping the settings file and overrides.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replace the document parsers.
    pub fn parsers(mut self, parsers: Parsers) -> Self {
        self.parsers = parsers;
        self
    }

    /// Render the merged document instead of writing it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve the directory and settings.
    pub fn build(self) -> Result<Merger, TfvarsError> {
        let dir = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| TfvarsError::Discovery {
                path: PathBuf::from("."),
                source: e,
            })?,
        };
        let settings = match self.settings {
            Some(settings) => settings,
            None => settings::load_settings(&dir, &self.overrides)?,
        };

        Ok(Merger {
            dir,
            settings,
            parsers: self.parsers,
            dry_run: self.dry_run,
        })
    }
}
