//! Preview generator: renders every variant combination to disk.

use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use crate::model::{ErrorInfo, PageInfo, SearchFormInfo, SearchResultsInfo, SiteInfo};
use crate::output::{output_file_name, OutputWriter};
use crate::templates::{TemplateEngine, TemplateKind};
use crate::variations::Variations;

/// Result of a generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Written file names, in enumeration order
    pub files: Vec<String>,

    /// Total generation time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to render {file}: {message}")]
    Render { file: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl GenerateError {
    /// Render failures come from template source, write failures from the
    /// output directory.
    pub fn is_render(&self) -> bool {
        matches!(self, GenerateError::Render { .. })
    }
}

/// A variant label together with its value.
pub type Labelled<'a, T> = (&'a str, &'a T);

/// One selection of variants for one template kind.
#[derive(Debug, Clone, Copy)]
pub struct Combination<'a> {
    pub kind: TemplateKind,
    pub site: Labelled<'a, SiteInfo>,
    pub page: Labelled<'a, PageInfo>,
    pub search_form: Labelled<'a, SearchFormInfo>,
    /// Only set for [`TemplateKind::Search`]
    pub search_results: Option<Labelled<'a, SearchResultsInfo>>,
}

impl Combination<'_> {
    /// Output file name, labels in axis order.
    pub fn file_name(&self) -> String {
        let results_label = self.search_results.map(|(label, _)| label).unwrap_or("");
        output_file_name(
            self.kind,
            &[self.site.0, self.page.0, self.search_form.0, results_label],
        )
    }
}

/// Enumerate site × page × search form, and search results for the search
/// page only. The innermost axis varies fastest.
///
/// The iterator borrows the registry, so calling this again restarts the
/// enumeration from the beginning.
pub fn combinations(variations: &Variations) -> impl Iterator<Item = Combination<'_>> + '_ {
    variations.sites().iter().flat_map(move |site| {
        variations.pages().iter().flat_map(move |page| {
            variations.search_forms().iter().flat_map(move |search_form| {
                let plain = [
                    TemplateKind::Index,
                    TemplateKind::ZeroResults,
                    TemplateKind::Error,
                ]
                .into_iter()
                .map(move |kind| Combination {
                    kind,
                    site,
                    page,
                    search_form,
                    search_results: None,
                });

                let search = variations
                    .search_results()
                    .iter()
                    .map(move |results| Combination {
                        kind: TemplateKind::Search,
                        site,
                        page,
                        search_form,
                        search_results: Some(results),
                    });

                plain.chain(search)
            })
        })
    })
}

/// Renders the full variation matrix into an output directory.
pub struct Generator {
    output: OutputWriter,
    variations: Variations,
    templates: TemplateEngine,
    error: ErrorInfo,
}

impl Generator {
    /// Create a new generator.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        variations: Variations,
        templates: TemplateEngine,
    ) -> Self {
        Self {
            output: OutputWriter::new(output_dir),
            variations,
            templates,
            error: ErrorInfo::default(),
        }
    }

    /// Whether templates are read from a source directory.
    pub fn is_reloading(&self) -> bool {
        self.templates.is_reloading()
    }

    /// Drop cached templates so the next pass sees edits on disk.
    pub fn reload_templates(&mut self) {
        self.templates.reload();
    }

    /// Render and write every combination.
    ///
    /// A write failure is reported ahead of any render failure in the same
    /// pass.
    pub fn generate(&self) -> Result<GenerateReport, GenerateError> {
        let start = Instant::now();

        self.output.prepare()?;

        let jobs: Vec<Combination<'_>> = combinations(&self.variations).collect();

        // Names are unique per combination, so jobs never touch the same file
        let results: Vec<Result<String, GenerateError>> = jobs
            .par_iter()
            .map(|combination| self.generate_one(combination))
            .collect();

        let mut files = Vec::with_capacity(results.len());
        let mut render_error = None;
        for result in results {
            match result {
                Ok(file) => files.push(file),
                Err(e) if e.is_render() => {
                    render_error.get_or_insert(e);
                }
                Err(e) => return Err(e),
            }
        }
        if let Some(e) = render_error {
            return Err(e);
        }

        Ok(GenerateReport {
            files,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.output.root().to_path_buf(),
        })
    }

    fn generate_one(&self, combination: &Combination<'_>) -> Result<String, GenerateError> {
        let file_name = combination.file_name();

        let html = self.render(combination).map_err(|e| GenerateError::Render {
            file: file_name.clone(),
            message: e.to_string(),
        })?;

        let path = self.output.write(&file_name, html.as_bytes())?;
        tracing::debug!("Wrote {}", path.display());

        Ok(file_name)
    }

    fn render(&self, combination: &Combination<'_>) -> Result<String, minijinja::Error> {
        let (_, site) = combination.site;
        let (_, page) = combination.page;
        let (_, search_form) = combination.search_form;

        match (combination.kind, combination.search_results) {
            (TemplateKind::Index, _) => self.templates.render_index(site, page, search_form),
            (TemplateKind::ZeroResults, _) => {
                self.templates.render_zero_results(site, page, search_form)
            }
            (TemplateKind::Error, _) => {
                self.templates.render_error(site, page, search_form, &self.error)
            }
            (TemplateKind::Search, Some((_, results))) => {
                self.templates.render_search(site, page, search_form, results)
            }
            (TemplateKind::Search, None) => Err(minijinja::Error::new(
                minijinja::ErrorKind::UndefinedError,
                "search page rendered without search results",
            )),
        }
    }
}
