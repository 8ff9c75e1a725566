//! Template engine for rendering preview pages.

use std::path::{Path, PathBuf};

use minijinja::{context, path_loader, Environment};

use crate::model::{ErrorInfo, PageInfo, SearchFormInfo, SearchResultsInfo, SiteInfo};

/// The page templates the generator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Index,
    ZeroResults,
    Error,
    Search,
}

impl TemplateKind {
    /// Output file name prefix.
    pub fn stem(self) -> &'static str {
        match self {
            TemplateKind::Index => "index",
            TemplateKind::ZeroResults => "zero_results",
            TemplateKind::Error => "error",
            TemplateKind::Search => "search",
        }
    }

    /// Name of the template file.
    pub fn template_name(self) -> &'static str {
        match self {
            TemplateKind::Index => "index.html",
            TemplateKind::ZeroResults => "zero_results.html",
            TemplateKind::Error => "error.html",
            TemplateKind::Search => "search.html",
        }
    }
}

/// Template files compiled into the binary, partials included.
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("search_form.html", include_str!("../templates/search_form.html")),
    ("sidebar.html", include_str!("../templates/sidebar.html")),
    ("recipe.html", include_str!("../templates/recipe.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("zero_results.html", include_str!("../templates/zero_results.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("search.html", include_str!("../templates/search.html")),
];

/// Template engine using minijinja.
///
/// Rendering only borrows the engine, so one engine can serve any number of
/// combinations concurrently.
pub struct TemplateEngine {
    env: Environment<'static>,
    source_dir: Option<PathBuf>,
}

impl TemplateEngine {
    /// Create an engine serving the templates compiled into the binary.
    pub fn embedded() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in EMBEDDED_TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self {
            env,
            source_dir: None,
        })
    }

    /// Create an engine that reads templates from `dir` on first use.
    ///
    /// Call [`TemplateEngine::reload`] to drop cached templates so edits on
    /// disk show up in the next render.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            env: directory_env(&dir),
            source_dir: Some(dir),
        }
    }

    /// Whether templates come from a source directory.
    pub fn is_reloading(&self) -> bool {
        self.source_dir.is_some()
    }

    /// Forget every loaded template. No-op for embedded templates.
    pub fn reload(&mut self) {
        if let Some(dir) = &self.source_dir {
            tracing::debug!("Reloading templates from {}", dir.display());
            self.env = directory_env(dir);
        }
    }

    pub fn render_index(
        &self,
        site: &SiteInfo,
        page: &PageInfo,
        search_form: &SearchFormInfo,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(TemplateKind::Index.template_name())?
            .render(context! { site, page, search_form })
    }

    pub fn render_zero_results(
        &self,
        site: &SiteInfo,
        page: &PageInfo,
        search_form: &SearchFormInfo,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(TemplateKind::ZeroResults.template_name())?
            .render(context! { site, page, search_form })
    }

    pub fn render_error(
        &self,
        site: &SiteInfo,
        page: &PageInfo,
        search_form: &SearchFormInfo,
        error: &ErrorInfo,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(TemplateKind::Error.template_name())?
            .render(context! { site, page, search_form, error })
    }

    pub fn render_search(
        &self,
        site: &SiteInfo,
        page: &PageInfo,
        search_form: &SearchFormInfo,
        results: &SearchResultsInfo,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(TemplateKind::Search.template_name())?
            .render(context! { site, page, search_form, results })
    }
}

fn directory_env(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(dir));
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tablier_samples::SampleRecord;
    use tempfile::tempdir;

    use crate::variations::standard_sidebar;

    fn results(next: bool, previous: bool) -> SearchResultsInfo {
        SearchResultsInfo {
            pagination_start: 1,
            pagination_end: 1,
            num_matching: 1,
            next_page_href: next.then(|| "/next".to_string()),
            previous_page_href: previous.then(|| "/previous".to_string()),
            recipes: vec![SampleRecord {
                name: "Tomato <Soup>".to_string(),
                site_name: "example.com".to_string(),
                crawl_url: "https://example.com/soup".to_string(),
                num_ingredients: 4,
                calories: Some(180),
                total_time: None,
            }],
            sidebar: Arc::new(standard_sidebar()),
        }
    }

    #[test]
    fn renders_index_with_site_and_page() {
        let engine = TemplateEngine::embedded().unwrap();

        let html = engine
            .render_index(
                &SiteInfo::default(),
                &PageInfo::titled("Index"),
                &SearchFormInfo::default(),
            )
            .unwrap();

        assert!(html.contains("<title>Index - gula.recipes</title>"));
        assert!(html.contains("autofocus"));
        assert!(!html.contains("unstable build"));
    }

    #[test]
    fn renders_unstable_banner_and_disabled_form() {
        let engine = TemplateEngine::embedded().unwrap();
        let site = SiteInfo {
            is_unstable: true,
            ..SiteInfo::default()
        };
        let form = SearchFormInfo {
            is_disabled: true,
            is_auto_focus: false,
            ..SearchFormInfo::default()
        };

        let html = engine
            .render_zero_results(&site, &PageInfo::titled("Index"), &form)
            .unwrap();

        assert!(html.contains("unstable build"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("autofocus"));
    }

    #[test]
    fn renders_error_descriptor() {
        let engine = TemplateEngine::embedded().unwrap();

        let html = engine
            .render_error(
                &SiteInfo::default(),
                &PageInfo::titled("Index"),
                &SearchFormInfo::default(),
                &ErrorInfo::default(),
            )
            .unwrap();

        assert!(html.contains("Unknown Error"));
        assert!(html.contains("Hue hue hue hue hue hue?"));
    }

    #[test]
    fn renders_search_results_escaped() {
        let engine = TemplateEngine::embedded().unwrap();

        let html = engine
            .render_search(
                &SiteInfo::default(),
                &PageInfo::titled("Index"),
                &SearchFormInfo::default(),
                &results(true, false),
            )
            .unwrap();

        assert!(html.contains("Tomato &lt;Soup&gt;"));
        assert!(html.contains("180 kcal"));
        assert!(html.contains("Limit Cook Time"));
        assert!(html.contains("pagination-next"));
        assert!(!html.contains("pagination-previous"));
    }

    #[test]
    fn reload_picks_up_edited_templates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "first {{ page.title }}").unwrap();
        let mut engine = TemplateEngine::from_dir(temp.path());
        let site = SiteInfo::default();
        let page = PageInfo::titled("Index");
        let form = SearchFormInfo::default();

        assert_eq!(engine.render_index(&site, &page, &form).unwrap(), "first Index");

        fs::write(temp.path().join("index.html"), "second {{ page.title }}").unwrap();
        engine.reload();

        assert!(engine.is_reloading());
        assert_eq!(engine.render_index(&site, &page, &form).unwrap(), "second Index");
    }

    #[test]
    fn missing_template_is_an_error() {
        let temp = tempdir().unwrap();
        let engine = TemplateEngine::from_dir(temp.path());

        let result = engine.render_index(
            &SiteInfo::default(),
            &PageInfo::titled("Index"),
            &SearchFormInfo::default(),
        );

        assert!(result.is_err());
    }
}
