//! Variation registry: the named variants of every configuration axis.
//!
//! Each axis maps a short label to a fully built variant. Labels are glued
//! into output file names, so the empty label is the baseline and every other
//! label must be unique within its axis.

use std::collections::BTreeMap;
use std::sync::Arc;

use tablier_samples::SampleSet;

use crate::model::{
    FilterInfo, PageInfo, SearchFormInfo, SearchResultsInfo, SidebarInfo, SiteInfo,
};

/// Largest number of sample recipes any results variant displays.
pub const MAX_SAMPLES: usize = 20;

/// Errors raised while assembling the variant tables.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate label '{label}' on the {axis} axis")]
    DuplicateLabel { axis: &'static str, label: String },

    #[error("Only the baseline may use the empty label on the {axis} axis")]
    EmptyLabel { axis: &'static str },
}

/// One independent dimension of presentational state.
#[derive(Debug, Clone)]
pub struct Axis<T> {
    name: &'static str,
    variants: BTreeMap<String, T>,
}

impl<T> Axis<T> {
    /// Create an axis holding only its baseline variant.
    pub fn new(name: &'static str, baseline: T) -> Self {
        let mut variants = BTreeMap::new();
        variants.insert(String::new(), baseline);
        Self { name, variants }
    }

    /// Add a labelled variant.
    pub fn variant(mut self, label: &str, value: T) -> Result<Self, RegistryError> {
        if label.is_empty() {
            return Err(RegistryError::EmptyLabel { axis: self.name });
        }
        if self.variants.contains_key(label) {
            return Err(RegistryError::DuplicateLabel {
                axis: self.name,
                label: label.to_string(),
            });
        }
        self.variants.insert(label.to_string(), value);
        Ok(self)
    }

    pub fn get(&self, label: &str) -> Option<&T> {
        self.variants.get(label)
    }

    /// Variants in label order, baseline first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + Clone {
        self.variants.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}

/// Every axis the preview pipeline varies over.
#[derive(Debug, Clone)]
pub struct Variations {
    sites: Axis<SiteInfo>,
    pages: Axis<PageInfo>,
    search_forms: Axis<SearchFormInfo>,
    search_results: Axis<SearchResultsInfo>,
}

impl Variations {
    pub fn new(
        sites: Axis<SiteInfo>,
        pages: Axis<PageInfo>,
        search_forms: Axis<SearchFormInfo>,
        search_results: Axis<SearchResultsInfo>,
    ) -> Self {
        Self {
            sites,
            pages,
            search_forms,
            search_results,
        }
    }

    /// The hand-written variant tables for the recipe search site.
    pub fn standard(samples: &SampleSet) -> Result<Self, RegistryError> {
        let sites = Axis::new("site", SiteInfo::default()).variant(
            "_unstable",
            SiteInfo {
                is_unstable: true,
                ..SiteInfo::default()
            },
        )?;

        let pages = Axis::new("page", PageInfo::titled("Index"));

        let default_form = SearchFormInfo::default();
        let disabled_form = SearchFormInfo {
            is_disabled: true,
            ..default_form.clone()
        };
        let search_forms = Axis::new("search form", default_form.clone())
            .variant(
                "_nofocus",
                SearchFormInfo {
                    is_auto_focus: false,
                    ..default_form
                },
            )?
            .variant("_disabled", disabled_form.clone())?
            .variant(
                "_disablednofocus",
                SearchFormInfo {
                    is_auto_focus: false,
                    ..disabled_form
                },
            )?;

        let sidebar = Arc::new(standard_sidebar());
        let results_page = |start: u32, end: u32, matching: u32, wanted: usize| SearchResultsInfo {
            pagination_start: start,
            pagination_end: end,
            num_matching: matching,
            next_page_href: None,
            previous_page_href: None,
            recipes: samples.take(wanted),
            sidebar: Arc::clone(&sidebar),
        };

        let search_results = Axis::new("search results", results_page(1, 12, 12, 12))
            .variant(
                "_next",
                SearchResultsInfo {
                    next_page_href: Some("/next".to_string()),
                    ..results_page(1, 20, 21, 20)
                },
            )?
            .variant(
                "_prev",
                SearchResultsInfo {
                    previous_page_href: Some("/previous".to_string()),
                    ..results_page(21, 21, 21, 1)
                },
            )?
            .variant(
                "_both",
                SearchResultsInfo {
                    next_page_href: Some("/next".to_string()),
                    previous_page_href: Some("/previous".to_string()),
                    ..results_page(41, 60, 99, MAX_SAMPLES)
                },
            )?;

        Ok(Self::new(sites, pages, search_forms, search_results))
    }

    pub fn sites(&self) -> &Axis<SiteInfo> {
        &self.sites
    }

    pub fn pages(&self) -> &Axis<PageInfo> {
        &self.pages
    }

    pub fn search_forms(&self) -> &Axis<SearchFormInfo> {
        &self.search_forms
    }

    pub fn search_results(&self) -> &Axis<SearchResultsInfo> {
        &self.search_results
    }
}

/// Sort options and filters shown next to every results page.
pub fn standard_sidebar() -> SidebarInfo {
    SidebarInfo {
        show_counts: true,
        ..SidebarInfo::default()
    }
    .sort_option("Relevance", "noop", true)
    .sort_option("Fastest to Cook", "fc", false)
    .sort_option("Least Ingredients", "li", false)
    .filter(
        FilterInfo::new("Limit Ingredients")
            .option("Less than 5", "#", 12)
            .option("6 to 10", "#", 22)
            .option("More than 10", "#", 4),
    )
    .filter(
        FilterInfo::new("Limit Cook Time")
            .option("Up to 15 minutes", "#", 7)
            .option("15 to 30 minutes", "#", 29)
            .option("30 to 60 minutes", "#", 11)
            .option("One hour or longer", "#", 2),
    )
    .filter(
        FilterInfo::new("Limit Nutrition (per serving)")
            .option("Up to 200 kcal", "#", 2)
            .option("Up to 500 kcal", "#", 29)
            .option("Up to 10g of Fat", "#", 11)
            .option("Up to 30g of Carbs", "#", 23),
    )
}
