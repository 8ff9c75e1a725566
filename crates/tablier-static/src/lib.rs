//! Preview generator for the recipe search templates.
//!
//! Enumerates every combination of site, page, search form and search result
//! variants, renders each through the page templates, and writes one HTML file
//! per combination.

pub mod generator;
pub mod model;
pub mod output;
pub mod templates;
pub mod variations;

pub use generator::{combinations, Combination, GenerateError, GenerateReport, Generator};
pub use model::{
    ErrorInfo, FilterInfo, FilterOption, NavItem, PageInfo, SearchFormInfo, SearchResultsInfo,
    SidebarInfo, SiteInfo, SortOption,
};
pub use output::{output_file_name, OutputWriter};
pub use templates::{TemplateEngine, TemplateKind};
pub use variations::{standard_sidebar, Axis, RegistryError, Variations, MAX_SAMPLES};
