//! View models handed to the page templates.

use std::sync::Arc;

use serde::Serialize;
use tablier_samples::SampleRecord;

/// A navigation item in the site header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    /// URL path
    pub href: String,
    /// Display title
    pub title: String,
    /// Whether this is the active page
    pub active: bool,
}

impl NavItem {
    pub fn new(href: &str, title: &str, active: bool) -> Self {
        Self {
            href: href.to_string(),
            title: title.to_string(),
            active,
        }
    }
}

/// Site-wide identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteInfo {
    /// Site title
    pub title: String,
    /// Header navigation
    pub navigation: Vec<NavItem>,
    /// Show the "unstable build" warning banner
    pub is_unstable: bool,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "gula.recipes".to_string(),
            navigation: vec![
                NavItem::new("/", "gula.recipes", true),
                NavItem::new("/about", "About", false),
            ],
            is_unstable: false,
        }
    }
}

/// Per-page metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageInfo {
    /// Page title
    pub title: String,
}

impl PageInfo {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

/// State of the recipe search form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFormInfo {
    /// Form action URL
    pub action: String,
    /// Query input name
    pub input_name: String,
    /// Placeholder text for the query input
    pub placeholder: String,
    /// Pre-filled query
    pub value: String,
    /// Render the form disabled
    pub is_disabled: bool,
    /// Focus the query input on load
    pub is_auto_focus: bool,
}

impl Default for SearchFormInfo {
    fn default() -> Self {
        Self {
            action: "/search".to_string(),
            input_name: "q".to_string(),
            placeholder: "Search for recipes or ingredients".to_string(),
            value: String::new(),
            is_disabled: false,
            is_auto_focus: true,
        }
    }
}

/// One selectable option inside a sidebar filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub name: String,
    pub href: String,
    pub count: u32,
}

/// A named group of filter options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterInfo {
    pub name: String,
    pub options: Vec<FilterOption>,
}

impl FilterInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
        }
    }

    /// Append an option, builder style.
    pub fn option(mut self, name: &str, href: &str, count: u32) -> Self {
        self.options.push(FilterOption {
            name: name.to_string(),
            href: href.to_string(),
            count,
        });
        self
    }
}

/// A way of ordering search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOption {
    /// Display label
    pub name: String,
    /// Sort key sent to the backend
    pub value: String,
    /// Whether this is the current sort
    pub is_active: bool,
}

/// Search results sidebar: sort choices and filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SidebarInfo {
    /// Show per-option match counts
    pub show_counts: bool,
    pub sort_options: Vec<SortOption>,
    pub filters: Vec<FilterInfo>,
}

impl SidebarInfo {
    pub fn sort_option(mut self, name: &str, value: &str, is_active: bool) -> Self {
        self.sort_options.push(SortOption {
            name: name.to_string(),
            value: value.to_string(),
            is_active,
        });
        self
    }

    pub fn filter(mut self, filter: FilterInfo) -> Self {
        self.filters.push(filter);
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultsInfo {
    /// 1-based index of the first result on this page
    pub pagination_start: u32,
    /// 1-based index of the last result on this page
    pub pagination_end: u32,
    /// Total number of matching recipes
    pub num_matching: u32,
    pub next_page_href: Option<String>,
    pub previous_page_href: Option<String>,
    pub recipes: Vec<SampleRecord>,
    /// Shared by every results variant
    pub sidebar: Arc<SidebarInfo>,
}

/// Title and subtitle shown on the error page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub title: String,
    pub subtitle: String,
}

impl Default for ErrorInfo {
    fn default() -> Self {
        Self {
            title: "Unknown Error".to_string(),
            subtitle: "Hue hue hue hue hue hue?".to_string(),
        }
    }
}
