//! `WebSite` and its sitelinks `SearchAction`.

use crate::validation::{Validate, ValidationReport};

/// Placeholder that marks where the search term goes in a `SearchAction` target.
const SEARCH_TERM_PLACEHOLDER: &str = "{search_term_string}";

schema_entity! {
    /// A site search box action.
    ///
    /// `query_input` serializes under the hyphenated key `query-input`, as the
    /// schema.org vocabulary spells it.
    pub struct SearchAction {
        /// URL template, e.g. `https://example.com/search?q={search_term_string}`.
        pub target: Option<String>,
        /// Input declaration, e.g. `required name=search_term_string`.
        pub query_input: Option<String>,
    }
}

impl Validate for SearchAction {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("target", &self.target);
        report.require("query_input", &self.query_input);
        if let Some(target) = self.target.as_deref() {
            report.check(
                "target",
                target.contains(SEARCH_TERM_PLACEHOLDER),
                format!("must contain {SEARCH_TERM_PLACEHOLDER}"),
            );
        }
    }
}

schema_entity! {
    /// A web site.
    pub struct WebSite {
        /// Site name.
        pub name: Option<String>,
        /// Alternate site name.
        pub alternate_name: Option<String>,
        /// Canonical home page.
        pub url: Option<String>,
        /// Site search action.
        pub potential_action: Option<SearchAction>,
    }
}

impl Validate for WebSite {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("name", &self.name);
        report.require("url", &self.url);
        report.check_url("url", self.url.as_deref());
        report.nested("potential_action", &self.potential_action);
    }
}
