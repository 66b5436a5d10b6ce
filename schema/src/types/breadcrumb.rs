//! `BreadcrumbList` and `ListItem`.

use crate::validation::{Validate, ValidationReport};

schema_entity! {
    /// One step in a breadcrumb trail.
    pub struct ListItem {
        /// 1-based position in the trail.
        pub position: Option<u32>,
        /// Label shown for this step.
        pub name: Option<String>,
        /// URL of the page this step links to.
        pub item: Option<String>,
    }
}

impl Validate for ListItem {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("position", &self.position);
        report.require("name", &self.name);
        if let Some(position) = self.position {
            report.check("position", position >= 1, "must be 1 or greater");
        }
        report.check_url("item", self.item.as_deref());
    }
}

schema_entity! {
    /// A breadcrumb trail from the site root to the current page.
    pub struct BreadcrumbList {
        /// Trail steps, ordered from the root.
        pub item_list_element: Vec<ListItem>,
    }
}

impl BreadcrumbList {
    /// Builds a trail from `(name, url)` pairs, numbering positions from 1.
    #[must_use]
    pub fn from_trail<I, N, U>(trail: I) -> Self
    where
        I: IntoIterator<Item = (N, U)>,
        N: Into<String>,
        U: Into<String>,
    {
        let item_list_element = trail
            .into_iter()
            .zip(1u32..)
            .map(|((name, url), position)| ListItem {
                position: Some(position),
                name: Some(name.into()),
                item: Some(url.into()),
            })
            .collect();
        Self { item_list_element }
    }
}

impl Validate for BreadcrumbList {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("item_list_element", &self.item_list_element);
        report.nested("item_list_element", &self.item_list_element);
        let in_order = self
            .item_list_element
            .iter()
            .zip(1u32..)
            .all(|(item, expected)| item.position.map_or(true, |p| p == expected));
        report.check("item_list_element", in_order, "positions must run 1, 2, 3, ...");
    }
}
