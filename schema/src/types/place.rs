//! `Place` and `PostalAddress`.

use crate::validation::{Validate, ValidationReport};

schema_entity! {
    /// A mailing address.
    pub struct PostalAddress {
        /// Street name and number, e.g. `1600 Amphitheatre Pkwy`.
        pub street_address: Option<String>,
        /// City or town.
        pub address_locality: Option<String>,
        /// State, province or region.
        pub address_region: Option<String>,
        /// Postal or ZIP code.
        pub postal_code: Option<String>,
        /// Country name or ISO 3166-1 alpha-2 code.
        pub address_country: Option<String>,
    }
}

impl Validate for PostalAddress {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("street_address", &self.street_address);
        report.require("address_locality", &self.address_locality);
        report.require("address_region", &self.address_region);
        report.require("postal_code", &self.postal_code);
    }
}

schema_entity! {
    /// A physical location, such as an event venue.
    pub struct Place {
        /// Venue name.
        pub name: Option<String>,
        /// Where the place is.
        pub address: Option<PostalAddress>,
        /// Venue web page.
        pub url: Option<String>,
    }
}

impl Validate for Place {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("address", &self.address);
        report.nested("address", &self.address);
        report.check_url("url", self.url.as_deref());
    }
}
