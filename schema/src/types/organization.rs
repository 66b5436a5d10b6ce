//! `Organization` and `ContactPoint`.

use crate::model::ToAttributeValue;
use crate::types::{Person, Place, PostalAddress};
use crate::validation::{Validate, ValidationReport};

schema_entity! {
    /// A way to reach an organization, e.g. a customer service line.
    pub struct ContactPoint {
        /// Phone number, preferably in international format.
        pub telephone: Option<String>,
        /// Email address.
        pub email: Option<String>,
        /// Purpose of the contact point, e.g. `customer support`.
        pub contact_type: Option<String>,
        /// Regions served, e.g. `US`, `CA`.
        pub area_served: Vec<String>,
        /// Languages spoken.
        pub available_language: Vec<String>,
    }
}

impl Validate for ContactPoint {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("contact_type", &self.contact_type);
        let reachable = !self.telephone.to_attribute_value().is_blank()
            || !self.email.to_attribute_value().is_blank();
        report.check("telephone", reachable, "telephone or email is required");
    }
}

schema_entity! {
    /// An organization such as a company, school or club.
    pub struct Organization {
        /// Common name.
        pub name: Option<String>,
        /// Registered legal name.
        pub legal_name: Option<String>,
        /// Home page.
        pub url: Option<String>,
        /// Logo image URL.
        pub logo: Option<String>,
        /// Contact email.
        pub email: Option<String>,
        /// Main phone number.
        pub telephone: Option<String>,
        /// Slogan or motto.
        pub slogan: Option<String>,
        /// ISO 8601 founding date.
        pub founding_date: Option<String>,
        /// Founder.
        pub founder: Option<Person>,
        /// Where the organization was founded.
        pub founding_location: Option<Place>,
        /// Headquarters address.
        pub address: Option<PostalAddress>,
        /// Contact points.
        pub contact_point: Vec<ContactPoint>,
        /// Profile URLs on other sites.
        pub same_as: Vec<String>,
    }
}

impl Validate for Organization {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("name", &self.name);
        report.require("url", &self.url);
        report.check_url("url", self.url.as_deref());
        report.check_url("logo", self.logo.as_deref());
        report.check_urls("same_as", &self.same_as);
        report.nested("founder", &self.founder);
        report.nested("founding_location", &self.founding_location);
        report.nested("address", &self.address);
        report.nested("contact_point", &self.contact_point);
    }
}
