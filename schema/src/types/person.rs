//! `Person`.

use crate::types::Organization;
use crate::validation::{Validate, ValidationReport};

schema_entity! {
    /// A person, alive or dead.
    pub struct Person {
        /// Full name.
        pub name: Option<String>,
        /// Given name.
        pub given_name: Option<String>,
        /// Family name.
        pub family_name: Option<String>,
        /// Job title, e.g. `Software Engineer`.
        pub job_title: Option<String>,
        /// Contact email.
        pub email: Option<String>,
        /// Portrait image URL.
        pub image: Option<String>,
        /// Home page.
        pub url: Option<String>,
        /// Profile URLs on other sites.
        pub same_as: Vec<String>,
        /// Employer.
        pub works_for: Option<Box<Organization>>,
    }
}

impl Validate for Person {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("name", &self.name);
        report.check_url("image", self.image.as_deref());
        report.check_url("url", self.url.as_deref());
        report.check_urls("same_as", &self.same_as);
        report.nested("works_for", &self.works_for);
    }
}
