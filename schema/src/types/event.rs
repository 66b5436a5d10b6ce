//! `Event`.

use crate::types::{Offer, Organization, Person, Place};
use crate::validation::{Validate, ValidationReport};

schema_entity! {
    /// An event happening at a certain time and location.
    pub struct Event {
        /// Event name.
        pub name: Option<String>,
        /// ISO 8601 start date or date-time.
        pub start_date: Option<String>,
        /// ISO 8601 end date or date-time.
        pub end_date: Option<String>,
        /// Short description.
        pub description: Option<String>,
        /// Event web page.
        pub url: Option<String>,
        /// Image URLs.
        pub image: Vec<String>,
        /// Status IRI, e.g. `https://schema.org/EventScheduled`.
        pub event_status: Option<String>,
        /// Attendance mode IRI, e.g. `https://schema.org/OfflineEventAttendanceMode`.
        pub event_attendance_mode: Option<String>,
        /// Venue.
        pub location: Option<Place>,
        /// Performers, in billing order.
        pub performer: Vec<Person>,
        /// Organizer.
        pub organizer: Option<Organization>,
        /// Ticket offers.
        pub offers: Vec<Offer>,
    }
}

impl Validate for Event {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("name", &self.name);
        report.require("start_date", &self.start_date);
        report.require("location", &self.location);
        report.check_url("url", self.url.as_deref());
        report.check_urls("image", &self.image);
        report.nested("location", &self.location);
        report.nested("performer", &self.performer);
        report.nested("organizer", &self.organizer);
        report.nested("offers", &self.offers);
    }
}
