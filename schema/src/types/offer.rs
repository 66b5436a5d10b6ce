//! Commerce types: `Offer`, `AggregateOffer` and `Product`.

use serde_json::Number;

use crate::types::Organization;
use crate::validation::{is_currency_code, Validate, ValidationReport};

schema_entity! {
    /// An offer to sell or provide something, such as a ticket.
    pub struct Offer {
        /// Offer price. Integer prices stay integers in the output.
        pub price: Option<Number>,
        /// ISO 4217 currency code of the price.
        pub price_currency: Option<String>,
        /// Availability IRI, e.g. `https://schema.org/InStock`.
        pub availability: Option<String>,
        /// Where the offer can be taken up.
        pub url: Option<String>,
        /// ISO 8601 date the offer becomes valid.
        pub valid_from: Option<String>,
    }
}

impl Validate for Offer {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("price", &self.price);
        report.require("price_currency", &self.price_currency);
        check_price(report, "price", self.price.as_ref());
        check_currency(report, self.price_currency.as_deref());
        report.check_url("url", self.url.as_deref());
    }
}

schema_entity! {
    /// A range of offers for the same item.
    pub struct AggregateOffer {
        /// Lowest price of all offers.
        pub low_price: Option<Number>,
        /// Highest price of all offers.
        pub high_price: Option<Number>,
        /// ISO 4217 currency code of both prices.
        pub price_currency: Option<String>,
        /// Number of offers.
        pub offer_count: Option<u32>,
        /// The individual offers.
        pub offers: Vec<Offer>,
    }
}

impl Validate for AggregateOffer {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("low_price", &self.low_price);
        report.require("price_currency", &self.price_currency);
        check_price(report, "low_price", self.low_price.as_ref());
        check_price(report, "high_price", self.high_price.as_ref());
        let low = self.low_price.as_ref().and_then(Number::as_f64);
        let high = self.high_price.as_ref().and_then(Number::as_f64);
        if let (Some(low), Some(high)) = (low, high) {
            report.check("high_price", high >= low, "must not be below low_price");
        }
        check_currency(report, self.price_currency.as_deref());
        report.nested("offers", &self.offers);
    }
}

schema_entity! {
    /// A product or service offered for sale.
    pub struct Product {
        /// Product name.
        pub name: Option<String>,
        /// Product description.
        pub description: Option<String>,
        /// Product image URLs.
        pub image: Vec<String>,
        /// Stock keeping unit.
        pub sku: Option<String>,
        /// Brand or manufacturer.
        pub brand: Option<Organization>,
        /// Offers for this product.
        pub offers: Vec<Offer>,
    }
}

impl Validate for Product {
    fn collect_issues(&self, report: &mut ValidationReport) {
        report.require("name", &self.name);
        report.check_urls("image", &self.image);
        report.nested("brand", &self.brand);
        report.nested("offers", &self.offers);
    }
}

fn check_price(report: &mut ValidationReport, attribute: &str, price: Option<&Number>) {
    if let Some(price) = price {
        let non_negative = price.as_f64().is_some_and(|p| p >= 0.0);
        report.check(attribute, non_negative, "must be a non-negative number");
    }
}

fn check_currency(report: &mut ValidationReport, code: Option<&str>) {
    if let Some(code) = code.filter(|c| !c.trim().is_empty()) {
        report.check(
            "price_currency",
            is_currency_code(code),
            format!("`{code}` is not an ISO 4217 currency code"),
        );
    }
}
