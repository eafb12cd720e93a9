use scraper::{ElementRef, Html, Selector};

use crate::parse::error::Result;
use crate::parse::{strip_layout_whitespace, text_content, Error};
use crate::static_selector;

/// The narrative sections of a foundation's profile page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FoundationDetails {
    overview: String,
    grant_guidelines: String,
    foundation_information: String,
}

impl FoundationDetails {
    /// Parses a fetched page. Only a blank document is an error; missing sections are not.
    pub fn from_page(page: &str) -> Result<Self> {
        if page.trim().is_empty() {
            return Err(Error::html_parse_error("Document is empty"));
        }
        let document = Html::parse_document(page);
        Ok(Self::from_html_element(document.root_element()))
    }

    /// Never fails: a section that is absent from the page is left empty.
    pub fn from_html_element(element: ElementRef) -> Self {
        static_selector!(OVERVIEW_SELECTOR <- "#overview");
        static_selector!(GRANT_GUIDELINES_SELECTOR <- "#grantguidelines");
        static_selector!(FOUNDATION_INFORMATION_SELECTOR <- "#foundationinformation");

        Self {
            overview: section_text(element, &OVERVIEW_SELECTOR),
            grant_guidelines: section_text(element, &GRANT_GUIDELINES_SELECTOR),
            foundation_information: section_text(element, &FOUNDATION_INFORMATION_SELECTOR),
        }
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn grant_guidelines(&self) -> &str {
        &self.grant_guidelines
    }

    pub fn foundation_information(&self) -> &str {
        &self.foundation_information
    }

    #[cfg(test)]
    pub fn new(overview: &str, grant_guidelines: &str, foundation_information: &str) -> Self {
        Self {
            overview: overview.to_owned(),
            grant_guidelines: grant_guidelines.to_owned(),
            foundation_information: foundation_information.to_owned(),
        }
    }
}

fn section_text(element: ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next() // first match
        .map(|section| strip_layout_whitespace(&text_content(section)))
        .unwrap_or_default()
}
