use serde::Serialize;

use crate::parse::{DirectoryEntry, FoundationDetails};

/// One exported row: a directory entry merged with the sections of its own detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Foundation {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Link")]
    link: String,
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "State Served")]
    state_served: String,
    #[serde(rename = "Other Limitation")]
    other_limitation: String,
    #[serde(rename = "Overview")]
    overview: String,
    #[serde(rename = "Grant Guidelines")]
    grant_guidelines: String,
    #[serde(rename = "Foundation Information")]
    foundation_information: String,
}

impl Foundation {
    pub const HEADERS: [&'static str; 8] = [
        "Name",
        "Link",
        "Area",
        "State Served",
        "Other Limitation",
        "Overview",
        "Grant Guidelines",
        "Foundation Information",
    ];

    pub fn new(entry: &DirectoryEntry, details: FoundationDetails) -> Self {
        Self {
            name: entry.name().to_owned(),
            link: entry.link().to_owned(),
            area: entry.area().to_owned(),
            state_served: entry.state_served().to_owned(),
            other_limitation: entry.other_limitation().to_owned(),
            overview: details.overview().to_owned(),
            grant_guidelines: details.grant_guidelines().to_owned(),
            foundation_information: details.foundation_information().to_owned(),
        }
    }

    #[cfg(test)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn overview(&self) -> &str {
        &self.overview
    }
}
