use scraper::ElementRef;
use url::Url;

use crate::parse::error::Result;
use crate::parse::text_content::{nth_child_element, text_content};
use crate::parse::{remove_double_spaces, strip_layout_whitespace, Error};

/// One row of the search results table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryEntry {
    name: String,
    link: String,
    area: String,
    state_served: String,
    other_limitation: String,
}

impl DirectoryEntry {
    /// Reads the four positional cells of a `<tr>`: name/link, area, states served, other limitation.
    pub(super) fn from_html_element(row: ElementRef, base_url: &Url) -> Result<Self> {
        let cell = |position: usize, label: &str| {
            nth_child_element(row, "td", position).ok_or_else(|| {
                Error::HtmlParse(format!("directory row is missing its {label} cell"))
            })
        };

        let anchor = nth_child_element(cell(1, "name")?, "a", 1)
            .ok_or_else(|| Error::html_parse_error("name cell does not contain an <a>"))?;
        let href = anchor
            .attr("href")
            .ok_or_else(|| Error::html_parse_error("foundation <a> does not have a href attr"))?;
        let Ok(link) = base_url.join(href) else {
            return Err(Error::HtmlParse(format!("foundation link `{href}` is invalid")));
        };

        Ok(Self {
            name: text_content(anchor),
            link: link.into(),
            area: remove_double_spaces(&strip_layout_whitespace(&text_content(cell(2, "area")?))),
            state_served: strip_layout_whitespace(&text_content(cell(3, "state served")?)),
            other_limitation: strip_layout_whitespace(&text_content(cell(4, "other limitation")?)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn state_served(&self) -> &str {
        &self.state_served
    }

    pub fn other_limitation(&self) -> &str {
        &self.other_limitation
    }

    #[cfg(test)]
    pub fn new(name: &str, link: &str, area: &str, state_served: &str, other_limitation: &str) -> Self {
        Self {
            name: name.to_owned(),
            link: link.to_owned(),
            area: area.to_owned(),
            state_served: state_served.to_owned(),
            other_limitation: other_limitation.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_row(html: &Html) -> ElementRef<'_> {
        crate::static_selector!(ROW_SELECTOR <- "tr");
        html.select(&ROW_SELECTOR).next().expect("fixture has a row")
    }

    fn base() -> Url {
        Url::parse("https://www.wellsfargo.com").unwrap()
    }

    #[test]
    fn test_from_html_element() {
        let html = Html::parse_document(
            r#"<table><tbody><tr>
                <td scope="row"><a href="/private-foundations/alpha-trust/">Alpha Trust</a></td>
                <td>
                    Arts    Education
                </td>
                <td>	North Carolina
                </td>
                <td>
                    None
                </td>
            </tr></tbody></table>"#,
        );
        let entry = DirectoryEntry::from_html_element(first_row(&html), &base()).unwrap();
        assert_eq!(entry.name(), "Alpha Trust");
        assert_eq!(entry.link(), "https://www.wellsfargo.com/private-foundations/alpha-trust/");
        assert_eq!(entry.area(), "ArtsEducation");
        assert_eq!(entry.state_served(), "North Carolina");
        assert_eq!(entry.other_limitation(), "None");
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let html = Html::parse_document(
            r#"<table><tr><td><a href="/x/"> Spaced Name </a></td><td></td><td></td><td></td></tr></table>"#,
        );
        let entry = DirectoryEntry::from_html_element(first_row(&html), &base()).unwrap();
        assert_eq!(entry.name(), " Spaced Name ");
        assert_eq!(entry.area(), "");
    }

    #[test]
    fn test_missing_cell() {
        let html = Html::parse_document(
            r#"<table><tr><td><a href="/x/">Name</a></td><td>Area</td></tr></table>"#,
        );
        let err = DirectoryEntry::from_html_element(first_row(&html), &base()).unwrap_err();
        assert!(err.to_string().contains("state served"));
    }

    #[test]
    fn test_missing_href() {
        let html = Html::parse_document(
            r#"<table><tr><td><a>Name</a></td><td></td><td></td><td></td></tr></table>"#,
        );
        assert!(DirectoryEntry::from_html_element(first_row(&html), &base()).is_err());
    }
}
