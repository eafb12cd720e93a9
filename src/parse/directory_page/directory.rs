use std::slice::Iter;

use scraper::ElementRef;
use url::Url;

use super::directory_entry::DirectoryEntry;
use crate::parse::error::Result;
use crate::parse::text_content::nth_child_element;
use crate::{parse::Error, static_selector};

/// The rendered search results: one entry per foundation link, in page order.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Rows are located by position (`/html/body/div[1]/div[3]/div/div[1]/table/tbody/tr[i + 2]`),
    /// one for every `td[scope=row] > a` link on the page. The first row is the header.
    pub fn from_html_element(element: ElementRef, base_url: &Url) -> Result<Self> {
        static_selector!(LINK_SELECTOR <- r#"td[scope="row"] > a"#);
        static_selector!(TABLE_SELECTOR <- "body > div:nth-of-type(1) > div:nth-of-type(3) > div > div:nth-of-type(1) > table");

        let link_count = element.select(&LINK_SELECTOR).count();
        if link_count == 0 {
            return Ok(Self::default());
        }

        let Some(table) = element.select(&TABLE_SELECTOR).next() else {
            return Err(Error::html_parse_error("Directory table not found"));
        };
        let Some(tbody) = nth_child_element(table, "tbody", 1) else {
            return Err(Error::html_parse_error("Directory table has no tbody"));
        };

        let mut entries = Vec::with_capacity(link_count);
        for i in 0..link_count {
            let row = nth_child_element(tbody, "tr", i + 2).ok_or_else(|| {
                Error::HtmlParse(format!(
                    "Directory table has {link_count} foundation links but no row {}",
                    i + 2
                ))
            })?;
            entries.push(DirectoryEntry::from_html_element(row, base_url)?);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(DirectoryEntry::link)
    }
}

impl IntoIterator for Directory {
    type Item = DirectoryEntry;
    type IntoIter = std::vec::IntoIter<DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<DirectoryEntry> for Directory {
    fn from_iter<T: IntoIterator<Item = DirectoryEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
