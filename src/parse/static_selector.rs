use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use and shared for the life of the process.
#[derive(Debug)]
pub(super) struct StaticSelector<'a> {
    cell: OnceLock<Selector>,
    selector: &'a str,
}

impl<'a> StaticSelector<'a> {
    pub(super) const fn new(selector: &'a str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }

    pub(super) const fn source(&self) -> &'a str {
        self.selector
    }
}

impl core::ops::Deref for StaticSelector<'_> {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // selectors are literals, so a parse failure is a programming error
        self.cell
            .get_or_init(|| match Selector::parse(self.source()) {
                Ok(sel) => sel,
                Err(e) => panic!("invalid static selector `{}`: {e:?}", self.source()),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
