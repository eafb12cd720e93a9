use scraper::ElementRef;

/// Concatenates every descendant text node of `element`, markup removed.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// The `position`-th (1-based) element child of `parent` named `name`, like XPath's `name[position]`.
pub(super) fn nth_child_element<'a>(
    parent: ElementRef<'a>,
    name: &str,
    position: usize,
) -> Option<ElementRef<'a>> {
    position.checked_sub(1).and_then(|index| {
        parent
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == name)
            .nth(index)
    })
}
