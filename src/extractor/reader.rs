use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static CONTAINER_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ["article", "main", "body"]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Paragraph text of the page's main container, one paragraph per block.
///
/// The container is the first non-empty `<article>`, then `<main>`, then
/// `<body>`. When it holds no `<p>` elements its whole visible text is
/// returned instead.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Some(container) = find_container(&document) else {
        return String::new();
    };

    let paragraphs: Vec<String> = container
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| collapse_whitespace(&visible_text(p)))
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        return collapse_whitespace(&visible_text(container));
    }

    paragraphs.join("\n\n")
}

fn find_container(document: &Html) -> Option<ElementRef<'_>> {
    CONTAINER_SELECTORS.iter().find_map(|selector| {
        document
            .select(selector)
            .find(|el| !collapse_whitespace(&visible_text(*el)).is_empty())
    })
}

fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
            out.push(' ');
        }
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
