use folio::AbstractContent;

/// Abstract content with the default title and the given body markup.
pub fn with_body(body: &str) -> AbstractContent {
    AbstractContent {
        body: body.to_string(),
        ..Default::default()
    }
}

/// A body long enough to run over several Letter pages.
pub fn long_body(paragraphs: usize) -> String {
    (1..=paragraphs)
        .map(|i| {
            format!(
                "<b>Section {i}:</b> Pixel-Vault lets creators mint, list and trade digital \
                 assets. This sentence is repeated so that every section wraps over several \
                 lines of body text and the document needs more than one page."
            )
        })
        .collect::<Vec<_>>()
        .join("<br/>")
}
