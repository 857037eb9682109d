/// Turns entity-encoded source text into what a reader should see.
///
/// Named, decimal and hex entities from the full HTML set are resolved. Literal
/// `<`, `>`, line breaks and spaces already present in the input are kept as-is,
/// and non-breaking spaces come out as ordinary spaces.
///
/// Only terminated entities are decoded: legacy forms without the trailing
/// semicolon (`&amp`, `&eacute`) and the null reference `&#0;` pass through
/// untouched.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text)
        .chars()
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect()
}
