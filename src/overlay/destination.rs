use crate::domain::models::Destination;

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const DEFAULT_DESTINATION_TEMPLATE: &str = "https://www.reddit.com/r/{name}";

/// Builds the destination for `text`. Blank input resolves to nothing.
///
/// The trimmed name is percent-encoded before substitution so that names
/// containing `/`, `?` or `#` cannot change the shape of the URL. No other
/// validation happens here; the destination decides whether a name exists.
#[must_use]
pub fn resolve_destination(text: &str, template: &str) -> Option<Destination> {
    let name = text.trim();
    if name.is_empty() {
        return None;
    }

    let url = template.replace(NAME_PLACEHOLDER, &urlencoding::encode(name));
    Some(Destination {
        name: name.to_string(),
        url,
    })
}
