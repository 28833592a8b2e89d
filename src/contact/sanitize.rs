use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"<script\b.*?</script>")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("script block pattern is valid")
});

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Strips embedded markup from user text before it reaches the email template.
///
/// Removes `<script>` blocks (contents included), then every remaining tag, then
/// surrounding whitespace. Entities are left encoded and malformed markup only
/// gets a single pass; this is not an HTML sanitizer.
pub fn sanitize(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(input, "");
    let without_tags = MARKUP_TAG.replace_all(&without_scripts, "");
    without_tags.trim().to_string()
}
