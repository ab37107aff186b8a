use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
});

/// Render a service answer for display. Answers arrive as markdown
/// (e.g. `**Kawira Mwangaza**`); raw HTML in them stays escaped.
pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

// The service emits naive ISO-8601 (`2025-08-31T13:16:36.227707`); RFC 3339
// is accepted too in case the backend grows timezone awareness.
const NAIVE_TIMESTAMP: &[FormatItem<'static>] = format_description!(
    version = 2,
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

const DISPLAY_TIMESTAMP: &[FormatItem<'static>] = format_description!(
    "[day] [month repr:short] [year], [hour repr:12 padding:zero]:[minute] [period case:upper]"
);

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    PrimitiveDateTime::parse(raw, NAIVE_TIMESTAMP)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Service timestamp -> short local-time string. Unparseable input is shown
/// verbatim rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(mut datetime) => {
            if let Ok(offset) = UtcOffset::current_local_offset() {
                datetime = datetime.to_offset(offset);
            }
            datetime
                .format(DISPLAY_TIMESTAMP)
                .unwrap_or_else(|_| raw.to_string())
        }
        None => raw.to_string(),
    }
}

pub fn format_response_time(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_naive_service_timestamp() {
        let parsed = parse_timestamp("2025-08-31T13:16:36.227707").unwrap();
        assert_eq!(parsed, datetime!(2025-08-31 13:16:36.227707 UTC));
    }

    #[test]
    fn test_parse_timestamp_without_subseconds() {
        let parsed = parse_timestamp("2025-08-31T13:16:36").unwrap();
        assert_eq!(parsed, datetime!(2025-08-31 13:16:36 UTC));
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let parsed = parse_timestamp("2025-08-31T13:16:36Z").unwrap();
        assert_eq!(parsed, datetime!(2025-08-31 13:16:36 UTC));
    }

    #[test]
    fn test_unparseable_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_format_response_time() {
        assert_eq!(format_response_time(0), "0ms");
        assert_eq!(format_response_time(999), "999ms");
        assert_eq!(format_response_time(1205), "1.2s");
        assert_eq!(format_response_time(12050), "12.1s");
    }

    #[test]
    fn test_markdown_renders_emphasis_and_escapes_html() {
        let html = markdown_to_html("The governor is **Kawira Mwangaza**.");
        assert!(html.contains("<strong>Kawira Mwangaza</strong>"));

        let escaped = markdown_to_html("<script>alert(1)</script>");
        assert!(!escaped.contains("<script>"));
    }
}
