//! Rendering parse errors against their source text.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;

/// Render `error` as an annotated snippet of `source`.
pub fn render_parse_error(source: &str, error: &ParseError, color: bool) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_parse_error(source, error, color, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Print `error` to stderr.
pub fn emit_parse_error(source: &str, error: &ParseError) {
    if let Err(err) = write_parse_error(source, error, true, io::stderr()) {
        eprintln!("error: {error} ({err})");
    }
}

fn write_parse_error<W: io::Write>(
    source: &str,
    error: &ParseError,
    color: bool,
    out: W,
) -> io::Result<()> {
    let span = label_range(source, error.span().to_range());
    let mut report = Report::<Range<usize>>::build(ReportKind::Error, (), span.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(error.to_string())
        .with_label(
            Label::new(span)
                .with_message(error.to_string())
                .with_color(Color::Red),
        );

    if let Some((open, note)) = error.related() {
        report = report.with_label(
            Label::new(label_range(source, open.to_range()))
                .with_message(note)
                .with_color(Color::Blue),
        );
    }

    report.finish().write(Source::from(source), out)
}

/// Widen an empty range to the preceding character so it stays visible.
fn label_range(source: &str, range: Range<usize>) -> Range<usize> {
    if range.is_empty() && range.start > 0 && range.start <= source.len() {
        let start = source[..range.start]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        return start..range.start;
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use lispy_parse::parse;

    fn error_for(source: &str) -> ParseError {
        match parse(source) {
            Ok(tree) => panic!("expected a parse error, got {}", tree.dump()),
            Err(err) => err,
        }
    }

    #[test]
    fn test_render_mentions_message() {
        let source = "(+ 1 2";
        let text = render_parse_error(source, &error_for(source), false);
        assert!(text.contains("unclosed '('"), "{text}");
        assert!(text.contains("(+ 1 2"), "{text}");
    }

    #[test]
    fn test_mismatched_close_points_at_opener() {
        let source = "(head {1 2)";
        let text = render_parse_error(source, &error_for(source), false);
        assert!(text.contains("group opened here"), "{text}");
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let source = "; ééé\n)";
        let text = render_parse_error(source, &error_for(source), false);
        assert!(text.contains("unexpected ')' with no matching opener"), "{text}");
        assert_eq!(text.matches("with no matching opener").count(), 2, "{text}");
    }

    #[test]
    fn test_empty_range_widened() {
        assert_eq!(label_range("(+ 1", 4..4), 3..4);
        assert_eq!(label_range("", 0..0), 0..0);
        assert_eq!(label_range("abc", 0..1), 0..1);
    }
}
