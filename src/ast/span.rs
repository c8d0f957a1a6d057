use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Region of the original program text, as `(line, column)` pairs plus the
/// full source the region points into.
#[derive(Default, Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub source: String,
}

impl Span {
    /// Render a message anchored at this span, quoting the offending line
    /// with the error region highlighted.
    pub fn to_string(&self, msg: impl ToString) -> String {
        let Span { start, end, source } = self;
        let msg = msg.to_string();

        let lines = source.lines().collect::<Vec<_>>();
        let line = start.0;

        // spans constructed without source text still produce a usable
        // location prefix
        if line >= lines.len() {
            return format!("{}:{}: {msg}", line + 1, start.1 + 1);
        }

        let line_str = lines[line];
        let prev_line = if line > 0 { lines[line - 1] } else { "" };

        let left_margin = format!("{}", end.0 + 1).len();
        let left_margin_fill = " ".repeat(left_margin);

        let split_at = start.1.min(line_str.len());
        let (left, right) = line_str.split_at(split_at);

        let line_str = if start.0 != end.0 {
            // multi-line regions highlight the rest of the first line
            format!("{left}{}", right.red())
        } else {
            let err_len = (end.1.saturating_sub(start.1)).min(right.len());
            let (err_str, after_err) = right.split_at(err_len);
            format!("{left}{}{after_err}", err_str.red())
        };

        let mut error_string = format!(
            "{left_margin_fill} |\n{left_margin_fill} |{prev_line}\n{line} |{line_str}",
            line = line + 1
        );

        for line_number in (start.0 + 1)..(end.0 + 1).min(lines.len()) {
            error_string = format!("{error_string}\n{left_margin_fill} |{}", lines[line_number].red());
        }

        let left_padding_fill = " ".repeat(start.1);
        format!("{error_string}\n{left_margin_fill} |{left_padding_fill}^--- {msg}\n{left_margin_fill} |")
    }

    pub fn merge(&self, other: &Span) -> Span {
        let Span { start, source, .. } = self.clone();
        let Span { end, .. } = other.clone();

        Span { start, end, source }
    }
}

impl PartialEq<Span> for Span {
    fn eq(&self, _other: &Span) -> bool {
        // positions never participate in node equality
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn test_spans_compare_equal() {
        let a = Span {
            start: (0, 0),
            end: (0, 3),
            source: "let x = 42".into(),
        };

        assert_eq!(a, Span::default());
    }

    #[test]
    fn test_render_without_source() {
        let rendered = Span {
            start: (2, 4),
            end: (2, 7),
            source: String::new(),
        }
        .to_string("something went wrong");

        assert_eq!(rendered, "3:5: something went wrong");
    }

    #[test]
    fn test_render_quotes_the_offending_line() {
        let rendered = Span {
            start: (1, 8),
            end: (1, 12),
            source: "contract Game\nfield timer : BNum".into(),
        }
        .to_string("boom");

        // the error region may carry color codes; check around it
        assert!(rendered.contains("field ti"));
        assert!(rendered.contains("^--- boom"));
    }
}
