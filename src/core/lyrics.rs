//! Lyrics reformatter: three mutually exclusive spacing transforms plus an
//! optional source-citation suffix.

use regex::Regex;
use std::sync::OnceLock;

fn blank_run_3plus() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

fn blank_run_2plus() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").expect("valid regex"))
}

/// Reformats lyrics according to `option`:
///
/// * `3`: drop blank lines, then insert one blank line after every group of
///   three lines (except after the last group)
/// * `4`: cap runs of blank lines at a single blank line
/// * `5`: remove all blank lines
/// * anything else: leave the text as-is
///
/// When `source` is non-empty, a `( 출처 : <source> )` citation is appended:
/// after a blank line when there is formatted text, on its own when the
/// result is empty.
pub fn format_lyrics(text: &str, option: i32, source: Option<&str>) -> String {
    let mut result = match option {
        3 => group_by_three(text),
        4 => collapse_blank_runs(text, blank_run_3plus(), "\n\n"),
        5 => collapse_blank_runs(text, blank_run_2plus(), "\n"),
        _ => text.to_string(),
    };

    if let Some(source) = source.filter(|s| !s.is_empty()) {
        if result.is_empty() {
            result = format!("( 출처 : {} )", source);
        } else {
            result.push_str(&format!("\n\n( 출처 : {} )", source));
        }
    }

    result
}

fn group_by_three(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        out.push('\n');
        if (i + 1) % 3 == 0 && i != lines.len() - 1 {
            out.push('\n');
        }
    }
    out.trim().to_string()
}

fn collapse_blank_runs(text: &str, run: &Regex, replacement: &str) -> String {
    let trimmed_lines = text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n");
    run.replace_all(&trimmed_lines, replacement).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_of_three_inserts_single_blank_line() {
        assert_eq!(format_lyrics("a\nb\nc\nd\ne\nf", 3, None), "a\nb\nc\n\nd\ne\nf");
    }

    #[test]
    fn test_group_of_three_no_blank_after_final_group() {
        assert_eq!(format_lyrics("a\nb\nc", 3, None), "a\nb\nc");
        assert_eq!(format_lyrics("a\n\n\nb\nc\nd\n", 3, None), "a\nb\nc\n\nd");
    }

    #[test]
    fn test_cap_blank_runs_at_one() {
        assert_eq!(format_lyrics("a\n\n\n\nb", 4, None), "a\n\nb");
        assert_eq!(format_lyrics("  a  \n\nb\n", 4, None), "a\n\nb");
    }

    #[test]
    fn test_remove_all_blank_lines() {
        assert_eq!(format_lyrics("a\n\n\nb", 5, None), "a\nb");
        assert_eq!(format_lyrics("a\n \n\t\nb", 5, None), "a\nb");
    }

    #[test]
    fn test_unknown_option_is_passthrough() {
        assert_eq!(format_lyrics("a\n\n\nb", 0, None), "a\n\n\nb");
        assert_eq!(format_lyrics("raw  text", 99, None), "raw  text");
    }

    #[test]
    fn test_source_suffix() {
        assert_eq!(format_lyrics("hi", 4, Some("X")), "hi\n\n( 출처 : X )");
        assert_eq!(format_lyrics("", 4, Some("X")), "( 출처 : X )");
        assert_eq!(format_lyrics("hi", 4, Some("")), "hi");
        assert_eq!(format_lyrics("hi", 0, Some("유튜브")), "hi\n\n( 출처 : 유튜브 )");
    }
}
