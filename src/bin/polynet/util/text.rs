/// Greedy word wrap; a single word longer than `width` gets its own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// `"1 junction"`, `"3 junctions"`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("missing backbone site", 40), vec!["missing backbone site"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("failed to parse RST data", 12),
            vec!["failed to", "parse RST", "data"]
        );
    }

    #[test]
    fn wrap_empty_gives_one_blank_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("step_010", 8), "step_010");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("step_010.junctions.json", 10), "step_010.…");
        assert_eq!(truncate("Δ距離テスト", 3), "Δ距…");
    }

    #[test]
    fn count_noun_pluralizes() {
        assert_eq!(count_noun(1, "junction"), "1 junction");
        assert_eq!(count_noun(0, "bridge"), "0 bridges");
    }
}
