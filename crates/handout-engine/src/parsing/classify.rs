use std::collections::BTreeMap;

use crate::models::Block;

/// The fence token opening and closing a prose region inside a script.
pub const FENCE: &str = "\"\"\"";

/// How a single source line reads: executable code or fenced prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Prose,
}

/// A single physical line of the script after classification.
///
/// The 1-based line number is the key of the map this lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub kind: LineKind,
}

impl ClassifiedLine {
    /// Wrap this line into a single-line block of the matching kind.
    pub fn into_block(self) -> Block {
        match self.kind {
            LineKind::Code => Block::Code(vec![self.text]),
            LineKind::Prose => Block::Text(vec![self.text]),
        }
    }
}

/// Classify every physical line of `source` as code or prose.
///
/// Lines are numbered from 1 and right-trimmed of trailing whitespace.
/// A line opening a fence is itself prose with the leading token
/// stripped; a line closing a fence is prose with the trailing token
/// stripped; opening and closing on one physical line is legal. A fence
/// left open at end of input is tolerated: the remaining lines stay
/// prose.
pub fn classify(source: &str) -> BTreeMap<u32, ClassifiedLine> {
    let mut lines = BTreeMap::new();
    if source.is_empty() {
        return lines;
    }

    let mut in_prose = false;
    for (index, raw) in source.split('\n').enumerate() {
        let mut text = raw.trim_end();
        let kind;
        if !in_prose && text.starts_with(FENCE) {
            text = &text[FENCE.len()..];
            kind = LineKind::Prose;
            in_prose = true;
            if let Some(stripped) = text.strip_suffix(FENCE) {
                text = stripped;
                in_prose = false;
            }
        } else if in_prose && let Some(stripped) = text.strip_suffix(FENCE) {
            text = stripped;
            kind = LineKind::Prose;
            in_prose = false;
        } else {
            kind = if in_prose {
                LineKind::Prose
            } else {
                LineKind::Code
            };
        }
        lines.insert(
            index as u32 + 1,
            ClassifiedLine {
                text: text.to_string(),
                kind,
            },
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(source: &str) -> Vec<(u32, LineKind)> {
        classify(source)
            .into_iter()
            .map(|(n, line)| (n, line.kind))
            .collect()
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn single_line_fence_opens_and_closes() {
        let lines = classify("\"\"\"One-line\"\"\"\ndef foo():\n    pass");
        assert_eq!(
            lines.get(&1),
            Some(&ClassifiedLine {
                text: "One-line".into(),
                kind: LineKind::Prose
            })
        );
        assert_eq!(
            lines.get(&2),
            Some(&ClassifiedLine {
                text: "def foo():".into(),
                kind: LineKind::Code
            })
        );
        assert_eq!(
            lines.get(&3),
            Some(&ClassifiedLine {
                text: "    pass".into(),
                kind: LineKind::Code
            })
        );
    }

    #[test]
    fn multi_line_fence_strips_only_tokens() {
        let lines = classify("\"\"\"\nprose here\n\"\"\"\ncode");
        assert_eq!(lines.get(&1).unwrap().text, "");
        assert_eq!(lines.get(&1).unwrap().kind, LineKind::Prose);
        assert_eq!(lines.get(&2).unwrap().kind, LineKind::Prose);
        assert_eq!(lines.get(&3).unwrap().text, "");
        assert_eq!(lines.get(&3).unwrap().kind, LineKind::Prose);
        assert_eq!(lines.get(&4).unwrap().kind, LineKind::Code);
    }

    #[test]
    fn indented_fence_token_is_plain_code() {
        let lines = classify("    \"\"\"offset docstring\"\"\"");
        assert_eq!(lines.get(&1).unwrap().kind, LineKind::Code);
        assert_eq!(lines.get(&1).unwrap().text, "    \"\"\"offset docstring\"\"\"");
    }

    #[test]
    fn unterminated_fence_stays_prose_to_end() {
        assert_eq!(
            kinds("code\n\"\"\"\nstill prose\nstill prose too"),
            vec![
                (1, LineKind::Code),
                (2, LineKind::Prose),
                (3, LineKind::Prose),
                (4, LineKind::Prose),
            ]
        );
    }

    #[rstest]
    #[case("x = 1   ", "x = 1")]
    #[case("\"\"\"prose\"\"\"\t", "prose")]
    fn trailing_whitespace_is_trimmed(#[case] source: &str, #[case] expected: &str) {
        let lines = classify(source);
        assert_eq!(lines.get(&1).unwrap().text, expected);
    }
}
