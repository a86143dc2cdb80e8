use std::collections::VecDeque;
use std::ops::Range;

use crate::codepoint::CodePoint;
use crate::{Error, Result};

// Parses the body of a regex character class (the text between `[` and `]`),
// yielding scalars and half-open ranges. An unescaped hyphen that is neither
// at the start nor at the end is a range specifier. With `expand_ranges` every
// range is emitted scalar by scalar instead.
pub fn parse_character_class(body: &str, expand_ranges: bool) -> CharClassIter {
    CharClassIter {
        chars: body.chars().collect(),
        pos: 0,
        escaped: false,
        on_range: false,
        last: '\0',
        expand_ranges,
        queue: VecDeque::new(),
        run: None,
        failed: false,
    }
}

#[derive(Debug, Clone)]
pub struct CharClassIter {
    chars: Vec<char>,
    pos: usize,
    escaped: bool,
    on_range: bool,
    last: char,
    expand_ranges: bool,
    queue: VecDeque<CodePoint>,
    run: Option<Range<u32>>,
    failed: bool,
}

const RANGE_END_ESCAPES: &str = r"-|.^?*+{}()[]";
const SHORTCUT_CLASSES: &str = "sSdDiIcCwWpP";
const LITERAL_METACHARS: &str = "|.^?*+{}()";

impl Iterator for CharClassIter {
    type Item = Result<CodePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(run) = &mut self.run {
                if let Some(cp) = run.next() {
                    return Some(Ok(CodePoint::Single(cp)));
                }
                self.run = None;
            }
            if let Some(cp) = self.queue.pop_front() {
                return Some(Ok(cp));
            }
            if self.pos >= self.chars.len() {
                if self.escaped {
                    // Trailing unmatched backslash stays literal.
                    self.escaped = false;
                    return Some(Ok(CodePoint::Single('\\' as u32)));
                }
                return None;
            }
            if let Err(err) = self.step() {
                self.failed = true;
                return Some(Err(err));
            }
        }
    }
}

impl CharClassIter {
    fn emit(&mut self, ch: char) {
        self.queue.push_back(CodePoint::Single(ch as u32));
    }

    // A plain character right before an unescaped hyphen is held back as the
    // pending range start. With `expand_ranges` it is emitted immediately and
    // the range continues from the next scalar.
    fn defers(&self, k: usize) -> bool {
        !self.expand_ranges && k + 2 < self.chars.len() && self.chars[k + 1] == '-'
    }

    fn step(&mut self) -> Result<()> {
        let k = self.pos;
        let ch = self.chars[k];
        let length = self.chars.len();
        self.pos += 1;

        if k == 0 {
            match ch {
                '\\' => self.escaped = true,
                '[' | ']' if length > 1 => {
                    return Err(Error::MalformedClass {
                        message: format!("bad character {ch:?} at position 0"),
                        position: 0,
                    });
                }
                _ => {
                    self.last = ch;
                    if !self.defers(0) {
                        self.emit(ch);
                    }
                }
            }
            return Ok(());
        }

        match ch {
            '-' if self.escaped || k == length - 1 => {
                self.escaped = false;
                self.last = '-';
                self.emit('-');
            }
            '-' if self.on_range => {
                self.on_range = false;
                self.last = '-';
                self.emit('-');
            }
            '-' => self.parse_range()?,
            _ if LITERAL_METACHARS.contains(ch) => {
                self.escaped = false;
                self.on_range = false;
                self.last = ch;
                self.emit(ch);
            }
            '[' | ']' => {
                if !self.escaped && length > 1 {
                    return Err(Error::MalformedClass {
                        message: format!("bad character {ch:?} at position {k}"),
                        position: k,
                    });
                }
                self.escaped = false;
                self.on_range = false;
                self.last = ch;
                if !self.defers(k) {
                    self.emit(ch);
                }
            }
            '\\' => {
                if self.escaped {
                    self.escaped = false;
                    self.on_range = false;
                    self.last = '\\';
                    self.emit('\\');
                } else {
                    self.escaped = true;
                }
            }
            _ => {
                if self.escaped {
                    // Unknown escape: the backslash stays literal.
                    self.escaped = false;
                    self.emit('\\');
                }
                self.on_range = false;
                self.last = ch;
                if !self.defers(k) {
                    self.emit(ch);
                }
            }
        }
        Ok(())
    }

    // `self.last` holds the pending range start; the hyphen at `self.pos - 1`
    // has just been consumed.
    fn parse_range(&mut self) -> Result<()> {
        self.on_range = true;
        let length = self.chars.len();
        let mut end_pos = self.pos;
        let mut end_char = self.chars[end_pos];
        self.pos += 1;

        if end_char == '\\' && end_pos < length - 1 {
            let next = self.chars[end_pos + 1];
            if RANGE_END_ESCAPES.contains(next) {
                end_pos += 1;
                end_char = next;
                self.pos += 1;
            } else if SHORTCUT_CLASSES.contains(next) {
                return Err(Error::MalformedClass {
                    message: format!(
                        "bad character range '{}-\\{}' at position {}",
                        self.last,
                        next,
                        end_pos - 2
                    ),
                    position: end_pos - 2,
                });
            }
        }

        let lo = self.last as u32;
        let hi = end_char as u32;
        if lo > hi {
            return Err(Error::MalformedClass {
                message: format!(
                    "bad character range '{}-{}' at position {}",
                    self.last,
                    end_char,
                    end_pos - 2
                ),
                position: end_pos - 2,
            });
        }
        if self.expand_ranges {
            self.run = Some(lo + 1..hi + 1);
        } else {
            self.queue.push_back(CodePoint::Range(lo, hi + 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str, expand_ranges: bool) -> Result<Vec<CodePoint>> {
        parse_character_class(body, expand_ranges).collect()
    }

    #[test]
    fn plain_range_yields_half_open_pair() -> Result<()> {
        assert_eq!(parse("a-z", false)?, vec![CodePoint::Range(97, 123)]);
        Ok(())
    }

    #[test]
    fn expanded_range_yields_every_scalar() -> Result<()> {
        let expected: Vec<CodePoint> = (97..=122).map(CodePoint::Single).collect();
        assert_eq!(parse("a-z", true)?, expected);
        Ok(())
    }

    #[test]
    fn expansion_keeps_later_range_starts() -> Result<()> {
        let mut expected: Vec<CodePoint> = (97..=122).map(CodePoint::Single).collect();
        expected.extend((65..=90).map(CodePoint::Single));
        assert_eq!(parse("a-zA-Z", true)?, expected);
        Ok(())
    }

    #[test]
    fn trailing_hyphen_is_literal() -> Result<()> {
        assert_eq!(
            parse("a-z-", false)?,
            vec![CodePoint::Range(97, 123), CodePoint::Single('-' as u32)]
        );
        Ok(())
    }

    #[test]
    fn leading_hyphen_is_literal() -> Result<()> {
        assert_eq!(
            parse("-a", false)?,
            vec![
                CodePoint::Single('-' as u32),
                CodePoint::Single('a' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn escaped_hyphen_is_literal() -> Result<()> {
        assert_eq!(
            parse(r"a\-b", false)?,
            vec![
                CodePoint::Single('a' as u32),
                CodePoint::Single('-' as u32),
                CodePoint::Single('b' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = parse("z-a", false);
        assert!(matches!(
            result,
            Err(Error::MalformedClass { position: 0, .. })
        ));
    }

    #[test]
    fn shortcut_class_as_range_end_is_rejected() {
        let result = parse(r"a-\d", false);
        assert!(matches!(result, Err(Error::MalformedClass { .. })));
    }

    #[test]
    fn escaped_metachar_as_range_end_is_accepted() -> Result<()> {
        assert_eq!(parse(r"a-\|", false)?, vec![CodePoint::Range(97, 125)]);
        Ok(())
    }

    #[test]
    fn stray_bracket_is_rejected_with_position() {
        assert!(matches!(
            parse("a[b", false),
            Err(Error::MalformedClass { position: 1, .. })
        ));
        assert!(matches!(
            parse("]x", false),
            Err(Error::MalformedClass { position: 0, .. })
        ));
    }

    #[test]
    fn single_bracket_input_is_literal() -> Result<()> {
        assert_eq!(parse("[", false)?, vec![CodePoint::Single('[' as u32)]);
        assert_eq!(parse("]", false)?, vec![CodePoint::Single(']' as u32)]);
        Ok(())
    }

    #[test]
    fn escaped_bracket_is_literal() -> Result<()> {
        assert_eq!(
            parse(r"\[\]", false)?,
            vec![
                CodePoint::Single('[' as u32),
                CodePoint::Single(']' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn metachars_are_literal_scalars() -> Result<()> {
        let expected: Vec<CodePoint> = "|.^?*+{}()"
            .chars()
            .map(|ch| CodePoint::Single(ch as u32))
            .collect();
        assert_eq!(parse("|.^?*+{}()", false)?, expected);
        Ok(())
    }

    #[test]
    fn trailing_backslash_is_literal() -> Result<()> {
        assert_eq!(
            parse(r"a\", false)?,
            vec![
                CodePoint::Single('a' as u32),
                CodePoint::Single('\\' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_escape_keeps_backslash() -> Result<()> {
        assert_eq!(
            parse(r"\z", false)?,
            vec![
                CodePoint::Single('\\' as u32),
                CodePoint::Single('z' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn hyphen_after_completed_range_is_literal() -> Result<()> {
        assert_eq!(
            parse("a-z-b", false)?,
            vec![
                CodePoint::Range(97, 123),
                CodePoint::Single('-' as u32),
                CodePoint::Single('b' as u32)
            ]
        );
        Ok(())
    }

    #[test]
    fn errors_are_deterministic() {
        let first = parse("z-a", false);
        let second = parse("z-a", false);
        assert_eq!(first, second);
    }

    #[test]
    fn iteration_is_fused_after_error() {
        let mut iter = parse_character_class("a[b", false);
        assert!(matches!(iter.next(), Some(Ok(_))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
    }
}
