//! Positional parameter inference for shell function bodies.
//!
//! Shell functions never declare parameters. They read `$1`, `$2`, … and
//! `$@` / `$*` instead, so the parameter list is inferred from which of
//! those references a body contains:
//!
//! - the highest index `N` seen determines the count, and `$1..$N` are all
//!   emitted even when an intermediate index is never referenced;
//! - `${N:-default}` and `${N-default}` make parameter `N` optional, and the
//!   first default seen for an index wins;
//! - any rest marker appends one optional rest parameter after the
//!   positional ones.
//!
//! The scan is a single left-to-right pass over the bytes of the body with
//! two token shapes (bare `$N` and braced `${N…}`); nothing backtracks.

use std::collections::BTreeMap;

use shellfacts_core::FunctionParameter;

/// Highest positional index emitted. Larger indices, including ones too
/// long to fit a `u32`, are clamped to it so the number of emitted
/// parameters stays bounded.
pub const MAX_POSITIONAL_INDEX: u32 = 1024;

/// A parameter reference found in a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference<'a> {
    /// `$N`, `${N}`, `${N:-default}` or `${N-default}`.
    Positional {
        index: u32,
        default: Option<&'a str>,
    },
    /// `$@`, `$*`, `${@}` or `${*}`, carrying the bare marker.
    Rest(&'static str),
}

/// Infers the parameters of a function from its body text.
///
/// # Examples
///
/// ```
/// use shellfacts_grammar::transforms::parse_params;
///
/// let params = parse_params(r#"{ local name="$1"; local greeting="${2:-Hello}"; }"#);
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[1].default_value(), Some("Hello"));
/// ```
#[must_use]
pub fn parse_params(body: &str) -> Vec<FunctionParameter> {
    let mut max_index = 0_u32;
    let mut defaults: BTreeMap<u32, &str> = BTreeMap::new();
    let mut rest_marker: Option<&'static str> = None;

    for reference in ReferenceScanner::new(body) {
        match reference {
            Reference::Positional { index, default } => {
                max_index = max_index.max(index);
                if let Some(text) = default.filter(|text| !text.is_empty()) {
                    defaults.entry(index).or_insert(text);
                }
            }
            Reference::Rest(marker) => {
                rest_marker.get_or_insert(marker);
            }
        }
    }

    let mut params: Vec<FunctionParameter> = (1..=max_index)
        .map(|index| {
            let default = defaults.get(&index).map(|text| (*text).to_owned());
            FunctionParameter::positional(index, default)
        })
        .collect();

    if let Some(marker) = rest_marker {
        params.push(FunctionParameter::rest(marker));
    }

    params
}

/// Iterator over the parameter references in a body.
struct ReferenceScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ReferenceScanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn byte(&self, at: usize) -> Option<u8> {
        self.text.as_bytes().get(at).copied()
    }

    /// Returns the end of the run of ASCII digits starting at `from`.
    fn digits_end(&self, from: usize) -> usize {
        let mut end = from;
        while self.byte(end).is_some_and(|b| b.is_ascii_digit()) {
            end = end.saturating_add(1);
        }
        end
    }

    /// Parses the digits in `from..to` as an index, clamped to
    /// [`MAX_POSITIONAL_INDEX`].
    fn index(&self, from: usize, to: usize) -> Option<u32> {
        let digits = self.text.get(from..to).filter(|digits| !digits.is_empty())?;
        let index = digits.parse::<u32>().unwrap_or(MAX_POSITIONAL_INDEX);
        Some(index.min(MAX_POSITIONAL_INDEX))
    }

    /// Tries to read a reference starting at the `$` at `dollar`.
    ///
    /// Returns the reference and the position just past it.
    fn read_at(&self, dollar: usize) -> Option<(Reference<'a>, usize)> {
        let next = dollar.saturating_add(1);
        match self.byte(next)? {
            b'0'..=b'9' => {
                let end = self.digits_end(next);
                let index = self.index(next, end)?;
                Some((
                    Reference::Positional {
                        index,
                        default: None,
                    },
                    end,
                ))
            }
            b'@' => Some((Reference::Rest("$@"), next.saturating_add(1))),
            b'*' => Some((Reference::Rest("$*"), next.saturating_add(1))),
            b'{' => self.read_braced(next.saturating_add(1)),
            _ => None,
        }
    }

    /// Reads the inside of `${…}`; `open` is the position after the brace.
    fn read_braced(&self, open: usize) -> Option<(Reference<'a>, usize)> {
        let after_marker = open.saturating_add(1);
        match self.byte(open)? {
            b'@' if self.byte(after_marker) == Some(b'}') => {
                return Some((Reference::Rest("$@"), after_marker.saturating_add(1)));
            }
            b'*' if self.byte(after_marker) == Some(b'}') => {
                return Some((Reference::Rest("$*"), after_marker.saturating_add(1)));
            }
            b'0'..=b'9' => {}
            _ => return None,
        }

        let digits_end = self.digits_end(open);
        let index = self.index(open, digits_end)?;

        let default_start = match self.byte(digits_end)? {
            b'}' => {
                let reference = Reference::Positional {
                    index,
                    default: None,
                };
                return Some((reference, digits_end.saturating_add(1)));
            }
            b':' if self.byte(digits_end.saturating_add(1)) == Some(b'-') => {
                digits_end.saturating_add(2)
            }
            b'-' => digits_end.saturating_add(1),
            _ => return None,
        };

        let close = self.closing_brace(default_start)?;
        let default = self.text.get(default_start..close)?;
        Some((
            Reference::Positional {
                index,
                default: Some(default),
            },
            close.saturating_add(1),
        ))
    }

    /// Finds the first `}` at or after `from` that is not escaped with a
    /// backslash.
    fn closing_brace(&self, from: usize) -> Option<usize> {
        let mut at = from;
        loop {
            match self.byte(at)? {
                b'\\' => at = at.saturating_add(2),
                b'}' => return Some(at),
                _ => at = at.saturating_add(1),
            }
        }
    }
}

impl<'a> Iterator for ReferenceScanner<'a> {
    type Item = Reference<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let remaining = self.text.get(self.pos..)?;
            let dollar = self.pos.saturating_add(remaining.find('$')?);
            if let Some((reference, end)) = self.read_at(dollar) {
                self.pos = end;
                return Some(reference);
            }
            self.pos = dollar.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(body: &str) -> Vec<Reference<'_>> {
        ReferenceScanner::new(body).collect()
    }

    #[test]
    fn scanner_reads_both_token_shapes() {
        assert_eq!(
            references(r#"echo "$1" "${2:-x}" "${3-y}" "${4}""#),
            vec![
                Reference::Positional {
                    index: 1,
                    default: None
                },
                Reference::Positional {
                    index: 2,
                    default: Some("x")
                },
                Reference::Positional {
                    index: 3,
                    default: Some("y")
                },
                Reference::Positional {
                    index: 4,
                    default: None
                },
            ]
        );
    }

    #[test]
    fn scanner_skips_other_expansions() {
        assert!(references("echo $HOME ${name} ${#} $# $? $$ ${1:+set} ${1#x}").is_empty());
    }

    #[test]
    fn scanner_reads_braced_rest_markers() {
        assert_eq!(
            references("${@} ${*}"),
            vec![Reference::Rest("$@"), Reference::Rest("$*")]
        );
    }

    #[test]
    fn unterminated_braced_reference_is_not_a_reference() {
        assert!(references("${1:-oops").is_empty());
    }

    #[test]
    fn escaped_brace_does_not_end_a_default() {
        assert_eq!(
            references(r"${1:-a\}b}"),
            vec![Reference::Positional {
                index: 1,
                default: Some(r"a\}b")
            }]
        );
    }
}
