//! Ordered sequence transforms for the fragment pipeline.
//!
//! A compiled template body is a run of values interleaving text fragments
//! with opaque tags and literals. These helpers reshape such runs without
//! mutating their input; every function returns a new sequence.

use crate::errors::{UtilError, UtilResult};
use crate::value::Value;

/// Concatenates every maximal run of adjacent string fragments.
///
/// Non-string values pass through unchanged and bound the runs, so two
/// strings separated by a tag are never merged with each other. The result
/// is stable under re-application.
///
/// # Examples
///
/// ```rust
/// use weft_util::sequence::merge_adjacent_strings;
/// use weft_util::value::Value;
///
/// let run = vec![Value::from("foo "), Value::from("bar"), Value::symbol("bang")];
/// let merged = merge_adjacent_strings(&run);
/// assert_eq!(merged, vec![Value::from("foo bar"), Value::symbol("bang")]);
/// ```
pub fn merge_adjacent_strings(seq: &[Value]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::with_capacity(seq.len());
    for item in seq {
        match (merged.last_mut(), item) {
            (Some(Value::String(run)), Value::String(next)) => run.push_str(next),
            _ => merged.push(item.clone()),
        }
    }
    merged
}

/// Inserts `separator` between every pair of consecutive elements.
///
/// The empty sequence comes back empty; no leading or trailing separator is
/// ever added, so a non-empty input of length `n` yields `2n - 1` elements.
pub fn intersperse<T: Clone>(seq: &[T], separator: &T) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len().saturating_mul(2).saturating_sub(1));
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            out.push(separator.clone());
        }
        out.push(item.clone());
    }
    out
}

/// Replaces each contiguous occurrence of `pattern` with `replacement`.
///
/// Matching compares elements positionally by value. After a match, the
/// scan resumes past the inserted replacement, so replacement elements are
/// never re-matched and overlapping candidate windows are skipped once a
/// match is consumed. With no occurrence of `pattern`, the result is a
/// plain copy of the input.
///
/// Fails with [`UtilError::EmptyPattern`] if `pattern` is empty.
pub fn substitute<T>(seq: &[T], pattern: &[T], replacement: &[T]) -> UtilResult<Vec<T>>
where
    T: Clone + PartialEq,
{
    if pattern.is_empty() {
        return Err(UtilError::EmptyPattern);
    }
    let mut out = Vec::with_capacity(seq.len());
    let mut i = 0;
    while i < seq.len() {
        if seq[i..].starts_with(pattern) {
            out.extend_from_slice(replacement);
            i += pattern.len();
        } else {
            out.push(seq[i].clone());
            i += 1;
        }
    }
    Ok(out)
}

/// Trims the outer whitespace of a fragment run.
///
/// Leading whitespace is removed from the first element if it is a string,
/// and trailing whitespace from the last element if it is a string.
/// Interior elements and non-string values are untouched. A single string
/// element is both the first and the last, so it is trimmed on both sides.
pub fn trim_fragment_edges(seq: &[Value]) -> Vec<Value> {
    let mut out = seq.to_vec();
    if let Some(Value::String(first)) = out.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Value::String(last)) = out.last_mut() {
        *last = last.trim_end().to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::from(text)
    }

    fn n(number: i64) -> Value {
        Value::from(number)
    }

    #[test]
    fn test_merge_adjacent_strings_collapses_runs() {
        let run = vec![
            s("foo "),
            s("bar "),
            s("baz"),
            Value::symbol("bang"),
            s("biz"),
            s(" bop"),
            n(12),
        ];
        let merged = merge_adjacent_strings(&run);
        assert_eq!(
            merged,
            vec![s("foo bar baz"), Value::symbol("bang"), s("biz bop"), n(12)]
        );
    }

    #[test]
    fn test_merge_adjacent_strings_is_idempotent() {
        let run = vec![s("a"), s("b"), Value::symbol("t"), s("c")];
        let once = merge_adjacent_strings(&run);
        let twice = merge_adjacent_strings(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_adjacent_strings_leaves_non_strings_apart() {
        let run = vec![n(1), n(2), Value::Bool(true)];
        assert_eq!(merge_adjacent_strings(&run), run);
    }

    #[test]
    fn test_intersperse_separates_consecutive_elements() {
        let out = intersperse(&[s("foo"), s("bar"), s("baz")], &s(" "));
        assert_eq!(out, vec![s("foo"), s(" "), s("bar"), s(" "), s("baz")]);
    }

    #[test]
    fn test_intersperse_on_empty_input_is_empty() {
        let out: Vec<Value> = intersperse(&[], &s(" "));
        assert_eq!(out, Vec::<Value>::new());
    }

    #[test]
    fn test_intersperse_result_length() {
        for len in 1..6_usize {
            let seq: Vec<i32> = (0..len as i32).collect();
            assert_eq!(intersperse(&seq, &-1).len(), 2 * len - 1);
        }
    }

    #[test]
    fn test_substitute_replaces_at_every_position() {
        let replacement = [s("foo"), s("bar"), s("baz")];

        let out = substitute(&[n(1), n(2), n(3), n(4)], &[n(1), n(2)], &replacement).unwrap();
        assert_eq!(out, vec![s("foo"), s("bar"), s("baz"), n(3), n(4)]);

        let out = substitute(&[n(1), n(2), n(3), n(4)], &[n(2), n(3)], &replacement).unwrap();
        assert_eq!(out, vec![n(1), s("foo"), s("bar"), s("baz"), n(4)]);

        let out = substitute(&[n(1), n(2), n(3), n(4)], &[n(3), n(4)], &replacement).unwrap();
        assert_eq!(out, vec![n(1), n(2), s("foo"), s("bar"), s("baz")]);
    }

    #[test]
    fn test_substitute_does_not_rematch_inside_replacement() {
        let out = substitute(
            &[n(1), n(2), n(2), n(2), n(3), n(4)],
            &[n(2), n(2)],
            &[s("foo"), s("bar"), s("baz")],
        )
        .unwrap();
        assert_eq!(
            out,
            vec![n(1), s("foo"), s("bar"), s("baz"), n(2), n(3), n(4)]
        );
    }

    #[test]
    fn test_substitute_without_match_copies_input() {
        let seq = [1, 2, 3, 4];
        let out = substitute(&seq, &[9, 9], &[0]).unwrap();
        assert_eq!(out, seq.to_vec());
    }

    #[test]
    fn test_substitute_rejects_empty_pattern() {
        let err = substitute(&[1, 2], &[], &[3]).unwrap_err();
        assert_eq!(err, UtilError::EmptyPattern);
    }

    #[test]
    fn test_substitute_with_shrinking_replacement() {
        let out = substitute(&[1, 2, 3, 1, 2], &[1, 2], &[9]).unwrap();
        assert_eq!(out, vec![9, 3, 9]);
    }

    #[test]
    fn test_trim_fragment_edges_trims_only_the_outer_sides() {
        let out = trim_fragment_edges(&[s(" foo "), s(" bar "), s(" baz ")]);
        assert_eq!(out, vec![s("foo "), s(" bar "), s(" baz")]);
    }

    #[test]
    fn test_trim_fragment_edges_skips_non_string_first() {
        let out = trim_fragment_edges(&[Value::symbol("foo"), s(" bar "), s(" baz ")]);
        assert_eq!(out, vec![Value::symbol("foo"), s(" bar "), s(" baz")]);
    }

    #[test]
    fn test_trim_fragment_edges_skips_non_string_last() {
        let out = trim_fragment_edges(&[s(" foo "), s(" bar "), Value::symbol("baz")]);
        assert_eq!(out, vec![s("foo "), s(" bar "), Value::symbol("baz")]);
    }

    #[test]
    fn test_trim_fragment_edges_single_string_trims_both_sides() {
        let out = trim_fragment_edges(&[s(" foo ")]);
        assert_eq!(out, vec![s("foo")]);
    }
}
