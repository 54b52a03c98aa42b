//! Parsing of stack-frame descriptions.
//!
//! The engine reports template execution frames as ``file:line: in `name'``,
//! where the file may be a real path, a pseudo-source like `(weft)`, or
//! empty, and the callee segment is optional. This module pulls those
//! frames apart for diagnostics and trace display.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref FRAME_RE: Regex = Regex::new(r"^(.*):(-?\d+)(?:: in [`'](.+)')?$").unwrap();
}

/// One parsed stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub file: String,
    pub line: i64,
    pub callee: Option<String>,
}

/// Parses a single frame description.
///
/// Returns `None` when the text does not look like a frame.
///
/// # Examples
///
/// ```rust
/// use weft_util::trace::caller_info;
///
/// let frame = caller_info("/tmp/foo.weft:12: in `fizzle'").unwrap();
/// assert_eq!(frame.file, "/tmp/foo.weft");
/// assert_eq!(frame.line, 12);
/// assert_eq!(frame.callee.as_deref(), Some("fizzle"));
/// ```
pub fn caller_info(frame: &str) -> Option<FrameInfo> {
    let caps = FRAME_RE.captures(frame)?;
    let line = caps[2].parse().ok()?;
    Some(FrameInfo {
        file: caps[1].to_string(),
        line,
        callee: caps.get(3).map(|m| m.as_str().to_string()),
    })
}
