use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fmt,
    os::unix::ffi::{OsStrExt, OsStringExt},
};

use crate::constants::{HEADER_SUFFIX, MACRO_PREFIX};

/// Where a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Generated,
    Supplied,
}

/// A file or macro name. Not required to be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub value: OsString,
    pub origin: Origin,
}

impl Name {
    fn generated(value: Vec<u8>) -> Self {
        Self {
            value: OsString::from_vec(value),
            origin: Origin::Generated,
        }
    }

    fn supplied(value: OsString) -> Self {
        Self {
            value,
            origin: Origin::Supplied,
        }
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.value
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.to_string_lossy())
    }
}

/// The names used by one generated header.
///
/// The include guard is always derived from the final header name, so a custom output name
/// also changes the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    pub header: Name,
    pub macro_name: Name,
    pub include_guard: Vec<u8>,
}

impl NameSet {
    pub fn resolve(source: &OsStr, output: Option<OsString>, define: Option<OsString>) -> Self {
        let source = source.as_bytes();

        let header = match output {
            Some(output) => Name::supplied(output),
            None => Name::generated(header_name(source)),
        };
        let macro_name = match define {
            Some(define) => Name::supplied(define),
            None => Name::generated(macro_name(source)),
        };
        let include_guard = include_guard(header.as_bytes());

        Self {
            header,
            macro_name,
            include_guard,
        }
    }

    pub fn include_guard_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.include_guard)
    }
}

/// Default output file name: `.` and `/` become `_`, then `.h` is appended.
pub fn header_name(source: &[u8]) -> Vec<u8> {
    let mut header = Vec::with_capacity(source.len() + HEADER_SUFFIX.len());
    header.extend(source.iter().copied().map(flatten_separator));
    header.extend_from_slice(HEADER_SUFFIX.as_bytes());
    header
}

/// Default macro name: `EMBED_` followed by the upper-cased path with `.` and `/` as `_`.
///
/// Only ASCII letters change case; every other byte passes through.
pub fn macro_name(source: &[u8]) -> Vec<u8> {
    let mut name = Vec::with_capacity(MACRO_PREFIX.len() + source.len());
    name.extend_from_slice(MACRO_PREFIX.as_bytes());
    name.extend(
        source
            .iter()
            .map(|&b| flatten_separator(b).to_ascii_uppercase()),
    );
    name
}

/// Include guard token for a header: its last path component, upper-cased, `.` as `_`.
///
/// An empty component (e.g. `"out/"`) yields an empty token.
pub fn include_guard(header: &[u8]) -> Vec<u8> {
    let file_name = match header.iter().rposition(|&b| b == b'/') {
        Some(pos) => &header[pos + 1..],
        None => header,
    };

    file_name
        .iter()
        .map(|&b| if b == b'.' { b'_' } else { b.to_ascii_uppercase() })
        .collect()
}

fn flatten_separator(b: u8) -> u8 {
    match b {
        b'.' | b'/' => b'_',
        b => b,
    }
}
