//! Byte-level helpers shared by the parsing stages.  Character classes follow
//! the "C" locale: whitespace is space, tab, line feed, vertical tab, form
//! feed and carriage return, and control characters are `0x00..=0x1F` plus
//! `0x7F`.  Bytes above `0x7F` belong to neither class.

/// Return the offset of the first occurrence of `needle` in `haystack`.
pub fn find<N>(
    haystack: &[u8],
    needle: N,
) -> Option<usize>
    where N: AsRef<[u8]>
{
    let needle = needle.as_ref();
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len())
        .position(|window| window == needle)
}

pub fn contains<N>(
    haystack: &[u8],
    needle: N,
) -> bool
    where N: AsRef<[u8]>
{
    find(haystack, needle).is_some()
}

pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

pub fn is_control(byte: u8) -> bool {
    byte.is_ascii_control()
}

pub fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().copied().all(is_space)
}

pub fn has_control(bytes: &[u8]) -> bool {
    bytes.iter().copied().any(is_control)
}

/// Return the given bytes with leading and trailing whitespace removed.
pub fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter()
        .position(|&byte| !is_space(byte))
        .unwrap_or(bytes.len());
    let end = bytes.iter()
        .rposition(|&byte| !is_space(byte))
        .map_or(start, |last| last + 1);
    &bytes[start..end]
}

/// Return the given bytes with leading and trailing spaces (but no other
/// whitespace) removed.
pub fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter()
        .position(|&byte| byte != b' ')
        .unwrap_or(bytes.len());
    let end = bytes.iter()
        .rposition(|&byte| byte != b' ')
        .map_or(start, |last| last + 1);
    &bytes[start..end]
}

/// Split the given bytes at every occurrence of `separator`, skipping the
/// empty pieces.
pub fn split<'a>(
    bytes: &'a [u8],
    separator: &'a [u8],
) -> impl Iterator<Item = &'a [u8]> + 'a {
    let mut rest = Some(bytes);
    std::iter::from_fn(move || {
        let current = rest?;
        if let Some(end) = find(current, separator) {
            rest = Some(&current[end + separator.len()..]);
            Some(&current[..end])
        } else {
            rest = None;
            Some(current)
        }
    })
        .filter(|piece| !piece.is_empty())
}

/// Return the number of whitespace bytes at the front of the given bytes.
pub fn count_leading_space(bytes: &[u8]) -> usize {
    bytes.iter()
        .take_while(|&&byte| is_space(byte))
        .count()
}
