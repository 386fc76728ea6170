//! Column arithmetic for indented lines.
//!
//! Tabs advance to the next multiple of four columns. `current_pos` is the
//! column at which the slice starts, so a tab's width depends on what came
//! before it on the line.

/// Width of a tab that starts at column `current_pos`.
#[inline]
#[must_use]
pub fn tab_width(current_pos: usize) -> usize {
    4 - current_pos % 4
}

/// Finds where an indent of `width` columns ends.
///
/// Returns the byte index just past the indent and the number of columns by
/// which the last tab overshot `width`, or `None` if the line has fewer than
/// `width` columns of leading spaces and tabs.
///
/// ```rust
/// // A tab at column 0 spans columns 1-4; an indent of 2 ends inside it.
/// assert_eq!(mdbytes::indent_position(b"\taaaa", 0, 2), Some((1, 2)));
/// assert_eq!(mdbytes::indent_position(b" a", 0, 2), None);
/// ```
#[must_use]
pub fn indent_position(bs: &[u8], current_pos: usize, width: usize) -> Option<(usize, usize)> {
    indent_position_padding(bs, current_pos, 0, width)
}

/// Like [`indent_position`], for a line where `padding` columns of a split tab
/// were already consumed.
///
/// The returned position is shifted back by `padding`. When `width` is zero
/// the result is `(0, padding)`.
#[must_use]
pub fn indent_position_padding(
    bs: &[u8],
    current_pos: usize,
    padding: usize,
    width: usize,
) -> Option<(usize, usize)> {
    if width == 0 {
        return Some((0, padding));
    }
    let mut w = 0;
    let mut i = 0;
    while i < bs.len() && w < width {
        match bs[i] {
            b'\t' => w += tab_width(current_pos + w),
            b' ' => w += 1,
            _ => break,
        }
        i += 1;
    }
    if w < width {
        return None;
    }
    Some((i.saturating_sub(padding), w - width))
}

/// Measures the leading indent of `bs`, returning `(columns, bytes)`.
#[must_use]
pub fn indent_width(bs: &[u8], current_pos: usize) -> (usize, usize) {
    let mut width = 0;
    let mut pos = 0;
    for &b in bs {
        match b {
            b' ' => width += 1,
            b'\t' => width += tab_width(current_pos + width),
            _ => break,
        }
        pos += 1;
    }
    (width, pos)
}

/// Index of the first byte that is neither a space nor a tab.
///
/// Returns `None` for blank lines, including lines whose first non-indent
/// byte is `\n`.
#[must_use]
pub fn first_non_space_position(bs: &[u8]) -> Option<usize> {
    let i = bs.iter().position(|&c| c != b' ' && c != b'\t')?;
    (bs[i] != b'\n').then_some(i)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 4)]
    #[case(1, 3)]
    #[case(3, 1)]
    #[case(4, 4)]
    fn tabs_reach_the_next_stop(#[case] pos: usize, #[case] width: usize) {
        assert_eq!(tab_width(pos), width);
    }

    #[rstest]
    #[case(b"    code", 0, 4, Some((4, 0)))]
    #[case(b"      code", 0, 4, Some((4, 0)))]
    #[case(b"\tcode", 0, 4, Some((1, 0)))]
    #[case(b"\tcode", 0, 2, Some((1, 2)))]
    #[case(b"\tcode", 2, 1, Some((1, 1)))]
    #[case(b"  \tcode", 0, 3, Some((3, 1)))]
    #[case(b"  code", 0, 4, None)]
    #[case(b"", 0, 1, None)]
    #[case(b"code", 0, 0, Some((0, 0)))]
    fn indent_positions(
        #[case] line: &[u8],
        #[case] current_pos: usize,
        #[case] width: usize,
        #[case] expected: Option<(usize, usize)>,
    ) {
        assert_eq!(indent_position(line, current_pos, width), expected);
    }

    #[test]
    fn padding_shifts_the_position() {
        assert_eq!(indent_position_padding(b"  x", 0, 1, 2), Some((1, 0)));
        assert_eq!(indent_position_padding(b"x", 0, 3, 0), Some((0, 3)));
    }

    #[test]
    fn widths() {
        assert_eq!(indent_width(b"  \tx", 0), (4, 3));
        assert_eq!(indent_width(b"\t\tx", 1), (7, 2));
        assert_eq!(indent_width(b"x", 0), (0, 0));
    }

    #[test]
    fn first_non_space() {
        assert_eq!(first_non_space_position(b"  \tx"), Some(3));
        assert_eq!(first_non_space_position(b"x"), Some(0));
        assert_eq!(first_non_space_position(b"   \n"), None);
        assert_eq!(first_non_space_position(b"   "), None);
    }
}
