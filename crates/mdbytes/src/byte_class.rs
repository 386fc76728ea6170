//! Static byte and rune classification tables.
//!
//! Everything here is `const` data computed at compile time; lookups are a
//! single index into a 256-entry table.

/// Marker for an invalid UTF-8 leading byte in [`UTF8_LEN`].
pub(crate) const INVALID_LEAD: u8 = 0;

const fn space(c: u8) -> bool {
    matches!(c, b'\t' | b'\n' | b'\r' | b' ')
}

const fn url_safe(c: u8) -> bool {
    // a-zA-Z0-9 and ;/?:@&=+$,-_.!~*'()#
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b';' | b'/'
                | b'?'
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'+'
                | b'$'
                | b','
                | b'-'
                | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'\''
                | b'('
                | b')'
                | b'#'
        )
}

const fn email_local(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'/'
                | b'='
                | b'?'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
        )
}

const SPACE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = space(i as u8);
        i += 1;
    }
    table
};

const URL_SAFE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = url_safe(i as u8);
        i += 1;
    }
    table
};

const EMAIL_LOCAL: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = email_local(i as u8);
        i += 1;
    }
    table
};

/// Byte length of a UTF-8 sequence keyed by its leading byte, or
/// [`INVALID_LEAD`] for continuation bytes, overlong leads and `0xF8..`.
pub(crate) const UTF8_LEN: [u8; 256] = {
    let mut table = [INVALID_LEAD; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = match i {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => INVALID_LEAD,
        };
        i += 1;
    }
    table
};

/// Returns `true` for `\t`, `\n`, `\r` and space.
#[inline]
#[must_use]
pub fn is_space(c: u8) -> bool {
    SPACE[c as usize]
}

/// Returns `true` for ASCII punctuation.
#[inline]
#[must_use]
pub fn is_punct(c: u8) -> bool {
    c.is_ascii_punctuation()
}

/// Returns `true` for ASCII decimal digits.
#[inline]
#[must_use]
pub fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` for ASCII hexadecimal digits.
#[inline]
#[must_use]
pub fn is_hex_decimal(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Returns `true` for ASCII letters and digits.
#[inline]
#[must_use]
pub fn is_alpha_numeric(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` if `c` may appear unescaped in a URL.
#[inline]
#[must_use]
pub fn is_url_safe(c: u8) -> bool {
    URL_SAFE[c as usize]
}

/// Returns `true` if `c` may appear in the local part of an email address.
#[inline]
#[must_use]
pub fn is_email_local(c: u8) -> bool {
    EMAIL_LOCAL[c as usize]
}

/// Byte length of the UTF-8 sequence that starts with `c`, or `None` when `c`
/// cannot start a sequence.
#[inline]
#[must_use]
pub fn utf8_len(c: u8) -> Option<usize> {
    match UTF8_LEN[c as usize] {
        INVALID_LEAD => None,
        n => Some(n as usize),
    }
}

/// Returns `true` if the rune is Unicode white space.
#[inline]
#[must_use]
pub fn is_space_rune(r: char) -> bool {
    r.is_whitespace()
}

/// East Asian width category (UAX #11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    /// `F`
    Fullwidth,
    /// `H`
    Halfwidth,
    /// `W`
    Wide,
    /// `Na`
    Narrow,
    /// `A`
    Ambiguous,
    /// `N`
    Neutral,
}

impl EastAsianWidth {
    /// The property value abbreviation used by the Unicode data files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EastAsianWidth::Fullwidth => "F",
            EastAsianWidth::Halfwidth => "H",
            EastAsianWidth::Wide => "W",
            EastAsianWidth::Narrow => "Na",
            EastAsianWidth::Ambiguous => "A",
            EastAsianWidth::Neutral => "N",
        }
    }
}

/// Returns `true` for runes whose East Asian width is `W` or `F`.
#[must_use]
pub fn is_east_asian_wide_rune(r: char) -> bool {
    matches!(
        east_asian_width(r),
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth
    )
}

/// Returns `true` if `r` is in the CSS Text 3 space-discard set: a line break
/// between two such runes is removed rather than turned into a space.
#[must_use]
pub fn is_space_discarding_unicode_rune(r: char) -> bool {
    matches!(
        r as u32,
        0x2E80..=0x2EFF     // CJK Radicals Supplement
        | 0x2F00..=0x2FDF   // Kangxi Radicals
        | 0x2FF0..=0x2FFF   // Ideographic Description Characters
        | 0x3000..=0x303F   // CJK Symbols and Punctuation
        | 0x3040..=0x309F   // Hiragana
        | 0x30A0..=0x30FF   // Katakana
        | 0x3130..=0x319F   // Kanbun
        | 0x31C0..=0x31EF   // CJK Strokes
        | 0x31F0..=0x31FF   // Katakana Phonetic Extensions
        | 0x3300..=0x33FF   // CJK Compatibility
        | 0x3400..=0x4DBF   // CJK Unified Ideographs Extension A
        | 0x4E00..=0x9FFF   // CJK Unified Ideographs
        | 0xA000..=0xA48F   // Yi Syllables
        | 0xA490..=0xA4CF   // Yi Radicals
        | 0xF900..=0xFAFF   // CJK Compatibility Ideographs
        | 0xFE10..=0xFE1F   // Vertical Forms
        | 0xFE30..=0xFE4F   // CJK Compatibility Forms
        | 0xFE50..=0xFE6F   // Small Form Variants
        | 0xFF00..=0xFFEF   // Halfwidth and Fullwidth Forms
        | 0x1B000..=0x1B0FF // Kana Supplement
        | 0x1B100..=0x1B12F // Kana Extended-A
        | 0x1B130..=0x1B16F // Small Kana Extension
        | 0x20000..=0x2A6DF // CJK Unified Ideographs Extension B
        | 0x2A700..=0x2B73F // Extension C
        | 0x2B740..=0x2B81F // Extension D
        | 0x2B820..=0x2CEAF // Extension E
        | 0x2CEB0..=0x2EBEF // Extension F
        | 0x2F800..=0x2FA1F // CJK Compatibility Ideographs Supplement
        | 0x30000..=0x3134F // Extension G
    )
}

/// Returns the East Asian width of `r`.
#[must_use]
#[allow(clippy::too_many_lines, clippy::match_same_arms)]
pub fn east_asian_width(r: char) -> EastAsianWidth {
    match r as u32 {
        0x3000 | 0xFF01..=0xFF60 | 0xFFE0..=0xFFE6 => EastAsianWidth::Fullwidth,

        0x20A9
        | 0xFF61..=0xFFBE
        | 0xFFC2..=0xFFC7
        | 0xFFCA..=0xFFCF
        | 0xFFD2..=0xFFD7
        | 0xFFDA..=0xFFDC
        | 0xFFE8..=0xFFEE => EastAsianWidth::Halfwidth,

        0x1100..=0x115F
        | 0x11A3..=0x11A7
        | 0x11FA..=0x11FF
        | 0x2329..=0x232A
        | 0x2E80..=0x2E99
        | 0x2E9B..=0x2EF3
        | 0x2F00..=0x2FD5
        | 0x2FF0..=0x2FFB
        | 0x3001..=0x303E
        | 0x3041..=0x3096
        | 0x3099..=0x30FF
        | 0x3105..=0x312D
        | 0x3131..=0x318E
        | 0x3190..=0x31BA
        | 0x31C0..=0x31E3
        | 0x31F0..=0x321E
        | 0x3220..=0x3247
        | 0x3250..=0x32FE
        | 0x3300..=0x4DBF
        | 0x4E00..=0xA48C
        | 0xA490..=0xA4C6
        | 0xA960..=0xA97C
        | 0xAC00..=0xD7A3
        | 0xD7B0..=0xD7C6
        | 0xD7CB..=0xD7FB
        | 0xF900..=0xFAFF
        | 0xFE10..=0xFE19
        | 0xFE30..=0xFE52
        | 0xFE54..=0xFE66
        | 0xFE68..=0xFE6B
        | 0x1B000..=0x1B001
        | 0x1F200..=0x1F202
        | 0x1F210..=0x1F23A
        | 0x1F240..=0x1F248
        | 0x1F250..=0x1F251
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD => EastAsianWidth::Wide,

        0x0020..=0x007E
        | 0x00A2..=0x00A3
        | 0x00A5..=0x00A6
        | 0x00AC
        | 0x00AF
        | 0x27E6..=0x27ED
        | 0x2985..=0x2986 => EastAsianWidth::Narrow,

        0x00A1
        | 0x00A4
        | 0x00A7..=0x00A8
        | 0x00AA
        | 0x00AD..=0x00AE
        | 0x00B0..=0x00B4
        | 0x00B6..=0x00BA
        | 0x00BC..=0x00BF
        | 0x00C6
        | 0x00D0
        | 0x00D7..=0x00D8
        | 0x00DE..=0x00E1
        | 0x00E6
        | 0x00E8..=0x00EA
        | 0x00EC..=0x00ED
        | 0x00F0
        | 0x00F2..=0x00F3
        | 0x00F7..=0x00FA
        | 0x00FC
        | 0x00FE
        | 0x0101
        | 0x0111
        | 0x0113
        | 0x011B
        | 0x0126..=0x0127
        | 0x012B
        | 0x0131..=0x0133
        | 0x0138
        | 0x013F..=0x0142
        | 0x0144
        | 0x0148..=0x014B
        | 0x014D
        | 0x0152..=0x0153
        | 0x0166..=0x0167
        | 0x016B
        | 0x01CE
        | 0x01D0
        | 0x01D2
        | 0x01D4
        | 0x01D6
        | 0x01D8
        | 0x01DA
        | 0x01DC
        | 0x0251
        | 0x0261
        | 0x02C4
        | 0x02C7
        | 0x02C9..=0x02CB
        | 0x02CD
        | 0x02D0
        | 0x02D8..=0x02DB
        | 0x02DD
        | 0x02DF
        | 0x0300..=0x036F
        | 0x0391..=0x03A1
        | 0x03A3..=0x03A9
        | 0x03B1..=0x03C1
        | 0x03C3..=0x03C9
        | 0x0401
        | 0x0410..=0x044F
        | 0x0451
        | 0x2010
        | 0x2013..=0x2016
        | 0x2018..=0x2019
        | 0x201C..=0x201D
        | 0x2020..=0x2022
        | 0x2024..=0x2027
        | 0x2030
        | 0x2032..=0x2033
        | 0x2035
        | 0x203B
        | 0x203E
        | 0x2074
        | 0x207F
        | 0x2081..=0x2084
        | 0x20AC
        | 0x2103
        | 0x2105
        | 0x2109
        | 0x2113
        | 0x2116
        | 0x2121..=0x2122
        | 0x2126
        | 0x212B
        | 0x2153..=0x2154
        | 0x215B..=0x215E
        | 0x2160..=0x216B
        | 0x2170..=0x2179
        | 0x2189
        | 0x2190..=0x2199
        | 0x21B8..=0x21B9
        | 0x21D2
        | 0x21D4
        | 0x21E7
        | 0x2200
        | 0x2202..=0x2203
        | 0x2207..=0x2208
        | 0x220B
        | 0x220F
        | 0x2211
        | 0x2215
        | 0x221A
        | 0x221D..=0x2220
        | 0x2223
        | 0x2225
        | 0x2227..=0x222C
        | 0x222E
        | 0x2234..=0x2237
        | 0x223C..=0x223D
        | 0x2248
        | 0x224C
        | 0x2252
        | 0x2260..=0x2261
        | 0x2264..=0x2267
        | 0x226A..=0x226B
        | 0x226E..=0x226F
        | 0x2282..=0x2283
        | 0x2286..=0x2287
        | 0x2295
        | 0x2299
        | 0x22A5
        | 0x22BF
        | 0x2312
        | 0x2460..=0x24E9
        | 0x24EB..=0x254B
        | 0x2550..=0x2573
        | 0x2580..=0x258F
        | 0x2592..=0x2595
        | 0x25A0..=0x25A1
        | 0x25A3..=0x25A9
        | 0x25B2..=0x25B3
        | 0x25B6..=0x25B7
        | 0x25BC..=0x25BD
        | 0x25C0..=0x25C1
        | 0x25C6..=0x25C8
        | 0x25CB
        | 0x25CE..=0x25D1
        | 0x25E2..=0x25E5
        | 0x25EF
        | 0x2605..=0x2606
        | 0x2609
        | 0x260E..=0x260F
        | 0x2614..=0x2615
        | 0x261C
        | 0x261E
        | 0x2640
        | 0x2642
        | 0x2660..=0x2661
        | 0x2663..=0x2665
        | 0x2667..=0x266A
        | 0x266C..=0x266D
        | 0x266F
        | 0x269E..=0x269F
        | 0x26BE..=0x26BF
        | 0x26C4..=0x26CD
        | 0x26CF..=0x26E1
        | 0x26E3
        | 0x26E8..=0x26FF
        | 0x273D
        | 0x2757
        | 0x2776..=0x277F
        | 0x2B55..=0x2B59
        | 0x3248..=0x324F
        | 0xE000..=0xF8FF
        | 0xFE00..=0xFE0F
        | 0xFFFD
        | 0x1F100..=0x1F10A
        | 0x1F110..=0x1F12D
        | 0x1F130..=0x1F169
        | 0x1F170..=0x1F19A
        | 0xE0100..=0xE01EF
        | 0xF0000..=0xFFFFD
        | 0x10_0000..=0x10_FFFD => EastAsianWidth::Ambiguous,

        _ => EastAsianWidth::Neutral,
    }
}
