#![expect(missing_docs)]

use core::fmt::Write;

use bstr::ByteSlice;
use insta::assert_snapshot;

fn render(cases: &[&str], transform: impl Fn(&[u8]) -> Vec<u8>) -> String {
    let mut out = String::new();
    for case in cases {
        writeln!(out, "{case} => {}", transform(case.as_bytes()).as_bstr()).unwrap();
    }
    out
}

#[test]
fn snapshot_escape_html() {
    let out = render(
        &[
            r#"<p class="x">"#,
            "Tom & Jerry",
            "already &amp; escaped",
            "nothing to do",
        ],
        |v| mdbytes::escape_html(v).into_owned(),
    );
    assert_snapshot!(out, @r#"
    <p class="x"> => &lt;p class=&quot;x&quot;&gt;
    Tom & Jerry => Tom &amp; Jerry
    already &amp; escaped => already &amp;amp; escaped
    nothing to do => nothing to do
    "#);
}

#[test]
fn snapshot_resolve_references() {
    let out = render(
        &[
            r"\*not emphasis\*",
            "&copy; 2024 &#169; &#xA9;",
            "&bogus; &#xZZ; &#12345678;",
            "&#0; &#xD800;",
            r"C:\path\to",
        ],
        |v| mdbytes::resolve_references(v).into_owned(),
    );
    assert_snapshot!(out, @r"
    \*not emphasis\* => *not emphasis*
    &copy; 2024 &#169; &#xA9; => © 2024 © ©
    &bogus; &#xZZ; &#12345678; => &bogus; &#xZZ; &#12345678;
    &#0; &#xD800; => � �
    C:\path\to => C:\path\to
    ");
}

#[test]
fn snapshot_url_escape() {
    let out = render(
        &[
            "https://example.com/a b",
            "/search?q=caf&eacute;",
            "foo<bar>",
            "%zz%41",
            "/日本",
            r"\[x\]",
        ],
        |v| mdbytes::url_escape(v, true).into_owned(),
    );
    assert_snapshot!(out, @r"
    https://example.com/a b => https://example.com/a%20b
    /search?q=caf&eacute; => /search?q=caf%C3%A9
    foo<bar> => foo%3Cbar%3E
    %zz%41 => %25zz%41
    /日本 => /%E6%97%A5%E6%9C%AC
    \[x\] => %5Bx%5D
    ");
}

#[test]
fn snapshot_case_folding() {
    let out = render(
        &["HTML", "Straße", "ΌΣΟΣ", "ﬁle", "İstanbul"],
        |v| mdbytes::do_full_unicode_case_folding(v).into_owned(),
    );
    assert_snapshot!(out, @r"
    HTML => html
    Straße => strasse
    ΌΣΟΣ => όσοσ
    ﬁle => file
    İstanbul => i̇stanbul
    ");
}

#[test]
fn snapshot_visualize_spaces() {
    let out = mdbytes::visualize_spaces(b"a b\tc\r");
    assert_snapshot!(out.as_bstr().to_string(), @"a[SPACE]b[TAB]c[CR]");
}
