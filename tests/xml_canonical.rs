mod common;

use safeincloud_rs::xml::canonicalize;

const DOCUMENTS: [&str; 5] = [
    "<a/>",
    "<a><b>text</b><c/></a>",
    "<a>\n    <b x=\"1\" y=\"2\">one &lt; two</b>\n</a>",
    "<a><!-- note --><b><![CDATA[raw <data>]]></b></a>",
    "<a>mixed <b>content</b> here</a>",
];

#[test]
fn canonical_is_idempotent() {
    for doc in DOCUMENTS.iter() {
        let once = canonicalize(doc.as_bytes()).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(once, twice, "document {:?}", doc);
    }
}

#[test]
fn canonical_of_sample() {
    let output = canonicalize(common::SAMPLE_XML.as_bytes()).unwrap();
    assert_eq!(common::body(&output), common::SAMPLE_CANONICAL_BODY);
}

#[test]
fn truncated_trailing_element() {
    let doc = b"<database><card title=\"a\"><field>x</field></card><card title=\"b\"><fi";
    let output = canonicalize(doc).unwrap();
    assert_eq!(
        common::body(&output),
        "<database>\n  <card title=\"a\">\n    <field>x</field>\n  </card>\n  <card title=\"b\">"
    );
}

#[test]
fn truncated_every_prefix() {
    let full = common::SAMPLE_XML.as_bytes();
    let canonical = common::body(&canonicalize(full).unwrap());
    for cut in 0..full.len() {
        let partial = canonicalize(&full[..cut]).unwrap();
        let body = common::body(&partial);
        assert!(
            canonical.starts_with(&body),
            "prefix of {} bytes produced {:?}",
            cut,
            body
        );
    }
}

#[test]
fn malformed_token_stops_output() {
    let doc = b"<database><card title=\"a\"></card><<broken/></database>";
    let output = canonicalize(doc).unwrap();
    assert_eq!(
        common::body(&output),
        "<database>\n  <card title=\"a\"></card>"
    );
}

#[test]
fn mismatched_end_tag_stops_output() {
    let doc = b"<database><card></wrong></database>";
    let output = canonicalize(doc).unwrap();
    assert_eq!(common::body(&output), "<database>\n  <card>");
}

#[test]
fn text_whitespace_kept() {
    let output = canonicalize(b"<a><b>  padded  </b></a>").unwrap();
    assert_eq!(common::body(&output), "<a>\n  <b>  padded  </b>\n</a>");
}

#[test]
fn empty_root_element() {
    let output = canonicalize(b"<a/>").unwrap();
    assert_eq!(common::body(&output), "<a></a>");
}

#[test]
fn empty_elements_stay_on_one_line() {
    let doc = b"<database>\n\t<label id=\"1\"/>\n\t<card>\n\t\t<notes></notes>\n\t</card>\n</database>";
    let output = canonicalize(doc).unwrap();
    assert_eq!(
        common::body(&output),
        "<database>\n  <label id=\"1\"></label>\n  <card>\n    <notes></notes>\n  </card>\n</database>"
    );
}

#[test]
fn mixed_content_kept_inline() {
    let output = canonicalize(b"<a>t<b/>u</a>").unwrap();
    assert_eq!(common::body(&output), "<a>t<b></b>u</a>");
}

#[test]
fn whitespace_only_values_kept() {
    let doc = b"<card>\n\t<field type=\"password\">   </field>\n\t<notes>\t</notes>\n</card>";
    let output = canonicalize(doc).unwrap();
    assert_eq!(
        common::body(&output),
        "<card>\n  <field type=\"password\">   </field>\n  <notes>\t</notes>\n</card>"
    );
    assert_eq!(canonicalize(&output).unwrap(), output);
}

#[test]
fn whitespace_only_value_dropped_on_truncation() {
    let output = canonicalize(b"<card><field>   ").unwrap();
    assert_eq!(common::body(&output), "<card>\n  <field>");
}
