//! Both parser variants must agree on the common-subset grammar.
//!
//! The staleness auditor can run against either variant, so any divergence
//! on the fields it reads would make the full engine and the standalone
//! auditor disagree on findings. Every fixture here is run through both
//! parsers and compared field by field.

use curator_frontmatter::{DegradedParser, Document, FrontMatterParser, FullParser};

/// The fields the staleness auditor consumes
const AGREED_SCALARS: &[&str] = &[
    "id",
    "status",
    "review_by",
    "last_verified",
    "deprecated_date",
];

const FIXTURES: &[&str] = &[
    // plain scalars
    "---\nid: pat-001\nstatus: validated\nreview_by: 2020-01-01\n---\nBody.\n",
    // quoting styles
    "---\nid: \"pat-002\"\nstatus: 'draft'\nlast_verified: 2024-02-29\n---\n",
    // block lists, closed by the next key
    "---\nid: pat-003\nrelated:\n  - pat-001\n  - pat-002\nstatus: deprecated\ndeprecated_date: 2023-11-05\n---\n",
    // blank line inside a list
    "---\nid: pat-004\nrelated:\n  - pat-001\n\n  - pat-003\n---\n",
    // list closed by end of header
    "---\nid: pat-005\nstatus: validated\nrelated:\n  - pat-001\n---\nBody text\n",
    // empty list key
    "---\nid: pat-006\nrelated:\nstatus: draft\n---\n",
    // extra whitespace
    "---\nid:    pat-007   \nstatus:   validated\nreview_by:  2019-12-31 \n---\n",
    // quoted scalars and list items with padding inside the quotes
    "---\nid: \" pat-009 \"\nstatus: ' validated '\nrelated:\n  - \" pat-001 \"\n---\n",
    // no front matter at all
    "# Just a document\n\nNothing structured here.\n",
    // empty header block
    "---\n---\nOnly body.\n",
];

fn parse_both(text: &str) -> (Document, Document) {
    let full = FullParser::new().parse(text).expect("full parse");
    let degraded = DegradedParser::new().parse(text).expect("degraded parse");
    (full, degraded)
}

#[test]
fn agreed_scalar_fields_match() {
    for (i, fixture) in FIXTURES.iter().enumerate() {
        let (full, degraded) = parse_both(fixture);
        for field in AGREED_SCALARS {
            assert_eq!(
                full.header.scalar(field),
                degraded.header.scalar(field),
                "fixture {} field {}",
                i,
                field
            );
        }
    }
}

#[test]
fn related_lists_match() {
    for (i, fixture) in FIXTURES.iter().enumerate() {
        let (full, degraded) = parse_both(fixture);
        assert_eq!(
            full.header.string_list("related"),
            degraded.header.string_list("related"),
            "fixture {}",
            i
        );
    }
}

#[test]
fn bodies_match() {
    for (i, fixture) in FIXTURES.iter().enumerate() {
        let (full, degraded) = parse_both(fixture);
        assert_eq!(full.body, degraded.body, "fixture {}", i);
    }
}
