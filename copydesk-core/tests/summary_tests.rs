// tests/summary_tests.rs
// Roll-up tables: summary rows, failed items, unknown terms.

use copydesk_core::services::brief::{
    ContentBrief, CtaSection, FaqEntry, FaqSection, Header, HeaderLevel, NavTab, ProductNav,
};
use copydesk_core::services::reviewer::{FieldRole, Verdict};
use copydesk_core::services::summary::{build_failed_items, build_summary, collect_unknown_terms};

fn verdict(role: FieldRole, original: &str, corrected: &str, passed: bool) -> Verdict {
    Verdict {
        role,
        rule_name: role.rule().as_str(),
        original_text: original.to_string(),
        passed,
        corrected_text: corrected.to_string(),
        category: role.category(),
        ai_consulted: false,
        ai_opinion: None,
        unknown_terms: None,
    }
}

fn sample_brief() -> ContentBrief {
    ContentBrief {
        meta_title: "Understanding EDR Today".into(),
        meta_description: "Fortinet offers EDR.".into(),
        h1: "Cloud Security Essentials".into(),
        header_caption: "We rely on SASE".into(),
        headers: vec![
            Header {
                level: HeaderLevel::H2,
                text: "Secure Access".into(),
            },
            Header {
                level: HeaderLevel::H2,
                text: "Zero Trust Rollout".into(),
            },
            Header {
                level: HeaderLevel::H3,
                text: "Why it matters".into(),
            },
        ],
        faqs: FaqSection {
            header: "Frequently Asked Questions".into(),
            questions: vec![
                FaqEntry {
                    question: "What is SASE?".into(),
                    answer: "A converged offering.".into(),
                },
                FaqEntry {
                    question: "What is ZTNA?".into(),
                    answer: "Access control per session.".into(),
                },
            ],
        },
        product_nav: ProductNav {
            tabs: vec![
                NavTab { text: "Overview".into(), ..Default::default() },
                NavTab { text: "Pricing".into(), ..Default::default() },
                NavTab { text: "Docs".into(), ..Default::default() },
            ],
        },
        cta: CtaSection {
            text: "Talk to us".into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ----------------- Summary table -----------------

#[test]
fn summary_has_twelve_fixed_rows() {
    let rows = build_summary(&sample_brief(), &[]);
    let components: Vec<&str> = rows.iter().map(|r| r.component).collect();
    assert_eq!(
        components,
        vec![
            "Meta Title",
            "Meta Description",
            "H1",
            "Header Caption",
            "H2 Headers",
            "H3 Headers",
            "H4 Headers",
            "FAQ H2 Header",
            "FAQ Questions",
            "FAQ Answers",
            "Product Navigation Tabs",
            "CTA Section",
        ]
    );

    assert_eq!(rows[4].checked, 2);
    assert_eq!(rows[5].checked, 1);
    assert_eq!(rows[6].checked, 0);
    assert_eq!(rows[8].checked, 2);
    assert_eq!(rows[9].checked, 2);
    assert_eq!(rows[10].checked, 3);
    assert!(rows[11].recognized);
    assert_eq!(rows[11].checked, 1);
}

#[test]
fn cta_row_is_na_when_absent() {
    let mut brief = sample_brief();
    brief.cta.text = String::new();

    let rows = build_summary(&brief, &[]);
    let cta = &rows[11];
    assert!(!cta.recognized);
    assert_eq!(cta.checked, 0);
    assert_eq!(cta.status, "N/A");
}

#[test]
fn verdict_tallies_drive_status() {
    let verdicts = vec![
        verdict(
            FieldRole::MetaTitle,
            "Understanding EDR Today",
            "Understanding EDR Today",
            true,
        ),
        verdict(FieldRole::H2, "secure access", "Secure Access", false),
        verdict(FieldRole::H2, "Zero Trust Rollout", "Zero Trust Rollout", true),
    ];

    let rows = build_summary(&sample_brief(), &verdicts);
    assert_eq!(rows[0].passed, 1);
    assert_eq!(rows[0].status, "PASS");
    assert_eq!(rows[4].passed, 1);
    assert_eq!(rows[4].failed, 1);
    assert_eq!(rows[4].status, "FAIL");
    // No verdicts landed here, nothing failed.
    assert_eq!(rows[6].status, "PASS");
}

// ----------------- Failed items -----------------

#[test]
fn failed_items_capture_fix_and_recommendation() {
    let verdicts = vec![verdict(
        FieldRole::H1,
        "cloud security essentials",
        "Cloud Security Essentials",
        false,
    )];

    let items = build_failed_items(&verdicts);
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.kind, "H1");
    assert_eq!(item.category, "Headers");
    assert_eq!(item.current, "cloud security essentials");
    assert_eq!(item.recommended, "Cloud Security Essentials");
    assert_eq!(
        item.fix,
        "cloud → Cloud, security → Security, essentials → Essentials"
    );
}

#[test]
fn failed_items_skip_passing_and_empty_entries() {
    let verdicts = vec![
        verdict(FieldRole::H1, "Cloud Security", "Cloud Security", true),
        verdict(FieldRole::H2, "   ", "", false),
        verdict(FieldRole::H3, "left as is", "", false),
    ];
    assert!(build_failed_items(&verdicts).is_empty());
}

#[test]
fn failed_items_skip_cosmetic_differences() {
    let verdicts = vec![
        // Inner spacing shifts produce no word edits.
        verdict(FieldRole::H1, "Cloud  Security", "Cloud Security", false),
        // Identical once decorative quotes are stripped.
        verdict(FieldRole::H2, "Cloud Security", "\"Cloud Security\"", false),
    ];
    assert!(build_failed_items(&verdicts).is_empty());
}

#[test]
fn failed_item_recommendation_drops_decorative_quotes() {
    let verdicts = vec![verdict(
        FieldRole::MetaTitle,
        "securing the edge",
        "\"Securing the Edge\"",
        false,
    )];

    let items = build_failed_items(&verdicts);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].recommended, "Securing the Edge");
    assert_eq!(items[0].fix, "securing → Securing, edge → Edge");
}

#[test]
fn table_category_comes_from_label_keywords() {
    let verdicts = vec![
        verdict(FieldRole::FaqHeader, "common questions", "Common Questions", false),
        verdict(FieldRole::HeaderCaption, "stay protected", "Stay protected", false),
        verdict(FieldRole::FaqQuestion, "what is sase?", "What is SASE?", false),
        verdict(FieldRole::NavTab, "overview", "Overview", false),
        verdict(FieldRole::CtaText, "get started", "Get started", false),
        verdict(FieldRole::MetaDescription, "protect the edge", "Protect the edge", false),
    ];

    let items = build_failed_items(&verdicts);
    let categories: Vec<&str> = items.iter().map(|i| i.category).collect();
    // "FAQ H2 Header" and "Header Caption" both land under Headers.
    assert_eq!(
        categories,
        vec!["Headers", "Headers", "FAQ", "Navigation", "CTA", "Metadata"]
    );
}

// ----------------- Unknown terms -----------------

#[test]
fn unknown_terms_keyed_by_field_label() {
    let mut flagged = verdict(FieldRole::MetaTitle, "a", "b", false);
    flagged.unknown_terms = Some(vec!["glorbtech".into(), "zibble".into()]);
    let mut empty = verdict(FieldRole::NavTab, "c", "d", false);
    empty.unknown_terms = Some(Vec::new());
    let none = verdict(FieldRole::H1, "e", "f", false);

    let map = collect_unknown_terms(&[flagged, empty, none]);
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get("Meta Title"),
        Some(&vec!["glorbtech".to_string(), "zibble".to_string()])
    );
}
