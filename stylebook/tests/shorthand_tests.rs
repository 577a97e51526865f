use stylebook::shorthand::normalize_shorthands;
use stylebook::types::StyleLexicon;

fn house() -> &'static StyleLexicon {
    stylebook::assets::embedded().expect("embedded lexicon parses")
}

#[test]
fn test_rewrites_known_shorthands() {
    let out = normalize_shorthands("configure sd-wan and ztna today", house());
    assert_eq!(out, "configure SD-WAN and ZTNA today");
}

#[test]
fn test_keeps_family_tokens_as_written() {
    // Family tokens keep the author's casing, correct or not.
    let out = normalize_shorthands("pair FortiGate with fortiweb", house());
    assert_eq!(out, "pair FortiGate with fortiweb");
}

#[test]
fn test_company_name_is_not_a_family_token() {
    let out = normalize_shorthands("fortinet leads in sase", house());
    assert_eq!(out, "Fortinet leads in SASE");
}

#[test]
fn test_parenthesized_and_questioned_tokens() {
    let out = normalize_shorthands("zero trust network access (ztna)", house());
    assert_eq!(out, "zero trust network access (ZTNA)");

    let out = normalize_shorthands("ready for sase?", house());
    assert_eq!(out, "ready for SASE?");
}

#[test]
fn test_digit_cores_pass_through() {
    // Tokens with digits never match the letters-and-hyphens pattern.
    let out = normalize_shorthands("launch ec2 and s3 today", house());
    assert_eq!(out, "launch ec2 and s3 today");
}

#[test]
fn test_unknown_tokens_unchanged() {
    let text = "a perfectly ordinary sentence";
    assert_eq!(normalize_shorthands(text, house()), text);
}

#[test]
fn test_empty_text_unchanged() {
    assert_eq!(normalize_shorthands("", house()), "");
}

#[test]
fn test_normalization_is_idempotent() {
    let samples = [
        "configure sd-wan and ztna today",
        "pair FortiGate with fortiweb",
        "fortinet leads in sase",
        "zero trust network access (ztna)",
        "manage it-ot convergence with fortiguard",
    ];
    for sample in samples {
        let once = normalize_shorthands(sample, house());
        let twice = normalize_shorthands(&once, house());
        assert_eq!(twice, once, "not idempotent on {sample:?}");
    }
}
