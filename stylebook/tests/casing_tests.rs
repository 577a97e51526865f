use stylebook::casing::{apply, capital_case, repair_acronym_plurals, sentence_case, title_case, CaseRule};
use stylebook::types::StyleLexicon;

fn house() -> &'static StyleLexicon {
    stylebook::assets::embedded().expect("embedded lexicon parses")
}

// ----------------- Capital Case -----------------

#[test]
fn test_capital_rewrites_lowercase_words() {
    let out = capital_case("firewall best practices", house());
    assert!(!out.passed);
    assert_eq!(out.corrected, "Firewall Best Practices");
}

#[test]
fn test_capital_accepts_correct_text() {
    let out = capital_case("Firewall Best Practices", house());
    assert!(out.passed);
    assert_eq!(out.corrected, "Firewall Best Practices");
}

#[test]
fn test_capital_keeps_family_names_verbatim() {
    let out = capital_case("FortiGate Cloud Firewall", house());
    assert!(out.passed);

    // Author casing wins for family names, even odd casing.
    let out = capital_case("fortiGATE rules", house());
    assert_eq!(out.corrected, "fortiGATE Rules");
}

#[test]
fn test_capital_keeps_all_caps_words() {
    let out = capital_case("VPN Gateway Setup", house());
    assert!(out.passed);
    assert_eq!(out.corrected, "VPN Gateway Setup");
}

#[test]
fn test_capital_faqs_and_vs_exceptions() {
    let out = capital_case("faqs about firewalls", house());
    assert_eq!(out.corrected, "FAQs About Firewalls");

    let out = capital_case("firewall vs proxy", house());
    assert_eq!(out.corrected, "Firewall Vs Proxy");
}

#[test]
fn test_capital_leading_punctuation_blocks_capitalization() {
    // The first character is the paren, so the word itself stays lower.
    let out = capital_case("(cloud native)", house());
    assert_eq!(out.corrected, "(cloud Native)");
}

#[test]
fn test_capital_repairs_acronym_plurals() {
    let out = capital_case("manage vpns and apis", house());
    assert_eq!(out.corrected, "Manage VPNs And APIs");
}

#[test]
fn test_capital_empty_text_passes() {
    let out = capital_case("", house());
    assert!(out.passed);
    assert_eq!(out.corrected, "");
}

#[test]
fn test_capital_whitespace_only_collapses() {
    let out = capital_case("   ", house());
    assert!(!out.passed);
    assert_eq!(out.corrected, "");
}

// ----------------- Title Case -----------------

#[test]
fn test_title_lowers_function_words_mid_title() {
    let out = title_case("The Future Of Network Security", house());
    assert!(!out.passed);
    assert_eq!(out.corrected, "The Future of Network Security");
}

#[test]
fn test_title_capitalizes_first_and_last_function_words() {
    let out = title_case("the power within", house());
    assert_eq!(out.corrected, "The Power Within");

    // Trailing function words are capitalized, not lowered.
    let out = title_case("What We Stand For", house());
    assert!(out.passed);
}

#[test]
fn test_title_vs_depends_on_position() {
    let out = title_case("Firewall vs Proxy", house());
    assert!(out.passed);

    let out = title_case("Security Appliance vs The Cloud", house());
    assert_eq!(out.corrected, "Security Appliance vs the Cloud");
}

#[test]
fn test_title_rewrites_shorthands() {
    let out = title_case("understanding edr today", house());
    assert_eq!(out.corrected, "Understanding EDR Today");

    let out = title_case("Endpoint Security (edr)", house());
    assert_eq!(out.corrected, "Endpoint Security (EDR)");
}

#[test]
fn test_title_shorthand_keeps_attached_comma() {
    let out = title_case("edr, explained", house());
    assert_eq!(out.corrected, "EDR, Explained");
}

#[test]
fn test_title_resolves_digit_bearing_shorthands() {
    // The shorthand pre-pass skips digit cores; the title policy catches them.
    let out = title_case("Deploying On ec2 Instances", house());
    assert_eq!(out.corrected, "Deploying on EC2 Instances");
}

#[test]
fn test_title_function_word_drops_sentence_punctuation() {
    // "of." is lowered to "of"; the period does not survive.
    let out = title_case("Future of. Security", house());
    assert_eq!(out.corrected, "Future of Security");

    // A comma is not stripped, so "of," is not a function-word hit.
    let out = title_case("Future of, Security", house());
    assert_eq!(out.corrected, "Future Of, Security");
}

#[test]
fn test_title_keeps_family_names_verbatim() {
    let out = title_case("FortiSASE in the Enterprise", house());
    assert!(out.passed);
}

// ----------------- Sentence case -----------------

#[test]
fn test_sentence_golden_two_sentences() {
    let out = sentence_case("fortinet offers edr. it also offers xdr.", house());
    assert!(!out.passed);
    assert_eq!(out.corrected, "Fortinet offers EDR. It also offers XDR.");
}

#[test]
fn test_sentence_lowers_mid_sentence_capitals() {
    let out = sentence_case("The Cloud is Secure", house());
    assert_eq!(out.corrected, "The cloud is secure");
}

#[test]
fn test_sentence_rearms_after_all_caps_word() {
    // The flag re-arms after "VPN." even though the word itself is kept.
    let out = sentence_case("Deploy VPN. then relax.", house());
    assert_eq!(out.corrected, "Deploy VPN. Then relax.");
}

#[test]
fn test_sentence_rearms_after_exclamation_and_question() {
    let out = sentence_case("really? yes! believe it.", house());
    assert_eq!(out.corrected, "Really? Yes! Believe it.");
}

#[test]
fn test_sentence_shorthand_keeps_edge_punctuation() {
    let out = sentence_case("we rely on sase, not luck", house());
    assert_eq!(out.corrected, "We rely on SASE, not luck");
}

#[test]
fn test_sentence_keeps_family_names_verbatim() {
    let out = sentence_case("Protect everything with FortiGuard services", house());
    assert!(out.passed);
}

#[test]
fn test_sentence_accepts_correct_text() {
    let out = sentence_case("Fortinet offers EDR. It also offers XDR.", house());
    assert!(out.passed);
}

#[test]
fn test_sentence_first_word_already_capitalized_is_untouched() {
    let out = sentence_case("IT teams love automation", house());
    assert!(out.passed);
}

// ----------------- Repair -----------------

#[test]
fn test_repair_rewrites_known_plurals() {
    assert_eq!(repair_acronym_plurals("Manage Vpns Faster"), "Manage VPNs Faster");
    assert_eq!(repair_acronym_plurals("Ids And Ips Compared"), "IDs And IPs Compared");
}

#[test]
fn test_repair_respects_word_boundaries() {
    assert_eq!(repair_acronym_plurals("Avpns"), "Avpns");
    assert_eq!(repair_acronym_plurals("Vpnsx"), "Vpnsx");
}

// ----------------- Fixed points -----------------

#[test]
fn test_corrected_output_is_a_fixed_point() {
    let samples = [
        "manage vpns and apis",
        "The Future Of Network Security",
        "fortinet offers edr. it also offers xdr.",
        "faqs about FortiGate vs the rest",
        "Deploy VPN. then relax.",
    ];
    for rule in [CaseRule::Capital, CaseRule::Title, CaseRule::Sentence] {
        for sample in samples {
            let first = apply(rule, sample, house());
            let second = apply(rule, &first.corrected, house());
            assert!(
                second.passed,
                "{:?} not stable on {:?}: {:?} -> {:?}",
                rule, sample, first.corrected, second.corrected
            );
            assert_eq!(second.corrected, first.corrected);
        }
    }
}
