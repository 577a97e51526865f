// src/openai.rs
// Chat-completions advisor for the meta fields and nav tabs. One blocking
// client, two casing prompts, plus the unknown-term scan.

use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use thiserror::Error;

use copydesk_core::config::AdvisorConfig;
use copydesk_core::services::advisor::{Advisor, Opinion};
use stylebook::casing::CaseRule;
use stylebook::types::StyleLexicon;

const FORMATTING_SYSTEM: &str = "You are a precise text formatting assistant.";
const TERMS_SYSTEM: &str = "You are a technical term analysis assistant.";
const CASE_MAX_TOKENS: u32 = 500;
const TERMS_MAX_TOKENS: u32 = 200;
const NO_CHANGE: &str = "No change";

// Abbreviations the terms scan must not flag, beyond the house lexicon.
const COMMON_ABBREVIATIONS: &[&str] = &[
    "ci/cd", "cicd", "ci-cd",
    "sso", "mfa", "2fa",
    "saas", "paas", "iaas",
    "gdpr", "hipaa", "pci-dss", "sox",
    "ceo", "cto", "cio", "ciso",
    "b2b", "b2c",
    "roi", "kpi",
    "rest", "soap", "json", "xml",
    "tcp", "udp", "ip", "dns", "http", "https", "ssh", "ftp",
    "lan", "wan", "vpn", "nat",
    "cpu", "gpu", "ram", "ssd",
    "ui", "ux",
    "pdf", "csv",
    "usa", "uk", "eu",
];

const TITLE_CASE_PROMPT: &str = r#"You are a verbatim casing machine.

Task:
1. Accept exactly one line of text.
2. Convert the entire line to strict US-English Title Case.
   - Capitalize all nouns, verbs, adjectives, adverbs, pronouns.
   - Lowercase articles (a, an, the), coordinating conjunctions (vs, and, but, or, for, nor), and prepositions of four letters or fewer unless they are the first or last word.

CRITICAL EXCEPTIONS - PRESERVE EXACTLY AS-IS:
   - Product families: ANY word starting with "{prefix}" - preserve EXACT casing
   - Acronym plurals: uppercase acronyms ending in lowercase 's' (VPNs, APIs, URLs, etc.) - preserve as-is
   - Technical acronyms: SIEM, SOAR, XDR, EDR, NDR, MDR, IPS, IDS, WAF, DDoS, etc. - keep UPPERCASE

3. If the converted string is character-for-character identical to the input, output exactly: No change
   Otherwise output the converted string - do not drop, add, or reorder any characters, words, or punctuation.

Zero tolerance for omissions.

Input:
{text}

Output:"#;

const SENTENCE_CASE_PROMPT: &str = r#"You are a sentence-case formatter.

Task: convert the provided string to exact US professional English Sentence Case and return ONLY the result or "No change" if already correct.

Sentence Case rules:
* Capitalize the first word and proper nouns only.
* Generic cybersecurity terms (firewall, threat actor, endpoint detection, etc.) are NOT proper nouns.

CRITICAL EXCEPTIONS - PRESERVE EXACTLY AS-IS:
* Product families: ANY word starting with "{prefix}" - preserve EXACT casing
* Acronym plurals: uppercase acronyms ending in lowercase 's' (VPNs, APIs, URLs, SDKs, etc.) - preserve as-is
* Technical acronyms: SIEM, SOAR, XDR, EDR, NDR, MDR, IPS, IDS, WAF, DDoS, AppSec, DevSecOps, etc. - keep UPPERCASE

Input:
{text}

Output:"#;

const UNKNOWN_TERMS_PROMPT: &str = r#"You are a technical abbreviation and acronym detector for cybersecurity content.

Known house terms: {known_terms}

Common abbreviations: {common_terms}

Task:
Analyze this text and identify ANY technical abbreviations, acronyms, or specialized terms that are NOT in the known lists above.

Rules:
1. Only flag technical/specialized terms (not common English words)
2. Flag abbreviations in ANY case (uppercase, lowercase, mixed)
3. Include product names, technical acronyms, industry terms
4. Do NOT flag terms already in the known lists

Text to analyze:
{text}

If unknown terms found, respond in this format:
UNKNOWN: [term1], [term2], [term3]

If no unknown terms, respond:
CLEAR

Output:"#;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OPENAI_API_KEY is not set")]
    MissingKey,
    #[error("chat request failed with status {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("unparseable chat response: {0}")]
    BadPayload(String),
}

pub struct OpenAiAdvisor {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    brand_prefix: String,   // display form, e.g. "Forti"
    known_terms: String,    // comma-joined lexicon shorthands
}

impl OpenAiAdvisor {
    pub fn new(cfg: &AdvisorConfig, api_key: String, lexicon: &StyleLexicon) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        let known_terms = lexicon
            .terms
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            api_key,
            model: cfg.model.clone(),
            brand_prefix: display_prefix(&lexicon.brand_prefix),
            known_terms,
        })
    }

    /// Read the API key from OPENAI_API_KEY.
    pub fn from_env(cfg: &AdvisorConfig, lexicon: &StyleLexicon) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| OpenAiError::MissingKey)?;
        Self::new(cfg, api_key, lexicon)
    }

    fn chat(&self, system: &str, user: &str, max_tokens: u32) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ],
            "temperature": 0,
            "max_tokens": max_tokens
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OpenAiError::BadStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let payload: Value = response.json()?;
        let content = payload["choices"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| OpenAiError::BadPayload(payload.to_string()))?;
        Ok(content.trim().to_string())
    }
}

impl Advisor for OpenAiAdvisor {
    fn case_opinion(&self, rule: CaseRule, text: &str) -> Result<Opinion> {
        if text.is_empty() {
            return Ok(Opinion {
                valid: true,
                corrected: String::new(),
                explanation: String::new(),
            });
        }
        // Capital-cased fields are never advisor-eligible; the title
        // template is the nearest match if one ever arrives here.
        let template = match rule {
            CaseRule::Sentence => SENTENCE_CASE_PROMPT,
            CaseRule::Title | CaseRule::Capital => TITLE_CASE_PROMPT,
        };
        let prompt = template
            .replace("{prefix}", &self.brand_prefix)
            .replace("{text}", text);
        let answer = self.chat(FORMATTING_SYSTEM, &prompt, CASE_MAX_TOKENS)?;
        Ok(parse_case_answer(rule, text, &answer))
    }

    fn unknown_terms(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let prompt = UNKNOWN_TERMS_PROMPT
            .replace("{known_terms}", &self.known_terms)
            .replace("{common_terms}", &COMMON_ABBREVIATIONS.join(", "))
            .replace("{text}", text);
        let answer = self.chat(TERMS_SYSTEM, &prompt, TERMS_MAX_TOKENS)?;
        Ok(parse_terms_answer(&answer))
    }
}

fn display_prefix(prefix: &str) -> String {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn parse_case_answer(rule: CaseRule, text: &str, answer: &str) -> Opinion {
    if answer == NO_CHANGE {
        Opinion {
            valid: true,
            corrected: text.to_string(),
            explanation: format!("Already in correct {}", rule.as_str()),
        }
    } else {
        Opinion {
            valid: false,
            corrected: answer.to_string(),
            explanation: format!("Should be: {answer}"),
        }
    }
}

fn parse_terms_answer(answer: &str) -> Vec<String> {
    if answer == "CLEAR" {
        return Vec::new();
    }
    match answer.strip_prefix("UNKNOWN:") {
        Some(rest) => rest
            .split(',')
            .map(|t| t.trim().trim_matches(|c| c == '[' || c == ']').trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_answer_no_change_is_valid() {
        let op = parse_case_answer(CaseRule::Title, "Secure Your Cloud", "No change");
        assert!(op.valid);
        assert_eq!(op.corrected, "Secure Your Cloud");
        assert_eq!(op.explanation, "Already in correct Title Case");
    }

    #[test]
    fn case_answer_correction_is_invalid() {
        let op = parse_case_answer(CaseRule::Sentence, "secure your cloud", "Secure your cloud");
        assert!(!op.valid);
        assert_eq!(op.corrected, "Secure your cloud");
        assert_eq!(op.explanation, "Should be: Secure your cloud");
    }

    #[test]
    fn terms_answer_clear_is_empty() {
        assert!(parse_terms_answer("CLEAR").is_empty());
    }

    #[test]
    fn terms_answer_parses_bracketed_list() {
        assert_eq!(
            parse_terms_answer("UNKNOWN: [glorbtech], [zibble], [qronix]"),
            vec!["glorbtech", "zibble", "qronix"]
        );
        assert_eq!(parse_terms_answer("UNKNOWN: splunkx"), vec!["splunkx"]);
    }

    #[test]
    fn terms_answer_ignores_unexpected_shapes() {
        assert!(parse_terms_answer("I could not analyze this text.").is_empty());
        assert!(parse_terms_answer("UNKNOWN:").is_empty());
    }

    #[test]
    fn prefix_is_displayed_capitalized() {
        assert_eq!(display_prefix("forti"), "Forti");
        assert_eq!(display_prefix(""), "");
    }
}
