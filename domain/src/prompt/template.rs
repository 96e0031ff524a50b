//! Prompt templates for the comparison stage

use crate::core::provider::PrimaryProvider;
use crate::round::result::ProviderResult;
use std::collections::BTreeMap;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Closing instruction when a single provider contributed
    pub fn critique_instruction() -> &'static str {
        "Summarize and critique this response. Evaluate its depth, accuracy, \
completeness, and note any errors or omissions. Be concise but thorough."
    }

    /// Closing instruction when several providers contributed
    pub fn compare_instruction() -> &'static str {
        "Compare and contrast these responses. Identify key differences in \
depth, accuracy, style, and completeness. Note any unique insights each model provided \
and any errors or omissions. Be concise but thorough."
    }

    /// Comparison prompt built from the primary results.
    ///
    /// Sections follow canonical provider order regardless of the order in
    /// which providers finished; failed providers get an `[ERROR: ...]`
    /// section instead of response text.
    pub fn comparison_prompt(
        prompt: &str,
        results: &BTreeMap<PrimaryProvider, ProviderResult>,
    ) -> String {
        let active: Vec<PrimaryProvider> = PrimaryProvider::ALL
            .into_iter()
            .filter(|p| results.contains_key(p))
            .collect();
        let names = active
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = format!(
            "The following prompt was sent to {} AI model(s) ({}):\n\nPROMPT: {}\n\n",
            active.len(),
            names,
            prompt
        );

        for provider in &active {
            let body = match &results[provider] {
                ProviderResult::Success(s) => s.response_text.clone(),
                ProviderResult::Failure(f) => format!("[ERROR: {}]", f.error),
            };
            out.push_str(&format!("--- {} ---\n{}\n\n", provider.label(), body));
        }

        if active.len() == 1 {
            out.push_str(Self::critique_instruction());
        } else {
            out.push_str(Self::compare_instruction());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::result::ProviderSuccess;

    fn success(text: &str) -> ProviderResult {
        ProviderResult::Success(ProviderSuccess {
            model: "m".to_string(),
            model_id_requested: "m".to_string(),
            input_tokens: 1,
            output_tokens: 1,
            stop_reason: None,
            latency_seconds: 0.1,
            response_text: text.to_string(),
            search_results: vec![],
        })
    }

    #[test]
    fn test_sections_in_canonical_order() {
        let mut results = BTreeMap::new();
        results.insert(PrimaryProvider::Haiku, success("from haiku"));
        results.insert(PrimaryProvider::Opus, success("from opus"));

        let prompt = PromptTemplate::comparison_prompt("What is Rust?", &results);

        assert!(prompt.starts_with(
            "The following prompt was sent to 2 AI model(s) (Opus, Haiku):\n\nPROMPT: What is Rust?\n\n"
        ));
        let opus = prompt.find("--- OPUS ---\nfrom opus").unwrap();
        let haiku = prompt.find("--- HAIKU ---\nfrom haiku").unwrap();
        assert!(opus < haiku);
        assert!(!prompt.contains("SONNET"));
        assert!(prompt.ends_with(PromptTemplate::compare_instruction()));
    }

    #[test]
    fn test_single_provider_gets_critique_instruction() {
        let mut results = BTreeMap::new();
        results.insert(PrimaryProvider::Sonnet, success("only me"));

        let prompt = PromptTemplate::comparison_prompt("q", &results);
        assert!(prompt.contains("1 AI model(s) (Sonnet)"));
        assert!(prompt.ends_with(PromptTemplate::critique_instruction()));
    }

    #[test]
    fn test_all_failed_still_lists_every_section() {
        let mut results = BTreeMap::new();
        for p in PrimaryProvider::ALL {
            results.insert(p, ProviderResult::failure(p, "m", format!("{} down", p)));
        }

        let prompt = PromptTemplate::comparison_prompt("q", &results);
        assert_eq!(prompt.matches("[ERROR: ").count(), 3);
        let a = prompt.find("--- OPUS ---\n[ERROR: opus down]").unwrap();
        let b = prompt.find("--- SONNET ---\n[ERROR: sonnet down]").unwrap();
        let c = prompt.find("--- HAIKU ---\n[ERROR: haiku down]").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_instructions_ask_for_conciseness() {
        assert!(PromptTemplate::critique_instruction().contains("concise"));
        assert!(PromptTemplate::compare_instruction().contains("concise"));
        assert!(PromptTemplate::compare_instruction().contains("unique insights"));
    }
}
