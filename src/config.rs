/// Process-wide configuration, resolved once at startup from CLI flags and
/// their environment fallbacks. Nothing else in the crate reads the
/// environment directly; the OpenAI API key is picked up by the client
/// library from its own standard variable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the transcript proxy listens on.
    pub port: u16,
    /// Preferred caption languages, in preference order.
    pub languages: Vec<String>,
    /// Model name handed to the chat-completion collaborator.
    pub model: String,
}

impl AppConfig {
    pub fn new(port: u16, languages: &str, model: String) -> Self {
        Self {
            port,
            languages: split_languages(languages),
            model,
        }
    }
}

fn split_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_languages() {
        let config = AppConfig::new(3001, "en, es ,de", "gpt-4o-mini".to_string());
        assert_eq!(config.languages, vec!["en", "es", "de"]);
    }

    #[test]
    fn drops_empty_language_entries() {
        let config = AppConfig::new(3001, "en,,", "gpt-4o-mini".to_string());
        assert_eq!(config.languages, vec!["en"]);
    }
}
