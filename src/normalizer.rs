/// Strips currency and placeholder words from a raw label.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    tokens: Vec<String>,
}

impl TextNormalizer {
    /// Longer tokens are removed first so that a token containing another one
    /// (e.g. "تومانءء" and "تومان") never leaves a fragment behind.
    pub fn new(tokens: &[String]) -> Self {
        let mut tokens: Vec<String> = tokens.iter().filter(|t| !t.is_empty()).cloned().collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { tokens }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut label = raw.to_string();
        // Removing one token can join the halves of another, so repeat until stable.
        loop {
            let before = label.len();
            for token in &self.tokens {
                if label.contains(token.as_str()) {
                    label = label.replace(token.as_str(), "");
                }
            }
            if label.len() == before {
                break;
            }
        }
        label.trim().to_string()
    }
}
