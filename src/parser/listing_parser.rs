// Listing text -> ProductRecord classification
use crate::model::ProductRecord;
use crate::normalizer::TextNormalizer;
use std::collections::HashSet;

/// Splits a normalized label into brand and model using an exact brand allow-list.
#[derive(Debug, Clone)]
pub struct RecordClassifier {
    brands: HashSet<String>,
}

impl RecordClassifier {
    pub fn new(brands: &[String]) -> Self {
        Self {
            brands: brands.iter().cloned().collect(),
        }
    }

    pub fn is_brand(&self, token: &str) -> bool {
        self.brands.contains(token)
    }

    pub fn classify(&self, label: &str) -> ProductRecord {
        let mut tokens = label.split_whitespace();
        let first = tokens.next().unwrap_or("");
        let rest = tokens.collect::<Vec<_>>().join(" ");

        if !first.is_empty() && self.is_brand(first) {
            return ProductRecord {
                brand: first.to_string(),
                model: rest,
                date: String::new(),
            };
        }

        let model = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{} {}", first, rest)
        };
        ProductRecord {
            brand: String::new(),
            model,
            date: String::new(),
        }
    }
}

pub trait Parser {
    fn parse(&self, labels: &[String]) -> Vec<ProductRecord>;
}

/// Normalizes and classifies every scraped label, then drops the leading page chrome.
pub struct ListingParser {
    normalizer: TextNormalizer,
    classifier: RecordClassifier,
    leading_offset: usize,
}

impl ListingParser {
    pub fn new(normalizer: TextNormalizer, classifier: RecordClassifier, leading_offset: usize) -> Self {
        Self {
            normalizer,
            classifier,
            leading_offset,
        }
    }
}

impl Parser for ListingParser {
    fn parse(&self, labels: &[String]) -> Vec<ProductRecord> {
        labels
            .iter()
            .map(|raw| self.classifier.classify(&self.normalizer.normalize(raw)))
            .skip(self.leading_offset)
            .collect()
    }
}
