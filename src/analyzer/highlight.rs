use crate::config::HighlightConfig;
use crate::model::{ColorAssignment, ProductRecord, Rgb};

/// First sheet row that holds data; row 1 is the header.
pub const FIRST_DATA_ROW: usize = 2;

/// Picks a row color by case-sensitive substring match of keywords in the model text.
///
/// Short keywords such as "FA" also match inside longer tokens. Records are matched on
/// the model text as scraped, before separators are stripped or prices reformatted.
#[derive(Debug, Clone)]
pub struct HighlightClassifier {
    keywords: Vec<String>,
    match_color: Rgb,
    default_color: Rgb,
}

impl HighlightClassifier {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            keywords: config.keywords.iter().filter(|k| !k.is_empty()).cloned().collect(),
            match_color: config.match_color,
            default_color: config.default_color,
        }
    }

    pub fn is_highlighted(&self, model: &str) -> bool {
        self.keywords.iter().any(|k| model.contains(k.as_str()))
    }

    pub fn classify(&self, model: &str) -> Rgb {
        if self.is_highlighted(model) {
            self.match_color
        } else {
            self.default_color
        }
    }

    pub fn match_color(&self) -> Rgb {
        self.match_color
    }

    /// One assignment per record, in order; sheet rows line up with the assembled rows.
    pub fn assign(&self, records: &[ProductRecord]) -> Vec<ColorAssignment> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| ColorAssignment {
                row_index: i + FIRST_DATA_ROW,
                color: self.classify(&record.model),
            })
            .collect()
    }
}
