// Labels -> rows + colors, and one full scrape/publish pass
use crate::analyzer::{HighlightClassifier, PriceNormalizer, RowAssembler};
use crate::calendar::JalaliDate;
use crate::config::AppConfig;
use crate::model::{RunError, SheetUpdate};
use crate::normalizer::TextNormalizer;
use crate::parser::{ListingParser, Parser, RecordClassifier};
use crate::scraper::PageSource;
use crate::sheets::SheetWriter;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Ready(SheetUpdate),
    /// No product records survived the offset trim; the sheet must be left untouched.
    NothingToWrite,
}

pub struct Pipeline {
    parser: ListingParser,
    assembler: RowAssembler,
    highlighter: HighlightClassifier,
    header: Vec<String>,
}

impl Pipeline {
    pub fn from_config(config: &AppConfig) -> Self {
        let extraction = &config.extraction;
        let parser = ListingParser::new(
            TextNormalizer::new(&extraction.strip_tokens),
            RecordClassifier::new(&extraction.valid_brands),
            extraction.leading_offset,
        );

        Self {
            parser,
            assembler: RowAssembler::new(PriceNormalizer::new(extraction.markup_factor)),
            highlighter: HighlightClassifier::new(&config.highlight),
            header: config.sheet.header.clone(),
        }
    }

    pub fn run(&self, labels: &[String], today: &JalaliDate) -> PipelineOutcome {
        let records = self.parser.parse(labels);
        info!("📦 {} labels -> {} product records", labels.len(), records.len());

        if records.is_empty() {
            return PipelineOutcome::NothingToWrite;
        }

        let rows = self.assembler.assemble(&records, &today.to_string());
        let colors = self.highlighter.assign(&records);

        PipelineOutcome::Ready(SheetUpdate {
            header: self.header.clone(),
            rows,
            colors,
        })
    }
}

/// Scrapes, transforms and publishes once. Returns the number of rows written.
pub async fn run_once(
    pipeline: &Pipeline,
    source: &dyn PageSource,
    writer: &dyn SheetWriter,
) -> Result<usize, RunError> {
    let labels = source.collect_labels().await?;
    info!("🔎 Collected {} labels", labels.len());

    let today = JalaliDate::today();
    match pipeline.run(&labels, &today) {
        PipelineOutcome::Ready(update) => {
            writer.publish(&update).await?;

            let highlighted = update
                .colors
                .iter()
                .filter(|c| c.color == pipeline.highlighter.match_color())
                .count();
            info!(
                "✅ Wrote {} rows for {} ({} highlighted)",
                update.rows.len(),
                today,
                highlighted
            );
            Ok(update.rows.len())
        }
        PipelineOutcome::NothingToWrite => {
            warn!("❌ No data to write, sheet left unchanged");
            Ok(0)
        }
    }
}
