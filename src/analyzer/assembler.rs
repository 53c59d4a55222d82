use crate::analyzer::price::PriceNormalizer;
use crate::model::{OutputRow, ProductRecord};

/// Turns classified records into sheet rows stamped with one shared date.
///
/// A record that already carries a date keeps it; the shared date only fills the placeholder.
pub struct RowAssembler {
    price: PriceNormalizer,
}

impl RowAssembler {
    pub fn new(price: PriceNormalizer) -> Self {
        Self { price }
    }

    pub fn assemble(&self, records: &[ProductRecord], today: &str) -> Vec<OutputRow> {
        records
            .iter()
            .map(|record| OutputRow {
                model: self.price.normalize(&record.model),
                brand: record.brand.clone(),
                date: if record.date.is_empty() {
                    today.to_string()
                } else {
                    record.date.clone()
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, model: &str) -> ProductRecord {
        ProductRecord {
            brand: brand.into(),
            model: model.into(),
            date: String::new(),
        }
    }

    #[test]
    fn rows_keep_order_and_share_the_date() {
        let assembler = RowAssembler::new(PriceNormalizer::new(1.015));
        let records = vec![
            record("Galaxy", "A54 12,500,000"),
            record("", "15,000,000"),
            record("Redmi", "Note 12 RAM 8"),
        ];

        let rows = assembler.assemble(&records, "1403-07-28");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells(), ["A54 12500000", "Galaxy", "1403-07-28"]);
        assert_eq!(rows[1].cells(), ["15,225,000", "", "1403-07-28"]);
        assert_eq!(rows[2].cells(), ["Note 12 RAM 8", "Redmi", "1403-07-28"]);
    }

    #[test]
    fn existing_record_date_is_kept() {
        let assembler = RowAssembler::new(PriceNormalizer::new(1.015));
        let mut dated = record("POCO", "X6 Pro");
        dated.date = "1403-01-15".into();
        let records = vec![dated, record("POCO", "F6")];

        let rows = assembler.assemble(&records, "1403-07-28");

        assert_eq!(rows[0].date, "1403-01-15");
        assert_eq!(rows[1].date, "1403-07-28");
    }

    #[test]
    fn no_records_no_rows() {
        let assembler = RowAssembler::new(PriceNormalizer::new(1.015));
        assert!(assembler.assemble(&[], "1403-01-01").is_empty());
    }
}
