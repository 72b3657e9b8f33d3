use crate::core::normalize::{normalize_flag, normalize_phone, normalize_text};
use crate::core::schema::columns::{self, address};
use crate::domain::model::{OutputRow, Record};

/// Source columns the lead export must always carry.
pub const REQUIRED_FIELDS: [&str; 2] = ["first_name", "last_name"];

pub const DEFAULT_SOURCE_LABEL: &str = "Real Intent";
pub const SELLERS_TAG: &str = "REAL INTENT.SELLERS";

const PRIMARY_MARK: &str = "Y";
const DEFAULT_COUNTRY: &str = "USA";
const DEFAULT_ADDRESS_LABEL: &str = "Home";

/// Maps lead-export records onto the import template.
///
/// Holds the run parameters, which stay fixed for a whole conversion.
#[derive(Debug, Clone)]
pub struct RecordMapper {
    tags: String,
    source_label: String,
}

impl RecordMapper {
    pub fn new(tags: impl Into<String>, source_label: impl Into<String>) -> Self {
        Self {
            tags: tags.into(),
            source_label: source_label.into(),
        }
    }

    pub fn map(&self, record: &Record) -> OutputRow {
        let mut row = OutputRow::new();

        row.set(columns::FIRST_NAME, normalize_text(record.field("first_name")));
        row.set(columns::LAST_NAME, normalize_text(record.field("last_name")));

        // Only the first phone and first email are ever marked primary.
        if let Some(phone) = record.field("phone_1") {
            row.set(columns::CELL_PHONE, normalize_phone(Some(phone)));
            row.set(columns::CELL_PHONE_PRIMARY, PRIMARY_MARK);
        }
        if let Some(phone) = record.field("phone_2") {
            row.set(columns::HOME_PHONE, normalize_phone(Some(phone)));
        }

        if let Some(email) = record.field("email_1") {
            row.set(columns::PERSONAL_EMAIL, normalize_text(Some(email)));
            row.set(columns::PERSONAL_EMAIL_PRIMARY, PRIMARY_MARK);
        }
        if let Some(email) = record.field("email_2") {
            row.set(columns::WORK_EMAIL, normalize_text(Some(email)));
        }

        let street = normalize_text(record.field("address"));
        if !street.is_empty() {
            let start = columns::ADDRESS_BLOCKS[0];
            row.set(start + address::LINE_ONE, street);
            row.set(start + address::CITY, normalize_text(record.field("city")));
            row.set(start + address::STATE, normalize_text(record.field("state")));
            row.set(start + address::ZIP_CODE, normalize_text(record.field("zip_code")));
            row.set(start + address::COUNTRY, DEFAULT_COUNTRY);
            row.set(start + address::LABEL, DEFAULT_ADDRESS_LABEL);
        }

        row.set(columns::TAGS, self.tags_for(record));
        row.set(columns::SOURCE, self.source_label.as_str());
        row.set(columns::NOTES, normalize_text(record.field("insight")));

        row
    }

    fn tags_for(&self, record: &Record) -> String {
        let mut tags: Vec<&str> = Vec::new();
        if !self.tags.is_empty() {
            tags.push(&self.tags);
        }
        if normalize_flag(record.field("Sellers"), "X") {
            tags.push(SELLERS_TAG);
        }
        tags.join(", ")
    }
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new("", DEFAULT_SOURCE_LABEL)
    }
}
