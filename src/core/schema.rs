//! The fixed contact-import template.
//!
//! The template is an external contract: labels repeat across the phone, email
//! and address blocks, and one blank label separates the address blocks from
//! the metadata columns. Rows are positional, so the labels are kept as an
//! ordered list rather than a keyed structure.

use std::collections::HashMap;

/// Number of columns in every output row.
pub const COLUMN_COUNT: usize = 53;

/// Export labels, written verbatim as the header row of the import file.
pub const TEMPLATE_HEADERS: [&str; COLUMN_COUNT] = [
    "First Name",
    "Middle Name",
    "Last Name",
    "Prefix",
    "Suffix",
    "Full Legal Name",
    "About",
    "Birthday",
    "Home Anniversary",
    // Phones
    "Cell Phone",
    "Is Primary? (mark Y)",
    "Home Phone",
    "Is Primary? (mark Y)",
    "Work Phone",
    "Is Primary? (mark Y)",
    "Other Phone",
    "Is Primary? (mark Y)",
    // Emails
    "Personal Email",
    "Primary? (mark Y)",
    "Work Email",
    "Primary? (mark Y)",
    "Other Email",
    "Primary? (mark Y)",
    // Address block 1
    "Address line one",
    "Address line two",
    "City",
    "State",
    "Zip code",
    "Country",
    "Label",
    // Address block 2
    "Address line one",
    "Address line two",
    "City",
    "State",
    "Zip code",
    "Country",
    "Label",
    // Address block 3
    "Address line one",
    "Address line two",
    "City",
    "State",
    "Zip code",
    "Country",
    "Label",
    "",
    "Tags",
    "Source",
    "Notes",
    "Facebook",
    "Twitter",
    "Linkedin",
    "Pinterest",
    "Instagram",
];

/// Column positions within [`TEMPLATE_HEADERS`].
pub mod columns {
    pub const FIRST_NAME: usize = 0;
    pub const MIDDLE_NAME: usize = 1;
    pub const LAST_NAME: usize = 2;
    pub const PREFIX: usize = 3;
    pub const SUFFIX: usize = 4;
    pub const FULL_LEGAL_NAME: usize = 5;
    pub const ABOUT: usize = 6;
    pub const BIRTHDAY: usize = 7;
    pub const HOME_ANNIVERSARY: usize = 8;

    pub const CELL_PHONE: usize = 9;
    pub const CELL_PHONE_PRIMARY: usize = 10;
    pub const HOME_PHONE: usize = 11;
    pub const HOME_PHONE_PRIMARY: usize = 12;
    pub const WORK_PHONE: usize = 13;
    pub const WORK_PHONE_PRIMARY: usize = 14;
    pub const OTHER_PHONE: usize = 15;
    pub const OTHER_PHONE_PRIMARY: usize = 16;

    pub const PERSONAL_EMAIL: usize = 17;
    pub const PERSONAL_EMAIL_PRIMARY: usize = 18;
    pub const WORK_EMAIL: usize = 19;
    pub const WORK_EMAIL_PRIMARY: usize = 20;
    pub const OTHER_EMAIL: usize = 21;
    pub const OTHER_EMAIL_PRIMARY: usize = 22;

    /// First column of each address block. Offsets within a block are in [`address`].
    pub const ADDRESS_BLOCKS: [usize; 3] = [23, 30, 37];

    pub const BLOCK_SEPARATOR: usize = 44;
    pub const TAGS: usize = 45;
    pub const SOURCE: usize = 46;
    pub const NOTES: usize = 47;

    pub const FACEBOOK: usize = 48;
    pub const TWITTER: usize = 49;
    pub const LINKEDIN: usize = 50;
    pub const PINTEREST: usize = 51;
    pub const INSTAGRAM: usize = 52;

    pub mod address {
        pub const LINE_ONE: usize = 0;
        pub const LINE_TWO: usize = 1;
        pub const CITY: usize = 2;
        pub const STATE: usize = 3;
        pub const ZIP_CODE: usize = 4;
        pub const COUNTRY: usize = 5;
        pub const LABEL: usize = 6;

        pub const WIDTH: usize = 7;
    }
}

/// How the header row is labelled when a table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// The template labels, repeats included. Used for the exported file.
    Export,
    /// Repeats suffixed with `.1`, `.2`, ... so every label is unique.
    Display,
}

impl HeaderStyle {
    pub fn labels(self) -> Vec<String> {
        match self {
            HeaderStyle::Export => TEMPLATE_HEADERS.iter().map(|h| h.to_string()).collect(),
            HeaderStyle::Display => unique_labels(&TEMPLATE_HEADERS),
        }
    }
}

/// Makes labels unique by suffixing repeats with the count of earlier sightings.
///
/// The first occurrence keeps its text; the second becomes `label.1`, the
/// third `label.2`, and so on.
pub fn unique_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let count = seen.entry(label).or_insert(0);
            let rendered = if *count == 0 {
                label.to_string()
            } else {
                format!("{}.{}", label, count)
            };
            *count += 1;
            rendered
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_labels_dot_numbers_repeats() {
        assert_eq!(
            unique_labels(&["A", "B", "A", "A"]),
            vec!["A", "B", "A.1", "A.2"]
        );
    }

    #[test]
    fn test_unique_labels_leaves_distinct_labels_alone() {
        assert_eq!(unique_labels(&["x", "y", "z"]), vec!["x", "y", "z"]);
        assert!(unique_labels::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_template_has_single_blank_separator() {
        let blanks: Vec<usize> = TEMPLATE_HEADERS
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_empty())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(blanks, vec![columns::BLOCK_SEPARATOR]);
    }

    #[test]
    fn test_column_positions_match_labels() {
        assert_eq!(TEMPLATE_HEADERS[columns::FIRST_NAME], "First Name");
        assert_eq!(TEMPLATE_HEADERS[columns::LAST_NAME], "Last Name");
        assert_eq!(TEMPLATE_HEADERS[columns::CELL_PHONE], "Cell Phone");
        assert_eq!(TEMPLATE_HEADERS[columns::HOME_PHONE], "Home Phone");
        assert_eq!(TEMPLATE_HEADERS[columns::OTHER_PHONE_PRIMARY], "Is Primary? (mark Y)");
        assert_eq!(TEMPLATE_HEADERS[columns::PERSONAL_EMAIL], "Personal Email");
        assert_eq!(TEMPLATE_HEADERS[columns::WORK_EMAIL], "Work Email");
        assert_eq!(TEMPLATE_HEADERS[columns::OTHER_EMAIL_PRIMARY], "Primary? (mark Y)");
        assert_eq!(TEMPLATE_HEADERS[columns::TAGS], "Tags");
        assert_eq!(TEMPLATE_HEADERS[columns::SOURCE], "Source");
        assert_eq!(TEMPLATE_HEADERS[columns::NOTES], "Notes");
        assert_eq!(TEMPLATE_HEADERS[columns::INSTAGRAM], "Instagram");

        for start in columns::ADDRESS_BLOCKS {
            assert_eq!(TEMPLATE_HEADERS[start + columns::address::LINE_ONE], "Address line one");
            assert_eq!(TEMPLATE_HEADERS[start + columns::address::ZIP_CODE], "Zip code");
            assert_eq!(TEMPLATE_HEADERS[start + columns::address::LABEL], "Label");
        }
    }

    #[test]
    fn test_display_labels_are_unique_and_aligned() {
        let export = HeaderStyle::Export.labels();
        let display = HeaderStyle::Display.labels();

        assert_eq!(export.len(), COLUMN_COUNT);
        assert_eq!(display.len(), COLUMN_COUNT);

        let distinct: HashSet<&String> = display.iter().collect();
        assert_eq!(distinct.len(), COLUMN_COUNT);

        assert_eq!(display[columns::CELL_PHONE_PRIMARY], "Is Primary? (mark Y)");
        assert_eq!(display[columns::HOME_PHONE_PRIMARY], "Is Primary? (mark Y).1");
        assert_eq!(display[columns::OTHER_PHONE_PRIMARY], "Is Primary? (mark Y).3");
        assert_eq!(display[columns::ADDRESS_BLOCKS[2]], "Address line one.2");

        for (export_label, display_label) in export.iter().zip(&display) {
            assert!(display_label.starts_with(export_label.as_str()));
        }
    }
}
