use std::sync::LazyLock;

use regex::Regex;

use crate::model::{StudentIdentity, UNKNOWN};

/// A labelled-field grammar: an exact (case-sensitive) label phrase,
/// an optional single separator drawn from `separators`, optional
/// whitespace, then a maximal run of characters from `capture_class`.
///
/// New label variants are added here rather than in control flow.
struct LabelRule {
    label: &'static str,
    separators: &'static str,
    capture_class: &'static str,
}

impl LabelRule {
    fn compile(&self) -> Regex {
        let pattern = format!(
            r"{}\s*[{}]?\s*({}+)",
            regex::escape(self.label),
            regex::escape(self.separators),
            self.capture_class,
        );
        Regex::new(&pattern).expect("label rule pattern is valid")
    }
}

const USN_RULE: LabelRule = LabelRule {
    label: "University Seat Number",
    separators: ":,-",
    capture_class: "[0-9A-Z]",
};

const NAME_RULE: LabelRule = LabelRule {
    label: "Student Name",
    separators: ":,-",
    capture_class: r"[A-Za-z\s]",
};

static USN_RE: LazyLock<Regex> = LazyLock::new(|| USN_RULE.compile());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| NAME_RULE.compile());

/// Resolve the student identity from one page's raw text.
///
/// Pure function of the input: an absent label degrades to the
/// `Unknown` sentinel, never an error. Resolution is page-scoped;
/// nothing is cached across pages.
pub fn resolve_identity(page_text: &str) -> StudentIdentity {
    StudentIdentity {
        usn: capture(&USN_RE, page_text),
        name: capture(&NAME_RE, page_text),
    }
}

fn capture(re: &Regex, text: &str) -> String {
    match re.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().trim().to_string(),
        None => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_both_fields() {
        let text = "University Seat Number: 1AB21CS001\nStudent Name: JOHN DOE\n";
        let id = resolve_identity(text);
        assert_eq!(id.usn, "1AB21CS001");
        assert_eq!(id.name, "JOHN DOE");
    }

    #[test]
    fn test_missing_labels_resolve_to_unknown() {
        let id = resolve_identity("Semester: 4\nSome other text");
        assert_eq!(id.usn, UNKNOWN);
        assert_eq!(id.name, UNKNOWN);
    }

    #[test]
    fn test_separator_variants_capture_same_value() {
        let colon = resolve_identity("University Seat Number:ABC123DE");
        let hyphen = resolve_identity("University Seat Number - ABC123DE");
        let comma = resolve_identity("University Seat Number, ABC123DE");
        let bare = resolve_identity("University Seat Number ABC123DE");
        assert_eq!(colon.usn, "ABC123DE");
        assert_eq!(hyphen.usn, "ABC123DE");
        assert_eq!(comma.usn, "ABC123DE");
        assert_eq!(bare.usn, "ABC123DE");
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        let id = resolve_identity("university seat number: 1AB21CS001");
        assert_eq!(id.usn, UNKNOWN);
    }

    #[test]
    fn test_usn_capture_stops_at_lowercase() {
        let id = resolve_identity("University Seat Number: 1AB21CS001x");
        assert_eq!(id.usn, "1AB21CS001");
    }

    #[test]
    fn test_name_capture_is_trimmed() {
        let id = resolve_identity("Student Name :  Jane Mary Smith  \n2022 Batch");
        assert_eq!(id.name, "Jane Mary Smith");
    }
}
