//! Placeholder analysis results
//!
//! Entity extraction, classification and question answering are not backed
//! by any model. These functions return fixed sample output for the views.

/// Kind of an extracted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Party,
    Date,
    Amount,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Party => "Party",
            EntityKind::Date => "Date",
            EntityKind::Amount => "Amount",
        }
    }
}

/// An entity found in a document
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
    /// Confidence in [0, 1]
    pub score: f32,
}

/// A predicted document type
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentClass {
    pub label: String,
    /// Confidence in [0, 1]
    pub score: f32,
}

/// A question and its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

pub fn sample_entities() -> Vec<Entity> {
    [
        ("Acme Corp", EntityKind::Party, 0.98),
        ("2025-01-01", EntityKind::Date, 0.93),
        ("$50,000", EntityKind::Amount, 0.9),
    ]
    .into_iter()
    .map(|(text, kind, score)| Entity {
        text: text.to_string(),
        kind,
        score,
    })
    .collect()
}

pub fn sample_classes() -> Vec<DocumentClass> {
    [
        ("Non-Disclosure Agreement", 0.87),
        ("Master Service Agreement", 0.73),
        ("Employment Contract", 0.41),
    ]
    .into_iter()
    .map(|(label, score)| DocumentClass {
        label: label.to_string(),
        score,
    })
    .collect()
}

/// Canned answer echoing the question
pub fn placeholder_answer(question: &str) -> String {
    format!("Placeholder answer for: \"{}\"", question)
}

/// Render a [0, 1] score as a percentage with one decimal
pub fn format_confidence(score: f32) -> String {
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.98), "98.0%");
        assert_eq!(format_confidence(0.9), "90.0%");
        assert_eq!(format_confidence(0.41), "41.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_sample_entities() {
        let entities = sample_entities();
        let kinds: Vec<_> = entities.iter().map(|e| e.kind.label()).collect();
        assert_eq!(kinds, ["Party", "Date", "Amount"]);
        assert_eq!(entities[2].text, "$50,000");
    }

    #[test]
    fn test_sample_classes_sorted_by_confidence() {
        let classes = sample_classes();
        assert_eq!(classes[0].label, "Non-Disclosure Agreement");
        assert!(classes.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_placeholder_answer() {
        assert_eq!(
            placeholder_answer("Who are the parties?"),
            "Placeholder answer for: \"Who are the parties?\""
        );
    }
}
