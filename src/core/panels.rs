//! View state for the feature panels, independent of rendering

use super::analysis::{
    placeholder_answer, sample_classes, sample_entities, DocumentClass, Entity, QaEntry,
};
use super::rewrite::RuleSet;

/// Notice shown when the simplify input is blank
pub const EMPTY_CLAUSES_NOTICE: &str = "Please enter or paste clauses to simplify.";
/// Notice shown when the question input is blank
pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a question.";

/// Views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Simplify,
    ExtractEntities,
    Classify,
    Qa,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Simplify,
        Page::ExtractEntities,
        Page::Classify,
        Page::Qa,
    ];

    /// Feature pages, in the order the home view offers them
    pub const FEATURES: [Page; 4] = [
        Page::Simplify,
        Page::ExtractEntities,
        Page::Classify,
        Page::Qa,
    ];

    /// Look up a view by its feature key
    pub fn from_key(key: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    /// The view to show after following `key` from this one; unknown keys stay put
    pub fn route(self, key: &str) -> Page {
        Page::from_key(key).unwrap_or(self)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Simplify => "simplify",
            Page::ExtractEntities => "extract_entities",
            Page::Classify => "classify",
            Page::Qa => "qa",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Simplify => "Simplify Clauses",
            Page::ExtractEntities => "Extract Entities",
            Page::Classify => "Classify Document",
            Page::Qa => "Q&A",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Upload a document and pick a feature.",
            Page::Simplify => "Rewrite dense legal phrasing in plain language.",
            Page::ExtractEntities => "Find parties, dates and amounts.",
            Page::Classify => "Predict the type of agreement.",
            Page::Qa => "Ask questions about the document.",
        }
    }
}

/// Original and simplified clause text
#[derive(Debug, Default)]
pub struct SimplifyPanel {
    pub original: String,
    pub simplified: String,
}

impl SimplifyPanel {
    /// Simplify the trimmed original text into `simplified`
    ///
    /// Returns a notice and leaves the output untouched if the input is blank.
    pub fn run(&mut self, rules: &RuleSet) -> Result<(), &'static str> {
        let source = self.original.trim();
        if source.is_empty() {
            return Err(EMPTY_CLAUSES_NOTICE);
        }
        self.simplified = rules.simplify(source);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.original.clear();
        self.simplified.clear();
    }
}

/// Entity extraction results; `None` until the first run
#[derive(Debug, Default)]
pub struct EntitiesPanel {
    pub entities: Option<Vec<Entity>>,
}

impl EntitiesPanel {
    pub fn run(&mut self) {
        self.entities = Some(sample_entities());
    }

    pub fn clear(&mut self) {
        self.entities = None;
    }
}

/// Classification results; `None` until the first run
#[derive(Debug, Default)]
pub struct ClassifyPanel {
    pub classes: Option<Vec<DocumentClass>>,
}

impl ClassifyPanel {
    pub fn run(&mut self) {
        self.classes = Some(sample_classes());
    }

    pub fn clear(&mut self) {
        self.classes = None;
    }
}

/// Question input and answered questions, newest first
#[derive(Debug, Default)]
pub struct QaPanel {
    pub question: String,
    pub entries: Vec<QaEntry>,
}

impl QaPanel {
    /// Answer the trimmed question and clear the input
    pub fn ask(&mut self) -> Result<(), &'static str> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(EMPTY_QUESTION_NOTICE);
        }

        let entry = QaEntry {
            question: question.to_string(),
            answer: placeholder_answer(question),
        };
        self.entries.insert(0, entry);
        self.question.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys() {
        assert_eq!(Page::from_key("simplify"), Some(Page::Simplify));
        assert_eq!(Page::from_key("extract_entities"), Some(Page::ExtractEntities));
        assert_eq!(Page::from_key("classify"), Some(Page::Classify));
        assert_eq!(Page::from_key("qa"), Some(Page::Qa));
        assert_eq!(Page::from_key("home"), Some(Page::Home));
        assert_eq!(Page::from_key("summarize"), None);
        assert_eq!(Page::from_key(""), None);
    }

    #[test]
    fn test_unknown_key_does_not_navigate() {
        assert_eq!(Page::Simplify.route("summarize"), Page::Simplify);
        assert_eq!(Page::Classify.route(""), Page::Classify);
        assert_eq!(Page::Home.route("qa"), Page::Qa);
        assert_eq!(Page::Qa.route("home"), Page::Home);
    }

    #[test]
    fn test_simplify_trims_before_rewriting() {
        let mut panel = SimplifyPanel {
            original: "  pursuant to the lease \n".to_string(),
            ..Default::default()
        };
        panel.run(&RuleSet::default()).unwrap();
        assert_eq!(panel.simplified, "under the lease");
        assert_eq!(panel.original, "  pursuant to the lease \n");
    }

    #[test]
    fn test_simplify_blank_input_keeps_output() {
        let mut panel = SimplifyPanel {
            original: " \t\n".to_string(),
            simplified: "previous".to_string(),
        };
        assert_eq!(panel.run(&RuleSet::default()), Err(EMPTY_CLAUSES_NOTICE));
        assert_eq!(panel.simplified, "previous");
    }

    #[test]
    fn test_simplify_clear() {
        let mut panel = SimplifyPanel {
            original: "a".to_string(),
            simplified: "b".to_string(),
        };
        panel.clear();
        assert!(panel.original.is_empty());
        assert!(panel.simplified.is_empty());
    }

    #[test]
    fn test_entities_and_classes_run_and_clear() {
        let mut entities = EntitiesPanel::default();
        entities.run();
        assert_eq!(entities.entities.as_ref().map(Vec::len), Some(3));
        entities.clear();
        assert!(entities.entities.is_none());

        let mut classes = ClassifyPanel::default();
        classes.run();
        assert_eq!(classes.classes.as_ref().map(Vec::len), Some(3));
        classes.clear();
        assert!(classes.classes.is_none());
    }

    #[test]
    fn test_qa_newest_first() {
        let mut panel = QaPanel::default();
        panel.question = " Who pays? ".to_string();
        panel.ask().unwrap();
        panel.question = "When?".to_string();
        panel.ask().unwrap();

        assert!(panel.question.is_empty());
        assert_eq!(panel.entries[0].question, "When?");
        assert_eq!(panel.entries[1].question, "Who pays?");
        assert_eq!(panel.entries[1].answer, "Placeholder answer for: \"Who pays?\"");
    }

    #[test]
    fn test_qa_blank_question() {
        let mut panel = QaPanel::default();
        panel.question = "   ".to_string();
        assert_eq!(panel.ask(), Err(EMPTY_QUESTION_NOTICE));
        assert!(panel.entries.is_empty());
        assert_eq!(panel.question, "   ");
    }
}
