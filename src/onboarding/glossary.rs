//! Glossary of strength and conditioning terms.
//!
//! Definitions are shown as hints while the user picks a level, goal and schedule.

use std::collections::HashMap;

/// A glossary term with definition.
#[derive(Debug, Clone)]
pub struct GlossaryTerm {
    pub term: String,
    /// Expanded form of an abbreviation
    pub full_name: Option<String>,
    pub definition: String,
}

impl GlossaryTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            full_name: None,
            definition: definition.into(),
        }
    }

    pub fn abbreviation(
        term: impl Into<String>,
        full_name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            full_name: Some(full_name.into()),
            definition: definition.into(),
        }
    }
}

/// Case-insensitive lookup of training terms.
pub struct Glossary {
    terms: HashMap<String, GlossaryTerm>,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new()
    }
}

impl Glossary {
    pub fn new() -> Self {
        let mut glossary = Self {
            terms: HashMap::new(),
        };

        glossary.add(GlossaryTerm::new(
            "Set",
            "A group of consecutive repetitions done without rest.",
        ));
        glossary.add(GlossaryTerm::new(
            "Rep",
            "One complete movement of an exercise, from start to finish.",
        ));
        glossary.add(GlossaryTerm::abbreviation(
            "1RM",
            "One-rep max",
            "The heaviest weight you can lift once with good form.",
        ));
        glossary.add(GlossaryTerm::new(
            "Progressive overload",
            "Gradually raising weight, reps or volume so the body keeps adapting.",
        ));
        glossary.add(GlossaryTerm::new(
            "Compound exercise",
            "A movement that works several joints and muscle groups, such as the squat.",
        ));
        glossary.add(GlossaryTerm::abbreviation(
            "HIIT",
            "High-intensity interval training",
            "Short all-out efforts alternated with brief recovery periods.",
        ));
        glossary.add(GlossaryTerm::new(
            "Rest day",
            "A day without hard training that lets muscles recover and grow.",
        ));
        glossary.add(GlossaryTerm::new(
            "Deload",
            "A planned lighter week that reduces fatigue before heavier training.",
        ));
        glossary.add(GlossaryTerm::new(
            "Working weight",
            "The load used for the main sets after the warm-up.",
        ));
        glossary.add(GlossaryTerm::new(
            "Warm-up",
            "Light activity that raises body temperature and prepares the joints.",
        ));

        glossary
    }

    pub fn add(&mut self, term: GlossaryTerm) {
        self.terms.insert(term.term.to_lowercase(), term);
    }

    pub fn get(&self, term: &str) -> Option<&GlossaryTerm> {
        self.terms.get(&term.to_lowercase())
    }

    pub fn get_definition(&self, term: &str) -> Option<&str> {
        self.get(term).map(|t| t.definition.as_str())
    }

    /// Terms sorted alphabetically.
    pub fn all_terms(&self) -> Vec<&GlossaryTerm> {
        let mut terms: Vec<&GlossaryTerm> = self.terms.values().collect();
        terms.sort_by(|a, b| a.term.to_lowercase().cmp(&b.term.to_lowercase()));
        terms
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::OnboardingStep;

    #[test]
    fn test_glossary_lookup() {
        let glossary = Glossary::new();

        let one_rep_max = glossary.get("1rm").expect("1RM should exist");
        assert_eq!(one_rep_max.full_name.as_deref(), Some("One-rep max"));
        assert!(glossary.get("hiit").is_some());
        assert!(glossary
            .get_definition("Deload")
            .is_some_and(|d| d.contains("lighter")));
    }

    #[test]
    fn test_step_hints_exist() {
        let glossary = Glossary::new();
        for step in OnboardingStep::all() {
            for term in step.glossary_terms() {
                assert!(glossary.contains(term), "missing term {}", term);
            }
        }
        assert_eq!(glossary.all_terms()[0].term, "1RM");
    }
}
