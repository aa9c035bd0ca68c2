//! Covenant Generator
//!
//! Main entry point for clause assembly. Runs the ten sections (S1-S10) in
//! fixed order and concatenates their clauses into one document.
//!
//! Public API (consumed by session.rs, api_server.rs and render_convenant.rs):
//! - ConvenantGenerator::new() -> Self
//! - ConvenantGenerator::generate(answers) -> Document
//! - assemble(answers) -> Document

use crate::answers::AnswerSet;
use crate::convenant::sections::{
    s10_signatures, s1_parties, s2_recitals, s3_children, s4_partner_alimony, s5_home, s6_community,
    s7_pension, s8_miscellaneous, s9_closing,
};
use crate::convenant::types::{Clause, Document};

type SectionFn = fn(&AnswerSet) -> Vec<Clause>;

const SECTIONS: [(&str, SectionFn); 10] = [
    ("parties", s1_parties::generate),
    ("recitals", s2_recitals::generate),
    ("children", s3_children::generate),
    ("partner_alimony", s4_partner_alimony::generate),
    ("home", s5_home::generate),
    ("community", s6_community::generate),
    ("pension", s7_pension::generate),
    ("miscellaneous", s8_miscellaneous::generate),
    ("closing", s9_closing::generate),
    ("signatures", s10_signatures::generate),
];

/// Covenant generator - stateless clause assembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvenantGenerator;

impl ConvenantGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the full clause sequence. Never fails: missing answers show up
    /// as placeholders, unknown tokens as absent branches.
    pub fn generate(&self, answers: &AnswerSet) -> Document {
        let mut clauses = Vec::with_capacity(96);

        for (name, section) in SECTIONS {
            let emitted = section(answers);
            tracing::trace!(section = name, clauses = emitted.len(), "section assembled");
            clauses.extend(emitted);
        }

        tracing::debug!("Assembled covenant with {} clauses", clauses.len());
        Document::new(clauses)
    }
}

/// Shorthand for `ConvenantGenerator::new().generate(answers)`.
pub fn assemble(answers: &AnswerSet) -> Document {
    ConvenantGenerator::new().generate(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_section_order() {
        let doc = assemble(&AnswerSet::with_defaults());
        let rules = doc.rules();
        let position = |rule: &str| rules.iter().position(|r| *r == rule).unwrap();

        assert_eq!(position("title.main"), 0);
        assert!(position("recitals.agreement") < position("alimony.heading"));
        assert!(position("alimony.heading") < position("home.heading"));
        assert!(position("home.heading") < position("community.heading"));
        assert!(position("community.closing") < position("pension.heading"));
        assert!(position("pension.heading") < position("closing.costs.heading"));
        assert_eq!(rules.last(), Some(&"signature.woman"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let answers = AnswerSet::with_defaults();
        assert_eq!(assemble(&answers), assemble(&answers));
    }
}
