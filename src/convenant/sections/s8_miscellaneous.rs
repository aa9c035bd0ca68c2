//! S8: Article 6, Miscellaneous
//!
//! Present only when `bijzonderheden` holds text. Its presence moves every
//! trailing article up by one (see `ArticleNumbering`).

use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    match answers.text("bijzonderheden") {
        Some(text) => vec![
            Clause::heading("misc.heading", article_heading(MISC_ARTICLE, "BIJZONDERHEDEN")),
            Clause::paragraph("misc.text", text),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gated_on_text() {
        let mut answers = AnswerSet::new();
        assert!(generate(&answers).is_empty());

        answers.set("bijzonderheden", json!("De hond blijft bij de vrouw."));
        let clauses = generate(&answers);
        assert_eq!(clauses[0].text, "ARTIKEL 6. BIJZONDERHEDEN");
        assert_eq!(clauses[1].text, "De hond blijft bij de vrouw.");
    }
}
