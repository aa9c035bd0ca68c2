//! S10: Signatures

use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    vec![
        Clause::paragraph(
            "signature.place_date",
            format!(
                "Aldus overeengekomen en in drievoud opgemaakt en ondertekend te {} op {}.",
                value(answers, "ondertekeningPlaats"),
                date(answers, "ondertekeningDatum")
            ),
        ),
        Clause::signature("signature.man", "De man,", full_name(answers, "man")),
        Clause::signature("signature.woman", "De vrouw,", full_name(answers, "vrouw")),
    ]
}

/// Given names and surname as entered; not uppercased here.
fn full_name(answers: &AnswerSet, party: &str) -> String {
    format!(
        "{} {}",
        value(answers, &format!("{}Voornamen", party)),
        value(answers, &format!("{}Achternaam", party))
    )
}
