//! S1: Title and Parties
//!
//! Always present. One identity paragraph per spouse, surname uppercased.

use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    vec![
        Clause::title("title.main", "CONVENANT ALGEHELE GEMEENSCHAP VAN GOEDEREN"),
        Clause::title("title.sub", "ECHTSCHEIDINGSCONVENANT"),
        Clause::heading("parties.heading", "DE ONDERGETEKENDEN:"),
        Clause::paragraph("parties.man", identity(answers, "man")),
        Clause::paragraph("parties.and", "en"),
        Clause::paragraph("parties.woman", identity(answers, "vrouw")),
        Clause::paragraph("parties.together", "samen te noemen: \"partijen\";"),
    ]
}

fn identity(answers: &AnswerSet, party: &str) -> String {
    let field = |suffix: &str| format!("{}{}", party, suffix);

    [
        format!(
            "{} {},",
            value(answers, &field("Voornamen")),
            upper(answers, &field("Achternaam"))
        ),
        format!(
            "geboren op {} te {},",
            date(answers, &field("Geboortedatum")),
            value(answers, &field("Geboorteplaats"))
        ),
        format!(
            "wonende op het adres {}, {} te {},",
            value(answers, &field("Adres")),
            value(answers, &field("Postcode")),
            value(answers, &field("Woonplaats"))
        ),
        format!("hierna te noemen: \"de {}\";", party),
    ]
    .join("\n")
}
