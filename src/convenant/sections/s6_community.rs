//! S6: Article 4, Division of the community of property
//!
//! Sub-clauses are gated independently. The household contents clause is
//! always present; its body follows `inboedelRegeling`. The closing clause
//! takes the numeral after the debts clause when debts exist.

use crate::answers::choices::{Choice, ContentsArrangement, SavingsSplit};
use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![Clause::heading("community.heading", "ARTIKEL 4. VERDELING VAN DE GEMEENSCHAP")];

    if answers.is_yes("heeftPrivevermogen") {
        if let Some(details) = answers.text("privevermogenDetails") {
            clauses.push(Clause::numbered(
                "community.private_assets",
                "4.1",
                Some("Privévermogen"),
                format!(
                    "Partijen verklaren dat het volgende vermogen tot het privévermogen behoort en buiten de \
                     gemeenschap valt: {}. Dit vermogen zal buiten de verdeling blijven en toebedeeld worden \
                     aan de partij wiens privévermogen het betreft.",
                    details
                ),
            ));
        }
    }

    if answers.is_yes("heeftBankrekeningen") {
        clauses.extend(bank_accounts(answers));
    }

    if answers.is_yes("heeftAutos") {
        clauses.push(Clause::numbered(
            "community.vehicles",
            "4.3",
            Some("Auto's / voertuigen"),
            "Tot de gemeenschap behoren de volgende voertuigen:",
        ));
        if let Some(details) = answers.text("autosDetails") {
            clauses.push(Clause::paragraph("community.vehicles.details", details));
        }
        clauses.push(Clause::paragraph(
            "community.vehicles.allocation",
            "De voertuigen worden toegedeeld conform de hierboven genoemde toedeling.",
        ));
    }

    clauses.push(Clause::numbered(
        "community.contents",
        "4.4",
        Some("Inboedel"),
        contents_text(answers),
    ));

    let debts = answers.is_yes("heeftSchulden");
    if debts {
        clauses.push(Clause::numbered(
            "community.debts",
            "4.5",
            Some("Schulden"),
            "Partijen verklaren dat de volgende schulden (anders dan de eventuele hypothecaire geldlening) \
             tot de gemeenschap behoren:",
        ));
        if let Some(details) = answers.text("schuldenDetails") {
            clauses.push(Clause::paragraph("community.debts.details", details));
        }
        clauses.push(Clause::paragraph(
            "community.debts.allocation",
            "Deze schulden worden verdeeld en/of voor rekening genomen conform de hierboven genoemde verdeling.",
        ));
    }

    clauses.push(Clause::numbered(
        "community.closing",
        community_closing_numeral(debts),
        Some("Slotbepaling gemeenschap"),
        "Partijen verklaren dat hetgeen hiervoor is vermeld de volledige inhoud van de \
         huwelijksgemeenschap vormt. Voor zover er nog activa of passiva bestaan die niet \
         hierboven zijn genoemd, zullen deze alsnog bij helfte worden verdeeld, tenzij partijen \
         anders overeenkomen.",
    ));

    clauses
}

fn bank_accounts(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![Clause::numbered(
        "community.bank_accounts",
        "4.2",
        Some("Bankrekeningen en spaargeld"),
        "Partijen hebben de volgende bankrekeningen:",
    )];

    if let Some(details) = answers.text("bankrekeningenDetails") {
        clauses.push(Clause::paragraph("community.bank_accounts.details", details));
    }

    match answers.choice::<SavingsSplit>("spaargeldVerdeling") {
        Choice::Known(SavingsSplit::Halves) => {
            let total = match answers.amount("totaalSpaargeld") {
                Some(amount) => format!(" (totaal € {})", amount),
                None => String::new(),
            };
            clauses.push(Clause::paragraph(
                "community.bank_accounts.split.halves",
                format!(
                    "Partijen komen overeen dat het totale saldo van de bankrekeningen{} onderling bij helfte \
                     verdeeld zal worden. Ieder van partijen heeft daarmee recht op de helft van het totale saldo.",
                    total
                ),
            ));
        }
        Choice::Known(SavingsSplit::PerAccount) => clauses.push(Clause::paragraph(
            "community.bank_accounts.split.per_account",
            "De bankrekeningen worden toegedeeld conform de hierboven genoemde toedeling per rekening.",
        )),
        Choice::Known(SavingsSplit::Other) => clauses.push(Clause::paragraph(
            "community.bank_accounts.split.other",
            "Partijen hebben een afwijkende verdeling van het spaargeld afgesproken, zoals hierboven toegelicht.",
        )),
        Choice::Unset | Choice::Unrecognized(_) => {}
    }

    clauses
}

/// Body of 4.4. Empty for an unknown arrangement; the caption stays.
fn contents_text(answers: &AnswerSet) -> String {
    let body = match answers.choice::<ContentsArrangement>("inboedelRegeling") {
        Choice::Known(ContentsArrangement::AlreadyDivided) => {
            "Partijen verklaren dat de inboedel reeds onderling is verdeeld naar ieders tevredenheid. \
             Ieder van partijen is reeds in het bezit van zijn of haar deel van de inboedel."
                .to_string()
        }
        Choice::Known(ContentsArrangement::Halves) => format!(
            "De inboedel heeft een taxatiewaarde van {}. Partijen komen overeen dat de inboedel bij helfte \
             verdeeld zal worden, op basis van deze taxatiewaarde. Partijen zullen de inboedel onderling \
             verdelen op een wijze die beiden passend achten.",
            euro(answers, "inboedelWaarde")
        ),
        Choice::Known(ContentsArrangement::ToMan) => {
            "De volledige inboedel wordt toegedeeld aan de man. De man neemt de inboedel over \
             en de vrouw doet afstand van haar aanspraken op de inboedel."
                .to_string()
        }
        Choice::Known(ContentsArrangement::ToWoman) => {
            "De volledige inboedel wordt toegedeeld aan de vrouw. De vrouw neemt de inboedel over \
             en de man doet afstand van zijn aanspraken op de inboedel."
                .to_string()
        }
        Choice::Unset | Choice::Unrecognized(_) => return String::new(),
    };

    match answers.text("inboedelDetails") {
        Some(details) => format!("{} {}", body, details),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().filter_map(|c| c.number.as_deref()).collect()
    }

    #[test]
    fn test_minimal_article() {
        let clauses = generate(&AnswerSet::with_defaults());
        assert_eq!(numbers(&clauses), vec!["4.4", "4.5"]);
        assert_eq!(clauses.last().map(|c| c.rule), Some("community.closing"));
    }

    #[test]
    fn test_closing_moves_after_debts() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftSchulden", json!("ja"));
        let clauses = generate(&answers);
        assert_eq!(numbers(&clauses), vec!["4.4", "4.5", "4.6"]);
        assert_eq!(clauses.last().and_then(|c| c.number.as_deref()), Some("4.6"));
    }

    #[test]
    fn test_private_assets_need_details() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftPrivevermogen", json!("ja"));
        assert!(!generate(&answers).iter().any(|c| c.rule == "community.private_assets"));

        answers.set("privevermogenDetails", json!("erfenis van de man"));
        let clauses = generate(&answers);
        let private = clauses.iter().find(|c| c.rule == "community.private_assets").unwrap();
        assert!(private.text.contains("buiten de gemeenschap valt: erfenis van de man. Dit vermogen"));
    }

    #[test]
    fn test_bank_split_with_total() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftBankrekeningen", json!("ja"));
        answers.set("spaargeldVerdeling", json!("fifty-fifty"));
        answers.set("totaalSpaargeld", json!(18000));
        let clauses = generate(&answers);
        let split = clauses.iter().find(|c| c.rule == "community.bank_accounts.split.halves").unwrap();
        assert!(split.text.contains("bankrekeningen (totaal € 18000) onderling bij helfte"));
    }

    #[test]
    fn test_contents_details_appended() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("inboedelRegeling", json!("toedeling-vrouw"));
        answers.set("inboedelDetails", json!("De piano gaat naar de man."));
        let clauses = generate(&answers);
        let contents = clauses.iter().find(|c| c.rule == "community.contents").unwrap();
        assert!(contents.text.ends_with("aanspraken op de inboedel. De piano gaat naar de man."));
    }

    #[test]
    fn test_unknown_contents_keeps_caption() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("inboedelRegeling", json!("loting"));
        answers.set("inboedelDetails", json!("x"));
        let clauses = generate(&answers);
        let contents = clauses.iter().find(|c| c.rule == "community.contents").unwrap();
        assert_eq!(contents.text, "");
        assert_eq!(contents.text_block(), "4.4 Inboedel");
    }
}
