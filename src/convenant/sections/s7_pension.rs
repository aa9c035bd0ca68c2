//! S7: Article 5, Pension
//!
//! Four-way branch on `pensioenRegeling`. Every branch can name each
//! spouse's pension provider, gated on `pensioenManHeeft` /
//! `pensioenVrouwHeeft`.

use crate::answers::choices::{Choice, PensionArrangement};
use crate::answers::{AnswerSet, Party};
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

const WVPS: &str = "Wet verevening pensioenaanspraken bij scheiding (WVPS)";

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![Clause::heading("pension.heading", "ARTIKEL 5. PENSIOEN")];

    let arrangement = match answers.choice::<PensionArrangement>("pensioenRegeling") {
        Choice::Known(arrangement) => arrangement,
        Choice::Unset | Choice::Unrecognized(_) => return clauses,
    };

    match arrangement {
        PensionArrangement::Standard => {
            clauses.push(Clause::numbered(
                "pension.standard",
                "5.1",
                Some("Verevening pensioenaanspraken"),
                format!(
                    "Partijen komen overeen dat de tijdens het huwelijk opgebouwde pensioenaanspraken bij helfte \
                     zullen worden verdeeld conform de {}.",
                    WVPS
                ),
            ));
            clauses.extend(providers(answers, |sentence, _| {
                format!(
                    "{}. Partijen zullen bij deze pensioenuitvoerder een verzoek indienen tot verevening van \
                     de tijdens het huwelijk opgebouwde aanspraken.",
                    sentence
                )
            }));
            clauses.push(Clause::paragraph(
                "pension.standard.notice",
                "Partijen zullen ieder een verklaring ondertekenen, waarin zij verklaren een afschrift van \
                 dit convenant te zullen toezenden aan de betrokken pensioenuitvoerder(s).",
            ));
        }
        PensionArrangement::Deviating => {
            clauses.push(Clause::numbered(
                "pension.deviating",
                "5.2",
                Some("Afwijkende verevening pensioenaanspraken"),
                format!(
                    "In afwijking van de standaard 50/50 verevening komen partijen overeen dat de \
                     pensioenaanspraken worden verdeeld met een vereveningspercentage van {}%.",
                    value_or(answers, "pensioenAfwijkendPercentage", "50")
                ),
            ));
            clauses.extend(providers(answers, |sentence, _| format!("{}.", sentence)));
            clauses.extend(details(answers));
        }
        PensionArrangement::Conversion => {
            clauses.push(Clause::numbered(
                "pension.conversion",
                "5.3",
                Some("Conversie pensioen in partneralimentatie"),
                "Partijen komen overeen dat de pensioenaanspraken niet worden verdeeld, maar worden omgezet \
                 (geconverteerd) in een verhoogde partneralimentatie zoals opgenomen in artikel 2 van dit \
                 convenant.",
            ));
            clauses.extend(providers(answers, |sentence, _| format!("{}.", sentence)));
            clauses.push(Clause::paragraph(
                "pension.conversion.waiver",
                "Door deze conversie doen partijen wederzijds afstand van hun recht op verevening van \
                 pensioenaanspraken als bedoeld in de WVPS.",
            ));
            clauses.extend(details(answers));
        }
        PensionArrangement::Exclusion => {
            clauses.push(Clause::numbered(
                "pension.exclusion",
                "5.4",
                Some("Uitsluiting verevening pensioenaanspraken"),
                format!(
                    "Partijen komen uitdrukkelijk overeen dat zij wederzijds afstand doen van hun recht op \
                     verevening van de tijdens het huwelijk opgebouwde pensioenaanspraken, zoals bedoeld in \
                     de {}.",
                    WVPS
                ),
            ));
            clauses.extend(providers(answers, |sentence, party| {
                format!("{}, welk pensioen voor {} behouden blijft.", sentence, party.object_pronoun())
            }));
            clauses.push(Clause::paragraph(
                "pension.exclusion.irrevocable",
                "Deze afstandsverklaring is onherroepelijk en kan niet bij rechterlijke uitspraak worden \
                 gewijzigd, behoudens in het geval van een zo ingrijpende wijziging van omstandigheden, \
                 dat de partij die wijziging verzoekt naar maatstaven van redelijkheid en billijkheid niet \
                 langer aan dit beding mag worden gehouden.",
            ));
            clauses.extend(details(answers));
        }
    }

    clauses
}

/// One provider clause per spouse who built up a pension. `finish` completes
/// the "De man heeft pensioen opgebouwd bij X" sentence for the branch.
fn providers(answers: &AnswerSet, finish: impl Fn(String, Party) -> String) -> Vec<Clause> {
    [
        (Party::Man, "pensioenManHeeft", "pensioenManUitvoerder", "pensioenManPolisnummer", "pension.provider.man"),
        (
            Party::Woman,
            "pensioenVrouwHeeft",
            "pensioenVrouwUitvoerder",
            "pensioenVrouwPolisnummer",
            "pension.provider.woman",
        ),
    ]
    .into_iter()
    .filter(|(_, has, ..)| answers.is_yes(has))
    .map(|(party, _, provider, policy, rule)| {
        let mut sentence = format!("De {} heeft pensioen opgebouwd bij {}", party.label(), value(answers, provider));
        if let Some(number) = answers.text(policy) {
            sentence.push_str(&format!(", polisnummer {}", number));
        }
        Clause::paragraph(rule, finish(sentence, party))
    })
    .collect()
}

fn details(answers: &AnswerSet) -> Option<Clause> {
    answers
        .text("pensioenDetails")
        .map(|text| Clause::paragraph("pension.details", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arrangement(token: &str) -> AnswerSet {
        let mut answers = AnswerSet::with_defaults();
        answers.set("pensioenRegeling", json!(token));
        answers.set("pensioenManHeeft", json!("ja"));
        answers.set("pensioenManUitvoerder", json!("ABP"));
        answers.set("pensioenManPolisnummer", json!("12-345"));
        answers.set("pensioenDetails", json!("Nabestaandenpensioen blijft in stand."));
        answers
    }

    #[test]
    fn test_standard_provider_sentence() {
        let clauses = generate(&arrangement("standaard"));
        let provider = clauses.iter().find(|c| c.rule == "pension.provider.man").unwrap();
        assert!(provider.text.starts_with("De man heeft pensioen opgebouwd bij ABP, polisnummer 12-345. Partijen zullen"));
        assert!(!clauses.iter().any(|c| c.rule == "pension.provider.woman"));
        assert!(!clauses.iter().any(|c| c.rule == "pension.details"));
        assert_eq!(clauses.last().map(|c| c.rule), Some("pension.standard.notice"));
    }

    #[test]
    fn test_deviating_percentage_fallback() {
        let clauses = generate(&arrangement("afwijkend"));
        assert!(clauses[1].text.ends_with("vereveningspercentage van 50%."));
        assert_eq!(clauses.last().map(|c| c.rule), Some("pension.details"));

        let mut answers = arrangement("afwijkend");
        answers.set("pensioenAfwijkendPercentage", json!(40));
        assert!(generate(&answers)[1].text.ends_with("vereveningspercentage van 40%."));
    }

    #[test]
    fn test_exclusion_keeps_pension() {
        let mut answers = arrangement("uitsluiting");
        answers.set("pensioenVrouwHeeft", json!("ja"));
        let clauses = generate(&answers);
        let woman = clauses.iter().find(|c| c.rule == "pension.provider.woman").unwrap();
        assert_eq!(woman.text, "De vrouw heeft pensioen opgebouwd bij [...], welk pensioen voor haar behouden blijft.");
        let rules = clauses.iter().map(|c| c.rule).collect::<Vec<_>>();
        assert_eq!(
            rules,
            vec![
                "pension.heading",
                "pension.exclusion",
                "pension.provider.man",
                "pension.provider.woman",
                "pension.exclusion.irrevocable",
                "pension.details",
            ]
        );
    }

    #[test]
    fn test_conversion_order() {
        let clauses = generate(&arrangement("conversie"));
        let rules = clauses.iter().map(|c| c.rule).collect::<Vec<_>>();
        assert_eq!(
            rules,
            vec![
                "pension.heading",
                "pension.conversion",
                "pension.provider.man",
                "pension.conversion.waiver",
                "pension.details",
            ]
        );
    }
}
