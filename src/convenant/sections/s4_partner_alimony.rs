//! S4: Article 2, Partner maintenance
//!
//! Heading always; body is one of five regimes on `alimentatieRegeling`.
//! Provisional and definitive clauses are each gated on their own amount.
//! Indexing (2.10) follows both definitive regimes and depends on the regime
//! only.

use crate::answers::choices::{AlimonyRegime, Choice};
use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

const TAX_NOTICE: &str = "De ontvangen partneralimentatie is voor de alimentatiegerechtigde belastbaar inkomen \
     en wordt als zodanig belast. De alimentatiegerechtigde kan daarnaast over de ontvangen partneralimentatie \
     een aanslag inkomensafhankelijke bijdrage zorgverzekeringswet opgelegd krijgen. Ook kan de ontvangen \
     partneralimentatie gevolgen hebben voor de gerechtigdheid tot toeslagen. Voor de alimentatieplichtige \
     is de betaalde partneralimentatie aftrekbaar (mogelijk tegen beperkt tarief).";

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![Clause::heading("alimony.heading", "ARTIKEL 2. PARTNERALIMENTATIE")];

    let regime = answers.choice::<AlimonyRegime>("alimentatieRegeling");
    match regime {
        Choice::Known(AlimonyRegime::ProvisionalAndDefinitive) => {
            if answers.amount("voorlopigeAlimentatieBedrag").is_some() {
                clauses.push(provisional(answers));
            }
            if answers.amount("definitieveAlimentatieBedrag").is_some() {
                clauses.extend(definitive(answers, "definitieveAlimentatieBedrag", "alimentatieplichtige"));
            }
        }
        Choice::Known(AlimonyRegime::DefinitiveOnly) => {
            if answers.amount("definitieveAlimentatieBedragAlleen").is_some() {
                clauses.extend(definitive(
                    answers,
                    "definitieveAlimentatieBedragAlleen",
                    "alimentatieplichtigeAlleen",
                ));
            }
        }
        Choice::Known(AlimonyRegime::None) => clauses.push(Clause::numbered(
            "alimony.none",
            "2.4",
            Some("Geen partneralimentatie"),
            "Partijen komen overeen dat geen partij aan de andere partij een bijdrage in het \
             levensonderhoud verschuldigd zal zijn.",
        )),
        Choice::Known(AlimonyRegime::Buyout) => {
            if answers.amount("afkoopBedrag").is_some() {
                clauses.extend(buyout(answers));
            }
        }
        Choice::Known(AlimonyRegime::Waiver) => clauses.push(Clause::numbered(
            "alimony.waiver",
            "2.9",
            Some("Afstand van recht op partneralimentatie"),
            "Partijen doen over en weer afstand van hun recht op partneralimentatie. Dit kan niet bij \
             rechterlijke uitspraak worden gewijzigd op grond van een wijziging van omstandigheden, \
             behoudens in het geval van een zo ingrijpende wijziging van omstandigheden, dat de partij \
             die de wijziging verzoekt naar maatstaven van redelijkheid en billijkheid niet langer aan \
             het niet-wijzigingsbeding mag worden gehouden, zoals in artikel 1:159 lid 3 BW is bepaald.",
        )),
        Choice::Unset | Choice::Unrecognized(_) => {}
    }

    if matches!(
        regime,
        Choice::Known(AlimonyRegime::ProvisionalAndDefinitive | AlimonyRegime::DefinitiveOnly)
    ) {
        clauses.push(Clause::numbered(
            "alimony.indexing",
            "2.10",
            Some("Indexering"),
            "Het in artikel 2.4 vastgestelde bedrag zal worden verhoogd met de wettelijke indexering \
             als bedoeld in artikel 1:402a BW, voor het eerst per 1 januari volgend op de ingangsdatum.",
        ));
    }

    clauses
}

fn provisional(answers: &AnswerSet) -> Clause {
    let payer = Direction::from_field(answers, "alimentatieplichtige");
    Clause::numbered(
        "alimony.provisional",
        "2.1",
        Some("Voorlopige partneralimentatie"),
        format!(
            "Partijen stellen vast dat zij met ingang van {} duurzaam gescheiden leven. Vanaf die datum \
             tot aan de dag waarop de hieronder in artikel 2.4 genoemde regeling in werking treedt, draagt \
             de {} in het levensonderhoud van de {} bij met een bedrag van {} bruto per maand. Dit bedrag \
             zal maandelijks bij vooruitbetaling aan {} worden voldaan en wel vóór de eerste van iedere \
             nieuwe maand.",
            date(answers, "voorlopigeAlimentatieVanaf"),
            payer.party(),
            payer.other(),
            euro(answers, "voorlopigeAlimentatieBedrag"),
            payer.other_object()
        ),
    )
}

fn definitive(answers: &AnswerSet, amount_field: &str, payer_field: &str) -> Vec<Clause> {
    let payer = Direction::from_field(answers, payer_field);
    vec![
        Clause::numbered(
            "alimony.definitive",
            "2.4",
            Some("Hoogte partneralimentatie"),
            format!(
                "Op basis van de aldus vastgestelde behoefte en draagkracht, alsmede op basis van een \
                 vergelijking van de draagkracht van partijen, komen partijen overeen dat de {} aan de {} \
                 met ingang van de datum van inschrijving van de echtscheidingsbeschikking zal bijdragen \
                 in het levensonderhoud van de {} met een bedrag van {} bruto per maand, welk bedrag bij \
                 vooruitbetaling maandelijks aan {} zal worden voldaan.",
                payer.party(),
                payer.other(),
                payer.other(),
                euro(answers, amount_field),
                payer.other_object()
            ),
        ),
        Clause::paragraph("alimony.definitive.tax", TAX_NOTICE),
    ]
}

fn buyout(answers: &AnswerSet) -> Vec<Clause> {
    let payer = Direction::from_field(answers, "afkoopBetaler");
    let deadline = match answers.date("afkoopBetalingsdatum") {
        Some(raw) => format!(", uiterlijk op {}", format_dutch_date(&raw)),
        None => String::new(),
    };

    vec![
        Clause::numbered(
            "alimony.buyout",
            "2.7",
            Some("Afkoop met afstemming aangiften"),
            format!(
                "De {} koopt de alimentatie die {} met ingang van de datum van ontbinding van het huwelijk \
                 van partijen aan de {} verschuldigd zal zijn af door storting van een afkoopsom ten bedrage \
                 van {} op een door de {} aan te wijzen bankrekening.",
                payer.party(),
                payer.subject(),
                payer.other(),
                euro(answers, "afkoopBedrag"),
                payer.other()
            ),
        ),
        Clause::paragraph(
            "alimony.buyout.deposit",
            format!(
                "De storting van het gehele bedrag vindt plaats binnen veertien dagen na, maar niet eerder \
                 dan de datum van inschrijving van de echtscheidingsbeschikking{}.",
                deadline
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn regime(token: &str) -> AnswerSet {
        let mut answers = AnswerSet::with_defaults();
        answers.set("alimentatieRegeling", json!(token));
        answers
    }

    #[test]
    fn test_none_regime() {
        let clauses = generate(&AnswerSet::with_defaults());
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1].number.as_deref(), Some("2.4"));
        assert_eq!(clauses[1].rule, "alimony.none");
    }

    #[test]
    fn test_provisional_pronoun_is_recipient() {
        let mut answers = regime("voorlopig-en-definitief");
        answers.set("voorlopigeAlimentatieBedrag", json!(1200));
        answers.set("alimentatieplichtige", json!("vrouw"));
        let clauses = generate(&answers);
        let provisional = clauses.iter().find(|c| c.rule == "alimony.provisional").unwrap();
        assert!(provisional.text.contains("draagt de vrouw in het levensonderhoud van de man"));
        assert!(provisional.text.contains("vooruitbetaling aan hem worden voldaan"));
    }

    #[test]
    fn test_definitive_only_uses_its_own_fields() {
        let mut answers = regime("alleen-definitief");
        answers.set("definitieveAlimentatieBedrag", json!(900));
        let clauses = generate(&answers);
        assert!(!clauses.iter().any(|c| c.rule == "alimony.definitive"));
        assert!(clauses.iter().any(|c| c.rule == "alimony.indexing"));

        answers.set("definitieveAlimentatieBedragAlleen", json!(900));
        answers.set("alimentatieplichtigeAlleen", json!("man"));
        let clauses = generate(&answers);
        let definitive = clauses.iter().find(|c| c.rule == "alimony.definitive").unwrap();
        assert!(definitive.text.contains("€ 900 bruto per maand"));
        assert!(definitive.text.ends_with("maandelijks aan haar zal worden voldaan."));
        assert_eq!(clauses.last().map(|c| c.rule), Some("alimony.indexing"));
    }

    #[test]
    fn test_buyout_without_amount_is_empty() {
        let clauses = generate(&regime("afkoop"));
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_buyout_without_deadline() {
        let mut answers = regime("afkoop");
        answers.set("afkoopBedrag", json!(20000));
        answers.set("afkoopBetaler", json!("man"));
        let clauses = generate(&answers);
        let deposit = clauses.iter().find(|c| c.rule == "alimony.buyout.deposit").unwrap();
        assert!(deposit.text.ends_with("inschrijving van de echtscheidingsbeschikking."));
        assert!(clauses[1].text.contains("die hij met ingang"));
    }

    #[test]
    fn test_buyout_with_typed_zero_amount() {
        let mut answers = regime("afkoop");
        answers.set("afkoopBedrag", json!("0"));
        answers.set("afkoopBetaler", json!("vrouw"));
        let clauses = generate(&answers);
        let buyout = clauses.iter().find(|c| c.rule == "alimony.buyout").unwrap();
        assert!(buyout.text.contains("afkoopsom ten bedrage van € 0 op"));

        answers.set("afkoopBedrag", json!(0));
        assert_eq!(generate(&answers).len(), 1);
    }

    #[test]
    fn test_waiver_has_no_indexing() {
        let clauses = generate(&regime("afstand"));
        assert_eq!(clauses[1].number.as_deref(), Some("2.9"));
        assert!(!clauses.iter().any(|c| c.rule == "alimony.indexing"));
    }

    #[test]
    fn test_unknown_regime_keeps_heading_only() {
        let clauses = generate(&regime("maandelijks"));
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].rule, "alimony.heading");
    }
}
