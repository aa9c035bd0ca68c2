//! S3: Article 1, Children
//!
//! Only when `heeftKinderen == "ja"`. Its absence never renumbers later
//! articles: partner maintenance stays article 2.

use crate::answers::choices::{ChildSupport, Choice, YesNo};
use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    if answers.choice::<YesNo>("heeftKinderen") != Choice::Known(YesNo::Yes) {
        return Vec::new();
    }

    let single = single_child(answers);
    let (child_noun, child_object) = if single {
        ("kind", "het kind")
    } else {
        ("kinderen", "de kinderen")
    };

    let mut clauses = vec![
        Clause::heading("children.heading", "ARTIKEL 1. KINDEREN"),
        Clause::numbered(
            "children.parenting_plan",
            "1.1",
            None,
            format!(
                "Partijen hebben als ouders van hun {} afspraken vastgelegd in een ouderschapsplan, \
                 dat als bijlage 1 aan dit convenant wordt gehecht en daarvan onlosmakelijk deel uitmaakt.",
                child_noun
            ),
        ),
        Clause::paragraph(
            "children.costs",
            "Met betrekking tot de kosten van de kinderen is daarin het volgende overeengekomen:",
        ),
    ];

    let payer = match answers.choice::<ChildSupport>("kinderalimentatie") {
        Choice::Known(ChildSupport::FatherPays) => Some(("man", "vrouw", "kinderalimentatieBedrag")),
        Choice::Known(ChildSupport::MotherPays) => Some(("vrouw", "man", "kinderalimentatieBedragVrouw")),
        _ => None,
    };
    if let Some((payer, recipient, amount_field)) = payer {
        clauses.push(Clause::paragraph(
            "children.maintenance",
            format!(
                "De {} zal aan de {} ten behoeve van de verzorging en opvoeding van {} een bijdrage \
                 betalen van {} bruto per maand per kind.",
                payer,
                recipient,
                child_object,
                euro(answers, amount_field)
            ),
        ));
    }

    if answers.text("kinderenSpaargeld").is_some() {
        clauses.push(Clause::paragraph(
            "children.savings",
            format!(
                "Het saldo op de rekening(en) ten name van {} valt niet in de gemeenschap en blijft \
                 buiten de verdeling. Dit is vermogen van {} en staat onder het bewind van de ouders.",
                child_object, child_object
            ),
        ));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_without_children() {
        assert!(generate(&AnswerSet::with_defaults()).is_empty());
    }

    #[test]
    fn test_maintenance_restated_for_payer() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftKinderen", json!("ja"));
        answers.set("aantalKinderen", json!(2));
        answers.set("kinderalimentatie", json!("man-betaalt"));
        answers.set("kinderalimentatieBedrag", json!(275));

        let clauses = generate(&answers);
        assert_eq!(clauses[1].number.as_deref(), Some("1.1"));
        let maintenance = clauses.iter().find(|c| c.rule == "children.maintenance").unwrap();
        assert!(maintenance.text.starts_with("De man zal aan de vrouw"));
        assert!(maintenance.text.contains("van de kinderen een bijdrage betalen van € 275 bruto"));
    }

    #[test]
    fn test_no_maintenance_without_payer() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftKinderen", json!("ja"));
        answers.set("kinderalimentatie", json!("geen"));
        let clauses = generate(&answers);
        assert!(!clauses.iter().any(|c| c.rule == "children.maintenance"));
    }

    #[test]
    fn test_savings_singular() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("heeftKinderen", json!("ja"));
        answers.set("aantalKinderen", json!(1));
        answers.set("kinderenSpaargeld", json!("ING spaarrekening"));
        let clauses = generate(&answers);
        let savings = clauses.iter().find(|c| c.rule == "children.savings").unwrap();
        assert!(savings.text.contains("ten name van het kind valt niet"));
        assert!(clauses[1].text.contains("ouders van hun kind afspraken"));
    }
}
