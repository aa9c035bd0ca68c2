//! S5: Article 3, Marital home
//!
//! Four-way branch on `woningStatus`. Numerals are the literals the covenant
//! text uses (3.1, 3.2, 3.3, 3.5, 3.7, 3.8); they are not consecutive.

use crate::answers::choices::{Choice, HomeStatus};
use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![Clause::heading("home.heading", "ARTIKEL 3. DE ECHTELIJKE WONING")];

    match answers.choice::<HomeStatus>("woningStatus") {
        Choice::Known(HomeStatus::Rented) => clauses.extend(rented(answers)),
        Choice::Known(HomeStatus::OwnedAssigned) => clauses.extend(owned_assigned(answers)),
        Choice::Known(HomeStatus::OwnedSold) => clauses.extend(owned_sold(answers)),
        Choice::Known(HomeStatus::None) => clauses.push(Clause::numbered(
            "home.none",
            "3.1",
            Some("Geen echtelijke woning"),
            "Partijen hebben geen gemeenschappelijke woning.",
        )),
        Choice::Unset | Choice::Unrecognized(_) => {}
    }

    clauses
}

fn rented(answers: &AnswerSet) -> Vec<Clause> {
    let tenant = Direction::from_field(answers, "huurToedeling");
    vec![
        Clause::numbered(
            "home.rent.assignment",
            "3.1",
            Some("Huur"),
            format!(
                "Partijen zijn huurders van de woning op het adres {} te {}. Na de datum van inschrijving \
                 van de echtscheidingsbeschikking zal dit huurrecht toekomen aan de {}. Partijen zullen de \
                 rechter op grond van het bepaalde in artikel 7:266 lid 5 BW verzoeken te bepalen dat de {} \
                 met ingang van voormelde datum huurder zal zijn van de woning.",
                value(answers, "woningAdres"),
                value(answers, "woningWoonplaats"),
                tenant.party(),
                tenant.party()
            ),
        ),
        Clause::paragraph(
            "home.rent.obligations",
            format!(
                "Alle verplichtingen die voortvloeien uit de huurovereenkomst met betrekking tot voornoemde \
                 woning zijn tot {} voldaan. De {} neemt vanaf die datum al deze verplichtingen voor {} rekening.",
                date(answers, "ondertekeningDatum"),
                tenant.party(),
                tenant.possessive()
            ),
        ),
    ]
}

fn mortgage(answers: &AnswerSet, rule: &'static str, amount_field: &str) -> Clause {
    Clause::numbered(
        rule,
        "3.3",
        Some("Hypothecaire geldlening"),
        format!(
            "Op de in artikel 3.1 genoemde onroerende zaak rust een schuld uit hoofde van hypothecaire \
             geldlening. De restanthoofdsom van de hypothecaire geldlening bedraagt per {} {}.",
            date(answers, "ondertekeningDatum"),
            euro(answers, amount_field)
        ),
    )
}

fn owned_assigned(answers: &AnswerSet) -> Vec<Clause> {
    let assignee = Direction::from_field(answers, "woningToedeling");
    let mut clauses = vec![
        Clause::numbered(
            "home.owned.assigned.property",
            "3.1",
            Some("Echtelijke woning toegedeeld"),
            format!(
                "Tot de gemeenschap van goederen van partijen behoort de onroerende zaak staande en gelegen \
                 aan de {} te {}.",
                value(answers, "woningAdresEigen"),
                value(answers, "woningWoonplaatsEigen")
            ),
        ),
        Clause::numbered(
            "home.owned.assigned.allocation",
            "3.2",
            Some("Toedeling"),
            format!(
                "De in artikel 3.1 genoemde onroerende zaak wordt voor de daaraan toegekende waarde van {} \
                 toegedeeld aan de {}.",
                euro(answers, "woningWaarde"),
                assignee.party()
            ),
        ),
    ];

    if answers.amount("hypotheekBedrag").is_some() {
        clauses.push(mortgage(answers, "home.owned.assigned.mortgage", "hypotheekBedrag"));
        clauses.push(Clause::paragraph(
            "home.owned.assigned.mortgage_assumption",
            format!(
                "Vanaf de datum waarop de hierna te noemen akte van verdeling wordt verleden neemt de {} \
                 op zich om bij uitsluiting van de {} alle uit deze hypothecaire geldlening voortvloeiende \
                 verplichtingen als eigen schuld te voldoen.",
                assignee.party(),
                assignee.other()
            ),
        ));
    }

    if answers.amount("overnamesom").is_some() {
        let sum = euro(answers, "overnamesom");
        clauses.push(Clause::numbered(
            "home.owned.assigned.equalization",
            "3.8",
            Some("Overbedeling"),
            format!(
                "Ten gevolge van de toedeling van de onverdeelde helft van de hiervoor in artikel 3.1 \
                 genoemde onroerende zaak aan de {a}, wordt de {a} overbedeeld voor een bedrag van {sum}. \
                 Ter verwerving van die onverdeelde helft van de woning, dient de {a} derhalve aan de {o} \
                 uit te betalen de somma van {sum}.",
                a = assignee.party(),
                o = assignee.other(),
                sum = sum
            ),
        ));
    }

    clauses.push(Clause::numbered(
        "home.owned.assigned.transfer",
        "3.7",
        Some("Levering"),
        format!(
            "Partijen geven hierbij opdracht aan een notaris om, zo mogelijk binnen één maand na \
             inschrijving van de echtscheidingsbeschikking, een notariële akte te verlijden waarbij de \
             in artikel 3.1 genoemde onroerende zaak goederenrechtelijk aan de {} geleverd wordt.",
            assignee.party()
        ),
    ));

    clauses
}

fn owned_sold(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![
        Clause::numbered(
            "home.owned.sale.property",
            "3.1",
            Some("Eigen woning wordt verkocht aan derden"),
            format!(
                "Tot de huwelijkse gemeenschap van partijen behoort de onroerende zaak staande en gelegen \
                 aan de {} te {}.",
                value(answers, "woningAdresVerkoop"),
                value(answers, "woningWoonplaatsVerkoop")
            ),
        ),
        Clause::numbered(
            "home.owned.sale.instruction",
            "3.2",
            Some("Verkoop"),
            "Partijen hebben een makelaar opdracht gegeven de verkoop van de in artikel 3.1 genoemde \
             onroerende zaak ter hand te nemen.",
        ),
        Clause::paragraph(
            "home.owned.sale.cooperation",
            "Partijen zullen hun medewerking verlenen aan alle voor de verkoop noodzakelijke handelingen, \
             zoals bijvoorbeeld (maar niet uitsluitend) het opruimen en schoonmaken van de woning voor \
             het maken van de foto's, bezichtigingen en dergelijke.",
        ),
    ];

    if answers.amount("hypotheekBedragVerkoop").is_some() {
        clauses.push(mortgage(answers, "home.owned.sale.mortgage", "hypotheekBedragVerkoop"));
    }

    clauses.push(Clause::numbered(
        "home.owned.sale.proceeds",
        "3.5",
        Some("Verdeling verkoopopbrengst"),
        "Enig positief restant (verkoopopbrengst -/- kosten -/- hypothecaire geldlening) zal aan \
         partijen bij helfte toekomen. Partijen zullen opdracht geven aan de notaris om onverwijld \
         nadat de levering heeft plaatsgevonden ieders aandeel uit te keren. Indien na levering een \
         schuld aan de hypotheeknemer resteert, dienen partijen deze schuld bij helfte te dragen.",
    ));

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(token: &str) -> AnswerSet {
        let mut answers = AnswerSet::with_defaults();
        answers.set("woningStatus", json!(token));
        answers
    }

    fn numbers(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().filter_map(|c| c.number.as_deref()).collect()
    }

    #[test]
    fn test_rent_obligations_use_possessive() {
        let mut answers = status("huur");
        answers.set("huurToedeling", json!("vrouw"));
        answers.set("ondertekeningDatum", json!("2024-05-02"));
        let clauses = generate(&answers);
        assert_eq!(
            clauses[2].text,
            "Alle verplichtingen die voortvloeien uit de huurovereenkomst met betrekking tot voornoemde \
             woning zijn tot 2 mei 2024 voldaan. De vrouw neemt vanaf die datum al deze verplichtingen \
             voor haar rekening."
        );
    }

    #[test]
    fn test_assignment_minimal() {
        let clauses = generate(&status("eigen-toedeling"));
        assert_eq!(numbers(&clauses), vec!["3.1", "3.2", "3.7"]);
    }

    #[test]
    fn test_assignment_full() {
        let mut answers = status("eigen-toedeling");
        answers.set("woningToedeling", json!("man"));
        answers.set("woningWaarde", json!(425000));
        answers.set("hypotheekBedrag", json!(210000));
        answers.set("overnamesom", json!(107500));

        let clauses = generate(&answers);
        assert_eq!(numbers(&clauses), vec!["3.1", "3.2", "3.3", "3.8", "3.7"]);
        let equalization = clauses.iter().find(|c| c.rule == "home.owned.assigned.equalization").unwrap();
        assert!(equalization.text.contains("dient de man derhalve aan de vrouw uit te betalen de somma van € 107500."));
        let assumption = clauses.iter().find(|c| c.rule == "home.owned.assigned.mortgage_assumption").unwrap();
        assert!(assumption.text.contains("bij uitsluiting van de vrouw"));
    }

    #[test]
    fn test_sale_mortgage_gated() {
        let clauses = generate(&status("eigen-verkoop"));
        assert_eq!(numbers(&clauses), vec!["3.1", "3.2", "3.5"]);

        let mut answers = status("eigen-verkoop");
        answers.set("hypotheekBedragVerkoop", json!(180000));
        let clauses = generate(&answers);
        assert_eq!(numbers(&clauses), vec!["3.1", "3.2", "3.3", "3.5"]);
    }

    #[test]
    fn test_unknown_status_keeps_heading_only() {
        assert_eq!(generate(&status("woonboot")).len(), 1);
    }
}
