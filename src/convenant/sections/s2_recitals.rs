//! S2: Recitals ("NEMEN IN AANMERKING")
//!
//! Fixed preamble on the marriage and the applicable law, then the children
//! branch on `heeftKinderen`:
//! - `ja`: listing sentence, optional details, custody phrasing, contact
//!   arrangement and child maintenance, each gated on its own answer
//! - `nee`: the fixed "no children" sentence
//! - unset or unknown: nothing
//!
//! Closes with the mediation and registry paragraphs and the heading that
//! introduces the articles.

use crate::answers::choices::{ChildSupport, Choice, Custody, Party, YesNo};
use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = vec![
        Clause::heading("recitals.heading", "NEMEN IN AANMERKING:"),
        Clause::paragraph(
            "recitals.marriage",
            format!(
                "Partijen zijn op {} te {} met elkaar gehuwd.",
                date(answers, "huwelijksdatum"),
                value(answers, "huwelijksplaats")
            ),
        ),
        Clause::paragraph(
            "recitals.nationality",
            format!(
                "De man en de vrouw hebben beiden de {} nationaliteit.",
                value_or(answers, "nationaliteit", "Nederlandse")
            ),
        ),
        Clause::paragraph(
            "recitals.law",
            "De vraag of ontbinding van het huwelijk kan worden uitgesproken en op welke gronden, \
             wordt volgens artikel 10:56 BW bepaald door het Nederlandse recht.",
        ),
        Clause::paragraph(
            "recitals.community",
            "Partijen hebben voorafgaand aan en tijdens hun huwelijk geen huwelijkse voorwaarden gemaakt. \
             Omdat partijen met elkaar in het huwelijk zijn getreden vóór 1 januari 2018, \
             bestaat tussen hen een algehele gemeenschap van goederen.",
        ),
    ];

    match answers.choice::<YesNo>("heeftKinderen") {
        Choice::Known(YesNo::Yes) => clauses.extend(children(answers)),
        Choice::Known(YesNo::No) => clauses.push(Clause::paragraph(
            "recitals.children.none",
            "Uit dit huwelijk zijn geen kinderen geboren.",
        )),
        Choice::Unset | Choice::Unrecognized(_) => {}
    }

    let mediator = match answers.text("mediatorNaam") {
        Some(name) => format!("mr. {}", name),
        None => "een advocaat-mediator".to_string(),
    };
    clauses.push(Clause::paragraph(
        "recitals.mediation",
        format!(
            "Het huwelijk van partijen is duurzaam ontwricht. Partijen wensen daarom dat hun huwelijk \
             door echtscheiding wordt ontbonden. Partijen hebben zich daartoe gewend tot {}, \
             met het verzoek hen beiden te informeren en te begeleiden bij de totstandkoming van \
             een regeling voor de gevolgen van hun scheiding en voor hen aan de {} te verzoeken \
             tussen hen de echtscheiding uit te spreken.",
            mediator,
            value_or(answers, "rechtbank", "rechtbank")
        ),
    ));
    clauses.push(Clause::paragraph(
        "recitals.registry",
        "Voor het geval de echtscheiding tussen partijen wordt uitgesproken en de beschikking \
         wordt ingeschreven in de registers van de burgerlijke stand, hebben partijen de gevolgen \
         van deze echtscheiding op de hieronder omschreven wijze met elkaar geregeld.",
    ));
    clauses.push(Clause::heading(
        "recitals.agreement",
        "PARTIJEN VERKLAREN HET VOLGENDE MET ELKAAR TE ZIJN OVEREENGEKOMEN:",
    ));

    clauses
}

fn children(answers: &AnswerSet) -> Vec<Clause> {
    let mut clauses = Vec::new();

    let listing = if single_child(answers) {
        "is het volgende kind"
    } else {
        "zijn de volgende kinderen"
    };
    clauses.push(Clause::paragraph(
        "recitals.children.listing",
        format!("Uit dit huwelijk {} geboren:", listing),
    ));

    if let Some(details) = answers.text("kinderenDetails") {
        clauses.push(Clause::paragraph("recitals.children.details", details));
    }

    if let Choice::Known(custody) = answers.choice::<Custody>("ouderlijkGezag") {
        clauses.push(custody_clause(custody));
    }

    if let Some(contact) = answers.text("zorgregelingDetails") {
        clauses.push(Clause::paragraph(
            "recitals.children.contact",
            format!("De omgangsregeling is als volgt: {}", contact),
        ));
    }

    match answers.choice::<ChildSupport>("kinderalimentatie") {
        Choice::Known(ChildSupport::FatherPays) => clauses.push(child_support(
            "recitals.child_support.father",
            Party::Man,
            euro_or(answers, "kinderalimentatieBedrag", AMOUNT_PLACEHOLDER),
        )),
        Choice::Known(ChildSupport::MotherPays) => clauses.push(child_support(
            "recitals.child_support.mother",
            Party::Woman,
            euro_or(answers, "kinderalimentatieBedragVrouw", AMOUNT_PLACEHOLDER),
        )),
        _ => {}
    }

    clauses
}

fn custody_clause(custody: Custody) -> Clause {
    const JOINT: &str = "Partijen oefenen over hun minderjarige kind(eren) gezamenlijk het ouderlijk gezag uit";
    const SOLE: &str = "Het eenhoofdig ouderlijk gezag over de minderjarige kind(eren) wordt uitgeoefend door";

    let (rule, text) = match custody {
        Custody::Joint => (
            "recitals.custody.joint",
            format!("{} en hebben een co-ouderregeling afgesproken.", JOINT),
        ),
        Custody::JointResidenceFather => (
            "recitals.custody.joint_residence_father",
            format!("{}. Het hoofdverblijf van het kind/de kinderen is bij de {}.", JOINT, Party::Man.parent_noun()),
        ),
        Custody::JointResidenceMother => (
            "recitals.custody.joint_residence_mother",
            format!("{}. Het hoofdverblijf van het kind/de kinderen is bij de {}.", JOINT, Party::Woman.parent_noun()),
        ),
        Custody::SoleFather => (
            "recitals.custody.sole_father",
            format!("{} de {}.", SOLE, Party::Man.parent_noun()),
        ),
        Custody::SoleMother => (
            "recitals.custody.sole_mother",
            format!("{} de {}.", SOLE, Party::Woman.parent_noun()),
        ),
    };
    Clause::paragraph(rule, text)
}

fn child_support(rule: &'static str, payer: Party, amount: String) -> Clause {
    Clause::paragraph(
        rule,
        format!(
            "De {} betaalt aan de {} een bijdrage in de kosten van verzorging en opvoeding van {} bruto per kind per maand.",
            payer.parent_noun(),
            payer.other().parent_noun(),
            amount
        ),
    )
}
