//! S9: Costs, amendment, choice of law and final provisions
//!
//! Fixed boilerplate. Numerals are the base numerals plus the
//! miscellaneous-article offset.

use crate::answers::AnswerSet;
use crate::convenant::types::Clause;
use crate::convenant::utils::*;

const DECLARATIONS: [&str; 5] = [
    "- volledig op de hoogte zijn van de gevolgen van dit convenant;",
    "- de gelegenheid hebben gehad om juridisch advies in te winnen;",
    "- dit convenant uit vrije wil aangaan zonder dwang of ongeoorloofde beïnvloeding;",
    "- dit convenant beschouwen als een volledige en definitieve regeling van alle tussen hen bestaande \
     aangelegenheden voortvloeiend uit hun huwelijk en de beëindiging daarvan;",
    "- wederzijds afstand doen van alle aanspraken jegens elkaar die niet in dit convenant zijn opgenomen.",
];

pub fn generate(answers: &AnswerSet) -> Vec<Clause> {
    let numbering = ArticleNumbering::for_answers(answers);

    vec![
        Clause::heading("closing.costs.heading", article_heading(numbering.costs(), "KOSTEN")),
        Clause::paragraph(
            "closing.costs",
            "Alle kosten verbonden aan de echtscheiding, de totstandkoming van dit convenant, de \
             afwikkeling van de gemeenschap en de uitvoering van dit convenant, zoals (maar niet \
             uitsluitend) de kosten van mediation, juridische bijstand, notaris, accountant en makelaar, \
             komen voor rekening van partijen bij helfte, tenzij partijen anders overeenkomen.",
        ),
        Clause::heading(
            "closing.amendment.heading",
            article_heading(numbering.amendment(), "WIJZIGING CONVENANT"),
        ),
        Clause::paragraph(
            "closing.amendment",
            "Partijen komen overeen dat zij dit convenant alleen in onderling overleg en met wederzijdse \
             instemming kunnen wijzigen. Wijzigingen dienen schriftelijk te worden vastgelegd en door \
             beide partijen te worden ondertekend.",
        ),
        Clause::heading(
            "closing.choice_of_law.heading",
            article_heading(numbering.choice_of_law(), "RECHTSKEUZE"),
        ),
        Clause::paragraph(
            "closing.choice_of_law",
            format!(
                "Op dit convenant is het Nederlands recht van toepassing. Geschillen die voortvloeien uit of \
                 verband houden met dit convenant zullen worden voorgelegd aan de bevoegde rechter in \
                 Nederland, te weten de {} die ook bevoegd is voor de echtscheidingsprocedure.",
                value_or(answers, "rechtbank", "rechtbank")
            ),
        ),
        Clause::heading(
            "closing.final.heading",
            article_heading(numbering.final_provisions(), "SLOTBEPALINGEN"),
        ),
        Clause::paragraph("closing.final.intro", "Partijen verklaren dat zij:"),
        Clause::paragraph("closing.final.declarations", DECLARATIONS.join("\n")),
        Clause::paragraph(
            "closing.final.discharge",
            "Partijen verklaren dat zij over en weer kwijting verlenen voor alle aanspraken die uit hun \
             huwelijk en de gemeenschap van goederen voortvloeien, met uitzondering van de verplichtingen \
             die in dit convenant zijn opgenomen.",
        ),
    ]
}
