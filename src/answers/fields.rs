//! Field registry
//!
//! Declared shape of every answer the covenant form collects: identifier,
//! label, input kind, form section, valid options, default, required flag,
//! conditional visibility and help text. Clause sections only depend on the
//! identifiers and on the defaults; the rest feeds validation and the form
//! surface (`GET /api/fields`).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::AnswerSet;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

/// Form sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Partijen,
    Huwelijk,
    Kinderen,
    Alimentatie,
    Woning,
    Vermogen,
    Pensioen,
    Overig,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Partijen,
        Section::Huwelijk,
        Section::Kinderen,
        Section::Alimentatie,
        Section::Woning,
        Section::Vermogen,
        Section::Pensioen,
        Section::Overig,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Partijen => "partijen",
            Section::Huwelijk => "huwelijk",
            Section::Kinderen => "kinderen",
            Section::Alimentatie => "alimentatie",
            Section::Woning => "woning",
            Section::Vermogen => "vermogen",
            Section::Pensioen => "pensioen",
            Section::Overig => "overig",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Partijen => "Gegevens Partijen",
            Section::Huwelijk => "Huwelijksgegevens",
            Section::Kinderen => "Kinderen",
            Section::Alimentatie => "Partneralimentatie",
            Section::Woning => "Echtelijke Woning",
            Section::Vermogen => "Vermogen en Bezittingen",
            Section::Pensioen => "Pensioenen",
            Section::Overig => "Overige Gegevens",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub value: &'static str,
    pub label: &'static str,
}

/// Show the field only while `field` holds (or contains) `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub field: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub section: Section,
    pub options: &'static [OptionSpec],
    pub default: Option<&'static str>,
    pub required: bool,
    pub conditional: Option<Condition>,
    pub help: Option<&'static str>,
}

impl FieldSpec {
    const fn new(id: &'static str, label: &'static str, kind: FieldKind, section: Section) -> Self {
        Self {
            id,
            label,
            kind,
            section,
            options: &[],
            default: None,
            required: false,
            conditional: None,
            help: None,
        }
    }

    const fn required(self) -> Self {
        Self { required: true, ..self }
    }

    const fn options(self, options: &'static [OptionSpec]) -> Self {
        Self { options, ..self }
    }

    const fn default_value(self, value: &'static str) -> Self {
        Self { default: Some(value), ..self }
    }

    const fn when(self, field: &'static str, value: &'static str) -> Self {
        Self { conditional: Some(Condition { field, value }), ..self }
    }

    const fn help(self, text: &'static str) -> Self {
        Self { help: Some(text), ..self }
    }

    /// True for select, radio and checkbox fields.
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox)
    }

    pub fn accepts(&self, token: &str) -> bool {
        self.options.iter().any(|o| o.value == token)
    }
}

const fn opt(value: &'static str, label: &'static str) -> OptionSpec {
    OptionSpec { value, label }
}

// ============================================================================
// Shared Option Lists
// ============================================================================

const YES_NO: &[OptionSpec] = &[opt("nee", "Nee"), opt("ja", "Ja")];

const PAYER: &[OptionSpec] = &[
    opt("man", "De man betaalt aan de vrouw"),
    opt("vrouw", "De vrouw betaalt aan de man"),
];

const PARTY: &[OptionSpec] = &[opt("man", "De man"), opt("vrouw", "De vrouw")];

const DURATION: &[OptionSpec] = &[
    opt("12jaar", "Maximaal 12 jaar (wettelijk)"),
    opt("korter", "Korter dan 12 jaar"),
    opt("duur-specificeren", "Andere termijn specificeren"),
];

const PRENUP: &[OptionSpec] = &[
    opt("nee", "Geen huwelijkse voorwaarden (algehele gemeenschap)"),
    opt("ja", "Wel huwelijkse voorwaarden"),
];

const HAS_CHILDREN: &[OptionSpec] = &[
    opt("nee", "Nee, er zijn geen kinderen"),
    opt("ja", "Ja, er zijn kinderen"),
];

const CUSTODY: &[OptionSpec] = &[
    opt("gezamenlijk", "Gezamenlijk ouderlijk gezag met co-ouderschap"),
    opt("gezamenlijk-hoofdverblijf-man", "Gezamenlijk gezag, hoofdverblijf bij vader"),
    opt("gezamenlijk-hoofdverblijf-vrouw", "Gezamenlijk gezag, hoofdverblijf bij moeder"),
    opt("eenhoofdig-man", "Eenhoofdig gezag bij vader"),
    opt("eenhoofdig-vrouw", "Eenhoofdig gezag bij moeder"),
];

const CHILD_SUPPORT: &[OptionSpec] = &[
    opt("geen", "Geen kinderalimentatie (beide ouders dragen bij)"),
    opt("man-betaalt", "Vader betaalt kinderalimentatie"),
    opt("vrouw-betaalt", "Moeder betaalt kinderalimentatie"),
];

const ALIMONY_REGIME: &[OptionSpec] = &[
    opt("geen", "Geen partneralimentatie"),
    opt("voorlopig-en-definitief", "Voorlopige én definitieve alimentatie"),
    opt("alleen-definitief", "Alleen definitieve alimentatie"),
    opt("afkoop", "Afkoop alimentatie (eenmalige betaling)"),
    opt("afstand", "Afstand van recht op alimentatie"),
];

const HOME_STATUS: &[OptionSpec] = &[
    opt("geen", "Geen echtelijke woning"),
    opt("huur", "Huurwoning"),
    opt("eigen-toedeling", "Eigen woning - toedeling aan één partij"),
    opt("eigen-verkoop", "Eigen woning - verkoop"),
];

const PRIVATE_ASSETS: &[OptionSpec] = &[
    opt("nee", "Nee, geen privévermogen"),
    opt("ja", "Ja, er is privévermogen"),
];

const SAVINGS_SPLIT: &[OptionSpec] = &[
    opt("fifty-fifty", "50/50 verdeling"),
    opt("anders", "Andere verdeling"),
    opt("specifiek", "Per rekening toegedeeld (zie details hierboven)"),
];

const CONTENTS: &[OptionSpec] = &[
    opt("verdeeld", "Inboedel is onderling verdeeld"),
    opt("fifty-fifty", "Inboedel 50/50 verdelen op basis van taxatie"),
    opt("toedeling-man", "Volledige inboedel naar man"),
    opt("toedeling-vrouw", "Volledige inboedel naar vrouw"),
];

const PENSION: &[OptionSpec] = &[
    opt("standaard", "Standaard verevening (50/50)"),
    opt("afwijkend", "Afwijkend vereveningsdeel"),
    opt("conversie", "Conversie (omzetting in alimentatie)"),
    opt("uitsluiting", "Uitsluiting verevening (geen verevening)"),
];

const CASE_NUMBER_KNOWN: &[OptionSpec] = &[
    opt("nee", "Nee, nog niet bekend"),
    opt("ja", "Ja, zaaknummer is bekend"),
];

use FieldKind::{Date, Number, Radio, Select, Text, Textarea};
use Section::{Alimentatie, Huwelijk, Kinderen, Overig, Partijen, Pensioen, Vermogen, Woning};

// ============================================================================
// Registry
// ============================================================================

pub static FIELDS: &[FieldSpec] = &[
    // Partijen
    FieldSpec::new("manVoornamen", "Voornamen man", Text, Partijen).required(),
    FieldSpec::new("manAchternaam", "Achternaam man", Text, Partijen).required(),
    FieldSpec::new("manGeboortedatum", "Geboortedatum man", Date, Partijen).required(),
    FieldSpec::new("manGeboorteplaats", "Geboorteplaats man", Text, Partijen).required(),
    FieldSpec::new("manAdres", "Adres man", Text, Partijen)
        .required()
        .help("Het huidige woonadres van de man"),
    FieldSpec::new("manPostcode", "Postcode man", Text, Partijen).required(),
    FieldSpec::new("manWoonplaats", "Woonplaats man", Text, Partijen).required(),
    FieldSpec::new("vrouwVoornamen", "Voornamen vrouw", Text, Partijen).required(),
    FieldSpec::new("vrouwAchternaam", "Achternaam vrouw", Text, Partijen).required(),
    FieldSpec::new("vrouwGeboortedatum", "Geboortedatum vrouw", Date, Partijen).required(),
    FieldSpec::new("vrouwGeboorteplaats", "Geboorteplaats vrouw", Text, Partijen).required(),
    FieldSpec::new("vrouwAdres", "Adres vrouw", Text, Partijen)
        .required()
        .help("Het huidige woonadres van de vrouw"),
    FieldSpec::new("vrouwPostcode", "Postcode vrouw", Text, Partijen).required(),
    FieldSpec::new("vrouwWoonplaats", "Woonplaats vrouw", Text, Partijen).required(),
    // Huwelijk
    FieldSpec::new("huwelijksdatum", "Datum huwelijk", Date, Huwelijk).required(),
    FieldSpec::new("huwelijksplaats", "Plaats huwelijk", Text, Huwelijk).required(),
    FieldSpec::new("nationaliteit", "Nationaliteit beide partijen", Text, Huwelijk)
        .default_value("Nederlandse")
        .help("Indien verschillend, beide nationaliteiten vermelden"),
    FieldSpec::new("huwelijkseVoorwaarden", "Huwelijkse voorwaarden", Select, Huwelijk)
        .options(PRENUP)
        .default_value("nee"),
    // Kinderen
    FieldSpec::new("heeftKinderen", "Zijn er (minderjarige) kinderen uit dit huwelijk?", Radio, Kinderen)
        .options(HAS_CHILDREN)
        .default_value("nee")
        .required(),
    FieldSpec::new("aantalKinderen", "Aantal kinderen", Number, Kinderen).when("heeftKinderen", "ja"),
    FieldSpec::new("kinderenDetails", "Gegevens kinderen", Textarea, Kinderen)
        .when("heeftKinderen", "ja")
        .help("Vermeld per kind: voornamen, achternaam, geboortedatum, geboorteplaats en of minderjarig"),
    FieldSpec::new("ouderlijkGezag", "Ouderlijk gezag en zorgregeling", Select, Kinderen)
        .options(CUSTODY)
        .when("heeftKinderen", "ja"),
    FieldSpec::new("zorgregelingDetails", "Omgangsregeling details", Textarea, Kinderen)
        .when("heeftKinderen", "ja")
        .help("Bijv. elke week van woensdag tot zondag, vakanties fifty-fifty"),
    FieldSpec::new("kinderalimentatie", "Kinderalimentatie", Select, Kinderen)
        .options(CHILD_SUPPORT)
        .when("heeftKinderen", "ja"),
    FieldSpec::new("kinderalimentatieBedrag", "Bedrag kinderalimentatie per kind per maand", Number, Kinderen)
        .when("kinderalimentatie", "man-betaalt")
        .help("Bruto bedrag per maand per kind"),
    FieldSpec::new("kinderalimentatieBedragVrouw", "Bedrag kinderalimentatie per kind per maand", Number, Kinderen)
        .when("kinderalimentatie", "vrouw-betaalt")
        .help("Bruto bedrag per maand per kind"),
    FieldSpec::new("kinderenSpaargeld", "Spaarrekeningen kinderen", Textarea, Kinderen)
        .when("heeftKinderen", "ja")
        .help("Optioneel: rekeningen op naam van de kinderen"),
    // Partneralimentatie
    FieldSpec::new("alimentatieRegeling", "Partneralimentatie regeling", Select, Alimentatie)
        .options(ALIMONY_REGIME)
        .default_value("geen")
        .required(),
    FieldSpec::new("voorlopigeAlimentatieBedrag", "Voorlopige alimentatie (bruto per maand)", Number, Alimentatie)
        .when("alimentatieRegeling", "voorlopig-en-definitief"),
    FieldSpec::new("voorlopigeAlimentatieVanaf", "Voorlopige alimentatie vanaf datum", Date, Alimentatie)
        .when("alimentatieRegeling", "voorlopig-en-definitief")
        .help("De datum vanaf wanneer de voorlopige alimentatie ingaat"),
    FieldSpec::new("voorlopigeAlimentatieTot", "Voorlopige alimentatie tot datum", Date, Alimentatie)
        .when("alimentatieRegeling", "voorlopig-en-definitief")
        .help("De datum tot wanneer de voorlopige alimentatie geldt (bijv. echtscheidingsdatum)"),
    FieldSpec::new("definitieveAlimentatieBedrag", "Definitieve alimentatie (bruto per maand)", Number, Alimentatie)
        .when("alimentatieRegeling", "voorlopig-en-definitief"),
    FieldSpec::new("definitieveAlimentatieBedragAlleen", "Definitieve alimentatie (bruto per maand)", Number, Alimentatie)
        .when("alimentatieRegeling", "alleen-definitief"),
    FieldSpec::new("alimentatieplichtige", "Wie betaalt de alimentatie?", Radio, Alimentatie)
        .options(PAYER)
        .when("alimentatieRegeling", "voorlopig-en-definitief"),
    FieldSpec::new("alimentatieplichtigeAlleen", "Wie betaalt de alimentatie?", Radio, Alimentatie)
        .options(PAYER)
        .when("alimentatieRegeling", "alleen-definitief"),
    FieldSpec::new("alimentatieDuur", "Duur van de alimentatie", Select, Alimentatie)
        .options(DURATION)
        .when("alimentatieRegeling", "voorlopig-en-definitief"),
    FieldSpec::new("alimentatieDuurAlleen", "Duur van de alimentatie", Select, Alimentatie)
        .options(DURATION)
        .when("alimentatieRegeling", "alleen-definitief"),
    FieldSpec::new("alimentatieDuurJaren", "Aantal jaren", Number, Alimentatie).when("alimentatieDuur", "korter"),
    FieldSpec::new("alimentatieDuurDetails", "Specificatie termijn", Text, Alimentatie)
        .when("alimentatieDuur", "duur-specificeren"),
    FieldSpec::new("afkoopBedrag", "Afkoopsom (eenmalig bedrag)", Number, Alimentatie)
        .when("alimentatieRegeling", "afkoop")
        .help("Het totaalbedrag waarmee de alimentatie wordt afgekocht"),
    FieldSpec::new("afkoopBetaler", "Wie betaalt de afkoopsom?", Radio, Alimentatie)
        .options(PAYER)
        .when("alimentatieRegeling", "afkoop"),
    FieldSpec::new("afkoopBetalingsdatum", "Datum betaling afkoopsom", Date, Alimentatie)
        .when("alimentatieRegeling", "afkoop"),
    // Echtelijke woning
    FieldSpec::new("woningStatus", "Status van de woning", Select, Woning)
        .options(HOME_STATUS)
        .default_value("geen")
        .required(),
    FieldSpec::new("woningAdres", "Adres echtelijke woning", Text, Woning).when("woningStatus", "huur"),
    FieldSpec::new("woningAdresEigen", "Adres echtelijke woning", Text, Woning).when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("woningAdresVerkoop", "Adres echtelijke woning", Text, Woning).when("woningStatus", "eigen-verkoop"),
    FieldSpec::new("woningPostcode", "Postcode", Text, Woning).when("woningStatus", "huur"),
    FieldSpec::new("woningPostcodeEigen", "Postcode", Text, Woning).when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("woningPostcodeVerkoop", "Postcode", Text, Woning).when("woningStatus", "eigen-verkoop"),
    FieldSpec::new("woningWoonplaats", "Woonplaats", Text, Woning).when("woningStatus", "huur"),
    FieldSpec::new("woningWoonplaatsEigen", "Woonplaats", Text, Woning).when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("woningWoonplaatsVerkoop", "Woonplaats", Text, Woning).when("woningStatus", "eigen-verkoop"),
    FieldSpec::new("huurToedeling", "Huurrecht toegedeeld aan", Radio, Woning)
        .options(PARTY)
        .when("woningStatus", "huur"),
    FieldSpec::new("huurBedrag", "Maandelijkse huur", Number, Woning).when("woningStatus", "huur"),
    FieldSpec::new("woningWaarde", "WOZ-waarde / Taxatiewaarde woning", Number, Woning)
        .when("woningStatus", "eigen-toedeling")
        .help("De geschatte waarde van de woning"),
    FieldSpec::new("woningWaardeVerkoop", "WOZ-waarde / Taxatiewaarde woning", Number, Woning)
        .when("woningStatus", "eigen-verkoop")
        .help("De geschatte waarde van de woning"),
    FieldSpec::new("hypotheekBedrag", "Restant hypotheekschuld", Number, Woning).when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("hypotheekBedragVerkoop", "Restant hypotheekschuld", Number, Woning)
        .when("woningStatus", "eigen-verkoop"),
    FieldSpec::new("hypotheekVerstrekker", "Hypotheekverstrekker", Text, Woning).when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("hypotheekVerstrekkerVerkoop", "Hypotheekverstrekker", Text, Woning)
        .when("woningStatus", "eigen-verkoop"),
    FieldSpec::new("woningOverwaarde", "Overwaarde (automatisch berekend)", Number, Woning)
        .when("woningStatus", "eigen-toedeling")
        .help("Waarde minus hypotheek = overwaarde"),
    FieldSpec::new("woningToedeling", "Woning toegedeeld aan", Radio, Woning)
        .options(PARTY)
        .when("woningStatus", "eigen-toedeling"),
    FieldSpec::new("overnamesom", "Overnamesom / verrekening overwaarde", Number, Woning)
        .when("woningStatus", "eigen-toedeling")
        .help("Bedrag dat de overnemende partij aan de ander betaalt"),
    // Vermogen
    FieldSpec::new("heeftPrivevermogen", "Is er privévermogen van één van de partijen?", Radio, Vermogen)
        .options(PRIVATE_ASSETS)
        .default_value("nee")
        .required()
        .help("Vermogen dat vóór het huwelijk was of door erfenis/schenking is verkregen"),
    FieldSpec::new("privevermogenDetails", "Omschrijving privévermogen", Textarea, Vermogen)
        .when("heeftPrivevermogen", "ja"),
    FieldSpec::new("heeftBankrekeningen", "Zijn er bankrekeningen?", Radio, Vermogen)
        .options(YES_NO)
        .default_value("nee")
        .required(),
    FieldSpec::new("bankrekeningenDetails", "Overzicht bankrekeningen", Textarea, Vermogen)
        .when("heeftBankrekeningen", "ja")
        .help("Vermeld per rekening: bank, rekeningnummer, saldo en toedeling"),
    FieldSpec::new("totaalSpaargeld", "Totaal spaargeld beide partijen", Number, Vermogen)
        .help("Totaalbedrag van alle spaargelden samen"),
    FieldSpec::new("spaargeldVerdeling", "Verdeling spaargeld", Select, Vermogen).options(SAVINGS_SPLIT),
    FieldSpec::new("heeftAutos", "Zijn er auto's / voertuigen?", Radio, Vermogen)
        .options(YES_NO)
        .default_value("nee")
        .required(),
    FieldSpec::new("autosDetails", "Overzicht auto's / voertuigen", Textarea, Vermogen)
        .when("heeftAutos", "ja")
        .help("Vermeld per voertuig: merk/model, kenteken, waarde en toedeling"),
    FieldSpec::new("inboedelRegeling", "Inboedel regeling", Select, Vermogen)
        .options(CONTENTS)
        .default_value("verdeeld")
        .required(),
    FieldSpec::new("inboedelWaarde", "Taxatiewaarde inboedel", Number, Vermogen).when("inboedelRegeling", "fifty-fifty"),
    FieldSpec::new("inboedelDetails", "Toelichting inboedel verdeling", Textarea, Vermogen)
        .help("Optioneel: extra details over de inboedelverdeling"),
    FieldSpec::new("heeftSchulden", "Zijn er gemeenschappelijke schulden (excl. hypotheek)?", Radio, Vermogen)
        .options(YES_NO)
        .default_value("nee")
        .required(),
    FieldSpec::new("schuldenDetails", "Overzicht schulden", Textarea, Vermogen)
        .when("heeftSchulden", "ja")
        .help("Vermeld per schuld: type, schuldeiser, bedrag en verdeling"),
    // Pensioen
    FieldSpec::new("pensioenRegeling", "Pensioenverevening", Select, Pensioen)
        .options(PENSION)
        .default_value("standaard")
        .required()
        .help("Standaard wordt pensioen 50/50 verdeeld over huwelijksperiode"),
    FieldSpec::new("pensioenManHeeft", "Heeft de man pensioen opgebouwd?", Radio, Pensioen).options(YES_NO),
    FieldSpec::new("pensioenManUitvoerder", "Pensioenuitvoerder man", Text, Pensioen).when("pensioenManHeeft", "ja"),
    FieldSpec::new("pensioenManPolisnummer", "Polisnummer / deelnemersnummer man", Text, Pensioen)
        .when("pensioenManHeeft", "ja"),
    FieldSpec::new("pensioenVrouwHeeft", "Heeft de vrouw pensioen opgebouwd?", Radio, Pensioen).options(YES_NO),
    FieldSpec::new("pensioenVrouwUitvoerder", "Pensioenuitvoerder vrouw", Text, Pensioen)
        .when("pensioenVrouwHeeft", "ja"),
    FieldSpec::new("pensioenVrouwPolisnummer", "Polisnummer / deelnemersnummer vrouw", Text, Pensioen)
        .when("pensioenVrouwHeeft", "ja"),
    FieldSpec::new("pensioenAfwijkendPercentage", "Afwijkend vereveningspercentage", Number, Pensioen)
        .when("pensioenRegeling", "afwijkend")
        .help("Percentage dat wordt verdeeld (standaard 50%)"),
    FieldSpec::new("pensioenDetails", "Toelichting pensioenafspraken", Textarea, Pensioen)
        .help("Optioneel: aanvullende informatie"),
    // Overig
    FieldSpec::new("mediatorNaam", "Naam mediator/advocaat", Text, Overig)
        .help("Optioneel: degene die het convenant heeft begeleid"),
    FieldSpec::new("kantoorNaam", "Naam kantoor/praktijk", Text, Overig).help("Optioneel"),
    FieldSpec::new("rechtbank", "Bevoegde rechtbank", Text, Overig).default_value("Rechtbank"),
    FieldSpec::new("zaakNummerBekend", "Is het zaaknummer al bekend?", Radio, Overig)
        .options(CASE_NUMBER_KNOWN)
        .default_value("nee"),
    FieldSpec::new("zaakNummer", "Zaaknummer rechtbank", Text, Overig).when("zaakNummerBekend", "ja"),
    FieldSpec::new("ondertekeningDatum", "Datum ondertekening convenant", Date, Overig).required(),
    FieldSpec::new("ondertekeningPlaats", "Plaats ondertekening", Text, Overig).required(),
    FieldSpec::new("bijzonderheden", "Bijzonderheden / aanvullende afspraken", Textarea, Overig)
        .help("Optioneel: overige afspraken of opmerkingen"),
];

// ============================================================================
// Lookup
// ============================================================================

fn index() -> &'static FxHashMap<&'static str, usize> {
    static INDEX: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| FIELDS.iter().enumerate().map(|(i, f)| (f.id, i)).collect())
}

pub fn field(id: &str) -> Option<&'static FieldSpec> {
    index().get(id).map(|&i| &FIELDS[i])
}

pub fn fields_in(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.section == section)
}

/// Declared default for a field, if any.
pub fn default_for(id: &str) -> Option<&'static str> {
    field(id).and_then(|f| f.default)
}

/// Conditional visibility: always visible without a condition, otherwise
/// visible while the watched field matches.
pub fn is_visible(spec: &FieldSpec, answers: &AnswerSet) -> bool {
    match spec.conditional {
        None => true,
        Some(condition) => answers.matches(condition.field, condition.value),
    }
}

pub fn visible_fields(answers: &AnswerSet) -> Vec<&'static FieldSpec> {
    FIELDS.iter().filter(|f| is_visible(f, answers)).collect()
}
