//! Closed enum types for every choice-driven answer field.
//!
//! Each field that selects between clause branches is read through [`Choice`],
//! which keeps "never answered" and "answered with a token we do not know"
//! apart from the known variants. Clause sections match on all three, so the
//! emit-nothing case is always spelled out at the call site.

use serde::Serialize;

/// A single-select token read from the answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Choice<T> {
    Unset,
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> Choice<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(value) => Some(*value),
            _ => None,
        }
    }
}

impl<T: Token> Choice<T> {
    /// Classify a raw token. Empty strings count as unset.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Choice::Unset,
            Some(token) => match T::from_token(token) {
                Some(value) => Choice::Known(value),
                None => Choice::Unrecognized(token.to_string()),
            },
        }
    }
}

/// Mapping between a sum type and the form's wire tokens.
pub trait Token: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn token(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.token() == token)
    }

    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.token()).collect()
    }
}

macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl Token for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }
    };
}

// ============================================================================
// Choice Fields
// ============================================================================

token_enum!(
    /// ja / nee questions.
    YesNo { Yes => "ja", No => "nee" }
);

token_enum!(
    /// One of the two spouses.
    Party { Man => "man", Woman => "vrouw" }
);

token_enum!(
    /// Parental authority arrangement (`ouderlijkGezag`).
    Custody {
        Joint => "gezamenlijk",
        JointResidenceFather => "gezamenlijk-hoofdverblijf-man",
        JointResidenceMother => "gezamenlijk-hoofdverblijf-vrouw",
        SoleFather => "eenhoofdig-man",
        SoleMother => "eenhoofdig-vrouw",
    }
);

token_enum!(
    /// Who pays child maintenance (`kinderalimentatie`).
    ChildSupport {
        None => "geen",
        FatherPays => "man-betaalt",
        MotherPays => "vrouw-betaalt",
    }
);

token_enum!(
    /// Partner maintenance regime (`alimentatieRegeling`).
    AlimonyRegime {
        None => "geen",
        ProvisionalAndDefinitive => "voorlopig-en-definitief",
        DefinitiveOnly => "alleen-definitief",
        Buyout => "afkoop",
        Waiver => "afstand",
    }
);

token_enum!(
    /// Status of the marital home (`woningStatus`).
    HomeStatus {
        None => "geen",
        Rented => "huur",
        OwnedAssigned => "eigen-toedeling",
        OwnedSold => "eigen-verkoop",
    }
);

token_enum!(
    /// Split of bank balances (`spaargeldVerdeling`).
    SavingsSplit {
        Halves => "fifty-fifty",
        PerAccount => "specifiek",
        Other => "anders",
    }
);

token_enum!(
    /// Household contents arrangement (`inboedelRegeling`).
    ContentsArrangement {
        AlreadyDivided => "verdeeld",
        Halves => "fifty-fifty",
        ToMan => "toedeling-man",
        ToWoman => "toedeling-vrouw",
    }
);

token_enum!(
    /// Pension equalisation arrangement (`pensioenRegeling`).
    PensionArrangement {
        Standard => "standaard",
        Deviating => "afwijkend",
        Conversion => "conversie",
        Exclusion => "uitsluiting",
    }
);

// ============================================================================
// Party Vocabulary
// ============================================================================

impl Party {
    pub fn label(self) -> &'static str {
        match self {
            Party::Man => "man",
            Party::Woman => "vrouw",
        }
    }

    pub fn other(self) -> Party {
        match self {
            Party::Man => Party::Woman,
            Party::Woman => Party::Man,
        }
    }

    /// hij / zij
    pub fn subject_pronoun(self) -> &'static str {
        match self {
            Party::Man => "hij",
            Party::Woman => "zij",
        }
    }

    /// hem / haar
    pub fn object_pronoun(self) -> &'static str {
        match self {
            Party::Man => "hem",
            Party::Woman => "haar",
        }
    }

    /// zijn / haar
    pub fn possessive(self) -> &'static str {
        match self {
            Party::Man => "zijn",
            Party::Woman => "haar",
        }
    }

    /// vader / moeder
    pub fn parent_noun(self) -> &'static str {
        match self {
            Party::Man => "vader",
            Party::Woman => "moeder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_token() {
        let choice: Choice<HomeStatus> = Choice::from_raw(Some("huur"));
        assert_eq!(choice, Choice::Known(HomeStatus::Rented));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let choice: Choice<HomeStatus> = Choice::from_raw(Some("Huur"));
        assert_eq!(choice, Choice::Unrecognized("Huur".to_string()));
    }

    #[test]
    fn test_empty_is_unset() {
        assert_eq!(Choice::<YesNo>::from_raw(Some("  ")), Choice::Unset);
        assert_eq!(Choice::<YesNo>::from_raw(None), Choice::Unset);
    }

    #[test]
    fn test_party_vocabulary() {
        assert_eq!(Party::Man.other(), Party::Woman);
        assert_eq!(Party::Man.other().object_pronoun(), "haar");
        assert_eq!(Party::Woman.parent_noun(), "moeder");
    }

    #[test]
    fn test_all_tokens_round_trip() {
        for regime in AlimonyRegime::ALL {
            assert_eq!(AlimonyRegime::from_token(regime.token()), Some(*regime));
        }
        assert_eq!(Custody::tokens().len(), 5);
    }
}
