//! Article numerals that move.
//!
//! Clause numerals are literals owned by the emitting rule. Only two places
//! shift: the trailing articles (one step up when the miscellaneous article
//! is present) and the closing clause of the community article (one step
//! after the debts clause when debts exist).

use crate::answers::AnswerSet;

/// Numeral of the optional miscellaneous article.
pub const MISC_ARTICLE: u32 = 6;

/// Base numerals of the trailing articles without the miscellaneous article.
pub const COSTS_BASE: u32 = 6;
pub const AMENDMENT_BASE: u32 = 7;
pub const CHOICE_OF_LAW_BASE: u32 = 8;
pub const FINAL_PROVISIONS_BASE: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleNumbering {
    offset: u32,
}

impl ArticleNumbering {
    pub fn for_answers(answers: &AnswerSet) -> Self {
        Self::new(answers.text("bijzonderheden").is_some())
    }

    pub fn new(miscellaneous_present: bool) -> Self {
        Self { offset: u32::from(miscellaneous_present) }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn costs(&self) -> u32 {
        COSTS_BASE + self.offset
    }

    pub fn amendment(&self) -> u32 {
        AMENDMENT_BASE + self.offset
    }

    pub fn choice_of_law(&self) -> u32 {
        CHOICE_OF_LAW_BASE + self.offset
    }

    pub fn final_provisions(&self) -> u32 {
        FINAL_PROVISIONS_BASE + self.offset
    }
}

/// "4.6" after a debts clause (4.5), "4.5" otherwise.
pub fn community_closing_numeral(debts_present: bool) -> &'static str {
    if debts_present {
        "4.6"
    } else {
        "4.5"
    }
}

/// "ARTIKEL 7. KOSTEN"
pub fn article_heading(numeral: u32, title: &str) -> String {
    format!("ARTIKEL {}. {}", numeral, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trailing_articles_shift_together() {
        let plain = ArticleNumbering::new(false);
        let shifted = ArticleNumbering::new(true);
        assert_eq!((plain.costs(), plain.final_provisions()), (6, 9));
        assert_eq!(
            (shifted.costs(), shifted.amendment(), shifted.choice_of_law(), shifted.final_provisions()),
            (7, 8, 9, 10)
        );
    }

    #[test]
    fn test_whitespace_bijzonderheden_does_not_shift() {
        let mut answers = AnswerSet::new();
        answers.set("bijzonderheden", json!("   "));
        assert_eq!(ArticleNumbering::for_answers(&answers).offset(), 0);
        answers.set("bijzonderheden", json!("Hond blijft bij de vrouw."));
        assert_eq!(ArticleNumbering::for_answers(&answers).offset(), 1);
    }

    #[test]
    fn test_community_closing() {
        assert_eq!(community_closing_numeral(true), "4.6");
        assert_eq!(community_closing_numeral(false), "4.5");
    }
}
