//! Motivational quotes shown on the home screen.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteCategory {
    Strength,
    Motivation,
    Discipline,
    Success,
}

impl QuoteCategory {
    pub fn translation_key(&self) -> &'static str {
        match self {
            QuoteCategory::Strength => "quote-category-strength",
            QuoteCategory::Motivation => "quote-category-motivation",
            QuoteCategory::Discipline => "quote-category-discipline",
            QuoteCategory::Success => "quote-category-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub id: &'static str,
    pub text: &'static str,
    pub author: &'static str,
    pub category: QuoteCategory,
}

const QUOTES: [Quote; 12] = [
    Quote {
        id: "arnold_1",
        text: "Strength does not come from winning. Your struggles develop your strengths.",
        author: "Arnold Schwarzenegger",
        category: QuoteCategory::Strength,
    },
    Quote {
        id: "arnold_2",
        text: "Failure is not an option. Everybody dreams of being a champion, nobody thinks \
             about the training.",
        author: "Arnold Schwarzenegger",
        category: QuoteCategory::Discipline,
    },
    Quote {
        id: "ronnie_1",
        text: "Everybody wants to be a bodybuilder, but nobody wants to lift no heavy-ass weights.",
        author: "Ronnie Coleman",
        category: QuoteCategory::Motivation,
    },
    Quote {
        id: "ronnie_2",
        text: "Light weight, baby! Ain't nothing but a peanut!",
        author: "Ronnie Coleman",
        category: QuoteCategory::Motivation,
    },
    Quote {
        id: "dorian_1",
        text: "I train with such intensity that most people think I'm crazy.",
        author: "Dorian Yates",
        category: QuoteCategory::Discipline,
    },
    Quote {
        id: "jay_1",
        text: "You have to push yourself past what you think you are capable of.",
        author: "Jay Cutler",
        category: QuoteCategory::Motivation,
    },
    Quote {
        id: "lee_1",
        text: "Size matters, but quality matters more.",
        author: "Lee Haney",
        category: QuoteCategory::Strength,
    },
    Quote {
        id: "franco_1",
        text: "Training is the king, nutrition is the queen, rest is the prince.",
        author: "Franco Columbu",
        category: QuoteCategory::Discipline,
    },
    Quote {
        id: "frank_1",
        text: "Pain is temporary, pride is forever.",
        author: "Frank Zane",
        category: QuoteCategory::Motivation,
    },
    Quote {
        id: "phil_1",
        text: "Champions aren't made in gyms. Champions are made from something deep inside them.",
        author: "Phil Heath",
        category: QuoteCategory::Success,
    },
    Quote {
        id: "tyson_1",
        text: "Discipline is doing what you hate to do, but doing it like you love it.",
        author: "Mike Tyson",
        category: QuoteCategory::Discipline,
    },
    Quote {
        id: "unknown_1",
        text: "Your body can stand almost anything. It's your mind that you have to convince.",
        author: "Unknown",
        category: QuoteCategory::Motivation,
    },
];

pub fn all() -> &'static [Quote] {
    &QUOTES
}

/// Quote of the day, stable for a given calendar date.
pub fn daily(date: NaiveDate) -> &'static Quote {
    &QUOTES[date.ordinal() as usize % QUOTES.len()]
}

pub fn random<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

pub fn by_category(category: QuoteCategory) -> Vec<&'static Quote> {
    QUOTES.iter().filter(|q| q.category == category).collect()
}

/// Quotes whose author contains `author`, ignoring case.
pub fn by_author(author: &str) -> Vec<&'static Quote> {
    let needle = author.to_lowercase();
    QUOTES
        .iter()
        .filter(|q| q.author.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_daily_quote_rotates_by_day_of_year() {
        let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(daily(jan_1).id, QUOTES[1].id);

        let jan_12 = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        assert_eq!(daily(jan_12).id, QUOTES[0].id);
        assert_eq!(daily(jan_12), daily(jan_12));
    }

    #[test]
    fn test_random_quote_is_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let quote = random(&mut rng);
            assert!(all().iter().any(|q| q.id == quote.id));
        }
    }

    #[test]
    fn test_filters() {
        assert_eq!(all().len(), 12);
        assert_eq!(by_category(QuoteCategory::Discipline).len(), 4);
        assert_eq!(by_category(QuoteCategory::Success).len(), 1);
        assert_eq!(by_author("coleman").len(), 2);
        assert_eq!(by_author("ARNOLD").len(), 2);
        assert!(by_author("nobody").is_empty());
    }
}
