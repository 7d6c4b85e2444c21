//! Unit tests for translations and the `t!` macro.

use fittrack::goals::{AchievementKind, FitnessGoal};
use fittrack::i18n::{Language, TranslationStore};
use fittrack::t;
use fittrack::ui::screens::Screen;

#[test]
fn test_t_macro_substitutes_arguments() {
    let text = t!("home-greeting-name", "name" => "Alex");
    assert!(text.contains("Alex"));
    assert!(!text.contains("$name"));

    let progress = t!("home-week-progress", "completed" => 2, "total" => 4);
    assert!(progress.contains('2'));
    assert!(progress.contains('4'));
}

#[test]
fn test_unknown_key_falls_back_to_key() {
    assert_eq!(t!("definitely-not-a-key"), "definitely-not-a-key");
}

#[test]
fn test_every_language_translates_core_keys() {
    let mut store = TranslationStore::new();
    let mut keys: Vec<String> = vec![
        FitnessGoal::WeightLoss.translation_key().to_string(),
        Screen::Home.title_key().to_string(),
        "summary-completed".to_string(),
    ];
    for kind in AchievementKind::all() {
        keys.push(kind.title_key());
        keys.push(kind.description_key());
    }

    for lang in Language::all() {
        store.set_language(*lang);
        for key in &keys {
            assert_ne!(&store.translate(key), key, "{:?} has no text for {}", lang, key);
        }
    }
}

#[test]
fn test_languages_differ() {
    let mut store = TranslationStore::new();
    store.set_language(Language::English);
    let english = store.translate("nav-stats");
    store.set_language(Language::Belarusian);
    let belarusian = store.translate("nav-stats");
    store.set_language(Language::Russian);
    let russian = store.translate("nav-stats");

    assert_eq!(english, "Statistics");
    assert_ne!(english, russian);
    assert_ne!(russian, belarusian);
}
