use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{
    build_daily_word_set, compose_sentence, compute_seed, select_words, validate_sentence, Category, Clock,
    Dictionaries, FixedClock,
};

fn any_day() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 plus up to ~200 years.
    (0i64..73_000).prop_map(|offset| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset))
}

#[test]
fn literal_seed_example() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!(compute_seed(date).unwrap(), 20240307);
}

#[test]
fn literal_wraparound_example() {
    assert_eq!(select_words(&["a", "b", "c"], 5, 1, 0).unwrap(), vec!["b", "c", "a", "b", "c"]);
}

#[test]
fn midnight_changes_the_selection() {
    let dicts = Dictionaries::builtin();
    let late = FixedClock(Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 59).unwrap());
    let early = FixedClock(Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 1).unwrap());
    let a = build_daily_word_set(&dicts, late.today()).unwrap();
    let b = build_daily_word_set(&dicts, early.today()).unwrap();
    assert_ne!(a, b);
}

proptest! {
    #[test]
    fn same_day_gives_same_words(day in any_day(), h1 in 0u32..24, h2 in 0u32..24) {
        let dicts = Dictionaries::builtin();
        let at = |h: u32| FixedClock(Utc.from_utc_datetime(&day.and_hms_opt(h, 30, 0).unwrap()));
        let a = build_daily_word_set(&dicts, at(h1).today()).unwrap();
        let b = build_daily_word_set(&dicts, at(h2).today()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_category_has_five_words(day in any_day()) {
        let set = build_daily_word_set(&Dictionaries::builtin(), day).unwrap();
        for category in Category::ALL {
            prop_assert_eq!(set.words(category).len(), 5);
        }
    }

    #[test]
    fn selection_is_consecutive_modulo_length(
        len in 1usize..40,
        count in 1usize..100,
        seed in any::<u64>(),
        offset in 0u64..10,
    ) {
        let dict: Vec<usize> = (0..len).collect();
        let words = select_words(&dict, count, seed, offset).unwrap();
        prop_assert_eq!(words.len(), count);
        for pair in words.windows(2) {
            prop_assert_eq!(pair[1], (pair[0] + 1) % len);
        }
    }

    #[test]
    fn composed_sentence_always_validates(day in any_day(), rng_seed in any::<u64>()) {
        let set = build_daily_word_set(&Dictionaries::builtin(), day).unwrap();
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let sentence = compose_sentence(&set, &mut rng).unwrap();
        prop_assert!(validate_sentence(&sentence, &set), "{}", sentence);
    }
}
