use proptest::prelude::*;

use word_scramble::game::{FixedPick, SeededRandom};
use word_scramble::persistence::FileStore;
use word_scramble::{Dictionary, GameSession, MemoryStore, Rejection, WordList};

fn dictionary() -> Box<Dictionary> {
    Box::new(Dictionary::from_text(
        "silk\nworm\nmilk\nslim\nmow\nmows\nlimo\nskim\nox\ndog\n",
        "en",
    ))
}

fn new_game(root: &str) -> GameSession {
    let mut game = GameSession::new(
        WordList::from_text(root),
        Box::new(MemoryStore::new()),
        dictionary(),
        Box::new(FixedPick(0)),
    );
    game.launch();
    game
}

#[test]
fn silk_from_silkworm_is_accepted() {
    let mut game = new_game("silkworm");
    game.submit_answer("silk").unwrap();
    assert_eq!(game.used_words(), &["silk"]);
}

#[test]
fn root_word_is_not_original() {
    let mut game = new_game("silkworm");
    assert_eq!(game.submit_answer("silkworm"), Err(Rejection::NotOriginal));
}

#[test]
fn dog_from_cat_is_impossible() {
    let mut game = new_game("cat");
    assert_eq!(
        game.submit_answer("dog"),
        Err(Rejection::Impossible { root: "cat".into() })
    );
}

#[test]
fn two_letter_word_is_not_real() {
    let mut game = new_game("oxbow");
    assert_eq!(game.submit_answer("ox"), Err(Rejection::NotReal));
}

#[test]
fn game_survives_relaunch_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let mut game = GameSession::new(
            WordList::from_text("silkworm"),
            Box::new(FileStore::open(&path).unwrap()),
            dictionary(),
            Box::new(FixedPick(0)),
        );
        game.launch();
        game.submit_answer("silk").unwrap();
        game.submit_answer("Worm").unwrap();
    }

    // Different word list: the saved root must win
    let mut game = GameSession::new(
        WordList::from_text("blizzard"),
        Box::new(FileStore::open(&path).unwrap()),
        dictionary(),
        Box::new(FixedPick(0)),
    );
    game.launch();
    assert_eq!(game.title(), Some("silkworm"));
    assert_eq!(game.used_words(), &["worm", "silk"]);

    game.start_game();
    assert_eq!(game.title(), Some("blizzard"));
    assert!(game.used_words().is_empty());
}

#[test]
fn seeded_games_pick_the_same_root() {
    let pick = |seed| {
        let mut game = GameSession::new(
            WordList::bundled(),
            Box::new(MemoryStore::new()),
            dictionary(),
            Box::new(SeededRandom::from_seed(seed)),
        );
        game.start_game();
        game.title().map(str::to_string)
    };
    assert_eq!(pick(42), pick(42));
}

proptest! {
    #[test]
    fn accepted_words_are_unique_and_newest_first(
        answers in proptest::collection::vec(
            prop::sample::select(vec!["silk", "worm", "milk", "slim", "mow", "mows", "limo", "skim", "ox", "dog"]),
            0..20,
        )
    ) {
        let mut game = new_game("silkworm");
        let mut accepted = Vec::new();
        for answer in &answers {
            if let Ok(a) = game.submit_answer(answer) {
                accepted.insert(0, a.word);
            }
        }

        prop_assert_eq!(game.used_words(), accepted.as_slice());
        let mut sorted = accepted.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), accepted.len());
        prop_assert!(!accepted.iter().any(|w| w == "silkworm"));
    }
}
