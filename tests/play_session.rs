//! Drives the line-oriented game through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::commands::run_play;
use wordle_game::core::Word;
use wordle_game::game::AnswerPool;
use wordle_game::wordlists::WordLists;
use wordle_game::wordlists::loader::words_from_slice;

fn lists() -> WordLists {
    WordLists::new(
        AnswerPool::new(words_from_slice(&["radar"])),
        words_from_slice(&["crane", "slate", "audio"]),
    )
}

#[test]
fn full_session_keeps_statistics() {
    colored::control::set_override(false);
    let lists = lists();

    let script = "crane\nradar\ny\nRADAR\nn\n";
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    let stats = run_play(&mut input, &mut out, &lists, &mut StdRng::seed_from_u64(42)).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(stats.rounds_played(), 2);
    assert_eq!(stats.wins(), 2);
    assert_eq!(stats.current_streak(), 2);
    let buckets: Vec<_> = stats.histogram().take(2).collect();
    assert_eq!(buckets, vec![(1, 1), (2, 1)]);
    assert!(text.starts_with("Welcome to Wordle!"));
    assert!(text.contains("Guess distribution:"));
    assert!(text.ends_with("Thanks for playing!\n"));
}

#[test]
fn case_is_ignored_in_guesses() {
    colored::control::set_override(false);
    let lists = WordLists::new(
        AnswerPool::new(words_from_slice(&["radar"])),
        Vec::<Word>::new(),
    );

    let mut input = "RaDaR\nn\n".as_bytes();
    let mut out = Vec::new();
    let stats = run_play(&mut input, &mut out, &lists, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(stats.wins(), 1);
    assert_eq!(stats.histogram().next(), Some((1, 1)));
}
