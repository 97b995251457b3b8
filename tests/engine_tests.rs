//! Engine integration tests.
//!
//! These drive the public `Engine` API the way UI code would: select tiles
//! by grid position, submit, shuffle, and watch subscriber notifications.

use std::cell::RefCell;
use std::rc::Rc;

use connections_engine::{
    Engine, EngineConfig, GameState, GameStatus, GuessVerdict, ShapeError, WordId,
};

fn rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["A", "B", "C", "D", "Fruits"],
        vec!["E", "F", "G", "H", "Colors"],
        vec!["I", "J", "K", "L", "Tools"],
        vec!["M", "N", "O", "P", "Verbs"],
    ]
}

fn engine(seed: u64) -> Engine {
    Engine::with_config(&rows(), EngineConfig::default().with_seed(seed)).unwrap()
}

fn position(engine: &Engine, id: u8) -> usize {
    engine.state().position_of(WordId::new(id)).unwrap()
}

fn select_ids(engine: &mut Engine, raw: &[u8]) {
    for &id in raw {
        let p = position(engine, id);
        engine.select_tile(p);
    }
}

fn selection(engine: &Engine) -> Vec<u8> {
    engine.state().selections.iter().map(|id| id.raw()).collect()
}

fn sorted_ids(state: &GameState) -> Vec<u8> {
    let mut ids: Vec<u8> = state.positions.iter().map(|id| id.raw()).collect();
    ids.sort_unstable();
    ids
}

// =============================================================================
// Construction
// =============================================================================

/// A fresh puzzle has 4 groups, 16 words, a shuffled grid and no history.
#[test]
fn test_create_initial_state() {
    let engine = Engine::create(&rows()).unwrap();
    let state = engine.state();

    assert_eq!(state.groups.len(), 4);
    assert_eq!(state.groups.iter().map(|g| g.words.len()).sum::<usize>(), 16);
    assert_eq!(sorted_ids(state), (1..=16).collect::<Vec<u8>>());
    assert!(state.selections.is_empty());
    assert!(state.guesses.is_empty());
    assert_eq!(state.status(), GameStatus::InProgress);
}

/// Reading the groups back recovers the input words, grouped the same way.
#[test]
fn test_create_round_trips_words() {
    let engine = engine(3);

    for (group, row) in engine.state().groups.iter().zip(rows()) {
        let words: Vec<&str> = group.words.iter().map(|w| w.value.as_str()).collect();
        assert_eq!(words, &row[..4]);
        assert_eq!(group.label, row[4]);
        assert!(!group.solved);
    }
}

/// Wrong group count and wrong group length are distinct failures.
#[test]
fn test_create_rejects_bad_shape() {
    let mut three = rows();
    three.pop();
    assert_eq!(
        Engine::create(&three).unwrap_err(),
        ShapeError::WrongGroupCount { found: 3 }
    );

    let mut short = rows();
    short[1].pop();
    assert_eq!(
        Engine::create(&short).unwrap_err(),
        ShapeError::WrongGroupLength { group: 1, found: 4 }
    );
}

/// Different seeds change the layout but never the word IDs.
#[test]
fn test_ids_are_deterministic() {
    let a = engine(1);
    let b = engine(2);

    assert_eq!(a.state().groups, b.state().groups);
    assert_ne!(a.state().positions, b.state().positions);
}

// =============================================================================
// Selection
// =============================================================================

/// Re-selecting a tile removes it; selecting again puts it at the end.
#[test]
fn test_select_toggle_reorders() {
    let mut engine = engine(7);
    select_ids(&mut engine, &[1, 2, 3]);

    select_ids(&mut engine, &[1]);
    assert_eq!(selection(&engine), vec![2, 3]);

    select_ids(&mut engine, &[1]);
    assert_eq!(selection(&engine), vec![2, 3, 1]);
}

/// A fifth tile is ignored until one is deselected.
#[test]
fn test_select_caps_at_four() {
    let mut engine = engine(7);
    select_ids(&mut engine, &[1, 2, 3, 4, 5]);
    assert_eq!(selection(&engine), vec![1, 2, 3, 4]);

    select_ids(&mut engine, &[4, 5]);
    assert_eq!(selection(&engine), vec![1, 2, 3, 5]);
}

/// Out-of-range positions are ignored.
#[test]
fn test_select_out_of_range() {
    let mut engine = engine(7);
    engine.select_tile(16);
    engine.select_tile(1000);

    assert!(engine.state().selections.is_empty());
}

/// Deselecting twice is the same as deselecting once.
#[test]
fn test_deselect_all_idempotent() {
    let mut engine = engine(7);
    select_ids(&mut engine, &[1, 6, 11]);

    engine.deselect_all();
    let once = engine.state().clone();
    engine.deselect_all();

    assert!(once.selections.is_empty());
    assert_eq!(engine.state(), &once);
}

// =============================================================================
// Guessing
// =============================================================================

/// One word from each group is a mistake; the selection stays visible.
#[test]
fn test_incorrect_guess() {
    let mut engine = engine(11);
    select_ids(&mut engine, &[1, 5, 9, 13]);
    let positions = engine.state().positions.clone();

    let outcome = engine.submit_guess(true);

    assert!(outcome.off_by >= 1);
    assert!(!outcome.already_guessed);
    assert_eq!(outcome.verdict, GuessVerdict::Incorrect);

    let state = engine.state();
    assert_eq!(state.guesses.len(), 1);
    assert!(!state.guesses[0].correct);
    assert!(state.guesses[0].user_submitted);
    assert_eq!(state.num_groups_solved(), 0);
    assert_eq!(selection(&engine), vec![1, 5, 9, 13]);
    assert_eq!(engine.state().positions, positions);
}

/// A whole group, in any order, is solved and moved to the front.
#[test]
fn test_correct_guess() {
    let mut engine = engine(11);
    select_ids(&mut engine, &[4, 2, 1, 3]);

    let outcome = engine.submit_guess(true);

    assert_eq!(outcome.off_by, 0);
    assert!(!outcome.already_guessed);
    assert!(outcome.is_correct());

    let state = engine.state();
    assert!(state.groups[0].solved);
    assert!(state.selections.is_empty());
    let mut front: Vec<u8> = state.positions.iter().take(4).map(|id| id.raw()).collect();
    front.sort_unstable();
    assert_eq!(front, vec![1, 2, 3, 4]);
    assert_eq!(sorted_ids(state), (1..=16).collect::<Vec<u8>>());
}

/// Near misses report how many words are off.
#[test]
fn test_one_away() {
    let mut engine = engine(11);
    select_ids(&mut engine, &[5, 6, 7, 1]);

    let outcome = engine.submit_guess(true);

    assert_eq!(outcome.off_by, 1);
    assert_eq!(outcome.verdict, GuessVerdict::Incorrect);
}

/// Repeating a recorded guess is reported and not logged again.
#[test]
fn test_repeat_guess() {
    let mut engine = engine(11);
    select_ids(&mut engine, &[1, 5, 9, 13]);
    engine.submit_guess(true);

    engine.deselect_all();
    select_ids(&mut engine, &[13, 9, 5, 1]);
    let outcome = engine.submit_guess(true);

    assert!(outcome.already_guessed);
    assert_eq!(outcome.off_by, 3);
    assert_eq!(outcome.verdict, GuessVerdict::AlreadyGuessed);
    assert_eq!(engine.state().guesses.len(), 1);
}

/// Fewer than four tiles is rejected with `off_by` 4.
#[test]
fn test_wrong_size_guess() {
    let mut engine = engine(11);
    select_ids(&mut engine, &[1, 2, 3]);

    let outcome = engine.submit_guess(true);

    assert_eq!(outcome.verdict, GuessVerdict::WrongSize);
    assert_eq!(outcome.off_by, 4);
    assert!(engine.state().guesses.is_empty());
}

/// After four mistakes the player cannot guess, even a correct group.
#[test]
fn test_mistake_budget() {
    let mut engine = engine(11);
    for raw in [[1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15], [4, 8, 12, 16]] {
        engine.deselect_all();
        select_ids(&mut engine, &raw);
        assert_eq!(engine.submit_guess(true).verdict, GuessVerdict::Incorrect);
    }
    assert_eq!(engine.state().num_mistakes_made(), 4);
    assert_eq!(engine.state().status(), GameStatus::OutOfMistakes);

    engine.deselect_all();
    select_ids(&mut engine, &[1, 6, 11, 16]);
    let outcome = engine.submit_guess(true);
    assert_eq!(outcome.verdict, GuessVerdict::OutOfMistakes);
    assert!(!outcome.already_guessed);

    engine.deselect_all();
    select_ids(&mut engine, &[1, 2, 3, 4]);
    assert_eq!(engine.submit_guess(true).verdict, GuessVerdict::OutOfMistakes);
    assert_eq!(engine.state().guesses.len(), 4);
    assert_eq!(engine.state().num_groups_solved(), 0);
}

/// Solving every group finishes the puzzle with groups packed in solve order.
#[test]
fn test_solve_all_groups() {
    let mut engine = engine(5);
    let order: [[u8; 4]; 4] = [[9, 10, 11, 12], [1, 2, 3, 4], [16, 15, 14, 13], [5, 6, 7, 8]];

    for group in order {
        select_ids(&mut engine, &group);
        assert!(engine.submit_guess(true).is_correct());
    }

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::Solved);
    for (block, group) in order.iter().enumerate() {
        let mut ids: Vec<u8> = (0..4).map(|i| state.positions[block * 4 + i].raw()).collect();
        ids.sort_unstable();
        let mut expected = group.to_vec();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }
}

// =============================================================================
// Shuffling
// =============================================================================

/// Shuffling never moves solved tiles and keeps the selection.
#[test]
fn test_shuffle_keeps_solved_prefix() {
    let mut engine = engine(21);
    select_ids(&mut engine, &[5, 6, 7, 8]);
    engine.submit_guess(true);
    select_ids(&mut engine, &[1, 9]);

    let prefix: Vec<WordId> = engine.state().positions.iter().take(4).copied().collect();
    for _ in 0..10 {
        engine.shuffle_tiles();
        let now: Vec<WordId> = engine.state().positions.iter().take(4).copied().collect();
        assert_eq!(now, prefix);
        assert_eq!(sorted_ids(engine.state()), (1..=16).collect::<Vec<u8>>());
    }
    assert_eq!(selection(&engine), vec![1, 9]);
}

/// Shuffling actually moves unsolved tiles.
#[test]
fn test_shuffle_changes_layout() {
    let mut engine = engine(21);
    let before = engine.state().positions.clone();

    engine.shuffle_tiles();

    assert_ne!(engine.state().positions, before);
}

// =============================================================================
// Subscribers
// =============================================================================

/// Subscribers see the current state on subscribe and one call per update,
/// including updates that change nothing.
#[test]
fn test_subscriber_notifications() {
    let mut engine = engine(1);
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = engine.subscribe(move |state| sink.borrow_mut().push(state.selections.len()));
    assert_eq!(*seen.borrow(), vec![0]);

    let p = position(&engine, 1);
    engine.select_tile(p);
    engine.select_tile(99);
    engine.submit_guess(true);
    engine.deselect_all();
    assert_eq!(*seen.borrow(), vec![0, 1, 1, 1, 0]);

    assert!(engine.unsubscribe(id));
    engine.select_tile(p);
    assert_eq!(seen.borrow().len(), 5);
}

/// Subscribers are called in registration order with the final state.
#[test]
fn test_subscriber_order() {
    let mut engine = engine(1);
    let log: Rc<RefCell<Vec<(&'static str, usize)>>> = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second"] {
        let sink = Rc::clone(&log);
        engine.subscribe(move |state| sink.borrow_mut().push((name, state.guesses.len())));
    }
    log.borrow_mut().clear();

    select_ids(&mut engine, &[1, 5, 9, 13]);
    log.borrow_mut().clear();
    engine.submit_guess(true);

    assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
}
