//! Integration tests for the learner and self-play training.

use nim_q::core::{Action, GameRng, Piles, PlayerId};
use nim_q::learning::{LearnerConfig, QLearner};
use nim_q::training::{SelfPlayConfig, SelfPlayTrainer};

// =============================================================================
// Learner Tests
// =============================================================================

#[test]
fn test_terminal_update_scenario() {
    let mut learner = QLearner::new(LearnerConfig::new().with_learning_rate(0.5));
    let state = Piles::from([0, 0, 1, 0]);
    let terminal = Piles::from([0, 0, 0, 0]);

    assert_eq!(learner.best_value(&terminal), 0.0);
    learner.update(&state, Action::new(3, 1), &terminal, -1.0);

    assert_eq!(learner.value(&state, Action::new(3, 1)), -0.5);
}

#[test]
fn test_state_key_is_by_value() {
    let mut learner = QLearner::default();
    let from_array = Piles::from([1, 3, 5, 7]);
    learner.set_value(&from_array, Action::new(2, 2), 0.75);

    let from_vec = Piles::from(vec![1, 3, 5, 7]);
    let from_slice = Piles::from(&[1u32, 3, 5, 7][..]);
    assert_eq!(learner.value(&from_vec, Action::new(2, 2)), 0.75);
    assert_eq!(learner.value(&from_slice, Action::new(2, 2)), 0.75);
}

#[test]
fn test_exploit_never_picks_lower_value() {
    let mut learner = QLearner::new(LearnerConfig::new().with_exploration_rate(0.0));
    let state = Piles::from([2, 1]);
    learner.set_value(&state, Action::new(0, 1), -0.3);
    learner.set_value(&state, Action::new(0, 2), 0.0);

    let mut rng = GameRng::new(17);
    let mut seen_tied = [0u32; 2];
    for _ in 0..400 {
        // (0, 2) is stored as 0 and (1, 1) is unseen, so both tie at 0.
        match learner.choose_action(&state, true, &mut rng).unwrap() {
            a if a == Action::new(0, 2) => seen_tied[0] += 1,
            a if a == Action::new(1, 1) => seen_tied[1] += 1,
            a => panic!("picked lower-valued action {}", a),
        }
    }
    assert!(seen_tied.iter().all(|&n| n > 120));
}

// =============================================================================
// Training Tests
// =============================================================================

#[test]
fn test_learns_to_leave_last_object() {
    // From a single pile of 2, taking 1 forces the opponent to take the last
    // object. Taking both loses immediately.
    let trainer = SelfPlayTrainer::new(
        SelfPlayConfig::new().with_piles([2]).with_episodes(200).with_seed(3),
    )
    .unwrap();
    let mut learner = QLearner::default();
    trainer.train(&mut learner).unwrap();

    let start = Piles::from([2]);
    assert!(learner.value(&start, Action::new(0, 1)) > 0.9);
    assert!(learner.value(&start, Action::new(0, 2)) < -0.4);

    let mut rng = GameRng::new(0);
    for _ in 0..20 {
        assert_eq!(learner.choose_action(&start, false, &mut rng), Some(Action::new(0, 1)));
    }
}

#[test]
fn test_trained_first_player_wins_small_board() {
    // On [1, 2] the first player wins by taking the whole second pile,
    // leaving a single object for the opponent.
    let trainer = SelfPlayTrainer::new(
        SelfPlayConfig::new()
            .with_piles([1, 2])
            .with_episodes(2_000)
            .with_seed(11)
            .with_log_interval(0),
    )
    .unwrap();
    let mut learner = QLearner::default();
    let stats = trainer.train(&mut learner).unwrap();

    assert_eq!(stats.episodes, 2_000);
    assert!(stats.win_rate(PlayerId::FIRST) > 0.5);

    let mut rng = GameRng::new(1);
    assert_eq!(
        learner.choose_action(&Piles::from([1, 2]), false, &mut rng),
        Some(Action::new(1, 2))
    );
}

#[test]
fn test_table_only_grows() {
    let trainer = SelfPlayTrainer::new(SelfPlayConfig::new().with_episodes(1)).unwrap();
    let mut learner = QLearner::default();
    let mut rng = GameRng::new(8);

    let mut last = 0;
    for _ in 0..30 {
        trainer.play_episode(&mut learner, &mut rng).unwrap();
        let len = learner.table().len();
        assert!(len >= last);
        last = len;
    }
    assert!(last > 0);
}
