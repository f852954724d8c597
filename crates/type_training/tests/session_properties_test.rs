//! Property tests: invariants survive arbitrary play.

use proptest::prelude::*;
use type_training::{
    Action, Category, InvariantSet, Phase, ROUND_TOTAL, Session, TypeTrainingInvariants,
};

/// Picks the action a well-behaved host would send for this phase.
fn legal_action(phase: Phase, pick: Category) -> Action {
    match phase {
        Phase::InRound => Action::Choose(pick),
        Phase::RoundResolved => Action::Acknowledge,
        Phase::GameOver => Action::Restart,
    }
}

fn illegal_actions(phase: Phase) -> Vec<Action> {
    [Action::Choose(Category::Fire), Action::Acknowledge, Action::Restart]
        .into_iter()
        .filter(|action| action.required_phase() != phase)
        .collect()
}

proptest! {
    #[test]
    fn invariants_hold_through_play(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..3, 0..80),
    ) {
        let mut session = Session::seeded(seed);

        for idx in picks {
            let action = legal_action(session.phase(), Category::ALL[idx]);
            session.apply(action).expect("legal action accepted");

            prop_assert!(TypeTrainingInvariants::check_all(session.board()).is_ok());
            prop_assert!(session.round_index() >= 1);
            prop_assert!(session.score() <= session.round_index() - 1);
            prop_assert_eq!(
                session.is_game_over(),
                session.phase() == Phase::GameOver
            );
            if session.is_game_over() {
                prop_assert!(session.round_index() > ROUND_TOTAL);
            }
        }
    }

    #[test]
    fn illegal_actions_are_rejected_without_effect(
        seed in any::<u64>(),
        steps in 0usize..25,
    ) {
        let mut session = Session::seeded(seed);
        for _ in 0..steps {
            let action = legal_action(session.phase(), Category::Water);
            session.apply(action).expect("legal action accepted");
        }

        let before = session.board().clone();
        for action in illegal_actions(session.phase()) {
            prop_assert!(session.apply(action).is_err());
            prop_assert_eq!(session.board(), &before);
        }
    }
}
