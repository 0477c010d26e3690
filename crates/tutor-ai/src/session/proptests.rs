//! Property-based tests for the history invariants.

use proptest::prelude::*;

use super::*;
use crate::{Completion, CompletionError, Message, Role, TokenUsage};

#[derive(Debug, Clone)]
enum Op {
    User(String),
    Assistant(String),
    Turn(String, bool),
    Reset,
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t\n]{1,4}",
        "[a-zA-Z ?]{1,30}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_text().prop_map(Op::User),
        3 => arb_text().prop_map(Op::Assistant),
        4 => (arb_text(), any::<bool>()).prop_map(|(t, ok)| Op::Turn(t, ok)),
        1 => Just(Op::Reset),
    ]
}

fn apply(session: &mut ConversationSession, op: &Op) {
    match op {
        Op::User(text) => {
            let _ = session.add_user_message(text.clone());
        }
        Op::Assistant(text) => session.add_assistant_message(text.clone()),
        Op::Turn(text, ok) => {
            if session.begin_turn(text.clone()).is_ok() {
                let result = if *ok {
                    Ok(Completion {
                        content: "reply".into(),
                        usage: TokenUsage::default(),
                    })
                } else {
                    Err(CompletionError::Network("down".into()))
                };
                let _ = session.finish_turn(result);
            }
        }
        Op::Reset => session.reset(),
    }
}

proptest! {
    #[test]
    fn system_message_is_never_lost(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut session = ConversationSession::new("tutor prompt");
        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(&session.history()[0], &Message::system("tutor prompt"));
        }
    }

    #[test]
    fn visible_history_is_history_tail(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut session = ConversationSession::new("tutor prompt");
        for op in &ops {
            apply(&mut session, op);
        }
        prop_assert_eq!(session.visible_history(), &session.history()[1..]);
        prop_assert!(session.visible_history().iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn reset_always_leaves_one_message(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut session = ConversationSession::new("tutor prompt");
        for op in &ops {
            apply(&mut session, op);
        }
        session.reset();
        prop_assert_eq!(session.len(), 1);
        prop_assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn blank_input_never_grows_history(
        ops in prop::collection::vec(arb_op(), 0..20),
        blank in "[ \t\n]{0,6}",
    ) {
        let mut session = ConversationSession::new("tutor prompt");
        for op in &ops {
            apply(&mut session, op);
        }
        let before = session.len();
        prop_assert!(session.add_user_message(blank.clone()).is_err());
        prop_assert!(session.begin_turn(blank).is_err());
        prop_assert_eq!(session.len(), before);
    }

    #[test]
    fn turns_never_stack_two_replies(texts in prop::collection::vec((arb_text(), any::<bool>()), 0..30)) {
        let mut session = ConversationSession::new("tutor prompt");
        for (text, ok) in &texts {
            apply(&mut session, &Op::Turn(text.clone(), *ok));
        }
        let roles: Vec<Role> = session.visible_history().iter().map(|m| m.role).collect();
        for pair in roles.windows(2) {
            prop_assert!(!(pair[0] == Role::Assistant && pair[1] == Role::Assistant));
        }
        if let Some(first) = roles.first() {
            prop_assert_eq!(*first, Role::User);
        }
    }
}
