//! Tests for the session state machine: guard validation, terminal
//! detection, and the silent-drop failure semantics.

use dropfour::{Disc, GameSession, Intent, Outcome, Player, SessionStatus};

fn session() -> GameSession {
    GameSession::new(
        Player::new("a".into(), "Alice".into()),
        Player::new("b".into(), "Bob".into()),
    )
    .unwrap()
}

fn mv(actor: &str, column: usize) -> Intent {
    Intent::Move {
        actor: actor.into(),
        column,
    }
}

fn forfeit(actor: &str) -> Intent {
    Intent::Forfeit {
        actor: actor.into(),
    }
}

#[test]
fn test_wrong_turn_move_dropped() {
    let mut game = session();
    let render = game.submit(mv("b", 0));
    assert_eq!(render.board().turns(), 0);
    assert_eq!(render.board().cell(0, 0), None);
    assert!(!game.is_terminal());

    // The turn was not consumed; the first player still moves.
    let render = game.submit(mv("a", 0));
    assert_eq!(render.board().turns(), 1);
    assert_eq!(render.board().cell(0, 0), Some(Disc::Red));
}

#[test]
fn test_unknown_actor_dropped() {
    let mut game = session();
    let render = game.submit(mv("stranger", 0));
    assert_eq!(render.board().turns(), 0);
    assert!(!game.is_terminal());

    let render = game.submit(forfeit("stranger"));
    assert!(render.outcome().is_none());
    assert!(!game.is_terminal());
}

#[test]
fn test_out_of_range_column_dropped() {
    let mut game = session();
    let render = game.submit(mv("a", 9));
    assert_eq!(render.board().turns(), 0);
    assert!(!game.is_terminal());

    let render = game.submit(mv("a", 3));
    assert_eq!(render.board().turns(), 1);
}

#[test]
fn test_full_column_dropped() {
    let mut game = session();
    for _ in 0..3 {
        game.submit(mv("a", 0));
        game.submit(mv("b", 0));
    }
    let render = game.submit(mv("a", 0));
    assert_eq!(render.board().turns(), 6);

    let render = game.submit(mv("a", 1));
    assert_eq!(render.board().turns(), 7);
}

#[test]
fn test_vertical_win_end_to_end() {
    let mut game = session();
    game.submit(mv("a", 3));
    game.submit(mv("b", 4));
    game.submit(mv("a", 3));
    game.submit(mv("b", 4));
    let render = game.submit(mv("a", 3));
    assert!(render.outcome().is_none(), "no win after three in a column");
    game.submit(mv("b", 4));

    let render = game.submit(mv("a", 3));
    assert_eq!(render.outcome(), &Some(Outcome::Win(Disc::Red)));
    assert_eq!(render.status(), "Alice (@) won!");
    assert!(game.is_terminal());
}

#[test]
fn test_completed_session_ignores_all_intents() {
    let mut game = session();
    for _ in 0..3 {
        game.submit(mv("a", 3));
        game.submit(mv("b", 4));
    }
    let won = game.submit(mv("a", 3));
    assert_eq!(won.outcome(), &Some(Outcome::Win(Disc::Red)));
    let turns = won.board().turns();

    for intent in [mv("b", 0), mv("a", 0), forfeit("b"), forfeit("a")] {
        let render = game.submit(intent);
        assert_eq!(render.outcome(), &Some(Outcome::Win(Disc::Red)));
        assert_eq!(render.board().turns(), turns);
    }
}

#[test]
fn test_forfeit_on_opponents_own_turn() {
    let mut game = session();
    game.submit(mv("a", 0));

    // Second player forfeits instead of moving.
    let render = game.submit(forfeit("b"));
    assert_eq!(
        render.outcome(),
        &Some(Outcome::Forfeit {
            winner: Disc::Red,
            loser: Disc::Yellow,
        })
    );
    assert_eq!(render.status(), "Alice (@) won (Bob (0) forfeited)");

    let render = game.submit(mv("a", 0));
    assert_eq!(render.board().turns(), 1);
    assert_eq!(
        render.outcome(),
        &Some(Outcome::Forfeit {
            winner: Disc::Red,
            loser: Disc::Yellow,
        })
    );
}

#[test]
fn test_forfeit_out_of_turn_still_ends_game() {
    let mut game = session();
    // First player forfeits while it is their own turn to move.
    let render = game.submit(forfeit("a"));
    assert_eq!(
        render.outcome(),
        &Some(Outcome::Forfeit {
            winner: Disc::Yellow,
            loser: Disc::Red,
        })
    );
}

#[test]
fn test_board_fills_to_draw() {
    // Interleaving built so that no side ever connects four: paired
    // columns fill with complementary stacks, the last three columns
    // finish together.
    let columns = [
        0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, // columns 0 and 1
        2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 3, 2, // columns 2 and 3
        4, 5, 4, 5, 5, 4, 5, 6, 6, 4, 4, 6, 6, 5, 5, 6, 6, 4, // columns 4-6
    ];
    let mut game = session();
    for (index, &column) in columns.iter().enumerate() {
        assert!(!game.is_terminal(), "terminal before move {index}");
        let actor = if index % 2 == 0 { "a" } else { "b" };
        let render = game.submit(mv(actor, column));
        assert_eq!(
            render.board().turns(),
            index as u32 + 1,
            "move {index} in column {column} was dropped"
        );
    }

    assert_eq!(game.status(), &SessionStatus::Completed(Outcome::Draw));
    assert!(game.is_terminal());

    let render = game.submit(mv("a", 0));
    assert_eq!(render.outcome(), &Some(Outcome::Draw));
    assert_eq!(render.board().turns(), 42);
}

#[test]
fn test_intent_decodes_from_wire_form() {
    // The display collaborator hands the session typed intents; its wire
    // form decodes without a custom mapping layer.
    let intent: Intent =
        serde_json::from_str(r#"{"Move":{"actor":"a","column":3}}"#).unwrap();
    let mut game = session();
    let render = game.submit(intent);
    assert_eq!(render.board().cell(3, 0), Some(Disc::Red));

    let intent: Intent = serde_json::from_str(r#"{"Forfeit":{"actor":"b"}}"#).unwrap();
    let render = game.submit(intent);
    assert_eq!(
        render.outcome(),
        &Some(Outcome::Forfeit {
            winner: Disc::Red,
            loser: Disc::Yellow,
        })
    );
}
