use super::{decide, Move, Outcome};

#[test]
fn winning_pairs() {
    assert_eq!(decide(Move::Rock, Move::Scissors).result, Outcome::Win);
    assert_eq!(decide(Move::Scissors, Move::Paper).result, Outcome::Win);
    assert_eq!(decide(Move::Paper, Move::Rock).result, Outcome::Win);
}

#[test]
fn losing_pairs() {
    assert_eq!(decide(Move::Scissors, Move::Rock).result, Outcome::Lose);
    assert_eq!(decide(Move::Paper, Move::Scissors).result, Outcome::Lose);
    assert_eq!(decide(Move::Rock, Move::Paper).result, Outcome::Lose);
}

#[test]
fn equal_moves_draw() {
    for m in Move::ALL {
        assert_eq!(decide(m, m).result, Outcome::Draw);
    }
}

#[test]
fn messages_name_both_moves_and_verdict() {
    assert_eq!(
        decide(Move::Rock, Move::Scissors).message,
        "ROCK beats SCISSORS. You win!"
    );
    assert_eq!(
        decide(Move::Rock, Move::Paper).message,
        "PAPER beats ROCK. The CPU wins!"
    );
    assert_eq!(
        decide(Move::Paper, Move::Paper).message,
        "PAPER and PAPER. It's a draw!"
    );
}

#[test]
fn normalized_input_feeds_the_rule() {
    let player = Move::normalize("pedra").unwrap();
    assert_eq!(decide(player, Move::Scissors).result, Outcome::Win);
}

#[test]
fn outcome_round_trips_through_storage_label() {
    for o in [Outcome::Win, Outcome::Lose, Outcome::Draw] {
        assert_eq!(o.as_str().parse::<Outcome>(), Ok(o));
    }
    assert!("win".parse::<Outcome>().is_err());
}
