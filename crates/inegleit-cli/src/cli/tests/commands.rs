//! Tests for subcommand parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_add_player() {
    match parse(&["inegleit", "add-player", "Alice"]) {
        CliCommand::AddPlayer { name } => assert_eq!(name, "Alice"),
        _ => panic!("expected AddPlayer"),
    }
}

#[test]
fn cli_parse_add_player_keeps_spaces_and_empty() {
    match parse(&["inegleit", "add-player", "A B"]) {
        CliCommand::AddPlayer { name } => assert_eq!(name, "A B"),
        _ => panic!("expected AddPlayer"),
    }
    match parse(&["inegleit", "add-player", ""]) {
        CliCommand::AddPlayer { name } => assert!(name.is_empty()),
        _ => panic!("expected AddPlayer with empty name"),
    }
}

#[test]
fn cli_parse_add_player_requires_name() {
    assert!(Cli::try_parse_from(["inegleit", "add-player"]).is_err());
}

#[test]
fn cli_parse_remove_player() {
    match parse(&["inegleit", "remove-player", "Bob"]) {
        CliCommand::RemovePlayer { name } => assert_eq!(name, "Bob"),
        _ => panic!("expected RemovePlayer"),
    }
}

#[test]
fn cli_parse_say() {
    match parse(&["inegleit", "say", "Bob", "Viel Spass!"]) {
        CliCommand::Say { player, message } => {
            assert_eq!(player, "Bob");
            assert_eq!(message, "Viel Spass!");
        }
        _ => panic!("expected Say"),
    }
}

#[test]
fn cli_parse_game_commands() {
    assert!(matches!(
        parse(&["inegleit", "start-game"]),
        CliCommand::StartGame
    ));
    assert!(matches!(parse(&["inegleit", "turn"]), CliCommand::Turn));
}

#[test]
fn cli_parse_url() {
    match parse(&["inegleit", "url", "Alice"]) {
        CliCommand::Url { name } => assert_eq!(name, "Alice"),
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_play_card() {
    match parse(&["inegleit", "play-card", "1", "17"]) {
        CliCommand::PlayCard { player_id, card_id } => {
            assert_eq!(player_id, 1);
            assert_eq!(card_id, 17);
        }
        _ => panic!("expected PlayCard"),
    }
}

#[test]
fn cli_parse_deal_cards() {
    match parse(&["inegleit", "deal-cards", "0", "7"]) {
        CliCommand::DealCards { player_id, n_cards } => {
            assert_eq!(player_id, 0);
            assert_eq!(n_cards, 7);
        }
        _ => panic!("expected DealCards"),
    }
}

#[test]
fn cli_parse_play_card_rejects_non_numeric_ids() {
    assert!(Cli::try_parse_from(["inegleit", "play-card", "Alice", "3"]).is_err());
    assert!(Cli::try_parse_from(["inegleit", "play-card", "1"]).is_err());
}
