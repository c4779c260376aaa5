//! What a side committed to during a turn

use dojo_protocol::{BattleEvent, Player, RawEvent, Turn};

use crate::types::PokemonIdentity;

/// The action a side took in one turn.
///
/// Fields are independent: a turn can hold a move and then a faint, or a
/// switch followed by a `cant`. Each field keeps its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommittedAction {
    /// Move used
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub move_name: Option<String>,
    /// Species switched in (forced drags are not a choice and don't count)
    pub switch: Option<String>,
    /// Pokemon that fainted
    pub faint: Option<PokemonIdentity>,
    /// Reason the side could not act ("par", "slp", "recharge", ...)
    pub cant: Option<String>,
}

impl CommittedAction {
    pub fn is_empty(&self) -> bool {
        self.move_name.is_none() && self.switch.is_none() && self.faint.is_none() && self.cant.is_none()
    }
}

/// Scan one turn for the given player's committed action
pub fn parse_committed_action(player: Player, events: &[RawEvent]) -> CommittedAction {
    let mut action = CommittedAction::default();

    for raw in events {
        let event = match BattleEvent::parse(raw) {
            Ok(event) => event,
            Err(e) => {
                tracing::trace!(error = %e, line = %raw, "skipping unparsable event");
                continue;
            }
        };
        if event.pokemon().is_none_or(|pokemon| pokemon.player != player) {
            continue;
        }

        match event {
            BattleEvent::Move {
                move_name,
                from: None,
                ..
            } => {
                action.move_name.get_or_insert(move_name);
            }
            BattleEvent::Switch { details, .. } => {
                action.switch.get_or_insert(details.species);
            }
            BattleEvent::Faint(pokemon) => {
                action.faint.get_or_insert_with(|| PokemonIdentity::from(&pokemon));
            }
            BattleEvent::Cant { reason, .. } => {
                action.cant.get_or_insert(reason);
            }
            _ => {}
        }
    }

    action
}

/// Identity of the player's Pokemon that most recently switched in, was
/// dragged in or was revealed by a `replace`, searching turns back to front
pub fn current_active(player: Player, turns: &[Turn]) -> Option<PokemonIdentity> {
    turns
        .iter()
        .rev()
        .flat_map(|turn| turn.events.iter().rev())
        .filter(|raw| matches!(raw.tag(), "switch" | "drag" | "replace"))
        .find_map(|raw| match BattleEvent::parse(raw) {
            Ok(
                BattleEvent::Switch { pokemon, .. }
                | BattleEvent::Drag { pokemon, .. }
                | BattleEvent::Replace { pokemon, .. },
            ) if pokemon.player == player => Some(PokemonIdentity::from(&pokemon)),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use dojo_protocol::{split_turns, tokenize};

    use super::*;

    fn events(lines: &[&str]) -> Vec<RawEvent> {
        lines.iter().filter_map(|line| tokenize(line)).collect()
    }

    #[test]
    fn test_committed_move() {
        let turn = events(&[
            "|turn|3",
            "|move|p2a: Flygon|U-turn|p1a: Gholdengo",
            "|-damage|p1a: Gholdengo|70/100",
            "|move|p1a: Gholdengo|Make It Rain|p2a: Flygon",
        ]);

        let action = parse_committed_action(Player::P1, &turn);
        assert_eq!(action.move_name.as_deref(), Some("Make It Rain"));
        assert!(action.switch.is_none());

        let action = parse_committed_action(Player::P2, &turn);
        assert_eq!(action.move_name.as_deref(), Some("U-turn"));
    }

    #[test]
    fn test_committed_first_occurrence_wins() {
        let turn = events(&[
            "|move|p1a: Flygon|U-turn|p2a: Iron Moth",
            "|switch|p1a: Gholdengo|Gholdengo, L88|100/100",
            "|move|p1a: Gholdengo|Recover|p1a: Gholdengo",
            "|switch|p1a: Flygon|Flygon, L86|50/100",
        ]);

        let action = parse_committed_action(Player::P1, &turn);
        assert_eq!(action.move_name.as_deref(), Some("U-turn"));
        assert_eq!(action.switch.as_deref(), Some("Gholdengo"));
    }

    #[test]
    fn test_committed_move_then_faint() {
        let turn = events(&[
            "|move|p1a: Gholdengo|Shadow Ball|p2a: Flygon",
            "|move|p2a: Flygon|Earthquake|p1a: Gholdengo",
            "|-damage|p1a: Gholdengo|0 fnt",
            "|faint|p1a: Gholdengo",
        ]);

        let action = parse_committed_action(Player::P1, &turn);
        assert_eq!(action.move_name.as_deref(), Some("Shadow Ball"));
        assert_eq!(action.faint.as_ref().map(|f| f.as_str()), Some("Gholdengo"));
    }

    #[test]
    fn test_committed_cant() {
        let turn = events(&["|cant|p2a: Flygon|par", "|cant|p2a: Flygon|slp"]);

        let action = parse_committed_action(Player::P2, &turn);
        assert_eq!(action.cant.as_deref(), Some("par"));
        assert!(action.move_name.is_none());
    }

    #[test]
    fn test_committed_move_skips_called_moves() {
        let turn = events(&[
            "|move|p1a: Gholdengo|Stealth Rock|p2a: Espeon",
            "|move|p2a: Espeon|Stealth Rock|p1a: Gholdengo|[from]ability: Magic Bounce",
            "|move|p2a: Espeon|Psychic|p1a: Gholdengo",
        ]);

        let action = parse_committed_action(Player::P2, &turn);
        assert_eq!(action.move_name.as_deref(), Some("Psychic"));
    }

    #[test]
    fn test_current_active_after_replace() {
        let turns = split_turns([
            "|switch|p2a: Iron Valiant|Iron Valiant, L79|100/100",
            "|turn|1",
            "|-damage|p2a: Iron Valiant|64/100",
            "|replace|p2a: Zoroark|Zoroark, L80, M",
        ]);

        assert_eq!(current_active(Player::P2, &turns).unwrap().as_str(), "Zoroark");
    }

    #[test]
    fn test_drag_is_not_a_choice() {
        let turn = events(&["|drag|p1a: Flygon|Flygon, L86|100/100"]);

        let action = parse_committed_action(Player::P1, &turn);
        assert!(action.is_empty());
    }

    #[test]
    fn test_current_active() {
        let turns = split_turns([
            "|switch|p1a: Gholdengo|Gholdengo, L88|100/100",
            "|switch|p2a: Flygon|Flygon, L86|100/100",
            "|turn|1",
            "|switch|p1a: Iron Moth|Iron Moth, L84, F|100/100",
            "|turn|2",
            "|move|p2a: Flygon|Whirlwind|p1a: Iron Moth",
            "|drag|p1a: Gholdengo|Gholdengo, L88|100/100",
            "|turn|3",
            "|move|p1a: Gholdengo|Recover|p1a: Gholdengo",
        ]);

        assert_eq!(current_active(Player::P1, &turns).unwrap().as_str(), "Gholdengo");
        assert_eq!(current_active(Player::P2, &turns).unwrap().as_str(), "Flygon");
        assert!(current_active(Player::P1, &turns[..1]).is_some());
        assert!(current_active(Player::P3, &turns).is_none());
    }
}
