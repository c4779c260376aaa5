#[cfg(test)]
mod tests {
    use crate::{
        BattleEvent, HpStatus, ParseError, Player, PokemonDetails, PokemonIdent, Stat, is_noise,
        split_turns, tokenize,
    };

    fn parse(line: &str) -> Result<BattleEvent, ParseError> {
        BattleEvent::parse(&tokenize(line).unwrap())
    }

    #[test]
    fn test_tokenize_fields() {
        let event = tokenize("|move|p1: Ditto|Transform|p2: Flygon").unwrap();

        assert_eq!(event.tag(), "move");
        assert_eq!(event.len(), 4);
        assert_eq!(event.field(1), Some("p1: Ditto"));
        assert_eq!(event.field(3), Some("p2: Flygon"));
        assert_eq!(event.to_string(), "|move|p1: Ditto|Transform|p2: Flygon");
    }

    #[test]
    fn test_tokenize_drops_non_events() {
        assert!(tokenize("").is_none());
        assert!(tokenize("|").is_none());
        assert!(tokenize("just some text").is_none());
        assert!(tokenize("|-clearallboost").is_some());
        assert!(tokenize("|upkeep").is_some());
    }

    #[test]
    fn test_tokenize_trims() {
        let event = tokenize("  |turn|4 \r\n").unwrap();
        assert_eq!(event.tag(), "turn");
        assert_eq!(event.field(1), Some("4"));
    }

    #[test]
    fn test_parse_ident() {
        let ident = PokemonIdent::parse("p2a: Iron Moth").unwrap();
        assert_eq!(ident.player, Player::P2);
        assert_eq!(ident.position, Some('a'));
        assert_eq!(ident.name, "Iron Moth");

        let ident = PokemonIdent::parse("p1: Ditto").unwrap();
        assert_eq!(ident.player, Player::P1);
        assert_eq!(ident.position, None);

        assert!(PokemonIdent::parse("p5a: Nobody").is_none());
        assert!(PokemonIdent::parse("Pikachu").is_none());
    }

    #[test]
    fn test_parse_details() {
        let details = PokemonDetails::parse("Iron Moth, L84, F");
        assert_eq!(details.species, "Iron Moth");
        assert_eq!(details.level, Some(84));
        assert_eq!(details.gender, Some('F'));
        assert!(!details.shiny);

        let details = PokemonDetails::parse("Gholdengo");
        assert_eq!(details.level, None);
        assert_eq!(details.gender, None);
    }

    #[test]
    fn test_parse_hp_status() {
        let hp = HpStatus::parse("57/100 par").unwrap();
        assert_eq!(hp.current, 57);
        assert_eq!(hp.max, Some(100));
        assert_eq!(hp.status.as_deref(), Some("par"));

        let fainted = HpStatus::parse("0 fnt").unwrap();
        assert_eq!(fainted.current, 0);
        assert_eq!(fainted.max, None);
        assert!(fainted.is_fainted());

        assert!(matches!(
            HpStatus::parse("lots/100"),
            Err(ParseError::InvalidNumber { field: "hp", .. })
        ));
    }

    #[test]
    fn test_parse_switch() {
        let event = parse("|switch|p1a: Gholdengo|Gholdengo, L88|100/100").unwrap();

        match event {
            BattleEvent::Switch {
                pokemon,
                details,
                hp_status,
            } => {
                assert_eq!(pokemon.name, "Gholdengo");
                assert_eq!(details.level, Some(88));
                assert_eq!(hp_status.max, Some(100));
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_switch_bad_hp() {
        let result = parse("|switch|p1a: Gholdengo|Gholdengo, L88|full");
        assert!(matches!(result, Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn test_parse_boost() {
        let event = parse("|-boost|p1a: Gholdengo|spa|1").unwrap();
        assert_eq!(
            event,
            BattleEvent::Boost {
                pokemon: PokemonIdent::parse("p1a: Gholdengo").unwrap(),
                stat: Stat::Spa,
                amount: 1,
            }
        );

        assert!(parse("|-boost|p1a: Gholdengo|spa|lots").is_err());
        assert!(parse("|-boost|p1a: Gholdengo|luck|1").is_err());
    }

    #[test]
    fn test_parse_damage_with_from_tag() {
        let event = parse("|-damage|p2a: Flygon|0 fnt|[from] item: Life Orb").unwrap();
        match event {
            BattleEvent::Damage { pokemon, hp_status } => {
                assert_eq!(pokemon.name, "Flygon");
                assert!(hp_status.is_fainted());
            }
            other => panic!("expected damage, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_item_from_tag() {
        let event = parse("|-item|p2a: Flygon|Choice Scarf|[from] move: Trick").unwrap();
        assert_eq!(
            event,
            BattleEvent::Item {
                pokemon: PokemonIdent::parse("p2a: Flygon").unwrap(),
                item: "Choice Scarf".to_string(),
                from: Some("move: Trick".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_move_called_by_effect() {
        let event = parse("|move|p2a: Espeon|Stealth Rock|p1a: Gholdengo|[from]ability: Magic Bounce")
            .unwrap();
        assert_eq!(
            event,
            BattleEvent::Move {
                pokemon: PokemonIdent::parse("p2a: Espeon").unwrap(),
                move_name: "Stealth Rock".to_string(),
                target: PokemonIdent::parse("p1a: Gholdengo"),
                from: Some("ability: Magic Bounce".to_string()),
            }
        );

        match parse("|move|p1a: Gholdengo|Shadow Ball|p2a: Espeon").unwrap() {
            BattleEvent::Move { from, .. } => assert!(from.is_none()),
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_transform() {
        let event = parse("|-transform|p1a: Ditto|p2a: Iron Valiant|[from] ability: Imposter").unwrap();
        assert_eq!(
            event,
            BattleEvent::Transform {
                pokemon: PokemonIdent::parse("p1a: Ditto").unwrap(),
                target: PokemonIdent::parse("p2a: Iron Valiant"),
            }
        );
        assert_eq!(event.pokemon().unwrap().name, "Ditto");
    }

    #[test]
    fn test_parse_unknown_is_other() {
        let event = parse("|-crit|p2a: Flygon").unwrap();
        assert_eq!(event, BattleEvent::Other("-crit".to_string()));
        assert!(event.pokemon().is_none());
    }

    #[test]
    fn test_parse_missing_pokemon() {
        assert!(matches!(
            parse("|-damage|nobody|50/100"),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn test_is_noise() {
        assert!(is_noise("|request|{\"active\":[]}"));
        assert!(is_noise("|upkeep"));
        assert!(is_noise("|t:|1717000000"));
        assert!(is_noise(">battle-gen9randombattle-1"));
        assert!(is_noise("   "));
        assert!(!is_noise("|turn|1"));
    }

    #[test]
    fn test_split_turns() {
        let log = [
            ">battle-gen9randombattle-1",
            "|player|p1|alice|1",
            "|switch|p1a: Ditto|Ditto, L84|100/100",
            "|",
            "|turn|1",
            "|move|p1a: Ditto|Transform|p2a: Flygon",
            "|upkeep",
            "|turn|2",
        ];

        let turns = split_turns(log);

        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].number, None);
        assert_eq!(turns[0].events.len(), 2);
        assert_eq!(turns[1].number, Some(1));
        assert_eq!(turns[1].events[0].tag(), "turn");
        assert_eq!(turns[1].events[1].tag(), "move");
        assert_eq!(turns[2].number, Some(2));
        assert_eq!(turns[2].events.len(), 1);
    }
}
