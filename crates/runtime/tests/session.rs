use game_content::FloorLayout;
use game_core::{
    AttackKind, CardinalDirection, Combatant, GameConfig, InventoryError, Item, ItemCatalog,
    MapOracle, POTION_NAME, Position, ScriptedRng, Spell, TileKind,
};
use runtime::{
    ActionError, FloorMap, GameEvent, HealthThreshold, Phase, PlayerAction, PurchaseRefusal,
    RuntimeError, SaleRefusal, ScriptedProvider, Session, StopReason,
};

use CardinalDirection::{East, North, West};

const NO_DRAWS: [u32; 0] = [];

/// Catalog indices: 0 dagger, 1 potion, 2 gold bag, 3 shield.
fn catalog() -> ItemCatalog {
    ItemCatalog::new(vec![
        Item::new("Rusty Dagger", 2, "dagger.png"),
        Item::new(POTION_NAME, 25, "potion.png"),
        Item::new(game_core::GOLD_BAG_NAME, 25, "gold.png"),
        Item::new("Heavy Shield", 20, "shield.png"),
    ])
    .unwrap()
}

fn session_with(
    config: GameConfig,
    floors: &[&[&str]],
    draws: impl IntoIterator<Item = u32>,
) -> Session<FloorMap, ScriptedRng> {
    let layouts = floors
        .iter()
        .enumerate()
        .map(|(i, rows)| FloorLayout::from_rows(format!("floor{}", i + 1), *rows).unwrap())
        .collect();
    let map = FloorMap::new(layouts).unwrap();
    Session::new(config, catalog(), map, ScriptedRng::new(draws)).unwrap()
}

fn session(
    floors: &[&[&str]],
    draws: impl IntoIterator<Item = u32>,
) -> Session<FloorMap, ScriptedRng> {
    session_with(GameConfig::default(), floors, draws)
}

#[test]
fn hero_starts_on_the_revealed_start_tile() {
    let session = session(&[&["nns", "nnn"]], NO_DRAWS);
    assert_eq!(session.hero().position(), Position::new(2, 0));
    assert!(session.map().is_revealed(Position::new(2, 0)));
    assert_eq!(session.phase(), &Phase::Exploring);
    assert_eq!(session.floor(), 1);
    assert_eq!(session.hero().stats().max_hp(), 15);
    assert_eq!(session.hero().gold(), 10);
}

#[test]
fn walking_off_the_floor_is_blocked() {
    let mut session = session(&[&["sn"]], NO_DRAWS);
    let events = session.step(PlayerAction::Move(North)).unwrap();
    assert_eq!(events, vec![GameEvent::MoveBlocked { direction: North }]);
    assert_eq!(session.hero().position(), Position::ORIGIN);
    assert_eq!(session.turns(), 1);
}

#[test]
fn item_room_stores_a_drawn_item_and_clears_the_room() {
    let mut session = session(&[&["sn", "in"]], [3]);

    let events = session.step(PlayerAction::Move(CardinalDirection::South)).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::HeroMoved {
                from: Position::new(0, 0),
                to: Position::new(0, 1),
            },
            GameEvent::ItemPickedUp {
                item: Item::new("Heavy Shield", 20, "shield.png"),
            },
        ]
    );
    assert_eq!(session.hero().stats().max_hp(), 35);
    assert_eq!(session.hero().stats().hp(), 35);
    assert_eq!(session.map().tile(Position::new(0, 1)), Some(TileKind::Empty));
    assert_eq!(session.map().render(session.hero().position()), "sx\n*x");
}

#[test]
fn gold_bags_become_gold() {
    let mut session = session(&[&["si"]], [2]);
    let events = session.step(PlayerAction::Move(East)).unwrap();
    assert!(events.contains(&GameEvent::GoldCollected {
        amount: 25,
        total: 35
    }));
    assert!(session.hero().items().is_empty());
    assert_eq!(session.map().tile(Position::new(1, 0)), Some(TileKind::Empty));
}

#[test]
fn full_inventory_leaves_the_item_room_alone() {
    let mut session = session(&[&["siiiiii"]], [0, 0, 0, 0, 0]);
    for _ in 0..5 {
        session.step(PlayerAction::Move(East)).unwrap();
    }
    assert_eq!(session.hero().items().len(), 5);

    let events = session.step(PlayerAction::Move(East)).unwrap();

    assert!(events.contains(&GameEvent::ItemLeftBehind {
        position: Position::new(6, 0)
    }));
    assert_eq!(session.map().tile(Position::new(6, 0)), Some(TileKind::Item));
    assert_eq!(session.rng().remaining(), 0);
}

#[test]
fn monsters_strike_first_and_drop_their_reward() {
    // Orc, dagger reward, warrior coin, enemy rolls 3; hero then rolls 4
    let mut session = session(&[&["sm"]], [0, 0, 0, 3, 4]);

    let events = session.step(PlayerAction::Move(East)).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(
        events[1],
        GameEvent::EncounterStarted {
            name: "Orc".into(),
            level: 1,
            max_hp: 4,
            depth: 0,
            modifier: None,
        }
    );
    match &events[2] {
        GameEvent::EnemyAttacked { summary, hero_hp } => {
            assert_eq!(summary.to_string(), "The enemy hits you 1 time for 3 damage.");
            assert_eq!(*hero_hp, 12);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        events[3],
        GameEvent::HealthThresholdCrossed {
            threshold: HealthThreshold::Healthy,
            hp_percent: 80,
        }
    );
    assert!(matches!(session.phase(), Phase::Fighting(_)));

    let events = session.step(PlayerAction::Attack).unwrap();

    assert!(matches!(
        &events[0],
        GameEvent::HeroAttacked { enemy_hp: 0, summary } if summary.damage() == 4
    ));
    assert_eq!(events[1], GameEvent::EnemyDefeated { name: "Orc".into() });
    assert_eq!(
        events[2],
        GameEvent::ItemPickedUp {
            item: Item::new("Rusty Dagger", 2, "dagger.png"),
        }
    );
    assert_eq!(events.len(), 3);
    assert_eq!(session.phase(), &Phase::Exploring);
    assert_eq!(session.hero().stats().hp(), 14);
    assert_eq!(session.map().tile(Position::new(1, 0)), Some(TileKind::Empty));
    assert_eq!(session.rng().remaining(), 0);
}

#[test]
fn surviving_enemies_answer_every_round() {
    // Troll (5 HP) strikes for 1; hero hits for 2, troll answers 4; thunderclap 7 ends it
    let mut session = session(&[&["sm"]], [1, 0, 0, 1, 2, 4, 7]);
    session.step(PlayerAction::Move(East)).unwrap();

    let events = session.step(PlayerAction::Attack).unwrap();
    assert!(matches!(events[0], GameEvent::HeroAttacked { enemy_hp: 3, .. }));
    assert!(matches!(events[1], GameEvent::EnemyAttacked { hero_hp: 10, .. }));
    assert_eq!(
        events[2],
        GameEvent::HealthThresholdCrossed {
            threshold: HealthThreshold::Wounded,
            hp_percent: 66,
        }
    );

    let events = session.step(PlayerAction::Cast(Spell::Thunderclap)).unwrap();
    assert_eq!(
        events[0],
        GameEvent::SpellCast {
            spell: Spell::Thunderclap,
            damage: 7,
            enemy_hp: 0,
        }
    );
    assert_eq!(events[1], GameEvent::EnemyDefeated { name: "Troll".into() });
    assert_eq!(session.rng().remaining(), 0);
}

#[test]
fn decorated_enemies_strike_once_per_layer() {
    // Descend to level 2, then meet a goblin warlock: base roll 2, warlock band 75 fireball 3
    let mut session = session(&[&["sf"], &["sm"]], [2, 0, 1, 2, 75, 3]);
    session.step(PlayerAction::Move(East)).unwrap();
    // second floor places the hero on its monster room immediately
    assert!(matches!(session.phase(), Phase::Fighting(_)));
    let enemy = session.phase().enemy().unwrap();
    assert_eq!(enemy.stats().name(), "Goblin Warlock");
    assert_eq!(enemy.stats().max_hp(), 3);
    assert_eq!(session.hero().stats().hp(), 25 - 4 - 6);
    assert_eq!(session.rng().remaining(), 0);
}

#[test]
fn the_final_blow_ends_the_session() {
    let config = GameConfig {
        hero_max_hp: 3,
        ..GameConfig::default()
    };
    let mut session = session_with(config, &[&["sm"]], [0, 0, 0, 3]);

    let events = session.step(PlayerAction::Move(East)).unwrap();

    assert!(events.contains(&GameEvent::HeroDied { floor: 1, level: 1 }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::HealthThresholdCrossed {
            threshold: HealthThreshold::Dead,
            hp_percent: 0,
        })
    );
    assert!(session.is_over());
    assert_eq!(
        session.step(PlayerAction::Move(West)),
        Err(RuntimeError::Action(ActionError::HeroDead))
    );
}

#[test]
fn illegal_actions_leave_the_session_untouched() {
    let mut session = session(&[&["sm"]], [0, 0, 0, 1]);
    assert_eq!(
        session.step(PlayerAction::DrinkPotion),
        Err(RuntimeError::Action(ActionError::NotInCombat))
    );
    assert_eq!(
        session.step(PlayerAction::BuyPotion),
        Err(RuntimeError::Action(ActionError::NotInShop))
    );

    session.step(PlayerAction::Move(East)).unwrap();
    let hero = session.hero().clone();
    let phase = session.phase().clone();
    let turns = session.turns();

    assert_eq!(
        session.step(PlayerAction::DrinkPotion),
        Err(RuntimeError::Action(ActionError::NoPotion))
    );
    assert_eq!(
        session.step(PlayerAction::Move(West)),
        Err(RuntimeError::Action(ActionError::InCombat))
    );
    assert_eq!(
        session.step(PlayerAction::LeaveShop),
        Err(RuntimeError::Action(ActionError::InCombat))
    );
    assert_eq!(session.hero(), &hero);
    assert_eq!(session.phase(), &phase);
    assert_eq!(session.turns(), turns);
}

#[test]
fn fleeing_runs_to_a_random_neighbour() {
    // fight at (1, 0); open exits are south, east, west and the draw picks east
    let mut session = session(&[&["smn", "nnn"]], [0, 0, 0, 1, 1]);
    session.step(PlayerAction::Move(East)).unwrap();

    let events = session.step(PlayerAction::Flee).unwrap();

    assert_eq!(
        events[0],
        GameEvent::Fled {
            from: Position::new(1, 0),
            to: Position::new(2, 0),
        }
    );
    assert_eq!(session.phase(), &Phase::Exploring);
    assert_eq!(session.map().tile(Position::new(1, 0)), Some(TileKind::Monster));
}

#[test]
fn stairs_level_up_and_rotate_floors() {
    let mut session = session(&[&["sf"], &["fs"]], NO_DRAWS);

    let events = session.step(PlayerAction::Move(East)).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::HeroMoved {
                from: Position::new(0, 0),
                to: Position::new(1, 0),
            },
            GameEvent::FloorDescended {
                floor: 2,
                level: 2,
                max_hp: 25,
            },
        ]
    );
    assert_eq!(session.hero().stats().hp(), 25);
    assert_eq!(session.map().layout_number(), 2);
    assert_eq!(session.hero().position(), Position::new(1, 0));
    // arriving on the second floor's start does not open the shop
    assert_eq!(session.phase(), &Phase::Exploring);

    session.step(PlayerAction::Move(West)).unwrap();

    assert_eq!(session.floor(), 3);
    assert_eq!(session.map().layout_number(), 1);
    assert_eq!(session.hero().stats().level(), 3);
    assert_eq!(session.hero().stats().max_hp(), 35);
    assert_eq!(session.phase(), &Phase::Exploring);
}

#[test]
fn shop_buys_and_sells() {
    let config = GameConfig {
        starting_gold: 30,
        ..GameConfig::default()
    };
    let mut session = session_with(config, &[&["sn"]], NO_DRAWS);
    session.step(PlayerAction::Move(East)).unwrap();
    let events = session.step(PlayerAction::Move(West)).unwrap();
    assert_eq!(events.last(), Some(&GameEvent::ShopEntered));
    assert_eq!(session.phase(), &Phase::Shopping);

    let events = session.step(PlayerAction::BuyPotion).unwrap();
    assert_eq!(events, vec![GameEvent::PotionPurchased { price: 25, gold: 5 }]);
    assert!(session.hero().has_potion());

    let events = session.step(PlayerAction::BuyPotion).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::PurchaseRefused {
            reason: PurchaseRefusal::NotEnoughGold { price: 25, gold: 5 },
        }]
    );

    let events = session.step(PlayerAction::Sell(0)).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::ItemSold {
            item: Item::new(POTION_NAME, 25, "potion.png"),
            gold: 30,
        }]
    );

    assert_eq!(
        session.step(PlayerAction::Sell(3)),
        Err(RuntimeError::Inventory(InventoryError::SlotOutOfRange {
            index: 3,
            len: 0
        }))
    );
    let events = session.step(PlayerAction::SellNamed("Iron Helm".into())).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::SaleRefused {
            reason: SaleRefusal::NotHeld {
                name: "Iron Helm".into()
            },
        }]
    );

    let events = session.step(PlayerAction::LeaveShop).unwrap();
    assert_eq!(events, vec![GameEvent::ShopLeft]);
    assert_eq!(session.phase(), &Phase::Exploring);
}

#[test]
fn selling_load_bearing_gear_can_be_refused() {
    let draws = [
        3, // item room: heavy shield
        1, 0, 0, 4, // troll, dagger, warrior, first strike 4
        1, 4, 1, 4, 1, 4, 1, 4, // four rounds of 1 dealt, 4 taken
        0, // flee west, the only exit
    ];
    let mut session = session(&[&["sim"]], draws);
    session.step(PlayerAction::Move(East)).unwrap();
    session.step(PlayerAction::Move(East)).unwrap();
    for _ in 0..4 {
        session.step(PlayerAction::Attack).unwrap();
    }
    assert_eq!(session.hero().stats().hp(), 15);
    session.step(PlayerAction::Flee).unwrap();
    session.step(PlayerAction::Move(West)).unwrap();
    assert_eq!(session.phase(), &Phase::Shopping);

    let refused = GameEvent::SaleRefused {
        reason: SaleRefusal::Lethal {
            name: "Heavy Shield".into(),
        },
    };
    assert_eq!(
        session
            .step(PlayerAction::SellNamed("Heavy Shield".into()))
            .unwrap(),
        vec![refused.clone()]
    );
    assert_eq!(session.step(PlayerAction::Sell(0)).unwrap(), vec![refused]);
    assert_eq!(session.hero().items().len(), 1);
    assert_eq!(session.hero().gold(), 10);
    assert_eq!(session.rng().remaining(), 0);
}

#[test]
fn run_counts_accepted_and_rejected_actions() {
    let mut session = session(&[&["sn"]], NO_DRAWS);
    let mut provider = ScriptedProvider::new([
        PlayerAction::Move(North),
        PlayerAction::Attack,
        PlayerAction::Move(East),
    ]);
    let mut seen = Vec::new();

    let summary = session.run(&mut provider, 10, |event| seen.push(event.clone())).unwrap();

    assert_eq!(summary.steps, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.reason, StopReason::ProviderFinished);
    assert_eq!(seen.len(), 2);
}

#[test]
fn run_respects_the_step_limit() {
    let mut session = session(&[&["sn"]], NO_DRAWS);
    let mut provider = ScriptedProvider::new(vec![PlayerAction::Move(North); 5]);
    let summary = session.run(&mut provider, 3, |_| {}).unwrap();
    assert_eq!(summary.steps, 3);
    assert_eq!(summary.reason, StopReason::StepLimit);
    assert_eq!(provider.remaining(), 2);
}

#[test]
fn strike_breakdown_lists_layers_innermost_first() {
    let mut session = session(&[&["sf"], &["sm"]], [0, 0, 0, 1, 3]);
    let events = session.step(PlayerAction::Move(East)).unwrap();
    let summary = events
        .iter()
        .find_map(|event| match event {
            GameEvent::EnemyAttacked { summary, .. } => Some(summary.clone()),
            _ => None,
        })
        .unwrap();
    let kinds: Vec<_> = summary.report.strikes().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![AttackKind::Physical, AttackKind::Physical]);
    assert_eq!(summary.damage(), 2 + 6);
}

#[test]
fn autopilot_replays_identically_from_one_seed() {
    use game_content::ContentFactory;
    use runtime::AutopilotProvider;
    use std::path::Path;

    let factory =
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"));
    let play = |seed: u64| {
        let mut session = Session::from_content(
            factory.load_config().unwrap(),
            factory.load_items().unwrap(),
            factory.load_floors().unwrap(),
            seed,
        )
        .unwrap();
        let mut provider = AutopilotProvider::new(seed);
        let mut events = Vec::new();
        let summary = session
            .run(&mut provider, 500, |event| events.push(event.clone()))
            .unwrap();

        let stats = session.hero().stats();
        assert!(stats.hp() <= stats.max_hp());
        assert!(session.hero().items().len() <= GameConfig::MAX_INVENTORY_SLOTS);
        assert!(matches!(
            summary.reason,
            StopReason::HeroDied | StopReason::StepLimit
        ));
        (summary, events)
    };

    let (first, first_events) = play(0xD1CE);
    let (second, second_events) = play(0xD1CE);
    assert_eq!(first, second);
    assert_eq!(first_events, second_events);
    assert!(!first_events.is_empty());
}

#[test]
fn fight_actions_are_rejected_in_the_shop() {
    let mut session = session(&[&["sn"]], NO_DRAWS);
    session.step(PlayerAction::Move(East)).unwrap();
    session.step(PlayerAction::Move(West)).unwrap();
    assert_eq!(session.phase(), &Phase::Shopping);

    for action in [PlayerAction::Attack, PlayerAction::Flee, PlayerAction::DrinkPotion] {
        assert_eq!(
            session.step(action),
            Err(RuntimeError::Action(ActionError::NotInCombat))
        );
    }
    assert_eq!(session.phase(), &Phase::Shopping);
    assert_eq!(session.turns(), 2);
}
