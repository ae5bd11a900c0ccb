use std::collections::HashSet;

use rift_delver_core::{BlockadeInfo, Direction, DirectionSet, RoomCoord};
use rift_delver_system_mapgen::{
    room_catalog, GenerationError, GeneratorTuning, MapGenerator, DUNGEON_COLUMNS, DUNGEON_ROWS,
};
use rift_delver_world::{query, DungeonState};

const TILESET: &str = "ruins";

fn no_sparsity() -> GeneratorTuning {
    GeneratorTuning {
        sparsity_one_in: 0,
        ..GeneratorTuning::default()
    }
}

fn build_dungeon(seed: u64, tuning: GeneratorTuning) -> (DungeonState, Vec<BlockadeInfo>) {
    let mut generator = MapGenerator::with_tuning(seed, tuning);
    let topology = generator.generate();
    let mut state = generator.convert_map(&topology, TILESET);
    let blockades = generator.generate_blockades(&mut state);
    (state, blockades)
}

/// Depth-first walk over carved doors, ignoring blockade flags; blockades
/// are openable and do not change the dungeon's door topology.
fn reachable_rooms(state: &DungeonState, start: RoomCoord) -> HashSet<RoomCoord> {
    let mut reached = HashSet::new();
    let mut stack = vec![start];

    while let Some(coord) = stack.pop() {
        let Some(room) = state.room(coord) else {
            continue;
        };
        if !reached.insert(coord) {
            continue;
        }

        for direction in room.doors().directions() {
            if let Some(neighbor) = state.neighbor(coord, direction) {
                if state.room(neighbor).is_some() && !reached.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    reached
}

#[test]
fn identical_seeds_generate_identical_dungeons() {
    let (first_state, first_blockades) = build_dungeon(0x0dd5_eed5, GeneratorTuning::default());
    let (second_state, second_blockades) = build_dungeon(0x0dd5_eed5, GeneratorTuning::default());

    assert_eq!(
        query::map_representation(&first_state),
        query::map_representation(&second_state),
    );
    assert_eq!(first_blockades, second_blockades);
    assert_eq!(first_state.boss_room(), second_state.boss_room());
}

#[test]
fn full_carve_reaches_every_cell_and_the_boss() {
    for seed in 0..20 {
        let (state, _) = build_dungeon(seed, no_sparsity());

        assert_eq!(
            query::room_count(&state),
            (DUNGEON_ROWS * DUNGEON_COLUMNS) as usize,
            "a carve without sparsity materializes the whole grid (seed {seed})",
        );

        let reached = reachable_rooms(&state, RoomCoord::new(0, 0));
        assert!(
            reached.contains(&state.boss_room()),
            "boss room must be reachable from the origin (seed {seed})",
        );
    }
}

#[test]
fn boss_is_reachable_exactly_when_its_corridor_is() {
    for seed in 0..20 {
        let (state, _) = build_dungeon(seed, GeneratorTuning::default());
        let boss = state.boss_room();
        let corridor = RoomCoord::new(boss.row(), boss.column() - 1);

        assert!(state.room(boss).is_some(), "the boss cell always materializes");

        let reached = reachable_rooms(&state, RoomCoord::new(0, 0));
        assert_eq!(
            reached.contains(&boss),
            reached.contains(&corridor),
            "the forced left door ties the boss to its corridor room (seed {seed})",
        );
    }
}

#[test]
fn door_configurations_are_mutually_consistent() {
    for seed in 0..20 {
        let (state, _) = build_dungeon(seed, GeneratorTuning::default());

        for row in 0..state.rows() {
            for column in 0..state.columns() {
                let coord = RoomCoord::new(row, column);
                let Some(room) = state.room(coord) else {
                    continue;
                };

                for direction in room.doors().directions() {
                    let neighbor = state
                        .neighbor(coord, direction)
                        .expect("doors never point outside the grid");
                    let other = state
                        .room(neighbor)
                        .expect("doors never point at pruned cells");
                    assert!(
                        other.has_door(direction.opposite()),
                        "door at ({row}, {column}) toward {direction:?} lacks its reciprocal (seed {seed})",
                    );
                }
            }
        }
    }
}

#[test]
fn generated_rooms_match_the_catalog_exactly() {
    let (state, _) = build_dungeon(5, no_sparsity());

    for row in 0..state.rows() {
        for column in 0..state.columns() {
            let coord = RoomCoord::new(row, column);
            let Some(room) = state.room(coord) else {
                continue;
            };
            if room.is_boss() {
                continue;
            }

            let shape = room_catalog()
                .iter()
                .find(|shape| shape.doors() == room.doors())
                .expect("every materialized room has a catalog signature");
            assert_eq!(room.template_name(), shape.name());
            assert_eq!(room.symbol(), shape.symbol());
        }
    }
}

#[test]
fn every_blockade_gets_exactly_one_button() {
    for seed in 0..10 {
        let mut generator = MapGenerator::new(seed);
        let topology = generator.generate();
        let mut state = generator.convert_map(&topology, TILESET);
        let blockades = generator.generate_blockades(&mut state);

        let placed = generator
            .generate_buttons(&mut state, blockades.clone())
            .expect("a five-by-seven dungeon always has room for its buttons");

        assert_eq!(placed, blockades.len(), "button/blockade balance (seed {seed})");
        assert_eq!(query::button_count(&state), blockades.len());

        let mut button_blockades = HashSet::new();
        for row in 0..state.rows() {
            for column in 0..state.columns() {
                if let Some(room) = state.room(RoomCoord::new(row, column)) {
                    assert!(room.buttons().len() <= 1, "one button per room at most");
                    for button in room.buttons() {
                        assert!(
                            button_blockades.insert(button.blockade()),
                            "a blockade may be bound to only one button",
                        );
                    }
                }
            }
        }
        assert_eq!(
            button_blockades,
            blockades.iter().copied().collect::<HashSet<_>>(),
            "buttons must reference exactly the generated blockades (seed {seed})",
        );
    }
}

#[test]
fn blockades_seal_reciprocal_edges() {
    for seed in 0..10 {
        let (state, blockades) = build_dungeon(seed, GeneratorTuning::default());

        for blockade in &blockades {
            assert_eq!(
                state.neighbor(blockade.first(), blockade.direction()),
                Some(blockade.second()),
                "blockade edges join adjacent cells (seed {seed})",
            );

            let first = state.room(blockade.first()).expect("sealed rooms exist");
            let second = state.room(blockade.second()).expect("sealed rooms exist");
            assert!(first.has_blockade(blockade.direction()));
            assert!(second.has_blockade(blockade.direction().opposite()));
            assert!(
                first.has_door(blockade.direction()),
                "blockades only seal existing doors",
            );
        }
    }
}

#[test]
fn the_boss_room_is_locked_by_default() {
    let (state, _) = build_dungeon(3, GeneratorTuning::default());
    let boss = state.room(state.boss_room()).expect("boss room exists");

    assert!(boss.is_boss());
    assert_eq!(boss.template_name(), "boss");
    assert_eq!(boss.doors(), DirectionSet::new(false, false, true, false));
    assert!(boss.has_blockade(Direction::Right));
}

#[test]
fn button_placement_fails_cleanly_without_free_rooms() {
    let mut generator = MapGenerator::new(11);
    let mut state = DungeonState::new(1, 1, RoomCoord::new(0, 0));
    let orphan = BlockadeInfo::new(RoomCoord::new(0, 0), RoomCoord::new(0, 1), Direction::Right);

    let result = generator.generate_buttons(&mut state, vec![orphan]);

    assert_eq!(
        result,
        Err(GenerationError::ButtonPlacementExhausted {
            needed: 1,
            placed: 0,
        }),
    );
}

#[test]
fn map_representation_matches_grid_dimensions() {
    let (state, _) = build_dungeon(21, GeneratorTuning::default());
    let representation = query::map_representation(&state);
    let lines: Vec<&str> = representation.lines().collect();

    assert_eq!(lines.len(), DUNGEON_ROWS as usize);
    for line in &lines {
        assert_eq!(line.chars().count(), DUNGEON_COLUMNS as usize);
    }

    let boss = state.boss_room();
    let boss_line = lines[boss.row() as usize];
    assert_eq!(
        boss_line.chars().nth(boss.column() as usize),
        Some('J'),
        "the boss symbol appears at the boss cell",
    );
}
