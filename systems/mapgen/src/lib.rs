#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Procedural dungeon generator for Rift Delver.
//!
//! Generation runs in four synchronous stages, each driven by the same
//! seeded random stream: a backtracking random-walk carve produces a door
//! topology over the dungeon grid, the topology is matched against a fixed
//! catalog of room shapes, locked connections (blockades) are scattered over
//! the resulting rooms, and finally every blockade receives exactly one
//! unlock button placed in some other room. Identical seeds produce
//! identical dungeons.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use rift_delver_core::{BlockadeInfo, Direction, DirectionSet, RoomCoord};
use rift_delver_world::{DungeonState, Room};

/// Number of rows in the dungeon grid.
pub const DUNGEON_ROWS: u32 = 5;

/// Number of columns in the dungeon grid.
pub const DUNGEON_COLUMNS: u32 = 7;

/// Full-grid button placement sweeps attempted before giving up.
pub const MAX_PLACEMENT_SWEEPS: u32 = 1_000;

/// Tuning knobs controlling every random aspect of dungeon generation.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorTuning {
    /// One-in-N chance of pre-marking a cell as visited so the carve routes
    /// around it, biasing the dungeon toward corridors. Zero disables
    /// sparsity entirely.
    pub sparsity_one_in: u32,
    /// Percent chance per eligible room of sealing one of its doors behind a
    /// blockade.
    pub blockade_percent: u32,
    /// Percent chance per candidate room of accepting a button during a
    /// placement sweep.
    pub button_percent: u32,
}

impl Default for GeneratorTuning {
    fn default() -> Self {
        Self {
            sparsity_one_in: 20,
            blockade_percent: 35,
            button_percent: 35,
        }
    }
}

/// Door topology produced by the carve stage.
///
/// Each cell carries the set of doors opened toward its neighbours; cells the
/// carve never reached keep an empty set and are pruned during conversion.
#[derive(Clone, Debug)]
pub struct Topology {
    rows: u32,
    columns: u32,
    doors: Vec<DirectionSet>,
    boss: RoomCoord,
}

impl Topology {
    /// Number of rows in the topology grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the topology grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Coordinate of the designated boss cell.
    #[must_use]
    pub const fn boss_room(&self) -> RoomCoord {
        self.boss
    }

    /// Door set carved at the provided cell; empty outside the grid.
    #[must_use]
    pub fn doors(&self, coord: RoomCoord) -> DirectionSet {
        index_of(self.rows, self.columns, coord)
            .and_then(|index| self.doors.get(index).copied())
            .unwrap_or(DirectionSet::EMPTY)
    }
}

/// Catalog entry pairing a door signature with a concrete room template.
#[derive(Clone, Copy, Debug)]
pub struct RoomShape {
    symbol: char,
    name: &'static str,
    doors: DirectionSet,
}

impl RoomShape {
    /// Single-character symbol used in map representations.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Template name the room is instantiated from.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Door signature the template matches exactly.
    #[must_use]
    pub const fn doors(&self) -> DirectionSet {
        self.doors
    }
}

/// Fixed catalog of the fifteen non-empty door signatures.
///
/// Matching is exact and first-entry-wins; the catalog carries no duplicate
/// signatures, so the winner is unambiguous.
#[must_use]
pub fn room_catalog() -> &'static [RoomShape] {
    &ROOM_CATALOG
}

const ROOM_CATALOG: [RoomShape; 15] = [
    RoomShape {
        symbol: 'U',
        name: "1000-1",
        doors: DirectionSet::new(true, false, false, false),
    },
    RoomShape {
        symbol: 'D',
        name: "0100-1",
        doors: DirectionSet::new(false, true, false, false),
    },
    RoomShape {
        symbol: 'L',
        name: "0010-1",
        doors: DirectionSet::new(false, false, true, false),
    },
    RoomShape {
        symbol: 'R',
        name: "0001-1",
        doors: DirectionSet::new(false, false, false, true),
    },
    RoomShape {
        symbol: '║',
        name: "1100-1",
        doors: DirectionSet::new(true, true, false, false),
    },
    RoomShape {
        symbol: '╗',
        name: "0110-1",
        doors: DirectionSet::new(false, true, true, false),
    },
    RoomShape {
        symbol: '╚',
        name: "1001-1",
        doors: DirectionSet::new(true, false, false, true),
    },
    RoomShape {
        symbol: '╦',
        name: "0111-1",
        doors: DirectionSet::new(false, true, true, true),
    },
    RoomShape {
        symbol: '╣',
        name: "1110-1",
        doors: DirectionSet::new(true, true, true, false),
    },
    RoomShape {
        symbol: '╬',
        name: "1111-1",
        doors: DirectionSet::new(true, true, true, true),
    },
    RoomShape {
        symbol: '═',
        name: "0011-1",
        doors: DirectionSet::new(false, false, true, true),
    },
    RoomShape {
        symbol: '╝',
        name: "1010-1",
        doors: DirectionSet::new(true, false, true, false),
    },
    RoomShape {
        symbol: '╔',
        name: "0101-1",
        doors: DirectionSet::new(false, true, false, true),
    },
    RoomShape {
        symbol: '╩',
        name: "1011-1",
        doors: DirectionSet::new(true, false, true, true),
    },
    RoomShape {
        symbol: '╠',
        name: "1101-1",
        doors: DirectionSet::new(true, true, false, true),
    },
];

/// Errors surfaced by the bounded stages of dungeon generation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Button placement swept the grid repeatedly without finding a free
    /// room for every blockade.
    #[error("no free room found for {needed} unlock buttons after placing {placed}")]
    ButtonPlacementExhausted {
        /// Number of buttons the blockade list required.
        needed: usize,
        /// Number of buttons successfully placed before giving up.
        placed: usize,
    },
}

/// Seeded dungeon generator.
///
/// One generator instance owns a single random stream; generation never
/// overlaps a live simulation, so the stream needs no synchronisation.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    rng: ChaCha8Rng,
    tuning: GeneratorTuning,
}

impl MapGenerator {
    /// Creates a generator with default tuning from the provided seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, GeneratorTuning::default())
    }

    /// Creates a generator with explicit tuning from the provided seed.
    #[must_use]
    pub fn with_tuning(seed: u64, tuning: GeneratorTuning) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            tuning,
        }
    }

    /// Carves the dungeon's door topology.
    ///
    /// A fraction of cells off the start row and column are pre-marked
    /// visited for sparsity, the boss cell is linked to its left neighbour
    /// through a forced door pattern, and a backtracking random walk from
    /// the origin opens reciprocal doors between every pair of cells it
    /// moves across.
    pub fn generate(&mut self) -> Topology {
        let rows = DUNGEON_ROWS;
        let columns = DUNGEON_COLUMNS;
        let cell_count = (rows * columns) as usize;
        let mut doors = vec![DirectionSet::EMPTY; cell_count];
        let mut visited = vec![false; cell_count];

        if self.tuning.sparsity_one_in > 0 {
            for row in 0..rows {
                for column in 0..columns {
                    if row != 0
                        && column != 0
                        && self.rng.gen_range(0..self.tuning.sparsity_one_in) == 0
                    {
                        visited[cell_index(columns, row, column)] = true;
                    }
                }
            }
        }

        let boss_row = self.rng.gen_range(1..rows);
        let boss_column = self.rng.gen_range(columns / 2..columns);
        let boss = RoomCoord::new(boss_row, boss_column);

        // The boss cell is pre-visited so the carve never enters it; its one
        // corridor is forced instead: a left door into the cell beside it,
        // which in turn hangs off the cell above by a forced vertical pair.
        visited[cell_index(columns, boss_row, boss_column)] = true;
        doors[cell_index(columns, boss_row, boss_column)].insert(Direction::Left);
        doors[cell_index(columns, boss_row, boss_column - 1)].insert(Direction::Right);
        doors[cell_index(columns, boss_row, boss_column - 1)].insert(Direction::Up);
        doors[cell_index(columns, boss_row - 1, boss_column - 1)].insert(Direction::Down);

        let mut history: Vec<RoomCoord> = Vec::new();
        let mut row = 0;
        let mut column = 0;

        loop {
            visited[cell_index(columns, row, column)] = true;

            // Candidate moves in left, up, right, down order.
            let mut candidates: [Option<Direction>; 4] = [None; 4];
            let mut count = 0;
            if column > 0 && !visited[cell_index(columns, row, column - 1)] {
                candidates[count] = Some(Direction::Left);
                count += 1;
            }
            if row > 0 && !visited[cell_index(columns, row - 1, column)] {
                candidates[count] = Some(Direction::Up);
                count += 1;
            }
            if column < columns - 1 && !visited[cell_index(columns, row, column + 1)] {
                candidates[count] = Some(Direction::Right);
                count += 1;
            }
            if row < rows - 1 && !visited[cell_index(columns, row + 1, column)] {
                candidates[count] = Some(Direction::Down);
                count += 1;
            }

            if count > 0 {
                history.push(RoomCoord::new(row, column));
                let direction = candidates[self.rng.gen_range(0..count)]
                    .expect("candidate slots below count are always filled");

                doors[cell_index(columns, row, column)].insert(direction);
                match direction {
                    Direction::Left => column -= 1,
                    Direction::Up => row -= 1,
                    Direction::Right => column += 1,
                    Direction::Down => row += 1,
                }
                doors[cell_index(columns, row, column)].insert(direction.opposite());
            } else {
                let Some(back) = history.pop() else {
                    break;
                };
                row = back.row();
                column = back.column();
            }

            if history.is_empty() {
                break;
            }
        }

        log::debug!("carved topology with boss cell at ({boss_row}, {boss_column})");

        Topology {
            rows,
            columns,
            doors,
            boss,
        }
    }

    /// Materializes a topology into a dungeon of concrete rooms.
    ///
    /// Every cell's door signature is matched against the room catalog;
    /// cells with no doors match nothing and stay empty. The boss cell maps
    /// to the fixed boss template, whose single door faces left and whose
    /// right side starts blockaded.
    #[must_use]
    pub fn convert_map(&self, topology: &Topology, tileset: &str) -> DungeonState {
        let mut state = DungeonState::new(topology.rows(), topology.columns(), topology.boss_room());

        for row in 0..topology.rows() {
            for column in 0..topology.columns() {
                let coord = RoomCoord::new(row, column);

                if coord == topology.boss_room() {
                    let mut room = Room::new(
                        'J',
                        "boss",
                        tileset,
                        DirectionSet::new(false, false, true, false),
                    );
                    room.set_blockade(Direction::Right, true);
                    state.set_room(coord, room);
                    continue;
                }

                let signature = topology.doors(coord);
                if let Some(shape) = ROOM_CATALOG.iter().find(|shape| shape.doors == signature) {
                    let room = Room::new(shape.symbol, shape.name, tileset, shape.doors);
                    state.set_room(coord, room);
                }
            }
        }

        state
    }

    /// Seals a random selection of doors behind blockades.
    ///
    /// Each materialized non-boss room rolls once; winners pick uniformly
    /// among their open doors and the chosen edge is sealed symmetrically on
    /// both sides. Every sealed edge is recorded for button placement.
    pub fn generate_blockades(&mut self, state: &mut DungeonState) -> Vec<BlockadeInfo> {
        let mut blockades = Vec::new();

        for row in 0..state.rows() {
            for column in 0..state.columns() {
                let coord = RoomCoord::new(row, column);
                let Some(doors) = state.room(coord).map(Room::doors) else {
                    continue;
                };

                if coord == state.boss_room() {
                    continue;
                }
                if self.rng.gen_range(0..100) >= self.tuning.blockade_percent {
                    continue;
                }

                let open: Vec<Direction> = doors.directions().collect();
                if open.is_empty() {
                    continue;
                }
                let direction = open[self.rng.gen_range(0..open.len())];
                let Some(neighbor) = state.neighbor(coord, direction) else {
                    continue;
                };

                let blockade = BlockadeInfo::new(coord, neighbor, direction);
                state.set_blockade_pair(blockade, true);
                blockades.push(blockade);
            }
        }

        log::debug!("sealed {} connections behind blockades", blockades.len());
        blockades
    }

    /// Places exactly one unlock button per blockade.
    ///
    /// The grid is swept repeatedly; each free room accepts a button with
    /// the configured probability, and each placed button consumes one
    /// blockade drawn uniformly from the remaining pool. Sweeping stops once
    /// every blockade has a button, or fails after [`MAX_PLACEMENT_SWEEPS`]
    /// passes without exhausting the pool.
    pub fn generate_buttons(
        &mut self,
        state: &mut DungeonState,
        blockades: Vec<BlockadeInfo>,
    ) -> Result<usize, GenerationError> {
        let needed = blockades.len();
        let mut remaining = blockades;
        let mut placed = 0;
        let mut sweeps = 0;

        'placement: while !remaining.is_empty() {
            sweeps += 1;
            if sweeps > MAX_PLACEMENT_SWEEPS {
                return Err(GenerationError::ButtonPlacementExhausted { needed, placed });
            }

            for row in 0..state.rows() {
                for column in 0..state.columns() {
                    if remaining.is_empty() {
                        break 'placement;
                    }

                    let coord = RoomCoord::new(row, column);
                    let free = state
                        .room(coord)
                        .is_some_and(|room| !room.has_button());
                    if !free {
                        continue;
                    }

                    if self.rng.gen_range(0..100) < self.tuning.button_percent {
                        let chosen = self.rng.gen_range(0..remaining.len());
                        let blockade = remaining.remove(chosen);
                        if let Some(room) = state.room_mut(coord) {
                            room.place_button(blockade);
                            placed += 1;
                        }
                    }
                }
            }
        }

        log::debug!("placed {placed} unlock buttons over {sweeps} sweeps");
        Ok(placed)
    }
}

fn cell_index(columns: u32, row: u32, column: u32) -> usize {
    (row * columns + column) as usize
}

fn index_of(rows: u32, columns: u32, coord: RoomCoord) -> Option<usize> {
    (coord.row() < rows && coord.column() < columns)
        .then(|| cell_index(columns, coord.row(), coord.column()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_nonempty_signature_once() {
        assert_eq!(ROOM_CATALOG.len(), 15);

        for (index, shape) in ROOM_CATALOG.iter().enumerate() {
            assert!(!shape.doors.is_empty(), "catalog entries always have doors");
            for other in &ROOM_CATALOG[index + 1..] {
                assert_ne!(
                    shape.doors, other.doors,
                    "signatures {} and {} collide",
                    shape.name, other.name,
                );
            }
        }
    }

    #[test]
    fn double_corridor_signature_selects_its_template() {
        let signature = DirectionSet::new(false, false, true, true);
        let shape = ROOM_CATALOG
            .iter()
            .find(|shape| shape.doors == signature)
            .expect("left+right corridor exists in the catalog");
        assert_eq!(shape.name, "0011-1");
        assert_eq!(shape.symbol, '═');
    }

    #[test]
    fn boss_cell_lands_in_the_right_half_off_the_top_row() {
        for seed in 0..64 {
            let mut generator = MapGenerator::new(seed);
            let topology = generator.generate();
            let boss = topology.boss_room();

            assert!(boss.row() >= 1 && boss.row() < DUNGEON_ROWS);
            assert!(boss.column() >= DUNGEON_COLUMNS / 2 && boss.column() < DUNGEON_COLUMNS);
        }
    }

    #[test]
    fn carved_doors_are_reciprocal_in_topology() {
        let mut generator = MapGenerator::new(0x5eed);
        let topology = generator.generate();

        for row in 0..topology.rows() {
            for column in 0..topology.columns() {
                let coord = RoomCoord::new(row, column);
                for direction in topology.doors(coord).directions() {
                    let neighbor = match direction {
                        Direction::Up => RoomCoord::new(row.wrapping_sub(1), column),
                        Direction::Down => RoomCoord::new(row + 1, column),
                        Direction::Left => RoomCoord::new(row, column.wrapping_sub(1)),
                        Direction::Right => RoomCoord::new(row, column + 1),
                    };
                    assert!(
                        topology.doors(neighbor).contains(direction.opposite()),
                        "door at ({row}, {column}) toward {direction:?} has no reciprocal",
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_topology_lookups_are_empty() {
        let mut generator = MapGenerator::new(7);
        let topology = generator.generate();
        assert!(topology.doors(RoomCoord::new(99, 99)).is_empty());
    }
}
