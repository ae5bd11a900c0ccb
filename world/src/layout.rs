//! Deterministic room tile-layout builder used by the world crate.
//!
//! Rooms are built from their door and blockade flags alone, so toggling a
//! blockade can rebuild the grid wholesale and always arrive at the same
//! tiles. Openings are carved for every direction that carries a door or a
//! blockade; blockade overlays then seal the carved opening with solid tiles,
//! which is what makes a locked exit physically impassable until its button
//! clears the flag.

use rift_delver_core::{CellCoord, Direction, DirectionSet, TileKind};

use crate::TileGrid;

/// Cell where a room's unlock button rests when one is placed.
pub(crate) const BUTTON_CELL: CellCoord = CellCoord::new(16, 13);

/// Cell where entering bodies are set down, one tile above the floor.
pub(crate) const SPAWN_CELL: CellCoord = CellCoord::new(2, 13);

const UP_OPENING_COLUMNS: [u32; 2] = [9, 10];
const DOWN_OPENING_COLUMNS: [u32; 2] = [9, 10];
const SIDE_OPENING_ROWS: [u32; 4] = [10, 11, 12, 13];
const LADDER_COLUMN: u32 = 9;

pub(crate) fn build_tiles(
    columns: u32,
    rows: u32,
    openings: DirectionSet,
    blockades: DirectionSet,
    boss: bool,
) -> TileGrid {
    let mut tiles = TileGrid::new(columns, rows);

    fill_border(&mut tiles, columns, rows);

    for direction in Direction::ALL {
        if openings.contains(direction) || blockades.contains(direction) {
            carve_opening(&mut tiles, columns, rows, direction, TileKind::Empty);
        }
    }

    if openings.contains(Direction::Up) || blockades.contains(Direction::Up) {
        raise_ladder(&mut tiles, rows);
    }

    place_platforms(&mut tiles);

    if boss {
        place_spikes(&mut tiles, rows);
    }

    for direction in blockades.directions() {
        carve_opening(&mut tiles, columns, rows, direction, TileKind::Solid);
    }

    tiles
}

fn fill_border(tiles: &mut TileGrid, columns: u32, rows: u32) {
    for column in 0..columns {
        tiles.set_tile(CellCoord::new(column, 0), TileKind::Solid);
        tiles.set_tile(CellCoord::new(column, rows - 1), TileKind::Solid);
    }
    for row in 0..rows {
        tiles.set_tile(CellCoord::new(0, row), TileKind::Solid);
        tiles.set_tile(CellCoord::new(columns - 1, row), TileKind::Solid);
    }
}

fn carve_opening(
    tiles: &mut TileGrid,
    columns: u32,
    rows: u32,
    direction: Direction,
    kind: TileKind,
) {
    match direction {
        Direction::Up => {
            for column in UP_OPENING_COLUMNS {
                tiles.set_tile(CellCoord::new(column, 0), kind);
            }
        }
        Direction::Down => {
            for column in DOWN_OPENING_COLUMNS {
                tiles.set_tile(CellCoord::new(column, rows - 1), kind);
            }
        }
        Direction::Left => {
            for row in SIDE_OPENING_ROWS {
                tiles.set_tile(CellCoord::new(0, row), kind);
            }
        }
        Direction::Right => {
            for row in SIDE_OPENING_ROWS {
                tiles.set_tile(CellCoord::new(columns - 1, row), kind);
            }
        }
    }
}

fn raise_ladder(tiles: &mut TileGrid, rows: u32) {
    for row in 1..rows - 1 {
        tiles.set_tile(CellCoord::new(LADDER_COLUMN, row), TileKind::Ladder);
    }
}

fn place_platforms(tiles: &mut TileGrid) {
    for column in 4..=7 {
        tiles.set_tile(CellCoord::new(column, 10), TileKind::Platform);
    }
    for column in 12..=15 {
        tiles.set_tile(CellCoord::new(column, 7), TileKind::Platform);
    }
}

fn place_spikes(tiles: &mut TileGrid, rows: u32) {
    for column in 3..=5 {
        tiles.set_tile(CellCoord::new(column, rows - 2), TileKind::Damaging);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ROOM_COLUMNS, ROOM_ROWS};

    #[test]
    fn borders_are_solid_without_doors() {
        let tiles = build_tiles(
            ROOM_COLUMNS,
            ROOM_ROWS,
            DirectionSet::EMPTY,
            DirectionSet::EMPTY,
            false,
        );

        assert_eq!(tiles.tile(CellCoord::new(0, 11)), Some(TileKind::Solid));
        assert_eq!(
            tiles.tile(CellCoord::new(ROOM_COLUMNS - 1, 11)),
            Some(TileKind::Solid)
        );
        assert_eq!(tiles.tile(CellCoord::new(9, 0)), Some(TileKind::Solid));
        assert_eq!(
            tiles.tile(CellCoord::new(9, ROOM_ROWS - 1)),
            Some(TileKind::Solid)
        );
    }

    #[test]
    fn doors_carve_their_openings() {
        let doors = DirectionSet::new(true, false, true, false);
        let tiles = build_tiles(ROOM_COLUMNS, ROOM_ROWS, doors, DirectionSet::EMPTY, false);

        assert_eq!(tiles.tile(CellCoord::new(9, 0)), Some(TileKind::Empty));
        assert_eq!(tiles.tile(CellCoord::new(0, 11)), Some(TileKind::Empty));
        assert_eq!(
            tiles.tile(CellCoord::new(ROOM_COLUMNS - 1, 11)),
            Some(TileKind::Solid),
            "an absent door leaves its wall intact",
        );
    }

    #[test]
    fn up_doors_come_with_a_ladder_shaft() {
        let doors = DirectionSet::new(true, false, false, false);
        let tiles = build_tiles(ROOM_COLUMNS, ROOM_ROWS, doors, DirectionSet::EMPTY, false);

        for row in 1..ROOM_ROWS - 1 {
            assert_eq!(
                tiles.tile(CellCoord::new(9, row)),
                Some(TileKind::Ladder),
                "ladder shaft missing at row {row}",
            );
        }
    }

    #[test]
    fn blockades_seal_their_openings() {
        let doors = DirectionSet::new(false, false, true, false);
        let blockades = DirectionSet::new(false, false, true, false);
        let tiles = build_tiles(ROOM_COLUMNS, ROOM_ROWS, doors, blockades, false);

        for row in SIDE_OPENING_ROWS {
            assert_eq!(tiles.tile(CellCoord::new(0, row)), Some(TileKind::Solid));
        }
    }

    #[test]
    fn blockades_without_doors_still_have_sealed_openings() {
        let blockades = DirectionSet::new(false, false, false, true);
        let tiles = build_tiles(
            ROOM_COLUMNS,
            ROOM_ROWS,
            DirectionSet::EMPTY,
            blockades,
            true,
        );

        for row in SIDE_OPENING_ROWS {
            assert_eq!(
                tiles.tile(CellCoord::new(ROOM_COLUMNS - 1, row)),
                Some(TileKind::Solid)
            );
        }
    }

    #[test]
    fn boss_rooms_carry_a_spike_strip() {
        let tiles = build_tiles(
            ROOM_COLUMNS,
            ROOM_ROWS,
            DirectionSet::new(false, false, true, false),
            DirectionSet::EMPTY,
            true,
        );

        for column in 3..=5 {
            assert_eq!(
                tiles.tile(CellCoord::new(column, ROOM_ROWS - 2)),
                Some(TileKind::Damaging)
            );
        }
    }
}
