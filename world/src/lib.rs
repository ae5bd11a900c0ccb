#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative room and dungeon state management for Rift Delver.
//!
//! The world owns what the systems merely consume: each room's tile grid and
//! dynamic bodies, the per-direction door and blockade flags, and the dungeon
//! grid assembled by the map generator. The physics resolver mutates bodies
//! through [`Room::simulation_parts_mut`] once per frame; the generator
//! populates a [`DungeonState`] once per dungeon. Blockade toggling rebuilds
//! the affected room's tiles wholesale and never edits them incrementally.

mod layout;

use rift_delver_core::{
    BlockadeInfo, Body, BodyId, BodyKind, CellCoord, Direction, DirectionSet, RoomCoord, TileKind,
    TILE_SIZE,
};

/// Number of tile columns in every room.
pub const ROOM_COLUMNS: u32 = 20;

/// Number of tile rows in every room.
pub const ROOM_ROWS: u32 = 15;

/// Dense grid of tile kinds owned by a room.
///
/// Every cell holds a kind; `Empty` fills all gaps so the grid is never
/// sparse. Out-of-bounds lookups return `None` and callers treat them as open
/// space.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Creates a grid of the provided dimensions filled with empty tiles.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            tiles: vec![TileKind::Empty; capacity],
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Kind stored at the provided cell, or `None` outside the grid.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<TileKind> {
        self.index(cell).and_then(|index| self.tiles.get(index).copied())
    }

    /// Replaces the kind stored at the provided cell; out of bounds is a no-op.
    pub fn set_tile(&mut self, cell: CellCoord, kind: TileKind) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.tiles.get_mut(index) {
                *slot = kind;
            }
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Button that unlocks exactly one blockade when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockButton {
    blockade: BlockadeInfo,
    pressed: bool,
}

impl UnlockButton {
    /// Creates an unpressed button bound to the provided blockade.
    #[must_use]
    pub const fn new(blockade: BlockadeInfo) -> Self {
        Self {
            blockade,
            pressed: false,
        }
    }

    /// Blockade this button clears when pressed.
    #[must_use]
    pub const fn blockade(&self) -> BlockadeInfo {
        self.blockade
    }

    /// Reports whether the button has already been pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// State of a single dungeon room.
///
/// A room carries its template identity, per-direction door and blockade
/// flags, an owned tile grid, and the ordered character and object body
/// lists the physics resolver walks each step. Characters always resolve
/// before objects.
#[derive(Clone, Debug)]
pub struct Room {
    symbol: char,
    template: String,
    tileset: String,
    doors: DirectionSet,
    openings: DirectionSet,
    blockades: DirectionSet,
    visited: bool,
    boss: bool,
    tiles: TileGrid,
    characters: Vec<Body>,
    objects: Vec<Body>,
    buttons: Vec<UnlockButton>,
    next_body: u32,
}

impl Room {
    /// Creates a new room from its template identity and door flags.
    #[must_use]
    pub fn new(symbol: char, template: &str, tileset: &str, doors: DirectionSet) -> Self {
        let boss = template == "boss";
        let tiles = layout::build_tiles(ROOM_COLUMNS, ROOM_ROWS, doors, DirectionSet::EMPTY, boss);
        Self {
            symbol,
            template: template.to_owned(),
            tileset: tileset.to_owned(),
            doors,
            openings: doors,
            blockades: DirectionSet::EMPTY,
            visited: false,
            boss,
            tiles,
            characters: Vec::new(),
            objects: Vec::new(),
            buttons: Vec::new(),
            next_body: 0,
        }
    }

    /// Single-character symbol used in map representations.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Name of the room template this room was instantiated from.
    #[must_use]
    pub fn template_name(&self) -> &str {
        &self.template
    }

    /// Name of the tileset the room renders with.
    #[must_use]
    pub fn tileset(&self) -> &str {
        &self.tileset
    }

    /// Directions that connect this room to its dungeon neighbours.
    #[must_use]
    pub const fn doors(&self) -> DirectionSet {
        self.doors
    }

    /// Reports whether a door exists toward the provided direction.
    #[must_use]
    pub const fn has_door(&self, direction: Direction) -> bool {
        self.doors.contains(direction)
    }

    /// Directions currently sealed by a blockade.
    #[must_use]
    pub const fn blockades(&self) -> DirectionSet {
        self.blockades
    }

    /// Reports whether the provided direction is sealed by a blockade.
    #[must_use]
    pub const fn has_blockade(&self, direction: Direction) -> bool {
        self.blockades.contains(direction)
    }

    /// Reports whether this room hosts the dungeon boss.
    #[must_use]
    pub const fn is_boss(&self) -> bool {
        self.boss
    }

    /// Reports whether the player has entered this room before.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Marks the room as visited or unvisited.
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Read-only access to the room's tile grid.
    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Sets or clears a blockade, rebuilding the tile grid wholesale.
    ///
    /// Setting a blockade also records the direction as a carved opening, so
    /// clearing it later leaves a passable exit even on sides that never had
    /// a door (the boss room's locked right exit relies on this).
    pub fn set_blockade(&mut self, direction: Direction, sealed: bool) {
        if sealed {
            self.openings.insert(direction);
            self.blockades.insert(direction);
        } else {
            self.blockades.remove(direction);
        }
        self.rebuild_tiles();
    }

    fn rebuild_tiles(&mut self) {
        log::trace!(
            "rebuilding tiles for room '{}' (blockades: {:?})",
            self.template,
            self.blockades
        );
        self.tiles = layout::build_tiles(
            ROOM_COLUMNS,
            ROOM_ROWS,
            self.openings,
            self.blockades,
            self.boss,
        );
    }

    /// Spawns a body of the provided kind and size at a position.
    ///
    /// Characters and flyers join the character list; objects join the
    /// object list resolved after all characters.
    pub fn spawn_body(&mut self, kind: BodyKind, x: f32, y: f32, width: u32, height: u32) -> BodyId {
        let id = BodyId::new(self.next_body);
        self.next_body += 1;
        let body = Body::new(id, kind, x, y, width, height);
        match kind {
            BodyKind::Character | BodyKind::Flyer => self.characters.push(body),
            BodyKind::Object => self.objects.push(body),
        }
        id
    }

    /// World position where entering bodies are set down.
    #[must_use]
    pub fn spawn_point(&self) -> (f32, f32) {
        (
            layout::SPAWN_CELL.column() as f32 * TILE_SIZE,
            layout::SPAWN_CELL.row() as f32 * TILE_SIZE,
        )
    }

    /// Characters inhabiting the room, in resolution order.
    #[must_use]
    pub fn characters(&self) -> &[Body] {
        &self.characters
    }

    /// Inert objects inhabiting the room, in resolution order.
    #[must_use]
    pub fn objects(&self) -> &[Body] {
        &self.objects
    }

    /// Looks up a body by identifier across both lists.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.characters
            .iter()
            .chain(self.objects.iter())
            .find(|body| body.id() == id)
    }

    /// Mutable lookup of a body by identifier across both lists.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.characters
            .iter_mut()
            .chain(self.objects.iter_mut())
            .find(|body| body.id() == id)
    }

    /// Splits the room into the parts a physics step needs at once:
    /// the tile grid plus mutable character and object lists.
    pub fn simulation_parts_mut(&mut self) -> (&TileGrid, &mut [Body], &mut [Body]) {
        (&self.tiles, &mut self.characters, &mut self.objects)
    }

    /// Places an unlock button for the provided blockade in this room.
    ///
    /// The button occupies the room's fixed button alcove as a one-cell
    /// object body.
    pub fn place_button(&mut self, blockade: BlockadeInfo) {
        let x = layout::BUTTON_CELL.column() as f32 * TILE_SIZE;
        let y = layout::BUTTON_CELL.row() as f32 * TILE_SIZE;
        let _ = self.spawn_body(BodyKind::Object, x, y, 32, 32);
        self.buttons.push(UnlockButton::new(blockade));
    }

    /// Reports whether the room already hosts an unlock button.
    #[must_use]
    pub fn has_button(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Unlock buttons placed in the room.
    #[must_use]
    pub fn buttons(&self) -> &[UnlockButton] {
        &self.buttons
    }
}

/// Authoritative state of one generated dungeon.
///
/// An explicit value object passed into systems by reference; there is no
/// ambient global map. Unreachable grid cells stay `None`. A new dungeon
/// replaces the whole state rather than mutating this one.
#[derive(Clone, Debug)]
pub struct DungeonState {
    rows: u32,
    columns: u32,
    rooms: Vec<Option<Room>>,
    boss: RoomCoord,
    current: RoomCoord,
}

impl DungeonState {
    /// Creates an empty dungeon grid with a designated boss cell.
    #[must_use]
    pub fn new(rows: u32, columns: u32, boss: RoomCoord) -> Self {
        let capacity_u64 = u64::from(rows) * u64::from(columns);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            rows,
            columns,
            rooms: vec![None; capacity],
            boss,
            current: RoomCoord::new(0, 0),
        }
    }

    /// Number of rows in the dungeon grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the dungeon grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Coordinate of the boss room.
    #[must_use]
    pub const fn boss_room(&self) -> RoomCoord {
        self.boss
    }

    /// Coordinate of the room the player currently occupies.
    #[must_use]
    pub const fn current_room(&self) -> RoomCoord {
        self.current
    }

    /// Moves the player marker to the provided room coordinate.
    pub fn set_current_room(&mut self, coord: RoomCoord) {
        self.current = coord;
    }

    /// Room stored at the provided coordinate, if any.
    #[must_use]
    pub fn room(&self, coord: RoomCoord) -> Option<&Room> {
        self.index(coord)
            .and_then(|index| self.rooms.get(index))
            .and_then(Option::as_ref)
    }

    /// Mutable access to the room stored at the provided coordinate.
    pub fn room_mut(&mut self, coord: RoomCoord) -> Option<&mut Room> {
        let index = self.index(coord)?;
        self.rooms.get_mut(index).and_then(Option::as_mut)
    }

    /// Installs a room at the provided coordinate, replacing any occupant.
    pub fn set_room(&mut self, coord: RoomCoord, room: Room) {
        if let Some(index) = self.index(coord) {
            if let Some(slot) = self.rooms.get_mut(index) {
                *slot = Some(room);
            }
        }
    }

    /// Coordinate of the neighbouring cell toward a direction, if in bounds.
    #[must_use]
    pub fn neighbor(&self, coord: RoomCoord, direction: Direction) -> Option<RoomCoord> {
        let (row, column) = (coord.row(), coord.column());
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| RoomCoord::new(row, column)),
            Direction::Down => {
                let row = row.checked_add(1)?;
                (row < self.rows).then(|| RoomCoord::new(row, column))
            }
            Direction::Left => column
                .checked_sub(1)
                .map(|column| RoomCoord::new(row, column)),
            Direction::Right => {
                let column = column.checked_add(1)?;
                (column < self.columns).then(|| RoomCoord::new(row, column))
            }
        }
    }

    /// Seals or clears a blockade on both sides of its edge symmetrically.
    ///
    /// Both affected rooms rebuild their tile grids. Missing rooms on either
    /// side degrade silently.
    pub fn set_blockade_pair(&mut self, blockade: BlockadeInfo, sealed: bool) {
        if let Some(room) = self.room_mut(blockade.first()) {
            room.set_blockade(blockade.direction(), sealed);
        }
        if let Some(room) = self.room_mut(blockade.second()) {
            room.set_blockade(blockade.direction().opposite(), sealed);
        }
    }

    /// Presses a button in a room, clearing its blockade on both sides.
    ///
    /// Returns `true` the first time the button is pressed and `false` for
    /// repeat presses or missing buttons; pressing is idempotent.
    pub fn press_button(&mut self, coord: RoomCoord, button: usize) -> bool {
        let blockade = {
            let Some(room) = self.room_mut(coord) else {
                return false;
            };
            let Some(slot) = room.buttons.get_mut(button) else {
                return false;
            };
            if slot.pressed {
                return false;
            }
            slot.pressed = true;
            slot.blockade
        };

        self.set_blockade_pair(blockade, false);
        true
    }

    fn index(&self, coord: RoomCoord) -> Option<usize> {
        if coord.row() < self.rows && coord.column() < self.columns {
            let row = usize::try_from(coord.row()).ok()?;
            let column = usize::try_from(coord.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Query functions that provide read-only access to dungeon state.
pub mod query {
    use super::{DungeonState, RoomCoord};

    /// Renders the dungeon grid as ASCII, one symbol per room and `.` for
    /// pruned cells, rows separated by newlines.
    #[must_use]
    pub fn map_representation(state: &DungeonState) -> String {
        let mut representation = String::new();
        for row in 0..state.rows() {
            for column in 0..state.columns() {
                match state.room(RoomCoord::new(row, column)) {
                    Some(room) => representation.push(room.symbol()),
                    None => representation.push('.'),
                }
            }
            representation.push('\n');
        }
        representation
    }

    /// Number of materialized rooms in the dungeon grid.
    #[must_use]
    pub fn room_count(state: &DungeonState) -> usize {
        let mut count = 0;
        for row in 0..state.rows() {
            for column in 0..state.columns() {
                if state.room(RoomCoord::new(row, column)).is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of unlock buttons placed across the dungeon.
    #[must_use]
    pub fn button_count(state: &DungeonState) -> usize {
        let mut count = 0;
        for row in 0..state.rows() {
            for column in 0..state.columns() {
                if let Some(room) = state.room(RoomCoord::new(row, column)) {
                    count += room.buttons().len();
                }
            }
        }
        count
    }
}
