#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Rift Delver engine.
//!
//! This crate defines the vocabulary that connects the authoritative world,
//! the physics resolver, and the dungeon generator: axis-aligned collision
//! rectangles, tile capabilities, door and blockade direction sets, grid
//! coordinates, and the dynamic-object state the resolver mutates in place.
//! Everything here is pure data; all behaviour lives in the systems that
//! consume these types.

use serde::{Deserialize, Serialize};

/// Side length of a single square tile expressed in world units.
pub const TILE_SIZE: f32 = 32.0;

/// Default terminal fall velocity applied to newly created bodies.
pub const DEFAULT_MAX_FALL_SPEED: f32 = 0.75;

/// Default life points assigned to newly created bodies.
pub const DEFAULT_LIFE_POINTS: i32 = 300;

/// Vertical velocity applied when a grounded body jumps.
pub const JUMP_VELOCITY: f32 = -0.8;

/// Vertical velocity applied while a climbing body moves along a ladder.
pub const CLIMB_VELOCITY: f32 = 0.12;

/// Location of a single tile cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new tile cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Location of a room within the dungeon grid, expressed as row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomCoord {
    row: u32,
    column: u32,
}

impl RoomCoord {
    /// Creates a new dungeon grid coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the room within the dungeon grid.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the room within the dungeon grid.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Cardinal directions used for doors, blockades and dungeon navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing dungeon row indices.
    Up,
    /// Toward increasing dungeon row indices.
    Down,
    /// Toward decreasing dungeon column indices.
    Left,
    /// Toward increasing dungeon column indices.
    Right,
}

impl Direction {
    /// Every direction in the canonical up, down, left, right order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Set of cardinal directions describing a room's doors or blockades.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl DirectionSet {
    /// The set containing no directions.
    pub const EMPTY: DirectionSet = DirectionSet::new(false, false, false, false);

    /// Creates a set from explicit per-direction flags.
    #[must_use]
    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Reports whether the set contains the provided direction.
    #[must_use]
    pub const fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Adds the provided direction to the set.
    pub fn insert(&mut self, direction: Direction) {
        self.set(direction, true);
    }

    /// Removes the provided direction from the set.
    pub fn remove(&mut self, direction: Direction) {
        self.set(direction, false);
    }

    fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Up => self.up = value,
            Direction::Down => self.down = value,
            Direction::Left => self.left = value,
            Direction::Right => self.right = value,
        }
    }

    /// Reports whether the set contains no directions at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Number of directions contained in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.up as usize + self.down as usize + self.left as usize + self.right as usize
    }

    /// Iterator over the contained directions in up, down, left, right order.
    #[must_use]
    pub fn directions(&self) -> DirectionIter {
        let mut iter = DirectionIter::default();
        for direction in Direction::ALL {
            if self.contains(direction) {
                iter.push(direction);
            }
        }
        iter
    }
}

/// Iterator over the directions stored in a [`DirectionSet`].
#[derive(Clone, Debug, Default)]
pub struct DirectionIter {
    buffer: [Option<Direction>; 4],
    len: usize,
    cursor: usize,
}

impl DirectionIter {
    fn push(&mut self, direction: Direction) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(direction);
            self.len += 1;
        }
    }
}

impl Iterator for DirectionIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }
}

/// Kinds of tiles that compose a room's collision grid.
///
/// Tiles are pure data queried by the physics resolver; no variant performs
/// any movement or damage handling itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Open space without any collision shape.
    #[default]
    Empty,
    /// Full-cell blocking tile; restrictive collisions from every side.
    Solid,
    /// One-way tile that blocks only bodies approaching from above.
    Platform,
    /// Climbable tile without a collision shape.
    Ladder,
    /// Blocking tile that damages characters resting on it.
    Damaging,
}

impl TileKind {
    /// Returns the tile's full-cell blocking rectangle, if it has one.
    ///
    /// Solid, platform and damaging tiles occupy exactly one grid cell at
    /// `(column * TILE_SIZE, row * TILE_SIZE)`. Empty and ladder tiles report
    /// no shape and are treated as open space by the resolver.
    #[must_use]
    pub fn blocking_shape(self, cell: CellCoord) -> Option<BoundingRectangle> {
        match self {
            Self::Solid | Self::Platform | Self::Damaging => Some(BoundingRectangle::new(
                cell.column() as f32 * TILE_SIZE,
                cell.row() as f32 * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE,
            )),
            Self::Empty | Self::Ladder => None,
        }
    }

    /// Reports whether the tile only blocks bodies approaching from above.
    #[must_use]
    pub const fn blocks_only_from_above(self) -> bool {
        matches!(self, Self::Platform)
    }

    /// Reports whether bodies overlapping the tile may climb.
    #[must_use]
    pub const fn is_climbable(self) -> bool {
        matches!(self, Self::Ladder)
    }

    /// Life points removed from a character per contact step.
    #[must_use]
    pub const fn contact_damage(self) -> i32 {
        match self {
            Self::Damaging => 10,
            _ => 0,
        }
    }
}

/// Collision unit with rectangular shape that is always aligned on both axes.
///
/// The rectangle never rotates. Its width and height stay fixed for the
/// lifetime of the instance; bodies that change dimensions replace the
/// rectangle wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl BoundingRectangle {
    /// Creates a new rectangle anchored at the provided upper-left corner.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position of the rectangle's left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the rectangle's top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Width of the rectangle in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Vertical position of the rectangle's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal position of the rectangle's right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Sets the absolute position of the rectangle.
    pub fn update_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Applies a relative offset to the rectangle's position.
    ///
    /// Probe code offsets a rectangle transiently and always pairs the call
    /// with the inverse offset afterwards; no persistent mutation escapes
    /// that scope.
    pub fn move_position(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns a copy of the rectangle shifted by the provided offset.
    #[must_use]
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.move_position(dx, dy);
        self
    }

    /// Reports whether two rectangles overlap, edges included.
    ///
    /// A collision happens when none of these hold: the other rectangle lies
    /// entirely to the right, entirely to the left, entirely below, or
    /// entirely above this one. Rectangles that merely touch count as
    /// overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &BoundingRectangle) -> bool {
        !(other.x > self.x + self.width
            || other.x + other.width < self.x
            || other.y > self.y + self.height
            || other.y + other.height < self.y)
    }

    /// Iterator over the grid cells the rectangle's span covers.
    ///
    /// The span starts at the rectangle's minimum corner rounded down to the
    /// nearest tile boundary and runs inclusive of the maximum corner. Cells
    /// outside the `columns × rows` grid are skipped silently; grid
    /// boundaries are soft.
    #[must_use]
    pub fn occupied_cells(&self, columns: u32, rows: u32) -> CellSpan {
        let first_column = floor_to_cell(self.x);
        let last_column = last_covered_cell(self.x + self.width);
        let first_row = floor_to_cell(self.y);
        let last_row = last_covered_cell(self.y + self.height);
        CellSpan::new(
            first_column,
            last_column,
            first_row,
            last_row,
            columns,
            rows,
        )
    }

    /// Iterator over the single row of cells directly below the rectangle.
    ///
    /// The probe row sits one unit under the bottom edge, at
    /// `y + height + 1`. When that row falls outside the grid vertically the
    /// span is empty.
    #[must_use]
    pub fn ground_cells(&self, columns: u32, rows: u32) -> CellSpan {
        let first_column = floor_to_cell(self.x);
        let last_column = last_covered_cell(self.x + self.width);
        let probe_edge = self.y + self.height + 1.0;

        if probe_edge < 0.0 {
            return CellSpan::empty(columns, rows);
        }

        let row = (probe_edge as i64).div_euclid(TILE_SIZE as i64);
        if row >= i64::from(rows) {
            return CellSpan::empty(columns, rows);
        }

        CellSpan::new(first_column, last_column, row, row, columns, rows)
    }
}

fn floor_to_cell(coordinate: f32) -> i64 {
    (coordinate.floor() as i64).div_euclid(TILE_SIZE as i64)
}

fn last_covered_cell(edge: f32) -> i64 {
    ((edge / TILE_SIZE).floor()) as i64
}

/// Iterator over the in-bounds grid cells covered by a rectangle span.
#[derive(Clone, Debug)]
pub struct CellSpan {
    column: i64,
    row: i64,
    first_row: i64,
    last_column: i64,
    last_row: i64,
    columns: i64,
    rows: i64,
}

impl CellSpan {
    fn new(
        first_column: i64,
        last_column: i64,
        first_row: i64,
        last_row: i64,
        columns: u32,
        rows: u32,
    ) -> Self {
        Self {
            column: first_column,
            row: first_row,
            first_row,
            last_column,
            last_row,
            columns: i64::from(columns),
            rows: i64::from(rows),
        }
    }

    fn empty(columns: u32, rows: u32) -> Self {
        Self::new(0, -1, 0, -1, columns, rows)
    }
}

impl Iterator for CellSpan {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.column > self.last_column {
                return None;
            }

            if self.row > self.last_row {
                self.column += 1;
                self.row = self.first_row;
                continue;
            }

            let column = self.column;
            let row = self.row;
            self.row += 1;

            if column < 0 || column >= self.columns || row < 0 || row >= self.rows {
                continue;
            }

            return Some(CellCoord::new(column as u32, row as u32));
        }
    }
}

/// Unique identifier assigned to a dynamic body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(u32);

impl BodyId {
    /// Creates a new body identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Classification of a dynamic body, fixing how the resolver treats it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Walking character; decelerates when undriven and may climb ladders.
    Character,
    /// Airborne character; keeps its platform drop-through flag permanently
    /// once set, since its drop is a semantic choice rather than a contact
    /// refresh.
    Flyer,
    /// Inert object; integrated after all characters each step.
    Object,
}

/// State of a dynamic object consumed and mutated by the physics resolver.
///
/// The resolver updates position, velocity and the ground flag once per
/// step; it never owns the body. The owning room decides lifetime and
/// ordering.
#[derive(Clone, Debug)]
pub struct Body {
    id: BodyId,
    kind: BodyKind,
    x: f32,
    y: f32,
    width: u32,
    height: u32,
    x_velocity: f32,
    y_velocity: f32,
    max_fall_speed: f32,
    acceleration: f32,
    deceleration: f32,
    max_speed: f32,
    moving: bool,
    on_ground: bool,
    ignores_collisions: bool,
    ignores_platforms: bool,
    ignores_gravity: bool,
    can_climb: bool,
    climbing: bool,
    life: i32,
    bounds: BoundingRectangle,
}

impl Body {
    /// Creates a new body at the provided position with the provided size.
    #[must_use]
    pub fn new(id: BodyId, kind: BodyKind, x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            width,
            height,
            x_velocity: 0.0,
            y_velocity: 0.0,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
            acceleration: 1.0,
            deceleration: 1.0,
            max_speed: 1.0,
            moving: false,
            on_ground: true,
            ignores_collisions: false,
            ignores_platforms: false,
            ignores_gravity: false,
            can_climb: false,
            climbing: false,
            life: DEFAULT_LIFE_POINTS,
            bounds: BoundingRectangle::new(x, y, width as f32, height as f32),
        }
    }

    /// Identifier assigned to the body by its owning room.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// Classification fixing how the resolver treats the body.
    #[must_use]
    pub const fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Horizontal position of the body's upper-left corner.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the body's upper-left corner.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Sets the horizontal position, keeping the collision bounds in sync.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.bounds.update_position(self.x, self.y);
    }

    /// Sets the vertical position, keeping the collision bounds in sync.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
        self.bounds.update_position(self.x, self.y);
    }

    /// Width of the body in world units.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the body in world units.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Replaces the body's dimensions, rebuilding the collision bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.bounds = BoundingRectangle::new(self.x, self.y, width as f32, height as f32);
    }

    /// Copy of the body's collision rectangle.
    #[must_use]
    pub const fn bounds(&self) -> BoundingRectangle {
        self.bounds
    }

    /// Current horizontal velocity in world units per millisecond.
    #[must_use]
    pub const fn x_velocity(&self) -> f32 {
        self.x_velocity
    }

    /// Sets the horizontal velocity.
    pub fn set_x_velocity(&mut self, velocity: f32) {
        self.x_velocity = velocity;
    }

    /// Current vertical velocity in world units per millisecond.
    #[must_use]
    pub const fn y_velocity(&self) -> f32 {
        self.y_velocity
    }

    /// Sets the vertical velocity.
    pub fn set_y_velocity(&mut self, velocity: f32) {
        self.y_velocity = velocity;
    }

    /// Terminal fall velocity the resolver never accelerates past.
    #[must_use]
    pub const fn max_fall_speed(&self) -> f32 {
        self.max_fall_speed
    }

    /// Configures the terminal fall velocity.
    pub fn set_max_fall_speed(&mut self, speed: f32) {
        self.max_fall_speed = speed;
    }

    /// Configures the locomotion tuning used by the drive helpers.
    pub fn set_locomotion(&mut self, acceleration: f32, deceleration: f32, max_speed: f32) {
        self.acceleration = acceleration;
        self.deceleration = deceleration;
        self.max_speed = max_speed;
    }

    /// Reports whether the body is actively being driven this frame.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.moving
    }

    /// Marks the body as driven or undriven for the current frame.
    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    /// Reports whether the body rested on ground after the last step.
    #[must_use]
    pub const fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    /// Records the ground-contact state for the current step.
    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    /// Reports whether the body bypasses all tile collisions.
    #[must_use]
    pub const fn ignores_collisions(&self) -> bool {
        self.ignores_collisions
    }

    /// Configures whether the body bypasses all tile collisions.
    pub fn set_ignores_collisions(&mut self, ignores: bool) {
        self.ignores_collisions = ignores;
    }

    /// Reports whether the body is currently dropping through platforms.
    #[must_use]
    pub const fn ignores_platforms(&self) -> bool {
        self.ignores_platforms
    }

    /// Configures the transient platform drop-through flag.
    pub fn set_ignores_platforms(&mut self, ignores: bool) {
        self.ignores_platforms = ignores;
    }

    /// Reports whether gravity is suspended for the body.
    #[must_use]
    pub const fn ignores_gravity(&self) -> bool {
        self.ignores_gravity
    }

    /// Configures whether gravity is suspended for the body.
    pub fn set_ignores_gravity(&mut self, ignores: bool) {
        self.ignores_gravity = ignores;
    }

    /// Reports whether the body is currently overlapping a ladder.
    #[must_use]
    pub const fn can_climb(&self) -> bool {
        self.can_climb
    }

    /// Records whether a ladder is within reach this step.
    pub fn set_can_climb(&mut self, can_climb: bool) {
        self.can_climb = can_climb;
    }

    /// Reports whether the body is in the climbing state.
    #[must_use]
    pub const fn is_climbing(&self) -> bool {
        self.climbing
    }

    /// Sets or clears the climbing state without touching gravity.
    pub fn set_climbing(&mut self, climbing: bool) {
        self.climbing = climbing;
    }

    /// Remaining life points.
    #[must_use]
    pub const fn life(&self) -> i32 {
        self.life
    }

    /// Accelerates the body downward by the gravity increment.
    ///
    /// Acceleration stops at the configured terminal fall velocity; an
    /// increment that would exceed it is clamped to the cap instead.
    pub fn apply_gravity(&mut self, amount: f32) {
        if self.y_velocity < self.max_fall_speed {
            self.y_velocity += amount;
            if self.y_velocity > self.max_fall_speed {
                self.y_velocity = self.max_fall_speed;
            }
        }
    }

    /// Decays the horizontal velocity toward zero for an undriven body.
    ///
    /// The velocity never overshoots past zero.
    pub fn decelerate(&mut self, delta_ms: f32) {
        if self.x_velocity > 0.0 {
            self.x_velocity -= self.deceleration * delta_ms;
            if self.x_velocity < 0.0 {
                self.x_velocity = 0.0;
            }
        } else if self.x_velocity < 0.0 {
            self.x_velocity += self.deceleration * delta_ms;
            if self.x_velocity > 0.0 {
                self.x_velocity = 0.0;
            }
        }
    }

    /// Drives the body leftward, clamped at the configured maximum speed.
    pub fn accelerate_left(&mut self, delta_ms: f32) {
        self.moving = true;
        if self.x_velocity - self.acceleration * delta_ms < -self.max_speed {
            self.x_velocity = -self.max_speed;
        } else {
            self.x_velocity -= self.acceleration * delta_ms;
        }
    }

    /// Drives the body rightward, clamped at the configured maximum speed.
    pub fn accelerate_right(&mut self, delta_ms: f32) {
        self.moving = true;
        if self.x_velocity + self.acceleration * delta_ms > self.max_speed {
            self.x_velocity = self.max_speed;
        } else {
            self.x_velocity += self.acceleration * delta_ms;
        }
    }

    /// Launches the body upward if it rests on ground with no vertical motion.
    pub fn jump(&mut self) {
        if self.on_ground && self.y_velocity == 0.0 {
            self.y_velocity = JUMP_VELOCITY;
        }
    }

    /// Enters the climbing state, suspending gravity.
    pub fn begin_climb(&mut self) {
        self.climbing = true;
        self.ignores_gravity = true;
    }

    /// Moves the climbing body upward along the ladder.
    pub fn climb_up(&mut self) {
        self.y_velocity = -CLIMB_VELOCITY;
    }

    /// Moves the climbing body downward along the ladder.
    pub fn climb_down(&mut self) {
        self.y_velocity = CLIMB_VELOCITY;
    }

    /// Requests a one-shot drop through the platform under the body.
    pub fn drop_through(&mut self) {
        self.ignores_platforms = true;
    }

    /// Removes life points, flooring the total at zero.
    pub fn take_hit(&mut self, damage: i32) {
        if self.life - damage <= 0 {
            self.life = 0;
        } else {
            self.life -= damage;
        }
    }
}

/// Record of a locked connection between two adjacent dungeon rooms.
///
/// The direction is relative to the first room. Blockade records are consumed
/// immediately by button placement and are not persisted beyond generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockadeInfo {
    first: RoomCoord,
    second: RoomCoord,
    direction: Direction,
}

impl BlockadeInfo {
    /// Creates a blockade record between two rooms.
    #[must_use]
    pub const fn new(first: RoomCoord, second: RoomCoord, direction: Direction) -> Self {
        Self {
            first,
            second,
            direction,
        }
    }

    /// Coordinate of the room the blockade direction is relative to.
    #[must_use]
    pub const fn first(&self) -> RoomCoord {
        self.first
    }

    /// Coordinate of the room on the far side of the locked edge.
    #[must_use]
    pub const fn second(&self) -> RoomCoord {
        self.second
    }

    /// Direction of the locked edge as seen from the first room.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}
