#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Swept tile-collision physics resolver for Rift Delver rooms.
//!
//! The resolver is invoked synchronously once per frame and walks every
//! dynamic body in its room (characters first, then inert objects) through
//! deceleration, gravity, swept movement against the tile grid, platform
//! drop-through handling, climbing, and damaging-tile contact. Displacement
//! is decomposed into slope-ratio unit steps so that fast bodies cannot
//! tunnel through one-cell walls during frame drops. Grid boundaries are
//! soft: anything outside the grid counts as open space, and no error ever
//! surfaces from a step.

use std::time::Duration;

use rift_delver_core::{Body, BodyKind, BoundingRectangle, TileKind};
use rift_delver_world::{Room, TileGrid};

/// Gravity acceleration applied to airborne bodies, in units per ms².
pub const BASE_GRAVITY: f32 = 0.003;

/// Vertical band below a platform's top within which feet are corrected
/// upward, in world units.
const PLATFORM_SNAP_TOLERANCE: f32 = 4.0;

/// Per-room physics resolver.
///
/// The resolver holds only its gravity constant; all mutable state lives in
/// the bodies it updates. It never owns the room or its bodies.
#[derive(Clone, Copy, Debug)]
pub struct Physics {
    gravity: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(BASE_GRAVITY)
    }
}

impl Physics {
    /// Creates a resolver with a custom gravity acceleration.
    #[must_use]
    pub const fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Applies one frame of physics to every body in the room.
    ///
    /// Characters resolve before objects. Positions, velocities and the
    /// ground flags are mutated in place; nothing is returned and nothing
    /// fails.
    pub fn step(&self, room: &mut Room, delta: Duration) {
        let delta_ms = delta.as_secs_f32() * 1000.0;
        let (tiles, characters, objects) = room.simulation_parts_mut();

        for body in characters.iter_mut() {
            if !body.is_moving() {
                body.decelerate(delta_ms);
            }

            self.integrate(body, tiles, delta_ms);

            if !body.ignores_collisions() && rests_on_damaging(body, tiles) {
                body.take_hit(TileKind::Damaging.contact_damage());
            }

            if body.kind() == BodyKind::Character {
                if touches_ladder(body, tiles) {
                    body.set_can_climb(true);
                } else {
                    // Off the ladder nothing may keep gravity suspended.
                    body.set_can_climb(false);
                    body.set_ignores_gravity(false);
                    body.set_climbing(false);
                }
            }
        }

        for body in objects.iter_mut() {
            self.integrate(body, tiles, delta_ms);
        }
    }

    /// Gravity, ground state and swept movement shared by every body kind.
    fn integrate(&self, body: &mut Body, tiles: &TileGrid, delta_ms: f32) {
        // The drop-through flag only exists to let a body step down through
        // one platform; it self-clears the moment the body leaves platform
        // contact. Flyers keep it permanently once set.
        if !rests_on_platform(body, tiles) && body.kind() != BodyKind::Flyer {
            body.set_ignores_platforms(false);
        }

        if body.ignores_platforms() {
            // Pretend the body is airborne so gravity carries it through.
            body.set_on_ground(false);
        } else {
            let grounded = rests_on_ground(body, tiles);
            body.set_on_ground(grounded);
        }

        if !body.ignores_gravity() {
            if !body.is_on_ground() || body.y_velocity() < 0.0 {
                body.apply_gravity(self.gravity * delta_ms);
            } else {
                body.set_y_velocity(0.0);
            }
        }

        let mut x_movement = body.x_velocity() * delta_ms;
        let mut y_movement = body.y_velocity() * delta_ms;
        let (mut step_x, mut step_y) = step_sizes(x_movement, y_movement);

        while x_movement != 0.0 || y_movement != 0.0 {
            if x_movement != 0.0 {
                if (x_movement > 0.0 && x_movement < step_x)
                    || (x_movement < 0.0 && x_movement > step_x)
                {
                    step_x = x_movement;
                    x_movement = 0.0;
                } else {
                    x_movement -= step_x;
                }

                body.set_x(body.x() + step_x);

                if collides(body, tiles) {
                    body.set_x(body.x() - step_x);
                    body.set_x_velocity(0.0);
                    x_movement = 0.0;
                }
            }

            if y_movement != 0.0 {
                if (y_movement > 0.0 && y_movement < step_y)
                    || (y_movement < 0.0 && y_movement > step_y)
                {
                    step_y = y_movement;
                    y_movement = 0.0;
                } else {
                    y_movement -= step_y;
                }

                body.set_y(body.y() + step_y);

                if collides(body, tiles) {
                    body.set_y(body.y() - step_y);
                    body.set_y_velocity(0.0);
                    // A vertical hit ends the whole frame's resolution.
                    break;
                }

                if !body.ignores_platforms() {
                    correct_platform_rest(body, tiles);
                }
            }
        }

        // Climbing is driven by explicit up/down commands, not velocity
        // integration, so any residual vertical velocity is discarded.
        if body.is_climbing() {
            body.set_y_velocity(0.0);
        }
    }
}

/// Decomposes a frame displacement into per-iteration step sizes.
///
/// The dominant axis advances one unit per iteration and the minor axis
/// advances by the slope ratio, so neither axis ever moves more than one
/// unit while the other is also moving.
fn step_sizes(x_movement: f32, y_movement: f32) -> (f32, f32) {
    let mut step_x: f32 = 0.0;
    let mut step_y: f32 = 0.0;

    if x_movement != 0.0 {
        step_y = y_movement.abs() / x_movement.abs();
        if y_movement < 0.0 {
            step_y = -step_y;
        }

        step_x = if x_movement > 0.0 { 1.0 } else { -1.0 };

        if !(-1.0..=1.0).contains(&step_y) {
            step_x = step_x.abs() / step_y.abs();
            if x_movement < 0.0 {
                step_x = -step_x;
            }
            step_y = if y_movement < 0.0 { -1.0 } else { 1.0 };
        }
    } else if y_movement != 0.0 {
        step_y = if y_movement > 0.0 { 1.0 } else { -1.0 };
    }

    (step_x, step_y)
}

/// Collision rule for a body against the tile grid.
///
/// Solid tiles block from every side. Platform tiles block only while the
/// body's bottom edge sits at or above the platform's top edge; a body
/// already below that line passes through. Any other blocking tile
/// (damaging) blocks on plain overlap. Bodies that ignore collisions never
/// collide; bodies that ignore platforms skip the platform branch entirely.
fn collides(body: &Body, tiles: &TileGrid) -> bool {
    if body.ignores_collisions() {
        return false;
    }

    let bounds = body.bounds();
    if collides_with_solid(&bounds, tiles) {
        return true;
    }

    if !body.ignores_platforms() {
        for cell in bounds.occupied_cells(tiles.columns(), tiles.rows()) {
            let Some(kind) = tiles.tile(cell) else {
                continue;
            };
            let Some(shape) = kind.blocking_shape(cell) else {
                continue;
            };

            if kind.blocks_only_from_above() {
                if bounds.bottom() <= shape.y() {
                    return true;
                }
            } else if shape.overlaps(&bounds) {
                return true;
            }
        }
    }

    false
}

fn collides_with_solid(bounds: &BoundingRectangle, tiles: &TileGrid) -> bool {
    bounds
        .occupied_cells(tiles.columns(), tiles.rows())
        .any(|cell| {
            tiles.tile(cell) == Some(TileKind::Solid)
                && TileKind::Solid
                    .blocking_shape(cell)
                    .is_some_and(|shape| shape.overlaps(bounds))
        })
}

/// Probes for any blocking tile directly under the body's feet.
fn rests_on_ground(body: &Body, tiles: &TileGrid) -> bool {
    let bounds = body.bounds();
    let probe = bounds.translated(0.0, 1.0);

    bounds
        .ground_cells(tiles.columns(), tiles.rows())
        .any(|cell| {
            tiles
                .tile(cell)
                .and_then(|kind| kind.blocking_shape(cell))
                .is_some_and(|shape| shape.overlaps(&probe))
        })
}

/// Reports whether the body rests on platforms and nothing but platforms.
///
/// The ground row must contain at least one platform, and every blocking
/// tile in it that meets the lowered probe must be a platform; a solid or
/// damaging tile underfoot means the body cannot step down.
fn rests_on_platform(body: &Body, tiles: &TileGrid) -> bool {
    let bounds = body.bounds();
    let columns = tiles.columns();
    let rows = tiles.rows();

    let contains_platform = bounds
        .ground_cells(columns, rows)
        .any(|cell| tiles.tile(cell) == Some(TileKind::Platform));
    if !contains_platform {
        return false;
    }

    let probe = bounds.translated(0.0, 1.0);
    let mut blockers = 0;

    for cell in bounds.ground_cells(columns, rows) {
        let Some(kind) = tiles.tile(cell) else {
            continue;
        };
        let Some(shape) = kind.blocking_shape(cell) else {
            continue;
        };

        blockers += 1;
        if kind.blocks_only_from_above() && shape.overlaps(&probe) {
            blockers -= 1;
        }
    }

    blockers == 0
}

fn rests_on_damaging(body: &Body, tiles: &TileGrid) -> bool {
    let bounds = body.bounds();
    let probe = bounds.translated(0.0, 1.0);

    bounds
        .ground_cells(tiles.columns(), tiles.rows())
        .any(|cell| {
            tiles.tile(cell) == Some(TileKind::Damaging)
                && TileKind::Damaging
                    .blocking_shape(cell)
                    .is_some_and(|shape| shape.overlaps(&probe))
        })
}

fn touches_ladder(body: &Body, tiles: &TileGrid) -> bool {
    body.bounds()
        .occupied_cells(tiles.columns(), tiles.rows())
        .any(|cell| tiles.tile(cell).is_some_and(TileKind::is_climbable))
}

/// Corrects a body's vertical rest against platforms after a vertical step.
///
/// Platforms collide differently from solid tiles, so during frame drops a
/// body can end up inside the platform's top band; while its feet sit within
/// the tolerance band below the top, the body is nudged one unit upward per
/// step until it rests above the surface. The second pass covers the ground
/// probe's blind spot: a body whose feet hang more than the tolerance below
/// a platform top, yet whose ground row still reports that platform as
/// support, would float mid-air. Such a body is told to ignore platforms so
/// it falls through until real ground appears.
fn correct_platform_rest(body: &mut Body, tiles: &TileGrid) {
    let columns = tiles.columns();
    let rows = tiles.rows();

    for cell in body.bounds().ground_cells(columns, rows) {
        if tiles.tile(cell) != Some(TileKind::Platform) {
            continue;
        }
        let Some(shape) = TileKind::Platform.blocking_shape(cell) else {
            continue;
        };

        let feet = body.bounds().bottom();
        if feet >= shape.y() && feet <= shape.y() + PLATFORM_SNAP_TOLERANCE {
            body.set_y(body.y() - 1.0);
        }
    }

    if rests_on_platform(body, tiles) {
        for cell in body.bounds().ground_cells(columns, rows) {
            if tiles.tile(cell) != Some(TileKind::Platform) {
                continue;
            }
            let Some(shape) = TileKind::Platform.blocking_shape(cell) else {
                continue;
            };

            if body.bounds().bottom() > shape.y() + PLATFORM_SNAP_TOLERANCE {
                body.set_ignores_platforms(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_delver_core::{BodyId, CellCoord};

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(BodyId::new(1), BodyKind::Character, x, y, 32, 32)
    }

    fn grid_with(cells: &[(u32, u32, TileKind)]) -> TileGrid {
        let mut grid = TileGrid::new(20, 15);
        for &(column, row, kind) in cells {
            grid.set_tile(CellCoord::new(column, row), kind);
        }
        grid
    }

    #[test]
    fn step_sizes_scale_the_minor_axis() {
        let (step_x, step_y) = step_sizes(10.0, 5.0);
        assert_eq!(step_x, 1.0);
        assert_eq!(step_y, 0.5);

        let (step_x, step_y) = step_sizes(-10.0, 5.0);
        assert_eq!(step_x, -1.0);
        assert_eq!(step_y, 0.5);
    }

    #[test]
    fn step_sizes_cap_the_dominant_vertical_axis() {
        let (step_x, step_y) = step_sizes(5.0, -10.0);
        assert_eq!(step_y, -1.0);
        assert_eq!(step_x, 0.5);
    }

    #[test]
    fn step_sizes_for_pure_vertical_movement() {
        let (step_x, step_y) = step_sizes(0.0, 3.0);
        assert_eq!(step_x, 0.0);
        assert_eq!(step_y, 1.0);

        let (step_x, step_y) = step_sizes(0.0, -3.0);
        assert_eq!(step_y, -1.0);
        assert_eq!(step_x, 0.0);
    }

    #[test]
    fn solid_tiles_block_overlapping_bodies() {
        let grid = grid_with(&[(2, 2, TileKind::Solid)]);
        let body = body_at(60.0, 60.0);
        assert!(collides(&body, &grid));

        let clear = body_at(120.0, 120.0);
        assert!(!collides(&clear, &grid));
    }

    #[test]
    fn collision_immunity_suppresses_all_blocking() {
        let grid = grid_with(&[(2, 2, TileKind::Solid)]);
        let mut body = body_at(60.0, 60.0);
        body.set_ignores_collisions(true);
        assert!(!collides(&body, &grid));
    }

    #[test]
    fn platforms_block_only_bodies_above_their_top() {
        let grid = grid_with(&[(2, 4, TileKind::Platform)]);

        // Feet exactly at the platform top: blocked.
        let above = body_at(64.0, 96.0);
        assert!(collides(&above, &grid));

        // Feet below the top: passes through.
        let below = body_at(64.0, 100.0);
        assert!(!collides(&below, &grid));
    }

    #[test]
    fn drop_through_skips_platform_blocking() {
        let grid = grid_with(&[(2, 4, TileKind::Platform)]);
        let mut body = body_at(64.0, 96.0);
        body.drop_through();
        assert!(!collides(&body, &grid));
    }

    #[test]
    fn ground_probe_sees_the_tile_below_the_feet() {
        let grid = grid_with(&[(2, 4, TileKind::Solid)]);
        let resting = body_at(64.0, 95.0);
        assert!(rests_on_ground(&resting, &grid));

        let airborne = body_at(64.0, 60.0);
        assert!(!rests_on_ground(&airborne, &grid));
    }

    #[test]
    fn platform_rest_requires_platforms_only() {
        let pure = grid_with(&[(2, 4, TileKind::Platform), (3, 4, TileKind::Platform)]);
        let body = body_at(64.0, 95.0);
        assert!(rests_on_platform(&body, &pure));

        let mixed = grid_with(&[(2, 4, TileKind::Platform), (3, 4, TileKind::Solid)]);
        assert!(
            !rests_on_platform(&body, &mixed),
            "a solid tile underfoot forbids stepping down",
        );
    }

    #[test]
    fn hanging_bodies_are_told_to_fall_through() {
        let grid = grid_with(&[(2, 4, TileKind::Platform)]);
        // Feet 6 units below the platform top, still reported as supported.
        let mut body = body_at(64.0, 102.0);
        assert!(rests_on_platform(&body, &grid));

        correct_platform_rest(&mut body, &grid);
        assert!(
            body.ignores_platforms(),
            "a body hanging below the tolerance band must drop through",
        );
    }

    #[test]
    fn bodies_in_the_snap_band_are_nudged_upward() {
        let grid = grid_with(&[(2, 4, TileKind::Platform)]);
        // Feet two units into the platform's top band.
        let mut body = body_at(64.0, 98.0);
        correct_platform_rest(&mut body, &grid);
        assert_eq!(body.y(), 97.0);
    }
}
