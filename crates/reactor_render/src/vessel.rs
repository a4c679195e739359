use bevy::prelude::*;
use reactor_core::constants::{CONTAINER_WIDTH, REACTOR_HEIGHT};
use reactor_sim::ReactorState;

/// Marker for the bed-envelope line
#[derive(Component)]
pub struct BedMarker;

/// Scale between the simulated bed height and the drawn envelope line;
/// keeps the marker inside the vessel even at full fluidization
/// (520 * 0.6 < 400).
const BED_MARKER_SCALE: f32 = 0.6;

/// Map container-local coordinates (origin top-left, y down) to world space.
pub fn container_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - CONTAINER_WIDTH / 2.0, REACTOR_HEIGHT / 2.0 - y, z)
}

/// Spawn the camera, the vessel body and the bed-envelope marker.
pub fn spawn_vessel(mut commands: Commands) {
    commands.spawn(Camera2d);

    // Vessel interior
    commands.spawn((
        Sprite {
            color: Color::srgb(0.14, 0.26, 0.50),
            custom_size: Some(Vec2::new(CONTAINER_WIDTH, REACTOR_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -2.0),
    ));

    // Walls
    let wall = |w: f32, h: f32, x: f32, y: f32| {
        (
            Sprite {
                color: Color::BLACK,
                custom_size: Some(Vec2::new(w, h)),
                ..default()
            },
            Transform::from_xyz(x, y, -1.0),
        )
    };
    let half_w = CONTAINER_WIDTH / 2.0;
    let half_h = REACTOR_HEIGHT / 2.0;
    commands.spawn(wall(2.0, REACTOR_HEIGHT + 4.0, -half_w - 1.0, 0.0));
    commands.spawn(wall(2.0, REACTOR_HEIGHT + 4.0, half_w + 1.0, 0.0));
    commands.spawn(wall(CONTAINER_WIDTH + 4.0, 2.0, 0.0, half_h + 1.0));

    // Distributor plate under the vessel
    commands.spawn(wall(CONTAINER_WIDTH + 4.0, 25.0, 0.0, -half_h - 13.5));

    // Bed-envelope line, repositioned every frame from the simulation
    commands.spawn((
        Sprite {
            color: Color::srgb(1.0, 0.42, 0.42),
            custom_size: Some(Vec2::new(CONTAINER_WIDTH, 2.0)),
            ..default()
        },
        Transform::from_translation(container_to_world(
            CONTAINER_WIDTH / 2.0,
            REACTOR_HEIGHT,
            1.0,
        )),
        BedMarker,
    ));
}

/// Track the current bed height with the envelope line.
pub fn update_bed_marker(
    reactor: Res<ReactorState>,
    mut query: Query<&mut Transform, With<BedMarker>>,
) {
    let marker_y = REACTOR_HEIGHT - reactor.bed_height() * BED_MARKER_SCALE;
    for mut transform in query.iter_mut() {
        transform.translation.y = container_to_world(0.0, marker_y, 1.0).y;
    }
}
