use bevy::prelude::*;
use reactor_sim::ReactorState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Fluidized Bed Reactor"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    reactor: Res<ReactorState>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let config = reactor.config();
    let paused = if reactor.paused { " [PAUSED]" } else { "" };

    **text = format!(
        "FLUIDIZED BED REACTOR{}\n\
         Velocity: {:.1} m/h | Bed height: {:.0} px\n\
         Particles: {} | Distribution exp: {:.2}\n\
         Size range: {:.2}..{:.2} px | Seed: {}\n\
         Ticks: {}\n\
         \n\
         [Up/Down] Velocity  [Q/A] Distribution\n\
         [W/S] Count  [E/D] Min size  [R/F] Max size\n\
         [N] Reseed  [Space] Pause",
        paused,
        config.velocity,
        reactor.bed_height(),
        reactor.particle_count(),
        config.size_distribution_exponent,
        config.min_particle_size,
        config.max_particle_size,
        config.seed,
        reactor.ticks,
    );
}

/// Keyboard stand-in for the parameter sliders.
///
/// Steps and ranges match the slider domains: velocity 0..=80 m/h,
/// distribution exponent 0.01..=1, particle count 1000..=10000 in steps of
/// 100, min size 0.01..=1, max size 1..=10.
pub fn parameter_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reactor: ResMut<ReactorState>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        reactor.paused = !reactor.paused;
    }

    let mut config = reactor.config().clone();

    // Velocity responds while held; the rest step per press
    if keyboard.pressed(KeyCode::ArrowUp) {
        config.velocity = (config.velocity + 0.5).min(80.0);
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        config.velocity = (config.velocity - 0.5).max(0.0);
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        config.size_distribution_exponent = (config.size_distribution_exponent + 0.01).min(1.0);
    }
    if keyboard.just_pressed(KeyCode::KeyA) {
        config.size_distribution_exponent = (config.size_distribution_exponent - 0.01).max(0.01);
    }
    if keyboard.just_pressed(KeyCode::KeyW) {
        config.particle_count = (config.particle_count + 100).min(10_000);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        config.particle_count = config.particle_count.saturating_sub(100).max(1000);
    }
    if keyboard.just_pressed(KeyCode::KeyE) {
        config.min_particle_size = (config.min_particle_size + 0.01).min(1.0);
    }
    if keyboard.just_pressed(KeyCode::KeyD) {
        config.min_particle_size = (config.min_particle_size - 0.01).max(0.01);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        config.max_particle_size = (config.max_particle_size + 0.1).min(10.0);
    }
    if keyboard.just_pressed(KeyCode::KeyF) {
        config.max_particle_size = (config.max_particle_size - 0.1).max(1.0);
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        config.seed = config.seed.wrapping_add(1);
    }

    if config == *reactor.config() {
        return;
    }
    if let Err(e) = reactor.apply_config(config) {
        // Reachable when the clamped ranges touch, e.g. min size raised to
        // meet a max size lowered to 1
        warn!("Rejected parameter change: {e}");
    }
}
