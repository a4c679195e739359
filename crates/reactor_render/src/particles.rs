use bevy::prelude::*;
use reactor_sim::ReactorState;

use super::vessel::container_to_world;

/// Marker for particle sprites; `index` addresses the simulation population
#[derive(Component)]
pub struct ParticleSprite {
    pub index: usize,
}

/// Population generation currently represented by spawned sprites
#[derive(Resource, Default)]
pub struct RenderedGeneration(pub Option<u32>);

const PARTICLE_COLOR: Color = Color::srgb(1.0, 0.67, 0.57);

/// Keep sprites in sync with the simulation.
///
/// On a regeneration the whole sprite set is despawned and rebuilt, since
/// particle count and sizes may have changed. Otherwise only transforms are
/// written.
pub fn sync_particle_visuals(
    mut commands: Commands,
    reactor: Res<ReactorState>,
    mut rendered: ResMut<RenderedGeneration>,
    mut query: Query<(Entity, &mut Transform, &ParticleSprite)>,
) {
    let generation = reactor.particles_generation();
    if rendered.0 != Some(generation) {
        for (entity, _, _) in query.iter() {
            commands.entity(entity).despawn();
        }
        for (index, p) in reactor.particles().iter().enumerate() {
            commands.spawn((
                Sprite {
                    color: PARTICLE_COLOR,
                    custom_size: Some(Vec2::splat(p.size)),
                    ..default()
                },
                Transform::from_translation(container_to_world(p.x, p.y, 0.0)),
                ParticleSprite { index },
            ));
        }
        rendered.0 = Some(generation);
        debug!("Respawned {} particle sprites", reactor.particle_count());
        return;
    }

    for (_, mut transform, sprite) in query.iter_mut() {
        let Some(p) = reactor.particles().get(sprite.index) else {
            continue;
        };
        transform.translation = container_to_world(p.x, p.y, 0.0);
    }
}
