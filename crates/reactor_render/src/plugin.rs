use bevy::prelude::*;

use super::particles::{self, RenderedGeneration};
use super::ui::{self, HudThrottle};
use super::vessel;

/// Main render plugin for the reactor visualization
pub struct ReactorRenderPlugin;

impl Plugin for ReactorRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudThrottle>()
            .init_resource::<RenderedGeneration>()
            .add_systems(Startup, (vessel::spawn_vessel, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    ui::parameter_control_system,
                    particles::sync_particle_visuals,
                    vessel::update_bed_marker,
                    ui::update_hud,
                ),
            );
    }
}
