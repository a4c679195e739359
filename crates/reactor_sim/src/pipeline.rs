use bevy::prelude::*;

use super::reactor::ReactorState;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick);
    }
}

/// Main simulation tick — advances the particle bed once per frame
fn simulation_tick(mut reactor: ResMut<ReactorState>) {
    reactor.tick();
}
