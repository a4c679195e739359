use bevy::prelude::*;
use reactor_core::ReactorConfig;
use reactor_render::plugin::ReactorRenderPlugin;
use reactor_sim::ReactorState;
use reactor_sim::pipeline::SimulationPlugin;

fn main() {
    let config = ReactorConfig::default();
    let reactor = match ReactorState::new(config) {
        Ok(reactor) => reactor,
        Err(e) => {
            eprintln!("Invalid reactor configuration: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fluidized Bed Reactor".into(),
                resolution: (640.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)))
        .insert_resource(reactor)
        .add_plugins(SimulationPlugin)
        .add_plugins(ReactorRenderPlugin)
        .run();
}
