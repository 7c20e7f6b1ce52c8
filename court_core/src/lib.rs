pub mod components;
pub mod config;
pub mod controller;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod surfaces;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use surfaces::*;

use hecs::World;

/// Spawn one vertical-drop ball per court surface
pub fn create_drop_balls(world: &mut World, drag: f32) {
    for kind in SurfaceKind::ALL {
        world.spawn((Ball::new(kind.profile(), drag),));
    }
}

/// Spawn the single shot ball, seeded from the current launch parameters
pub fn create_shot_ball(
    world: &mut World,
    kind: SurfaceKind,
    drag: f32,
    launch: ShotParams,
) -> hecs::Entity {
    let mut ball = Ball::new(kind.profile(), drag);
    ball.reset_shot(launch.force, launch.angle, launch.spin);
    world.spawn((ball,))
}

/// Spawn the defender at its default mark on the far side
pub fn create_defender(world: &mut World) -> hecs::Entity {
    world.spawn((Defender::new(), DefenderIntent::new()))
}
