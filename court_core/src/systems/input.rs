use hecs::World;

use crate::components::DefenderIntent;

/// Write a directional command into the defender's intent. The decoded
/// keyboard state arrives as -1 / 0 / 1; the movement system applies it on
/// the raw clock.
pub fn set_defender_dir(world: &mut World, dir: i8) {
    for (_entity, intent) in world.query_mut::<&mut DefenderIntent>() {
        intent.dir = dir.clamp(-1, 1);
    }
}
