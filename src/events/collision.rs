//! Kite cut event and its observer.
//!
//! The cut resolver marks a kite cut and triggers [`KiteCutEvent`]. The
//! observer schedules the removal of the cut kite after a grace period so the
//! falling kite stays visible for a moment.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::kite::KiteId;
use crate::components::ttl::Ttl;
use crate::resources::gameconfig::GameConfig;

/// Fired once per cut, when the victim kite is marked cut.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KiteCutEvent {
    /// Entity of the kite that was cut.
    pub victim: Entity,
    pub victim_id: KiteId,
    /// Id of the kite whose tail cut the victim.
    pub cutter_id: KiteId,
    pub victim_is_player: bool,
    /// Score awarded for this cut (0 unless the player cut an NPC).
    pub points: u32,
}

/// Insert a frame-based [`Ttl`] on the cut kite and log the cut.
pub fn kite_cut_observer(
    trigger: On<KiteCutEvent>,
    mut commands: Commands,
    config: Option<Res<GameConfig>>,
) {
    let event = trigger.event();
    let grace = config
        .map(|c| c.spawn.cut_grace_frames)
        .unwrap_or_default();
    if event.victim_is_player {
        info!("Player kite {:?} cut by {:?}", event.victim_id, event.cutter_id);
    } else {
        info!(
            "Kite {:?} cut by {:?} (+{} points)",
            event.victim_id, event.cutter_id, event.points
        );
    }
    commands.entity(event.victim).try_insert(Ttl::frames(grace));
}
