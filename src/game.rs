//! World construction and the per-tick schedule.
//!
//! [`Game`] owns the ECS [`World`] and the chained update [`Schedule`]. A
//! tick is:
//!
//! 1. advance [`WorldTime`] by the frame delta
//! 2. input coordinator: drain the platform bridge, poll the tracked gamepad
//! 3. game state coordinator: apply the tick's actions in order; transition
//!    hooks (`enter_play`, `clear_kites`) run right after it
//! 4. while playing: wind, player steering, player view, AI, physics, spawn
//!    timers, cut resolution, TTL removal, boundary removal, NPC spawning,
//!    player relaunch
//!
//! The hook systems live here and are registered in the [`SystemsStore`].

use bevy_ecs::prelude::*;
use log::info;

use crate::components::kite::Kite;
use crate::events::collision::kite_cut_observer;
use crate::events::fullscreen::fullscreen_request_observer;
use crate::events::gamestate::{
    CLEAR_KITES_HOOK, ENTER_PLAY_HOOK, observe_gamestate_change_event,
};
use crate::events::input::InputEvent;
use crate::resources::focus::{MenuFocus, PauseFocus};
use crate::resources::fullscreen::{FullscreenBackend, FullscreenRequester, HeadlessFullscreen};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gameparams::GameParams;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{
    GamepadSnapshot, GamepadTracker, Gamepads, InputEdgeState, SteeringIntent,
};
use crate::resources::platform::{PlatformSender, platform_channel};
use crate::resources::playerinfo::PlayerView;
use crate::resources::playfield::PlayField;
use crate::resources::simrng::SimRng;
use crate::resources::spawndirector::SpawnDirector;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;
use crate::snapshot::{FrameSnapshot, capture};
use crate::systems::ai::ai_behavior;
use crate::systems::collision::cut_resolver;
use crate::systems::gamestate::{game_state_coordinator, state_is_playing};
use crate::systems::input::{poll_input, update_input_messages};
use crate::systems::physics::kite_physics;
use crate::systems::player::{player_controller, player_respawn, publish_player_view};
use crate::systems::spawn::{
    despawn_out_of_bounds, spawn_director, spawn_player_kite, spawn_timer_system,
};
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;
use crate::systems::wind::advance_wind;

/// Prepare a fresh game: remove every kite, restart the spawn cadence and
/// launch the player kite.
pub fn enter_play(
    mut commands: Commands,
    kites: Query<Entity, With<Kite>>,
    mut director: ResMut<SpawnDirector>,
    mut view: ResMut<PlayerView>,
    config: Res<GameConfig>,
    field: Res<PlayField>,
    params: Res<GameParams>,
) {
    for entity in kites.iter() {
        commands.entity(entity).try_despawn();
    }
    director.reset_cooldown();
    view.info = None;
    spawn_player_kite(
        &mut commands,
        &mut director,
        &config,
        &field,
        params.kite_color,
    );
    info!(
        "Game started: weather {:?}, wind {:.1}, difficulty {:.1}",
        params.weather,
        params.wind_speed(),
        params.difficulty()
    );
}

/// Remove every kite, e.g. when going back to the menu.
pub fn clear_kites(
    mut commands: Commands,
    kites: Query<Entity, With<Kite>>,
    mut view: ResMut<PlayerView>,
) {
    let mut count = 0;
    for entity in kites.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    view.info = None;
    info!("Cleared {} kites", count);
}

/// Build the ordered per-tick schedule.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_messages,
            poll_input,
            game_state_coordinator,
            (
                advance_wind,
                player_controller,
                publish_player_view,
                ai_behavior,
                kite_physics,
                spawn_timer_system,
                cut_resolver,
                ttl_system,
                despawn_out_of_bounds,
                spawn_director,
                player_respawn,
            )
                .chain()
                .run_if(state_is_playing),
        )
            .chain(),
    );
    update
}

/// Insert every resource, observer and hook system the schedule needs.
///
/// Returns the sending half of the platform event channel.
pub fn build_world(world: &mut World, config: GameConfig) -> PlatformSender {
    let (sender, bridge) = platform_channel();

    world.insert_resource(WorldTime::default());
    world.insert_resource(PlayField::from_tuning(&config.playfield));
    world.insert_resource(SimRng::seeded(config.frame_loop.seed));
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(GameParams::default());
    world.insert_resource(MenuFocus::default());
    world.insert_resource(PauseFocus::default());
    world.insert_resource(InputEdgeState::default());
    world.insert_resource(Gamepads::default());
    world.insert_resource(GamepadTracker::default());
    world.insert_resource(SteeringIntent::default());
    world.insert_resource(WindField::default());
    world.insert_resource(SpawnDirector::default());
    world.insert_resource(PlayerView::default());
    world.insert_resource(FullscreenRequester::new(HeadlessFullscreen::default()));
    world.insert_resource(bridge);
    world.init_resource::<Messages<InputEvent>>();

    world.add_observer(observe_gamestate_change_event);
    world.add_observer(kite_cut_observer);
    world.add_observer(fullscreen_request_observer);

    let mut systems_store = SystemsStore::new();
    let enter_play_system_id = world.register_system(enter_play);
    systems_store.insert(ENTER_PLAY_HOOK, enter_play_system_id);
    let clear_kites_system_id = world.register_system(clear_kites);
    systems_store.insert(CLEAR_KITES_HOOK, clear_kites_system_id);
    world.insert_resource(systems_store);

    world.flush();
    sender
}

/// A running simulation: the world, its schedule and the platform sender.
pub struct Game {
    world: World,
    update: Schedule,
    platform: PlatformSender,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        let mut world = World::new();
        let platform = build_world(&mut world, config);
        let mut update = build_schedule();
        update
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;
        Ok(Game {
            world,
            update,
            platform,
        })
    }

    /// Run one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Sender for keyboard and gamepad connection events.
    pub fn platform(&self) -> PlatformSender {
        self.platform.clone()
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn params(&self) -> &GameParams {
        self.world.resource::<GameParams>()
    }

    pub fn params_mut(&mut self) -> Mut<'_, GameParams> {
        self.world.resource_mut::<GameParams>()
    }

    /// Replace the latest state of gamepad `index`.
    pub fn set_gamepad(&mut self, index: u32, snapshot: GamepadSnapshot) {
        self.world.resource_mut::<Gamepads>().set(index, snapshot);
    }

    pub fn set_steering(&mut self, intent: SteeringIntent) {
        *self.world.resource_mut::<SteeringIntent>() = intent;
    }

    /// Swap the platform fullscreen implementation.
    pub fn set_fullscreen_backend(
        &mut self,
        backend: impl FullscreenBackend + Send + Sync + 'static,
    ) {
        self.world
            .insert_resource(FullscreenRequester::new(backend));
    }

    pub fn snapshot(&mut self) -> FrameSnapshot {
        capture(&mut self.world)
    }
}
