//! Headless бой: игрок против AI босса
//!
//! Запускает Bevy App без рендера. Perception, overlap и player input
//! инжектятся по расписанию — те же события слал бы движок.

use bevy::prelude::*;
use bossfight_simulation::{
    create_headless_app, spawn_duel, AbilityPoints, ActionKind, ActivationRequest, ContactEvent,
    FighterConfig, Health, PerceptionEvent, PotionKind, PotionRequest, SimulationPlugin,
    SkillCooldowns, SkillSlot,
};

fn main() {
    let seed = 42;
    println!("Starting boss fight simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let (player, boss) = spawn_duel(app.world_mut(), Vec3::ZERO, Vec3::new(900.0, 0.0, 0.0));
    println!("Spawned player {:?} vs boss {:?}", player, boss);

    let mut winner = None;

    // До 2 минут боя (7200 тиков по 1/60s)
    for tick in 0..7200u64 {
        // Босс слышит игрока и переходит в преследование
        if tick == 120 {
            app.world_mut().send_event(PerceptionEvent::NoiseHeard {
                observer: boss,
                location: Vec3::ZERO,
                volume: 1.0,
            });
        }

        // Сближение: периодический вход в contact volumes. После каждого
        // resolve AI сбрасывает свой контакт, поэтому вход повторяется.
        if tick >= 480 && tick % 240 == 0 {
            app.world_mut()
                .send_event(ContactEvent::Entered { fighter: boss, other: player });
            app.world_mut()
                .send_event(ContactEvent::Entered { fighter: player, other: boss });
        }

        // Player input: готовый скилл, иначе базовая атака
        if tick >= 480 && tick % 180 == 0 {
            if let Some(action) = pick_player_action(app.world(), player) {
                app.world_mut()
                    .send_event(ActivationRequest { fighter: player, action });
            }
        }

        // Зелье здоровья при просадке HP
        if tick % 120 == 0 {
            if let Some(health) = app.world().get::<Health>(player) {
                if health.current <= 80.0 {
                    app.world_mut().send_event(PotionRequest {
                        fighter: player,
                        kind: PotionKind::Health,
                    });
                }
            }
        }

        app.update();

        if tick % 600 == 0 {
            print_status(app.world(), player, boss, tick);
        }

        let player_alive = app.world().get::<Health>(player).is_some();
        let boss_alive = app.world().get::<Health>(boss).is_some();
        if !player_alive || !boss_alive {
            winner = Some(if player_alive { "player" } else { "boss" });
            break;
        }
    }

    match winner {
        Some(name) => println!("Fight over: {} wins!", name),
        None => println!("Fight timed out (7200 ticks)"),
    }
}

/// Скриптованный выбор действия игрока: первый готовый и доступный
/// скилл, иначе базовая атака
fn pick_player_action(world: &World, player: Entity) -> Option<ActionKind> {
    let points = world.get::<AbilityPoints>(player)?;
    let cooldowns = world.get::<SkillCooldowns>(player)?;
    let config = world.get::<FighterConfig>(player)?;

    for slot in SkillSlot::ALL {
        if cooldowns.is_ready(slot) && points.can_afford(config.skill(slot).cost) {
            return Some(ActionKind::Skill(slot));
        }
    }
    Some(ActionKind::BasicAttack)
}

fn print_status(world: &World, player: Entity, boss: Entity, tick: u64) {
    let health_of = |entity| {
        world
            .get::<Health>(entity)
            .map(|h| h.current)
            .unwrap_or(0.0)
    };
    let points_of = |entity| {
        world
            .get::<AbilityPoints>(entity)
            .map(|p| p.current)
            .unwrap_or(0.0)
    };
    println!(
        "Tick {}: player hp {:.0} / points {:.0} | boss hp {:.0} / points {:.0}",
        tick,
        health_of(player),
        points_of(player),
        health_of(boss),
        points_of(boss)
    );
}
