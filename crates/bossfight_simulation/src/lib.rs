//! BOSSFIGHT Simulation Core
//!
//! ECS-симуляция боя на Bevy 0.16 (strategic layer): игрок против AI
//! босса — health / ability points, три скилла с cost/cooldown/lock,
//! зелья, Wander → Pursue → Engaged поведение.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (combat state, AI решения, таймеры)
//! - Движок = tactical layer (rendering, физика, навигация, volumes);
//!   вход — typed events, выход — MovementCommand

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod movement;
pub mod scheduler;

// Re-export базовых типов для удобства
pub use ai::{AIConfig, AIPlugin, AIState, AITimers, PerceptionEvent};
pub use combat::{
    AbilityPoints, ActionKind, ActionLock, ActionResolved, ActivationRequest, AiControlled,
    BasicAttackSpec, CombatPlugin, ContactEvent, ContactLockMode, DamageDealt, FighterConfig,
    FighterDied, Health, Opponent, PlayerControlled, PotionBelt, PotionKind, PotionRequest,
    SkillCooldowns, SkillSlot, SkillSpec,
};
pub use movement::{MovementCommand, MovementSpeed};
pub use scheduler::{
    secs_to_ticks, CombatScheduler, TimerAction, TimerFired, TimerHandle, TICKS_PER_SECOND,
};

/// Порядок наборов систем внутри одного FixedUpdate тика
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Взвод цепочек для новых бойцов + advance scheduler
    Timers,
    /// AI: perception, contact engage, таймерные цепочки
    Ai,
    /// Combat pipeline: contact флаги → resolve → урон → смерть
    Combat,
    /// Post-resolve учёт (AI выход из Engaged)
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Детерминистичный RNG: уже вставленный seed не перетираем
        if app.world().get_resource::<DeterministicRng>().is_none() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Timers,
                SimulationSet::Ai,
                SimulationSet::Combat,
                SimulationSet::Cleanup,
            )
                .chain(),
        );

        // Подсистемы (ECS strategic layer)
        app.add_plugins((CombatPlugin, AIPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную ровно на 1/60s за update: один app.update()
/// соответствует одному FixedUpdate тику, без привязки к wall clock
/// (инициализационный кадр Time прожигается здесь же).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)) // 60Hz FixedUpdate
        .insert_resource(TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_secs_f64(1.0 / 60.0),
        ));

    // Первый update после старта только инициализирует Time<Real>
    // (delta == 0, ноль FixedUpdate прогонов) — прожигаем его сразу,
    // чтобы дальше каждый update давал ровно один тик
    app.update();

    app
}

/// Спавнит дуэль: игрок и AI босс с перекрёстными Opponent ссылками
pub fn spawn_duel(world: &mut World, player_pos: Vec3, boss_pos: Vec3) -> (Entity, Entity) {
    let player_config = FighterConfig::player();
    let boss_config = FighterConfig::boss();

    let player = world
        .spawn((
            Transform::from_translation(player_pos),
            PlayerControlled,
            Health::new(player_config.max_health),
            AbilityPoints::new(player_config.max_ability_points),
            SkillCooldowns::default(),
            ActionLock::new(player_config.contact_lock),
            PotionBelt::default(),
            MovementCommand::Idle,
            MovementSpeed::default(),
            player_config,
        ))
        .id();

    let boss = world
        .spawn((
            Transform::from_translation(boss_pos),
            AiControlled,
            Health::new(boss_config.max_health),
            AbilityPoints::new(boss_config.max_ability_points),
            SkillCooldowns::default(),
            ActionLock::new(boss_config.contact_lock),
            AIState::default(),
            AITimers::default(),
            AIConfig::default(),
            MovementCommand::Idle,
            MovementSpeed::default(),
            boss_config,
        ))
        .id();

    world.entity_mut(player).insert(Opponent(boss));
    world.entity_mut(boss).insert(Opponent(player));

    (player, boss)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

use once_cell::sync::Lazy;
use std::sync::Mutex;

// Потокобезопасный глобальный logger (static, Arc не нужен)
static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

pub static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *LOGGER_LEVEL.lock().unwrap() = level;
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if LOGGER.lock().unwrap().is_none() {
        set_logger(logger);
    }
}

pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_int().cmp(&other.as_int())
    }
}

impl PartialEq for LogLevel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for LogLevel {}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn as_int(&self) -> i32 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    // Лочим mutex, достаём logger, вызываем log (timestamp добавляем здесь)
    if level.as_int() < LOGGER_LEVEL.lock().unwrap().as_int() {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
