pub mod types;
pub use self::types::{Color, Palette, Shape, UpdateResult, Vec2};

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::{IntegrationMode, PhysicConfig};

pub mod particle_store;
pub use self::particle_store::{BurstSampler, ParticleStore, RandomBurst};

pub mod evasive_button;
pub use self::evasive_button::{relocate, ApproachEvent, EvasiveButton, Placement};
