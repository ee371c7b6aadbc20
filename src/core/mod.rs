pub mod config;
pub mod emitter;
pub mod entity;
pub mod progress;
pub mod scene;
pub mod store;
pub mod throttle;

pub use config::EffectConfig;
pub use emitter::SpawnRequest;
pub use scene::Scene;
pub use throttle::FrameThrottle;
