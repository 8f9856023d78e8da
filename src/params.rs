use crate::cli::EffectiveConfig;
use crate::engine::EngineOptions;

pub fn build_engine_options(cfg: &EffectiveConfig) -> EngineOptions {
  EngineOptions {
    policy: cfg.boundary,
    blocked_flag: cfg.blocked_flag.clone(),
    zone: cfg.tz,
    show_name: cfg.show_name,
  }
}
