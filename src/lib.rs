//! Deterministic day/night environment simulator.
//!
//! This crate computes a one-day environment table at one-minute resolution:
//! temperature (natural cubic spline through hourly anchors), snow coverage,
//! solar elevation, light intensity and direction, and sky/sun colors. The
//! result is exported as a fixed-layout CSV consumed by an external renderer.

pub mod timeline;
pub mod temperature;
pub mod snow;
pub mod solar;
pub mod light;
pub mod pipeline;
pub mod export;

pub use timeline::{DayTimeline, MINUTES_PER_DAY, SAMPLES_PER_DAY};
pub use temperature::{CubicSpline, ProfileError, TemperatureProfile};
pub use solar::{DirectionConvention, SolarConfig, SunCycle};
pub use light::{ColorRamp, LightConfig};
pub use pipeline::{
    LightStage, Pipeline, PipelineError, SimulationStage, SnowStage, SolarStage, StageId,
    TemperatureStage,
};
pub use export::export_timeline_csv;
