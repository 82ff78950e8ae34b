//! Pipeline module for orchestrating simulation stages.
//!
//! Provides a trait-based architecture for modular stages that can be
//! composed into a complete day simulation.

mod stage;

pub use stage::{
    LightStage, Pipeline, PipelineError, SimulationStage, SnowStage, SolarStage, StageId,
    TemperatureStage,
};
