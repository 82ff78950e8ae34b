//! Simulation stage trait and pipeline orchestration.

use rayon::prelude::*;
use thiserror::Error;

use crate::light::{blend_color, intensity, LightConfig};
use crate::snow::snow_cover;
use crate::solar::{elevation_deg, light_direction, scan_cycle, SolarConfig};
use crate::temperature::{interpolate_profile, TemperatureProfile};
use crate::timeline::{DayTimeline, SAMPLES_PER_DAY};

/// Unique identifier for simulation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Spline interpolation of the temperature profile.
    Temperature,
    /// Temperature-driven snow coverage.
    Snow,
    /// Solar elevation, light direction, and the sunrise/sunset scan.
    Solar,
    /// Light intensity and sky/sun colors.
    Light,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Temperature => "temperature",
            StageId::Snow => "snow",
            StageId::Solar => "solar",
            StageId::Light => "light",
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// Trait for implementing simulation stages.
///
/// Each stage populates one or more columns of the timeline, building upon
/// previous stages. The trait-based design allows for modular composition.
pub trait SimulationStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the stage, populating timeline columns in place.
    fn execute(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError>;
}

/// Orchestrates multiple simulation stages into a complete pipeline.
pub struct Pipeline {
    stages: Vec<Box<dyn SimulationStage>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Creates the standard four-stage day simulation for the given
    /// configuration.
    pub fn standard(
        profile: TemperatureProfile,
        solar: SolarConfig,
        light: LightConfig,
    ) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(TemperatureStage::new(profile));
        pipeline.add_stage(SnowStage);
        pipeline.add_stage(SolarStage::new(solar));
        pipeline.add_stage(LightStage::new(light));
        pipeline
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: SimulationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Executes all stages in order on the given timeline.
    pub fn run(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError> {
        self.run_with_callbacks(timeline, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// # Arguments
    /// * `timeline` - The timeline to populate
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        timeline: &mut DayTimeline,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(timeline)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Temperature interpolation stage.
pub struct TemperatureStage {
    pub profile: TemperatureProfile,
}

impl TemperatureStage {
    pub fn new(profile: TemperatureProfile) -> Self {
        Self { profile }
    }
}

impl SimulationStage for TemperatureStage {
    fn id(&self) -> StageId {
        StageId::Temperature
    }

    fn name(&self) -> &str {
        "Temperature Interpolation"
    }

    fn execute(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError> {
        timeline.temperature_c = Some(interpolate_profile(&self.profile));
        Ok(())
    }
}

/// Snow coverage stage.
pub struct SnowStage;

impl SimulationStage for SnowStage {
    fn id(&self) -> StageId {
        StageId::Snow
    }

    fn name(&self) -> &str {
        "Snow Coverage"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Temperature]
    }

    fn execute(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError> {
        let temps = timeline.temperature_c.as_ref().ok_or_else(|| {
            PipelineError::StageFailed(
                self.name().to_string(),
                "Missing temperature column (run Temperature stage first)".to_string(),
            )
        })?;

        timeline.snow_cover = Some(temps.par_iter().map(|&t| snow_cover(t)).collect());
        Ok(())
    }
}

/// Solar geometry stage: elevation angles, light directions, and the
/// sunrise/sunset classification.
pub struct SolarStage {
    pub config: SolarConfig,
}

impl SolarStage {
    pub fn new(config: SolarConfig) -> Self {
        Self { config }
    }
}

impl SimulationStage for SolarStage {
    fn id(&self) -> StageId {
        StageId::Solar
    }

    fn name(&self) -> &str {
        "Solar Geometry"
    }

    fn execute(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError> {
        let cfg = &self.config;

        let elevations: Vec<f64> = (0..SAMPLES_PER_DAY)
            .into_par_iter()
            .map(|minute| elevation_deg(cfg.latitude_deg, cfg.declination_deg, minute as f64))
            .collect();

        let directions = elevations
            .par_iter()
            .map(|&el| light_direction(el, cfg.azimuth_deg, cfg.convention))
            .collect();

        timeline.sun_cycle = Some(scan_cycle(&elevations));
        timeline.elevation_deg = Some(elevations);
        timeline.light_direction = Some(directions);
        Ok(())
    }
}

/// Light mapping stage: intensity plus sky and sun colors.
pub struct LightStage {
    pub config: LightConfig,
}

impl LightStage {
    pub fn new(config: LightConfig) -> Self {
        Self { config }
    }
}

impl SimulationStage for LightStage {
    fn id(&self) -> StageId {
        StageId::Light
    }

    fn name(&self) -> &str {
        "Light Mapping"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Solar]
    }

    fn execute(&self, timeline: &mut DayTimeline) -> Result<(), PipelineError> {
        let missing = |what: &str| {
            PipelineError::StageFailed(
                "Light Mapping".to_string(),
                format!("Missing {} (run Solar stage first)", what),
            )
        };
        let elevations = timeline.elevation_deg.as_ref().ok_or_else(|| missing("elevation column"))?;
        let cycle = timeline.sun_cycle.ok_or_else(|| missing("sun cycle"))?;

        let cfg = &self.config;
        let daylight = cycle.daylight_minutes();

        timeline.light_intensity = Some(
            elevations
                .par_iter()
                .map(|&el| intensity(el, daylight, cfg))
                .collect(),
        );
        timeline.sky_color = Some(
            elevations
                .par_iter()
                .map(|&el| blend_color(el, &cfg.sky, cfg))
                .collect(),
        );
        timeline.sun_color = Some(
            elevations
                .par_iter()
                .map(|&el| blend_color(el, &cfg.sun, cfg))
                .collect(),
        );
        Ok(())
    }
}
