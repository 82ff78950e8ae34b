//! Daysim CLI - Day/night environment table generator.
//!
//! Computes a one-day environment table (temperature, snow coverage, solar
//! elevation, light intensity/direction, sky and sun colors) at one-minute
//! resolution and exports it as a CSV for the renderer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use daysim::export::export_timeline_csv;
use daysim::light::LightConfig;
use daysim::pipeline::Pipeline;
use daysim::solar::{elevation_deg, scan_cycle, DirectionConvention, SolarConfig, SunCycle};
use daysim::temperature::TemperatureProfile;
use daysim::timeline::{minute_to_hhmm, DayTimeline, SAMPLES_PER_DAY};

/// Deterministic day/night environment simulator.
#[derive(Parser)]
#[command(name = "daysim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the per-minute environment table.
    Generate {
        /// Latitude in degrees, positive north (-90 to 90).
        #[arg(short, long, default_value = "-35.0", allow_hyphen_values = true)]
        latitude: f64,

        /// Solar declination in degrees (23.5 = June solstice, -23.5 =
        /// December solstice, 0 = equinox).
        #[arg(short, long, default_value = "23.5", allow_hyphen_values = true)]
        declination: f64,

        /// Solar azimuth in degrees, clockwise from North (0 to 360).
        #[arg(short, long, default_value = "0.0")]
        azimuth: f64,

        /// Output directory for the generated table.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for the output file.
        #[arg(short, long, default_value = "daycycle")]
        name: String,

        /// Scale the intensity falloff exponent by day length.
        #[arg(long)]
        seasonal_intensity: bool,

        /// Emit the light direction along the light's travel instead of
        /// toward the sun.
        #[arg(long)]
        light_from_sun: bool,
    },

    /// Display sunrise/sunset information for a configuration.
    Info {
        /// Latitude in degrees, positive north (-90 to 90).
        #[arg(short, long, default_value = "-35.0", allow_hyphen_values = true)]
        latitude: f64,

        /// Solar declination in degrees.
        #[arg(short, long, default_value = "23.5", allow_hyphen_values = true)]
        declination: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            latitude,
            declination,
            azimuth,
            output,
            name,
            seasonal_intensity,
            light_from_sun,
        } => {
            run_generate(
                latitude,
                declination,
                azimuth,
                output,
                name,
                seasonal_intensity,
                light_from_sun,
            );
        }
        Commands::Info {
            latitude,
            declination,
        } => {
            run_info(latitude, declination);
        }
    }
}

fn run_generate(
    latitude: f64,
    declination: f64,
    azimuth: f64,
    output: PathBuf,
    name: String,
    seasonal_intensity: bool,
    light_from_sun: bool,
) {
    validate_angles(latitude, declination, azimuth);

    println!("Daysim - Day/Night Environment Simulator");
    println!("========================================");
    println!("Latitude: {}°", latitude);
    println!("Declination: {}°", declination);
    println!("Azimuth: {}°", azimuth);
    println!("Output: {}", output.display());

    let start = Instant::now();

    let solar_config = SolarConfig {
        latitude_deg: latitude,
        declination_deg: declination,
        azimuth_deg: azimuth,
        convention: if light_from_sun {
            DirectionConvention::FromSun
        } else {
            DirectionConvention::TowardSun
        },
    };

    let light_config = if seasonal_intensity {
        println!("Seasonal intensity falloff enabled");
        LightConfig::seasonal()
    } else {
        LightConfig::reference()
    };

    println!("\nRunning simulation pipeline...");
    let pipeline = Pipeline::standard(
        TemperatureProfile::winter_reference(),
        solar_config,
        light_config,
    );

    let mut timeline = DayTimeline::new();
    pipeline
        .run_with_callbacks(
            &mut timeline,
            |name, i, total| {
                println!("  [{}/{}] Starting: {}", i + 1, total, name);
            },
            |name, i, total| {
                println!("  [{}/{}] Completed: {}", i + 1, total, name);
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during simulation: {}", e);
            std::process::exit(1);
        });

    let sim_time = start.elapsed();
    println!("Simulation completed in {:.2?}", sim_time);

    if let Some(cycle) = timeline.sun_cycle {
        print_cycle_summary(cycle);
    }
    if let Some((min_t, max_t)) = timeline.temperature_range() {
        println!("Temperature range: [{:.2} °C, {:.2} °C]", min_t, max_t);
    }

    println!("\nExporting table...");
    let path = export_timeline_csv(&timeline, &output, &name).unwrap_or_else(|e| {
        eprintln!("Error exporting CSV: {}", e);
        std::process::exit(1);
    });
    println!("  Exported {} rows: {}", SAMPLES_PER_DAY, path.display());

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}

fn run_info(latitude: f64, declination: f64) {
    validate_angles(latitude, declination, 0.0);

    let elevations: Vec<f64> = (0..SAMPLES_PER_DAY)
        .map(|minute| elevation_deg(latitude, declination, minute as f64))
        .collect();
    let cycle = scan_cycle(&elevations);

    println!("Daysim - Configuration Info");
    println!("===========================");
    println!();
    println!("Latitude: {}°", latitude);
    println!("Declination: {}°", declination);
    println!(
        "Solar noon elevation: {:.2}°",
        elevation_deg(latitude, declination, 720.0)
    );
    print_cycle_summary(cycle);
}

fn print_cycle_summary(cycle: SunCycle) {
    match cycle {
        SunCycle::Normal {
            sunrise_minute,
            sunset_minute,
        } => {
            println!("Sunrise: {}", minute_to_hhmm(sunrise_minute));
            println!("Sunset: {}", minute_to_hhmm(sunset_minute));
        }
        SunCycle::MidnightSun => println!("Midnight sun: the sun never sets"),
        SunCycle::PolarNight => println!("Polar night: the sun never rises"),
    }
    let daylight = cycle.daylight_minutes();
    println!(
        "Daylight: {} minutes ({})",
        daylight,
        minute_to_hhmm(daylight)
    );
}

fn validate_angles(latitude: f64, declination: f64, azimuth: f64) {
    if !(-90.0..=90.0).contains(&latitude) {
        eprintln!("Error: Latitude must be between -90 and 90 degrees");
        std::process::exit(1);
    }

    if !(-90.0..=90.0).contains(&declination) {
        eprintln!("Error: Declination must be between -90 and 90 degrees");
        std::process::exit(1);
    }

    if !(0.0..360.0).contains(&azimuth) {
        eprintln!("Error: Azimuth must be between 0 and 360 degrees");
        std::process::exit(1);
    }
}
