//! Demo binary: drives the LOD frame loop against a scripted camera fly-away.
//!
//! A single object sits at the origin while the camera retreats along +Z at a
//! configurable speed, crossing both LOD thresholds. Configuration is loaded
//! from `config.ron` and can be overridden via CLI flags, e.g.
//! `cargo run -p aurora-app -- --camera-speed 40 --duration 6`.

use std::time::{Duration, Instant};

use clap::Parser;
use glam::{Mat4, Vec3};
use tracing::{debug, info};

use aurora_app::{FrameClock, LodDriver};
use aurora_config::{CliArgs, Config};
use aurora_render::{LodPipelines, PipelineHandle, RenderBackend, ShaderConstants};

/// Backend stand-in that reports binds and constant uploads through tracing.
#[derive(Default)]
struct ConsoleBackend {
    bound: Option<PipelineHandle>,
    draws: u64,
}

impl RenderBackend for ConsoleBackend {
    fn bind_pipeline(&mut self, handle: PipelineHandle) {
        if self.bound != Some(handle) {
            info!(pipeline = handle.raw(), "bound pipeline");
            self.bound = Some(handle);
        }
    }

    fn upload_constants(&mut self, constants: &ShaderConstants) {
        debug!(
            fac_prev = constants.fac_prev,
            fac_new = constants.fac_new,
            t = constants.t,
            fac = constants.fac,
            "uploaded shader constants"
        );
    }

    fn draw(&mut self) {
        self.draws += 1;
    }
}

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    aurora_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let scene = config.scene.clone();
    info!(
        start_distance = scene.start_distance,
        camera_speed = scene.camera_speed,
        duration_s = scene.duration_s,
        "starting LOD demo"
    );

    let pipelines = LodPipelines::new(
        PipelineHandle::new(0),
        PipelineHandle::new(1),
        PipelineHandle::new(2),
    );
    let mut driver = LodDriver::new(pipelines);
    let mut backend = ConsoleBackend::default();
    let mut clock = FrameClock::new();

    let projection = Mat4::perspective_rh(60f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    let mut distance = scene.start_distance;
    let start = Instant::now();

    while start.elapsed().as_secs_f32() < scene.duration_s {
        let dt = clock.tick();
        distance += scene.camera_speed * dt;

        let eye = Vec3::new(0.0, 0.0, distance);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        driver.frame(dt, distance, projection * view, &mut backend);

        std::thread::sleep(Duration::from_millis(16));
    }

    info!(
        frames = backend.draws,
        final_distance = distance,
        final_tier = ?driver.tier(),
        final_factor = driver.blend().target_factor(),
        "demo finished"
    );
}
