//! The frame orchestrator: one `tick` advances every subsystem in a fixed order.

use crate::camera::{CameraMode, CameraParent, CameraRig, OrbitInput, Projection};
use crate::celestial::{Moon, StarField};
use crate::clock::{ClockTick, SimulationClock};
use crate::config::SimulationTuning;
use crate::environment::{DayNightCycle, EnvironmentState, ReflectionRefresh};
use crate::error::SimError;
use crate::flocking::Flock;
use crate::input::InputState;
use crate::params::ParameterStore;
use crate::particles::SpraySystem;
use crate::surface::SurfaceState;
use crate::vehicle::{Vehicle, WakeState};
use crate::weather::{WeatherMachine, WeatherMode};
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What changed structurally during one tick, for the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub tick: ClockTick,
    pub weather_applied: Option<WeatherMode>,
    pub camera_reparented: bool,
    pub spray_created: bool,
    pub flock_rebuilt: bool,
    pub stars_regenerated: bool,
    pub reflection_refreshed: bool,
}

/// Parameter values the simulation last acted on. A difference is an edit.
#[derive(Debug, Clone, Copy)]
struct AppliedEdges {
    enable_particles: bool,
    enable_seagulls: bool,
    star_density: u32,
}

pub struct Simulation {
    tuning: SimulationTuning,
    clock: SimulationClock,
    weather: WeatherMachine,
    cycle: DayNightCycle,
    reflection: ReflectionRefresh,
    surface: SurfaceState,
    vehicle: Vehicle,
    wake: WakeState,
    spray: SpraySystem,
    flock: Flock,
    stars: StarField,
    moon: Moon,
    camera: CameraRig,
    projection: Projection,
    applied: AppliedEdges,
    rng: StdRng,
}

impl Simulation {
    /// Build every subsystem from the current parameters. The configured weather
    /// preset is written to `params` first, then enabled features are created.
    pub fn new(params: &mut ParameterStore, tuning: SimulationTuning) -> Self {
        let mut weather = WeatherMachine::default();
        weather.select(params.weather_mode, params);

        let mut rng = match tuning.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let cycle = DayNightCycle::new(&tuning);
        let surface = SurfaceState::new(params, cycle.state());

        let mut spray = SpraySystem::default();
        spray.set_enabled(
            params.enable_particles,
            tuning.spray_pool_size,
            tuning.spray_life_decrement,
            &mut rng,
        );
        let mut flock = Flock::default();
        if params.enable_seagulls {
            flock.rebuild(tuning.flock_size, &mut rng);
        }
        let stars = StarField::generate(params.star_density, &mut rng);

        Self {
            clock: SimulationClock::new(),
            weather,
            surface,
            vehicle: Vehicle::new(&tuning),
            wake: WakeState::hidden(),
            spray,
            flock,
            stars,
            moon: Moon::default(),
            camera: CameraRig::default(),
            projection: Projection::default(),
            applied: AppliedEdges {
                enable_particles: params.enable_particles,
                enable_seagulls: params.enable_seagulls,
                star_density: params.star_density,
            },
            reflection: ReflectionRefresh::default(),
            cycle,
            tuning,
            rng,
        }
    }

    /// Advance one frame.
    ///
    /// Order: clock, parameter edits, environment, vehicle, particles, flock, camera.
    pub fn tick(
        &mut self,
        params: &mut ParameterStore,
        input: &InputState,
        delta: f32,
    ) -> FrameReport {
        let tick = self.clock.advance(delta);
        let mut report = FrameReport {
            tick,
            ..Default::default()
        };

        self.reconcile(params, &mut report);

        let environment = *self.cycle.advance(
            tick.elapsed,
            params.day_night_speed,
            params.pause_day_night,
            &self.tuning,
        );
        self.surface.tick(params, &environment);
        report.reflection_refreshed = self
            .reflection
            .should_regenerate(environment.sun_direction, self.tuning.reflection_refresh_interval);
        self.stars
            .tick(tick.elapsed, environment.celestial_opacity, params.pause_day_night);
        self.moon.tick(params.moon_size, environment.celestial_opacity);

        let input = self.effective_input(params, input);
        self.vehicle.tick(&input, params, tick.elapsed, &self.tuning);
        self.wake = self.wake.track(&self.vehicle, params);

        let spray_active = input.any() || self.weather.active() == WeatherMode::Stormy;
        let ship_position = self.vehicle.is_present().then_some(self.vehicle.position);
        self.spray.tick(spray_active, ship_position, &mut self.rng);

        self.flock.tick(tick.elapsed);

        self.camera.tick(&self.vehicle);

        report
    }

    /// Act on parameters edited since the previous tick
    fn reconcile(&mut self, params: &mut ParameterStore, report: &mut FrameReport) {
        if params.weather_mode != self.weather.active() {
            self.weather.select(params.weather_mode, params);
            report.weather_applied = Some(params.weather_mode);
        }

        if params.camera_mode != self.camera.mode {
            let parent = self.camera.parent;
            self.camera.set_mode(params.camera_mode, &self.vehicle);
            report.camera_reparented = parent != self.camera.parent;
        }

        if params.enable_particles != self.applied.enable_particles {
            report.spray_created = self.spray.set_enabled(
                params.enable_particles,
                self.tuning.spray_pool_size,
                self.tuning.spray_life_decrement,
                &mut self.rng,
            );
            self.applied.enable_particles = params.enable_particles;
        }

        if params.enable_seagulls != self.applied.enable_seagulls {
            if params.enable_seagulls {
                self.flock.rebuild(self.tuning.flock_size, &mut self.rng);
                report.flock_rebuilt = true;
            } else {
                self.flock.clear();
            }
            self.applied.enable_seagulls = params.enable_seagulls;
        }

        if params.star_density != self.applied.star_density {
            self.stars.regenerate(params.star_density, &mut self.rng);
            self.applied.star_density = params.star_density;
            report.stars_regenerated = true;
        }
    }

    /// Auto-sail replaces the keyboard while it is on and the ship exists
    fn effective_input(&self, params: &ParameterStore, input: &InputState) -> InputState {
        if params.enable_auto_sail && self.vehicle.is_present() {
            InputState::auto_sail(self.vehicle.position, self.tuning.auto_sail_boundary)
        } else {
            *input
        }
    }

    /// Apply a weather preset right away, even if it is already active
    pub fn select_weather(&mut self, mode: WeatherMode, params: &mut ParameterStore) {
        self.weather.select(mode, params);
    }

    pub fn begin_loading(&mut self) {
        self.vehicle.begin_loading();
    }

    /// The ship model finished loading with the given measured size
    pub fn on_model_ready(&mut self, size: Vec3) -> Result<(), SimError> {
        self.vehicle.on_model_ready(size)?;
        log::info!("Ship model ready, size {size}");
        self.camera.frame_model(size);
        // A mode picked while the ship was missing takes effect now
        if self.camera.mode != CameraMode::Orbit {
            self.camera.set_mode(self.camera.mode, &self.vehicle);
        }
        Ok(())
    }

    pub fn on_model_failed(&mut self, reason: impl Into<String>) {
        self.vehicle.on_model_failed(reason);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.projection.on_resize(width, height);
    }

    pub fn orbit_camera(&mut self, input: &OrbitInput) {
        self.camera.orbit(input);
    }

    pub fn tuning(&self) -> &SimulationTuning {
        &self.tuning
    }

    pub fn now(&self) -> ClockTick {
        self.clock.now()
    }

    pub fn weather(&self) -> WeatherMode {
        self.weather.active()
    }

    pub fn environment(&self) -> &EnvironmentState {
        self.cycle.state()
    }

    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn wake(&self) -> &WakeState {
        &self.wake
    }

    pub fn spray(&self) -> &SpraySystem {
        &self.spray
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_parent(&self) -> CameraParent {
        self.camera.parent
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}
