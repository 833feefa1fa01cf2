//! Day/night cycle: clock progress to sun pose, light levels and sky color.

use crate::color::Rgb;
use crate::config::SimulationTuning;
use glam::Vec3;

/// Snapshot of the day/night cycle after the latest tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentState {
    /// Position within the current period, `0.0..1.0`
    pub progress: f32,
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub background_color: Rgb,
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    /// Unit vector pointing at the sun
    pub sun_direction: Vec3,
    /// Opacity of stars and moon
    pub celestial_opacity: f32,
}

impl EnvironmentState {
    /// State at the very start of a cycle
    pub fn initial(tuning: &SimulationTuning) -> Self {
        Self::at_progress(0.0, tuning)
    }

    pub fn at_progress(progress: f32, tuning: &SimulationTuning) -> Self {
        let elevation_deg = lerp(tuning.day.elevation_deg, tuning.night.elevation_deg, progress);
        let azimuth_deg = lerp(tuning.day.azimuth_deg, tuning.night.azimuth_deg, progress);
        let light = 1.0 - progress;

        Self {
            progress,
            elevation_deg,
            azimuth_deg,
            background_color: tuning.day.background.lerp(tuning.night.background, progress),
            ambient_intensity: light,
            directional_intensity: light,
            sun_direction: sun_direction(elevation_deg, azimuth_deg),
            celestial_opacity: celestial_opacity(progress),
        }
    }
}

/// Drives [`EnvironmentState`] from absolute elapsed time
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    state: EnvironmentState,
}

impl DayNightCycle {
    pub fn new(tuning: &SimulationTuning) -> Self {
        Self {
            state: EnvironmentState::initial(tuning),
        }
    }

    pub fn state(&self) -> &EnvironmentState {
        &self.state
    }

    /// Recompute the cycle for `elapsed`. A paused cycle keeps its previous state.
    ///
    /// Progress is derived from absolute time, so changing `speed_multiplier`
    /// mid-cycle jumps straight to the phase the new speed implies.
    pub fn advance(
        &mut self,
        elapsed: f32,
        speed_multiplier: f32,
        paused: bool,
        tuning: &SimulationTuning,
    ) -> &EnvironmentState {
        if !paused {
            let progress = cycle_progress(elapsed, tuning.cycle_duration_secs, speed_multiplier);
            self.state = EnvironmentState::at_progress(progress, tuning);
        }
        &self.state
    }
}

/// `(elapsed mod (base / speed)) / base`, wrapped into `0.0..1.0`.
///
/// For `speed >= 1` the wrap never triggers and the value never reaches 1. Slower
/// speeds stretch the period past `base`, and the wrap keeps the value a phase.
/// Within one period progress still climbs at `1 / base` per second whatever the
/// speed, so a slider value below 1 looks almost like 1.0: only the points where
/// progress wraps back to 0 move apart.
pub fn cycle_progress(elapsed: f32, cycle_duration_base: f32, speed_multiplier: f32) -> f32 {
    if cycle_duration_base <= 0.0 || speed_multiplier <= 0.0 {
        return 0.0;
    }
    let period = cycle_duration_base / speed_multiplier;
    let progress = (elapsed.rem_euclid(period) / cycle_duration_base).fract();
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if progress >= 1.0 { 0.0 } else { progress }
}

/// Stars and moon stay hidden for the first half of the cycle, then fade in.
pub fn celestial_opacity(progress: f32) -> f32 {
    ((progress - 0.5) * 2.0).max(0.0)
}

/// Unit vector for a sun at `elevation` above the horizon and `azimuth` around +Y.
///
/// Polar angle is measured from +Y, azimuth from +Z towards +X.
pub fn sun_direction(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos()).normalize()
}

/// Decides when the sky reflection has to be rebuilt.
///
/// Rebuilding is the most expensive thing a tick does, so it only happens when the
/// sun actually moved and at most once every `interval` ticks.
#[derive(Debug, Clone, Default)]
pub struct ReflectionRefresh {
    last_direction: Option<Vec3>,
    ticks_since_refresh: u32,
}

impl ReflectionRefresh {
    const DIRECTION_EPSILON: f32 = 1e-6;

    /// Returns true when the caller must regenerate the reflection this tick
    pub fn should_regenerate(&mut self, sun_direction: Vec3, interval: u32) -> bool {
        self.ticks_since_refresh = self.ticks_since_refresh.saturating_add(1);

        let moved = match self.last_direction {
            None => true,
            Some(last) => last.distance_squared(sun_direction) > Self::DIRECTION_EPSILON,
        };
        let due = self.last_direction.is_none() || self.ticks_since_refresh >= interval.max(1);

        if moved && due {
            self.last_direction = Some(sun_direction);
            self.ticks_since_refresh = 0;
            true
        } else {
            false
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_progress_stays_in_unit_range() {
        for speed in [0.1, 0.5, 1.0, 2.5, 5.0] {
            for step in 0..2_000 {
                let elapsed = step as f32 * 0.173;
                let progress = cycle_progress(elapsed, 20.0, speed);
                assert!((0.0..1.0).contains(&progress), "speed {speed} t {elapsed} -> {progress}");
            }
        }
    }

    #[test]
    fn test_progress_is_periodic() {
        for speed in [0.5_f32, 1.0, 2.0] {
            let period = 20.0 / speed;
            for elapsed in [0.0_f32, 1.5, 7.25, 13.0] {
                let a = cycle_progress(elapsed, 20.0, speed);
                let b = cycle_progress(elapsed + period, 20.0, speed);
                assert!((a - b).abs() < EPS, "speed {speed}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_progress_matches_formula_at_normal_speed() {
        assert!((cycle_progress(5.0, 20.0, 1.0) - 0.25).abs() < EPS);
        assert!((cycle_progress(25.0, 20.0, 1.0) - 0.25).abs() < EPS);
        // Double speed halves the period but keeps the base as divisor
        assert!((cycle_progress(5.0, 20.0, 2.0) - 0.25).abs() < EPS);
        assert!((cycle_progress(12.0, 20.0, 2.0) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_slow_speed_only_moves_wrap_points() {
        for elapsed in [3.0_f32, 15.0, 27.5, 50.0] {
            let normal = cycle_progress(elapsed, 20.0, 1.0);
            assert!((cycle_progress(elapsed, 20.0, 0.5) - normal).abs() < EPS);
            assert!((cycle_progress(elapsed, 20.0, 0.3) - normal).abs() < EPS);
        }
        // The 0.3 period ends at 66.67 s, so it restarts from zero there
        let slow = cycle_progress(70.0, 20.0, 0.3);
        assert!((slow - (70.0 - 200.0 / 3.0) / 20.0).abs() < EPS);
        assert!((cycle_progress(70.0, 20.0, 1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_speed_change_jumps_without_smoothing() {
        let before = cycle_progress(15.0, 20.0, 1.0);
        let after = cycle_progress(15.0, 20.0, 2.0);
        assert!((before - 0.75).abs() < EPS);
        assert!((after - 0.25).abs() < EPS);
    }

    #[test]
    fn test_state_at_cycle_start_is_full_day() {
        let tuning = SimulationTuning::default();
        let state = EnvironmentState::at_progress(0.0, &tuning);

        assert_eq!(state.elevation_deg, 45.0);
        assert_eq!(state.azimuth_deg, 180.0);
        assert_eq!(state.background_color, tuning.day.background);
        assert_eq!(state.ambient_intensity, 1.0);
        assert_eq!(state.directional_intensity, 1.0);
        assert_eq!(state.celestial_opacity, 0.0);
    }

    #[test]
    fn test_state_interpolates_linearly() {
        let tuning = SimulationTuning::default();
        let state = EnvironmentState::at_progress(0.75, &tuning);

        assert!((state.elevation_deg - (45.0 + (-55.0) * 0.75)).abs() < EPS);
        assert!((state.azimuth_deg - 45.0).abs() < EPS);
        assert!((state.ambient_intensity - 0.25).abs() < EPS);
        assert!((state.celestial_opacity - 0.5).abs() < EPS);
        let expected = tuning.day.background.lerp(tuning.night.background, 0.75);
        assert_eq!(state.background_color, expected);
    }

    #[test]
    fn test_paused_cycle_keeps_state() {
        let tuning = SimulationTuning::default();
        let mut cycle = DayNightCycle::new(&tuning);
        let running = *cycle.advance(6.0, 1.0, false, &tuning);
        let paused = *cycle.advance(15.0, 1.0, true, &tuning);
        assert_eq!(running, paused);
    }

    #[test]
    fn test_sun_direction_is_unit_and_follows_elevation() {
        let zenith = sun_direction(90.0, 0.0);
        assert!((zenith - Vec3::Y).length() < EPS);

        let south_horizon = sun_direction(0.0, 180.0);
        assert!((south_horizon - Vec3::NEG_Z).length() < EPS);

        let dir = sun_direction(45.0, 180.0);
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!((dir.y - 45.0_f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn test_celestial_opacity_ramps_in_second_half() {
        assert_eq!(celestial_opacity(0.0), 0.0);
        assert_eq!(celestial_opacity(0.5), 0.0);
        assert!((celestial_opacity(0.75) - 0.5).abs() < EPS);
        assert!((celestial_opacity(0.999) - 0.998).abs() < EPS);
    }

    #[test]
    fn test_reflection_refresh_only_when_sun_moves() {
        let mut refresh = ReflectionRefresh::default();
        let a = Vec3::Y;
        let b = Vec3::new(0.0, 0.9, 0.1).normalize();

        assert!(refresh.should_regenerate(a, 1));
        assert!(!refresh.should_regenerate(a, 1));
        assert!(refresh.should_regenerate(b, 1));
    }

    #[test]
    fn test_reflection_refresh_respects_interval() {
        let mut refresh = ReflectionRefresh::default();
        assert!(refresh.should_regenerate(sun_direction(45.0, 180.0), 3));

        let mut regenerated = Vec::new();
        for tick in 1..=6 {
            let dir = sun_direction(45.0 - tick as f32, 180.0);
            regenerated.push(refresh.should_regenerate(dir, 3));
        }
        assert_eq!(regenerated, vec![false, false, true, false, false, true]);
    }
}
