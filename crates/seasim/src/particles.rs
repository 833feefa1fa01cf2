//! Sea spray: a fixed pool of particles recycled around the ship.

use glam::Vec3;
use rand::Rng;

/// Longest life a particle can be given
pub const MAX_LIFE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Always in `0.0..=MAX_LIFE`; zero or less means due for recycling
    pub remaining_life: f32,
}

impl Particle {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec3::new(
                (rng.random::<f32>() - 0.5) * 10.0,
                rng.random::<f32>() * 5.0 - 7.0,
                (rng.random::<f32>() - 0.5) * 10.0,
            ),
            velocity: Vec3::new(
                (rng.random::<f32>() - 0.5) * 0.1,
                rng.random::<f32>() * 0.2,
                (rng.random::<f32>() - 0.5) * 0.1,
            ),
            remaining_life: fresh_life(rng),
        }
    }

    /// Put the particle back next to the ship with a new life. Velocity is kept.
    fn recycle(&mut self, around: Vec3, rng: &mut impl Rng) {
        self.position = Vec3::new(
            around.x + (rng.random::<f32>() - 0.5) * 10.0,
            -7.0 + rng.random::<f32>() * 2.0,
            around.z + (rng.random::<f32>() - 0.5) * 10.0,
        );
        self.remaining_life = fresh_life(rng);
    }
}

/// Uniform in `(0, MAX_LIFE]`, never zero
fn fresh_life(rng: &mut impl Rng) -> f32 {
    MAX_LIFE - rng.random_range(0.0..MAX_LIFE)
}

/// Fixed-size pool. Particles are only ever reset in place.
#[derive(Debug, Clone)]
pub struct SprayPool {
    particles: Vec<Particle>,
    life_decrement: f32,
}

impl SprayPool {
    pub fn new(count: usize, life_decrement: f32, rng: &mut impl Rng) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::spawn(rng)).collect(),
            life_decrement,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Integrate every particle once, recycling the expired ones around `around`
    pub fn step(&mut self, around: Vec3, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            particle.remaining_life -= self.life_decrement;
            if particle.remaining_life <= 0.0 {
                particle.recycle(around, rng);
            }
        }
    }
}

/// The spray feature: an optional pool plus its visibility
#[derive(Debug, Clone, Default)]
pub struct SpraySystem {
    pool: Option<SprayPool>,
    visible: bool,
}

impl SpraySystem {
    pub fn pool(&self) -> Option<&SprayPool> {
        self.pool.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.pool.is_some()
    }

    /// Turning the feature on creates the pool the first time; turning it off only
    /// hides it. Returns true when a pool was created.
    pub fn set_enabled(
        &mut self,
        enabled: bool,
        count: usize,
        life_decrement: f32,
        rng: &mut impl Rng,
    ) -> bool {
        self.visible = enabled;
        if enabled && self.pool.is_none() {
            self.pool = Some(SprayPool::new(count, life_decrement, rng));
            log::info!("Spray pool created with {count} particles");
            return true;
        }
        false
    }

    /// Particles only move while the ship is moving or a storm is blowing.
    /// `ship_position` is `None` while the ship is absent.
    pub fn tick(&mut self, active: bool, ship_position: Option<Vec3>, rng: &mut impl Rng) {
        if !self.visible || !active {
            return;
        }
        let (Some(pool), Some(around)) = (self.pool.as_mut(), ship_position) else {
            return;
        };
        pool.step(around, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_pool_has_fresh_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = SprayPool::new(500, 0.01, &mut rng);

        assert_eq!(pool.len(), 500);
        for particle in pool.particles() {
            assert!(particle.remaining_life > 0.0 && particle.remaining_life <= MAX_LIFE);
            assert!(particle.velocity.y >= 0.0);
        }
    }

    #[test]
    fn test_life_never_negative_after_step() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = SprayPool::new(64, 0.25, &mut rng);
        let ship = Vec3::new(30.0, -7.8, -50.0);

        for _ in 0..200 {
            pool.step(ship, &mut rng);
            for particle in pool.particles() {
                assert!(particle.remaining_life > 0.0);
                assert!(particle.remaining_life <= MAX_LIFE);
            }
        }
    }

    #[test]
    fn test_expired_particle_respawns_near_ship() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = SprayPool::new(1, 0.01, &mut rng);
        pool.particles[0].remaining_life = 0.005;
        let ship = Vec3::new(100.0, -7.8, 200.0);

        pool.step(ship, &mut rng);

        let particle = pool.particles()[0];
        assert!(particle.remaining_life > 0.0);
        assert!((particle.position.x - ship.x).abs() <= 5.0);
        assert!((particle.position.z - ship.z).abs() <= 5.0);
        assert!((-7.0..=-5.0).contains(&particle.position.y));
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = SprayPool::new(1, 0.01, &mut rng);
        pool.particles[0].remaining_life = 1.0;
        let before = pool.particles()[0];

        pool.step(Vec3::ZERO, &mut rng);

        let after = pool.particles()[0];
        assert_eq!(after.position, before.position + before.velocity);
        assert!((after.remaining_life - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_inactive_spray_holds_position() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut spray = SpraySystem::default();
        spray.set_enabled(true, 20, 0.01, &mut rng);
        let before = spray.pool().unwrap().particles().to_vec();

        spray.tick(false, Some(Vec3::ZERO), &mut rng);
        spray.tick(true, None, &mut rng);

        assert_eq!(spray.pool().unwrap().particles(), before.as_slice());
    }

    #[test]
    fn test_toggle_off_hides_without_destroying() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut spray = SpraySystem::default();

        assert!(!spray.set_enabled(false, 500, 0.01, &mut rng));
        assert!(spray.pool().is_none());

        assert!(spray.set_enabled(true, 500, 0.01, &mut rng));
        let pool = spray.pool().unwrap();
        assert_eq!(pool.len(), 500);
        assert!(pool.particles().iter().all(|p| p.remaining_life > 0.0));

        assert!(!spray.set_enabled(false, 500, 0.01, &mut rng));
        assert!(!spray.is_visible());
        assert_eq!(spray.pool().map(SprayPool::len), Some(500));

        assert!(!spray.set_enabled(true, 500, 0.01, &mut rng));
        assert!(spray.is_visible());
    }
}
