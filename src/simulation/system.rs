use std::f32::consts::TAU;

use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::matrix::InteractionMatrix;
use super::params::{SimulationParameters, SpawnSettings, WorldBounds};
use super::particle::Particle;

/// Décroissance de la répulsion courte portée : 2^(-25 d / d_max)
const REPULSION_FALLOFF: f32 = 25.0;

/// Système de particules : état, matrice d'interaction et paramètres.
///
/// L'hôte appelle [`ParticleSystem::step`] une fois par image puis lit
/// [`ParticleSystem::particles`] pour dessiner. La source aléatoire est injectée,
/// ce qui rend l'initialisation et `resize` reproductibles à graine fixe.
#[derive(Debug, Clone)]
pub struct ParticleSystem<R = StdRng> {
    particles: Vec<Particle>,
    matrix: InteractionMatrix,
    params: SimulationParameters,
    spawn: SpawnSettings,
    bounds: WorldBounds,
    rng: R,
    // Tampon réutilisé entre les pas
    forces: Vec<Vec2>,
}

impl ParticleSystem<StdRng> {
    /// Système à graine fixe, avec les paramètres par défaut
    pub fn seeded(seed: u64, particle_count: usize, type_count: usize, bounds: WorldBounds) -> Self {
        Self::initialize(particle_count, type_count, bounds, StdRng::seed_from_u64(seed))
    }
}

/// Graine tirée de l'horloge murale, à journaliser pour pouvoir rejouer la session
pub fn time_seed() -> u64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default() as u64
}

impl<R: Rng> ParticleSystem<R> {
    /// Crée `particle_count` particules avec les paramètres par défaut
    pub fn initialize(particle_count: usize, type_count: usize, bounds: WorldBounds, rng: R) -> Self {
        Self::new(
            particle_count,
            type_count,
            SimulationParameters::default(),
            SpawnSettings::default(),
            bounds,
            rng,
        )
    }

    pub fn new(
        particle_count: usize,
        type_count: usize,
        params: SimulationParameters,
        spawn: SpawnSettings,
        bounds: WorldBounds,
        mut rng: R,
    ) -> Self {
        // Au moins un type, sinon aucun index de matrice n'est valide
        let type_count = type_count.max(1);

        let particles = (0..particle_count)
            .map(|_| random_particle(&mut rng, type_count, &spawn, &bounds))
            .collect();
        let matrix = InteractionMatrix::random(type_count, &mut rng);

        Self::from_parts(particles, matrix, params, spawn, bounds, rng)
    }

    /// Assemble un système à partir d'un état donné (scénarios, rejeu).
    ///
    /// Les types des particules doivent être des index valides de `matrix`.
    pub fn from_parts(
        particles: Vec<Particle>,
        matrix: InteractionMatrix,
        params: SimulationParameters,
        spawn: SpawnSettings,
        bounds: WorldBounds,
        rng: R,
    ) -> Self {
        debug_assert!(particles.iter().all(|p| p.kind < matrix.type_count()));

        Self {
            forces: Vec::with_capacity(particles.len()),
            particles,
            matrix,
            params,
            spawn,
            bounds,
            rng,
        }
    }

    /// Un pas de simulation : forces, vitesses, positions puis rebonds.
    ///
    /// Toutes les forces sont calculées à partir des positions d'avant le pas,
    /// puis appliquées en une seconde passe.
    pub fn step(&mut self) {
        self.accumulate_forces();
        self.integrate();
    }

    /// Ajoute ou retire des particules jusqu'à atteindre `target`
    pub fn resize(&mut self, target: usize) {
        let current = self.particles.len();

        if current > target {
            self.particles.truncate(target);
        } else if current < target {
            let type_count = self.matrix.type_count();
            for _ in current..target {
                let particle = random_particle(&mut self.rng, type_count, &self.spawn, &self.bounds);
                self.particles.push(particle);
            }
        }
    }

    pub fn set_parameters(&mut self, params: SimulationParameters) {
        self.params = params;
    }

    /// Nouvelles dimensions du monde ; les particules hors limites
    /// sont ramenées par les rebonds du pas suivant.
    ///
    /// Des dimensions trop petites pour contenir une particule sont ignorées
    /// (elles écraseraient toutes les particules sur un même point) : renvoie `false`.
    pub fn set_bounds(&mut self, bounds: WorldBounds) -> bool {
        if !bounds.can_hold(self.params.particle_radius) {
            return false;
        }
        self.bounds = bounds;
        true
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.matrix
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn spawn_settings(&self) -> &SpawnSettings {
        &self.spawn
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn type_count(&self) -> usize {
        self.matrix.type_count()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Force nette sur chaque particule, O(n²) sans partitionnement spatial
    fn accumulate_forces(&mut self) {
        let params = &self.params;
        let max_distance = params.max_interaction_distance;

        self.forces.clear();
        self.forces.resize(self.particles.len(), Vec2::ZERO);

        for (i, p) in self.particles.iter().enumerate() {
            let mut force = Vec2::ZERO;

            for (j, q) in self.particles.iter().enumerate() {
                if i == j {
                    continue;
                }

                let delta = p.position - q.position;
                // Le plancher garantit d > 0
                let d2 = delta.length_squared().max(params.min_distance_squared);
                let d = d2.sqrt();

                if d >= max_distance {
                    continue;
                }

                let c = self.matrix.coefficient(p.kind, q.kind);
                let e = params.repulsion_strength * (-d / max_distance * REPULSION_FALLOFF).exp2();

                force += (c * d + e) * (delta / d);
            }

            self.forces[i] = force;
        }
    }

    fn integrate(&mut self) {
        let params = &self.params;
        let radius = params.particle_radius;
        let (min_x, max_x) = (self.bounds.min_x(radius), self.bounds.max_x(radius));
        let (min_y, max_y) = (self.bounds.min_y(radius), self.bounds.max_y(radius));

        for (p, force) in self.particles.iter_mut().zip(&self.forces) {
            p.velocity += *force;
            p.velocity *= params.friction;
            p.velocity = p
                .velocity
                .max(Vec2::splat(-params.max_speed))
                .min(Vec2::splat(params.max_speed));

            p.position += p.velocity;

            // Rebonds, chaque axe indépendamment ; la vitesse réfléchie reste bornée
            if p.position.x < min_x {
                p.velocity.x = reflect(p.velocity.x, params);
                p.position.x = min_x;
            }
            if p.position.x > max_x {
                p.velocity.x = reflect(p.velocity.x, params);
                p.position.x = max_x;
            }
            if p.position.y < min_y {
                p.velocity.y = reflect(p.velocity.y, params);
                p.position.y = min_y;
            }
            if p.position.y > max_y {
                p.velocity.y = reflect(p.velocity.y, params);
                p.position.y = max_y;
            }
        }
    }
}

/// Nouvelle particule dans le disque d'apparition, type et vitesse aléatoires
fn random_particle(
    rng: &mut impl Rng,
    type_count: usize,
    spawn: &SpawnSettings,
    bounds: &WorldBounds,
) -> Particle {
    let disk_radius = bounds.width.min(bounds.height) * spawn.disk_radius_factor;
    // sqrt : répartition uniforme sur la surface du disque
    let r = rng.random::<f32>().sqrt() * disk_radius;
    let theta = rng.random::<f32>() * TAU;
    let position = bounds.spawn_center() + Vec2::from_angle(theta) * r;

    let (v_min, v_max) = spawn.initial_velocity;
    let velocity = Vec2::new(
        random_in(rng, v_min, v_max),
        random_in(rng, v_min, v_max),
    );

    let kind = rng.random_range(0..type_count);

    Particle::new(position, velocity, kind)
}

/// Vitesse après un rebond, bornée par `max_speed` même si `bounciness > 1`
fn reflect(velocity: f32, params: &SimulationParameters) -> f32 {
    (-velocity * params.bounciness)
        .max(-params.max_speed)
        .min(params.max_speed)
}

fn random_in(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0, 150.0)
    }

    #[test]
    fn initialize_spawns_inside_disk() {
        let system = ParticleSystem::seeded(5, 300, 6, bounds());
        let center = bounds().spawn_center();
        let disk_radius = 600.0 * SpawnSettings::default().disk_radius_factor;
        let (v_min, v_max) = SpawnSettings::default().initial_velocity;

        assert_eq!(system.len(), 300);
        for p in system.particles() {
            assert!(p.position.distance(center) <= disk_radius + 1e-3);
            assert!(p.kind < 6);
            assert!(p.velocity.x >= v_min && p.velocity.x <= v_max);
            assert!(p.velocity.y >= v_min && p.velocity.y <= v_max);
        }
    }

    #[test]
    fn preset_spawn_settings_are_kept() {
        let config = crate::simulation::Preset::Fullscreen.config();
        let mut system = ParticleSystem::new(
            20,
            6,
            config.parameters,
            config.spawn,
            bounds(),
            StdRng::seed_from_u64(2),
        );
        system.resize(60);

        let spawn = system.spawn_settings();
        assert_eq!(*spawn, config.spawn);
        let (v_min, v_max) = spawn.initial_velocity;
        assert!(system.particles()[20..].iter().all(|p| {
            p.velocity.x >= v_min && p.velocity.x <= v_max && p.velocity.y >= v_min && p.velocity.y <= v_max
        }));
    }

    #[test]
    fn zero_types_still_yields_valid_kinds() {
        let system = ParticleSystem::seeded(1, 10, 0, bounds());

        assert_eq!(system.type_count(), 1);
        assert!(system.particles().iter().all(|p| p.kind == 0));
    }

    #[test]
    fn resize_shrinks_from_the_end() {
        let mut system = ParticleSystem::seeded(9, 50, 4, bounds());
        let head: Vec<Particle> = system.particles()[..20].to_vec();

        system.resize(20);

        assert_eq!(system.particles(), head.as_slice());
    }

    #[test]
    fn resize_to_current_count_draws_nothing() {
        let mut a = ParticleSystem::seeded(21, 40, 3, bounds());
        let mut b = a.clone();

        a.resize(40);
        a.resize(45);
        b.resize(45);

        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn lone_particle_keeps_its_velocity_without_friction() {
        let params = SimulationParameters { friction: 1.0, ..Default::default() };
        let particle = Particle::new(Vec2::new(400.0, 300.0), Vec2::new(1.5, -0.5), 0);
        let mut system = ParticleSystem::from_parts(
            vec![particle],
            InteractionMatrix::zeros(1),
            params,
            SpawnSettings::default(),
            bounds(),
            StdRng::seed_from_u64(0),
        );

        system.step();

        let p = system.particles()[0];
        assert_eq!(p.velocity, Vec2::new(1.5, -0.5));
        assert_eq!(p.position, Vec2::new(401.5, 299.5));
    }

    #[test]
    fn coincident_particles_stay_finite() {
        let params = SimulationParameters { repulsion_strength: 3.0, ..Default::default() };
        let mut system = ParticleSystem::from_parts(
            vec![Particle::at_rest(300.0, 300.0, 0), Particle::at_rest(300.0, 300.0, 0)],
            InteractionMatrix::from_rows(&[vec![-0.0005]]),
            params,
            SpawnSettings::default(),
            bounds(),
            StdRng::seed_from_u64(0),
        );

        for _ in 0..10 {
            system.step();
        }

        for p in system.particles() {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
    }
}
