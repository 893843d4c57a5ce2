use bevy::math::Vec2;
use particle_life::{
    InteractionMatrix, Particle, ParticleSystem, SimulationParameters, SpawnSettings, WorldBounds,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Monde de 400x400 sans barre de contrôle
pub fn open_bounds() -> WorldBounds {
    WorldBounds::new(400.0, 400.0, 0.0)
}

/// Paramètres neutres : pas de friction, pas de répulsion
pub fn still_params(max_distance: f32) -> SimulationParameters {
    SimulationParameters {
        friction: 1.0,
        repulsion_strength: 0.0,
        max_interaction_distance: max_distance,
        ..Default::default()
    }
}

/// Système construit à partir de particules et d'une matrice explicites
pub fn scenario(
    particles: Vec<Particle>,
    rows: &[Vec<f32>],
    params: SimulationParameters,
    bounds: WorldBounds,
) -> ParticleSystem {
    ParticleSystem::from_parts(
        particles,
        InteractionMatrix::from_rows(rows),
        params,
        SpawnSettings::default(),
        bounds,
        StdRng::seed_from_u64(0),
    )
}

fn assert_invariants(system: &ParticleSystem) {
    let params = system.parameters();
    let radius = params.particle_radius;
    for p in system.particles() {
        assert!(p.velocity.x.abs() <= params.max_speed, "vitesse x {:?}", p);
        assert!(p.velocity.y.abs() <= params.max_speed, "vitesse y {:?}", p);
        assert!(system.bounds().contains(p.position, radius), "hors limites {:?}", p);
        assert!(p.kind < system.type_count());
    }
}

// ==================================================================================
// Invariants
// ==================================================================================

#[test]
fn particle_count_follows_resize() {
    let mut system = ParticleSystem::seeded(1, 120, 6, WorldBounds::new(800.0, 600.0, 150.0));

    for target in [300, 0, 57, 57, 1000] {
        system.resize(target);
        for _ in 0..5 {
            system.step();
            assert_eq!(system.len(), target);
        }
    }
}

#[test]
fn speed_and_position_stay_bounded() {
    let params = SimulationParameters {
        repulsion_strength: 8.0,
        max_speed: 3.0,
        bounciness: 1.2,
        ..Default::default()
    };
    let mut system = ParticleSystem::new(
        400,
        6,
        params,
        SpawnSettings { disk_radius_factor: 0.5, initial_velocity: (-1.0, 3.0) },
        WorldBounds::new(640.0, 480.0, 150.0),
        StdRng::seed_from_u64(99),
    );

    for _ in 0..200 {
        system.step();
        assert_invariants(&system);
    }
}

#[test]
fn shrinking_bounds_pulls_particles_back_inside() {
    let mut system = ParticleSystem::seeded(4, 200, 6, WorldBounds::new(1200.0, 900.0, 0.0));
    system.step();

    system.set_bounds(WorldBounds::new(300.0, 200.0, 150.0));
    system.step();

    assert_invariants(&system);
}

fn distinct_positions(system: &ParticleSystem) -> usize {
    let mut positions: Vec<(u32, u32)> = system
        .particles()
        .iter()
        .map(|p| (p.position.x.to_bits(), p.position.y.to_bits()))
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions.len()
}

#[test]
fn minimized_window_does_not_collapse_particles() {
    let full = WorldBounds::new(1280.0, 720.0, 150.0);
    let mut system = ParticleSystem::seeded(7, 50, 6, full);
    for _ in 0..5 {
        system.step();
    }

    // Fenêtre minimisée (0x0), puis restaurée
    assert!(!system.set_bounds(WorldBounds::new(0.0, 0.0, 150.0)));
    assert_eq!(*system.bounds(), full);
    system.step();
    assert_invariants(&system);
    assert_eq!(distinct_positions(&system), 50);

    assert!(system.set_bounds(full));
    system.step();
    assert_invariants(&system);
    assert_eq!(distinct_positions(&system), 50);
}

#[test]
fn window_narrower_than_control_bar_is_ignored() {
    let full = WorldBounds::new(800.0, 600.0, 150.0);
    let mut system = ParticleSystem::seeded(8, 30, 6, full);
    let radius = system.parameters().particle_radius;

    // min_x = 154 > max_x = 146
    assert!(!system.set_bounds(WorldBounds::new(150.0, 600.0, 150.0)));
    // Hauteur juste égale au diamètre : min_y == max_y
    assert!(!system.set_bounds(WorldBounds::new(800.0, 2.0 * radius, 150.0)));
    assert_eq!(*system.bounds(), full);

    system.step();
    assert_invariants(&system);
}

// ==================================================================================
// Loi de force
// ==================================================================================

#[test]
fn no_force_beyond_interaction_distance() {
    let mut system = scenario(
        vec![
            Particle::new(Vec2::new(100.0, 100.0), Vec2::new(0.5, 0.25), 0),
            Particle::new(Vec2::new(150.0, 100.0), Vec2::new(-0.25, 0.5), 0),
        ],
        &[vec![-0.0005]],
        SimulationParameters { repulsion_strength: 3.0, ..still_params(50.0) },
        open_bounds(),
    );

    system.step();

    assert_eq!(system.particles()[0].velocity, Vec2::new(0.5, 0.25));
    assert_eq!(system.particles()[1].velocity, Vec2::new(-0.25, 0.5));
}

#[test]
fn interaction_matrix_is_not_treated_as_symmetric() {
    let mut system = scenario(
        vec![Particle::at_rest(100.0, 100.0, 0), Particle::at_rest(110.0, 100.0, 1)],
        &[vec![0.0, -0.0004], vec![0.0002, 0.0]],
        still_params(50.0),
        open_bounds(),
    );

    system.step();

    let v0 = system.particles()[0].velocity;
    let v1 = system.particles()[1].velocity;
    // Type 0 attiré par le type 1, type 1 repoussé par le type 0
    assert!((v0.x - 0.004).abs() < 1e-7, "v0 = {v0:?}");
    assert!((v1.x - 0.002).abs() < 1e-7, "v1 = {v1:?}");
    assert_ne!(v0.x.abs(), v1.x.abs());
}

#[test]
fn repulsion_pushes_close_particles_apart() {
    let mut system = scenario(
        vec![Particle::at_rest(200.0, 200.0, 0), Particle::at_rest(200.0, 203.0, 0)],
        &[vec![0.0]],
        SimulationParameters { repulsion_strength: 3.0, ..still_params(30.0) },
        open_bounds(),
    );

    system.step();

    let [a, b] = [system.particles()[0], system.particles()[1]];
    assert!(a.velocity.y < 0.0);
    assert!(b.velocity.y > 0.0);
    assert_eq!(a.velocity.x, 0.0);
    assert!(b.position.y - a.position.y > 3.0);
}

// ==================================================================================
// Scénarios
// ==================================================================================

#[test]
fn same_type_attraction_moves_pair_together() {
    let mut system = scenario(
        vec![Particle::at_rest(100.0, 100.0, 0), Particle::at_rest(110.0, 100.0, 0)],
        &[vec![-0.0003]],
        still_params(50.0),
        open_bounds(),
    );

    system.step();

    let left = system.particles()[0];
    let right = system.particles()[1];
    let left_shift = left.position.x - 100.0;
    let right_shift = right.position.x - 110.0;

    assert!(left_shift > 0.0);
    assert!(right_shift < 0.0);
    assert!((left_shift + right_shift).abs() < 1e-6);
    assert_eq!(left.position.y, 100.0);
    assert_eq!(right.position.y, 100.0);
}

#[test]
fn left_wall_reflects_and_clamps() {
    let params = still_params(30.0);
    let bounds = WorldBounds::new(400.0, 400.0, 150.0);
    let min_x = bounds.min_x(params.particle_radius);

    let mut system = scenario(
        vec![Particle::new(Vec2::new(min_x, 200.0), Vec2::new(-2.0, 0.0), 0)],
        &[vec![0.0]],
        params,
        bounds,
    );

    system.step();

    let p = system.particles()[0];
    assert!(p.velocity.x > 0.0);
    assert_eq!(p.velocity.x, 2.0);
    assert_eq!(p.position.x, min_x);
}

#[test]
fn corner_reflects_on_both_axes() {
    let params = SimulationParameters { bounciness: 1.2, ..still_params(30.0) };
    let bounds = open_bounds();
    let (max_x, max_y) = (bounds.max_x(params.particle_radius), bounds.max_y(params.particle_radius));

    let mut system = scenario(
        vec![Particle::new(Vec2::new(max_x - 0.5, max_y - 0.5), Vec2::new(1.0, 1.0), 0)],
        &[vec![0.0]],
        params,
        bounds,
    );

    system.step();

    let p = system.particles()[0];
    assert_eq!(p.position, Vec2::new(max_x, max_y));
    assert!((p.velocity.x + 1.2).abs() < 1e-6);
    assert!((p.velocity.y + 1.2).abs() < 1e-6);
}

// ==================================================================================
// Reproductibilité
// ==================================================================================

#[test]
fn same_seed_replays_bitwise() {
    let bounds = WorldBounds::new(800.0, 600.0, 150.0);
    let mut a = ParticleSystem::seeded(2024, 250, 6, bounds);
    let mut b = ParticleSystem::seeded(2024, 250, 6, bounds);

    assert_eq!(a.matrix(), b.matrix());

    for step in 0..100 {
        if step == 40 {
            a.resize(300);
            b.resize(300);
        }
        a.step();
        b.step();
        assert_eq!(a.particles(), b.particles(), "divergence au pas {step}");
    }
}

#[test]
fn different_seeds_diverge() {
    let bounds = WorldBounds::new(800.0, 600.0, 150.0);
    let a = ParticleSystem::seeded(1, 50, 6, bounds);
    let b = ParticleSystem::seeded(2, 50, 6, bounds);

    assert_ne!(a.particles(), b.particles());
    assert_ne!(a.matrix(), b.matrix());
}

#[test]
fn parameters_apply_from_next_step() {
    let mut system = scenario(
        vec![Particle::new(Vec2::new(200.0, 200.0), Vec2::new(4.0, 0.0), 0)],
        &[vec![0.0]],
        still_params(30.0),
        open_bounds(),
    );

    system.set_parameters(SimulationParameters { friction: 0.5, ..still_params(30.0) });
    system.step();

    assert_eq!(system.particles()[0].velocity.x, 2.0);
    assert_eq!(system.particles()[0].position.x, 202.0);
}
