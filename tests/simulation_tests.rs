use particle_sim::{
    ParticleSimulator, SimulationConfig, ParticleType, IntegrationMethod, EmitterHandle,
    math::{Vector3, UniformRange},
    core::{EmitterConfig, ForceConfig, ColliderConfig},
    collision::{Collider, PlaneCollider, Side},
    emitters::{Emitter, PointEmitter},
    error::PhysicsError,
    integration::{EulerIntegrator, Integrator, PhaseState, RungeKuttaIntegrator},
};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn unit_mass_type(lifetime: UniformRange) -> ParticleType {
    ParticleType::new(UniformRange::constant(1.0), lifetime)
}

fn fountain_config(method: IntegrationMethod) -> SimulationConfig {
    SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::new(0.5, 1.5)))
        .with_emitter(EmitterConfig::point(
            Vector3::zero(),
            vec![0],
            60.0,
            50,
            UniformRange::new(5.0, 15.0),
        ))
        .with_emitter(EmitterConfig::disk(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(-1.0, 1.2, -0.5),
            3.0,
            vec![0],
            30.0,
            20,
            UniformRange::new(10.0, 20.0),
        ))
        .with_force(ForceConfig::Drag { wind: Vector3::zero(), drag: 0.1 })
        .with_force(ForceConfig::Gravity { acceleration: Vector3::new(0.0, -9.81, 0.0) })
        .with_collider(ColliderConfig::Plane {
            position: Vector3::new(0.0, -5.0, 0.0),
            normal: Vector3::new(0.3, 0.9, 0.0),
        })
        .with_method(method)
}

fn simulator(config: &SimulationConfig, seed: u64) -> ParticleSimulator {
    ParticleSimulator::with_rng(config, StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_live_count_never_exceeds_limit() {
    for method in [IntegrationMethod::Basic, IntegrationMethod::Euler, IntegrationMethod::Rk4] {
        let config = fountain_config(method);
        let mut sim = simulator(&config, 1);

        for _ in 0..300 {
            sim.update(1.0 / 30.0).unwrap();
            let mut total = 0;
            for emitter in sim.emitters() {
                assert!(emitter.live_count() <= emitter.limit());
                total += emitter.live_count();
            }
            // Expiry and release happen in the same pass, so the counts agree exactly
            assert_eq!(total, sim.particle_count());
        }
    }
}

#[test]
fn test_emitters_saturate_at_limit() {
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(100.0)))
        .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 1000.0, 5, UniformRange::new(1.0, 2.0)));
    let mut sim = simulator(&config, 2);

    // Expected 1000 spawn events, only 5 slots
    sim.update(1.0).unwrap();
    assert_eq!(sim.live_count(EmitterHandle::new(0)).unwrap(), 5);
    assert_eq!(sim.last_stats().emitted, 5);

    sim.update(1.0).unwrap();
    assert_eq!(sim.particle_count(), 5);
    assert_eq!(sim.last_stats().emitted, 0);

    assert!(matches!(
        sim.live_count(EmitterHandle::new(5)),
        Err(PhysicsError::ResourceNotFound(_))
    ));
}

#[test]
fn test_lifetimes_decrease_and_expired_particles_vanish() {
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::new(0.2, 0.6)))
        .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 50.0, 1000, UniformRange::new(1.0, 2.0)));
    let mut sim = simulator(&config, 3);

    let dt = 0.05;
    for _ in 0..100 {
        let before: Vec<(Vector3, f32)> = sim
            .particles()
            .iter()
            .map(|p| (p.position, p.lifetime))
            .collect();

        let particles = sim.update(dt).unwrap();
        assert!(particles.iter().all(|p| p.lifetime > 0.0));

        // Survivors keep their relative order; each lost exactly dt of lifetime
        let survivors: Vec<f32> = before
            .iter()
            .filter(|(_, lifetime)| lifetime - dt > 0.0)
            .map(|(_, lifetime)| lifetime - dt)
            .collect();
        for (expected, particle) in survivors.iter().zip(particles.iter()) {
            assert_relative_eq!(particle.lifetime, *expected, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_zero_force_motion_is_linear() {
    let derivative = |s: &PhaseState| PhaseState::new(s.velocity, Vector3::zero());
    let start = PhaseState::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, -1.5, 2.0));
    let dt = 0.25;
    let expected = start.position + start.velocity * dt;

    let euler = EulerIntegrator::new().integrate(&derivative, start, dt);
    assert_relative_eq!(euler.position, expected, epsilon = 1e-6);
    assert_eq!(euler.velocity, start.velocity);

    let rk4 = RungeKuttaIntegrator::new().integrate(&derivative, start, dt);
    assert_relative_eq!(rk4.position, expected, epsilon = 1e-6);
    assert_eq!(rk4.velocity, start.velocity);
}

#[test]
fn test_rk4_free_fall_step() {
    let g = Vector3::new(0.0, -9.81, 0.0);
    let derivative = |s: &PhaseState| PhaseState::new(s.velocity, g);
    let next = RungeKuttaIntegrator::new().integrate(&derivative, PhaseState::new(Vector3::zero(), Vector3::zero()), 1.0);

    assert_relative_eq!(next.velocity, Vector3::new(0.0, -9.81, 0.0), epsilon = 1e-5);
    assert_relative_eq!(next.position, Vector3::new(0.0, -4.905, 0.0), epsilon = 1e-5);
}

#[test]
fn test_emission_rate_matches_poisson_mean() {
    let types = [unit_mass_type(UniformRange::constant(1.0))];
    let shape = PointEmitter::new(Vector3::zero()).unwrap().into();
    let emitter = Emitter::new(shape, &types, vec![0], 1000.0, 1_000_000, UniformRange::new(1.0, 2.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let trials = 200;
    let total: usize = (0..trials).map(|_| emitter.sample_emitted(1.0, usize::MAX, &mut rng)).sum();
    let mean = total as f32 / trials as f32;

    // Standard error of the mean is sqrt(1000 / 200) ~ 2.2
    assert!((mean - 1000.0).abs() < 15.0, "mean spawn count was {mean}");
}

#[test]
fn test_plane_crossing_inverts_normal_velocity() {
    // A particle launched straight down toward the floor at y = -0.55
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(100.0)))
        .with_emitter(EmitterConfig::disk(
            Vector3::zero(),
            Vector3::new(0.0, -1.0, 0.0),
            0.001,
            vec![0],
            1.0,
            1,
            UniformRange::constant(10.0),
        ))
        .with_collider(ColliderConfig::Plane {
            position: Vector3::new(0.0, -0.55, 0.0),
            normal: Vector3::unit_y(),
        })
        .with_method(IntegrationMethod::Euler);
    let mut sim = simulator(&config, 5);

    // Wait for the single particle to appear
    let mut steps = 0;
    while sim.particle_count() == 0 {
        sim.update(0.01).unwrap();
        steps += 1;
        assert!(steps < 10_000);
    }

    let plane = PlaneCollider::new(Vector3::new(0.0, -0.55, 0.0), Vector3::unit_y()).unwrap();
    loop {
        let before = sim.particles()[0].clone();
        let side_before = plane.which_side(before.position);
        let particle = sim.update(0.01).unwrap()[0].clone();

        if side_before == Side::Positive && plane.which_side(particle.position) == Side::Negative {
            let n = plane.normal();
            // No forces, so the pre-reflection velocity equals the previous velocity
            assert_relative_eq!(particle.velocity.dot(&n), -before.velocity.dot(&n), epsilon = 1e-5);
            let tangential_before = before.velocity - n * before.velocity.dot(&n);
            let tangential_after = particle.velocity - n * particle.velocity.dot(&n);
            assert_relative_eq!(tangential_after, tangential_before, epsilon = 1e-5);
            assert_eq!(sim.last_stats().collisions, 1);
            break;
        }
        steps += 1;
        assert!(steps < 10_000, "particle never crossed the plane");
    }
}

#[test]
fn test_multiple_colliders_reflect_independently() {
    // Two coincident planes with opposite normals: a crossing flips both, so the
    // velocity is reflected twice and ends up unchanged
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(100.0)))
        .with_emitter(EmitterConfig::disk(
            Vector3::zero(),
            Vector3::new(0.0, -1.0, 0.0),
            0.001,
            vec![0],
            1.0,
            1,
            UniformRange::constant(10.0),
        ))
        .with_collider(ColliderConfig::Plane { position: Vector3::new(0.0, -0.55, 0.0), normal: Vector3::unit_y() })
        .with_collider(ColliderConfig::Plane { position: Vector3::new(0.0, -0.55, 0.0), normal: -Vector3::unit_y() })
        .with_method(IntegrationMethod::Euler);
    let mut sim = simulator(&config, 6);

    let mut steps = 0;
    while sim.last_stats().collisions == 0 {
        sim.update(0.01).unwrap();
        steps += 1;
        assert!(steps < 20_000);
    }
    assert_eq!(sim.last_stats().collisions, 2);
    assert!(sim.particles()[0].velocity.y < 0.0);
}

#[test]
fn test_radial_force_at_origin_stays_finite() {
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(10.0)))
        .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 100.0, 10, UniformRange::constant(0.0)))
        .with_force(ForceConfig::Radial { position: Vector3::zero(), strength: 5.0 });
    let mut sim = simulator(&config, 7);

    for _ in 0..20 {
        let particles = sim.update(0.1).unwrap();
        assert!(particles.iter().all(|p| p.is_finite()));
    }
    assert_eq!(sim.last_stats().dropped, 0);
}

#[test]
fn test_overflowing_particles_are_dropped_and_released() {
    // A strong field just beside its origin overflows the acceleration on the first step
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(10.0)))
        .with_emitter(EmitterConfig::point(Vector3::new(1.0e-3, 0.0, 0.0), vec![0], 1000.0, 5, UniformRange::constant(1.0)))
        .with_force(ForceConfig::Radial { position: Vector3::zero(), strength: 3.0e38 })
        .with_method(IntegrationMethod::Euler);
    let mut sim = simulator(&config, 12);

    let particles = sim.update(0.1).unwrap();
    assert!(particles.iter().all(|p| p.is_finite()));

    let stats = sim.last_stats();
    assert!(stats.emitted > 0);
    assert_eq!(stats.dropped, stats.emitted);
    assert_eq!(stats.active, 0);
    assert_eq!(sim.live_count(EmitterHandle::new(0)).unwrap(), 0);
}

#[test]
fn test_high_rate_emitter_respects_limit() {
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(10.0)))
        .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 1.0e9, 10, UniformRange::constant(1.0)));
    let mut sim = simulator(&config, 13);

    assert_eq!(sim.update(1.0).unwrap().len(), 10);
    assert_eq!(sim.update(1.0).unwrap().len(), 10);
    assert_eq!(sim.last_stats().emitted, 0);
}

#[test]
fn test_invalid_time_step_is_rejected() {
    let config = fountain_config(IntegrationMethod::Rk4);
    let mut sim = simulator(&config, 8);
    assert!(matches!(sim.update(-0.1), Err(PhysicsError::InvalidParameter(_))));
    assert!(sim.update(f32::NAN).is_err());
    assert!(sim.update(0.0).unwrap().is_empty());
}

#[test]
fn test_construction_errors() {
    // Empty particle table
    let config = SimulationConfig::new();
    assert!(ParticleSimulator::new(&config).is_err());

    // Zero limit
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(1.0)))
        .with_emitter(EmitterConfig::point(Vector3::zero(), vec![0], 10.0, 0, UniformRange::new(1.0, 2.0)));
    assert!(ParticleSimulator::new(&config).is_err());

    // Zero-mass particle type
    let config = SimulationConfig::new()
        .with_particle_type(ParticleType::new(UniformRange::constant(0.0), UniformRange::constant(1.0)));
    assert!(ParticleSimulator::new(&config).is_err());

    // Degenerate plane
    let config = SimulationConfig::new()
        .with_particle_type(unit_mass_type(UniformRange::constant(1.0)))
        .with_collider(ColliderConfig::Plane { position: Vector3::zero(), normal: Vector3::zero() });
    assert!(ParticleSimulator::new(&config).is_err());
}

#[test]
fn test_snapshot_matches_particles() {
    let config = fountain_config(IntegrationMethod::Euler);
    let mut sim = simulator(&config, 9);
    for _ in 0..10 {
        sim.update(1.0 / 60.0).unwrap();
    }
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.len(), sim.particle_count());
    for (view, particle) in snapshot.iter().zip(sim.particles()) {
        assert_eq!(view.position, particle.position);
        assert_eq!(view.mass, particle.mass);
    }
    assert_relative_eq!(sim.elapsed_time(), 10.0 / 60.0, epsilon = 1e-5);
}

#[cfg(feature = "serialize")]
mod json_config {
    use super::*;

    const FOUNTAIN: &str = r#"{
        "particles": [ { "mass": [1, 1], "lifetime": [0.5, 1.5] } ],
        "emitters": [
            { "type": "point", "particles": [0], "rate": 60, "limit": 10000,
              "velocity": [5, 15], "parameters": { "position": [0, 0, 0] } },
            { "type": "disk", "particles": [0], "rate": 30, "limit": 10000,
              "velocity": [10, 20],
              "parameters": { "position": [10, 0, 0], "direction": [-1, 1.2, -0.5], "radius": 3 } }
        ],
        "forces": [
            { "type": "drag", "parameters": { "wind": [0, 0, 0], "drag": 0.1 } },
            { "type": "gravity", "parameters": { "acceleration": [0, -9.81, 0] } }
        ],
        "colliders": [
            { "type": "plane", "parameters": { "position": [0, -5, 0], "normal": [0.3, 0.9, 0] } }
        ],
        "method": "runge-kutta"
    }"#;

    #[test]
    fn test_parses_tagged_parameter_format() {
        let config = SimulationConfig::from_json_str(FOUNTAIN).unwrap();
        assert_eq!(config.emitters.len(), 2);
        assert_eq!(config.forces.len(), 2);
        assert_eq!(config.method, IntegrationMethod::Rk4);

        let mut sim = ParticleSimulator::new(&config).unwrap();
        sim.update(0.1).unwrap();
    }

    #[test]
    fn test_unknown_force_type_is_rejected() {
        let json = FOUNTAIN.replace("\"drag\", \"parameters\"", "\"vortex\", \"parameters\"");
        let err = SimulationConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));
        assert!(err.to_string().contains("vortex"), "{err}");
    }
}
