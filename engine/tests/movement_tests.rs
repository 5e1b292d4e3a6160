//! Movement Tests - Tick Properties and Reference Scenarios
//!
//! Drives `Simulation::advance` with the reference tuning and checks the
//! locomotion invariants, the jump grace windows and knockback.

use bunnyhop_engine::config::{BoundaryPolicy, SimConfig, WorldConfig};
use bunnyhop_engine::player::{KnockbackSystem, PlayerState};
use bunnyhop_engine::{ExplosionEvent, InputSnapshot, Simulation};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn airborne_at(config: &SimConfig, position: Vec3) -> PlayerState {
    let mut state = PlayerState::spawn(config);
    state.position = position;
    state.grounded = false;
    state
}

fn run_forward() -> InputSnapshot {
    InputSnapshot::new(Vec3::NEG_Z, true, false)
}

fn run_forward_and_jump() -> InputSnapshot {
    InputSnapshot::new(Vec3::NEG_Z, true, true)
}

fn jump_only() -> InputSnapshot {
    InputSnapshot::new(Vec3::ZERO, false, true)
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_run_cap_and_speed_limits_hold_every_tick() {
    let mut config = SimConfig::default();
    // Strong enough to blow straight through max_h_speed without the cap
    config.knockback.blast_power = 5000.0;
    let mut sim = Simulation::new(config);

    for tick in 0..3000u32 {
        let angle = tick as f32 * 0.013;
        let intent = if tick % 400 < 300 {
            Vec3::new(angle.sin(), 0.0, -angle.cos())
        } else {
            Vec3::ZERO
        };
        let input = InputSnapshot::new(intent, tick % 700 < 500, tick % 37 == 0);

        let explosions = if tick % 250 == 0 {
            let position = sim.state().position;
            vec![ExplosionEvent::new(position + Vec3::new(3.0, -1.0, 2.0))]
        } else {
            Vec::new()
        };

        let state = sim.advance(DT, &input, &explosions);

        assert!(state.run_cap >= 6.0, "tick {tick}: run cap {}", state.run_cap);
        assert!(
            state.horizontal_speed() <= 100.0 + 1e-3,
            "tick {tick}: speed {}",
            state.horizontal_speed()
        );
        assert!(state.position.y >= 1.65);
        assert!(state.position.is_finite());
        assert!(state.velocity.is_finite());
    }
}

#[test]
fn test_friction_decay_is_monotonic() {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.velocity = Vec3::new(20.0, 0.0, -5.0);
    let mut sim = Simulation::with_state(config, state);

    let mut previous = sim.state().horizontal_speed();
    for _ in 0..200 {
        let state = sim.advance(DT, &InputSnapshot::idle(), &[]);
        assert!(state.grounded);
        assert!(state.velocity.x >= 0.0);
        assert!(state.velocity.z <= 0.0);
        let speed = state.horizontal_speed();
        assert!(speed <= previous);
        previous = speed;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_non_finite_dt_is_integrated_as_max_dt() {
    let config = SimConfig::default();
    let mut sim = Simulation::with_state(config, airborne_at(&config, Vec3::new(0.0, 10.0, 0.0)));

    let state = sim.advance(f32::NAN, &InputSnapshot::idle(), &[]);

    // One 0.1 s step of gravity
    assert!((state.velocity.y + 4.0).abs() < 1e-4);
    assert!((state.position.y - 9.6).abs() < 1e-4);
}

#[test]
fn test_negative_dt_does_not_move_player() {
    let config = SimConfig::default();
    let mut sim = Simulation::with_state(config, airborne_at(&config, Vec3::new(0.0, 10.0, 0.0)));

    let state = sim.advance(-1.0, &run_forward(), &[]);

    assert_eq!(state.position, Vec3::new(0.0, 10.0, 0.0));
    assert_eq!(state.velocity.y, 0.0);
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_basic_integration_one_tick() {
    let config = SimConfig::default();
    let mut sim = Simulation::with_state(config, airborne_at(&config, Vec3::new(0.0, 5.0, 0.0)));

    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);

    assert!((state.velocity.y + 40.0 / 60.0).abs() < 1e-4);
    assert!((state.position.y - (5.0 - 0.0111)).abs() < 1e-3);
    assert!(!state.grounded);
}

#[test]
fn test_run_cap_grows_on_moving_jump() {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.velocity = Vec3::new(0.0, 0.0, -6.0);
    let mut sim = Simulation::with_state(config, state);

    let state = sim.advance(DT, &run_forward_and_jump(), &[]);

    assert!((state.run_cap - 6.3).abs() < 1e-4);
    assert!((state.horizontal_speed() - 6.3).abs() < 1e-4);
    assert!((state.velocity.y - (10.0 - 6.3 * 0.08)).abs() < 1e-4);
    assert!(!state.grounded);
}

#[test]
fn test_standing_jump_keeps_base_run_cap() {
    let mut sim = Simulation::default();

    let state = sim.advance(DT, &jump_only(), &[]);

    assert_eq!(state.velocity.y, 10.0);
    assert_eq!(state.run_cap, 6.0);
    assert_eq!(state.jump_buffer_timer, 0.0);
}

#[test]
fn test_knockback_impulse_magnitude() {
    let config = SimConfig::default();
    let knockback = KnockbackSystem::new(config.knockback);
    let mut state = PlayerState::spawn(&config);
    state.position = Vec3::ZERO;

    assert!(knockback.apply(&mut state, &ExplosionEvent::new(Vec3::new(10.0, 0.0, 0.0))));

    // (50 - 10) / 50 * 120 along -X
    assert!((state.velocity.x + 96.0).abs() < 1e-3);
    assert!(state.velocity.y.abs() < 1e-6);
    assert!(state.velocity.z.abs() < 1e-6);
}

#[test]
fn test_knockback_through_advance_while_airborne() {
    let config = SimConfig::default();
    let mut sim = Simulation::with_state(config, airborne_at(&config, Vec3::new(0.0, 10.0, 0.0)));

    let blast = ExplosionEvent::new(Vec3::new(10.0, 10.0, 0.0));
    let state = sim.advance(DT, &InputSnapshot::idle(), &[blast]);

    // No air friction, but the blast share decays in the air too
    assert!((state.velocity.x + 96.0 * 0.92).abs() < 1e-2);
    assert!((state.position.x + 96.0 * 0.92 / 60.0).abs() < 1e-3);
    assert!((state.knockback_velocity.x + 96.0 * 0.92).abs() < 1e-2);
}

#[test]
fn test_knockback_bleeds_off_on_ground() {
    let mut sim = Simulation::default();

    let blast = ExplosionEvent::new(Vec3::new(10.0, 1.65, 0.0));
    let state = sim.advance(DT, &InputSnapshot::idle(), &[blast]);
    assert!((state.velocity.x + 96.0 * 0.92).abs() < 1e-2);

    let first = sim.state().velocity.x;
    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);
    assert!(state.velocity.x > first);
    assert!(state.velocity.x < 0.0);
}

#[test]
fn test_explosions_are_not_carried_over() {
    let config = SimConfig::default();
    let mut sim = Simulation::with_state(config, airborne_at(&config, Vec3::new(0.0, 30.0, 0.0)));

    let blast = ExplosionEvent::new(Vec3::new(0.0, 30.0, 10.0));
    sim.advance(DT, &InputSnapshot::idle(), &[blast]);
    let after_blast = sim.state().velocity.z;
    assert!(after_blast < -80.0);

    // Only decay on the next tick, no second impulse
    sim.advance(DT, &InputSnapshot::idle(), &[]);
    assert!((sim.state().velocity.z - after_blast * 0.92).abs() < 1e-3);
}

#[test]
fn test_blast_ahead_pushes_running_player_back() {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.velocity = Vec3::new(0.0, 0.0, -6.0);
    let mut sim = Simulation::with_state(config, state);

    let blast = sim.explosion_ahead();
    assert!(blast.origin.z < sim.state().position.z);

    // Forward held straight through the blast
    let state = sim.advance(DT, &run_forward(), &[blast]);
    assert!(state.velocity.z > 80.0, "pushed toward the blast: {}", state.velocity.z);
    assert!((state.movement_velocity().z + 6.0).abs() < 1e-3);

    let mut previous = sim.state().velocity.z;
    for _ in 0..120 {
        let state = sim.advance(DT, &run_forward(), &[]);
        assert!(state.velocity.z < previous);
        previous = state.velocity.z;
    }

    // Blast gone, back to plain running
    let state = sim.state();
    assert!((state.velocity.z + 6.0).abs() < 1e-2);
    assert!((state.horizontal_speed() - 6.0).abs() < 1e-2);
}

#[test]
fn test_side_blast_is_not_steered_by_input() {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.velocity = Vec3::new(0.0, 0.0, -6.0);
    let mut sim = Simulation::with_state(config, state);

    let blast = ExplosionEvent::new(Vec3::new(10.0, 1.65, 0.0));
    let state = sim.advance(DT, &run_forward(), &[blast]);

    // Sideways push survives the intent snap
    assert!((state.velocity.x + 96.0 * 0.92).abs() < 1e-2);
    assert!((state.velocity.z + 6.0).abs() < 1e-3);

    let mut previous = sim.state().velocity.x.abs();
    for _ in 0..60 {
        let state = sim.advance(DT, &run_forward(), &[]);
        assert!(state.velocity.x.abs() < previous);
        assert!((state.velocity.z + 6.0).abs() < 1e-3);
        previous = state.velocity.x.abs();
    }
    assert!(previous < 1.0);
}

#[test]
fn test_stop_snap_resets_run_cap() {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.velocity = Vec3::new(2.7, 0.0, 0.0);
    state.run_cap = 7.5;
    let mut sim = Simulation::with_state(config, state);

    // 2.7 * 0.92 = 2.484, under walk_speed - 0.5
    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);

    assert_eq!(state.velocity.x, 0.0);
    assert_eq!(state.velocity.z, 0.0);
    assert_eq!(state.run_cap, 6.0);
}

#[test]
fn test_run_cap_resets_while_pushing_into_wall() {
    let config = SimConfig {
        world: WorldConfig {
            boundary: BoundaryPolicy::Clamp { half_extent: 10.0 },
            ..WorldConfig::default()
        },
        ..SimConfig::default()
    };
    let mut state = PlayerState::spawn(&config);
    state.position.z = -10.0;
    state.run_cap = 10.0;
    let mut sim = Simulation::with_state(config, state);

    for _ in 0..120 {
        sim.advance(DT, &run_forward(), &[]);
    }

    let state = sim.state();
    assert_eq!(state.horizontal_speed(), 0.0);
    assert_eq!(state.run_cap, 6.0);
}

#[test]
fn test_walking_starts_from_rest() {
    let mut sim = Simulation::default();
    let walk = InputSnapshot::new(Vec3::NEG_Z, false, false);

    let state = sim.advance(DT, &walk, &[]);
    assert!(state.horizontal_speed() > 1.0);

    for _ in 0..30 {
        sim.advance(DT, &walk, &[]);
    }
    assert!((sim.state().horizontal_speed() - 3.0).abs() < 1e-4);
    assert!(sim.state().position.z < 0.0);
}

// ============================================================================
// Jump grace windows
// ============================================================================

/// Step off a ledge: grounded at y=5, one idle tick to leave the "ground".
fn stepped_off_ledge() -> Simulation {
    let config = SimConfig::default();
    let mut state = PlayerState::spawn(&config);
    state.position.y = 5.0;
    let mut sim = Simulation::with_state(config, state);

    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);
    assert!(!state.grounded);
    assert_eq!(state.coyote_timer, 0.25);
    sim
}

#[test]
fn test_coyote_jump_inside_window() {
    let mut sim = stepped_off_ledge();
    for _ in 0..5 {
        sim.advance(DT, &InputSnapshot::idle(), &[]);
    }
    assert!(sim.state().velocity.y < 0.0);

    let state = sim.advance(DT, &jump_only(), &[]);

    assert!(state.velocity.y > 0.0);
    assert!(!state.grounded);
    assert_eq!(state.jump_buffer_timer, 0.0);
}

#[test]
fn test_no_coyote_jump_after_window() {
    let mut sim = stepped_off_ledge();
    for _ in 0..18 {
        sim.advance(DT, &InputSnapshot::idle(), &[]);
    }
    assert_eq!(sim.state().coyote_timer, 0.0);
    assert!(!sim.state().grounded);

    let state = sim.advance(DT, &jump_only(), &[]);

    assert!(state.velocity.y < 0.0);
    assert!(state.jump_buffer_timer > 0.0);
}

#[test]
fn test_coyote_window_allows_only_one_jump() {
    let mut sim = stepped_off_ledge();
    sim.advance(DT, &jump_only(), &[]);
    assert!(sim.state().velocity.y > 0.0);

    sim.advance(DT, &InputSnapshot::idle(), &[]);
    let before = sim.state().velocity.y;
    let state = sim.advance(DT, &jump_only(), &[]);

    assert!(state.velocity.y < before);
}

#[test]
fn test_buffered_jump_fires_on_landing() {
    let config = SimConfig::default();
    let mut falling = airborne_at(&config, Vec3::new(0.0, 4.0, 0.0));
    falling.velocity.y = -2.0;
    let sim = Simulation::with_state(config, falling);

    // Find the tick that touches down
    let mut lookahead = sim.clone();
    let mut landing_tick = 0;
    for tick in 1..=120 {
        if lookahead.advance(DT, &InputSnapshot::idle(), &[]).grounded {
            landing_tick = tick;
            break;
        }
    }
    assert!(landing_tick > 8);

    // Press 0.1 s before touchdown
    let press_tick = landing_tick - 6;
    let mut sim = sim;
    for tick in 1..=landing_tick {
        let input = if tick == press_tick {
            jump_only()
        } else {
            InputSnapshot::idle()
        };
        let state = sim.advance(DT, &input, &[]);
        if tick < landing_tick {
            assert!(state.velocity.y < 0.0, "jumped mid-air on tick {tick}");
        }
    }
    assert!(sim.state().grounded);
    assert!(sim.state().jump_buffer_timer > 0.0);

    // First tick on the ground takes the buffered jump
    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);
    assert!(state.velocity.y > 0.0);
    assert!(!state.grounded);
    assert_eq!(state.jump_buffer_timer, 0.0);
}

#[test]
fn test_stale_buffer_is_dropped() {
    let config = SimConfig::default();
    let sim_state = airborne_at(&config, Vec3::new(0.0, 6.0, 0.0));
    let mut sim = Simulation::with_state(config, sim_state);

    sim.advance(DT, &jump_only(), &[]);
    let mut ticks = 1;
    while !sim.state().grounded {
        sim.advance(DT, &InputSnapshot::idle(), &[]);
        ticks += 1;
    }
    // The fall from y=6 takes longer than the buffer window
    assert!(ticks as f32 * DT > 0.2);

    let state = sim.advance(DT, &InputSnapshot::idle(), &[]);
    assert!(state.grounded);
    assert_eq!(state.velocity.y, 0.0);
}

// ============================================================================
// Bunny hopping
// ============================================================================

#[test]
fn test_chained_hops_compound_speed() {
    let mut sim = Simulation::default();
    let mut jumps = 0;

    for _ in 0..600 {
        let was_grounded = sim.state().grounded;
        let state = sim.advance(DT, &run_forward_and_jump(), &[]);
        if was_grounded && !state.grounded {
            jumps += 1;
        }
    }

    let state = sim.state();
    assert!(jumps >= 5, "only {jumps} jumps");
    assert!(state.run_cap > 6.0 * 1.05f32.powi(4));
    assert!(state.horizontal_speed() > 7.0);
}

#[test]
fn test_letting_go_after_hops_resets_run_cap() {
    let mut sim = Simulation::default();
    for _ in 0..300 {
        sim.advance(DT, &run_forward_and_jump(), &[]);
    }
    assert!(sim.state().run_cap > 6.0);

    for _ in 0..600 {
        sim.advance(DT, &InputSnapshot::idle(), &[]);
    }

    let state = sim.state();
    assert!(state.grounded);
    assert_eq!(state.horizontal_speed(), 0.0);
    assert_eq!(state.run_cap, 6.0);
}

// ============================================================================
// World edge
// ============================================================================

#[test]
fn test_wrap_keeps_player_in_world() {
    let config = SimConfig {
        world: WorldConfig {
            boundary: BoundaryPolicy::Wrap { half_extent: 10.0 },
            ..WorldConfig::default()
        },
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config);

    let mut min_z = 0.0f32;
    for _ in 0..600 {
        let state = sim.advance(DT, &run_forward(), &[]);
        assert!(state.position.z.abs() <= 10.0 + 1e-3);
        min_z = min_z.min(state.position.z);
    }
    // Crossed the seam at least once and kept running
    assert!(min_z < -9.0);
    assert!((sim.state().horizontal_speed() - 6.0).abs() < 1e-3);
}

#[test]
fn test_clamped_room_holds_player() {
    let config = SimConfig {
        world: WorldConfig {
            boundary: BoundaryPolicy::Clamp { half_extent: 10.0 },
            ..WorldConfig::default()
        },
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config);

    for _ in 0..600 {
        sim.advance(DT, &run_forward(), &[]);
    }

    assert_eq!(sim.state().position.z, -10.0);
}
