use glam::Vec3;
use particles::{ParticleSystem, BURST_SIZE, MAX_PARTICLES};
use render::{FrameUniforms, HighlightState, InteractionController, NoAudio, RenderLoop};
use scene::Scene;

fn render_loop(seed: u64) -> RenderLoop {
    RenderLoop::new(
        ParticleSystem::with_seed(seed),
        InteractionController::new(Box::new(NoAudio), None),
    )
}

#[test]
fn active_slots_track_live_particles_up_to_the_cap() {
    let scene = Scene::new();
    let mut particles = ParticleSystem::with_seed(1);

    for bursts in 0..=6 {
        let uniforms =
            FrameUniforms::build((8, 8), 0.0, &HighlightState::default(), &scene, &particles);
        let expected = (bursts * BURST_SIZE).min(MAX_PARTICLES);
        assert_eq!(uniforms.active_particles().count(), expected, "bursts={bursts}");
        assert!(uniforms.particles.lives[expected..].iter().all(|life| *life == 0.0));
        assert_eq!(uniforms.particles.lives.len(), MAX_PARTICLES);

        particles.spawn_burst(scene.box_position(bursts % 3));
    }
}

#[test]
fn slots_follow_pool_order() {
    let scene = Scene::new();
    let mut particles = ParticleSystem::with_seed(2);
    particles.spawn_burst(scene.box_position(1));
    particles.spawn_burst(scene.box_position(2));

    let uniforms =
        FrameUniforms::build((8, 8), 0.0, &HighlightState::default(), &scene, &particles);
    for (slot, particle) in particles.iter().enumerate() {
        let [x, y, z, _] = uniforms.particles.positions[slot];
        assert_eq!(Vec3::new(x, y, z), particle.position);
        assert_eq!(uniforms.particles.lives[slot], particle.life);
    }
    assert_eq!(uniforms.box_position(1), scene.box_position(1));
}

#[test]
fn scene_uniforms_carry_resolution_time_and_boxes() {
    let scene = Scene::new();
    let uniforms = FrameUniforms::build(
        (640, 360),
        2.5,
        &HighlightState::default(),
        &scene,
        &ParticleSystem::new(),
    );
    assert_eq!(uniforms.scene.resolution, [640.0, 360.0]);
    assert_eq!(uniforms.scene.time, 2.5);
    assert_eq!(uniforms.scene.highlight, [0, 0, 0, 0]);
    for i in 0..3 {
        assert_eq!(uniforms.box_position(i), scene.box_position(i));
    }
    assert_eq!(uniforms.geometry(), scene);
}

#[test]
fn tick_rebuilds_uniforms_from_current_state() {
    let mut frame_loop = render_loop(3);

    let before = frame_loop.tick((16, 16), 0.0);
    assert_eq!(before.active_particles().count(), 0);
    assert_eq!(before.scene.highlight, [0, 0, 0, 0]);

    frame_loop.click(0.9);
    let after = frame_loop.tick((16, 16), 1.0 / 60.0);
    assert_eq!(after.active_particles().count(), BURST_SIZE);
    assert_eq!(after.scene.highlight, [0, 0, 1, 0]);
    assert!(after.active_particles().all(|(_, life)| life < 1.0));

    frame_loop.click(-0.9);
    let switched = frame_loop.tick((16, 16), 2.0 / 60.0);
    assert_eq!(switched.scene.highlight, [0, 1, 0, 0]);
    assert_eq!(switched.active_particles().count(), 2 * BURST_SIZE);
    assert_eq!(frame_loop.frame_count(), 3);
}

#[test]
fn expired_bursts_leave_no_active_slots() {
    let mut frame_loop = render_loop(4);
    frame_loop.click(0.0);

    let mut uniforms = frame_loop.tick((4, 4), 0.0);
    for _ in 0..60 {
        uniforms = frame_loop.tick((4, 4), 0.0);
    }
    assert_eq!(uniforms.active_particles().count(), 0);
    assert!(frame_loop.particles().is_empty());
    // Highlight outlives the burst
    assert!(uniforms.is_highlighted(0));
}
