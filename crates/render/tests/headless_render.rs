use glam::Vec3;
use particles::{ParticleSystem, BURST_SIZE, MAX_PARTICLES};
use render::shader::{FrameShader, GLOW_COLOR, GLOW_GAIN, GLOW_RADIUS};
use render::{
    render_to, DisplaySurface, FrameUniforms, Framebuffer, FramebufferError,
    InteractionController, NoAudio, RenderLoop,
};
use scene::Scene;

const WIDTH: u32 = 128;
const HEIGHT: u32 = 64;
// Pixels looking at the front faces of box 0 and box 1
const CENTER_BOX_PIXEL: (u32, u32) = (64, 44);
const LEFT_BOX_PIXEL: (u32, u32) = (25, 44);

fn render_loop() -> RenderLoop {
    RenderLoop::new(
        ParticleSystem::with_seed(21),
        InteractionController::new(Box::new(NoAudio), None),
    )
}

fn shade(uniforms: &FrameUniforms) -> Framebuffer {
    let mut fb = Framebuffer::new(WIDTH, HEIGHT).unwrap();
    fb.shade(uniforms);
    fb
}

fn is_grey(px: [u8; 4]) -> bool {
    px[0] == px[1] && px[1] == px[2] && px[0] > 0
}

fn is_yellow(px: [u8; 4]) -> bool {
    px[0] == px[1] && px[0] > 0 && px[2] == 0
}

struct Recorder {
    width: u32,
    height: u32,
    writes: Vec<(u32, u32, [u8; 4])>,
}

impl DisplaySurface for Recorder {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.writes.push((x, y, rgba));
    }
}

#[test]
fn empty_resolution_is_rejected() {
    assert!(matches!(
        Framebuffer::new(0, 10),
        Err(FramebufferError::EmptyResolution { width: 0, height: 10 })
    ));
    assert!(Framebuffer::new(10, 0).is_err());
}

#[test]
#[should_panic(expected = "outside 128x64 framebuffer")]
fn reading_past_the_row_end_panics() {
    let fb = Framebuffer::new(WIDTH, HEIGHT).unwrap();
    // Would alias the first pixel of row 1 without the bounds check
    fb.pixel(WIDTH, 0);
}

#[test]
#[should_panic(expected = "outside 128x64 framebuffer")]
fn writing_below_the_last_row_panics() {
    let mut fb = Framebuffer::new(WIDTH, HEIGHT).unwrap();
    fb.write_pixel(0, HEIGHT, [0, 0, 0, 255]);
}

#[test]
fn every_pixel_is_opaque() {
    let mut frame_loop = render_loop();
    let fb = shade(&frame_loop.tick((WIDTH, HEIGHT), 0.0));
    assert!(fb.pixels().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn boxes_are_grey_until_clicked() {
    let mut frame_loop = render_loop();
    let fb = shade(&frame_loop.tick((WIDTH, HEIGHT), 0.0));
    assert!(is_grey(fb.pixel(CENTER_BOX_PIXEL.0, CENTER_BOX_PIXEL.1)));
    assert!(is_grey(fb.pixel(LEFT_BOX_PIXEL.0, LEFT_BOX_PIXEL.1)));
}

#[test]
fn highlighted_box_renders_yellow() {
    let mut frame_loop = render_loop();

    frame_loop.click(0.0);
    let fb = shade(&frame_loop.tick((WIDTH, HEIGHT), 0.0));
    assert!(is_yellow(fb.pixel(CENTER_BOX_PIXEL.0, CENTER_BOX_PIXEL.1)));
    assert!(is_grey(fb.pixel(LEFT_BOX_PIXEL.0, LEFT_BOX_PIXEL.1)));

    frame_loop.click(-0.8);
    let fb = shade(&frame_loop.tick((WIDTH, HEIGHT), 0.0));
    assert!(is_grey(fb.pixel(CENTER_BOX_PIXEL.0, CENTER_BOX_PIXEL.1)));
    assert!(is_yellow(fb.pixel(LEFT_BOX_PIXEL.0, LEFT_BOX_PIXEL.1)));
}

#[test]
fn glow_comes_only_from_live_particles_in_range() {
    let scene = Scene::new();
    let centre = scene.box_position(0);
    let mut particles = ParticleSystem::with_seed(5);
    particles.spawn_burst(centre);

    let mut uniforms = FrameUniforms::build(
        (WIDTH, HEIGHT),
        0.0,
        &render::HighlightState::default(),
        &scene,
        &particles,
    );
    let shader = FrameShader::new(&uniforms);

    let expected = GLOW_COLOR * GLOW_RADIUS * GLOW_GAIN * BURST_SIZE as f32;
    assert!((shader.glow(centre) - expected).length() < 1e-3);
    assert_eq!(shader.glow(centre + Vec3::X * GLOW_RADIUS), Vec3::ZERO);

    // Dead slots keep their position but contribute nothing
    uniforms.particles.lives = [0.0; MAX_PARTICLES];
    let shader = FrameShader::new(&uniforms);
    assert_eq!(shader.glow(centre), Vec3::ZERO);
}

#[test]
fn render_to_matches_parallel_shade() {
    let mut frame_loop = render_loop();
    frame_loop.click(0.7);
    let uniforms = frame_loop.tick((24, 12), 0.0);

    let mut fb = Framebuffer::new(24, 12).unwrap();
    fb.shade(&uniforms);

    let mut recorder = Recorder {
        width: 24,
        height: 12,
        writes: Vec::new(),
    };
    render_to(&mut recorder, &uniforms);

    assert_eq!(recorder.writes.len(), 24 * 12);
    for (x, y, rgba) in recorder.writes {
        assert_eq!(fb.pixel(x, y), rgba, "pixel ({x}, {y})");
    }
}

#[test]
fn saved_png_round_trips() {
    let mut frame_loop = render_loop();
    let fb = shade(&frame_loop.tick((WIDTH, HEIGHT), 0.0));

    let path = std::env::temp_dir().join(format!("box_burst_{}.png", std::process::id()));
    fb.save_png(&path).unwrap();
    let loaded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(loaded.as_raw().as_slice(), fb.pixels());
}
