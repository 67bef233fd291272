// Host-side tests for the particle simulation.
// The site itself is a wasm binary, so the pure module is included directly.

#![allow(dead_code)]
mod field {
    include!("../src/particles/field.rs");
}

use field::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x99ae)
}

fn assert_in_bounds(field: &ParticleField) {
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            (0.0..=field.width()).contains(&p.x) && (0.0..=field.height()).contains(&p.y),
            "particle {} at ({}, {}) escaped {}x{}",
            i,
            p.x,
            p.y,
            field.width(),
            field.height()
        );
    }
}

#[derive(Debug, PartialEq)]
enum Call {
    Clear,
    Fade(f64),
    Glow,
    Dot,
    Link(f64),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Painter for Recorder {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.calls.push(Call::Clear);
    }
    fn fade(&mut self, _width: f64, _height: f64, alpha: f64) {
        self.calls.push(Call::Fade(alpha));
    }
    fn glow(&mut self, _x: f64, _y: f64, _radius: f64, _hue: f64, _alpha: f64) {
        self.calls.push(Call::Glow);
    }
    fn dot(&mut self, _x: f64, _y: f64, _radius: f64, _hue: f64, _alpha: f64) {
        self.calls.push(Call::Dot);
    }
    fn link(&mut self, _from: &Particle, _to: &Particle, alpha: f64, _width: f64) {
        self.calls.push(Call::Link(alpha));
    }
}

#[test]
fn init_allocates_configured_count_inside_surface() {
    let config = FieldConfig { count: 120, ..FieldConfig::default() };
    let field = ParticleField::new(config, 800.0, 600.0, &mut rng());
    assert_eq!(field.particles().len(), 120);
    assert_in_bounds(&field);
    for p in field.particles() {
        assert!(p.vx.abs() <= config.speed / 2.0);
        assert!(p.vy.abs() <= config.speed / 2.0);
        assert!((180.0..=240.0).contains(&p.hue));
        assert!((config.size.0..=config.size.1).contains(&p.size));
    }
}

#[test]
fn particles_never_leave_bounds() {
    let interaction = Interaction { radius: 150.0, strength: 500.0, mode: PointerMode::Attract };
    let sizes = [(1.0, 1.0), (37.0, 400.0), (1280.0, 720.0), (300.0, 2000.0)];
    let mut rng = rng();
    for count in [1, 50, 120] {
        for (w, h) in sizes {
            for damping in [1.0, 0.8] {
                let config = FieldConfig {
                    count,
                    speed: 6.0,
                    damping,
                    interaction: Some(interaction),
                    ..FieldConfig::default()
                };
                let mut field = ParticleField::new(config, w, h, &mut rng);
                let pointer = Pointer { x: w / 2.0, y: h / 2.0 };
                for tick in 0..500 {
                    field.step((tick % 3 != 0).then_some(pointer));
                    assert_in_bounds(&field);
                }
            }
        }
    }
}

#[test]
fn zero_sized_surface_pins_particles_to_origin() {
    let mut field = ParticleField::new(FieldConfig::default(), 0.0, 0.0, &mut rng());
    for _ in 0..10 {
        field.step(None);
    }
    for p in field.particles() {
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }
}

#[test]
fn particle_reaching_right_edge_turns_back() {
    let config = FieldConfig { count: 1, ..FieldConfig::default() };
    let mut field = ParticleField::new(config, 200.0, 100.0, &mut rng());
    {
        let p = &mut field.particles_mut()[0];
        p.x = 199.5;
        p.y = 50.0;
        p.vx = 0.5;
        p.vy = 0.0;
    }
    field.step(None);
    let p = &field.particles()[0];
    assert_eq!(p.x, 200.0);
    assert!(p.vx < 0.0);

    field.step(None);
    assert!(field.particles()[0].x < 200.0);
}

#[test]
fn edge_reflection_beats_a_repelling_pointer() {
    let config = FieldConfig {
        count: 1,
        damping: 0.8,
        interaction: Some(Interaction { radius: 120.0, strength: 2000.0, mode: PointerMode::Repel }),
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 200.0, 200.0, &mut rng());
    {
        let p = &mut field.particles_mut()[0];
        p.x = 199.7;
        p.y = 100.0;
        p.vx = 0.5;
        p.vy = 0.0;
    }
    let pointer = Pointer { x: 140.0, y: 100.0 };
    field.step(Some(pointer));
    let p = &field.particles()[0];
    assert_eq!(p.x, 200.0);
    assert!(p.vx < 0.0, "vx = {}", p.vx);

    field.step(Some(pointer));
    assert!(field.particles()[0].x < 200.0);
}

#[test]
fn reflection_applies_damping() {
    let config = FieldConfig { count: 1, damping: 0.8, ..FieldConfig::default() };
    let mut field = ParticleField::new(config, 100.0, 100.0, &mut rng());
    {
        let p = &mut field.particles_mut()[0];
        p.x = 50.0;
        p.y = 0.5;
        p.vx = 0.0;
        p.vy = -1.0;
    }
    field.step(None);
    let p = &field.particles()[0];
    assert_eq!(p.y, 0.0);
    assert!((p.vy - 0.8).abs() < 1e-12);
}

#[test]
fn resize_reseeds_inside_new_bounds() {
    let mut rng = rng();
    let mut field = ParticleField::new(FieldConfig::default(), 1000.0, 1000.0, &mut rng);
    field.resize(120.0, 80.0, &mut rng);
    assert_eq!(field.particles().len(), FieldConfig::default().count);
    assert_eq!((field.width(), field.height()), (120.0, 80.0));
    assert_in_bounds(&field);
}

fn single_near_pointer(mode: PointerMode) -> ParticleField {
    let config = FieldConfig {
        count: 1,
        opacity: (0.4, 0.4),
        interaction: Some(Interaction { radius: 120.0, strength: 2000.0, mode }),
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 400.0, 400.0, &mut rng());
    let p = &mut field.particles_mut()[0];
    p.x = 200.0;
    p.y = 200.0;
    p.vx = 0.0;
    p.vy = 0.0;
    field
}

#[test]
fn repel_pushes_away_and_brightens() {
    let mut field = single_near_pointer(PointerMode::Repel);
    field.step(Some(Pointer { x: 250.0, y: 200.0 }));
    let p = &field.particles()[0];
    assert!(p.vx < 0.0);
    assert_eq!(p.vy, 0.0);
    assert!((p.opacity - 0.45).abs() < 1e-12);
}

#[test]
fn attract_pulls_toward_pointer() {
    let mut field = single_near_pointer(PointerMode::Attract);
    field.step(Some(Pointer { x: 200.0, y: 150.0 }));
    let p = &field.particles()[0];
    assert_eq!(p.vx, 0.0);
    assert!(p.vy < 0.0);
}

#[test]
fn impulse_coefficient_shrinks_with_distance() {
    let mut near = single_near_pointer(PointerMode::Repel);
    let mut far = single_near_pointer(PointerMode::Repel);
    near.step(Some(Pointer { x: 220.0, y: 200.0 }));
    far.step(Some(Pointer { x: 300.0, y: 200.0 }));
    // impulse is (radius - distance) / strength per unit of offset
    let near_coefficient = near.particles()[0].vx.abs() / 20.0;
    let far_coefficient = far.particles()[0].vx.abs() / 100.0;
    assert!((near_coefficient - 0.05).abs() < 1e-12);
    assert!((far_coefficient - 0.01).abs() < 1e-12);
}

#[test]
fn opacity_decays_to_floor_without_pointer() {
    let mut field = single_near_pointer(PointerMode::Repel);
    for _ in 0..100 {
        field.step(None);
    }
    assert_eq!(field.particles()[0].opacity, 0.2);

    field.step(Some(Pointer { x: 399.0, y: 0.0 }));
    assert_eq!(field.particles()[0].opacity, 0.2);
}

#[test]
fn fields_without_interaction_ignore_pointer() {
    let config = FieldConfig { count: 1, opacity: (0.5, 0.5), ..FieldConfig::default() };
    let mut field = ParticleField::new(config, 400.0, 400.0, &mut rng());
    let before = field.particles()[0].clone();
    let pointer = Pointer { x: before.x, y: before.y };
    field.step(Some(pointer));
    let after = &field.particles()[0];
    assert_eq!(after.opacity, 0.5);
    assert_eq!((after.vx.abs(), after.vy.abs()), (before.vx.abs(), before.vy.abs()));
}

fn pair_at(distance: f64) -> ParticleField {
    let config = FieldConfig {
        count: 2,
        link_radius: (100.0, 100.0),
        link_alpha: 0.3,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 500.0, 500.0, &mut rng());
    let ps = field.particles_mut();
    ps[0].x = 100.0;
    ps[0].y = 100.0;
    ps[1].x = 100.0 + distance;
    ps[1].y = 100.0;
    field
}

#[test]
fn link_alpha_falls_off_linearly() {
    let links: Vec<_> = pair_at(25.0).links().collect();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].from, links[0].to), (0, 1));
    assert!((links[0].alpha - 0.225).abs() < 1e-12);

    let nearer = pair_at(10.0).links().next().unwrap().alpha;
    let farther = pair_at(90.0).links().next().unwrap().alpha;
    assert!(nearer > farther);
}

#[test]
fn pairs_beyond_radius_are_not_linked() {
    assert_eq!(pair_at(100.0).links().count(), 0);
    assert_eq!(pair_at(180.0).links().count(), 0);
}

#[test]
fn links_visit_each_pair_once() {
    let config = FieldConfig { count: 5, link_radius: (1000.0, 1000.0), ..FieldConfig::default() };
    let field = ParticleField::new(config, 100.0, 100.0, &mut rng());
    let links: Vec<_> = field.links().collect();
    assert_eq!(links.len(), 10);
    assert!(links.iter().all(|l| l.from < l.to));
}

#[test]
fn pulse_alpha_stays_within_opacity_band() {
    let mut field = ParticleField::new(FieldConfig::default(), 300.0, 300.0, &mut rng());
    for _ in 0..200 {
        field.step(None);
        for p in field.particles() {
            let alpha = p.pulse_alpha();
            assert!(alpha >= p.opacity * 0.4 - 1e-12 && alpha <= p.opacity + 1e-12);
        }
    }
}

#[test]
fn render_clears_then_draws_particles_then_links() {
    let field = pair_at(50.0);
    let mut recorder = Recorder::default();
    field.render(&mut recorder);
    assert_eq!(recorder.calls.len(), 6);
    assert_eq!(recorder.calls[0], Call::Clear);
    assert_eq!(&recorder.calls[1..5], &[Call::Glow, Call::Dot, Call::Glow, Call::Dot]);
    assert!(matches!(recorder.calls[5], Call::Link(a) if (a - 0.15).abs() < 1e-12));
}

#[test]
fn fade_mode_overlays_instead_of_clearing() {
    let config = FieldConfig {
        count: 3,
        clear: FrameClear::Fade { alpha: 0.02 },
        ..FieldConfig::default()
    };
    let field = ParticleField::new(config, 100.0, 100.0, &mut rng());
    let mut recorder = Recorder::default();
    field.render(&mut recorder);
    assert_eq!(recorder.calls[0], Call::Fade(0.02));
    assert!(!recorder.calls.contains(&Call::Clear));
}
