// Pure particle-field simulation. No DOM types in here so the host test
// harness can include this file directly.

use rand::Rng;
use std::f64::consts::PI;

/// How the previous frame is removed before drawing the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameClear {
    Full,
    /// Low-alpha black overlay, leaves motion trails.
    Fade { alpha: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    Attract,
    Repel,
}

/// Pointer proximity behaviour. `strength` divides the impulse, so larger
/// values mean a gentler push.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub radius: f64,
    pub strength: f64,
    pub mode: PointerMode,
}

/// Tunables for one field. Ranges are `(min, max)` and sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub speed: f64,
    pub size: (f64, f64),
    pub opacity: (f64, f64),
    pub hue: (f64, f64),
    pub pulse_speed: f64,
    pub link_radius: (f64, f64),
    pub link_alpha: f64,
    pub link_width: f64,
    pub damping: f64,
    pub interaction: Option<Interaction>,
    pub opacity_floor: f64,
    pub clear: FrameClear,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 80,
            speed: 1.0,
            size: (1.0, 3.0),
            opacity: (0.2, 0.8),
            hue: (180.0, 240.0), // teal to cyan
            pulse_speed: 0.03,
            link_radius: (100.0, 100.0),
            link_alpha: 0.3,
            link_width: 1.0,
            damping: 1.0,
            interaction: None,
            opacity_floor: 0.2,
            clear: FrameClear::Full,
        }
    }
}

/// Pointer position in canvas-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub hue: f64,
    pub pulse: f64,
    pub connection_radius: f64,
}

impl Particle {
    /// Draw alpha for the current frame, pulsing with the phase counter.
    pub fn pulse_alpha(&self) -> f64 {
        self.opacity * (0.7 + 0.3 * self.pulse.sin())
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub alpha: f64,
}

/// Drawing surface the field renders onto.
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn fade(&mut self, width: f64, height: f64, alpha: f64);
    fn glow(&mut self, x: f64, y: f64, radius: f64, hue: f64, alpha: f64);
    fn dot(&mut self, x: f64, y: f64, radius: f64, hue: f64, alpha: f64);
    fn link(&mut self, from: &Particle, to: &Particle, alpha: f64, width: f64);
}

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi <= lo {
        lo
    } else {
        lo + rng.gen::<f64>() * (hi - lo)
    }
}

// Bounce off [0, extent]. The sign is forced, not flipped, so a clamped
// particle always heads back inside.
fn reflect(pos: &mut f64, vel: &mut f64, extent: f64, damping: f64) {
    if *pos >= extent {
        *vel = -vel.abs() * damping;
    } else if *pos <= 0.0 {
        *vel = vel.abs() * damping;
    }
    *pos = pos.clamp(0.0, extent);
}

// Pointer impulse on velocity plus the proximity glow on opacity.
fn nudge(p: &mut Particle, interaction: Interaction, pointer: Option<Pointer>, floor: f64) {
    let near = pointer.and_then(|ptr| {
        let dx = ptr.x - p.x;
        let dy = ptr.y - p.y;
        let distance = dx.hypot(dy);
        (distance < interaction.radius).then_some((dx, dy, distance))
    });

    match near {
        Some((dx, dy, distance)) => {
            let force = (interaction.radius - distance) / interaction.strength;
            let sign = match interaction.mode {
                PointerMode::Attract => 1.0,
                PointerMode::Repel => -1.0,
            };
            p.vx += sign * dx * force;
            p.vy += sign * dy * force;
            p.opacity = (p.opacity + 0.05).min(1.0);
        }
        None => {
            p.opacity = (p.opacity - 0.01).max(floor);
        }
    }
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::with_capacity(config.count),
        };
        field.resize(width, height, rng);
        field
    }

    /// Resizes the surface and reseeds every particle inside the new bounds.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let cfg = self.config;
        let (w, h) = (self.width, self.height);

        self.particles.clear();
        self.particles.extend((0..cfg.count).map(|_| Particle {
            x: rng.gen::<f64>() * w,
            y: rng.gen::<f64>() * h,
            vx: (rng.gen::<f64>() - 0.5) * cfg.speed,
            vy: (rng.gen::<f64>() - 0.5) * cfg.speed,
            size: sample(rng, cfg.size),
            opacity: sample(rng, cfg.opacity),
            hue: sample(rng, cfg.hue),
            pulse: rng.gen::<f64>() * PI * 2.0,
            connection_radius: sample(rng, cfg.link_radius),
        }));
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self, pointer: Option<Pointer>) {
        let cfg = self.config;
        let (w, h) = (self.width, self.height);

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.pulse += cfg.pulse_speed;

            if let Some(interaction) = cfg.interaction {
                nudge(p, interaction, pointer, cfg.opacity_floor);
            }

            // Edges run last so a particle at a wall always heads back inside.
            reflect(&mut p.x, &mut p.vx, w, cfg.damping);
            reflect(&mut p.y, &mut p.vy, h, cfg.damping);
        }
    }

    /// Pairs within the first particle's connection radius. Alpha falls off
    /// linearly with distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        let link_alpha = self.config.link_alpha;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(offset, b)| {
                    let distance = a.distance_to(b);
                    (distance < a.connection_radius).then(|| Link {
                        from: i,
                        to: i + 1 + offset,
                        alpha: (a.connection_radius - distance) / a.connection_radius * link_alpha,
                    })
                })
        })
    }

    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) {
        match self.config.clear {
            FrameClear::Full => painter.clear(self.width, self.height),
            FrameClear::Fade { alpha } => painter.fade(self.width, self.height, alpha),
        }

        for p in &self.particles {
            let alpha = p.pulse_alpha();
            painter.glow(p.x, p.y, p.size * 3.0, p.hue, alpha);
            painter.dot(p.x, p.y, p.size, p.hue, alpha);
        }

        for link in self.links() {
            painter.link(
                &self.particles[link.from],
                &self.particles[link.to],
                link.alpha,
                self.config.link_width,
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
