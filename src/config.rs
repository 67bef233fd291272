use log::Level;

use crate::particles::field::{FieldConfig, FrameClear, Interaction, PointerMode};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose animation lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to its compact "scrolled" look past this offset (px).
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Simulated round trip for the contact form placeholder submit.
pub const SUBMIT_DELAY_MS: u32 = 800;

/// Sections that mount their own particle backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Services,
    Advantages,
    Portfolio,
}

pub fn field_preset(section: Section) -> FieldConfig {
    let base = FieldConfig::default();
    match section {
        Section::Hero => FieldConfig {
            count: 120,
            speed: 0.8,
            link_radius: (150.0, 150.0),
            link_alpha: 0.25,
            interaction: Some(Interaction {
                radius: 150.0,
                strength: 2500.0,
                mode: PointerMode::Attract,
            }),
            ..base
        },
        Section::About => FieldConfig {
            count: 60,
            speed: 0.6,
            size: (1.0, 3.0),
            link_radius: (100.0, 100.0),
            link_width: 1.0,
            ..base
        },
        Section::Services => FieldConfig {
            count: 70,
            link_radius: (110.0, 130.0),
            interaction: Some(Interaction {
                radius: 100.0,
                strength: 3000.0,
                mode: PointerMode::Repel,
            }),
            ..base
        },
        Section::Advantages => FieldConfig {
            count: 80,
            speed: 1.2,
            size: (1.0, 5.0),
            damping: 0.8,
            link_radius: (80.0, 110.0),
            link_width: 2.0,
            interaction: Some(Interaction {
                radius: 120.0,
                strength: 2000.0,
                mode: PointerMode::Repel,
            }),
            clear: FrameClear::Fade { alpha: 0.02 },
            ..base
        },
        Section::Portfolio => FieldConfig {
            count: 50,
            speed: 0.5,
            hue: (170.0, 200.0),
            link_radius: (80.0, 80.0),
            link_alpha: 0.2,
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Advantages,
        Section::Portfolio,
    ];

    #[test]
    fn presets_stay_inside_documented_ranges() {
        for section in ALL {
            let cfg = field_preset(section);
            assert!((50..=120).contains(&cfg.count), "{:?} count {}", section, cfg.count);
            assert!(cfg.link_radius.0 >= 80.0 && cfg.link_radius.1 <= 150.0, "{:?}", section);
            assert!(cfg.link_radius.0 <= cfg.link_radius.1);
            if let Some(interaction) = cfg.interaction {
                assert!((100.0..=150.0).contains(&interaction.radius), "{:?}", section);
            }
            assert!(cfg.hue.0 >= 160.0 && cfg.hue.1 <= 240.0);
        }
    }

    #[test]
    fn only_advantages_leaves_trails() {
        for section in ALL {
            let fades = matches!(field_preset(section).clear, FrameClear::Fade { .. });
            assert_eq!(fades, section == Section::Advantages);
        }
    }
}
