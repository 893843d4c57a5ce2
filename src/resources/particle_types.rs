use bevy::prelude::*;
use crate::globals::*;

/// Couleur de chaque type de particule
#[derive(Resource)]
pub struct ParticlePalette {
    pub colors: Vec<Color>,
}

impl Default for ParticlePalette {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLE_TYPES)
    }
}

impl ParticlePalette {
    pub fn new(type_count: usize) -> Self {
        Self {
            colors: Self::generate_colors(type_count),
        }
    }

    /// Palette fixe pour les six premiers types, puis des teintes HSL réparties
    fn generate_colors(count: usize) -> Vec<Color> {
        (0..count)
            .map(|i| match PALETTE.get(i) {
                Some(&(r, g, b)) => Color::srgb_u8(r, g, b),
                None => {
                    let hue = (i as f32 / count as f32) * 360.0;
                    Color::hsl(hue, 0.8, 0.6)
                }
            })
            .collect()
    }

    pub fn color_for_type(&self, kind: usize) -> Color {
        self.colors.get(kind).copied().unwrap_or(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_extends_past_fixed_colors() {
        let palette = ParticlePalette::new(8);

        assert_eq!(palette.colors.len(), 8);
        assert_eq!(palette.color_for_type(0), Color::srgb_u8(172, 128, 255));
        assert_eq!(palette.color_for_type(42), Color::WHITE);
    }
}
