use super::params::{SimulationParameters, SpawnSettings};

/// Variantes de la simulation, qui ne diffèrent que par leurs constantes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Barre de contrôle à gauche, constantes d'origine
    #[default]
    ControlBar,
    /// Plein écran, murs plus élastiques
    Fullscreen,
    /// Particules lentes et très répulsives
    Drift,
}

/// Constantes associées à une variante
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetConfig {
    pub parameters: SimulationParameters,
    pub spawn: SpawnSettings,
    pub control_bar: bool,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::ControlBar, Preset::Fullscreen, Preset::Drift];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::ControlBar => "Barre de contrôle",
            Preset::Fullscreen => "Plein écran",
            Preset::Drift => "Dérive",
        }
    }

    pub fn config(&self) -> PresetConfig {
        let base = SimulationParameters::default();

        match self {
            Preset::ControlBar => PresetConfig {
                parameters: base,
                spawn: SpawnSettings::default(),
                control_bar: true,
            },
            Preset::Fullscreen => PresetConfig {
                parameters: SimulationParameters {
                    friction: 0.95,
                    bounciness: 1.2,
                    max_speed: 5.0,
                    repulsion_strength: 2.0,
                    ..base
                },
                spawn: SpawnSettings {
                    disk_radius_factor: 0.5,
                    initial_velocity: (-1.0, 3.0),
                },
                control_bar: false,
            },
            Preset::Drift => PresetConfig {
                parameters: SimulationParameters {
                    friction: 0.9,
                    max_speed: 4.0,
                    repulsion_strength: 4.0,
                    max_interaction_distance: 40.0,
                    ..base
                },
                spawn: SpawnSettings {
                    disk_radius_factor: 0.45,
                    ..SpawnSettings::default()
                },
                control_bar: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_distinct_constants() {
        let configs: Vec<PresetConfig> = Preset::ALL.iter().map(Preset::config).collect();

        for (i, a) in configs.iter().enumerate() {
            for b in &configs[i + 1..] {
                assert_ne!(a.parameters, b.parameters);
            }
        }
    }

    #[test]
    fn default_preset_uses_default_parameters() {
        let config = Preset::default().config();

        assert_eq!(config.parameters, SimulationParameters::default());
        assert!(config.control_bar);
    }
}
