use rand::Rng;

/// Borne des coefficients tirés au hasard : [-MAX, MAX)
pub const MAX_COEFFICIENT: f32 = 0.0005;

/// Matrice des coefficients d'interaction entre types (non symétrique).
///
/// `coefficient(a, b)` est la force exercée sur une particule de type `a`
/// par une voisine de type `b`. Un coefficient négatif attire, un positif repousse.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    type_count: usize,
    coefficients: Vec<f32>,
}

impl InteractionMatrix {
    /// Tire chaque paire ordonnée indépendamment, sans contrainte de symétrie
    pub fn random(type_count: usize, rng: &mut impl Rng) -> Self {
        let coefficients = (0..type_count * type_count)
            .map(|_| rng.random_range(-MAX_COEFFICIENT..MAX_COEFFICIENT))
            .collect();

        Self { type_count, coefficients }
    }

    /// Construit la matrice à partir de lignes explicites.
    /// Les lignes trop courtes sont complétées par des zéros, les valeurs en trop ignorées.
    pub fn from_rows(rows: &[Vec<f32>]) -> Self {
        let type_count = rows.len();
        let mut coefficients = vec![0.0; type_count * type_count];

        for (a, row) in rows.iter().enumerate() {
            for (b, value) in row.iter().take(type_count).enumerate() {
                coefficients[a * type_count + b] = *value;
            }
        }

        Self { type_count, coefficients }
    }

    pub fn zeros(type_count: usize) -> Self {
        Self {
            type_count,
            coefficients: vec![0.0; type_count * type_count],
        }
    }

    pub fn type_count(&self) -> usize {
        self.type_count
    }

    #[inline]
    pub fn coefficient(&self, a: usize, b: usize) -> f32 {
        self.coefficients[a * self.type_count + b]
    }

    /// Ligne `a` de la matrice (forces subies par le type `a`)
    pub fn row(&self, a: usize) -> &[f32] {
        &self.coefficients[a * self.type_count..(a + 1) * self.type_count]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.type_count).all(|a| {
            (a + 1..self.type_count).all(|b| self.coefficient(a, b) == self.coefficient(b, a))
        })
    }
}
