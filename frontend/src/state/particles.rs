use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a floating particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleField {
    /// Mixed into the mount seed so fields seeded together still differ.
    pub salt: u64,
    pub count: usize,
    /// Upper bound of the animation delay, seconds.
    pub max_delay: f64,
    pub base_duration: f64,
    pub duration_jitter: f64,
    /// Hue range as (start, span) in degrees. `None` uses the section color.
    pub hue: Option<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Percent of the field width.
    pub left: f64,
    /// Percent of the field height.
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
    pub hue: Option<f64>,
}

impl Particle {
    pub fn style(&self) -> String {
        let mut style = format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        );
        if let Some(hue) = self.hue {
            style.push_str(&format!(" background-color: hsl({:.0} 70% 60%);", hue));
        }
        style
    }
}

const SALT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn scatter(seed: u64, field: &ParticleField) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed ^ field.salt.wrapping_mul(SALT_MIX));
    (0..field.count)
        .map(|_| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: rng.gen::<f64>() * field.max_delay,
            duration: field.base_duration + rng.gen::<f64>() * field.duration_jitter,
            hue: field.hue.map(|(start, span)| start + rng.gen::<f64>() * span),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: ParticleField = ParticleField {
        salt: 1,
        count: 15,
        max_delay: 6.0,
        base_duration: 8.0,
        duration_jitter: 4.0,
        hue: Some((280.0, 80.0)),
    };

    #[test]
    fn same_seed_same_field() {
        assert_eq!(scatter(7, &FIELD), scatter(7, &FIELD));
        assert_ne!(scatter(7, &FIELD), scatter(8, &FIELD));
    }

    #[test]
    fn particles_stay_in_bounds() {
        let particles = scatter(42, &FIELD);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..6.0).contains(&p.delay));
            assert!((8.0..12.0).contains(&p.duration));
            let hue = p.hue.unwrap();
            assert!((280.0..360.0).contains(&hue));
        }
    }

    #[test]
    fn salt_separates_fields_sharing_a_seed() {
        let other = ParticleField { salt: 2, ..FIELD };
        let a = scatter(1_700_000_000_000, &FIELD);
        let b = scatter(1_700_000_000_000, &other);
        let shared = a
            .iter()
            .zip(&b)
            .filter(|(x, y)| x.left == y.left && x.top == y.top)
            .count();
        assert_eq!(shared, 0);
    }

    #[test]
    fn style_without_hue() {
        let particle = Particle {
            left: 10.0,
            top: 20.5,
            delay: 1.0,
            duration: 6.25,
            hue: None,
        };
        assert_eq!(
            particle.style(),
            "left: 10.00%; top: 20.50%; animation-delay: 1.00s; animation-duration: 6.25s;"
        );
    }
}
