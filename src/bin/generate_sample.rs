use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const HEADERS: [&str; 7] = [
    "year",
    "median_rent",
    "housing_units",
    "net_new_housing",
    "employment",
    "total_wages",
    "CPI",
];

/// Format a value, or `NA` with probability `p_missing`.
fn cell(rng: &mut SimpleRng, value: f64, decimals: usize, p_missing: f64) -> String {
    if rng.chance(p_missing) {
        "NA".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "data.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADERS).context("writing header")?;

    let mut rent = 1_150.0;
    let mut housing_units = 346_000.0;
    let mut employment = 560_000.0;
    let mut wage = 62_000.0;
    let mut rows = 0;

    for year in 1979..=2014 {
        let cpi = rng.gauss(3.2, 1.1).max(-0.5);
        let real_growth = rng.gauss(0.02, 0.04);
        rent *= 1.0 + cpi / 100.0 + real_growth;

        let net_new = rng.gauss(1_500.0, 600.0).max(0.0).round();
        housing_units += net_new;
        employment *= 1.0 + rng.gauss(0.01, 0.025);
        wage *= 1.0 + cpi / 100.0 + rng.gauss(0.01, 0.01);

        // Early years have patchier coverage.
        let p_missing = if year < 1990 { 0.25 } else { 0.05 };

        let record = [
            year.to_string(),
            cell(&mut rng, rent, 0, p_missing),
            cell(&mut rng, housing_units, 0, p_missing),
            cell(&mut rng, net_new, 0, p_missing),
            cell(&mut rng, employment, 0, p_missing),
            cell(&mut rng, employment * wage, 0, p_missing),
            cell(&mut rng, cpi, 2, p_missing / 2.0),
        ];
        writer
            .write_record(&record)
            .with_context(|| format!("writing year {year}"))?;
        rows += 1;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} years to {output_path}");
    Ok(())
}
