use salary_scope::data::model::Record;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = [2022i64, 2023, 2024, 2025];
    let seniorities: [(&str, f64); 4] = [
        ("junior", 0.6),
        ("mid-level", 0.85),
        ("senior", 1.15),
        ("executive", 1.6),
    ];
    let contracts = ["full-time", "part-time", "contract", "freelance"];
    let company_sizes = ["small", "medium", "large"];
    let modes = ["on-site", "hybrid", "remote"];
    let countries = ["USA", "GBR", "DEU", "BRA", "IND", "CAN", "ESP", "FRA"];

    // Base mean salary per role, in USD.
    let roles: [(&str, f64); 8] = [
        ("Data Scientist", 140_000.0),
        ("Data Engineer", 135_000.0),
        ("Data Analyst", 95_000.0),
        ("ML Engineer", 155_000.0),
        ("Analytics Engineer", 120_000.0),
        ("Research Scientist", 160_000.0),
        ("BI Developer", 90_000.0),
        ("Data Architect", 150_000.0),
    ];

    let output_path = "sample_salaries.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let n_records = 2_000;
    for _ in 0..n_records {
        let &(title, base) = rng.pick(&roles);
        let &(seniority, factor) = rng.pick(&seniorities);
        let year = *rng.pick(&years);

        // Salaries drift upward a little each survey year.
        let year_factor = 1.0 + 0.03 * (year - years[0]) as f64;
        let usd = (rng.gauss(base * factor * year_factor, base * 0.12)).max(20_000.0);

        let record = Record {
            year,
            seniority: seniority.to_string(),
            contract: rng.pick(&contracts).to_string(),
            company_size: rng.pick(&company_sizes).to_string(),
            title: title.to_string(),
            usd: usd.round(),
            remote: rng.pick(&modes).to_string(),
            residence_iso3: rng.pick(&countries).to_string(),
        };
        writer.serialize(&record).expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n_records} salary records to {output_path}");
}
