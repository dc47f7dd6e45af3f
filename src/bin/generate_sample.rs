//! Writes a deterministic sample hospital-utilization CSV to
//! `data/hospital-utilization.csv`, with the messy formatting the real
//! export has: `$`-and-comma revenue, fractional margins, a few empty
//! cells.

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
}

/// `1234567` → `"$1,234,567"`, the formatting the source export uses.
fn dollars(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (facility, county, base available beds, base annual revenue)
    let facilities: [(&str, &str, f64, f64); 8] = [
        ("Mercy General Hospital", "Sacramento", 342.0, 310_000_000.0),
        ("Valley Medical Center", "Santa Clara", 524.0, 620_000_000.0),
        ("St. Rose Hospital", "Alameda", 175.0, 140_000_000.0),
        ("Sierra Nevada Memorial", "Nevada", 104.0, 95_000_000.0),
        ("Coastal Community Hospital", "Orange", 218.0, 180_000_000.0),
        ("Redwood District Hospital", "Humboldt", 78.0, 52_000_000.0),
        ("Desert Springs Medical", "Riverside", 293.0, 255_000_000.0),
        ("Lakeview Regional", "Lake", 61.0, 38_000_000.0),
    ];
    let years = [2019, 2020, 2021, 2022, 2023];

    std::fs::create_dir_all("data").expect("create data directory");
    let output_path = "data/hospital-utilization.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("create output file");

    writer
        .write_record([
            "Facility Name",
            "County",
            "Year",
            "Available Beds",
            "Staffed Beds",
            "Total Discharges",
            "Patient Days",
            "Total Operating Rev",
            "Operating Margin",
        ])
        .expect("write header");

    let mut rows = 0usize;
    for (facility, county, base_beds, base_rev) in facilities {
        for (i, year) in years.iter().enumerate() {
            let growth = 1.0 + 0.04 * i as f64;
            let available = (base_beds + rng.gauss(0.0, base_beds * 0.03)).round().max(10.0);
            let staffed = (available * (0.75 + rng.next_f64() * 0.2)).round();
            let discharges = (available * rng.gauss(42.0, 6.0)).round().max(0.0);
            let patient_days = (discharges * rng.gauss(4.6, 0.5)).round().max(0.0);
            let revenue = (base_rev * growth * rng.gauss(1.0, 0.08)).round() as i64;
            let margin = rng.gauss(0.04, 0.035);

            // Sprinkle a few blanks so the cleaning pass has something to do.
            let revenue_cell = if rng.next_f64() < 0.03 {
                String::new()
            } else {
                dollars(revenue)
            };
            let margin_cell = if rng.next_f64() < 0.05 {
                String::new()
            } else {
                format!("{margin:.4}")
            };

            writer
                .write_record([
                    facility,
                    county,
                    &year.to_string(),
                    &format!("{available:.0}"),
                    &format!("{staffed:.0}"),
                    &format!("{discharges:.0}"),
                    &format!("{patient_days:.0}"),
                    &revenue_cell,
                    &margin_cell,
                ])
                .expect("write record");
            rows += 1;
        }
    }

    writer.flush().expect("flush output");
    println!("Wrote {rows} hospital records to {output_path}");
}
