//! Generate a deterministic sample `summary.csv` for demos and manual
//! testing of the dashboard.

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

/// (name, cost per m² in SEK, embodied GWP in kgCO₂e per m², insulating effect)
type Material = (&'static str, f64, f64, f64);

const WALL_CLADDINGS: [Material; 3] = [
    ("brick", 950.0, 48.0, 0.4),
    ("wood_panel", 620.0, 14.0, 0.6),
    ("fiber_cement", 780.0, 30.0, 0.3),
];
const WALL_MEMBRANES: [Material; 2] = [
    ("pe_foil", 45.0, 2.5, 0.1),
    ("bitumen_felt", 80.0, 6.0, 0.15),
];
const WALL_INSULATIONS: [Material; 3] = [
    ("rockwool_200", 310.0, 22.0, 5.2),
    ("eps_200", 260.0, 35.0, 5.8),
    ("cellulose_240", 280.0, 8.0, 5.5),
];

const ROOF_CLADDINGS: [Material; 2] = [
    ("clay_tile", 520.0, 32.0, 0.3),
    ("metal_sheet", 430.0, 40.0, 0.1),
];
const ROOF_MEMBRANES: [Material; 2] = [
    ("bitumen_felt", 80.0, 6.0, 0.15),
    ("epdm", 140.0, 9.0, 0.2),
];
const ROOF_INSULATIONS: [Material; 3] = [
    ("rockwool_300", 420.0, 30.0, 7.0),
    ("xps_250", 390.0, 52.0, 7.6),
    ("cellulose_320", 360.0, 11.0, 7.2),
];

// Rough envelope areas for a mid-size apartment block.
const WALL_AREA_M2: f64 = 1400.0;
const ROOF_AREA_M2: f64 = 600.0;
const FLOOR_AREA_M2: f64 = 2400.0;

fn list_literal(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "summary.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "package",
            "wall_materials",
            "roof_materials",
            "heating_demand_kwh_per_m2",
            "gwp_kgco2e",
            "cost_sek",
        ])
        .expect("Failed to write header");

    let mut package_no = 0;
    for wall_clad in &WALL_CLADDINGS {
        for wall_mem in &WALL_MEMBRANES {
            for wall_ins in &WALL_INSULATIONS {
                for roof_clad in &ROOF_CLADDINGS {
                    for roof_mem in &ROOF_MEMBRANES {
                        for roof_ins in &ROOF_INSULATIONS {
                            package_no += 1;

                            let wall = [wall_clad, wall_mem, wall_ins];
                            let roof = [roof_clad, roof_mem, roof_ins];

                            let cost: f64 = wall.iter().map(|m| m.1 * WALL_AREA_M2).sum::<f64>()
                                + roof.iter().map(|m| m.1 * ROOF_AREA_M2).sum::<f64>();
                            let gwp: f64 = wall.iter().map(|m| m.2 * WALL_AREA_M2).sum::<f64>()
                                + roof.iter().map(|m| m.2 * ROOF_AREA_M2).sum::<f64>();

                            // Better-insulated envelopes heat less; noise
                            // stands in for simulation variance.
                            let insulation: f64 = wall.iter().map(|m| m.3).sum::<f64>()
                                + roof.iter().map(|m| m.3).sum::<f64>();
                            let annual_kwh = 384_000.0 - 18_000.0 * insulation;
                            let heating = (annual_kwh / FLOOR_AREA_M2 + rng.gauss(0.0, 2.0))
                                .max(15.0);

                            writer
                                .write_record([
                                    format!("pkg_{package_no:03}"),
                                    list_literal(&[wall_clad.0, wall_mem.0, wall_ins.0]),
                                    list_literal(&[roof_clad.0, roof_mem.0, roof_ins.0]),
                                    format!("{heating:.2}"),
                                    format!("{gwp:.0}"),
                                    format!("{:.0}", cost * (1.0 + rng.gauss(0.0, 0.03))),
                                ])
                                .expect("Failed to write row");
                        }
                    }
                }
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {package_no} packages to {output_path}");
}
