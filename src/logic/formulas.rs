//! Pure scientific formulas shared by the analyzers and calculators.
//!
//! All functions are deterministic and side-effect-free, and assume finite
//! numeric inputs. Validation is the caller's job.

/// Oxygen consumed fully nitrifying one mg of NH3-N (NH3 + 2O2 -> NO3- + H+ + H2O).
pub const O2_PER_MG_NH3_N: f64 = 4.57;

/// Heterotrophic bacteria in the same bed consume oxygen on top of the
/// nitrifiers; sized as a fixed fraction of the autotrophic demand.
pub const HETEROTROPH_OVERHEAD: f64 = 0.25;

/// Light extinction coefficient of clear aquarium water, per metre.
pub const WATER_EXTINCTION_PER_M: f64 = 0.3;

/// Temperature-corrected pKa of the NH4+/NH3 equilibrium: 9.25 at 25 °C,
/// falling 0.03 per °C of warming (warmer water shifts the balance toward
/// the toxic un-ionized form).
pub fn ammonia_pka(temp_c: f64) -> f64 {
    9.25 + 0.03 * (25.0 - temp_c)
}

/// Fraction of total ammonia present as un-ionized NH3, from the
/// Henderson-Hasselbalch relation.
pub fn free_ammonia_fraction(ph: f64, temp_c: f64) -> f64 {
    let pka = ammonia_pka(temp_c);
    1.0 / (1.0 + 10f64.powf(pka - ph))
}

/// Un-ionized ammonia concentration, mg/L.
pub fn free_ammonia(total_mg_l: f64, ph: f64, temp_c: f64) -> f64 {
    total_mg_l * free_ammonia_fraction(ph, temp_c)
}

/// Maximum dissolved-oxygen solubility in fresh water, mg/L.
pub fn oxygen_saturation(temp_c: f64) -> f64 {
    14.652 - 0.41022 * temp_c + 0.007991 * temp_c.powi(2) - 0.000077774 * temp_c.powi(3)
}

/// Percent of the solubility limit represented by a measured O2 reading.
pub fn oxygen_saturation_percent(measured_mg_l: f64, temp_c: f64) -> f64 {
    measured_mg_l / oxygen_saturation(temp_c) * 100.0
}

/// Q10 temperature scaling factor for a biological rate: how much faster
/// (or slower) the process runs at `temp_c` than at `ref_c`. The coefficient
/// is documented per call site (nitrifiers 2.3 at 25 °C reference, metabolic
/// bioload 2.0 at 20 °C reference).
pub fn q10_factor(q10: f64, temp_c: f64, ref_c: f64) -> f64 {
    q10.powf((temp_c - ref_c) / 10.0)
}

/// Oxygen consumed nitrifying a given NH3-N mass, including heterotrophic
/// overhead. `efficiency` is the fraction of the load actually nitrified.
pub fn nitrification_oxygen_demand(nh3_n_mg: f64, efficiency: f64) -> f64 {
    nh3_n_mg * efficiency * O2_PER_MG_NH3_N * (1.0 + HETEROTROPH_OVERHEAD)
}

/// PAR required at the water surface so that `target_par` survives to
/// `depth_m`, by Lambert-Beer attenuation.
pub fn surface_par_required(target_par: f64, extinction_per_m: f64, depth_m: f64) -> f64 {
    target_par / (-extinction_per_m * depth_m).exp()
}

/// Electrical power needed to deliver a photon flux over an area, inflated
/// by the fixture-technology correction factor.
pub fn fixture_watts(
    surface_par: f64,
    area_m2: f64,
    efficiency_umol_per_j: f64,
    correction: f64,
) -> f64 {
    surface_par * area_m2 / efficiency_umol_per_j * correction
}

/// Daily Light Integral, mol photons per m² per day.
pub fn daily_light_integral(par: f64, photoperiod_hours: f64) -> f64 {
    par * photoperiod_hours * 3600.0 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_ammonia_fraction_increases_with_ph() {
        // Fixed total and temperature: the toxic fraction must rise
        // strictly with pH.
        let mut previous = free_ammonia_fraction(6.0, 25.0);
        for ph in [6.5, 7.0, 7.5, 8.0, 8.5, 9.0] {
            let fraction = free_ammonia_fraction(ph, 25.0);
            assert!(
                fraction > previous,
                "fraction at pH {} not greater than at lower pH",
                ph
            );
            previous = fraction;
        }
    }

    #[test]
    fn free_ammonia_fraction_is_bounded() {
        for ph in [0.0, 4.0, 7.0, 10.0, 14.0] {
            for temp in [0.0, 15.0, 25.0, 35.0] {
                let fraction = free_ammonia_fraction(ph, temp);
                assert!((0.0..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn free_ammonia_fraction_known_magnitudes() {
        // At 25 °C the pKa anchors at 9.25.
        assert!((ammonia_pka(25.0) - 9.25).abs() < 1e-12);
        // pH 6.5: ~0.17% un-ionized.
        let acidic = free_ammonia_fraction(6.5, 25.0);
        assert!(acidic > 0.001 && acidic < 0.003, "got {}", acidic);
        // pH 8.5: ~15% un-ionized.
        let alkaline = free_ammonia_fraction(8.5, 25.0);
        assert!(alkaline > 0.12 && alkaline < 0.18, "got {}", alkaline);
    }

    #[test]
    fn free_ammonia_fraction_increases_with_temperature() {
        let cool = free_ammonia_fraction(7.5, 20.0);
        let warm = free_ammonia_fraction(7.5, 30.0);
        assert!(warm > cool);
    }

    #[test]
    fn free_ammonia_scales_with_total() {
        let one = free_ammonia(1.0, 8.0, 25.0);
        let two = free_ammonia(2.0, 8.0, 25.0);
        assert!((two - 2.0 * one).abs() < 1e-12);
    }

    #[test]
    fn oxygen_saturation_known_values() {
        // 0 °C: ~14.6 mg/L
        assert!((oxygen_saturation(0.0) - 14.652).abs() < 0.01);
        // 25 °C: ~8.3 mg/L
        let at_25 = oxygen_saturation(25.0);
        assert!((at_25 - 8.3).abs() < 0.2, "saturation at 25C was {}", at_25);
    }

    #[test]
    fn oxygen_saturation_decreases_with_temperature() {
        let mut previous = oxygen_saturation(0.0);
        for t in 1..=35 {
            let current = oxygen_saturation(t as f64);
            assert!(
                current < previous,
                "saturation did not decrease at {} °C",
                t
            );
            previous = current;
        }
    }

    #[test]
    fn oxygen_percent_saturation() {
        let percent = oxygen_saturation_percent(oxygen_saturation(25.0), 25.0);
        assert!((percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn q10_factor_reference_and_direction() {
        assert!((q10_factor(2.3, 25.0, 25.0) - 1.0).abs() < 1e-12);
        // One full decade above reference multiplies by the coefficient.
        assert!((q10_factor(2.3, 35.0, 25.0) - 2.3).abs() < 1e-12);
        // Below reference the rate slows.
        assert!(q10_factor(2.0, 15.0, 20.0) < 1.0);
    }

    #[test]
    fn nitrification_demand_stoichiometry() {
        // 10 mg NH3-N at 100% efficiency: 45.7 mg O2 plus 25% overhead.
        let demand = nitrification_oxygen_demand(10.0, 1.0);
        assert!((demand - 45.7 * 1.25).abs() < 1e-9);
        // Efficiency scales linearly.
        assert!(
            (nitrification_oxygen_demand(10.0, 0.85) - demand * 0.85).abs() < 1e-9
        );
    }

    #[test]
    fn surface_par_grows_with_depth() {
        let shallow = surface_par_required(100.0, WATER_EXTINCTION_PER_M, 0.3);
        let deep = surface_par_required(100.0, WATER_EXTINCTION_PER_M, 0.6);
        assert!(shallow > 100.0);
        assert!(deep > shallow);
    }

    #[test]
    fn dli_example() {
        // 100 μmol/m²/s over 8 h = 2.88 mol/m²/day.
        assert!((daily_light_integral(100.0, 8.0) - 2.88).abs() < 1e-9);
    }
}
