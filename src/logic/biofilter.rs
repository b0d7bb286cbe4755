//! Biofilter sizing: media volume, surface area, and contact time for a
//! target ammonia load.

use crate::error::{AquaOpsError, Result};
use crate::models::{BiofilterSizing, MediaType, StatusTier};

/// cm² of surface per litre of media for 1 m²/m³ of surface density.
const CM2_PER_L_PER_M2_M3: f64 = 10.0;

/// Retention below this is too short for the nitrifiers to work, minutes.
const MIN_RETENTION_MINUTES: f64 = 2.0;
/// Retention at or above this gives full contact, minutes.
const GOOD_RETENTION_MINUTES: f64 = 5.0;

pub fn size_biofilter(
    nh3_load_mg_per_day: f64,
    media: MediaType,
    flow_l_per_h: f64,
) -> Result<BiofilterSizing> {
    if !nh3_load_mg_per_day.is_finite() || nh3_load_mg_per_day <= 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "NH3-N load must be a positive finite number".to_string(),
        ));
    }
    if !flow_l_per_h.is_finite() || flow_l_per_h <= 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "flow rate must be a positive finite number".to_string(),
        ));
    }

    let media_volume_l = nh3_load_mg_per_day / media.nitrification_rate_mg_per_l_day();
    let surface_area_cm2 =
        media_volume_l * media.surface_density_m2_per_m3() * CM2_PER_L_PER_M2_M3;
    let retention_minutes = media_volume_l * 60.0 / flow_l_per_h;

    let (contact_tier, contact_note) = if retention_minutes < MIN_RETENTION_MINUTES {
        (
            StatusTier::Danger,
            "Flow is too fast for the bed; slow the pump or enlarge the media volume"
                .to_string(),
        )
    } else if retention_minutes < GOOD_RETENTION_MINUTES {
        (
            StatusTier::Warning,
            "Contact time is marginal; more media would improve conversion".to_string(),
        )
    } else {
        (
            StatusTier::Excellent,
            "Contact time is sufficient for full nitrification".to_string(),
        )
    };

    Ok(BiofilterSizing {
        media,
        media_volume_l,
        surface_area_cm2,
        retention_minutes,
        contact_tier,
        contact_note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceramic_reference_sizing() {
        // 60 mg/day on ceramic rings (60 mg/L/day) needs exactly one litre.
        let sizing = size_biofilter(60.0, MediaType::CeramicRings, 10.0).unwrap();
        assert!((sizing.media_volume_l - 1.0).abs() < 1e-9);
        // 600 m²/m³ = 6000 cm² per litre.
        assert!((sizing.surface_area_cm2 - 6000.0).abs() < 1e-9);
        // 1 L * 60 / 10 L/h = 6 minutes.
        assert!((sizing.retention_minutes - 6.0).abs() < 1e-9);
        assert_eq!(sizing.contact_tier, StatusTier::Excellent);
    }

    #[test]
    fn denser_media_needs_less_volume() {
        let ceramic = size_biofilter(100.0, MediaType::CeramicRings, 50.0).unwrap();
        let glass = size_biofilter(100.0, MediaType::SinteredGlass, 50.0).unwrap();
        assert!(glass.media_volume_l < ceramic.media_volume_l);
    }

    #[test]
    fn retention_boundaries() {
        // volume = 60/60 = 1 L; retention = 60/flow minutes.
        let hrt = |flow: f64| size_biofilter(60.0, MediaType::CeramicRings, flow).unwrap();
        // 60/40 = 1.5 min: too fast.
        assert_eq!(hrt(40.0).contact_tier, StatusTier::Danger);
        // Exactly 2 minutes is marginal, not failing.
        assert_eq!(hrt(30.0).contact_tier, StatusTier::Warning);
        // 60/15 = 4 min: still marginal.
        assert_eq!(hrt(15.0).contact_tier, StatusTier::Warning);
        // Exactly 5 minutes is adequate.
        assert_eq!(hrt(12.0).contact_tier, StatusTier::Excellent);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(size_biofilter(0.0, MediaType::Sponge, 100.0).is_err());
        assert!(size_biofilter(50.0, MediaType::Sponge, 0.0).is_err());
        assert!(size_biofilter(f64::INFINITY, MediaType::Sponge, 100.0).is_err());
    }
}
