//! The benchmark table: one formula definition per indicator.
//!
//! These constants are given domain values sourced from the published City
//! Prosperity Index methodology. They are versioned configuration, not
//! implementation detail — formula code reads them from here and nowhere
//! else, so the whole catalog is auditable in one screen.

use crate::catalog::Indicator;
use crate::shapes::{self, Polarity, Transform};
use serde::{Deserialize, Serialize};

/// A standardization formula with its benchmark constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Formula {
    /// Linear interpolation between MIN and MAX.
    Linear { min: f64, max: f64, polarity: Polarity },
    /// Linear interpolation on a transformed scale.
    Transformed {
        transform: Transform,
        min: f64,
        max: f64,
        polarity: Polarity,
    },
    /// Closeness to a single ideal benchmark.
    Target { target: f64 },
    /// Ratio actual against a one-sided threshold.
    OneSided { threshold: f64 },
    /// Shannon–Wiener diversity over per-cell proportions.
    Diversity { categories: usize },
}

impl Formula {
    /// Standardize a scalar actual value. `Diversity` is scored from cells
    /// via [`shapes::shannon_mix`], not through this path.
    pub fn standardize(&self, actual: f64) -> f64 {
        match *self {
            Formula::Linear { min, max, polarity } => shapes::linear(actual, min, max, polarity),
            Formula::Transformed {
                transform,
                min,
                max,
                polarity,
            } => shapes::transformed_linear(actual, transform, min, max, polarity),
            Formula::Target { target } => shapes::target_deviation(actual, target),
            Formula::OneSided { threshold } => shapes::one_sided(actual, threshold),
            Formula::Diversity { .. } => 0.0,
        }
    }
}

/// Formula and benchmarks for one indicator.
pub fn formula(indicator: Indicator) -> Formula {
    use Formula::*;
    use Indicator::*;
    use Polarity::*;
    match indicator {
        // productivity
        CityProductPerCapita => Transformed {
            transform: Transform::Ln,
            min: 714.4,
            max: 108_818.8,
            polarity: MoreIsBetter,
        },
        OldAgeDependencyRatio => Linear { min: 3.19, max: 41.0, polarity: LessIsBetter },
        MeanHouseholdIncome => Transformed {
            transform: Transform::Ln,
            min: 2089.0,
            max: 39_572.0,
            polarity: MoreIsBetter,
        },
        EconomicDensity => Target { target: 404.3 },
        EconomicSpecialization => Target { target: 0.25 },
        UnemploymentRate => Transformed {
            transform: Transform::Ln,
            min: 0.7,
            max: 28.2,
            polarity: LessIsBetter,
        },
        EmploymentToPopulationRatio => Linear { min: 23.1, max: 83.2, polarity: MoreIsBetter },

        // infrastructure_development
        ImprovedShelter => Linear { min: 84.8, max: 100.0, polarity: MoreIsBetter },
        AccessToImprovedWater => Linear { min: 64.9, max: 100.0, polarity: MoreIsBetter },
        AccessToImprovedSanitation => Linear { min: 15.1, max: 100.0, polarity: MoreIsBetter },
        AccessToElectricity => Linear { min: 41.3, max: 100.0, polarity: MoreIsBetter },
        SufficientLivingArea => Linear { min: 55.4, max: 99.0, polarity: MoreIsBetter },
        InternetAccess => Linear { min: 0.9, max: 96.5, polarity: MoreIsBetter },
        AverageBroadbandSpeed => Transformed {
            transform: Transform::FourthRoot,
            min: 0.6,
            max: 56.0,
            polarity: MoreIsBetter,
        },
        UseOfPublicTransport => Linear { min: 4.4, max: 77.2, polarity: MoreIsBetter },
        AverageDailyTravelTime => Target { target: 30.0 },
        TrafficFatalities => Linear { min: 1.1, max: 31.6, polarity: LessIsBetter },
        StreetIntersectionDensity => Linear { min: 0.0, max: 100.0, polarity: MoreIsBetter },
        StreetDensity => Target { target: 20.0 },

        // quality_of_life
        LifeExpectancyAtBirth => Linear { min: 49.0, max: 83.48, polarity: MoreIsBetter },
        UnderFiveMortality => Transformed {
            transform: Transform::FourthRoot,
            min: 2.0,
            max: 181.6,
            polarity: LessIsBetter,
        },
        MaternalMortality => Transformed {
            transform: Transform::Ln,
            min: 3.0,
            max: 1100.0,
            polarity: LessIsBetter,
        },
        PhysicianDensity => Transformed {
            transform: Transform::Sqrt,
            min: 0.05,
            max: 7.74,
            polarity: MoreIsBetter,
        },
        LiteracyRate => Linear { min: 15.0, max: 99.9, polarity: MoreIsBetter },
        MeanYearsOfSchooling => Linear { min: 1.4, max: 14.0, polarity: MoreIsBetter },
        HomicideRate => Transformed {
            transform: Transform::Ln,
            min: 0.3,
            max: 91.6,
            polarity: LessIsBetter,
        },
        TheftRate => Linear { min: 40.2, max: 1541.8, polarity: LessIsBetter },
        AccessibilityToOpenPublicAreas => Linear { min: 24.8, max: 100.0, polarity: MoreIsBetter },
        GreenAreaPerCapita => OneSided { threshold: 15.0 },

        // equity_social_inclusion
        GiniCoefficient => Linear { min: 0.24, max: 0.63, polarity: LessIsBetter },
        PovertyRate => Linear { min: 0.3, max: 76.8, polarity: LessIsBetter },
        SlumHouseholds => Linear { min: 0.0, max: 80.0, polarity: LessIsBetter },
        YouthUnemployment => Linear { min: 0.7, max: 61.0, polarity: LessIsBetter },
        EquitableSecondarySchoolEnrollment => Target { target: 1.0 },
        WomenInLocalGovernment => Target { target: 50.0 },
        WomenInLocalWorkforce => Target { target: 50.0 },
        LandUseMix => Diversity { categories: 5 },

        // environmental_sustainability
        Pm25Concentration => Linear { min: 10.0, max: 100.0, polarity: LessIsBetter },
        NumberOfMonitoringStations => Linear { min: 0.0, max: 4.0, polarity: MoreIsBetter },
        SolidWasteCollection => OneSided { threshold: 50.0 },
        WastewaterTreatment => OneSided { threshold: 50.0 },
        ShareOfRenewableEnergy => Linear { min: 0.2, max: 85.5, polarity: MoreIsBetter },
        Co2Emissions => Linear { min: 0.1, max: 22.0, polarity: LessIsBetter },

        // urban_governance_legislation
        VoterTurnout => Linear { min: 21.4, max: 93.4, polarity: MoreIsBetter },
        OwnRevenueCollection => Linear { min: 0.9, max: 69.0, polarity: MoreIsBetter },
        DaysToStartABusiness => Transformed {
            transform: Transform::Ln,
            min: 0.5,
            max: 208.0,
            polarity: LessIsBetter,
        },
        LandUseEfficiency => Target { target: 1.0 },
    }
}
