//! The fixed indicator catalog and rollup tree.
//!
//! Every leaf indicator, sub-dimension, and dimension is a closed enum
//! variant rather than a stringly-typed bag, so the record schema is explicit
//! and the aggregation tree is checked at compile time. The inherited
//! `_standardized` vs `_standardized_score` field-name split lives in exactly
//! one place: [`Indicator::standardized_field`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One leaf indicator of the City Prosperity Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    // productivity
    CityProductPerCapita,
    OldAgeDependencyRatio,
    MeanHouseholdIncome,
    EconomicDensity,
    EconomicSpecialization,
    UnemploymentRate,
    EmploymentToPopulationRatio,
    // infrastructure_development
    ImprovedShelter,
    AccessToImprovedWater,
    AccessToImprovedSanitation,
    AccessToElectricity,
    SufficientLivingArea,
    InternetAccess,
    AverageBroadbandSpeed,
    UseOfPublicTransport,
    AverageDailyTravelTime,
    TrafficFatalities,
    StreetIntersectionDensity,
    StreetDensity,
    // quality_of_life
    LifeExpectancyAtBirth,
    UnderFiveMortality,
    MaternalMortality,
    PhysicianDensity,
    LiteracyRate,
    MeanYearsOfSchooling,
    HomicideRate,
    TheftRate,
    AccessibilityToOpenPublicAreas,
    GreenAreaPerCapita,
    // equity_social_inclusion
    GiniCoefficient,
    PovertyRate,
    SlumHouseholds,
    YouthUnemployment,
    EquitableSecondarySchoolEnrollment,
    WomenInLocalGovernment,
    WomenInLocalWorkforce,
    LandUseMix,
    // environmental_sustainability
    Pm25Concentration,
    NumberOfMonitoringStations,
    SolidWasteCollection,
    WastewaterTreatment,
    ShareOfRenewableEnergy,
    Co2Emissions,
    // urban_governance_legislation
    VoterTurnout,
    OwnRevenueCollection,
    DaysToStartABusiness,
    LandUseEfficiency,
}

impl Indicator {
    pub const ALL: [Indicator; 47] = [
        Indicator::CityProductPerCapita,
        Indicator::OldAgeDependencyRatio,
        Indicator::MeanHouseholdIncome,
        Indicator::EconomicDensity,
        Indicator::EconomicSpecialization,
        Indicator::UnemploymentRate,
        Indicator::EmploymentToPopulationRatio,
        Indicator::ImprovedShelter,
        Indicator::AccessToImprovedWater,
        Indicator::AccessToImprovedSanitation,
        Indicator::AccessToElectricity,
        Indicator::SufficientLivingArea,
        Indicator::InternetAccess,
        Indicator::AverageBroadbandSpeed,
        Indicator::UseOfPublicTransport,
        Indicator::AverageDailyTravelTime,
        Indicator::TrafficFatalities,
        Indicator::StreetIntersectionDensity,
        Indicator::StreetDensity,
        Indicator::LifeExpectancyAtBirth,
        Indicator::UnderFiveMortality,
        Indicator::MaternalMortality,
        Indicator::PhysicianDensity,
        Indicator::LiteracyRate,
        Indicator::MeanYearsOfSchooling,
        Indicator::HomicideRate,
        Indicator::TheftRate,
        Indicator::AccessibilityToOpenPublicAreas,
        Indicator::GreenAreaPerCapita,
        Indicator::GiniCoefficient,
        Indicator::PovertyRate,
        Indicator::SlumHouseholds,
        Indicator::YouthUnemployment,
        Indicator::EquitableSecondarySchoolEnrollment,
        Indicator::WomenInLocalGovernment,
        Indicator::WomenInLocalWorkforce,
        Indicator::LandUseMix,
        Indicator::Pm25Concentration,
        Indicator::NumberOfMonitoringStations,
        Indicator::SolidWasteCollection,
        Indicator::WastewaterTreatment,
        Indicator::ShareOfRenewableEnergy,
        Indicator::Co2Emissions,
        Indicator::VoterTurnout,
        Indicator::OwnRevenueCollection,
        Indicator::DaysToStartABusiness,
        Indicator::LandUseEfficiency,
    ];

    /// Snake-case field key of the raw value on the wide record.
    pub fn key(&self) -> &'static str {
        match self {
            Indicator::CityProductPerCapita => "city_product_per_capita",
            Indicator::OldAgeDependencyRatio => "old_age_dependency_ratio",
            Indicator::MeanHouseholdIncome => "mean_household_income",
            Indicator::EconomicDensity => "economic_density",
            Indicator::EconomicSpecialization => "economic_specialization",
            Indicator::UnemploymentRate => "unemployment_rate",
            Indicator::EmploymentToPopulationRatio => "employment_to_population_ratio",
            Indicator::ImprovedShelter => "improved_shelter",
            Indicator::AccessToImprovedWater => "access_to_improved_water",
            Indicator::AccessToImprovedSanitation => "access_to_improved_sanitation",
            Indicator::AccessToElectricity => "access_to_electricity",
            Indicator::SufficientLivingArea => "sufficient_living_area",
            Indicator::InternetAccess => "internet_access",
            Indicator::AverageBroadbandSpeed => "average_broadband_speed",
            Indicator::UseOfPublicTransport => "use_of_public_transport",
            Indicator::AverageDailyTravelTime => "average_daily_travel_time",
            Indicator::TrafficFatalities => "traffic_fatalities",
            Indicator::StreetIntersectionDensity => "street_intersection_density",
            Indicator::StreetDensity => "street_density",
            Indicator::LifeExpectancyAtBirth => "life_expectancy_at_birth",
            Indicator::UnderFiveMortality => "under_five_mortality",
            Indicator::MaternalMortality => "maternal_mortality",
            Indicator::PhysicianDensity => "physician_density",
            Indicator::LiteracyRate => "literacy_rate",
            Indicator::MeanYearsOfSchooling => "mean_years_of_schooling",
            Indicator::HomicideRate => "homicide_rate",
            Indicator::TheftRate => "theft_rate",
            Indicator::AccessibilityToOpenPublicAreas => "accessibility_to_open_public_areas",
            Indicator::GreenAreaPerCapita => "green_area_per_capita",
            Indicator::GiniCoefficient => "gini_coefficient",
            Indicator::PovertyRate => "poverty_rate",
            Indicator::SlumHouseholds => "slum_households",
            Indicator::YouthUnemployment => "youth_unemployment",
            Indicator::EquitableSecondarySchoolEnrollment => {
                "equitable_secondary_school_enrollment"
            }
            Indicator::WomenInLocalGovernment => "women_in_local_government",
            Indicator::WomenInLocalWorkforce => "women_in_local_workforce",
            Indicator::LandUseMix => "land_use_mix",
            Indicator::Pm25Concentration => "pm25_concentration",
            Indicator::NumberOfMonitoringStations => "number_of_monitoring_stations",
            Indicator::SolidWasteCollection => "solid_waste_collection",
            Indicator::WastewaterTreatment => "wastewater_treatment",
            Indicator::ShareOfRenewableEnergy => "share_of_renewable_energy",
            Indicator::Co2Emissions => "co2_emissions",
            Indicator::VoterTurnout => "voter_turnout",
            Indicator::OwnRevenueCollection => "own_revenue_collection",
            Indicator::DaysToStartABusiness => "days_to_start_a_business",
            Indicator::LandUseEfficiency => "land_use_efficiency",
        }
    }

    /// Reverse lookup from a field key.
    pub fn from_key(key: &str) -> Option<Indicator> {
        Indicator::ALL.into_iter().find(|i| i.key() == key)
    }

    /// Field name of the standardized score on the wide record.
    ///
    /// Two indicators inherited the `_standardized_score` spelling from the
    /// original data model; external consumers key off both spellings, so the
    /// split is preserved here rather than silently unified.
    pub fn standardized_field(&self) -> String {
        match self {
            Indicator::GiniCoefficient | Indicator::PovertyRate => {
                format!("{}_standardized_score", self.key())
            }
            _ => format!("{}_standardized", self.key()),
        }
    }

    /// Field name of the comment label on the wide record.
    pub fn comment_field(&self) -> String {
        format!("{}_comment", self.key())
    }

    /// Sub-dimension this indicator rolls up into.
    pub fn sub_dimension(&self) -> SubDimension {
        use Indicator::*;
        match self {
            CityProductPerCapita | OldAgeDependencyRatio | MeanHouseholdIncome => {
                SubDimension::EconomicStrength
            }
            EconomicDensity | EconomicSpecialization => SubDimension::EconomicAgglomeration,
            UnemploymentRate | EmploymentToPopulationRatio => SubDimension::Employment,
            ImprovedShelter | AccessToImprovedWater | AccessToImprovedSanitation
            | AccessToElectricity | SufficientLivingArea => SubDimension::HouseInfrastructure,
            InternetAccess | AverageBroadbandSpeed => SubDimension::Ict,
            UseOfPublicTransport | AverageDailyTravelTime | TrafficFatalities => {
                SubDimension::UrbanMobility
            }
            StreetIntersectionDensity | StreetDensity => SubDimension::StreetConnectivity,
            LifeExpectancyAtBirth | UnderFiveMortality | MaternalMortality | PhysicianDensity => {
                SubDimension::Health
            }
            LiteracyRate | MeanYearsOfSchooling => SubDimension::Education,
            HomicideRate | TheftRate => SubDimension::SafetyAndSecurity,
            AccessibilityToOpenPublicAreas | GreenAreaPerCapita => SubDimension::PublicSpace,
            GiniCoefficient | PovertyRate => SubDimension::EconomicEquity,
            SlumHouseholds | YouthUnemployment => SubDimension::SocialInclusion,
            EquitableSecondarySchoolEnrollment | WomenInLocalGovernment | WomenInLocalWorkforce => {
                SubDimension::GenderInclusion
            }
            LandUseMix => SubDimension::UrbanDiversity,
            Pm25Concentration | NumberOfMonitoringStations => SubDimension::AirQuality,
            SolidWasteCollection | WastewaterTreatment => SubDimension::WasteManagement,
            ShareOfRenewableEnergy | Co2Emissions => SubDimension::Energy,
            VoterTurnout => SubDimension::Participation,
            OwnRevenueCollection | DaysToStartABusiness => SubDimension::MunicipalFinancing,
            LandUseEfficiency => SubDimension::GovernanceOfUrbanization,
        }
    }

    /// Names of the raw inputs this indicator's calculator expects.
    /// Single-input indicators take their measurement under `value`.
    pub fn inputs(&self) -> &'static [&'static str] {
        use Indicator::*;
        match self {
            EconomicDensity => &["city_product", "urban_area"],
            EconomicSpecialization => &["sector_shares"],
            UnemploymentRate => &["unemployed", "labour_force"],
            EmploymentToPopulationRatio => &["employed", "working_age_population"],
            TrafficFatalities => &["fatalities", "population"],
            LiteracyRate => &["literate_population", "total_population"],
            HomicideRate => &["homicides", "population"],
            TheftRate => &["thefts", "population"],
            GreenAreaPerCapita => &["green_area", "population"],
            YouthUnemployment => &["unemployed_youth", "youth_labour_force"],
            EquitableSecondarySchoolEnrollment => {
                &["girls_enrollment_rate", "boys_enrollment_rate"]
            }
            WomenInLocalGovernment => &["women_seats", "total_seats"],
            WomenInLocalWorkforce => &["women_employed", "total_employed"],
            LandUseMix => &["cells"],
            NumberOfMonitoringStations => &["stations", "population"],
            SolidWasteCollection => &["collected", "generated"],
            WastewaterTreatment => &["treated", "produced"],
            VoterTurnout => &["votes_cast", "eligible_voters"],
            LandUseEfficiency => &["land_consumption_rate", "population_growth_rate"],
            _ => &["value"],
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fixed group of sibling indicators averaged into one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubDimension {
    EconomicStrength,
    EconomicAgglomeration,
    Employment,
    HouseInfrastructure,
    Ict,
    UrbanMobility,
    StreetConnectivity,
    Health,
    Education,
    SafetyAndSecurity,
    PublicSpace,
    EconomicEquity,
    SocialInclusion,
    GenderInclusion,
    UrbanDiversity,
    AirQuality,
    WasteManagement,
    Energy,
    Participation,
    MunicipalFinancing,
    GovernanceOfUrbanization,
}

impl SubDimension {
    pub const ALL: [SubDimension; 21] = [
        SubDimension::EconomicStrength,
        SubDimension::EconomicAgglomeration,
        SubDimension::Employment,
        SubDimension::HouseInfrastructure,
        SubDimension::Ict,
        SubDimension::UrbanMobility,
        SubDimension::StreetConnectivity,
        SubDimension::Health,
        SubDimension::Education,
        SubDimension::SafetyAndSecurity,
        SubDimension::PublicSpace,
        SubDimension::EconomicEquity,
        SubDimension::SocialInclusion,
        SubDimension::GenderInclusion,
        SubDimension::UrbanDiversity,
        SubDimension::AirQuality,
        SubDimension::WasteManagement,
        SubDimension::Energy,
        SubDimension::Participation,
        SubDimension::MunicipalFinancing,
        SubDimension::GovernanceOfUrbanization,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SubDimension::EconomicStrength => "economic_strength",
            SubDimension::EconomicAgglomeration => "economic_agglomeration",
            SubDimension::Employment => "employment",
            SubDimension::HouseInfrastructure => "house_infrastructure",
            SubDimension::Ict => "ict",
            SubDimension::UrbanMobility => "urban_mobility",
            SubDimension::StreetConnectivity => "street_connectivity",
            SubDimension::Health => "health",
            SubDimension::Education => "education",
            SubDimension::SafetyAndSecurity => "safety_and_security",
            SubDimension::PublicSpace => "public_space",
            SubDimension::EconomicEquity => "economic_equity",
            SubDimension::SocialInclusion => "social_inclusion",
            SubDimension::GenderInclusion => "gender_inclusion",
            SubDimension::UrbanDiversity => "urban_diversity",
            SubDimension::AirQuality => "air_quality",
            SubDimension::WasteManagement => "waste_management",
            SubDimension::Energy => "energy",
            SubDimension::Participation => "participation",
            SubDimension::MunicipalFinancing => "municipal_financing",
            SubDimension::GovernanceOfUrbanization => "governance_of_urbanization",
        }
    }

    /// Leaf indicators averaged into this sub-dimension.
    pub fn children(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|i| i.sub_dimension() == *self)
            .collect()
    }

    pub fn dimension(&self) -> Dimension {
        use SubDimension::*;
        match self {
            EconomicStrength | EconomicAgglomeration | Employment => Dimension::Productivity,
            HouseInfrastructure | Ict | UrbanMobility | StreetConnectivity => {
                Dimension::InfrastructureDevelopment
            }
            Health | Education | SafetyAndSecurity | PublicSpace => Dimension::QualityOfLife,
            EconomicEquity | SocialInclusion | GenderInclusion | UrbanDiversity => {
                Dimension::EquitySocialInclusion
            }
            AirQuality | WasteManagement | Energy => Dimension::EnvironmentalSustainability,
            Participation | MunicipalFinancing | GovernanceOfUrbanization => {
                Dimension::UrbanGovernanceLegislation
            }
        }
    }
}

impl fmt::Display for SubDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the six prosperity dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Productivity,
    InfrastructureDevelopment,
    QualityOfLife,
    EquitySocialInclusion,
    EnvironmentalSustainability,
    UrbanGovernanceLegislation,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Productivity,
        Dimension::InfrastructureDevelopment,
        Dimension::QualityOfLife,
        Dimension::EquitySocialInclusion,
        Dimension::EnvironmentalSustainability,
        Dimension::UrbanGovernanceLegislation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Productivity => "productivity",
            Dimension::InfrastructureDevelopment => "infrastructure_development",
            Dimension::QualityOfLife => "quality_of_life",
            Dimension::EquitySocialInclusion => "equity_social_inclusion",
            Dimension::EnvironmentalSustainability => "environmental_sustainability",
            Dimension::UrbanGovernanceLegislation => "urban_governance_legislation",
        }
    }

    /// Sub-dimensions averaged into this dimension.
    pub fn sub_dimensions(&self) -> Vec<SubDimension> {
        SubDimension::ALL
            .into_iter()
            .filter(|s| s.dimension() == *self)
            .collect()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_and_reversible() {
        let keys: HashSet<&str> = Indicator::ALL.iter().map(|i| i.key()).collect();
        assert_eq!(keys.len(), Indicator::ALL.len());
        for ind in Indicator::ALL {
            assert_eq!(Indicator::from_key(ind.key()), Some(ind));
        }
    }

    #[test]
    fn test_legacy_standardized_spelling() {
        assert_eq!(
            Indicator::GiniCoefficient.standardized_field(),
            "gini_coefficient_standardized_score"
        );
        assert_eq!(
            Indicator::PovertyRate.standardized_field(),
            "poverty_rate_standardized_score"
        );
        assert_eq!(
            Indicator::LiteracyRate.standardized_field(),
            "literacy_rate_standardized"
        );
    }

    #[test]
    fn test_every_indicator_reaches_a_dimension() {
        for ind in Indicator::ALL {
            // Every leaf hangs off exactly one sub-dimension and dimension.
            let sub = ind.sub_dimension();
            assert!(sub.children().contains(&ind));
            assert!(sub.dimension().sub_dimensions().contains(&sub));
        }
    }

    #[test]
    fn test_no_empty_sub_dimension() {
        for sub in SubDimension::ALL {
            assert!(!sub.children().is_empty(), "{sub} has no children");
        }
    }

    #[test]
    fn test_dimension_counts() {
        assert_eq!(Dimension::ALL.len(), 6);
        let total: usize = Dimension::ALL
            .iter()
            .map(|d| d.sub_dimensions().len())
            .sum();
        assert_eq!(total, SubDimension::ALL.len());
    }
}
