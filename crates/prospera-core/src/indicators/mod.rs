//! Per-indicator calculators.
//!
//! Each dimension module computes the validated "actual" metric for its
//! indicators (a rate, ratio, density, or the measurement itself); the
//! standardization against benchmarks and the comment classification are
//! shared here so every indicator follows the same finish.

pub mod environment;
pub mod equity;
pub mod governance;
pub mod infrastructure;
pub mod productivity;
pub mod quality_of_life;

use crate::benchmarks::{formula, Formula};
use crate::catalog::Indicator;
use crate::comment::{classify, classify_mix};
use crate::inputs::{RawInputs, ValidationError};
use crate::shapes::{mean_entropy, round2, shannon_mix};
use serde::{Deserialize, Serialize};

/// Result of one indicator calculation: the audit "actual" metric, the
/// standardized [0, 100] score, and its qualitative comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub indicator: Indicator,
    pub actual: f64,
    pub standardized: f64,
    pub comment: String,
}

/// Validate the raw inputs for `indicator` and run its formula.
///
/// Validation failures are local and recoverable: the formula is not
/// executed and the caller persists nothing.
pub fn compute(indicator: Indicator, inputs: &RawInputs) -> Result<Scored, ValidationError> {
    use Indicator::*;

    // The diversity family scores cells, not a scalar actual.
    if indicator == LandUseMix {
        let cells = inputs.cells("cells")?;
        let categories = match formula(indicator) {
            Formula::Diversity { categories } => categories,
            _ => unreachable!("land_use_mix is the diversity indicator"),
        };
        let standardized = round2(shannon_mix(&cells, categories));
        return Ok(Scored {
            indicator,
            actual: round2(mean_entropy(&cells)),
            standardized,
            comment: classify_mix(standardized).label().to_string(),
        });
    }

    let actual = match indicator {
        CityProductPerCapita | OldAgeDependencyRatio | MeanHouseholdIncome => {
            inputs.non_negative("value")?
        }
        EconomicDensity => productivity::economic_density(inputs)?,
        EconomicSpecialization => productivity::economic_specialization(inputs)?,
        UnemploymentRate => productivity::unemployment_rate(inputs)?,
        EmploymentToPopulationRatio => productivity::employment_to_population_ratio(inputs)?,

        ImprovedShelter | AccessToImprovedWater | AccessToImprovedSanitation
        | AccessToElectricity | SufficientLivingArea | InternetAccess | AverageBroadbandSpeed
        | UseOfPublicTransport | AverageDailyTravelTime | StreetIntersectionDensity
        | StreetDensity => inputs.non_negative("value")?,
        TrafficFatalities => infrastructure::traffic_fatalities(inputs)?,

        LifeExpectancyAtBirth | UnderFiveMortality | MaternalMortality | PhysicianDensity
        | MeanYearsOfSchooling | AccessibilityToOpenPublicAreas => inputs.non_negative("value")?,
        LiteracyRate => quality_of_life::literacy_rate(inputs)?,
        HomicideRate => quality_of_life::homicide_rate(inputs)?,
        TheftRate => quality_of_life::theft_rate(inputs)?,
        GreenAreaPerCapita => quality_of_life::green_area_per_capita(inputs)?,

        GiniCoefficient | PovertyRate | SlumHouseholds => inputs.non_negative("value")?,
        YouthUnemployment => equity::youth_unemployment(inputs)?,
        EquitableSecondarySchoolEnrollment => equity::equitable_enrollment_ratio(inputs)?,
        WomenInLocalGovernment => equity::women_in_local_government(inputs)?,
        WomenInLocalWorkforce => equity::women_in_local_workforce(inputs)?,
        LandUseMix => unreachable!("handled above"),

        Pm25Concentration | ShareOfRenewableEnergy | Co2Emissions => {
            inputs.non_negative("value")?
        }
        NumberOfMonitoringStations => environment::monitoring_stations_per_million(inputs)?,
        SolidWasteCollection => environment::solid_waste_collection(inputs)?,
        WastewaterTreatment => environment::wastewater_treatment(inputs)?,

        OwnRevenueCollection | DaysToStartABusiness => inputs.non_negative("value")?,
        VoterTurnout => governance::voter_turnout(inputs)?,
        LandUseEfficiency => governance::land_use_efficiency(inputs)?,
    };

    let standardized = round2(formula(indicator).standardize(actual));
    Ok(Scored {
        indicator,
        actual: round2(actual),
        standardized,
        comment: classify(standardized).label().to_string(),
    })
}

/// Percentage of `part` in `whole`, after part/whole validation.
pub(crate) fn percentage(
    inputs: &RawInputs,
    part: &str,
    whole: &str,
) -> Result<f64, ValidationError> {
    let (p, w) = inputs.part_whole(part, whole)?;
    Ok(p / w * 100.0)
}

/// Incidence per `scale` population (e.g. 100 000 for crime rates).
pub(crate) fn rate_per(
    inputs: &RawInputs,
    count: &str,
    population: &str,
    scale: f64,
) -> Result<f64, ValidationError> {
    let (c, p) = inputs.part_whole(count, population)?;
    Ok(c / p * scale)
}
