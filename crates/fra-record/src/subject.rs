//! Beneficiary and claim attributes.
//!
//! [`SubjectInfo`] is the claimant payload carried by every reviewable item.
//! The workflow engine treats it as opaque: it is captured at admission and
//! never mutated by any transition.

use serde::{Deserialize, Serialize};

/// Category of forest right being claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightType {
    /// Individual forest right.
    Ifr,
    /// Community right.
    Cr,
    /// Community forest resource right.
    Cfr,
}

/// A WGS84 point locating the claimed parcel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Claimant attributes attached to a reviewable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInfo {
    /// Full name of the applicant or beneficiary.
    pub applicant_name: String,
    /// National identity number as supplied on the submitted documents.
    pub national_id: String,
    /// Village the claim originates from.
    pub village: String,
    /// Category of right being claimed.
    pub right_type: RightType,
    /// Area claimed, in hectares.
    pub claim_area_hectares: f64,
    /// Forest area associated with the claim, in hectares.
    pub forest_area_hectares: f64,
    /// Tribal community of the claimant.
    pub tribal_community: String,
    /// Declared annual household income, in rupees.
    pub annual_income: u64,
    /// Parcel location, when surveyed.
    pub coordinates: Option<GeoPoint>,
}
