//! Type-safe enumerations for the controlled fields of an admission record.
//!
//! The string form of every variant is the exact value the destination
//! collection's shape validator permits; `as_str` is the canonical spelling
//! and `FromStr` accepts case-insensitive input with surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &["Male", "Female"]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// ABO/Rh blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A+" => Ok(BloodType::APositive),
            "A-" => Ok(BloodType::ANegative),
            "B+" => Ok(BloodType::BPositive),
            "B-" => Ok(BloodType::BNegative),
            "AB+" => Ok(BloodType::AbPositive),
            "AB-" => Ok(BloodType::AbNegative),
            "O+" => Ok(BloodType::OPositive),
            "O-" => Ok(BloodType::ONegative),
            _ => Err(format!("Unknown blood type: {s}")),
        }
    }
}

/// How the admission was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdmissionType {
    Elective,
    Emergency,
    Urgent,
}

impl AdmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionType::Elective => "Elective",
            AdmissionType::Emergency => "Emergency",
            AdmissionType::Urgent => "Urgent",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &["Elective", "Emergency", "Urgent"]
    }
}

impl fmt::Display for AdmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdmissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ELECTIVE" => Ok(AdmissionType::Elective),
            "EMERGENCY" => Ok(AdmissionType::Emergency),
            "URGENT" => Ok(AdmissionType::Urgent),
            _ => Err(format!("Unknown admission type: {s}")),
        }
    }
}

/// Primary diagnosed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicalCondition {
    Arthritis,
    Asthma,
    Cancer,
    Diabetes,
    Hypertension,
    Obesity,
}

impl MedicalCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCondition::Arthritis => "Arthritis",
            MedicalCondition::Asthma => "Asthma",
            MedicalCondition::Cancer => "Cancer",
            MedicalCondition::Diabetes => "Diabetes",
            MedicalCondition::Hypertension => "Hypertension",
            MedicalCondition::Obesity => "Obesity",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &[
            "Arthritis",
            "Asthma",
            "Cancer",
            "Diabetes",
            "Hypertension",
            "Obesity",
        ]
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MedicalCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARTHRITIS" => Ok(MedicalCondition::Arthritis),
            "ASTHMA" => Ok(MedicalCondition::Asthma),
            "CANCER" => Ok(MedicalCondition::Cancer),
            "DIABETES" => Ok(MedicalCondition::Diabetes),
            "HYPERTENSION" => Ok(MedicalCondition::Hypertension),
            "OBESITY" => Ok(MedicalCondition::Obesity),
            _ => Err(format!("Unknown medical condition: {s}")),
        }
    }
}

/// Prescribed medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medication {
    Aspirin,
    Ibuprofen,
    Lipitor,
    Paracetamol,
    Penicillin,
}

impl Medication {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medication::Aspirin => "Aspirin",
            Medication::Ibuprofen => "Ibuprofen",
            Medication::Lipitor => "Lipitor",
            Medication::Paracetamol => "Paracetamol",
            Medication::Penicillin => "Penicillin",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &[
            "Aspirin",
            "Ibuprofen",
            "Lipitor",
            "Paracetamol",
            "Penicillin",
        ]
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medication {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASPIRIN" => Ok(Medication::Aspirin),
            "IBUPROFEN" => Ok(Medication::Ibuprofen),
            "LIPITOR" => Ok(Medication::Lipitor),
            "PARACETAMOL" => Ok(Medication::Paracetamol),
            "PENICILLIN" => Ok(Medication::Penicillin),
            _ => Err(format!("Unknown medication: {s}")),
        }
    }
}

/// Overall test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResult {
    Abnormal,
    Inconclusive,
    Normal,
}

impl TestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestResult::Abnormal => "Abnormal",
            TestResult::Inconclusive => "Inconclusive",
            TestResult::Normal => "Normal",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &["Abnormal", "Inconclusive", "Normal"]
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ABNORMAL" => Ok(TestResult::Abnormal),
            "INCONCLUSIVE" => Ok(TestResult::Inconclusive),
            "NORMAL" => Ok(TestResult::Normal),
            _ => Err(format!("Unknown test result: {s}")),
        }
    }
}

/// Insurance provider carried on the patient sub-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceProvider {
    Aetna,
    #[serde(rename = "Blue Cross")]
    BlueCross,
    Cigna,
    Medicare,
    UnitedHealthcare,
}

impl InsuranceProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceProvider::Aetna => "Aetna",
            InsuranceProvider::BlueCross => "Blue Cross",
            InsuranceProvider::Cigna => "Cigna",
            InsuranceProvider::Medicare => "Medicare",
            InsuranceProvider::UnitedHealthcare => "UnitedHealthcare",
        }
    }

    /// Permitted values, in validator order.
    pub fn values() -> &'static [&'static str] {
        &[
            "Aetna",
            "Blue Cross",
            "Cigna",
            "Medicare",
            "UnitedHealthcare",
        ]
    }
}

impl fmt::Display for InsuranceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsuranceProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AETNA" => Ok(InsuranceProvider::Aetna),
            "BLUE CROSS" => Ok(InsuranceProvider::BlueCross),
            "CIGNA" => Ok(InsuranceProvider::Cigna),
            "MEDICARE" => Ok(InsuranceProvider::Medicare),
            "UNITEDHEALTHCARE" => Ok(InsuranceProvider::UnitedHealthcare),
            _ => Err(format!("Unknown insurance provider: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_from_str() {
        assert_eq!("O+".parse::<BloodType>().unwrap(), BloodType::OPositive);
        assert_eq!(" ab- ".parse::<BloodType>().unwrap(), BloodType::AbNegative);
        assert!("C+".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_admission_type_from_str() {
        assert_eq!(
            "urgent".parse::<AdmissionType>().unwrap(),
            AdmissionType::Urgent
        );
        assert!("Scheduled".parse::<AdmissionType>().is_err());
    }

    #[test]
    fn test_insurance_provider_round_trip() {
        for value in InsuranceProvider::values() {
            let parsed: InsuranceProvider = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn test_serde_uses_canonical_spelling() {
        let json = serde_json::to_string(&BloodType::AbPositive).unwrap();
        assert_eq!(json, "\"AB+\"");
        let json = serde_json::to_string(&InsuranceProvider::BlueCross).unwrap();
        assert_eq!(json, "\"Blue Cross\"");
    }
}
