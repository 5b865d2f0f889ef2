//! Employee model and related types.
//!
//! This module defines the Employee struct, the EmploymentStatus enum, and
//! the Role enum used to represent workers in the payroll system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents the employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regular (permanent) employment.
    Regular,
    /// Probationary employment.
    Probationary,
}

/// Application role derived from an employee's position.
///
/// Replaces the string-keyed position lookup of earlier payroll tooling with
/// a closed enum and a total mapping: every position maps to exactly one
/// role, unknown positions fall through to [`Role::Staff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access (IT and executive positions).
    Admin,
    /// Human resources positions.
    HumanResources,
    /// Payroll department positions.
    Payroll,
    /// Everyone else.
    Staff,
}

impl Role {
    /// Maps a position tag to its role.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Positions outside the known set map to [`Role::Staff`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Role;
    ///
    /// assert_eq!(Role::from_position("Payroll Manager"), Role::Payroll);
    /// assert_eq!(Role::from_position("HR Team Leader"), Role::HumanResources);
    /// assert_eq!(Role::from_position("Account Manager"), Role::Staff);
    /// ```
    pub fn from_position(position: &str) -> Self {
        match position.trim().to_lowercase().as_str() {
            "chief executive officer" | "it operations and systems" | "system administrator" => {
                Role::Admin
            }
            "hr manager" | "hr team leader" | "hr rank and file" => Role::HumanResources,
            "payroll manager" | "payroll team leader" | "payroll rank and file" => Role::Payroll,
            _ => Role::Staff,
        }
    }
}

/// Represents an employee subject to payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (positive integer).
    pub id: i64,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's date of birth.
    pub birthday: NaiveDate,
    /// Residential address, when on file.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact number, when on file.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Social Security System member number.
    #[serde(default)]
    pub sss_number: Option<String>,
    /// PhilHealth identification number.
    #[serde(default)]
    pub philhealth_number: Option<String>,
    /// Tax identification number.
    #[serde(default)]
    pub tin: Option<String>,
    /// Pag-IBIG (HDMF) membership ID.
    #[serde(default)]
    pub pagibig_number: Option<String>,
    /// The employment status.
    pub status: EmploymentStatus,
    /// The position title (e.g. "Payroll Manager").
    pub position: String,
    /// The immediate supervisor's name, when on file.
    #[serde(default)]
    pub supervisor: Option<String>,
    /// The monthly basic salary.
    pub monthly_salary: Decimal,
    /// Monthly rice subsidy allowance.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

impl Employee {
    /// Returns the employee's full name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Returns the application role derived from the position title.
    pub fn role(&self) -> Role {
        Role::from_position(&self.position)
    }

    /// Returns true if the employee holds regular status.
    pub fn is_regular(&self) -> bool {
        self.status == EmploymentStatus::Regular
    }

    /// Validates the stored record against the employee invariants.
    ///
    /// Checks that the id is positive, the name is non-blank, and the salary
    /// and every allowance are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] naming the offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.id <= 0 {
            return Err(PayrollError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("must be positive, got {}", self.id),
            });
        }
        if self.full_name().is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.monthly_salary < Decimal::ZERO {
            return Err(PayrollError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: format!("cannot be negative, got {}", self.monthly_salary),
            });
        }
        for (field, value) in [
            ("rice_subsidy", self.rice_subsidy),
            ("phone_allowance", self.phone_allowance),
            ("clothing_allowance", self.clothing_allowance),
        ] {
            if value < Decimal::ZERO {
                return Err(PayrollError::InvalidEmployee {
                    field: field.to_string(),
                    message: format!("cannot be negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: 10001,
            first_name: "Jose".to_string(),
            last_name: "Crisostomo".to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 2, 14).unwrap(),
            address: Some("17/85 Lincoln Street, Manila".to_string()),
            phone_number: Some("526-842-311".to_string()),
            sss_number: Some("34-1987400-0".to_string()),
            philhealth_number: Some("820126853478".to_string()),
            tin: Some("192-948-201-000".to_string()),
            pagibig_number: Some("121152754026".to_string()),
            status: EmploymentStatus::Regular,
            position: "Account Manager".to_string(),
            supervisor: Some("Lim, Antonio".to_string()),
            monthly_salary: dec("50000"),
            rice_subsidy: dec("1500"),
            phone_allowance: dec("1000"),
            clothing_allowance: dec("1000"),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 10005,
            "first_name": "Maria",
            "last_name": "Santos",
            "birthday": "1988-07-09",
            "status": "regular",
            "position": "HR Manager",
            "monthly_salary": "52670",
            "rice_subsidy": "1500",
            "phone_allowance": "1000",
            "clothing_allowance": "1000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 10005);
        assert_eq!(employee.first_name, "Maria");
        assert_eq!(employee.status, EmploymentStatus::Regular);
        assert_eq!(employee.monthly_salary, dec("52670"));
        assert_eq!(employee.birthday, NaiveDate::from_ymd_opt(1988, 7, 9).unwrap());
        assert!(employee.sss_number.is_none());
    }

    #[test]
    fn test_deserialize_probationary_employee_defaults_allowances() {
        let json = r#"{
            "id": 10034,
            "first_name": "Ana",
            "last_name": "Reyes",
            "birthday": "1997-11-27",
            "status": "probationary",
            "position": "Customer Service and Relations",
            "monthly_salary": "22500"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmploymentStatus::Probationary);
        assert_eq!(employee.rice_subsidy, Decimal::ZERO);
        assert_eq!(employee.phone_allowance, Decimal::ZERO);
        assert_eq!(employee.clothing_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_full_name_joins_and_trims() {
        let mut employee = create_test_employee();
        employee.first_name = "  Jose ".to_string();
        employee.last_name = " Crisostomo ".to_string();
        assert_eq!(employee.full_name(), "Jose Crisostomo");
    }

    #[test]
    fn test_is_regular() {
        let mut employee = create_test_employee();
        assert!(employee.is_regular());
        employee.status = EmploymentStatus::Probationary;
        assert!(!employee.is_regular());
    }

    #[test]
    fn test_role_mapping_for_known_positions() {
        assert_eq!(Role::from_position("HR Manager"), Role::HumanResources);
        assert_eq!(Role::from_position("hr team leader"), Role::HumanResources);
        assert_eq!(Role::from_position("Payroll Rank and File"), Role::Payroll);
        assert_eq!(Role::from_position("Chief Executive Officer"), Role::Admin);
        assert_eq!(
            Role::from_position("IT Operations and Systems"),
            Role::Admin
        );
    }

    #[test]
    fn test_role_mapping_defaults_to_staff() {
        assert_eq!(Role::from_position("Account Manager"), Role::Staff);
        assert_eq!(Role::from_position(""), Role::Staff);
        assert_eq!(Role::from_position("Sales & Marketing"), Role::Staff);
    }

    #[test]
    fn test_role_accessor_uses_position() {
        let mut employee = create_test_employee();
        employee.position = "Payroll Team Leader".to_string();
        assert_eq!(employee.role(), Role::Payroll);
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(create_test_employee().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_id() {
        let mut employee = create_test_employee();
        employee.id = 0;

        match employee.validate().unwrap_err() {
            PayrollError::InvalidEmployee { field, .. } => assert_eq!(field, "id"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut employee = create_test_employee();
        employee.first_name = "   ".to_string();
        employee.last_name = String::new();

        match employee.validate().unwrap_err() {
            PayrollError::InvalidEmployee { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let mut employee = create_test_employee();
        employee.monthly_salary = dec("-1");

        match employee.validate().unwrap_err() {
            PayrollError::InvalidEmployee { field, .. } => assert_eq!(field, "monthly_salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_allowance() {
        let mut employee = create_test_employee();
        employee.clothing_allowance = dec("-500");

        match employee.validate().unwrap_err() {
            PayrollError::InvalidEmployee { field, .. } => {
                assert_eq!(field, "clothing_allowance")
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_zero_salary() {
        // Zero salary is valid storage; the calculator rejects it separately.
        let mut employee = create_test_employee();
        employee.monthly_salary = Decimal::ZERO;
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Probationary).unwrap(),
            "\"probationary\""
        );
    }
}
