//! Fixed selector enumerations for the posting form.
//!
//! Values are verbatim and order-sensitive: they populate the dropdowns in
//! declaration order and are substituted into the prompt as-is.

/// Industry choices, in display order.
pub const INDUSTRIES: [Industry; 2] = [Industry::Startup, Industry::NonItBusiness];

/// Department choices, shown only when the industry is the non-IT business
/// company.
pub const DEPARTMENTS: [Department; 3] = [
    Department::InformationSystems,
    Department::Dx,
    Department::NewBusiness,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Startup,
    NonItBusiness,
}

impl Industry {
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Startup => "startup",
            Industry::NonItBusiness => "non-IT business company",
        }
    }

    /// Parses the verbatim form value.
    pub fn parse(value: &str) -> Option<Self> {
        INDUSTRIES.into_iter().find(|i| i.as_str() == value)
    }

    pub fn is_startup(self) -> bool {
        matches!(self, Industry::Startup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    InformationSystems,
    Dx,
    NewBusiness,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Department::InformationSystems => "information systems department",
            Department::Dx => "DX department",
            Department::NewBusiness => "new business department",
        }
    }

    /// Parses the verbatim form value.
    pub fn parse(value: &str) -> Option<Self> {
        DEPARTMENTS.into_iter().find(|d| d.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_values_are_verbatim_and_ordered() {
        let values: Vec<&str> = INDUSTRIES.iter().map(|i| i.as_str()).collect();
        assert_eq!(values, vec!["startup", "non-IT business company"]);
    }

    #[test]
    fn test_department_values_are_verbatim_and_ordered() {
        let values: Vec<&str> = DEPARTMENTS.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "information systems department",
                "DX department",
                "new business department"
            ]
        );
    }

    #[test]
    fn test_industry_parse_round_trips() {
        for industry in INDUSTRIES {
            assert_eq!(Industry::parse(industry.as_str()), Some(industry));
        }
        assert_eq!(Industry::parse("bank"), None);
        assert_eq!(Industry::parse(""), None);
    }

    #[test]
    fn test_department_parse_round_trips() {
        for department in DEPARTMENTS {
            assert_eq!(Department::parse(department.as_str()), Some(department));
        }
        assert_eq!(Department::parse("HR department"), None);
    }

    #[test]
    fn test_only_startup_is_startup() {
        assert!(Industry::Startup.is_startup());
        assert!(!Industry::NonItBusiness.is_startup());
    }
}
