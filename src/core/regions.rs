//! US state abbreviation table

use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Two-letter USPS code -> full state name
    pub static ref US_STATES: HashMap<&'static str, &'static str> = HashMap::from([
        ("AL", "Alabama"), ("AK", "Alaska"), ("AZ", "Arizona"), ("AR", "Arkansas"),
        ("CA", "California"), ("CO", "Colorado"), ("CT", "Connecticut"), ("DE", "Delaware"),
        ("FL", "Florida"), ("GA", "Georgia"), ("HI", "Hawaii"), ("ID", "Idaho"),
        ("IL", "Illinois"), ("IN", "Indiana"), ("IA", "Iowa"), ("KS", "Kansas"),
        ("KY", "Kentucky"), ("LA", "Louisiana"), ("ME", "Maine"), ("MD", "Maryland"),
        ("MA", "Massachusetts"), ("MI", "Michigan"), ("MN", "Minnesota"), ("MS", "Mississippi"),
        ("MO", "Missouri"), ("MT", "Montana"), ("NE", "Nebraska"), ("NV", "Nevada"),
        ("NH", "New Hampshire"), ("NJ", "New Jersey"), ("NM", "New Mexico"), ("NY", "New York"),
        ("NC", "North Carolina"), ("ND", "North Dakota"), ("OH", "Ohio"), ("OK", "Oklahoma"),
        ("OR", "Oregon"), ("PA", "Pennsylvania"), ("RI", "Rhode Island"), ("SC", "South Carolina"),
        ("SD", "South Dakota"), ("TN", "Tennessee"), ("TX", "Texas"), ("UT", "Utah"),
        ("VT", "Vermont"), ("VA", "Virginia"), ("WA", "Washington"), ("WV", "West Virginia"),
        ("WI", "Wisconsin"), ("WY", "Wyoming"),
    ]);
}

/// Look up a state by its two-letter code, case-insensitively
pub fn state_name(code: &str) -> Option<&'static str> {
    if code.chars().count() != 2 {
        return None;
    }
    US_STATES.get(code.to_uppercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_fifty_states() {
        assert_eq!(US_STATES.len(), 50);
    }

    #[test]
    fn test_state_name_lookup() {
        assert_eq!(state_name("CA"), Some("California"));
        assert_eq!(state_name("ny"), Some("New York"));
        assert_eq!(state_name("Xx"), None);
        assert_eq!(state_name("CAL"), None);
        // DC is a district, not a state
        assert_eq!(state_name("DC"), None);
    }
}
