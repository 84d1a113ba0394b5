use clap::ValueEnum;

/// Editable text fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UserField {
    /// First name
    #[value(alias = "first")]
    FirstName,
    /// Last name
    #[value(alias = "last")]
    LastName,
    /// Email address
    Email,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::FirstName, UserField::LastName, UserField::Email];

    /// Get the form label for this field.
    pub fn label(self) -> &'static str {
        match self {
            UserField::FirstName => "First name",
            UserField::LastName => "Last name",
            UserField::Email => "Email",
        }
    }
}
