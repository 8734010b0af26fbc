use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JuliaColourMapKinds {
    #[default]
    BlueGradient,
    CyanGradient,
    CustomRamp,
}

impl JuliaColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::BlueGradient, Self::CyanGradient, Self::CustomRamp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlueGradient => "Blue gradient",
            Self::CyanGradient => "Cyan gradient",
            Self::CustomRamp => "Custom ramp",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BlueGradient => "blue",
            Self::CyanGradient => "cyan",
            Self::CustomRamp => "ramp",
        }
    }
}

impl fmt::Display for JuliaColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapKind(pub String);

impl fmt::Display for UnknownColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour scheme '{}', expected one of: blue, cyan, ramp", self.0)
    }
}

impl std::error::Error for UnknownColourMapKind {}

impl FromStr for JuliaColourMapKinds {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == wanted)
            .ok_or(UnknownColourMapKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            JuliaColourMapKinds::ALL.first(),
            Some(&JuliaColourMapKinds::default())
        );
    }

    #[test]
    fn keys_parse_back_to_kinds() {
        for &kind in JuliaColourMapKinds::ALL {
            assert_eq!(kind.key().parse::<JuliaColourMapKinds>(), Ok(kind));
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            " Cyan ".parse::<JuliaColourMapKinds>(),
            Ok(JuliaColourMapKinds::CyanGradient)
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "rainbow".parse::<JuliaColourMapKinds>().unwrap_err();

        assert_eq!(err, UnknownColourMapKind("rainbow".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown colour scheme 'rainbow', expected one of: blue, cyan, ramp"
        );
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = JuliaColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
