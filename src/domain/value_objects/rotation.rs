//! Display rotation value object.

use std::fmt;

/// Display rotation accepted by the SDK tools (`-r`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl TryFrom<i32> for Rotation {
    /// The rejected value
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Rotation::ALL
            .into_iter()
            .find(|r| r.degrees() == value)
            .ok_or(value)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_quarter_turns() {
        for deg in [0, 90, 180, 270] {
            assert_eq!(Rotation::try_from(deg).unwrap().degrees(), deg);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for deg in [-90, 1, 45, 89, 360, 450] {
            assert_eq!(Rotation::try_from(deg), Err(deg));
        }
    }

    #[test]
    fn displays_degrees() {
        assert_eq!(Rotation::Deg180.to_string(), "180");
    }
}
