use std::{fmt, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::Error;

/// How a cursor reacts once its filtered view has been fully read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Report [`End::Exhausted`](crate::End::Exhausted) and never resume.
    #[default]
    StopAtEnd,
    /// Restart from the first element of the filtered view.
    Repeat,
}

impl Mode {
    #[inline]
    pub fn is_repeat(self) -> bool {
        self == Self::Repeat
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StopAtEnd => "stop_at_end",
            Self::Repeat => "repeat",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "stop_at_end" | "stopatend" | "stop" => Ok(Self::StopAtEnd),
            "repeat" | "cycle" => Ok(Self::Repeat),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("stop_at_end".parse::<Mode>(), Ok(Mode::StopAtEnd));
        assert_eq!("StopAtEnd".parse::<Mode>(), Ok(Mode::StopAtEnd));
        assert_eq!(" stop-at-end ".parse::<Mode>(), Ok(Mode::StopAtEnd));
        assert_eq!("stop".parse::<Mode>(), Ok(Mode::StopAtEnd));
        assert_eq!("Repeat".parse::<Mode>(), Ok(Mode::Repeat));
        assert_eq!("cycle".parse::<Mode>(), Ok(Mode::Repeat));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "forever".parse::<Mode>(),
            Err(Error::UnknownMode("forever".to_owned()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [Mode::StopAtEnd, Mode::Repeat] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }
}
