use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification granularity for region labels.
///
/// `Coarse` groups by metropolitan city or province, `Fine` by the district,
/// city or county nested under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Coarse,
    Fine,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coarse => "coarse",
            Self::Fine => "fine",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_serde_names() {
        assert_eq!(serde_json::to_string(&Granularity::Coarse).unwrap(), "\"coarse\"");
        let fine: Granularity = serde_json::from_str("\"fine\"").unwrap();
        assert_eq!(fine, Granularity::Fine);
        assert_eq!(fine.to_string(), "fine");
    }
}
