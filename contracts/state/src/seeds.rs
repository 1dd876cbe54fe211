//! Seed strings for the program's seeded accounts.
//!
//! An address derived from a seed keeps pointing at the old account after a
//! layout change, and a read through the new layout will be wrong. Seeds
//! therefore carry a generation suffix that is bumped with every layout change.

use crate::kind::AccountKind;

/// Generation of the current layouts
pub const DEFAULT_SEED_GENERATION: u32 = 11;

/// Seed of the mint authority PDA: `[MINTER_PDA_SEED, program_id, MINTER_PDA_SEED]`
pub const MINTER_PDA_SEED: &[u8] = b"amoebit_minter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedPurpose {
    UserIndex,
    TotalSupply,
    TimeRelease,
}

impl SeedPurpose {
    pub const ALL: [SeedPurpose; 3] = [
        SeedPurpose::UserIndex,
        SeedPurpose::TotalSupply,
        SeedPurpose::TimeRelease,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            SeedPurpose::UserIndex => "userSeed",
            SeedPurpose::TotalSupply => "totalSeed",
            SeedPurpose::TimeRelease => "timeSeed",
        }
    }

    /// Layout of the account created under this seed
    pub const fn kind(self) -> AccountKind {
        match self {
            SeedPurpose::UserIndex | SeedPurpose::TotalSupply => AccountKind::Index,
            SeedPurpose::TimeRelease => AccountKind::Time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    pub user: String,
    pub total: String,
    pub time: String,
}

impl SeedSet {
    pub fn generation(generation: u32) -> Self {
        let seed = |purpose: SeedPurpose| format!("{}{}", purpose.prefix(), generation);
        Self {
            user: seed(SeedPurpose::UserIndex),
            total: seed(SeedPurpose::TotalSupply),
            time: seed(SeedPurpose::TimeRelease),
        }
    }

    pub fn seed(&self, purpose: SeedPurpose) -> &str {
        match purpose {
            SeedPurpose::UserIndex => &self.user,
            SeedPurpose::TotalSupply => &self.total,
            SeedPurpose::TimeRelease => &self.time,
        }
    }

    /// First seed string shared by two purposes, if any.
    pub fn duplicate(&self) -> Option<&str> {
        for (i, a) in SeedPurpose::ALL.iter().enumerate() {
            for b in &SeedPurpose::ALL[i + 1..] {
                if self.seed(*a) == self.seed(*b) {
                    return Some(self.seed(*a));
                }
            }
        }
        None
    }
}

impl Default for SeedSet {
    fn default() -> Self {
        Self::generation(DEFAULT_SEED_GENERATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation() {
        let seeds = SeedSet::default();
        assert_eq!(seeds.user, "userSeed11");
        assert_eq!(seeds.total, "totalSeed11");
        assert_eq!(seeds.time, "timeSeed11");
        assert!(seeds.duplicate().is_none());
    }

    #[test]
    fn test_duplicate_detection() {
        let seeds = SeedSet {
            user: "shared".to_string(),
            total: "totalSeed8".to_string(),
            time: "shared".to_string(),
        };
        assert_eq!(seeds.duplicate(), Some("shared"));
    }
}
