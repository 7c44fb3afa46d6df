#![allow(non_camel_case_types)]

use core::{fmt, str::FromStr};
pub use num_enum::TryFromPrimitive;
pub use Hardfork::*;

/// Ethereum hardforks in activation order, oldest first.
///
/// The discriminant is the hardfork rank: a later hardfork always has a greater rank,
/// so the derived [`Ord`] matches protocol history.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardfork {
    /// Frontier hard fork
    /// Activated at block 0
    FRONTIER = 0,
    /// Homestead hard fork
    /// Activated at block 1150000
    HOMESTEAD,
    /// DAO Fork hard fork
    /// Activated at block 1920000
    DAO_FORK,
    /// Tangerine Whistle hard fork
    /// Activated at block 2463000
    TANGERINE,
    /// Spurious Dragon hard fork
    /// Activated at block 2675000
    SPURIOUS_DRAGON,
    /// Byzantium hard fork
    /// Activated at block 4370000
    BYZANTIUM,
    /// Constantinople hard fork
    /// Activated at block 7280000 together with Petersburg
    CONSTANTINOPLE,
    /// Petersburg hard fork
    /// Activated at block 7280000
    PETERSBURG,
    /// Istanbul hard fork
    /// Activated at block 9069000
    ISTANBUL,
    /// Muir Glacier hard fork
    /// Activated at block 9200000
    MUIR_GLACIER,
    /// Berlin hard fork, introduces access list transactions (EIP-2930)
    /// Activated at block 12244000
    BERLIN,
    /// London hard fork, introduces dynamic fee transactions (EIP-1559)
    /// Activated at block 12965000
    LONDON,
    /// Arrow Glacier hard fork
    /// Activated at block 13773000
    ARROW_GLACIER,
    /// Gray Glacier hard fork
    /// Activated at block 15050000
    GRAY_GLACIER,
    /// Paris/Merge hard fork
    /// Activated at block 15537394 (TTD: 58750000000000000000000)
    MERGE,
    /// Shanghai hard fork
    /// Activated at block 17034870 (Timestamp: 1681338455)
    SHANGHAI,
    /// Cancun hard fork
    /// Activated at block 19426587 (Timestamp: 1710338135)
    CANCUN,
    /// Prague hard fork
    /// Activated at block 22431086 (Timestamp: 1746612311)
    PRAGUE,
    /// Osaka hard fork
    OSAKA,
}

impl Hardfork {
    /// Every known hardfork, ordered by rank.
    pub const ALL: [Self; 19] = [
        FRONTIER,
        HOMESTEAD,
        DAO_FORK,
        TANGERINE,
        SPURIOUS_DRAGON,
        BYZANTIUM,
        CONSTANTINOPLE,
        PETERSBURG,
        ISTANBUL,
        MUIR_GLACIER,
        BERLIN,
        LONDON,
        ARROW_GLACIER,
        GRAY_GLACIER,
        MERGE,
        SHANGHAI,
        CANCUN,
        PRAGUE,
        OSAKA,
    ];

    /// Returns the [`Hardfork`] with the given rank.
    #[inline]
    pub fn try_from_u8(rank: u8) -> Option<Self> {
        Self::try_from(rank).ok()
    }

    /// Position of this hardfork in [`Hardfork::ALL`].
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Looks up the rank of a hardfork by name.
    ///
    /// Returns [`None`] for names that are not in the table, which keeps an unknown
    /// name distinguishable from [`FRONTIER`] at rank 0.
    #[inline]
    pub fn rank_of(name: &str) -> Option<u8> {
        name.parse::<Self>().ok().map(Self::rank)
    }

    /// Returns `true` if `other` is active once `self` is, i.e. `self` is `other` or later.
    #[inline]
    pub const fn is_enabled_in(self, other: Self) -> bool {
        self as u8 >= other as u8
    }

    /// Canonical name of the hardfork.
    pub const fn as_str(self) -> &'static str {
        match self {
            FRONTIER => name::FRONTIER,
            HOMESTEAD => name::HOMESTEAD,
            DAO_FORK => name::DAO_FORK,
            TANGERINE => name::TANGERINE,
            SPURIOUS_DRAGON => name::SPURIOUS_DRAGON,
            BYZANTIUM => name::BYZANTIUM,
            CONSTANTINOPLE => name::CONSTANTINOPLE,
            PETERSBURG => name::PETERSBURG,
            ISTANBUL => name::ISTANBUL,
            MUIR_GLACIER => name::MUIR_GLACIER,
            BERLIN => name::BERLIN,
            LONDON => name::LONDON,
            ARROW_GLACIER => name::ARROW_GLACIER,
            GRAY_GLACIER => name::GRAY_GLACIER,
            MERGE => name::MERGE,
            SHANGHAI => name::SHANGHAI,
            CANCUN => name::CANCUN,
            PRAGUE => name::PRAGUE,
            OSAKA => name::OSAKA,
        }
    }
}

/// String identifiers for hardforks, as used in chain configuration.
pub mod name {
    /// String identifier for the Frontier hardfork
    pub const FRONTIER: &str = "frontier";
    /// String identifier for the Homestead hardfork
    pub const HOMESTEAD: &str = "homestead";
    /// String identifier for the DAO Fork hardfork
    pub const DAO_FORK: &str = "dao";
    /// String identifier for the Tangerine Whistle hardfork
    pub const TANGERINE: &str = "tangerineWhistle";
    /// String identifier for the Spurious Dragon hardfork
    pub const SPURIOUS_DRAGON: &str = "spuriousDragon";
    /// String identifier for the Byzantium hardfork
    pub const BYZANTIUM: &str = "byzantium";
    /// String identifier for the Constantinople hardfork
    pub const CONSTANTINOPLE: &str = "constantinople";
    /// String identifier for the Petersburg hardfork
    pub const PETERSBURG: &str = "petersburg";
    /// String identifier for the Istanbul hardfork
    pub const ISTANBUL: &str = "istanbul";
    /// String identifier for the Muir Glacier hardfork
    pub const MUIR_GLACIER: &str = "muirGlacier";
    /// String identifier for the Berlin hardfork
    pub const BERLIN: &str = "berlin";
    /// String identifier for the London hardfork
    pub const LONDON: &str = "london";
    /// String identifier for the Arrow Glacier hardfork
    pub const ARROW_GLACIER: &str = "arrowGlacier";
    /// String identifier for the Gray Glacier hardfork
    pub const GRAY_GLACIER: &str = "grayGlacier";
    /// String identifier for the Paris/Merge hardfork
    pub const MERGE: &str = "merge";
    /// String identifier for the Shanghai hardfork
    pub const SHANGHAI: &str = "shanghai";
    /// String identifier for the Cancun hardfork
    pub const CANCUN: &str = "cancun";
    /// String identifier for the Prague hardfork
    pub const PRAGUE: &str = "prague";
    /// String identifier for the Osaka hardfork
    pub const OSAKA: &str = "osaka";

    /// Alternative spellings accepted when parsing.
    pub(crate) const ALIASES: [(&str, super::Hardfork); 5] = [
        ("chainstart", super::FRONTIER),
        ("tangerine", super::TANGERINE),
        ("spurious", super::SPURIOUS_DRAGON),
        ("paris", super::MERGE),
        ("daoFork", super::DAO_FORK),
    ];
}

/// Error type for unknown hardfork names. Returned by [`Hardfork::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownHardfork;

impl fmt::Display for UnknownHardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown hardfork")
    }
}

impl core::error::Error for UnknownHardfork {}

impl FromStr for Hardfork {
    type Err = UnknownHardfork;

    /// Parses a hardfork name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|fork| fork.as_str().eq_ignore_ascii_case(s))
            .or_else(|| {
                name::ALIASES
                    .into_iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
                    .map(|(_, fork)| fork)
            })
            .ok_or(UnknownHardfork)
    }
}

impl From<Hardfork> for &'static str {
    fn from(fork: Hardfork) -> Self {
        fork.as_str()
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
