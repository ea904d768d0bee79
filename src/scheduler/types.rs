/*!
 * Scheduler Types
 * Algorithm selection for a simulation run
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Algorithm name as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Non-preemptive priority
    Npp,
    /// Round robin with a fixed quantum
    RoundRobin,
}

impl AlgorithmKind {
    /// Convert to the command line spelling
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npp => "NPP",
            Self::RoundRobin => "RR",
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    /// Names are matched exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NPP" => Ok(Self::Npp),
            "RR" => Ok(Self::RoundRobin),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AlgorithmKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlgorithmKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Fully parameterized scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// Non-preemptive priority: lower priority value runs first, ties FCFS
    Npp,
    /// Round robin with a fixed time quantum in milliseconds
    RoundRobin { quantum: NonZeroU64 },
}

impl Algorithm {
    /// Round robin with the given quantum; `None` if the quantum is zero
    pub fn round_robin(quantum: Ticks) -> Option<Self> {
        NonZeroU64::new(quantum).map(|quantum| Self::RoundRobin { quantum })
    }

    #[inline]
    pub const fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Npp => AlgorithmKind::Npp,
            Self::RoundRobin { .. } => AlgorithmKind::RoundRobin,
        }
    }

    /// Time slice, for algorithms that have one
    #[inline]
    pub fn quantum(&self) -> Option<Ticks> {
        match self {
            Self::Npp => None,
            Self::RoundRobin { quantum } => Some(quantum.get()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npp => f.write_str("NPP"),
            Self::RoundRobin { quantum } => write!(f, "RR(quantum={})", quantum),
        }
    }
}

/// One uninterrupted stretch of CPU time held by a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Slice {
    pub pid: Pid,
    /// Clock value at dispatch
    pub start: Ticks,
    /// Ticks run before completing or being preempted
    pub ran: Ticks,
}

impl Slice {
    #[inline]
    pub fn end(&self) -> Ticks {
        self.start + self.ran
    }
}
