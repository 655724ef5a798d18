//! Modem selection from the `--modem` argument
//!
//! A modem may be named by its full D-Bus object path, by its index
//! (the trailing number of the path), or with `any` for the first modem
//! the manager exposes.

use std::fmt;

use crate::config::{dbus, defaults};
use crate::error::{MmError, Result};

/// Which modem an action targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModemSelector {
    /// Modem index (`/org/freedesktop/ModemManager1/Modem/<index>`)
    Index(u32),
    /// Full object path
    Path(String),
    /// First modem in path order
    Any,
}

impl ModemSelector {
    /// Parse a `--modem` value
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case(defaults::ANY_MODEM) {
            return Ok(ModemSelector::Any);
        }

        if let Some(index) = trimmed.strip_prefix(dbus::MODEM_PREFIX) {
            if parse_index(index).is_some() {
                return Ok(ModemSelector::Path(trimmed.to_string()));
            }
            return Err(MmError::InvalidModemString(input.to_string()));
        }

        parse_index(trimmed)
            .map(ModemSelector::Index)
            .ok_or_else(|| MmError::InvalidModemString(input.to_string()))
    }

    /// Resolve an optional CLI value, failing when none was given
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            Some(value) => Self::parse(value),
            None => Err(MmError::NoModemSpecified),
        }
    }

    /// Object path this selector names, if it names exactly one
    pub fn object_path(&self) -> Option<String> {
        match self {
            ModemSelector::Index(index) => Some(format!("{}{}", dbus::MODEM_PREFIX, index)),
            ModemSelector::Path(path) => Some(path.clone()),
            ModemSelector::Any => None,
        }
    }

    /// Pick the matching modem out of a list of modem object paths
    pub fn select<'a, I>(&self, modem_paths: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut paths: Vec<&str> = modem_paths.into_iter().collect();
        match self.object_path() {
            Some(wanted) => paths.into_iter().find(|p| *p == wanted),
            None => {
                paths.sort_by_key(|p| modem_index(p).unwrap_or(u32::MAX));
                paths.into_iter().next()
            }
        }
    }
}

impl fmt::Display for ModemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModemSelector::Index(index) => write!(f, "{}", index),
            ModemSelector::Path(path) => write!(f, "{}", path),
            ModemSelector::Any => write!(f, "{}", defaults::ANY_MODEM),
        }
    }
}

/// Parse a modem index the way the manager writes it in object paths
///
/// Only plain decimal digits without a sign or leading zeros, so every
/// accepted index has exactly one spelling.
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Trailing index of a modem object path
fn modem_index(path: &str) -> Option<u32> {
    parse_index(path.strip_prefix(dbus::MODEM_PREFIX)?)
}
