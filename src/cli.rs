//! Command-line interface parsing for Termfolio
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --section flag for opening the viewer directly on a chosen section.

use clap::Parser;
use thiserror::Error;

use crate::content::Section;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified section name is not recognized
    #[error(
        "Invalid section: '{0}'. Valid sections: hero, about, skills, projects, contact, blog, resume"
    )]
    InvalidSection(String),
}

/// Termfolio - terminal portfolio viewer with live API content
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "Browse a developer portfolio from the terminal")]
#[command(version)]
pub struct Cli {
    /// Open directly on a section instead of the hero screen
    ///
    /// Examples:
    ///   termfolio --section projects   # Open on the Projects tab
    ///   termfolio --section blog       # Open on the Blog tab
    ///
    /// Valid sections: hero, about, skills, projects, contact, blog, resume
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Section to show first (defaults to Hero when unset)
    pub initial_section: Option<Section>,
}

/// Parses a section name argument into a Section enum.
///
/// # Arguments
/// * `s` - The section name from CLI
///
/// # Returns
/// * `Ok(Section)` if the string matches a valid section
/// * `Err(CliError::InvalidSection)` if the string doesn't match
pub fn parse_section_arg(s: &str) -> Result<Section, CliError> {
    Section::from_name(s).ok_or_else(|| CliError::InvalidSection(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid section name was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        match &cli.section {
            None => Ok(StartupConfig::default()),
            Some(name) => {
                let section = parse_section_arg(name)?;
                Ok(StartupConfig {
                    initial_section: Some(section),
                })
            }
        }
    }
}
