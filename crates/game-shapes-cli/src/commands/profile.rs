//! `shapes profile ...`

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use game_shapes::{
    decode_profile_with_options, encode_profile_value, encode_profile_with_options, DecodeOptions,
    EncodeOptions, Profile,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Decode a profile and describe it
    Decode {
        #[command(flatten)]
        input: DecodeArgs,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a profile and write it back out
    Normalize {
        #[command(flatten)]
        input: DecodeArgs,

        /// Write the variant's fields (otherwise only the type tag is written)
        #[arg(long)]
        lossless: bool,
    },
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Profile JSON file ("-" for stdin)
    file: PathBuf,

    /// Require the variant's fields to follow "type" in their fixed order
    #[arg(long)]
    strict: bool,

    /// Treat a missing "type" property as an error
    #[arg(long)]
    require_type: bool,
}

impl DecodeArgs {
    fn options(&self) -> DecodeOptions {
        let options = if self.strict {
            DecodeOptions::strict()
        } else {
            DecodeOptions::new()
        };
        if self.require_type {
            options.require_type()
        } else {
            options
        }
    }

    fn decode(&self) -> Result<Option<Profile>> {
        let text = read_input(&self.file)?;
        let profile = decode_profile_with_options(&text, self.options())
            .with_context(|| format!("failed to decode profile from {}", self.file.display()))?;
        info!(file = %self.file.display(), found = profile.is_some(), "decoded profile file");
        Ok(profile)
    }
}

#[derive(Serialize)]
struct DecodeReport {
    found: bool,
    variant: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<Value>,
}

pub fn run(command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Decode { input, json } => {
            let profile = input.decode()?;
            if json {
                let encoded = profile
                    .as_ref()
                    .map(|p| encode_profile_value(p, EncodeOptions::lossless()))
                    .transpose()?;
                let report = DecodeReport {
                    found: profile.is_some(),
                    variant: profile.as_ref().map(Profile::name),
                    profile: encoded,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match profile {
                    Some(profile) => println!("{profile}"),
                    None => println!("no profile (object has no \"type\" property)"),
                }
            }
        }
        ProfileCommands::Normalize { input, lossless } => {
            let options = if lossless {
                EncodeOptions::lossless()
            } else {
                EncodeOptions::new()
            };
            match input.decode()? {
                Some(profile) => println!("{}", encode_profile_with_options(&profile, options)?),
                None => println!("null"),
            }
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read profile from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
