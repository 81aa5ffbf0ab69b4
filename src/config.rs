// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::Result;
use crate::render::GlyphSet;

pub const DEFAULT_CONFIG_FILE: &str = "gambit.json";

/// Settings for an interactive session. Every field has a default, so a config file only needs
/// to mention what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glyphs: GlyphSet,
    pub show_board_after_move: bool,
    /// Invalid attempts per turn before a warning is logged. `None` never warns.
    pub max_retries: Option<u32>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            glyphs: GlyphSet::Unicode,
            show_board_after_move: true,
            max_retries: None,
        }
    }
}

impl Config {
    pub fn from_reader<R: Read>(reader: R) -> Result<Config> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads the config at `path`. A missing file yields the defaults; a file that exists but
    /// does not parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        match File::open(path.as_ref()) {
            Ok(file) => {
                debug!("loading config from {}", path.as_ref().display());
                Config::from_reader(file)
            }
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}
