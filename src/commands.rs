//! CLI command definitions
//!
//! Defines the clap commands for gopherc.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ipc::Message;

#[derive(Parser, Debug)]
#[command(name = "gopherc", about = "Control running Gopher instances")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Directory instance sockets live in (default: /tmp)
    #[arg(long, global = true)]
    pub socket_dir: Option<PathBuf>,

    /// Log delivery details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Make every instance jump
    #[command(alias = "j")]
    Jump,

    /// Have one randomly chosen instance say something
    #[command(alias = "m")]
    Message {
        /// Text to say
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        text: String,
    },

    /// Show an accessory on one randomly chosen instance
    #[command(alias = "a")]
    Accessory {
        /// Accessory type; 0 hides the accessory
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        kind: i64,
    },

    /// Close every instance
    #[command(alias = "x")]
    Close,

    /// List discovered instances
    #[command(alias = "l")]
    List,
}

impl Commands {
    /// Message this command delivers, if any
    pub fn message(&self) -> Option<Message> {
        match self {
            Self::Jump => Some(Message::Jump),
            Self::Message { text } => Some(Message::Message { text: text.clone() }),
            Self::Accessory { kind } => Some(Message::Accessory { kind: *kind }),
            Self::Close => Some(Message::Close),
            Self::List => None,
        }
    }
}
