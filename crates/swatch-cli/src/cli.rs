use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swatch_engine::FormatKind;

/// Swatch: find color literals in source files and edit them in place.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// One-based cursor position.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct Cursor {
    #[arg(long)]
    pub line: usize,

    /// Byte column.
    #[arg(long)]
    pub col: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every color literal in a file.
    Scan {
        file: PathBuf,

        /// Print matches and diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the color literal under the cursor.
    At {
        file: PathBuf,

        #[command(flatten)]
        cursor: Cursor,
    },

    /// Replace the color under the cursor, keeping its notation.
    Set {
        file: PathBuf,

        #[command(flatten)]
        cursor: Cursor,

        /// New color as #RRGGBB or #RRGGBBAA.
        #[arg(long)]
        color: String,

        /// Write the file instead of printing the change.
        #[arg(long)]
        write: bool,
    },

    /// Rewrite the color under the cursor in another notation.
    Convert {
        file: PathBuf,

        #[command(flatten)]
        cursor: Cursor,

        /// Target notation, e.g. int-rgb, float-rgba, hex-argb, field-int.
        #[arg(long)]
        to: FormatKind,

        /// Write the file instead of printing the change.
        #[arg(long)]
        write: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_global_flags() {
        let args = Args::try_parse_from([
            "swatch",
            "set",
            "theme.rs",
            "--line",
            "3",
            "--col",
            "14",
            "--color",
            "#ff0000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Set {
                cursor,
                color,
                write,
                ..
            } => {
                assert_eq!((cursor.line, cursor.col), (3, 14));
                assert_eq!(color, "#ff0000");
                assert!(!write);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn convert_target_parses_kind_names() {
        let args = Args::try_parse_from([
            "swatch", "convert", "a.kt", "--line", "1", "--col", "1", "--to", "hex_argb",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Convert {
                to: FormatKind::HexArgb,
                ..
            }
        ));

        assert!(Args::try_parse_from([
            "swatch", "convert", "a.kt", "--line", "1", "--col", "1", "--to", "hsl",
        ])
        .is_err());
    }
}
