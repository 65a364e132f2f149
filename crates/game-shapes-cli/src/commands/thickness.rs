//! `shapes thickness ...`

use anyhow::Result;
use clap::Subcommand;
use game_shapes::Thickness;
use serde::Serialize;

#[derive(Subcommand)]
pub enum ThicknessCommands {
    /// Parse a thickness string such as "4", "4 7" or "1, 2, 3, 4"
    Parse {
        text: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Format explicit left, top, right and bottom offsets
    Format {
        #[arg(allow_negative_numbers = true)]
        left: i32,
        #[arg(allow_negative_numbers = true)]
        top: i32,
        #[arg(allow_negative_numbers = true)]
        right: i32,
        #[arg(allow_negative_numbers = true)]
        bottom: i32,
    },
}

#[derive(Serialize)]
struct ThicknessReport {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    compact: Thickness,
    ltrb: String,
}

pub fn run(command: ThicknessCommands) -> Result<()> {
    match command {
        ThicknessCommands::Parse { text, json } => {
            let t = Thickness::parse(&text)?;
            if json {
                let report = ThicknessReport {
                    left: t.left,
                    top: t.top,
                    right: t.right,
                    bottom: t.bottom,
                    compact: t,
                    ltrb: t.to_ltrb_string(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("left={} top={} right={} bottom={}", t.left, t.top, t.right, t.bottom);
                println!("compact: {t}");
                println!("ltrb:    {}", t.to_ltrb_string());
            }
        }
        ThicknessCommands::Format { left, top, right, bottom } => {
            println!("{}", Thickness::new(left, top, right, bottom));
        }
    }
    Ok(())
}
