//! Command-line arguments.

use clap::Parser;
use rectangles_core::application::{CollisionQuery, QueryFlags, RectangleRawData};
use rectangles_core::config::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rectangles", version)]
#[command(about = "Intersections, containment and adjacency of two axis-aligned rectangles", long_about = None)]
#[command(after_help = "Rectangles are given by their top-left corner and size; y grows upwards.")]
pub struct Cli {
    /// First rectangle: top-left x, top-left y, width, height
    #[arg(long, num_args = 4, value_names = ["X", "Y", "WIDTH", "HEIGHT"], allow_negative_numbers = true, required = true)]
    pub rect1: Vec<String>,

    /// Second rectangle: top-left x, top-left y, width, height
    #[arg(long, num_args = 4, value_names = ["X", "Y", "WIDTH", "HEIGHT"], allow_negative_numbers = true, required = true)]
    pub rect2: Vec<String>,

    /// Report the points where the boundaries cross
    #[arg(short, long)]
    pub intersections: bool,

    /// Report whether either rectangle contains the other
    #[arg(short, long)]
    pub containment: bool,

    /// Report shared stretches of boundary
    #[arg(short, long)]
    pub adjacency: bool,

    /// Output format (table or json), overriding the configuration
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Configuration file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"], ignore_case = true)]
    pub log_level: Option<String>,
}

impl Cli {
    /// The collision query described by the arguments, still unvalidated.
    pub fn query(&self) -> CollisionQuery {
        CollisionQuery {
            rectangle1: raw_rectangle(&self.rect1),
            rectangle2: raw_rectangle(&self.rect2),
            flags: QueryFlags {
                intersections: self.intersections,
                containment: self.containment,
                adjacency: self.adjacency,
            },
        }
    }
}

fn raw_rectangle(values: &[String]) -> RectangleRawData {
    match values {
        [x, y, width, height] => RectangleRawData::new(x.as_str(), y.as_str(), width.as_str(), height.as_str()),
        // clap enforces four values; anything else surfaces as unparsable fields.
        _ => RectangleRawData::default(),
    }
}
