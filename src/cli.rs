// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::CameraConfig;
use crate::dispatch::BindingScheme;
use crate::zoom::{PanStrategy, ZoomStrategy};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomArg {
    Radial,
    Angular,
    Anchored,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanArg {
    ViewBasis,
    Anchored,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeArg {
    Buttons,
    Modifiers,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-cam")]
#[command(about = "Orbit camera viewport", long_about = None)]
pub struct Cli {
    /// JSON camera configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pinch zoom policy
    #[arg(long, value_enum)]
    pub zoom: Option<ZoomArg>,

    /// Pan policy
    #[arg(long, value_enum)]
    pub pan: Option<PanArg>,

    /// Button-to-operation scheme
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Log the view-projection matrix every frame
    #[arg(long = "log-matrices", default_value = "false")]
    pub log_matrices: bool,
}

impl Cli {
    /// Flags override whatever the config file set
    pub fn apply_overrides(&self, config: &mut CameraConfig) {
        if let Some(zoom) = self.zoom {
            config.zoom = match zoom {
                ZoomArg::Radial => ZoomStrategy::RadialDistance,
                ZoomArg::Angular => ZoomStrategy::AngularRatio,
                ZoomArg::Anchored => ZoomStrategy::PlaneAnchored,
            };
        }
        if let Some(pan) = self.pan {
            config.pan = match pan {
                PanArg::ViewBasis => PanStrategy::ViewBasis,
                PanArg::Anchored => PanStrategy::PlaneAnchored,
            };
        }
        if let Some(scheme) = self.scheme {
            config.scheme = match scheme {
                SchemeArg::Buttons => BindingScheme::Buttons,
                SchemeArg::Modifiers => BindingScheme::Modifiers,
            };
        }
    }
}
