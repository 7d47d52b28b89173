use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use prism_core::{AdjustmentParameters, EditSession, PresetId, SessionEvent};

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Enhance a product photo with presets and adjustments")]
#[command(version)]
pub struct Args {
    /// Image to enhance (JPEG, PNG or WebP)
    pub input: PathBuf,

    /// Output PNG path (default: enhanced-product-TIMESTAMP.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preset: none, vintage, vivid, cool, warm, blackwhite, professional
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON file with starting parameters
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Brightness percentage (50-150)
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast percentage (50-150)
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<i32>,

    /// Saturation percentage (0-200)
    #[arg(long, allow_negative_numbers = true)]
    pub saturation: Option<i32>,

    /// Blur radius in pixels (0-10)
    #[arg(long, allow_negative_numbers = true)]
    pub blur: Option<i32>,

    /// Sharpness percentage (50-150)
    #[arg(long, allow_negative_numbers = true)]
    pub sharpness: Option<i32>,

    /// Downscale so the longest edge fits, for quick previews
    #[arg(long)]
    pub max_edge: Option<u32>,
}

impl Args {
    /// Build the render parameters: file values first, then the preset,
    /// then individual controls. A control given on the command line
    /// moves the result to the custom preset.
    pub fn parameters(&self) -> Result<AdjustmentParameters> {
        let base = match &self.params {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read params: {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("failed to parse params: {}", path.display()))?
            }
            None => AdjustmentParameters::default(),
        };

        let mut session = EditSession::with_params(base);
        for event in self.events() {
            debug!(?event, "applying");
            session.update(event);
        }
        Ok(session.snapshot())
    }

    fn events(&self) -> Vec<SessionEvent> {
        let preset = self
            .preset
            .as_deref()
            .map(|name| SessionEvent::PresetSelected(PresetId::from_name(name)));
        let controls = [
            self.brightness.map(SessionEvent::BrightnessChanged),
            self.contrast.map(SessionEvent::ContrastChanged),
            self.saturation.map(SessionEvent::SaturationChanged),
            self.blur.map(SessionEvent::BlurChanged),
            self.sharpness.map(SessionEvent::SharpnessChanged),
        ];
        preset.into_iter().chain(controls.into_iter().flatten()).collect()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0);
            PathBuf::from(format!("enhanced-product-{millis}.png"))
        })
    }
}
