use serde::{Deserialize, Serialize};

use crate::effects::domain::effect_config::{EffectConfig, EffectKind, Intensity};
use crate::effects::infrastructure::effect_factory::create_effect;
use crate::imaging::domain::image_reader::ImageReader;
use crate::pipeline::region_outline::RegionOutline;
use crate::pipeline::region_renderer::{RegionRenderer, RenderReport};
use crate::regions::domain::region_provider::RegionProvider;
use crate::shared::constants::DEFAULT_SUBJECT;
use crate::shared::frame::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No base image yet.
    Unloaded,
    /// Base image present, no output produced yet.
    Loaded,
    /// Output reflects the current base image and settings.
    Rendered,
}

/// Everything the user can change between renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub effect: EffectConfig,
    pub subject: String,
    pub outline: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            effect: EffectConfig::default(),
            subject: DEFAULT_SUBJECT.to_string(),
            outline: true,
        }
    }
}

/// Render lifecycle: load a base image, then re-render in full on every
/// settings change.
///
/// Single-threaded and synchronous; each call that changes state finishes
/// its render before returning.
pub struct RenderSession {
    provider: Box<dyn RegionProvider>,
    config: DemoConfig,
    base: Option<Frame>,
    output: Option<Frame>,
    last_report: Option<RenderReport>,
}

impl RenderSession {
    pub fn new(provider: Box<dyn RegionProvider>, config: DemoConfig) -> Self {
        Self {
            provider,
            config,
            base: None,
            output: None,
            last_report: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.base, &self.output) {
            (None, _) => SessionState::Unloaded,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Rendered,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn base(&self) -> Option<&Frame> {
        self.base.as_ref()
    }

    pub fn output(&self) -> Option<&Frame> {
        self.output.as_ref()
    }

    pub fn last_report(&self) -> Option<RenderReport> {
        self.last_report
    }

    pub fn subjects(&self) -> Vec<String> {
        self.provider.subjects()
    }

    /// Reads a new base image and renders it.
    ///
    /// On a read failure the session keeps its previous image and output.
    pub fn load(
        &mut self,
        reader: &dyn ImageReader,
        location: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let frame = reader.read(location)?;
        log::info!(
            "Loaded {location} ({}x{})",
            frame.width(),
            frame.height()
        );
        self.set_base(frame)
    }

    /// Replaces the base image and renders it.
    pub fn set_base(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        self.base = Some(frame);
        self.output = None;
        self.last_report = None;
        self.render()?;
        Ok(())
    }

    pub fn set_config(&mut self, config: DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
        self.config = config;
        self.rerender()
    }

    pub fn set_effect_kind(&mut self, kind: EffectKind) -> Result<(), Box<dyn std::error::Error>> {
        self.config.effect.kind = kind;
        self.rerender()
    }

    pub fn set_intensity(&mut self, intensity: Intensity) -> Result<(), Box<dyn std::error::Error>> {
        self.config.effect.intensity = intensity;
        self.rerender()
    }

    pub fn set_subject(&mut self, subject: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.config.subject = subject.to_string();
        self.rerender()
    }

    pub fn set_outline(&mut self, outline: bool) -> Result<(), Box<dyn std::error::Error>> {
        self.config.outline = outline;
        self.rerender()
    }

    /// Runs a full pass over the base image with the current settings.
    ///
    /// Returns `Ok(None)` when no image is loaded.
    pub fn render(&mut self) -> Result<Option<&Frame>, Box<dyn std::error::Error>> {
        let Some(base) = self.base.as_ref() else {
            log::debug!("Render requested before an image was loaded");
            return Ok(None);
        };

        let regions = self.provider.regions(&self.config.subject, base)?;
        let outline = self.config.outline.then(RegionOutline::default);
        let renderer = RegionRenderer::new(create_effect(&self.config.effect), outline);
        let result = renderer.render(base, &regions);

        log::info!(
            "Rendered {} '{}' regions with {} at intensity {}",
            result.report.rendered,
            self.config.subject,
            self.config.effect.kind,
            self.config.effect.intensity
        );
        self.last_report = Some(result.report);
        self.output = Some(result.frame);
        Ok(self.output.as_ref())
    }

    fn rerender(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.base.is_some() {
            self.render()?;
        }
        Ok(())
    }
}
