use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use iced::widget::{container, image, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};

use obscura_core::effects::domain::effect_config::{EffectKind, Intensity};
use obscura_core::pipeline::render_session::RenderSession;
use obscura_core::regions::domain::region_provider::RegionProvider;
use obscura_core::regions::infrastructure::fitted_region_provider::FittedRegionProvider;
use obscura_core::regions::infrastructure::fixed_region_provider::FixedRegionProvider;
use obscura_core::shared::constants::{DEMO_IMAGE_SIZE, DEMO_IMAGE_URL, IMAGE_EXTENSIONS};
use obscura_core::shared::frame::Frame;

use crate::settings::Settings;
use crate::tabs;
use crate::tabs::demo_tab::DemoView;
use crate::theme;
use crate::workers::load_worker::{self, LoadMessage};

const LOADER_POLL_INTERVAL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    OpenImage,
    ImageSelected(Option<PathBuf>),
    LoadDemoImage,
    PollLoader,
    EffectSelected(EffectKind),
    IntensityChanged(u8),
    SubjectSelected(String),
    OutlineToggled(bool),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub settings: Settings,
    session: RenderSession,
    subjects: Vec<String>,
    /// Pending background load, if any.
    loader: Option<Receiver<LoadMessage>>,
    loading: Option<String>,
    error: Option<String>,
    preview: Option<image::Handle>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let session = RenderSession::new(demo_provider(), settings.demo_config());
        let subjects = session.subjects();

        let mut app = Self {
            settings,
            session,
            subjects,
            loader: None,
            loading: None,
            error: None,
            preview: None,
        };
        app.start_load(DEMO_IMAGE_URL.to_string());
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImage => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Open image")
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::ImageSelected,
                );
            }
            Message::ImageSelected(Some(path)) => {
                self.start_load(path.to_string_lossy().to_string());
            }
            Message::ImageSelected(None) => {}
            Message::LoadDemoImage => {
                self.start_load(DEMO_IMAGE_URL.to_string());
            }
            Message::PollLoader => self.poll_loader(),
            Message::EffectSelected(kind) => {
                self.settings.effect = kind;
                self.settings.save();
                let result = self.session.set_effect_kind(kind);
                self.after_render(result);
            }
            Message::IntensityChanged(value) => {
                let intensity = Intensity::saturating(value as u32);
                self.settings.intensity = intensity;
                self.settings.save();
                let result = self.session.set_intensity(intensity);
                self.after_render(result);
            }
            Message::SubjectSelected(subject) => {
                let result = self.session.set_subject(&subject);
                self.settings.subject = subject;
                self.settings.save();
                self.after_render(result);
            }
            Message::OutlineToggled(enabled) => {
                self.settings.outline = enabled;
                self.settings.save();
                let result = self.session.set_outline(enabled);
                self.after_render(result);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = tabs::demo_tab::view(DemoView {
            settings: &self.settings,
            subjects: &self.subjects,
            preview: self.preview.as_ref(),
            loading: self.loading.as_deref(),
            error: self.error.as_deref(),
            report: self.session.last_report(),
        });

        container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.loader.is_some() {
            iced::time::every(LOADER_POLL_INTERVAL).map(|_| Message::PollLoader)
        } else {
            Subscription::none()
        }
    }

    fn start_load(&mut self, location: String) {
        log::info!("Loading image {location}");
        self.loader = Some(load_worker::spawn(location.clone()));
        self.loading = Some(location);
        self.error = None;
    }

    fn poll_loader(&mut self) {
        let Some(rx) = &self.loader else {
            return;
        };
        let message = match rx.try_recv() {
            Ok(message) => message,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                LoadMessage::Error("Image loader stopped unexpectedly".to_string())
            }
        };
        self.loader = None;
        self.loading = None;

        match message {
            LoadMessage::Loaded(frame) => {
                let result = self.session.set_base(frame);
                self.after_render(result);
            }
            LoadMessage::Error(e) => {
                self.error = Some(format!("Could not load image: {e}"));
            }
        }
    }

    fn after_render(&mut self, result: Result<(), Box<dyn std::error::Error>>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.preview = self.session.output().map(preview_handle);
            }
            Err(e) => {
                log::warn!("Render failed: {e}");
                self.error = Some(format!("Render failed: {e}"));
            }
        }
    }
}

/// Demo regions, refitted when the user opens an image of another size.
fn demo_provider() -> Box<dyn RegionProvider> {
    let fixed = Box::new(FixedRegionProvider::demo());
    match FittedRegionProvider::new(fixed, DEMO_IMAGE_SIZE) {
        Ok(fitted) => Box::new(fitted),
        Err(e) => {
            log::warn!("Using unfitted demo regions: {e}");
            Box::new(FixedRegionProvider::demo())
        }
    }
}

fn preview_handle(frame: &Frame) -> image::Handle {
    image::Handle::from_rgba(frame.width(), frame.height(), frame.to_rgba())
}
