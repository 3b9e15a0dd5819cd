use iced::border::Border;
use iced::widget::{button, checkbox, column, container, image, row, slider, text, Space};
use iced::{ContentFit, Element, Length, Theme};

use obscura_core::effects::domain::effect_config::{EffectKind, Intensity};
use obscura_core::pipeline::region_renderer::RenderReport;

use crate::app::Message;
use crate::settings::Settings;
use crate::theme::{muted_color, surface_color};

const PREVIEW_HEIGHT: f32 = 340.0;

/// Everything the demo tab needs from the app.
pub struct DemoView<'a> {
    pub settings: &'a Settings,
    pub subjects: &'a [String],
    pub preview: Option<&'a image::Handle>,
    pub loading: Option<&'a str>,
    pub error: Option<&'a str>,
    pub report: Option<RenderReport>,
}

pub fn view<'a>(demo: DemoView<'a>) -> Element<'a, Message> {
    column![
        surface(&demo),
        Space::new().height(8),
        status_line(&demo),
        Space::new().height(16),
        section_title("Effect"),
        Space::new().height(8),
        effect_buttons(demo.settings.effect),
        Space::new().height(12),
        intensity_row(demo.settings.intensity),
        Space::new().height(16),
        section_title("Subject"),
        Space::new().height(8),
        subject_buttons(demo.subjects, &demo.settings.subject),
        Space::new().height(12),
        checkbox(demo.settings.outline)
            .label("Show region outline")
            .on_toggle(Message::OutlineToggled)
            .text_size(13),
        Space::new().height(16),
        row![
            button(text("Open image\u{2026}").size(13))
                .on_press(Message::OpenImage)
                .style(button::primary)
                .padding([6, 14]),
            button(text("Demo photo").size(13))
                .on_press(Message::LoadDemoImage)
                .style(button::secondary)
                .padding([6, 14]),
        ]
        .spacing(8),
    ]
    .spacing(0)
    .into()
}

fn surface<'a>(demo: &DemoView<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match demo.preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let label = if demo.loading.is_some() {
                "Loading image\u{2026}"
            } else {
                "Image not ready"
            };
            text(label)
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(muted_color(theme)),
                })
                .into()
        }
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_HEIGHT))
        .padding(4)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface_color(theme))),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn status_line<'a>(demo: &DemoView<'a>) -> Element<'a, Message> {
    if let Some(e) = demo.error {
        return text(e.to_string())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into();
    }

    let status = match (demo.loading, demo.report) {
        (Some(location), _) => format!("Loading {location}"),
        (None, Some(report)) => describe_report(&report),
        (None, None) => String::new(),
    };
    text(status)
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(muted_color(theme)),
        })
        .into()
}

fn describe_report(report: &RenderReport) -> String {
    let mut status = match report.rendered {
        1 => "1 region obscured".to_string(),
        n => format!("{n} regions obscured"),
    };
    if report.clamped > 0 {
        status.push_str(&format!(", {} clamped to the image", report.clamped));
    }
    if report.skipped > 0 {
        status.push_str(&format!(", {} outside the image", report.skipped));
    }
    if report.failed > 0 {
        status.push_str(&format!(", {} failed", report.failed));
    }
    status
}

fn section_title<'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(16).into()
}

fn effect_label(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Blur => "Gaussian blur",
        EffectKind::Motion => "Motion",
        EffectKind::Pixelate => "Pixelate",
    }
}

fn effect_buttons<'a>(selected: EffectKind) -> Element<'a, Message> {
    row(EffectKind::ALL
        .iter()
        .map(|&kind| {
            toggle_button(
                effect_label(kind),
                kind == selected,
                Message::EffectSelected(kind),
            )
        })
        .collect::<Vec<_>>())
    .spacing(6)
    .into()
}

fn subject_buttons<'a>(subjects: &'a [String], selected: &str) -> Element<'a, Message> {
    row(subjects
        .iter()
        .map(|subject| {
            toggle_button(
                subject,
                subject == selected,
                Message::SubjectSelected(subject.clone()),
            )
        })
        .collect::<Vec<_>>())
    .spacing(6)
    .into()
}

fn toggle_button<'a>(label: &'a str, active: bool, on_press: Message) -> Element<'a, Message> {
    let btn = button(text(label).size(13))
        .on_press(on_press)
        .padding([6, 14]);
    if active {
        btn.style(button::primary).into()
    } else {
        btn.style(button::secondary).into()
    }
}

fn intensity_row<'a>(intensity: Intensity) -> Element<'a, Message> {
    row![
        text("Intensity").size(13),
        slider(
            Intensity::MIN.value()..=Intensity::MAX.value(),
            intensity.value(),
            Message::IntensityChanged,
        ),
        text(intensity.to_string()).size(13),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_report() {
        let report = RenderReport {
            rendered: 2,
            ..RenderReport::default()
        };
        assert_eq!(describe_report(&report), "2 regions obscured");

        let report = RenderReport {
            rendered: 1,
            clamped: 1,
            skipped: 1,
            failed: 0,
        };
        assert_eq!(
            describe_report(&report),
            "1 region obscured, 1 clamped to the image, 1 outside the image"
        );
    }

    #[test]
    fn test_effect_labels_match_demo_buttons() {
        let labels: Vec<_> = EffectKind::ALL.iter().map(|&k| effect_label(k)).collect();
        assert_eq!(labels, vec!["Gaussian blur", "Motion", "Pixelate"]);
    }
}
