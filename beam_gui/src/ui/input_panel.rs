//! Input Panel (Left Side)
//!
//! Displays:
//! - Beam properties (label, span)
//! - Load type and magnitude (unit label follows the selected type)
//! - Material grade selection
//! - Calculate button

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use beam_core::loads::LoadKind;
use beam_core::materials::SteelGrade;

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    // Magnitude input with a unit suffix that tracks the load type
    let magnitude_row = row![
        text("Magnitude:").size(11).width(Length::Fixed(80.0)),
        text_input("", &app.load_magnitude)
            .on_input(Message::LoadMagnitudeChanged)
            .width(Length::Fill)
            .padding(4)
            .size(11),
        Space::new().width(6),
        text(app.selected_load_kind.units_label())
            .size(11)
            .color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center);

    let beam_section = column![
        text("Input Parameters").size(14),
        Space::new().height(8),
        labeled_input("Label:", &app.beam_label, Message::BeamLabelChanged),
        labeled_input("Span (m):", &app.span_m, Message::SpanChanged),
    ]
    .spacing(6);

    let load_section = column![
        text("Load").size(14),
        Space::new().height(6),
        text("Type:").size(11),
        pick_list(
            &LoadKind::ALL[..],
            Some(app.selected_load_kind),
            Message::LoadKindSelected
        )
        .width(Length::Fill)
        .text_size(11),
        Space::new().height(4),
        magnitude_row,
    ]
    .spacing(2);

    let material_section = column![
        text("Material").size(14),
        Space::new().height(6),
        text("Grade:").size(11),
        pick_list(
            &SteelGrade::ALL[..],
            Some(app.selected_grade),
            Message::GradeSelected
        )
        .width(Length::Fill)
        .text_size(11),
    ]
    .spacing(2);

    let calculate_button = button(text("Calculate Design").size(12))
        .on_press(Message::Calculate)
        .padding(Padding::from([6, 12]))
        .style(button::primary);

    let content = column![
        beam_section,
        Space::new().height(10),
        load_section,
        Space::new().height(10),
        material_section,
        Space::new().height(15),
        calculate_button,
    ]
    .spacing(2);

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(35))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
